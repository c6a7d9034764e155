use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{
        LearningPath, LearningPathInput, Member, MemberUpdate, NewMemberRecord, Settings,
        SettingsInput, Skill, Task, TaskCreate, TaskUpdate,
    },
};

/// Persistence boundary for members, tasks, learning paths and settings
///
/// Lookups by id fail with `AppError::NotFound` when the row is missing.
/// Listings are ordered by id, which is also the catalog order the
/// recommender sees.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Store: Send + Sync {
    /// Round-trips to the backing store
    async fn ping(&self) -> AppResult<()>;

    async fn list_members(&self) -> AppResult<Vec<Member>>;
    async fn get_member(&self, id: i64) -> AppResult<Member>;
    async fn member_by_email(&self, email: &str) -> AppResult<Option<Member>>;
    /// Fails with `AppError::InvalidInput` when the email is already taken
    async fn create_member(&self, record: NewMemberRecord) -> AppResult<Member>;
    async fn update_member(&self, id: i64, update: MemberUpdate) -> AppResult<Member>;
    /// Appends `skill` unless the member already has one with the same name
    async fn add_member_skill(&self, id: i64, skill: Skill) -> AppResult<Member>;
    async fn delete_member(&self, id: i64) -> AppResult<()>;
    async fn count_members(&self) -> AppResult<i64>;

    async fn list_tasks(&self) -> AppResult<Vec<Task>>;
    async fn get_task(&self, id: i64) -> AppResult<Task>;
    async fn create_task(&self, create: TaskCreate) -> AppResult<Task>;
    async fn update_task(&self, id: i64, update: TaskUpdate) -> AppResult<Task>;
    async fn delete_task(&self, id: i64) -> AppResult<()>;
    /// Tasks whose status is anything but "Completed"
    async fn count_active_tasks(&self) -> AppResult<i64>;

    async fn list_paths(&self) -> AppResult<Vec<LearningPath>>;
    async fn get_path(&self, id: i64) -> AppResult<LearningPath>;
    async fn create_path(&self, input: LearningPathInput) -> AppResult<LearningPath>;
    async fn update_path(&self, id: i64, input: LearningPathInput) -> AppResult<LearningPath>;
    async fn delete_path(&self, id: i64) -> AppResult<()>;

    /// Returns the settings row, creating it with defaults on first access
    async fn get_settings(&self) -> AppResult<Settings>;
    async fn update_settings(&self, input: SettingsInput) -> AppResult<Settings>;
}

pub(crate) fn member_not_found() -> crate::error::AppError {
    crate::error::AppError::NotFound("Member not found".to_string())
}

pub(crate) fn email_taken() -> crate::error::AppError {
    crate::error::AppError::InvalidInput("Email already registered".to_string())
}

pub(crate) fn task_not_found() -> crate::error::AppError {
    crate::error::AppError::NotFound("Task not found".to_string())
}

pub(crate) fn path_not_found() -> crate::error::AppError {
    crate::error::AppError::NotFound("Path not found".to_string())
}

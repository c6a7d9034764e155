use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{email_taken, member_not_found, path_not_found, task_not_found, Store};
use crate::{
    error::AppResult,
    models::{
        LearningPath, LearningPathInput, Member, MemberUpdate, NewMemberRecord, Settings,
        SettingsInput, Skill, Task, TaskCreate, TaskUpdate,
    },
};

/// In-process store used by tests and when no database is configured
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<MemoryStoreInner>,
}

#[derive(Default)]
struct MemoryStoreInner {
    members: BTreeMap<i64, Member>,
    tasks: BTreeMap<i64, Task>,
    paths: BTreeMap<i64, LearningPath>,
    settings: Option<Settings>,
    last_member_id: i64,
    last_task_id: i64,
    last_path_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }

    async fn list_members(&self) -> AppResult<Vec<Member>> {
        let inner = self.inner.read().await;
        Ok(inner.members.values().cloned().collect())
    }

    async fn get_member(&self, id: i64) -> AppResult<Member> {
        let inner = self.inner.read().await;
        inner.members.get(&id).cloned().ok_or_else(member_not_found)
    }

    async fn member_by_email(&self, email: &str) -> AppResult<Option<Member>> {
        let inner = self.inner.read().await;
        Ok(inner.members.values().find(|m| m.email == email).cloned())
    }

    async fn create_member(&self, record: NewMemberRecord) -> AppResult<Member> {
        let mut inner = self.inner.write().await;
        if inner.members.values().any(|m| m.email == record.email) {
            return Err(email_taken());
        }
        inner.last_member_id += 1;
        let member = Member::from_record(inner.last_member_id, record);
        inner.members.insert(member.id, member.clone());
        Ok(member)
    }

    async fn update_member(&self, id: i64, update: MemberUpdate) -> AppResult<Member> {
        let mut inner = self.inner.write().await;
        let member = inner.members.get_mut(&id).ok_or_else(member_not_found)?;
        update.apply(member);
        Ok(member.clone())
    }

    async fn add_member_skill(&self, id: i64, skill: Skill) -> AppResult<Member> {
        let mut inner = self.inner.write().await;
        let member = inner.members.get_mut(&id).ok_or_else(member_not_found)?;
        if !member.has_skill(&skill.name) {
            member.skills.push(skill);
        }
        Ok(member.clone())
    }

    async fn delete_member(&self, id: i64) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        inner.members.remove(&id).ok_or_else(member_not_found)?;
        // Mirror ON DELETE SET NULL.
        for task in inner.tasks.values_mut() {
            if task.assigned_to == Some(id) {
                task.assigned_to = None;
            }
        }
        Ok(())
    }

    async fn count_members(&self) -> AppResult<i64> {
        Ok(self.inner.read().await.members.len() as i64)
    }

    async fn list_tasks(&self) -> AppResult<Vec<Task>> {
        let inner = self.inner.read().await;
        Ok(inner.tasks.values().cloned().collect())
    }

    async fn get_task(&self, id: i64) -> AppResult<Task> {
        let inner = self.inner.read().await;
        inner.tasks.get(&id).cloned().ok_or_else(task_not_found)
    }

    async fn create_task(&self, create: TaskCreate) -> AppResult<Task> {
        let mut inner = self.inner.write().await;
        inner.last_task_id += 1;
        let task = Task::from_create(inner.last_task_id, create);
        inner.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn update_task(&self, id: i64, update: TaskUpdate) -> AppResult<Task> {
        let mut inner = self.inner.write().await;
        let task = inner.tasks.get_mut(&id).ok_or_else(task_not_found)?;
        update.apply(task);
        Ok(task.clone())
    }

    async fn delete_task(&self, id: i64) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        inner.tasks.remove(&id).map(|_| ()).ok_or_else(task_not_found)
    }

    async fn count_active_tasks(&self) -> AppResult<i64> {
        let inner = self.inner.read().await;
        Ok(inner.tasks.values().filter(|t| t.is_active()).count() as i64)
    }

    async fn list_paths(&self) -> AppResult<Vec<LearningPath>> {
        let inner = self.inner.read().await;
        Ok(inner.paths.values().cloned().collect())
    }

    async fn get_path(&self, id: i64) -> AppResult<LearningPath> {
        let inner = self.inner.read().await;
        inner.paths.get(&id).cloned().ok_or_else(path_not_found)
    }

    async fn create_path(&self, input: LearningPathInput) -> AppResult<LearningPath> {
        let mut inner = self.inner.write().await;
        inner.last_path_id += 1;
        let path = LearningPath::from_input(inner.last_path_id, input);
        inner.paths.insert(path.id, path.clone());
        Ok(path)
    }

    async fn update_path(&self, id: i64, input: LearningPathInput) -> AppResult<LearningPath> {
        let mut inner = self.inner.write().await;
        let path = inner.paths.get_mut(&id).ok_or_else(path_not_found)?;
        path.apply(input);
        Ok(path.clone())
    }

    async fn delete_path(&self, id: i64) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        inner.paths.remove(&id).ok_or_else(path_not_found)?;
        for task in inner.tasks.values_mut() {
            if task.path_id == Some(id) {
                task.path_id = None;
            }
        }
        for member in inner.members.values_mut() {
            if member.learning_path_id == Some(id) {
                member.learning_path_id = None;
            }
        }
        Ok(())
    }

    async fn get_settings(&self) -> AppResult<Settings> {
        let mut inner = self.inner.write().await;
        let settings = inner
            .settings
            .get_or_insert_with(|| Settings::from_input(1, SettingsInput::default()));
        Ok(settings.clone())
    }

    async fn update_settings(&self, input: SettingsInput) -> AppResult<Settings> {
        let mut inner = self.inner.write().await;
        let settings = Settings::from_input(1, input);
        inner.settings = Some(settings.clone());
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn record(email: &str) -> NewMemberRecord {
        NewMemberRecord {
            name: "Test User".to_string(),
            email: email.to_string(),
            role: "Developer".to_string(),
            password_hash: "hash".to_string(),
            initials: "TU".to_string(),
        }
    }

    fn skill(name: &str) -> Skill {
        Skill {
            name: name.to_string(),
            proficiency: "Beginner".to_string(),
        }
    }

    #[tokio::test]
    async fn test_ids_increase_per_entity() {
        let store = MemoryStore::new();
        let a = store.create_member(record("a@example.com")).await.unwrap();
        let b = store.create_member(record("b@example.com")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
        assert_eq!(store.count_members().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let store = MemoryStore::new();
        store.create_member(record("a@example.com")).await.unwrap();

        let result = store.create_member(record("a@example.com")).await;
        assert!(matches!(
            result,
            Err(AppError::InvalidInput(msg)) if msg == "Email already registered"
        ));
        assert_eq!(store.count_members().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_member_by_email() {
        let store = MemoryStore::new();
        store.create_member(record("a@example.com")).await.unwrap();
        assert!(store.member_by_email("a@example.com").await.unwrap().is_some());
        assert!(store.member_by_email("z@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_add_skill_is_idempotent_by_name() {
        let store = MemoryStore::new();
        let member = store.create_member(record("a@example.com")).await.unwrap();
        store.add_member_skill(member.id, skill("Rust")).await.unwrap();
        let member = store.add_member_skill(member.id, skill("Rust")).await.unwrap();
        assert_eq!(member.skills.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_member_is_not_found() {
        let store = MemoryStore::new();
        let err = store.get_member(42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(msg) if msg == "Member not found"));
    }

    #[tokio::test]
    async fn test_active_tasks_exclude_completed() {
        let store = MemoryStore::new();
        for status in ["Pending", "In Progress", "Completed"] {
            let create: TaskCreate =
                serde_json::from_value(serde_json::json!({"title": "t", "status": status})).unwrap();
            store.create_task(create).await.unwrap();
        }
        assert_eq!(store.count_active_tasks().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_settings_created_on_first_read() {
        let store = MemoryStore::new();
        let settings = store.get_settings().await.unwrap();
        assert_eq!(settings.theme, "black-blue");
        assert!(settings.bot_enabled);
    }
}

mod analytics;
mod learning_path;
mod member;
mod settings;
mod task;

pub use analytics::{AnalyticsData, ChannelEngagement, InsightItem, NamedValue, PathCompletion};
pub use learning_path::{LearningPath, LearningPathInput};
pub use member::{LoginRequest, Member, MemberUpdate, NewMember, NewMemberRecord, Skill};
pub use settings::{Settings, SettingsInput};
pub use task::{Task, TaskCreate, TaskUpdate, COMPLETED as TASK_COMPLETED};

/// Body returned by delete endpoints
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct StatusMessage {
    pub status: String,
    pub message: String,
}

impl StatusMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }
}

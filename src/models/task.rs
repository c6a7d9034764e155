use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A unit of work, optionally assigned to a member and tied to a learning path
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    pub due_date: Option<DateTime<Utc>>,
    pub skill_focus: String,
    pub assigned_to: Option<i64>,
    pub path_id: Option<i64>,
    #[sqlx(json)]
    pub logs: Vec<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Status value that marks a task as no longer active
pub const COMPLETED: &str = "Completed";

impl Task {
    pub fn from_create(id: i64, create: TaskCreate) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: create.title,
            description: create.description,
            status: create.status,
            priority: create.priority,
            due_date: create.due_date,
            skill_focus: create.skill_focus,
            assigned_to: create.assigned_to,
            path_id: create.path_id,
            logs: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status != COMPLETED
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaskCreate {
    pub title: String,
    pub description: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default = "default_priority")]
    pub priority: String,
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default = "default_skill_focus")]
    pub skill_focus: String,
    pub assigned_to: Option<i64>,
    pub path_id: Option<i64>,
}

fn default_status() -> String {
    "Pending".to_string()
}

fn default_priority() -> String {
    "Medium".to_string()
}

fn default_skill_focus() -> String {
    "General".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub skill_focus: Option<String>,
    pub assigned_to: Option<i64>,
    pub path_id: Option<i64>,
}

impl TaskUpdate {
    pub fn apply(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if self.description.is_some() {
            task.description = self.description;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if self.due_date.is_some() {
            task.due_date = self.due_date;
        }
        if let Some(skill_focus) = self.skill_focus {
            task.skill_focus = skill_focus;
        }
        if self.assigned_to.is_some() {
            task.assigned_to = self.assigned_to;
        }
        if self.path_id.is_some() {
            task.path_id = self.path_id;
        }
        task.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_defaults() {
        let create: TaskCreate = serde_json::from_str(r#"{"title": "Write docs"}"#).unwrap();
        let task = Task::from_create(1, create);
        assert_eq!(task.status, "Pending");
        assert_eq!(task.priority, "Medium");
        assert_eq!(task.skill_focus, "General");
        assert!(task.is_active());
    }

    #[test]
    fn test_update_assigns_and_completes() {
        let create: TaskCreate = serde_json::from_str(r#"{"title": "Review PR"}"#).unwrap();
        let mut task = Task::from_create(1, create);
        TaskUpdate {
            assigned_to: Some(7),
            status: Some(COMPLETED.to_string()),
            ..Default::default()
        }
        .apply(&mut task);
        assert_eq!(task.assigned_to, Some(7));
        assert!(!task.is_active());
        assert_eq!(task.title, "Review PR");
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A curated sequence of modules sharing one set of skill tags
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct LearningPath {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub difficulty: String,
    #[sqlx(json)]
    pub skill_tags: Vec<String>,
    pub estimated_duration: String,
    pub completion_rate: i32,
    /// Loosely structured module records; only `title` is interpreted
    #[sqlx(json)]
    pub modules: Vec<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LearningPath {
    pub fn from_input(id: i64, input: LearningPathInput) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: input.name,
            description: input.description,
            difficulty: input.difficulty,
            skill_tags: input.skill_tags,
            estimated_duration: input.estimated_duration,
            completion_rate: input.completion_rate,
            modules: input.modules,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces every editable field
    pub fn apply(&mut self, input: LearningPathInput) {
        self.name = input.name;
        self.description = input.description;
        self.difficulty = input.difficulty;
        self.skill_tags = input.skill_tags;
        self.estimated_duration = input.estimated_duration;
        self.completion_rate = input.completion_rate;
        self.modules = input.modules;
        self.updated_at = Utc::now();
    }

    /// Titles of modules that carry a string `title`, in order
    pub fn module_titles(&self) -> impl Iterator<Item = &str> + '_ {
        self.modules.iter().filter_map(|module| {
            let title = module.get("title").and_then(serde_json::Value::as_str);
            if title.is_none() {
                tracing::warn!(path_id = self.id, "Skipping module without a title");
            }
            title
        })
    }
}

/// Create/replace payload for a learning path
#[derive(Debug, Clone, Deserialize)]
pub struct LearningPathInput {
    pub name: String,
    pub description: String,
    pub difficulty: String,
    #[serde(default)]
    pub skill_tags: Vec<String>,
    pub estimated_duration: String,
    #[serde(default)]
    pub completion_rate: i32,
    #[serde(default)]
    pub modules: Vec<serde_json::Value>,
}

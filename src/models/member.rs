use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::recommender::SkillProfile;

/// A skill entry on a member profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    #[serde(default = "default_proficiency")]
    pub proficiency: String,
}

fn default_proficiency() -> String {
    "Beginner".to_string()
}

/// A community member
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub avatar: Option<String>,
    pub initials: String,
    /// Never leaves the service
    #[serde(skip)]
    pub password_hash: Option<String>,
    pub participation_score: i32,
    pub learning_path_status: String,
    pub primary_skill: Option<String>,
    pub learning_path_id: Option<i64>,
    #[sqlx(json)]
    pub skills: Vec<Skill>,
    #[sqlx(json)]
    pub interests: Vec<String>,
    pub joined_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// Builds a fresh member with default profile fields
    pub fn from_record(id: i64, record: NewMemberRecord) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: record.name,
            email: record.email,
            role: record.role,
            avatar: None,
            initials: record.initials,
            password_hash: Some(record.password_hash),
            participation_score: 0,
            learning_path_status: "Not Started".to_string(),
            primary_skill: None,
            learning_path_id: None,
            skills: Vec::new(),
            interests: Vec::new(),
            joined_at: now,
            updated_at: now,
        }
    }

    /// Up to two uppercase initials from the name, "U" when blank
    pub fn initials_for(name: &str) -> String {
        let initials: String = name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect();

        if initials.is_empty() {
            "U".to_string()
        } else {
            initials
        }
    }

    /// Skill names in profile order
    pub fn skill_profile(&self) -> SkillProfile {
        self.skills.iter().map(|skill| skill.name.as_str()).collect()
    }

    pub fn has_skill(&self, name: &str) -> bool {
        self.skills.iter().any(|skill| skill.name == name)
    }
}

/// Registration payload
#[derive(Debug, Clone, Deserialize)]
pub struct NewMember {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "Developer".to_string()
}

/// Validated member data ready to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct NewMemberRecord {
    pub name: String,
    pub email: String,
    pub role: String,
    pub password_hash: String,
    pub initials: String,
}

/// Partial member update; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberUpdate {
    pub name: Option<String>,
    pub role: Option<String>,
    pub avatar: Option<String>,
    pub participation_score: Option<i32>,
    pub learning_path_status: Option<String>,
    pub skills: Option<Vec<Skill>>,
    pub interests: Option<Vec<String>>,
}

impl MemberUpdate {
    pub fn apply(self, member: &mut Member) {
        if let Some(name) = self.name {
            member.name = name;
        }
        if let Some(role) = self.role {
            member.role = role;
        }
        if let Some(avatar) = self.avatar {
            member.avatar = Some(avatar);
        }
        if let Some(score) = self.participation_score {
            member.participation_score = score;
        }
        if let Some(status) = self.learning_path_status {
            member.learning_path_status = status;
        }
        if let Some(skills) = self.skills {
            member.skills = skills;
        }
        if let Some(interests) = self.interests {
            member.interests = interests;
        }
        member.updated_at = Utc::now();
    }
}

/// Login credentials; `username` holds the member's email
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(alias = "email")]
    pub username: String,
    pub password: String,
}

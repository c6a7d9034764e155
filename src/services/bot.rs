//! Chat command dispatcher
//!
//! Commands arrive as slash-prefixed strings. Most produce a chat-style reply;
//! `/recommendNext` forwards to the recommender and returns its list as is.

use serde::{Deserialize, Serialize};

use crate::{
    db::Store,
    error::AppResult,
    models::Skill,
    recommender::Recommendation,
    services::recommendations,
};

#[derive(Debug, Clone, Deserialize)]
pub struct BotCommand {
    pub command: String,
    #[serde(default, rename = "memberId", alias = "member_id")]
    pub member_id: Option<i64>,
    #[serde(default)]
    pub skill: Option<String>,
    #[serde(default)]
    pub task: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    RecommendNext,
    AddSkill,
    LogTask,
    AssignTask,
    ViewProfile,
    AdminStats,
}

impl Command {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "/recommendNext" => Some(Self::RecommendNext),
            "/addSkill" => Some(Self::AddSkill),
            "/logTask" => Some(Self::LogTask),
            "/assignTask" => Some(Self::AssignTask),
            "/viewProfile" => Some(Self::ViewProfile),
            "/adminStats" => Some(Self::AdminStats),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum BotResponse {
    Recommendations(Vec<Recommendation>),
    Reply(ChatReply),
    Error { error: String },
    Ack { message: String },
}

impl BotResponse {
    fn error(message: &str) -> Self {
        Self::Error {
            error: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatReply {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<ReplyCard>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<ReplyButton>,
}

impl ChatReply {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            card: None,
            buttons: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReplyCard {
    pub title: String,
    pub theme: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReplyButton {
    pub label: String,
    pub action: ButtonAction,
}

impl ReplyButton {
    fn open_url(label: &str, url: &str) -> Self {
        Self {
            label: label.to_string(),
            action: ButtonAction {
                kind: "open_url".to_string(),
                url: url.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ButtonAction {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

/// Runs one bot command against the store
pub async fn dispatch(
    store: &dyn Store,
    command: BotCommand,
    top_k: usize,
) -> AppResult<BotResponse> {
    let Some(parsed) = Command::parse(&command.command) else {
        return Ok(BotResponse::Ack {
            message: format!("Command {} received", command.command),
        });
    };

    tracing::info!(command = %command.command, member_id = ?command.member_id, "Bot command");

    let response = match parsed {
        Command::RecommendNext => match command.member_id {
            Some(member_id) => BotResponse::Recommendations(
                recommendations::get_recommendations(store, member_id, top_k).await?,
            ),
            None => BotResponse::error("memberId required"),
        },
        Command::AddSkill => match (command.member_id, command.skill) {
            (_, None) => BotResponse::error("skill required"),
            (member_id, Some(skill)) => {
                if let Some(member_id) = member_id {
                    let skill = Skill {
                        name: skill.clone(),
                        proficiency: "Beginner".to_string(),
                    };
                    store.add_member_skill(member_id, skill).await?;
                }
                BotResponse::Reply(ChatReply {
                    card: Some(ReplyCard {
                        title: "Skill Added".to_string(),
                        theme: "modern-inline".to_string(),
                    }),
                    ..ChatReply::text(format!("Skill '{}' added successfully! 🎉", skill))
                })
            }
        },
        Command::LogTask => {
            let task = command.task.unwrap_or_else(|| "task".to_string());
            BotResponse::Reply(ChatReply::text(format!(
                "Task '{}' logged. Keep up the good work! ✅",
                task
            )))
        }
        Command::AssignTask => BotResponse::Reply(ChatReply::text("Task assigned successfully.")),
        Command::ViewProfile => match command.member_id {
            Some(member_id) => {
                let member = store.get_member(member_id).await?;
                let mut buttons = vec![ReplyButton::open_url("View All Paths", "/paths")];
                if let Some(path_id) = member.learning_path_id {
                    buttons.insert(
                        0,
                        ReplyButton::open_url("Continue Path", &format!("/paths/{}", path_id)),
                    );
                }
                BotResponse::Reply(ChatReply {
                    buttons,
                    ..ChatReply::text(format!(
                        "Here is your profile summary:\n{} - {}\nScore: {}",
                        member.name, member.role, member.participation_score
                    ))
                })
            }
            None => BotResponse::error("memberId required"),
        },
        Command::AdminStats => {
            let members = store.count_members().await?;
            let pending = store.count_active_tasks().await?;
            BotResponse::Reply(ChatReply::text(format!(
                "Admin Stats:\n- Active Members: {}\n- Tasks Pending: {}",
                members, pending
            )))
        }
    };

    Ok(response)
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NamedValue {
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathCompletion {
    pub name: String,
    pub completed: i64,
    pub in_progress: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChannelEngagement {
    pub channel: String,
    pub active_members: i64,
    pub messages: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsightItem {
    pub id: i64,
    pub tag: String,
    pub title: String,
    pub description: String,
}

/// Dashboard payload; only the two counts are live
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsData {
    pub total_members: i64,
    pub active_tasks: i64,
    pub avg_completion: String,
    pub engagement: String,
    pub member_growth: Vec<NamedValue>,
    pub skills_distribution: Vec<NamedValue>,
    pub path_completion_stats: Vec<PathCompletion>,
    pub engagement_by_channel: Vec<ChannelEngagement>,
    pub insights_feed: Vec<InsightItem>,
}

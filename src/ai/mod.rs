use serde::{Deserialize, Serialize};

pub mod fallback;
pub mod gemini;
pub mod prompt;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationQuery {
    pub event_type: String,
    pub budget: f64,
    pub guest_count: i64,
    pub location: String,
    pub date: String,
    pub theme: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorSuggestionQuery {
    pub category: String,
    pub budget: f64,
    pub event_type: String,
    pub guest_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRecommendation {
    pub category: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<String>,
    pub description: String,
    pub estimated_cost: i64,
    pub priority: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleTask {
    pub title: String,
    pub description: String,
    pub days_before_event: i64,
    pub category: String,
    pub estimated_duration: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSchedule {
    pub phase: String,
    pub tasks: Vec<ScheduleTask>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetBreakdown {
    pub category: String,
    pub percentage: i64,
    pub estimated_amount: i64,
    pub tips: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiRecommendationResponse {
    pub vendor_recommendations: Vec<VendorRecommendation>,
    pub schedule: Vec<EventSchedule>,
    pub budget_breakdown: Vec<BudgetBreakdown>,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorSuggestions {
    pub suggestions: Vec<String>,
    pub tips: Vec<String>,
}

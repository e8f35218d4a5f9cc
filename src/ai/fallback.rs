use crate::ai::{
    AiRecommendationResponse, BudgetBreakdown, EventSchedule, ScheduleTask, VendorRecommendation,
    VendorSuggestions,
};

fn share(budget: f64, percent: f64) -> i64 {
    (budget * percent).round() as i64
}

/// Deterministic recommendations used whenever the model request or its
/// JSON parse fails: five vendor categories on a fixed percentage split,
/// three planning phases, six budget lines summing to 100%.
pub fn default_recommendations(
    event_type: &str,
    budget: f64,
    guest_count: i64,
) -> AiRecommendationResponse {
    AiRecommendationResponse {
        vendor_recommendations: vec![
            VendorRecommendation {
                category: "venue".to_string(),
                name: "Event Venue".to_string(),
                vendor_id: None,
                description: format!("A suitable venue for {guest_count} guests for your {event_type}"),
                estimated_cost: share(budget, 0.35),
                priority: "essential".to_string(),
                reason: "The foundation of your event experience".to_string(),
            },
            VendorRecommendation {
                category: "catering".to_string(),
                name: "Catering Service".to_string(),
                vendor_id: None,
                description: "Full-service catering with appetizers, main course, and desserts"
                    .to_string(),
                estimated_cost: share(budget, 0.30),
                priority: "essential".to_string(),
                reason: "Quality food is key to guest satisfaction".to_string(),
            },
            VendorRecommendation {
                category: "decoration".to_string(),
                name: "Event Decorator".to_string(),
                vendor_id: None,
                description: "Professional decoration and styling services".to_string(),
                estimated_cost: share(budget, 0.10),
                priority: "recommended".to_string(),
                reason: "Creates the atmosphere and visual impact".to_string(),
            },
            VendorRecommendation {
                category: "photography".to_string(),
                name: "Professional Photographer".to_string(),
                vendor_id: None,
                description: "Event photography and videography services".to_string(),
                estimated_cost: share(budget, 0.10),
                priority: "recommended".to_string(),
                reason: "Captures precious memories".to_string(),
            },
            VendorRecommendation {
                category: "entertainment".to_string(),
                name: "Entertainment".to_string(),
                vendor_id: None,
                description: "Music, DJ, or live entertainment".to_string(),
                estimated_cost: share(budget, 0.10),
                priority: "recommended".to_string(),
                reason: "Keeps guests engaged and entertained".to_string(),
            },
        ],
        schedule: vec![
            EventSchedule {
                phase: "Initial Planning".to_string(),
                tasks: vec![
                    task("Set budget and guest list", "Finalize your budget and create initial guest list", 90, "planning", "2-3 hours"),
                    task("Book venue", "Visit and book your preferred venue", 75, "booking", "1 day"),
                    task("Hire caterer", "Select and book catering service", 60, "booking", "1 day"),
                ],
            },
            EventSchedule {
                phase: "Vendor Coordination".to_string(),
                tasks: vec![
                    task("Book photographer", "Hire professional photographer/videographer", 45, "booking", "2 hours"),
                    task("Arrange decorations", "Finalize decoration theme and book decorator", 40, "booking", "3 hours"),
                    task("Book entertainment", "Arrange music/DJ or live entertainment", 35, "booking", "2 hours"),
                ],
            },
            EventSchedule {
                phase: "Final Preparations".to_string(),
                tasks: vec![
                    task("Final guest count", "Confirm final guest count with caterer", 14, "coordination", "1 hour"),
                    task("Vendor confirmations", "Confirm all vendors and timings", 7, "coordination", "2 hours"),
                    task("Day-before setup", "Coordinate setup with venue and decorators", 1, "setup", "4 hours"),
                ],
            },
        ],
        budget_breakdown: vec![
            breakdown("Venue", 35, budget, "Consider off-peak dates for savings"),
            breakdown("Catering", 30, budget, "Buffet style can be more cost-effective"),
            breakdown("Decoration", 10, budget, "Rent items instead of buying"),
            breakdown("Photography", 10, budget, "Book for specific hours, not full day"),
            breakdown("Entertainment", 10, budget, "Consider local talent for better rates"),
            breakdown("Miscellaneous", 5, budget, "Always keep a contingency fund"),
        ],
        tips: vec![
            "Start planning at least 3 months in advance".to_string(),
            "Get at least 3 quotes for each vendor category".to_string(),
            "Keep 10% of budget as contingency".to_string(),
            "Communicate clearly with all vendors about expectations".to_string(),
            "Create a detailed timeline for the event day".to_string(),
        ],
    }
}

pub fn default_vendor_suggestions(_category: &str) -> VendorSuggestions {
    VendorSuggestions {
        suggestions: vec![
            "Check reviews and ratings".to_string(),
            "Ask for references from previous clients".to_string(),
            "Compare at least 3 different vendors".to_string(),
            "Review their portfolio".to_string(),
            "Confirm availability for your date".to_string(),
        ],
        tips: vec![
            "Book during off-peak season for better rates".to_string(),
            "Bundle services for discounts".to_string(),
            "Negotiate package deals".to_string(),
        ],
    }
}

fn task(title: &str, description: &str, days: i64, category: &str, duration: &str) -> ScheduleTask {
    ScheduleTask {
        title: title.to_string(),
        description: description.to_string(),
        days_before_event: days,
        category: category.to_string(),
        estimated_duration: duration.to_string(),
    }
}

fn breakdown(category: &str, percentage: i64, budget: f64, tips: &str) -> BudgetBreakdown {
    BudgetBreakdown {
        category: category.to_string(),
        percentage,
        estimated_amount: share(budget, percentage as f64 / 100.0),
        tips: tips.to_string(),
    }
}

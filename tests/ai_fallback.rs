use eventmate::ai::fallback::{default_recommendations, default_vendor_suggestions};

#[test]
fn fallback_shape_for_wedding() {
    let rec = default_recommendations("wedding", 200_000.0, 100);

    assert_eq!(rec.vendor_recommendations.len(), 5);
    assert_eq!(rec.schedule.len(), 3);
    assert_eq!(rec.budget_breakdown.len(), 6);
    assert_eq!(rec.tips.len(), 5);

    let total_pct: i64 = rec.budget_breakdown.iter().map(|b| b.percentage).sum();
    assert_eq!(total_pct, 100);
}

#[test]
fn fallback_amounts_follow_percentage_split() {
    let rec = default_recommendations("wedding", 200_000.0, 100);

    let venue = &rec.budget_breakdown[0];
    assert_eq!(venue.category, "Venue");
    assert_eq!(venue.percentage, 35);
    assert_eq!(venue.estimated_amount, 70_000);

    let misc = &rec.budget_breakdown[5];
    assert_eq!(misc.category, "Miscellaneous");
    assert_eq!(misc.estimated_amount, 10_000);

    // Vendor recommendations reuse the same split for their estimates.
    assert_eq!(rec.vendor_recommendations[0].estimated_cost, 70_000);
    assert_eq!(rec.vendor_recommendations[1].estimated_cost, 60_000);
}

#[test]
fn fallback_mentions_event_parameters() {
    let rec = default_recommendations("birthday", 50_000.0, 40);
    let venue = &rec.vendor_recommendations[0];
    assert!(venue.description.contains("40 guests"));
    assert!(venue.description.contains("birthday"));
    assert_eq!(venue.priority, "essential");
    assert!(venue.vendor_id.is_none());
}

#[test]
fn fallback_schedule_phases_are_ordered() {
    let rec = default_recommendations("wedding", 200_000.0, 100);
    let phases: Vec<&str> = rec.schedule.iter().map(|p| p.phase.as_str()).collect();
    assert_eq!(phases, ["Initial Planning", "Vendor Coordination", "Final Preparations"]);
    for phase in &rec.schedule {
        assert_eq!(phase.tasks.len(), 3);
    }
    // Day-before setup is the last task before the event.
    let last = rec.schedule.last().unwrap().tasks.last().unwrap();
    assert_eq!(last.days_before_event, 1);
}

#[test]
fn fallback_serializes_with_camel_case_keys() {
    let rec = default_recommendations("wedding", 200_000.0, 100);
    let json = serde_json::to_value(&rec).unwrap();
    assert!(json.get("vendorRecommendations").is_some());
    assert!(json.get("budgetBreakdown").is_some());
    assert!(json["schedule"][0]["tasks"][0].get("daysBeforeEvent").is_some());
    assert!(json["budgetBreakdown"][0].get("estimatedAmount").is_some());
}

#[test]
fn vendor_suggestions_fallback_shape() {
    let s = default_vendor_suggestions("catering");
    assert_eq!(s.suggestions.len(), 5);
    assert_eq!(s.tips.len(), 3);
}

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::ai::RecommendationQuery;
use crate::domain::vendor::Vendor;

/// Render the vendor roster grouped by category so the model can be told
/// to recommend platform vendors by exact business name.
pub fn format_vendors(vendors: &[Vendor]) -> String {
    if vendors.is_empty() {
        return "No vendors available in the system.".to_string();
    }

    let mut grouped: BTreeMap<String, Vec<&Vendor>> = BTreeMap::new();
    for vendor in vendors {
        let category = serde_json::to_value(vendor.category)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_else(|| "other".to_string());
        grouped.entry(category).or_default().push(vendor);
    }

    let mut out = String::from("AVAILABLE VENDORS IN OUR PLATFORM:\n");
    for (category, list) in grouped {
        let _ = write!(out, "\n{}:\n", category.to_uppercase());
        for vendor in list {
            let price = vendor
                .price_range
                .as_ref()
                .and_then(|range| {
                    let min = range.get("min").and_then(|v| v.as_i64())?;
                    let max = range.get("max").and_then(|v| v.as_i64())?;
                    Some(format!("Rs. {} - Rs. {}", min, max))
                })
                .unwrap_or_else(|| "Contact for pricing".to_string());
            let verified = if vendor.is_verified { "(Verified Vendor)" } else { "" };
            let _ = write!(
                out,
                "  - {} (ID: {})\n    Location: {}\n    Rating: {}/5 ({} reviews)\n    Price Range: {}\n    {}\n",
                vendor.business_name,
                vendor.id,
                vendor.location.as_deref().unwrap_or("Not specified"),
                vendor.rating,
                vendor.review_count,
                price,
                verified,
            );
        }
    }
    out
}

pub fn recommendation_prompt(query: &RecommendationQuery, vendors: &[Vendor]) -> String {
    let vendor_context = if vendors.is_empty() {
        String::new()
    } else {
        format!(
            "\nIMPORTANT: You MUST recommend vendors from the following list of available vendors on our platform. \nOnly recommend vendors that exist in this list. Use their exact business names.\n\n{}\n",
            format_vendors(vendors)
        )
    };
    let theme_line = query
        .theme
        .as_deref()
        .map(|t| format!("Theme: {t}\n"))
        .unwrap_or_default();

    format!(
        r#"You are an expert event planner for EventMate, an Indian event planning platform. Generate comprehensive recommendations for the following event:

Event Type: {event_type}
Budget: Rs. {budget} (Indian Rupees)
Guest Count: {guest_count}
Location: {location}
Date: {date}
{theme_line}
{vendor_context}
Please provide a JSON response with the following structure:
{{
  "vendorRecommendations": [
    {{
      "category": "venue|catering|decoration|photography|entertainment|florist|cake|transport",
      "name": "Exact business name from available vendors list OR general vendor type if no match",
      "vendorId": "ID from the vendors list if recommending a specific vendor, null otherwise",
      "description": "Brief description of what they offer or what to look for",
      "estimatedCost": number (in Indian Rupees),
      "priority": "essential|recommended|optional",
      "reason": "Why this vendor/category is recommended for this event"
    }}
  ],
  "schedule": [
    {{
      "phase": "Planning Phase Name",
      "tasks": [
        {{
          "title": "Task name",
          "description": "Task description",
          "daysBeforeEvent": number,
          "category": "planning|booking|coordination|setup",
          "estimatedDuration": "e.g., 2 hours"
        }}
      ]
    }}
  ],
  "budgetBreakdown": [
    {{
      "category": "Category name",
      "percentage": number (0-100),
      "estimatedAmount": number (in Indian Rupees),
      "tips": "Budget optimization tip"
    }}
  ],
  "tips": ["General planning tips for this event type in India"]
}}

IMPORTANT:
- All costs should be in Indian Rupees (Rs.)
- If vendors are available on the platform, PRIORITIZE recommending them by name
- Ensure the total budget breakdown adds up to 100% and estimated costs align with the provided budget
- Provide at least 5 vendor recommendations, 3 schedule phases with multiple tasks each, and 5 budget categories
- Consider Indian wedding/event customs and preferences"#,
        event_type = query.event_type,
        budget = query.budget,
        guest_count = query.guest_count,
        location = query.location,
        date = query.date,
        theme_line = theme_line,
        vendor_context = vendor_context,
    )
}

pub fn vendor_suggestion_prompt(category: &str, budget: f64, event_type: &str, guest_count: i64) -> String {
    format!(
        r#"As an event planning expert, provide specific vendor selection tips for:
Category: {category}
Budget for this category: Rs. {budget}
Event Type: {event_type}
Guest Count: {guest_count}

Return JSON with:
{{
  "suggestions": ["5 specific things to look for when selecting a {category} vendor"],
  "tips": ["3 cost-saving tips for {category}"]
}}"#
    )
}

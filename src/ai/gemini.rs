use anyhow::{anyhow, Result};
use serde_json::json;

use crate::ai::{
    fallback, prompt, AiRecommendationResponse, RecommendationQuery, VendorSuggestionQuery,
    VendorSuggestions,
};
use crate::domain::vendor::Vendor;

const MODEL: &str = "gemini-2.5-flash";

#[derive(Clone)]
pub struct GeminiClient {
    pub base_url: String,
    pub api_key: String,
    pub timeout_ms: u64,
    pub client: reqwest::Client,
}

impl GeminiClient {
    /// Any request or parse failure degrades to the static defaults; this
    /// endpoint never surfaces a provider error to the caller.
    pub async fn event_recommendations(
        &self,
        query: &RecommendationQuery,
        vendors: &[Vendor],
    ) -> AiRecommendationResponse {
        let prompt = prompt::recommendation_prompt(query, vendors);
        match self.generate_json(&prompt).await {
            Ok(value) => match serde_json::from_value::<AiRecommendationResponse>(value) {
                Ok(parsed) => parsed,
                Err(e) => {
                    tracing::warn!("gemini response shape mismatch, using defaults: {e}");
                    fallback::default_recommendations(&query.event_type, query.budget, query.guest_count)
                }
            },
            Err(e) => {
                tracing::warn!("gemini request failed, using defaults: {e}");
                fallback::default_recommendations(&query.event_type, query.budget, query.guest_count)
            }
        }
    }

    pub async fn vendor_suggestions(&self, query: &VendorSuggestionQuery) -> VendorSuggestions {
        let prompt = prompt::vendor_suggestion_prompt(
            &query.category,
            query.budget,
            &query.event_type,
            query.guest_count,
        );
        match self.generate_json(&prompt).await {
            Ok(value) => match serde_json::from_value::<VendorSuggestions>(value) {
                Ok(parsed) => parsed,
                Err(e) => {
                    tracing::warn!("gemini suggestion shape mismatch, using defaults: {e}");
                    fallback::default_vendor_suggestions(&query.category)
                }
            },
            Err(e) => {
                tracing::warn!("gemini suggestion request failed, using defaults: {e}");
                fallback::default_vendor_suggestions(&query.category)
            }
        }
    }

    async fn generate_json(&self, prompt: &str) -> Result<serde_json::Value> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, MODEL, self.api_key
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "responseMimeType": "application/json" }
        });

        let resp = self
            .client
            .post(url)
            .json(&body)
            .timeout(std::time::Duration::from_millis(self.timeout_ms))
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(anyhow!("gemini request failed: HTTP {}", resp.status().as_u16()));
        }

        let v: serde_json::Value = resp.json().await?;
        let text = v
            .get("candidates")
            .and_then(|c| c.get(0))
            .and_then(|c| c.pointer("/content/parts/0/text"))
            .and_then(|t| t.as_str())
            .ok_or_else(|| anyhow!("empty response from gemini"))?;

        Ok(serde_json::from_str(text)?)
    }
}

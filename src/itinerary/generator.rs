//! Itinerary generator
//!
//! Turns trip parameters and fetched POIs into the planning prompt and runs
//! it through the configured chat-completion provider.

use std::sync::Arc;
use tracing::debug;

use super::{ChatCompletion, Result};
use crate::models::{ItineraryOutcome, PointOfInterest, TripRequest};

/// System message sent with every planning prompt
pub const SYSTEM_PROMPT: &str = "You are a professional trip planner AI.";

/// Service that generates itineraries from trip parameters and POIs
pub struct ItineraryGenerator {
    provider: Arc<dyn ChatCompletion>,
}

impl ItineraryGenerator {
    /// Create a new generator backed by the given provider
    pub fn new(provider: Arc<dyn ChatCompletion>) -> Self {
        Self { provider }
    }

    /// Generate an itinerary for the request.
    ///
    /// A reply that is not valid JSON becomes an
    /// [`ItineraryOutcome::Unparsed`] marker rather than an error; only a
    /// failed completion call itself (network, auth, API) returns `Err`.
    pub async fn generate(
        &self,
        request: &TripRequest,
        pois: &[PointOfInterest],
    ) -> Result<ItineraryOutcome> {
        let prompt = build_prompt(request, pois);
        debug!(
            city = %request.city,
            poi_count = pois.len(),
            "Generating itinerary"
        );

        let reply = self.provider.complete(SYSTEM_PROMPT, &prompt).await?;
        Ok(ItineraryOutcome::from_model_reply(&reply))
    }
}

/// Build the planning prompt.
///
/// User-supplied strings are embedded verbatim; prompt injection is a known
/// limitation of this surface.
#[must_use]
pub fn build_prompt(request: &TripRequest, pois: &[PointOfInterest]) -> String {
    let pois_text = pois
        .iter()
        .map(PointOfInterest::prompt_line)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are a travel planner AI.
City: {city}
Duration: {duration} days
Budget: {budget} INR
Hobby: {hobby}

POIs:
{pois_text}

Tasks:
1. Plan a day-wise itinerary.
2. Suggest budget-friendly stay & food options.
3. Suggest shopping/market options.
4. Add a section 'avoid_expenses' for unnecessary costs.
5. Return JSON strictly like this:
{{
  "city": "...",
  "budget": ...,
  "duration_days": ...,
  "hobby": "...",
  "plan": {{"day_1": {{"places_to_visit": [...], "stay": "...", "food": "...", "shopping": "..."}}}},
  "total_cost": ...,
  "within_budget": true/false,
  "avoid_expenses": ["...", "..."]
}}"#,
        city = request.city,
        duration = request.duration,
        budget = request.budget,
        hobby = request.hobby,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::ChatError;
    use async_trait::async_trait;

    struct CannedProvider {
        reply: String,
    }

    #[async_trait]
    impl ChatCompletion for CannedProvider {
        async fn complete(&self, _system: &str, _user: &str) -> Result<String> {
            Ok(self.reply.clone())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl ChatCompletion for FailingProvider {
        async fn complete(&self, _system: &str, _user: &str) -> Result<String> {
            Err(ChatError::NetworkError("connection refused".to_string()))
        }
    }

    fn sample_request() -> TripRequest {
        TripRequest {
            city: "Jaipur".to_string(),
            budget: 20000,
            duration: 3,
            hobby: "culture".to_string(),
        }
    }

    fn sample_pois() -> Vec<PointOfInterest> {
        vec![
            PointOfInterest::new(
                "Hawa Mahal".to_string(),
                Some(26.9239),
                Some(75.8267),
                "culture".to_string(),
            ),
            PointOfInterest::new("Unknown".to_string(), None, None, "culture".to_string()),
        ]
    }

    #[test]
    fn test_prompt_embeds_parameters_and_pois() {
        let prompt = build_prompt(&sample_request(), &sample_pois());
        assert!(prompt.contains("City: Jaipur"));
        assert!(prompt.contains("Duration: 3 days"));
        assert!(prompt.contains("Budget: 20000 INR"));
        assert!(prompt.contains("Hobby: culture"));
        assert!(prompt.contains("Hawa Mahal (culture)\nUnknown (culture)"));
        assert!(prompt.contains("\"avoid_expenses\": [\"...\", \"...\"]"));
    }

    #[tokio::test]
    async fn test_generate_parses_json_reply() {
        let generator = ItineraryGenerator::new(Arc::new(CannedProvider {
            reply: r#"{"city": "Jaipur", "total_cost": 18000}"#.to_string(),
        }));
        let outcome = generator
            .generate(&sample_request(), &sample_pois())
            .await
            .unwrap();
        assert!(outcome.is_parsed());
    }

    #[tokio::test]
    async fn test_generate_wraps_invalid_reply() {
        let generator = ItineraryGenerator::new(Arc::new(CannedProvider {
            reply: "Sure! Here is your plan: ...".to_string(),
        }));
        let outcome = generator
            .generate(&sample_request(), &sample_pois())
            .await
            .unwrap();
        assert!(!outcome.is_parsed());
    }

    #[tokio::test]
    async fn test_generate_propagates_call_failure() {
        let generator = ItineraryGenerator::new(Arc::new(FailingProvider));
        let result = generator.generate(&sample_request(), &sample_pois()).await;
        assert!(matches!(result, Err(ChatError::NetworkError(_))));
    }
}

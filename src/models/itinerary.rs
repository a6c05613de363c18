//! Itinerary generation outcome

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error marker used when the model's reply is not valid JSON
pub const INVALID_JSON_ERROR: &str = "AI returned invalid JSON";

/// The result of asking the model for an itinerary.
///
/// The two variants make the difference between a usable plan and a
/// degraded one explicit to callers, while the untagged serialization keeps
/// the wire shapes identical to what clients already consume: either the
/// model's JSON verbatim, or `{"error": ..., "raw": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ItineraryOutcome {
    /// The model's reply failed to parse as JSON; `raw` carries the
    /// original text.
    Unparsed { error: String, raw: String },
    /// The model's reply parsed as JSON. No schema validation is applied
    /// beyond that.
    Itinerary(Value),
}

impl ItineraryOutcome {
    /// Parse a model reply into an outcome.
    ///
    /// Any text that is valid JSON counts as an itinerary; everything else
    /// becomes an `Unparsed` marker carrying the reply verbatim.
    #[must_use]
    pub fn from_model_reply(reply: &str) -> Self {
        match serde_json::from_str::<Value>(reply) {
            Ok(value) => Self::Itinerary(value),
            Err(_) => Self::Unparsed {
                error: INVALID_JSON_ERROR.to_string(),
                raw: reply.to_string(),
            },
        }
    }

    /// Whether the model reply parsed as JSON
    #[must_use]
    pub fn is_parsed(&self) -> bool {
        matches!(self, Self::Itinerary(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_json_reply_is_parsed() {
        let reply = r#"{"city": "Jaipur", "within_budget": true}"#;
        let outcome = ItineraryOutcome::from_model_reply(reply);
        assert!(outcome.is_parsed());
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"city": "Jaipur", "within_budget": true})
        );
    }

    #[test]
    fn test_invalid_json_reply_is_wrapped() {
        let outcome = ItineraryOutcome::from_model_reply("not json");
        assert!(!outcome.is_parsed());
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"error": INVALID_JSON_ERROR, "raw": "not json"})
        );
    }

    #[test]
    fn test_unparsed_shape_deserializes_back() {
        let value = json!({"error": INVALID_JSON_ERROR, "raw": "garbage"});
        let outcome: ItineraryOutcome = serde_json::from_value(value).unwrap();
        assert!(matches!(outcome, ItineraryOutcome::Unparsed { .. }));
    }
}

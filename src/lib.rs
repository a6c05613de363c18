//! `TripAI` - AI-assisted city trip planning
//!
//! This library provides the core functionality for point-of-interest lookup,
//! itinerary generation through a chat-completion model, and the HTTP surface
//! that ties them together.

pub mod api;
pub mod config;
pub mod error;
pub mod itinerary;
pub mod models;
pub mod poi;
pub mod web;

// Re-export core types for public API
pub use api::AppState;
pub use config::TripAiConfig;
pub use error::TripAiError;
pub use itinerary::{ChatCompletion, ItineraryGenerator, OpenAiChatClient};
pub use models::{ItineraryOutcome, PointOfInterest, TripRequest};
pub use poi::{OverpassClient, PoiFetchReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

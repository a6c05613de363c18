//! Itinerary generation
//!
//! Builds the planning prompt from trip parameters and fetched POIs,
//! submits it to a chat-completion provider, and parses the reply into an
//! explicit parsed/unparsed outcome.

pub mod error;
pub mod generator;
pub mod openai;

pub use error::{ChatError, Result};
pub use generator::ItineraryGenerator;
pub use openai::{ChatCompletion, OpenAiChatClient};

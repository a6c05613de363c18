//! Data models for trip planning requests and results

pub mod itinerary;
pub mod poi;
pub mod trip;

pub use itinerary::ItineraryOutcome;
pub use poi::PointOfInterest;
pub use trip::TripRequest;

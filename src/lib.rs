//! Pricewatch - e-commerce price tracker with one-shot email alerts

pub mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

// Re-export main types for convenience
pub use application::TrackingLoop;
pub use domain::{PriceReading, TrackedProduct};
pub use infrastructure::marketplace::{FlipkartMarketplace, Marketplace};

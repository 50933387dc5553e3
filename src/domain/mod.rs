//! Domain layer - the product under watch, price readings, and the
//! per-cycle tracking decision

pub mod price;
pub mod product;
pub mod tracker;

pub use price::PriceReading;
pub use product::TrackedProduct;
pub use tracker::{decide, CycleDecision, TrackerOutcome};

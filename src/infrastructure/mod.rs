//! Infrastructure layer - marketplace adapters, notification and persistence

pub mod marketplace;
pub mod notify;

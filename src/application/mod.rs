//! Application layer - the poll/compare/record/alert loop

pub mod tracking_loop;

pub use tracking_loop::{Delay, TokioDelay, TrackingLoop};

//! Ten-year career projections: model-backed with an offline fallback.

pub mod handlers;
pub mod mock;
pub mod prompts;
pub mod simulator;
pub mod templates;

pub use simulator::{CareerSimulator, GeminiProjectionSource};

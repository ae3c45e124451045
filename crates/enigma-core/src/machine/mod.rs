pub mod engine;
pub mod signal;
pub mod state;
pub mod stepping;

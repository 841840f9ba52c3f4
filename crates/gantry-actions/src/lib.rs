pub mod client;
pub mod executor;
pub mod gh;

pub use client::ActionsClient;
pub use executor::{GhExecutor, RealExecutor};
pub use gh::GhError;

mod client;
mod model;
mod session;
mod types;

pub use client::{ChatProvider, GeminiClient};
pub use model::GenerativeModel;
pub use session::ChatSession;
pub use types::*;

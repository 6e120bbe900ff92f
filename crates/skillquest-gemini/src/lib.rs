mod blocking;
mod client;
mod mock;
mod traits;

pub use blocking::BlockingGeminiClient;
pub use client::{GeminiClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use mock::MockGenerator;
pub use traits::{GenerateError, Generator};

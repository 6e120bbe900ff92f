pub mod course;
pub mod error;
pub mod generation;

pub use course::CourseRequest;
pub use error::CourseError;
pub use generation::{GenerationRequest, GenerationResult};

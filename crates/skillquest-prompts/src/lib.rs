pub mod outline;
pub mod system;

use skillquest_core::{CourseRequest, GenerationRequest};

/// Assemble the full instruction pair for a course request.
///
/// Deterministic and side-effect free: the same request always produces
/// the same pair. Field values are interpolated exactly as provided.
pub fn build_request(course: &CourseRequest) -> GenerationRequest {
    let mut system_instruction = String::new();
    system::append_instructions(&mut system_instruction);

    let mut user_instruction = String::new();
    outline::append_instructions(&mut user_instruction, course);

    GenerationRequest {
        system_instruction,
        user_instruction,
    }
}

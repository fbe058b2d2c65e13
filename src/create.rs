//! Create screen backend - prompt, generate, upload
//!
//! Everything the Create page does that isn't drawing pixels lives here.
//!
//! ## External services
//! - **Prompt endpoint** (GET) - returns a random prompt suggestion
//! - **Image endpoint** (POST) - turns a prompt into an image
//! - **Upload endpoint** (POST, multipart) - stores an image and returns a signed URL
//!
//! ## Module Structure
//! - `types.rs`: Draft, UploadResult, LoadingFlags, ImageReference, jobs/outcomes
//! - `pure/`: Pure functions (prompt validation, response parsing, image decoding)
//! - `operations/`: Atomic I/O operations (one HTTP request or file read each)
//! - `pipelines/`: High-level orchestration (resolve + upload, run a job)
//! - `screen.rs`: CreateScreen state, the flags and guards around every button

mod operations;
mod pipelines;
mod pure;
mod screen;
mod types;

// Re-export types
pub use types::{CreateJob, CreateOutcome, Endpoints, ImageReference};

// Re-export operations
pub use operations::build_client;

// Re-export pipelines
pub use pipelines::run_job;

pub use screen::CreateScreen;

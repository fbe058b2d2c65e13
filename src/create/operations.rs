//! Create operations - atomic side effects
//!
//! Each function performs one network request or one file read.

mod client;
mod endpoints;
mod payload;

pub use client::build_client;
pub use endpoints::{download_image, fetch_random_prompt, generate_image, upload_file};
pub use payload::read_local_payload;

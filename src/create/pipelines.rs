//! High-level orchestration for the create screen

mod run_job;
mod upload_image;

pub use run_job::run_job;

pub mod error;
pub mod grader;
pub mod loader;
pub mod output;
pub mod record;
pub mod summary;

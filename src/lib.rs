pub mod analysis;
pub mod filter;
pub mod gradebook;
pub mod grading;
pub mod loader;
pub mod output;
pub mod stats;

// examfeed library
// Exposes the filter/normalizer core for testing and reuse

pub mod cleaner;
pub mod config;
pub mod error;
pub mod feed;
pub mod filter;
pub mod models;
pub mod pipeline;
pub mod utils;

// Re-export commonly used types
pub use cleaner::clean_summary;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use filter::should_keep;
pub use models::ExamEvent;

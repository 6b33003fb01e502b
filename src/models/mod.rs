// Declare modules
pub mod event;

// Re-export public types
pub use event::ExamEvent;

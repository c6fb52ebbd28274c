//! Utility modules for the ArborView GUI.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_memory_mb, get_current_memory_mb};

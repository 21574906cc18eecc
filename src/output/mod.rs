//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Spinner-backed status updates
//! - The interactive stall prompt

pub mod console;
pub mod progress;

pub use console::{
    print_banner, print_debug, print_error, print_info, print_media_results,
    print_non_media_results, print_query_summary, print_run_summary, print_success, print_warning,
};
pub use progress::{ConsoleStallHandler, ConsoleStatusSink};

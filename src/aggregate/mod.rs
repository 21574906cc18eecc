//! Paginated media aggregation.
//!
//! - `paginator`: cursor walk with page sizing and a request budget
//! - `runner`: authentication plus pagination in one call
//! - `sink`: progress and stall-decision seams
//! - `state`: accumulated results and termination reasons

pub mod paginator;
pub mod runner;
pub mod sink;
pub mod state;

pub use paginator::{paginate, PaginatorSettings};
pub use runner::run_aggregation;
pub use sink::{AutoStall, NullStatusSink, StallHandler, StatusSink};
pub use state::{Aggregation, RunState, Termination};

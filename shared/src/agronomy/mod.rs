//! Pure agronomic derived-metric functions
//!
//! Every function here is total: missing or malformed inputs produce a
//! defined "unknown"/"neutral"/"pending" result instead of an error.

mod classify;
mod dashboard;
mod metrics;
mod rules;
mod text;
mod trend;

pub use classify::*;
pub use dashboard::*;
pub use metrics::*;
pub use rules::*;
pub use text::*;
pub use trend::*;

//! Domain models for the Greenfield Advisor garden assistant

mod dashboard;
mod intervention;
mod metrics;
mod plant;
mod recommendation;
mod suitability;
mod trend;
mod weather;

pub use dashboard::*;
pub use intervention::*;
pub use metrics::*;
pub use plant::*;
pub use recommendation::*;
pub use suitability::*;
pub use trend::*;
pub use weather::*;

//! HTTP handlers

mod agronomy;
mod health;
mod intervention;
mod plant;

pub use agronomy::*;
pub use health::*;
pub use intervention::*;
pub use plant::*;

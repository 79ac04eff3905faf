//! Daily and weekly return calculations.

mod returns_calculator;
mod returns_model;

pub use returns_calculator::*;
pub use returns_model::*;

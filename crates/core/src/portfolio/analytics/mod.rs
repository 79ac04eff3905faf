//! Analytics derived from a published snapshot: diversification, alerts,
//! recommendations and performance ranking.
//!
//! All weights come from each holding's declared `percentage`.

mod alerts;
mod analytics_model;
mod diversification;
mod performance;


pub use alerts::*;
pub use analytics_model::*;
pub use diversification::*;
pub use performance::*;

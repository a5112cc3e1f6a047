pub mod engine;
pub mod input;
pub mod result;
pub mod xp_table;

pub use engine::{calculate_for_target, calculate_from_resources};
pub use input::PrayerPlan;
pub use result::CalculationResult;

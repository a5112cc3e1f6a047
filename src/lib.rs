pub mod bones;
pub mod client;
pub mod error;
pub mod hiscore;
pub mod inventory;
pub mod objects;
pub mod prayer;
pub mod recommend;
pub mod session;
pub mod settings;

#[cfg(test)]
mod testdata;

pub use bones::BoneKind;
pub use client::{GameClient, ItemStack, SkillSnapshot, INVENTORY_CONTAINER_ID};
pub use error::CalcError;
pub use hiscore::HiscoreClient;
pub use objects::ObjectTracker;
pub use prayer::{CalculationResult, PrayerPlan};
pub use recommend::BoneRecommendation;
pub use session::PlannerSession;
pub use settings::{PluginSettings, SettingsStore};

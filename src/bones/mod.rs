pub mod kind;
pub mod registry;

pub use kind::BoneKind;
pub use registry::{consolidate, consolidated_kinds, is_bone_item, kind_for_item};

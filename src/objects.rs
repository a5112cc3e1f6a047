use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::settings::{PluginSettings, Rgba, GREEN};

pub const EXPOSED_ALTAR_ID: i32 = 53018;
pub const SHRINE_OF_RALOS_ID: i32 = 52405;
pub const LIBATION_BOWL_ID: i32 = 52799;
/// Second libation bowl model used at some altars.
pub const LIBATION_BOWL_VARIANT_ID: i32 = 53016;

pub const PRAYER_OBJECT_IDS: [i32; 4] = [
    EXPOSED_ALTAR_ID,
    SHRINE_OF_RALOS_ID,
    LIBATION_BOWL_VARIANT_ID,
    LIBATION_BOWL_ID,
];

/// Opaque identity of a spawned scene object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectHandle(pub i64);

/// A tracked prayer training object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerObject {
    pub object_id: i32,
}

impl PrayerObject {
    pub fn name(&self) -> &'static str {
        match self.object_id {
            EXPOSED_ALTAR_ID => "Exposed Altar",
            SHRINE_OF_RALOS_ID => "Shrine of Ralos",
            LIBATION_BOWL_ID | LIBATION_BOWL_VARIANT_ID => "Libation Bowl",
            _ => "Unknown Prayer Object",
        }
    }

    /// Highlight color from the setting that names this object.
    pub fn highlight_color(&self, settings: &PluginSettings) -> Rgba {
        match self.object_id {
            EXPOSED_ALTAR_ID => settings.exposed_altar_color,
            SHRINE_OF_RALOS_ID => settings.shrine_of_ralos_color,
            LIBATION_BOWL_ID | LIBATION_BOWL_VARIANT_ID => settings.libation_bowl_color,
            _ => GREEN,
        }
    }
}

/// Client game states the tracker reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    LoggedIn,
    Loading,
    LoginScreen,
    Hopping,
}

/// Keeps the set of highlightable objects currently in the scene.
#[derive(Debug, Default)]
pub struct ObjectTracker {
    objects: HashMap<ObjectHandle, PrayerObject>,
}

impl ObjectTracker {
    pub fn new() -> Self {
        ObjectTracker::default()
    }

    /// Start tracking a spawned object. Ignores ids that are not prayer
    /// objects and reports whether the object was taken.
    pub fn track(&mut self, handle: ObjectHandle, object_id: i32) -> bool {
        if !PRAYER_OBJECT_IDS.contains(&object_id) {
            return false;
        }
        self.objects.insert(handle, PrayerObject { object_id });
        true
    }

    pub fn untrack(&mut self, handle: ObjectHandle) {
        self.objects.remove(&handle);
    }

    /// Handle a changed-object event: the old instance goes away and the
    /// new one is tracked if it qualifies.
    pub fn replace(&mut self, old: Option<ObjectHandle>, new: Option<(ObjectHandle, i32)>) {
        if let Some(handle) = old {
            self.untrack(handle);
        }
        if let Some((handle, object_id)) = new {
            self.track(handle, object_id);
        }
    }

    /// Scene reloads invalidate every tracked handle.
    pub fn on_game_state(&mut self, state: GameState) {
        match state {
            GameState::Hopping | GameState::LoginScreen | GameState::Loading => self.clear(),
            GameState::LoggedIn => {}
        }
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ObjectHandle, &PrayerObject)> {
        self.objects.iter()
    }
}

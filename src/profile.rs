use std::fs;
use std::path::Path;

use anyhow::Result;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::binding::JoyAxisBinding;
use crate::manager::InputManager;
use crate::slot::JoyAxisSlot;

/// Persisted input settings: the key binding table (in
/// [`save_key_bindings`](InputManager::save_key_bindings) form), the three
/// axis bindings, and the joystick deadzone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct InputProfile {
    pub key_bindings: String,
    pub axis_x: JoyAxisBinding,
    pub axis_y: JoyAxisBinding,
    pub axis_z: JoyAxisBinding,
    pub joystick_deadzone: f32,
}

impl Default for InputProfile {
    fn default() -> Self {
        Self::capture(&InputManager::new())
    }
}

impl InputProfile {
    /// Snapshot a manager's bindings and deadzone.
    pub fn capture(input: &InputManager) -> Self {
        Self {
            key_bindings: input.save_key_bindings(),
            axis_x: input.joy_axis_binding(JoyAxisSlot::X),
            axis_y: input.joy_axis_binding(JoyAxisSlot::Y),
            axis_z: input.joy_axis_binding(JoyAxisSlot::Z),
            joystick_deadzone: input.joystick_deadzone(),
        }
    }

    /// Apply the profile to a manager. Unrecognized binding entries are
    /// skipped by [`load_key_bindings`](InputManager::load_key_bindings).
    pub fn apply(&self, input: &mut InputManager) {
        input.load_key_bindings(&self.key_bindings);
        input.set_joy_axis_binding(JoyAxisSlot::X, self.axis_x);
        input.set_joy_axis_binding(JoyAxisSlot::Y, self.axis_y);
        input.set_joy_axis_binding(JoyAxisSlot::Z, self.axis_z);
        input.set_joystick_deadzone(self.joystick_deadzone);
        debug!("applied input profile");
    }

    /// Load a profile from a JSON file. A missing file yields the defaults.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let mut profile: Self = serde_json::from_str(&content)?;
        profile.normalize();
        Ok(profile)
    }

    /// Save the profile to a JSON file.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn normalize(&mut self) {
        self.joystick_deadzone = self.joystick_deadzone.clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::InputBinding;
    use crate::key::Key;
    use crate::manager::DEFAULT_DEADZONE;
    use crate::slot::InputSlot;

    #[test]
    fn test_default_profile_matches_default_manager() {
        let profile = InputProfile::default();
        assert_eq!(profile.joystick_deadzone, DEFAULT_DEADZONE);
        assert_eq!(profile.axis_x, JoyAxisBinding::new(Some(0), false));
        assert!(profile.key_bindings.starts_with("forward=Up,W;"));
    }

    #[test]
    fn test_capture_apply_transfer() {
        let mut source = InputManager::new();
        source.set_input_binding(
            InputSlot::Camera,
            InputBinding::new(Some(Key::C), Some(Key::Joy(9))),
        );
        source.set_joy_axis_binding(JoyAxisSlot::Z, JoyAxisBinding::new(Some(5), true));
        source.set_joystick_deadzone(0.35);

        let profile = InputProfile::capture(&source);
        let mut target = InputManager::new();
        profile.apply(&mut target);

        for slot in InputSlot::ALL {
            assert_eq!(target.input_binding(slot), source.input_binding(slot));
        }
        assert_eq!(
            target.joy_axis_binding(JoyAxisSlot::Z),
            JoyAxisBinding::new(Some(5), true)
        );
        assert_eq!(target.joystick_deadzone(), 0.35);
    }

    #[test]
    fn test_save_load_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.json");

        let mut profile = InputProfile::default();
        profile.joystick_deadzone = 0.25;
        profile.save_to(&path).unwrap();

        let loaded = InputProfile::load_from(&path).unwrap();
        assert_eq!(loaded, profile);
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = InputProfile::load_from(dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded, InputProfile::default());
    }

    #[test]
    fn test_load_clamps_deadzone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.json");
        fs::write(&path, r#"{"joystickDeadzone": 5.0}"#).unwrap();

        let loaded = InputProfile::load_from(&path).unwrap();
        assert_eq!(loaded.joystick_deadzone, 1.0);
        // Missing fields fall back to defaults.
        assert_eq!(loaded.key_bindings, InputProfile::default().key_bindings);
    }

    #[test]
    fn test_profile_json_field_names() {
        let json = serde_json::to_string_pretty(&InputProfile::default()).unwrap();
        assert!(json.contains("\"keyBindings\""));
        assert!(json.contains("\"axisX\""));
        assert!(json.contains("\"joystickDeadzone\""));
    }
}

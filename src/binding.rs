use std::fmt;

use serde::{Deserialize, Serialize};

use crate::key::Key;
use crate::slot::{InputSlot, JoyAxisSlot};

/// A slot's key bindings: primary and secondary physical keys.
///
/// `None` means the position is unbound. Both positions unbound is a valid
/// state (the slot is simply unreachable from the keyboard).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputBinding {
    pub primary: Option<Key>,
    pub secondary: Option<Key>,
}

impl InputBinding {
    pub fn new(primary: Option<Key>, secondary: Option<Key>) -> Self {
        Self { primary, secondary }
    }

    /// Whether either position is bound to `key`.
    pub fn matches(self, key: Key) -> bool {
        self.primary == Some(key) || self.secondary == Some(key)
    }
}

/// Human-readable form for binding menus, e.g. `"Up Arrow or W"`.
impl fmt::Display for InputBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.primary, self.secondary) {
            (Some(p), Some(s)) => write!(f, "{} or {}", p.label(), s.label()),
            (Some(p), None) => write!(f, "{}", p.label()),
            (None, Some(s)) => write!(f, "{}", s.label()),
            (None, None) => write!(f, "?"),
        }
    }
}

/// A joystick axis slot's binding: physical axis index and inversion flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JoyAxisBinding {
    pub axis: Option<u32>,
    pub invert: bool,
}

impl JoyAxisBinding {
    pub fn new(axis: Option<u32>, invert: bool) -> Self {
        Self { axis, invert }
    }
}

/// Built-in key bindings, indexed by [`InputSlot::index`].
pub(crate) fn default_input_bindings() -> [InputBinding; InputSlot::COUNT] {
    [
        InputBinding::new(Some(Key::Up), Some(Key::W)), // Forward
        InputBinding::new(Some(Key::Down), Some(Key::S)), // Backward
        InputBinding::new(Some(Key::Left), Some(Key::A)), // TurnLeft
        InputBinding::new(Some(Key::Right), Some(Key::D)), // TurnRight
        InputBinding::new(Some(Key::Shift), None),      // Ascend
        InputBinding::new(Some(Key::Control), None),    // Descend
        InputBinding::new(Some(Key::Space), Some(Key::Joy(2))), // Camera
        InputBinding::new(Some(Key::Enter), Some(Key::Joy(1))), // Action
        InputBinding::new(Some(Key::KpAdd), Some(Key::Joy(5))), // ZoomIn
        InputBinding::new(Some(Key::KpSubtract), Some(Key::Joy(4))), // ZoomOut
        InputBinding::new(Some(Key::Tab), Some(Key::Joy(3))), // NextUnit
        InputBinding::new(Some(Key::Kp0), Some(Key::Joy(6))), // Deselect
        InputBinding::new(Some(Key::Home), Some(Key::Joy(7))), // Recall
        InputBinding::new(Some(Key::Pause), None),      // Pause
        InputBinding::new(Some(Key::Escape), None),     // Quit
        InputBinding::new(Some(Key::F1), None),         // Help
    ]
}

/// Built-in axis bindings, indexed by [`JoyAxisSlot::index`].
pub(crate) fn default_joy_axis_bindings() -> [JoyAxisBinding; JoyAxisSlot::COUNT] {
    [
        JoyAxisBinding::new(Some(0), false), // X
        JoyAxisBinding::new(Some(1), false), // Y
        JoyAxisBinding::new(Some(2), false), // Z
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_either_position() {
        let binding = InputBinding::new(Some(Key::Up), Some(Key::W));
        assert!(binding.matches(Key::Up));
        assert!(binding.matches(Key::W));
        assert!(!binding.matches(Key::S));

        let unbound = InputBinding::default();
        assert!(!unbound.matches(Key::Up));
    }

    #[test]
    fn test_display_labels() {
        let both = InputBinding::new(Some(Key::Up), Some(Key::W));
        assert_eq!(both.to_string(), "Up Arrow or W");

        let primary_only = InputBinding::new(Some(Key::W), None);
        assert_eq!(primary_only.to_string(), "W");

        let secondary_only = InputBinding::new(None, Some(Key::Joy(2)));
        assert_eq!(secondary_only.to_string(), "Button 2");

        assert_eq!(InputBinding::default().to_string(), "?");
    }

    #[test]
    fn test_default_tables_cover_every_slot() {
        let bindings = default_input_bindings();
        for slot in InputSlot::ALL {
            assert!(
                bindings[slot.index()].primary.is_some(),
                "{slot:?} has no primary default"
            );
        }
        let axes = default_joy_axis_bindings();
        for slot in JoyAxisSlot::ALL {
            assert_eq!(axes[slot.index()].axis, Some(slot.index() as u32));
            assert!(!axes[slot.index()].invert);
        }
    }

    #[test]
    fn test_joy_axis_binding_json() {
        let binding = JoyAxisBinding::new(Some(1), true);
        let json = serde_json::to_string(&binding).unwrap();
        let back: JoyAxisBinding = serde_json::from_str(&json).unwrap();
        assert_eq!(binding, back);

        // Missing fields fall back to defaults.
        let empty: JoyAxisBinding = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, JoyAxisBinding::default());
    }
}

/// Input state and binding management.
///
/// Consumes [`Event`]s from the platform layer, tracks modifier / tracked-key
/// / mouse / motion state, resolves physical keys to [`InputSlot`]s through
/// the binding table, and serializes the binding table to a delimited string
/// for the settings file.
use glam::{IVec2, UVec2, Vec2, Vec3};
use log::warn;

use crate::binding::{self, InputBinding, JoyAxisBinding};
use crate::event::{Event, MouseButtons};
use crate::key::{Key, Modifiers, TrackedKeys};
use crate::slot::{InputSlot, JoyAxisSlot};

/// Default joystick deadzone.
pub const DEFAULT_DEADZONE: f32 = 0.2;

const DEFAULT_WINDOW_SIZE: UVec2 = UVec2::new(800, 600);

/// Deadzone response: magnitudes at or below `dead` map to zero, the rest of
/// the range rescales linearly so the output still spans [-1, 1].
fn neutral(value: f32, dead: f32) -> f32 {
    if dead >= 1.0 {
        return 0.0;
    }
    if value.abs() <= dead {
        0.0
    } else if value > 0.0 {
        (value - dead) / (1.0 - dead)
    } else {
        (value + dead) / (1.0 - dead)
    }
}

/// Unified input state for one window/joystick pair.
///
/// Owned by the application loop; all methods are synchronous and the struct
/// holds no handles to the event source.
pub struct InputManager {
    /// Modifier state copied from the last key event.
    kmods: Modifiers,
    /// Pressed state of the tracked auxiliary keys.
    tracked_keys: TrackedKeys,
    /// Pressed mouse buttons.
    mouse_buttons: MouseButtons,
    /// Cursor position in interface coordinates.
    mouse_pos: Vec2,
    /// Window size used to convert mouse positions to interface coordinates.
    window_size: UVec2,
    /// Motion vector driven by keyboard and joystick buttons.
    key_motion: Vec3,
    /// Motion vector driven by joystick axes.
    joy_motion: Vec3,
    /// Key bindings indexed by `InputSlot::index()`.
    bindings: [InputBinding; InputSlot::COUNT],
    /// Axis bindings indexed by `JoyAxisSlot::index()`.
    joy_axis_bindings: [JoyAxisBinding; JoyAxisSlot::COUNT],
    joystick_deadzone: f32,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            kmods: Modifiers::empty(),
            tracked_keys: TrackedKeys::empty(),
            mouse_buttons: MouseButtons::empty(),
            mouse_pos: Vec2::ZERO,
            window_size: DEFAULT_WINDOW_SIZE,
            key_motion: Vec3::ZERO,
            joy_motion: Vec3::ZERO,
            bindings: binding::default_input_bindings(),
            joy_axis_bindings: binding::default_joy_axis_bindings(),
            joystick_deadzone: DEFAULT_DEADZONE,
        }
    }

    /// Process one input event, updating the relevant state.
    pub fn event_process(&mut self, event: &Event) {
        match *event {
            Event::KeyDown { key, mods } => {
                self.kmods = mods;
                if let Some(bit) = key.tracked_bit() {
                    self.tracked_keys.insert(bit);
                }
                self.key_transition(key.virtualized(), true);
            }
            Event::KeyUp { key, mods } => {
                self.kmods = mods;
                if let Some(bit) = key.tracked_bit() {
                    self.tracked_keys.remove(bit);
                }
                self.key_transition(key.virtualized(), false);
            }
            Event::MouseButtonDown { button } => self.mouse_buttons.insert(button),
            Event::MouseButtonUp { button } => self.mouse_buttons.remove(button),
            Event::MouseMove { pos } => self.mouse_move(pos),
            Event::JoyButtonDown { button } => self.key_transition(Key::Joy(button), true),
            Event::JoyButtonUp { button } => self.key_transition(Key::Joy(button), false),
            Event::JoyAxis { axis, value } => self.apply_joy_axis(axis, value),
        }
    }

    fn key_transition(&mut self, key: Key, pressed: bool) {
        let Some(slot) = self.find_binding(key) else {
            return;
        };
        match slot {
            InputSlot::Forward => self.key_motion.y = if pressed { 1.0 } else { 0.0 },
            InputSlot::Backward => self.key_motion.y = if pressed { -1.0 } else { 0.0 },
            InputSlot::TurnLeft => self.key_motion.x = if pressed { -1.0 } else { 0.0 },
            InputSlot::TurnRight => self.key_motion.x = if pressed { 1.0 } else { 0.0 },
            InputSlot::Ascend => self.key_motion.z = if pressed { 1.0 } else { 0.0 },
            InputSlot::Descend => self.key_motion.z = if pressed { -1.0 } else { 0.0 },
            _ => {}
        }
    }

    fn apply_joy_axis(&mut self, axis: u32, value: i16) {
        let raw = f32::from(value) / 32768.0;
        for slot in JoyAxisSlot::ALL {
            let binding = self.joy_axis_bindings[slot.index()];
            if binding.axis != Some(axis) {
                continue;
            }
            let mut scaled = neutral(raw, self.joystick_deadzone);
            if binding.invert {
                scaled = -scaled;
            }
            match slot {
                JoyAxisSlot::X => self.joy_motion.x = scaled,
                JoyAxisSlot::Y => self.joy_motion.y = scaled,
                JoyAxisSlot::Z => self.joy_motion.z = scaled,
            }
        }
    }

    /// Set the cursor position from window pixel coordinates.
    pub fn mouse_move(&mut self, pos: IVec2) {
        self.mouse_pos = Vec2::new(
            pos.x as f32 / self.window_size.x as f32,
            1.0 - pos.y as f32 / self.window_size.y as f32,
        );
    }

    /// Update the window size used for mouse coordinate conversion.
    pub fn set_window_size(&mut self, size: UVec2) {
        self.window_size = size;
    }

    /// Clear key-related state (modifiers, tracked keys, motion vectors).
    /// Bindings and mouse state are untouched. Called on focus loss so held
    /// keys don't stick.
    pub fn reset_key_states(&mut self) {
        self.kmods = Modifiers::empty();
        self.tracked_keys = TrackedKeys::empty();
        self.key_motion = Vec3::ZERO;
        self.joy_motion = Vec3::ZERO;
    }

    /// Modifier state from the last key event.
    pub fn kmods(&self) -> Modifiers {
        self.kmods
    }

    /// Whether any of the given modifier bits is active.
    pub fn kmod_state(&self, mods: Modifiers) -> bool {
        self.kmods.intersects(mods)
    }

    /// Whether a tracked auxiliary key is currently pressed.
    pub fn tracked_key_state(&self, key: TrackedKeys) -> bool {
        self.tracked_keys.intersects(key)
    }

    /// Current mouse button set.
    pub fn mouse_buttons(&self) -> MouseButtons {
        self.mouse_buttons
    }

    /// Whether the mouse button with the given bit index is pressed.
    pub fn mouse_button_state(&self, index: u32) -> bool {
        index < 8 && self.mouse_buttons.bits() & (1 << index) != 0
    }

    /// Cursor position in interface coordinates.
    pub fn mouse_pos(&self) -> Vec2 {
        self.mouse_pos
    }

    /// Motion vector driven by keyboard and joystick buttons.
    pub fn key_motion(&self) -> Vec3 {
        self.key_motion
    }

    /// Motion vector driven by joystick axes.
    pub fn joy_motion(&self) -> Vec3 {
        self.joy_motion
    }

    /// Combined motion vector, componentwise clamped to [-1, 1]. Gameplay
    /// code polls this each frame.
    pub fn motion(&self) -> Vec3 {
        (self.key_motion + self.joy_motion).clamp(Vec3::NEG_ONE, Vec3::ONE)
    }

    /// Restore the built-in key and axis bindings. The deadzone is untouched.
    pub fn set_default_input_bindings(&mut self) {
        self.bindings = binding::default_input_bindings();
        self.joy_axis_bindings = binding::default_joy_axis_bindings();
    }

    pub fn input_binding(&self, slot: InputSlot) -> InputBinding {
        self.bindings[slot.index()]
    }

    pub fn set_input_binding(&mut self, slot: InputSlot, binding: InputBinding) {
        self.bindings[slot.index()] = binding;
    }

    pub fn joy_axis_binding(&self, slot: JoyAxisSlot) -> JoyAxisBinding {
        self.joy_axis_bindings[slot.index()]
    }

    pub fn set_joy_axis_binding(&mut self, slot: JoyAxisSlot, binding: JoyAxisBinding) {
        self.joy_axis_bindings[slot.index()] = binding;
    }

    pub fn joystick_deadzone(&self) -> f32 {
        self.joystick_deadzone
    }

    /// Set the joystick deadzone. The value is stored as given; range
    /// clamping happens at the profile boundary.
    pub fn set_joystick_deadzone(&mut self, dead: f32) {
        self.joystick_deadzone = dead;
    }

    /// First slot (in declaration order) whose primary or secondary binding
    /// is `key`, or `None` if the key is unbound.
    pub fn find_binding(&self, key: Key) -> Option<InputSlot> {
        InputSlot::ALL
            .into_iter()
            .find(|slot| self.bindings[slot.index()].matches(key))
    }

    /// Human-readable label for a slot's binding, e.g. `"Up Arrow or W"`.
    pub fn keys_string(&self, slot: InputSlot) -> String {
        self.input_binding(slot).to_string()
    }

    /// Serialize the binding table as `<slot-id>=<primary>,<secondary>;`
    /// entries, with the empty string for an unbound position.
    pub fn save_key_bindings(&self) -> String {
        let mut out = String::new();
        for slot in InputSlot::ALL {
            let binding = self.bindings[slot.index()];
            let primary = binding.primary.map(Key::name).unwrap_or_default();
            let secondary = binding.secondary.map(Key::name).unwrap_or_default();
            out.push_str(&format!("{}={},{};", slot.id(), primary, secondary));
        }
        out
    }

    /// Parse a [`save_key_bindings`](Self::save_key_bindings) string and
    /// apply each recognized entry. Entries naming unknown slots or
    /// unparseable keys are skipped with a warning; a skipped entry leaves
    /// its slot untouched.
    pub fn load_key_bindings(&mut self, text: &str) {
        for entry in text.split(';') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            let Some((id, keys)) = entry.split_once('=') else {
                warn!("ignoring malformed key binding entry {entry:?}");
                continue;
            };
            let Some(slot) = InputSlot::from_id(id) else {
                warn!("ignoring key binding for unknown slot {id:?}");
                continue;
            };
            let Some(binding) = parse_binding(keys) else {
                warn!("ignoring unparseable key binding for {id}: {keys:?}");
                continue;
            };
            self.bindings[slot.index()] = binding;
        }
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the `<primary>,<secondary>` part of a binding entry. Returns `None`
/// if either position names an unknown key, so a bad entry is rejected whole.
fn parse_binding(keys: &str) -> Option<InputBinding> {
    let (primary, secondary) = keys.split_once(',')?;
    Some(InputBinding::new(
        parse_position(primary)?,
        parse_position(secondary)?,
    ))
}

/// Empty means unbound; anything else must be a known key name.
fn parse_position(name: &str) -> Option<Option<Key>> {
    if name.is_empty() {
        return Some(None);
    }
    Key::from_name(name).map(Some)
}

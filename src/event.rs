use bitflags::bitflags;
use glam::IVec2;

use crate::key::{Key, Modifiers};

bitflags! {
    /// Mouse button state bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MouseButtons: u8 {
        const LEFT = 1 << 0;
        const MIDDLE = 1 << 1;
        const RIGHT = 1 << 2;
    }
}

/// Input events emitted by the platform layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A key went down, with the modifier state at the time of the event.
    KeyDown { key: Key, mods: Modifiers },
    /// A key went up, with the modifier state at the time of the event.
    KeyUp { key: Key, mods: Modifiers },
    /// A mouse button went down.
    MouseButtonDown { button: MouseButtons },
    /// A mouse button went up.
    MouseButtonUp { button: MouseButtons },
    /// Absolute cursor position in window pixels.
    MouseMove { pos: IVec2 },
    /// A joystick button went down.
    JoyButtonDown { button: u8 },
    /// A joystick button went up.
    JoyButtonUp { button: u8 },
    /// Raw joystick axis value in the signed 16-bit range.
    JoyAxis { axis: u32, value: i16 },
}

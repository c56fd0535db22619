use bitflags::bitflags;

/// Physical key code space used by bindings and events.
///
/// Covers keyboard keys, the virtual modifier keys (`Shift`, `Control`,
/// `Alt`, matched when either physical side is held), and virtual joystick
/// buttons (`Joy(n)`). Every key has a stable textual name used by the
/// binding persistence format; see [`Key::name`] and [`Key::from_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Apostrophe,
    Comma,
    Minus,
    Period,
    Slash,
    Key0,
    Key1,
    Key2,
    Key3,
    Key4,
    Key5,
    Key6,
    Key7,
    Key8,
    Key9,
    Semicolon,
    Equal,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    LeftBracket,
    Backslash,
    RightBracket,
    GraveAccent,
    Escape,
    Enter,
    Tab,
    Backspace,
    Insert,
    Delete,
    Right,
    Left,
    Down,
    Up,
    PageUp,
    PageDown,
    Home,
    End,
    CapsLock,
    ScrollLock,
    NumLock,
    PrintScreen,
    Pause,
    Menu,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    Kp0,
    Kp1,
    Kp2,
    Kp3,
    Kp4,
    Kp5,
    Kp6,
    Kp7,
    Kp8,
    Kp9,
    KpDecimal,
    KpDivide,
    KpMultiply,
    KpSubtract,
    KpAdd,
    KpEnter,
    LeftShift,
    LeftControl,
    LeftAlt,
    LeftSuper,
    RightShift,
    RightControl,
    RightAlt,
    RightSuper,
    /// Either shift key (virtual, only valid in bindings).
    Shift,
    /// Either control key (virtual, only valid in bindings).
    Control,
    /// Either alt key (virtual, only valid in bindings).
    Alt,
    /// Joystick button by index (virtual).
    Joy(u8),
}

bitflags! {
    /// Keyboard modifier state, one bit per physical modifier key.
    ///
    /// `SHIFT`/`CTRL`/`ALT` combine both sides for "either side held" tests.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        const LEFT_SHIFT = 1 << 0;
        const RIGHT_SHIFT = 1 << 1;
        const LEFT_CTRL = 1 << 2;
        const RIGHT_CTRL = 1 << 3;
        const LEFT_ALT = 1 << 4;
        const RIGHT_ALT = 1 << 5;
        const SHIFT = Self::LEFT_SHIFT.bits() | Self::RIGHT_SHIFT.bits();
        const CTRL = Self::LEFT_CTRL.bits() | Self::RIGHT_CTRL.bits();
        const ALT = Self::LEFT_ALT.bits() | Self::RIGHT_ALT.bits();
    }
}

bitflags! {
    /// Auxiliary keys whose pressed state is tracked outside the slot system
    /// (numpad directions, numpad plus/minus, page up/down).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TrackedKeys: u8 {
        const NUM_UP = 1 << 0;
        const NUM_DOWN = 1 << 1;
        const NUM_LEFT = 1 << 2;
        const NUM_RIGHT = 1 << 3;
        const NUM_PLUS = 1 << 4;
        const NUM_MINUS = 1 << 5;
        const PAGE_UP = 1 << 6;
        const PAGE_DOWN = 1 << 7;
    }
}

impl Key {
    /// All concrete key variants (joystick buttons excluded; they are
    /// parametric).
    pub const ALL: [Key; 107] = [
        Key::Space,
        Key::Apostrophe,
        Key::Comma,
        Key::Minus,
        Key::Period,
        Key::Slash,
        Key::Key0,
        Key::Key1,
        Key::Key2,
        Key::Key3,
        Key::Key4,
        Key::Key5,
        Key::Key6,
        Key::Key7,
        Key::Key8,
        Key::Key9,
        Key::Semicolon,
        Key::Equal,
        Key::A,
        Key::B,
        Key::C,
        Key::D,
        Key::E,
        Key::F,
        Key::G,
        Key::H,
        Key::I,
        Key::J,
        Key::K,
        Key::L,
        Key::M,
        Key::N,
        Key::O,
        Key::P,
        Key::Q,
        Key::R,
        Key::S,
        Key::T,
        Key::U,
        Key::V,
        Key::W,
        Key::X,
        Key::Y,
        Key::Z,
        Key::LeftBracket,
        Key::Backslash,
        Key::RightBracket,
        Key::GraveAccent,
        Key::Escape,
        Key::Enter,
        Key::Tab,
        Key::Backspace,
        Key::Insert,
        Key::Delete,
        Key::Right,
        Key::Left,
        Key::Down,
        Key::Up,
        Key::PageUp,
        Key::PageDown,
        Key::Home,
        Key::End,
        Key::CapsLock,
        Key::ScrollLock,
        Key::NumLock,
        Key::PrintScreen,
        Key::Pause,
        Key::Menu,
        Key::F1,
        Key::F2,
        Key::F3,
        Key::F4,
        Key::F5,
        Key::F6,
        Key::F7,
        Key::F8,
        Key::F9,
        Key::F10,
        Key::F11,
        Key::F12,
        Key::Kp0,
        Key::Kp1,
        Key::Kp2,
        Key::Kp3,
        Key::Kp4,
        Key::Kp5,
        Key::Kp6,
        Key::Kp7,
        Key::Kp8,
        Key::Kp9,
        Key::KpDecimal,
        Key::KpDivide,
        Key::KpMultiply,
        Key::KpSubtract,
        Key::KpAdd,
        Key::KpEnter,
        Key::LeftShift,
        Key::LeftControl,
        Key::LeftAlt,
        Key::LeftSuper,
        Key::RightShift,
        Key::RightControl,
        Key::RightAlt,
        Key::RightSuper,
        Key::Shift,
        Key::Control,
        Key::Alt,
    ];

    /// Stable textual name, used by the binding persistence format.
    pub fn name(self) -> String {
        match self {
            Key::Joy(n) => return format!("Joy{n}"),
            Key::Space => "Space",
            Key::Apostrophe => "Apostrophe",
            Key::Comma => "Comma",
            Key::Minus => "Minus",
            Key::Period => "Period",
            Key::Slash => "Slash",
            Key::Key0 => "Key0",
            Key::Key1 => "Key1",
            Key::Key2 => "Key2",
            Key::Key3 => "Key3",
            Key::Key4 => "Key4",
            Key::Key5 => "Key5",
            Key::Key6 => "Key6",
            Key::Key7 => "Key7",
            Key::Key8 => "Key8",
            Key::Key9 => "Key9",
            Key::Semicolon => "Semicolon",
            Key::Equal => "Equal",
            Key::A => "A",
            Key::B => "B",
            Key::C => "C",
            Key::D => "D",
            Key::E => "E",
            Key::F => "F",
            Key::G => "G",
            Key::H => "H",
            Key::I => "I",
            Key::J => "J",
            Key::K => "K",
            Key::L => "L",
            Key::M => "M",
            Key::N => "N",
            Key::O => "O",
            Key::P => "P",
            Key::Q => "Q",
            Key::R => "R",
            Key::S => "S",
            Key::T => "T",
            Key::U => "U",
            Key::V => "V",
            Key::W => "W",
            Key::X => "X",
            Key::Y => "Y",
            Key::Z => "Z",
            Key::LeftBracket => "LeftBracket",
            Key::Backslash => "Backslash",
            Key::RightBracket => "RightBracket",
            Key::GraveAccent => "GraveAccent",
            Key::Escape => "Escape",
            Key::Enter => "Enter",
            Key::Tab => "Tab",
            Key::Backspace => "Backspace",
            Key::Insert => "Insert",
            Key::Delete => "Delete",
            Key::Right => "Right",
            Key::Left => "Left",
            Key::Down => "Down",
            Key::Up => "Up",
            Key::PageUp => "PageUp",
            Key::PageDown => "PageDown",
            Key::Home => "Home",
            Key::End => "End",
            Key::CapsLock => "CapsLock",
            Key::ScrollLock => "ScrollLock",
            Key::NumLock => "NumLock",
            Key::PrintScreen => "PrintScreen",
            Key::Pause => "Pause",
            Key::Menu => "Menu",
            Key::F1 => "F1",
            Key::F2 => "F2",
            Key::F3 => "F3",
            Key::F4 => "F4",
            Key::F5 => "F5",
            Key::F6 => "F6",
            Key::F7 => "F7",
            Key::F8 => "F8",
            Key::F9 => "F9",
            Key::F10 => "F10",
            Key::F11 => "F11",
            Key::F12 => "F12",
            Key::Kp0 => "Kp0",
            Key::Kp1 => "Kp1",
            Key::Kp2 => "Kp2",
            Key::Kp3 => "Kp3",
            Key::Kp4 => "Kp4",
            Key::Kp5 => "Kp5",
            Key::Kp6 => "Kp6",
            Key::Kp7 => "Kp7",
            Key::Kp8 => "Kp8",
            Key::Kp9 => "Kp9",
            Key::KpDecimal => "KpDecimal",
            Key::KpDivide => "KpDivide",
            Key::KpMultiply => "KpMultiply",
            Key::KpSubtract => "KpSubtract",
            Key::KpAdd => "KpAdd",
            Key::KpEnter => "KpEnter",
            Key::LeftShift => "LeftShift",
            Key::LeftControl => "LeftControl",
            Key::LeftAlt => "LeftAlt",
            Key::LeftSuper => "LeftSuper",
            Key::RightShift => "RightShift",
            Key::RightControl => "RightControl",
            Key::RightAlt => "RightAlt",
            Key::RightSuper => "RightSuper",
            Key::Shift => "Shift",
            Key::Control => "Control",
            Key::Alt => "Alt",
        }
        .to_string()
    }

    /// Parse a key from its stable textual name.
    pub fn from_name(s: &str) -> Option<Key> {
        match s {
            "Space" => Some(Key::Space),
            "Apostrophe" => Some(Key::Apostrophe),
            "Comma" => Some(Key::Comma),
            "Minus" => Some(Key::Minus),
            "Period" => Some(Key::Period),
            "Slash" => Some(Key::Slash),
            "Key0" => Some(Key::Key0),
            "Key1" => Some(Key::Key1),
            "Key2" => Some(Key::Key2),
            "Key3" => Some(Key::Key3),
            "Key4" => Some(Key::Key4),
            "Key5" => Some(Key::Key5),
            "Key6" => Some(Key::Key6),
            "Key7" => Some(Key::Key7),
            "Key8" => Some(Key::Key8),
            "Key9" => Some(Key::Key9),
            "Semicolon" => Some(Key::Semicolon),
            "Equal" => Some(Key::Equal),
            "A" => Some(Key::A),
            "B" => Some(Key::B),
            "C" => Some(Key::C),
            "D" => Some(Key::D),
            "E" => Some(Key::E),
            "F" => Some(Key::F),
            "G" => Some(Key::G),
            "H" => Some(Key::H),
            "I" => Some(Key::I),
            "J" => Some(Key::J),
            "K" => Some(Key::K),
            "L" => Some(Key::L),
            "M" => Some(Key::M),
            "N" => Some(Key::N),
            "O" => Some(Key::O),
            "P" => Some(Key::P),
            "Q" => Some(Key::Q),
            "R" => Some(Key::R),
            "S" => Some(Key::S),
            "T" => Some(Key::T),
            "U" => Some(Key::U),
            "V" => Some(Key::V),
            "W" => Some(Key::W),
            "X" => Some(Key::X),
            "Y" => Some(Key::Y),
            "Z" => Some(Key::Z),
            "LeftBracket" => Some(Key::LeftBracket),
            "Backslash" => Some(Key::Backslash),
            "RightBracket" => Some(Key::RightBracket),
            "GraveAccent" => Some(Key::GraveAccent),
            "Escape" => Some(Key::Escape),
            "Enter" => Some(Key::Enter),
            "Tab" => Some(Key::Tab),
            "Backspace" => Some(Key::Backspace),
            "Insert" => Some(Key::Insert),
            "Delete" => Some(Key::Delete),
            "Right" => Some(Key::Right),
            "Left" => Some(Key::Left),
            "Down" => Some(Key::Down),
            "Up" => Some(Key::Up),
            "PageUp" => Some(Key::PageUp),
            "PageDown" => Some(Key::PageDown),
            "Home" => Some(Key::Home),
            "End" => Some(Key::End),
            "CapsLock" => Some(Key::CapsLock),
            "ScrollLock" => Some(Key::ScrollLock),
            "NumLock" => Some(Key::NumLock),
            "PrintScreen" => Some(Key::PrintScreen),
            "Pause" => Some(Key::Pause),
            "Menu" => Some(Key::Menu),
            "F1" => Some(Key::F1),
            "F2" => Some(Key::F2),
            "F3" => Some(Key::F3),
            "F4" => Some(Key::F4),
            "F5" => Some(Key::F5),
            "F6" => Some(Key::F6),
            "F7" => Some(Key::F7),
            "F8" => Some(Key::F8),
            "F9" => Some(Key::F9),
            "F10" => Some(Key::F10),
            "F11" => Some(Key::F11),
            "F12" => Some(Key::F12),
            "Kp0" => Some(Key::Kp0),
            "Kp1" => Some(Key::Kp1),
            "Kp2" => Some(Key::Kp2),
            "Kp3" => Some(Key::Kp3),
            "Kp4" => Some(Key::Kp4),
            "Kp5" => Some(Key::Kp5),
            "Kp6" => Some(Key::Kp6),
            "Kp7" => Some(Key::Kp7),
            "Kp8" => Some(Key::Kp8),
            "Kp9" => Some(Key::Kp9),
            "KpDecimal" => Some(Key::KpDecimal),
            "KpDivide" => Some(Key::KpDivide),
            "KpMultiply" => Some(Key::KpMultiply),
            "KpSubtract" => Some(Key::KpSubtract),
            "KpAdd" => Some(Key::KpAdd),
            "KpEnter" => Some(Key::KpEnter),
            "LeftShift" => Some(Key::LeftShift),
            "LeftControl" => Some(Key::LeftControl),
            "LeftAlt" => Some(Key::LeftAlt),
            "LeftSuper" => Some(Key::LeftSuper),
            "RightShift" => Some(Key::RightShift),
            "RightControl" => Some(Key::RightControl),
            "RightAlt" => Some(Key::RightAlt),
            "RightSuper" => Some(Key::RightSuper),
            "Shift" => Some(Key::Shift),
            "Control" => Some(Key::Control),
            "Alt" => Some(Key::Alt),
            _ => s.strip_prefix("Joy")?.parse().ok().map(Key::Joy),
        }
    }

    /// Human-readable label for on-screen display.
    pub fn label(self) -> String {
        match self {
            Key::Up => "Up Arrow".to_string(),
            Key::Down => "Down Arrow".to_string(),
            Key::Left => "Left Arrow".to_string(),
            Key::Right => "Right Arrow".to_string(),
            Key::PageUp => "Page Up".to_string(),
            Key::PageDown => "Page Down".to_string(),
            Key::CapsLock => "Caps Lock".to_string(),
            Key::ScrollLock => "Scroll Lock".to_string(),
            Key::NumLock => "Num Lock".to_string(),
            Key::PrintScreen => "Print Screen".to_string(),
            Key::Kp0 => "Num 0".to_string(),
            Key::Kp1 => "Num 1".to_string(),
            Key::Kp2 => "Num 2".to_string(),
            Key::Kp3 => "Num 3".to_string(),
            Key::Kp4 => "Num 4".to_string(),
            Key::Kp5 => "Num 5".to_string(),
            Key::Kp6 => "Num 6".to_string(),
            Key::Kp7 => "Num 7".to_string(),
            Key::Kp8 => "Num 8".to_string(),
            Key::Kp9 => "Num 9".to_string(),
            Key::KpDecimal => "Num .".to_string(),
            Key::KpDivide => "Num /".to_string(),
            Key::KpMultiply => "Num *".to_string(),
            Key::KpSubtract => "Num -".to_string(),
            Key::KpAdd => "Num +".to_string(),
            Key::KpEnter => "Num Enter".to_string(),
            Key::LeftShift => "Left Shift".to_string(),
            Key::LeftControl => "Left Ctrl".to_string(),
            Key::LeftAlt => "Left Alt".to_string(),
            Key::LeftSuper => "Left Super".to_string(),
            Key::RightShift => "Right Shift".to_string(),
            Key::RightControl => "Right Ctrl".to_string(),
            Key::RightAlt => "Right Alt".to_string(),
            Key::RightSuper => "Right Super".to_string(),
            Key::GraveAccent => "Grave".to_string(),
            Key::Control => "Ctrl".to_string(),
            Key::Joy(n) => format!("Button {n}"),
            _ => self.name(),
        }
    }

    /// Fold left/right modifier keys into their virtual composite so binding
    /// lookups match either side.
    pub fn virtualized(self) -> Key {
        match self {
            Key::LeftShift | Key::RightShift => Key::Shift,
            Key::LeftControl | Key::RightControl => Key::Control,
            Key::LeftAlt | Key::RightAlt => Key::Alt,
            other => other,
        }
    }

    /// Tracked-key bit for this key, if it is one of the tracked auxiliary
    /// keys.
    pub fn tracked_bit(self) -> Option<TrackedKeys> {
        match self {
            Key::Kp8 => Some(TrackedKeys::NUM_UP),
            Key::Kp2 => Some(TrackedKeys::NUM_DOWN),
            Key::Kp4 => Some(TrackedKeys::NUM_LEFT),
            Key::Kp6 => Some(TrackedKeys::NUM_RIGHT),
            Key::KpAdd => Some(TrackedKeys::NUM_PLUS),
            Key::KpSubtract => Some(TrackedKeys::NUM_MINUS),
            Key::PageUp => Some(TrackedKeys::PAGE_UP),
            Key::PageDown => Some(TrackedKeys::PAGE_DOWN),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrip_all_keys() {
        for key in Key::ALL {
            assert_eq!(Key::from_name(&key.name()), Some(key), "{key:?}");
        }
    }

    #[test]
    fn test_joy_name_roundtrip() {
        for n in [0u8, 1, 7, 15, 255] {
            let key = Key::Joy(n);
            assert_eq!(Key::from_name(&key.name()), Some(key));
        }
    }

    #[test]
    fn test_from_name_rejects_unknown() {
        assert_eq!(Key::from_name(""), None);
        assert_eq!(Key::from_name("NotAKey"), None);
        assert_eq!(Key::from_name("Joy"), None);
        assert_eq!(Key::from_name("Joy999"), None);
        assert_eq!(Key::from_name("up"), None);
    }

    #[test]
    fn test_virtualized_folds_both_sides() {
        assert_eq!(Key::LeftShift.virtualized(), Key::Shift);
        assert_eq!(Key::RightShift.virtualized(), Key::Shift);
        assert_eq!(Key::LeftControl.virtualized(), Key::Control);
        assert_eq!(Key::RightAlt.virtualized(), Key::Alt);
        assert_eq!(Key::W.virtualized(), Key::W);
        assert_eq!(Key::Joy(3).virtualized(), Key::Joy(3));
    }

    #[test]
    fn test_tracked_bits() {
        assert_eq!(Key::Kp8.tracked_bit(), Some(TrackedKeys::NUM_UP));
        assert_eq!(Key::Kp2.tracked_bit(), Some(TrackedKeys::NUM_DOWN));
        assert_eq!(Key::KpAdd.tracked_bit(), Some(TrackedKeys::NUM_PLUS));
        assert_eq!(Key::PageDown.tracked_bit(), Some(TrackedKeys::PAGE_DOWN));
        assert_eq!(Key::W.tracked_bit(), None);
    }

    #[test]
    fn test_modifier_composites() {
        assert!(Modifiers::SHIFT.contains(Modifiers::LEFT_SHIFT));
        assert!(Modifiers::SHIFT.contains(Modifiers::RIGHT_SHIFT));
        assert!(Modifiers::LEFT_SHIFT.intersects(Modifiers::SHIFT));
        assert!(!Modifiers::LEFT_SHIFT.intersects(Modifiers::CTRL));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Key::Up.label(), "Up Arrow");
        assert_eq!(Key::W.label(), "W");
        assert_eq!(Key::KpAdd.label(), "Num +");
        assert_eq!(Key::Joy(2).label(), "Button 2");
        assert_eq!(Key::Shift.label(), "Shift");
    }
}

/// Logical input slots: the actions gameplay and UI code bind keys to.
///
/// Declaration order is significant. `ALL` lists slots in that order, the
/// binding table is indexed by `index()`, and binding lookups scan slots
/// first to last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSlot {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
    Ascend,
    Descend,
    Camera,
    Action,
    ZoomIn,
    ZoomOut,
    NextUnit,
    Deselect,
    Recall,
    Pause,
    Quit,
    Help,
}

impl InputSlot {
    pub const COUNT: usize = 16;

    /// All slots in declaration order.
    pub const ALL: [InputSlot; Self::COUNT] = [
        InputSlot::Forward,
        InputSlot::Backward,
        InputSlot::TurnLeft,
        InputSlot::TurnRight,
        InputSlot::Ascend,
        InputSlot::Descend,
        InputSlot::Camera,
        InputSlot::Action,
        InputSlot::ZoomIn,
        InputSlot::ZoomOut,
        InputSlot::NextUnit,
        InputSlot::Deselect,
        InputSlot::Recall,
        InputSlot::Pause,
        InputSlot::Quit,
        InputSlot::Help,
    ];

    /// Dense 0-based index into the binding table.
    pub fn index(self) -> usize {
        match self {
            InputSlot::Forward => 0,
            InputSlot::Backward => 1,
            InputSlot::TurnLeft => 2,
            InputSlot::TurnRight => 3,
            InputSlot::Ascend => 4,
            InputSlot::Descend => 5,
            InputSlot::Camera => 6,
            InputSlot::Action => 7,
            InputSlot::ZoomIn => 8,
            InputSlot::ZoomOut => 9,
            InputSlot::NextUnit => 10,
            InputSlot::Deselect => 11,
            InputSlot::Recall => 12,
            InputSlot::Pause => 13,
            InputSlot::Quit => 14,
            InputSlot::Help => 15,
        }
    }

    /// Stable string identifier, used by the binding persistence format.
    pub fn id(self) -> &'static str {
        match self {
            InputSlot::Forward => "forward",
            InputSlot::Backward => "backward",
            InputSlot::TurnLeft => "turnleft",
            InputSlot::TurnRight => "turnright",
            InputSlot::Ascend => "ascend",
            InputSlot::Descend => "descend",
            InputSlot::Camera => "camera",
            InputSlot::Action => "action",
            InputSlot::ZoomIn => "zoomin",
            InputSlot::ZoomOut => "zoomout",
            InputSlot::NextUnit => "nextunit",
            InputSlot::Deselect => "deselect",
            InputSlot::Recall => "recall",
            InputSlot::Pause => "pause",
            InputSlot::Quit => "quit",
            InputSlot::Help => "help",
        }
    }

    /// Look up a slot by its stable string identifier.
    pub fn from_id(id: &str) -> Option<InputSlot> {
        Self::ALL.into_iter().find(|slot| slot.id() == id)
    }
}

/// Logical joystick axis slots consumed by the motion vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoyAxisSlot {
    X,
    Y,
    Z,
}

impl JoyAxisSlot {
    pub const COUNT: usize = 3;

    /// All axis slots in declaration order.
    pub const ALL: [JoyAxisSlot; Self::COUNT] = [JoyAxisSlot::X, JoyAxisSlot::Y, JoyAxisSlot::Z];

    /// Dense 0-based index into the axis binding table.
    pub fn index(self) -> usize {
        match self {
            JoyAxisSlot::X => 0,
            JoyAxisSlot::Y => 1,
            JoyAxisSlot::Z => 2,
        }
    }

    /// Stable string identifier.
    pub fn id(self) -> &'static str {
        match self {
            JoyAxisSlot::X => "x",
            JoyAxisSlot::Y => "y",
            JoyAxisSlot::Z => "z",
        }
    }
}

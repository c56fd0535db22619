// Input management: event-driven state, key/axis binding tables, persistence

mod binding;
mod event;
mod key;
mod manager;
mod profile;
mod slot;

pub use binding::{InputBinding, JoyAxisBinding};
pub use event::{Event, MouseButtons};
pub use key::{Key, Modifiers, TrackedKeys};
pub use manager::{DEFAULT_DEADZONE, InputManager};
pub use profile::InputProfile;
pub use slot::{InputSlot, JoyAxisSlot};

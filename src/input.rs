//! Keyboard input collaborator
//!
//! The host flips these flags on key-press/key-release events; the update
//! step reads them synchronously. Held state, not edges: a key stays true
//! for every tick it is down.

/// Current held state of the three logical keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub shoot: bool,
}

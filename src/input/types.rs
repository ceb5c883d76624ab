//! Types for input handling

/// Button state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Pressed,
    Released,
}

impl std::fmt::Display for ButtonState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ButtonState::Pressed => write!(f, "pressed"),
            ButtonState::Released => write!(f, "released"),
        }
    }
}

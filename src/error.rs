//! Error type shared by the demo modules

use display_interface::DisplayError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The panel driver failed to talk to the display
    #[error("display error: {0:?}")]
    Display(DisplayError),

    /// A draw target refused a primitive
    #[error("failed to render screen: {0}")]
    Render(String),

    #[error("failed to read button pin")]
    ButtonPin,

    #[error("failed to set LED duty cycle")]
    LedPwm,
}

impl From<DisplayError> for Error {
    fn from(e: DisplayError) -> Self {
        Error::Display(e)
    }
}

pub type Result<T> = core::result::Result<T, Error>;

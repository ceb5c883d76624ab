//! Input handling for the user button
//!
//! The demo only needs one thing from the button: block until it has been
//! pressed and let go again. Both edges are debounced by polling the pin
//! until it has held the wanted level for the whole debounce window.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;
use log::debug;

use crate::error::{Error, Result};

pub mod types;
pub use types::*;

/// Something the control task can wait on between pages
pub trait PressSource {
    /// Block until a full press and release has happened
    fn wait_for_press_and_release(&mut self) -> Result<()>;
}

/// Active-low push button with an external or internal pull-up
pub struct Button<PIN, DELAY> {
    pin: PIN,
    delay: DELAY,
    debounce_ms: u32,
    poll_interval_ms: u32,
}

impl<PIN, DELAY> Button<PIN, DELAY>
where
    PIN: InputPin,
    DELAY: DelayNs,
{
    pub fn new(pin: PIN, delay: DELAY, debounce_ms: u32, poll_interval_ms: u32) -> Self {
        Self {
            pin,
            delay,
            debounce_ms,
            // a zero interval would never accumulate debounce time
            poll_interval_ms: poll_interval_ms.max(1),
        }
    }

    /// Raw, undebounced state
    pub fn state(&mut self) -> Result<ButtonState> {
        if self.pin.is_low().map_err(|_| Error::ButtonPin)? {
            Ok(ButtonState::Pressed)
        } else {
            Ok(ButtonState::Released)
        }
    }

    /// Poll until the button has been in `target` for at least the debounce time
    pub fn wait_for(&mut self, target: ButtonState) -> Result<()> {
        let mut stable_ms = 0;
        loop {
            if self.state()? == target {
                if stable_ms >= self.debounce_ms {
                    debug!("Button {}", target);
                    return Ok(());
                }
                stable_ms += self.poll_interval_ms;
            } else {
                stable_ms = 0;
            }
            self.delay.delay_ms(self.poll_interval_ms);
        }
    }
}

impl<PIN, DELAY> PressSource for Button<PIN, DELAY>
where
    PIN: InputPin,
    DELAY: DelayNs,
{
    fn wait_for_press_and_release(&mut self) -> Result<()> {
        self.wait_for(ButtonState::Pressed)?;
        self.wait_for(ButtonState::Released)
    }
}

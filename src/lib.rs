//! E-ink LED mode demo
//!
//! Cycles an e-paper display through a startup banner, an instructions
//! screen and three LED mode pages, one page per button press, while a PWM
//! driven LED follows the mode on screen.
//!
//! Everything here is written against `embedded-hal` 1.0 and
//! `embedded-graphics`, so it runs on the host in tests; `main.rs` wires it
//! to the ESP32-S3 peripherals.

pub mod config;
pub mod error;
pub mod input;
pub mod led;
pub mod logo;
pub mod page;
pub mod panel;
pub mod pins;
pub mod task;

#[cfg(test)]
mod testing;

pub use crate::config::DemoConfig;
pub use crate::error::{Error, Result};
pub use crate::input::{Button, ButtonState, PressSource};
pub use crate::led::{Led, LedMode, LedPolarity};
pub use crate::page::{Palette, PageCycle, Screen, LED_PAGES};
pub use crate::panel::{Panel, RefreshMode, WavesharePanel};
pub use crate::pins::Pins;
pub use crate::task::DemoTask;

//! Pin definitions for the e-paper display, the user button and the LED
//!
//! This module contains all GPIO pin assignments used in the hardware configuration.
//! `main.rs` takes the matching typed pins from the peripherals.

/// Pin configuration constants for the ESP32-S3 kit
pub struct Pins;

impl Pins {
    // SPI Display pins
    /// Chip Select pin for SPI display
    pub const CS: u8 = 45;
    /// Data/Command control pin (High for data, Low for command)
    pub const DC: u8 = 46;
    /// Reset pin for display
    pub const RST: u8 = 47;
    /// Busy status pin (High when display is busy)
    pub const BSY: u8 = 48;
    /// SPI Clock pin
    pub const SCK: u8 = 12;
    /// SPI Master Out Slave In
    pub const MOSI: u8 = 11;
    /// Display power enable, must be high before the panel is initialised
    pub const DISPLAY_POWER: u8 = 7;

    /// Confirm key, active low, switches the LED mode
    pub const BTN_CONF: u8 = 5;

    /// Indicator LED driven by the LEDC PWM
    pub const LED: u8 = 41;
}

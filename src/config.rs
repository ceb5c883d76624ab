//! Demo configuration
//!
//! Everything tunable lives in [`DemoConfig`]. Values are fixed at compile
//! time; start from `DemoConfig::default()` and override with the `with_*`
//! builders.

use crate::led::LedPolarity;

/// How long the startup screen stays up before the instructions appear
pub const DELAY_AFTER_STARTUP_SCREEN_MS: u32 = 2000;
/// Ambient temperature, in degree C, the panel is expected to run at
pub const AMBIENT_TEMPERATURE_C: i8 = 20;
pub const SPI_BAUD_RATE_HZ: u32 = 20_000_000;
/// PWM frequency of the LED, which is also its blink rate at 50% duty
pub const LED_BLINK_HZ: u32 = 5;
/// Slowest LEDC timer at 14 bit resolution: 80 MHz / (1024 * 2^14) is just under 5 Hz
pub const LED_MIN_PWM_HZ: u32 = 5;
pub const DEBOUNCE_MS: u32 = 50;
pub const POLL_INTERVAL_MS: u32 = 5;

const DEFAULT_BANNER: &[&str] = &["RUST EMBEDDED", "GRAPHICS", "EINK DISPLAY DEMO"];

#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub startup_delay_ms: u32,
    pub spi_baud_hz: u32,
    /// Only logged; SSD1680-class panels compensate with their internal sensor
    pub ambient_temperature_c: i8,
    pub led_blink_hz: u32,
    pub led_polarity: LedPolarity,
    pub debounce_ms: u32,
    pub poll_interval_ms: u32,
    /// Name of the key printed on the instructions screen
    pub button_label: &'static str,
    /// Lines of the startup banner, top to bottom
    pub banner: &'static [&'static str],
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoConfig {
    pub const fn new() -> Self {
        Self {
            startup_delay_ms: DELAY_AFTER_STARTUP_SCREEN_MS,
            spi_baud_hz: SPI_BAUD_RATE_HZ,
            ambient_temperature_c: AMBIENT_TEMPERATURE_C,
            led_blink_hz: LED_BLINK_HZ,
            led_polarity: LedPolarity::ActiveHigh,
            debounce_ms: DEBOUNCE_MS,
            poll_interval_ms: POLL_INTERVAL_MS,
            button_label: "CONFIRM",
            banner: DEFAULT_BANNER,
        }
    }

    pub const fn with_startup_delay_ms(mut self, ms: u32) -> Self {
        self.startup_delay_ms = ms;
        self
    }

    pub const fn with_spi_baud_hz(mut self, hz: u32) -> Self {
        self.spi_baud_hz = hz;
        self
    }

    pub const fn with_ambient_temperature_c(mut self, celsius: i8) -> Self {
        self.ambient_temperature_c = celsius;
        self
    }

    pub const fn with_led_blink_hz(mut self, hz: u32) -> Self {
        self.led_blink_hz = hz;
        self
    }

    pub const fn with_led_polarity(mut self, polarity: LedPolarity) -> Self {
        self.led_polarity = polarity;
        self
    }

    pub const fn with_debounce(mut self, debounce_ms: u32, poll_interval_ms: u32) -> Self {
        self.debounce_ms = debounce_ms;
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    pub const fn with_button_label(mut self, label: &'static str) -> Self {
        self.button_label = label;
        self
    }

    pub const fn with_banner(mut self, banner: &'static [&'static str]) -> Self {
        self.banner = banner;
        self
    }

    /// Frequency to program into the LED timer, never below what it can reach
    pub const fn led_pwm_hz(&self) -> u32 {
        if self.led_blink_hz < LED_MIN_PWM_HZ {
            LED_MIN_PWM_HZ
        } else {
            self.led_blink_hz
        }
    }
}

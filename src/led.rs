//! LED driven by a PWM channel
//!
//! The PWM runs at a low frequency (1 Hz by default), so the duty cycle
//! alone decides whether the LED looks on, off or blinking.

use embedded_hal::pwm::SetDutyCycle;

use crate::error::{Error, Result};

/// Which output level lights the LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedPolarity {
    ActiveHigh,
    ActiveLow,
}

/// LED modes shown on the menu pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedMode {
    On,
    Blink,
    Off,
}

impl LedMode {
    /// Duty cycle, in percent, that produces this mode
    pub const fn duty_percent(self, polarity: LedPolarity) -> u8 {
        let lit = match self {
            LedMode::On => 100,
            LedMode::Blink => 50,
            LedMode::Off => 0,
        };
        match polarity {
            LedPolarity::ActiveHigh => lit,
            LedPolarity::ActiveLow => 100 - lit,
        }
    }

    /// Menu label
    pub const fn label(self) -> &'static str {
        match self {
            LedMode::On => "ON",
            LedMode::Blink => "BLINK",
            LedMode::Off => "OFF",
        }
    }
}

impl std::fmt::Display for LedMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

pub struct Led<PWM> {
    pwm: PWM,
    polarity: LedPolarity,
    mode: LedMode,
}

impl<PWM> Led<PWM>
where
    PWM: SetDutyCycle,
{
    /// Take the PWM channel and start with the LED dark
    pub fn new(pwm: PWM, polarity: LedPolarity) -> Result<Self> {
        let mut led = Self {
            pwm,
            polarity,
            mode: LedMode::Off,
        };
        led.set_mode(LedMode::Off)?;
        Ok(led)
    }

    pub fn set_mode(&mut self, mode: LedMode) -> Result<()> {
        let duty = mode.duty_percent(self.polarity);
        log::debug!("LED {} ({}% duty)", mode, duty);
        self.pwm
            .set_duty_cycle_percent(duty)
            .map_err(|_| Error::LedPwm)?;
        self.mode = mode;
        Ok(())
    }

    pub fn mode(&self) -> LedMode {
        self.mode
    }

    #[cfg(test)]
    pub(crate) fn pwm(&self) -> &PWM {
        &self.pwm
    }

    #[cfg(test)]
    pub(crate) fn pwm_mut(&mut self) -> &mut PWM {
        &mut self.pwm
    }
}

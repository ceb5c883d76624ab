//! The control task
//!
//! Splash, instructions, then an endless loop of LED pages, one per button
//! press. The LED is switched before the page is drawn so it reacts at once
//! while the slow e-paper refresh is still running.

use std::convert::Infallible;
use std::fmt::Debug;

use embedded_graphics::prelude::*;
use embedded_hal::delay::DelayNs;
use embedded_hal::pwm::SetDutyCycle;
use log::{error, info, warn};

use crate::config::DemoConfig;
use crate::error::{Error, Result};
use crate::input::PressSource;
use crate::led::Led;
use crate::page::{PageCycle, Screen};
use crate::panel::{Panel, RefreshMode};

pub struct DemoTask<P, B, PWM, DELAY> {
    panel: P,
    button: B,
    led: Led<PWM>,
    delay: DELAY,
    config: DemoConfig,
    pages: PageCycle,
}

impl<P, B, PWM, DELAY> DemoTask<P, B, PWM, DELAY>
where
    P: Panel,
    <P::Canvas as DrawTarget>::Error: Debug,
    B: PressSource,
    PWM: SetDutyCycle,
    DELAY: DelayNs,
{
    pub fn new(panel: P, button: B, led: Led<PWM>, delay: DELAY, config: DemoConfig) -> Self {
        Self {
            panel,
            button,
            led,
            delay,
            config,
            pages: PageCycle::new(),
        }
    }

    /// Draw `screen` into the panel's frame buffer and push it out
    pub fn show(&mut self, screen: Screen, mode: RefreshMode) -> Result<()> {
        info!("Showing {}", screen);
        let palette = self.panel.palette();
        screen
            .render(self.panel.canvas(), palette, &self.config)
            .map_err(|e| Error::Render(format!("{}: {:?}", screen, e)))?;
        self.panel.refresh(mode)
    }

    /// Startup sequence, up to the first button press
    pub fn start(&mut self) -> Result<()> {
        info!(
            "Starting demo, ambient temperature {} C",
            self.config.ambient_temperature_c
        );

        self.show(Screen::Startup, RefreshMode::Full)?;
        self.delay.delay_ms(self.config.startup_delay_ms);

        self.show(Screen::Instructions, RefreshMode::Full)?;
        self.button.wait_for_press_and_release()
    }

    /// Show the current LED page, wait for a press and move to the next page
    ///
    /// Panel and LED failures are logged and skipped so one bad refresh does
    /// not stop the demo. Only a broken button ends the loop.
    pub fn step(&mut self) -> Result<()> {
        let mode = self.pages.current();

        if let Err(e) = self.led.set_mode(mode) {
            warn!("Could not switch LED to {}: {}", mode, e);
        }

        if let Err(e) = self.show(Screen::Led(mode), RefreshMode::Quick) {
            error!("Could not show LED {} page: {}", mode, e);
        }

        self.button.wait_for_press_and_release()?;
        self.pages.advance();
        Ok(())
    }

    /// Run the demo forever
    pub fn run(&mut self) -> Result<Infallible> {
        self.start()?;
        loop {
            self.step()?;
        }
    }
}

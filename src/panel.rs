//! E-paper panel
//!
//! The control task only needs a frame buffer to draw into and a way to push
//! it to the glass. [`Panel`] is that seam; [`WavesharePanel`] implements it
//! on top of the `epd-waveshare` driver for the 2.9" SSD1680 panel.

pub use display_interface::DisplayError;

use embedded_graphics::prelude::*;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::spi::SpiDevice;
use epd_waveshare::epd2in9_v2::{Display2in9, Epd2in9};
use epd_waveshare::prelude::*;

use crate::error::Result;
use crate::page::Palette;

/// How the panel should repaint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshMode {
    /// Full multi-stage waveform, flashes but leaves no ghosting
    Full,
    /// Short waveform for page flips
    Quick,
}

pub trait Panel {
    type Color: PixelColor;
    type Canvas: DrawTarget<Color = Self::Color>;

    /// Frame buffer the next screen is drawn into
    fn canvas(&mut self) -> &mut Self::Canvas;

    fn palette(&self) -> Palette<Self::Color>;

    /// Push the frame buffer to the display and wait until it is shown
    fn refresh(&mut self, mode: RefreshMode) -> Result<()>;
}

/// 2.9" 296x128 panel driven through `epd-waveshare`, drawn in landscape
///
/// Quick refreshes drive only the pixels that differ from the base image
/// left in the controller's second RAM by the last full refresh.
pub struct WavesharePanel<SPI, BUSY, DC, RST, DELAY> {
    spi: SPI,
    epd: Epd2in9<SPI, BUSY, DC, RST, DELAY>,
    display: Display2in9,
    delay: DELAY,
    /// Controller holds the partial waveform from a quick refresh
    partial: bool,
}

fn bus_error<E: core::fmt::Debug>(what: &str) -> impl FnOnce(E) -> DisplayError + '_ {
    move |e| {
        log::error!("Panel {} failed: {:?}", what, e);
        DisplayError::BusWriteError
    }
}

impl<SPI, BUSY, DC, RST, DELAY> WavesharePanel<SPI, BUSY, DC, RST, DELAY>
where
    SPI: SpiDevice,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    /// Reset and initialise the controller
    pub fn new(
        mut spi: SPI,
        busy: BUSY,
        dc: DC,
        rst: RST,
        mut delay: DELAY,
        rotation: DisplayRotation,
    ) -> Result<Self> {
        log::info!("Initializing e-paper panel");
        let epd = Epd2in9::new(&mut spi, busy, dc, rst, &mut delay, None)
            .map_err(bus_error("init"))?;

        let mut display = Display2in9::default();
        display.set_rotation(rotation);

        Ok(Self {
            spi,
            epd,
            display,
            delay,
            partial: false,
        })
    }

    fn full_refresh(&mut self) -> Result<()> {
        if self.partial {
            // back to the full waveform
            self.epd
                .wake_up(&mut self.spi, &mut self.delay)
                .map_err(bus_error("re-init"))?;
            self.partial = false;
        }
        let buffer = self.display.buffer();
        self.epd
            .update_and_display_frame(&mut self.spi, buffer, &mut self.delay)
            .map_err(bus_error("full refresh"))?;
        self.epd
            .update_old_frame(&mut self.spi, buffer, &mut self.delay)
            .map_err(bus_error("base image"))?;
        Ok(())
    }

    fn quick_refresh(&mut self) -> Result<()> {
        self.partial = true;
        self.epd
            .update_and_display_new_frame(&mut self.spi, self.display.buffer(), &mut self.delay)
            .map_err(bus_error("quick refresh"))?;
        Ok(())
    }
}

impl<SPI, BUSY, DC, RST, DELAY> Panel for WavesharePanel<SPI, BUSY, DC, RST, DELAY>
where
    SPI: SpiDevice,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    type Color = Color;
    type Canvas = Display2in9;

    fn canvas(&mut self) -> &mut Display2in9 {
        &mut self.display
    }

    fn palette(&self) -> Palette<Color> {
        Palette {
            ink: Color::Black,
            paper: Color::White,
        }
    }

    fn refresh(&mut self, mode: RefreshMode) -> Result<()> {
        match mode {
            RefreshMode::Full => self.full_refresh(),
            RefreshMode::Quick => self.quick_refresh(),
        }
    }
}

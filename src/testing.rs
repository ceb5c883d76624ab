//! Mock peripherals for host tests

use std::cell::RefCell;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, ErrorType as DigitalErrorType, InputPin, OutputPin};
use embedded_hal::pwm::{self, ErrorType as PwmErrorType, SetDutyCycle};
use embedded_hal::spi::{self, Operation, SpiDevice};

use crate::error::{Error, Result as DemoResult};
use crate::input::PressSource;
use crate::page::Palette;
use crate::panel::{DisplayError, Panel, RefreshMode};

/// Something a mock peripheral did, in the order it happened
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Event {
    Duty(u16),
    Refresh(RefreshMode),
}

/// Event log shared between mocks
pub(crate) type Events = Rc<RefCell<Vec<Event>>>;

fn record(events: &Option<Events>, event: Event) {
    if let Some(events) = events {
        events.borrow_mut().push(event);
    }
}

/// Mock PWM channel remembering the last duty cycle
pub(crate) struct MockPwm {
    pub duty: u16,
    pub fail: bool,
    pub events: Option<Events>,
}

impl MockPwm {
    pub(crate) fn new() -> Self {
        Self {
            duty: 0,
            fail: false,
            events: None,
        }
    }

    pub(crate) fn percent(&self) -> u16 {
        (u32::from(self.duty) * 100 / u32::from(self.max_duty_cycle())) as u16
    }
}

#[derive(Debug)]
pub(crate) struct MockError;

impl pwm::Error for MockError {
    fn kind(&self) -> pwm::ErrorKind {
        pwm::ErrorKind::Other
    }
}

impl digital::Error for MockError {
    fn kind(&self) -> digital::ErrorKind {
        digital::ErrorKind::Other
    }
}

impl PwmErrorType for MockPwm {
    type Error = MockError;
}

impl SetDutyCycle for MockPwm {
    fn max_duty_cycle(&self) -> u16 {
        1000
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        if self.fail {
            return Err(MockError);
        }
        self.duty = duty;
        record(&self.events, Event::Duty(duty));
        Ok(())
    }
}

/// Mock input pin playing back a script of levels, one per read.
/// The last level repeats once the script runs out.
pub(crate) struct MockPin {
    levels: VecDeque<bool>,
    last: bool,
    pub reads: usize,
    pub fail: bool,
}

impl MockPin {
    /// `script` is a list of `(high, samples)` runs
    pub(crate) fn new(script: &[(bool, usize)]) -> Self {
        let levels: VecDeque<bool> = script
            .iter()
            .flat_map(|&(high, n)| std::iter::repeat(high).take(n))
            .collect();
        Self {
            last: levels.back().copied().unwrap_or(true),
            levels,
            reads: 0,
            fail: false,
        }
    }

    fn next_level(&mut self) -> Result<bool, MockError> {
        if self.fail {
            return Err(MockError);
        }
        self.reads += 1;
        Ok(self.levels.pop_front().unwrap_or(self.last))
    }
}

impl DigitalErrorType for MockPin {
    type Error = MockError;
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.next_level()
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.next_level().map(|high| !high)
    }
}

/// Pin for panel lines the tests do not look at; reads low, so never busy
pub(crate) struct StubPin;

impl DigitalErrorType for StubPin {
    type Error = Infallible;
}

impl InputPin for StubPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(false)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(true)
    }
}

impl OutputPin for StubPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// SPI device recording every write
#[derive(Default)]
pub(crate) struct MockSpi {
    pub writes: Vec<Vec<u8>>,
}

impl MockSpi {
    /// `first` was written directly followed by `second`
    pub(crate) fn sent(&self, first: &[u8], second: &[u8]) -> bool {
        self.writes
            .windows(2)
            .any(|w| w[0] == first && w[1] == second)
    }
}

impl spi::ErrorType for MockSpi {
    type Error = Infallible;
}

impl SpiDevice for MockSpi {
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
        for op in operations {
            if let Operation::Write(bytes) = op {
                self.writes.push(bytes.to_vec());
            }
        }
        Ok(())
    }
}

/// Delay that only counts
#[derive(Default)]
pub(crate) struct MockDelay {
    pub elapsed_ns: u64,
}

impl MockDelay {
    pub(crate) fn elapsed_ms(&self) -> u64 {
        self.elapsed_ns / 1_000_000
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += u64::from(ns);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.elapsed_ns += u64::from(ms) * 1_000_000;
    }
}

/// In-memory 1 bit canvas the size of the landscape panel
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Canvas {
    size: Size,
    pixels: Vec<BinaryColor>,
}

impl Canvas {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            size: Size::new(width, height),
            pixels: vec![BinaryColor::Off; (width * height) as usize],
        }
    }

    pub(crate) fn landscape() -> Self {
        Self::new(296, 128)
    }

    pub(crate) fn pixel(&self, x: i32, y: i32) -> BinaryColor {
        self.pixels[(y as u32 * self.size.width + x as u32) as usize]
    }

    /// Number of ink pixels inside `area`
    pub(crate) fn ink_in(&self, area: Rectangle) -> usize {
        area.points()
            .filter(|p| self.bounding_box().contains(*p))
            .filter(|p| self.pixel(p.x, p.y) == BinaryColor::On)
            .count()
    }

    pub(crate) fn ink(&self) -> usize {
        self.ink_in(self.bounding_box())
    }

    pub(crate) fn fill(&mut self, color: BinaryColor) {
        self.pixels.iter_mut().for_each(|p| *p = color);
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for Canvas {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if self.bounding_box().contains(point) {
                let index = (point.y as u32 * self.size.width + point.x as u32) as usize;
                self.pixels[index] = color;
            }
        }
        Ok(())
    }
}

/// Button that is pressed as soon as it is waited on
pub(crate) struct MockButton {
    pub presses: usize,
    /// Presses left before the pin read starts failing
    pub presses_left: Option<usize>,
}

impl MockButton {
    pub(crate) fn new() -> Self {
        Self {
            presses: 0,
            presses_left: None,
        }
    }
}

impl PressSource for MockButton {
    fn wait_for_press_and_release(&mut self) -> DemoResult<()> {
        match self.presses_left.as_mut() {
            Some(0) => return Err(Error::ButtonPin),
            Some(left) => *left -= 1,
            None => {}
        }
        self.presses += 1;
        Ok(())
    }
}

/// Panel keeping a copy of every frame it was asked to show
pub(crate) struct MockPanel {
    pub canvas: Canvas,
    pub frames: Vec<(RefreshMode, Canvas)>,
    pub fail: bool,
    pub events: Option<Events>,
}

impl MockPanel {
    pub(crate) const PALETTE: Palette<BinaryColor> = Palette {
        ink: BinaryColor::On,
        paper: BinaryColor::Off,
    };

    pub(crate) fn new() -> Self {
        Self {
            canvas: Canvas::landscape(),
            frames: Vec::new(),
            fail: false,
            events: None,
        }
    }
}

impl Panel for MockPanel {
    type Color = BinaryColor;
    type Canvas = Canvas;

    fn canvas(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    fn palette(&self) -> Palette<BinaryColor> {
        Self::PALETTE
    }

    fn refresh(&mut self, mode: RefreshMode) -> DemoResult<()> {
        if self.fail {
            return Err(DisplayError::BusWriteError.into());
        }
        record(&self.events, Event::Refresh(mode));
        self.frames.push((mode, self.canvas.clone()));
        Ok(())
    }
}

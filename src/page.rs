//! Screens of the demo and the order the LED pages cycle in
//!
//! Layout is computed from the target's width; vertical positions assume a
//! 128 pixel tall landscape panel.

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_9X18_BOLD};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Triangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder};

use crate::config::DemoConfig;
use crate::led::LedMode;
use crate::logo::{Logo, SPLASH_LOGO};

/// Order the pages are shown in, one step per button press
pub const LED_PAGES: [LedMode; 3] = [LedMode::On, LedMode::Blink, LedMode::Off];

/// Order of the items on the menu, top to bottom
pub const MENU: [LedMode; 3] = [LedMode::On, LedMode::Off, LedMode::Blink];

const LINE_PITCH: i32 = 22;
const LOGO_TOP: i32 = 6;
const LOGO_GAP: i32 = 8;

const HEADING_TOP: i32 = 4;
const MENU_TOP: i32 = 36;
const MENU_PITCH: i32 = 26;
/// Menu text starts this far left of the centre line
const MENU_INDENT: i32 = 20;
/// Arrow tip sits this far in front of the menu text
const ARROW_GAP: i32 = 10;
const ARROW_LENGTH: i32 = 10;
const ARROW_HALF_HEIGHT: i32 = 5;

/// Foreground and background colour of a draw target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette<C> {
    pub ink: C,
    pub paper: C,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Startup,
    Instructions,
    Led(LedMode),
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Screen::Startup => write!(f, "startup screen"),
            Screen::Instructions => write!(f, "instructions screen"),
            Screen::Led(mode) => write!(f, "LED {} page", mode),
        }
    }
}

impl Screen {
    /// Clear `target` to paper and draw this screen in ink
    pub fn render<D, C>(
        &self,
        target: &mut D,
        palette: Palette<C>,
        config: &DemoConfig,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
        C: PixelColor,
    {
        match self {
            Screen::Startup => draw_startup(target, palette, config.banner, &SPLASH_LOGO),
            Screen::Instructions => {
                let first = format!("PRESS {} ON THE KIT", config.button_label);
                draw_centered_lines(target, palette, &[first.as_str(), "TO SWITCH", "LED mode!"])
            }
            Screen::Led(mode) => draw_led_page(target, palette, *mode),
        }
    }
}

fn centered() -> TextStyle {
    TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Top)
        .build()
}

fn center_x<D: DrawTarget>(target: &D) -> i32 {
    target.bounding_box().center().x
}

/// Top of a block of `lines` text lines centred vertically
fn block_top<D: DrawTarget>(target: &D, lines: usize) -> i32 {
    let block = lines as i32 * LINE_PITCH - (LINE_PITCH - FONT_9X18_BOLD.character_size.height as i32);
    (target.bounding_box().size.height as i32 - block).max(0) / 2
}

fn draw_lines<D, C>(target: &mut D, palette: Palette<C>, lines: &[&str], top: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = C>,
    C: PixelColor,
{
    let style = MonoTextStyle::new(&FONT_9X18_BOLD, palette.ink);
    let x = center_x(target);
    for (row, line) in lines.iter().enumerate() {
        let origin = Point::new(x, top + row as i32 * LINE_PITCH);
        Text::with_text_style(line, origin, style, centered()).draw(target)?;
    }
    Ok(())
}

fn draw_centered_lines<D, C>(target: &mut D, palette: Palette<C>, lines: &[&str]) -> Result<(), D::Error>
where
    D: DrawTarget<Color = C>,
    C: PixelColor,
{
    target.clear(palette.paper)?;
    let top = block_top(target, lines.len());
    draw_lines(target, palette, lines, top)
}

/// Startup banner, with the splash logo above it when one was built in
pub fn draw_startup<D, C>(
    target: &mut D,
    palette: Palette<C>,
    banner: &[&str],
    logo: &Logo<'_>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = C>,
    C: PixelColor,
{
    if logo.is_empty() {
        return draw_centered_lines(target, palette, banner);
    }

    target.clear(palette.paper)?;
    let left = center_x(target) - logo.size().width as i32 / 2;
    logo.draw(target, Point::new(left, LOGO_TOP), palette.ink)?;

    let top = LOGO_TOP + logo.size().height as i32 + LOGO_GAP;
    draw_lines(target, palette, banner, top)
}

/// Top left corner of a menu item's text
pub fn menu_item_origin<D: DrawTarget>(target: &D, mode: LedMode) -> Point {
    let row = MENU.iter().position(|&m| m == mode).unwrap_or(0) as i32;
    Point::new(center_x(target) - MENU_INDENT, MENU_TOP + row * MENU_PITCH)
}

fn draw_led_page<D, C>(target: &mut D, palette: Palette<C>, selected: LedMode) -> Result<(), D::Error>
where
    D: DrawTarget<Color = C>,
    C: PixelColor,
{
    target.clear(palette.paper)?;

    let heading = MonoTextStyle::new(&FONT_10X20, palette.ink);
    Text::with_text_style("LED", Point::new(center_x(target), HEADING_TOP), heading, centered())
        .draw(target)?;

    let item_style = MonoTextStyle::new(&FONT_9X18_BOLD, palette.ink);
    for mode in MENU {
        let origin = menu_item_origin(target, mode);
        Text::with_baseline(mode.label(), origin, item_style, Baseline::Top).draw(target)?;
    }

    // Arrow in front of the selected item, pointing right
    let item = menu_item_origin(target, selected);
    let tip = Point::new(
        item.x - ARROW_GAP,
        item.y + FONT_9X18_BOLD.character_size.height as i32 / 2,
    );
    let base = tip.x - ARROW_LENGTH;
    Triangle::new(
        tip,
        Point::new(base, tip.y + ARROW_HALF_HEIGHT),
        Point::new(base, tip.y - ARROW_HALF_HEIGHT),
    )
    .into_styled(PrimitiveStyle::with_fill(palette.ink))
    .draw(target)
}

/// Fixed circular index over [`LED_PAGES`]
#[derive(Debug, Default, Clone)]
pub struct PageCycle {
    index: usize,
}

impl PageCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> LedMode {
        LED_PAGES[self.index]
    }

    /// Move to the next page, wrapping after the last one
    pub fn advance(&mut self) -> LedMode {
        self.index = (self.index + 1) % LED_PAGES.len();
        self.current()
    }
}

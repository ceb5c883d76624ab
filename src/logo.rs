//! Splash logo
//!
//! `build.rs` turns `logo.png` into a packed bitmap: one bit per pixel, MSB
//! first, rows padded to whole bytes, set bits are ink. Without `logo.png`
//! the bitmap is empty and the startup screen is text only.

use embedded_graphics::prelude::*;

pub const LOGO_WIDTH: u32 = 96;
pub const LOGO_HEIGHT: u32 = 32;

// Include the pre-converted logo image binary data (generated at build time)
pub const SPLASH_LOGO: Logo<'static> = Logo::new(
    LOGO_WIDTH,
    LOGO_HEIGHT,
    include_bytes!(concat!(env!("OUT_DIR"), "/logo.bin")),
);

#[derive(Debug, Clone, Copy)]
pub struct Logo<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> Logo<'a> {
    pub const fn new(width: u32, height: u32, data: &'a [u8]) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    fn bytes_per_row(&self) -> usize {
        self.width.div_ceil(8) as usize
    }

    /// True when there is no usable bitmap
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.data.len() < self.bytes_per_row() * self.height as usize
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Ink pixels relative to the logo's top left corner
    pub fn ink_points(&self) -> impl Iterator<Item = Point> + '_ {
        let stride = self.bytes_per_row();
        let (width, height) = (self.width, self.height);
        let rows = if self.is_empty() { 0 } else { height };
        (0..rows).flat_map(move |y| {
            (0..width).filter_map(move |x| {
                let byte = self.data[y as usize * stride + (x / 8) as usize];
                (byte & (0x80 >> (x % 8)) != 0).then(|| Point::new(x as i32, y as i32))
            })
        })
    }

    pub fn draw<D>(&self, target: &mut D, top_left: Point, ink: D::Color) -> Result<(), D::Error>
    where
        D: DrawTarget,
    {
        target.draw_iter(self.ink_points().map(|p| Pixel(p + top_left, ink)))
    }
}

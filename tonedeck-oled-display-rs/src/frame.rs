//! The single off-screen frame buffer.
//!
//! [`FrameBuffer`] holds one 128×64 monochrome frame in the same packing
//! as the catalog assets (row-major, MSB first, 16 bytes per row). It is
//! owned by the [`StatusScreen`](crate::screen::StatusScreen) and passed
//! by `&mut` to whichever of the composer or the logo animation runs in the
//! current iteration, so the borrow checker enforces the single-writer
//! rule.
//!
//! Every write is bounds-checked; a pixel outside the frame is dropped,
//! never written to neighbouring memory.

use core::convert::Infallible;

use embedded_graphics::{
    image::ImageRaw,
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PointsIter, Rectangle},
};

use crate::bitmap::{packed_len, row_stride};

/// Frame width in pixels.
pub const FRAME_WIDTH: u32 = 128;
/// Frame height in pixels.
pub const FRAME_HEIGHT: u32 = 64;

const STRIDE: usize = row_stride(FRAME_WIDTH);
const FRAME_BYTES: usize = packed_len(FRAME_WIDTH, FRAME_HEIGHT);

/// A 128×64 1-bit frame buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    bytes: [u8; FRAME_BYTES],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("lit_pixels", &self.lit_pixels())
            .finish()
    }
}

impl FrameBuffer {
    /// A blank frame.
    pub const fn new() -> Self {
        Self {
            bytes: [0; FRAME_BYTES],
        }
    }

    /// The full frame rectangle.
    pub fn bounds() -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(FRAME_WIDTH, FRAME_HEIGHT))
    }

    /// Read a pixel. Returns `None` outside the frame.
    pub fn pixel(&self, p: Point) -> Option<BinaryColor> {
        let (index, mask) = Self::locate(p)?;
        Some(BinaryColor::from(self.bytes[index] & mask != 0))
    }

    /// Write a pixel. Returns `false`, and writes nothing, outside the frame.
    pub fn set_pixel(&mut self, p: Point, color: BinaryColor) -> bool {
        match Self::locate(p) {
            Some((index, mask)) => {
                if color.is_on() {
                    self.bytes[index] |= mask;
                } else {
                    self.bytes[index] &= !mask;
                }
                true
            }
            None => false,
        }
    }

    /// Clear every pixel.
    pub fn erase(&mut self) {
        self.bytes.fill(0);
    }

    /// Set every pixel of `area` (clipped to the frame) to `color`.
    pub fn fill_region(&mut self, area: &Rectangle, color: BinaryColor) {
        let clipped = area.intersection(&Self::bounds());
        for p in clipped.points() {
            self.set_pixel(p, color);
        }
    }

    /// Returns `true` if no pixel is lit.
    pub fn is_blank(&self) -> bool {
        self.bytes.iter().all(|&b| b == 0)
    }

    /// Returns `true` if no pixel inside `area` is lit.
    pub fn region_is_blank(&self, area: &Rectangle) -> bool {
        area.intersection(&Self::bounds())
            .points()
            .all(|p| self.pixel(p) == Some(BinaryColor::Off))
    }

    /// Number of lit pixels.
    pub fn lit_pixels(&self) -> u32 {
        self.bytes.iter().map(|b| b.count_ones()).sum()
    }

    /// Packed frame bytes, ready for a transport that takes the raw layout.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// View the frame as an `embedded-graphics` raw image, for copying into
    /// a driver that exposes a [`DrawTarget`].
    pub fn image_raw(&self) -> ImageRaw<'_, BinaryColor> {
        ImageRaw::new(&self.bytes, FRAME_WIDTH)
    }

    fn locate(p: Point) -> Option<(usize, u8)> {
        if p.x < 0 || p.y < 0 || p.x >= FRAME_WIDTH as i32 || p.y >= FRAME_HEIGHT as i32 {
            return None;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        Some((y * STRIDE + x / 8, 0x80 >> (x % 8)))
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(FRAME_WIDTH, FRAME_HEIGHT)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, color) in pixels {
            self.set_pixel(p, color);
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_region(area, color);
        Ok(())
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

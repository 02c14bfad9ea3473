//! Icon renderer: copies catalog bitmaps into a frame.
//!
//! [`blit()`] and [`blit_region()`] clip the source rectangle against the
//! destination before touching a single pixel, so an icon placed at a
//! negative offset or hanging off the right/bottom edge draws only its
//! visible part. An icon placed entirely off-screen draws nothing. Neither
//! function allocates.

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PointsIter, Rectangle},
};

use crate::bitmap::BitmapAsset;
use crate::frame::FrameBuffer;

/// How source bits combine with the destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlitMode {
    /// Destination takes the source bit, set or clear.
    #[default]
    Normal,
    /// Destination takes the complement of the source bit.
    Invert,
    /// Destination is toggled wherever the source bit is set.
    Xor,
}

impl BlitMode {
    /// Combine one source bit with the current destination pixel.
    pub fn apply(self, src: bool, dst: BinaryColor) -> BinaryColor {
        match self {
            BlitMode::Normal => BinaryColor::from(src),
            BlitMode::Invert => BinaryColor::from(!src),
            BlitMode::Xor => {
                if src {
                    dst.invert()
                } else {
                    dst
                }
            }
        }
    }
}

/// A readable and writable 1-bit pixel surface.
///
/// The renderer only calls [`set_pixel()`](Self::set_pixel) with points
/// inside `Rectangle::new(Point::zero(), self.size())`.
pub trait Canvas {
    /// Surface dimensions.
    fn size(&self) -> Size;
    /// Current pixel, or `None` outside the surface.
    fn pixel(&self, p: Point) -> Option<BinaryColor>;
    /// Write one pixel.
    fn set_pixel(&mut self, p: Point, color: BinaryColor);
}

impl Canvas for FrameBuffer {
    fn size(&self) -> Size {
        OriginDimensions::size(self)
    }

    fn pixel(&self, p: Point) -> Option<BinaryColor> {
        FrameBuffer::pixel(self, p)
    }

    fn set_pixel(&mut self, p: Point, color: BinaryColor) {
        FrameBuffer::set_pixel(self, p, color);
    }
}

/// Draw a whole asset with its top-left corner at `origin`.
///
/// # Example
///
/// ```
/// use embedded_graphics::prelude::Point;
/// use tonedeck_oled_display_rs::{blit, catalog, BlitMode, FrameBuffer};
///
/// let mut frame = FrameBuffer::new();
/// // Hangs 27 columns off the right edge; only 5 columns are drawn.
/// blit(&mut frame, &catalog::SPEAKER_MUTED, Point::new(123, 0), BlitMode::Normal);
/// ```
pub fn blit<C>(canvas: &mut C, asset: &BitmapAsset, origin: Point, mode: BlitMode)
where
    C: Canvas + ?Sized,
{
    let source = Rectangle::new(Point::zero(), asset.size());
    blit_region(canvas, asset, source, origin, mode);
}

/// Draw the `source` sub-rectangle of an asset with its top-left corner at
/// `origin`.
///
/// `source` is in asset coordinates and is first clipped to the asset,
/// then the destination is clipped to the canvas. Pixels outside both
/// clips are never read or written.
pub fn blit_region<C>(
    canvas: &mut C,
    asset: &BitmapAsset,
    source: Rectangle,
    origin: Point,
    mode: BlitMode,
) where
    C: Canvas + ?Sized,
{
    let source = source.intersection(&Rectangle::new(Point::zero(), asset.size()));
    if source.is_zero_sized() {
        return;
    }

    // Off-canvas check in i64: origins near i32::MIN/MAX must not reach
    // point arithmetic.
    let bounds = canvas.size();
    let off_canvas = i64::from(origin.x) >= i64::from(bounds.width)
        || i64::from(origin.y) >= i64::from(bounds.height)
        || i64::from(origin.x) + i64::from(source.size.width) <= 0
        || i64::from(origin.y) + i64::from(source.size.height) <= 0;

    let target = if off_canvas {
        Rectangle::zero()
    } else {
        Rectangle::new(origin, source.size).intersection(&Rectangle::new(Point::zero(), bounds))
    };
    if target.is_zero_sized() {
        #[cfg(feature = "defmt")]
        defmt::trace!(
            "blit of {} at ({}, {}) fully clipped",
            asset.id(),
            origin.x,
            origin.y
        );
        return;
    }

    // Destination to source: both are small once the origin is on-canvas.
    let offset = origin - source.top_left;
    for p in target.points() {
        let src = p - offset;
        let bit = asset.pixel(src.x as u32, src.y as u32);
        let dst = canvas.pixel(p).unwrap_or(BinaryColor::Off);
        canvas.set_pixel(p, mode.apply(bit, dst));
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

//! Fixed-size monochrome bitmaps.
//!
//! A [`BitmapAsset`] is a read-only view of packed pixel data compiled into
//! the firmware image. The packing is one bit per pixel, row-major, MSB
//! first, with every row padded to a whole byte — the same layout
//! `embedded-graphics` uses for a 1-bpp [`ImageRaw`], so assets can also
//! be drawn onto any [`DrawTarget`] through [`BitmapAsset::image_raw()`].
//!
//! [`DrawTarget`]: embedded_graphics::draw_target::DrawTarget

use embedded_graphics::{geometry::Size, image::ImageRaw, pixelcolor::BinaryColor};

use crate::catalog::IconId;

/// Number of bytes per packed row for a bitmap `width` pixels wide.
pub const fn row_stride(width: u32) -> usize {
    (width as usize + 7) / 8
}

/// Number of bytes a `width × height` bitmap occupies when packed.
pub const fn packed_len(width: u32, height: u32) -> usize {
    row_stride(width) * height as usize
}

/// A named, fixed-size 1-bit bitmap.
///
/// Assets are `'static` and shared by reference; nothing ever mutates or
/// frees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapAsset {
    id: IconId,
    width: u32,
    height: u32,
    data: &'static [u8],
}

impl BitmapAsset {
    /// Declare an asset.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != height * ceil(width / 8)`. Catalog entries
    /// are declared as `static`s, so a mismatch fails the build instead of
    /// reaching the device.
    pub const fn new(id: IconId, width: u32, height: u32, data: &'static [u8]) -> Self {
        assert!(
            data.len() == packed_len(width, height),
            "bitmap data length does not match its declared size"
        );
        Self {
            id,
            width,
            height,
            data,
        }
    }

    /// Catalog identifier.
    pub fn id(&self) -> IconId {
        self.id
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width and height as an `embedded-graphics` [`Size`].
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Raw packed pixel data.
    pub fn data(&self) -> &'static [u8] {
        self.data
    }

    /// Bytes per packed row.
    pub fn row_stride(&self) -> usize {
        row_stride(self.width)
    }

    /// Byte length implied by the declared dimensions.
    pub fn expected_len(&self) -> usize {
        packed_len(self.width, self.height)
    }

    /// Returns `true` if the data length matches the declared dimensions.
    pub fn is_well_formed(&self) -> bool {
        self.data.len() == self.expected_len()
    }

    /// Returns `true` if the pixel at `(x, y)` is set.
    ///
    /// Coordinates outside the bitmap read as unset.
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = y as usize * self.row_stride() + x as usize / 8;
        match self.data.get(index) {
            Some(byte) => byte & (0x80 >> (x % 8)) != 0,
            None => false,
        }
    }

    /// Count of lit pixels. Used to sanity-check artwork.
    pub fn lit_pixels(&self) -> u32 {
        let mut count = 0;
        for y in 0..self.height {
            for x in 0..self.width {
                if self.pixel(x, y) {
                    count += 1;
                }
            }
        }
        count
    }

    /// View the asset as an `embedded-graphics` raw image.
    pub fn image_raw(&self) -> ImageRaw<'static, BinaryColor> {
        ImageRaw::new(self.data, self.width)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // 10×2: row stride 2, so each row carries 6 padding bits.
    static TEN_BY_TWO: [u8; 4] = [0b1000_0000, 0b0100_0000, 0b0000_0001, 0b1000_0000];

    fn ten_by_two() -> BitmapAsset {
        BitmapAsset::new(IconId::Logo, 10, 2, &TEN_BY_TWO)
    }

    #[test]
    fn stride_rounds_up_to_whole_bytes() {
        assert_eq!(row_stride(1), 1);
        assert_eq!(row_stride(8), 1);
        assert_eq!(row_stride(9), 2);
        assert_eq!(row_stride(32), 4);
        assert_eq!(packed_len(32, 20), 80);
        assert_eq!(packed_len(32, 37), 148);
        assert_eq!(packed_len(10, 2), 4);
    }

    #[test]
    fn pixel_reads_msb_first() {
        let asset = ten_by_two();
        assert!(asset.pixel(0, 0));
        assert!(!asset.pixel(1, 0));
        assert!(asset.pixel(9, 0));
        assert!(!asset.pixel(8, 0));

        assert!(asset.pixel(7, 1));
        assert!(asset.pixel(8, 1));
        assert!(!asset.pixel(0, 1));
        assert!(!asset.pixel(9, 1));
    }

    #[test]
    fn pixel_outside_bitmap_is_unset() {
        let asset = ten_by_two();
        assert!(!asset.pixel(10, 0));
        assert!(!asset.pixel(0, 2));
        assert!(!asset.pixel(u32::MAX, u32::MAX));
    }

    #[test]
    fn lit_pixels_ignores_padding() {
        // Padding bits are zero here, but a set padding bit must not count.
        static PADDED: [u8; 2] = [0b1111_1111, 0b1111_1111];
        let asset = BitmapAsset::new(IconId::Logo, 10, 1, &PADDED);
        assert_eq!(asset.lit_pixels(), 10);
        assert_eq!(ten_by_two().lit_pixels(), 4);
    }

    #[test]
    fn well_formed_check_catches_bad_length() {
        static SHORT: [u8; 3] = [0; 3];
        let bad = BitmapAsset {
            id: IconId::Logo,
            width: 10,
            height: 2,
            data: &SHORT,
        };
        assert!(!bad.is_well_formed());
        assert_eq!(bad.expected_len(), 4);
        assert!(ten_by_two().is_well_formed());
    }

    #[test]
    #[should_panic(expected = "bitmap data length")]
    fn new_rejects_bad_length() {
        static SHORT: [u8; 3] = [0; 3];
        let _ = BitmapAsset::new(IconId::Logo, 10, 2, &SHORT);
    }

    #[test]
    fn image_raw_matches_asset_size() {
        use embedded_graphics::geometry::OriginDimensions;

        let asset = ten_by_two();
        assert_eq!(asset.image_raw().size(), Size::new(10, 2));
    }
}

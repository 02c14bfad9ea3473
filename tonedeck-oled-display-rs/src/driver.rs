//! Display transport and the SSD1306 driver that implements it.
//!
//! [`DisplayTransport`] is the seam between the renderer and the hardware:
//! everything above it works on a [`FrameBuffer`], everything below it
//! moves bytes over a bus. [`OledDriver`] is the SSD1306 128×64 I2C
//! implementation, wrapping the [`ssd1306`] crate in async
//! buffered-graphics mode.

use display_interface_i2c::I2CInterface;
use embedded_graphics::{geometry::Point, image::Image, Drawable};
use embedded_hal_async::i2c::I2c;
use ssd1306::{
    mode::BufferedGraphicsModeAsync, prelude::*, I2CDisplayInterface, Ssd1306Async,
};

use crate::error::OledError;
use crate::frame::FrameBuffer;

/// Something that can show a [`FrameBuffer`].
///
/// A failed [`flush_frame()`](Self::flush_frame) is a dropped frame: the
/// caller keeps running and the next flush sends the whole frame again.
#[allow(async_fn_in_trait)]
pub trait DisplayTransport {
    /// Bring the display up. Called once before the first flush.
    async fn init(&mut self) -> Result<(), OledError>;

    /// Push a complete frame to the display.
    async fn flush_frame(&mut self, frame: &FrameBuffer) -> Result<(), OledError>;
}

/// Concrete display type used internally by [`OledDriver`].
type Display<I2C> = Ssd1306Async<
    I2CInterface<I2C>,
    DisplaySize128x64,
    BufferedGraphicsModeAsync<DisplaySize128x64>,
>;

/// Async driver for an SSD1306 128×64 OLED display over I2C.
///
/// # Lifecycle
///
/// 1. [`OledDriver::new()`] — constructs the driver without any I2C traffic.
/// 2. [`OledDriver::init()`] — sends the SSD1306 initialisation sequence.
/// 3. [`OledDriver::flush_frame()`] — copies a frame into the controller
///    buffer and transfers it to the hardware.
///
/// # Example
///
/// ```no_run
/// use tonedeck_oled_display_rs::{FrameBuffer, OledDriver};
///
/// # async fn example(i2c: impl embedded_hal_async::i2c::I2c) {
/// let mut oled = OledDriver::new(i2c, 0x3C);
/// oled.init().await.unwrap();
/// oled.flush_frame(&FrameBuffer::new()).await.unwrap();
/// # }
/// ```
pub struct OledDriver<I2C> {
    display: Display<I2C>,
    /// Set to `true` after a successful `init()` call.
    initialized: bool,
}

impl<I2C> OledDriver<I2C>
where
    I2C: I2c,
{
    /// Construct an uninitialised driver.
    ///
    /// No I2C traffic is generated. You **must** call [`init()`](Self::init)
    /// before flushing.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access).
    /// * `address` — 7-bit I2C device address (typically `0x3C` or `0x3D`).
    pub fn new(i2c: I2C, address: u8) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(i2c, address);
        let display = Ssd1306Async::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        Self {
            display,
            initialized: false,
        }
    }

    /// Initialise the SSD1306 hardware.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::InitializationFailed`] if the display does not
    /// respond.
    pub async fn init(&mut self) -> Result<(), OledError> {
        self.display
            .init()
            .await
            .map_err(|_| OledError::InitializationFailed)?;
        self.initialized = true;

        #[cfg(feature = "defmt")]
        defmt::info!("SSD1306 initialised");

        Ok(())
    }

    /// Copy `frame` into the controller buffer and transfer it via I2C.
    ///
    /// At 400 kHz I2C this takes approximately 20 ms for a full 1024-byte
    /// frame.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::NotInitialized`] if [`init()`](Self::init) has
    /// not succeeded, [`OledError::Render`] if the copy into the controller
    /// buffer fails, or [`OledError::Display`] on a bus-level failure.
    pub async fn flush_frame(&mut self, frame: &FrameBuffer) -> Result<(), OledError> {
        if !self.initialized {
            return Err(OledError::NotInitialized);
        }
        Image::new(&frame.image_raw(), Point::zero())
            .draw(&mut self.display)
            .map_err(|_| OledError::Render)?;
        self.display.flush().await?;
        Ok(())
    }

    /// Check whether the display has been successfully initialised.
    ///
    /// No I2C traffic is generated.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl<I2C> DisplayTransport for OledDriver<I2C>
where
    I2C: I2c,
{
    async fn init(&mut self) -> Result<(), OledError> {
        OledDriver::init(self).await
    }

    async fn flush_frame(&mut self, frame: &FrameBuffer) -> Result<(), OledError> {
        OledDriver::flush_frame(self, frame).await
    }
}

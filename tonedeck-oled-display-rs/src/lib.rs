//! Icon-based status rendering for the tonedeck SSD1306 (128×64) OLED.
//!
//! The crate turns a [`DeviceState`] snapshot into a monochrome frame and
//! pushes it to the display:
//!
//! - [`catalog`] — the fixed set of 1-bit icons and the logo.
//! - [`blit`](mod@blit) — clipped bitmap copy with [`BlitMode`]s.
//! - [`composer`] — which icon goes in which [`Slot`] for a state.
//! - [`animation`] — the tick-driven logo animation.
//! - [`StatusScreen`] — owns the [`FrameBuffer`] and decides each step
//!   whether the composer or the animation draws.
//! - [`OledDriver`] — the SSD1306 I2C [`DisplayTransport`].
//!
//! With the `task` feature, [`display_update_task`] runs the whole thing
//! as an Embassy loop.
//!
//! # Quick Start
//!
//! ```ignore
//! use tonedeck_oled_display_rs::{display_update_task, DisplayConfig, OledDriver};
//!
//! // In your Embassy main:
//! let oled = OledDriver::new(i2c_oled, 0x3C);
//! let config = DisplayConfig::default();
//! spawner.spawn(oled_task(oled, status, config, logo_cancel)).unwrap();
//!
//! // Thin task wrapper (Embassy tasks cannot be generic):
//! #[embassy_executor::task]
//! async fn oled_task(
//!     driver: OledDriver<MyI2cType>,
//!     status: &'static Mutex<CriticalSectionRawMutex, DeviceStatus>,
//!     config: DisplayConfig,
//!     logo_cancel: &'static AtomicBool,
//! ) {
//!     display_update_task(driver, status, config, logo_cancel).await;
//! }
//! ```
//!
//! Without an executor, the same pipeline is a plain loop:
//!
//! ```
//! use tonedeck::device_state::DeviceState;
//! use tonedeck_oled_display_rs::{DisplayConfig, StatusScreen};
//!
//! let mut screen = StatusScreen::new(&DisplayConfig::default());
//! let dirty = screen.update(&DeviceState::default());
//! assert!(dirty);
//! // transport.flush_frame(screen.frame()).await
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`** — structured logging via [`defmt`](https://docs.rs/defmt).
//! - **`task`** — the Embassy entry points in [`display_task`].
//!
//! [`DeviceState`]: tonedeck::device_state::DeviceState

#![no_std]

pub mod animation;
pub mod bitmap;
pub mod blit;
pub mod catalog;
pub mod composer;
#[cfg(feature = "task")]
pub mod display_task;
pub mod driver;
pub mod error;
pub mod frame;
pub mod icons;
pub mod layout;
pub mod screen;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use animation::{AnimationPhase, LogoAnimation, LogoTransform, SlideIn, StaticHold, WipeReveal};
pub use bitmap::BitmapAsset;
pub use blit::{blit, blit_region, BlitMode, Canvas};
pub use catalog::IconId;
pub use composer::{render_slots, render_status};
#[cfg(feature = "task")]
pub use display_task::{display_update_task, run_logo_animation};
pub use driver::{DisplayTransport, OledDriver};
pub use error::OledError;
pub use frame::FrameBuffer;
pub use layout::{DisplayConfig, Slot, SlotLayout, StatusChanges};
pub use screen::{FlushHealth, LinkHealth, StatusScreen};

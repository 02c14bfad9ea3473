//! tonedeck-hw-interface
//!
//! Status display firmware for the Raspberry Pi Pico 2. Wires the tonedeck
//! library crates into a running device:
//!
//! 1. Input handlers (mute button, input selector, alarm clock) mutate the
//!    shared `DeviceStatus` mutex.
//! 2. The OLED task plays the boot logo, then wakes on its 30 Hz ticker,
//!    snapshots the status and redraws the slots that changed.
//! 3. Setting `LOGO_CANCEL` from any task skips the rest of a running logo
//!    animation at its next frame.

#![no_std]
#![no_main]

use core::sync::atomic::AtomicBool;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use tonedeck::device_state::DeviceStatus;
use tonedeck_oled_display_rs::{display_update_task, DisplayConfig, OledDriver};

// ---------------------------------------------------------------------------
// Boot block and interrupt binding
// ---------------------------------------------------------------------------

/// Tell the RP2350 Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = embassy_rp::block::ImageDef::secure_exe();

// Wire the I2C0 peripheral interrupt to Embassy's async handler.
bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

// ---------------------------------------------------------------------------
// Static storage
// ---------------------------------------------------------------------------

/// Shared device status — written by the input handlers, read by the OLED
/// display task.
static DEVICE_STATUS: StaticCell<Mutex<CriticalSectionRawMutex, DeviceStatus>> =
    StaticCell::new();

/// Set to skip the remainder of the logo animation.
static LOGO_CANCEL: AtomicBool = AtomicBool::new(false);

// ---------------------------------------------------------------------------
// Type aliases
// ---------------------------------------------------------------------------

/// Concrete I2C type for the OLED display.
type OledI2c = I2c<'static, I2C0, i2c::Async>;

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Thin wrapper that monomorphises the generic `display_update_task` so it can
/// be spawned as a concrete Embassy task.
#[embassy_executor::task]
async fn oled_task(
    driver: OledDriver<OledI2c>,
    status: &'static Mutex<CriticalSectionRawMutex, DeviceStatus>,
    config: DisplayConfig,
    logo_cancel: &'static AtomicBool,
) {
    display_update_task(driver, status, config, logo_cancel).await;
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("tonedeck-hw-interface starting");

    // —— Pin assignments ————————————————————————————————————————————————————
    // I2C_SDA → GP20  (p.PIN_20)
    // I2C_SCL → GP21  (p.PIN_21)
    // ———————————————————————————————————————————————————————————————————————

    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = 400_000;

    let i2c = I2c::new_async(
        p.I2C0,
        p.PIN_21, // SCL
        p.PIN_20, // SDA
        Irqs,
        i2c_config,
    );

    // OLED display at the standard SSD1306 I2C address.
    let oled_driver = OledDriver::new(i2c, 0x3C);

    let status = DEVICE_STATUS.init(Mutex::new(DeviceStatus::new()));

    // —— Spawn tasks ————————————————————————————————————————————————————————

    let display_config = DisplayConfig::default(); // 30 Hz refresh rate

    spawner
        .spawn(oled_task(oled_driver, status, display_config, &LOGO_CANCEL))
        .unwrap();

    info!("All tasks spawned");
}

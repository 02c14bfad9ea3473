//! Embassy entry points: the logo animation and the display update loop.
//!
//! Both are regular `async fn`s over any [`DisplayTransport`]. Embassy
//! tasks cannot be generic, so firmware wraps [`display_update_task`] in a
//! thin concrete `#[embassy_executor::task]`.

use core::sync::atomic::{AtomicBool, Ordering};

use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, mutex::Mutex};
use embassy_time::{Duration, Ticker};
use tonedeck::device_state::{DeviceStatus, StateProvider};

use crate::animation::{AnimationPhase, LogoTransform};
use crate::driver::DisplayTransport;
use crate::layout::DisplayConfig;
use crate::screen::{LinkHealth, StatusScreen};

// ── Logo animation ───────────────────────────────────────────────────────

/// Play the logo animation to completion.
///
/// Starts the animation on `screen`, ticks it once per
/// `config.update_period_ms()` and flushes every frame that changed. If
/// `cancel` is set (by any other task or an interrupt) the animation stops
/// at the next tick boundary and the display is left cleared. The flag is
/// consumed. Returns once the animation is idle again.
///
/// Flush failures are recorded on the screen. A frame that failed to go out
/// is sent again on the next tick.
pub async fn run_logo_animation<D, T>(
    transport: &mut D,
    screen: &mut StatusScreen<T>,
    cancel: &AtomicBool,
    config: &DisplayConfig,
) where
    D: DisplayTransport,
    T: LogoTransform,
{
    let mut ticker = Ticker::every(Duration::from_millis(config.update_period_ms()));
    screen.start_logo();

    while screen.is_animating() {
        if cancel.swap(false, Ordering::AcqRel) && screen.cancel_logo() {
            #[cfg(feature = "defmt")]
            defmt::info!("logo animation cancelled");
        }

        screen.tick_logo();
        if screen.needs_flush() {
            let result = transport.flush_frame(screen.frame()).await;
            report_flush(screen, result);
        }

        if screen.logo_phase() != AnimationPhase::Idle {
            ticker.next().await;
        }
    }
}

// ── Display update task ──────────────────────────────────────────────────

/// Periodic display update loop.
///
/// This is a regular `async fn` — **not** an Embassy `#[task]`. Callers
/// should create a thin, concrete task wrapper that calls this function:
///
/// ```ignore
/// #[embassy_executor::task]
/// async fn oled_task(
///     driver: OledDriver<MyConcreteI2cType>,
///     status: &'static Mutex<CriticalSectionRawMutex, DeviceStatus>,
///     config: DisplayConfig,
///     logo_cancel: &'static AtomicBool,
/// ) {
///     display_update_task(driver, status, config, logo_cancel).await;
/// }
/// ```
///
/// # Control flow
///
/// 1. Initialise the transport.
/// 2. Play the boot logo ([`run_logo_animation`]); `logo_cancel` skips it.
/// 3. Loop at `config.update_frequency_hz`:
///    - **Step 0** — If `logo_cancel` is set, consume it and cancel a
///      running logo animation (e.g. the alarm wake).
///    - **Step 1** — Lock `status` and take a [`DeviceState`] snapshot and
///      its revision. Release the mutex. If the revision is unchanged and
///      the screen is settled, skip the rest of the iteration.
///    - **Step 2** — [`StatusScreen::update`]: tick the logo (alarm wake)
///      or redraw the slots that changed. No I2C, no mutex.
///    - **Step 3** — If the frame has unflushed content, flush it (~20 ms I2C).
///    - **Step 4** — Record the flush result in the link health.
///
/// # Errors
///
/// * Initialisation failure: logs the error and **returns** (task exits).
/// * Flush failure: logs a warning and continues; the frame is resent in
///   full on the next tick, whether or not the state changed. Crossing `config.flush_failure_threshold`
///   consecutive failures logs one error.
///
/// [`DeviceState`]: tonedeck::device_state::DeviceState
#[allow(clippy::needless_pass_by_value)] // config is small and consumed
pub async fn display_update_task<D>(
    mut transport: D,
    status: &'static Mutex<CriticalSectionRawMutex, DeviceStatus>,
    config: DisplayConfig,
    logo_cancel: &'static AtomicBool,
) where
    D: DisplayTransport,
{
    // ── Initialisation ───────────────────────────────────────────────
    if let Err(_e) = transport.init().await {
        #[cfg(feature = "defmt")]
        defmt::error!("OLED init failed: {}", _e);
        return;
    }

    #[cfg(feature = "defmt")]
    defmt::info!("OLED initialised");

    let mut screen = StatusScreen::new(&config);
    run_logo_animation(&mut transport, &mut screen, logo_cancel, &config).await;

    let mut ticker = Ticker::every(Duration::from_millis(config.update_period_ms()));
    let mut last_revision = None;

    // ── Main loop ────────────────────────────────────────────────────
    loop {
        ticker.next().await;

        // ── Step 0: cancel request ───────────────────────────────────
        if logo_cancel.swap(false, Ordering::AcqRel) && screen.cancel_logo() {
            #[cfg(feature = "defmt")]
            defmt::info!("logo animation cancelled");
        }

        // ── Step 1: snapshot (mutex held briefly) ────────────────────
        let (state, revision) = {
            let status = status.lock().await;
            (status.snapshot(), status.revision())
        };
        if last_revision == Some(revision) && screen.is_settled() {
            continue;
        }
        last_revision = Some(revision);

        // ── Step 2: compose or animate ───────────────────────────────
        if !screen.update(&state) {
            continue;
        }

        // ── Step 3 + 4: flush and track link health ──────────────────
        let result = transport.flush_frame(screen.frame()).await;
        report_flush(&mut screen, result);
    }
}

/// Record a flush result and log it: a warning per dropped frame, one error
/// when the link becomes degraded.
fn report_flush<T: LogoTransform>(screen: &mut StatusScreen<T>, result: Result<(), crate::OledError>) {
    let was_degraded = screen.health().is_degraded();
    let health = screen.record_flush(&result);

    if let Err(_e) = result {
        #[cfg(feature = "defmt")]
        defmt::warn!("Flush failed, frame dropped: {}", _e);
    }

    match health {
        LinkHealth::Degraded {
            consecutive_failures: _n,
        } if !was_degraded => {
            #[cfg(feature = "defmt")]
            defmt::error!("Display link degraded after {} failed flushes", _n);
        }
        LinkHealth::Healthy if was_degraded => {
            #[cfg(feature = "defmt")]
            defmt::info!("Display link recovered");
        }
        _ => {}
    }
}

//! Status screen: one frame buffer, two writers.
//!
//! [`StatusScreen`] owns the [`FrameBuffer`] and hands it to exactly one of
//! the status composer or the logo animation on every
//! [`update()`](StatusScreen::update). While the animation is active the
//! composer does not run. The step in which the animation hands the buffer
//! back recomposes every slot.
//!
//! It also keeps a running [`FlushHealth`] so a transport that keeps
//! failing is reported once instead of on every dropped frame.

use tonedeck::device_state::{AlarmState, DeviceState};

use crate::animation::{AnimationPhase, LogoAnimation, LogoTransform, WipeReveal};
use crate::composer::render_slots;
use crate::error::OledError;
use crate::frame::FrameBuffer;
use crate::layout::{DisplayConfig, SlotLayout, StatusChanges};

// ── Link health ──────────────────────────────────────────────────────────

/// Summary of recent flush results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkHealth {
    /// Fewer consecutive failures than the threshold.
    Healthy,
    /// At least `threshold` flushes in a row have failed.
    Degraded {
        /// Failed flushes since the last success.
        consecutive_failures: u32,
    },
}

impl LinkHealth {
    /// Returns `true` for [`LinkHealth::Degraded`].
    pub fn is_degraded(&self) -> bool {
        matches!(self, LinkHealth::Degraded { .. })
    }
}

/// Counts consecutive transport failures.
#[derive(Debug, Clone, Copy)]
pub struct FlushHealth {
    threshold: u32,
    consecutive_failures: u32,
}

impl FlushHealth {
    /// A healthy counter that degrades after `threshold` failures in a row
    /// (a threshold of 0 is treated as 1).
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold: threshold.max(1),
            consecutive_failures: 0,
        }
    }

    /// Fold one flush result into the counter.
    ///
    /// A success resets it. Only transport failures count against the link;
    /// any other error leaves the count unchanged.
    pub fn record(&mut self, result: &Result<(), OledError>) -> LinkHealth {
        match result {
            Ok(()) => self.consecutive_failures = 0,
            Err(e) if e.is_transport_failure() => {
                self.consecutive_failures = self.consecutive_failures.saturating_add(1);
            }
            Err(_) => {}
        }
        self.health()
    }

    /// Current health.
    pub fn health(&self) -> LinkHealth {
        if self.consecutive_failures >= self.threshold {
            LinkHealth::Degraded {
                consecutive_failures: self.consecutive_failures,
            }
        } else {
            LinkHealth::Healthy
        }
    }
}

// ── StatusScreen ─────────────────────────────────────────────────────────

/// Frame buffer plus the state needed to keep it in sync with the device.
pub struct StatusScreen<T = WipeReveal> {
    frame: FrameBuffer,
    layout: SlotLayout,
    wake_on_alarm: bool,
    logo: LogoAnimation<T>,
    /// Last composed snapshot. `None` forces a full recompose.
    last_state: Option<DeviceState>,
    last_alarm: AlarmState,
    /// Frame content not yet acknowledged by a successful flush.
    needs_flush: bool,
    health: FlushHealth,
}

impl StatusScreen<WipeReveal> {
    /// A blank screen using the default wipe-reveal logo animation.
    pub fn new(config: &DisplayConfig) -> Self {
        Self::with_transform(
            config,
            WipeReveal {
                reveal_frames: config.logo_reveal_frames,
            },
        )
    }
}

impl<T: LogoTransform> StatusScreen<T> {
    /// A blank screen with a custom logo transform.
    pub fn with_transform(config: &DisplayConfig, transform: T) -> Self {
        Self {
            frame: FrameBuffer::new(),
            layout: config.layout,
            wake_on_alarm: config.wake_on_alarm,
            logo: LogoAnimation::new(transform, config.logo_frames),
            last_state: None,
            last_alarm: AlarmState::Off,
            needs_flush: false,
            health: FlushHealth::new(config.flush_failure_threshold),
        }
    }

    /// Advance one main-loop step for `state`.
    ///
    /// Ticks the logo animation if it is active, otherwise redraws the slots
    /// whose value changed since the last compose. The tick that returns the
    /// animation to idle draws nothing, so the status is composed in that
    /// same step.
    ///
    /// Returns `true` while the frame holds content that has not been
    /// flushed successfully; see [`needs_flush()`](Self::needs_flush).
    pub fn update(&mut self, state: &DeviceState) -> bool {
        let alarm_started = state.alarm == AlarmState::Firing && self.last_alarm != AlarmState::Firing;
        self.last_alarm = state.alarm;
        if alarm_started && self.wake_on_alarm {
            self.logo.start();
        }

        if self.logo.is_active() {
            self.tick_logo();
            if self.logo.is_active() {
                return self.needs_flush;
            }
        }

        let changes = StatusChanges::detect(self.last_state.as_ref(), state);
        if changes.any_changed() {
            #[cfg(feature = "defmt")]
            defmt::debug!(
                "status redraw: input={} speaker={} alarm={}",
                changes.input_changed,
                changes.speaker_changed,
                changes.alarm_changed
            );

            render_slots(&mut self.frame, &changes.changed_slots(), state, &self.layout);
            self.last_state = Some(*state);
            self.needs_flush = true;
        }
        self.needs_flush
    }

    /// Start (or restart) the logo animation. Frames are drawn by
    /// subsequent [`update()`](Self::update) or [`tick_logo()`](Self::tick_logo)
    /// calls.
    pub fn start_logo(&mut self) {
        self.logo.start();
    }

    /// Ask a playing logo animation to stop at the next tick.
    pub fn cancel_logo(&mut self) -> bool {
        self.logo.cancel()
    }

    /// Tick only the logo animation. Returns `true` if this tick changed the
    /// frame.
    pub fn tick_logo(&mut self) -> bool {
        let drawing = self.logo.phase() == AnimationPhase::Playing;
        self.logo.tick(&mut self.frame);
        if drawing {
            self.last_state = None;
            self.needs_flush = true;
        }
        drawing
    }

    /// Current phase of the logo animation.
    pub fn logo_phase(&self) -> AnimationPhase {
        self.logo.phase()
    }

    /// Returns `true` while the logo animation owns the frame.
    pub fn is_animating(&self) -> bool {
        self.logo.is_active()
    }

    /// Returns `true` if the frame changed since the last successful flush.
    ///
    /// Stays set across failed flushes, so a dropped frame is sent again on
    /// the next step even if the device state has not changed.
    pub fn needs_flush(&self) -> bool {
        self.needs_flush
    }

    /// Returns `true` if an [`update()`](Self::update) with an unchanged
    /// state would do nothing: no animation running and nothing left to flush.
    pub fn is_settled(&self) -> bool {
        !self.logo.is_active() && !self.needs_flush
    }

    /// The frame to flush.
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Record the outcome of flushing [`frame()`](Self::frame).
    ///
    /// Only a success clears [`needs_flush()`](Self::needs_flush).
    pub fn record_flush(&mut self, result: &Result<(), OledError>) -> LinkHealth {
        if result.is_ok() {
            self.needs_flush = false;
        }
        self.health.record(result)
    }

    /// Current transport health.
    pub fn health(&self) -> LinkHealth {
        self.health.health()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::StaticHold;
    use crate::composer::render_status;
    use display_interface::DisplayError;
    use tonedeck::device_state::{InputSource, SpeakerState};

    fn config() -> DisplayConfig {
        DisplayConfig {
            logo_frames: 3,
            flush_failure_threshold: 3,
            ..DisplayConfig::default()
        }
    }

    fn composed(state: &DeviceState) -> FrameBuffer {
        let mut f = FrameBuffer::new();
        render_status(&mut f, state, &SlotLayout::default());
        f
    }

    fn firing() -> DeviceState {
        DeviceState::new(InputSource::Digital, SpeakerState::Playing, AlarmState::Firing)
    }

    fn bus_error() -> Result<(), OledError> {
        Err(OledError::Display(DisplayError::BusWriteError))
    }

    /// One loop iteration against a transport that always succeeds.
    /// Returns whether a flush was sent.
    fn step<T: LogoTransform>(screen: &mut StatusScreen<T>, state: &DeviceState) -> bool {
        let dirty = screen.update(state);
        if dirty {
            screen.record_flush(&Ok(()));
        }
        dirty
    }

    /// Step until the animation is idle again, returning how many steps
    /// that took.
    fn run_out_logo<T: LogoTransform>(screen: &mut StatusScreen<T>, state: &DeviceState) -> u32 {
        let mut n = 0;
        while screen.is_animating() {
            step(screen, state);
            n += 1;
            assert!(n < 100, "animation never finished");
        }
        n
    }

    // ── Composing ────────────────────────────────────────────────────

    #[test]
    fn first_update_composes_everything() {
        let mut screen = StatusScreen::new(&config());
        let state = DeviceState::default();
        assert!(screen.update(&state));
        assert_eq!(screen.frame(), &composed(&state));
    }

    #[test]
    fn unchanged_state_is_not_redrawn() {
        let mut screen = StatusScreen::new(&config());
        let state = DeviceState::default();
        assert!(step(&mut screen, &state));
        assert!(!step(&mut screen, &state));
        assert!(!step(&mut screen, &state));
        assert!(screen.is_settled());
    }

    #[test]
    fn every_transition_matches_fresh_render() {
        for from in DeviceState::all() {
            for to in DeviceState::all() {
                let mut screen = StatusScreen::new(&DisplayConfig {
                    wake_on_alarm: false,
                    ..config()
                });
                step(&mut screen, &from);
                assert_eq!(step(&mut screen, &to), from != to);
                assert_eq!(screen.frame(), &composed(&to), "{:?} -> {:?}", from, to);
            }
        }
    }

    // ── Flush retry ──────────────────────────────────────────────────

    #[test]
    fn failed_flush_is_resent_while_state_is_unchanged() {
        let mut screen = StatusScreen::new(&config());
        let state = DeviceState::default();

        assert!(screen.update(&state));
        screen.record_flush(&bus_error());
        assert!(screen.needs_flush());
        assert!(!screen.is_settled());

        assert!(screen.update(&state));
        assert_eq!(screen.frame(), &composed(&state));
        screen.record_flush(&Ok(()));

        assert!(!screen.needs_flush());
        assert!(!screen.update(&state));
    }

    #[test]
    fn static_state_with_failing_link_degrades() {
        let mut screen = StatusScreen::new(&config());
        let state = DeviceState::default();

        let mut health = LinkHealth::Healthy;
        for _ in 0..3 {
            assert!(screen.update(&state));
            health = screen.record_flush(&bus_error());
        }
        assert_eq!(
            health,
            LinkHealth::Degraded {
                consecutive_failures: 3
            }
        );
    }

    #[test]
    fn non_transport_error_still_keeps_frame_pending() {
        let mut screen = StatusScreen::new(&config());
        let state = DeviceState::default();
        screen.update(&state);
        screen.record_flush(&Err(OledError::Render));
        assert!(screen.update(&state));
    }

    // ── Logo ─────────────────────────────────────────────────────────

    #[test]
    fn composer_is_suspended_while_animating() {
        let mut screen = StatusScreen::with_transform(&config(), StaticHold);
        screen.start_logo();
        assert!(step(&mut screen, &DeviceState::default()));
        let logo_frame = screen.frame().clone();

        // A state change during the animation does not touch the frame.
        let muted = DeviceState {
            speaker: SpeakerState::Muted,
            ..DeviceState::default()
        };
        assert!(step(&mut screen, &muted));
        assert_eq!(screen.frame(), &logo_frame);
        assert!(screen.is_animating());
    }

    #[test]
    fn animation_hands_back_for_full_recompose() {
        let mut screen = StatusScreen::new(&config());
        let state = DeviceState::default();
        step(&mut screen, &state);

        screen.start_logo();
        run_out_logo(&mut screen, &state);
        // Same state as before the animation, still redrawn.
        assert_eq!(screen.frame(), &composed(&state));
        assert!(screen.is_settled());
    }

    #[test]
    fn status_returns_on_the_step_the_animation_goes_idle() {
        let mut screen = StatusScreen::new(&config());
        let state = DeviceState::default();
        screen.start_logo();

        // Three drawn frames, then the clearing tick.
        for _ in 0..4 {
            step(&mut screen, &state);
        }
        assert_eq!(screen.logo_phase(), AnimationPhase::Done);
        assert!(screen.frame().is_blank());

        // Done -> Idle and the compose happen in one step.
        assert!(step(&mut screen, &state));
        assert_eq!(screen.logo_phase(), AnimationPhase::Idle);
        assert_eq!(screen.frame(), &composed(&state));
    }

    #[test]
    fn logo_runs_for_configured_frames() {
        let mut screen = StatusScreen::new(&config());
        screen.start_logo();
        // 3 drawn frames, one clearing tick, one tick back to idle.
        assert_eq!(run_out_logo(&mut screen, &DeviceState::default()), 5);
    }

    #[test]
    fn cancel_clears_on_next_update() {
        let mut screen = StatusScreen::new(&DisplayConfig {
            logo_frames: 100,
            ..config()
        });
        let state = DeviceState::default();
        screen.start_logo();
        step(&mut screen, &state);
        assert!(screen.cancel_logo());

        assert!(step(&mut screen, &state));
        assert_eq!(screen.logo_phase(), AnimationPhase::Done);
        assert!(screen.frame().is_blank());

        assert!(step(&mut screen, &state));
        assert_eq!(screen.logo_phase(), AnimationPhase::Idle);
        assert_eq!(screen.frame(), &composed(&state));
    }

    #[test]
    fn alarm_wake_animation_can_be_cancelled() {
        let mut screen = StatusScreen::new(&DisplayConfig {
            logo_frames: 100,
            ..config()
        });
        step(&mut screen, &DeviceState::default());

        step(&mut screen, &firing());
        assert_eq!(screen.logo_phase(), AnimationPhase::Playing);
        assert!(screen.cancel_logo());

        step(&mut screen, &firing());
        assert_eq!(screen.logo_phase(), AnimationPhase::Done);
        assert!(screen.frame().is_blank());

        step(&mut screen, &firing());
        assert!(!screen.is_animating());
        assert_eq!(screen.frame(), &composed(&firing()));

        // Still firing: the cancelled wake animation does not restart.
        step(&mut screen, &firing());
        assert!(!screen.is_animating());
    }

    #[test]
    fn alarm_firing_wakes_logo_once() {
        let mut screen = StatusScreen::new(&config());
        step(&mut screen, &DeviceState::default());
        assert!(!screen.is_animating());

        step(&mut screen, &firing());
        assert!(screen.is_animating());
        run_out_logo(&mut screen, &firing());

        // Still firing: no replay.
        step(&mut screen, &firing());
        assert!(!screen.is_animating());
        assert_eq!(screen.frame(), &composed(&firing()));
    }

    #[test]
    fn alarm_refiring_replays_logo() {
        let mut screen = StatusScreen::new(&config());
        step(&mut screen, &firing());
        run_out_logo(&mut screen, &firing());

        let armed = DeviceState {
            alarm: AlarmState::Armed,
            ..firing()
        };
        step(&mut screen, &armed);
        step(&mut screen, &firing());
        assert!(screen.is_animating());
    }

    #[test]
    fn wake_on_alarm_can_be_disabled() {
        let mut screen = StatusScreen::new(&DisplayConfig {
            wake_on_alarm: false,
            ..config()
        });
        step(&mut screen, &DeviceState::default());
        step(&mut screen, &firing());
        assert!(!screen.is_animating());
        assert_eq!(screen.frame(), &composed(&firing()));
    }

    // ── Health ───────────────────────────────────────────────────────

    #[test]
    fn degrades_after_threshold_and_recovers() {
        let mut screen = StatusScreen::new(&config());

        assert_eq!(screen.record_flush(&bus_error()), LinkHealth::Healthy);
        assert_eq!(screen.record_flush(&bus_error()), LinkHealth::Healthy);
        assert_eq!(
            screen.record_flush(&bus_error()),
            LinkHealth::Degraded {
                consecutive_failures: 3
            }
        );
        assert!(screen.health().is_degraded());

        assert_eq!(screen.record_flush(&Ok(())), LinkHealth::Healthy);
        assert_eq!(screen.health(), LinkHealth::Healthy);
    }

    #[test]
    fn success_resets_the_run() {
        let mut health = FlushHealth::new(2);
        health.record(&Err(OledError::Render));
        health.record(&Ok(()));
        assert_eq!(health.record(&Err(OledError::Render)), LinkHealth::Healthy);
    }

    #[test]
    fn non_transport_errors_do_not_count() {
        let mut health = FlushHealth::new(1);
        assert_eq!(health.record(&Err(OledError::NotFound)), LinkHealth::Healthy);
        assert!(health.record(&Err(OledError::NotInitialized)).is_degraded());
    }

    #[test]
    fn zero_threshold_degrades_on_first_failure() {
        let mut health = FlushHealth::new(0);
        assert_eq!(health.health(), LinkHealth::Healthy);
        assert!(health.record(&Err(OledError::Render)).is_degraded());
    }
}

use super::error::StateError;
use super::fields::{AlarmState, DeviceState, InputSource, SpeakerState};

/// Read-only access to the current device state.
///
/// The display core only ever consumes state through this trait; it never
/// mutates it.
pub trait StateProvider {
    /// Take a consistent snapshot of the current state.
    fn snapshot(&self) -> DeviceState;
}

/// Mutable device state shared between the input handlers and the
/// display task.
///
/// Typically wrapped in an `embassy_sync::mutex::Mutex` and held in a
/// `StaticCell`. Writers hold the lock only for the duration of a setter
/// call; the display task holds it only long enough to call
/// [`snapshot()`](StateProvider::snapshot).
///
/// Every setter that actually changes the state bumps
/// [`revision()`](Self::revision); setters that write the current value
/// again leave it untouched.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceStatus {
    state: DeviceState,
    revision: u32,
}

impl DeviceStatus {
    /// Start from the power-on defaults (digital input, playing, alarm off).
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an explicit state, e.g. one restored from flash.
    pub fn with_state(state: DeviceState) -> Self {
        Self { state, revision: 0 }
    }

    /// Monotonic (wrapping) change counter.
    pub fn revision(&self) -> u32 {
        self.revision
    }

    // ── Input selector ───────────────────────────────────────────────

    /// Select an input source.
    pub fn set_input_source(&mut self, input: InputSource) {
        let next = DeviceState {
            input_source: input,
            ..self.state
        };
        self.replace(next);
    }

    /// Switch to the other input source and return the new selection.
    pub fn toggle_input_source(&mut self) -> InputSource {
        let input = self.state.input_source.toggled();
        self.set_input_source(input);
        input
    }

    // ── Mute ─────────────────────────────────────────────────────────

    /// Mute or unmute the speaker output.
    pub fn set_muted(&mut self, muted: bool) {
        let next = DeviceState {
            speaker: SpeakerState::from_muted(muted),
            ..self.state
        };
        self.replace(next);
    }

    /// Flip the mute state and return `true` if the output is now muted.
    pub fn toggle_mute(&mut self) -> bool {
        let muted = !self.state.speaker.is_muted();
        self.set_muted(muted);
        muted
    }

    // ── Alarm ────────────────────────────────────────────────────────

    /// Arm the alarm. Arming a firing alarm stops it ringing but keeps it set.
    pub fn arm_alarm(&mut self) {
        self.set_alarm(AlarmState::Armed);
    }

    /// Turn the alarm off from any state.
    pub fn disarm_alarm(&mut self) {
        self.set_alarm(AlarmState::Off);
    }

    /// The alarm time was reached.
    ///
    /// Returns [`StateError::AlarmNotArmed`] unless the alarm is armed.
    /// Firing an already firing alarm is accepted and changes nothing.
    pub fn fire_alarm(&mut self) -> Result<(), StateError> {
        match self.state.alarm {
            AlarmState::Armed => {
                self.set_alarm(AlarmState::Firing);
                Ok(())
            }
            AlarmState::Firing => Ok(()),
            AlarmState::Off => {
                #[cfg(feature = "defmt")]
                defmt::warn!("fire_alarm ignored: alarm is off");
                Err(StateError::AlarmNotArmed)
            }
        }
    }

    /// Silence a firing alarm but keep it armed for the next day.
    ///
    /// Returns [`StateError::AlarmNotFiring`] if the alarm is not firing.
    pub fn snooze_alarm(&mut self) -> Result<(), StateError> {
        if self.state.alarm != AlarmState::Firing {
            #[cfg(feature = "defmt")]
            defmt::warn!("snooze_alarm ignored: alarm is {}", self.state.alarm);
            return Err(StateError::AlarmNotFiring);
        }
        self.set_alarm(AlarmState::Armed);
        Ok(())
    }

    // ── Private helpers ──────────────────────────────────────────────

    fn set_alarm(&mut self, alarm: AlarmState) {
        let next = DeviceState {
            alarm,
            ..self.state
        };
        self.replace(next);
    }

    fn replace(&mut self, next: DeviceState) {
        if next != self.state {
            self.state = next;
            self.revision = self.revision.wrapping_add(1);
        }
    }
}

impl StateProvider for DeviceStatus {
    fn snapshot(&self) -> DeviceState {
        self.state
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_status_has_default_snapshot() {
        let status = DeviceStatus::new();
        assert_eq!(status.snapshot(), DeviceState::default());
        assert_eq!(status.revision(), 0);
    }

    #[test]
    fn with_state_restores_snapshot() {
        let state = DeviceState::new(InputSource::Analog, SpeakerState::Muted, AlarmState::Armed);
        let status = DeviceStatus::with_state(state);
        assert_eq!(status.snapshot(), state);
    }

    // ── Change tracking ──────────────────────────────────────────────

    #[test]
    fn setters_bump_revision_only_on_change() {
        let mut status = DeviceStatus::new();

        status.set_input_source(InputSource::Digital);
        assert_eq!(status.revision(), 0);

        status.set_input_source(InputSource::Analog);
        assert_eq!(status.revision(), 1);

        status.set_muted(false);
        assert_eq!(status.revision(), 1);

        status.set_muted(true);
        assert_eq!(status.revision(), 2);
    }

    #[test]
    fn revision_wraps() {
        let mut status = DeviceStatus::new();
        status.revision = u32::MAX;
        status.toggle_mute();
        assert_eq!(status.revision(), 0);
    }

    // ── Toggles ──────────────────────────────────────────────────────

    #[test]
    fn toggle_input_source_returns_new_selection() {
        let mut status = DeviceStatus::new();
        assert_eq!(status.toggle_input_source(), InputSource::Analog);
        assert_eq!(status.snapshot().input_source, InputSource::Analog);
        assert_eq!(status.toggle_input_source(), InputSource::Digital);
    }

    #[test]
    fn toggle_mute_returns_new_flag() {
        let mut status = DeviceStatus::new();
        assert!(status.toggle_mute());
        assert!(status.snapshot().is_muted());
        assert!(!status.toggle_mute());
        assert!(!status.snapshot().is_muted());
    }

    #[test]
    fn toggles_leave_other_fields_alone() {
        let mut status = DeviceStatus::new();
        status.arm_alarm();
        status.toggle_mute();
        status.toggle_input_source();
        let s = status.snapshot();
        assert_eq!(s.alarm, AlarmState::Armed);
        assert_eq!(s.speaker, SpeakerState::Muted);
        assert_eq!(s.input_source, InputSource::Analog);
    }

    // ── Alarm lifecycle ──────────────────────────────────────────────

    #[test]
    fn alarm_full_cycle() {
        let mut status = DeviceStatus::new();
        status.arm_alarm();
        assert_eq!(status.snapshot().alarm, AlarmState::Armed);

        assert!(status.fire_alarm().is_ok());
        assert_eq!(status.snapshot().alarm, AlarmState::Firing);

        assert!(status.snooze_alarm().is_ok());
        assert_eq!(status.snapshot().alarm, AlarmState::Armed);

        status.disarm_alarm();
        assert_eq!(status.snapshot().alarm, AlarmState::Off);
    }

    #[test]
    fn fire_requires_armed_alarm() {
        let mut status = DeviceStatus::new();
        assert_eq!(status.fire_alarm(), Err(StateError::AlarmNotArmed));
        assert_eq!(status.snapshot().alarm, AlarmState::Off);
        assert_eq!(status.revision(), 0);
    }

    #[test]
    fn fire_while_firing_is_a_no_op() {
        let mut status = DeviceStatus::new();
        status.arm_alarm();
        status.fire_alarm().unwrap();
        let rev = status.revision();
        assert!(status.fire_alarm().is_ok());
        assert_eq!(status.revision(), rev);
    }

    #[test]
    fn snooze_requires_firing_alarm() {
        let mut status = DeviceStatus::new();
        assert_eq!(status.snooze_alarm(), Err(StateError::AlarmNotFiring));
        status.arm_alarm();
        assert_eq!(status.snooze_alarm(), Err(StateError::AlarmNotFiring));
    }

    #[test]
    fn disarm_stops_firing_alarm() {
        let mut status = DeviceStatus::new();
        status.arm_alarm();
        status.fire_alarm().unwrap();
        status.disarm_alarm();
        assert_eq!(status.snapshot().alarm, AlarmState::Off);
    }
}

//! Display configuration, slot geometry and change detection.
//!
//! This module defines [`DisplayConfig`] (the single source of layout and
//! timing parameters), the [`Slot`]s the status screen is divided into,
//! and the [`StatusChanges`] diff between two device-state snapshots.

use embedded_graphics::{
    geometry::{Point, Size},
    primitives::Rectangle,
};
use heapless::Vec;
use tonedeck::device_state::DeviceState;

use crate::catalog::{self, IconId};

// ── Slots ────────────────────────────────────────────────────────────────

/// A fixed screen region reserved for one category of status icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Slot {
    /// Input selector (digital / analog).
    Input,
    /// Speaker (playing / muted).
    Speaker,
    /// Alarm clock (blank when off).
    Alarm,
}

impl Slot {
    /// Drawing order. Status-row icons first, overlays last, so an overlay
    /// is never painted over by a slot drawn after it.
    pub const Z_ORDER: [Slot; 3] = [Slot::Input, Slot::Speaker, Slot::Alarm];

    /// Icons that may occupy this slot.
    pub fn candidates(self) -> &'static [IconId] {
        match self {
            Slot::Input => &[IconId::InputSelectDigital, IconId::InputSelectAnalog],
            Slot::Speaker => &[IconId::SpeakerMuted, IconId::SpeakerPlaying],
            Slot::Alarm => &[IconId::Alarm],
        }
    }

    /// Size of the slot: the bounding size of every candidate icon.
    pub fn size(self) -> Size {
        self.candidates()
            .iter()
            .map(|&id| catalog::asset(id).size())
            .fold(Size::zero(), |acc, s| acc.component_max(s))
    }
}

/// Top-left corner of each slot.
///
/// ```text
/// ┌──────────────────────────────────────────────┐
/// │ ┌input─┐                            ┌alarm─┐ │
/// │ └──────┘                            │      │ │
/// │                                     │      │ │
/// │ ┌speaker                            └──────┘ │
/// │ └──────┘                                     │
/// └──────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotLayout {
    /// Input selector slot origin. Default: `(0, 2)`.
    pub input: Point,
    /// Speaker slot origin. Default: `(0, 42)`.
    pub speaker: Point,
    /// Alarm slot origin. Default: `(96, 13)`.
    pub alarm: Point,
}

impl Default for SlotLayout {
    fn default() -> Self {
        Self {
            input: Point::new(0, 2),
            speaker: Point::new(0, 42),
            alarm: Point::new(96, 13),
        }
    }
}

impl SlotLayout {
    /// Origin of a slot.
    pub fn origin(&self, slot: Slot) -> Point {
        match slot {
            Slot::Input => self.input,
            Slot::Speaker => self.speaker,
            Slot::Alarm => self.alarm,
        }
    }

    /// Screen rectangle covered by a slot.
    pub fn rect(&self, slot: Slot) -> Rectangle {
        Rectangle::new(self.origin(slot), slot.size())
    }

    /// Returns `true` if every slot lies entirely inside a screen of the
    /// given size.
    pub fn fits(&self, screen: Size) -> bool {
        let bounds = Rectangle::new(Point::zero(), screen);
        Slot::Z_ORDER.iter().all(|&slot| {
            let rect = self.rect(slot);
            rect.intersection(&bounds) == rect
        })
    }
}

// ── DisplayConfig ────────────────────────────────────────────────────────

/// Configuration for the status display and its update task.
///
/// All layout geometry and timing lives here — there are **no**
/// module-level layout constants.
pub struct DisplayConfig {
    /// Display refresh rate in Hz. Default: 30. Clamped to `1..=60`.
    pub update_frequency_hz: u32,
    /// Slot positions.
    pub layout: SlotLayout,
    /// Length of the logo animation in ticks. Default: 45 (1.5 s at 30 Hz).
    pub logo_frames: u32,
    /// Ticks the default wipe takes to uncover the whole logo before it is
    /// held. Default: 30.
    pub logo_reveal_frames: u32,
    /// Replay the logo animation when the alarm starts firing. Default: `true`.
    pub wake_on_alarm: bool,
    /// Consecutive failed flushes before the link is reported degraded.
    /// Default: 10.
    pub flush_failure_threshold: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            update_frequency_hz: 30,
            layout: SlotLayout::default(),
            logo_frames: 45,
            logo_reveal_frames: 30,
            wake_on_alarm: true,
            flush_failure_threshold: 10,
        }
    }
}

impl DisplayConfig {
    /// Convert the configured frequency to a timer period in milliseconds.
    ///
    /// Formula: `1000 / update_frequency_hz`.
    pub fn update_period_ms(&self) -> u64 {
        1000 / self.update_frequency_hz.clamp(1, 60) as u64
    }
}

// ── StatusChanges ────────────────────────────────────────────────────────

/// Identifies which slots changed between two [`DeviceState`] snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChanges {
    /// `true` if the input source differs.
    pub input_changed: bool,
    /// `true` if the mute state differs.
    pub speaker_changed: bool,
    /// `true` if the alarm state differs.
    pub alarm_changed: bool,
}

impl StatusChanges {
    /// Diff two snapshots field-by-field. With no previous snapshot every
    /// slot counts as changed.
    pub fn detect(old: Option<&DeviceState>, new: &DeviceState) -> Self {
        match old {
            Some(old) => Self {
                input_changed: old.input_source != new.input_source,
                speaker_changed: old.speaker != new.speaker,
                alarm_changed: old.alarm != new.alarm,
            },
            None => Self::all(),
        }
    }

    /// Every slot changed.
    pub fn all() -> Self {
        Self {
            input_changed: true,
            speaker_changed: true,
            alarm_changed: true,
        }
    }

    /// Returns `true` if `slot` changed.
    pub fn slot_changed(&self, slot: Slot) -> bool {
        match slot {
            Slot::Input => self.input_changed,
            Slot::Speaker => self.speaker_changed,
            Slot::Alarm => self.alarm_changed,
        }
    }

    /// Changed slots in z-order.
    pub fn changed_slots(&self) -> Vec<Slot, 3> {
        Slot::Z_ORDER
            .iter()
            .copied()
            .filter(|&slot| self.slot_changed(slot))
            .collect()
    }

    /// Returns `true` if any slot changed.
    pub fn any_changed(&self) -> bool {
        self.input_changed || self.speaker_changed || self.alarm_changed
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{FRAME_HEIGHT, FRAME_WIDTH};
    use tonedeck::device_state::{AlarmState, InputSource, SpeakerState};

    #[test]
    fn default_config_values() {
        let c = DisplayConfig::default();
        assert_eq!(c.update_frequency_hz, 30);
        assert_eq!(c.logo_frames, 45);
        assert_eq!(c.logo_reveal_frames, 30);
        assert!(c.wake_on_alarm);
        assert_eq!(c.flush_failure_threshold, 10);
        assert_eq!(c.layout, SlotLayout::default());
    }

    #[test]
    fn update_period_30hz() {
        let c = DisplayConfig::default();
        assert_eq!(c.update_period_ms(), 33);
    }

    #[test]
    fn update_period_60hz() {
        let c = DisplayConfig {
            update_frequency_hz: 60,
            ..DisplayConfig::default()
        };
        assert_eq!(c.update_period_ms(), 16);
    }

    #[test]
    fn update_period_is_clamped() {
        let zero = DisplayConfig {
            update_frequency_hz: 0,
            ..DisplayConfig::default()
        };
        assert_eq!(zero.update_period_ms(), 1000);

        let fast = DisplayConfig {
            update_frequency_hz: 500,
            ..DisplayConfig::default()
        };
        assert_eq!(fast.update_period_ms(), 16);
    }

    // ── Slots ────────────────────────────────────────────────────────

    #[test]
    fn slot_sizes_cover_their_icons() {
        assert_eq!(Slot::Input.size(), Size::new(32, 20));
        assert_eq!(Slot::Speaker.size(), Size::new(32, 20));
        assert_eq!(Slot::Alarm.size(), Size::new(32, 37));
    }

    #[test]
    fn alarm_is_drawn_last() {
        assert_eq!(Slot::Z_ORDER.last(), Some(&Slot::Alarm));
    }

    #[test]
    fn default_layout_fits_and_slots_do_not_overlap() {
        let layout = SlotLayout::default();
        assert!(layout.fits(Size::new(FRAME_WIDTH, FRAME_HEIGHT)));

        for (i, &a) in Slot::Z_ORDER.iter().enumerate() {
            for &b in &Slot::Z_ORDER[i + 1..] {
                let overlap = layout.rect(a).intersection(&layout.rect(b));
                assert!(overlap.is_zero_sized(), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn layout_off_screen_does_not_fit() {
        let layout = SlotLayout {
            alarm: Point::new(100, 13),
            ..SlotLayout::default()
        };
        assert!(!layout.fits(Size::new(FRAME_WIDTH, FRAME_HEIGHT)));
    }

    // ── StatusChanges ────────────────────────────────────────────────

    #[test]
    fn no_previous_state_changes_everything() {
        let changes = StatusChanges::detect(None, &DeviceState::default());
        assert!(changes.any_changed());
        assert_eq!(changes.changed_slots().as_slice(), &Slot::Z_ORDER);
    }

    #[test]
    fn identical_states_have_no_changes() {
        let s = DeviceState::default();
        let changes = StatusChanges::detect(Some(&s), &s);
        assert!(!changes.any_changed());
        assert!(changes.changed_slots().is_empty());
    }

    #[test]
    fn detects_individual_fields() {
        let a = DeviceState::default();
        let b = DeviceState::new(InputSource::Digital, SpeakerState::Muted, AlarmState::Firing);
        let changes = StatusChanges::detect(Some(&a), &b);
        assert!(!changes.input_changed);
        assert!(changes.speaker_changed);
        assert!(changes.alarm_changed);
        assert_eq!(changes.changed_slots().as_slice(), &[Slot::Speaker, Slot::Alarm]);
    }
}

//! Status composer: maps a [`DeviceState`] onto slot icons.
//!
//! | field          | value           | slot    | icon                   |
//! |----------------|-----------------|---------|------------------------|
//! | `input_source` | `Digital`       | input   | `input-select-digital` |
//! | `input_source` | `Analog`        | input   | `input-select-analog`  |
//! | `speaker`      | `Muted`         | speaker | `speaker-muted`        |
//! | `speaker`      | `Playing`       | speaker | `speaker-playing`      |
//! | `alarm`        | `Armed`         | alarm   | `alarm`                |
//! | `alarm`        | `Firing`        | alarm   | `alarm`, inverted      |
//! | `alarm`        | `Off`           | alarm   | *(blank)*              |
//!
//! Every slot is erased before its icon is drawn, so a slot that goes blank
//! (alarm switched off) never keeps the previous icon.

use embedded_graphics::pixelcolor::BinaryColor;
use tonedeck::device_state::{AlarmState, DeviceState, InputSource, SpeakerState};

use crate::blit::{blit, BlitMode};
use crate::catalog::{self, IconId};
use crate::frame::FrameBuffer;
use crate::layout::{Slot, SlotLayout};

/// Icon (and blit mode) shown in `slot` for `state`, or `None` if the slot
/// stays blank.
pub fn slot_icon(slot: Slot, state: &DeviceState) -> Option<(IconId, BlitMode)> {
    match slot {
        Slot::Input => Some(match state.input_source {
            InputSource::Digital => (IconId::InputSelectDigital, BlitMode::Normal),
            InputSource::Analog => (IconId::InputSelectAnalog, BlitMode::Normal),
        }),
        Slot::Speaker => Some(match state.speaker {
            SpeakerState::Muted => (IconId::SpeakerMuted, BlitMode::Normal),
            SpeakerState::Playing => (IconId::SpeakerPlaying, BlitMode::Normal),
        }),
        Slot::Alarm => match state.alarm {
            AlarmState::Off => None,
            AlarmState::Armed => Some((IconId::Alarm, BlitMode::Normal)),
            AlarmState::Firing => Some((IconId::Alarm, BlitMode::Invert)),
        },
    }
}

/// Redraw one slot: erase its rectangle, then draw its icon if it has one.
pub fn render_slot(frame: &mut FrameBuffer, slot: Slot, state: &DeviceState, layout: &SlotLayout) {
    let rect = layout.rect(slot);
    frame.fill_region(&rect, BinaryColor::Off);
    if let Some((id, mode)) = slot_icon(slot, state) {
        blit(frame, catalog::asset(id), rect.top_left, mode);
    }
}

/// Redraw the given slots in z-order.
///
/// Slots are sorted into [`Slot::Z_ORDER`] regardless of the order they
/// are passed in, so a partial redraw stacks exactly like a full one.
pub fn render_slots(frame: &mut FrameBuffer, slots: &[Slot], state: &DeviceState, layout: &SlotLayout) {
    for slot in Slot::Z_ORDER {
        if slots.contains(&slot) {
            render_slot(frame, slot, state, layout);
        }
    }
}

/// Redraw every slot for `state`.
///
/// Rendering the same state twice leaves the frame bit-identical.
///
/// # Example
///
/// ```
/// use tonedeck::device_state::{AlarmState, DeviceState, InputSource, SpeakerState};
/// use tonedeck_oled_display_rs::{render_status, FrameBuffer, SlotLayout};
///
/// let mut frame = FrameBuffer::new();
/// let state = DeviceState::new(InputSource::Analog, SpeakerState::Muted, AlarmState::Armed);
/// render_status(&mut frame, &state, &SlotLayout::default());
/// assert!(!frame.is_blank());
/// ```
pub fn render_status(frame: &mut FrameBuffer, state: &DeviceState, layout: &SlotLayout) {
    render_slots(frame, &Slot::Z_ORDER, state, layout);
}

// ── Tests ────────────────────────────────────────────────────────────────

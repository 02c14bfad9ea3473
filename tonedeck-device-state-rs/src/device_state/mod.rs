//! Device state observed by the front-panel display.
//!
//! This module provides two layers:
//!
//! - **[`DeviceState`]** — an immutable, `Copy` snapshot of the three
//!   fields the display cares about. Consumers only ever see a snapshot,
//!   taken once per render cycle.
//! - **[`DeviceStatus`]** — the mutable store owned by the collaborators
//!   that sense input (buttons, rotary encoder, alarm clock). It enforces
//!   the alarm lifecycle and counts revisions so consumers can skip work
//!   when nothing changed.
//!
//! ```text
//! buttons / alarm clock ──▶ DeviceStatus ──snapshot()──▶ display task
//! ```
//!
//! Every field is a closed enum rather than a loose flag, so a consumer
//! matching on a [`DeviceState`] is checked for exhaustiveness at compile
//! time.
//!
//! # `no_std` Compatibility
//!
//! No heap allocation. The optional `defmt` feature derives
//! `defmt::Format` for every public type and enables logging of rejected
//! alarm transitions.

mod error;
mod fields;
mod status;

pub use error::StateError;
pub use fields::{AlarmState, DeviceState, InputSource, SpeakerState};
pub use status::{DeviceStatus, StateProvider};

//! Shared device state for the tonedeck front panel.
//!
//! The [`device_state`] module holds the input-source, mute and alarm
//! state that the button/encoder handlers write and the OLED display
//! task reads once per refresh.

#![no_std]

pub mod device_state;

//! The fixed icon catalog.
//!
//! Every bitmap the display can show is declared here as a `static`
//! [`BitmapAsset`]. Declaring them as statics runs the length check in
//! [`BitmapAsset::new()`] at compile time, so an asset whose declared size
//! does not match its data never builds.
//!
//! | identifier               | size  |
//! |--------------------------|-------|
//! | `input-select-digital`   | 32×20 |
//! | `input-select-analog`    | 32×20 |
//! | `speaker-muted`          | 32×20 |
//! | `speaker-playing`        | 32×20 |
//! | `alarm`                  | 32×37 |
//! | `logo`                   | 96×32 |

use crate::bitmap::BitmapAsset;
use crate::error::OledError;
use crate::icons;

/// Identifier of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IconId {
    InputSelectDigital,
    InputSelectAnalog,
    SpeakerMuted,
    SpeakerPlaying,
    Alarm,
    Logo,
}

impl IconId {
    /// Every catalog entry.
    pub const ALL: [IconId; 6] = [
        IconId::InputSelectDigital,
        IconId::InputSelectAnalog,
        IconId::SpeakerMuted,
        IconId::SpeakerPlaying,
        IconId::Alarm,
        IconId::Logo,
    ];

    /// Stable, human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            IconId::InputSelectDigital => "input-select-digital",
            IconId::InputSelectAnalog => "input-select-analog",
            IconId::SpeakerMuted => "speaker-muted",
            IconId::SpeakerPlaying => "speaker-playing",
            IconId::Alarm => "alarm",
            IconId::Logo => "logo",
        }
    }

    /// Reverse of [`name()`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.name() == name)
    }
}

pub static INPUT_SELECT_DIGITAL: BitmapAsset = BitmapAsset::new(
    IconId::InputSelectDigital,
    32,
    20,
    &icons::INPUT_SELECT_DIGITAL_BITS,
);

pub static INPUT_SELECT_ANALOG: BitmapAsset = BitmapAsset::new(
    IconId::InputSelectAnalog,
    32,
    20,
    &icons::INPUT_SELECT_ANALOG_BITS,
);

pub static SPEAKER_MUTED: BitmapAsset =
    BitmapAsset::new(IconId::SpeakerMuted, 32, 20, &icons::SPEAKER_MUTED_BITS);

pub static SPEAKER_PLAYING: BitmapAsset =
    BitmapAsset::new(IconId::SpeakerPlaying, 32, 20, &icons::SPEAKER_PLAYING_BITS);

pub static ALARM: BitmapAsset = BitmapAsset::new(IconId::Alarm, 32, 37, &icons::ALARM_BITS);

pub static LOGO: BitmapAsset = BitmapAsset::new(IconId::Logo, 96, 32, &icons::LOGO_BITS);

/// Fetch the asset for an identifier.
pub fn asset(id: IconId) -> &'static BitmapAsset {
    match id {
        IconId::InputSelectDigital => &INPUT_SELECT_DIGITAL,
        IconId::InputSelectAnalog => &INPUT_SELECT_ANALOG,
        IconId::SpeakerMuted => &SPEAKER_MUTED,
        IconId::SpeakerPlaying => &SPEAKER_PLAYING,
        IconId::Alarm => &ALARM,
        IconId::Logo => &LOGO,
    }
}

/// Look an asset up by its [name](IconId::name).
///
/// # Errors
///
/// Returns [`OledError::NotFound`] for a name that is not in the catalog.
/// Names come from firmware constants, so this indicates an integration
/// bug rather than a runtime condition.
pub fn lookup(name: &str) -> Result<&'static BitmapAsset, OledError> {
    match IconId::from_name(name) {
        Some(id) => Ok(asset(id)),
        None => {
            #[cfg(feature = "defmt")]
            defmt::error!("icon lookup failed: {=str}", name);
            Err(OledError::NotFound)
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::packed_len;

    #[test]
    fn every_entry_length_matches_declared_size() {
        for id in IconId::ALL {
            let a = asset(id);
            assert!(a.is_well_formed(), "{} is malformed", id.name());
            assert_eq!(
                a.data().len(),
                a.height() as usize * a.width().div_ceil(8) as usize,
                "{}",
                id.name()
            );
        }
    }

    #[test]
    fn declared_sizes() {
        for id in [
            IconId::InputSelectDigital,
            IconId::InputSelectAnalog,
            IconId::SpeakerMuted,
            IconId::SpeakerPlaying,
        ] {
            assert_eq!((asset(id).width(), asset(id).height()), (32, 20));
        }
        assert_eq!((ALARM.width(), ALARM.height()), (32, 37));
        assert_eq!(ALARM.data().len(), packed_len(32, 37));
        assert_eq!((LOGO.width(), LOGO.height()), (96, 32));
    }

    #[test]
    fn asset_ids_round_trip() {
        for id in IconId::ALL {
            assert_eq!(asset(id).id(), id);
        }
    }

    #[test]
    fn names_are_unique_and_resolve() {
        for id in IconId::ALL {
            assert_eq!(IconId::from_name(id.name()), Some(id));
            let found = lookup(id.name()).unwrap();
            assert_eq!(found.id(), id);
        }
    }

    #[test]
    fn lookup_unknown_name_is_not_found() {
        assert!(matches!(lookup("volume-knob"), Err(OledError::NotFound)));
        assert!(matches!(lookup(""), Err(OledError::NotFound)));
        assert!(matches!(lookup("Alarm"), Err(OledError::NotFound)));
    }

    #[test]
    fn artwork_is_not_blank_and_pairs_differ() {
        for id in IconId::ALL {
            assert!(asset(id).lit_pixels() > 0, "{} is blank", id.name());
        }
        assert_ne!(INPUT_SELECT_DIGITAL.data(), INPUT_SELECT_ANALOG.data());
        assert_ne!(SPEAKER_MUTED.data(), SPEAKER_PLAYING.data());
    }
}

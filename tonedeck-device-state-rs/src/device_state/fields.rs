/// Audio input currently routed to the amplifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputSource {
    /// S/PDIF or USB input through the DAC.
    #[default]
    Digital,
    /// Line-level analog input.
    Analog,
}

impl InputSource {
    /// Every input source, in selector order.
    pub const ALL: [InputSource; 2] = [InputSource::Digital, InputSource::Analog];

    /// The other input source. The selector button cycles between the two.
    pub fn toggled(self) -> Self {
        match self {
            InputSource::Digital => InputSource::Analog,
            InputSource::Analog => InputSource::Digital,
        }
    }
}

/// Speaker output state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpeakerState {
    /// Output is live.
    #[default]
    Playing,
    /// Output is muted.
    Muted,
}

impl SpeakerState {
    /// Both speaker states.
    pub const ALL: [SpeakerState; 2] = [SpeakerState::Playing, SpeakerState::Muted];

    /// Map a raw mute flag onto the enum.
    pub fn from_muted(muted: bool) -> Self {
        if muted {
            SpeakerState::Muted
        } else {
            SpeakerState::Playing
        }
    }

    /// Returns `true` if the output is muted.
    pub fn is_muted(self) -> bool {
        matches!(self, SpeakerState::Muted)
    }
}

/// Alarm clock state.
///
/// ```text
/// Off ──arm──▶ Armed ──fire──▶ Firing
///  ▲             ▲                │
///  │             └────snooze──────┤
///  └──────────────disarm──────────┘
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlarmState {
    /// No alarm set.
    #[default]
    Off,
    /// Alarm set and waiting for its time.
    Armed,
    /// Alarm currently going off.
    Firing,
}

impl AlarmState {
    /// Every alarm state.
    pub const ALL: [AlarmState; 3] = [AlarmState::Off, AlarmState::Armed, AlarmState::Firing];
}

/// Immutable snapshot of everything the status display renders.
///
/// Taken once per render cycle so a refresh never mixes fields from two
/// different moments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceState {
    /// Selected audio input.
    pub input_source: InputSource,
    /// Speaker mute state.
    pub speaker: SpeakerState,
    /// Alarm clock state.
    pub alarm: AlarmState,
}

impl DeviceState {
    /// Construct a snapshot from its three fields.
    pub const fn new(input_source: InputSource, speaker: SpeakerState, alarm: AlarmState) -> Self {
        Self {
            input_source,
            speaker,
            alarm,
        }
    }

    /// Returns `true` if the speaker is muted.
    pub fn is_muted(&self) -> bool {
        self.speaker.is_muted()
    }

    /// Iterate over every valid combination of fields (2 × 2 × 3 = 12).
    ///
    /// # Examples
    ///
    /// ```
    /// use tonedeck::device_state::DeviceState;
    ///
    /// assert_eq!(DeviceState::all().count(), 12);
    /// ```
    pub fn all() -> impl Iterator<Item = DeviceState> {
        InputSource::ALL.into_iter().flat_map(|input_source| {
            SpeakerState::ALL.into_iter().flat_map(move |speaker| {
                AlarmState::ALL
                    .into_iter()
                    .map(move |alarm| DeviceState::new(input_source, speaker, alarm))
            })
        })
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────

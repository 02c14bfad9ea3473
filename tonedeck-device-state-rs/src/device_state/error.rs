/// Errors returned by [`DeviceStatus`](super::DeviceStatus) when a
/// requested alarm transition is not allowed from the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StateError {
    /// The alarm can only start firing once it has been armed.
    AlarmNotArmed,
    /// Snoozing requires the alarm to be firing.
    AlarmNotFiring,
}

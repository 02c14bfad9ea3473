//! Error types for the status display.

use display_interface::DisplayError;

/// Errors that can occur while driving the status display.
///
/// The `ssd1306` crate wraps all underlying I2C bus errors into
/// [`DisplayError`], so this enum is non-generic.
///
/// Blits that land partly or fully off-screen are not errors: the
/// renderer clips them silently.
#[derive(Debug)]
pub enum OledError {
    /// Display interface error (wraps I2C and other bus-level failures).
    Display(DisplayError),
    /// Display hardware did not respond to initialisation.
    InitializationFailed,
    /// A flush was attempted before the transport was initialised.
    NotInitialized,
    /// Copying the frame into the controller's buffer failed.
    Render,
    /// Catalog lookup of a name that is not registered.
    NotFound,
}

impl OledError {
    /// Returns `true` for failures of the display link itself.
    ///
    /// These are dropped frames: the next refresh resends the whole frame,
    /// so the caller logs them and keeps running.
    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            OledError::Display(_) | OledError::NotInitialized | OledError::Render
        )
    }
}

impl From<DisplayError> for OledError {
    fn from(e: DisplayError) -> Self {
        OledError::Display(e)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for OledError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            OledError::Display(_e) => defmt::write!(f, "Display interface error"),
            OledError::InitializationFailed => defmt::write!(f, "Initialization failed"),
            OledError::NotInitialized => defmt::write!(f, "Not initialized"),
            OledError::Render => defmt::write!(f, "Render into controller buffer failed"),
            OledError::NotFound => defmt::write!(f, "Icon not found"),
        }
    }
}

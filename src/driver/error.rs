//! Error types for the uDMA engine.
//!
//! All detectable misuse is reported as a [`Result`]; there is no panic or
//! fatal path inside the subsystem. Spurious completion events are counted
//! by the dispatcher and never surface as errors.

/// Errors returned by the engine's public operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Channel id out of range, or no peripheral registered on it.
    ///
    /// A caller bug; always locally detectable and never fatal to the
    /// subsystem.
    InvalidChannel,
    /// The transfer-request pool is temporarily empty.
    ///
    /// Recoverable: the caller should retry once in-flight transfers
    /// complete. Not an error in steady state.
    ResourceExhausted,
}

impl Error {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Error::InvalidChannel => "invalid or unregistered channel",
            Error::ResourceExhausted => "request pool exhausted",
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result type alias for uDMA operations
pub type Result<T> = core::result::Result<T, Error>;

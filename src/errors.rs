//! Driver errors

/// Driver error
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// Failed to drive or sample a bus line
    Pin,
    /// REFin / PFD frequency out of bounds
    InvalidReferenceFrequency,
    /// Requested output frequency out of the chip's 35 MHz - 4.4 GHz range
    InvalidOutputFrequency,
    /// Power level out of the 0..=3 range
    InvalidPowerLevel,
    /// Phase word out of the 0..=4095 range
    InvalidPhase,
}

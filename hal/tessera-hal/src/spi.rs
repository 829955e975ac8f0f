//! SPI transmit abstractions
//!
//! Provides the byte-stream transmit trait the display driver writes
//! through, plus the clocking vocabulary used when configuring a channel.

/// Timeout value meaning "block until the transfer completes"
pub const TIMEOUT_MAX: u32 = u32::MAX;

/// SPI transmitter
///
/// Write-only master transfers. The displays this stack drives never
/// clock data back, so there is no read side.
pub trait SpiTx {
    /// Error type for transmit operations
    type Error;

    /// Transmit a byte buffer, giving up after `timeout_ms` milliseconds
    fn transmit_timeout(&mut self, data: &[u8], timeout_ms: u32) -> Result<(), Self::Error>;

    /// Transmit a byte buffer with an unbounded timeout
    fn transmit(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.transmit_timeout(data, TIMEOUT_MAX)
    }
}

/// SPI clock polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Clock idles low (CPOL=0)
    IdleLow,
    /// Clock idles high (CPOL=1)
    IdleHigh,
}

/// SPI clock phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Data captured on first clock transition (CPHA=0)
    CaptureOnFirstTransition,
    /// Data captured on second clock transition (CPHA=1)
    CaptureOnSecondTransition,
}

/// Shift-clock edge selection, as peripherals document it
///
/// Combined polarity and phase, named by which edge of the clock the
/// slave samples data on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockEdge {
    /// Sample on the leading rising edge
    LeadingRising,
    /// Sample on the leading falling edge
    LeadingFalling,
    /// Sample on the trailing rising edge
    TrailingRising,
    /// Sample on the trailing falling edge
    TrailingFalling,
}

impl From<ClockEdge> for (Polarity, Phase) {
    fn from(edge: ClockEdge) -> Self {
        match edge {
            ClockEdge::LeadingRising => (Polarity::IdleHigh, Phase::CaptureOnFirstTransition),
            ClockEdge::LeadingFalling => (Polarity::IdleLow, Phase::CaptureOnFirstTransition),
            ClockEdge::TrailingRising => (Polarity::IdleHigh, Phase::CaptureOnSecondTransition),
            ClockEdge::TrailingFalling => (Polarity::IdleLow, Phase::CaptureOnSecondTransition),
        }
    }
}

/// Number of data bits per SPI frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WordSize {
    Eight,
    Sixteen,
}

/// Bit transmission order within a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    MsbFirst,
    LsbFirst,
}

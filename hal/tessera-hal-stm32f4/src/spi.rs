//! SPI channel configuration
//!
//! Resolves an SPI channel's bus clock from its APB domain, picks a
//! baud-rate prescaler for the requested bit frequency and hands a fully
//! resolved register-level setup to the platform init collaborator.
//!
//! Configuration runs once at startup. Re-configuring a channel while a
//! driver is streaming through it is not supported; the transport
//! registers are shared state with no reentrancy protection.

use tessera_hal::gpio::{PinConfig, PinMode, Pull, Speed};
use tessera_hal::spi::{BitOrder, ClockEdge, Phase, Polarity, WordSize};

use crate::prescaler::{self, PRESCALER_TABLE};

/// SPI channels of the STM32F4
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiChannel {
    Spi1,
    Spi2,
    Spi3,
    Spi4,
}

/// APB bus clock frequencies, as programmed by the clock setup code
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTree {
    /// APB1 peripheral clock in Hz (feeds SPI2, SPI3)
    pub pclk1_hz: u32,
    /// APB2 peripheral clock in Hz (feeds SPI1, SPI4)
    pub pclk2_hz: u32,
}

impl SpiChannel {
    /// Bus clock feeding this channel
    ///
    /// Channel-to-domain membership is fixed by the chip, not a runtime
    /// property.
    pub fn bus_clock(self, clocks: &ClockTree) -> u32 {
        match self {
            SpiChannel::Spi2 | SpiChannel::Spi3 => clocks.pclk1_hz,
            SpiChannel::Spi1 | SpiChannel::Spi4 => clocks.pclk2_hz,
        }
    }
}

/// Fully resolved register-level setup for one channel
///
/// Everything the platform init routine needs to program CR1 without
/// further decisions. Master mode, software NSS, 8-bit MSB-first words
/// are fixed for this stack; they are spelled out here so the platform
/// side stays a dumb register writer.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiSetup {
    pub channel: SpiChannel,
    /// CR1 BR field value from the prescaler table, pre-shifted
    pub prescaler_code: u32,
    pub polarity: Polarity,
    pub phase: Phase,
    pub word_size: WordSize,
    pub bit_order: BitOrder,
    /// Master mode (always true for this stack)
    pub master: bool,
    /// Software NSS management, no hardware chip-select pin
    pub software_nss: bool,
}

/// Errors from channel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The platform init routine reported failure
    TransportInitFailed,
}

/// Platform collaborator that owns the actual peripheral registers
///
/// Implemented by board support code (vendor HAL, PAC or register
/// bindings). Kept behind a trait so everything above it runs on the
/// host.
pub trait SpiPlatform {
    /// Error type of the register init routine
    type Error;

    /// Enable the peripheral clock gate for a channel
    ///
    /// Must be idempotent; `configure` calls it exactly once before
    /// touching any register.
    fn enable_clock(&mut self, channel: SpiChannel);

    /// Program the channel registers from a resolved setup
    fn init(&mut self, setup: &SpiSetup) -> Result<(), Self::Error>;
}

/// Configure an SPI channel for the display link
///
/// Enables the channel's clock gate, resolves the bus clock from the
/// channel's APB domain, selects the tightest non-overshooting baud-rate
/// divisor for `frequency_hz` and applies the fixed master / 8-bit /
/// MSB-first / software-NSS settings together with the requested clock
/// edge. Call once at startup, before the first display write.
pub fn configure<P: SpiPlatform>(
    platform: &mut P,
    channel: SpiChannel,
    clocks: &ClockTree,
    frequency_hz: u32,
    edge: ClockEdge,
) -> Result<(), ConfigError> {
    platform.enable_clock(channel);

    let bus_hz = channel.bus_clock(clocks);
    let idx = prescaler::select_divisor(bus_hz, frequency_hz, &PRESCALER_TABLE);
    let (polarity, phase) = edge.into();

    let setup = SpiSetup {
        channel,
        prescaler_code: PRESCALER_TABLE[idx].code,
        polarity,
        phase,
        word_size: WordSize::Eight,
        bit_order: BitOrder::MsbFirst,
        master: true,
        software_nss: true,
    };

    platform.init(&setup).map_err(|_| {
        #[cfg(feature = "defmt")]
        defmt::error!("spi init failed on {}", channel);
        ConfigError::TransportInitFailed
    })
}

/// Pin profile for the channel's MOSI and SCK lines
///
/// Alternate-function push-pull with pull-up at very-high slew, matching
/// the bit rates the prescaler table can produce.
pub fn bus_pin_config(alternate_function: u8) -> PinConfig {
    PinConfig {
        mode: PinMode::Alternate(alternate_function),
        pull: Pull::Up,
        speed: Speed::VeryHigh,
    }
}

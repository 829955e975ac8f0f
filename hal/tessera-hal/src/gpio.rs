//! GPIO pin abstractions
//!
//! Provides traits for digital output pins and for pin-role configuration
//! that can be implemented by chip-specific HALs.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Pin that can have its electrical role programmed at runtime
///
/// Covers the output and alternate-function setup a driver performs on
/// its pins during bring-up. Input-only roles are out of scope.
pub trait ConfigurePin {
    /// Apply mode, pull and slew-rate settings to the pin
    fn configure(&mut self, config: &PinConfig);
}

/// Electrical configuration for a single pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// Output driver mode
    pub mode: PinMode,
    /// Internal pull resistor
    pub pull: Pull,
    /// Output slew rate
    pub speed: Speed,
}

/// Pin driver mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Push-pull output driven by software
    PushPullOutput,
    /// Open-drain output driven by software
    OpenDrainOutput,
    /// Push-pull output driven by the numbered alternate peripheral function
    Alternate(u8),
}

/// Internal pull resistor selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    None,
    Up,
    Down,
}

/// Output slew-rate grade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    Low,
    Medium,
    High,
    /// 50 MHz class drive, needed for SPI clock rates
    VeryHigh,
}

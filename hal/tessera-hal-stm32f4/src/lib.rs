//! STM32F4-specific transport configuration for the Tessera display stack
//!
//! This crate knows the things about STM32F4 SPI peripherals that the
//! generic traits in `tessera-hal` cannot: which APB bus clocks each
//! channel, the fixed baud-rate prescaler table of the peripheral, and
//! the register-level settings a channel needs before the display driver
//! can stream bytes through it.
//!
//! Register access itself stays behind the [`spi::SpiPlatform`] trait,
//! so channel selection and divisor math are host-testable.

#![no_std]
#![deny(unsafe_code)]

pub mod prescaler;
pub mod spi;

pub use spi::{configure, ClockTree, ConfigError, SpiChannel, SpiPlatform};

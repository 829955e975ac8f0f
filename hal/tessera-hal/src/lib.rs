//! Tessera Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that can be implemented
//! by chip-specific HALs. This enables the display driver to run on any
//! hardware that can toggle pins, clock out bytes and busy-wait.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Display driver (tessera-drivers)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tessera-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tessera-hal-stm32f4 (chip specifics)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::ConfigurePin`] - Digital output and pin setup
//! - [`spi::SpiTx`] - Byte-stream transmission
//! - [`timer::Delay`] - Blocking micro/millisecond delays

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod spi;
pub mod timer;

// Re-export key traits at crate root for convenience
pub use gpio::{ConfigurePin, OutputPin};
pub use spi::SpiTx;
pub use timer::Delay;

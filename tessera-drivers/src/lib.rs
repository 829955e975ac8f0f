//! Hardware driver implementations
//!
//! This crate provides drivers written against the traits defined in
//! `tessera-hal`:
//!
//! - HCMS-290x quad-character dot-matrix LED display (latched serial link)
//! - The 5x7 column-encoded glyph table the display streams from

#![no_std]
#![deny(unsafe_code)]

pub mod display;

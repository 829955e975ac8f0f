//! Display drivers

pub mod font;
pub mod hcms290x;

pub use hcms290x::{ControlWord, Hcms290x};

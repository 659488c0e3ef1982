//! Event types and observers.
//!
//! Submodules:
//! - [`enemy`] – an enemy was hit and starts dying
//! - [`switchdebug`] – toggle debug rendering on/off
pub mod enemy;
pub mod switchdebug;

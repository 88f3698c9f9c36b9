//! Bluetooth Module
//!
//! BLE side effects for the feeder screen, built on `btleplug`.
//!
//! ## Modules
//!
//! - [`scanner`] - advertisement scan lifecycle and event forwarding
//! - [`connection`] - one-shot connection attempts to a chosen peripheral
//! - [`service`] - coordinator owning the adapter, driven by UI commands

pub mod connection;
pub mod scanner;
pub mod service;

// Re-export main service for convenience
pub use service::BluetoothService;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BluetoothError {
    #[error("no Bluetooth adapter available")]
    AdapterUnavailable,
    #[error("device {0} is no longer visible")]
    DeviceVanished(String),
}

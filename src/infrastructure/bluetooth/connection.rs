//! BLE Connection Module
//!
//! One-shot connection attempts. The established connection is reported and
//! then left alone; there is no session tracking or reuse afterwards.

use crate::domain::models::{AppEvent, MessageSeverity, ScannedDevice, StatusMessage};
use crate::infrastructure::bluetooth::BluetoothError;
use anyhow::Result;
use btleplug::api::{Central, Peripheral as _};
use btleplug::platform::{Adapter, Peripheral};
use tokio::sync::mpsc;
use tracing::info;

pub struct BleConnector {
    event_sender: mpsc::UnboundedSender<AppEvent>,
}

impl BleConnector {
    pub fn new(event_sender: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { event_sender }
    }

    /// Connect to a previously scanned device.
    ///
    /// The peripheral is looked up again by identifier at connect time; if it
    /// stopped advertising since the scan this fails with
    /// [`BluetoothError::DeviceVanished`].
    pub async fn connect(&self, adapter: &Adapter, device: &ScannedDevice) -> Result<()> {
        info!("Connecting to feeder: {} ({})", device.display_name(), device.id);
        self.send_log(
            format!("Connecting to {}...", device.display_name()),
            MessageSeverity::Info,
        );

        let peripheral = find_peripheral(adapter, &device.id).await?;
        peripheral.connect().await?;

        info!("Connected to feeder: {}", device.display_name());
        Ok(())
    }

    fn send_log(&self, message: String, severity: MessageSeverity) {
        let _ = self
            .event_sender
            .send(AppEvent::LogMessage(StatusMessage { message, severity }));
    }
}

async fn find_peripheral(adapter: &Adapter, id: &str) -> Result<Peripheral> {
    adapter
        .peripherals()
        .await?
        .into_iter()
        .find(|p| p.id().to_string() == id)
        .ok_or_else(|| BluetoothError::DeviceVanished(id.to_string()).into())
}

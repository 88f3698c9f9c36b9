//! Bluetooth Service Module
//!
//! Coordinator owning the adapter handle. Lives on the Bluetooth worker
//! thread and processes one UI command at a time, so scan and connect
//! operations never overlap.

use crate::domain::models::{AppEvent, ScannedDevice};
use crate::infrastructure::bluetooth::{
    connection::BleConnector, scanner::BleScanner, BluetoothError,
};
use anyhow::Result;
use btleplug::api::{Central, Manager as _};
use btleplug::platform::{Adapter, Manager};
use tokio::sync::mpsc;
use tracing::info;

pub struct BluetoothService {
    adapter: Option<Adapter>,
    scanner: BleScanner,
    connector: BleConnector,
}

impl BluetoothService {
    pub fn new(event_sender: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            adapter: None,
            scanner: BleScanner::new(event_sender.clone()),
            connector: BleConnector::new(event_sender),
        }
    }

    /// First adapter on the system, acquired lazily and cached.
    async fn adapter(&mut self) -> Result<Adapter> {
        if let Some(adapter) = &self.adapter {
            return Ok(adapter.clone());
        }

        let manager = Manager::new().await?;
        let adapter = manager
            .adapters()
            .await?
            .into_iter()
            .next()
            .ok_or(BluetoothError::AdapterUnavailable)?;

        let name = adapter
            .adapter_info()
            .await
            .unwrap_or_else(|_| "unknown".to_string());
        info!("Using Bluetooth adapter: {}", name);

        self.adapter = Some(adapter.clone());
        Ok(adapter)
    }

    pub async fn start_scan(&mut self) -> Result<()> {
        let adapter = self.adapter().await?;
        self.scanner.start(adapter).await
    }

    pub async fn stop_scan(&mut self) -> Result<()> {
        self.scanner.stop().await
    }

    pub async fn connect(&mut self, device: &ScannedDevice) -> Result<()> {
        let adapter = self.adapter().await?;
        self.connector.connect(&adapter, device).await
    }
}

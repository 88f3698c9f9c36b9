//! BLE Scanner Module
//!
//! Owns the advertisement scan subscription. Every discovered or updated
//! peripheral is forwarded to the UI as [`AppEvent::DeviceFound`]; name
//! filtering and dedup happen in the domain layer, matching how the screen
//! scans with no radio-level filter.

use crate::domain::models::{AppEvent, ScannedDevice};
use anyhow::Result;
use btleplug::api::{Central, CentralEvent, Peripheral as _, ScanFilter};
use btleplug::platform::Adapter;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

pub struct BleScanner {
    active: Option<(Adapter, JoinHandle<()>)>,
    event_sender: mpsc::UnboundedSender<AppEvent>,
}

impl BleScanner {
    pub fn new(event_sender: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            active: None,
            event_sender,
        }
    }

    /// Start scanning for BLE devices.
    ///
    /// Any scan already running is stopped first, so a retry never leaves
    /// two live subscriptions behind.
    pub async fn start(&mut self, adapter: Adapter) -> Result<()> {
        self.stop().await?;

        let mut events = adapter.events().await?;
        adapter.start_scan(ScanFilter::default()).await?;
        info!("BLE scan started");

        let sender = self.event_sender.clone();
        let central = adapter.clone();

        let task = tokio::spawn(async move {
            while let Some(event) = events.next().await {
                let id = match event {
                    CentralEvent::DeviceDiscovered(id) | CentralEvent::DeviceUpdated(id) => id,
                    _ => continue,
                };

                let Ok(peripheral) = central.peripheral(&id).await else {
                    continue;
                };
                let Ok(Some(props)) = peripheral.properties().await else {
                    continue;
                };

                let device = ScannedDevice {
                    id: id.to_string(),
                    name: props.local_name,
                    signal_strength: props.rssi,
                };

                if sender.send(AppEvent::DeviceFound(device)).is_err() {
                    return;
                }
            }

            // The event stream only ends on its own if the adapter went away
            // mid-scan; a requested stop aborts this task before we get here.
            let _ = sender.send(AppEvent::ScanFailed(
                "advertisement stream ended unexpectedly".to_string(),
            ));
        });

        self.active = Some((adapter, task));
        Ok(())
    }

    /// Stop scanning and drop the event subscription.
    pub async fn stop(&mut self) -> Result<()> {
        if let Some((adapter, task)) = self.active.take() {
            task.abort();
            adapter.stop_scan().await?;
            info!("BLE scan stopped");
        }
        Ok(())
    }

}

impl Drop for BleScanner {
    fn drop(&mut self) {
        // Can't await stop_scan here; at least kill the forwarding task.
        if let Some((_, task)) = self.active.take() {
            task.abort();
        }
    }
}

//! UI-thread application state.
//!
//! All mutation happens here, driven by user intents from the screen and by
//! [`AppEvent`]s drained from the Bluetooth worker once per frame. The worker
//! never touches this state directly.

use crate::domain::models::{
    AppEvent, ConnectionStatus, MessageSeverity, ScannedDevice, StatusMessage,
};
use crate::domain::scan::ScanSession;
use tracing::{error, info};

pub struct AppState {
    pub scan: ScanSession,
    pub connection_status: ConnectionStatus,
    pub status_message: Option<StatusMessage>,
    /// Modal notice for a finished connection attempt, cleared on dismiss.
    pub connect_notice: Option<StatusMessage>,
    connecting_to: Option<String>,
}

impl AppState {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            scan: ScanSession::new(marker),
            connection_status: ConnectionStatus::Disconnected,
            status_message: None,
            connect_notice: None,
            connecting_to: None,
        }
    }

    /// User asked for a scan (initial mount or retry).
    pub fn begin_scan(&mut self) {
        self.scan.start();
        self.status_message = None;
    }

    /// User pressed stop, or the app is shutting down.
    pub fn end_scan(&mut self) {
        self.scan.stop();
    }

    /// User tapped a listed device.
    pub fn begin_connect(&mut self, device: &ScannedDevice) {
        self.connection_status = ConnectionStatus::Connecting;
        self.connecting_to = Some(device.id.clone());
    }

    pub fn is_connecting(&self) -> bool {
        self.connection_status == ConnectionStatus::Connecting
    }

    pub fn connecting_to(&self) -> Option<&str> {
        self.connecting_to.as_deref()
    }

    pub fn dismiss_connect_notice(&mut self) {
        self.connect_notice = None;
    }

    pub fn handle(&mut self, event: AppEvent) {
        match event {
            AppEvent::DeviceFound(device) => {
                if self.scan.observe(device) {
                    info!("Feeder added to results, {} total", self.scan.roster().devices().len());
                }
            }
            AppEvent::ScanFailed(err) => {
                // Logged and halted, no dialog, no automatic retry.
                error!("Error while scanning: {}", err);
                self.scan.stop();
                self.status_message = Some(StatusMessage {
                    message: format!("Scan failed: {}", err),
                    severity: MessageSeverity::Error,
                });
            }
            AppEvent::ConnectSucceeded(device) => {
                info!("Connected to feeder: {}", device.display_name());
                self.connection_status = ConnectionStatus::Connected;
                self.connecting_to = None;
                self.connect_notice = Some(StatusMessage {
                    message: format!("Connected to {} successfully!", device.display_name()),
                    severity: MessageSeverity::Success,
                });
            }
            AppEvent::ConnectFailed { device, error: err } => {
                error!("Error while connecting to {}: {}", device.display_name(), err);
                self.connection_status = ConnectionStatus::Disconnected;
                self.connecting_to = None;
                self.connect_notice = Some(StatusMessage {
                    message: format!(
                        "Failed to connect to {}. Make sure it is in range and try again.",
                        device.display_name()
                    ),
                    severity: MessageSeverity::Error,
                });
            }
            AppEvent::LogMessage(msg) => {
                self.status_message = Some(msg);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(id: &str, name: &str) -> ScannedDevice {
        ScannedDevice {
            id: id.to_string(),
            name: Some(name.to_string()),
            signal_strength: Some(-50),
        }
    }

    fn state_with_one_device() -> AppState {
        let mut state = AppState::new("Arduino");
        state.begin_scan();
        state.handle(AppEvent::DeviceFound(device("aa", "Arduino Feeder")));
        state
    }

    #[test]
    fn test_scan_failure_stops_scan_without_dialog() {
        let mut state = state_with_one_device();
        state.handle(AppEvent::ScanFailed("adapter gone".to_string()));
        assert!(!state.scan.is_scanning());
        assert!(state.connect_notice.is_none());
        assert_eq!(
            state.status_message.as_ref().map(|m| m.severity),
            Some(MessageSeverity::Error)
        );
    }

    #[test]
    fn test_failed_connect_leaves_results_untouched() {
        let mut state = state_with_one_device();
        state.end_scan();
        let target = state.scan.roster().devices()[0].clone();
        state.begin_connect(&target);

        state.handle(AppEvent::ConnectFailed {
            device: target,
            error: "timed out".to_string(),
        });

        assert_eq!(state.scan.roster().devices().len(), 1);
        assert_eq!(state.connection_status, ConnectionStatus::Disconnected);
        assert_eq!(
            state.connect_notice.as_ref().map(|m| m.severity),
            Some(MessageSeverity::Error)
        );
    }

    #[test]
    fn test_successful_connect_shows_notice() {
        let mut state = state_with_one_device();
        state.end_scan();
        let target = state.scan.roster().devices()[0].clone();
        state.begin_connect(&target);
        assert!(state.is_connecting());
        assert_eq!(state.connecting_to(), Some("aa"));

        state.handle(AppEvent::ConnectSucceeded(target));
        assert_eq!(state.connection_status, ConnectionStatus::Connected);
        assert!(state.connecting_to().is_none());
        assert_eq!(
            state.connect_notice.as_ref().map(|m| m.severity),
            Some(MessageSeverity::Success)
        );
    }
}

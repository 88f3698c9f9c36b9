/// A peripheral seen during a scan.
///
/// `id` is the platform peripheral identifier and is the dedup key for the
/// result list. `name` is the advertised local name, absent for peripherals
/// that do not broadcast one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedDevice {
    pub id: String,
    pub name: Option<String>,
    pub signal_strength: Option<i16>,
}

impl ScannedDevice {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }
}

/// Events flowing from the Bluetooth worker back to the UI thread.
#[derive(Debug, Clone)]
pub enum AppEvent {
    DeviceFound(ScannedDevice),
    ScanFailed(String),
    ConnectSucceeded(ScannedDevice),
    ConnectFailed { device: ScannedDevice, error: String },
    LogMessage(StatusMessage),
}

/// Commands sent from the UI thread to the Bluetooth worker.
#[derive(Debug, Clone)]
pub enum BluetoothCommand {
    StartScan,
    StopScan,
    Connect(ScannedDevice),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Disconnected,
    Connecting,
    Connected,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub message: String,
    pub severity: MessageSeverity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSeverity {
    Info,
    Success,
    Warning,
    Error,
}

//! Scan result aggregation.
//!
//! The infrastructure scanner forwards every advertisement it sees; this
//! module decides which of them end up in the result list. Filtering is by
//! advertised name (must contain the marker substring) and the list is
//! deduplicated by peripheral identifier, preserving discovery order.

use crate::domain::models::ScannedDevice;

/// Ordered, identifier-deduplicated list of matching devices.
#[derive(Debug, Clone)]
pub struct DeviceRoster {
    marker: String,
    devices: Vec<ScannedDevice>,
}

impl DeviceRoster {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            devices: Vec::new(),
        }
    }

    /// Feed one advertisement into the roster.
    ///
    /// Returns true if the device was appended. A device whose name does not
    /// contain the marker (or that has no name at all) is ignored. A repeat
    /// sighting of a known identifier refreshes its name and signal strength
    /// in place instead of appending.
    pub fn observe(&mut self, device: ScannedDevice) -> bool {
        let matches = device
            .name
            .as_deref()
            .is_some_and(|name| name.contains(&self.marker));
        if !matches {
            return false;
        }

        if let Some(existing) = self.devices.iter_mut().find(|d| d.id == device.id) {
            existing.name = device.name;
            existing.signal_strength = device.signal_strength;
            return false;
        }

        self.devices.push(device);
        true
    }

    pub fn clear(&mut self) {
        self.devices.clear();
    }

    pub fn devices(&self) -> &[ScannedDevice] {
        &self.devices
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

/// One scan attempt: the roster plus the scanning flag.
///
/// Advertisements arriving after the session stopped are dropped, so a late
/// event from the worker cannot grow the list the user is already looking at.
#[derive(Debug, Clone)]
pub struct ScanSession {
    roster: DeviceRoster,
    scanning: bool,
}

impl ScanSession {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            roster: DeviceRoster::new(marker),
            scanning: false,
        }
    }

    /// Begin a fresh scan: prior results are discarded.
    pub fn start(&mut self) {
        self.roster.clear();
        self.scanning = true;
    }

    pub fn stop(&mut self) {
        self.scanning = false;
    }

    pub fn is_scanning(&self) -> bool {
        self.scanning
    }

    pub fn observe(&mut self, device: ScannedDevice) -> bool {
        if !self.scanning {
            return false;
        }
        self.roster.observe(device)
    }

    pub fn roster(&self) -> &DeviceRoster {
        &self.roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(id: &str, name: Option<&str>, rssi: Option<i16>) -> ScannedDevice {
        ScannedDevice {
            id: id.to_string(),
            name: name.map(str::to_string),
            signal_strength: rssi,
        }
    }

    #[test]
    fn test_marker_filter() {
        let mut roster = DeviceRoster::new("Arduino");
        assert!(roster.observe(device("aa", Some("Arduino Feeder"), Some(-40))));
        assert!(!roster.observe(device("bb", Some("JBL Speaker"), Some(-50))));
        assert!(!roster.observe(device("cc", None, Some(-60))));
        assert_eq!(roster.devices().len(), 1);
        assert_eq!(roster.devices()[0].id, "aa");
    }

    #[test]
    fn test_duplicate_id_refreshes_in_place() {
        let mut roster = DeviceRoster::new("Arduino");
        assert!(roster.observe(device("aa", Some("Arduino Feeder"), Some(-40))));
        assert!(!roster.observe(device("aa", Some("Arduino Feeder v2"), Some(-35))));
        assert_eq!(roster.devices().len(), 1);
        assert_eq!(roster.devices()[0].name.as_deref(), Some("Arduino Feeder v2"));
        assert_eq!(roster.devices()[0].signal_strength, Some(-35));
    }

    #[test]
    fn test_discovery_order_preserved() {
        let mut roster = DeviceRoster::new("Arduino");
        roster.observe(device("bb", Some("Arduino B"), None));
        roster.observe(device("aa", Some("Arduino A"), None));
        roster.observe(device("bb", Some("Arduino B"), Some(-70)));
        roster.observe(device("cc", Some("Arduino C"), None));
        let ids: Vec<_> = roster.devices().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["bb", "aa", "cc"]);
    }

    #[test]
    fn test_stop_halts_additions() {
        let mut session = ScanSession::new("Arduino");
        session.start();
        assert!(session.observe(device("aa", Some("Arduino Feeder"), None)));
        session.stop();
        assert!(!session.is_scanning());
        assert!(!session.observe(device("bb", Some("Arduino Feeder 2"), None)));
        assert_eq!(session.roster().devices().len(), 1);
    }

    #[test]
    fn test_restart_clears_previous_results() {
        let mut session = ScanSession::new("Arduino");
        session.start();
        session.observe(device("aa", Some("Arduino Feeder"), None));
        session.stop();

        session.start();
        assert!(session.is_scanning());
        assert!(session.roster().is_empty());
    }
}

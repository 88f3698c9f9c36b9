//! The scan/connect screen.
//!
//! Renders one of two mutually exclusive views: "scanning" with a stop
//! control, or "results" with the device list (or an empty-state message)
//! and a retry control.

use crate::domain::models::{BluetoothCommand, ConnectionStatus, MessageSeverity, ScannedDevice};
use crate::presentation::app::FeederLinkApp;
use crate::presentation::components::Components;
use eframe::egui;

pub fn render(app: &mut FeederLinkApp, ui: &mut egui::Ui) {
    Components::heading(ui, "Feeding Schedule");
    ui.add_space(20.0);

    if app.state.scan.is_scanning() {
        ui_scanning_panel(app, ui);
    } else {
        ui_results_panel(app, ui);
    }

    ui.add_space(15.0);
    ui_status_panel(app, ui);
}

fn ui_scanning_panel(app: &mut FeederLinkApp, ui: &mut egui::Ui) {
    Components::brutalist_card(ui, "Device Scan", |ui| {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Scanning for feeders...");
        });

        ui.add_space(10.0);

        if ui.button("Stop Scan").clicked() {
            app.state.end_scan();
            let _ = app.bluetooth_tx.send(BluetoothCommand::StopScan);
        }
    });
}

fn ui_results_panel(app: &mut FeederLinkApp, ui: &mut egui::Ui) {
    Components::brutalist_card(ui, "Nearby Feeders", |ui| {
        ui_connection_banner(app, ui);
        ui.add_space(10.0);

        if app.state.scan.roster().is_empty() {
            ui.label("No feeders found nearby");
        } else {
            let mut tapped: Option<ScannedDevice> = None;

            egui::ScrollArea::vertical()
                .id_salt("scan_results")
                .max_height(240.0)
                .show(ui, |ui| {
                    let connecting = app.state.is_connecting();
                    for device in app.state.scan.roster().devices() {
                        let label = match device.signal_strength {
                            Some(rssi) => format!("{} ({} dBm)", device.display_name(), rssi),
                            None => device.display_name().to_string(),
                        };
                        let busy = app.state.connecting_to() == Some(device.id.as_str());
                        let text = if busy {
                            format!("{} — connecting...", label)
                        } else {
                            label
                        };

                        let row = ui.add_enabled(
                            !connecting,
                            egui::Button::new(text).min_size(egui::vec2(ui.available_width(), 0.0)),
                        );
                        if row.clicked() {
                            tapped = Some(device.clone());
                        }
                    }
                });

            if let Some(device) = tapped {
                app.state.begin_connect(&device);
                let _ = app.bluetooth_tx.send(BluetoothCommand::Connect(device));
            }
        }

        ui.add_space(10.0);

        if ui.button("Retry Scan").clicked() {
            app.state.begin_scan();
            let _ = app.bluetooth_tx.send(BluetoothCommand::StartScan);
        }
    });
}

fn ui_connection_banner(app: &FeederLinkApp, ui: &mut egui::Ui) {
    let (status_text, bg_color, text_color) = match app.state.connection_status {
        ConnectionStatus::Connected => (
            "CONNECTED",
            egui::Color32::from_rgb(0, 200, 0),
            egui::Color32::BLACK,
        ),
        ConnectionStatus::Connecting => (
            "CONNECTING...",
            egui::Color32::from_rgb(255, 200, 0),
            egui::Color32::BLACK,
        ),
        ConnectionStatus::Disconnected => (
            "NOT CONNECTED",
            egui::Color32::from_gray(100),
            egui::Color32::WHITE,
        ),
    };

    Components::status_banner(ui, status_text, bg_color, text_color);
}

fn ui_status_panel(app: &mut FeederLinkApp, ui: &mut egui::Ui) {
    let current_msg = app.state.status_message.clone();
    if let Some(msg) = current_msg {
        Components::brutalist_card(ui, "Status", |ui| {
            let color = match msg.severity {
                MessageSeverity::Info => egui::Color32::BLUE,
                MessageSeverity::Success => egui::Color32::from_rgb(0, 150, 0),
                MessageSeverity::Warning => egui::Color32::from_rgb(200, 150, 0),
                MessageSeverity::Error => egui::Color32::RED,
            };

            ui.label(egui::RichText::new(&msg.message).color(color).strong());
        });
    }
}

/// Modal outcome notice for a connection attempt.
pub fn render_connect_notice(app: &mut FeederLinkApp, ctx: &egui::Context) {
    let Some(notice) = app.state.connect_notice.clone() else {
        return;
    };

    let title = match notice.severity {
        MessageSeverity::Success => "Success",
        _ => "Error",
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(&notice.message);
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                app.state.dismiss_connect_notice();
            }
        });
}

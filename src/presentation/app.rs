use crate::domain::models::{AppEvent, BluetoothCommand, MessageSeverity, StatusMessage};
use crate::domain::settings::SettingsService;
use crate::domain::state::AppState;
use crate::infrastructure::bluetooth::BluetoothService;
use eframe::egui;
use tokio::sync::mpsc;
use tracing::error;

pub struct FeederLinkApp {
    // State
    pub(crate) state: AppState,

    // Bluetooth
    pub(crate) bluetooth_tx: mpsc::UnboundedSender<BluetoothCommand>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,

    // UI Options
    pub(crate) is_dark_mode: bool,

    // Logging guard
    _logging_guard: Option<crate::infrastructure::logging::LoggingGuard>,
}

impl FeederLinkApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        crate::presentation::theme::configure_neubrutalism(&cc.egui_ctx, false);

        let settings = SettingsService::new().expect("Failed to load settings");

        let logging_guard =
            crate::infrastructure::logging::init_logger(&settings.get().log_settings)
                .map_err(|e| eprintln!("Failed to initialize logging: {}", e))
                .ok();

        tracing::info!("Starting Feeder Link");

        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (cmd_tx, mut cmd_rx) = mpsc::unbounded_channel();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to create tokio runtime for Bluetooth");

            rt.block_on(async move {
                let tx = event_tx.clone();
                let mut service = BluetoothService::new(event_tx);

                while let Some(cmd) = cmd_rx.recv().await {
                    match cmd {
                        BluetoothCommand::StartScan => {
                            if let Err(e) = service.start_scan().await {
                                error!("Failed to start scan: {}", e);
                                let _ = tx.send(AppEvent::ScanFailed(e.to_string()));
                            }
                        }
                        BluetoothCommand::StopScan => {
                            if let Err(e) = service.stop_scan().await {
                                error!("Failed to stop scan: {}", e);
                                let _ = tx.send(AppEvent::LogMessage(StatusMessage {
                                    message: format!("Failed to stop scan: {}", e),
                                    severity: MessageSeverity::Warning,
                                }));
                            }
                        }
                        BluetoothCommand::Connect(device) => match service.connect(&device).await {
                            Ok(()) => {
                                let _ = tx.send(AppEvent::ConnectSucceeded(device));
                            }
                            Err(e) => {
                                let _ = tx.send(AppEvent::ConnectFailed {
                                    device,
                                    error: e.to_string(),
                                });
                            }
                        },
                    }
                }
            });
        });

        let mut state = AppState::new(settings.get().device_name_marker.clone());

        // The scan begins as soon as the screen is up
        state.begin_scan();
        let _ = cmd_tx.send(BluetoothCommand::StartScan);

        Self {
            state,
            bluetooth_tx: cmd_tx,
            event_rx,
            is_dark_mode: false,
            _logging_guard: logging_guard,
        }
    }
}

impl eframe::App for FeederLinkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.state.handle(event);
        }

        ctx.request_repaint();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.label("Feeder Link");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let switch_icon = if self.is_dark_mode {
                        "☀ Light"
                    } else {
                        "🌙 Dark"
                    };
                    if ui.button(switch_icon).clicked() {
                        self.is_dark_mode = !self.is_dark_mode;
                        crate::presentation::theme::configure_neubrutalism(ctx, self.is_dark_mode);
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(440.0);
                    ui.add_space(20.0);
                    crate::presentation::screen::render(self, ui);
                    ui.add_space(50.0);
                });
            });
        });

        crate::presentation::screen::render_connect_notice(self, ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Release the scan subscription on the way out
        self.state.end_scan();
        let _ = self.bluetooth_tx.send(BluetoothCommand::StopScan);
    }
}

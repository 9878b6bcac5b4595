// src/gui.rs
use eframe::egui;
use egui::Color32;
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::SystemTime;

use crate::engine;
use crate::sim::{
    render_trend_png, Classifier, EngineConfig, TrackedMetric, TrendStyle, VitalsSnapshot,
};
use crate::tiles;
use crate::types::{EngineCommand, MonitorMessage};

pub struct VitalScopeApp {
    // System state
    is_paused: bool,
    is_recording: bool,
    record_label: String,

    // Data from the engine
    snapshot: Option<VitalsSnapshot>,
    classifier: Classifier,
    bar_width: f64,

    // Interface log
    log_messages: Vec<String>,

    // Channels to the engine thread
    rx: Receiver<MonitorMessage>,
    tx_cmd: Sender<EngineCommand>,
}

impl VitalScopeApp {
    pub fn new(config: EngineConfig) -> Self {
        let (tx, rx) = channel();
        let (tx_cmd, rx_cmd) = channel();

        let classifier = Classifier::new(config.ranges.clone());
        let bar_width = config.tick_interval_secs * 0.8;

        // Start the background engine
        engine::spawn_thread(config, tx, rx_cmd);

        Self {
            is_paused: false,
            is_recording: false,
            record_label: "session".to_owned(),
            snapshot: None,
            classifier,
            bar_width,
            log_messages: vec!["VitalScope ready.".to_owned()],
            rx,
            tx_cmd,
        }
    }

    fn log(&mut self, msg: &str) {
        self.log_messages.push(format!("> {}", msg));
        if self.log_messages.len() > 8 {
            self.log_messages.remove(0);
        }
    }

    fn export_charts(&mut self) {
        let Some(snapshot) = self.snapshot.clone() else {
            self.log("Nothing to export yet.");
            return;
        };
        let stamp = SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let jobs = [
            (TrackedMetric::HeartRate, &snapshot.heart_rate_history),
            (TrackedMetric::SpO2, &snapshot.spo2_history),
            (TrackedMetric::MeanArterialPressure, &snapshot.map_history),
        ];
        for (metric, samples) in jobs {
            match render_trend_png(samples, TrendStyle::default()) {
                Ok(png) => {
                    let filename = format!("vitals_{}_{}.png", metric.label(), stamp);
                    match std::fs::write(&filename, png) {
                        Ok(()) => self.log(&format!("Saved {}", filename)),
                        Err(err) => self.log(&format!("Export failed: {}", err)),
                    }
                }
                Err(err) => self.log(&format!("Export failed: {}", err)),
            }
        }
    }
}

impl eframe::App for VitalScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // 1. Message handling loop
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                MonitorMessage::Log(s) => self.log(&s),
                MonitorMessage::Snapshot(snapshot) => self.snapshot = Some(snapshot),
                MonitorMessage::Paused(b) => self.is_paused = b,
                MonitorMessage::RecordingStatus(b) => self.is_recording = b,
            }
        }

        let mut visuals = egui::Visuals::dark();
        visuals.widgets.noninteractive.bg_fill = Color32::from_rgb(10, 10, 15);
        ctx.set_visuals(visuals);

        // 2. Controls
        egui::SidePanel::left("controls").min_width(240.0).show(ctx, |ui| {
            ui.add_space(10.0);
            ui.heading("VitalScope");
            ui.label("Simulated patient feed");
            ui.separator();

            let pause_txt = if self.is_paused { "RESUME FEED" } else { "PAUSE FEED" };
            if ui.button(pause_txt).clicked() {
                let cmd = if self.is_paused {
                    EngineCommand::Resume
                } else {
                    EngineCommand::Pause
                };
                self.tx_cmd.send(cmd).ok();
            }

            if ui.button("EXPORT CHARTS").clicked() {
                self.export_charts();
            }

            ui.add_space(20.0);
            ui.separator();

            ui.label("SESSION RECORDING");
            ui.text_edit_singleline(&mut self.record_label);

            let rec_btn_text = if self.is_recording { "⏹ STOP" } else { "🔴 RECORD" };
            let rec_btn_col = if self.is_recording {
                Color32::RED
            } else {
                Color32::DARK_GRAY
            };
            if ui
                .add(
                    egui::Button::new(egui::RichText::new(rec_btn_text).color(Color32::WHITE))
                        .fill(rec_btn_col),
                )
                .clicked()
            {
                if self.is_recording {
                    self.tx_cmd.send(EngineCommand::StopRecording).ok();
                } else {
                    self.tx_cmd
                        .send(EngineCommand::StartRecording(self.record_label.clone()))
                        .ok();
                }
            }
            if self.is_recording {
                ui.label(egui::RichText::new("Recording...").color(Color32::RED).small());
            }

            ui.add_space(10.0);
            egui::ScrollArea::vertical().max_height(120.0).show(ui, |ui| {
                for m in &self.log_messages {
                    ui.monospace(m);
                }
            });
        });

        // 3. Dashboard
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(snapshot) = self.snapshot.clone() else {
                ui.label("Waiting for the first frame...");
                ctx.request_repaint();
                return;
            };
            let v = snapshot.current;

            ui.horizontal(|ui| {
                tiles::draw_vital_tile(
                    ui,
                    "HEART RATE",
                    &format!("{:.0}", v.heart_rate),
                    "BPM",
                    self.classifier.heart_rate(v.heart_rate),
                );
                tiles::draw_vital_tile(
                    ui,
                    "SpO2",
                    &format!("{:.0}", v.spo2),
                    "%",
                    self.classifier.spo2(v.spo2),
                );
                tiles::draw_vital_tile(
                    ui,
                    "BLOOD PRESSURE",
                    &format!("{:.0}/{:.0}", v.systolic, v.diastolic),
                    "mmHg",
                    self.classifier.blood_pressure(v.systolic, v.diastolic),
                );
                tiles::draw_vital_tile(
                    ui,
                    "TEMPERATURE",
                    &format!("{:.1}", v.temperature),
                    "°F",
                    self.classifier.temperature(v.temperature),
                );
            });

            ui.add_space(8.0);
            ui.label("SpO2 (%)");
            let bars: Vec<Bar> = snapshot
                .spo2_history
                .iter()
                .map(|s| Bar::new(s.time, s.value).width(self.bar_width))
                .collect();
            Plot::new("spo2_plot")
                .height(150.0)
                .include_y(0.0)
                .include_y(105.0)
                .auto_bounds_x()
                .show(ui, |plot_ui| {
                    plot_ui.bar_chart(
                        BarChart::new(bars)
                            .color(Color32::from_rgb(0, 255, 255))
                            .name("SpO2"),
                    );
                });

            ui.label("Heart Rate (BPM)");
            let hr_points: Vec<[f64; 2]> = snapshot
                .heart_rate_history
                .iter()
                .map(|s| [s.time, s.value])
                .collect();
            Plot::new("hr_plot")
                .height(150.0)
                .include_y(40.0)
                .include_y(140.0)
                .auto_bounds_x()
                .show(ui, |plot_ui| {
                    plot_ui.line(
                        Line::new(PlotPoints::new(hr_points))
                            .color(Color32::from_rgb(255, 80, 120))
                            .name("HR"),
                    );
                });

            ui.label("Mean Arterial Pressure (mmHg)");
            let map_points: Vec<[f64; 2]> = snapshot
                .map_history
                .iter()
                .map(|s| [s.time, s.value])
                .collect();
            Plot::new("map_plot")
                .height(150.0)
                .include_y(50.0)
                .include_y(120.0)
                .auto_bounds_x()
                .show(ui, |plot_ui| {
                    plot_ui.line(
                        Line::new(PlotPoints::new(map_points))
                            .color(Color32::from_rgb(255, 0, 255))
                            .name("MAP"),
                    );
                });
        });

        if !self.is_paused {
            ctx.request_repaint();
        }
    }
}

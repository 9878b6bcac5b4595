use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::SystemTime;

use crate::sim::VitalsSnapshot;

/// Writes one CSV row per tick while a labelled session is active.
pub struct VitalsRecorder {
    writer: Option<BufWriter<File>>,
}

impl VitalsRecorder {
    pub fn new() -> Self {
        Self { writer: None }
    }

    pub fn start(&mut self, label: &str) {
        let timestamp = SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let filename = format!("vitals_{}_{}.csv", label, timestamp);

        if let Ok(file) = File::create(&filename) {
            let mut w = BufWriter::new(file);
            writeln!(w, "Elapsed,HeartRate,SpO2,Systolic,Diastolic,Temperature,MAP").ok();
            self.writer = Some(w);
            log::info!("recording started: {filename}");
        } else {
            log::warn!("could not create {filename}");
        }
    }

    pub fn stop(&mut self) {
        if let Some(mut w) = self.writer.take() {
            w.flush().ok();
            log::info!("recording saved");
        }
    }

    pub fn write_row(&mut self, snapshot: &VitalsSnapshot) {
        if let Some(w) = &mut self.writer {
            let v = snapshot.current;
            writeln!(
                w,
                "{:.1},{:.1},{:.1},{:.1},{:.1},{:.2},{:.1}",
                snapshot.time,
                v.heart_rate,
                v.spo2,
                v.systolic,
                v.diastolic,
                v.temperature,
                v.mean_arterial_pressure()
            )
            .ok();
        }
    }

    pub fn is_recording(&self) -> bool {
        self.writer.is_some()
    }
}

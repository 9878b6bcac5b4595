// src/engine.rs
use crate::recorder::VitalsRecorder;
use crate::sim::{EngineConfig, VitalsPipeline};
use crate::types::{EngineCommand, MonitorMessage};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::mpsc::{Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

/// Spawn the background engine: the single owner and mutator of the vitals
/// pipeline. Ticks never overlap because this thread is the only driver.
pub fn spawn_thread(config: EngineConfig, tx: Sender<MonitorMessage>, rx_cmd: Receiver<EngineCommand>) {
    thread::spawn(move || {
        if let Ok(json) = serde_json::to_string(&config) {
            log::info!("engine config: {json}");
        }

        let mut pipeline = match VitalsPipeline::new(&config, StdRng::from_entropy()) {
            Ok(pipeline) => pipeline,
            Err(err) => {
                log::error!("engine failed to start: {err}");
                tx.send(MonitorMessage::Log(format!("engine failed to start: {err}")))
                    .ok();
                return;
            }
        };
        tx.send(MonitorMessage::Log("Vitals engine ready.".to_owned())).ok();

        let mut recorder = VitalsRecorder::new();
        let interval = Duration::from_secs_f64(config.tick_interval_secs);
        let started = Instant::now();
        let mut paused = false;

        // Seeding happens inside the first tick, so the first published
        // frame already carries full history buffers.
        let first = pipeline.tick(started.elapsed().as_secs_f64());
        if tx.send(MonitorMessage::Snapshot(first)).is_err() {
            return;
        }
        let mut next_tick = Instant::now() + interval;

        loop {
            // 1. Command handling (drain what the GUI sent since last pass)
            for _ in 0..10 {
                if let Ok(cmd) = rx_cmd.try_recv() {
                    match cmd {
                        EngineCommand::Pause => {
                            paused = true;
                            tx.send(MonitorMessage::Paused(true)).ok();
                            tx.send(MonitorMessage::Log("Feed paused.".to_owned())).ok();
                        }
                        EngineCommand::Resume => {
                            paused = false;
                            next_tick = Instant::now() + interval;
                            tx.send(MonitorMessage::Paused(false)).ok();
                            tx.send(MonitorMessage::Log("Feed resumed.".to_owned())).ok();
                        }
                        EngineCommand::StartRecording(label) => {
                            recorder.start(&label);
                            tx.send(MonitorMessage::RecordingStatus(recorder.is_recording()))
                                .ok();
                        }
                        EngineCommand::StopRecording => {
                            recorder.stop();
                            tx.send(MonitorMessage::RecordingStatus(false)).ok();
                        }
                    }
                } else {
                    break;
                }
            }

            // 2. Clock-driven tick
            if !paused && Instant::now() >= next_tick {
                let snapshot = pipeline.tick(started.elapsed().as_secs_f64());
                if recorder.is_recording() {
                    recorder.write_row(&snapshot);
                }
                // the GUI went away; nothing left to publish to
                if tx.send(MonitorMessage::Snapshot(snapshot)).is_err() {
                    return;
                }
                next_tick += interval;
                if next_tick < Instant::now() {
                    // resync after a stall instead of burst-ticking
                    next_tick = Instant::now() + interval;
                }
            }

            thread::sleep(Duration::from_millis(25));
        }
    });
}

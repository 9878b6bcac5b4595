// src/types.rs
use crate::sim::VitalsSnapshot;

// Commands the GUI sends to the engine thread
#[derive(Clone, Debug)]
pub enum EngineCommand {
    Pause,
    Resume,
    StartRecording(String),
    StopRecording,
}

// Messages the engine thread sends back to the GUI
#[derive(Clone, Debug)]
pub enum MonitorMessage {
    Log(String),
    Snapshot(VitalsSnapshot),
    Paused(bool),
    RecordingStatus(bool),
}

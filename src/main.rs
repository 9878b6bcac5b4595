// src/main.rs
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
mod engine;
mod gui;
mod recorder;
mod sim;
mod tiles;
mod types;
use anyhow::{Context, Result};
use eframe::egui;
use std::path::Path;

use crate::sim::EngineConfig;

const CONFIG_PATH: &str = "vitalscope.json";

// Optional JSON config next to the executable; absent file means defaults.
fn load_config(path: &Path) -> Result<EngineConfig> {
    if !path.exists() {
        return Ok(EngineConfig::default());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config: EngineConfig =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    config.validate().context("validating engine configuration")?;
    Ok(config)
}

// Entry point
fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = match load_config(Path::new(CONFIG_PATH)) {
        Ok(config) => config,
        Err(err) => {
            log::error!("refusing to start: {err:#}");
            eprintln!("refusing to start: {err:#}");
            std::process::exit(1);
        }
    };

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([1180.0, 780.0])
        .with_min_inner_size([980.0, 660.0])
        .with_title("VitalScope");
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "VitalScope",
        options,
        Box::new(move |_cc| Box::new(gui::VitalScopeApp::new(config))),
    )
}

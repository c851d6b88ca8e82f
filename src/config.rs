//! Display configuration for the dump viewer
//!
//! Every default is the literal tuning of the reference figure: axis clamps are fixed
//! ranges chosen for the shock-tube dataset, never derived from the data extents.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One generic snapshot panel: attribute names plus an optional y clamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSpec {
    pub x: String,
    pub y: String,
    #[serde(default)]
    pub y_limits: Option<(f64, f64)>,
}

impl PanelSpec {
    pub fn new(x: &str, y: &str) -> Self {
        PanelSpec {
            x: x.to_string(),
            y: y.to_string(),
            y_limits: None,
        }
    }

    pub fn with_y_limits(mut self, min: f64, max: f64) -> Self {
        self.y_limits = Some((min, max));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Directory holding `<timestep>.txt` dumps
    pub dump_dir: PathBuf,

    /// Timestep shown in the initial-conditions panel
    pub initial_timestep: u32,

    /// Timestep shown in the snapshot panels
    pub snapshot_timestep: u32,

    /// x-view applied to every snapshot panel
    pub x_limits: (f64, f64),

    /// Snapshot panels, left to right after the initial-conditions panel
    pub panels: Vec<PanelSpec>,

    /// Marker area in pt² for the Alive/Ghost series (matplotlib `s`)
    pub initial_marker_area: f64,

    /// Marker area in pt² for snapshot series (matplotlib default)
    pub snapshot_marker_area: f64,

    /// Draw priority of snapshot series; higher draws later
    pub snapshot_z_order: i32,

    /// Window / export size in pixels
    pub figure_size: (u32, u32),
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            dump_dir: PathBuf::from("./dumps"),
            initial_timestep: 0,
            snapshot_timestep: 200,
            x_limits: (-2.0, 2.0),
            panels: vec![
                PanelSpec::new("Position", "Density"),
                PanelSpec::new("Position", "Velocity").with_y_limits(-1.5, 1.5),
                PanelSpec::new("Position", "Thermal energy"),
            ],
            initial_marker_area: 60.0,
            snapshot_marker_area: 36.0,
            snapshot_z_order: 100,
            figure_size: (2000, 500),
        }
    }
}

impl ViewConfig {
    /// Load from a JSON file; absent fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: ViewConfig = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        log::info!("Using config file {}", path.display());
        Ok(config)
    }
}

/// Convert a matplotlib marker area (pt²) into a circle radius.
pub fn marker_radius(area: f64) -> f32 {
    (area.max(0.0) / std::f64::consts::PI).sqrt() as f32
}

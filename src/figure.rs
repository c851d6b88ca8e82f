//! Figure composition for dump tables
//!
//! The composed [`Figure`] is plain data. The egui window and the PNG exporter both draw
//! from it, so the titles, clamps and legend stay identical in both outputs.

use eframe::egui::Color32;

use crate::color::series_color;
use crate::config::{marker_radius, ViewConfig};
use crate::data::filter::partition_by_type;
use crate::data::model::{Attribute, DumpTable};
use crate::error::{Result, ViewerError};

/// Draw priority of series without an explicit one (matplotlib's collection default).
pub const DEFAULT_Z_ORDER: i32 = 1;

pub const INITIAL_TITLE: &str = "Illustration of initial conditions (T = 0)";
pub const ALIVE_LABEL: &str = "Alive particles";
pub const GHOST_LABEL: &str = "Ghost particles";

/// Fraction of the data span added on each side when a view is not clamped.
const AUTO_MARGIN: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendLocation {
    UpperLeft,
}

/// One scatter series.
#[derive(Debug, Clone)]
pub struct Series {
    /// Legend label; unlabeled series stay out of the legend.
    pub label: Option<String>,
    pub points: Vec<[f64; 2]>,
    pub marker_radius: f32,
    pub color: Color32,
    pub z_order: i32,
}

/// One subplot.
#[derive(Debug)]
pub struct Panel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Fixed x view; `None` fits the data.
    pub x_limits: Option<(f64, f64)>,
    /// Fixed y view; `None` fits the data.
    pub y_limits: Option<(f64, f64)>,
    pub series: Vec<Series>,
    /// Non-fatal conditions met while building the panel.
    pub warnings: Vec<ViewerError>,
}

impl Panel {
    fn new(title: String, x: &str, y: &str) -> Self {
        Panel {
            title,
            x_label: x.to_string(),
            y_label: y.to_string(),
            x_limits: None,
            y_limits: None,
            series: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Series in draw order: ascending z-order, insertion order among equals.
    pub fn draw_order(&self) -> Vec<&Series> {
        let mut out: Vec<&Series> = self.series.iter().collect();
        out.sort_by_key(|s| s.z_order);
        out
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }

    /// Visible x range: the clamp if set, else the padded data extent.
    pub fn x_view(&self) -> (f64, f64) {
        self.x_limits.unwrap_or_else(|| self.auto_range(0))
    }

    /// Visible y range: the clamp if set, else the padded data extent.
    pub fn y_view(&self) -> (f64, f64) {
        self.y_limits.unwrap_or_else(|| self.auto_range(1))
    }

    /// Full view when any axis is clamped; the free axis fits the data.
    pub fn clamped_view(&self) -> Option<([f64; 2], [f64; 2])> {
        if self.x_limits.is_none() && self.y_limits.is_none() {
            return None;
        }
        let (x0, x1) = self.x_view();
        let (y0, y1) = self.y_view();
        Some(([x0, y0], [x1, y1]))
    }

    fn auto_range(&self, axis: usize) -> (f64, f64) {
        let (lo, hi) = self
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(move |p| p[axis]))
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        if lo > hi {
            return (0.0, 1.0);
        }
        let span = hi - lo;
        if span == 0.0 {
            // single value: give it some room
            let pad = if lo == 0.0 { 1.0 } else { lo.abs() * AUTO_MARGIN };
            return (lo - pad, hi + pad);
        }
        (lo - span * AUTO_MARGIN, hi + span * AUTO_MARGIN)
    }
}

/// Legend entry shown once for the whole figure.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color32,
    pub marker_radius: f32,
}

/// A grid of panels plus a shared legend.
#[derive(Debug)]
pub struct Figure {
    pub cols: usize,
    pub panels: Vec<Panel>,
    pub legend: Vec<LegendEntry>,
    pub legend_location: LegendLocation,
}

impl Figure {
    /// Lay out `panels` in a single row and collect the legend.
    pub fn from_panels(panels: Vec<Panel>) -> Self {
        let legend = figure_legend(&panels);
        Figure {
            cols: panels.len(),
            panels,
            legend,
            legend_location: LegendLocation::UpperLeft,
        }
    }

    /// Non-fatal conditions across all panels.
    pub fn warnings(&self) -> impl Iterator<Item = &ViewerError> {
        self.panels.iter().flat_map(|p| p.warnings.iter())
    }
}

// ---------------------------------------------------------------------------
// Panel builders
// ---------------------------------------------------------------------------

/// Panel 0: Position vs. Density, one labeled series per particle type.
pub fn initial_conditions_panel(table: &DumpTable, cfg: &ViewConfig) -> Panel {
    let x = Attribute::Position;
    let y = Attribute::Density;
    let mut panel = Panel::new(INITIAL_TITLE.to_string(), x.name(), y.name());

    if table.is_empty() {
        panel
            .warnings
            .push(ViewerError::EmptyData(format!("initial dump {}", table.display_name())));
    }

    let part = partition_by_type(table);
    for (i, (subset, label)) in [(&part.alive, ALIVE_LABEL), (&part.ghost, GHOST_LABEL)]
        .into_iter()
        .enumerate()
    {
        if subset.is_empty() && !table.is_empty() {
            panel
                .warnings
                .push(ViewerError::EmptyData(format!("{label} in {}", table.display_name())));
        }
        panel.series.push(Series {
            label: Some(label.to_string()),
            points: type_points(subset, x, y),
            marker_radius: marker_radius(cfg.initial_marker_area),
            color: series_color(i),
            z_order: DEFAULT_Z_ORDER,
        });
    }
    panel
}

fn type_points(subset: &DumpTable, x: Attribute, y: Attribute) -> Vec<[f64; 2]> {
    subset
        .records
        .iter()
        .filter_map(|r| Some([r.value(x)?, r.value(y)?]))
        .collect()
}

/// Generic panel: `x` against `y` for every record, x clamped to the configured range.
pub fn snapshot_panel(
    table: &DumpTable,
    x: &str,
    y: &str,
    y_limits: Option<(f64, f64)>,
    cfg: &ViewConfig,
) -> Result<Panel> {
    let x_attr: Attribute = x.parse()?;
    let y_attr: Attribute = y.parse()?;
    let points = table.points(x_attr, y_attr)?;

    let mut panel = Panel::new(format!("{x_attr} vs. {y_attr}"), x_attr.name(), y_attr.name());
    panel.x_limits = Some(cfg.x_limits);
    panel.y_limits = y_limits;

    if points.is_empty() {
        panel.warnings.push(ViewerError::EmptyData(format!(
            "{} vs. {} in {}",
            x_attr,
            y_attr,
            table.display_name()
        )));
    }
    panel.series.push(Series {
        label: None,
        points,
        marker_radius: marker_radius(cfg.snapshot_marker_area),
        color: series_color(0),
        z_order: cfg.snapshot_z_order,
    });
    Ok(panel)
}

/// The full 1×N figure: initial conditions, then every configured snapshot panel.
pub fn compose_figure(initial: &DumpTable, snapshot: &DumpTable, cfg: &ViewConfig) -> Result<Figure> {
    let mut panels = Vec::with_capacity(cfg.panels.len() + 1);
    panels.push(initial_conditions_panel(initial, cfg));
    for spec in &cfg.panels {
        panels.push(snapshot_panel(snapshot, &spec.x, &spec.y, spec.y_limits, cfg)?);
    }

    let figure = Figure::from_panels(panels);
    for w in figure.warnings() {
        log::warn!("{w}; drawing an empty panel");
    }
    Ok(figure)
}

/// Labeled series across all panels, first occurrence wins.
fn figure_legend(panels: &[Panel]) -> Vec<LegendEntry> {
    let mut entries: Vec<LegendEntry> = Vec::new();
    for series in panels.iter().flat_map(|p| p.series.iter()) {
        let Some(label) = &series.label else {
            continue;
        };
        if entries.iter().any(|e| &e.label == label) {
            continue;
        }
        entries.push(LegendEntry {
            label: label.clone(),
            color: series.color,
            marker_radius: series.marker_radius,
        });
    }
    entries
}

use eframe::egui::{self, Sense, Ui};
use egui_plot::{MarkerShape, Plot, PlotBounds, PlotPoints, Points};

use crate::figure::{Figure, LegendEntry, LegendLocation, Panel};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Figure (central panel)
// ---------------------------------------------------------------------------

/// Render the composed figure: shared legend first, then the panel grid.
pub fn figure_view(ui: &mut Ui, state: &AppState) {
    let figure = &state.figure;

    match figure.legend_location {
        LegendLocation::UpperLeft => {
            figure_legend(ui, &figure.legend);
            ui.add_space(4.0);
            panel_grid(ui, figure);
        }
    }
}

/// Single legend for the whole figure, anchored upper-left.
fn figure_legend(ui: &mut Ui, entries: &[LegendEntry]) {
    ui.horizontal(|ui: &mut Ui| {
        for entry in entries {
            let d = entry.marker_radius * 2.0 + 2.0;
            let (rect, _) = ui.allocate_exact_size(egui::vec2(d, d), Sense::hover());
            ui.painter()
                .circle_filled(rect.center(), entry.marker_radius, entry.color);
            ui.label(&entry.label);
            ui.add_space(12.0);
        }
    });
}

fn panel_grid(ui: &mut Ui, figure: &Figure) {
    ui.columns(figure.cols.max(1), |cols: &mut [Ui]| {
        for (i, (col, panel)) in cols.iter_mut().zip(&figure.panels).enumerate() {
            scatter_panel(col, i, panel);
        }
    });
}

fn scatter_panel(ui: &mut Ui, index: usize, panel: &Panel) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(&panel.title);
        if panel.is_empty() {
            ui.weak("no data");
        }
    });

    let clamp_id = egui::Id::new(("figure_panel_clamped", index));
    let clamp = panel.clamped_view();
    let pending = clamp.is_some()
        && !ui.ctx().data(|d| d.get_temp::<bool>(clamp_id).unwrap_or(false));

    let response = Plot::new(("figure_panel", index))
        .x_axis_label(panel.x_label.as_str())
        .y_axis_label(panel.y_label.as_str())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // Clamped axes start at their literal range whatever the data spans.
            if let (true, Some((min, max))) = (pending, clamp) {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(min, max));
            }
            for series in panel.draw_order() {
                let mut points = Points::new(PlotPoints::new(series.points.clone()))
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(series.marker_radius)
                    .color(series.color);
                if let Some(label) = &series.label {
                    points = points.name(label);
                }
                plot_ui.points(points);
            }
        })
        .response;

    // Double-click resets to auto bounds; put the literal range back next frame.
    let applied = !response.double_clicked();
    ui.ctx().data_mut(|d| d.insert_temp(clamp_id, applied));
}

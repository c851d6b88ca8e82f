use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::color::to_rgb;
use crate::error::{Result, ViewerError};
use crate::figure::{Figure, LegendEntry, Panel};

const LEGEND_STRIP: u32 = 32;
const FONT: &str = "sans-serif";

type Area<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

fn export_err<E: std::fmt::Display>(e: E) -> ViewerError {
    ViewerError::Export(e.to_string())
}

/// Render `figure` into a PNG (or any bitmap format the extension selects).
pub fn export_png(figure: &Figure, path: &Path, size: (u32, u32)) -> Result<()> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(export_err)?;

    let (legend_area, body) = root.split_vertically(LEGEND_STRIP);
    let areas = body.split_evenly((1, figure.cols.max(1)));
    for (area, panel) in areas.iter().zip(&figure.panels) {
        draw_panel(area, panel)?;
    }
    draw_legend(&legend_area, &figure.legend)?;

    root.present().map_err(export_err)?;
    log::info!("Saved figure to {}", path.display());
    Ok(())
}

fn draw_panel(area: &Area<'_>, panel: &Panel) -> Result<()> {
    let (x0, x1) = panel.x_view();
    let (y0, y1) = panel.y_view();

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, (FONT, 18))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(50)
        .build_cartesian_2d(x0..x1, y0..y1)
        .map_err(export_err)?;

    chart
        .configure_mesh()
        .x_desc(panel.x_label.as_str())
        .y_desc(panel.y_label.as_str())
        .draw()
        .map_err(export_err)?;

    let visible = |p: &&[f64; 2]| (x0..=x1).contains(&p[0]) && (y0..=y1).contains(&p[1]);
    for series in panel.draw_order() {
        let style = to_rgb(series.color).filled();
        let radius = series.marker_radius.round().max(1.0) as u32;
        chart
            .draw_series(
                series
                    .points
                    .iter()
                    .filter(visible)
                    .map(|p| Circle::new((p[0], p[1]), radius, style)),
            )
            .map_err(export_err)?;
    }
    Ok(())
}

fn draw_legend(area: &Area<'_>, entries: &[LegendEntry]) -> Result<()> {
    let mid = (LEGEND_STRIP / 2) as i32;
    let mut x = 12;
    for entry in entries {
        let radius = entry.marker_radius.round().max(1.0) as u32;
        area.draw(&Circle::new((x, mid), radius, to_rgb(entry.color).filled()))
            .map_err(export_err)?;
        area.draw(&Text::new(
            entry.label.as_str(),
            (x + radius as i32 + 6, mid - 8),
            (FONT, 16.0).into_font(),
        ))
        .map_err(export_err)?;
        // rough advance; plotters has no cheap text metrics here
        x += radius as i32 + 24 + entry.label.len() as i32 * 9;
    }
    Ok(())
}

use eframe::egui::Color32;

// ---------------------------------------------------------------------------
// Series colour cycle
// ---------------------------------------------------------------------------

/// The familiar matplotlib "tab10" cycle.
const TAB10: [Color32; 10] = [
    Color32::from_rgb(0x1f, 0x77, 0xb4),
    Color32::from_rgb(0xff, 0x7f, 0x0e),
    Color32::from_rgb(0x2c, 0xa0, 0x2c),
    Color32::from_rgb(0xd6, 0x27, 0x28),
    Color32::from_rgb(0x94, 0x67, 0xbd),
    Color32::from_rgb(0x8c, 0x56, 0x4b),
    Color32::from_rgb(0xe3, 0x77, 0xc2),
    Color32::from_rgb(0x7f, 0x7f, 0x7f),
    Color32::from_rgb(0xbc, 0xbd, 0x22),
    Color32::from_rgb(0x17, 0xbe, 0xcf),
];

/// Colour of the `i`-th series drawn on a panel.  The cycle restarts per panel.
pub fn series_color(i: usize) -> Color32 {
    TAB10[i % TAB10.len()]
}

/// Convert for the plotters backend.
pub fn to_rgb(c: Color32) -> plotters::style::RGBColor {
    plotters::style::RGBColor(c.r(), c.g(), c.b())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(series_color(0), Color32::from_rgb(0x1f, 0x77, 0xb4));
        assert_eq!(series_color(1), Color32::from_rgb(0xff, 0x7f, 0x0e));
        assert_eq!(series_color(10), series_color(0));
    }

    #[test]
    fn test_to_rgb() {
        let rgb = to_rgb(series_color(1));
        assert_eq!((rgb.0, rgb.1, rgb.2), (0xff, 0x7f, 0x0e));
    }
}

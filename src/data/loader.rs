use std::path::{Path, PathBuf};

use super::model::{DumpTable, ParticleRecord, ParticleType};
use crate::error::{Result, ViewerError};

/// Field separator used by the simulation's dump writer.
pub const DELIMITER: &str = "    ";

/// Lines starting with this marker (after leading whitespace) are skipped.
pub const COMMENT: char = '#';

/// Number of fields on every data line.
pub const FIELD_COUNT: usize = 9;

const TIME_HEADER: &str = "This file was dumped at t =";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read a dump file into a [`DumpTable`].
///
/// Line layout (one particle per line, four-space separated):
///
/// ```text
/// # This file was dumped at t = 0
/// # ID    TYPE     H          DENSITY  PRESS    ACCEL     VEL       POS       U
///    0    Alive    0.02000    1.000    0.400    +0.000    +0.000    -0.995    2.500
/// ```
pub fn read_dump(path: &Path) -> Result<DumpTable> {
    let text = std::fs::read_to_string(path).map_err(|source| ViewerError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let mut table = parse_dump(&text, &path.display().to_string())?;
    table.source = Some(path.to_path_buf());
    log::info!("Read {} ({} particles)", path.display(), table.len());
    Ok(table)
}

/// Parse dump text.  `origin` only appears in error messages.
pub fn parse_dump(text: &str, origin: &str) -> Result<DumpTable> {
    let mut records = Vec::new();
    let mut time = None;

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim_end_matches('\r');
        let trimmed = line.trim_start();

        if let Some(comment) = trimmed.strip_prefix(COMMENT) {
            if time.is_none() {
                time = parse_time_header(comment);
            }
            continue;
        }
        if trimmed.is_empty() {
            continue;
        }

        let record = parse_line(line).map_err(|reason| ViewerError::Parse {
            origin: origin.to_string(),
            line: idx + 1,
            reason,
        })?;
        records.push(record);
    }

    let mut table = DumpTable::new(records);
    table.time = time;
    Ok(table)
}

/// `<dir>/<timestep>.txt`, the naming the simulation writes dumps under.
pub fn dump_path(dir: &Path, timestep: u32) -> PathBuf {
    dir.join(format!("{timestep}.txt"))
}

// ---------------------------------------------------------------------------
// Line parsing
// ---------------------------------------------------------------------------

fn parse_line(line: &str) -> std::result::Result<ParticleRecord, String> {
    let fields: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(format!(
            "expected {FIELD_COUNT} fields, found {}",
            fields.len()
        ));
    }

    let id = fields[0]
        .parse::<i64>()
        .map_err(|_| format!("Particle ID '{}' is not an integer", fields[0]))?;
    if fields[1].is_empty() {
        return Err("empty Type field".to_string());
    }

    let real = |i: usize, name: &str| -> std::result::Result<f64, String> {
        fields[i]
            .parse::<f64>()
            .map_err(|_| format!("{name} '{}' is not a number", fields[i]))
    };

    Ok(ParticleRecord {
        id,
        kind: ParticleType::from(fields[1]),
        smoothing_length: real(2, "Smoothing length")?,
        density: real(3, "Density")?,
        pressure: real(4, "Pressure")?,
        acceleration: real(5, "Acceleration")?,
        velocity: real(6, "Velocity")?,
        position: real(7, "Position")?,
        thermal_energy: real(8, "Thermal energy")?,
    })
}

fn parse_time_header(comment: &str) -> Option<f64> {
    comment
        .trim()
        .strip_prefix(TIME_HEADER)
        .and_then(|rest| rest.trim().parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Attribute;

    const HEADER: &str = "\
# This file was dumped at t = 0.5
# Column definitions:
# Particle ID / Type / Smoothing length / Density / Pressure / Acceleration / Velocity / Position / Thermal energy
# Aligned definition 'tags' for easier reading:
# ID    TYPE     H          DENSITY  PRESS    ACCEL     VEL       POS       U
";

    fn sample() -> String {
        format!(
            "{HEADER}\
   0    Alive    0.02000    1.000    0.400    +0.000    +0.000    -1.000    2.500
   1    Alive    0.02000    0.800    0.320    -0.125    +2.300    +1.000    2.500
   2    Ghost    0.02000    0.500    0.200    +0.000    +0.000    +0.000    2.500
"
        )
    }

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "sph-dump-viewer-{}-{name}",
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_parse_counts_non_comment_lines() {
        let table = parse_dump(&sample(), "sample").unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.time, Some(0.5));
        assert_eq!(table.records[0].kind, ParticleType::Alive);
        assert_eq!(table.records[2].kind, ParticleType::Ghost);
        assert_eq!(
            table.column(Attribute::Velocity).unwrap(),
            vec![0.0, 2.3, 0.0]
        );
        assert_eq!(
            table.column(Attribute::Position).unwrap(),
            vec![-1.0, 1.0, 0.0]
        );
    }

    #[test]
    fn test_comment_only_file_is_empty() {
        let table = parse_dump(HEADER, "header").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.time, Some(0.5));
    }

    #[test]
    fn test_blank_and_indented_comment_lines_are_skipped() {
        let text = "\n   # indented comment\n\
   7    Ghost    0.1    1.0    1.0    1.0    1.0    1.0    1.0\r\n\n";
        let table = parse_dump(text, "t").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.records[0].id, 7);
        assert_eq!(table.time, None);
    }

    #[test]
    fn test_eight_fields_is_parse_error() {
        let text = "# header\n0    Alive    0.1    1.0    1.0    1.0    1.0    1.0\n";
        let err = parse_dump(text, "short").unwrap_err();
        match err {
            ViewerError::Parse { line, reason, .. } => {
                assert_eq!(line, 2);
                assert!(reason.contains("found 8"), "{reason}");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_ten_fields_is_parse_error() {
        let text = "0    Alive    0.1    1.0    1.0    1.0    1.0    1.0    1.0    1.0\n";
        assert!(matches!(
            parse_dump(text, "long"),
            Err(ViewerError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_bad_number_aborts_whole_read() {
        let text = "\
0    Alive    0.1    1.0    1.0    1.0    1.0    1.0    1.0
1    Alive    0.1    nope    1.0    1.0    1.0    1.0    1.0
2    Alive    0.1    1.0    1.0    1.0    1.0    1.0    1.0
";
        let err = parse_dump(text, "bad").unwrap_err();
        assert!(err.to_string().contains("Density 'nope'"), "{err}");
    }

    #[test]
    fn test_non_integer_id_is_parse_error() {
        let text = "0.5    Alive    0.1    1.0    1.0    1.0    1.0    1.0    1.0\n";
        assert!(matches!(
            parse_dump(text, "id"),
            Err(ViewerError::Parse { .. })
        ));
    }

    #[test]
    fn test_single_space_separated_line_is_rejected() {
        let text = "0 Alive 0.1 1.0 1.0 1.0 1.0 1.0 1.0\n";
        assert!(parse_dump(text, "spaces").is_err());
    }

    #[test]
    fn test_read_dump_is_deterministic() {
        let path = write_temp("200.txt", &sample());
        let first = read_dump(&path).unwrap();
        let second = read_dump(&path).unwrap();
        assert_eq!(first.records, second.records);
        assert_eq!(first.source.as_deref(), Some(path.as_path()));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let path = std::env::temp_dir().join("sph-dump-viewer-does-not-exist/0.txt");
        let err = read_dump(&path).unwrap_err();
        assert!(matches!(err, ViewerError::NotFound { .. }));
    }

    #[test]
    fn test_dump_path_convention() {
        assert_eq!(
            dump_path(Path::new("dumps"), 200),
            PathBuf::from("dumps").join("200.txt")
        );
    }
}

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{Result, ViewerError};

// ---------------------------------------------------------------------------
// ParticleType – the categorical "Type" column
// ---------------------------------------------------------------------------

/// Particle category as written by the simulation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParticleType {
    Alive,
    Ghost,
    /// Any label the simulation might add later; kept verbatim.
    Other(String),
}

impl ParticleType {
    pub fn label(&self) -> &str {
        match self {
            ParticleType::Alive => "Alive",
            ParticleType::Ghost => "Ghost",
            ParticleType::Other(s) => s,
        }
    }
}

impl From<&str> for ParticleType {
    fn from(s: &str) -> Self {
        match s {
            "Alive" => ParticleType::Alive,
            "Ghost" => ParticleType::Ghost,
            other => ParticleType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ParticleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Attribute – the nine named dump columns
// ---------------------------------------------------------------------------

/// A dump column, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    ParticleId,
    Type,
    SmoothingLength,
    Density,
    Pressure,
    Acceleration,
    Velocity,
    Position,
    ThermalEnergy,
}

impl Attribute {
    /// All columns in the order they appear on a data line.
    pub const ALL: [Attribute; 9] = [
        Attribute::ParticleId,
        Attribute::Type,
        Attribute::SmoothingLength,
        Attribute::Density,
        Attribute::Pressure,
        Attribute::Acceleration,
        Attribute::Velocity,
        Attribute::Position,
        Attribute::ThermalEnergy,
    ];

    /// Column name used for lookups, axis labels and titles.
    pub fn name(self) -> &'static str {
        match self {
            Attribute::ParticleId => "Particle ID",
            Attribute::Type => "Type",
            Attribute::SmoothingLength => "Smoothing length",
            Attribute::Density => "Density",
            Attribute::Pressure => "Pressure",
            Attribute::Acceleration => "Acceleration",
            Attribute::Velocity => "Velocity",
            Attribute::Position => "Position",
            Attribute::ThermalEnergy => "Thermal energy",
        }
    }

    pub fn is_numeric(self) -> bool {
        self != Attribute::Type
    }
}

impl FromStr for Attribute {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self> {
        Attribute::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| ViewerError::AttributeNotFound(s.to_string()))
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// ParticleRecord – one data line
// ---------------------------------------------------------------------------

/// A single particle (one row of a dump file).
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleRecord {
    pub id: i64,
    pub kind: ParticleType,
    pub smoothing_length: f64,
    pub density: f64,
    pub pressure: f64,
    pub acceleration: f64,
    pub velocity: f64,
    pub position: f64,
    pub thermal_energy: f64,
}

impl ParticleRecord {
    /// Numeric value of a column, `None` for the categorical `Type`.
    pub fn value(&self, attr: Attribute) -> Option<f64> {
        match attr {
            Attribute::ParticleId => Some(self.id as f64),
            Attribute::Type => None,
            Attribute::SmoothingLength => Some(self.smoothing_length),
            Attribute::Density => Some(self.density),
            Attribute::Pressure => Some(self.pressure),
            Attribute::Acceleration => Some(self.acceleration),
            Attribute::Velocity => Some(self.velocity),
            Attribute::Position => Some(self.position),
            Attribute::ThermalEnergy => Some(self.thermal_energy),
        }
    }
}

// ---------------------------------------------------------------------------
// DumpTable – a whole dump file
// ---------------------------------------------------------------------------

/// Parsed dump file: records in file order plus header metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DumpTable {
    pub records: Vec<ParticleRecord>,
    /// Simulation time from the `# This file was dumped at t = …` header.
    pub time: Option<f64>,
    /// File the table was read from, if any.
    pub source: Option<PathBuf>,
}

impl DumpTable {
    pub fn new(records: Vec<ParticleRecord>) -> Self {
        DumpTable {
            records,
            time: None,
            source: None,
        }
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// One numeric column, in record order.
    pub fn column(&self, attr: Attribute) -> Result<Vec<f64>> {
        if !attr.is_numeric() {
            return Err(ViewerError::NonNumericAttribute(attr));
        }
        Ok(self.records.iter().filter_map(|r| r.value(attr)).collect())
    }

    /// `(x, y)` pairs of two numeric columns, in record order.
    pub fn points(&self, x: Attribute, y: Attribute) -> Result<Vec<[f64; 2]>> {
        let xs = self.column(x)?;
        let ys = self.column(y)?;
        Ok(xs.into_iter().zip(ys).map(|(x, y)| [x, y]).collect())
    }

    /// Short human-readable name for status lines and warnings.
    pub fn display_name(&self) -> String {
        self.source
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<memory>".to_string())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(id: i64, kind: &str, position: f64, density: f64) -> ParticleRecord {
        ParticleRecord {
            id,
            kind: ParticleType::from(kind),
            smoothing_length: 0.1,
            density,
            pressure: density * 0.4,
            acceleration: 0.0,
            velocity: position * 0.5,
            position,
            thermal_energy: 2.5,
        }
    }

    #[test]
    fn test_attribute_names_round_trip() {
        for attr in Attribute::ALL {
            assert_eq!(attr.name().parse::<Attribute>().unwrap(), attr);
        }
    }

    #[test]
    fn test_unknown_attribute_is_rejected() {
        let err = "Mass".parse::<Attribute>().unwrap_err();
        assert!(matches!(err, ViewerError::AttributeNotFound(name) if name == "Mass"));
        // lookups are case sensitive, like the column names in the file header
        assert!("density".parse::<Attribute>().is_err());
    }

    #[test]
    fn test_type_column_is_not_numeric() {
        let table = DumpTable::new(vec![record(0, "Alive", 0.0, 1.0)]);
        let err = table.column(Attribute::Type).unwrap_err();
        assert!(matches!(err, ViewerError::NonNumericAttribute(Attribute::Type)));
    }

    #[test]
    fn test_points_pair_columns_in_order() {
        let table = DumpTable::new(vec![
            record(0, "Alive", -1.0, 1.0),
            record(1, "Ghost", 0.0, 0.5),
            record(2, "Alive", 1.0, 0.8),
        ]);
        let pts = table.points(Attribute::Position, Attribute::Density).unwrap();
        assert_eq!(pts, vec![[-1.0, 1.0], [0.0, 0.5], [1.0, 0.8]]);

        let ids = table.column(Attribute::ParticleId).unwrap();
        assert_eq!(ids, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_unknown_type_label_is_kept() {
        let kind = ParticleType::from("Boundary");
        assert_eq!(kind, ParticleType::Other("Boundary".into()));
        assert_eq!(kind.to_string(), "Boundary");
    }
}

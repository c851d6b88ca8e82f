use super::model::{DumpTable, ParticleType};

// ---------------------------------------------------------------------------
// Partition by the categorical Type column
// ---------------------------------------------------------------------------

/// A dump table split by particle type.  Each part keeps file order.
#[derive(Debug, Clone, Default)]
pub struct TypePartition {
    pub alive: DumpTable,
    pub ghost: DumpTable,
    /// Particles with any other label.
    pub other: DumpTable,
}

/// Split `table` into disjoint Alive / Ghost / other subsets.
pub fn partition_by_type(table: &DumpTable) -> TypePartition {
    let empty = || DumpTable {
        records: Vec::new(),
        time: table.time,
        source: table.source.clone(),
    };
    let mut part = TypePartition {
        alive: empty(),
        ghost: empty(),
        other: empty(),
    };

    for rec in &table.records {
        let bucket = match rec.kind {
            ParticleType::Alive => &mut part.alive,
            ParticleType::Ghost => &mut part.ghost,
            ParticleType::Other(_) => &mut part.other,
        };
        bucket.records.push(rec.clone());
    }
    part
}

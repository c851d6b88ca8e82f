/// Data layer: dump file parsing and type partitioning.
///
/// Architecture:
/// ```text
///  dumps/<timestep>.txt
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse lines → DumpTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │  DumpTable    │  Vec<ParticleRecord>, header time
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  split by Type → Alive / Ghost
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;

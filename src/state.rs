use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::ViewConfig;
use crate::data::loader::read_dump;
use crate::data::model::DumpTable;
use crate::export::export_png;
use crate::figure::{compose_figure, Figure};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Everything the window shows, independent of rendering.
pub struct AppState {
    pub config: ViewConfig,

    /// Dump used for the initial-conditions panel.
    pub initial_path: PathBuf,

    /// Dump used for the snapshot panels.
    pub snapshot_path: PathBuf,

    pub initial: DumpTable,
    pub snapshot: DumpTable,

    /// Figure composed from the two tables.
    pub figure: Figure,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Read both dumps and compose the figure.  Any failure is returned to the caller.
    pub fn load(config: ViewConfig, initial_path: PathBuf, snapshot_path: PathBuf) -> Result<Self> {
        let initial = read_dump(&initial_path)?;
        let snapshot = read_dump(&snapshot_path)?;
        let figure = compose_figure(&initial, &snapshot, &config).context("composing figure")?;

        Ok(AppState {
            config,
            initial_path,
            snapshot_path,
            initial,
            snapshot,
            figure,
            status_message: None,
        })
    }

    /// Re-read both dumps from disk.  On error the previous figure stays.
    pub fn reload(&mut self) -> Result<()> {
        let initial = read_dump(&self.initial_path)?;
        let snapshot = read_dump(&self.snapshot_path)?;
        self.set_tables(initial, snapshot)
    }

    /// Swap in a new initial-condition dump.
    pub fn set_initial_path(&mut self, path: PathBuf) -> Result<()> {
        let initial = read_dump(&path)?;
        self.set_tables(initial, self.snapshot.clone())?;
        self.initial_path = path;
        Ok(())
    }

    /// Swap in a new snapshot dump.
    pub fn set_snapshot_path(&mut self, path: PathBuf) -> Result<()> {
        let snapshot = read_dump(&path)?;
        self.set_tables(self.initial.clone(), snapshot)?;
        self.snapshot_path = path;
        Ok(())
    }

    fn set_tables(&mut self, initial: DumpTable, snapshot: DumpTable) -> Result<()> {
        let figure =
            compose_figure(&initial, &snapshot, &self.config).context("composing figure")?;
        self.initial = initial;
        self.snapshot = snapshot;
        self.figure = figure;
        Ok(())
    }

    /// Write the current figure to a bitmap.
    pub fn export(&self, path: &Path) -> Result<()> {
        export_png(&self.figure, path, self.config.figure_size)
            .with_context(|| format!("exporting {}", path.display()))
    }

    /// One-line description of what is on screen.
    pub fn summary(&self) -> String {
        format!(
            "{}: {}   |   {}: {}",
            self.initial_path.display(),
            describe(&self.initial),
            self.snapshot_path.display(),
            describe(&self.snapshot),
        )
    }
}

fn describe(table: &DumpTable) -> String {
    match table.time {
        Some(t) => format!("{} particles at t = {t}", table.len()),
        None => format!("{} particles", table.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ViewerError;

    const DUMP: &str = "\
# This file was dumped at t = 0
   0    Alive    0.02000    1.000    0.400    +0.000    +0.000    -1.000    2.500
   1    Ghost    0.02000    0.500    0.200    +0.000    +0.000    -1.100    2.500
";

    fn temp_dump(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("sph-dump-viewer-state-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_composes_figure() {
        let a = temp_dump("load-0.txt", DUMP);
        let b = temp_dump("load-200.txt", DUMP);
        let state = AppState::load(ViewConfig::default(), a, b).unwrap();
        assert_eq!(state.figure.panels.len(), 4);
        assert!(state.summary().contains("2 particles at t = 0"));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let a = temp_dump("missing-0.txt", DUMP);
        let b = a.with_file_name("missing-200.txt");
        let err = AppState::load(ViewConfig::default(), a, b).err().unwrap();
        assert!(matches!(
            err.downcast_ref::<ViewerError>(),
            Some(ViewerError::NotFound { .. })
        ));
    }

    #[test]
    fn test_bad_snapshot_keeps_previous_figure() {
        let a = temp_dump("keep-0.txt", DUMP);
        let b = temp_dump("keep-200.txt", DUMP);
        let mut state = AppState::load(ViewConfig::default(), a, b.clone()).unwrap();

        let bad = temp_dump("keep-bad.txt", "0    Alive    1.0\n");
        assert!(state.set_snapshot_path(bad).is_err());
        assert_eq!(state.snapshot_path, b);
        assert_eq!(state.snapshot.len(), 2);
        assert_eq!(state.figure.panels[1].point_count(), 2);
    }
}

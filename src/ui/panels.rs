use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open initial dump…").clicked() {
                open_dump_dialog(state, DumpSlot::Initial);
                ui.close_menu();
            }
            if ui.button("Open snapshot dump…").clicked() {
                open_dump_dialog(state, DumpSlot::Snapshot);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                reload(state);
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Export PNG…").clicked() {
                export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();
        ui.label(state.summary());

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
enum DumpSlot {
    Initial,
    Snapshot,
}

fn open_dump_dialog(state: &mut AppState, slot: DumpSlot) {
    let title = match slot {
        DumpSlot::Initial => "Open initial-condition dump",
        DumpSlot::Snapshot => "Open snapshot dump",
    };
    let file = rfd::FileDialog::new()
        .set_title(title)
        .set_directory(&state.config.dump_dir)
        .add_filter("Dump files", &["txt"])
        .pick_file();

    if let Some(path) = file {
        let result = match slot {
            DumpSlot::Initial => state.set_initial_path(path),
            DumpSlot::Snapshot => state.set_snapshot_path(path),
        };
        report(state, result);
    }
}

fn reload(state: &mut AppState) {
    let result = state.reload();
    report(state, result);
}

fn export_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export figure")
        .set_file_name("figure.png")
        .add_filter("PNG", &["png"])
        .save_file();

    if let Some(path) = file {
        let result = state.export(&path);
        report(state, result);
    }
}

fn report(state: &mut AppState, result: anyhow::Result<()>) {
    match result {
        Ok(()) => state.status_message = None,
        Err(e) => {
            log::error!("{e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

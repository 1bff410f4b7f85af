//! Saved-game browser panel

use std::path::Path;

use egui::{CornerRadius, Frame, RichText, ScrollArea};

use crate::history::{HistoryEntry, HistoryManager, SavedGame};

use super::theme::*;

/// What the user asked the panel to do this frame
pub enum HistoryAction {
    /// Load this record into the running game
    Load(SavedGame),
    Deleted(String),
    Imported(String),
    Failed(String),
}

/// History browser state
#[derive(Default)]
pub struct HistoryView {
    entries: Vec<HistoryEntry>,
    loaded: bool,
    import_path: String,
}

impl HistoryView {
    /// Re-read the history directory
    pub fn refresh(&mut self, manager: &HistoryManager) {
        self.entries = manager.list();
        self.loaded = true;
    }

    pub fn show(&mut self, ui: &mut egui::Ui, manager: &HistoryManager) -> Option<HistoryAction> {
        if !self.loaded {
            self.refresh(manager);
        }

        let mut action = None;
        let mut pending_delete = None;

        ui.horizontal(|ui| {
            ui.label(RichText::new("HISTORY").size(10.0).color(TEXT_MUTED));
            if ui.small_button("Refresh").clicked() {
                self.refresh(manager);
            }
        });
        ui.add_space(4.0);

        if self.entries.is_empty() {
            ui.label(RichText::new("No saved games yet").size(11.0).color(TEXT_MUTED));
        }

        ScrollArea::vertical()
            .id_salt("history_list")
            .max_height(240.0)
            .show(ui, |ui| {
                for entry in &self.entries {
                    let outcome = match &entry.winner {
                        Some(name) => format!("{name} wins"),
                        None if entry.record.game_over => "ended early".to_string(),
                        None => "in progress".to_string(),
                    };
                    // Drop the sub-second / offset tail for display
                    let date = entry.timestamp.get(..19).unwrap_or(&entry.timestamp);

                    Frame::new()
                        .fill(egui::Color32::from_rgb(35, 38, 43))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(8.0)
                        .show(ui, |ui| {
                            ui.label(RichText::new(date).size(11.0).color(TEXT_PRIMARY));
                            ui.label(
                                RichText::new(format!(
                                    "{} vs {} — {}",
                                    entry.player1, entry.player2, outcome
                                ))
                                .size(10.0)
                                .color(TEXT_SECONDARY),
                            );
                            ui.horizontal(|ui| {
                                if ui.small_button("Load").clicked() {
                                    action = Some(HistoryAction::Load(entry.record.clone()));
                                }
                                if ui.small_button("Delete").clicked() {
                                    pending_delete = Some(entry.filename.clone());
                                }
                            });
                        });
                    ui.add_space(4.0);
                }
            });

        if let Some(filename) = pending_delete {
            action = match manager.delete(&filename) {
                Ok(()) => Some(HistoryAction::Deleted(filename)),
                Err(err) => Some(HistoryAction::Failed(err.to_string())),
            };
            self.refresh(manager);
        }

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.import_path)
                    .hint_text("path to exported game")
                    .desired_width(150.0),
            );
            if ui.small_button("Import").clicked() && !self.import_path.is_empty() {
                action = match manager.import(Path::new(&self.import_path)) {
                    Ok(path) => {
                        self.import_path.clear();
                        self.refresh(manager);
                        Some(HistoryAction::Imported(
                            path.file_name()
                                .map(|n| n.to_string_lossy().into_owned())
                                .unwrap_or_default(),
                        ))
                    }
                    Err(err) => Some(HistoryAction::Failed(err.to_string())),
                };
            }
        });

        action
    }
}

//! Main application window

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::board::Stone;
use crate::engine::{BoardEngine, EndCause, MoveError};
use crate::history::{HistoryManager, PlayerInfo};

use super::board_view::BoardView;
use super::history_view::{HistoryAction, HistoryView};
use super::theme::*;

/// Status message severity, controls the card color
#[derive(Clone, Copy, PartialEq, Eq)]
enum MessageKind {
    Info,
    Success,
    Warning,
}

struct Message {
    title: String,
    text: String,
    kind: MessageKind,
}

/// Main application
pub struct RenjuApp {
    engine: BoardEngine,
    board_view: BoardView,
    history: HistoryManager,
    history_view: HistoryView,
    style_index: usize,
    players: PlayerInfo,
    show_numbers: bool,
    show_history: bool,
    message: Option<Message>,
}

impl RenjuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_history_dir("game_history")
    }

    /// Build the app over a specific history directory
    pub fn with_history_dir(dir: &str) -> Self {
        Self {
            engine: BoardEngine::new(),
            board_view: BoardView::default(),
            history: HistoryManager::new(dir),
            history_view: HistoryView::default(),
            style_index: 0,
            players: PlayerInfo::default(),
            show_numbers: true,
            show_history: false,
            message: None,
        }
    }

    fn info(&mut self, title: &str, text: impl Into<String>) {
        self.message = Some(Message {
            title: title.to_string(),
            text: text.into(),
            kind: MessageKind::Info,
        });
    }

    fn success(&mut self, title: &str, text: impl Into<String>) {
        self.message = Some(Message {
            title: title.to_string(),
            text: text.into(),
            kind: MessageKind::Success,
        });
    }

    fn warning(&mut self, title: &str, text: impl Into<String>) {
        self.message = Some(Message {
            title: title.to_string(),
            text: text.into(),
            kind: MessageKind::Warning,
        });
    }

    // ---- game actions ----

    fn start_game(&mut self) {
        if self.engine.game_started() && !self.engine.game_over() {
            return;
        }
        if self.engine.game_over() {
            self.engine.reset(true);
        } else {
            self.engine.start();
        }
        self.info("Game on", "Black moves first");
    }

    fn new_game(&mut self) {
        self.engine.reset(true);
        self.info("New game", "Board cleared, Black moves first");
    }

    fn undo(&mut self) {
        match self.engine.undo_move() {
            Ok(()) => self.info("Undo", "Last move taken back"),
            Err(err) => self.warning("Cannot undo", err.to_string()),
        }
    }

    fn resign(&mut self) {
        match self.engine.surrender() {
            Ok(()) => {
                let winner = stone_name(self.engine.winner().unwrap_or(Stone::Empty));
                self.success("Resignation", format!("{winner} wins"));
            }
            Err(err) => self.warning("Cannot resign", err.to_string()),
        }
    }

    /// Save the current game into the history directory
    fn save_game(&mut self) {
        if !self.engine.game_started() {
            self.warning("Nothing to save", "The game has not started");
            return;
        }
        let record = self.engine.snapshot(self.style_index, self.players.clone());
        match self.history.save(&record, None) {
            Ok(path) => {
                self.history_view.refresh(&self.history);
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                self.success("Saved", name);
            }
            Err(err) => self.warning("Save failed", err.to_string()),
        }
    }

    /// End the current game, save it, and clear the board
    fn end_and_save(&mut self) {
        if !self.engine.game_started() {
            self.warning("Cannot end", "The game has not started");
            return;
        }
        if !self.engine.game_over() {
            // Terminates without a winner; the record is saved as unfinished
            let _ = self.engine.abandon();
        }
        self.save_game();
        self.engine.reset(false);
    }

    fn place_at(&mut self, pos: crate::board::Pos) {
        match self.engine.place_stone(pos.row as i32, pos.col as i32) {
            Ok(()) => {
                if self.engine.game_over() {
                    let winner = stone_name(self.engine.winner().unwrap_or(Stone::Empty));
                    self.success(
                        "Game over",
                        format!("{winner} wins — undo to review or start a new game"),
                    );
                } else {
                    self.message = None;
                }
            }
            // The forbidden rejection gets its own warning; the rest of the
            // rejections are ordinary misclicks
            Err(MoveError::Forbidden) => self.warning(
                "Forbidden move",
                "Black may not play an overline, double-three or double-four here",
            ),
            Err(MoveError::GameNotLive) if !self.engine.game_started() => {
                self.warning("Not started", "Press Start to begin the game")
            }
            Err(_) => {}
        }
    }

    // ---- rendering ----

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                    if ui.button("Undo (U)").clicked() {
                        self.undo();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Save").clicked() {
                        self.save_game();
                        ui.close_menu();
                    }
                    if ui.button("End & Save").clicked() {
                        self.end_and_save();
                        ui.close_menu();
                    }
                    if ui.button("Resign").clicked() {
                        self.resign();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_numbers, "Move numbers");
                    ui.checkbox(&mut self.show_history, "History panel (H)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let status = if !self.engine.game_started() {
                        "Not started".to_string()
                    } else if self.engine.game_over() {
                        match self.engine.end_cause() {
                            Some(EndCause::Resignation) => "Ended by resignation".to_string(),
                            Some(EndCause::Abandoned) => "Ended without result".to_string(),
                            _ => "Finished".to_string(),
                        }
                    } else {
                        format!("Move {}", self.engine.moves().len() + 1)
                    };
                    ui.label(status);
                });
            });
        });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(250.0)
            .max_width(300.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);
                self.render_turn_card(ui);
                ui.add_space(10.0);
                self.render_style_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);

                if let Some(message) = &self.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, message);
                }

                if self.show_history {
                    ui.add_space(10.0);
                    self.render_history_card(ui);
                }
            });
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new("●○")
                    .size(20.0)
                    .color(egui::Color32::from_rgb(180, 180, 185)),
            );
            ui.add_space(4.0);
            ui.label(RichText::new("RENJU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("five in a row").size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let is_black = self.engine.current_player() == Stone::Black;
            let (stone_char, color_name, accent) = if is_black {
                ("●", "BLACK", egui::Color32::from_rgb(70, 70, 75))
            } else {
                ("○", "WHITE", egui::Color32::from_rgb(220, 220, 225))
            };

            ui.horizontal(|ui| {
                let stone_color = if is_black {
                    TEXT_PRIMARY
                } else {
                    egui::Color32::from_rgb(30, 30, 35)
                };

                let (rect, _) =
                    ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    stone_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(color_name)
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let status = if !self.engine.game_started() {
                        "Press Start"
                    } else if self.engine.game_over() {
                        "Game over"
                    } else if is_black && !self.engine.forbidden().is_empty() {
                        "Your turn — forbidden cells marked"
                    } else {
                        "Your turn"
                    };
                    ui.label(RichText::new(status).size(12.0).color(TEXT_SECONDARY));
                });
            });

            if let Some(winner) = self.engine.winner() {
                ui.add_space(6.0);
                ui.label(
                    RichText::new(format!("{} wins", stone_name(winner)))
                        .size(13.0)
                        .strong()
                        .color(WIN_HIGHLIGHT),
                );
            }
        });
    }

    fn render_style_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("BOARD STYLE").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            egui::ComboBox::from_id_salt("board_style")
                .selected_text(style_at(self.style_index).name)
                .show_ui(ui, |ui| {
                    for (i, style) in BOARD_STYLES.iter().enumerate() {
                        ui.selectable_value(&mut self.style_index, i, style.name);
                    }
                });
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Start").clicked() {
                    self.start_game();
                }
                if ui.button("Undo").clicked() {
                    self.undo();
                }
                if ui.button("Resign").clicked() {
                    self.resign();
                }
            });
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("End & Save").clicked() {
                    self.end_and_save();
                }
                if ui.button("New Game").clicked() {
                    self.new_game();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Moves played: {}", self.engine.moves().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_message_card(ui: &mut egui::Ui, message: &Message) {
        let fill = match message.kind {
            MessageKind::Info => STATUS_INFO,
            MessageKind::Success => STATUS_SUCCESS,
            MessageKind::Warning => STATUS_WARNING,
        };
        Frame::new()
            .fill(fill)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(
                    RichText::new(&message.title)
                        .size(12.0)
                        .strong()
                        .color(TEXT_PRIMARY),
                );
                ui.label(RichText::new(&message.text).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn render_history_card(&mut self, ui: &mut egui::Ui) {
        let mut action = None;
        Self::card_frame().show(ui, |ui| {
            action = self.history_view.show(ui, &self.history);
        });

        match action {
            Some(HistoryAction::Load(record)) => match self.engine.restore(&record) {
                Ok(()) => {
                    self.style_index = record.style_index;
                    self.players = record.player_info.clone();
                    self.success("Loaded", "Saved game restored");
                }
                Err(err) => self.warning("Load failed", err.to_string()),
            },
            Some(HistoryAction::Deleted(name)) => self.info("Deleted", name),
            Some(HistoryAction::Imported(name)) => self.success("Imported", name),
            Some(HistoryAction::Failed(err)) => self.warning("History", err),
            None => {}
        }
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let clicked = self.board_view.show(
                ui,
                &self.engine,
                style_at(self.style_index),
                self.show_numbers,
            );

            if let Some(pos) = clicked {
                self.place_at(pos);
            }
        });
    }

    fn handle_input(&mut self, ctx: &Context) {
        // Shortcuts stay out of the way while a text field has focus
        if ctx.wants_keyboard_input() {
            return;
        }
        ctx.input(|i| {
            if i.key_pressed(egui::Key::U) {
                self.undo();
            }
            if i.key_pressed(egui::Key::N) {
                self.new_game();
            }
            if i.key_pressed(egui::Key::H) {
                self.show_history = !self.show_history;
            }
        });
    }
}

impl eframe::App for RenjuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}

fn stone_name(stone: Stone) -> &'static str {
    match stone {
        Stone::Black => "Black",
        Stone::White => "White",
        Stone::Empty => "Nobody",
    }
}

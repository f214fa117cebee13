//! Main application for the Lines of Action GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::{EngineConfig, Side};

use super::board_view::{BoardView, Overlay};
use super::game_state::{EndReason, GameMode, GameResult, GameState};
use super::theme::*;

/// Main Lines of Action application
pub struct LoaApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
    show_valid_moves: bool,
    show_help: bool,
}

const HOW_TO_PLAY: &[(&str, &[&str])] = &[
    (
        "Objective",
        &["Move your pieces until they form a single connected group. Pieces connect horizontally, vertically and diagonally."],
    ),
    (
        "Rules",
        &[
            "Black moves first.",
            "A piece moves in a straight line exactly as many squares as there are pieces of either colour on that line.",
            "You may jump over your own pieces but not over your opponent's.",
            "Landing on an opponent's piece captures it.",
        ],
    ),
    (
        "Uncommon situations",
        &[
            "A player who cannot move loses.",
            "A player reduced to a single piece is connected and wins.",
            "If a move connects both sides at once, the player who moved wins.",
        ],
    ),
];

impl LoaApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, mode: GameMode, config: EngineConfig) -> Self {
        Self {
            state: GameState::new(mode, config),
            board_view: BoardView::default(),
            show_debug: true,
            show_valid_moves: true,
            show_help: false,
        }
    }

    fn new_game(&mut self, mode: GameMode) {
        let undo_enabled = self.state.undo_enabled;
        self.state = GameState::new(mode, self.state.config());
        self.state.undo_enabled = undo_enabled;
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (PvE - Black)").clicked() {
                        self.new_game(GameMode::PvE { human: Side::Black });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvE - White)").clicked() {
                        self.new_game(GameMode::PvE { human: Side::White });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.new_game(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.add_enabled(self.state.undo_enabled, egui::Button::new("Undo (U)")).clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                    if ui.button("Concede").clicked() {
                        self.state.concede();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "AI Panel (D)");
                    ui.checkbox(&mut self.show_valid_moves, "Show Valid Moves");
                    ui.checkbox(&mut self.state.undo_enabled, "Enable Undo");
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("How to Play (H)").clicked() {
                        self.show_help = true;
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human } => format!("PvE - You: {}", human),
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and AI diagnostics
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_timer_card(ui);
                ui.add_space(10.0);

                self.render_pieces_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(result) = self.state.game_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, result);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("LINES OF ACTION").size(20.0).strong().color(TEXT_PRIMARY));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn();
            let (fill, ink) = match turn {
                Side::Black => (BLACK_PIECE, TEXT_PRIMARY),
                Side::White => (WHITE_PIECE, BLACK_PIECE),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, fill);
                ui.painter().circle_stroke(rect.center(), 20.0, egui::Stroke::new(1.0, ink));

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(turn.to_string().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));

                    let (status, color) = if self.state.game_over.is_some() {
                        ("Game over", WIN_HIGHLIGHT)
                    } else if self.state.is_reviewing() {
                        ("Reviewing history", TIMER_WARNING)
                    } else if self.state.is_ai_thinking() {
                        ("AI thinking...", TIMER_WARNING)
                    } else if self.state.is_human_turn() {
                        ("Your turn", TIMER_NORMAL)
                    } else {
                        ("Waiting for AI", TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });
        });
    }

    fn render_timer_card(&self, ui: &mut egui::Ui) {
        let budget = self.state.config().time_limit_ms as f32 / 1000.0;
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let color = if secs < budget * 0.6 {
                    TIMER_NORMAL
                } else if secs < budget {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{:.2}s", secs)).size(28.0).strong().color(color));
            } else {
                let elapsed = self.state.move_timer.elapsed();
                ui.label(RichText::new(format!("{:.1}s", elapsed.as_secs_f32())).size(24.0).color(TEXT_PRIMARY));
            }

            if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32())).size(10.0).color(TEXT_SECONDARY));
            }
        });
    }

    fn render_pieces_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("PIECES").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);
            for side in [Side::Black, Side::White] {
                let count = self.state.board.piece_count(side);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(side.to_string()).size(13.0).color(TEXT_PRIMARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(count.to_string()).size(14.0).strong().color(TEXT_SECONDARY));
                    });
                });
            }
        });
    }

    fn action_button(ui: &mut egui::Ui, label: &str) -> bool {
        Frame::new()
            .fill(BUTTON_BG)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.add(egui::Label::new(RichText::new(label).size(12.0).color(TEXT_PRIMARY)).sense(egui::Sense::click()))
                    .clicked()
            })
            .inner
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if self.state.undo_enabled && Self::action_button(ui, "Undo") {
                    self.state.undo();
                }
                if Self::action_button(ui, "<") {
                    self.state.step_back();
                }
                if Self::action_button(ui, ">") {
                    self.state.step_forward();
                }
                if Self::action_button(ui, "Concede") {
                    self.state.concede();
                }
            });

            ui.add_space(8.0);
            let total = self.state.history().len();
            let shown = self.state.cursor();
            let text = if shown == total {
                format!("Move #{}", total)
            } else {
                format!("Move #{} of {}", shown, total)
            };
            ui.label(RichText::new(text).size(11.0).color(TEXT_SECONDARY));
            if let Some(mv) = self.state.last_move() {
                ui.label(RichText::new(format!("Last: {}", mv)).size(11.0).color(TEXT_SECONDARY));
            }
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI SEARCH").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.state.last_ai_result else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                return;
            };

            ui.label(RichText::new(format!("-> {}", result.best_move)).size(13.0).strong().color(WIN_HIGHLIGHT));
            ui.add_space(4.0);
            for line in [
                format!("Depth: {}", result.depth),
                format!("Score: {}", result.score),
                format!("Nodes: {} ({} leaves)", result.nodes, result.leaf_nodes),
                format!("Speed: {:.0} n/s", result.nodes_per_second),
                format!("Time: {}ms", result.time_ms),
            ] {
                ui.label(RichText::new(line).size(10.0).color(TEXT_SECONDARY));
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, result: GameResult) {
        let reason = match result.reason {
            EndReason::Connection => "connecting all pieces",
            EndReason::Immobilization => "immobilization",
            EndReason::Concession => "concession",
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(format!("{} WINS!", result.winner.to_string().to_uppercase())).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(format!("by {}", reason)).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);

                    if Self::action_button(ui, "New Game") {
                        self.state.reset();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn render_help_window(&mut self, ctx: &Context) {
        egui::Window::new("How to Play")
            .open(&mut self.show_help)
            .collapsible(false)
            .resizable(false)
            .default_width(360.0)
            .show(ctx, |ui| {
                for (heading, lines) in HOW_TO_PLAY {
                    ui.label(RichText::new(*heading).size(14.0).strong());
                    for line in *lines {
                        ui.label(RichText::new(format!("- {}", line)).size(12.0));
                    }
                    ui.add_space(8.0);
                }
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let destinations = if self.show_valid_moves {
                self.state.destinations.as_slice()
            } else {
                &[]
            };
            let overlay = Overlay {
                selected: self.state.selected,
                destinations,
                last_move: self.state.last_move(),
                winner: self.state.game_over.map(|r| r.winner),
                interactive: self.state.game_over.is_none()
                    && !self.state.is_ai_thinking()
                    && self.state.is_human_turn(),
            };

            let clicked = self.board_view.show(ui, &self.state.board, &overlay);

            if let Some(pos) = clicked {
                if let Err(err) = self.state.click(pos) {
                    self.state.message = Some(err.to_string());
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle AI panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // U - Undo
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }

            // H - How to play
            if i.key_pressed(egui::Key::H) {
                self.show_help = !self.show_help;
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }

            // Arrows - step through history
            if i.key_pressed(egui::Key::ArrowLeft) {
                self.state.step_back();
            }
            if i.key_pressed(egui::Key::ArrowRight) {
                self.state.step_forward();
            }
        });
    }
}

impl eframe::App for LoaApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();
        if self.state.wants_ai_move() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
        self.render_help_window(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}

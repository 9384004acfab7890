//! Main application for the Connect Four GUI

use eframe::egui;
use egui::{
    Align2, CentralPanel, Context, CornerRadius, FontId, Frame, RichText, Sense, TopBottomPanel,
    Vec2,
};

use super::board_view::BoardView;
use super::session::{EndResult, Screen, Session};
use super::theme::*;
use crate::Token;

/// Main Connect Four application
pub struct ConnectFourApp {
    session: Session,
    board_view: BoardView,
}

impl Default for ConnectFourApp {
    fn default() -> Self {
        Self {
            session: Session::new(),
            board_view: BoardView::default(),
        }
    }
}

impl ConnectFourApp {
    /// Create a new app
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Welcome screen: a click anywhere starts a game
    fn render_welcome(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(MENU_BG))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), Sense::click());
                let rect = response.rect;

                // Black border inset into the background
                let border = rect.shrink(16.0);
                painter.rect_filled(border, CornerRadius::same(2), MENU_BORDER);
                painter.rect_filled(border.shrink(5.0), CornerRadius::same(2), MENU_BG);

                painter.text(
                    rect.center() - Vec2::new(0.0, 45.0),
                    Align2::CENTER_CENTER,
                    "CONNECT FOUR",
                    FontId::proportional(46.0),
                    TITLE_TEXT,
                );
                painter.text(
                    rect.center() + Vec2::new(0.0, 35.0),
                    Align2::CENTER_CENTER,
                    "Click to play",
                    FontId::proportional(24.0),
                    MENU_TEXT,
                );

                if response.clicked() {
                    self.session.start_game();
                }
            });
    }

    /// Thin bar above the board showing whose turn it is
    fn render_turn_bar(&self, ctx: &Context) {
        TopBottomPanel::top("turn_bar")
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let turn = self.session.turn;
                    let color = match turn {
                        Token::Yellow => YELLOW_TOKEN,
                        _ => RED_TOKEN,
                    };

                    let (rect, _) = ui.allocate_exact_size(Vec2::new(22.0, 22.0), Sense::hover());
                    ui.painter().circle_filled(rect.center(), 9.0, color);
                    ui.label(
                        RichText::new(format!("{} to move", turn.label()))
                            .size(16.0)
                            .color(TEXT_PRIMARY),
                    );
                });
            });
    }

    fn render_playing(&mut self, ctx: &Context) {
        self.render_turn_bar(ctx);

        CentralPanel::default()
            .frame(Frame::new().fill(BACKDROP))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    let clicked = self.board_view.show(
                        ui,
                        &self.session.board,
                        self.session.turn,
                        self.session.last_drop,
                        None,
                        true,
                    );

                    // Refused drops (full or out-of-range columns) are no-ops
                    if let Some(col) = clicked {
                        if let Err(err) = self.session.try_drop(col) {
                            log::debug!("ignored input: {err}");
                        }
                    }
                });
            });
    }

    fn render_game_end(&mut self, ctx: &Context, result: EndResult) {
        TopBottomPanel::bottom("result_panel")
            .frame(Frame::new().fill(PANEL_BG).inner_margin(14.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    let headline = match result {
                        EndResult::Win(winner) => format!("{} wins!", winner.label()),
                        EndResult::Draw => "No one wins".to_string(),
                    };
                    ui.label(
                        RichText::new(headline)
                            .size(26.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    ui.add_space(10.0);

                    match result {
                        EndResult::Win(_) => {
                            ui.horizontal(|ui| {
                                ui.add_space(ui.available_width() / 2.0 - 120.0);
                                if Self::zone_button(ui, "Play again") {
                                    self.session.play_again();
                                }
                                ui.add_space(8.0);
                                if Self::zone_button(ui, "Main menu") {
                                    self.session.to_menu();
                                }
                            });
                        }
                        EndResult::Draw => {
                            ui.label(
                                RichText::new("Starting a fresh game...")
                                    .size(14.0)
                                    .color(TEXT_SECONDARY),
                            );
                        }
                    }
                });
            });

        // Final position stays visible behind the result panel
        CentralPanel::default()
            .frame(Frame::new().fill(BACKDROP))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    self.board_view.show(
                        ui,
                        &self.session.board,
                        self.session.turn,
                        self.session.last_drop,
                        self.session.winning_run,
                        false,
                    );
                });
            });
    }

    /// Clickable framed label used for the end-screen response zones
    fn zone_button(ui: &mut egui::Ui, label: &str) -> bool {
        Frame::new()
            .fill(BUTTON_BG)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.add(
                    egui::Label::new(RichText::new(label).size(16.0).color(TEXT_PRIMARY))
                        .sense(Sense::click()),
                )
                .clicked()
            })
            .inner
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // N - New game from any screen
            if i.key_pressed(egui::Key::N) {
                self.session.start_game();
            }

            // Escape - back to the welcome screen
            if i.key_pressed(egui::Key::Escape) {
                self.session.to_menu();
            }
        });
    }
}

impl eframe::App for ConnectFourApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Drawn games restart on their own after a short delay; schedule a
        // wake-up instead of polling every frame
        if let Some(remaining) = self.session.poll_draw_restart() {
            ctx.request_repaint_after(remaining);
        }

        match self.session.screen {
            Screen::Welcome => self.render_welcome(ctx),
            Screen::Playing => self.render_playing(ctx),
            Screen::GameEnd { result, .. } => self.render_game_end(ctx, result),
        }
    }
}

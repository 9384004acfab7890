//! Board rendering for the Connect Four GUI

use crate::board::{Board, Pos, Token, COLS, ROWS};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the playing field
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 80.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked column, if any.
    ///
    /// `interactive` enables the hover preview and click handling; the end
    /// screen renders the final position with it turned off.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Token,
        last_drop: Option<Pos>,
        winning_run: Option<[Pos; 4]>,
        interactive: bool,
    ) -> Option<usize> {
        let available = ui.available_size();

        // Fit the 7x6 grid plus margins into the available space
        self.cell_size = ((available.x - 2.0 * BOARD_MARGIN) / COLS as f32)
            .min((available.y - 2.0 * BOARD_MARGIN) / ROWS as f32);
        let size = Vec2::new(
            COLS as f32 * self.cell_size + 2.0 * BOARD_MARGIN,
            ROWS as f32 * self.cell_size + 2.0 * BOARD_MARGIN,
        );

        let (response, painter) = ui.allocate_painter(size, Sense::click());
        self.board_rect = response.rect;

        // Blue frame with one hole per cell
        painter.rect_filled(self.board_rect, CornerRadius::same(8), BOARD_FRAME);
        self.draw_cells(&painter, board);

        if let Some(pos) = last_drop {
            self.draw_last_drop_marker(&painter, pos);
        }

        if let Some(run) = winning_run {
            self.draw_winning_run(&painter, &run);
        }

        let mut clicked_col = None;
        if interactive {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(col) = self.screen_to_column(pointer_pos) {
                    if board.is_valid_move(col) {
                        self.draw_drop_preview(&painter, board, col, current_turn);
                    }
                    if response.clicked() {
                        clicked_col = Some(col);
                    }
                }
            }
        }

        clicked_col
    }

    /// Draw every cell: empty holes and placed tokens
    fn draw_cells(&self, painter: &Painter, board: &Board) {
        let radius = self.cell_size * TOKEN_RADIUS_RATIO;
        for row in 0..ROWS {
            for col in 0..COLS {
                let pos = Pos::new(row as u8, col as u8);
                let color = match board.get(pos) {
                    Token::Empty => HOLE,
                    Token::Red => RED_TOKEN,
                    Token::Yellow => YELLOW_TOKEN,
                };
                painter.circle_filled(self.cell_center(pos), radius, color);
            }
        }
    }

    /// Ghost token at the landing cell of the hovered column
    fn draw_drop_preview(&self, painter: &Painter, board: &Board, col: usize, turn: Token) {
        let landing_row = ROWS - 1 - board.column_height(col);
        let center = self.cell_center(Pos::new(landing_row as u8, col as u8));
        let color = match turn {
            Token::Red => ghost_red(),
            Token::Yellow => ghost_yellow(),
            Token::Empty => return,
        };
        painter.circle_filled(center, self.cell_size * TOKEN_RADIUS_RATIO, color);
    }

    /// Draw last drop marker
    fn draw_last_drop_marker(&self, painter: &Painter, pos: Pos) {
        painter.circle_filled(
            self.cell_center(pos),
            LAST_MOVE_MARKER_RADIUS,
            LAST_MOVE_MARKER,
        );
    }

    /// Draw winning run highlight
    fn draw_winning_run(&self, painter: &Painter, run: &[Pos; 4]) {
        let stroke = Stroke::new(WIN_STROKE_WIDTH, WIN_HIGHLIGHT);

        for i in 0..run.len() - 1 {
            painter.line_segment(
                [self.cell_center(run[i]), self.cell_center(run[i + 1])],
                stroke,
            );
        }

        for pos in run {
            let radius = self.cell_size * TOKEN_RADIUS_RATIO + 3.0;
            painter.circle_stroke(self.cell_center(*pos), radius, stroke);
        }
    }

    /// Map a pointer position to a column index. Positions outside the
    /// grid's horizontal span map to `None` and are ignored by the caller.
    pub fn screen_to_column(&self, screen_pos: Pos2) -> Option<usize> {
        let x = screen_pos.x - self.board_rect.min.x - BOARD_MARGIN;
        let col = (x / self.cell_size).floor() as i32;

        if col >= 0 && col < COLS as i32 {
            Some(col as usize)
        } else {
            None
        }
    }

    /// Center of a cell in screen coordinates
    fn cell_center(&self, pos: Pos) -> Pos2 {
        Pos2::new(
            self.board_rect.min.x + BOARD_MARGIN + (pos.col as f32 + 0.5) * self.cell_size,
            self.board_rect.min.y + BOARD_MARGIN + (pos.row as f32 + 0.5) * self.cell_size,
        )
    }
}

use macroquad::prelude::*;

use crate::game::{Phase, Simulator};
use crate::grid::Grid;
use crate::piece::Piece;

const BACKGROUND_COLOR: Color = BLACK;
const GAME_AREA_COLOR: Color = Color::new(0.2, 0.2, 0.2, 1.0);
const LOCKED_COLOR: Color = Color::new(0.55, 0.55, 0.6, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.26, 0.26, 0.26, 1.0);
const CENTER_MARK_COLOR: Color = RED;
const PIECE_OUTLINE_COLOR: Color = Color::new(0.05, 0.05, 0.1, 1.0);

/// Where the grid sits on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub offset_x: f32,
    pub offset_y: f32,
    pub cell: f32,
}

impl Layout {
    /// Center a grid of `cell`-sized squares in a `screen_w` x `screen_h` window.
    pub fn centered(grid: &Grid, cell: f32, screen_w: f32, screen_h: f32) -> Self {
        let board_w = grid.width() as f32 * cell;
        let board_h = grid.height() as f32 * cell;
        Self {
            offset_x: ((screen_w - board_w) / 2.0).floor(),
            offset_y: ((screen_h - board_h) / 2.0).floor(),
            cell,
        }
    }

    pub fn cell_origin(&self, x: i32, y: i32) -> (f32, f32) {
        (
            self.offset_x + x as f32 * self.cell,
            self.offset_y + y as f32 * self.cell,
        )
    }
}

/// Paint the grid, the active piece and the score.
pub fn draw(grid: &Grid, piece: Option<&Piece>, score: u64, layout: &Layout) {
    clear_background(BACKGROUND_COLOR);

    let board_w = grid.width() as f32 * layout.cell;
    let board_h = grid.height() as f32 * layout.cell;
    draw_rectangle(layout.offset_x, layout.offset_y, board_w, board_h, GAME_AREA_COLOR);

    for (y, row) in grid.rows().enumerate() {
        for (x, &occupied) in row.iter().enumerate() {
            let (px, py) = layout.cell_origin(x as i32, y as i32);
            if occupied {
                draw_locked_cell(px, py, layout.cell);
            } else {
                draw_rectangle_lines(px, py, layout.cell, layout.cell, 1.0, GRID_LINE_COLOR);
            }
        }
    }

    if let Some(piece) = piece {
        for (x, y) in piece.cells() {
            let (px, py) = layout.cell_origin(x, y);
            draw_piece_cell(px, py, layout.cell, piece.color);
        }
    }

    // Spawn point marker.
    let (cx, cy) = layout.cell_origin((grid.width() / 2) as i32, (grid.height() / 2) as i32);
    draw_circle(cx, cy, layout.cell / 4.0, CENTER_MARK_COLOR);

    draw_text(&format!("Score: {}", score), 20.0, 40.0, 40.0, WHITE);
}

/// Full frame for the simulator, including phase overlays.
pub fn draw_frame(sim: &Simulator) {
    let grid = sim.grid();
    let layout = Layout::centered(grid, sim.settings().cell_size, screen_width(), screen_height());
    draw(grid, sim.piece(), sim.score(), &layout);

    match sim.phase() {
        Phase::Idle => draw_centered_text("Press SPACE to start", 40.0, YELLOW),
        Phase::Paused => {
            draw_rectangle(0.0, 0.0, screen_width(), screen_height(), Color::new(0.0, 0.0, 0.0, 0.6));
            draw_centered_text("Paused", 50.0, YELLOW);
        }
        Phase::GameOver => {
            draw_centered_text("Game Over", 50.0, RED);
            let msg = "Press SPACE to play again";
            let measure = measure_text(msg, None, 24, 1.0);
            draw_text(
                msg,
                (screen_width() - measure.width) / 2.0,
                screen_height() / 2.0 + 40.0,
                24.0,
                WHITE,
            );
        }
        Phase::Playing => {}
    }
}

fn draw_centered_text(msg: &str, size: f32, color: Color) {
    let measure = measure_text(msg, None, size as u16, 1.0);
    let x = (screen_width() - measure.width) / 2.0;
    let y = (screen_height() - measure.height) / 2.0;
    draw_text(msg, x, y, size, color);
}

/// Locked cells are flat tiles with a one-pixel gap so rows read as a lattice.
fn draw_locked_cell(x: f32, y: f32, size: f32) {
    draw_rectangle(x + 1.0, y + 1.0, size - 2.0, size - 2.0, LOCKED_COLOR);
}

/// Piece cells: the shape's color with a dark outline and a pale center stud.
fn draw_piece_cell(x: f32, y: f32, size: f32, color: Color) {
    draw_rectangle(x, y, size, size, color);
    draw_rectangle_lines(x, y, size, size, 2.0, PIECE_OUTLINE_COLOR);
    let stud = size * 0.4;
    let inset = (size - stud) / 2.0;
    let pale = Color::new(
        color.r + (1.0 - color.r) * 0.6,
        color.g + (1.0 - color.g) * 0.6,
        color.b + (1.0 - color.b) * 0.6,
        1.0,
    );
    draw_rectangle(x + inset, y + inset, stud, stud, pale);
}

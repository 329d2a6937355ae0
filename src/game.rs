//! The grid/piece simulator.
//!
//! One `Simulator` owns the grid, the active piece and the score. The frame
//! loop feeds it elapsed time through `advance`, which fires `tick` once the
//! fixed interval has built up, and routes key presses through `handle_input`.
//! Steering only changes the piece's heading; the piece itself moves on ticks.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Settings;
use crate::grid::{ClearReport, Grid};
use crate::piece::{Direction, Heading, Piece};
use crate::scoring::clear_score;
use crate::shape::ShapeKind;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Not started, or torn down. No piece, timer stopped.
    #[default]
    Idle,
    Playing,
    Paused,
    /// A new piece had nowhere to spawn.
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Steer(Direction),
    Rotate,
    Start,
    Pause,
    Quit,
}

/// What a tick did to the active piece.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Step {
    /// No heading, or not playing.
    #[default]
    Held,
    Moved,
    /// The step was blocked; the piece locked and the next one spawned.
    Locked,
    /// The step was blocked and the next piece could not spawn.
    ToppedOut,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub step: Step,
    pub cleared: ClearReport,
    pub points: u64,
}

pub struct Simulator {
    settings: Settings,
    grid: Grid,
    piece: Option<Piece>,
    score: u64,
    phase: Phase,
    rng: StdRng,
    tick_timer: f32,
    viewport: (f32, f32),
}

impl Simulator {
    pub fn new(settings: Settings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            settings,
            grid: Grid::new(0, 0),
            piece: None,
            score: 0,
            phase: Phase::Idle,
            rng,
            tick_timer: 0.0,
            viewport: (0.0, 0.0),
        }
    }

    /// Size the grid to the viewport, spawn the first piece and start ticking.
    pub fn init(&mut self, view_w: f32, view_h: f32) {
        self.viewport = (view_w, view_h);
        let grid = self.grid_for_viewport();
        self.init_with_grid(grid);
    }

    /// Start a game on a prepared grid. The viewport is left as it was.
    pub fn init_with_grid(&mut self, grid: Grid) {
        info!("starting game on a {}x{} grid", grid.width(), grid.height());
        self.grid = grid;
        self.score = 0;
        self.tick_timer = 0.0;
        self.piece = None;
        self.phase = Phase::Playing;
        self.spawn();
    }

    /// Stop ticking and drop the active piece. The grid and score are kept
    /// for a final draw.
    pub fn teardown(&mut self) {
        info!("tearing down with score {}", self.score);
        self.piece = None;
        self.tick_timer = 0.0;
        self.phase = Phase::Idle;
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn grid_for_viewport(&self) -> Grid {
        let (w, h) = self.viewport;
        Grid::for_viewport(w, h, self.settings.viewport_fill, self.settings.cell_size)
    }

    /// Spawn a random shape in the middle of the grid.
    pub fn spawn(&mut self) -> bool {
        let kind = ShapeKind::random(&mut self.rng);
        self.spawn_piece(kind)
    }

    /// Spawn `kind` in the middle of the grid, replacing any active piece.
    /// If it overlaps a block or does not fit, the game is over.
    pub fn spawn_piece(&mut self, kind: ShapeKind) -> bool {
        let piece = Piece::new(kind, self.grid.width(), self.grid.height());
        self.place_or_top_out(piece)
    }

    fn place_or_top_out(&mut self, piece: Piece) -> bool {
        if self.grid.is_valid_move(piece.x, piece.y, &piece.shape) {
            debug!("spawned {} at ({}, {})", piece.kind.name(), piece.x, piece.y);
            self.piece = Some(piece);
            true
        } else {
            info!(
                "no room for {} at ({}, {}); game over with score {}",
                piece.kind.name(),
                piece.x,
                piece.y,
                self.score
            );
            self.piece = None;
            self.phase = Phase::GameOver;
            false
        }
    }

    /// Commit the active piece to the grid.
    fn lock_piece(&mut self) {
        if let Some(piece) = self.piece.take() {
            let written = self.grid.lock(piece.x, piece.y, &piece.shape);
            debug!("locked {} at ({}, {}), {} cells", piece.kind.name(), piece.x, piece.y, written);
        }
    }

    /// Try one step along the heading. A blocked step locks the piece.
    fn apply_heading(&mut self) -> Step {
        let Some(piece) = self.piece.as_mut() else {
            return Step::Held;
        };
        let Some(dir) = piece.heading.direction() else {
            return Step::Held;
        };
        let (x, y) = piece.stepped(dir);
        if self.grid.is_valid_move(x, y, &piece.shape) {
            piece.x = x;
            piece.y = y;
            return Step::Moved;
        }
        self.lock_piece();
        Step::Locked
    }

    /// One simulation step: move along the heading, then clear full lines.
    /// After a lock the next piece spawns on the cleared grid.
    pub fn tick(&mut self) -> TickReport {
        if self.phase != Phase::Playing {
            return TickReport::default();
        }
        let mut step = self.apply_heading();
        let cleared = self.grid.clear_lines(self.settings.row_clear_policy);
        let points = clear_score(&cleared);
        if points > 0 {
            self.score += points;
            info!(
                "cleared {} rows and {} columns for {} points, score {}",
                cleared.rows.len(),
                cleared.columns.len(),
                points,
                self.score
            );
        }
        // A shift-down clear can drop blocks into a live piece (a prepared
        // grid may start with full rows). The piece locks where it stands.
        let crushed = self
            .piece
            .as_ref()
            .is_some_and(|p| !self.grid.is_valid_move(p.x, p.y, &p.shape));
        if crushed {
            debug!("cleared rows fell into the active piece");
            self.lock_piece();
            step = Step::Locked;
        }
        if step == Step::Locked && !self.spawn() {
            step = Step::ToppedOut;
        }
        TickReport { step, cleared, points }
    }

    /// Feed frame time into the tick timer. Runs at most one tick per call and
    /// carries the remainder over.
    pub fn advance(&mut self, dt: f32) -> Option<TickReport> {
        if self.phase != Phase::Playing {
            return None;
        }
        let interval = self.settings.tick_seconds();
        self.tick_timer += dt;
        if self.tick_timer < interval {
            return None;
        }
        self.tick_timer -= interval;
        Some(self.tick())
    }

    pub fn steer(&mut self, dir: Direction) {
        if self.phase != Phase::Playing {
            return;
        }
        if let Some(piece) = self.piece.as_mut() {
            piece.heading = Heading::Moving(dir);
        }
    }

    /// Turn the active piece a quarter clockwise if the turned shape fits
    /// where it stands.
    pub fn rotate(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        let Some(piece) = self.piece.as_mut() else {
            return false;
        };
        let rotated = piece.rotated_shape();
        if !self.grid.is_valid_move(piece.x, piece.y, &rotated) {
            return false;
        }
        piece.shape = rotated;
        true
    }

    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Playing => Phase::Paused,
            Phase::Paused => Phase::Playing,
            other => other,
        };
        debug!("phase now {:?}", self.phase);
    }

    pub fn handle_input(&mut self, command: Command) {
        match command {
            Command::Steer(dir) => self.steer(dir),
            Command::Rotate => {
                self.rotate();
            }
            Command::Start => {
                if matches!(self.phase, Phase::Idle | Phase::GameOver) {
                    let (w, h) = self.viewport;
                    self.init(w, h);
                }
            }
            Command::Pause => self.toggle_pause(),
            Command::Quit => self.teardown(),
        }
    }

    /// Rebuild an empty grid for a new viewport size.
    ///
    /// The active piece keeps its shape and heading and is centered on the new
    /// grid; if it does not fit there the game is over. The score is kept.
    pub fn resize(&mut self, view_w: f32, view_h: f32) {
        self.viewport = (view_w, view_h);
        self.grid = self.grid_for_viewport();
        info!(
            "viewport {}x{} -> grid {}x{}",
            view_w,
            view_h,
            self.grid.width(),
            self.grid.height()
        );
        if let Some(mut piece) = self.piece.take() {
            piece.center_on(self.grid.width(), self.grid.height());
            self.place_or_top_out(piece);
        }
    }
}

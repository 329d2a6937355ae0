use macroquad::prelude::Color;

use crate::shape::{rotate_shape, Shape, ShapeKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

/// The sticky steering state of a piece.
///
/// A key press sets it to `Moving`; every tick then tries one step that way
/// until the piece locks. A freshly spawned piece is always `Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Heading {
    #[default]
    Idle,
    Moving(Direction),
}

impl Heading {
    pub fn direction(self) -> Option<Direction> {
        match self {
            Heading::Idle => None,
            Heading::Moving(dir) => Some(dir),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Piece {
    pub kind: ShapeKind,
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
    pub color: Color,
    pub heading: Heading,
}

impl Piece {
    /// A fresh piece of `kind` centered on a `grid_w` x `grid_h` grid.
    pub fn new(kind: ShapeKind, grid_w: usize, grid_h: usize) -> Self {
        let mut piece = Piece {
            kind,
            shape: kind.template(),
            x: 0,
            y: 0,
            color: kind.color(),
            heading: Heading::Idle,
        };
        piece.center_on(grid_w, grid_h);
        piece
    }

    /// Move the origin so the shape sits in the middle of the grid.
    pub fn center_on(&mut self, grid_w: usize, grid_h: usize) {
        self.x = (grid_w / 2) as i32 - (self.shape.width() / 2) as i32;
        self.y = (grid_h / 2) as i32 - (self.shape.height() / 2) as i32;
    }

    /// Origin one step toward `dir`.
    pub fn stepped(&self, dir: Direction) -> (i32, i32) {
        let (dx, dy) = dir.delta();
        (self.x + dx, self.y + dy)
    }

    pub fn rotated_shape(&self) -> Shape {
        rotate_shape(&self.shape)
    }

    /// Absolute grid coordinates of every occupied cell.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .occupied()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

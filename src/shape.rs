use macroquad::prelude::Color;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Plus,
    ShortLine,
    LongLine,
    Square,
    TShape,
    LShape,
    ZShape,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Plus,
        ShapeKind::ShortLine,
        ShapeKind::LongLine,
        ShapeKind::Square,
        ShapeKind::TShape,
        ShapeKind::LShape,
        ShapeKind::ZShape,
    ];

    /// Uniform pick over the seven templates.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn template(self) -> Shape {
        Shape::from_rows(SHAPE_TEMPLATES[self as usize])
    }

    pub fn color(self) -> Color {
        NES_COLORS[self as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Plus => "plus",
            ShapeKind::ShortLine => "short line",
            ShapeKind::LongLine => "long line",
            ShapeKind::Square => "square",
            ShapeKind::TShape => "T",
            ShapeKind::LShape => "L",
            ShapeKind::ZShape => "Z",
        }
    }
}

const SHAPE_TEMPLATES: [&[&[u8]]; 7] = [
    &[&[0, 1, 0], &[1, 1, 1], &[0, 1, 0]], // Plus
    &[&[1, 1, 1]],                         // ShortLine
    &[&[1, 1, 1, 1, 1]],                   // LongLine
    &[&[1, 1], &[1, 1]],                   // Square
    &[&[1, 1, 1], &[0, 1, 0]],             // TShape
    &[&[1, 0], &[1, 0], &[1, 1]],          // LShape
    &[&[1, 1, 0], &[0, 1, 1]],             // ZShape
];

pub const NES_COLORS: [Color; 7] = [
    Color { r: 0.6667, g: 0.0,    b: 1.0,    a: 1.0 }, // Plus
    Color { r: 0.0,    g: 1.0,    b: 1.0,    a: 1.0 }, // ShortLine
    Color { r: 0.0,    g: 0.0,    b: 1.0,    a: 1.0 }, // LongLine
    Color { r: 1.0,    g: 1.0,    b: 0.0,    a: 1.0 }, // Square
    Color { r: 0.0,    g: 1.0,    b: 0.0,    a: 1.0 }, // TShape
    Color { r: 1.0,    g: 0.3334, b: 0.0,    a: 1.0 }, // LShape
    Color { r: 1.0,    g: 0.0,    b: 0.0,    a: 1.0 }, // ZShape
];

/// Binary matrix, row-major. Rows are `height` long lists of `width` cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Shape {
    /// Build a shape from rows of 0/1. Short rows are padded with empty cells.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Self {
        let height = rows.len();
        let width = rows.iter().map(|r| r.as_ref().len()).max().unwrap_or(0);
        let mut cells = vec![false; width * height];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.as_ref().iter().enumerate() {
                cells[y * width + x] = v != 0;
            }
        }
        Shape { width, height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Out-of-range reads are empty.
    pub fn is_filled(&self, col: usize, row: usize) -> bool {
        col < self.width && row < self.height && self.cells[row * self.width + col]
    }

    /// Relative `(col, row)` of every occupied cell.
    pub fn occupied(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &filled)| filled)
            .map(move |(i, _)| ((i % self.width) as i32, (i / self.width) as i32))
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.height)
            .map(|row| (0..self.width).map(|col| self.is_filled(col, row) as u8).collect())
            .collect()
    }
}

/// Quarter turn clockwise: row `i` of the result is column `i` read bottom-up.
pub fn rotate_shape(shape: &Shape) -> Shape {
    let (w, h) = (shape.width, shape.height);
    let mut cells = vec![false; w * h];
    for i in 0..w {
        for j in 0..h {
            cells[i * h + j] = shape.is_filled(i, h - 1 - j);
        }
    }
    Shape { width: h, height: w, cells }
}

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Classification of a single pixel.
///
/// `Path` never comes out of a freshly parsed raster; it is what
/// [`colour_path`] turns an `Open` pixel into after a solve.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Open,
    Path,
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Cell::Wall => "X",
                Cell::Open => " ",
                Cell::Path => "*",
            }
        )
    }
}

/// An in-memory maze image addressed by linear pixel index `row * width + col`.
///
/// The index space is `[0, width * height)`. A raster is read-only for the
/// whole pipeline except for [`Raster::paint`], which is only ever called on
/// the reconstructed path pixels once a full path exists.
pub trait Raster {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Classify the pixel at the given linear index.
    fn classify(&self, pixel: usize) -> Cell;

    /// Recolour the pixel at the given linear index as a path pixel.
    fn paint(&mut self, pixel: usize);

    fn pixels(&self) -> usize {
        self.width() * self.height()
    }

    fn is_open(&self, pixel: usize) -> bool {
        self.classify(pixel) == Cell::Open
    }

    fn row_of(&self, pixel: usize) -> usize {
        pixel / self.width()
    }

    fn col_of(&self, pixel: usize) -> usize {
        pixel % self.width()
    }
}

/// A [`Raster`] backed by a dense cell grid.
///
/// This is the representation used by the tests and benchmarks; image files
/// go through [`crate::util::ImageRaster`] instead.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GridRaster {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl GridRaster {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Wall; width * height],
        }
    }

    pub fn set(&mut self, pixel: usize, cell: Cell) {
        self.cells[pixel] = cell;
    }
}

impl Raster for GridRaster {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn classify(&self, pixel: usize) -> Cell {
        self.cells[pixel]
    }

    fn paint(&mut self, pixel: usize) {
        self.cells[pixel] = Cell::Path;
    }
}

/// Parse an ASCII maze: one line per row, `'X'` or `'#'` for walls,
/// `' '` or `'.'` for open pixels. All rows must have the same width.
impl FromStr for GridRaster {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().filter(|l| !l.is_empty()).collect();

        let height = lines.len();
        let width = lines.first().map_or(0, |l| l.chars().count());

        let mut cells = Vec::with_capacity(width * height);

        for line in &lines {
            if line.chars().count() != width {
                return Err(anyhow::anyhow!(
                    "ragged maze row: expected width {}, got {:?}",
                    width,
                    line
                ));
            }

            for c in line.chars() {
                cells.push(match c {
                    'X' | '#' => Cell::Wall,
                    ' ' | '.' => Cell::Open,
                    '*' => Cell::Path,
                    _ => return Err(anyhow::anyhow!("invalid maze character {:?}", c)),
                });
            }
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }
}

impl Display for GridRaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.width) {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Recolour every pixel of the reconstructed path, leaving all other pixels
/// untouched.
pub fn colour_path<M: Raster>(maze: &mut M, path: &[usize]) {
    for &pixel in path {
        maze.paint(pixel);
    }
}

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{Border, SolveError};
use crate::raster::Raster;

/// The two openings of the maze, as linear pixel indices.
///
/// The start gate lies in the first row, the end gate in the last; by
/// construction they can never coincide.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Gates {
    pub start: usize,
    pub end: usize,
}

/// Scan the top and bottom border rows for the unique open pixel in each.
///
/// Any other count of open pixels in a scanned row is a malformed maze and
/// fails with [`SolveError::NoGate`] or [`SolveError::MultipleGates`]. Pure
/// read, no side effects.
pub fn locate_gates<M: Raster>(maze: &M) -> Result<Gates, SolveError> {
    if maze.width() == 0 || maze.height() < 2 {
        return Err(SolveError::NoGate(Border::Top));
    }

    let start = find_gate(maze, 0..maze.width(), Border::Top)?;
    let end = find_gate(
        maze,
        maze.width() * (maze.height() - 1)..maze.pixels(),
        Border::Bottom,
    )?;

    log::debug!("start gate pixel: {start}, end gate pixel: {end}");

    Ok(Gates { start, end })
}

fn find_gate<M: Raster>(
    maze: &M,
    pixels: Range<usize>,
    border: Border,
) -> Result<usize, SolveError> {
    let mut gate = None;

    for pixel in pixels {
        if maze.is_open(pixel) {
            if gate.is_some() {
                return Err(SolveError::MultipleGates(border));
            }
            gate = Some(pixel);
        }
    }

    gate.ok_or(SolveError::NoGate(border))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::raster::GridRaster;

    #[test]
    fn finds_the_unique_opening_in_each_border_row() {
        let maze: GridRaster = "\
X XXX
X   X
XXX X"
            .parse()
            .unwrap();

        let gates = locate_gates(&maze).unwrap();
        assert_eq!(gates, Gates { start: 1, end: 13 });
    }

    #[test]
    fn closed_border_row_is_an_error() {
        let maze: GridRaster = "\
XXXXX
X   X
XXX X"
            .parse()
            .unwrap();

        assert_eq!(locate_gates(&maze), Err(SolveError::NoGate(Border::Top)));
    }

    #[test]
    fn two_openings_in_one_row_is_an_error() {
        let maze: GridRaster = "\
X XXX
X   X
X X X"
            .parse()
            .unwrap();

        assert_eq!(
            locate_gates(&maze),
            Err(SolveError::MultipleGates(Border::Bottom))
        );
    }

    #[test]
    fn degenerate_rasters_fail_gate_detection() {
        let maze: GridRaster = "X X".parse().unwrap();

        assert_eq!(locate_gates(&maze), Err(SolveError::NoGate(Border::Top)));
    }
}

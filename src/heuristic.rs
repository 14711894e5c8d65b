use crate::error::SolveError;
use crate::gates::Gates;
use crate::raster::Raster;

/// Manhattan distance to the end gate, precomputed per pixel.
///
/// On a 4-connected grid with unit move cost this is an admissible and
/// consistent estimate, which is what lets the informed search keep its
/// early exit and still return a true shortest path.
#[derive(Debug)]
pub struct HeuristicTable {
    values: Vec<usize>,
}

impl HeuristicTable {
    /// Fill the table for every interior open pixel. Border pixels other
    /// than the gates are never open, and the gates' own estimates are never
    /// read: the start enters the frontier with key 0 and discovering the
    /// end stops the search.
    pub fn manhattan<M: Raster>(maze: &M, gates: &Gates) -> Result<Self, SolveError> {
        let mut values = Vec::new();
        values.try_reserve(maze.pixels())?;
        values.resize(maze.pixels(), 0);

        let end_row = maze.row_of(gates.end);
        let end_col = maze.col_of(gates.end);

        for row in 1..maze.height() - 1 {
            for col in 1..maze.width() - 1 {
                let pixel = row * maze.width() + col;

                if maze.is_open(pixel) {
                    values[pixel] = end_row.abs_diff(row) + end_col.abs_diff(col);
                }
            }
        }

        Ok(Self { values })
    }

    pub fn estimate(&self, pixel: usize) -> usize {
        self.values[pixel]
    }
}

use std::collections::TryReserveError;
use std::fmt::Display;

use thiserror::Error;

/// The border row a gate was expected in.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Border {
    Top,
    Bottom,
}

impl Display for Border {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Border::Top => "top",
                Border::Bottom => "bottom",
            }
        )
    }
}

/// Everything that can terminate a solve attempt.
///
/// All variants are terminal: the pipeline aborts the remaining stages and
/// drops whatever partial state it had built. The input raster is only ever
/// mutated after a complete path has been reconstructed.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum SolveError {
    /// A scanned border row contained no open pixel.
    #[error("no gate in the {0} border row")]
    NoGate(Border),

    /// A scanned border row contained more than one open pixel.
    #[error("multiple gates in the {0} border row")]
    MultipleGates(Border),

    /// The gates lie in disconnected regions of the maze.
    #[error("no path connects the start gate to the end gate")]
    NoPath,

    /// An allocation failed while building the graph or searching it.
    #[error("out of memory")]
    OutOfMemory,
}

impl From<TryReserveError> for SolveError {
    fn from(_: TryReserveError) -> Self {
        SolveError::OutOfMemory
    }
}

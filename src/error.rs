use std::{fmt, path::PathBuf};

use crate::maze::Cell;

/// Everything that can go wrong between picking dimensions and writing an image.
#[derive(Debug)]
pub enum MazeError {
    /// Width or height is even or smaller than the minimum maze size.
    InvalidDimensions { width: u32, height: u32 },
    /// None of the exit candidates near the bottom-right corner was carved.
    UnreachableExit { width: u16, height: u16 },
    /// The solver ran out of cells before it reached the exit junction.
    SolveUnreachable { exit: (u16, u16) },
    /// A generation-only cell state reached the pixel mapper.
    TransientCell { x: u16, y: u16, cell: Cell },
    /// The output file could not be created or written.
    SinkWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, MazeError>;

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidDimensions { width, height } => write!(
                f,
                "[generate] invalid maze dimensions {width}x{height}: both must be odd and at least 5"
            ),
            MazeError::UnreachableExit { width, height } => write!(
                f,
                "[generate] no exit could be carved near the bottom-right corner of a {width}x{height} maze"
            ),
            MazeError::SolveUnreachable { exit } => write!(
                f,
                "[solve] search exhausted before reaching the exit junction at {exit:?}"
            ),
            MazeError::TransientCell { x, y, cell } => write!(
                f,
                "[render] cell ({x}, {y}) is still in transient state {cell:?}"
            ),
            MazeError::SinkWrite { path, source } => write!(
                f,
                "[render] failed to write image to {}: {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MazeError::SinkWrite { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_sink_write_keeps_source() {
        let err = MazeError::SinkWrite {
            path: PathBuf::from("out/maze.bmp"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("out/maze.bmp"));
    }

    #[test]
    fn test_transient_cell_names_coordinates() {
        let err = MazeError::TransientCell {
            x: 3,
            y: 0,
            cell: Cell::Boundary,
        };
        let message = err.to_string();
        assert!(message.contains("(3, 0)"));
        assert!(message.contains("Boundary"));
        assert!(err.source().is_none());
    }
}

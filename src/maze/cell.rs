use std::fmt;

/// State of a single grid cell.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Impassable.
    #[default]
    Wall,
    /// Passable, not on the solution.
    Path,
    /// Passable and part of the solution route.
    Solution,
    /// Outer ring marker used only while the generator is carving.
    Boundary,
}

impl Cell {
    /// Whether a walker can stand on this cell.
    pub fn is_passable(self) -> bool {
        matches!(self, Cell::Path | Cell::Solution)
    }

    /// Whether this state is only allowed to exist mid-generation.
    pub fn is_transient(self) -> bool {
        matches!(self, Cell::Boundary)
    }

    /// Colour of the cell in the rendered image, `None` for transient states.
    pub fn rgb(self) -> Option<[u8; 3]> {
        match self {
            Cell::Wall => Some([0, 0, 0]),
            Cell::Path => Some([255, 255, 255]),
            Cell::Solution => Some([128, 128, 128]),
            Cell::Boundary => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Cell::Wall => '#',
            Cell::Path => ' ',
            Cell::Solution => '.',
            Cell::Boundary => '%',
        };
        write!(f, "{}", symbol)
    }
}

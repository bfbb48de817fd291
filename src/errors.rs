use std::error::Error;
use std::fmt;

use crate::coordinates::ChamberCoordinate;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum MazeError {
    /// The chamber is outside the lattice.
    InvalidCoordinate(ChamberCoordinate),
    /// The two chambers are not one axis-aligned step apart.
    NotAdjacent(ChamberCoordinate, ChamberCoordinate),
    /// Passages are carved once only.
    PassageAlreadyOpen(ChamberCoordinate, ChamberCoordinate),
    /// A random walk reached a chamber with no neighbours, the lattice is disconnected.
    IsolatedChamber(ChamberCoordinate),
    /// A walked chamber has no recorded next step.
    MissingDirection(ChamberCoordinate),
    InvalidDimensions,
    /// The requested entrance column is not a column of the lattice.
    EntranceColumnOutOfRange(usize),
    EntranceNotOnSouthFace(ChamberCoordinate),
    ExitNotOnTopLayer(ChamberCoordinate),
    EmptyFinishRows,
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MazeError::InvalidCoordinate(c) => write!(f, "chamber {} is outside the lattice", c),
            MazeError::NotAdjacent(a, b) => write!(f, "chambers {} and {} are not adjacent", a, b),
            MazeError::PassageAlreadyOpen(a, b) => {
                write!(f, "passage between {} and {} is already open", a, b)
            }
            MazeError::IsolatedChamber(c) => {
                write!(f, "chamber {} has no neighbours, the lattice is disconnected", c)
            }
            MazeError::MissingDirection(c) => {
                write!(f, "no walk direction was recorded for chamber {}", c)
            }
            MazeError::InvalidDimensions => {
                write!(f, "lattice dimensions must be positive and fit in u32 indices")
            }
            MazeError::EntranceColumnOutOfRange(column) => {
                write!(f, "entrance column {} is outside the lattice", column)
            }
            MazeError::EntranceNotOnSouthFace(c) => {
                write!(f, "entrance {} must be on the bottom layer in the southern row", c)
            }
            MazeError::ExitNotOnTopLayer(c) => write!(f, "exit {} must be on the top layer", c),
            MazeError::EmptyFinishRows => write!(f, "the finish row range selects no rows"),
        }
    }
}

impl Error for MazeError {}

use std::convert::From;
use std::fmt;

/// A chamber in the maze lattice.
///
/// Layer 0 is the bottom floor, row 0 the northern edge and column 0 the western edge.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct ChamberCoordinate {
    pub layer: u32,
    pub row: u32,
    pub column: u32,
}

impl ChamberCoordinate {
    pub fn new(layer: u32, row: u32, column: u32) -> ChamberCoordinate {
        ChamberCoordinate { layer, row, column }
    }

    /// The chamber one step away in `direction`, if that is representable.
    /// Says nothing about whether the chamber exists in a particular lattice.
    pub fn offset(&self, direction: LatticeDirection) -> Option<ChamberCoordinate> {
        let ChamberCoordinate { layer, row, column } = *self;
        match direction {
            LatticeDirection::North => row.checked_sub(1).map(|r| ChamberCoordinate::new(layer, r, column)),
            LatticeDirection::South => row.checked_add(1).map(|r| ChamberCoordinate::new(layer, r, column)),
            LatticeDirection::West => column.checked_sub(1).map(|c| ChamberCoordinate::new(layer, row, c)),
            LatticeDirection::East => column.checked_add(1).map(|c| ChamberCoordinate::new(layer, row, c)),
            LatticeDirection::Down => layer.checked_sub(1).map(|l| ChamberCoordinate::new(l, row, column)),
            LatticeDirection::Up => layer.checked_add(1).map(|l| ChamberCoordinate::new(l, row, column)),
        }
    }
}

impl From<(u32, u32, u32)> for ChamberCoordinate {
    fn from(layer_row_column: (u32, u32, u32)) -> ChamberCoordinate {
        ChamberCoordinate::new(layer_row_column.0, layer_row_column.1, layer_row_column.2)
    }
}

impl fmt::Display for ChamberCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.layer, self.row, self.column)
    }
}

/// A single block in the voxel volume the maze is built in.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct VoxelCoordinate {
    pub layer: u32,
    pub row: u32,
    pub column: u32,
}

impl VoxelCoordinate {
    pub fn new(layer: u32, row: u32, column: u32) -> VoxelCoordinate {
        VoxelCoordinate { layer, row, column }
    }
}

impl From<(u32, u32, u32)> for VoxelCoordinate {
    fn from(layer_row_column: (u32, u32, u32)) -> VoxelCoordinate {
        VoxelCoordinate::new(layer_row_column.0, layer_row_column.1, layer_row_column.2)
    }
}

impl fmt::Display for VoxelCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.layer, self.row, self.column)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum LatticeDirection {
    North,
    South,
    East,
    West,
    Up,
    Down,
}

pub const ALL_DIRECTIONS: [LatticeDirection; 6] = [LatticeDirection::North,
                                                   LatticeDirection::South,
                                                   LatticeDirection::East,
                                                   LatticeDirection::West,
                                                   LatticeDirection::Up,
                                                   LatticeDirection::Down];

impl LatticeDirection {
    /// Passages along this direction are climbed rather than walked.
    pub fn is_vertical(&self) -> bool {
        match *self {
            LatticeDirection::Up | LatticeDirection::Down => true,
            _ => false,
        }
    }
}

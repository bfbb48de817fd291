use std::cmp;
use std::ops::Range;

use rand::Rng;

use crate::coordinates::ChamberCoordinate;
use crate::errors::MazeError;
use crate::grid_dimensions::LatticeDimensions;

/// Where the maze is entered and where it is left.
///
/// The entrance is on the ground floor against the southern wall, so its door opens onto
/// the outside. The exit is on the top floor so a ladder can lead up through the roof.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Terminals {
    entrance: ChamberCoordinate,
    exit: ChamberCoordinate,
}

impl Terminals {
    pub fn new(dimensions: &LatticeDimensions,
               entrance: ChamberCoordinate,
               exit: ChamberCoordinate)
               -> Result<Terminals, MazeError> {
        for coord in &[entrance, exit] {
            if !dimensions.is_valid_coordinate(*coord) {
                return Err(MazeError::InvalidCoordinate(*coord));
            }
        }

        let south_row = dimensions.rows().0 as u32 - 1;
        if entrance.layer != 0 || entrance.row != south_row {
            return Err(MazeError::EntranceNotOnSouthFace(entrance));
        }
        if exit.layer as usize != dimensions.top_layer().0 {
            return Err(MazeError::ExitNotOnTopLayer(exit));
        }

        Ok(Terminals { entrance, exit })
    }

    /// Random terminals: the entrance in any column of the southern row, the exit anywhere on
    /// the top floor within `finish_rows`, which is clamped to the lattice.
    pub fn random<R>(dimensions: &LatticeDimensions,
                     finish_rows: Range<usize>,
                     rng: &mut R)
                     -> Result<Terminals, MazeError>
        where R: Rng + ?Sized
    {
        let entrance_column = rng.gen_range(0..dimensions.columns().0);
        Terminals::random_exit(dimensions, entrance_column, finish_rows, rng)
    }

    /// As `random` but with the entrance column fixed.
    pub fn random_exit<R>(dimensions: &LatticeDimensions,
                          entrance_column: usize,
                          finish_rows: Range<usize>,
                          rng: &mut R)
                          -> Result<Terminals, MazeError>
        where R: Rng + ?Sized
    {
        let rows = clamp_rows(finish_rows, dimensions);
        if rows.start >= rows.end {
            return Err(MazeError::EmptyFinishRows);
        }

        let entrance = entrance_chamber(dimensions, entrance_column)?;
        let exit_row = rng.gen_range(rows);
        let exit_column = rng.gen_range(0..dimensions.columns().0);
        let exit = ChamberCoordinate::new(dimensions.top_layer().0 as u32, exit_row as u32, exit_column as u32);

        Terminals::new(dimensions, entrance, exit)
    }

    #[inline]
    pub fn entrance(&self) -> ChamberCoordinate {
        self.entrance
    }

    #[inline]
    pub fn exit(&self) -> ChamberCoordinate {
        self.exit
    }
}

/// The chamber in `column` of the southern row of the ground floor.
pub fn entrance_chamber(dimensions: &LatticeDimensions, column: usize) -> Result<ChamberCoordinate, MazeError> {
    if column >= dimensions.columns().0 {
        return Err(MazeError::EntranceColumnOutOfRange(column));
    }
    Ok(ChamberCoordinate::new(0, dimensions.rows().0 as u32 - 1, column as u32))
}

/// The northern half of the floor, at least one row.
pub fn default_finish_rows(dimensions: &LatticeDimensions) -> Range<usize> {
    0..cmp::max(1, dimensions.rows().0 / 2)
}

fn clamp_rows(rows: Range<usize>, dimensions: &LatticeDimensions) -> Range<usize> {
    let rows_count = dimensions.rows().0;
    cmp::min(rows.start, rows_count)..cmp::min(rows.end, rows_count)
}

use std::fmt;

use itertools::Itertools;

use crate::shell::{Voxel, VoxelGrid, ALL_VOXELS};

impl fmt::Display for Voxel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// The build plan, one layer at a time from the ground up.
///
/// Each row of a layer is a line of glyphs separated by single spaces, north first, and
/// every layer is followed by a blank line.
impl fmt::Display for VoxelGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for layer in 0..self.dimensions().layers {
            for row in self.layer(layer) {
                writeln!(f, "{}", row.iter().map(Voxel::glyph).join(" "))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// How many blocks of each kind a build plan needs.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BlockCounts {
    counts: [usize; 7],
}

impl BlockCounts {
    pub fn count(&self, voxel: Voxel) -> usize {
        ALL_VOXELS.iter()
            .position(|v| *v == voxel)
            .map_or(0, |index| self.counts[index])
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

impl VoxelGrid {
    pub fn counts(&self) -> BlockCounts {
        let mut counts = [0; 7];
        for voxel in self.iter() {
            if let Some(index) = ALL_VOXELS.iter().position(|v| v == voxel) {
                counts[index] += 1;
            }
        }
        BlockCounts { counts }
    }
}

impl fmt::Display for BlockCounts {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let summary = ALL_VOXELS.iter()
            .zip(self.counts.iter())
            .map(|(voxel, count)| format!("{}: {}", voxel, count))
            .join(", ");
        writeln!(f, "counts: {{{}}}", summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::VoxelCoordinate;
    use crate::grid_dimensions::{LatticeDimensions, VoxelDimensions};
    use crate::units::{ColumnsCount, LayersCount, RowsCount};

    #[test]
    fn layers_are_printed_bottom_up() {
        let mut grid = VoxelGrid::new(VoxelDimensions { layers: 2, rows: 2, columns: 3 });
        grid[VoxelCoordinate::new(0, 0, 0)] = Voxel::Solid;
        grid[VoxelCoordinate::new(0, 1, 2)] = Voxel::Door;
        grid[VoxelCoordinate::new(1, 0, 1)] = Voxel::StartSign;
        grid[VoxelCoordinate::new(1, 1, 0)] = Voxel::Light;

        let expected = "B O O\n\
                        O O D\n\
                        \n\
                        O 1 O\n\
                        S O O\n\
                        \n";
        assert_eq!(grid.to_string(), expected);
    }

    #[test]
    fn standard_plan_shape() {
        let dims = LatticeDimensions::new(LayersCount(4), RowsCount(7), ColumnsCount(7)).unwrap();
        let text = VoxelGrid::enclosure(&dims).to_string();
        let lines: Vec<&str> = text.lines().collect();

        // 16 layers of 24 rows, each followed by a blank line.
        assert_eq!(lines.len(), 16 * 25);
        assert!(lines.iter().filter(|line| !line.is_empty()).all(|line| line.len() == 24 * 2 - 1));
        assert_eq!(lines[24], "");
        assert_eq!(lines[25 + 1], "O B B B B B B B B B B B B B B B B B B B B B B O");
    }

    #[test]
    fn block_counts() {
        let mut grid = VoxelGrid::new(VoxelDimensions { layers: 1, rows: 2, columns: 2 });
        grid[VoxelCoordinate::new(0, 0, 0)] = Voxel::Ladder;
        grid[VoxelCoordinate::new(0, 0, 1)] = Voxel::Ladder;
        grid[VoxelCoordinate::new(0, 1, 1)] = Voxel::FinishSign;

        let counts = grid.counts();
        assert_eq!(counts.count(Voxel::Ladder), 2);
        assert_eq!(counts.count(Voxel::FinishSign), 1);
        assert_eq!(counts.count(Voxel::Empty), 1);
        assert_eq!(counts.count(Voxel::Door), 0);
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.to_string(),
                   "counts: {B: 0, S: 0, 1: 0, 2: 1, L: 2, D: 0, O: 1}\n");
    }
}

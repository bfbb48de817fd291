use std::u32;

use crate::coordinates::ChamberCoordinate;
use crate::units::{ColumnsCount, EdgesCount, LayerIndex, LayersCount, NodesCount, RowsCount};

/// Voxels per chamber along each axis: a two block chamber plus one block of wall or slab.
pub const CHAMBER_PITCH: u32 = 3;

/// Extents of a lattice of chambers, `layers x rows x columns`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LatticeDimensions {
    layers: LayersCount,
    rows: RowsCount,
    columns: ColumnsCount,
}

/// Extents of the voxel volume needed to build a lattice.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct VoxelDimensions {
    pub layers: usize,
    pub rows: usize,
    pub columns: usize,
}

impl VoxelDimensions {
    #[inline]
    pub fn size(&self) -> usize {
        self.layers * self.rows * self.columns
    }
}

impl LatticeDimensions {
    /// Returns None if any extent is zero, or the chambers or the voxel volume could not be
    /// indexed with `u32` coordinates.
    pub fn new(layers: LayersCount, rows: RowsCount, columns: ColumnsCount) -> Option<LatticeDimensions> {
        let (LayersCount(l), RowsCount(r), ColumnsCount(c)) = (layers, rows, columns);
        if l == 0 || r == 0 || c == 0 {
            return None;
        }

        let fits_u32 = |extent: usize| extent <= u32::MAX as usize;
        let nodes = l.checked_mul(r).and_then(|lr| lr.checked_mul(c));
        let voxel_extents = [l.checked_mul(3).and_then(|v| v.checked_add(4)),
                             r.checked_mul(3).and_then(|v| v.checked_add(3)),
                             c.checked_mul(3).and_then(|v| v.checked_add(3))];

        match nodes {
            Some(n) if fits_u32(n) &&
                       voxel_extents.iter().all(|v| v.map_or(false, |e| fits_u32(e))) => {
                Some(LatticeDimensions { layers, rows, columns })
            }
            _ => None,
        }
    }

    #[inline]
    pub fn layers(&self) -> LayersCount {
        self.layers
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline]
    pub fn size(&self) -> NodesCount {
        NodesCount(self.layers.0 * self.rows.0 * self.columns.0)
    }

    #[inline]
    pub fn layer_size(&self) -> usize {
        self.rows.0 * self.columns.0
    }

    #[inline]
    pub fn top_layer(&self) -> LayerIndex {
        LayerIndex(self.layers.0 - 1)
    }

    /// Node and edge counts of the lattice graph. Every pair of chambers one step apart
    /// along a single axis gets an edge, so the edge count is exact.
    pub fn graph_size(&self) -> (NodesCount, EdgesCount) {
        let (l, r, c) = (self.layers.0, self.rows.0, self.columns.0);
        let west_east = l * r * (c - 1);
        let north_south = l * (r - 1) * c;
        let bottom_top = (l - 1) * r * c;
        (self.size(), EdgesCount(west_east + north_south + bottom_top))
    }

    /// The voxel volume a maze over this lattice is built in: one empty margin around the
    /// structure, plus two layers above the roof for the exit.
    pub fn voxel_dimensions(&self) -> VoxelDimensions {
        let pitch = CHAMBER_PITCH as usize;
        VoxelDimensions {
            layers: pitch * self.layers.0 + 4,
            rows: pitch * self.rows.0 + 3,
            columns: pitch * self.columns.0 + 3,
        }
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: ChamberCoordinate) -> bool {
        (coord.layer as usize) < self.layers.0 && (coord.row as usize) < self.rows.0 &&
        (coord.column as usize) < self.columns.0
    }

    /// Convert a chamber coordinate to a one dimensional index in the range 0..size.
    /// Returns None if the coordinate is outside the lattice.
    pub fn coordinate_to_index(&self, coord: ChamberCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            let layer_offset = coord.layer as usize * self.layer_size();
            Some(layer_offset + coord.row as usize * self.columns.0 + coord.column as usize)
        } else {
            None
        }
    }

    /// Inverse of `coordinate_to_index`. Panics if the index is not below `size()`.
    pub fn index_to_coordinate(&self, index: usize) -> ChamberCoordinate {
        assert!(index < self.size().0, "chamber index {} out of range", index);
        let layer = index / self.layer_size();
        let within_layer = index % self.layer_size();
        let row = within_layer / self.columns.0;
        let column = within_layer % self.columns.0;
        ChamberCoordinate::new(layer as u32, row as u32, column as u32)
    }
}

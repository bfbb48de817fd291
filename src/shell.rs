use std::ops::{Index, IndexMut};
use std::slice;

use crate::coordinates::{ChamberCoordinate, VoxelCoordinate};
use crate::geometry;
use crate::grid_dimensions::{LatticeDimensions, VoxelDimensions, CHAMBER_PITCH};

/// What to build at one block of the volume.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum Voxel {
    Empty,
    Solid,
    /// A light that hangs on a wall, a sconce.
    Light,
    Ladder,
    StartSign,
    FinishSign,
    Door,
}

pub const ALL_VOXELS: [Voxel; 7] = [Voxel::Solid,
                                    Voxel::Light,
                                    Voxel::StartSign,
                                    Voxel::FinishSign,
                                    Voxel::Ladder,
                                    Voxel::Door,
                                    Voxel::Empty];

impl Voxel {
    pub fn glyph(&self) -> char {
        match *self {
            Voxel::Empty => 'O',
            Voxel::Solid => 'B',
            Voxel::Light => 'S',
            Voxel::Ladder => 'L',
            Voxel::StartSign => '1',
            Voxel::FinishSign => '2',
            Voxel::Door => 'D',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Voxel> {
        ALL_VOXELS.iter().cloned().find(|voxel| voxel.glyph() == glyph)
    }
}

impl Default for Voxel {
    fn default() -> Voxel {
        Voxel::Empty
    }
}

/// A dense `layers x rows x columns` volume of blocks. Layer 0 is the ground.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct VoxelGrid {
    dimensions: VoxelDimensions,
    voxels: Vec<Voxel>,
}

impl VoxelGrid {
    pub fn new(dimensions: VoxelDimensions) -> VoxelGrid {
        VoxelGrid {
            dimensions,
            voxels: vec![Voxel::Empty; dimensions.size()],
        }
    }

    /// The structure that encloses a lattice of chambers before any passage is opened.
    ///
    /// Every chamber is walled in on all sides with solid blocks, floored and roofed by slabs,
    /// and has a ladder in its north-east corner and a light on its upper level. One empty
    /// block surrounds the structure and two more lie above its roof.
    pub fn enclosure(lattice_dimensions: &LatticeDimensions) -> VoxelGrid {
        let dimensions = lattice_dimensions.voxel_dimensions();
        let mut grid = VoxelGrid::new(dimensions);

        // The structure spans 1..=3n+1 on each axis, the last wall or slab included.
        let pitch = CHAMBER_PITCH as usize;
        let structure_layers = pitch * lattice_dimensions.layers().0 + 1;
        let structure_rows = pitch * lattice_dimensions.rows().0 + 1;
        let structure_columns = pitch * lattice_dimensions.columns().0 + 1;

        for layer in 1..=structure_layers {
            let is_slab = (layer - 1) % pitch == 0;
            for row in 1..=structure_rows {
                for column in 1..=structure_columns {
                    if is_slab || row % pitch == 1 || column % pitch == 1 {
                        grid.voxels[dimensions.columns * (dimensions.rows * layer + row) + column] =
                            Voxel::Solid;
                    }
                }
            }
        }

        for layer in 0..lattice_dimensions.layers().0 {
            for row in 0..lattice_dimensions.rows().0 {
                for column in 0..lattice_dimensions.columns().0 {
                    let chamber = ChamberCoordinate::new(layer as u32, row as u32, column as u32);
                    for ladder in &geometry::chamber_ladder(chamber) {
                        grid[*ladder] = Voxel::Ladder;
                    }
                    grid[geometry::chamber_light(chamber)] = Voxel::Light;
                }
            }
        }

        grid
    }

    #[inline]
    pub fn dimensions(&self) -> VoxelDimensions {
        self.dimensions
    }

    pub fn is_valid_coordinate(&self, coord: VoxelCoordinate) -> bool {
        (coord.layer as usize) < self.dimensions.layers && (coord.row as usize) < self.dimensions.rows &&
        (coord.column as usize) < self.dimensions.columns
    }

    pub fn get(&self, coord: VoxelCoordinate) -> Option<Voxel> {
        self.voxel_index(coord).map(|index| self.voxels[index])
    }

    pub fn get_mut(&mut self, coord: VoxelCoordinate) -> Option<&mut Voxel> {
        match self.voxel_index(coord) {
            Some(index) => Some(&mut self.voxels[index]),
            None => None,
        }
    }

    /// One horizontal slice, as rows of blocks from north to south.
    /// Panics if the layer is outside the volume.
    pub fn layer(&self, layer: usize) -> slice::Chunks<Voxel> {
        let layer_size = self.dimensions.rows * self.dimensions.columns;
        self.voxels[layer * layer_size..(layer + 1) * layer_size].chunks(self.dimensions.columns)
    }

    /// All blocks, layer by layer, row by row.
    pub fn iter(&self) -> slice::Iter<Voxel> {
        self.voxels.iter()
    }

    fn voxel_index(&self, coord: VoxelCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            let VoxelDimensions { rows, columns, .. } = self.dimensions;
            Some(columns * (rows * coord.layer as usize + coord.row as usize) + coord.column as usize)
        } else {
            None
        }
    }
}

impl Index<VoxelCoordinate> for VoxelGrid {
    type Output = Voxel;

    fn index(&self, coord: VoxelCoordinate) -> &Voxel {
        match self.voxel_index(coord) {
            Some(index) => &self.voxels[index],
            None => panic!("voxel {} is outside the {:?} volume", coord, self.dimensions),
        }
    }
}

impl IndexMut<VoxelCoordinate> for VoxelGrid {
    fn index_mut(&mut self, coord: VoxelCoordinate) -> &mut Voxel {
        match self.voxel_index(coord) {
            Some(index) => &mut self.voxels[index],
            None => panic!("voxel {} is outside the {:?} volume", coord, self.dimensions),
        }
    }
}

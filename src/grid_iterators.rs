use std::fmt;

use crate::coordinates::ChamberCoordinate;
use crate::grid_dimensions::LatticeDimensions;
use crate::units::LayerIndex;

/// Every chamber of a lattice in row-major order: columns fastest, then rows, then layers.
#[derive(Copy, Clone)]
pub struct ChamberIter {
    dimensions: LatticeDimensions,
    current_chamber_number: usize,
    chambers_count: usize,
}

impl ChamberIter {
    pub fn new(dimensions: LatticeDimensions) -> ChamberIter {
        ChamberIter {
            dimensions,
            current_chamber_number: 0,
            chambers_count: dimensions.size().0,
        }
    }
}

impl fmt::Debug for ChamberIter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "ChamberIter :: current_chamber_number: {:?}, chambers_count: {:?}",
               self.current_chamber_number,
               self.chambers_count)
    }
}

impl ExactSizeIterator for ChamberIter {} // default impl using size_hint()
impl Iterator for ChamberIter {
    type Item = ChamberCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_chamber_number < self.chambers_count {
            let coord = self.dimensions.index_to_coordinate(self.current_chamber_number);
            self.current_chamber_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.chambers_count - self.current_chamber_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

/// The chambers of a single floor, row by row. Empty if the layer is not in the lattice.
#[derive(Copy, Clone, Debug)]
pub struct LayerIter {
    dimensions: LatticeDimensions,
    current_index: usize,
    end_index: usize,
}

impl LayerIter {
    pub fn new(dimensions: LatticeDimensions, layer: LayerIndex) -> LayerIter {
        let LayerIndex(layer) = layer;
        let (start, end) = if layer < dimensions.layers().0 {
            let layer_size = dimensions.layer_size();
            (layer * layer_size, (layer + 1) * layer_size)
        } else {
            (0, 0)
        };
        LayerIter {
            dimensions,
            current_index: start,
            end_index: end,
        }
    }
}

impl ExactSizeIterator for LayerIter {}
impl Iterator for LayerIter {
    type Item = ChamberCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_index < self.end_index {
            let coord = self.dimensions.index_to_coordinate(self.current_index);
            self.current_index += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end_index - self.current_index;
        (remaining, Some(remaining))
    }
}

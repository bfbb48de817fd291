//! Mapping between the chamber lattice and blocks in the voxel volume.
//!
//! Every chamber is a 2x2x2 cube of blocks. Chambers repeat every `CHAMBER_PITCH` blocks
//! along each axis, leaving one block of wall (or of floor slab, vertically) between
//! neighbours. A passage is the piece of that wall or slab which gets removed.
//!
//! All offsets here are relative to a chamber's origin, its lowest, northernmost,
//! westernmost block.
use smallvec::SmallVec;

use crate::coordinates::{ChamberCoordinate, LatticeDirection, VoxelCoordinate};
use crate::grid_dimensions::CHAMBER_PITCH;

pub type PassageVoxels = SmallVec<[VoxelCoordinate; 2]>;

/// Blocks between the edge of the volume and the first chamber: an empty margin and the
/// outer wall (or the ground floor slab).
const CHAMBER_MARGIN: u32 = 2;

/// In-chamber ladder, north-east corner of the chamber on both of its layers.
const LADDER_OFFSETS: [(i32, i32, i32); 2] = [(0, 0, 1), (1, 0, 1)];
/// Light fixture hanging in the south-east corner of the upper layer.
const LIGHT_OFFSET: (i32, i32, i32) = (1, 1, 1);

const EAST_PASSAGE_OFFSETS: [(i32, i32, i32); 2] = [(0, 1, 2), (1, 1, 2)];
const SOUTH_PASSAGE_OFFSETS: [(i32, i32, i32); 2] = [(0, 2, 0), (1, 2, 0)];
/// The slab block directly above the in-chamber ladder.
const UP_PASSAGE_OFFSET: (i32, i32, i32) = (2, 0, 1);

const ENTRANCE_PLATFORM_OFFSETS: [(i32, i32, i32); 2] = [(-1, 3, 0), (-1, 3, 1)];
const ENTRANCE_SIGNPOST_OFFSET: (i32, i32, i32) = (0, 3, 1);

const EXIT_SHAFT_OFFSETS: [(i32, i32, i32); 3] = [(2, 0, 1), (3, 0, 1), (4, 0, 1)];
const EXIT_LANDING_OFFSETS: [(i32, i32, i32); 2] = [(3, -1, 1), (4, -1, 1)];
const EXIT_SIGNPOST_OFFSET: (i32, i32, i32) = (3, -1, 2);

/// The lowest, northernmost, westernmost block of a chamber.
pub fn chamber_origin(chamber: ChamberCoordinate) -> VoxelCoordinate {
    VoxelCoordinate::new(CHAMBER_PITCH * chamber.layer + CHAMBER_MARGIN,
                         CHAMBER_PITCH * chamber.row + CHAMBER_MARGIN,
                         CHAMBER_PITCH * chamber.column + CHAMBER_MARGIN)
}

// Every offset used in this module keeps the result inside the volume sized by
// `LatticeDimensions::voxel_dimensions`, so the subtraction cannot underflow.
fn offset_voxel(origin: VoxelCoordinate, offset: (i32, i32, i32)) -> VoxelCoordinate {
    let shift = |base: u32, delta: i32| (base as i64 + delta as i64) as u32;
    VoxelCoordinate::new(shift(origin.layer, offset.0),
                         shift(origin.row, offset.1),
                         shift(origin.column, offset.2))
}

fn offset_voxels<A>(chamber: ChamberCoordinate, offsets: &[(i32, i32, i32)]) -> A
    where A: std::iter::FromIterator<VoxelCoordinate>
{
    let origin = chamber_origin(chamber);
    offsets.iter().map(|offset| offset_voxel(origin, *offset)).collect()
}

/// The eight blocks of air making up a chamber.
pub fn chamber_footprint(chamber: ChamberCoordinate) -> SmallVec<[VoxelCoordinate; 8]> {
    let origin = chamber_origin(chamber);
    let mut footprint = SmallVec::new();
    for layer in 0..2 {
        for row in 0..2 {
            for column in 0..2 {
                footprint.push(offset_voxel(origin, (layer, row, column)));
            }
        }
    }
    footprint
}

pub fn chamber_ladder(chamber: ChamberCoordinate) -> [VoxelCoordinate; 2] {
    let origin = chamber_origin(chamber);
    [offset_voxel(origin, LADDER_OFFSETS[0]), offset_voxel(origin, LADDER_OFFSETS[1])]
}

pub fn chamber_light(chamber: ChamberCoordinate) -> VoxelCoordinate {
    offset_voxel(chamber_origin(chamber), LIGHT_OFFSET)
}

/// The blocks removed to join two adjacent chambers.
///
/// A passage on the same floor is two blocks of wall stacked on top of each other, a
/// passage between floors is the single slab block above the lower chamber's ladder.
/// The order of `a` and `b` does not matter. Returns None if they are not adjacent.
pub fn passage_voxels(a: ChamberCoordinate, b: ChamberCoordinate) -> Option<PassageVoxels> {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    let direction = [LatticeDirection::East, LatticeDirection::South, LatticeDirection::Up]
        .iter()
        .cloned()
        .find(|dir| first.offset(*dir) == Some(second))?;

    let voxels = match direction {
        LatticeDirection::East => offset_voxels(first, &EAST_PASSAGE_OFFSETS),
        LatticeDirection::South => offset_voxels(first, &SOUTH_PASSAGE_OFFSETS),
        _ => offset_voxels(first, &[UP_PASSAGE_OFFSET]),
    };
    Some(voxels)
}

/// Blocks placed around the entrance chamber, which must be on the southern face.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct EntranceDecoration {
    /// The outer wall blocks that become a door. The same blocks a passage further south
    /// would occupy.
    pub door: [VoxelCoordinate; 2],
    /// Ground level blocks outside the door to step up from.
    pub platform: [VoxelCoordinate; 2],
    pub signpost: VoxelCoordinate,
}

impl EntranceDecoration {
    pub fn for_chamber(chamber: ChamberCoordinate) -> EntranceDecoration {
        let origin = chamber_origin(chamber);
        let door = [offset_voxel(origin, SOUTH_PASSAGE_OFFSETS[0]),
                    offset_voxel(origin, SOUTH_PASSAGE_OFFSETS[1])];
        let platform = [offset_voxel(origin, ENTRANCE_PLATFORM_OFFSETS[0]),
                        offset_voxel(origin, ENTRANCE_PLATFORM_OFFSETS[1])];
        EntranceDecoration {
            door,
            platform,
            signpost: offset_voxel(origin, ENTRANCE_SIGNPOST_OFFSET),
        }
    }

    pub fn voxels(&self) -> Vec<VoxelCoordinate> {
        self.door.iter().chain(self.platform.iter()).cloned().chain(Some(self.signpost)).collect()
    }
}

/// Blocks placed above the exit chamber, which must be on the top floor: a ladder up
/// through the roof onto a landing with the finish signpost.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ExitDecoration {
    pub shaft: [VoxelCoordinate; 3],
    pub landing: [VoxelCoordinate; 2],
    pub signpost: VoxelCoordinate,
}

impl ExitDecoration {
    pub fn for_chamber(chamber: ChamberCoordinate) -> ExitDecoration {
        let origin = chamber_origin(chamber);
        let shaft = [offset_voxel(origin, EXIT_SHAFT_OFFSETS[0]),
                     offset_voxel(origin, EXIT_SHAFT_OFFSETS[1]),
                     offset_voxel(origin, EXIT_SHAFT_OFFSETS[2])];
        let landing = [offset_voxel(origin, EXIT_LANDING_OFFSETS[0]),
                       offset_voxel(origin, EXIT_LANDING_OFFSETS[1])];
        ExitDecoration {
            shaft,
            landing,
            signpost: offset_voxel(origin, EXIT_SIGNPOST_OFFSET),
        }
    }

    pub fn voxels(&self) -> Vec<VoxelCoordinate> {
        self.shaft.iter().chain(self.landing.iter()).cloned().chain(Some(self.signpost)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid_dimensions::LatticeDimensions;
    use crate::units::{ColumnsCount, LayersCount, RowsCount};
    use fnv::FnvHashSet;

    fn gc(layer: u32, row: u32, column: u32) -> ChamberCoordinate {
        ChamberCoordinate::new(layer, row, column)
    }

    fn vc(layer: u32, row: u32, column: u32) -> VoxelCoordinate {
        VoxelCoordinate::new(layer, row, column)
    }

    #[test]
    fn chamber_origins() {
        assert_eq!(chamber_origin(gc(0, 0, 0)), vc(2, 2, 2));
        assert_eq!(chamber_origin(gc(3, 6, 6)), vc(11, 20, 20));
    }

    #[test]
    fn horizontal_passages_are_two_wall_blocks() {
        assert_eq!(&*passage_voxels(gc(0, 0, 0), gc(0, 0, 1)).unwrap(), &[vc(2, 3, 4), vc(3, 3, 4)]);
        assert_eq!(&*passage_voxels(gc(0, 6, 3), gc(0, 6, 4)).unwrap(), &[vc(2, 21, 13), vc(3, 21, 13)]);
        assert_eq!(&*passage_voxels(gc(0, 0, 0), gc(0, 1, 0)).unwrap(), &[vc(2, 4, 2), vc(3, 4, 2)]);
        assert_eq!(&*passage_voxels(gc(3, 2, 3), gc(3, 3, 3)).unwrap(), &[vc(11, 10, 11), vc(12, 10, 11)]);
    }

    #[test]
    fn vertical_passages_are_one_slab_block() {
        assert_eq!(&*passage_voxels(gc(0, 0, 0), gc(1, 0, 0)).unwrap(), &[vc(4, 2, 3)]);
        assert_eq!(&*passage_voxels(gc(0, 0, 4), gc(1, 0, 4)).unwrap(), &[vc(4, 2, 15)]);
    }

    #[test]
    fn passage_voxels_ignore_argument_order() {
        let pairs = [(gc(1, 2, 3), gc(1, 2, 4)), (gc(1, 2, 3), gc(1, 3, 3)), (gc(1, 2, 3), gc(2, 2, 3))];
        for &(a, b) in &pairs {
            assert_eq!(passage_voxels(a, b), passage_voxels(b, a));
            assert_eq!(passage_voxels(a, b), passage_voxels(a, b));
        }
    }

    #[test]
    fn non_adjacent_chambers_have_no_passage() {
        assert_eq!(passage_voxels(gc(0, 0, 0), gc(0, 0, 0)), None);
        assert_eq!(passage_voxels(gc(0, 0, 0), gc(0, 0, 2)), None);
        assert_eq!(passage_voxels(gc(0, 0, 0), gc(0, 1, 1)), None);
        assert_eq!(passage_voxels(gc(0, 0, 0), gc(2, 0, 0)), None);
    }

    #[test]
    fn entrance_decoration_of_standard_start() {
        let entrance = EntranceDecoration::for_chamber(gc(0, 6, 3));
        assert_eq!(entrance.door, [vc(2, 22, 11), vc(3, 22, 11)]);
        assert_eq!(entrance.platform, [vc(1, 23, 11), vc(1, 23, 12)]);
        assert_eq!(entrance.signpost, vc(2, 23, 12));
    }

    #[test]
    fn exit_decoration_of_top_floor_chamber() {
        let exit = ExitDecoration::for_chamber(gc(3, 1, 2));
        assert_eq!(exit.shaft, [vc(13, 5, 9), vc(14, 5, 9), vc(15, 5, 9)]);
        assert_eq!(exit.landing, [vc(14, 4, 9), vc(15, 4, 9)]);
        assert_eq!(exit.signpost, vc(14, 4, 10));
    }

    #[test]
    fn chamber_footprint_is_a_two_block_cube() {
        let footprint = chamber_footprint(gc(1, 1, 1));
        assert_eq!(footprint.len(), 8);
        assert!(footprint.contains(&vc(5, 5, 5)));
        assert!(footprint.contains(&vc(6, 6, 6)));
        assert!(!footprint.contains(&vc(7, 5, 5)));
    }

    #[test]
    fn no_voxel_is_claimed_twice() {
        let dims = LatticeDimensions::new(LayersCount(4), RowsCount(7), ColumnsCount(7)).unwrap();
        let mut claimed = FnvHashSet::default();
        let mut claim = |v: VoxelCoordinate| assert!(claimed.insert(v), "voxel {} claimed twice", v);

        for index in 0..dims.size().0 {
            let chamber = dims.index_to_coordinate(index);
            for v in chamber_footprint(chamber) {
                claim(v);
            }
            for dir in &[LatticeDirection::East, LatticeDirection::South, LatticeDirection::Up] {
                if let Some(neighbour) = chamber.offset(*dir).filter(|n| dims.is_valid_coordinate(*n)) {
                    for v in passage_voxels(chamber, neighbour).unwrap() {
                        claim(v);
                    }
                }
            }
        }

        // Any southern chamber on the ground floor and any top floor chamber could be a terminal.
        for column in 0..7 {
            for v in EntranceDecoration::for_chamber(gc(0, 6, column)).voxels() {
                claim(v);
            }
            for row in 0..7 {
                for v in ExitDecoration::for_chamber(gc(3, row, column)).voxels() {
                    claim(v);
                }
            }
        }
    }

    #[test]
    fn decorations_stay_inside_the_volume() {
        let dims = LatticeDimensions::new(LayersCount(4), RowsCount(7), ColumnsCount(7)).unwrap();
        let volume = dims.voxel_dimensions();
        let inside = |v: &VoxelCoordinate| {
            (v.layer as usize) < volume.layers && (v.row as usize) < volume.rows &&
            (v.column as usize) < volume.columns
        };
        assert!(EntranceDecoration::for_chamber(gc(0, 6, 6)).voxels().iter().all(&inside));
        assert!(ExitDecoration::for_chamber(gc(3, 0, 6)).voxels().iter().all(&inside));
    }
}

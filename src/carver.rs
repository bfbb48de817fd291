use log::debug;

use crate::geometry::{EntranceDecoration, ExitDecoration};
use crate::grid::Lattice;
use crate::shell::{Voxel, VoxelGrid};
use crate::terminals::Terminals;

/// Apply the open passages of the lattice and the terminal decorations to a voxel volume.
///
/// Passages on a floor become empty blocks and passages between floors become ladders.
/// The entrance gets a door in the southern wall, a platform and a start sign; the exit
/// gets a ladder up through the roof onto a landing with a finish sign.
///
/// Panics if `voxels` is smaller than the volume the lattice's dimensions call for.
pub fn carve(lattice: &Lattice, terminals: &Terminals, voxels: &mut VoxelGrid) {
    let mut carved = 0;
    for (voxel, ladder) in lattice.open_passage_voxels() {
        voxels[voxel] = if ladder { Voxel::Ladder } else { Voxel::Empty };
        carved += 1;
    }

    let entrance = EntranceDecoration::for_chamber(terminals.entrance());
    for door in &entrance.door {
        voxels[*door] = Voxel::Door;
    }
    for platform in &entrance.platform {
        voxels[*platform] = Voxel::Solid;
    }
    voxels[entrance.signpost] = Voxel::StartSign;

    let exit = ExitDecoration::for_chamber(terminals.exit());
    for shaft in &exit.shaft {
        voxels[*shaft] = Voxel::Ladder;
    }
    for landing in &exit.landing {
        voxels[*landing] = Voxel::Solid;
    }
    voxels[exit.signpost] = Voxel::FinishSign;

    debug!("carved {} passage blocks, entrance {}, exit {}",
           carved,
           terminals.entrance(),
           terminals.exit());
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use super::*;
    use crate::coordinates::{ChamberCoordinate, VoxelCoordinate};
    use crate::generators;
    use crate::geometry;
    use crate::grid_dimensions::LatticeDimensions;
    use crate::units::{ColumnsCount, LayersCount, RowsCount};

    fn gc(layer: u32, row: u32, column: u32) -> ChamberCoordinate {
        ChamberCoordinate::new(layer, row, column)
    }

    fn v(layer: u32, row: u32, column: u32) -> VoxelCoordinate {
        VoxelCoordinate::new(layer, row, column)
    }

    fn standard_maze(seed: u64, terminals: Terminals) -> (Lattice, VoxelGrid, VoxelGrid) {
        let dimensions = LatticeDimensions::new(LayersCount(4), RowsCount(7), ColumnsCount(7))
            .expect("valid dimensions");
        let mut lattice = Lattice::new(dimensions);
        let mut rng = XorShiftRng::seed_from_u64(seed);
        let _ = generators::wilson(&mut lattice, terminals.entrance(), &mut rng).expect("wilson failed");
        let shell = VoxelGrid::enclosure(&dimensions);
        let mut voxels = shell.clone();
        carve(&lattice, &terminals, &mut voxels);
        (lattice, shell, voxels)
    }

    fn standard_terminals() -> Terminals {
        let dimensions = LatticeDimensions::new(LayersCount(4), RowsCount(7), ColumnsCount(7))
            .expect("valid dimensions");
        Terminals::new(&dimensions, gc(0, 6, 3), gc(3, 1, 2)).expect("valid terminals")
    }

    #[test]
    fn entrance_is_decorated() {
        let (_, shell, voxels) = standard_maze(17, standard_terminals());

        assert_eq!(shell[v(2, 22, 11)], Voxel::Solid);
        assert_eq!(shell[v(3, 22, 11)], Voxel::Solid);
        assert_eq!(shell[v(1, 23, 11)], Voxel::Empty);
        assert_eq!(shell[v(1, 23, 12)], Voxel::Empty);
        assert_eq!(shell[v(2, 23, 12)], Voxel::Empty);

        assert_eq!(voxels[v(2, 22, 11)], Voxel::Door);
        assert_eq!(voxels[v(3, 22, 11)], Voxel::Door);
        assert_eq!(voxels[v(1, 23, 11)], Voxel::Solid);
        assert_eq!(voxels[v(1, 23, 12)], Voxel::Solid);
        assert_eq!(voxels[v(2, 23, 12)], Voxel::StartSign);
    }

    #[test]
    fn exit_is_decorated() {
        let (_, _, voxels) = standard_maze(17, standard_terminals());
        assert_eq!(voxels[v(13, 5, 9)], Voxel::Ladder);
        assert_eq!(voxels[v(14, 5, 9)], Voxel::Ladder);
        assert_eq!(voxels[v(15, 5, 9)], Voxel::Ladder);
        assert_eq!(voxels[v(14, 4, 9)], Voxel::Solid);
        assert_eq!(voxels[v(15, 4, 9)], Voxel::Solid);
        assert_eq!(voxels[v(14, 4, 10)], Voxel::FinishSign);
    }

    #[test]
    fn only_open_passages_and_decorations_change() {
        let terminals = standard_terminals();
        let (lattice, shell, voxels) = standard_maze(23, terminals);

        let mut expected = shell.clone();
        for (a, b, passage) in lattice.iter_passages() {
            let carved = if passage.ladder { Voxel::Ladder } else { Voxel::Empty };
            for voxel in geometry::passage_voxels(a, b).unwrap() {
                let want = if passage.open { carved } else { Voxel::Solid };
                assert_eq!(voxels[voxel], want, "passage {} {} at {}", a, b, voxel);
                expected[voxel] = want;
            }
        }
        for voxel in EntranceDecoration::for_chamber(terminals.entrance()).voxels() {
            expected[voxel] = voxels[voxel];
        }
        for voxel in ExitDecoration::for_chamber(terminals.exit()).voxels() {
            expected[voxel] = voxels[voxel];
        }
        assert_eq!(voxels, expected);
    }

    #[test]
    fn block_counts_follow_the_tree() {
        let (lattice, _, voxels) = standard_maze(5, standard_terminals());
        let count = |kind: Voxel| voxels.iter().filter(|&&voxel| voxel == kind).count();

        let ladder_passages = lattice.iter_open_passages().filter(|&(_, _, p)| p.ladder).count();
        assert_eq!(count(Voxel::Ladder), 2 * 196 + ladder_passages + 3);
        assert_eq!(count(Voxel::Light), 196);
        assert_eq!(count(Voxel::Door), 2);
        assert_eq!(count(Voxel::StartSign), 1);
        assert_eq!(count(Voxel::FinishSign), 1);
    }

    #[test]
    fn tiny_maze_carves_every_passage() {
        let dimensions = LatticeDimensions::new(LayersCount(1), RowsCount(2), ColumnsCount(2))
            .expect("valid dimensions");
        let mut lattice = Lattice::new(dimensions);
        let mut rng = XorShiftRng::seed_from_u64(1);
        let _ = generators::wilson(&mut lattice, gc(0, 1, 0), &mut rng).expect("wilson failed");
        let terminals = Terminals::new(&dimensions, gc(0, 1, 0), gc(0, 0, 1)).expect("valid terminals");

        let mut voxels = VoxelGrid::enclosure(&dimensions);
        carve(&lattice, &terminals, &mut voxels);

        let empty_passage_blocks = lattice.iter_open_passages()
            .flat_map(|(_, _, p)| p.voxels.clone())
            .filter(|voxel| voxels[*voxel] == Voxel::Empty)
            .count();
        assert_eq!(empty_passage_blocks, 6);
        assert_eq!(voxels[v(5, 2, 6)], Voxel::Ladder);
        assert_eq!(voxels[v(5, 1, 7)], Voxel::FinishSign);
    }
}

use std::ops::Range;

use log::info;
use rand::{self, Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::carver;
use crate::coordinates::ChamberCoordinate;
use crate::errors::MazeError;
use crate::generators::{self, MazeState};
use crate::grid::Lattice;
use crate::grid_dimensions::LatticeDimensions;
use crate::pathing::{self, Distances};
use crate::shell::VoxelGrid;
use crate::terminals::{self, Terminals};
use crate::units::{ColumnsCount, LayersCount, RowsCount};

/// Everything needed to generate one maze.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MazeConfig {
    dimensions: LatticeDimensions,
    seed: Option<u64>,
    finish_rows: Range<usize>,
    entrance_column: Option<usize>,
    exit: Option<ChamberCoordinate>,
}

impl MazeConfig {
    #[inline]
    pub fn dimensions(&self) -> &LatticeDimensions {
        &self.dimensions
    }

    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Builds a `MazeConfig`. Four floors of seven by seven chambers unless told otherwise.
#[derive(Debug, Clone)]
pub struct MazeConfigBuilder {
    layers: usize,
    rows: usize,
    columns: usize,
    seed: Option<u64>,
    finish_rows: Option<Range<usize>>,
    entrance_column: Option<usize>,
    exit: Option<ChamberCoordinate>,
}

impl Default for MazeConfigBuilder {
    fn default() -> MazeConfigBuilder {
        MazeConfigBuilder {
            layers: 4,
            rows: 7,
            columns: 7,
            seed: None,
            finish_rows: None,
            entrance_column: None,
            exit: None,
        }
    }
}

impl MazeConfigBuilder {
    pub fn new() -> MazeConfigBuilder {
        MazeConfigBuilder::default()
    }

    pub fn layers(mut self, layers: usize) -> Self {
        self.layers = layers;
        self
    }

    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Fix the random source so the same maze comes out every time.
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Rows of the top floor the exit may be placed in. The north half by default.
    pub fn finish_rows(mut self, rows: Option<Range<usize>>) -> Self {
        self.finish_rows = rows;
        self
    }

    pub fn entrance_column(mut self, column: Option<usize>) -> Self {
        self.entrance_column = column;
        self
    }

    /// Place the exit exactly, ignoring `finish_rows`.
    pub fn exit(mut self, exit: Option<ChamberCoordinate>) -> Self {
        self.exit = exit;
        self
    }

    pub fn build(self) -> Result<MazeConfig, MazeError> {
        let dimensions = LatticeDimensions::new(LayersCount(self.layers),
                                                RowsCount(self.rows),
                                                ColumnsCount(self.columns))
            .ok_or(MazeError::InvalidDimensions)?;
        let finish_rows = self.finish_rows.unwrap_or_else(|| terminals::default_finish_rows(&dimensions));

        Ok(MazeConfig {
            dimensions,
            seed: self.seed,
            finish_rows,
            entrance_column: self.entrance_column,
            exit: self.exit,
        })
    }
}

/// A generated maze: the chamber tree and the build plan carved from it.
#[derive(Debug)]
pub struct Maze {
    lattice: Lattice,
    state: MazeState,
    terminals: Terminals,
    voxels: VoxelGrid,
    seed: u64,
}

impl Maze {
    #[inline]
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    #[inline]
    pub fn state(&self) -> &MazeState {
        &self.state
    }

    #[inline]
    pub fn terminals(&self) -> &Terminals {
        &self.terminals
    }

    #[inline]
    pub fn voxels(&self) -> &VoxelGrid {
        &self.voxels
    }

    /// The seed that reproduces this maze.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The one route from the entrance chamber to the exit chamber.
    pub fn solution(&self) -> Option<Vec<ChamberCoordinate>> {
        let distances = Distances::new(&self.lattice, self.terminals.entrance())?;
        pathing::shortest_path(&self.lattice, &distances, self.terminals.exit())
    }
}

/// Generate a maze: pick the terminals, grow a spanning tree from the entrance with
/// Wilson's algorithm, then carve it into the enclosing structure.
pub fn generate(config: &MazeConfig) -> Result<Maze, MazeError> {
    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("generating a {}x{}x{} maze with seed {}",
          config.dimensions.layers().0,
          config.dimensions.rows().0,
          config.dimensions.columns().0,
          seed);
    let mut rng = XorShiftRng::seed_from_u64(seed);

    let dimensions = config.dimensions;
    let entrance_column = match config.entrance_column {
        Some(column) => column,
        None => rng.gen_range(0..dimensions.columns().0),
    };
    let terminals = match config.exit {
        Some(exit) => {
            let entrance = terminals::entrance_chamber(&dimensions, entrance_column)?;
            Terminals::new(&dimensions, entrance, exit)?
        }
        None => Terminals::random_exit(&dimensions, entrance_column, config.finish_rows.clone(), &mut rng)?,
    };
    info!("entrance {}, exit {}", terminals.entrance(), terminals.exit());

    let mut lattice = Lattice::new(dimensions);
    let state = generators::wilson(&mut lattice, terminals.entrance(), &mut rng)?;

    let mut voxels = VoxelGrid::enclosure(&dimensions);
    carver::carve(&lattice, &terminals, &mut voxels);

    Ok(Maze {
        lattice,
        state,
        terminals,
        voxels,
        seed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::VoxelCoordinate;
    use crate::shell::Voxel;

    #[test]
    fn default_config_is_the_standard_maze() {
        let config = MazeConfigBuilder::new().build().expect("valid config");
        let d = config.dimensions();
        assert_eq!((d.layers(), d.rows(), d.columns()), (LayersCount(4), RowsCount(7), ColumnsCount(7)));
        assert_eq!(config.seed(), None);
        assert_eq!(config.finish_rows, 0..3);
    }

    #[test]
    fn zero_sized_configs_are_rejected() {
        assert_eq!(MazeConfigBuilder::new().rows(0).build(), Err(MazeError::InvalidDimensions));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let config = MazeConfigBuilder::new().seed(Some(2024)).build().expect("valid config");
        let a = generate(&config).expect("generation failed");
        let b = generate(&config).expect("generation failed");
        assert_eq!(a.seed(), 2024);
        assert_eq!(a.terminals(), b.terminals());
        assert_eq!(a.voxels(), b.voxels());
        assert_eq!(a.voxels().to_string(), b.voxels().to_string());
    }

    #[test]
    fn standard_maze_is_perfect_and_solvable() {
        let config = MazeConfigBuilder::new().seed(Some(8)).build().expect("valid config");
        let maze = generate(&config).expect("generation failed");

        assert!(maze.state().is_complete());
        assert_eq!(maze.lattice().open_passages_count(), 195);

        let terminals = maze.terminals();
        assert_eq!((terminals.entrance().layer, terminals.entrance().row), (0, 6));
        assert_eq!(terminals.exit().layer, 3);
        assert!(terminals.exit().row < 3);

        let path = maze.solution().expect("exit unreachable");
        assert_eq!(path.first(), Some(&terminals.entrance()));
        assert_eq!(path.last(), Some(&terminals.exit()));
    }

    #[test]
    fn fixed_terminals_are_honoured() {
        let exit = ChamberCoordinate::new(2, 0, 4);
        let config = MazeConfigBuilder::new()
            .layers(3)
            .rows(5)
            .columns(5)
            .seed(Some(1))
            .entrance_column(Some(1))
            .exit(Some(exit))
            .build()
            .expect("valid config");
        let maze = generate(&config).expect("generation failed");
        assert_eq!(maze.terminals().entrance(), ChamberCoordinate::new(0, 4, 1));
        assert_eq!(maze.terminals().exit(), exit);
        // The door of the entrance at column 1: origin (2, 14, 5), two blocks south of it.
        assert_eq!(maze.voxels()[VoxelCoordinate::new(2, 16, 5)], Voxel::Door);
    }

    #[test]
    fn bad_terminals_fail_generation() {
        let config = MazeConfigBuilder::new()
            .seed(Some(1))
            .exit(Some(ChamberCoordinate::new(1, 0, 0)))
            .build()
            .expect("valid config");
        assert_eq!(generate(&config).err(),
                   Some(MazeError::ExitNotOnTopLayer(ChamberCoordinate::new(1, 0, 0))));

        let config = MazeConfigBuilder::new().seed(Some(1)).entrance_column(Some(7)).build().expect("valid config");
        assert_eq!(generate(&config).err(), Some(MazeError::EntranceColumnOutOfRange(7)));

        let config = MazeConfigBuilder::new().seed(Some(1)).finish_rows(Some(9..12)).build().expect("valid config");
        assert_eq!(generate(&config).err(), Some(MazeError::EmptyFinishRows));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn huge_entrance_columns_are_not_wrapped() {
        let column = (1usize << 32) + 1;
        let config = MazeConfigBuilder::new().seed(Some(1)).entrance_column(Some(column)).build().expect("valid config");
        assert_eq!(generate(&config).err(), Some(MazeError::EntranceColumnOutOfRange(column)));

        let config = MazeConfigBuilder::new()
            .seed(Some(1))
            .entrance_column(Some(column))
            .exit(Some(ChamberCoordinate::new(3, 0, 0)))
            .build()
            .expect("valid config");
        assert_eq!(generate(&config).err(), Some(MazeError::EntranceColumnOutOfRange(column)));
    }
}

use bit_set::BitSet;
use fnv::FnvHashMap;
use log::{debug, info, trace};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::coordinates::ChamberCoordinate;
use crate::errors::MazeError;
use crate::grid::Lattice;
use crate::grid_dimensions::LatticeDimensions;

/// Bookkeeping of a spanning tree being grown over a lattice.
///
/// Chambers are tracked by their row-major index. Every chamber is in exactly one of
/// `included` (part of the tree) or `excluded`, and chambers only ever move into the tree.
#[derive(Debug, Clone)]
pub struct MazeState {
    dimensions: LatticeDimensions,
    included: BitSet,
    excluded: BitSet,
    // The chamber each walked chamber last stepped to, for the walk in progress only.
    directions: FnvHashMap<usize, usize>,
}

impl MazeState {
    fn new(dimensions: LatticeDimensions, start_index: usize) -> MazeState {
        let size = dimensions.size().0;
        let mut included = BitSet::with_capacity(size);
        let _ = included.insert(start_index);
        let mut excluded: BitSet = (0..size).collect();
        let _ = excluded.remove(start_index);

        MazeState {
            dimensions,
            included,
            excluded,
            directions: FnvHashMap::default(),
        }
    }

    #[inline]
    pub fn dimensions(&self) -> &LatticeDimensions {
        &self.dimensions
    }

    pub fn is_included(&self, coord: ChamberCoordinate) -> bool {
        self.dimensions
            .coordinate_to_index(coord)
            .map_or(false, |index| self.included.contains(index))
    }

    pub fn included_count(&self) -> usize {
        self.included.len()
    }

    pub fn excluded_count(&self) -> usize {
        self.excluded.len()
    }

    /// Every chamber is part of the tree.
    pub fn is_complete(&self) -> bool {
        self.excluded.is_empty()
    }

    pub fn iter_included<'a>(&'a self) -> impl Iterator<Item = ChamberCoordinate> + 'a {
        self.included.iter().map(move |index| self.dimensions.index_to_coordinate(index))
    }

    fn include(&mut self, index: usize) {
        let _ = self.included.insert(index);
        let _ = self.excluded.remove(index);
    }

    fn random_excluded<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        let count = self.excluded.len();
        if count == 0 {
            return None;
        }
        self.excluded.iter().nth(rng.gen_range(0..count))
    }
}

/// Carve a uniformly random spanning tree into the lattice with Wilson's algorithm.
///
/// Starting from a tree holding only `start`, repeatedly pick a random chamber outside the
/// tree and walk randomly until the walk hits the tree. Each walked chamber remembers the
/// step it took on its most recent visit, so following those steps from the walk's start
/// traces the walk with its loops erased. That branch is opened and joins the tree.
///
/// Unlike the simpler random walk algorithms this is unbiased: every spanning tree of the
/// lattice is equally likely. It is slow to start, while the tree is tiny, and speeds up
/// as the tree grows.
///
/// The lattice must have no open passages beforehand. An invalid start or an already open
/// passage is reported before anything is carved, leaving the lattice untouched.
pub fn wilson<R>(lattice: &mut Lattice, start: ChamberCoordinate, rng: &mut R) -> Result<MazeState, MazeError>
    where R: Rng + ?Sized
{
    let start_index = lattice.coordinate_to_index(start).ok_or(MazeError::InvalidCoordinate(start))?;
    if let Some((a, b, _)) = lattice.iter_open_passages().next() {
        return Err(MazeError::PassageAlreadyOpen(a, b));
    }
    let mut state = MazeState::new(*lattice.dimensions(), start_index);

    let mut branches = 0;
    let mut walked_steps = 0;
    while let Some(potential_start) = state.random_excluded(rng) {
        walked_steps += random_walk(lattice, &mut state, potential_start, rng)?;
        let branch_length = open_branch(lattice, &mut state, potential_start)?;
        state.directions.clear();

        branches += 1;
        debug!("branch {} from {} opened {} passages, {} chambers left",
               branches,
               state.dimensions.index_to_coordinate(potential_start),
               branch_length,
               state.excluded_count());
    }

    info!("wilson: {} chambers joined by {} passages in {} branches, {} random steps",
          state.included_count(),
          lattice.open_passages_count(),
          branches,
          walked_steps);
    Ok(state)
}

/// Walk from `walk_start` until reaching the tree, recording each chamber's latest step.
/// Returns the number of steps taken.
fn random_walk<R>(lattice: &Lattice,
                  state: &mut MazeState,
                  walk_start: usize,
                  rng: &mut R)
                  -> Result<usize, MazeError>
    where R: Rng + ?Sized
{
    let dimensions = state.dimensions;
    let mut current = walk_start;
    let mut steps = 0;

    while !state.included.contains(current) {
        let coord = dimensions.index_to_coordinate(current);
        let neighbours = lattice.neighbours(coord);
        let next_coord = *neighbours.choose(rng).ok_or(MazeError::IsolatedChamber(coord))?;
        let next = dimensions.coordinate_to_index(next_coord)
            .ok_or(MazeError::InvalidCoordinate(next_coord))?;

        let _ = state.directions.insert(current, next);
        current = next;
        steps += 1;
    }

    trace!("walk from {} reached the tree at {} after {} steps",
           dimensions.index_to_coordinate(walk_start),
           dimensions.index_to_coordinate(current),
           steps);
    Ok(steps)
}

/// Follow the recorded steps from `branch_start` into the tree, opening each passage.
/// Returns the number of passages opened.
fn open_branch(lattice: &mut Lattice, state: &mut MazeState, branch_start: usize) -> Result<usize, MazeError> {
    let dimensions = state.dimensions;
    let mut current = branch_start;
    let mut length = 0;

    while !state.included.contains(current) {
        let coord = dimensions.index_to_coordinate(current);
        let next = *state.directions.get(&current).ok_or(MazeError::MissingDirection(coord))?;
        let _ = lattice.open_passage(coord, dimensions.index_to_coordinate(next))?;
        state.include(current);
        current = next;
        length += 1;
    }

    Ok(length)
}

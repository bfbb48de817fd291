use fnv::FnvHashMap;
use itertools::Itertools;
use smallvec::SmallVec;

use crate::coordinates::ChamberCoordinate;
use crate::grid::Lattice;

/// Steps through open passages from a start chamber to every chamber it can reach.
#[derive(Debug, Clone)]
pub struct Distances {
    start_coordinate: ChamberCoordinate,
    distances: FnvHashMap<ChamberCoordinate, u32>,
    max_distance: u32,
}

impl Distances {
    /// Flood fill outwards from `start_coordinate`. Returns None if the start is not in the lattice.
    pub fn new(lattice: &Lattice, start_coordinate: ChamberCoordinate) -> Option<Distances> {
        if !lattice.is_valid_coordinate(start_coordinate) {
            return None;
        }

        let mut max = 0;
        let mut distances = FnvHashMap::with_capacity_and_hasher(lattice.size(), Default::default());
        let _ = distances.insert(start_coordinate, 0);

        // Every step costs one, so the first distance recorded for a chamber is its shortest.
        // The map doubles as the visited set.
        let mut frontier = vec![start_coordinate];
        while !frontier.is_empty() {
            let mut new_frontier = vec![];
            for coord in &frontier {
                let distance_to_chamber = distances[coord];
                if distance_to_chamber > max {
                    max = distance_to_chamber;
                }

                for link in lattice.links(*coord).unwrap_or_default() {
                    if !distances.contains_key(&link) {
                        let _ = distances.insert(link, distance_to_chamber + 1);
                        new_frontier.push(link);
                    }
                }
            }
            frontier = new_frontier;
        }

        Some(Distances {
            start_coordinate,
            distances,
            max_distance: max,
        })
    }

    #[inline(always)]
    pub fn start(&self) -> ChamberCoordinate {
        self.start_coordinate
    }

    #[inline(always)]
    pub fn max(&self) -> u32 {
        self.max_distance
    }

    /// None if the chamber is unreachable or not in the lattice.
    #[inline(always)]
    pub fn distance_from_start_to(&self, coord: ChamberCoordinate) -> Option<u32> {
        self.distances.get(&coord).cloned()
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    pub fn furthest_points(&self) -> SmallVec<[ChamberCoordinate; 8]> {
        self.distances
            .iter()
            .filter(|&(_, distance)| *distance == self.max_distance)
            .map(|(coord, _)| *coord)
            .sorted()
            .collect()
    }
}

/// The chambers from the start of `distances_from_start` to `end_point`, both included.
/// None if `end_point` cannot be reached.
pub fn shortest_path(lattice: &Lattice,
                     distances_from_start: &Distances,
                     end_point: ChamberCoordinate)
                     -> Option<Vec<ChamberCoordinate>> {
    let mut current_distance = distances_from_start.distance_from_start_to(end_point)?;

    let mut path = vec![end_point];
    let start = distances_from_start.start();
    let mut current_coord = end_point;

    while current_coord != start {
        let closest_to_start = lattice.links(current_coord)?
            .iter()
            .filter_map(|coord| distances_from_start.distance_from_start_to(*coord).map(|d| (*coord, d)))
            .min_by_key(|&(_, distance)| distance);

        match closest_to_start {
            Some((closer_coord, closer_distance)) if closer_distance < current_distance => {
                current_coord = closer_coord;
                current_distance = closer_distance;
                path.push(current_coord);
            }
            // The passages changed since the distances were measured.
            _ => return None,
        }
    }

    path.reverse();
    Some(path)
}

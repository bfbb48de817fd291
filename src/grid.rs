use std::fmt;
use std::slice;

use petgraph::graph;
use petgraph::visit::EdgeRef;
use petgraph::{Graph, Undirected};
use smallvec::SmallVec;

use crate::coordinates::{ChamberCoordinate, LatticeDirection, VoxelCoordinate};
use crate::errors::MazeError;
use crate::geometry::{self, PassageVoxels};
use crate::grid_dimensions::LatticeDimensions;
use crate::grid_iterators::{ChamberIter, LayerIter};
use crate::units::{EdgesCount, LayerIndex, NodesCount};

pub type ChamberSmallVec = SmallVec<[ChamberCoordinate; 6]>;

/// A candidate passage between two adjacent chambers.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Passage {
    /// Passages between floors are climbed with a ladder.
    pub ladder: bool,
    pub open: bool,
    /// The blocks that are removed when the passage is opened.
    pub voxels: PassageVoxels,
}

/// The graph of chambers and the passages that could join them.
///
/// Every chamber one axis-aligned step away from another, on the same floor or on the floor
/// directly above or below, is a neighbour. The topology is fixed at construction; only the
/// open state of passages changes afterwards.
pub struct Lattice {
    graph: Graph<ChamberCoordinate, Passage, Undirected, u32>,
    dimensions: LatticeDimensions,
}

impl fmt::Debug for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Lattice :: dimensions: {:?}, passages: {:?}, open: {:?}",
               self.dimensions, self.passages_count(), self.open_passages_count())
    }
}

impl Lattice {
    pub fn new(dimensions: LatticeDimensions) -> Lattice {
        let (NodesCount(nodes), EdgesCount(edges)) = dimensions.graph_size();

        let mut graph: Graph<ChamberCoordinate, Passage, Undirected, u32> = Graph::with_capacity(nodes, edges);
        for index in 0..nodes {
            let _ = graph.add_node(dimensions.index_to_coordinate(index));
        }

        // Only look forwards along each axis so every pair gets one edge.
        for index in 0..nodes {
            let chamber = dimensions.index_to_coordinate(index);
            for dir in &[LatticeDirection::East, LatticeDirection::South, LatticeDirection::Up] {
                let neighbour_index = chamber.offset(*dir)
                    .and_then(|neighbour| dimensions.coordinate_to_index(neighbour));

                if let Some(neighbour_index) = neighbour_index {
                    let neighbour = dimensions.index_to_coordinate(neighbour_index);
                    let passage = Passage {
                        ladder: dir.is_vertical(),
                        open: false,
                        voxels: geometry::passage_voxels(chamber, neighbour)
                            .expect("neighbouring chambers always have passage voxels"),
                    };
                    let _ = graph.add_edge(graph::NodeIndex::new(index),
                                           graph::NodeIndex::new(neighbour_index),
                                           passage);
                }
            }
        }

        Lattice { graph, dimensions }
    }

    #[inline]
    pub fn dimensions(&self) -> &LatticeDimensions {
        &self.dimensions
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.graph.node_count()
    }

    #[inline]
    pub fn passages_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn open_passages_count(&self) -> usize {
        self.iter_open_passages().count()
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: ChamberCoordinate) -> bool {
        self.dimensions.is_valid_coordinate(coord)
    }

    #[inline]
    pub fn coordinate_to_index(&self, coord: ChamberCoordinate) -> Option<usize> {
        self.dimensions.coordinate_to_index(coord)
    }

    /// Chambers one step away from `coord`, whether or not a passage to them is open.
    /// Empty if the coordinate is outside the lattice.
    pub fn neighbours(&self, coord: ChamberCoordinate) -> ChamberSmallVec {
        match self.graph_index(coord) {
            Some(node) => self.graph.neighbors(node).map(|n| self.graph[n]).collect(),
            None => ChamberSmallVec::new(),
        }
    }

    /// Neighbouring chambers that are reachable through an open passage.
    /// Returns None if the coordinate is outside the lattice.
    pub fn links(&self, coord: ChamberCoordinate) -> Option<ChamberSmallVec> {
        self.graph_index(coord).map(|node| {
            self.graph
                .edges(node)
                .filter(|edge| edge.weight().open)
                .map(|edge| {
                    let other = if edge.source() == node { edge.target() } else { edge.source() };
                    self.graph[other]
                })
                .collect()
        })
    }

    pub fn passage(&self, a: ChamberCoordinate, b: ChamberCoordinate) -> Option<&Passage> {
        self.find_passage(a, b).ok().map(|edge| &self.graph[edge])
    }

    /// Open the passage between two adjacent chambers. Passages are only ever opened once.
    pub fn open_passage(&mut self, a: ChamberCoordinate, b: ChamberCoordinate) -> Result<&Passage, MazeError> {
        let edge = self.find_passage(a, b)?;
        let passage = &mut self.graph[edge];
        if passage.open {
            return Err(MazeError::PassageAlreadyOpen(a, b));
        }
        passage.open = true;
        Ok(&*passage)
    }

    /// Are two chambers joined by an open passage?
    pub fn is_linked(&self, a: ChamberCoordinate, b: ChamberCoordinate) -> bool {
        self.passage(a, b).map_or(false, |passage| passage.open)
    }

    #[inline]
    pub fn iter(&self) -> ChamberIter {
        ChamberIter::new(self.dimensions)
    }

    #[inline]
    pub fn iter_layer(&self, layer: LayerIndex) -> LayerIter {
        LayerIter::new(self.dimensions, layer)
    }

    pub fn iter_passages(&self) -> PassagesIter {
        PassagesIter {
            graph: &self.graph,
            graph_edge_iter: self.graph.raw_edges().iter(),
        }
    }

    pub fn iter_open_passages<'a>(&'a self) -> impl Iterator<Item = (ChamberCoordinate, ChamberCoordinate, &'a Passage)> + 'a {
        self.iter_passages().filter(|&(_, _, passage)| passage.open)
    }

    /// All blocks of every open passage, the way they are carved.
    pub fn open_passage_voxels(&self) -> Vec<(VoxelCoordinate, bool)> {
        self.iter_open_passages()
            .flat_map(|(_, _, passage)| passage.voxels.iter().map(move |v| (*v, passage.ladder)))
            .collect()
    }

    fn find_passage(&self, a: ChamberCoordinate, b: ChamberCoordinate) -> Result<graph::EdgeIndex<u32>, MazeError> {
        let a_index = self.graph_index(a).ok_or(MazeError::InvalidCoordinate(a))?;
        let b_index = self.graph_index(b).ok_or(MazeError::InvalidCoordinate(b))?;
        self.graph.find_edge(a_index, b_index).ok_or(MazeError::NotAdjacent(a, b))
    }

    #[inline]
    fn graph_index(&self, coord: ChamberCoordinate) -> Option<graph::NodeIndex<u32>> {
        self.coordinate_to_index(coord).map(graph::NodeIndex::new)
    }
}

pub struct PassagesIter<'a> {
    graph: &'a Graph<ChamberCoordinate, Passage, Undirected, u32>,
    graph_edge_iter: slice::Iter<'a, graph::Edge<Passage, u32>>,
}

impl<'a> Iterator for PassagesIter<'a> {
    type Item = (ChamberCoordinate, ChamberCoordinate, &'a Passage);

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        self.graph_edge_iter.next().map(|edge| {
            (graph[edge.source()], graph[edge.target()], &edge.weight)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.graph_edge_iter.size_hint()
    }
}
impl<'a> ExactSizeIterator for PassagesIter<'a> {} // default impl using size_hint()

impl<'a> fmt::Debug for PassagesIter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PassagesIter :: remaining: {:?}", self.graph_edge_iter.len())
    }
}

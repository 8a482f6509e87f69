//! Bounded 2D tile grid applying one topology and one edge behavior.

use crate::config::GridConfig;
use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use crate::resolve::{resolve_direction_in, resolve_offset};
use smallvec::SmallVec;
use tessel_core::{Direction, Offset, Point, Topology};
use tracing::debug;

/// A `width × height` grid of cells addressed by [`Point`].
///
/// Neighbours are resolved through the grid's [`Topology`], so a
/// checkerboard grid yields up to 8 neighbours and a staggered grid up
/// to 6. Cells past the border are handled by the grid's
/// [`EdgeBehavior`]:
/// - **Absorb**: edge cells have fewer neighbours
/// - **Clamp**: edge cells self-loop on the boundary axis
/// - **Wrap**: periodic boundary (torus topology)
///
/// Canonical ordering is row-major: outer loop over y, inner over x.
///
/// # Examples
///
/// ```
/// use tessel_space::{Direction, EdgeBehavior, GridConfig, Point, TileGrid, Topology};
///
/// let grid = TileGrid::new(GridConfig {
///     width: 5,
///     height: 5,
///     topology: Topology::Staggered,
///     edge: EdgeBehavior::Absorb,
/// })
/// .unwrap();
///
/// assert_eq!(grid.neighbours(Point::new(2, 2)).unwrap().len(), 6);
/// assert_eq!(
///     grid.neighbour(Point::new(2, 2), Direction::NorthEast).unwrap(),
///     Some(Point::new(3, 1))
/// );
/// assert!(grid.neighbour(Point::new(2, 2), Direction::North).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    width: u32,
    height: u32,
    topology: Topology,
    edge: EdgeBehavior,
}

impl TileGrid {
    /// Build a grid from a configuration, validating it first.
    pub fn new(config: GridConfig) -> Result<Self, SpaceError> {
        config.validate()?;
        debug!(
            width = config.width,
            height = config.height,
            topology = %config.topology,
            edge = ?config.edge,
            "tile grid constructed"
        );
        Ok(Self {
            width: config.width,
            height: config.height,
            topology: config.topology,
            edge: config.edge,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Adjacency rule set.
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Edge behavior.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether `point` lies inside the grid.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && (point.x as u32) < self.width
            && point.y >= 0
            && (point.y as u32) < self.height
    }

    fn check_bounds(&self, point: Point) -> Result<(), SpaceError> {
        if self.contains(point) {
            Ok(())
        } else {
            Err(SpaceError::CoordOutOfBounds {
                point,
                bounds: format!("[0, {}) x [0, {})", self.width, self.height),
            })
        }
    }

    /// Apply `offset` to an in-bounds `point` under the edge behavior.
    fn step(&self, point: Point, offset: Offset) -> Option<Point> {
        let x = self.edge.resolve_axis(point.x + offset.dx(), self.width)?;
        let y = self.edge.resolve_axis(point.y + offset.dy(), self.height)?;
        Some(Point::new(x, y))
    }

    /// The neighbour of `point` in `direction`.
    ///
    /// Returns `Ok(None)` when the neighbour falls off an absorbing edge.
    /// Fails if `point` is out of bounds or `direction` is illegal under
    /// the grid's topology.
    pub fn neighbour(&self, point: Point, direction: Direction) -> Result<Option<Point>, SpaceError> {
        self.check_bounds(point)?;
        let offset = resolve_offset(direction, self.topology)?;
        Ok(self.step(point, offset))
    }

    /// All neighbours of `point`, tagged with their direction, in cyclic
    /// direction order.
    pub fn neighbours(
        &self,
        point: Point,
    ) -> Result<SmallVec<[(Direction, Point); 8]>, SpaceError> {
        self.check_bounds(point)?;
        let mut result = SmallVec::new();
        for &direction in self.topology.directions() {
            let offset = resolve_offset(direction, self.topology)?;
            if let Some(n) = self.step(point, offset) {
                result.push((direction, n));
            }
        }
        Ok(result)
    }

    /// The direction that leads from `from` to the adjacent cell `to`.
    ///
    /// The displacement is taken the short way round a wrapping edge.
    /// Fails if either point is out of bounds, if the cells are not
    /// adjacent, or under a staggered topology, which has no inverse.
    pub fn direction_between(&self, from: Point, to: Point) -> Result<Direction, SpaceError> {
        self.check_bounds(from)?;
        self.check_bounds(to)?;
        let dx = self.edge.axis_delta(from.x, to.x, self.width);
        let dy = self.edge.axis_delta(from.y, to.y, self.height);
        let delta = Point::new(saturate(dx), saturate(dy));
        Ok(resolve_direction_in(delta, self.topology)?)
    }

    /// All cells in row-major order.
    pub fn canonical_ordering(&self) -> Vec<Point> {
        let mut out = Vec::with_capacity(self.cell_count());
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                out.push(Point::new(x, y));
            }
        }
        out
    }

    /// Position of `point` in [`canonical_ordering`](Self::canonical_ordering).
    pub fn canonical_rank(&self, point: Point) -> Option<usize> {
        if self.contains(point) {
            Some(point.y as usize * self.width as usize + point.x as usize)
        } else {
            None
        }
    }
}

fn saturate(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

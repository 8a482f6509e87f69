//! Spatial edge (boundary) behavior for bounded grids.

/// How a [`TileGrid`](crate::TileGrid) treats neighbours past its border.
///
/// # Examples
///
/// ```
/// use tessel_space::{EdgeBehavior, GridConfig, Point, TileGrid, Topology};
///
/// // Absorb: corner has 3 neighbours, interior has 8.
/// let absorb = TileGrid::new(GridConfig {
///     width: 4,
///     height: 4,
///     topology: Topology::Checkerboard,
///     edge: EdgeBehavior::Absorb,
/// })
/// .unwrap();
/// assert_eq!(absorb.neighbours(Point::new(0, 0)).unwrap().len(), 3);
/// assert_eq!(absorb.neighbours(Point::new(1, 1)).unwrap().len(), 8);
///
/// // Wrap: every cell has all 8 neighbours (torus).
/// let wrap = TileGrid::new(GridConfig {
///     edge: EdgeBehavior::Wrap,
///     ..GridConfig::default()
/// })
/// .unwrap();
/// assert_eq!(wrap.neighbours(Point::new(0, 0)).unwrap().len(), 8);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds neighbour maps to the boundary cell (self-loop).
    Clamp,
    /// Out-of-bounds neighbour wraps to the opposite side (periodic).
    Wrap,
    /// Out-of-bounds neighbour is omitted (fewer neighbours at edges).
    #[default]
    Absorb,
}

impl EdgeBehavior {
    /// Resolve a single axis value against `0..len`.
    ///
    /// Returns `None` only for [`EdgeBehavior::Absorb`] out of range.
    pub(crate) fn resolve_axis(self, val: i32, len: u32) -> Option<i32> {
        let n = len as i64;
        let v = val as i64;
        if v >= 0 && v < n {
            return Some(val);
        }
        match self {
            Self::Absorb => None,
            Self::Clamp => Some(v.clamp(0, n - 1) as i32),
            Self::Wrap => Some(v.rem_euclid(n) as i32),
        }
    }

    /// Shortest signed displacement from `from` to `to` along one axis.
    ///
    /// Under [`EdgeBehavior::Wrap`] the displacement may cross the seam.
    pub(crate) fn axis_delta(self, from: i32, to: i32, len: u32) -> i64 {
        let diff = to as i64 - from as i64;
        match self {
            Self::Wrap => {
                let n = len as i64;
                let d = diff.rem_euclid(n);
                if d * 2 > n {
                    d - n
                } else {
                    d
                }
            }
            Self::Absorb | Self::Clamp => diff,
        }
    }
}

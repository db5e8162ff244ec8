/// Axis-aligned bounding-box overlap.

use crate::entities::Position;

/// A box described by its centre and full size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub center: Position,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(center: Position, width: f32, height: f32) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    /// Boxes that merely touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        let dx = (self.center.x - other.center.x).abs();
        let dy = (self.center.y - other.center.y).abs();
        dx < (self.width + other.width) / 2.0 && dy < (self.height + other.height) / 2.0
    }
}

/// Every `(i, j)` with `a[i]` overlapping `b[j]`, in `a`-major order.
pub fn overlapping_pairs(a: &[Bounds], b: &[Bounds]) -> Vec<(usize, usize)> {
    a.iter()
        .enumerate()
        .flat_map(|(i, lhs)| {
            b.iter()
                .enumerate()
                .filter(move |(_, rhs)| lhs.overlaps(rhs))
                .map(move |(j, _)| (i, j))
        })
        .collect()
}

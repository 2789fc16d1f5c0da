// Circular tag-cloud layouter.
//
// Goals:
// - Deterministic: no randomness, no time budgets
// - Incremental: tags are placed one at a time and never move afterwards
// - No overlap between any two placed tags
// - The cloud stays roughly circular as tags accumulate
//
// Submodules:
// - spiral: candidate anchor points along an Archimedean spiral
// - spatial_grid: coarse overlap index over placed tags
// - cloud: the layouter itself
//
// Output:
// - placed tags as integer rectangles, in placement order, plus the
//   bounding size of the whole cloud.

use serde::{Deserialize, Serialize};

mod cloud;
mod spatial_grid;
mod spiral;

pub use cloud::{CircularCloudLayouter, LayoutError};
pub use spiral::ArchimedeanSpiral;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointI {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeI {
    pub w: i32,
    pub h: i32,
}

impl SizeI {
    pub const EMPTY: SizeI = SizeI { w: 0, h: 0 };
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct RectI {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl RectI {
    pub fn right(&self) -> i32 { self.x + self.w }
    pub fn bottom(&self) -> i32 { self.y + self.h }

    /// Strict overlap: rectangles sharing only an edge do not overlap.
    pub fn overlaps(&self, other: &RectI) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    pub fn union(&self, other: &RectI) -> RectI {
        let x0 = self.x.min(other.x);
        let y0 = self.y.min(other.y);
        let x1 = self.right().max(other.right());
        let y1 = self.bottom().max(other.bottom());
        RectI { x: x0, y: y0, w: x1 - x0, h: y1 - y0 }
    }
}

#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Angle advance per spiral candidate, in radians.
    pub spiral_step: f64,
    /// Cell size of the spatial index. Roughly the largest expected tag side.
    pub grid_cell: i32,
    /// Cap on spiral candidates tried per placement. `None` keeps the
    /// search unbounded; the spiral radius grows until a free spot appears.
    pub max_attempts: Option<usize>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            spiral_step: 0.1,
            grid_cell: 64,
            max_attempts: None,
        }
    }
}

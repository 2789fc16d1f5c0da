// Circular cloud placement.
//
// Each tag is placed at the first collision-free anchor found while walking
// an Archimedean spiral outward from the center, then nudged back toward the
// center one unit step at a time until it would collide or its midpoint
// reaches the center. Placed tags never move again; every pair of placed
// tags is overlap-free at all times.

use std::fmt;

use super::spatial_grid::SpatialGrid;
use super::spiral::ArchimedeanSpiral;
use super::{LayoutConfig, PointI, RectI, SizeI};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Tag width and height must both be positive.
    InvalidDimensions { size: SizeI },
    /// The candidate search hit the configured attempt cap.
    PlacementExhausted { attempts: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::InvalidDimensions { size } => write!(
                f,
                "width and height of a tag must be positive, got {}x{}",
                size.w, size.h
            ),
            LayoutError::PlacementExhausted { attempts } => {
                write!(f, "no free spot found within {} spiral candidates", attempts)
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Places tags one at a time around a fixed center.
///
/// A layouter owns its spiral cursor and its placed-tag collection; it is
/// not meant to be shared between concurrent callers. Independent layouters
/// are fully independent.
#[derive(Debug, Clone)]
pub struct CircularCloudLayouter {
    center: PointI,
    tags: Vec<RectI>,
    spiral: ArchimedeanSpiral,
    grid: SpatialGrid,
    max_attempts: Option<usize>,
}

impl CircularCloudLayouter {
    pub fn new(center: PointI) -> Self {
        Self::with_config(center, &LayoutConfig::default())
    }

    pub fn with_config(center: PointI, cfg: &LayoutConfig) -> Self {
        Self {
            center,
            tags: Vec::new(),
            spiral: ArchimedeanSpiral::new(center, cfg.spiral_step),
            grid: SpatialGrid::new(cfg.grid_cell),
            max_attempts: cfg.max_attempts,
        }
    }

    pub fn center(&self) -> PointI {
        self.center
    }

    /// Placed tags, in placement order.
    pub fn tags(&self) -> &[RectI] {
        &self.tags
    }

    /// Place one tag of the given size.
    ///
    /// The first tag lands with its midpoint exactly on the center. Later
    /// tags settle at the first free spot along the spiral, pulled back
    /// toward the center as far as the greedy walk allows.
    ///
    /// Fails with `InvalidDimensions` (before any state change) when either
    /// side is not positive, and with `PlacementExhausted` when an attempt
    /// cap is configured and exceeded; in the latter case no tag is added
    /// but the spiral cursor has advanced.
    pub fn place_next_tag(&mut self, size: SizeI) -> Result<RectI, LayoutError> {
        if size.w <= 0 || size.h <= 0 {
            return Err(LayoutError::InvalidDimensions { size });
        }

        let mut attempts = 0usize;
        let accepted = loop {
            if let Some(cap) = self.max_attempts {
                if attempts >= cap {
                    return Err(LayoutError::PlacementExhausted { attempts });
                }
            }
            attempts += 1;

            // The anchor is offset so the tag midpoint lands on the spiral
            // point.
            let point = self.spiral.next_point();
            let candidate = RectI {
                x: point.x - size.w / 2,
                y: point.y + size.h / 2,
                w: size.w,
                h: size.h,
            };
            if !self.intersects_any(&candidate) {
                break candidate;
            }
        };

        let settled = self.shift_toward_center(accepted);
        self.grid.insert(self.tags.len(), &settled);
        self.tags.push(settled);
        Ok(settled)
    }

    /// Size of the box enclosing every placed tag; zero while empty.
    pub fn bounding_size(&self) -> SizeI {
        let mut iter = self.tags.iter();
        let Some(first) = iter.next() else {
            return SizeI::EMPTY;
        };
        let bounds = iter.fold(*first, |acc, r| acc.union(r));
        SizeI { w: bounds.w, h: bounds.h }
    }

    fn intersects_any(&self, rect: &RectI) -> bool {
        self.grid
            .candidates(rect)
            .into_iter()
            .any(|i| self.tags[i].overlaps(rect))
    }

    /// Greedy walk toward the center, keeping the last collision-free
    /// position. A blocked step ends the walk even if a detour exists.
    fn shift_toward_center(&self, mut rect: RectI) -> RectI {
        loop {
            let dir = self.direction_to_center(&rect);
            if dir.x == 0 && dir.y == 0 {
                return rect;
            }
            let trial = RectI {
                x: rect.x + dir.x,
                y: rect.y + dir.y,
                w: rect.w,
                h: rect.h,
            };
            if self.intersects_any(&trial) {
                return rect;
            }
            rect = trial;
        }
    }

    /// Unit step from a tag's midpoint toward the center, per axis.
    fn direction_to_center(&self, rect: &RectI) -> PointI {
        let mid = tag_midpoint(rect);
        PointI {
            x: (self.center.x - mid.x).signum(),
            y: (self.center.y - mid.y).signum(),
        }
    }
}

/// The midpoint a tag tracks the spiral with: `(x + w/2, y - h/2)`, the
/// mirror of the anchor offset applied at candidate construction.
fn tag_midpoint(rect: &RectI) -> PointI {
    PointI {
        x: rect.x + rect.w / 2,
        y: rect.y - rect.h / 2,
    }
}

// Archimedean spiral point source.
//
// Anchor candidates are probed along r = theta, so the radius grows linearly
// with the angle and outward coverage has no gaps. The angle only ever
// advances; restarting means constructing a new spiral.

use super::PointI;

#[derive(Debug, Clone)]
pub struct ArchimedeanSpiral {
    center: PointI,
    angle: f64,
    step: f64,
}

impl ArchimedeanSpiral {
    pub fn new(center: PointI, step: f64) -> Self {
        Self { center, angle: 0.0, step }
    }

    /// Next candidate anchor. The first call returns the center itself
    /// (angle 0); subsequent calls move outward along the spiral.
    pub fn next_point(&mut self) -> PointI {
        // Truncating casts on the full sum: -0.8 lands on 0, not -1.
        // Anchor coordinates depend on this.
        let x = (self.center.x as f64 + self.angle * self.angle.cos()) as i32;
        let y = (self.center.y as f64 + self.angle * self.angle.sin()) as i32;
        self.angle += self.step;
        PointI { x, y }
    }
}

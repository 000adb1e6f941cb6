//! Endpoint-to-center conversion for elliptical arcs.
//!
//! Path data describes an arc by its endpoints, radii, x-axis rotation and the
//! large-arc/sweep flags. Sampling needs the center form: center, radii,
//! start angle and signed angular sweep.

use crate::error::{PathError, PathResult};
use jigsawkit_core::Point;
use std::f64::consts::TAU;

/// An elliptical arc in center parameterization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterArc {
    pub center: Point,
    /// Radii after out-of-range correction.
    pub rx: f64,
    pub ry: f64,
    /// X-axis rotation in radians.
    pub phi: f64,
    /// Angle of the start point on the unrotated ellipse.
    pub start_angle: f64,
    /// Signed sweep. Negative for `sweep = false`, positive for `sweep = true`.
    pub sweep_angle: f64,
}

fn angle_between(u: (f64, f64), v: (f64, f64)) -> f64 {
    let dot = u.0 * v.0 + u.1 * v.1;
    let det = u.0 * v.1 - u.1 * v.0;
    det.atan2(dot)
}

impl CenterArc {
    /// Convert endpoint parameters to center form.
    ///
    /// Radii too small to span the chord are scaled up uniformly. Zero radii or
    /// coincident endpoints yield [`PathError::DegenerateArc`].
    pub fn from_endpoints(
        from: Point,
        rx: f64,
        ry: f64,
        x_axis_rotation_deg: f64,
        large_arc: bool,
        sweep: bool,
        to: Point,
    ) -> PathResult<Self> {
        let degenerate = |reason: &str| PathError::DegenerateArc {
            x: to.x,
            y: to.y,
            reason: reason.to_string(),
        };

        let mut rx = rx.abs();
        let mut ry = ry.abs();
        if rx == 0.0 || ry == 0.0 || !rx.is_finite() || !ry.is_finite() {
            return Err(degenerate("zero radius"));
        }
        if from.approx_eq(to, 1e-12) {
            return Err(degenerate("coincident endpoints"));
        }

        let phi = x_axis_rotation_deg.to_radians();
        let (sin_phi, cos_phi) = phi.sin_cos();

        // Endpoints in the ellipse's unrotated frame, relative to the chord midpoint.
        let dx2 = (from.x - to.x) / 2.0;
        let dy2 = (from.y - to.y) / 2.0;
        let x1p = cos_phi * dx2 + sin_phi * dy2;
        let y1p = -sin_phi * dx2 + cos_phi * dy2;

        let lambda = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
        if lambda > 1.0 {
            let scale = lambda.sqrt();
            rx *= scale;
            ry *= scale;
        }

        let rx2 = rx * rx;
        let ry2 = ry * ry;
        let x1p2 = x1p * x1p;
        let y1p2 = y1p * y1p;
        let denom = rx2 * y1p2 + ry2 * x1p2;
        if denom == 0.0 {
            return Err(degenerate("chord has zero length"));
        }
        // Rounding can push this slightly negative right after radius correction.
        let numer = (rx2 * ry2 - rx2 * y1p2 - ry2 * x1p2).max(0.0);

        let sign = if large_arc != sweep { 1.0 } else { -1.0 };
        let coef = sign * (numer / denom).sqrt();
        let cxp = coef * (rx * y1p / ry);
        let cyp = coef * -(ry * x1p / rx);

        let center = Point::new(
            cos_phi * cxp - sin_phi * cyp + (from.x + to.x) / 2.0,
            sin_phi * cxp + cos_phi * cyp + (from.y + to.y) / 2.0,
        );

        let u = ((x1p - cxp) / rx, (y1p - cyp) / ry);
        let v = ((-x1p - cxp) / rx, (-y1p - cyp) / ry);
        let start_angle = angle_between((1.0, 0.0), u);
        let mut sweep_angle = angle_between(u, v);
        if !sweep && sweep_angle > 0.0 {
            sweep_angle -= TAU;
        } else if sweep && sweep_angle < 0.0 {
            sweep_angle += TAU;
        }

        Ok(Self {
            center,
            rx,
            ry,
            phi,
            start_angle,
            sweep_angle,
        })
    }

    /// Point at parameter `t` in `[0, 1]` along the arc.
    pub fn point_at(&self, t: f64) -> Point {
        let theta = self.start_angle + self.sweep_angle * t;
        let (sin_t, cos_t) = theta.sin_cos();
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        Point::new(
            self.center.x + self.rx * cos_t * cos_phi - self.ry * sin_t * sin_phi,
            self.center.y + self.rx * cos_t * sin_phi + self.ry * sin_t * cos_phi,
        )
    }
}

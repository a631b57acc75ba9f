//! Catmull-Rom spline fitting.
//!
//! Ported from D3 `curveCatmullRom` (d3-shape v3.x). Unlike the SVG-string
//! emitters elsewhere in the ecosystem this one produces structured path
//! commands, because the blob pipeline re-anchors every coordinate before
//! stringifying.

use crate::blob::path::PathData;
use crate::geom::Point;

const EPSILON: f64 = 1e-12;

struct CatmullRomState {
    alpha: f64,
    point_state: u8,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    l01_a: f64,
    l12_a: f64,
    l23_a: f64,
    l01_2a: f64,
    l12_2a: f64,
    l23_2a: f64,
}

impl CatmullRomState {
    fn new(alpha: f64) -> Self {
        Self {
            alpha,
            point_state: 0,
            x0: f64::NAN,
            y0: f64::NAN,
            x1: f64::NAN,
            y1: f64::NAN,
            x2: f64::NAN,
            y2: f64::NAN,
            l01_a: 0.0,
            l12_a: 0.0,
            l23_a: 0.0,
            l01_2a: 0.0,
            l12_2a: 0.0,
            l23_2a: 0.0,
        }
    }

    fn emit_segment(&self, out: &mut PathData, x: f64, y: f64) {
        let mut x1 = self.x1;
        let mut y1 = self.y1;
        let mut x2 = self.x2;
        let mut y2 = self.y2;

        if self.l01_a > EPSILON {
            let a = 2.0 * self.l01_2a + 3.0 * self.l01_a * self.l12_a + self.l12_2a;
            let n = 3.0 * self.l01_a * (self.l01_a + self.l12_a);
            if n != 0.0 && n.is_finite() {
                x1 = (x1 * a - self.x0 * self.l12_2a + self.x2 * self.l01_2a) / n;
                y1 = (y1 * a - self.y0 * self.l12_2a + self.y2 * self.l01_2a) / n;
            }
        }

        if self.l23_a > EPSILON {
            let b = 2.0 * self.l23_2a + 3.0 * self.l23_a * self.l12_a + self.l12_2a;
            let m = 3.0 * self.l23_a * (self.l23_a + self.l12_a);
            if m != 0.0 && m.is_finite() {
                // D3 uses the original (unadjusted) `_x1/_y1` here.
                x2 = (x2 * b + self.x1 * self.l23_2a - x * self.l12_2a) / m;
                y2 = (y2 * b + self.y1 * self.l23_2a - y * self.l12_2a) / m;
            }
        }

        out.curve_to(x1, y1, x2, y2, self.x2, self.y2);
    }

    fn point(&mut self, out: &mut PathData, x: f64, y: f64) {
        if self.point_state != 0 {
            let dx = self.x2 - x;
            let dy = self.y2 - y;
            self.l23_2a = (dx * dx + dy * dy).powf(self.alpha);
            self.l23_a = self.l23_2a.sqrt();
        }

        match self.point_state {
            0 => {
                self.point_state = 1;
                out.move_to(x, y);
            }
            1 => {
                self.point_state = 2;
            }
            2 => {
                self.point_state = 3;
                self.emit_segment(out, x, y);
            }
            _ => {
                self.emit_segment(out, x, y);
            }
        }

        self.l01_a = self.l12_a;
        self.l12_a = self.l23_a;
        self.l01_2a = self.l12_2a;
        self.l12_2a = self.l23_2a;

        self.x0 = self.x1;
        self.x1 = self.x2;
        self.x2 = x;
        self.y0 = self.y1;
        self.y1 = self.y2;
        self.y2 = y;
    }

    fn line_end(&mut self, out: &mut PathData) {
        match self.point_state {
            2 => {
                out.line_to(self.x2, self.y2);
            }
            3 => {
                // Mirror D3's `lineEnd`: `this.point(this._x2, this._y2)`.
                self.l23_a = 0.0;
                self.l23_2a = 0.0;
                self.emit_segment(out, self.x2, self.y2);
            }
            _ => {}
        }
    }
}

/// Fits a Catmull-Rom spline through `points` and returns the path commands.
pub(crate) fn catmull_rom_path(points: &[Point], alpha: f64) -> PathData {
    let mut out = PathData::default();
    if points.is_empty() {
        return out;
    }

    let mut state = CatmullRomState::new(alpha);
    for p in points {
        state.point(&mut out, p.x, p.y);
    }
    state.line_end(&mut out);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::point;

    #[test]
    fn two_points_degrade_to_a_line() {
        let path = catmull_rom_path(&[point(0.0, 0.0), point(10.0, 5.0)], 0.5);
        assert_eq!(path.to_svg_d(), "M0,0L10,5");
    }

    #[test]
    fn closed_ring_starts_and_ends_on_the_first_sample() {
        let ring = [
            point(0.0, 0.0),
            point(10.0, 0.0),
            point(10.0, 10.0),
            point(0.0, 10.0),
            point(0.0, 0.0),
        ];
        let path = catmull_rom_path(&ring, 0.5);
        let d = path.to_svg_d();
        assert!(d.starts_with("M0,0"));
        assert!(d.ends_with(",0,0"));
        assert!(d.matches('C').count() >= ring.len() - 1);
    }

    #[test]
    fn empty_input_yields_an_empty_path() {
        assert!(catmull_rom_path(&[], 0.5).is_empty());
    }
}

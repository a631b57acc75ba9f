//! Structured SVG path commands.
//!
//! The blob pipeline needs every emitted coordinate twice: once to compute
//! the path's own bounding box and once, translated into a top-left-anchored
//! space, for the final `d` string. Curves are therefore built as commands
//! first and stringified last.

use crate::model::Bounds;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    CurveTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    cmds: Vec<PathCmd>,
}

impl PathData {
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.cmds.push(PathCmd::MoveTo { x, y });
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.cmds.push(PathCmd::LineTo { x, y });
    }

    pub fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        self.cmds.push(PathCmd::CurveTo {
            x1,
            y1,
            x2,
            y2,
            x,
            y,
        });
    }

    /// Bounding box over every coordinate in the path, control points
    /// included. Control points count because the emitted string is what the
    /// container must enclose, and spline control points routinely overshoot
    /// their anchors.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.cmds.iter().flat_map(|cmd| match *cmd {
            PathCmd::MoveTo { x, y } | PathCmd::LineTo { x, y } => vec![(x, y)],
            PathCmd::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => vec![(x1, y1), (x2, y2), (x, y)],
        }))
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        for cmd in &mut self.cmds {
            match cmd {
                PathCmd::MoveTo { x, y } | PathCmd::LineTo { x, y } => {
                    *x += dx;
                    *y += dy;
                }
                PathCmd::CurveTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => {
                    *x1 += dx;
                    *y1 += dy;
                    *x2 += dx;
                    *y2 += dy;
                    *x += dx;
                    *y += dy;
                }
            }
        }
    }

    pub fn to_svg_d(&self) -> String {
        let mut out = String::with_capacity(self.cmds.len().saturating_mul(64));
        for cmd in &self.cmds {
            match *cmd {
                PathCmd::MoveTo { x, y } => emit_pair(&mut out, 'M', x, y),
                PathCmd::LineTo { x, y } => emit_pair(&mut out, 'L', x, y),
                PathCmd::CurveTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => {
                    out.push('C');
                    fmt_path_into(&mut out, x1);
                    out.push(',');
                    fmt_path_into(&mut out, y1);
                    out.push(',');
                    fmt_path_into(&mut out, x2);
                    out.push(',');
                    fmt_path_into(&mut out, y2);
                    out.push(',');
                    fmt_path_into(&mut out, x);
                    out.push(',');
                    fmt_path_into(&mut out, y);
                }
            }
        }
        out
    }
}

fn emit_pair(out: &mut String, cmd: char, x: f64, y: f64) {
    out.push(cmd);
    fmt_path_into(out, x);
    out.push(',');
    fmt_path_into(out, y);
}

// D3's `d3-path` stringifies path coordinates with 3 fractional digits:
// `Math.round(x * 1000) / 1000` (ties half-up, including for negatives).
// Match it so emitted paths stay byte-compatible with d3-path output.
fn fmt_path_into(out: &mut String, v: f64) {
    if !v.is_finite() || v.abs() < 0.0005 {
        out.push('0');
        return;
    }

    let scaled = v * 1000.0;
    let k = (scaled + 0.5).floor() as i64;
    if k == 0 {
        out.push('0');
        return;
    }
    append_fixed_3dp_trimmed(out, k);
}

fn append_fixed_3dp_trimmed(out: &mut String, k: i64) {
    use std::fmt::Write as _;

    let neg = k.is_negative();
    let abs = k.unsigned_abs();
    let int_part = abs / 1000;
    let mut frac = abs % 1000;

    if neg {
        out.push('-');
    }
    let _ = write!(out, "{int_part}");

    if frac == 0 {
        return;
    }
    out.push('.');
    // Fixed three digits, then trim trailing zeros.
    let mut digits = [0u8; 3];
    for slot in digits.iter_mut().rev() {
        *slot = (frac % 10) as u8;
        frac /= 10;
    }
    let keep = digits
        .iter()
        .rposition(|&d| d != 0)
        .map_or(0, |last| last + 1);
    for &d in &digits[..keep] {
        out.push(char::from(b'0' + d));
    }
}

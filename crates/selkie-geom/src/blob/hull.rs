//! Andrew monotone-chain convex hull.

use crate::geom::Point;

fn cross(o: Point, a: Point, b: Point) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Convex hull in counter-clockwise order, strictly convex (collinear points
/// dropped), without the first point repeated.
///
/// Degenerate inputs (all points coincident or collinear) yield fewer than
/// three points; callers treat that as "no hull".
pub(crate) fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut pts: Vec<Point> = points.to_vec();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts.dedup_by(|a, b| a.x == b.x && a.y == b.y);

    let n = pts.len();
    if n < 3 {
        return pts;
    }

    let mut hull: Vec<Point> = Vec::with_capacity(2 * n);
    for &p in &pts {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }

    let lower_len = hull.len() + 1;
    for &p in pts.iter().rev().skip(1) {
        while hull.len() >= lower_len && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0
        {
            hull.pop();
        }
        hull.push(p);
    }

    hull.pop();
    hull
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::point;

    #[test]
    fn hull_of_square_corners_keeps_four_points() {
        let pts = [
            point(0.0, 0.0),
            point(10.0, 0.0),
            point(10.0, 10.0),
            point(0.0, 10.0),
            point(5.0, 5.0),
        ];
        let hull = convex_hull(&pts);
        assert_eq!(hull.len(), 4);
        assert!(!hull.contains(&point(5.0, 5.0)));
    }

    #[test]
    fn hull_drops_collinear_edge_points() {
        let pts = [
            point(0.0, 0.0),
            point(5.0, 0.0),
            point(10.0, 0.0),
            point(10.0, 10.0),
            point(0.0, 10.0),
        ];
        let hull = convex_hull(&pts);
        assert_eq!(hull.len(), 4);
    }

    #[test]
    fn collinear_input_yields_fewer_than_three_points() {
        let pts = [point(0.0, 0.0), point(5.0, 5.0), point(10.0, 10.0)];
        let hull = convex_hull(&pts);
        assert!(hull.len() < 3);
    }

    #[test]
    fn coincident_points_collapse() {
        let pts = [point(3.0, 4.0); 6];
        let hull = convex_hull(&pts);
        assert_eq!(hull.len(), 1);
    }

    #[test]
    fn hull_is_counter_clockwise() {
        let pts = [
            point(0.0, 0.0),
            point(10.0, 0.0),
            point(10.0, 10.0),
            point(0.0, 10.0),
        ];
        let hull = convex_hull(&pts);
        let mut area2 = 0.0;
        for i in 0..hull.len() {
            let a = hull[i];
            let b = hull[(i + 1) % hull.len()];
            area2 += a.x * b.y - b.x * a.y;
        }
        assert!(area2 > 0.0);
    }
}

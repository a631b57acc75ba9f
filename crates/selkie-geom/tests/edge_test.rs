use selkie_geom::{
    CanvasPoint, NodeRect, Side, edge_endpoints, nearest_side, node_intersection,
    vertical_edge_endpoints,
};

#[test]
fn intersection_of_equal_rects_side_by_side_lands_on_the_shared_facing_edge() {
    let a = NodeRect::new(0.0, 0.0, 100.0, 50.0);
    let b = NodeRect::new(200.0, 0.0, 100.0, 50.0);

    let hit = node_intersection(&a, &b);
    assert_eq!(hit.x, 100.0);
    assert_eq!(hit.y, 25.0);

    let hit = node_intersection(&b, &a);
    assert_eq!(hit.x, 200.0);
    assert_eq!(hit.y, 25.0);
}

#[test]
fn intersection_with_coincident_centers_returns_the_own_center() {
    let a = NodeRect::new(10.0, 20.0, 100.0, 50.0);
    let hit = node_intersection(&a, &a);
    assert_eq!(hit.x, 60.0);
    assert_eq!(hit.y, 45.0);
}

#[test]
fn intersection_with_unmeasured_rects_is_total_and_finite() {
    let a = NodeRect::unmeasured(10.0, 20.0);
    let b = NodeRect::new(300.0, 400.0, 100.0, 50.0);

    let hit = node_intersection(&a, &b);
    assert!(hit.x.is_finite());
    assert!(hit.y.is_finite());
    // A zero-size rectangle's boundary is its center.
    assert_eq!(hit.x, 10.0);
    assert_eq!(hit.y, 20.0);
}

#[test]
fn nearest_side_prefers_right_over_top_on_an_ambiguous_corner_point() {
    let rect = NodeRect::new(0.0, 0.0, 100.0, 50.0);
    // Distance 1 from both the right edge and the top edge.
    let side = nearest_side(&rect, CanvasPoint { x: 99.0, y: 1.0 });
    assert_eq!(side, Side::Right);
}

#[test]
fn nearest_side_classifies_clear_cases() {
    let rect = NodeRect::new(0.0, 0.0, 100.0, 50.0);
    assert_eq!(
        nearest_side(&rect, CanvasPoint { x: 0.0, y: 25.0 }),
        Side::Left
    );
    assert_eq!(
        nearest_side(&rect, CanvasPoint { x: 100.0, y: 25.0 }),
        Side::Right
    );
    assert_eq!(
        nearest_side(&rect, CanvasPoint { x: 50.0, y: 0.0 }),
        Side::Top
    );
    assert_eq!(
        nearest_side(&rect, CanvasPoint { x: 50.0, y: 50.0 }),
        Side::Bottom
    );
}

#[test]
fn endpoints_for_a_horizontal_pair_anchor_on_facing_side_midpoints() {
    let source = NodeRect::new(0.0, 0.0, 100.0, 50.0);
    let target = NodeRect::new(300.0, 0.0, 100.0, 50.0);

    let ep = edge_endpoints(&source, &target);
    assert_eq!(ep.source_side, Side::Right);
    assert_eq!(ep.target_side, Side::Left);
    assert_eq!((ep.source_x, ep.source_y), (100.0, 25.0));
    assert_eq!((ep.target_x, ep.target_y), (300.0, 25.0));
}

#[test]
fn endpoints_for_a_vertical_pair_anchor_on_facing_side_midpoints() {
    let source = NodeRect::new(0.0, 0.0, 100.0, 50.0);
    let target = NodeRect::new(0.0, 200.0, 100.0, 50.0);

    let ep = edge_endpoints(&source, &target);
    assert_eq!(ep.source_side, Side::Bottom);
    assert_eq!(ep.target_side, Side::Top);
    assert_eq!((ep.source_x, ep.source_y), (50.0, 50.0));
    assert_eq!((ep.target_x, ep.target_y), (50.0, 200.0));
}

#[test]
fn endpoint_anchors_always_sit_on_a_side_midpoint() {
    let source = NodeRect::new(40.0, 80.0, 180.0, 90.0);
    let targets = [
        NodeRect::new(500.0, 60.0, 120.0, 60.0),
        NodeRect::new(-300.0, 400.0, 90.0, 120.0),
        NodeRect::new(100.0, -250.0, 200.0, 40.0),
        NodeRect::new(45.0, 300.0, 180.0, 90.0),
    ];

    for target in targets {
        let ep = edge_endpoints(&source, &target);
        let (w, h) = (180.0, 90.0);
        let (cx, cy) = (40.0 + w / 2.0, 80.0 + h / 2.0);
        let expected = match ep.source_side {
            Side::Left => (40.0, cy),
            Side::Right => (40.0 + w, cy),
            Side::Top => (cx, 80.0),
            Side::Bottom => (cx, 80.0 + h),
        };
        assert_eq!((ep.source_x, ep.source_y), expected);
    }
}

#[test]
fn endpoints_are_total_for_identical_degenerate_rects() {
    let a = NodeRect::unmeasured(5.0, 5.0);
    let ep = edge_endpoints(&a, &a);
    assert!(ep.source_x.is_finite());
    assert!(ep.source_y.is_finite());
    assert!(ep.target_x.is_finite());
    assert!(ep.target_y.is_finite());
}

#[test]
fn vertical_endpoints_run_bottom_center_to_top_center() {
    let source = NodeRect::new(100.0, 50.0, 120.0, 80.0);
    let target = NodeRect::new(150.0, 200.0, 100.0, 60.0);

    let ep = vertical_edge_endpoints(Some(&source), Some(&target)).unwrap();
    assert_eq!(ep.source_x, 160.0);
    assert_eq!(ep.source_y, 130.0);
    assert_eq!(ep.target_x, 200.0);
    assert_eq!(ep.target_y, 200.0);
    assert_eq!(ep.source_side, Side::Bottom);
    assert_eq!(ep.target_side, Side::Top);
}

#[test]
fn vertical_endpoints_require_both_nodes_fully_measured() {
    let full = NodeRect::new(0.0, 0.0, 100.0, 50.0);
    let no_width = NodeRect {
        width: None,
        ..NodeRect::new(0.0, 0.0, 100.0, 50.0)
    };
    let no_height = NodeRect {
        height: None,
        ..NodeRect::new(0.0, 0.0, 100.0, 50.0)
    };

    assert!(vertical_edge_endpoints(None, Some(&full)).is_none());
    assert!(vertical_edge_endpoints(Some(&full), None).is_none());
    assert!(vertical_edge_endpoints(Some(&no_width), Some(&full)).is_none());
    assert!(vertical_edge_endpoints(Some(&full), Some(&no_height)).is_none());
}

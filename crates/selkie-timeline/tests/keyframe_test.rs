use selkie_timeline::{DateScale, Keyframe, SNAP_THRESHOLD, bracket, nearest, snap_target, snaps};

fn frame(id: &str, date: &str) -> Keyframe {
    Keyframe {
        id: id.to_string(),
        date: date.to_string(),
        label: None,
        positions: Default::default(),
        active: Default::default(),
    }
}

fn scale() -> DateScale {
    DateScale::with_fallback_year(2030)
}

#[test]
fn bracket_re_derives_ordering_from_dates_not_array_index() {
    // Deliberately unsorted.
    let frames = vec![
        frame("late", "2028"),
        frame("early", "2026"),
        frame("mid", "2027-Q1"),
    ];

    let br = bracket(&frames, &scale(), 2026.5);
    assert_eq!(br.before.unwrap().id, "early");
    assert_eq!(br.after.unwrap().id, "mid");
}

#[test]
fn bracket_on_an_exact_keyframe_collapses_to_a_single_frame() {
    let frames = vec![
        frame("late", "2028"),
        frame("early", "2026"),
        frame("mid", "2027-Q1"),
    ];

    let br = bracket(&frames, &scale(), 2027.0);
    assert_eq!(br.before.unwrap().id, "mid");
    assert_eq!(br.after.unwrap().id, "mid");
    assert_eq!(br.single().unwrap().id, "mid");
}

#[test]
fn bracket_before_all_frames_has_no_before() {
    let frames = vec![frame("only", "2027")];
    let br = bracket(&frames, &scale(), 2020.0);
    assert!(br.before.is_none());
    assert_eq!(br.after.unwrap().id, "only");
    assert!(br.single().is_none());
}

#[test]
fn bracket_past_all_frames_collapses_to_the_last() {
    let frames = vec![frame("early", "2026"), frame("late", "2028")];
    let br = bracket(&frames, &scale(), 2035.0);
    assert_eq!(br.before.unwrap().id, "late");
    assert!(br.after.is_none());
    assert_eq!(br.single().unwrap().id, "late");
}

#[test]
fn nearest_keeps_the_first_seen_frame_on_ties() {
    // 2026.375 and 2027.375 are both 0.5 away from 2026.875.
    let frames = vec![frame("second-date", "2027"), frame("first-date", "2026")];
    let hit = nearest(&frames, &scale(), 2026.875).unwrap();
    assert_eq!(hit.id, "second-date");
}

#[test]
fn nearest_of_no_frames_is_none() {
    assert!(nearest(&[], &scale(), 2027.0).is_none());
}

#[test]
fn snap_window_is_five_times_the_threshold() {
    assert!(snaps(0.24, SNAP_THRESHOLD));
    assert!(snaps(-0.24, SNAP_THRESHOLD));
    assert!(!snaps(0.26, SNAP_THRESHOLD));
    assert!(!snaps(0.25, SNAP_THRESHOLD));
}

#[test]
fn snap_target_locks_only_within_the_window() {
    let frames = vec![frame("k", "2027-Q1")];
    let s = scale();
    assert_eq!(
        snap_target(&frames, &s, 2027.24, SNAP_THRESHOLD).unwrap().id,
        "k"
    );
    assert!(snap_target(&frames, &s, 2027.26, SNAP_THRESHOLD).is_none());
}

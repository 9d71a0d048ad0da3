use std::collections::HashSet;

use tripath::{find_minimum_path, render_report, Triangle};

#[test]
fn repeated_solves_render_identically() {
    // Many equal-sum paths; the tie-break must pick the same one every time.
    let rows: Vec<Vec<i32>> = (0..24).map(|r| vec![1; r + 1]).collect();
    let triangle = Triangle::new(rows).expect("valid shape");

    let mut reports = HashSet::new();
    for _ in 0..5 {
        let report = render_report(&find_minimum_path(&triangle)).expect("rendering succeeds");
        reports.insert(report);
    }

    assert_eq!(reports.len(), 1, "outputs diverged across runs");
}

#[test]
fn tall_triangle_solves_without_recursion() {
    let height = 2_000;
    let rows: Vec<Vec<i32>> = (0..height)
        .map(|r| (0..=r).map(|c| ((r * 31 + c * 17) % 97) as i32 - 48).collect())
        .collect();
    let triangle = Triangle::new(rows).expect("valid shape");
    let result = find_minimum_path(&triangle);

    assert_eq!(result.len(), height);
    let total: i64 = result.path().iter().map(|&v| i64::from(v)).sum();
    assert_eq!(total, result.minimum_sum());
}

//! Text in, report out

use std::io::Cursor;

use tripath::{
    find_minimum_path, parse_triangle, render_report, ParseError, ReadError, ReaderConfig,
    TriangleReader,
};

#[test]
fn literal_to_report() {
    let triangle = parse_triangle("[[2],[3,4],[6,5,7],[4,1,8,3]]").expect("literal parses");
    let report = render_report(&find_minimum_path(&triangle)).expect("rendering succeeds");
    assert_eq!(report, "Result\nMinimum path: 2 → 3 → 5 → 1\nMinimum sum: 11\n");
}

#[test]
fn interactive_session_recovers_from_typos() {
    let input = "[[2],[3,4],[6,5,7],[4,1,8,3]\n[[2],[3,4],[6,5,7],[4,1,8,3]]\n";
    let mut output = Vec::new();
    let mut reader = TriangleReader::new(Cursor::new(input), &mut output);

    let triangle = reader.read_triangle().expect("second line is valid");
    assert_eq!(find_minimum_path(&triangle).minimum_sum(), 11);

    drop(reader);
    let transcript = String::from_utf8(output).unwrap();
    assert_eq!(transcript.matches("Enter a triangle").count(), 2);
    assert!(transcript.contains("Invalid triangle, please try again"));
}

#[test]
fn bounded_session_gives_up() {
    let config = ReaderConfig::default().with_max_attempts(Some(1));
    let mut reader = TriangleReader::with_config(Cursor::new("[[1]]\n"), Vec::new(), config);
    match reader.read_triangle() {
        Err(ReadError::Exhausted { attempts }) => assert_eq!(attempts, 1),
        other => panic!("expected exhaustion, got {other:?}"),
    }
}

#[test]
fn shape_errors_surface_through_parser() {
    let err = parse_triangle("[[1],[2],[3,4,5]]").unwrap_err();
    match err {
        ParseError::Shape(shape) => assert_eq!(shape.row(), Some(1)),
        other => panic!("unexpected error {other:?}"),
    }
}

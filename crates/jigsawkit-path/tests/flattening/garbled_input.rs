use jigsawkit_path::{parse_path, PathError};

#[test]
fn test_garbled_input_never_panics() {
    let inputs = [
        "",
        "Z",
        "M",
        "M 10",
        "L 5 5",
        "A 0 0 0 0 0 10 10",
        "M 0 0 A 10 10 0 2 1 5 5 L 3 3",
        "M 0 0 C 1 2 3 Z",
        "M 1e999 0 L 0 0",
        "M ,,, 1 2 L -.- 3",
        "q 1 2 3 4 M 0 0 Q 1 1 2 0",
        "M 0 0 X 1 2 L 3 3 Z Z Z",
        "\u{00e9}\u{00e9} M 0 0 L 1 1",
    ];
    for input in inputs {
        let parsed = parse_path(input);
        let line = parsed.path.flatten(8);
        assert!(line.len() <= parsed.path.len() * 8 + 1, "{:?}", input);
    }
}

#[test]
fn test_recovered_commands_survive_a_bad_one() {
    let parsed = parse_path("M 0 0 X 1 2 L 3 3 Z");
    assert_eq!(parsed.path.to_string(), "M 0 0 L 3 3 Z");
    assert_eq!(parsed.diagnostics.len(), 1);
    assert!(matches!(
        parsed.diagnostics[0],
        PathError::MalformedPathCommand { command: 'X', .. }
    ));

    let line = parsed.path.flatten(16);
    assert_eq!(line.len(), 3);
    assert!(line.closed);
}

#[test]
fn test_degenerate_arc_in_text_is_a_straight_segment() {
    let parsed = parse_path("M 0 0 A 0 10 0 0 1 10 10");
    assert!(parsed.is_clean());
    let line = parsed.path.flatten(16);
    assert_eq!(line.len(), 2);
}

use super::*;

#[test]
fn points_are_kept_in_file_order() {
    let scene = parse("point 1.0 2.0 point 3.0 4.0");
    assert!(scene.is_complete());
    assert_eq!(
        scene.points,
        vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]
    );
    assert_eq!(scene.transform, None);
}

#[test]
fn identity_transform_parses_to_identity() {
    let scene = parse("transform 1 0 0 0 1 0 0 0 1");
    assert_eq!(scene.transform, Some(Mat4::IDENTITY));
    assert!(scene.points.is_empty());
}

#[test]
fn last_transform_wins() {
    let scene = parse(
        "transform 2 0 0 0 2 0 0 0 1\n\
         point 1 1\n\
         transform 0 -1 0 1 0 0 0 0 1\n",
    );
    let m = scene.transform.unwrap();
    assert_eq!(m.to_rows3(), [0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
    assert_eq!(scene.points, vec![Point::new(1.0, 1.0)]);
}

#[test]
fn unknown_tokens_are_skipped_without_effect() {
    let scene = parse("hello 12 Point 3 4 TRANSFORM world");
    assert!(scene.is_complete());
    assert_eq!(scene.transform, None);
    assert!(scene.points.is_empty());
    assert_eq!(scene.skipped, 7);
}

#[test]
fn commands_between_noise_are_found() {
    let scene = parse("# shape\npoint -1e1 .5 junk point 0 0");
    assert_eq!(
        scene.points,
        vec![Point::new(-10.0, 0.5), Point::new(0.0, 0.0)]
    );
    assert_eq!(scene.skipped, 3);
}

#[test]
fn empty_text_is_an_empty_complete_scene() {
    let scene = parse("");
    assert!(scene.is_complete());
    assert_eq!(scene, ParsedScene::default());
}

#[test]
fn truncated_command_stops_and_keeps_prefix() {
    let scene = parse("point 1 2 transform 1 0 0 0 1");
    assert_eq!(scene.points, vec![Point::new(1.0, 2.0)]);
    assert_eq!(scene.transform, None);
    let err = scene.error.unwrap();
    assert_eq!(err.command, Command::Transform);
    assert_eq!(err.offset, 10);
    assert_eq!(
        err.reason,
        OperandError::Truncated {
            expected: 9,
            found: 5
        }
    );
}

#[test]
fn non_numeric_operand_stops_parsing() {
    let scene = parse("point 1 2 point x 4 point 5 6");
    assert_eq!(scene.points, vec![Point::new(1.0, 2.0)]);
    let err = scene.error.unwrap();
    assert_eq!(err.command, Command::Point);
    assert_eq!(
        err.reason,
        OperandError::NotANumber {
            token: "x".to_owned(),
            offset: 16
        }
    );
}

#[test]
fn non_finite_numbers_are_rejected() {
    for text in ["point inf 0", "point 0 NaN", "point 1e999 0"] {
        let scene = parse(text);
        assert!(scene.points.is_empty(), "{text}");
        assert!(scene.error.is_some(), "{text}");
    }
}

#[test]
fn error_message_names_command_and_offset() {
    let err = parse("  point 3").error.unwrap();
    let msg = err.to_string();
    assert!(msg.contains("`point`"));
    assert!(msg.contains("byte 2"));
    assert!(msg.contains("expected 2 numbers"));
}

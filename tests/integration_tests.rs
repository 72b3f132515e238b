//! Integration tests for the scene parser

use overlay_anchor::parse;
use overlay_anchor::parser::Statement;

#[test]
fn test_simple_scene() {
    let input = r#"
        container 400 300
        favorite at top-right
        share at top-right
    "#;

    let scene = parse(input).expect("Should parse");
    assert_eq!(scene.statements.len(), 3);
}

#[test]
fn test_container_with_modifiers() {
    let input = r#"container 640 480 [offset: 20]"#;

    let scene = parse(input).expect("Should parse");
    assert_eq!(scene.statements.len(), 1);
    assert!(matches!(scene.statements[0].node, Statement::Container(_)));
}

#[test]
fn test_all_anchor_keywords() {
    let input = r#"
        container 400 300
        a at top-left
        b at top-center
        c at top-right
        d at center-left
        e at center
        f at center-right
        g at bottom-left
        h at bottom-center
        i at bottom-right
    "#;

    let scene = parse(input).expect("Should parse");
    assert_eq!(scene.statements.len(), 10);
}

#[test]
fn test_all_direction_keywords() {
    let input = r#"
        container 400 300
        a at top-left [grow: right]
        b at top-left [grow: down]
        c at bottom-left [grow: up]
        d at top-right [grow: left]
    "#;

    let scene = parse(input).expect("Should parse");
    assert_eq!(scene.statements.len(), 5);
}

#[test]
fn test_modifiers_with_strings() {
    let input = r#"delete at bottom-right [grow: up, offset: "20px", class: "danger"]"#;

    let scene = parse(input).expect("Should parse");
    match &scene.statements[0].node {
        Statement::Control(decl) => assert_eq!(decl.modifiers.len(), 3),
        other => panic!("expected control, got {:?}", other),
    }
}

#[test]
fn test_comments_ignored() {
    let input = r#"
        // the tile
        container 400 300
        /* controls */
        favorite at top-right
    "#;

    let scene = parse(input).expect("Should parse");
    assert_eq!(scene.statements.len(), 2);
}

#[test]
fn test_profile_positioned_control() {
    // A bare name is valid syntax; the profile supplies its anchor later
    let scene = parse("container 400 300  favorite").expect("Should parse");
    assert_eq!(scene.statements.len(), 2);
    match &scene.statements[1].node {
        Statement::Control(decl) => assert!(decl.position.is_none()),
        other => panic!("expected control, got {:?}", other),
    }
}

#[test]
fn test_unknown_anchor_is_rejected() {
    let result = parse("container 400 300  favorite at sideways");
    assert!(result.is_err());
}

#[test]
fn test_reserved_keyword_as_name_is_rejected() {
    let result = parse("container 400 300  center at top-left");
    assert!(result.is_err());
}

#[test]
fn test_parse_error_formatting() {
    let source = "container 400 300  favorite at sideways";
    let errors = parse(source).unwrap_err();
    assert!(!errors.is_empty());

    // Ariadne report should point at the offending source
    let report = errors[0].format(source, "scene.ov");
    assert!(report.contains("scene.ov"));
}

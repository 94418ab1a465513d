//! Integration tests for ordered tag operations

use appmerge::application::Application;
use appmerge::error::PatchError;
use appmerge::patch::{
    ApplicationMerger, ApplicationPatch, TagDuplicatePolicy, TagOperation,
};

fn with_tags(ids: &[&str]) -> Application {
    Application::new("app", "App").with_tags(ids.iter().copied())
}

fn tag_patch(ops: Vec<TagOperation>) -> ApplicationPatch {
    ApplicationPatch {
        tags: Some(ops),
        ..Default::default()
    }
}

#[test]
fn test_add_c_remove_a() {
    let mut app = with_tags(&["A", "B"]);
    ApplicationMerger::default()
        .apply(
            &mut app,
            &tag_patch(vec![TagOperation::add(["C"]), TagOperation::remove(["A"])]),
        )
        .unwrap();
    assert_eq!(app.tag_ids(), vec!["B", "C"]);
}

#[test]
fn test_repeated_add_under_each_policy() {
    let patch = tag_patch(vec![TagOperation::add(["A"])]);

    let mut deduped = with_tags(&["A"]);
    ApplicationMerger::new(TagDuplicatePolicy::Dedupe)
        .apply(&mut deduped, &patch)
        .unwrap();
    assert_eq!(deduped.tag_ids(), vec!["A"]);

    let mut preserved = with_tags(&["A"]);
    ApplicationMerger::new(TagDuplicatePolicy::Preserve)
        .apply(&mut preserved, &patch)
        .unwrap();
    assert_eq!(preserved.tag_ids(), vec!["A", "A"]);
}

#[test]
fn test_empty_operation_list_keeps_tags_exactly() {
    let mut app = super::test_utils::sample_application();
    let before = app.tags.clone();
    ApplicationMerger::default()
        .apply(&mut app, &tag_patch(vec![]))
        .unwrap();
    assert_eq!(app.tags, before);
    assert_eq!(app.tags[0].name.as_deref(), Some("Internal"));
}

#[test]
fn test_remove_absent_value_is_noop() {
    let mut app = with_tags(&["A", "B"]);
    ApplicationMerger::default()
        .apply(&mut app, &tag_patch(vec![TagOperation::remove(["X", "B"])]))
        .unwrap();
    assert_eq!(app.tag_ids(), vec!["A"]);
}

#[test]
fn test_json_patch_with_mixed_value_shapes() {
    let patch = ApplicationPatch::from_json(
        r#"{"tags": [
            {"operation": "ADD", "tags": [{"value": "C"}, "D"]},
            {"operation": "REMOVE", "tags": [{"value": "A"}]}
        ]}"#,
    )
    .unwrap();

    let mut app = with_tags(&["A", "B"]);
    ApplicationMerger::default().apply(&mut app, &patch).unwrap();
    assert_eq!(app.tag_ids(), vec!["B", "C", "D"]);
}

#[test]
fn test_unsupported_operation_fails_to_parse() {
    let err = ApplicationPatch::from_json(r#"{"tags": [{"operation": "RENAME", "tags": []}]}"#)
        .unwrap_err();
    let expected = PatchError::UnsupportedOperation("RENAME".to_string()).to_string();
    assert!(err.to_string().contains(&expected));
}

//! Property-based tests for patch merge laws

use appmerge::application::Application;
use appmerge::patch::{patch_tags, ApplicationMerger, ApplicationPatch, TagDuplicatePolicy, TagOperation};
use proptest::prelude::*;
use std::collections::HashSet;

/// Small alphabet so generated operations collide with existing tags
fn tag_id() -> impl Strategy<Value = String> {
    "[a-e]"
}

fn tag_ops() -> impl Strategy<Value = Vec<TagOperation>> {
    prop::collection::vec(
        (any::<bool>(), prop::collection::vec(tag_id(), 0..4)).prop_map(|(add, ids)| {
            if add {
                TagOperation::add(ids)
            } else {
                TagOperation::remove(ids)
            }
        }),
        0..6,
    )
}

fn application(tags: Vec<String>) -> Application {
    let mut app = Application::new("app-1", "Console").with_tags(tags);
    app.description = Some("original".to_string());
    app
}

/// An empty patch never changes the application
#[test]
fn test_empty_patch_identity_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&prop::collection::vec(tag_id(), 0..6), |tags| {
            let merger = ApplicationMerger::default();
            let original = application(tags);
            let mut patched = original.clone();

            merger.apply(&mut patched, &ApplicationPatch::default()).unwrap();
            prop_assert_eq!(patched, original);

            Ok(())
        })
        .unwrap();
}

/// Setting a single scalar changes that field and nothing else
#[test]
fn test_single_scalar_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(prop::collection::vec(tag_id(), 0..6), ".{0,24}"),
            |(tags, description)| {
                let merger = ApplicationMerger::default();
                let original = application(tags);
                let mut patched = original.clone();
                let patch = ApplicationPatch {
                    description: Some(description.clone()),
                    ..Default::default()
                };

                merger.apply(&mut patched, &patch).unwrap();

                let mut expected = original;
                expected.description = Some(description);
                prop_assert_eq!(patched, expected);

                Ok(())
            },
        )
        .unwrap();
}

/// The same operations on the same starting tags always produce the same result
#[test]
fn test_tag_operations_determinism_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(prop::collection::vec(tag_id(), 0..6), tag_ops()),
            |(tags, ops)| {
                for policy in [TagDuplicatePolicy::Dedupe, TagDuplicatePolicy::Preserve] {
                    let mut first = application(tags.clone());
                    let mut second = application(tags.clone());
                    patch_tags(&mut first, Some(&ops), policy);
                    patch_tags(&mut second, Some(&ops), policy);
                    prop_assert_eq!(first, second);
                }
                Ok(())
            },
        )
        .unwrap();
}

proptest! {
    /// A trailing REMOVE leaves none of its identifiers behind
    #[test]
    fn removed_identifiers_are_absent(
        tags in prop::collection::vec(tag_id(), 0..6),
        mut ops in tag_ops(),
        removed in prop::collection::vec(tag_id(), 1..4),
    ) {
        ops.push(TagOperation::remove(removed.clone()));
        let mut app = application(tags);
        patch_tags(&mut app, Some(&ops), TagDuplicatePolicy::Preserve);

        for id in app.tag_ids() {
            prop_assert!(!removed.iter().any(|r| r == id));
        }
    }

    /// Under the dedupe policy every identifier appears at most once
    #[test]
    fn dedupe_yields_unique_identifiers(
        tags in prop::collection::vec(tag_id(), 0..8),
        ops in tag_ops(),
    ) {
        // without operations the collection is not rebuilt, so existing duplicates stay
        prop_assume!(!ops.is_empty());
        let mut app = application(tags);
        prop_assert!(patch_tags(&mut app, Some(&ops), TagDuplicatePolicy::Dedupe));

        let ids = app.tag_ids();
        let unique: HashSet<&str> = ids.iter().copied().collect();
        prop_assert_eq!(unique.len(), ids.len());
    }

    /// Without operations the tag records are left untouched, names and colours included
    #[test]
    fn no_operations_keeps_tag_records(tags in prop::collection::vec(tag_id(), 0..6)) {
        let mut original = application(tags);
        for tag in &mut original.tags {
            tag.name = Some(format!("Tag {}", tag.id));
        }

        let mut absent = original.clone();
        prop_assert!(!patch_tags(&mut absent, None, TagDuplicatePolicy::Dedupe));
        prop_assert_eq!(&absent, &original);

        let mut empty = original.clone();
        prop_assert!(!patch_tags(&mut empty, Some(&[]), TagDuplicatePolicy::Dedupe));
        prop_assert_eq!(&empty, &original);
    }
}

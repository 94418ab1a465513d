//! Tag patching: ordered ADD/REMOVE against the application's tag identifiers.

use crate::application::{Application, ApplicationTag};
use crate::patch::request::{TagOperation, TagOperationKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// How repeated tag identifiers are treated while patching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagDuplicatePolicy {
    /// Insertion-ordered set: an identifier appears at most once, at its first position.
    #[default]
    Dedupe,
    /// List semantics: ADD always appends, even if the identifier is already present.
    Preserve,
}

/// Working list of tag identifiers under a duplicate policy
///
/// `seen` mirrors `ids` under `Dedupe` so membership checks stay constant time.
struct TagWorkingList {
    ids: Vec<String>,
    seen: HashSet<String>,
    policy: TagDuplicatePolicy,
}

impl TagWorkingList {
    fn from_application(app: &Application, policy: TagDuplicatePolicy) -> Self {
        let mut list = Self {
            ids: Vec::with_capacity(app.tags.len()),
            seen: HashSet::with_capacity(app.tags.len()),
            policy,
        };
        for tag in &app.tags {
            list.push(&tag.id);
        }
        list
    }

    fn push(&mut self, id: &str) {
        if self.policy == TagDuplicatePolicy::Dedupe && !self.seen.insert(id.to_string()) {
            return;
        }
        self.ids.push(id.to_string());
    }

    fn remove_all(&mut self, id: &str) {
        if self.policy == TagDuplicatePolicy::Dedupe && !self.seen.remove(id) {
            return;
        }
        self.ids.retain(|t| t != id);
    }

    fn apply(&mut self, op: &TagOperation) {
        match op.operation {
            TagOperationKind::Add => {
                for id in op.values() {
                    self.push(id);
                }
            }
            TagOperationKind::Remove => {
                for id in op.values() {
                    self.remove_all(id);
                }
            }
        }
    }
}

/// Apply tag operations to `app` in order.
///
/// With no operations (absent or empty list) the tag collection is left exactly
/// as it was. Otherwise it is replaced by fresh records built from the final
/// identifiers. Returns whether the tag collection was rebuilt.
pub fn patch_tags(
    app: &mut Application,
    operations: Option<&[TagOperation]>,
    policy: TagDuplicatePolicy,
) -> bool {
    let operations = match operations {
        Some(ops) if !ops.is_empty() => ops,
        _ => return false,
    };

    let mut working = TagWorkingList::from_application(app, policy);
    for op in operations {
        working.apply(op);
    }

    debug!(
        application_id = %app.application_id,
        operations = operations.len(),
        before = app.tags.len(),
        after = working.ids.len(),
        "Rebuilding application tags"
    );

    app.tags = working.ids.into_iter().map(ApplicationTag::from_id).collect();
    true
}

//! Group resolution.
//!
//! Turns the requested groups into ordered batches. Only batches that come
//! from a group sequence short-circuit.

use assay_core::{GroupName, GroupSpec};
use assay_registry::ClassMetadata;

/// Groups evaluated together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub groups: Vec<GroupName>,
    /// Later sequenced batches are skipped once this one adds a violation.
    pub sequenced: bool,
}

impl Batch {
    fn independent(groups: Vec<GroupName>) -> Self {
        Self {
            groups,
            sequenced: false,
        }
    }

    fn sequenced(groups: Vec<GroupName>) -> Self {
        Self {
            groups,
            sequenced: true,
        }
    }
}

/// Resolve the requested groups for a node of `class` (or a bare value).
///
/// An explicit sequence yields one sequenced batch per step. A request
/// containing `Default` on a class with a group sequence replaces `Default`
/// by that sequence; any other requested groups form one independent batch
/// evaluated first.
pub fn resolve_groups(requested: &GroupSpec, class: Option<&ClassMetadata>) -> Vec<Batch> {
    match requested {
        GroupSpec::Sequence(sequence) => sequence
            .batches()
            .iter()
            .map(|batch| Batch::sequenced(batch.clone()))
            .collect(),
        GroupSpec::Groups(groups) => {
            let sequence = class.and_then(|c| c.group_sequence.as_ref());
            match sequence {
                Some(sequence) if groups.iter().any(GroupName::is_default) => {
                    let others: Vec<GroupName> =
                        groups.iter().filter(|g| !g.is_default()).cloned().collect();
                    let mut batches = Vec::with_capacity(sequence.batches().len() + 1);
                    if !others.is_empty() {
                        batches.push(Batch::independent(others));
                    }
                    batches.extend(
                        sequence
                            .batches()
                            .iter()
                            .map(|batch| Batch::sequenced(batch.clone())),
                    );
                    batches
                }
                _ => vec![Batch::independent(groups.clone())],
            }
        }
    }
}

/// Groups handed to the children of a `class` node.
///
/// The group named after the class only means something to that class;
/// children see it as `Default`.
pub fn cascade_groups(requested: &GroupSpec, class: &ClassMetadata) -> GroupSpec {
    let map = |groups: &[GroupName]| -> Vec<GroupName> {
        let mut out: Vec<GroupName> = Vec::with_capacity(groups.len());
        for group in groups {
            let group = if group.as_str() == class.name {
                GroupName::default_group()
            } else {
                group.clone()
            };
            if !out.contains(&group) {
                out.push(group);
            }
        }
        out
    };

    match requested {
        GroupSpec::Groups(groups) => GroupSpec::Groups(map(groups)),
        GroupSpec::Sequence(sequence) => GroupSpec::Sequence(
            assay_core::GroupSequence::from_batches(
                sequence.batches().iter().map(|batch| map(batch)).collect(),
            ),
        ),
    }
}

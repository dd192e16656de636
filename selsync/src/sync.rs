use crate::element::{find_named, Content, Element};
use crate::event::Event;
use crate::select::SelectState;

/// Error type for synchronizer operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    /// No select element in the document carries the group name.
    #[error("no select element carries the group name '{0}'")]
    UnknownGroup(String),

    /// Under `SyncPolicy::Strict`, a group member has fewer options than
    /// the index being propagated.
    #[error("option index {index} out of range for '{id}' ({option_count} options)")]
    IndexOutOfRange {
        id: String,
        index: usize,
        option_count: usize,
    },
}

/// One select in a dropdown group: its ID and how many options it offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMember {
    pub id: String,
    pub option_count: usize,
}

/// Lookup capability for resolving a group name to its members, in document
/// order. The synchronizer goes through this seam so it can be exercised
/// without a terminal or a full document.
pub trait GroupLookup {
    fn lookup(&self, name: &str) -> Vec<GroupMember>;
}

/// [`GroupLookup`] backed by a live element tree. Every call walks the tree
/// again; the group is never cached across events.
pub struct DocumentLookup<'a> {
    root: &'a Element,
}

impl<'a> DocumentLookup<'a> {
    pub fn new(root: &'a Element) -> Self {
        Self { root }
    }
}

impl GroupLookup for DocumentLookup<'_> {
    fn lookup(&self, name: &str) -> Vec<GroupMember> {
        find_named(self.root, name)
            .into_iter()
            .filter(|el| matches!(el.content, Content::Select { .. }))
            .map(|el| GroupMember {
                id: el.id.clone(),
                option_count: el.content.option_count(),
            })
            .collect()
    }
}

/// What to do when a group member has fewer options than the index being
/// propagated to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncPolicy {
    /// Assign the last option the member has.
    #[default]
    Clamp,
    /// Leave that member unchanged.
    Skip,
    /// Fail with [`SyncError::IndexOutOfRange`].
    Strict,
}

/// Keeps every select in a named group showing the same selected index.
///
/// When one member's selection changes, the group is re-queried from the
/// document and the new index is assigned to every member, the trigger
/// included (a no-op for it). Assignment is programmatic: it emits no
/// `Change` event, so propagation never cascades and re-running it with no
/// intervening change is a no-op.
#[derive(Debug, Clone)]
pub struct Synchronizer {
    group: String,
    policy: SyncPolicy,
}

impl Synchronizer {
    /// Create a synchronizer for the given group name without checking the
    /// document. Use [`Synchronizer::attach`] when a document is at hand.
    pub fn new(group: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            policy: SyncPolicy::default(),
        }
    }

    /// Explicit one-time registration against a document: verifies that at
    /// least one select carries the group name.
    pub fn attach(root: &Element, group: impl Into<String>) -> Result<Self, SyncError> {
        let group = group.into();
        if DocumentLookup::new(root).lookup(&group).is_empty() {
            return Err(SyncError::UnknownGroup(group));
        }
        Ok(Self {
            group,
            policy: SyncPolicy::default(),
        })
    }

    pub fn policy(mut self, policy: SyncPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    /// Propagate the triggering select's index to the whole group.
    ///
    /// Reads the trigger's current index from `selects`, re-queries the
    /// group through `lookup`, and assigns the index to every member. A
    /// trigger that is not a member of the watched group is ignored.
    /// Members with no options are skipped under every policy.
    pub fn on_change(
        &self,
        lookup: &dyn GroupLookup,
        trigger_id: &str,
        selects: &mut SelectState,
    ) -> Result<(), SyncError> {
        let members = lookup.lookup(&self.group);

        let Some(trigger) = members.iter().find(|m| m.id == trigger_id) else {
            return Ok(());
        };

        let index = selects.selected_in(trigger_id, trigger.option_count);
        log::debug!(
            "[sync] group '{}': propagating index {index} from '{trigger_id}' to {} members",
            self.group,
            members.len()
        );

        for member in &members {
            if member.option_count == 0 {
                continue;
            }
            if index < member.option_count {
                selects.set(member.id.clone(), index);
                continue;
            }
            match self.policy {
                SyncPolicy::Clamp => {
                    selects.set(member.id.clone(), member.option_count - 1);
                }
                SyncPolicy::Skip => {}
                SyncPolicy::Strict => {
                    return Err(SyncError::IndexOutOfRange {
                        id: member.id.clone(),
                        index,
                        option_count: member.option_count,
                    });
                }
            }
        }

        Ok(())
    }

    /// Apply [`Synchronizer::on_change`] for every `Change` event that
    /// originated from a member of the watched group. The document is
    /// re-queried for each event.
    pub fn process_events(
        &self,
        events: &[Event],
        root: &Element,
        selects: &mut SelectState,
    ) -> Result<(), SyncError> {
        for event in events {
            if let Event::Change { target, .. } = event {
                self.on_change(&DocumentLookup::new(root), target, selects)?;
            }
        }
        Ok(())
    }
}

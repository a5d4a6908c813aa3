use std::collections::HashMap;

use crate::EntryId;

/// Clue text keyed by entry identity.
///
/// Lives alongside a [`CrosswordGrid`] but is never consulted by the
/// [`WordIndex`](crate::WordIndex) or [`autofill`](crate::autofill) core.
/// Clue authoring itself is a host-side concern; this type only makes an
/// entry's clue text addressable by its identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClueMap(HashMap<EntryId, String>);

impl ClueMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: EntryId) -> Option<&str> {
        self.0.get(&id).map(String::as_str)
    }

    pub fn set(&mut self, id: EntryId, clue: impl Into<String>) {
        self.0.insert(id, clue.into());
    }

    pub fn remove(&mut self, id: EntryId) -> Option<String> {
        self.0.remove(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &str)> {
        self.0.iter().map(|(&id, clue)| (id, clue.as_str()))
    }
}

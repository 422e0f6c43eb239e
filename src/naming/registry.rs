use crate::metadata::{ChoiceListMetadata, MetadataId};
use std::collections::HashMap;
use tracing::debug;

/// Option names already issued, per choice list, for one generation run.
///
/// Each issued name maps to the number of times it has been requested as a
/// base name. Lives as long as its owner; never persisted.
#[derive(Debug, Default)]
pub struct NameRegistry {
    issued: HashMap<MetadataId, HashMap<String, u32>>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `name`, or `name_{k}` for the next free `k`, and record it.
    ///
    /// A repeated base name bumps its count to `k` and retries with
    /// `{name}_{k}`; the retry goes through the same check, so a suffixed
    /// candidate that was itself issued earlier is suffixed again.
    pub fn ensure_unique(&mut self, choice_list: &ChoiceListMetadata, name: String) -> String {
        let names = self.issued.entry(choice_list.id).or_default();
        let mut name = name;
        loop {
            match names.get_mut(&name) {
                Some(count) => {
                    *count += 1;
                    let renamed = format!("{name}_{count}");
                    debug!(
                        choice_list = %choice_list.name,
                        name = %name,
                        renamed = %renamed,
                        "Choice list already contained this option name"
                    );
                    name = renamed;
                }
                None => {
                    names.insert(name.clone(), 1);
                    return name;
                }
            }
        }
    }

    /// Record `name` as taken in `choice_list` without renaming it.
    ///
    /// Used for names the caller must keep verbatim; later [`ensure_unique`]
    /// calls with the same base name are suffixed from `_2`. Reserving a name
    /// that is already recorded leaves its count as is.
    ///
    /// [`ensure_unique`]: Self::ensure_unique
    pub fn reserve(&mut self, choice_list: &ChoiceListMetadata, name: &str) {
        self.issued
            .entry(choice_list.id)
            .or_default()
            .entry(name.to_string())
            .or_insert(1);
    }

    /// Names issued so far for `choice_list`, in no particular order.
    pub fn issued(&self, choice_list: MetadataId) -> impl Iterator<Item = &str> {
        self.issued
            .get(&choice_list)
            .into_iter()
            .flat_map(|names| names.keys().map(String::as_str))
    }

    /// How many times `name` has been requested as a base name in `choice_list`.
    pub fn count(&self, choice_list: MetadataId, name: &str) -> u32 {
        self.issued
            .get(&choice_list)
            .and_then(|names| names.get(name))
            .copied()
            .unwrap_or(0)
    }

    /// Number of choice lists seen.
    #[inline]
    pub fn len(&self) -> usize {
        self.issued.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }

    pub fn clear(&mut self) {
        self.issued.clear();
    }
}

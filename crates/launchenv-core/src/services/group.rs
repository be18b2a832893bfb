//! Bindings grouped by label, the shape of `VCAP_SERVICES`.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::binding::ServiceBinding;

/// Ordered mapping of label to bindings.
///
/// Labels keep first-seen order and bindings keep insertion order within a
/// label. A binding without a label is grouped under the empty string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceGroup {
    groups: Vec<(String, Vec<ServiceBinding>)>,
}

impl ServiceGroup {
    pub fn from_bindings(bindings: impl IntoIterator<Item = ServiceBinding>) -> Self {
        let mut groups: Vec<(String, Vec<ServiceBinding>)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for binding in bindings {
            let label = binding.label.clone().unwrap_or_default();
            match index.get(&label) {
                Some(&position) => groups[position].1.push(binding),
                None => {
                    index.insert(label.clone(), groups.len());
                    groups.push((label, vec![binding]));
                }
            }
        }

        Self { groups }
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&[ServiceBinding]> {
        self.groups
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, bindings)| bindings.as_slice())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(label, _)| label.as_str())
    }
}

impl Serialize for ServiceGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (label, bindings) in &self.groups {
            map.serialize_entry(label, bindings)?;
        }
        map.end()
    }
}

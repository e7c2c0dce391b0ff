//! Shallow merging of mappings

use super::iteration::each_entry;
use super::Mapping;
use serde_json::{Map, Value};

/// Copy every entry of each source into `target`, in order.
///
/// Later sources overwrite earlier ones and the target's own values.
pub fn extend<'a, M>(target: &'a mut M, sources: &[&M]) -> &'a mut M
where
    M: Mapping,
    M::Key: Clone,
    M::Value: Clone,
{
    for source in sources {
        each_entry(*source, |value, key, _| {
            target.assign(key.clone(), value.clone());
        });
    }

    target
}

/// Copy entries into `target` only for keys it does not have yet.
///
/// The first source to provide a missing key wins.
pub fn defaults<'a, M>(target: &'a mut M, sources: &[&M]) -> &'a mut M
where
    M: Mapping,
    M::Key: Clone,
    M::Value: Clone,
{
    for source in sources {
        each_entry(*source, |value, key, _| {
            if !target.has_key(key) {
                target.assign(key.clone(), value.clone());
            }
        });
    }

    target
}

/// [`defaults`] for JSON objects, where a `null` in the target also counts
/// as a missing value.
pub fn defaults_json<'a>(
    target: &'a mut Map<String, Value>,
    sources: &[&Map<String, Value>],
) -> &'a mut Map<String, Value> {
    for source in sources {
        each_entry(*source, |value, key, _| {
            if target.get(key).map_or(true, Value::is_null) {
                target.insert(key.clone(), value.clone());
            }
        });
    }

    target
}

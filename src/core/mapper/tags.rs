use std::collections::HashMap;

use crate::core::aws::{Ec2Tag, EcsTag};

/// Fold key/value pairs into a map. A key seen again overrides the earlier value.
pub fn flatten_tags<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .fold(HashMap::new(), |mut tags, (key, value)| {
            tags.insert(key.into(), value.into());
            tags
        })
}

pub fn from_ecs_tags(tags: &[EcsTag]) -> HashMap<String, String> {
    flatten_tags(tags.iter().map(|t| (t.key.as_str(), t.value.as_str())))
}

pub fn from_ec2_tags(tags: &[Ec2Tag]) -> HashMap<String, String> {
    flatten_tags(tags.iter().map(|t| (t.key.as_str(), t.value.as_str())))
}

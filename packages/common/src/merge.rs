//! Value-map merge with an explicit depth policy.
//!
//! Every partial update in the editor routes through this one utility, so
//! the merge contract — a caller patching one field must never wipe out
//! sibling fields — is enforced in exactly one place.

use serde_json::Value;
use std::collections::HashMap;

/// How far a patch reaches into existing values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeDepth {
    /// Patch keys overwrite target keys outright
    Shallow,
    /// When both sides of a key hold an object, the objects merge key-wise;
    /// anything else overwrites. Nesting below that first level overwrites.
    OneLevel,
}

/// Merge `patch` into `target`.
///
/// New keys are added, existing keys are overwritten, and sibling keys are
/// always preserved. With [`MergeDepth::OneLevel`], a key whose old and new
/// values are both objects merges those objects instead of replacing.
pub fn merge_map(target: &mut HashMap<String, Value>, patch: &HashMap<String, Value>, depth: MergeDepth) {
    for (key, patch_value) in patch {
        match (depth, target.get_mut(key), patch_value) {
            (MergeDepth::OneLevel, Some(Value::Object(existing)), Value::Object(incoming)) => {
                for (k, v) in incoming {
                    existing.insert(k.clone(), v.clone());
                }
            }
            _ => {
                target.insert(key.clone(), patch_value.clone());
            }
        }
    }
}

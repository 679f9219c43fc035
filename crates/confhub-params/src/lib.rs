//! Structural comparison of Helm parameter sets
//!
//! Partitions the union of keys from a current and a proposed flat
//! parameter mapping into added/modified/removed/unchanged buckets. Values
//! are JSON primitives of mixed type; whether `1` equals `"1"` is decided
//! by an explicit [`EqualityPolicy`] rather than implicit coercion.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::str::FromStr;
use thiserror::Error;

/// How parameter values are compared for equality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EqualityPolicy {
    /// Compare string renderings, so numeric `1` equals string `"1"`.
    /// Matches how Helm round-trips parameter overrides through text.
    #[default]
    Coerced,
    /// Compare typed JSON values exactly.
    Strict,
}

#[derive(Debug, Error)]
#[error("unknown equality policy '{0}', expected 'coerced' or 'strict'")]
pub struct PolicyParseError(String);

impl FromStr for EqualityPolicy {
    type Err = PolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "coerced" => Ok(EqualityPolicy::Coerced),
            "strict" => Ok(EqualityPolicy::Strict),
            other => Err(PolicyParseError(other.to_string())),
        }
    }
}

/// Both sides of a modified parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueChange {
    pub current: Value,
    pub proposed: Value,
}

/// Partition of two parameter mappings' keys.
///
/// Every key from either input lands in exactly one bucket. Buckets
/// iterate in sorted key order so output is deterministic.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct ParameterDiff {
    pub added: BTreeMap<String, Value>,
    pub modified: BTreeMap<String, ValueChange>,
    pub removed: BTreeMap<String, Value>,
    pub unchanged: BTreeMap<String, Value>,
}

impl ParameterDiff {
    /// True when nothing was added, removed, or modified.
    pub fn is_clean(&self) -> bool {
        self.added.is_empty() && self.modified.is_empty() && self.removed.is_empty()
    }
}

/// Render a value the way a text-based parameter store would: bare strings,
/// everything else in its JSON form.
fn coerce(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn values_equal(a: &Value, b: &Value, policy: EqualityPolicy) -> bool {
    match policy {
        EqualityPolicy::Coerced => coerce(a) == coerce(b),
        EqualityPolicy::Strict => a == b,
    }
}

/// Compare current parameters against a proposed set.
pub fn compare_parameters(
    current: &BTreeMap<String, Value>,
    proposed: &BTreeMap<String, Value>,
    policy: EqualityPolicy,
) -> ParameterDiff {
    let mut diff = ParameterDiff::default();

    for (key, proposed_value) in proposed {
        match current.get(key) {
            None => {
                diff.added.insert(key.clone(), proposed_value.clone());
            }
            Some(current_value) if values_equal(current_value, proposed_value, policy) => {
                diff.unchanged.insert(key.clone(), current_value.clone());
            }
            Some(current_value) => {
                diff.modified.insert(
                    key.clone(),
                    ValueChange {
                        current: current_value.clone(),
                        proposed: proposed_value.clone(),
                    },
                );
            }
        }
    }

    for (key, current_value) in current {
        if !proposed.contains_key(key) {
            diff.removed.insert(key.clone(), current_value.clone());
        }
    }

    diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(pairs: &[(&str, Value)]) -> BTreeMap<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_basic_partition() {
        let current = params(&[("a", json!("1")), ("b", json!("2"))]);
        let proposed = params(&[("b", json!("3")), ("c", json!("4"))]);

        let diff = compare_parameters(&current, &proposed, EqualityPolicy::Coerced);

        assert_eq!(diff.added, params(&[("c", json!("4"))]));
        assert_eq!(diff.removed, params(&[("a", json!("1"))]));
        assert!(diff.unchanged.is_empty());
        assert_eq!(
            diff.modified.get("b"),
            Some(&ValueChange {
                current: json!("2"),
                proposed: json!("3"),
            })
        );
    }

    #[test]
    fn test_buckets_partition_key_union() {
        let current = params(&[
            ("image", json!("app:1.0")),
            ("replicas", json!(2)),
            ("debug", json!(false)),
        ]);
        let proposed = params(&[
            ("image", json!("app:1.1")),
            ("replicas", json!(2)),
            ("timeout", json!(30)),
        ]);

        let diff = compare_parameters(&current, &proposed, EqualityPolicy::Coerced);

        let mut all_keys: Vec<&String> = diff
            .added
            .keys()
            .chain(diff.modified.keys())
            .chain(diff.removed.keys())
            .chain(diff.unchanged.keys())
            .collect();
        all_keys.sort();

        let mut union: Vec<&String> = current.keys().chain(proposed.keys()).collect();
        union.sort();
        union.dedup();

        assert_eq!(all_keys, union);
    }

    #[test]
    fn test_idempotence() {
        let m = params(&[("a", json!("1")), ("b", json!(2)), ("c", json!(true))]);

        let diff = compare_parameters(&m, &m, EqualityPolicy::Coerced);

        assert!(diff.is_clean());
        assert_eq!(diff.unchanged, m);
    }

    #[test]
    fn test_coerced_treats_number_and_string_equal() {
        let current = params(&[("replicas", json!(1))]);
        let proposed = params(&[("replicas", json!("1"))]);

        let diff = compare_parameters(&current, &proposed, EqualityPolicy::Coerced);
        assert!(diff.modified.is_empty());
        assert_eq!(diff.unchanged.len(), 1);
    }

    #[test]
    fn test_strict_flags_type_change() {
        let current = params(&[("replicas", json!(1))]);
        let proposed = params(&[("replicas", json!("1"))]);

        let diff = compare_parameters(&current, &proposed, EqualityPolicy::Strict);
        assert!(diff.unchanged.is_empty());
        assert_eq!(
            diff.modified.get("replicas"),
            Some(&ValueChange {
                current: json!(1),
                proposed: json!("1"),
            })
        );
    }

    #[test]
    fn test_empty_inputs() {
        let empty = BTreeMap::new();
        let diff = compare_parameters(&empty, &empty, EqualityPolicy::Coerced);
        assert_eq!(diff, ParameterDiff::default());
        assert!(diff.is_clean());
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(
            "coerced".parse::<EqualityPolicy>().unwrap(),
            EqualityPolicy::Coerced
        );
        assert_eq!(
            "strict".parse::<EqualityPolicy>().unwrap(),
            EqualityPolicy::Strict
        );
        assert!("fuzzy".parse::<EqualityPolicy>().is_err());
    }
}

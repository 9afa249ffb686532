// SPDX-License-Identifier: MIT OR Apache-2.0

//! Flat-map normalisation of raw `KEY=VALUE` lines.

use std::collections::HashMap;

/// Builds a case-normalised map from `KEY=VALUE` lines.
///
/// Lines are split at the first `=`; keys are lower-cased. Lines without a
/// separator, or with an empty key or value, are skipped. A repeated key keeps
/// its last value.
///
/// # Examples
///
/// ```
/// use hexbind::service::normalize::lines_to_map;
///
/// let map = lines_to_map(["PORT=8080", "garbage", "URL=db://x?a=b", "EMPTY="]);
/// assert_eq!(map.len(), 2);
/// assert_eq!(map["port"], "8080");
/// assert_eq!(map["url"], "db://x?a=b");
/// ```
pub fn lines_to_map<I, S>(lines: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut map = HashMap::new();
    for line in lines {
        let line = line.as_ref();
        let Some((key, value)) = line.split_once('=') else {
            tracing::trace!("Skipping line without '=' separator");
            continue;
        };
        if key.is_empty() || value.is_empty() {
            tracing::trace!("Skipping line with empty key or value");
            continue;
        }
        map.insert(key.to_lowercase(), value.to_string());
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_keys() {
        let map = lines_to_map(["Feature_Flag=true"]);
        assert_eq!(map.get("feature_flag"), Some(&"true".to_string()));
    }

    #[test]
    fn test_splits_at_first_separator() {
        let map = lines_to_map(["DSN=user=admin;password=x"]);
        assert_eq!(map["dsn"], "user=admin;password=x");
    }

    #[test]
    fn test_skips_lines_without_separator() {
        let map = lines_to_map(["# a comment", "", "JUST_A_KEY"]);
        assert!(map.is_empty());
    }

    #[test]
    fn test_skips_empty_key_or_value() {
        let map = lines_to_map(["=value", "KEY=", "="]);
        assert!(map.is_empty());
    }

    #[test]
    fn test_keeps_whitespace_values() {
        let map = lines_to_map(["TAGS=   "]);
        assert_eq!(map["tags"], "   ");
    }

    #[test]
    fn test_last_occurrence_wins() {
        let map = lines_to_map(["PORT=1", "port=2", "Port=3"]);
        assert_eq!(map.len(), 1);
        assert_eq!(map["port"], "3");
    }

    #[test]
    fn test_accepts_owned_strings() {
        let lines = vec!["A=1".to_string(), "B=2".to_string()];
        let map = lines_to_map(&lines);
        assert_eq!(map.len(), 2);
    }
}

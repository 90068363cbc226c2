//! Frequency counts of letters and longer fragments in cleaned text.

use crate::errors::ClassicCryptoError;

use itertools::Itertools;
use serde::Serialize;

use std::collections::HashMap;

/// Keeps only alphabetic characters and uppercases them.
///
/// ```
/// # use classic_crypto::stats::clean_text;
/// assert_eq!(clean_text("Hello, World! 42"), "HELLOWORLD");
/// ```
pub fn clean_text(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_uppercase)
        .collect()
}

/// How often one fragment occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FragmentCount {
    pub fragment: String,
    pub count: usize,
}

impl FragmentCount {
    /// Share of `total` in percent; `0.0` when nothing was counted.
    pub fn percentage(&self, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        100.0 * self.count as f64 / total as f64
    }
}

/// Result of [`letter_stats`]: counts in decreasing order, ties kept in order
/// of first appearance, plus the number of fragments counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FragmentStats {
    pub fragments: Vec<FragmentCount>,
    pub total: usize,
}

impl FragmentStats {
    pub fn count_of(&self, fragment: &str) -> usize {
        self.fragments
            .iter()
            .find(|f| f.fragment == fragment)
            .map_or(0, |f| f.count)
    }

    /// The first `limit` entries (all of them if there are fewer).
    pub fn most_common(&self, limit: usize) -> &[FragmentCount] {
        &self.fragments[..limit.min(self.fragments.len())]
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

/// Counts every overlapping fragment of `fragment_length` characters of the
/// cleaned `text` that starts with `starts_with` and ends with `ends_with`.
///
/// Both filters are uppercased before matching; pass `""` to disable one.
///
/// # Errors
///
/// Returns `InvalidParameters` if `fragment_length == 0`.
pub fn letter_stats(
    text: &str,
    fragment_length: usize,
    starts_with: &str,
    ends_with: &str,
) -> Result<FragmentStats, ClassicCryptoError> {
    if fragment_length == 0 {
        return Err(ClassicCryptoError::InvalidParameters(
            "fragment length must be at least 1".into(),
        ));
    }

    let clean: Vec<char> = clean_text(text).chars().collect();
    let starts_with = starts_with.to_uppercase();
    let ends_with = ends_with.to_uppercase();

    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut fragments: Vec<FragmentCount> = Vec::new();
    let mut total = 0;

    for window in clean.windows(fragment_length) {
        let fragment: String = window.iter().collect();
        if !fragment.starts_with(&starts_with) || !fragment.ends_with(&ends_with) {
            continue;
        }

        match positions.get(&fragment) {
            Some(&i) => fragments[i].count += 1,
            None => {
                positions.insert(fragment.clone(), fragments.len());
                fragments.push(FragmentCount { fragment, count: 1 });
            }
        }
        total += 1;
    }

    let fragments = fragments
        .into_iter()
        .sorted_by(|a, b| b.count.cmp(&a.count))
        .collect();

    Ok(FragmentStats { fragments, total })
}

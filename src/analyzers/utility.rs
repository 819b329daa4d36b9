use std::collections::{BTreeMap, HashMap};

use crate::analyzers::types::Counted;

/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Most frequent value and its count. Ties go to the smallest value.
/// Returns `None` for empty input.
pub fn mode<T: Ord>(values: impl IntoIterator<Item = T>) -> Option<Counted<T>> {
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_default() += 1;
    }

    let mut best: Option<Counted<T>> = None;
    for (value, count) in counts {
        if best.as_ref().is_none_or(|b| count > b.count) {
            best = Some(Counted { value, count });
        }
    }
    best
}

/// Occurrence counts, highest first. Equal counts keep first-seen order.
pub fn value_counts<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<Counted<String>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<Counted<String>> = Vec::new();

    for v in values {
        match index.get(v) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(v, counts.len());
                counts.push(Counted {
                    value: v.to_string(),
                    count: 1,
                });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

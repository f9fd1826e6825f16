//! Running-mean grouping.
//!
//! Every view in the dashboard is some variant of "group rows by a key and
//! average one column". Groups are kept in a `BTreeMap` so output order is
//! the key order (years ascending, neighborhoods alphabetical).

use std::collections::BTreeMap;

/// Running sum and count for one group
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeanAccumulator {
    pub sum: f64,
    pub count: usize,
}

impl MeanAccumulator {
    /// Add a value; missing values are skipped entirely
    pub fn push(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.sum += v;
            self.count += 1;
        }
    }

    /// Mean of the pushed values, `None` if nothing was pushed
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}

/// Group items by key and average one optional value per item
///
/// **Public** - the core of every aggregate query
///
/// # Arguments
/// * `items` - rows to aggregate
/// * `key` - grouping key extractor
/// * `value` - column extractor; `None` rows count toward neither sum nor count
///
/// # Returns
/// `(key, mean)` pairs in ascending key order. Groups with no usable
/// values are omitted.
pub fn group_mean<I, T, K, FK, FV>(items: I, key: FK, value: FV) -> Vec<(K, f64)>
where
    I: IntoIterator<Item = T>,
    K: Ord,
    FK: Fn(&T) -> K,
    FV: Fn(&T) -> Option<f64>,
{
    let mut groups: BTreeMap<K, MeanAccumulator> = BTreeMap::new();

    for item in items {
        let v = value(&item);
        groups.entry(key(&item)).or_default().push(v);
    }

    groups
        .into_iter()
        .filter_map(|(k, acc)| acc.mean().map(|m| (k, m)))
        .collect()
}

/// Round to two decimals, exact halves go to the even cent
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulator_skips_missing() {
        let mut acc = MeanAccumulator::default();
        acc.push(Some(100.0));
        acc.push(None);
        acc.push(Some(200.0));

        assert_eq!(acc.count, 2);
        assert_eq!(acc.mean(), Some(150.0));
    }

    #[test]
    fn test_empty_accumulator_has_no_mean() {
        assert_eq!(MeanAccumulator::default().mean(), None);
    }

    #[test]
    fn test_group_mean_orders_by_key() {
        let rows = vec![(2012, Some(3.0)), (2010, Some(1.0)), (2012, Some(5.0)), (2011, None)];
        let means = group_mean(rows, |r| r.0, |r| r.1);

        // 2011 has no usable values and drops out
        assert_eq!(means, vec![(2010, 1.0), (2012, 4.0)]);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.005_000_1), 1.01);
        assert_eq!(round2(366.020_71), 366.02);
        assert_eq!(round2(-2.345_1), -2.35);
        assert_eq!(round2(10.0), 10.0);
    }

    #[test]
    fn test_round2_ties_to_even() {
        // eighths are exact in binary, so these are true half-cent ties
        assert_eq!(round2(1009.125), 1009.12);
        assert_eq!(round2(1384.125), 1384.12);
        assert_eq!(round2(1009.375), 1009.38);
        assert_eq!(round2(-0.125), -0.12);
    }
}

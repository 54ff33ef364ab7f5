pub struct StatsHelper;

impl StatsHelper {
    /// Smallest and largest value, or `None` for an empty slice.
    pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
        let (first, rest) = values.split_first()?;
        Some(rest.iter().fold((*first, *first), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        }))
    }

    pub fn success_rate(successes: u64, total: u64) -> f64 {
        if total == 0 {
            return 0.0;
        }
        successes as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_empty_sequence_yields_none() {
        assert_eq!(StatsHelper::min_max(&[]), None);
    }

    #[test]
    fn min_max_handles_single_and_unordered_values() {
        assert_eq!(StatsHelper::min_max(&[4.0]), Some((4.0, 4.0)));
        assert_eq!(
            StatsHelper::min_max(&[2500.0, 0.0, 15600.0, 525.0]),
            Some((0.0, 15600.0))
        );
    }

    #[test]
    fn success_rate_guards_zero_total() {
        assert_eq!(StatsHelper::success_rate(0, 0), 0.0);
        assert_eq!(StatsHelper::success_rate(3, 4), 0.75);
    }
}

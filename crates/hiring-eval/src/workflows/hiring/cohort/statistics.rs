use super::views::ScoreStatistics;

/// Descriptive statistics with population standard deviation.
///
/// Returns `None` for an empty slice so callers cannot average nothing.
pub(crate) fn describe(values: &[f64]) -> Option<ScoreStatistics> {
    if values.is_empty() {
        return None;
    }

    let count = values.len() as f64;
    let mean = values.iter().sum::<f64>() / count;
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / count;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Some(ScoreStatistics {
        mean,
        std_dev: variance.sqrt(),
        min,
        max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_statistics() {
        assert!(describe(&[]).is_none());
    }

    #[test]
    fn uses_population_standard_deviation() {
        let stats = describe(&[0.2, 0.4, 0.6, 0.8]).expect("non-empty");
        assert!((stats.mean - 0.5).abs() < 1e-12);
        assert!((stats.std_dev - 0.05_f64.sqrt()).abs() < 1e-12);
        assert_eq!(stats.min, 0.2);
        assert_eq!(stats.max, 0.8);
    }
}

//! Maximum-weight independent set on a line
//!
//! Given weights `w[0..n]`, pick indices with no two adjacent so that the
//! total weight is maximal. Both versions fill the same table:
//! `best[0] = w[0]`, `best[1] = max(w[0], w[1])` and
//! `best[i] = max(best[i - 1], best[i - 2] + w[i])`.
//!
//! Both return `None` when a partial sum leaves the `i32` range.

/// Bottom-up table fill, smallest prefix first
pub fn max_independent_set_bottom_up(weights: &[i32]) -> Option<i32> {
    let n = weights.len();
    if n == 0 {
        return Some(0);
    }

    let mut best = vec![0; n];
    best[0] = weights[0];
    if n > 1 {
        best[1] = best[0].max(weights[1]);
        for i in 2..n {
            best[i] = best[i - 1].max(best[i - 2].checked_add(weights[i])?);
        }
    }

    Some(best[n - 1])
}

/// Memoised recursion from the last element down
///
/// Recursion depth grows with the input length.
pub fn max_independent_set_top_down(weights: &[i32]) -> Option<i32> {
    if weights.is_empty() {
        return Some(0);
    }

    let mut memo: Vec<Option<i32>> = vec![None; weights.len()];
    best_prefix(weights, &mut memo, weights.len() - 1)
}

/// Best weight for `weights[0..=k]`
fn best_prefix(weights: &[i32], memo: &mut [Option<i32>], k: usize) -> Option<i32> {
    if let Some(value) = memo[k] {
        return Some(value);
    }

    let value = match k {
        0 => weights[0],
        1 => weights[0].max(weights[1]),
        _ => {
            let skip = best_prefix(weights, memo, k - 1)?;
            let take = best_prefix(weights, memo, k - 2)?.checked_add(weights[k])?;
            skip.max(take)
        }
    };

    memo[k] = Some(value);
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLES: &[(&[i32], i32)] = &[
        (&[], 0),
        (&[11, 10], 11),
        (&[100, 120, 21], 121),
        (&[53, 77, 102, 76, 65, 1, 1, 1], 178),
    ];

    #[test]
    fn test_bottom_up_examples() {
        for &(weights, expected) in EXAMPLES {
            assert_eq!(max_independent_set_bottom_up(weights), Some(expected), "{weights:?}");
        }
    }

    #[test]
    fn test_top_down_examples() {
        for &(weights, expected) in EXAMPLES {
            assert_eq!(max_independent_set_top_down(weights), Some(expected), "{weights:?}");
        }
    }

    #[test]
    fn test_single_element() {
        assert_eq!(max_independent_set_bottom_up(&[7]), Some(7));
        assert_eq!(max_independent_set_top_down(&[7]), Some(7));
    }

    #[test]
    fn test_approaches_agree_on_every_prefix() {
        let weights = [53, 77, 102, 76, 65, 1, 1, 1, 90, 0, 3, 44, 44, 12];
        for len in 0..=weights.len() {
            let prefix = &weights[..len];
            assert_eq!(
                max_independent_set_bottom_up(prefix),
                max_independent_set_top_down(prefix),
                "prefix of length {len}"
            );
        }
    }

    #[test]
    fn test_alternating_weights() {
        let weights = [1, 9, 1, 9, 1, 9];
        assert_eq!(max_independent_set_bottom_up(&weights), Some(27));
    }

    #[test]
    fn test_sum_overflow_returns_none() {
        let weights = [i32::MAX, 0, i32::MAX];
        assert_eq!(max_independent_set_bottom_up(&weights), None);
        assert_eq!(max_independent_set_top_down(&weights), None);

        // Large but representable
        let weights = [i32::MAX - 1, 5, 1];
        assert_eq!(max_independent_set_bottom_up(&weights), Some(i32::MAX));
        assert_eq!(max_independent_set_top_down(&weights), Some(i32::MAX));
    }
}

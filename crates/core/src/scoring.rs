//! Scoring module - points awarded for a purge
//!
//! A purge of `k` balls earns the base `MIN_LINE_SIZE` points plus a growing
//! bonus for every ball beyond the minimum:
//!
//! ```text
//! score = 5 + sum over i in 6..=k of (i - 5) * (i - 4)
//! ```
//!
//! | Purged | Points |
//! |--------|--------|
//! | 5 | 5 |
//! | 6 | 7 |
//! | 7 | 13 |
//! | 8 | 25 |
//! | 9 | 45 |

use crate::types::MIN_LINE_SIZE;

/// Points for purging `purged` balls in one pass. Zero when nothing was purged.
pub fn calculate_purge_score(purged: usize) -> u32 {
    if purged == 0 {
        return 0;
    }
    let base = MIN_LINE_SIZE as u32;
    ((MIN_LINE_SIZE + 1)..=purged)
        .map(|i| {
            let extra = (i - MIN_LINE_SIZE) as u32;
            extra * (extra + 1)
        })
        .fold(base, u32::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_purge_no_points() {
        assert_eq!(calculate_purge_score(0), 0);
    }

    #[test]
    fn test_purge_scores() {
        assert_eq!(calculate_purge_score(5), 5);
        assert_eq!(calculate_purge_score(6), 7);
        assert_eq!(calculate_purge_score(7), 13);
        assert_eq!(calculate_purge_score(8), 25);
        assert_eq!(calculate_purge_score(9), 45);
    }

    #[test]
    fn test_score_grows_with_purge_size() {
        let mut last = calculate_purge_score(5);
        for k in 6..40 {
            let score = calculate_purge_score(k);
            assert!(score > last, "k={} score={} last={}", k, score, last);
            last = score;
        }
    }
}

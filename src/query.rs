//! Extremal queries over populated frequency tables
//!
//! Pure functions of the count slices they are given; the analyzer
//! owns the tables and delegates here. All queries are total over
//! zero-filled tables: every bucket ties at 0 and index 0 wins.

/// Index of the maximum count. When several buckets share the maximum,
/// the lowest index wins: the running best is only replaced on a
/// strictly greater count.
pub fn busiest_bucket(counts: &[u64]) -> usize {
    let mut busiest = 0;
    for (index, &count) in counts.iter().enumerate().skip(1) {
        if count > counts[busiest] {
            busiest = index;
        }
    }
    busiest
}

/// Index of the minimum count, lowest index winning ties.
pub fn quietest_bucket(counts: &[u64]) -> usize {
    let mut quietest = 0;
    for (index, &count) in counts.iter().enumerate().skip(1) {
        if count < counts[quietest] {
            quietest = index;
        }
    }
    quietest
}

/// Starting index of the contiguous two-bucket window with the largest
/// combined count. The window does not wrap: for a 24-hour table only
/// the 23 pairs (0,1)..(22,23) are considered. Lowest start index wins
/// ties.
pub fn busiest_two_hour_window(counts: &[u64]) -> usize {
    let mut best_start = 0;
    let mut best_sum = 0;
    for start in 0..counts.len().saturating_sub(1) {
        let sum = counts[start] + counts[start + 1];
        if sum > best_sum {
            best_sum = sum;
            best_start = start;
        }
    }
    best_start
}

/// Every index holding the global maximum count, in ascending order.
///
/// Two passes: the first fixes the true maximum value, the second
/// collects the indices that match it. Collecting while the maximum
/// can still be reassigned would drop earlier ties.
pub fn all_tied_maxima(counts: &[u64]) -> Vec<usize> {
    let max = counts[busiest_bucket(counts)];
    counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count == max)
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busiest_bucket_simple_max() {
        let counts = [1, 7, 3, 7, 2];
        assert_eq!(busiest_bucket(&counts), 1);
    }

    #[test]
    fn test_busiest_bucket_tie_returns_first() {
        let mut counts = [0u64; 24];
        counts[0] = 5;
        counts[1] = 5;
        counts[2] = 3;
        assert_eq!(busiest_bucket(&counts), 0);
    }

    #[test]
    fn test_quietest_bucket_tie_returns_first() {
        let counts = [4, 1, 9, 1, 6];
        assert_eq!(quietest_bucket(&counts), 1);
    }

    #[test]
    fn test_all_zero_table_returns_index_zero() {
        let counts = [0u64; 24];
        assert_eq!(busiest_bucket(&counts), 0);
        assert_eq!(quietest_bucket(&counts), 0);
        assert_eq!(busiest_two_hour_window(&counts), 0);
    }

    #[test]
    fn test_two_hour_window_finds_best_pair() {
        let mut counts = [0u64; 24];
        counts[0] = 1;
        counts[1] = 2;
        counts[2] = 3;
        counts[3] = 4;
        // (2,3) sums to 7, beating (0,1)=3 and (1,2)=5
        assert_eq!(busiest_two_hour_window(&counts), 2);
    }

    #[test]
    fn test_two_hour_window_does_not_wrap() {
        let mut counts = [0u64; 24];
        counts[23] = 100;
        counts[0] = 100;
        counts[10] = 60;
        counts[11] = 60;
        // (23,0) would sum to 200 but wrapping is not considered
        assert_eq!(busiest_two_hour_window(&counts), 10);
    }

    #[test]
    fn test_two_hour_window_tie_returns_first() {
        let mut counts = [0u64; 24];
        counts[4] = 3;
        counts[5] = 3;
        counts[8] = 3;
        counts[9] = 3;
        assert_eq!(busiest_two_hour_window(&counts), 4);
    }

    #[test]
    fn test_all_tied_maxima_single_winner() {
        let counts = [1, 9, 3];
        assert_eq!(all_tied_maxima(&counts), vec![1]);
    }

    #[test]
    fn test_all_tied_maxima_collects_every_tie_ascending() {
        let mut counts = [0u64; 24];
        counts[2] = 8;
        counts[7] = 8;
        counts[21] = 8;
        counts[5] = 4;
        assert_eq!(all_tied_maxima(&counts), vec![2, 7, 21]);
    }

    #[test]
    fn test_all_tied_maxima_late_maximum_does_not_hide_early_ties() {
        // The maximum sits at index 0; a naive single pass seeded with
        // index 0's count and reseeded mid-scan would misreport this.
        let counts = [9, 9, 1, 9];
        assert_eq!(all_tied_maxima(&counts), vec![0, 1, 3]);
    }

    #[test]
    fn test_all_tied_maxima_all_zero() {
        let counts = [0u64; 4];
        assert_eq!(all_tied_maxima(&counts), vec![0, 1, 2, 3]);
    }
}

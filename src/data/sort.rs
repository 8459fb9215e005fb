use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Sort algorithm selection
// ---------------------------------------------------------------------------

/// Which comparison sort the detector runs. All produce the same ascending
/// order; they differ only in cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortAlgorithm {
    /// Exchange sort, O(n²).
    Bubble,
    /// Selection sort, O(n²).
    Selection,
    /// `slice::sort_unstable_by`, O(n log n).
    #[default]
    Standard,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 3] = [
        SortAlgorithm::Standard,
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
    ];

    /// Sort `data` ascending according to `cmp`.
    pub fn sort_by<T, F>(self, data: &mut [T], cmp: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            SortAlgorithm::Bubble => bubble_sort_by(data, cmp),
            SortAlgorithm::Selection => selection_sort_by(data, cmp),
            SortAlgorithm::Standard => data.sort_unstable_by(cmp),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortAlgorithm::Bubble => write!(f, "Bubble sort"),
            SortAlgorithm::Selection => write!(f, "Selection sort"),
            SortAlgorithm::Standard => write!(f, "Standard sort"),
        }
    }
}

// ---------------------------------------------------------------------------
// O(n²) algorithms
// ---------------------------------------------------------------------------

/// Bubble sort: each pass swaps adjacent out-of-order pairs, carrying the
/// largest remaining element to the end, then shrinks the window by one.
pub fn bubble_sort_by<T, F>(data: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = data.len();
    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            if cmp(&data[j], &data[j + 1]) == Ordering::Greater {
                data.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Selection sort: move the minimum of the unsorted suffix to its front.
pub fn selection_sort_by<T, F>(data: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = data.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            if cmp(&data[j], &data[min]) == Ordering::Less {
                min = j;
            }
        }
        data.swap(i, min);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;

    fn random_vec(len: usize, seed: u64) -> Vec<i64> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..len).map(|_| rng.gen_range(-500..500)).collect()
    }

    #[test]
    fn test_empty_and_single() {
        for algo in SortAlgorithm::ALL {
            let mut empty: Vec<i64> = vec![];
            algo.sort_by(&mut empty, i64::cmp);
            assert!(empty.is_empty());

            let mut one = vec![42];
            algo.sort_by(&mut one, i64::cmp);
            assert_eq!(one, vec![42]);
        }
    }

    #[test]
    fn test_reverse_input() {
        for algo in SortAlgorithm::ALL {
            let mut data: Vec<i64> = (0..100).rev().collect();
            algo.sort_by(&mut data, i64::cmp);
            assert_eq!(data, (0..100).collect::<Vec<_>>(), "{algo}");
        }
    }

    #[test]
    fn test_algorithms_agree_on_random_input() {
        for seed in 0..10 {
            let data = random_vec(200, seed);
            let mut expected = data.clone();
            expected.sort();

            let mut bubble = data.clone();
            bubble_sort_by(&mut bubble, i64::cmp);
            let mut selection = data.clone();
            selection_sort_by(&mut selection, i64::cmp);

            assert_eq!(bubble, expected);
            assert_eq!(selection, expected);
        }
    }

    #[test]
    fn test_duplicates() {
        let mut data = vec![3, 1, 3, 2, 1];
        selection_sort_by(&mut data, i64::cmp);
        assert_eq!(data, vec![1, 1, 2, 3, 3]);
        assert!(data.is_sorted());
    }

    #[test]
    fn test_float_total_order() {
        let mut data = vec![2.5, -0.0, f64::NAN, 0.0, -1.0];
        bubble_sort_by(&mut data, f64::total_cmp);
        assert_eq!(data[0], -1.0);
        assert!(data[1].is_sign_negative() && data[1] == 0.0);
        assert_eq!(data[3], 2.5);
        assert!(data[4].is_nan());
    }
}

use std::collections::HashMap;

use crate::models::ItemId;

/// Pearson correlation between two rating vectors over their common items
///
/// Returns 0.0 when the vectors share no items, or when either side has zero
/// variance over the shared items (every common item rated identically).
pub fn pearson(ratings_a: &HashMap<ItemId, f64>, ratings_b: &HashMap<ItemId, f64>) -> f64 {
    // Iterate the smaller vector and probe the larger one
    let (small, large, swapped) = if ratings_a.len() <= ratings_b.len() {
        (ratings_a, ratings_b, false)
    } else {
        (ratings_b, ratings_a, true)
    };

    let mut n = 0usize;
    let (mut sum_a, mut sum_b) = (0.0, 0.0);
    let (mut sum_a2, mut sum_b2) = (0.0, 0.0);
    let mut sum_ab = 0.0;

    for (item, &x) in small {
        let Some(&y) = large.get(item) else {
            continue;
        };
        let (a, b) = if swapped { (y, x) } else { (x, y) };

        n += 1;
        sum_a += a;
        sum_b += b;
        sum_a2 += a * a;
        sum_b2 += b * b;
        sum_ab += a * b;
    }

    if n == 0 {
        return 0.0;
    }

    let n = n as f64;
    let numerator = sum_ab - (sum_a * sum_b / n);
    // Rounding can leave a zero variance slightly negative
    let variance_a = (sum_a2 - sum_a * sum_a / n).max(0.0);
    let variance_b = (sum_b2 - sum_b * sum_b / n).max(0.0);
    let denominator = variance_a.sqrt() * variance_b.sqrt();

    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

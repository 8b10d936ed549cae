/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Median selection networks for 3x3 and 5x5 windows
//!
//! A network is a fixed sequence of compare-exchange steps, so it has no
//! branches and works the same on a single sample or on a whole vector of
//! lanes, as long as the type implements [`MinMax`].
use crate::traits::MinMax;

/// Compare-exchange steps selecting the median of 25 values.
///
/// After every pair `(a, b)` has been applied as `w[a] = min, w[b] = max`,
/// index 12 holds the median.
#[rustfmt::skip]
const MEDIAN25_NETWORK: [(u8, u8); 99] = [
    (0, 1), (3, 4), (2, 4), (2, 3), (6, 7), (5, 7), (5, 6), (9, 10), (8, 10), (8, 9),
    (12, 13), (11, 13), (11, 12), (15, 16), (14, 16), (14, 15), (18, 19), (17, 19), (17, 18), (21, 22),
    (20, 22), (20, 21), (23, 24), (2, 5), (3, 6), (0, 6), (0, 3), (4, 7), (1, 7), (1, 4),
    (11, 14), (8, 14), (8, 11), (12, 15), (9, 15), (9, 12), (13, 16), (10, 16), (10, 13), (20, 23),
    (17, 23), (17, 20), (21, 24), (18, 24), (18, 21), (19, 22), (8, 17), (9, 18), (0, 18), (0, 9),
    (10, 19), (1, 19), (1, 10), (11, 20), (2, 20), (2, 11), (12, 21), (3, 21), (3, 12), (13, 22),
    (4, 22), (4, 13), (14, 23), (5, 23), (5, 14), (15, 24), (6, 24), (6, 15), (7, 16), (7, 19),
    (13, 21), (15, 23), (7, 13), (7, 15), (1, 9), (3, 11), (5, 17), (11, 17), (9, 17), (4, 10),
    (6, 12), (7, 14), (4, 6), (4, 7), (12, 14), (10, 14), (6, 7), (10, 12), (6, 10), (6, 17),
    (12, 17), (7, 17), (7, 10), (12, 18), (7, 12), (10, 18), (12, 20), (10, 20), (10, 12),
];

#[inline(always)]
fn compare_exchange<V: MinMax>(window: &mut [V], a: usize, b: usize) {
    let (x, y) = (window[a], window[b]);
    window[a] = x.minimum(y);
    window[b] = x.maximum(y);
}

/// Sort three values ascending
#[inline(always)]
pub fn sort3<V: MinMax>(a: V, b: V, c: V) -> [V; 3] {
    let (a, b) = (a.minimum(b), a.maximum(b));
    let (b, c) = (b.minimum(c), b.maximum(c));
    let (a, b) = (a.minimum(b), a.maximum(b));
    [a, b, c]
}

/// Median of three values
#[inline(always)]
pub fn median3<V: MinMax>(a: V, b: V, c: V) -> V {
    a.minimum(b).maximum(a.maximum(b).minimum(c))
}

/// Median of a 3x3 window given as three rows, each already sorted
///
/// The median is the median of the largest row minimum,
/// the median of the row medians and the smallest row maximum.
#[inline(always)]
pub fn median9_presorted<V: MinMax>(top: [V; 3], middle: [V; 3], bottom: [V; 3]) -> V {
    let low = top[0].maximum(middle[0]).maximum(bottom[0]);
    let mid = median3(top[1], middle[1], bottom[1]);
    let high = top[2].minimum(middle[2]).minimum(bottom[2]);

    median3(low, mid, high)
}

/// Median of nine values, in row major order
#[inline(always)]
pub fn median9<V: MinMax>(window: [V; 9]) -> V {
    median9_presorted(
        sort3(window[0], window[1], window[2]),
        sort3(window[3], window[4], window[5]),
        sort3(window[6], window[7], window[8])
    )
}

/// Median of twenty five values, in row major order
#[inline(always)]
pub fn median25<V: MinMax>(mut window: [V; 25]) -> V {
    for &(a, b) in &MEDIAN25_NETWORK {
        compare_exchange(&mut window, usize::from(a), usize::from(b));
    }
    window[12]
}

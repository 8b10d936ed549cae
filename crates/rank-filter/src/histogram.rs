/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Sliding histogram median for 8 and 16 bit integer samples
//!
//! Keeps a count of every value inside the window plus a cursor on the
//! current median and the number of samples below it. Sliding the window
//! one column only touches `mask_height` counts, after which the cursor is
//! walked to the new median. The cost per pixel no longer depends on the mask
//! width, which is what makes large masks affordable.
use std::marker::PhantomData;

use rank_image::geometry::Size;
use rank_image::plane::{PlaneView, PlaneViewMut};

use crate::traits::BoundedElement;

/// Value counts of one window plus a cursor on its median
///
/// After [`seek_median`](Self::seek_median) or
/// [`rebalance`](Self::rebalance), `count_below_median <= area / 2` and
/// `count_below_median + count_at_median >= (area + 1) / 2`.
pub struct RankHistogram<T: BoundedElement> {
    counts:             Vec<u32>,
    median:             usize,
    count_below_median: usize,
    half:               usize,
    half_exact:         usize,
    _marker:            PhantomData<T>
}

impl<T: BoundedElement> RankHistogram<T> {
    /// An empty histogram for windows of `area` samples
    pub fn new(area: usize) -> RankHistogram<T> {
        RankHistogram {
            counts:             vec![0; T::BUCKETS],
            median:             0,
            count_below_median: 0,
            half:               area / 2,
            half_exact:         (area + 1) / 2,
            _marker:            PhantomData
        }
    }

    #[inline(always)]
    pub fn insert(&mut self, value: T) {
        let bucket = value.to_bucket();
        self.counts[bucket] += 1;

        if bucket < self.median {
            self.count_below_median += 1;
        }
    }

    /// Remove a value previously inserted
    #[inline(always)]
    pub fn remove(&mut self, value: T) {
        let bucket = value.to_bucket();
        debug_assert!(self.counts[bucket] > 0, "removing a value that was never inserted");
        self.counts[bucket] -= 1;

        if bucket < self.median {
            self.count_below_median -= 1;
        }
    }

    /// Find the median by scanning the table from the smallest value
    pub fn seek_median(&mut self) {
        let mut sum = 0;

        for (bucket, &count) in self.counts.iter().enumerate() {
            let count = count as usize;

            if sum + count >= self.half_exact {
                self.median = bucket;
                self.count_below_median = sum;
                return;
            }
            sum += count;
        }
    }

    /// Walk the cursor to the median after some inserts and removes
    pub fn rebalance(&mut self) {
        if self.count_below_median > self.half {
            while self.count_below_median > self.half {
                self.median -= 1;
                self.count_below_median -= self.counts[self.median] as usize;
            }
        } else {
            while self.count_below_median + (self.counts[self.median] as usize) < self.half_exact {
                self.count_below_median += self.counts[self.median] as usize;
                self.median += 1;
            }
        }
    }

    /// Move the cursor back to the smallest value, for an empty table
    pub fn reset_cursor(&mut self) {
        debug_assert!(self.counts.iter().all(|&c| c == 0));
        self.median = 0;
        self.count_below_median = 0;
    }

    pub fn median(&self) -> T {
        T::from_bucket(self.median)
    }

    pub fn count_below_median(&self) -> usize {
        self.count_below_median
    }

    pub fn count_at_median(&self) -> usize {
        self.counts[self.median] as usize
    }
}

/// Median of a padded interior using a sliding histogram
///
/// `src` must be the destination size grown by `mask - 1` in both
/// directions. Each destination row starts from a freshly counted window and
/// slides right one column at a time.
///
/// # Panics
/// If `src` has the wrong size for `dst` and `mask`
pub fn sliding_histogram_median<T: BoundedElement>(
    src: &PlaneView<'_, T>, dst: &mut PlaneViewMut<'_, T>, mask: Size
) {
    let (mask_w, mask_h) = (mask.width, mask.height);

    assert!(
        src.width() + 1 == dst.width() + mask_w && src.height() + 1 == dst.height() + mask_h,
        "source is not the padded destination"
    );
    if dst.width() == 0 || dst.height() == 0 {
        return;
    }
    let last = dst.width() - 1;
    let mut histogram = RankHistogram::<T>::new(mask.area());

    for y in 0..dst.height() {
        let rows = y..y + mask_h;

        for source_y in rows.clone() {
            for &value in &src.row(source_y)[..mask_w] {
                histogram.insert(value);
            }
        }
        histogram.seek_median();

        let out = dst.row_mut(y);
        out[0] = histogram.median();

        for (x, pixel) in out.iter_mut().enumerate().skip(1) {
            for source_y in rows.clone() {
                let row = src.row(source_y);
                histogram.remove(row[x - 1]);
                histogram.insert(row[x + mask_w - 1]);
            }
            histogram.rebalance();
            *pixel = histogram.median();
        }

        // empty the table for the next row
        for source_y in rows {
            for &value in &src.row(source_y)[last..last + mask_w] {
                histogram.remove(value);
            }
        }
        histogram.reset_cursor();
    }
}

/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The generic median: gather, sort, take the middle.
//!
//! Works for every mask shape and element type, and is the only kernel that
//! understands clipped windows, so it also handles the image border for the
//! faster kernels.
use rank_image::geometry::{Point, Size};
use rank_image::plane::{PlaneView, PlaneViewMut};

use crate::traits::MedianElement;
use crate::window::WindowSampler;

/// Median filter `dst` from `src`
///
/// Destination pixel `(x, y)` receives the median of the window centred on
/// source pixel `(origin.x + x, origin.y + y)`. Windows are clipped to the
/// source plane, with `n` samples gathered the output is the sorted element
/// at `n / 2`.
///
/// `scratch` is reused between pixels, pass the same vector to avoid
/// reallocating for every call.
pub fn generic_median<T: MedianElement>(
    src: &PlaneView<'_, T>, dst: &mut PlaneViewMut<'_, T>, mask: Size, anchor: Point,
    origin: Point, scratch: &mut Vec<T>
) {
    let sampler = WindowSampler::new(*src, mask, anchor);
    scratch.reserve(mask.area());

    for y in 0..dst.height() {
        let out = dst.row_mut(y);

        for (x, pixel) in out.iter_mut().enumerate() {
            let count = sampler.gather_into(origin.x + x, origin.y + y, scratch);

            if count == 0 {
                // centre outside the source, nothing to pick
                continue;
            }
            T::sort_window(scratch);
            *pixel = scratch[count / 2];
        }
    }
}

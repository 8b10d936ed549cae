/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Network medians for 3x3 and 5x5 masks over whole planes
//!
//! The output is walked in vertical strips as wide as a vector register.
//! Moving one row down only brings in one new source row, the rows already
//! loaded (and for 3x3 already sorted) are reused.
//!
//! Columns left over after the last full strip are processed with the
//! scalar element type, which is a vector with a single lane.
//!
//! Both drivers expect a padded interior: `src` is the destination size
//! grown by the mask size minus one in each direction, so every window is
//! complete.
use rank_image::plane::{PlaneView, PlaneViewMut};

use crate::network::{median25, median9_presorted, sort3};
use crate::traits::{MedianElement, MinMax};

pub mod portable;
pub mod sse2;

/// A group of samples processed together
pub trait VectorLanes<T>: MinMax {
    /// Number of samples in one group
    const LANES: usize;

    /// Load the first `LANES` samples of `src`
    ///
    /// # Panics
    /// If `src` is shorter than `LANES`
    fn load(src: &[T]) -> Self;

    /// Store into the first `LANES` samples of `dst`
    ///
    /// # Panics
    /// If `dst` is shorter than `LANES`
    fn store(self, dst: &mut [T]);
}

macro_rules! scalar_lanes {
    ($($ty:tt),*) => {
        $(
            impl VectorLanes<$ty> for $ty {
                const LANES: usize = 1;

                #[inline(always)]
                fn load(src: &[$ty]) -> Self {
                    src[0]
                }

                #[inline(always)]
                fn store(self, dst: &mut [$ty]) {
                    dst[0] = self;
                }
            }
        )*
    };
}

scalar_lanes!(u8, i16, u16, f32);

/// Lane types picked for each element type on this target
#[cfg(all(
    feature = "sse2",
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse2"
))]
pub mod lanes {
    pub type U8Lanes = crate::batched::sse2::U8x16;
    pub type I16Lanes = crate::batched::sse2::I16x8;
    pub type U16Lanes = crate::batched::portable::Portable<u16, 8>;
    pub type F32Lanes = crate::batched::sse2::F32x4;
}

/// Lane types picked for each element type on this target
#[cfg(not(all(
    feature = "sse2",
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse2"
)))]
pub mod lanes {
    use crate::batched::portable::Portable;

    pub type U8Lanes = Portable<u8, 16>;
    pub type I16Lanes = Portable<i16, 8>;
    pub type U16Lanes = Portable<u16, 8>;
    pub type F32Lanes = Portable<f32, 4>;
}

/// Columns covered by full vector strips, the rest goes through scalar code
fn vector_columns<T: MedianElement>(width: usize, use_simd: bool) -> usize {
    if use_simd {
        width - width % <T::Lanes as VectorLanes<T>>::LANES
    } else {
        0
    }
}

/// 3x3 median of a padded interior
///
/// # Panics
/// If `src` is not exactly two samples wider and taller than `dst`
pub fn batched_median_3x3<T: MedianElement>(
    src: &PlaneView<'_, T>, dst: &mut PlaneViewMut<'_, T>, use_simd: bool
) {
    assert!(src.width() == dst.width() + 2 && src.height() == dst.height() + 2);

    if dst.height() == 0 {
        return;
    }
    let width = dst.width();
    let vector_end = vector_columns::<T>(width, use_simd);
    let step = <T::Lanes as VectorLanes<T>>::LANES;

    for x in (0..vector_end).step_by(step) {
        strip_3x3::<T, T::Lanes>(src, dst, x);
    }
    for x in vector_end..width {
        strip_3x3::<T, T>(src, dst, x);
    }
}

fn strip_3x3<T: Copy, V: VectorLanes<T>>(
    src: &PlaneView<'_, T>, dst: &mut PlaneViewMut<'_, T>, x: usize
) {
    let sorted_row = |y: usize| {
        let row = &src.row(y)[x..];
        sort3(V::load(row), V::load(&row[1..]), V::load(&row[2..]))
    };

    let mut top = sorted_row(0);
    let mut middle = sorted_row(1);

    for y in 0..dst.height() {
        let bottom = sorted_row(y + 2);

        median9_presorted(top, middle, bottom).store(&mut dst.row_mut(y)[x..]);

        top = middle;
        middle = bottom;
    }
}

/// 5x5 median of a padded interior
///
/// # Panics
/// If `src` is not exactly four samples wider and taller than `dst`
pub fn batched_median_5x5<T: MedianElement>(
    src: &PlaneView<'_, T>, dst: &mut PlaneViewMut<'_, T>, use_simd: bool
) {
    assert!(src.width() == dst.width() + 4 && src.height() == dst.height() + 4);

    if dst.height() == 0 {
        return;
    }
    let width = dst.width();
    let vector_end = vector_columns::<T>(width, use_simd);
    let step = <T::Lanes as VectorLanes<T>>::LANES;

    for x in (0..vector_end).step_by(step) {
        strip_5x5::<T, T::Lanes>(src, dst, x);
    }
    for x in vector_end..width {
        strip_5x5::<T, T>(src, dst, x);
    }
}

fn strip_5x5<T: Copy, V: VectorLanes<T>>(
    src: &PlaneView<'_, T>, dst: &mut PlaneViewMut<'_, T>, x: usize
) {
    let load_row = |y: usize| -> [V; 5] {
        let row = &src.row(y)[x..];
        [
            V::load(row),
            V::load(&row[1..]),
            V::load(&row[2..]),
            V::load(&row[3..]),
            V::load(&row[4..])
        ]
    };

    // the last slot is overwritten before it is read
    let mut rows = [load_row(0), load_row(1), load_row(2), load_row(3), load_row(0)];

    for y in 0..dst.height() {
        rows[4] = load_row(y + 4);

        let mut window = [rows[0][0]; 25];
        for (chunk, row) in window.chunks_exact_mut(5).zip(rows.iter()) {
            chunk.copy_from_slice(row);
        }
        median25(window).store(&mut dst.row_mut(y)[x..]);

        rows.rotate_left(1);
    }
}

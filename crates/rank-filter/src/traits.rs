/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits describing what the median kernels need from an element type
use rank_image::geometry::Size;
use rank_image::plane::{PlaneView, PlaneViewMut};
use rank_image::traits::ImageElement;

use crate::backend::AcceleratedBackend;
use crate::batched::{lanes, VectorLanes};
use crate::histogram::sliding_histogram_median;

/// Lane-wise minimum and maximum
///
/// This is the only operation the sorting networks need, so any type
/// implementing it, scalar or vector, can run them.
pub trait MinMax: Copy {
    fn minimum(self, other: Self) -> Self;

    fn maximum(self, other: Self) -> Self;
}

macro_rules! min_max_ord {
    ($($ty:tt),*) => {
        $(
            impl MinMax for $ty {
                #[inline(always)]
                fn minimum(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                #[inline(always)]
                fn maximum(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )*
    };
}

min_max_ord!(u8, i16, u16);

impl MinMax for f32 {
    // NaN inputs give an unspecified but non-panicking result
    #[inline(always)]
    fn minimum(self, other: Self) -> Self {
        f32::min(self, other)
    }

    #[inline(always)]
    fn maximum(self, other: Self) -> Self {
        f32::max(self, other)
    }
}

/// An element type the median filter can run on
pub trait MedianElement: ImageElement + MinMax + VectorLanes<Self> {
    /// Vector lanes used by the batched network kernels
    type Lanes: VectorLanes<Self>;

    /// Sort a gathered window in ascending order
    fn sort_window(window: &mut [Self]);

    /// Run the sliding histogram kernel over a padded interior
    ///
    /// Returns false without touching `dst` if the type has no
    /// bounded integer range.
    fn histogram_median(
        src: &PlaneView<'_, Self>, dst: &mut PlaneViewMut<'_, Self>, mask: Size
    ) -> bool;

    /// Hand a padded interior to the matching typed entry of `backend`
    fn backend_median(
        backend: &dyn AcceleratedBackend, src: &PlaneView<'_, Self>,
        dst: &mut PlaneViewMut<'_, Self>, mask: Size
    ) -> bool;
}

/// An integer element with a small enough range to be counted in a table
pub trait BoundedElement: MedianElement {
    /// Number of distinct values, one histogram bucket each
    const BUCKETS: usize;

    /// Bucket index of `self`, increasing with the value
    fn to_bucket(self) -> usize;

    /// Inverse of [`to_bucket`](Self::to_bucket)
    fn from_bucket(bucket: usize) -> Self;
}

macro_rules! median_integer {
    ($ty:tt, $lanes:ty, $backend_fn:ident, $buckets:expr, $offset:expr) => {
        impl MedianElement for $ty {
            type Lanes = $lanes;

            fn sort_window(window: &mut [Self]) {
                window.sort_unstable();
            }

            fn histogram_median(
                src: &PlaneView<'_, Self>, dst: &mut PlaneViewMut<'_, Self>, mask: Size
            ) -> bool {
                sliding_histogram_median::<$ty>(src, dst, mask);
                true
            }

            fn backend_median(
                backend: &dyn AcceleratedBackend, src: &PlaneView<'_, Self>,
                dst: &mut PlaneViewMut<'_, Self>, mask: Size
            ) -> bool {
                backend.$backend_fn(src, dst, mask)
            }
        }

        impl BoundedElement for $ty {
            const BUCKETS: usize = $buckets;

            #[inline(always)]
            fn to_bucket(self) -> usize {
                (i32::from(self) + $offset) as usize
            }

            #[inline(always)]
            fn from_bucket(bucket: usize) -> Self {
                (bucket as i32 - $offset) as $ty
            }
        }
    };
}

median_integer!(u8, lanes::U8Lanes, median_u8, 256, 0);
median_integer!(i16, lanes::I16Lanes, median_i16, 65536, 32768);
median_integer!(u16, lanes::U16Lanes, median_u16, 65536, 0);

impl MedianElement for f32 {
    type Lanes = lanes::F32Lanes;

    fn sort_window(window: &mut [Self]) {
        window.sort_unstable_by(f32::total_cmp);
    }

    fn histogram_median(
        _src: &PlaneView<'_, Self>, _dst: &mut PlaneViewMut<'_, Self>, _mask: Size
    ) -> bool {
        false
    }

    fn backend_median(
        backend: &dyn AcceleratedBackend, src: &PlaneView<'_, Self>,
        dst: &mut PlaneViewMut<'_, Self>, mask: Size
    ) -> bool {
        backend.median_f32(src, dst, mask)
    }
}

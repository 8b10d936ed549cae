/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! SSE2 lanes for 8 bit, signed 16 bit and float samples
//!
//! Only compiled when SSE2 is part of the target, which is always the case for
//! x86_64, so no runtime detection is needed.
#![cfg(all(
    feature = "sse2",
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse2"
))]

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use crate::batched::VectorLanes;
use crate::traits::MinMax;

/// Sixteen unsigned bytes
#[derive(Copy, Clone, Debug)]
pub struct U8x16(__m128i);

/// Eight signed 16 bit integers
#[derive(Copy, Clone, Debug)]
pub struct I16x8(__m128i);

/// Four single precision floats
#[derive(Copy, Clone, Debug)]
pub struct F32x4(__m128);

impl MinMax for U8x16 {
    #[inline(always)]
    fn minimum(self, other: Self) -> Self {
        unsafe { U8x16(_mm_min_epu8(self.0, other.0)) }
    }

    #[inline(always)]
    fn maximum(self, other: Self) -> Self {
        unsafe { U8x16(_mm_max_epu8(self.0, other.0)) }
    }
}

impl MinMax for I16x8 {
    #[inline(always)]
    fn minimum(self, other: Self) -> Self {
        unsafe { I16x8(_mm_min_epi16(self.0, other.0)) }
    }

    #[inline(always)]
    fn maximum(self, other: Self) -> Self {
        unsafe { I16x8(_mm_max_epi16(self.0, other.0)) }
    }
}

impl MinMax for F32x4 {
    #[inline(always)]
    fn minimum(self, other: Self) -> Self {
        unsafe { F32x4(_mm_min_ps(self.0, other.0)) }
    }

    #[inline(always)]
    fn maximum(self, other: Self) -> Self {
        unsafe { F32x4(_mm_max_ps(self.0, other.0)) }
    }
}

macro_rules! integer_lanes {
    ($vector:tt, $ty:tt, $lanes:expr) => {
        impl VectorLanes<$ty> for $vector {
            const LANES: usize = $lanes;

            #[inline(always)]
            fn load(src: &[$ty]) -> Self {
                assert!(src.len() >= $lanes);
                // SAFETY: the slice holds at least one register worth of samples
                unsafe { $vector(_mm_loadu_si128(src.as_ptr().cast())) }
            }

            #[inline(always)]
            fn store(self, dst: &mut [$ty]) {
                assert!(dst.len() >= $lanes);
                unsafe { _mm_storeu_si128(dst.as_mut_ptr().cast(), self.0) }
            }
        }
    };
}

integer_lanes!(U8x16, u8, 16);
integer_lanes!(I16x8, i16, 8);

impl VectorLanes<f32> for F32x4 {
    const LANES: usize = 4;

    #[inline(always)]
    fn load(src: &[f32]) -> Self {
        assert!(src.len() >= 4);
        unsafe { F32x4(_mm_loadu_ps(src.as_ptr())) }
    }

    #[inline(always)]
    fn store(self, dst: &mut [f32]) {
        assert!(dst.len() >= 4);
        unsafe { _mm_storeu_ps(dst.as_mut_ptr(), self.0) }
    }
}

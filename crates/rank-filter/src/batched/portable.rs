/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Fixed size arrays standing in for vector registers
//!
//! The compiler is usually able to turn the lane loops into real vector
//! instructions, so this is the fallback for element types or targets
//! without hand written intrinsics.
use crate::batched::VectorLanes;
use crate::traits::MinMax;

#[derive(Copy, Clone, Debug)]
pub struct Portable<T, const N: usize>([T; N]);

impl<T: MinMax, const N: usize> MinMax for Portable<T, N> {
    #[inline(always)]
    fn minimum(self, other: Self) -> Self {
        let mut out = self.0;
        for (a, b) in out.iter_mut().zip(other.0) {
            *a = a.minimum(b);
        }
        Portable(out)
    }

    #[inline(always)]
    fn maximum(self, other: Self) -> Self {
        let mut out = self.0;
        for (a, b) in out.iter_mut().zip(other.0) {
            *a = a.maximum(b);
        }
        Portable(out)
    }
}

impl<T: MinMax + Default, const N: usize> VectorLanes<T> for Portable<T, N> {
    const LANES: usize = N;

    #[inline(always)]
    fn load(src: &[T]) -> Self {
        let mut lanes = [T::default(); N];
        lanes.copy_from_slice(&src[..N]);
        Portable(lanes)
    }

    #[inline(always)]
    fn store(self, dst: &mut [T]) {
        dst[..N].copy_from_slice(&self.0);
    }
}

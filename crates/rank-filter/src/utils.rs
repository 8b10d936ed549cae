/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Prefetch data at offset position
///
/// This uses prefetch intrinsics for a specific
/// platform to hint the CPU that the data at that position
/// will be needed soon.
///
/// Positions past the end of `data` are ignored.
#[inline(always)]
#[allow(unused_variables)]
pub fn z_prefetch<T>(data: &[T], position: usize) {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        #[cfg(target_arch = "x86")]
        use core::arch::x86::*;
        #[cfg(target_arch = "x86_64")]
        use core::arch::x86_64::*;

        if position < data.len() {
            unsafe {
                let ptr_position = data.as_ptr().add(position).cast::<i8>();

                _mm_prefetch::<_MM_HINT_T0>(ptr_position);
            }
        }
    }
}

/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Hook for handing the interior of an image to an external median implementation
//!
//! A backend is installed on a [`Median`](crate::median::Median) filter and is
//! asked first, for every channel, whether it wants the job. It only ever sees
//! the interior, `src` being the destination grown by `mask - 1` in both
//! directions, the border is still filled by the generic kernel.
//!
//! A backend must compute the same median as the built in kernels.
//! Installing one only changes speed.
use rank_core::bit_depth::BitType;
use rank_image::geometry::Size;
use rank_image::plane::{PlaneView, PlaneViewMut};

/// An external median implementation
///
/// Each typed entry returns `true` if it filled `dst`, returning `false`
/// makes the filter fall back to its own kernels. The default entries
/// decline everything.
#[allow(unused_variables)]
pub trait AcceleratedBackend: Send + Sync {
    /// Name used in log messages
    fn name(&self) -> &'static str;

    /// Whether the backend is able to handle `depth` samples with this mask
    fn supports(&self, depth: BitType, mask: Size) -> bool;

    fn median_u8(&self, src: &PlaneView<'_, u8>, dst: &mut PlaneViewMut<'_, u8>, mask: Size) -> bool {
        false
    }

    fn median_i16(
        &self, src: &PlaneView<'_, i16>, dst: &mut PlaneViewMut<'_, i16>, mask: Size
    ) -> bool {
        false
    }

    fn median_u16(
        &self, src: &PlaneView<'_, u16>, dst: &mut PlaneViewMut<'_, u16>, mask: Size
    ) -> bool {
        false
    }

    fn median_f32(
        &self, src: &PlaneView<'_, f32>, dst: &mut PlaneViewMut<'_, f32>, mask: Size
    ) -> bool {
        false
    }
}

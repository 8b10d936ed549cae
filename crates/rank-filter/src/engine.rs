/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Picking and running a median kernel for one channel
//!
//! The destination is split into the interior, where every window lies
//! inside the source plane, and the border frame around it. The frame is
//! always computed by the generic kernel with clipped windows, the interior
//! by whichever kernel fits the mask and element type best.
use rank_core::bit_depth::BitType;
use rank_core::log::trace;
use rank_core::options::{FilterOptions, MedianStrategy};
use rank_image::errors::{ImageErrors, ImageOperationsErrors};
use rank_image::geometry::{Point, Rect, Size};
use rank_image::plane::{PlaneView, PlaneViewMut};

use crate::backend::AcceleratedBackend;
use crate::batched::{batched_median_3x3, batched_median_5x5, VectorLanes};
use crate::generic::generic_median;
use crate::traits::MedianElement;

/// Kernel used for the interior of a channel
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Kernel {
    Generic,
    SortingNetwork,
    SlidingHistogram
}

/// Everything a median call needs besides the planes
#[derive(Copy, Clone)]
pub struct MedianParams<'b> {
    pub mask:    Size,
    pub anchor:  Point,
    /// Source position of the centre of destination pixel `(0, 0)`
    pub origin:  Point,
    pub options: FilterOptions,
    pub backend: Option<&'b dyn AcceleratedBackend>
}

impl<'b> MedianParams<'b> {
    /// A mask with a centred anchor, starting at the source origin
    pub fn new(mask: Size) -> MedianParams<'b> {
        MedianParams {
            mask,
            anchor: Point::new(mask.width / 2, mask.height / 2),
            origin: Point::new(0, 0),
            options: FilterOptions::default(),
            backend: None
        }
    }
}

fn is_network_mask(mask: Size) -> bool {
    mask == Size::new(3, 3) || mask == Size::new(5, 5)
}

/// Check that the mask is usable and the anchor lies inside it
///
/// # Errors
/// On a zero sized or even mask, or an anchor outside the mask
pub fn validate_geometry(mask: Size, anchor: Point) -> Result<(), ImageOperationsErrors> {
    if mask.is_empty() {
        return Err(ImageOperationsErrors::InvalidMask(
            mask,
            "mask dimensions must be greater than zero"
        ));
    }
    if mask.width % 2 == 0 || mask.height % 2 == 0 {
        return Err(ImageOperationsErrors::InvalidMask(
            mask,
            "mask dimensions must be odd"
        ));
    }
    if anchor.x >= mask.width || anchor.y >= mask.height {
        return Err(ImageOperationsErrors::InvalidAnchor(anchor, mask));
    }
    Ok(())
}

/// Resolve `strategy` into the kernel used for the interior
///
/// # Errors
/// If a forced strategy can't handle this mask or element type
pub fn select_kernel(
    strategy: MedianStrategy, mask: Size, depth: BitType
) -> Result<Kernel, ImageOperationsErrors> {
    match strategy {
        MedianStrategy::Auto => {
            if is_network_mask(mask) {
                Ok(Kernel::SortingNetwork)
            } else if depth.is_bounded() {
                Ok(Kernel::SlidingHistogram)
            } else {
                Ok(Kernel::Generic)
            }
        }
        MedianStrategy::Generic => Ok(Kernel::Generic),
        MedianStrategy::SortingNetwork => {
            if is_network_mask(mask) {
                Ok(Kernel::SortingNetwork)
            } else {
                Err(ImageOperationsErrors::StrategyNotApplicable(
                    "sorting network",
                    mask,
                    depth
                ))
            }
        }
        MedianStrategy::SlidingHistogram => {
            if depth.is_bounded() {
                Ok(Kernel::SlidingHistogram)
            } else {
                Err(ImageOperationsErrors::StrategyNotApplicable(
                    "sliding histogram",
                    mask,
                    depth
                ))
            }
        }
    }
}

/// Destination positions whose window lies completely inside the source
///
/// Empty when no window fits.
pub fn interior_rect(source: Size, destination: Size, mask: Size, anchor: Point, origin: Point) -> Rect {
    let axis = |source: usize, destination: usize, mask: usize, anchor: usize, origin: usize| {
        let start = anchor.saturating_sub(origin).min(destination);
        let end = (source + anchor + 1)
            .saturating_sub(mask + origin)
            .min(destination)
            .max(start);
        (start, end - start)
    };
    let (x, width) = axis(source.width, destination.width, mask.width, anchor.x, origin.x);
    let (y, height) = axis(source.height, destination.height, mask.height, anchor.y, origin.y);

    if width == 0 || height == 0 {
        return Rect::new(0, 0, 0, 0);
    }
    Rect::new(x, y, width, height)
}

/// The four strips of `size` around `interior`: top, bottom, left, right
fn border_frame(size: Size, interior: Rect) -> [Rect; 4] {
    [
        Rect::new(0, 0, size.width, interior.y),
        Rect::new(0, interior.bottom(), size.width, size.height - interior.bottom()),
        Rect::new(0, interior.y, interior.x, interior.height),
        Rect::new(
            interior.right(),
            interior.y,
            size.width - interior.right(),
            interior.height
        )
    ]
}

/// Median filter one channel
///
/// `dst` receives, for every position `(x, y)`, the median of the window
/// centred on source pixel `params.origin + (x, y)`. Windows crossing the
/// source border are clipped.
///
/// # Errors
/// - Invalid mask or anchor
/// - A forced strategy that doesn't apply to the mask or element type
/// - Destination positions whose centre lies outside the source
///
/// Errors are returned before any sample of `dst` is written.
pub fn apply_median<T: MedianElement>(
    src: &PlaneView<'_, T>, dst: PlaneViewMut<'_, T>, params: &MedianParams<'_>
) -> Result<(), ImageErrors> {
    validate_geometry(params.mask, params.anchor)?;
    let kernel = select_kernel(params.options.get_strategy(), params.mask, T::BIT_TYPE)?;

    let covered = Rect::new(params.origin.x, params.origin.y, dst.width(), dst.height());
    let source_size = Size::new(src.width(), src.height());

    if !covered.fits_in(source_size) {
        return Err(ImageErrors::RoiOutOfBounds(covered, source_size));
    }
    if covered.is_empty() {
        return Ok(());
    }

    trace!(
        "Median {} on {:?}: {:?} kernel, {} lanes",
        params.mask,
        T::BIT_TYPE,
        kernel,
        if params.options.get_use_simd() { <T::Lanes as VectorLanes<T>>::LANES } else { 1 }
    );

    #[cfg(feature = "threads")]
    {
        let threads = params.options.get_num_threads().min(dst.height());

        if threads > 1 {
            trace!("Running median with {} threads", threads);

            return std::thread::scope(|s| {
                let handles: Vec<_> = dst
                    .into_bands(threads)
                    .into_iter()
                    .map(|(first_row, band)| {
                        s.spawn(move || filter_band(src, band, params, first_row, kernel))
                    })
                    .collect();

                for handle in handles {
                    handle
                        .join()
                        .map_err(|_| ImageErrors::GenericStr("median worker thread panicked"))??;
                }
                Ok(())
            });
        }
    }
    filter_band(src, dst, params, 0, kernel)
}

/// Filter destination rows starting at `first_row` of the full destination
fn filter_band<T: MedianElement>(
    src: &PlaneView<'_, T>, mut dst: PlaneViewMut<'_, T>, params: &MedianParams<'_>,
    first_row: usize, kernel: Kernel
) -> Result<(), ImageErrors> {
    let (mask, anchor) = (params.mask, params.anchor);
    let origin = Point::new(params.origin.x, params.origin.y + first_row);
    let size = Size::new(dst.width(), dst.height());
    let mut scratch = Vec::with_capacity(mask.area());

    let interior = interior_rect(
        Size::new(src.width(), src.height()),
        size,
        mask,
        anchor,
        origin
    );

    if kernel == Kernel::Generic || interior.is_empty() {
        generic_median(src, &mut dst, mask, anchor, origin, &mut scratch);
        return Ok(());
    }

    for rect in border_frame(size, interior) {
        if rect.is_empty() {
            continue;
        }
        let mut strip = dst
            .sub_view_mut(rect)
            .ok_or(ImageErrors::RoiOutOfBounds(rect, size))?;
        let strip_origin = Point::new(origin.x + rect.x, origin.y + rect.y);

        generic_median(src, &mut strip, mask, anchor, strip_origin, &mut scratch);
    }

    // the window of interior pixel (0, 0) starts here in the source
    let padded = Rect::new(
        origin.x + interior.x - anchor.x,
        origin.y + interior.y - anchor.y,
        interior.width + mask.width - 1,
        interior.height + mask.height - 1
    );
    let src_interior = src
        .sub_view(padded)
        .ok_or(ImageErrors::RoiOutOfBounds(padded, Size::new(src.width(), src.height())))?;
    let mut dst_interior = dst
        .sub_view_mut(interior)
        .ok_or(ImageErrors::RoiOutOfBounds(interior, size))?;

    if let Some(backend) = params.backend {
        if params.options.get_prefer_accelerated()
            && params.options.get_strategy() == MedianStrategy::Auto
            && backend.supports(T::BIT_TYPE, mask)
            && T::backend_median(backend, &src_interior, &mut dst_interior, mask)
        {
            trace!("{} handled the {} interior", backend.name(), interior.size());
            return Ok(());
        }
    }

    match kernel {
        Kernel::SortingNetwork if mask.width == 3 => {
            batched_median_3x3(&src_interior, &mut dst_interior, params.options.get_use_simd());
        }
        Kernel::SortingNetwork => {
            batched_median_5x5(&src_interior, &mut dst_interior, params.options.get_use_simd());
        }
        Kernel::SlidingHistogram => {
            if !T::histogram_median(&src_interior, &mut dst_interior, mask) {
                generic_median(&src_interior, &mut dst_interior, mask, anchor, anchor, &mut scratch);
            }
        }
        Kernel::Generic => {
            generic_median(&src_interior, &mut dst_interior, mask, anchor, anchor, &mut scratch);
        }
    }
    Ok(())
}

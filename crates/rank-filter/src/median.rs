/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The median filter as an image operation
use std::sync::Arc;

use rank_core::bit_depth::BitType;
use rank_core::log::trace;
use rank_core::options::FilterOptions;
use rank_image::errors::{ImageErrors, ImageOperationsErrors};
use rank_image::geometry::{Point, Size};
use rank_image::image::Image;
use rank_image::traits::OperationsTrait;

use crate::backend::AcceleratedBackend;
use crate::engine::{apply_median, select_kernel, validate_geometry, MedianParams};
use crate::traits::MedianElement;

/// Median returns a new image in which each pixel is the median of its neighbors.
///
/// The neighborhood is a `mask_width` x `mask_height` rectangle placed so that
/// the anchor lands on the pixel being computed, both mask dimensions must be
/// odd. Every channel is filtered on its own.
///
/// With clip to ROI on (the default) only pixels of the source region of
/// interest whose whole window lies inside the source are produced, so the
/// output shrinks by the mask size minus one. With it off the output covers
/// the whole region of interest and windows near the image border only
/// use the samples that exist.
#[derive(Clone)]
pub struct Median {
    mask:        Size,
    anchor:      Point,
    clip_to_roi: bool,
    options:     FilterOptions,
    backend:     Option<Arc<dyn AcceleratedBackend>>
}

impl Median {
    /// A median with a centred anchor and clip to ROI enabled
    pub fn new(mask_width: usize, mask_height: usize) -> Median {
        Median {
            mask:        Size::new(mask_width, mask_height),
            anchor:      Point::new(mask_width / 2, mask_height / 2),
            clip_to_roi: true,
            options:     FilterOptions::default(),
            backend:     None
        }
    }

    /// Change the mask, anchor and clipping mode
    ///
    /// Nothing is validated here, an invalid mask is reported by
    /// [`apply`](Self::apply).
    pub fn configure(
        &mut self, mask_width: usize, mask_height: usize, anchor_x: usize, anchor_y: usize,
        clip_to_roi: bool
    ) {
        self.mask = Size::new(mask_width, mask_height);
        self.anchor = Point::new(anchor_x, anchor_y);
        self.clip_to_roi = clip_to_roi;
    }

    #[must_use]
    pub fn set_options(mut self, options: FilterOptions) -> Self {
        self.options = options;
        self
    }

    /// Install an accelerated backend, consulted before the built in kernels
    #[must_use]
    pub fn set_backend(mut self, backend: Arc<dyn AcceleratedBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    pub const fn mask(&self) -> Size {
        self.mask
    }

    pub const fn anchor(&self) -> Point {
        self.anchor
    }

    pub const fn clip_to_roi(&self) -> bool {
        self.clip_to_roi
    }

    pub const fn options(&self) -> FilterOptions {
        self.options
    }

    /// Validate the configuration against an element type
    ///
    /// # Errors
    /// Invalid mask or anchor, an unsupported element type, or a forced
    /// strategy that doesn't apply
    pub fn validate(&self, depth: BitType) -> Result<(), ImageErrors> {
        validate_geometry(self.mask, self.anchor)?;

        if !self.supported_types().contains(&depth) {
            return Err(ImageOperationsErrors::UnsupportedType(self.name(), depth).into());
        }
        select_kernel(self.options.get_strategy(), self.mask, depth)?;
        Ok(())
    }

    /// Where the output starts in `source` and how big it is
    ///
    /// # Errors
    /// If clipping to the ROI leaves nothing to compute
    pub fn output_region(&self, source: &Image) -> Result<(Point, Size), ImageErrors> {
        let roi = source.roi();

        if roi.is_empty() {
            return Err(ImageOperationsErrors::RoiTooSmall(roi.size(), self.mask).into());
        }
        if !self.clip_to_roi {
            return Ok((roi.origin(), roi.size()));
        }
        let (width, height) = source.dimensions();

        // centres in [anchor, size + anchor + 1 - mask) have complete windows
        let x_start = roi.x.max(self.anchor.x);
        let y_start = roi.y.max(self.anchor.y);
        let x_end = roi
            .right()
            .min((width + self.anchor.x + 1).saturating_sub(self.mask.width));
        let y_end = roi
            .bottom()
            .min((height + self.anchor.y + 1).saturating_sub(self.mask.height));

        if x_end <= x_start || y_end <= y_start {
            return Err(ImageOperationsErrors::RoiTooSmall(roi.size(), self.mask).into());
        }
        Ok((
            Point::new(x_start, y_start),
            Size::new(x_end - x_start, y_end - y_start)
        ))
    }

    /// Median filter `source` into `destination`
    ///
    /// A destination with the same element type and channel count as the
    /// source and a region of interest of the output size is written inside
    /// that region and left alone elsewhere. Any other destination is
    /// reallocated to exactly the output size, unless it is locked.
    ///
    /// # Errors
    /// Configuration errors and an incompatible locked destination, both are
    /// reported before any sample is written.
    pub fn apply(&self, source: &Image, destination: &mut Image) -> Result<(), ImageErrors> {
        let depth = source.depth();
        self.validate(depth)?;

        let (origin, size) = self.output_region(source)?;
        let channels = source.channels_len();

        if channels == 0 {
            return Err(ImageOperationsErrors::WrongComponents(1, 0).into());
        }
        if !destination.is_compatible(size, channels, depth) {
            trace!("Reshaping median destination to {} with {} channels", size, channels);
            destination.reshape(size, channels, depth)?;
        }

        match depth {
            BitType::U8 => self.filter_channels::<u8>(source, destination, origin),
            BitType::I16 => self.filter_channels::<i16>(source, destination, origin),
            BitType::U16 => self.filter_channels::<u16>(source, destination, origin),
            BitType::F32 => self.filter_channels::<f32>(source, destination, origin)
        }
    }

    fn filter_channels<T: MedianElement>(
        &self, source: &Image, destination: &mut Image, origin: Point
    ) -> Result<(), ImageErrors> {
        let params = MedianParams {
            mask: self.mask,
            anchor: self.anchor,
            origin,
            options: self.options,
            backend: self.backend.as_deref()
        };
        let roi = destination.roi();
        let size = destination.size();

        for (channel, plane) in destination.planes_mut::<T>()?.into_iter().enumerate() {
            let src = source.plane::<T>(channel)?;
            let dst = plane
                .into_sub_view(roi)
                .ok_or(ImageErrors::RoiOutOfBounds(roi, size))?;

            apply_median(&src, dst, &params)?;
        }
        Ok(())
    }
}

impl OperationsTrait for Median {
    fn name(&self) -> &'static str {
        "Median Filter"
    }

    /// Filter the image onto itself, see [`Median::apply`] for how the
    /// output is placed.
    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let source = image.clone();
        self.apply(&source, image)
    }

    fn supported_types(&self) -> &'static [BitType] {
        &[BitType::U8, BitType::I16, BitType::U16, BitType::F32]
    }
}

/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The image struct
//!
//! An image is a set of equally sized planar channels sharing one element type,
//! one row stride and one region of interest.
//!
//! The region of interest bounds where operations read and write; it defaults
//! to the whole image.
use rank_core::bit_depth::BitType;

use crate::channel::Channel;
use crate::errors::ImageErrors;
use crate::geometry::{Rect, Size};
use crate::plane::{PlaneView, PlaneViewMut};
use crate::traits::ImageElement;

/// Encapsulates an image
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    channels: Vec<Channel>,
    depth:    BitType,
    width:    usize,
    height:   usize,
    stride:   usize,
    roi:      Rect,
    locked:   bool
}

impl Image {
    /// Create a zeroed image of `channels` planes whose rows are packed
    pub fn new(width: usize, height: usize, channels: usize, depth: BitType) -> Image {
        Image {
            channels: vec![Channel::new_with_bit_type(width * height, depth); channels],
            depth,
            width,
            height,
            stride: width,
            roi: Rect::new(0, 0, width, height),
            locked: false
        }
    }

    /// Create a zeroed image whose rows are `stride` samples apart
    ///
    /// # Errors
    /// If `stride` is smaller than `width`
    pub fn new_with_stride(
        width: usize, height: usize, stride: usize, channels: usize, depth: BitType
    ) -> Result<Image, ImageErrors> {
        if stride < width {
            return Err(ImageErrors::DimensionsMisMatch(width, stride));
        }
        Ok(Image {
            channels: vec![Channel::new_with_bit_type(stride * height, depth); channels],
            depth,
            width,
            height,
            stride,
            roi: Rect::new(0, 0, width, height),
            locked: false
        })
    }

    /// Create an image where every sample of every channel is `value`
    pub fn fill<T: ImageElement>(value: T, width: usize, height: usize, channels: usize) -> Image {
        let mut image = Image::new(width, height, channels, T::BIT_TYPE);
        for channel in &mut image.channels {
            // the channel was created for T above, so this can't fail
            let filled = channel.fill(value);
            debug_assert!(filled.is_ok());
        }
        image
    }

    /// Create an image from packed planes, one vector per channel
    ///
    /// # Errors
    /// If a plane's length isn't `width * height`
    pub fn from_planes<T: ImageElement>(
        planes: &[Vec<T>], width: usize, height: usize
    ) -> Result<Image, ImageErrors> {
        let expected = width * height;

        let mut channels = Vec::with_capacity(planes.len());
        for plane in planes {
            if plane.len() != expected {
                return Err(ImageErrors::DimensionsMisMatch(expected, plane.len()));
            }
            channels.push(Channel::from_elements(plane));
        }
        Ok(Image {
            channels,
            depth: T::BIT_TYPE,
            width,
            height,
            stride: width,
            roi: Rect::new(0, 0, width, height),
            locked: false
        })
    }

    /// Create an image whose sample at `(x, y)` of channel `c` is `function(x, y, c)`
    pub fn from_fn<T, F>(width: usize, height: usize, channels: usize, mut function: F) -> Image
    where
        T: ImageElement,
        F: FnMut(usize, usize, usize) -> T
    {
        let mut image = Image::new(width, height, channels, T::BIT_TYPE);

        for (c, channel) in image.channels.iter_mut().enumerate() {
            if let Ok(data) = channel.reinterpret_as_mut::<T>() {
                for (y, row) in data.chunks_exact_mut(width.max(1)).enumerate() {
                    for (x, pix) in row.iter_mut().enumerate() {
                        *pix = function(x, y, c);
                    }
                }
            }
        }
        image
    }

    /// Get image dimensions as a tuple of (width,height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Distance in samples between the start of two consecutive rows
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Get the element type of this image
    pub const fn depth(&self) -> BitType {
        self.depth
    }

    /// Number of channels in the image
    pub fn channels_len(&self) -> usize {
        self.channels.len()
    }

    pub fn channels_ref(&self) -> &[Channel] {
        &self.channels
    }

    pub fn channels_mut(&mut self) -> &mut [Channel] {
        &mut self.channels
    }

    /// The region of interest
    pub const fn roi(&self) -> Rect {
        self.roi
    }

    /// Set the region of interest
    ///
    /// # Errors
    /// If `roi` doesn't lie inside the image
    pub fn set_roi(&mut self, roi: Rect) -> Result<(), ImageErrors> {
        if !roi.fits_in(self.size()) {
            return Err(ImageErrors::RoiOutOfBounds(roi, self.size()));
        }
        self.roi = roi;
        Ok(())
    }

    /// Lock or unlock the image
    ///
    /// Locked images can still be written to but never reallocated,
    /// an operation that needs a different shape fails instead.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Returns true if the image can receive `channels` planes of `depth` in a region
    /// of interest of `roi_size` without being reshaped
    pub fn is_compatible(&self, roi_size: Size, channels: usize, depth: BitType) -> bool {
        self.depth == depth && self.channels.len() == channels && self.roi.size() == roi_size
    }

    /// Reallocate the image as zeroed packed planes, the region of interest
    /// becomes the whole image.
    ///
    /// # Errors
    /// If the image is locked
    pub fn reshape(
        &mut self, size: Size, channels: usize, depth: BitType
    ) -> Result<(), ImageErrors> {
        if self.locked {
            return Err(ImageErrors::IncompatibleDestination(format!(
                "locked image of {} {:?} with {} channels cannot become {} {:?} with {} channels",
                self.size(),
                self.depth,
                self.channels.len(),
                size,
                depth,
                channels
            )));
        }
        *self = Image::new(size.width, size.height, channels, depth);
        Ok(())
    }

    /// A view of channel `channel`
    ///
    /// # Errors
    /// If the channel doesn't exist or doesn't store `T`
    pub fn plane<T: ImageElement>(&self, channel: usize) -> Result<PlaneView<'_, T>, ImageErrors> {
        let data = self
            .channels
            .get(channel)
            .ok_or(ImageErrors::DimensionsMisMatch(self.channels.len(), channel + 1))?
            .reinterpret_as::<T>()?;

        PlaneView::new(data, self.width, self.height, self.stride)
            .ok_or(ImageErrors::DimensionsMisMatch(self.stride * self.height, data.len()))
    }

    /// A mutable view of channel `channel`
    ///
    /// # Errors
    /// If the channel doesn't exist or doesn't store `T`
    pub fn plane_mut<T: ImageElement>(
        &mut self, channel: usize
    ) -> Result<PlaneViewMut<'_, T>, ImageErrors> {
        let (width, height, stride) = (self.width, self.height, self.stride);
        let channels = self.channels.len();

        let data = self
            .channels
            .get_mut(channel)
            .ok_or(ImageErrors::DimensionsMisMatch(channels, channel + 1))?
            .reinterpret_as_mut::<T>()?;
        let length = data.len();

        PlaneViewMut::new(data, width, height, stride)
            .ok_or(ImageErrors::DimensionsMisMatch(stride * height, length))
    }

    /// Mutable views of every channel at once
    ///
    /// # Errors
    /// If the channels don't store `T`
    pub fn planes_mut<T: ImageElement>(&mut self) -> Result<Vec<PlaneViewMut<'_, T>>, ImageErrors> {
        let (width, height, stride) = (self.width, self.height, self.stride);

        let mut planes = Vec::with_capacity(self.channels.len());
        for channel in &mut self.channels {
            let data = channel.reinterpret_as_mut::<T>()?;
            let length = data.len();
            let plane = PlaneViewMut::new(data, width, height, stride)
                .ok_or(ImageErrors::DimensionsMisMatch(stride * height, length))?;
            planes.push(plane);
        }
        Ok(planes)
    }

    /// Copy the region of interest of channel `channel` into a packed vector
    ///
    /// # Errors
    /// If the channel doesn't exist or doesn't store `T`
    pub fn roi_to_vec<T: ImageElement>(&self, channel: usize) -> Result<Vec<T>, ImageErrors> {
        let plane = self.plane::<T>(channel)?;
        let roi = plane
            .sub_view(self.roi)
            .ok_or(ImageErrors::RoiOutOfBounds(self.roi, self.size()))?;
        Ok(roi.to_vec())
    }
}

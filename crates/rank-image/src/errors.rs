/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during image processing
use std::fmt::{Debug, Display, Formatter};

use rank_core::bit_depth::BitType;

use crate::channel::ChannelErrors;
use crate::geometry::{Point, Rect, Size};

/// All possible image errors that can occur.
///
/// Configuration problems are wrapped in [`ImageOperationsErrors`],
/// everything is reported before any pixel of a destination is written.
pub enum ImageErrors {
    /// The filter was configured in a way it cannot run
    OperationsError(ImageOperationsErrors),
    /// The destination image cannot be adapted to receive the result
    IncompatibleDestination(String),
    /// Reinterpreting a channel failed
    ChannelErrors(ChannelErrors),
    /// Expected vs found lengths
    DimensionsMisMatch(usize, usize),
    /// A region does not lie inside the image
    RoiOutOfBounds(Rect, Size),
    GenericString(String),
    GenericStr(&'static str)
}

/// Errors that may occur when setting up image operations
pub enum ImageOperationsErrors {
    /// Zero sized or even sized masks
    InvalidMask(Size, &'static str),
    /// Anchor does not lie inside the mask
    InvalidAnchor(Point, Size),
    /// Wrong number of components, expected, found
    WrongComponents(usize, usize),
    /// The operation does not support this element type
    UnsupportedType(&'static str, BitType),
    /// A forced strategy cannot handle this mask or type
    StrategyNotApplicable(&'static str, Size, BitType),
    /// The region of interest leaves no pixel with a complete window,
    /// region size then mask size
    RoiTooSmall(Size, Size)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OperationsError(ref error) => writeln!(f, "{error:?}"),
            Self::IncompatibleDestination(ref reason) => {
                writeln!(f, "Destination cannot receive the result: {reason}")
            }
            Self::ChannelErrors(ref error) => writeln!(f, "{error:?}"),
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {expected} but found {found}"
                )
            }
            Self::RoiOutOfBounds(roi, size) => {
                writeln!(f, "Region {roi} does not fit inside an image of {size}")
            }
            Self::GenericString(err) => writeln!(f, "{err}"),
            Self::GenericStr(err) => writeln!(f, "{err}")
        }
    }
}

impl Debug for ImageOperationsErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMask(size, reason) => {
                writeln!(f, "Invalid mask {size}: {reason}")
            }
            Self::InvalidAnchor(anchor, size) => {
                writeln!(
                    f,
                    "Anchor ({},{}) lies outside a mask of {size}",
                    anchor.x, anchor.y
                )
            }
            Self::WrongComponents(expected, found) => {
                writeln!(f, "Expected {expected} components and found {found}")
            }
            Self::UnsupportedType(operation, depth) => {
                writeln!(f, "Operation {operation} is not implemented for {depth:?}")
            }
            Self::StrategyNotApplicable(strategy, mask, depth) => {
                writeln!(
                    f,
                    "The {strategy} strategy cannot filter {depth:?} images with a {mask} mask"
                )
            }
            Self::RoiTooSmall(roi, mask) => {
                writeln!(f, "Region of {roi} is too small for a {mask} mask")
            }
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{self:?}")
    }
}

impl Display for ImageOperationsErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{self:?}")
    }
}

impl std::error::Error for ImageErrors {}

impl std::error::Error for ImageOperationsErrors {}

impl From<ImageOperationsErrors> for ImageErrors {
    fn from(from: ImageOperationsErrors) -> Self {
        ImageErrors::OperationsError(from)
    }
}

impl From<ChannelErrors> for ImageErrors {
    fn from(from: ChannelErrors) -> Self {
        ImageErrors::ChannelErrors(from)
    }
}

impl From<String> for ImageErrors {
    fn from(s: String) -> ImageErrors {
        ImageErrors::GenericString(s)
    }
}

impl From<&'static str> for ImageErrors {
    fn from(s: &'static str) -> ImageErrors {
        ImageErrors::GenericStr(s)
    }
}

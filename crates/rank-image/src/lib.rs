/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Raster container for the rank filters
//!
//! This crate carries just enough of an image library for neighbourhood filters
//! to run against:
//!
//! - [`Image`](image::Image): multi channel planar storage with a row stride and a region of interest
//! - [`Channel`](channel::Channel): untyped storage reinterpreted as a typed slice
//! - [`PlaneView`](plane::PlaneView) and [`PlaneViewMut`](plane::PlaneViewMut): bounds checked
//!   `(data, width, height, stride)` windows into a channel
//! - [`OperationsTrait`](traits::OperationsTrait): how filters are executed on images
//!
//! # Example
//! ```
//! use rank_core::bit_depth::BitType;
//! use rank_image::image::Image;
//!
//! let image = Image::fill::<u8>(77, 10, 10, 3);
//! assert_eq!(image.depth(), BitType::U8);
//! assert_eq!(image.plane::<u8>(2).unwrap().get(4, 4), Some(&77));
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::inline_always,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod channel;
pub mod errors;
pub mod geometry;
pub mod image;
pub mod plane;
pub mod traits;

/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Rank order (median) filtering for `rank-image`
//!
//! Every output pixel is the median of the samples under a rectangular mask,
//! computed per channel. Three kernels are available and picked per call:
//!
//! - 3x3 and 5x5 masks use fixed compare-exchange networks, evaluated on
//!   vector lanes where possible ([`batched`]).
//! - Other masks on 8 and 16 bit integer images use a rolling histogram
//!   ([`histogram`]).
//! - Everything else gathers, sorts and picks the middle ([`generic`]).
//!
//! Pixels whose window leaves the image always go through the generic kernel,
//! which only looks at the samples that exist.
//!
//! It implements the `OperationsTrait` defined by rank-image.
//!
//! # Example
//! - Remove salt and pepper noise with a 3x3 median
//! ```
//! use rank_image::image::Image;
//! use rank_filter::median::Median;
//!
//! let image = Image::fill::<u8>(233, 100, 100, 3);
//! let mut output = Image::fill::<u8>(0, 1, 1, 1);
//!
//! let median = Median::new(3, 3);
//! median.apply(&image, &mut output).unwrap();
//! // the default clips the output to pixels with full windows
//! assert_eq!(output.dimensions(), (98, 98));
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
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::many_single_char_names
)]

pub mod backend;
pub mod batched;
pub mod engine;
pub mod generic;
pub mod histogram;
pub mod median;
pub mod network;
pub mod traits;
mod utils;
pub mod window;

/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the rank filter crates
//!
//! It currently contains
//!
//! - Element bit types understood by the raster container and the filters
//! - Filter options shared by every rank filter invocation
//! - A logging facade which is a no-op unless the `log` feature is enabled
//!
//! # Features
//!  - `log`: Forward `trace!`, `debug!` and friends to the [`log`] crate.
//!
//! [`log`]: https://docs.rs/log
#![macro_use]

pub mod bit_depth;
pub mod log;
pub mod options;

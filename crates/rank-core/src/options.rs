/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Filter options
//!
//! This module exposes a struct for which all rank filter
//! invocations get shared options
//!
//! Options only ever change how fast a result is computed,
//! never the result itself.

/// Which algorithm should compute the median
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum MedianStrategy {
    /// Pick based on mask size and element type
    #[default]
    Auto,
    /// Gather, sort and take the middle element
    Generic,
    /// Fixed compare-exchange networks, only for 3x3 and 5x5 masks
    SortingNetwork,
    /// Rolling histogram, only for bounded integer types
    SlidingHistogram
}

/// Filter options
///
/// Not all options are respected by all filters,
/// each option specifies who respects it.
#[derive(Debug, Copy, Clone)]
pub struct FilterOptions {
    /// Whether vector lanes may be used for kernels that support them
    ///
    /// - Default value: true
    /// - Respected by: sorting network median
    use_simd:           bool,
    /// Number of row bands processed concurrently per channel
    ///
    /// Only respected when the `threads` feature is enabled in the filter crate.
    ///
    /// - Default value: 1
    num_threads:        usize,
    /// Whether an installed accelerated backend should be used when it
    /// supports the request
    ///
    /// - Default value: true
    prefer_accelerated: bool,
    /// Force a median strategy
    ///
    /// - Default value: [`MedianStrategy::Auto`]
    strategy:           MedianStrategy
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            use_simd:           true,
            num_threads:        1,
            prefer_accelerated: true,
            strategy:           MedianStrategy::Auto
        }
    }
}

impl FilterOptions {
    /// Create options where nothing but the plain scalar code runs
    ///
    /// Useful for comparing against accelerated paths
    pub fn new_scalar() -> FilterOptions {
        FilterOptions::default()
            .set_use_simd(false)
            .set_prefer_accelerated(false)
    }

    /// Return true if vector lanes may be used
    pub const fn get_use_simd(&self) -> bool {
        self.use_simd
    }

    /// Set whether vector lanes may be used
    pub fn set_use_simd(mut self, yes: bool) -> Self {
        self.use_simd = yes;
        self
    }

    /// Get the number of row bands processed concurrently
    pub const fn get_num_threads(&self) -> usize {
        self.num_threads
    }

    /// Set the number of row bands processed concurrently
    ///
    /// # Arguments
    ///
    /// * `threads`:  Number of workers, zero is treated as one
    ///
    /// returns: FilterOptions
    pub fn set_num_threads(mut self, threads: usize) -> Self {
        self.num_threads = threads.max(1);
        self
    }

    /// Return true if an accelerated backend is preferred
    pub const fn get_prefer_accelerated(&self) -> bool {
        self.prefer_accelerated
    }

    /// Set whether an installed accelerated backend is used
    pub fn set_prefer_accelerated(mut self, yes: bool) -> Self {
        self.prefer_accelerated = yes;
        self
    }

    /// Get the configured strategy
    pub const fn get_strategy(&self) -> MedianStrategy {
        self.strategy
    }

    /// Force a median strategy
    pub fn set_strategy(mut self, strategy: MedianStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

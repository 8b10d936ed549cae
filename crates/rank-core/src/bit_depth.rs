/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Element bit types, information and manipulations

/// The underlying bit representation of the image
///
/// This represents the rust type that is used to
/// store one sample of one channel, required
/// by `Channel` struct in rank-image
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BitType {
    /// Images represented using a [`u8`] as their
    /// underlying pixel storage
    U8,
    /// Images represented using a [`i16`] as their
    /// underlying pixel storage.
    I16,
    /// Images represented using a [`u16`] as their
    /// underlying pixel storage.
    U16,
    /// Images represented using a [`f32`] as their
    /// underlying pixel storage.
    F32
}

impl BitType {
    /// Get the number of bytes needed to store one sample
    ///
    /// # Example
    /// ```
    /// use rank_core::bit_depth::BitType;
    /// assert_eq!(BitType::I16.size_of(), 2);
    /// ```
    pub const fn size_of(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::I16 | Self::U16 => 2,
            Self::F32 => 4
        }
    }

    /// Number of bits used by one sample
    pub const fn bit_width(self) -> usize {
        self.size_of() * 8
    }

    /// Returns true if every value the type can hold can index
    /// a per-value counter table directly.
    ///
    /// This is what rank filters use to decide whether histogram
    /// based algorithms apply.
    ///
    /// ```
    /// use rank_core::bit_depth::BitType;
    /// assert!(BitType::U8.is_bounded());
    /// assert!(!BitType::F32.is_bounded());
    /// ```
    pub const fn is_bounded(self) -> bool {
        match self {
            Self::U8 | Self::I16 | Self::U16 => true,
            Self::F32 => false
        }
    }

    /// Number of distinct values of a bounded type, `None` for
    /// floating point types
    pub const fn value_count(self) -> Option<usize> {
        match self {
            Self::U8 => Some(1 << 8),
            Self::I16 | Self::U16 => Some(1 << 16),
            Self::F32 => None
        }
    }
}

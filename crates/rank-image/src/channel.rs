/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module encapsulates a single image channel instance
//!
//! The channel stores its samples as untyped words and has no notion of
//! rows or strides, those belong to [`Image`](crate::image::Image).
//!
//! Typed access goes through `reinterpret` methods which check that the
//! requested type is the one the channel was created with.
use std::any::TypeId;
use std::fmt::{Debug, Formatter};
use std::mem::{align_of, size_of};

use bytemuck::PodCastError;
use rank_core::bit_depth::BitType;

use crate::traits::ImageElement;

/// Encapsulates errors that can occur
/// when manipulating channels
#[derive(Copy, Clone)]
pub enum ChannelErrors {
    /// Storage could not be viewed at the alignment of the requested type
    UnalignedPointer(usize, usize),
    /// The length of the type does not evenly divide the channel length
    UnevenLength(usize, usize),
    /// Expected type id, found type id
    DifferentType(TypeId, TypeId)
}

impl Debug for ChannelErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelErrors::UnalignedPointer(expected, found) => {
                writeln!(f, "Channel pointer {expected} is not aligned to {found}")
            }
            ChannelErrors::UnevenLength(length, size_of_1) => {
                writeln!(
                    f,
                    "Size of {size_of_1} cannot evenly divide length {length}"
                )
            }
            ChannelErrors::DifferentType(expected, found) => {
                writeln!(f, "Different type id {found:?} from expected {expected:?}. This indicates you are converting a channel
             to a type it wasn't instantiated with")
            }
        }
    }
}

fn type_id_of(bit_type: BitType) -> TypeId {
    match bit_type {
        BitType::U8 => TypeId::of::<u8>(),
        BitType::I16 => TypeId::of::<i16>(),
        BitType::U16 => TypeId::of::<u16>(),
        BitType::F32 => TypeId::of::<f32>()
    }
}

/// Encapsulates an image channel
///
/// Storage is a vector of `u32` words so every supported element
/// type (at most 4 bytes wide) can be viewed without misalignment.
#[derive(Clone, PartialEq)]
pub struct Channel {
    words:   Vec<u32>,
    // length in bytes, may be less than words.len() * 4
    length:  usize,
    type_id: TypeId
}

impl Channel {
    /// Create a zeroed channel holding `elements` samples of `bit_type`
    pub fn new_with_bit_type(elements: usize, bit_type: BitType) -> Channel {
        let length = elements * bit_type.size_of();
        Channel {
            words: vec![0; length.div_ceil(size_of::<u32>())],
            length,
            type_id: type_id_of(bit_type)
        }
    }

    /// Create a zeroed channel holding `elements` samples of `T`
    pub fn new_with_length<T: ImageElement>(elements: usize) -> Channel {
        Channel::new_with_bit_type(elements, T::BIT_TYPE)
    }

    /// Create a channel and copy `data` into it
    pub fn from_elements<T: ImageElement>(data: &[T]) -> Channel {
        let mut channel = Channel::new_with_length::<T>(data.len());
        // new_with_length sized it for exactly this type
        if let Ok(storage) = channel.reinterpret_as_mut::<T>() {
            storage.copy_from_slice(data);
        }
        channel
    }

    /// Length of the channel in bytes
    pub const fn len(&self) -> usize {
        self.length
    }

    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    fn confirm_type<T: ImageElement>(&self) -> Result<(), ChannelErrors> {
        let requested = TypeId::of::<T>();
        if requested != self.type_id {
            return Err(ChannelErrors::DifferentType(self.type_id, requested));
        }
        if self.length % size_of::<T>() != 0 {
            return Err(ChannelErrors::UnevenLength(self.length, size_of::<T>()));
        }
        Ok(())
    }

    fn map_cast_error<T>(&self, error: PodCastError) -> ChannelErrors {
        match error {
            PodCastError::TargetAlignmentGreaterAndInputNotAligned => {
                ChannelErrors::UnalignedPointer(self.words.as_ptr() as usize, align_of::<T>())
            }
            _ => ChannelErrors::UnevenLength(self.length, size_of::<T>())
        }
    }

    /// Reinterpret the channel as a slice of `T`
    ///
    /// # Errors
    /// If the channel was not created for `T`
    pub fn reinterpret_as<T: ImageElement>(&self) -> Result<&[T], ChannelErrors> {
        self.confirm_type::<T>()?;
        let bytes: &[u8] = bytemuck::cast_slice(self.words.as_slice());

        bytemuck::try_cast_slice(&bytes[..self.length]).map_err(|e| self.map_cast_error::<T>(e))
    }

    /// Reinterpret the channel as a mutable slice of `T`
    ///
    /// # Errors
    /// If the channel was not created for `T`
    pub fn reinterpret_as_mut<T: ImageElement>(&mut self) -> Result<&mut [T], ChannelErrors> {
        self.confirm_type::<T>()?;

        let length = self.length;
        let ptr = self.words.as_ptr() as usize;
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(self.words.as_mut_slice());

        bytemuck::try_cast_slice_mut(&mut bytes[..length]).map_err(|e| match e {
            PodCastError::TargetAlignmentGreaterAndInputNotAligned => {
                ChannelErrors::UnalignedPointer(ptr, align_of::<T>())
            }
            _ => ChannelErrors::UnevenLength(length, size_of::<T>())
        })
    }

    /// Set every sample to `value`
    ///
    /// # Errors
    /// If the channel was not created for `T`
    pub fn fill<T: ImageElement>(&mut self, value: T) -> Result<(), ChannelErrors> {
        self.reinterpret_as_mut::<T>()?.fill(value);
        Ok(())
    }
}

impl Debug for Channel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Channel")
            .field("length", &self.length)
            .field("type_id", &self.type_id)
            .finish()
    }
}

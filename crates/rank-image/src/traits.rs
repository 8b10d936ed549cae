/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits shared by images and the operations that run on them
use std::fmt::Debug;

use bytemuck::Pod;
use rank_core::bit_depth::BitType;
use rank_core::log::trace;

use crate::errors::{ImageErrors, ImageOperationsErrors};
use crate::image::Image;

/// A type that can be stored in an image channel
pub trait ImageElement: Pod + Default + Debug + PartialOrd + Send + Sync + 'static {
    /// The bit type describing this element
    const BIT_TYPE: BitType;
}

macro_rules! image_element {
    ($ty:tt, $bit_type:expr) => {
        impl ImageElement for $ty {
            const BIT_TYPE: BitType = $bit_type;
        }
    };
}

image_element!(u8, BitType::U8);
image_element!(i16, BitType::I16);
image_element!(u16, BitType::U16);
image_element!(f32, BitType::F32);

/// This encapsulates an image operation.
///
/// Operations that work on a single image implement this,
/// the provided methods check the element type before running
/// the operation.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Execute the operation on the image, replacing its contents
    ///
    /// Callers should prefer [`execute`](Self::execute) which confirms
    /// the element type is supported first.
    ///
    /// # Errors
    /// Any operations error will be propagated to the caller
    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors>;

    /// Element types this operation can run on
    fn supported_types(&self) -> &'static [BitType];

    /// Execute an operation on the image
    ///
    /// # Errors
    /// If the image type is unsupported, or the operation fails
    fn execute(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let depth = image.depth();

        if !self.supported_types().contains(&depth) {
            return Err(ImageOperationsErrors::UnsupportedType(self.name(), depth).into());
        }
        trace!("Running {} on a {:?} image", self.name(), depth);

        self.execute_impl(image)
    }

    /// Clone the image, execute the operation on the copy and return it
    ///
    /// # Errors
    /// Same as [`execute`](Self::execute)
    fn clone_and_execute(&self, image: &Image) -> Result<Image, ImageErrors> {
        let mut image = image.clone();
        self.execute(&mut image)?;
        Ok(image)
    }
}

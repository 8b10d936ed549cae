/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::fs::read;
use std::path::{Path, PathBuf};

use rank_core::bit_depth::BitType;
use rank_image::errors::ImageErrors;
use rank_image::image::Image;
use rank_image::traits::ImageElement;
use serde::Deserialize;
use xxhash_rust::xxh3::xxh3_128;

mod border;
mod equivalence;
mod scenarios;

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonDepth {
    U8,
    I16,
    U16,
    F32
}

impl JsonDepth {
    pub fn to_bit_type(self) -> BitType {
        match self {
            Self::U8 => BitType::U8,
            Self::I16 => BitType::I16,
            Self::U16 => BitType::U16,
            Self::F32 => BitType::F32
        }
    }
}

/// One filtering case with its expected output
///
/// Samples are stored as numbers wide enough for every element type and
/// converted when the image is built.
#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub name:          String,
    pub depth:         JsonDepth,
    pub width:         usize,
    pub height:        usize,
    pub mask:          [usize; 2],
    pub anchor:        [usize; 2],
    pub clip_to_roi:   bool,
    pub roi:           [usize; 4],
    pub input:         Vec<f64>,
    pub output_width:  usize,
    pub output_height: usize,
    pub expected:      Vec<f64>,
    pub comment:       Option<String>
}

pub fn sample_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub fn load_entries(name: &str) -> Vec<TestEntry> {
    let json_file = read(sample_path().join(name)).unwrap();
    serde_json::from_slice(&json_file).unwrap()
}

/// Build a single channel image of type `T` from `f64` samples
pub fn image_from_samples<T: ImageElement>(
    samples: &[f64], width: usize, height: usize, convert: fn(f64) -> T
) -> Image {
    let plane: Vec<T> = samples.iter().map(|&x| convert(x)).collect();
    Image::from_planes(&[plane], width, height).unwrap()
}

/// Hash the bytes of every channel's region of interest
///
/// Equal hashes are used to compare outputs of different configurations.
pub fn hash_image(image: &Image) -> u128 {
    let mut bytes = Vec::new();

    for channel in 0..image.channels_len() {
        match image.depth() {
            BitType::U8 => bytes.extend(image.roi_to_vec::<u8>(channel).unwrap()),
            BitType::I16 => {
                for x in image.roi_to_vec::<i16>(channel).unwrap() {
                    bytes.extend_from_slice(&x.to_le_bytes());
                }
            }
            BitType::U16 => {
                for x in image.roi_to_vec::<u16>(channel).unwrap() {
                    bytes.extend_from_slice(&x.to_le_bytes());
                }
            }
            BitType::F32 => {
                for x in image.roi_to_vec::<f32>(channel).unwrap() {
                    bytes.extend_from_slice(&x.to_le_bytes());
                }
            }
        }
    }
    xxh3_128(&bytes)
}

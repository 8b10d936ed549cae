/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::Rng;
use rank_image::image::Image;
use rank_image::traits::ImageElement;

/// Width and height of the benchmark images
pub const BENCH_DIMENSIONS: (usize, usize) = (1920, 1080);

/// A single channel image of random 8 bit noise
pub fn noise_u8() -> Image {
    let mut rng = nanorand::WyRand::new_seed(0x5eed);
    let (w, h) = BENCH_DIMENSIONS;
    Image::from_fn::<u8, _>(w, h, 1, |_, _, _| rng.generate())
}

/// A single channel image of random signed 16 bit noise
pub fn noise_i16() -> Image {
    let mut rng = nanorand::WyRand::new_seed(0x5eed);
    let (w, h) = BENCH_DIMENSIONS;
    Image::from_fn::<i16, _>(w, h, 1, |_, _, _| rng.generate())
}

/// A single channel image of random floats in `[0, 1)`
pub fn noise_f32() -> Image {
    let mut rng = nanorand::WyRand::new_seed(0x5eed);
    let (w, h) = BENCH_DIMENSIONS;
    Image::from_fn::<f32, _>(w, h, 1, |_, _, _| f32::from(rng.generate::<u16>()) / 65536.0)
}

/// Number of samples in one channel, used for throughput
pub fn samples<T: ImageElement>() -> u64 {
    let (w, h) = BENCH_DIMENSIONS;
    (w * h * core::mem::size_of::<T>()) as u64
}

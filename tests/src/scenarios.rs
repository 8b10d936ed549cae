/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use rank_core::bit_depth::BitType;
use rank_core::options::{FilterOptions, MedianStrategy};
use rank_filter::median::Median;
use rank_image::errors::{ImageErrors, ImageOperationsErrors};
use rank_image::geometry::Rect;
use rank_image::image::Image;

use crate::{image_from_samples, load_entries, TestEntry};

fn build_source(entry: &TestEntry) -> Image {
    let (w, h) = (entry.width, entry.height);

    let mut image = match entry.depth.to_bit_type() {
        BitType::U8 => image_from_samples::<u8>(&entry.input, w, h, |x| x as u8),
        BitType::I16 => image_from_samples::<i16>(&entry.input, w, h, |x| x as i16),
        BitType::U16 => image_from_samples::<u16>(&entry.input, w, h, |x| x as u16),
        BitType::F32 => image_from_samples::<f32>(&entry.input, w, h, |x| x as f32)
    };
    let [x, y, rw, rh] = entry.roi;
    image.set_roi(Rect::new(x, y, rw, rh)).unwrap();
    image
}

fn output_samples(image: &Image) -> Vec<f64> {
    match image.depth() {
        BitType::U8 => image.roi_to_vec::<u8>(0).unwrap().into_iter().map(f64::from).collect(),
        BitType::I16 => image.roi_to_vec::<i16>(0).unwrap().into_iter().map(f64::from).collect(),
        BitType::U16 => image.roi_to_vec::<u16>(0).unwrap().into_iter().map(f64::from).collect(),
        BitType::F32 => image.roi_to_vec::<f32>(0).unwrap().into_iter().map(f64::from).collect()
    }
}

fn strategies(entry: &TestEntry) -> Vec<MedianStrategy> {
    let mut strategies = vec![MedianStrategy::Auto, MedianStrategy::Generic];

    if entry.mask == [3, 3] || entry.mask == [5, 5] {
        strategies.push(MedianStrategy::SortingNetwork);
    }
    if entry.depth.to_bit_type().is_bounded() {
        strategies.push(MedianStrategy::SlidingHistogram);
    }
    strategies
}

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_median_scenarios() {
    let entries = load_entries("median_scenarios.json");
    let mut failed = Vec::new();

    for entry in &entries {
        let source = build_source(entry);

        for strategy in strategies(entry) {
            for threads in [1, 4] {
                let options = FilterOptions::default()
                    .set_strategy(strategy)
                    .set_num_threads(threads);

                let mut median = Median::new(3, 3).set_options(options);
                median.configure(
                    entry.mask[0],
                    entry.mask[1],
                    entry.anchor[0],
                    entry.anchor[1],
                    entry.clip_to_roi
                );

                let mut output = Image::new(1, 1, 1, BitType::U8);
                median.apply(&source, &mut output).unwrap();

                let found = output_samples(&output);
                let size = output.dimensions();

                if size != (entry.output_width, entry.output_height) || found != entry.expected {
                    eprintln!(
                        "Mismatch for {} with {:?} and {} threads\nExpected {:?} but found {:?}\n",
                        entry.name, strategy, threads, entry.expected, found
                    );
                    failed.push(entry.name.clone());
                }
            }
        }
    }
    assert!(failed.is_empty(), "failing scenarios: {failed:?}");
}

#[test]
fn corner_of_constant_columns() {
    // every row is 10 250 10 10 200, the top left window holds 10, 250, 10, 250
    let entries = load_entries("median_scenarios.json");
    let entry = entries
        .iter()
        .find(|e| e.name == "constant_columns_full")
        .unwrap();
    assert_eq!(&entry.expected[..5], &[250.0, 10.0, 10.0, 10.0, 200.0]);

    let source = build_source(entry);
    let mut median = Median::new(3, 3);
    median.configure(3, 3, 1, 1, false);

    let mut output = Image::new(1, 1, 1, BitType::U8);
    median.apply(&source, &mut output).unwrap();
    assert_eq!(output.roi_to_vec::<u8>(0).unwrap()[..5], [250, 10, 10, 10, 200]);
}

#[test]
fn even_mask_is_a_configuration_error() {
    let source = Image::from_fn::<u8, _>(10, 10, 1, |x, y, _| (x ^ y) as u8);
    let mut destination = Image::fill::<u8>(42, 10, 10, 1);
    destination.set_locked(true);

    let mut median = Median::new(3, 3);
    median.configure(4, 4, 2, 2, true);

    let result = median.apply(&source, &mut destination);
    assert!(matches!(
        result,
        Err(ImageErrors::OperationsError(ImageOperationsErrors::InvalidMask(..)))
    ));
    assert!(destination
        .roi_to_vec::<u8>(0)
        .unwrap()
        .iter()
        .all(|&x| x == 42));
}

#[test]
fn anchor_outside_mask_is_rejected() {
    let source = Image::fill::<u16>(5, 8, 8, 1);
    let mut destination = Image::new(1, 1, 1, BitType::U16);

    let mut median = Median::new(3, 3);
    median.configure(3, 3, 1, 3, false);

    assert!(matches!(
        median.apply(&source, &mut destination),
        Err(ImageErrors::OperationsError(ImageOperationsErrors::InvalidAnchor(..)))
    ));
}

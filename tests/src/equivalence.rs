/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Every kernel, lane width and thread count must produce the same image
use nanorand::Rng;
use rank_core::bit_depth::BitType;
use rank_core::options::{FilterOptions, MedianStrategy};
use rank_filter::median::Median;
use rank_filter::network::{median25, median9};
use rank_image::image::Image;

use crate::hash_image;

fn run(source: &Image, median: &Median, options: FilterOptions) -> Image {
    let mut output = Image::new(1, 1, 1, BitType::U8);
    median
        .clone()
        .set_options(options)
        .apply(source, &mut output)
        .unwrap();
    output
}

fn random_u8(width: usize, height: usize, channels: usize) -> Image {
    let mut rng = nanorand::WyRand::new();
    Image::from_fn::<u8, _>(width, height, channels, |_, _, _| rng.generate())
}

#[test]
fn histogram_matches_generic_on_signed_7x7() {
    let mut rng = nanorand::WyRand::new();
    let source = Image::from_fn::<i16, _>(9, 9, 1, |_, _, _| rng.generate_range(-30000_i16..30000));

    for clip in [true, false] {
        let mut median = Median::new(7, 7);
        median.configure(7, 7, 3, 3, clip);

        let generic = run(&source, &median, FilterOptions::default().set_strategy(MedianStrategy::Generic));
        let histogram = run(
            &source,
            &median,
            FilterOptions::default().set_strategy(MedianStrategy::SlidingHistogram)
        );

        assert_eq!(
            generic.roi_to_vec::<i16>(0).unwrap(),
            histogram.roi_to_vec::<i16>(0).unwrap()
        );
    }
}

#[test]
fn network_strategies_agree_on_integers() {
    let source_u8 = random_u8(67, 23, 3);

    let mut rng = nanorand::WyRand::new();
    let source_u16 = Image::from_fn::<u16, _>(45, 20, 2, |_, _, _| rng.generate());
    let source_i16 = Image::from_fn::<i16, _>(45, 20, 1, |_, _, _| rng.generate());

    for source in [&source_u8, &source_u16, &source_i16] {
        for size in [3, 5] {
            let mut median = Median::new(size, size);
            median.configure(size, size, size / 2, size / 2, false);

            let expected = hash_image(&run(
                source,
                &median,
                FilterOptions::default().set_strategy(MedianStrategy::Generic)
            ));

            let configurations = [
                FilterOptions::default().set_strategy(MedianStrategy::SortingNetwork),
                FilterOptions::default()
                    .set_strategy(MedianStrategy::SortingNetwork)
                    .set_use_simd(false),
                FilterOptions::default().set_strategy(MedianStrategy::SlidingHistogram),
                FilterOptions::new_scalar()
            ];
            for options in configurations {
                let found = hash_image(&run(source, &median, options));
                assert_eq!(found, expected, "{:?} {size}x{size} {options:?}", source.depth());
            }
        }
    }
}

#[test]
fn float_networks_agree_with_generic() {
    let mut rng = nanorand::WyRand::new();
    let source = Image::from_fn::<f32, _>(33, 17, 2, |_, _, _| {
        f32::from(rng.generate_range(0_u16..4096)) * 0.125 - 100.0
    });

    for size in [3, 5] {
        let median = Median::new(size, size);
        let generic = run(&source, &median, FilterOptions::default().set_strategy(MedianStrategy::Generic));

        for simd in [true, false] {
            let network = run(&source, &median, FilterOptions::default().set_use_simd(simd));
            assert_eq!(generic, network);
        }
    }
}

#[test]
fn thread_count_does_not_change_output() {
    let source = random_u8(40, 37, 2);

    for (w, h) in [(3, 3), (5, 5), (9, 3), (1, 11)] {
        let mut median = Median::new(w, h);
        median.configure(w, h, w / 2, h / 2, false);

        let single = hash_image(&run(&source, &median, FilterOptions::default()));
        for threads in [2, 3, 7, 64] {
            let many = hash_image(&run(
                &source,
                &median,
                FilterOptions::default().set_num_threads(threads)
            ));
            assert_eq!(single, many, "{w}x{h} mask on {threads} threads");
        }
    }
}

#[test]
fn networks_ignore_input_order() {
    let mut rng = nanorand::WyRand::new();

    let mut nine: [u8; 9] = [0; 9];
    rng.fill(&mut nine);
    let first = median9(nine);

    let mut twenty_five = [0_i16; 25];
    for (i, x) in twenty_five.iter_mut().enumerate() {
        *x = (i as i16 - 12) * 3;
    }
    let expected = median25(twenty_five);
    assert_eq!(expected, 0);

    for _ in 0..1000 {
        rng.shuffle(&mut nine);
        rng.shuffle(&mut twenty_five);
        assert_eq!(median9(nine), first);
        assert_eq!(median25(twenty_five), expected);
    }
}

#[test]
fn ramp_of_twenty_five() {
    let window: [u8; 25] = core::array::from_fn(|i| i as u8 + 1);
    assert_eq!(median25(window), 13);

    let source = Image::from_fn::<u8, _>(5, 5, 1, |x, y, _| (y * 5 + x + 1) as u8);
    let output = run(&source, &Median::new(5, 5), FilterOptions::default().set_strategy(MedianStrategy::Generic));
    assert_eq!(output.roi_to_vec::<u8>(0).unwrap(), [13]);
}

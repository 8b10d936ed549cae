/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Clipped windows at the image border, strided planes and regions of interest
use nanorand::Rng;
use rank_core::bit_depth::BitType;
use rank_core::options::FilterOptions;
use rank_filter::median::Median;
use rank_image::geometry::Rect;
use rank_image::image::Image;

/// Median of the in-bounds samples of every window, computed the slow way
fn brute_force(
    data: &[u16], width: usize, height: usize, mask: (usize, usize), anchor: (usize, usize)
) -> Vec<u16> {
    let mut out = Vec::with_capacity(width * height);

    for cy in 0..height {
        for cx in 0..width {
            let mut window = Vec::new();

            for y in cy.saturating_sub(anchor.1)..(cy + mask.1 - anchor.1).min(height) {
                for x in cx.saturating_sub(anchor.0)..(cx + mask.0 - anchor.0).min(width) {
                    window.push(data[y * width + x]);
                }
            }
            window.sort_unstable();
            out.push(window[window.len() / 2]);
        }
    }
    out
}

#[test]
fn border_uses_in_bounds_subset() {
    let mut rng = nanorand::WyRand::new();
    let (width, height) = (14, 11);
    let data: Vec<u16> = (0..width * height).map(|_| rng.generate_range(0_u16..50)).collect();
    let source = Image::from_planes(&[data.clone()], width, height).unwrap();

    for (mask, anchor) in [((3, 3), (1, 1)), ((5, 5), (0, 0)), ((5, 3), (4, 2)), ((9, 7), (4, 3))] {
        let mut median = Median::new(3, 3);
        median.configure(mask.0, mask.1, anchor.0, anchor.1, false);

        let mut output = Image::new(1, 1, 1, BitType::U8);
        median.apply(&source, &mut output).unwrap();

        assert_eq!(
            output.roi_to_vec::<u16>(0).unwrap(),
            brute_force(&data, width, height, mask, anchor),
            "mask {mask:?} anchor {anchor:?}"
        );
    }
}

#[test]
fn strided_source_and_destination() {
    let mut rng = nanorand::WyRand::new();
    let (width, height, stride) = (21, 13, 32);

    let packed = Image::from_fn::<u8, _>(width, height, 2, |_, _, _| rng.generate());
    let mut strided = Image::new_with_stride(width, height, stride, 2, BitType::U8).unwrap();

    for (channel, mut plane) in strided.planes_mut::<u8>().unwrap().into_iter().enumerate() {
        let source = packed.plane::<u8>(channel).unwrap();
        plane.fill(255);
        for y in 0..height {
            plane.row_mut(y).copy_from_slice(source.row(y));
        }
    }

    for size in [3, 5, 7] {
        let mut median = Median::new(size, size);
        median.configure(size, size, size / 2, size / 2, false);

        let mut expected = Image::new(1, 1, 1, BitType::U8);
        median.apply(&packed, &mut expected).unwrap();

        // a strided destination of the right shape is written in place
        let mut output = Image::new_with_stride(width, height, stride + 3, 2, BitType::U8).unwrap();
        output.set_locked(true);
        median.apply(&strided, &mut output).unwrap();

        for channel in 0..2 {
            assert_eq!(
                output.roi_to_vec::<u8>(channel).unwrap(),
                expected.roi_to_vec::<u8>(channel).unwrap(),
                "{size}x{size} channel {channel}"
            );
        }
    }
}

#[test]
fn roi_offset_reads_outside_the_roi() {
    // with clipping the windows of ROI pixels still see samples outside the ROI
    let source_data: Vec<u8> = (0..100).map(|i| ((i * 37) % 256) as u8).collect();
    let mut source = Image::from_planes(&[source_data], 10, 10).unwrap();

    let mut full = Image::new(1, 1, 1, BitType::U8);
    Median::new(3, 3).apply(&source, &mut full).unwrap();
    let full = full.roi_to_vec::<u8>(0).unwrap();

    source.set_roi(Rect::new(2, 3, 4, 5)).unwrap();
    let mut output = Image::new(1, 1, 1, BitType::U8);
    Median::new(3, 3).apply(&source, &mut output).unwrap();
    assert_eq!(output.dimensions(), (4, 5));

    // the full clipped output starts at source pixel (1, 1) and is 8 wide
    let found = output.roi_to_vec::<u8>(0).unwrap();
    for y in 0..5 {
        for x in 0..4 {
            assert_eq!(found[y * 4 + x], full[(y + 2) * 8 + x + 1]);
        }
    }
}

#[test]
fn roi_touching_the_border_is_clipped_to_full_windows() {
    let source = Image::fill::<i16>(-4, 12, 9, 1);
    let mut roi_source = source.clone();
    roi_source.set_roi(Rect::new(0, 0, 6, 9)).unwrap();

    let median = Median::new(5, 5).set_options(FilterOptions::default().set_num_threads(2));
    let mut output = Image::new(1, 1, 1, BitType::U8);
    median.apply(&roi_source, &mut output).unwrap();

    // columns 0 and 1 and the top and bottom two rows have incomplete windows
    assert_eq!(output.dimensions(), (4, 5));
    assert!(output.roi_to_vec::<i16>(0).unwrap().iter().all(|&x| x == -4));
}

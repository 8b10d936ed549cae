/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Strided views into a single channel
//!
//! A plane is `height` rows of `width` samples, row `y` starting at `y * stride`
//! in the backing slice. The stride may exceed the width, e.g. when the plane is a
//! sub-region of a larger image.
//!
//! Constructors check that every addressable sample lies inside the backing slice,
//! so row and sample access afterwards is plain slice indexing.

use crate::geometry::Rect;

/// Minimum number of backing elements for a plane of the given geometry
const fn required_len(width: usize, height: usize, stride: usize) -> usize {
    if height == 0 || width == 0 {
        0
    } else {
        (height - 1) * stride + width
    }
}

/// A read only strided plane
#[derive(Copy, Clone, Debug)]
pub struct PlaneView<'a, T> {
    data:   &'a [T],
    width:  usize,
    height: usize,
    stride: usize
}

impl<'a, T: Copy> PlaneView<'a, T> {
    /// Create a view, returns `None` if the stride is smaller than
    /// the width or `data` is too short.
    pub fn new(data: &'a [T], width: usize, height: usize, stride: usize) -> Option<Self> {
        if stride < width || data.len() < required_len(width, height, stride) {
            return None;
        }
        Some(PlaneView {
            data,
            width,
            height,
            stride
        })
    }

    /// A plane whose rows are packed back to back
    pub fn from_packed(data: &'a [T], width: usize, height: usize) -> Option<Self> {
        PlaneView::new(data, width, height, width)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Return row `y` as a slice of `width` samples
    ///
    /// # Panics
    /// If `y >= height`
    #[inline]
    pub fn row(&self, y: usize) -> &'a [T] {
        assert!(y < self.height, "row {y} outside a plane of height {}", self.height);
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }

    /// Sample at `(x, y)` or `None` when outside the plane
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&'a T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.stride + x)
    }

    /// A view of the rectangle `rect`, `None` if it does not fit
    pub fn sub_view(&self, rect: Rect) -> Option<PlaneView<'a, T>> {
        if rect.right() > self.width || rect.bottom() > self.height {
            return None;
        }
        let start = (rect.y * self.stride + rect.x).min(self.data.len());
        PlaneView::new(&self.data[start..], rect.width, rect.height, self.stride)
    }

    /// Iterate over the rows of the plane
    pub fn rows(&self) -> impl Iterator<Item = &'a [T]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    /// Copy the plane into a packed vector
    pub fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.width * self.height);
        for row in self.rows() {
            out.extend_from_slice(row);
        }
        out
    }
}

/// A mutable strided plane
#[derive(Debug)]
pub struct PlaneViewMut<'a, T> {
    data:   &'a mut [T],
    width:  usize,
    height: usize,
    stride: usize
}

impl<'a, T: Copy> PlaneViewMut<'a, T> {
    /// Create a view, returns `None` if the stride is smaller than
    /// the width or `data` is too short.
    pub fn new(data: &'a mut [T], width: usize, height: usize, stride: usize) -> Option<Self> {
        if stride < width || data.len() < required_len(width, height, stride) {
            return None;
        }
        Some(PlaneViewMut {
            data,
            width,
            height,
            stride
        })
    }

    /// A plane whose rows are packed back to back
    pub fn from_packed(data: &'a mut [T], width: usize, height: usize) -> Option<Self> {
        PlaneViewMut::new(data, width, height, width)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Return row `y` as a mutable slice of `width` samples
    ///
    /// # Panics
    /// If `y >= height`
    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [T] {
        assert!(y < self.height, "row {y} outside a plane of height {}", self.height);
        let start = y * self.stride;
        &mut self.data[start..start + self.width]
    }

    /// A mutable view of the rectangle `rect`, `None` if it does not fit
    pub fn sub_view_mut(&mut self, rect: Rect) -> Option<PlaneViewMut<'_, T>> {
        if rect.right() > self.width || rect.bottom() > self.height {
            return None;
        }
        let start = (rect.y * self.stride + rect.x).min(self.data.len());
        PlaneViewMut::new(&mut self.data[start..], rect.width, rect.height, self.stride)
    }

    /// Consume the view and return the same rectangle with the full lifetime
    pub fn into_sub_view(self, rect: Rect) -> Option<PlaneViewMut<'a, T>> {
        if rect.right() > self.width || rect.bottom() > self.height {
            return None;
        }
        let start = (rect.y * self.stride + rect.x).min(self.data.len());
        PlaneViewMut::new(&mut self.data[start..], rect.width, rect.height, self.stride)
    }

    /// Split into rows `[0, y)` and `[y, height)`
    ///
    /// The two halves never alias, so they can be handed to different threads.
    pub fn split_at_row(self, y: usize) -> (PlaneViewMut<'a, T>, PlaneViewMut<'a, T>) {
        let y = y.min(self.height);
        let split = (y * self.stride).min(self.data.len());
        let (top, bottom) = self.data.split_at_mut(split);

        (
            PlaneViewMut {
                data:   top,
                width:  self.width,
                height: y,
                stride: self.stride
            },
            PlaneViewMut {
                data:   bottom,
                width:  self.width,
                height: self.height - y,
                stride: self.stride
            }
        )
    }

    /// Split the rows into at most `bands` disjoint views of nearly equal height
    ///
    /// Returns the first row of each band together with the band.
    pub fn into_bands(self, bands: usize) -> Vec<(usize, PlaneViewMut<'a, T>)> {
        let bands = bands.clamp(1, self.height.max(1));
        let rows_per_band = self.height.div_ceil(bands);

        let mut out = Vec::with_capacity(bands);
        let mut rest = self;
        let mut first_row = 0;

        while rest.height > rows_per_band {
            let (band, remainder) = rest.split_at_row(rows_per_band);
            out.push((first_row, band));
            first_row += rows_per_band;
            rest = remainder;
        }
        out.push((first_row, rest));
        out
    }

    /// Set every sample of the plane to `value`
    pub fn fill(&mut self, value: T) {
        for y in 0..self.height {
            self.row_mut(y).fill(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;

    use crate::geometry::Rect;
    use crate::plane::{PlaneView, PlaneViewMut};

    #[test]
    fn strided_rows_skip_padding() {
        let data: Vec<u8> = (0..20).collect();
        let view = PlaneView::new(&data, 3, 4, 5).unwrap();
        assert_eq!(view.row(0), &[0, 1, 2]);
        assert_eq!(view.row(3), &[15, 16, 17]);
        assert_eq!(view.get(3, 0), None);
        assert_eq!(view.to_vec().len(), 12);
    }

    #[test]
    fn short_data_is_rejected() {
        // 3 rows of 3 with a stride of 4 need (3 - 1) * 4 + 3 samples
        let exact = [0_u8; 11];
        let short = [0_u8; 10];
        assert!(PlaneView::new(&exact, 3, 3, 4).is_some());
        assert!(PlaneView::new(&short, 3, 3, 4).is_none());
        assert!(PlaneView::new(&exact, 3, 3, 5).is_none());
        assert!(PlaneView::new(&short, 5, 1, 4).is_none());
        assert!(PlaneViewMut::new(&mut [0_u8; 10], 3, 3, 4).is_none());
    }

    #[test]
    fn sub_views_keep_the_stride() {
        let data: Vec<u16> = (0..36).collect();
        let view = PlaneView::from_packed(&data, 6, 6).unwrap();
        let sub = view.sub_view(Rect::new(2, 3, 3, 2)).unwrap();
        assert_eq!(sub.row(0), &[20, 21, 22]);
        assert_eq!(sub.row(1), &[26, 27, 28]);
        assert!(view.sub_view(Rect::new(4, 4, 3, 1)).is_none());
    }

    #[test]
    fn bands_cover_every_row_once() {
        let mut data = vec![0_u8; 7 * 10];
        let view = PlaneViewMut::new(&mut data, 6, 10, 7).unwrap();
        let bands = view.into_bands(3);
        assert_eq!(bands.len(), 3);

        let mut expected_start = 0;
        for (start, mut band) in bands {
            assert_eq!(start, expected_start);
            expected_start += band.height();
            band.fill(start as u8 + 1);
        }
        assert_eq!(expected_start, 10);
        // padding columns untouched
        assert!(data.chunks_exact(7).all(|row| row[6] == 0));
        assert_eq!(data[0], 1);
        assert_eq!(data[7 * 9], 9);
    }

    #[test]
    fn random_bands_and_sub_views() {
        let mut rng = nanorand::WyRand::new();

        for _ in 0..500 {
            let width = rng.generate_range(1_usize..12);
            let height = rng.generate_range(1_usize..40);
            let stride = width + rng.generate_range(0_usize..5);
            let bands = rng.generate_range(1_usize..16);
            let len = (height - 1) * stride + width;

            let mut data = vec![0_u8; len];
            let view = PlaneViewMut::new(&mut data, width, height, stride).unwrap();
            let split = view.into_bands(bands);
            assert!(split.len() <= bands);

            let mut owner = vec![0_u8; height];
            let mut expected_start = 0;
            for (id, (start, mut band)) in split.into_iter().enumerate() {
                assert_eq!(start, expected_start);
                assert!(band.height() > 0);
                owner[start..start + band.height()].fill(id as u8 + 1);
                expected_start += band.height();
                band.fill(id as u8 + 1);
            }
            assert_eq!(expected_start, height);

            for (y, row) in data.chunks(stride).enumerate() {
                assert!(row[..width].iter().all(|x| *x == owner[y]));
                assert!(row[width..].iter().all(|x| *x == 0));
            }

            let mut samples = vec![0_u16; len];
            rng.fill(&mut samples);
            let view = PlaneView::new(&samples, width, height, stride).unwrap();

            let rx = rng.generate_range(0..width);
            let ry = rng.generate_range(0..height);
            let rect = Rect::new(
                rx,
                ry,
                rng.generate_range(1..=width - rx),
                rng.generate_range(1..=height - ry)
            );
            let sub = view.sub_view(rect).unwrap();
            for y in 0..rect.height {
                for x in 0..rect.width {
                    assert_eq!(
                        sub.get(x, y),
                        Some(&samples[(rect.y + y) * stride + rect.x + x])
                    );
                }
            }
            let wide = Rect::new(rx, ry, width - rx + 1, 1);
            assert!(view.sub_view(wide).is_none());
        }
    }
}

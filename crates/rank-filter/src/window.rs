/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Gathering the samples under a mask
//!
//! A window is placed so that the anchor lands on the centre pixel, for a
//! centre `(cx, cy)` it covers columns `cx - ax .. cx - ax + mw` and rows
//! `cy - ay .. cy - ay + mh`. Near the image border part of that lies
//! outside the plane, the sampler only returns what is inside.
use rank_image::geometry::{Point, Rect, Size};
use rank_image::plane::PlaneView;

use crate::utils::z_prefetch;

/// Reads clipped windows from a plane
#[derive(Copy, Clone, Debug)]
pub struct WindowSampler<'a, T> {
    plane:  PlaneView<'a, T>,
    mask:   Size,
    anchor: Point
}

impl<'a, T: Copy> WindowSampler<'a, T> {
    /// Create a sampler, the anchor must lie inside the mask
    pub fn new(plane: PlaneView<'a, T>, mask: Size, anchor: Point) -> WindowSampler<'a, T> {
        debug_assert!(anchor.x < mask.width && anchor.y < mask.height);
        WindowSampler {
            plane,
            mask,
            anchor
        }
    }

    /// The part of the window around `(cx, cy)` that lies inside the plane
    ///
    /// The result is empty if the centre is so far outside the plane that
    /// the window misses it entirely.
    pub fn clipped_window(&self, cx: usize, cy: usize) -> Rect {
        let x_start = cx.saturating_sub(self.anchor.x);
        let y_start = cy.saturating_sub(self.anchor.y);

        let x_end = (cx + self.mask.width - self.anchor.x).min(self.plane.width());
        let y_end = (cy + self.mask.height - self.anchor.y).min(self.plane.height());

        Rect::new(
            x_start,
            y_start,
            x_end.saturating_sub(x_start),
            y_end.saturating_sub(y_start)
        )
    }

    /// Returns true if no part of the window around `(cx, cy)` is clipped
    pub fn is_complete(&self, cx: usize, cy: usize) -> bool {
        cx >= self.anchor.x
            && cy >= self.anchor.y
            && cx + self.mask.width - self.anchor.x <= self.plane.width()
            && cy + self.mask.height - self.anchor.y <= self.plane.height()
    }

    /// Replace the contents of `buffer` with the in-bounds samples of the
    /// window around `(cx, cy)`, row by row.
    ///
    /// Returns the number of samples gathered.
    pub fn gather_into(&self, cx: usize, cy: usize, buffer: &mut Vec<T>) -> usize {
        let window = self.clipped_window(cx, cy);
        buffer.clear();

        if window.is_empty() {
            return 0;
        }
        for y in window.y..window.bottom() {
            let row = self.plane.row(y);
            buffer.extend_from_slice(&row[window.x..window.right()]);
        }
        if window.bottom() < self.plane.height() {
            // next centre down will need this row
            z_prefetch(self.plane.row(window.bottom()), window.x);
        }
        buffer.len()
    }
}

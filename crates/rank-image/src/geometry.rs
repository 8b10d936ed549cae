/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Points, sizes and rectangles in pixel coordinates

use std::fmt::{Display, Formatter};

/// A pixel position
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Point {
        Point { x, y }
    }
}

/// Width and height of something rectangular
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Size {
    pub width:  usize,
    pub height: usize
}

impl Size {
    pub const fn new(width: usize, height: usize) -> Size {
        Size { width, height }
    }

    /// Number of pixels covered
    pub const fn area(self) -> usize {
        self.width * self.height
    }

    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl Display for Size {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// An axis aligned rectangle, `x` and `y` are the top left corner
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Rect {
    pub x:      usize,
    pub y:      usize,
    pub width:  usize,
    pub height: usize
}

impl Rect {
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Rect {
        Rect {
            x,
            y,
            width,
            height
        }
    }

    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// One past the last column
    pub const fn right(&self) -> usize {
        self.x + self.width
    }

    /// One past the last row
    pub const fn bottom(&self) -> usize {
        self.y + self.height
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns true if the rectangle lies completely inside
    /// an area of `size` anchored at the origin
    pub const fn fits_in(&self, size: Size) -> bool {
        self.right() <= size.width && self.bottom() <= size.height
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{}) {}x{}", self.x, self.y, self.width, self.height)
    }
}

#[test]
fn rect_fits() {
    let rect = Rect::new(2, 3, 4, 5);
    assert!(rect.fits_in(Size::new(6, 8)));
    assert!(!rect.fits_in(Size::new(5, 8)));
    assert_eq!(rect.size().area(), 20);
}

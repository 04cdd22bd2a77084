use std::ops::{Index, IndexMut};

use crate::Color;

/// Per-pixel radiance sums, row-major with `index = row * width + col`.
///
/// Row 0 is the bottom of the image.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixel_data: Box<[Color]>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixel_data: vec![Color::zeros(); width * height].into_boxed_slice(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.pixel_data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixel_data.is_empty()
    }

    pub fn pixel_data(&self) -> &[Color] {
        &self.pixel_data
    }

    pub(crate) fn pixel_data_mut(&mut self) -> &mut [Color] {
        &mut self.pixel_data
    }

    pub fn index_of(&self, x: usize, y: usize) -> usize {
        x + y * self.width
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        let index = self.index_of(x, y);
        self.pixel_data[index] = color;
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Color {
        self.pixel_data[self.index_of(x, y)]
    }

    /// Rows from the top of the image down, the order image formats expect.
    pub fn rows_top_down(&self) -> impl Iterator<Item = &[Color]> {
        self.pixel_data.chunks(self.width.max(1)).rev()
    }
}

impl Index<(usize, usize)> for FrameBuffer {
    type Output = Color;

    fn index(&self, (x, y): (usize, usize)) -> &Color {
        &self.pixel_data[self.index_of(x, y)]
    }
}

impl IndexMut<(usize, usize)> for FrameBuffer {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Color {
        let index = self.index_of(x, y);
        &mut self.pixel_data[index]
    }
}

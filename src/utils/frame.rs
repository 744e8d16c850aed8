//! frame.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! In-memory monochrome frame the size of the OLED, plus the `FrameSink` trait the
//! display transport implements. The buffer uses the SSD1306 page layout: one byte is a
//! vertical strip of eight pixels, pages of 128 bytes stacked top to bottom.

use embedded_graphics::{Pixel, pixelcolor::BinaryColor, prelude::*};

use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::error::Error;

pub const FRAME_BYTES: usize = (DISPLAY_WIDTH * DISPLAY_HEIGHT / 8) as usize;

/// Pushes a finished frame to the panel.
pub trait FrameSink {
    fn flush(&mut self, frame: &Frame) -> Result<(), Error>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    buffer: [u8; FRAME_BYTES],
}

impl Frame {
    pub const fn new() -> Self {
        Frame {
            buffer: [0; FRAME_BYTES],
        }
    }

    /// Turn every pixel off.
    pub fn clear_buffer(&mut self) {
        self.buffer.fill(0);
    }

    pub fn pixel(&self, x: i32, y: i32) -> bool {
        match Self::locate(x, y) {
            Some((index, mask)) => self.buffer[index] & mask != 0,
            None => false,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn lit_count(&self) -> usize {
        self.buffer.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Every pixel of the frame, lit or not, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel<BinaryColor>> + '_ {
        (0..DISPLAY_HEIGHT).flat_map(move |y| {
            (0..DISPLAY_WIDTH).map(move |x| {
                Pixel(Point::new(x, y), BinaryColor::from(self.pixel(x, y)))
            })
        })
    }

    fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if let Some((index, mask)) = Self::locate(x, y) {
            if on {
                self.buffer[index] |= mask;
            } else {
                self.buffer[index] &= !mask;
            }
        }
    }

    fn locate(x: i32, y: i32) -> Option<(usize, u8)> {
        if !(0..DISPLAY_WIDTH).contains(&x) || !(0..DISPLAY_HEIGHT).contains(&y) {
            return None;
        }
        let index = (x + (y / 8) * DISPLAY_WIDTH) as usize;
        Some((index, 1 << (y % 8)))
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for Frame {
    fn size(&self) -> Size {
        Size::new(DISPLAY_WIDTH as u32, DISPLAY_HEIGHT as u32)
    }
}

impl DrawTarget for Frame {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.is_on());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    #[test]
    fn page_layout() {
        let mut frame = Frame::new();
        frame.set_pixel(3, 9, true);
        assert_eq!(frame.as_bytes()[3 + 128], 0b0000_0010);
        assert!(frame.pixel(3, 9));
        assert_eq!(frame.lit_count(), 1);
    }

    #[test]
    fn out_of_bounds_pixels_are_ignored() {
        let mut frame = Frame::new();
        frame
            .draw_iter([
                Pixel(Point::new(-1, 0), BinaryColor::On),
                Pixel(Point::new(128, 0), BinaryColor::On),
                Pixel(Point::new(0, 64), BinaryColor::On),
            ])
            .unwrap();
        assert_eq!(frame.lit_count(), 0);
        assert!(!frame.pixel(-1, 0));
    }

    #[test]
    fn draws_primitives_and_clears() {
        let mut frame = Frame::new();
        Rectangle::new(Point::new(10, 10), Size::new(4, 4))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut frame)
            .unwrap();
        assert_eq!(frame.lit_count(), 16);
        assert!(frame.pixel(13, 13));
        assert!(!frame.pixel(14, 13));

        frame.clear_buffer();
        assert_eq!(frame, Frame::new());
    }

    #[test]
    fn pixel_iterator_covers_panel() {
        let mut frame = Frame::new();
        frame.set_pixel(127, 63, true);
        let pixels: Vec<_> = frame.pixels().collect();
        assert_eq!(pixels.len(), FRAME_BYTES * 8);
        let lit: Vec<_> = pixels.iter().filter(|p| p.1.is_on()).collect();
        assert_eq!(lit.len(), 1);
        assert_eq!(lit[0].0, Point::new(127, 63));
    }
}

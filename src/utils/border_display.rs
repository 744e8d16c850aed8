//! border_display.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! The border_display module composes each OLED frame: the outline pattern for the
//! current BorderStyle with the filled cursor square drawn on top. FrameRenderer owns the
//! Frame while it is being drawn and lends it to a FrameSink for the bus transfer, so a
//! failed transfer never leaves a half-drawn buffer behind.

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment},
};

use crate::config::{BORDER_SPACING, CURSOR_SIZE, DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::error::Error;
use crate::utils::cursor::CursorPosition;
use crate::utils::frame::{Frame, FrameSink};
use crate::utils::system_state::BorderStyle;

/// PUBLIC
/// Draw the outlines for `style`: one at the panel edge, then each further outline
/// BORDER_SPACING pixels inside the previous one.
pub fn draw_border<D>(target: &mut D, style: BorderStyle) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let outline = PrimitiveStyleBuilder::new()
        .stroke_color(BinaryColor::On)
        .stroke_width(1)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();

    for ring in 0..style.outlines() {
        let inset = ring * BORDER_SPACING;
        Rectangle::new(
            Point::new(inset, inset),
            Size::new(
                (DISPLAY_WIDTH - 2 * inset) as u32,
                (DISPLAY_HEIGHT - 2 * inset) as u32,
            ),
        )
        .into_styled(outline)
        .draw(target)?;
    }
    Ok(())
}

/// PUBLIC
/// Draw the filled cursor square with its top-left corner at `pos`.
pub fn draw_cursor<D>(target: &mut D, pos: CursorPosition) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Rectangle::new(Point::new(pos.x, pos.y), Size::new_equal(CURSOR_SIZE as u32))
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(target)
}

/// FrameRenderer struct declaration: holds the single frame buffer that is cleared and
/// fully redrawn every cycle.
pub struct FrameRenderer {
    frame: Frame,
}

impl FrameRenderer {
    pub const fn new() -> Self {
        FrameRenderer { frame: Frame::new() }
    }

    /// PUBLIC
    /// Clear the buffer and draw border then cursor. The same inputs always produce the
    /// same bytes.
    pub fn compose(&mut self, style: BorderStyle, cursor: CursorPosition) -> &Frame {
        self.frame.clear_buffer();
        draw_border(&mut self.frame, style).unwrap_or_else(|never| match never {});
        draw_cursor(&mut self.frame, cursor).unwrap_or_else(|never| match never {});
        &self.frame
    }

    /// PUBLIC
    /// Compose a frame and hand it to `sink`. Transport errors are returned as is.
    pub fn render<S: FrameSink>(
        &mut self,
        style: BorderStyle,
        cursor: CursorPosition,
        sink: &mut S,
    ) -> Result<(), Error> {
        self.compose(style, cursor);
        sink.flush(&self.frame)
    }

    /// PUBLIC
    /// The most recently composed frame.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSink;

    impl FrameSink for FailingSink {
        fn flush(&mut self, _frame: &Frame) -> Result<(), Error> {
            Err(Error::Display)
        }
    }

    fn rendered(style: BorderStyle, cursor: CursorPosition) -> Frame {
        let mut renderer = FrameRenderer::new();
        renderer.compose(style, cursor).clone()
    }

    const CURSOR: CursorPosition = CursorPosition { x: 60, y: 28 };

    #[test]
    fn solid_has_single_outline() {
        let frame = rendered(BorderStyle::Solid, CURSOR);
        assert!(frame.pixel(0, 0));
        assert!(frame.pixel(127, 63));
        assert!(frame.pixel(64, 0));
        assert!(!frame.pixel(2, 2));
        assert!(!frame.pixel(1, 1));
    }

    #[test]
    fn double_adds_inner_outline() {
        let frame = rendered(BorderStyle::Double, CURSOR);
        assert!(frame.pixel(0, 0));
        assert!(frame.pixel(2, 2));
        assert!(frame.pixel(125, 61));
        assert!(!frame.pixel(1, 1));
        assert!(!frame.pixel(4, 4));
    }

    #[test]
    fn spaced_has_three_outlines() {
        let frame = rendered(BorderStyle::Spaced, CURSOR);
        for inset in [0, 2, 4] {
            assert!(frame.pixel(inset, inset));
            assert!(frame.pixel(127 - inset, 63 - inset));
        }
        assert!(!frame.pixel(3, 3));
        assert!(!frame.pixel(6, 6));
    }

    #[test]
    fn cursor_is_filled_square() {
        let frame = rendered(BorderStyle::Solid, CURSOR);
        for dy in 0..8 {
            for dx in 0..8 {
                assert!(frame.pixel(60 + dx, 28 + dy));
            }
        }
        assert!(!frame.pixel(68, 28));
        assert!(!frame.pixel(60, 36));
        // outline pixels: 2 * 128 + 2 * 62
        assert_eq!(frame.lit_count(), 380 + 64);
    }

    #[test]
    fn compose_is_idempotent() {
        let mut renderer = FrameRenderer::new();
        let first = renderer.compose(BorderStyle::Spaced, CURSOR).clone();
        renderer.compose(BorderStyle::Solid, CursorPosition { x: 3, y: 3 });
        let again = renderer.compose(BorderStyle::Spaced, CURSOR).clone();
        assert_eq!(first, again);
    }

    #[test]
    fn failed_flush_keeps_frame() {
        let mut renderer = FrameRenderer::new();
        let result = renderer.render(BorderStyle::Double, CURSOR, &mut FailingSink);
        assert_eq!(result, Err(Error::Display));
        assert_eq!(*renderer.frame(), rendered(BorderStyle::Double, CURSOR));
    }
}

use std::convert::Infallible;

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_7X14, FONT_9X18_BOLD, FONT_10X20},
    },
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{Ellipse, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

use crate::geometry::Rect;

pub type Color = Rgb888;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum FontKind {
    Title,
    Message,
    Hud,
}

/// Font handles owned by the session and lent to the canvas.
#[derive(Clone, Copy)]
pub struct Fonts {
    pub title: &'static MonoFont<'static>,
    pub message: &'static MonoFont<'static>,
    pub hud: &'static MonoFont<'static>,
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            title: &FONT_10X20,
            message: &FONT_7X14,
            hud: &FONT_9X18_BOLD,
        }
    }
}

impl Fonts {
    pub fn get(&self, kind: FontKind) -> &'static MonoFont<'static> {
        match kind {
            FontKind::Title => self.title,
            FontKind::Message => self.message,
            FontKind::Hud => self.hud,
        }
    }
}

/// Drawing surface the renderer paints on.
pub trait Canvas {
    fn surface_size(&self) -> (i32, i32);
    fn fill_background(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Outline drawn inside `rect`.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: u32);
    fn fill_ellipse(&mut self, rect: Rect, color: Color);
    fn stroke_ellipse(&mut self, rect: Rect, color: Color, width: u32);
    fn text_size(&self, text: &str, font: FontKind) -> (i32, i32);
    /// Draws `text` centered on `center`.
    fn draw_text(&mut self, text: &str, center: (i32, i32), font: FontKind, color: Color);
}

/// RGBA frame buffer, as handed out by `pixels::Pixels::frame_mut`.
pub struct FrameCanvas<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
    fonts: Fonts,
}

impl<'a> FrameCanvas<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32, fonts: Fonts) -> Self {
        Self { frame, width, height, fonts }
    }
}

fn to_rectangle(rect: Rect) -> Rectangle {
    Rectangle::new(
        Point::new(rect.x, rect.y),
        Size::new(rect.width.max(0) as u32, rect.height.max(0) as u32),
    )
}

fn to_ellipse(rect: Rect) -> Ellipse {
    Ellipse::new(
        Point::new(rect.x, rect.y),
        Size::new(rect.width.max(0) as u32, rect.height.max(0) as u32),
    )
}

fn stroke(color: Color, width: u32) -> PrimitiveStyle<Color> {
    PrimitiveStyleBuilder::new()
        .stroke_color(color)
        .stroke_width(width)
        .stroke_alignment(StrokeAlignment::Inside)
        .build()
}

fn done<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

impl DrawTarget for FrameCanvas<'_> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            let (x, y) = (point.x as u32, point.y as u32);
            if x >= self.width || y >= self.height {
                continue;
            }
            let i = ((y * self.width + x) * 4) as usize;
            if i + 4 <= self.frame.len() {
                self.frame[i..i + 4].copy_from_slice(&[color.r(), color.g(), color.b(), 0xFF]);
            }
        }
        Ok(())
    }
}

impl OriginDimensions for FrameCanvas<'_> {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Canvas for FrameCanvas<'_> {
    fn surface_size(&self) -> (i32, i32) {
        (self.width as i32, self.height as i32)
    }

    fn fill_background(&mut self, color: Color) {
        for pixel in self.frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&[color.r(), color.g(), color.b(), 0xFF]);
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        done(to_rectangle(rect).into_styled(PrimitiveStyle::with_fill(color)).draw(self));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: u32) {
        done(to_rectangle(rect).into_styled(stroke(color, width)).draw(self));
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        done(to_ellipse(rect).into_styled(PrimitiveStyle::with_fill(color)).draw(self));
    }

    fn stroke_ellipse(&mut self, rect: Rect, color: Color, width: u32) {
        done(to_ellipse(rect).into_styled(stroke(color, width)).draw(self));
    }

    fn text_size(&self, text: &str, font: FontKind) -> (i32, i32) {
        let font = self.fonts.get(font);
        let chars = text.chars().count() as u32;
        let width = chars * font.character_size.width
            + chars.saturating_sub(1) * font.character_spacing;
        (width as i32, font.character_size.height as i32)
    }

    fn draw_text(&mut self, text: &str, center: (i32, i32), font: FontKind, color: Color) {
        let style = MonoTextStyle::new(self.fonts.get(font), color);
        let layout = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();
        let position = Point::new(center.0, center.1);
        done(Text::with_text_style(text, position, style, layout).draw(self));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: u32 = 40;
    const H: u32 = 30;

    fn pixel(frame: &[u8], x: u32, y: u32) -> [u8; 4] {
        let i = ((y * W + x) * 4) as usize;
        [frame[i], frame[i + 1], frame[i + 2], frame[i + 3]]
    }

    #[test]
    fn fill_rect_paints_exactly_its_area() {
        let mut frame = vec![0u8; (W * H * 4) as usize];
        let mut canvas = FrameCanvas::new(&mut frame, W, H, Fonts::default());
        canvas.fill_rect(Rect::new(2, 3, 4, 5), Rgb888::new(255, 0, 0));
        assert_eq!(pixel(&frame, 2, 3), [255, 0, 0, 255]);
        assert_eq!(pixel(&frame, 5, 7), [255, 0, 0, 255]);
        assert_eq!(pixel(&frame, 6, 7), [0, 0, 0, 0]);
        assert_eq!(pixel(&frame, 2, 8), [0, 0, 0, 0]);
    }

    #[test]
    fn stroke_stays_inside_the_rect() {
        let mut frame = vec![0u8; (W * H * 4) as usize];
        let mut canvas = FrameCanvas::new(&mut frame, W, H, Fonts::default());
        canvas.stroke_rect(Rect::new(10, 10, 10, 10), Rgb888::WHITE, 2);
        assert_eq!(pixel(&frame, 10, 10), [255, 255, 255, 255]);
        assert_eq!(pixel(&frame, 11, 15), [255, 255, 255, 255]);
        assert_eq!(pixel(&frame, 15, 15), [0, 0, 0, 0]);
        assert_eq!(pixel(&frame, 9, 10), [0, 0, 0, 0]);
    }

    #[test]
    fn drawing_off_the_frame_is_clipped() {
        let mut frame = vec![0u8; (W * H * 4) as usize];
        let mut canvas = FrameCanvas::new(&mut frame, W, H, Fonts::default());
        canvas.fill_rect(Rect::new(-10, -10, 15, 15), Rgb888::GREEN);
        canvas.fill_ellipse(Rect::new(30, 20, 40, 40), Rgb888::GREEN);
        assert_eq!(pixel(&frame, 4, 4), [0, 255, 0, 255]);
        assert_eq!(pixel(&frame, 5, 5), [0, 0, 0, 0]);
    }

    #[test]
    fn background_fills_every_pixel() {
        let mut frame = vec![7u8; (W * H * 4) as usize];
        let mut canvas = FrameCanvas::new(&mut frame, W, H, Fonts::default());
        canvas.fill_background(Rgb888::BLACK);
        assert!(frame.chunks_exact(4).all(|p| p == [0, 0, 0, 255]));
    }

    #[test]
    fn text_is_measured_and_drawn() {
        let mut frame = vec![0u8; (200 * 50 * 4) as usize];
        let mut canvas = FrameCanvas::new(&mut frame, 200, 50, Fonts::default());
        assert_eq!(canvas.text_size("ABC", FontKind::Title), (30, 20));
        assert_eq!(canvas.text_size("", FontKind::Hud), (0, 18));
        canvas.draw_text("SNAKE", (100, 25), FontKind::Title, Rgb888::WHITE);
        assert!(frame.chunks_exact(4).any(|p| p == [255, 255, 255, 255]));
    }
}

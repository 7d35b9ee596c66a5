//! `DisplayDriver` over embedded-graphics

use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use tostada_core::traits::{DisplayDriver, DisplayError};
use tostada_core::{Color, Point as PanelPoint, Rect};

/// Convert a packed panel color into an embedded-graphics color
pub fn to_rgb565(color: Color) -> Rgb565 {
    Rgb565::from(RawU16::new(color.raw()))
}

/// Backend drawing the panel onto any RGB565 draw target
pub struct GraphicsBackend<D> {
    target: D,
}

impl<D> GraphicsBackend<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: D) -> Self {
        Self { target }
    }

    /// Access the underlying target
    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn release(self) -> D {
        self.target
    }

    fn rectangle(rect: Rect) -> Result<Rectangle, DisplayError> {
        if rect.w < 0 || rect.h < 0 {
            return Err(DisplayError::InvalidCoordinates);
        }
        Ok(Rectangle::new(
            Point::new(rect.x, rect.y),
            Size::new(rect.w as u32, rect.h as u32),
        ))
    }
}

impl<D> DisplayDriver for GraphicsBackend<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn fill_screen(&mut self, color: Color) -> Result<(), DisplayError> {
        self.target
            .clear(to_rgb565(color))
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) -> Result<(), DisplayError> {
        Self::rectangle(rect)?
            .into_styled(PrimitiveStyle::with_stroke(to_rgb565(color), 1))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), DisplayError> {
        self.target
            .fill_solid(&Self::rectangle(rect)?, to_rgb565(color))
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_text(
        &mut self,
        origin: PanelPoint,
        text: &str,
        color: Color,
    ) -> Result<(), DisplayError> {
        let style = MonoTextStyle::new(&FONT_10X20, to_rgb565(color));
        Text::with_baseline(text, Point::new(origin.x, origin.y), style, Baseline::Top)
            .draw(&mut self.target)
            .map(|_| ())
            .map_err(|_| DisplayError::Communication)
    }
}

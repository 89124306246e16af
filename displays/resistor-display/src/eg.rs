//! `embedded-graphics` backend
//!
//! Rasterizes draw operations onto any RGB888 draw target. Artwork comes in
//! as raw big-endian RGB888 images; in [`CompositeMode::Set`] pixels of the
//! key color are skipped so the board color shows through.
//!
//! Labels use the ISO 8859-7 mono fonts, which carry the `Ω` glyph.

use embedded_graphics::{
    image::{Image, ImageRaw},
    mono_font::{iso_8859_7, MonoFont, MonoTextStyle},
    pixelcolor::Rgb888,
    prelude::*,
    primitives::Rectangle,
    Pixel,
};
use embedded_text::{
    alignment::{HorizontalAlignment, VerticalAlignment},
    style::{HeightMode, TextBoxStyleBuilder, VerticalOverdraw},
    TextBox,
};
use resistor_core::compose::{CompositeMode, FontId, Rect, TextAlign, TextOverflow};
use resistor_core::{Rgb, Skin};

use crate::backend::{DisplayError, GraphicsBackend};

/// Font for the date and lower labels
pub const LABEL_FONT: &MonoFont<'static> = &iso_8859_7::FONT_10X20;

/// Font for the surface-mount part marking
pub const MARKING_FONT: &MonoFont<'static> = &iso_8859_7::FONT_9X18_BOLD;

/// Default transparent color in artwork: magenta never appears in the art
pub const DEFAULT_KEY: Rgb888 = Rgb888::new(0xFF, 0x00, 0xFF);

/// Artwork images for each skin
#[derive(Debug, Clone)]
pub struct Artworks<'a> {
    pub through_hole: ImageRaw<'a, Rgb888>,
    pub surface_mount: ImageRaw<'a, Rgb888>,
    pub logo: ImageRaw<'a, Rgb888>,
    /// Transparent color for [`CompositeMode::Set`]
    pub key: Rgb888,
}

impl<'a> Artworks<'a> {
    pub fn new(
        through_hole: ImageRaw<'a, Rgb888>,
        surface_mount: ImageRaw<'a, Rgb888>,
        logo: ImageRaw<'a, Rgb888>,
    ) -> Self {
        Self {
            through_hole,
            surface_mount,
            logo,
            key: DEFAULT_KEY,
        }
    }

    /// Use a different transparent color
    pub fn with_key(mut self, key: Rgb888) -> Self {
        self.key = key;
        self
    }

    pub fn get(&self, skin: Skin) -> &ImageRaw<'a, Rgb888> {
        match skin {
            Skin::ThroughHole => &self.through_hole,
            Skin::SurfaceMount => &self.surface_mount,
            Skin::Logo => &self.logo,
        }
    }
}

/// Backend drawing onto an `embedded-graphics` target
pub struct EgBackend<'a, D> {
    target: D,
    artworks: Artworks<'a>,
}

impl<'a, D> EgBackend<'a, D>
where
    D: DrawTarget<Color = Rgb888>,
{
    pub fn new(target: D, artworks: Artworks<'a>) -> Self {
        Self { target, artworks }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }
}

impl<D> GraphicsBackend for EgBackend<'_, D>
where
    D: DrawTarget<Color = Rgb888>,
{
    fn fill_rect(&mut self, rect: Rect, color: Rgb) -> Result<(), DisplayError> {
        self.target
            .fill_solid(&to_rectangle(rect), to_rgb888(color))
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_bitmap(&mut self, artwork: Skin, rect: Rect, mode: CompositeMode) -> Result<(), DisplayError> {
        let raw = self.artworks.get(artwork);
        let bounds = to_rectangle(rect);
        if raw.size() != bounds.size {
            return Err(DisplayError::InvalidCoordinates);
        }

        let image = Image::new(raw, bounds.top_left);
        match mode {
            CompositeMode::Copy => image.draw(&mut self.target),
            CompositeMode::Set => image.draw(&mut ColorKeyed {
                target: &mut self.target,
                key: self.artworks.key,
            }),
        }
        .map_err(|_| DisplayError::Communication)
    }

    fn draw_text(
        &mut self,
        text: &str,
        font: FontId,
        rect: Rect,
        color: Rgb,
        overflow: TextOverflow,
        align: TextAlign,
    ) -> Result<(), DisplayError> {
        let font = match font {
            FontId::Label => LABEL_FONT,
            FontId::Marking => MARKING_FONT,
        };
        let character_style = MonoTextStyle::new(font, to_rgb888(color));

        // embedded-text has no ellipsis; rows past the box are clipped
        let height_mode = match overflow {
            TextOverflow::WordWrap => HeightMode::Exact(VerticalOverdraw::FullRowsOnly),
            TextOverflow::TrailingEllipsis => HeightMode::Exact(VerticalOverdraw::Hidden),
        };
        let alignment = match align {
            TextAlign::Left => HorizontalAlignment::Left,
            TextAlign::Center => HorizontalAlignment::Center,
            TextAlign::Right => HorizontalAlignment::Right,
        };
        let textbox_style = TextBoxStyleBuilder::new()
            .alignment(alignment)
            .vertical_alignment(VerticalAlignment::Middle)
            .height_mode(height_mode)
            .build();

        TextBox::with_textbox_style(text, to_rectangle(rect), character_style, textbox_style)
            .draw(&mut self.target)
            .map(|_| ())
            .map_err(|_| DisplayError::Communication)
    }
}

/// Draw target adapter that drops pixels of one color
struct ColorKeyed<'t, D> {
    target: &'t mut D,
    key: Rgb888,
}

impl<D> Dimensions for ColorKeyed<'_, D>
where
    D: DrawTarget<Color = Rgb888>,
{
    fn bounding_box(&self) -> Rectangle {
        self.target.bounding_box()
    }
}

impl<D> DrawTarget for ColorKeyed<'_, D>
where
    D: DrawTarget<Color = Rgb888>,
{
    type Color = Rgb888;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let key = self.key;
        self.target
            .draw_iter(pixels.into_iter().filter(|Pixel(_, color)| *color != key))
    }
}

fn to_rectangle(rect: Rect) -> Rectangle {
    Rectangle::new(
        Point::new(i32::from(rect.origin.x), i32::from(rect.origin.y)),
        Size::new(u32::from(rect.size.width), u32::from(rect.size.height)),
    )
}

fn to_rgb888(color: Rgb) -> Rgb888 {
    Rgb888::new(color.r(), color.g(), color.b())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use core::convert::Infallible;
    use resistor_core::compose::layout::{LOGO_SIZE, SURFACE_MOUNT_SIZE, THROUGH_HOLE_SIZE};
    use resistor_core::compose::{DisplayGeometry, Size as FaceSize};
    use resistor_core::{TimeSample, Watchface};
    use resistor_hal::MemoryStore;
    use std::vec;
    use std::vec::Vec;

    use crate::render::present;

    const BODY: Rgb888 = Rgb888::new(0xAA, 0x55, 0x00);

    /// In-memory framebuffer
    struct Canvas {
        size: Size,
        pixels: Vec<Rgb888>,
    }

    impl Canvas {
        fn new(width: u32, height: u32) -> Self {
            Self {
                size: Size::new(width, height),
                pixels: vec![Rgb888::BLACK; (width * height) as usize],
            }
        }

        fn at(&self, x: u32, y: u32) -> Rgb888 {
            self.pixels[(y * self.size.width + x) as usize]
        }

        fn count(&self, color: Rgb888) -> usize {
            self.pixels.iter().filter(|p| **p == color).count()
        }
    }

    impl OriginDimensions for Canvas {
        fn size(&self) -> Size {
            self.size
        }
    }

    impl DrawTarget for Canvas {
        type Color = Rgb888;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                if point.x >= 0
                    && point.y >= 0
                    && (point.x as u32) < self.size.width
                    && (point.y as u32) < self.size.height
                {
                    let index = point.y as u32 * self.size.width + point.x as u32;
                    self.pixels[index as usize] = color;
                }
            }
            Ok(())
        }
    }

    /// Target that rejects every draw
    struct Broken;

    impl OriginDimensions for Broken {
        fn size(&self) -> Size {
            Size::new(144, 168)
        }
    }

    impl DrawTarget for Broken {
        type Color = Rgb888;
        type Error = ();

        fn draw_iter<I>(&mut self, _pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            Err(())
        }
    }

    /// Artwork: a body-colored rectangle on a transparent border
    fn art(size: FaceSize) -> Vec<u8> {
        let (width, height) = (u32::from(size.width), u32::from(size.height));
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                let border = x == 0 || y == 0 || x == width - 1 || y == height - 1;
                let color = if border { DEFAULT_KEY } else { BODY };
                data.extend_from_slice(&[color.r(), color.g(), color.b()]);
            }
        }
        data
    }

    struct ArtData {
        through_hole: Vec<u8>,
        surface_mount: Vec<u8>,
        logo: Vec<u8>,
    }

    impl ArtData {
        fn new() -> Self {
            Self {
                through_hole: art(THROUGH_HOLE_SIZE),
                surface_mount: art(SURFACE_MOUNT_SIZE),
                logo: art(LOGO_SIZE),
            }
        }

        fn artworks(&self) -> Artworks<'_> {
            Artworks::new(
                ImageRaw::new(&self.through_hole, u32::from(THROUGH_HOLE_SIZE.width)),
                ImageRaw::new(&self.surface_mount, u32::from(SURFACE_MOUNT_SIZE.width)),
                ImageRaw::new(&self.logo, u32::from(LOGO_SIZE.width)),
            )
        }
    }

    #[test]
    fn test_fill_rect() {
        let data = ArtData::new();
        let mut backend = EgBackend::new(Canvas::new(20, 20), data.artworks());
        backend.fill_rect(Rect::new(2, 3, 4, 5), Rgb::RED).unwrap();

        let canvas = backend.target();
        assert_eq!(canvas.count(Rgb888::RED), 20);
        assert_eq!(canvas.at(2, 3), Rgb888::RED);
        assert_eq!(canvas.at(5, 7), Rgb888::RED);
        assert_eq!(canvas.at(6, 7), Rgb888::BLACK);
    }

    #[test]
    fn test_set_mode_skips_key_color() {
        let data = ArtData::new();
        let mut backend = EgBackend::new(Canvas::new(144, 168), data.artworks());
        backend.fill_rect(Rect::new(0, 0, 144, 168), Rgb::GREEN).unwrap();

        let rect = Rect::new(0, 62, 144, 43);
        backend.draw_bitmap(Skin::ThroughHole, rect, CompositeMode::Set).unwrap();

        let canvas = backend.target();
        assert_eq!(canvas.at(0, 62), Rgb888::GREEN);
        assert_eq!(canvas.at(1, 63), BODY);
        assert_eq!(canvas.count(DEFAULT_KEY), 0);
    }

    #[test]
    fn test_copy_mode_overwrites() {
        let data = ArtData::new();
        let mut backend = EgBackend::new(Canvas::new(144, 168), data.artworks());
        backend
            .draw_bitmap(Skin::Logo, Rect::new(16, 28, 112, 112), CompositeMode::Copy)
            .unwrap();

        assert_eq!(backend.target().at(16, 28), DEFAULT_KEY);
        assert_eq!(backend.target().at(17, 29), BODY);
    }

    #[test]
    fn test_artwork_must_fit_box() {
        let data = ArtData::new();
        let mut backend = EgBackend::new(Canvas::new(144, 168), data.artworks());
        assert_eq!(
            backend.draw_bitmap(Skin::SurfaceMount, Rect::new(0, 0, 144, 43), CompositeMode::Set),
            Err(DisplayError::InvalidCoordinates)
        );
    }

    #[test]
    fn test_text_stays_in_box() {
        let data = ArtData::new();
        let mut backend = EgBackend::new(Canvas::new(144, 168), data.artworks());
        let rect = Rect::new(0, 4, 144, 24);
        backend
            .draw_text(
                "2359Ω",
                FontId::Label,
                rect,
                Rgb::WHITE,
                TextOverflow::WordWrap,
                TextAlign::Center,
            )
            .unwrap();

        let canvas = backend.target();
        assert!(canvas.count(Rgb888::WHITE) > 0);
        for y in 0..168 {
            for x in 0..144 {
                if !(4..28).contains(&y) {
                    assert_eq!(canvas.at(x, y), Rgb888::BLACK, "pixel ({}, {})", x, y);
                }
            }
        }
    }

    #[test]
    fn test_target_errors_are_reported() {
        let data = ArtData::new();
        let mut backend = EgBackend::new(Broken, data.artworks());
        assert_eq!(
            backend.fill_rect(Rect::new(0, 0, 10, 10), Rgb::RED),
            Err(DisplayError::Communication)
        );
    }

    #[test]
    fn test_present_draws_bands_over_artwork() {
        let data = ArtData::new();
        let mut backend = EgBackend::new(Canvas::new(144, 168), data.artworks());
        let mut face = Watchface::new(MemoryStore::new(), TimeSample::hms(9, 5, 0).on(3, 7));
        let geometry = DisplayGeometry::rectangular(144, 168);

        assert_eq!(present(&mut face, &geometry, &mut backend), Ok(true));

        let canvas = backend.into_inner();
        let green = to_rgb888(Rgb::KELLY_GREEN);
        assert_eq!(canvas.at(0, 0), green);
        // Artwork border is transparent
        assert_eq!(canvas.at(0, 62), green);
        assert_eq!(canvas.at(10, 80), BODY);
        // 09:05: black, white, black, green
        assert_eq!(canvas.at(33, 80), Rgb888::BLACK);
        assert_eq!(canvas.at(58, 80), Rgb888::WHITE);
        assert_eq!(canvas.at(74, 80), Rgb888::BLACK);
        assert_eq!(canvas.at(89, 80), to_rgb888(Rgb::GREEN));
    }
}

//! Face layout
//!
//! Positions are computed from the display size so the same face fits
//! rectangular and round screens. Artwork is centered; the date sits at
//! the top edge and the lower label at the bottom edge.

use crate::codec::TimeLabelStyle;
use crate::skin::Skin;

/// Height of the date and lower label boxes
pub const TEXT_HEIGHT: u16 = 24;

/// Inset of the text boxes from the top/bottom edge on rectangular screens
pub const RECT_Y_OFFSET: i16 = 4;

/// Inset on round screens, clear of the curved edge
pub const ROUND_Y_OFFSET: i16 = 20;

/// Displays shorter than this drop the labels for the larger skins
pub const COMPACT_HEIGHT: u16 = 180;

/// Through-hole resistor artwork size
pub const THROUGH_HOLE_SIZE: Size = Size::new(144, 43);

/// Surface-mount resistor artwork size
pub const SURFACE_MOUNT_SIZE: Size = Size::new(128, 48);

/// Logo artwork size
pub const LOGO_SIZE: Size = Size::new(112, 112);

/// Color bands, relative to the through-hole artwork origin
///
/// Hour tens, hour ones, minute tens, minute ones. The first band sits on
/// the bulge of the resistor body and is taller than the rest.
pub const BAND_OFFSETS: [Rect; 4] = [
    Rect::new(29, 2, 8, 39),
    Rect::new(54, 8, 9, 27),
    Rect::new(70, 8, 8, 27),
    Rect::new(85, 8, 8, 27),
];

/// A point in display coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

/// A size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: i16, y: i16, width: u16, height: u16) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// A rectangle of `size` centered in `self`
    pub fn centered(&self, size: Size) -> Rect {
        Rect {
            origin: Point::new(
                self.origin.x + centering_offset(self.size.width, size.width),
                self.origin.y + centering_offset(self.size.height, size.height),
            ),
            size,
        }
    }

    /// `other` moved so its origin is relative to this rectangle's origin
    pub fn offset(&self, other: Rect) -> Rect {
        Rect {
            origin: Point::new(self.origin.x + other.origin.x, self.origin.y + other.origin.y),
            size: other.size,
        }
    }
}

fn centering_offset(outer: u16, inner: u16) -> i16 {
    ((i32::from(outer) - i32::from(inner)) / 2) as i16
}

/// Screen outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayShape {
    #[default]
    Rectangular,
    Round,
}

/// What the composer needs to know about the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayGeometry {
    /// Drawable (unobstructed) area
    pub size: Size,
    pub shape: DisplayShape,
    /// Style of the numeric lower label
    pub time_style: TimeLabelStyle,
}

impl DisplayGeometry {
    /// A rectangular screen
    pub const fn rectangular(width: u16, height: u16) -> Self {
        Self {
            size: Size::new(width, height),
            shape: DisplayShape::Rectangular,
            time_style: TimeLabelStyle::Compact,
        }
    }

    /// A round screen
    pub const fn round(diameter: u16) -> Self {
        Self {
            size: Size::new(diameter, diameter),
            shape: DisplayShape::Round,
            time_style: TimeLabelStyle::Compact,
        }
    }

    /// Use a different lower label style
    pub const fn with_time_style(mut self, style: TimeLabelStyle) -> Self {
        self.time_style = style;
        self
    }

    /// Whole-screen rectangle
    pub fn bounds(&self) -> Rect {
        Rect {
            origin: Point::default(),
            size: self.size,
        }
    }

    fn y_offset(&self) -> i16 {
        match self.shape {
            DisplayShape::Rectangular => RECT_Y_OFFSET,
            DisplayShape::Round => ROUND_Y_OFFSET,
        }
    }
}

/// Computed boxes for one skin on one screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Layout {
    /// Date label box, `None` when labels are suppressed
    pub date: Option<Rect>,
    /// Lower label box, `None` when labels are suppressed
    pub lower: Option<Rect>,
    /// Artwork box
    pub artwork: Rect,
}

impl Layout {
    /// Lay out the face for `skin`
    pub fn new(geometry: &DisplayGeometry, skin: Skin) -> Self {
        let bounds = geometry.bounds();
        let width = geometry.size.width;
        let height = geometry.size.height;
        let y_offset = geometry.y_offset();

        let artwork = bounds.centered(artwork_size(skin));

        let show_labels = match skin {
            Skin::ThroughHole => true,
            Skin::SurfaceMount | Skin::Logo => height >= COMPACT_HEIGHT,
        };

        let (date, lower) = if show_labels {
            let bottom = height as i16 - TEXT_HEIGHT as i16 - y_offset;
            (
                Some(Rect::new(0, y_offset, width, TEXT_HEIGHT)),
                Some(Rect::new(0, bottom, width, TEXT_HEIGHT)),
            )
        } else {
            (None, None)
        };

        Self {
            date,
            lower,
            artwork,
        }
    }

    /// Band boxes for the through-hole artwork, hour tens first
    pub fn bands(&self) -> [Rect; 4] {
        BAND_OFFSETS.map(|band| self.artwork.offset(band))
    }
}

/// Artwork size for a skin
pub fn artwork_size(skin: Skin) -> Size {
    match skin {
        Skin::ThroughHole => THROUGH_HOLE_SIZE,
        Skin::SurfaceMount => SURFACE_MOUNT_SIZE,
        Skin::Logo => LOGO_SIZE,
    }
}

//! Frame composition
//!
//! Turns the face state into an ordered list of draw operations. The
//! composer is pure: the same inputs always give the same frame, so the
//! display may ask for a frame any number of times between events.

pub mod layout;

pub use layout::{DisplayGeometry, DisplayShape, Layout, Point, Rect, Size};

use heapless::Vec;

use crate::beat::beat_time;
use crate::codec::{self, Label};
use crate::color::Rgb;
use crate::config::Settings;
use crate::label::{LabelState, LowerLabel};
use crate::skin::{Skin, SkinSelector};
use crate::time::TimeSample;

/// Upper bound on operations in one frame
///
/// Background, two labels, artwork and four bands.
pub const MAX_DRAW_OPS: usize = 8;

/// One composed frame, in draw order
pub type Frame = Vec<DrawOp, MAX_DRAW_OPS>;

/// Font handles resolved by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontId {
    /// Date and lower label
    Label,
    /// Part marking on the surface-mount artwork
    Marking,
}

/// How artwork pixels combine with what is underneath
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CompositeMode {
    /// Overwrite every pixel
    Copy,
    /// Draw only opaque pixels
    Set,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextOverflow {
    WordWrap,
    TrailingEllipsis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// A single instruction for the graphics backend
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        color: Rgb,
    },
    Artwork {
        skin: Skin,
        rect: Rect,
        mode: CompositeMode,
    },
    Text {
        text: Label,
        font: FontId,
        rect: Rect,
        color: Rgb,
        overflow: TextOverflow,
        align: TextAlign,
    },
}

/// Compose the frame for the current state
pub fn compose_frame(
    time: &TimeSample,
    settings: &Settings,
    skin: &SkinSelector,
    labels: &LabelState,
    geometry: &DisplayGeometry,
) -> Frame {
    let mut frame = Frame::new();
    let active = skin.active();
    let layout = Layout::new(geometry, active);
    let silkscreen = settings.appearance.silkscreen;

    push(
        &mut frame,
        DrawOp::FillRect {
            rect: geometry.bounds(),
            color: settings.appearance.background,
        },
    );

    if let Some(rect) = layout.date {
        push(
            &mut frame,
            label(codec::format_date_code(time.month, time.day), rect, silkscreen),
        );
    }

    if let Some(rect) = layout.lower {
        let text = match settings.behavior.lower_label.select(time.second, labels) {
            LowerLabel::Time => codec::format_time_label(time.hour, time.minute, geometry.time_style),
            LowerLabel::Beats => codec::format_beats(beat_time(time.utc_seconds)),
        };
        push(&mut frame, label(text, rect, silkscreen));
    }

    push(
        &mut frame,
        DrawOp::Artwork {
            skin: active,
            rect: layout.artwork,
            mode: CompositeMode::Set,
        },
    );

    match active {
        Skin::ThroughHole => {
            let (hour_tens, hour_ones) = codec::band_colors(time.hour);
            let (minute_tens, minute_ones) = codec::band_colors(time.minute);
            let colors = [hour_tens, hour_ones, minute_tens, minute_ones];
            for (rect, color) in layout.bands().into_iter().zip(colors) {
                push(&mut frame, DrawOp::FillRect { rect, color });
            }
        }
        Skin::SurfaceMount => push(
            &mut frame,
            DrawOp::Text {
                text: codec::format_marking(time.hour, time.minute),
                font: FontId::Marking,
                rect: layout.artwork,
                color: Rgb::WHITE,
                overflow: TextOverflow::TrailingEllipsis,
                align: TextAlign::Center,
            },
        ),
        Skin::Logo => {}
    }

    frame
}

fn label(text: Label, rect: Rect, color: Rgb) -> DrawOp {
    DrawOp::Text {
        text,
        font: FontId::Label,
        rect,
        color,
        overflow: TextOverflow::WordWrap,
        align: TextAlign::Center,
    }
}

fn push(frame: &mut Frame, op: DrawOp) {
    let pushed = frame.push(op);
    debug_assert!(pushed.is_ok(), "frame capacity exceeded");
}

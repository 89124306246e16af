//! Display side of the Resistor Time watchface
//!
//! This crate provides:
//! - `GraphicsBackend` trait for anything that can fill rectangles, blit
//!   artwork and draw text
//! - `render` to replay a composed frame on a backend
//! - `present` to redraw a watchface only when it is dirty
//! - `EgBackend`, a backend for any `embedded-graphics` RGB888 draw target
//!
//! # Architecture
//!
//! The core crate decides *what* to draw as a list of draw operations.
//! Backends decide *how*: a watch platform can forward the operations to its
//! native graphics calls, while `EgBackend` rasterizes them itself.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod eg;
pub mod render;

pub use backend::{DisplayError, GraphicsBackend};
pub use eg::{Artworks, EgBackend};
pub use render::{present, render};

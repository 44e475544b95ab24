// SPDX-License-Identifier: LGPL-3.0-only

#![warn(missing_docs)]

//! Core library for lookfeel => See `lookfeel` crate.
//!
//! Contains the common style engine: metric and hint tables, the geometry
//! resolver, hit testing, element painters, size policies and the standard
//! asset provider.

pub use vello as vg;

/// Contains the image and icon types handed out by the asset provider.
pub mod asset;

/// Contains the caches a style owns.
pub mod cache;

/// Contains the [Canvas](canvas::Canvas) drawing surface and the recording [Picture](canvas::Picture).
pub mod canvas;

/// Contains the beveled frame helpers shared by the painters.
pub mod draw_util;

/// Contains integer geometry, alignment and mirroring helpers.
pub mod geometry;

/// Contains the style hint identifiers.
pub mod hint;

/// Contains generation of disabled and selected icon pixmaps.
pub mod icon;

/// Contains the element, control and sub-control enumerations.
pub mod kinds;

/// Contains the pixel metric identifiers and DPI scaling.
pub mod metric;

/// Contains the [DrawOption](option::DrawOption) context and its payloads.
pub mod option;

/// Contains the [Canvas](canvas::Canvas) implementation over a vello scene.
pub mod scene;

/// Contains the widget state flags.
pub mod state;

/// Contains the [Style](style::Style) trait and the [CommonStyle](style::CommonStyle) engine.
pub mod style;

/// Contains text measurement, eliding and wrapping.
pub mod text;

/// Contains font metrics and text drawing using Parley.
#[cfg(feature = "parley")]
pub mod text_parley;

pub use lookfeel_theme as theme;

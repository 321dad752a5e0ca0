#![forbid(unsafe_code)]
//! Deterministic abstract paintings from tabular data.
//!
//! Each row of a [`Dataset`] becomes one translucent mark. The row's exact
//! content seeds its own [`SeededStream`], its numeric fields pick position and
//! size, and a tag field picks one of six [`ShapeKind`]s. Marks accumulate on a
//! single layer that is softened by an elliptical vignette and composited over
//! an opaque background.
//!
//! The same rows, source text and [`RenderSettings`] always produce the same
//! pixels.

pub mod color;
pub mod data;
pub mod foundation;
pub mod random;
pub mod render;
pub mod shapes;

pub use color::palette::Palette;
pub use data::{
    csv::{parse_csv_str, read_csv_path},
    normalize::NormalizedRow,
    row::{Dataset, RawValue, Row},
};
pub use foundation::core::{CanvasSize, Point, Rgb8, Vec2};
pub use foundation::error::{DatapaintError, DatapaintResult};
pub use random::stream::SeededStream;
pub use render::{
    CanvasRGBA,
    mark::{Mark, MarkSink},
    mask::{Mask, VignetteSettings},
    pipeline::{
        RenderSettings, RenderStats, RowPlan, plan_rows, render_painting,
        render_painting_with_stats,
    },
};
pub use shapes::{MarkParams, ShapeKind};

//! Vector drawing instructions.
//!
//! Export does not produce pixels or markup directly. It emits a stream of
//! [`DrawCommand`]s, each tagged with a [`RenderLayer`], which an encoder
//! (for example the SVG encoder in the `folio` crate) turns into a concrete
//! document format.
//!
//! - [`DrawCommand`] - a rectangle, line or text run in page-relative units
//! - [`StrokeDefinition`], [`StrokeStyle`], [`StrokeCap`] - outline styling
//! - [`TextStyle`], [`TextAnchor`], [`FontWeight`] - text run styling
//! - [`RenderLayer`], [`LayeredOutput`] - z-ordering of the command stream

mod command;
mod layer;
mod stroke;
mod text;

pub use command::DrawCommand;
pub use layer::{LayeredOutput, RenderLayer};
pub use stroke::{StrokeCap, StrokeDefinition, StrokeStyle};
pub use text::{FONT_FAMILY, FontWeight, TextAnchor, TextStyle};

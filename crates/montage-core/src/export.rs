//! Export boundary: snapshotting the stack and driving the rasterizer.

use crate::stack::{CanvasStack, ItemProjection};
use kurbo::Size;
use thiserror::Error;

/// Errors surfaced to the user when export fails. Never retried.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The rasterizer could not produce pixels for the frame.
    #[error("could not render the canvas: {0}")]
    Raster(String),
    /// The finished image could not be written to its destination.
    #[error("could not save the image: {0}")]
    Write(String),
}

/// Raw RGBA8 pixels produced by the rasterizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA8 rows, length `width * height * 4`.
    pub data: Vec<u8>,
}

/// Immutable snapshot handed to the rasterizer: the stack's projection at
/// export time plus the requested output size in pixels.
///
/// Alignment guides are deliberately absent; they are interaction chrome,
/// not content.
#[derive(Debug, Clone)]
pub struct CanvasFrame {
    /// Items in render order (last = topmost).
    pub items: Vec<ItemProjection>,
    /// Canvas size in canvas units, for mapping offsets to pixels.
    pub canvas_size: Size,
    pub pixel_width: u32,
    pub pixel_height: u32,
}

/// Turns a frame into pixels; implemented by the presentation layer.
pub trait Rasterizer {
    fn rasterize(&mut self, frame: &CanvasFrame) -> Result<RasterImage, ExportError>;
}

/// Destination for the finished raster (photo album, file, share sheet).
pub trait ExportSink {
    fn write(&mut self, image: &RasterImage) -> Result<(), ExportError>;
}

/// Export the canvas at the given pixel size.
///
/// The selection is cleared first so no selection chrome ends up in the
/// output, matching the interactive save flow. Errors come back for a
/// user-visible message; nothing is retried.
pub fn export_canvas(
    stack: &mut CanvasStack,
    pixel_width: u32,
    pixel_height: u32,
    rasterizer: &mut dyn Rasterizer,
    sink: &mut dyn ExportSink,
) -> Result<(), ExportError> {
    stack.select(None);
    let frame = CanvasFrame {
        items: stack.projections(),
        canvas_size: stack.canvas_size(),
        pixel_width,
        pixel_height,
    };

    let image = rasterizer.rasterize(&frame)?;
    if let Err(error) = sink.write(&image) {
        log::warn!("canvas export failed: {error}");
        return Err(error);
    }
    Ok(())
}

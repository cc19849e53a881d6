//! Montage Core Library
//!
//! Platform-agnostic model for the Montage photo-collage editor: the ordered
//! canvas stack, per-gesture transform composition, magnetic alignment
//! (snap-to-edge, snap-to-peer) with live guides, and the boundary contracts
//! for rendering, export, overlays, and haptics.

pub mod align;
pub mod config;
pub mod export;
pub mod geometry;
pub mod guide;
pub mod haptic;
pub mod item;
pub mod layout;
pub mod overlay;
pub mod session;
pub mod stack;

pub use align::{SNAP_THRESHOLD, SnapConfig, SnapOutcome, snap_offset};
pub use config::{EditorConfig, FetchConfig};
pub use export::{CanvasFrame, ExportError, ExportSink, RasterImage, Rasterizer, export_canvas};
pub use geometry::{Edges, edges_of};
pub use guide::{AlignmentGuide, GUIDE_MERGE_DISTANCE, GuideSet, Orientation};
pub use haptic::{EdgeTrigger, HapticActuator, NullHaptics, Pulse};
pub use item::{CanvasItem, ContentHandle, DEFAULT_ITEM_SIDE, ItemId, MIN_VISUAL_SCALE, fit_display_size};
pub use layout::LayoutAspect;
pub use overlay::{Overlay, OverlayCategory, OverlayError, OverlayFetcher, OverlayService};
pub use session::GestureEvent;
pub use stack::{CanvasStack, ItemProjection};

//! Canvas items: placed images with committed and live transforms.

use crate::geometry::{Edges, edges_of};
use kurbo::{Size, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a canvas item.
pub type ItemId = Uuid;

/// Opaque reference to an item's drawable payload.
///
/// The rendering collaborator owns the pixels; the core carries the handle
/// through to projections and never inspects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHandle(Uuid);

impl ContentHandle {
    /// Mint a fresh handle for newly provided content.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ContentHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Side of the square newly added images are fitted into, in canvas units.
pub const DEFAULT_ITEM_SIDE: f64 = 150.0;

/// Floor applied to an item's scale when computing its visual bounds.
///
/// Keeps bounding boxes from collapsing to near-zero for snap and display
/// purposes; the stored scale itself is never clamped.
pub const MIN_VISUAL_SCALE: f64 = 0.4;

/// A placed image on the canvas.
///
/// The `base_*` fields hold the state committed at the end of the last
/// completed gesture; the unprefixed fields hold the live, possibly
/// in-progress state. Outside an active gesture the two always agree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasItem {
    pub(crate) id: ItemId,
    /// Drawable payload, resolved by the renderer.
    pub content: ContentHandle,
    /// Width/height at scale 1, fixed at creation.
    pub intrinsic_size: Size,
    /// Live translation of the item's center from the canvas center.
    pub offset: Vec2,
    /// Committed translation.
    pub base_offset: Vec2,
    /// Live uniform scale.
    pub scale: f64,
    /// Committed scale.
    pub base_scale: f64,
    /// Live rotation in radians.
    pub rotation: f64,
    /// Committed rotation.
    pub base_rotation: f64,
}

impl CanvasItem {
    /// Create an item at the canvas center with identity transform.
    pub fn new(content: ContentHandle, intrinsic_size: Size) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            intrinsic_size,
            offset: Vec2::ZERO,
            base_offset: Vec2::ZERO,
            scale: 1.0,
            base_scale: 1.0,
            rotation: 0.0,
            base_rotation: 0.0,
        }
    }

    /// Stable unique identifier.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Scale used for bounds computation, floored at [`MIN_VISUAL_SCALE`].
    pub fn effective_scale(&self) -> f64 {
        self.scale.max(MIN_VISUAL_SCALE)
    }

    /// Visual size of the item at its live transform.
    pub fn scaled_size(&self) -> Size {
        self.intrinsic_size * self.effective_scale()
    }

    /// Half-extents of the visual size.
    pub fn half_extents(&self) -> (f64, f64) {
        let size = self.scaled_size();
        (size.width / 2.0, size.height / 2.0)
    }

    /// Edges the item would occupy if its center sat at `offset`.
    pub fn edges_at(&self, offset: Vec2) -> Edges {
        let (half_w, half_h) = self.half_extents();
        edges_of(offset, half_w, half_h)
    }
}

/// Aspect-fit a source pixel size into a square of `max_side` canvas units.
///
/// Wide sources fit to width, tall sources fit to height; a square source
/// fills the whole square.
pub fn fit_display_size(source: Size, max_side: f64) -> Size {
    let aspect = source.width / source.height;
    if aspect > 1.0 {
        Size::new(max_side, max_side / aspect)
    } else {
        Size::new(max_side * aspect, max_side)
    }
}

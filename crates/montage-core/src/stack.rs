//! The canvas stack: ordered items, selection, bounds, and guide state.

use crate::align;
use crate::config::EditorConfig;
use crate::guide::AlignmentGuide;
use crate::haptic::{EdgeTrigger, HapticActuator};
use crate::item::{CanvasItem, ContentHandle, ItemId};
use kurbo::{Size, Vec2};

/// Pure per-item view of the stack for the presentation layer.
///
/// Rows come out in render order (last = topmost); the renderer maps them to
/// visuals without the core knowing anything about drawing primitives.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemProjection {
    pub id: ItemId,
    pub content: ContentHandle,
    /// Width/height at scale 1.
    pub size: Size,
    pub offset: Vec2,
    pub scale: f64,
    pub rotation: f64,
    pub is_selected: bool,
}

/// The ordered stack of placed items and its interaction state.
///
/// Sequence order is render/z-order (last = topmost) and item ids are
/// unique. At most one item is selected at a time, and the selection always
/// references a present item. All mutation is single-threaded and strictly
/// sequential with respect to incoming gesture events.
#[derive(Debug, Clone, Default)]
pub struct CanvasStack {
    items: Vec<CanvasItem>,
    canvas_size: Size,
    selected: Option<ItemId>,
    active_guides: Vec<AlignmentGuide>,
    haptic: EdgeTrigger,
    config: EditorConfig,
}

impl CanvasStack {
    /// Create an empty stack with default configuration and unknown bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stack with the given configuration.
    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Record the measured canvas size.
    ///
    /// Zero means "unknown": snapping stays disabled until the canvas has
    /// been measured at least once.
    pub fn set_canvas_size(&mut self, size: Size) {
        self.canvas_size = size;
    }

    /// Current canvas size (zero while unknown).
    pub fn canvas_size(&self) -> Size {
        self.canvas_size
    }

    /// Append a new item with the default transform and select it.
    pub fn add_item(&mut self, content: ContentHandle, intrinsic_size: Size) -> ItemId {
        let item = CanvasItem::new(content, intrinsic_size);
        let id = item.id();
        self.items.push(item);
        self.selected = Some(id);
        id
    }

    /// Remove an item by id; no-op when absent. Clears the selection if it
    /// referenced the removed item.
    pub fn remove_item(&mut self, id: ItemId) {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        if self.items.len() != before && self.selected == Some(id) {
            self.selected = None;
        }
    }

    /// Move an item to the top of the render order; no-op when absent.
    pub fn promote_to_front(&mut self, id: ItemId) {
        if let Some(index) = self.items.iter().position(|item| item.id() == id) {
            let item = self.items.remove(index);
            self.items.push(item);
        }
    }

    /// Empty the stack and reset guides and selection.
    pub fn clear_all(&mut self) {
        self.items.clear();
        self.active_guides.clear();
        self.selected = None;
    }

    /// Set or clear the selection. Single-slot: selecting a new item
    /// implicitly deselects the previous one. An id not present in the
    /// stack clears the selection.
    pub fn select(&mut self, id: Option<ItemId>) {
        self.selected = id.filter(|id| self.contains(*id));
    }

    /// Currently selected item id, if any.
    pub fn selected(&self) -> Option<ItemId> {
        self.selected
    }

    /// Check if an item is the current selection.
    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selected == Some(id)
    }

    /// Check if an item with this id is present.
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    /// Items in render order (last = topmost).
    pub fn items(&self) -> &[CanvasItem] {
        &self.items
    }

    /// Look up an item by id.
    pub fn item(&self, id: ItemId) -> Option<&CanvasItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Look up an item by id, mutably.
    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut CanvasItem> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Number of items on the canvas.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the canvas holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Snap a candidate offset for the item being dragged.
    ///
    /// Replaces the active guide set with whatever this computation produced
    /// and drives the haptic edge trigger from the final guide count. An
    /// unknown id passes the candidate through untouched.
    pub fn snapped_offset(
        &mut self,
        candidate: Vec2,
        id: ItemId,
        haptics: &mut dyn HapticActuator,
    ) -> Vec2 {
        let Some(item) = self.item(id) else {
            return candidate;
        };
        let outcome = align::snap_offset(
            candidate,
            item,
            &self.items,
            self.canvas_size,
            &self.config.snap,
        );
        self.active_guides = outcome.guides;
        self.haptic.observe(self.active_guides.len(), haptics);
        outcome.offset
    }

    /// Drop all guides and re-arm the haptic trigger (drag ended).
    pub fn clear_guides(&mut self) {
        self.active_guides.clear();
        self.haptic.reset();
    }

    /// Guides produced by the most recent snap computation.
    pub fn active_guides(&self) -> &[AlignmentGuide] {
        &self.active_guides
    }

    /// Whether the haptic trigger has fired for the current guide presence.
    pub fn haptic_engaged(&self) -> bool {
        self.haptic.is_engaged()
    }

    /// Render projection of the whole stack, in z-order.
    pub fn projections(&self) -> Vec<ItemProjection> {
        self.items
            .iter()
            .map(|item| ItemProjection {
                id: item.id(),
                content: item.content,
                size: item.intrinsic_size,
                offset: item.offset,
                scale: item.scale,
                rotation: item.rotation,
                is_selected: self.is_selected(item.id()),
            })
            .collect()
    }
}

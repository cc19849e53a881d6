//! Magnetic alignment: snapping a dragged item's offset to canvas and peer
//! edges while collecting the guides to display.

use crate::geometry::{Edges, edges_of};
use crate::guide::{AlignmentGuide, GuideSet, Orientation};
use crate::item::CanvasItem;
use kurbo::{Size, Vec2};
use serde::{Deserialize, Serialize};

/// Maximum edge distance at which alignment is forced exact, in canvas units.
pub const SNAP_THRESHOLD: f64 = 10.0;

/// Tuning for the alignment engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapConfig {
    /// Edge distance under which snapping engages.
    pub threshold: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            threshold: SNAP_THRESHOLD,
        }
    }
}

/// Result of a snap computation: the corrected offset and the deduplicated
/// guides produced by this call.
///
/// Each returned coordinate is either unchanged, snapped to a canvas edge,
/// or snapped to a peer edge. The guide set fully replaces whatever the
/// previous computation produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapOutcome {
    pub offset: Vec2,
    pub guides: Vec<AlignmentGuide>,
}

/// Snap `candidate` for `item` against the canvas bounds and its peers.
///
/// While `canvas` is unknown (zero), the candidate passes through unchanged
/// and no guides are produced. Otherwise checks run in a fixed order: the
/// four canvas interior edges, then for every peer in stack order the eight
/// edge pairings (left-left, right-right, top-top, bottom-bottom,
/// right-left, left-right, bottom-top, top-bottom). A later match
/// unconditionally overwrites an earlier one on the same axis; there is no
/// best-candidate selection.
pub fn snap_offset(
    candidate: Vec2,
    item: &CanvasItem,
    peers: &[CanvasItem],
    canvas: Size,
    config: &SnapConfig,
) -> SnapOutcome {
    if canvas == Size::ZERO {
        return SnapOutcome {
            offset: candidate,
            guides: Vec::new(),
        };
    }

    let (half_w, half_h) = item.half_extents();
    let mut result = candidate;
    let mut guides = GuideSet::new();

    snap_to_canvas_edges(&mut result, half_w, half_h, canvas, config, &mut guides);
    snap_to_peers(&mut result, item, peers, half_w, half_h, config, &mut guides);

    SnapOutcome {
        offset: result,
        guides: guides.into_guides(),
    }
}

/// Snap against the canvas interior edges, emitting full-span guides.
///
/// The targets are center coordinates at which the item sits flush with the
/// corresponding canvas edge.
fn snap_to_canvas_edges(
    result: &mut Vec2,
    half_w: f64,
    half_h: f64,
    canvas: Size,
    config: &SnapConfig,
    guides: &mut GuideSet,
) {
    let canvas_half_w = canvas.width / 2.0;
    let canvas_half_h = canvas.height / 2.0;

    let left = -canvas_half_w + half_w;
    let right = canvas_half_w - half_w;
    let top = -canvas_half_h + half_h;
    let bottom = canvas_half_h - half_h;

    check_and_snap(
        &mut result.x,
        left,
        Orientation::Vertical,
        -canvas_half_h,
        canvas_half_h,
        config,
        guides,
    );
    check_and_snap(
        &mut result.x,
        right,
        Orientation::Vertical,
        -canvas_half_h,
        canvas_half_h,
        config,
        guides,
    );
    check_and_snap(
        &mut result.y,
        top,
        Orientation::Horizontal,
        -canvas_half_w,
        canvas_half_w,
        config,
        guides,
    );
    check_and_snap(
        &mut result.y,
        bottom,
        Orientation::Horizontal,
        -canvas_half_w,
        canvas_half_w,
        config,
        guides,
    );
}

fn check_and_snap(
    coordinate: &mut f64,
    target: f64,
    orientation: Orientation,
    start: f64,
    end: f64,
    config: &SnapConfig,
    guides: &mut GuideSet,
) {
    if (*coordinate - target).abs() < config.threshold {
        *coordinate = target;
        guides.insert(AlignmentGuide {
            orientation,
            position: target,
            start,
            end,
        });
    }
}

/// Snap against every other item, in stack order.
///
/// Peer edges come from each peer's own committed offset and visual size.
/// The dragged item's edges are recomputed per peer from the current
/// (possibly already-adjusted) result, then held fixed across that peer's
/// eight checks.
fn snap_to_peers(
    result: &mut Vec2,
    item: &CanvasItem,
    peers: &[CanvasItem],
    half_w: f64,
    half_h: f64,
    config: &SnapConfig,
    guides: &mut GuideSet,
) {
    for peer in peers.iter().filter(|peer| peer.id() != item.id()) {
        let peer_edges = peer.edges_at(peer.offset);
        let my_edges = edges_of(*result, half_w, half_h);
        snap_edge_pairs(result, my_edges, peer_edges, half_w, half_h, config, guides);
    }
}

/// The eight ordered edge pairings against one peer. A match moves the
/// dragged item so the tested edge lands exactly flush with the peer's, and
/// emits a guide at the peer edge spanning the union of both items'
/// perpendicular extents.
fn snap_edge_pairs(
    result: &mut Vec2,
    my: Edges,
    peer: Edges,
    half_w: f64,
    half_h: f64,
    config: &SnapConfig,
    guides: &mut GuideSet,
) {
    let v_span = (my.top.min(peer.top), my.bottom.max(peer.bottom));
    let h_span = (my.left.min(peer.left), my.right.max(peer.right));
    let threshold = config.threshold;

    let mut check = |coordinate: &mut f64,
                     my_edge: f64,
                     peer_edge: f64,
                     snapped: f64,
                     orientation: Orientation,
                     position: f64,
                     span: (f64, f64)| {
        if (my_edge - peer_edge).abs() < threshold {
            *coordinate = snapped;
            guides.insert(AlignmentGuide {
                orientation,
                position,
                start: span.0,
                end: span.1,
            });
        }
    };

    // Matching pairs: flush left, right, top, bottom.
    check(&mut result.x, my.left, peer.left, peer.left + half_w, Orientation::Vertical, peer.left, v_span);
    check(&mut result.x, my.right, peer.right, peer.right - half_w, Orientation::Vertical, peer.right, v_span);
    check(&mut result.y, my.top, peer.top, peer.top + half_h, Orientation::Horizontal, peer.top, h_span);
    check(&mut result.y, my.bottom, peer.bottom, peer.bottom - half_h, Orientation::Horizontal, peer.bottom, h_span);
    // Abutting pairs: my right against the peer's left, and so on.
    check(&mut result.x, my.right, peer.left, peer.left - half_w, Orientation::Vertical, peer.left, v_span);
    check(&mut result.x, my.left, peer.right, peer.right + half_w, Orientation::Vertical, peer.right, v_span);
    check(&mut result.y, my.bottom, peer.top, peer.top - half_h, Orientation::Horizontal, peer.top, h_span);
    check(&mut result.y, my.top, peer.bottom, peer.bottom + half_h, Orientation::Horizontal, peer.bottom, h_span);
}

//! Gesture routing and per-gesture transform composition.
//!
//! The external gesture recognizer delivers translate/scale/rotate deltas
//! already split per item; this layer folds them into the items' live
//! transforms and commits the result when a gesture ends. Drag and
//! scale+rotate sessions are independent and may be active on the same item
//! at once: each composes against its own committed base value.

use crate::haptic::{HapticActuator, Pulse};
use crate::item::ItemId;
use crate::stack::CanvasStack;
use kurbo::Vec2;

/// A gesture event addressed to an item or to the canvas background.
///
/// Deltas are cumulative from the start of their gesture, matching what
/// platform recognizers report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    DragStarted { item: ItemId },
    DragChanged { item: ItemId, translation: Vec2 },
    DragEnded { item: ItemId },
    /// Magnification factor, 1.0 meaning unchanged.
    ScaleChanged { item: ItemId, magnification: f64 },
    ScaleEnded { item: ItemId },
    /// Rotation delta in radians.
    RotateChanged { item: ItemId, delta: f64 },
    RotateEnded { item: ItemId },
    Tapped { item: ItemId },
    DoubleTapped { item: ItemId },
    LongPressed { item: ItemId },
    BackgroundTapped,
}

impl CanvasStack {
    /// Feed one gesture event through the transform session.
    ///
    /// Any in-progress gesture on an item implicitly selects it; dragged
    /// offsets pass through the alignment engine before landing on the item.
    pub fn handle_gesture(&mut self, event: GestureEvent, haptics: &mut dyn HapticActuator) {
        match event {
            GestureEvent::DragStarted { item } => {
                self.touch_select(item);
            }
            GestureEvent::DragChanged { item, translation } => {
                self.touch_select(item);
                let Some(base_offset) = self.item(item).map(|it| it.base_offset) else {
                    return;
                };
                let candidate = base_offset + translation;
                let snapped = self.snapped_offset(candidate, item, haptics);
                if let Some(it) = self.item_mut(item) {
                    it.offset = snapped;
                }
            }
            GestureEvent::DragEnded { item } => {
                if let Some(it) = self.item_mut(item) {
                    it.base_offset = it.offset;
                }
                self.clear_guides();
            }
            GestureEvent::ScaleChanged { item, magnification } => {
                self.touch_select(item);
                if let Some(it) = self.item_mut(item) {
                    it.scale = it.base_scale + (magnification - 1.0);
                }
            }
            GestureEvent::ScaleEnded { item } => {
                if let Some(it) = self.item_mut(item) {
                    it.base_scale = it.scale;
                }
            }
            GestureEvent::RotateChanged { item, delta } => {
                self.touch_select(item);
                if let Some(it) = self.item_mut(item) {
                    it.rotation = it.base_rotation + delta;
                }
            }
            GestureEvent::RotateEnded { item } => {
                if let Some(it) = self.item_mut(item) {
                    it.base_rotation = it.rotation;
                }
            }
            GestureEvent::Tapped { item } => {
                self.select(Some(item));
            }
            GestureEvent::DoubleTapped { item } => {
                self.remove_item(item);
            }
            GestureEvent::LongPressed { item } => {
                if self.contains(item) {
                    self.promote_to_front(item);
                    haptics.pulse(Pulse::Medium);
                }
            }
            GestureEvent::BackgroundTapped => {
                self.select(None);
            }
        }
    }

    /// Implicit selection: the first event of a gesture selects its item.
    fn touch_select(&mut self, id: ItemId) {
        if self.selected() != Some(id) {
            self.select(Some(id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::haptic::{HapticActuator, NullHaptics};
    use crate::item::ContentHandle;
    use kurbo::Size;

    #[derive(Default)]
    struct RecordingHaptics {
        pulses: Vec<Pulse>,
    }

    impl HapticActuator for RecordingHaptics {
        fn pulse(&mut self, pulse: Pulse) {
            self.pulses.push(pulse);
        }
    }

    fn stack_with_items(count: usize) -> (CanvasStack, Vec<ItemId>) {
        let mut stack = CanvasStack::new();
        stack.set_canvas_size(Size::new(600.0, 600.0));
        let ids = (0..count)
            .map(|_| stack.add_item(ContentHandle::new(), Size::new(100.0, 100.0)))
            .collect();
        (stack, ids)
    }

    #[test]
    fn test_drag_moves_and_commits() {
        let (mut stack, ids) = stack_with_items(1);
        let mut haptics = NullHaptics;
        let id = ids[0];

        stack.handle_gesture(GestureEvent::DragStarted { item: id }, &mut haptics);
        stack.handle_gesture(
            GestureEvent::DragChanged {
                item: id,
                translation: Vec2::new(30.0, 40.0),
            },
            &mut haptics,
        );
        assert_eq!(stack.item(id).unwrap().offset, Vec2::new(30.0, 40.0));
        // Live moved, base still committed at the origin.
        assert_eq!(stack.item(id).unwrap().base_offset, Vec2::ZERO);

        stack.handle_gesture(GestureEvent::DragEnded { item: id }, &mut haptics);
        let item = stack.item(id).unwrap();
        assert_eq!(item.base_offset, item.offset);
    }

    #[test]
    fn test_drag_translation_is_cumulative_from_base() {
        let (mut stack, ids) = stack_with_items(1);
        let mut haptics = NullHaptics;
        let id = ids[0];

        stack.handle_gesture(
            GestureEvent::DragChanged {
                item: id,
                translation: Vec2::new(30.0, 0.0),
            },
            &mut haptics,
        );
        stack.handle_gesture(GestureEvent::DragEnded { item: id }, &mut haptics);

        // A second drag composes against the newly committed base.
        stack.handle_gesture(
            GestureEvent::DragChanged {
                item: id,
                translation: Vec2::new(-12.0, 5.0),
            },
            &mut haptics,
        );
        assert_eq!(stack.item(id).unwrap().offset, Vec2::new(18.0, 5.0));
    }

    #[test]
    fn test_drag_snaps_against_peer() {
        let (mut stack, ids) = stack_with_items(2);
        let mut haptics = NullHaptics;

        stack.handle_gesture(
            GestureEvent::DragChanged {
                item: ids[1],
                translation: Vec2::new(101.0, 200.0),
            },
            &mut haptics,
        );
        assert!((stack.item(ids[1]).unwrap().offset.x - 100.0).abs() < f64::EPSILON);
        assert_eq!(stack.active_guides().len(), 1);

        stack.handle_gesture(GestureEvent::DragEnded { item: ids[1] }, &mut haptics);
        assert!(stack.active_guides().is_empty());
    }

    #[test]
    fn test_drag_fires_haptic_once_while_guides_persist() {
        let (mut stack, ids) = stack_with_items(2);
        let mut haptics = RecordingHaptics::default();

        for x in [101.0, 102.0, 103.0] {
            stack.handle_gesture(
                GestureEvent::DragChanged {
                    item: ids[1],
                    translation: Vec2::new(x, 200.0),
                },
                &mut haptics,
            );
        }
        assert_eq!(haptics.pulses, vec![Pulse::Rigid]);

        // Leaving the snap zone re-arms; locking on again pulses once more.
        stack.handle_gesture(
            GestureEvent::DragChanged {
                item: ids[1],
                translation: Vec2::new(180.0, 200.0),
            },
            &mut haptics,
        );
        stack.handle_gesture(
            GestureEvent::DragChanged {
                item: ids[1],
                translation: Vec2::new(101.0, 200.0),
            },
            &mut haptics,
        );
        assert_eq!(haptics.pulses, vec![Pulse::Rigid, Pulse::Rigid]);
    }

    #[test]
    fn test_scale_accumulates_and_commits() {
        let (mut stack, ids) = stack_with_items(1);
        let mut haptics = NullHaptics;
        let id = ids[0];

        stack.handle_gesture(
            GestureEvent::ScaleChanged {
                item: id,
                magnification: 1.5,
            },
            &mut haptics,
        );
        assert!((stack.item(id).unwrap().scale - 1.5).abs() < f64::EPSILON);

        stack.handle_gesture(GestureEvent::ScaleEnded { item: id }, &mut haptics);
        let item = stack.item(id).unwrap();
        assert!((item.base_scale - item.scale).abs() < f64::EPSILON);

        // Next pinch composes against the committed 1.5.
        stack.handle_gesture(
            GestureEvent::ScaleChanged {
                item: id,
                magnification: 1.2,
            },
            &mut haptics,
        );
        assert!((stack.item(id).unwrap().scale - 1.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_scale_below_floor_is_stored_unclamped() {
        let (mut stack, ids) = stack_with_items(1);
        let mut haptics = NullHaptics;

        stack.handle_gesture(
            GestureEvent::ScaleChanged {
                item: ids[0],
                magnification: 0.2,
            },
            &mut haptics,
        );
        let item = stack.item(ids[0]).unwrap();
        assert!((item.scale - 0.2).abs() < f64::EPSILON);
        assert!((item.effective_scale() - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rotate_accumulates_and_commits() {
        let (mut stack, ids) = stack_with_items(1);
        let mut haptics = NullHaptics;
        let id = ids[0];

        stack.handle_gesture(
            GestureEvent::RotateChanged {
                item: id,
                delta: 0.3,
            },
            &mut haptics,
        );
        stack.handle_gesture(GestureEvent::RotateEnded { item: id }, &mut haptics);
        stack.handle_gesture(
            GestureEvent::RotateChanged {
                item: id,
                delta: -0.1,
            },
            &mut haptics,
        );
        let item = stack.item(id).unwrap();
        assert!((item.rotation - 0.2).abs() < 1e-12);
        assert!((item.base_rotation - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gesture_implicitly_selects() {
        let (mut stack, ids) = stack_with_items(2);
        let mut haptics = NullHaptics;
        stack.select(Some(ids[0]));

        stack.handle_gesture(
            GestureEvent::DragChanged {
                item: ids[1],
                translation: Vec2::new(5.0, 5.0),
            },
            &mut haptics,
        );
        assert_eq!(stack.selected(), Some(ids[1]));
    }

    #[test]
    fn test_tap_selects_and_background_deselects() {
        let (mut stack, ids) = stack_with_items(2);
        let mut haptics = NullHaptics;

        stack.handle_gesture(GestureEvent::Tapped { item: ids[0] }, &mut haptics);
        assert_eq!(stack.selected(), Some(ids[0]));

        stack.handle_gesture(GestureEvent::BackgroundTapped, &mut haptics);
        assert_eq!(stack.selected(), None);
    }

    #[test]
    fn test_double_tap_removes_item() {
        let (mut stack, ids) = stack_with_items(2);
        let mut haptics = NullHaptics;

        stack.handle_gesture(GestureEvent::DoubleTapped { item: ids[1] }, &mut haptics);
        assert_eq!(stack.len(), 1);
        assert!(!stack.contains(ids[1]));
        assert_eq!(stack.selected(), None);
    }

    #[test]
    fn test_long_press_promotes_and_pulses() {
        let (mut stack, ids) = stack_with_items(3);
        let mut haptics = RecordingHaptics::default();

        stack.handle_gesture(GestureEvent::LongPressed { item: ids[0] }, &mut haptics);
        let order: Vec<ItemId> = stack.items().iter().map(|item| item.id()).collect();
        assert_eq!(order, vec![ids[1], ids[2], ids[0]]);
        assert_eq!(haptics.pulses, vec![Pulse::Medium]);
    }

    #[test]
    fn test_long_press_on_absent_item_is_silent() {
        let (mut stack, _) = stack_with_items(1);
        let mut haptics = RecordingHaptics::default();

        stack.handle_gesture(
            GestureEvent::LongPressed {
                item: ItemId::new_v4(),
            },
            &mut haptics,
        );
        assert!(haptics.pulses.is_empty());
    }

    #[test]
    fn test_events_for_absent_items_are_noops() {
        let (mut stack, ids) = stack_with_items(1);
        let mut haptics = NullHaptics;
        let ghost = ItemId::new_v4();

        stack.handle_gesture(
            GestureEvent::DragChanged {
                item: ghost,
                translation: Vec2::new(10.0, 10.0),
            },
            &mut haptics,
        );
        stack.handle_gesture(
            GestureEvent::ScaleChanged {
                item: ghost,
                magnification: 2.0,
            },
            &mut haptics,
        );
        let item = stack.item(ids[0]).unwrap();
        assert_eq!(item.offset, Vec2::ZERO);
        assert!((item.scale - 1.0).abs() < f64::EPSILON);
    }
}

//! The LayoutStore owns the published tree, the window registry and change
//! notification.

mod layout_compute;
mod operations;
mod patching;
mod queue;
mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::LayoutCommand;
    use crate::error::LayoutError;
    use crate::events::LayoutEvent;
    use crate::patch::{Patch, PatchOp};
    use crate::path::{Branch, LayoutPath};
    use crate::tree::{build_balanced, DropPosition, MosaicNode};
    use mosaic_common::{Corner, Rect, WindowId, WindowKind};
    use mosaic_config::LayoutConfig;

    fn leaf(id: u32) -> MosaicNode<u32> {
        MosaicNode::leaf(id)
    }

    fn path(branches: &[Branch]) -> LayoutPath {
        LayoutPath::from(branches.to_vec())
    }

    fn store_with(count: usize) -> LayoutStore {
        let mut store = LayoutStore::new();
        for i in 0..count {
            store
                .open_window(WindowKind::Webview, format!("pane {i}"))
                .unwrap();
        }
        store
    }

    fn split_percentage(store: &LayoutStore, at: &[Branch]) -> Option<f64> {
        store
            .tree()
            .as_ref()
            .and_then(|root| root.node_at_path(&path(at)))
            .and_then(MosaicNode::split_percentage)
    }

    #[test]
    fn new_store_is_empty() {
        let store = LayoutStore::new();
        assert!(store.is_empty());
        assert_eq!(store.window_count(), 0);
        assert!(store.ordered_window_ids().is_empty());
    }

    #[test]
    fn first_window_becomes_root() {
        let store = store_with(1);
        assert_eq!(*store.tree(), Some(leaf(1)));
        assert_eq!(store.window(WindowId(1)).unwrap().title, "pane 0");
    }

    #[test]
    fn open_and_close_follow_corner_rule() {
        let mut store = store_with(3);
        assert_eq!(
            *store.tree(),
            Some(MosaicNode::row(leaf(1), MosaicNode::column(leaf(2), leaf(3))))
        );

        assert!(store.close_window(WindowId(2)));
        assert_eq!(*store.tree(), Some(MosaicNode::row(leaf(1), leaf(3))));
        assert!(store.window(WindowId(2)).is_none());
        assert_eq!(store.window_count(), 2);
    }

    #[test]
    fn open_at_explicit_corner() {
        let mut store = store_with(1);
        store
            .open_window_at(Corner::TopLeft, WindowKind::Chat, "chat")
            .unwrap();
        assert_eq!(*store.tree(), Some(MosaicNode::row(leaf(2), leaf(1))));
        assert_eq!(store.window(WindowId(2)).unwrap().kind, WindowKind::Chat);
    }

    #[test]
    fn close_unknown_window_is_noop() {
        let mut store = store_with(2);
        let before = store.snapshot();
        let mut rx = store.subscribe();

        assert!(!store.close_window(WindowId(42)));
        assert_eq!(*store.tree(), *before);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn close_last_window_empties_tree() {
        let mut store = store_with(1);
        assert!(store.close_window(WindowId(1)));
        assert!(store.is_empty());
        assert_eq!(store.window_count(), 0);
    }

    #[test]
    fn window_ids_are_not_reused() {
        let mut store = store_with(1);
        store.close_window(WindowId(1));
        let id = store.open_window(WindowKind::Headless, "again").unwrap();
        assert_eq!(id, WindowId(2));
    }

    #[test]
    fn open_fails_once_ids_run_out() {
        let mut store = store_with(1);
        store.next_id = u32::MAX;
        let before = store.snapshot();

        assert_eq!(
            store.open_window(WindowKind::Webview, "late"),
            Err(LayoutError::IdsExhausted)
        );
        assert_eq!(*store.tree(), *before);
        assert_eq!(store.window_count(), 1);
        assert!(!store.execute(LayoutCommand::open(WindowKind::Chat, "later")));
    }

    #[test]
    fn back_to_back_opens_keep_every_window() {
        let mut store = store_with(1);
        let a = store.open_window(WindowKind::Webview, "a").unwrap();
        let b = store.open_window(WindowKind::Webview, "b").unwrap();

        let mut ids = store.ordered_window_ids();
        ids.sort();
        assert_eq!(ids, vec![WindowId(1), a, b]);
        assert_eq!(store.window_count(), 3);
    }

    #[test]
    fn queued_opens_build_on_each_other() {
        let mut store = store_with(1);
        store.enqueue(LayoutCommand::open(WindowKind::Webview, "a"));
        store.enqueue(LayoutCommand::open(WindowKind::Chat, "b"));
        assert_eq!(store.pending_commands(), 2);

        assert_eq!(store.flush(), 2);
        assert_eq!(store.pending_commands(), 0);
        assert_eq!(store.window_count(), 3);
        assert_eq!(store.tree().as_ref().unwrap().leaf_count(), 3);
    }

    #[test]
    fn queued_close_sees_earlier_queued_open() {
        let mut store = store_with(1);
        store.enqueue(LayoutCommand::open(WindowKind::Webview, "a"));
        store.enqueue(LayoutCommand::open(WindowKind::Webview, "b"));
        store.enqueue(LayoutCommand::Close(WindowId(2)));

        assert_eq!(store.flush(), 3);
        assert_eq!(store.ordered_window_ids(), vec![WindowId(1), WindowId(3)]);
    }

    #[test]
    fn reader_snapshot_survives_mutation() {
        let mut store = store_with(1);
        let snapshot = store.snapshot();

        store.open_window(WindowKind::Webview, "b").unwrap();

        assert_eq!(*snapshot, Some(leaf(1)));
        assert_ne!(*store.tree(), *snapshot);
    }

    #[test]
    fn mutations_publish_events() {
        let mut store = LayoutStore::new();
        let mut rx = store.subscribe();

        store.open_window(WindowKind::Webview, "a").unwrap();

        match rx.try_recv().unwrap() {
            LayoutEvent::TreeChanged { previous, current } => {
                assert_eq!(*previous, None);
                assert_eq!(*current, Some(leaf(1)));
            }
            other => panic!("unexpected event {other:?}"),
        }
        assert!(matches!(
            rx.try_recv().unwrap(),
            LayoutEvent::WindowOpened(WindowId(1))
        ));

        store.close_window(WindowId(1));
        assert!(matches!(rx.try_recv().unwrap(), LayoutEvent::TreeChanged { .. }));
        assert!(matches!(
            rx.try_recv().unwrap(),
            LayoutEvent::WindowClosed(WindowId(1))
        ));
    }

    #[test]
    fn resize_moves_parent_divider() {
        let mut store = store_with(2);

        assert!(store.resize(WindowId(1), 1));
        assert_eq!(split_percentage(&store, &[]), Some(55.0));

        assert!(store.resize(WindowId(2), 1));
        assert_eq!(split_percentage(&store, &[]), Some(50.0));
    }

    #[test]
    fn resize_clamps_to_configured_bounds() {
        let mut store = store_with(2);
        assert!(store.resize(WindowId(1), 100));
        assert_eq!(split_percentage(&store, &[]), Some(90.0));

        assert!(store.resize(WindowId(1), -100));
        assert_eq!(split_percentage(&store, &[]), Some(10.0));
    }

    #[test]
    fn resize_sole_window_is_rejected() {
        let mut store = store_with(1);
        assert!(!store.resize(WindowId(1), 1));
        assert!(!store.resize(WindowId(9), 1));
    }

    #[test]
    fn expand_favours_window_at_every_level() {
        let mut store = store_with(3);
        assert!(store.expand(WindowId(3)));
        assert_eq!(split_percentage(&store, &[]), Some(30.0));
        assert_eq!(split_percentage(&store, &[Branch::Second]), Some(30.0));

        assert!(store.expand(WindowId(1)));
        assert_eq!(split_percentage(&store, &[]), Some(70.0));
    }

    #[test]
    fn move_window_next_to_target() {
        let mut store = store_with(3);
        store
            .move_window(WindowId(1), WindowId(3), DropPosition::Bottom)
            .unwrap();
        assert_eq!(
            *store.tree(),
            Some(MosaicNode::column(leaf(2), MosaicNode::column(leaf(3), leaf(1))))
        );
        assert_eq!(store.window_count(), 3);
    }

    #[test]
    fn move_window_rejects_self_and_unknown() {
        let mut store = store_with(2);
        assert!(matches!(
            store.move_window(WindowId(1), WindowId(1), DropPosition::Left),
            Err(LayoutError::InvalidMove(_))
        ));
        assert_eq!(
            store.move_window(WindowId(1), WindowId(7), DropPosition::Left),
            Err(LayoutError::UnknownWindow(WindowId(7)))
        );
    }

    #[test]
    fn rebalance_uses_current_order() {
        let mut store = store_with(5);
        let order: Vec<u32> = store.ordered_window_ids().into_iter().map(|id| id.0).collect();

        store.rebalance();
        assert_eq!(*store.tree(), build_balanced(&order));
        assert!(!store.rebalance());
    }

    #[test]
    fn patch_removal_prunes_registry() {
        let mut store = store_with(3);
        let mut rx = store.subscribe();

        let rejected = store
            .apply_patch(&[Patch::new(path(&[Branch::Second, Branch::First]), PatchOp::Remove)])
            .unwrap();

        assert!(rejected.is_empty());
        assert_eq!(*store.tree(), Some(MosaicNode::row(leaf(1), leaf(3))));
        assert!(store.window(WindowId(2)).is_none());
        assert!(matches!(rx.try_recv().unwrap(), LayoutEvent::TreeChanged { .. }));
        assert!(matches!(
            rx.try_recv().unwrap(),
            LayoutEvent::WindowClosed(WindowId(2))
        ));
    }

    #[test]
    fn patch_with_unregistered_leaf_is_refused() {
        let mut store = store_with(2);
        let before = store.snapshot();

        let result = store.apply_patch(&[Patch::new(
            path(&[Branch::First]),
            PatchOp::Replace(leaf(99)),
        )]);
        assert_eq!(result, Err(LayoutError::UnknownWindow(WindowId(99))));

        let result = store.apply_patch(&[Patch::new(
            path(&[Branch::First]),
            PatchOp::Replace(leaf(2)),
        )]);
        assert_eq!(result, Err(LayoutError::DuplicateId));
        assert_eq!(*store.tree(), *before);
    }

    #[test]
    fn patch_reports_rejected_instructions() {
        let mut store = store_with(2);
        let rejected = store
            .apply_patch(&[
                Patch::set_split_percentage(LayoutPath::root(), 40.0),
                Patch::set_split_percentage(path(&[Branch::First]), 40.0),
            ])
            .unwrap();

        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].index, 1);
        assert_eq!(split_percentage(&store, &[]), Some(40.0));
    }

    #[test]
    fn execute_dispatches_commands() {
        let mut store = LayoutStore::new();
        assert!(store.execute(LayoutCommand::Open {
            kind: WindowKind::Webview,
            title: "a".into(),
            corner: Some(Corner::BottomLeft),
        }));
        assert!(store.execute(LayoutCommand::open(WindowKind::Chat, "b")));
        assert!(store.execute(LayoutCommand::Resize(WindowId(1), 2)));
        assert!(store.execute(LayoutCommand::Expand(WindowId(2))));
        assert!(store.execute(LayoutCommand::Move {
            id: WindowId(2),
            target: WindowId(1),
            position: DropPosition::Top,
        }));
        assert!(!store.execute(LayoutCommand::Close(WindowId(5))));
        assert!(store.execute(LayoutCommand::Close(WindowId(1))));
        assert_eq!(*store.tree(), Some(leaf(2)));
    }

    #[test]
    fn compute_layout_covers_every_window() {
        let viewport = Rect::new(0.0, 0.0, 1006.0, 500.0);
        assert!(LayoutStore::new().compute_layout(viewport).is_empty());

        let store = store_with(2);
        let rects = store.compute_layout(viewport);
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0].0, WindowId(1));
        assert_eq!(rects[0].1, Rect::new(0.0, 0.0, 500.0, 500.0));
        assert_eq!(rects[1].1, Rect::new(506.0, 0.0, 500.0, 500.0));
    }

    #[test]
    fn set_config_changes_gap() {
        let mut store = store_with(2);
        store.set_config(LayoutConfig {
            gap: 0,
            ..LayoutConfig::default()
        });
        let rects = store.compute_layout(Rect::new(0.0, 0.0, 1000.0, 500.0));
        assert_eq!(rects[1].1.x, 500.0);
        assert_eq!(store.config().gap, 0);
    }
}

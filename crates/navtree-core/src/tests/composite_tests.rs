use super::*;
use crate::test_support::{built, composite, composite_with, draw_behind, leaf, leaf_with};
use crate::LeafController;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn empty_composite_resolves_to_baseline() {
    let node = composite_with("a", draw_behind(false));
    assert_eq!(node.resolve_current_options(), draw_behind(false));
    assert!(node.active_child().is_none());
}

#[test]
fn active_child_wins_and_baseline_fills_the_rest() {
    let mut baseline = draw_behind(false);
    baseline.top_bar.title = Some("Parent".into());
    let mut child_options = Options::default();
    child_options.top_bar.title = Some("Child".into());
    let mut sibling_options = draw_behind(true);
    sibling_options.top_bar.visible = Some(false);

    let node = built(
        composite_with("a", baseline),
        vec![
            leaf_with("x", child_options).into(),
            leaf_with("y", sibling_options).into(),
        ],
    );

    let resolved = node.resolve_current_options();
    assert_eq!(resolved.top_bar.title.as_deref(), Some("Child"));
    assert_eq!(resolved.status_bar.draw_behind, Some(false));
    assert_eq!(resolved.top_bar.visible, None);
}

#[test]
fn resolve_child_options_uses_any_member() {
    let node = built(
        composite_with("a", draw_behind(false)),
        vec![leaf("x").into(), leaf_with("y", draw_behind(true)).into()],
    );
    let inactive = &node.children()[1];
    assert_eq!(
        node.resolve_child_options(inactive).status_bar.draw_behind,
        Some(true)
    );
}

#[test]
fn resolve_child_options_on_self_matches_current() {
    let node = built(
        composite_with("a", draw_behind(false)),
        vec![leaf_with("x", draw_behind(true)).into()],
    );
    let as_controller = Controller::from(node);
    let node = as_controller.as_composite().expect("composite");
    assert_eq!(
        node.resolve_child_options(&as_controller),
        node.resolve_current_options()
    );
}

#[test]
fn apply_child_options_folds_against_the_baseline() {
    let mut node = composite_with("a", draw_behind(false));
    let mut first = Options::default();
    first.top_bar.title = Some("First".into());
    node.apply_child_options(&first, None);
    let mut second = Options::default();
    second.top_bar.visible = Some(false);
    node.apply_child_options(&second, Some(Component(7)));

    let working = node.base().options();
    assert_eq!(working.top_bar.title, None);
    assert_eq!(working.top_bar.visible, Some(false));
    assert_eq!(working.status_bar.draw_behind, Some(false));
}

#[test]
fn wait_for_render_follows_the_active_path_only() {
    let mut node = built(composite("a"), vec![leaf("x").into(), leaf("y").into()]);
    node.set_wait_for_render(true);

    assert!(node.base().wait_for_render());
    assert!(node.children()[0].base().wait_for_render());
    assert!(!node.children()[1].base().wait_for_render());
}

#[test]
fn rendered_state_tracks_the_active_child() {
    let mut node = built(composite("a"), vec![leaf("x").into(), leaf("y").into()]);
    assert!(!node.is_rendered());

    node.children[1]
        .as_leaf_mut()
        .expect("leaf")
        .mark_rendered();
    assert!(!node.is_rendered());

    node.set_active("y").expect("attached");
    assert!(node.is_rendered());
}

#[test]
fn empty_composite_is_not_rendered_and_applies_no_insets() {
    let mut node = composite("a");
    assert!(!node.is_rendered());
    assert!(!node.apply_top_insets(63.0));
}

#[test]
fn first_child_becomes_active_and_removal_reselects() {
    let mut node = built(
        composite("a"),
        vec![leaf("x").into(), leaf("y").into(), leaf("z").into()],
    );
    assert_eq!(node.active_index(), Some(0));

    node.set_active("y").expect("attached");
    let removed = node.remove_child("x").expect("attached");
    assert!(removed.is_root());
    assert_eq!(node.active_child().map(|c| c.id().as_str()), Some("y"));

    node.remove_child("y");
    assert_eq!(node.active_child().map(|c| c.id().as_str()), Some("z"));

    node.remove_child("z");
    assert_eq!(node.active_index(), None);
    assert!(node.set_active("z").is_err());
}

#[test]
fn add_child_rejects_duplicate_ids_and_sets_parent() {
    let mut node = built(composite("a"), vec![leaf("x").into()]);
    let err = node.add_child(leaf("x").into()).unwrap_err();
    assert_eq!(err, ControllerError::DuplicateId { id: "x".into() });
    assert!(node.add_child(leaf("a").into()).is_err());
    assert_eq!(
        node.children()[0].base().parent().map(ControllerId::as_str),
        Some("a")
    );
}

#[test]
fn root_top_inset_honours_draw_behind() {
    let metrics = ChromeMetrics::default();
    let node = built(
        composite_with("a", draw_behind(false)),
        vec![leaf("x").into(), leaf_with("y", draw_behind(true)).into()],
    );
    assert_eq!(node.root_top_inset(&node.children()[0], &metrics), 63.0);
    assert_eq!(node.root_top_inset(&node.children()[1], &metrics), 0.0);
}

#[derive(Default)]
struct Calls {
    merged: Vec<ControllerId>,
    destroyed: Vec<Component>,
    top_tabs: Vec<ViewHandle>,
    cleared_top_tabs: usize,
}

struct Tracking(Rc<RefCell<Calls>>);

impl CompositeBehavior for Tracking {
    fn merge_child_options(
        &mut self,
        working: &mut Options,
        options: &Options,
        child: &ControllerId,
        _origin: Option<Component>,
    ) {
        working.bottom_tabs = working.merge(options).bottom_tabs;
        self.0.borrow_mut().merged.push(child.clone());
    }

    fn on_child_destroyed(&mut self, component: Component) {
        self.0.borrow_mut().destroyed.push(component);
    }

    fn setup_top_tabs(&mut self, pager: ViewHandle) {
        self.0.borrow_mut().top_tabs.push(pager);
    }

    fn clear_top_tabs(&mut self) {
        self.0.borrow_mut().cleared_top_tabs += 1;
    }
}

#[test]
fn behavior_hooks_receive_calls() {
    let calls = Rc::new(RefCell::new(Calls::default()));
    let x: LeafController = leaf("x");
    let component = x.component();
    let mut node = composite("tabs")
        .with_behavior(Tracking(Rc::clone(&calls)))
        .with_child(x)
        .expect("unique");

    let mut options = Options::default();
    options.bottom_tabs.visible = Some(false);
    options.top_bar.title = Some("ignored".into());
    node.merge_child_options(&options, &"x".into(), Some(component));
    node.setup_top_tabs(ViewHandle(99));
    node.clear_top_tabs();
    node.on_child_destroyed(component);

    let calls = calls.borrow();
    assert_eq!(calls.merged, vec![ControllerId::from("x")]);
    assert_eq!(calls.destroyed, vec![component]);
    assert_eq!(calls.top_tabs, vec![ViewHandle(99)]);
    assert_eq!(calls.cleared_top_tabs, 1);
    assert_eq!(node.base().options().bottom_tabs.visible, Some(false));
    assert_eq!(node.base().options().top_bar.title, None);
}

#[test]
fn default_hooks_are_no_ops() {
    let mut node = built(composite("a"), vec![leaf("x").into()]);
    let before = node.base().options().clone();
    node.merge_child_options(&draw_behind(true), &"x".into(), None);
    node.on_child_destroyed(Component(1));
    node.setup_top_tabs(ViewHandle(3));
    node.clear_top_tabs();
    assert_eq!(node.base().options(), &before);
    assert_eq!(node.behavior().debug_name(), "DefaultBehavior");
}

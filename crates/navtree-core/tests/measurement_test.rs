use navtree_core::{ChromeMetrics, ControllerError, ControllerTree, MeasureOutcome, MeasureSpec};
use navtree_testing::{
    assert_approx_eq, composite, composite_with, draw_behind, leaf, RecordingContainer,
};

const SCREEN_WIDTH: f32 = 1080.0;
const SCREEN_HEIGHT: f32 = 1920.0;
const BOTTOM_TABS: f32 = 168.0;

#[test]
fn tabs_inside_tabs_subtract_the_inset_once() {
    let inner_leaf = leaf("inner-page").with_bottom_inset(BOTTOM_TABS);
    let inner_view = inner_leaf.view();
    let inner_tabs = composite("inner-tabs", vec![inner_leaf.into()]);
    let inner_tabs_view = inner_tabs.view();
    let tree = ControllerTree::new(composite("outer-tabs", vec![inner_tabs.into()]));
    let mut outer = RecordingContainer::new();

    let outcome = tree
        .measure_child(
            "outer-tabs",
            &mut outer,
            inner_tabs_view,
            MeasureSpec::exactly(SCREEN_WIDTH),
            0.0,
            MeasureSpec::exactly(SCREEN_HEIGHT),
            0.0,
        )
        .expect("composite");
    assert_eq!(outcome, MeasureOutcome::NotHandled);
    assert!(outer.requests.is_empty());
    assert!(outer.fallbacks.is_empty());

    let mut inner = RecordingContainer::new();
    let outcome = tree
        .measure_child(
            "inner-tabs",
            &mut inner,
            inner_view,
            MeasureSpec::exactly(SCREEN_WIDTH),
            0.0,
            MeasureSpec::exactly(SCREEN_HEIGHT),
            12.0,
        )
        .expect("composite");
    assert_eq!(outcome, MeasureOutcome::Handled);

    let request = inner.request_for(inner_view).expect("measured");
    assert!(request.height.is_exact());
    assert_approx_eq(
        request.height.size(),
        SCREEN_HEIGHT - BOTTOM_TABS,
        f32::EPSILON,
        "leaf height",
    );
    assert_eq!(request.width, MeasureSpec::exactly(SCREEN_WIDTH));
    assert_eq!(request.height_used, 12.0);
}

#[test]
fn bounded_heights_are_handed_on_exact() {
    let page = leaf("page").with_bottom_inset(BOTTOM_TABS);
    let page_view = page.view();
    let tree = ControllerTree::new(composite("tabs", vec![page.into()]));
    let mut container = RecordingContainer::new();

    let outcome = tree
        .measure_child(
            "tabs",
            &mut container,
            page_view,
            MeasureSpec::exactly(SCREEN_WIDTH),
            0.0,
            MeasureSpec::at_most(SCREEN_HEIGHT),
            0.0,
        )
        .expect("composite");

    assert!(outcome.is_handled());
    assert_eq!(container.requests.len(), 1);
    assert_eq!(
        container.requests[0].height,
        MeasureSpec::exactly(SCREEN_HEIGHT - BOTTOM_TABS)
    );
}

#[test]
fn only_composites_measure_children() {
    let page = leaf("page");
    let page_view = page.view();
    let tree = ControllerTree::new(composite("root", vec![page.into()]));
    let mut container = RecordingContainer::new();

    let err = tree
        .measure_child(
            "page",
            &mut container,
            page_view,
            MeasureSpec::exactly(1.0),
            0.0,
            MeasureSpec::exactly(1.0),
            0.0,
        )
        .unwrap_err();

    assert!(matches!(err, ControllerError::NotComposite { ref id } if id.as_str() == "page"));
    assert!(container.requests.is_empty());
}

#[test]
fn unknown_views_use_the_container_default() {
    let tree = ControllerTree::new(composite("root", vec![leaf("x").into()]));
    let mut container = RecordingContainer::new();
    let stranger = navtree_core::ViewHandle(u64::MAX - 1);

    let outcome = tree
        .measure_child(
            "root",
            &mut container,
            stranger,
            MeasureSpec::at_most(SCREEN_WIDTH),
            0.0,
            MeasureSpec::at_most(SCREEN_HEIGHT),
            0.0,
        )
        .expect("composite");

    assert_eq!(outcome, MeasureOutcome::NotHandled);
    assert_eq!(container.fallbacks, vec![stranger]);
}

#[test]
fn configured_status_bar_height_drives_top_insets() {
    let mut tree = ControllerTree::with_metrics(
        composite_with(
            "root",
            draw_behind(false),
            vec![composite("stack", vec![leaf("page").into()]).into()],
        ),
        ChromeMetrics::new(72.0),
    );

    assert_eq!(tree.top_inset("stack", "page"), Ok(72.0));
    assert!(tree.apply_top_insets());
    let page = tree
        .find("page")
        .and_then(navtree_core::Controller::as_leaf)
        .expect("leaf");
    assert_approx_eq(page.top_inset(), 72.0, f32::EPSILON, "applied inset");
}

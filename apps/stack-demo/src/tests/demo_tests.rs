use super::*;
use stackscroll_foundation::InnerScrollView;
use stackscroll_ui_graphics::{Point, Rect};

// Banner 180, Inbox 20 rows + 100 of insets, Divider 90,
// Archive 35 rows + 100 of insets, Footer 140.
const CONTENT_HEIGHT: f32 = 3910.0;

fn demo() -> DemoApp {
    DemoApp::new(DemoOptions::default()).expect("demo app")
}

fn phases(app: &DemoApp) -> Vec<InnerScrollPhase> {
    app.snapshot()
        .expect("snapshot")
        .into_iter()
        .map(|snapshot| snapshot.phase)
        .collect()
}

#[test]
fn demo_lays_out_every_page() {
    let app = demo();

    let content = app.controller().content_size().expect("content size");
    assert_eq!(content, Size::new(375.0, CONTENT_HEIGHT));
    assert_eq!(app.attached_views(), 5);
    assert!(app.host.borrow().delegate_bound());
}

#[test]
fn first_list_is_revealed_below_the_banner() {
    let app = demo();

    let snapshot = app.snapshot().expect("snapshot");
    assert_eq!(snapshot[0].title, "Inbox");
    assert_eq!(snapshot[0].phase, InnerScrollPhase::Leading);
    // 667 - (180 + 50) = 437 of table, eight rows.
    assert_eq!(snapshot[0].live_rows, 0..8);

    assert_eq!(snapshot[1].title, "Archive");
    assert_eq!(snapshot[1].phase, InnerScrollPhase::Hidden);
    assert!(snapshot[1].live_rows.is_empty());
}

#[test]
fn scripted_scroll_reaches_the_end() {
    let mut app = demo();
    let mut steps = 0;
    while app.scroll_by(DEFAULT_SCROLL_STEP).expect("scroll") {
        steps += 1;
    }

    assert_eq!(steps, 28);
    assert_eq!(app.offset(), CONTENT_HEIGHT - 667.0);
    assert_eq!(
        phases(&app),
        vec![InnerScrollPhase::Hidden, InnerScrollPhase::Pinned]
    );

    // Inner offset 3243 - 1570 - 50 = 1623, 477 of content left.
    let archive = app.lists()[1].table().borrow();
    assert_eq!(archive.live_rows(), 27..35);
    assert_eq!(archive.frame(), Rect::new(0.0, 1673.0, 375.0, 477.0));
    assert_eq!(archive.content_offset(), Point::new(0.0, 1623.0));
}

#[test]
fn lists_never_keep_more_cells_than_the_viewport_shows() {
    let mut app = demo();
    while app.scroll_by(45.0).expect("scroll") {}

    let capacity = (667.0_f32 / container_list::ROW_HEIGHT).ceil() as usize + 1;
    for list in app.lists() {
        let peak = list.table().borrow().peak_cells();
        assert!(peak > 0, "{} never showed a cell", list.name());
        assert!(
            peak <= capacity,
            "{} kept {peak} cells alive, capacity {capacity}",
            list.name()
        );
    }
}

#[test]
fn list_drops_cells_once_scrolled_past() {
    let mut app = demo();
    // Inbox slot ends at 1480.
    while app.offset() < 1500.0 {
        app.scroll_by(DEFAULT_SCROLL_STEP).expect("scroll");
    }

    let inbox = app.lists()[0].table().borrow();
    assert!(inbox.live_rows().is_empty());
    assert!(inbox.peak_cells() > 0);
}

#[test]
fn resize_relayouts_to_the_new_width() {
    let mut app = demo();
    app.scroll_by(600.0).expect("scroll");

    app.resize(Size::new(667.0, 375.0)).expect("resize");

    let content = app.controller().content_size().expect("content size");
    assert_eq!(content, Size::new(667.0, CONTENT_HEIGHT));
    assert!(app
        .controller()
        .items()
        .iter()
        .all(|item| item.rect().width == 667.0));
    assert_eq!(app.attached_views(), 5);
    assert_eq!(app.offset(), 600.0);
    // Inbox pinned: inner offset 600 - 180 - 50, frame as tall as the viewport.
    let inbox = app.lists()[0].table().borrow();
    assert_eq!(inbox.frame(), Rect::new(0.0, 420.0, 667.0, 375.0));
}

#[test]
fn describe_names_first_and_last_live_cell() {
    let snapshot = ListSnapshot {
        title: "Inbox".into(),
        phase: InnerScrollPhase::Pinned,
        live_rows: 3..7,
    };
    assert_eq!(describe(&snapshot), "Inbox: Pinned, Cell 3..=Cell 6");

    let hidden = ListSnapshot {
        live_rows: 0..0,
        phase: InnerScrollPhase::Hidden,
        ..snapshot
    };
    assert_eq!(describe(&hidden), "Inbox: Hidden, no cells");
}

#[test]
fn default_options_match_a_phone_viewport() {
    let options = DemoOptions::default();
    assert_eq!(options.viewport, Size::new(375.0, 667.0));
    assert_eq!(options.scroll_step, 120.0);
}

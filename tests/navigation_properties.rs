use std::sync::{Arc, Mutex};

use tidewalk::navigation::{
    ChangeCause, Direction, DragNavigator, GestureSample, IndexChange, InputSource,
    NavigationMode, SequenceCursor, ThresholdConfig,
};
use tidewalk::persistence::SiteConfig;
use tidewalk::widgets::{ActivismTimeline, PhotoGallery};

fn navigator(count: usize, mode: NavigationMode) -> DragNavigator {
    let cursor = SequenceCursor::new(count, mode).unwrap();
    DragNavigator::new(cursor, ThresholdConfig::default())
}

fn recorded(nav: &mut DragNavigator) -> Arc<Mutex<Vec<IndexChange>>> {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = calls.clone();
    nav.on_index_change(move |change| sink.lock().unwrap().push(*change));
    calls
}

#[test]
fn index_stays_in_range_under_mixed_input() {
    for mode in [NavigationMode::Wrap, NavigationMode::Clamp] {
        let mut nav = navigator(7, mode);
        let positions = [400.0, 330.0, 260.0, 900.0, 20.0, 510.0, 505.0, -300.0, 1200.0];

        for (round, &x) in positions.iter().cycle().take(60).enumerate() {
            match round % 5 {
                0 => nav.start(x),
                4 => nav.end(),
                _ => {
                    nav.move_to(x);
                }
            }
            nav.select_direct(round % 9);
            assert!(nav.index() < nav.count(), "{:?} left range", mode);
        }
    }
}

#[test]
fn wrap_mode_crosses_both_boundaries() {
    let mut nav = navigator(9, NavigationMode::Wrap);

    let change = nav.navigate(Direction::Retreat).unwrap();
    assert_eq!((change.previous, change.current), (0, 8));

    let change = nav.navigate(Direction::Advance).unwrap();
    assert_eq!((change.previous, change.current), (8, 0));
}

#[test]
fn clamp_boundary_step_is_silent() {
    let mut nav = navigator(17, NavigationMode::Clamp);
    let calls = recorded(&mut nav);

    nav.start(100.0);
    assert_eq!(nav.move_to(200.0), None);
    assert_eq!(nav.index(), 0);
    assert!(calls.lock().unwrap().is_empty());

    // The crossing re-arms the anchor even though nothing moved
    assert_eq!(nav.session().start_x, 200.0);
}

#[test]
fn clamp_boundary_crossing_rearms_for_reversal() {
    let cursor = SequenceCursor::with_initial(17, NavigationMode::Clamp, 16).unwrap();
    let mut nav = DragNavigator::new(cursor, ThresholdConfig::default());

    nav.start(500.0);
    assert_eq!(nav.move_to(400.0), None);
    assert_eq!(nav.index(), 16);

    let change = nav.move_to(460.0).unwrap();
    assert_eq!(change.current, 15);
    assert_eq!(change.cause, ChangeCause::Drag(Direction::Retreat));
}

#[test]
fn long_drag_commits_once_per_threshold_crossing() {
    for steps in 3..=9 {
        let mut nav = navigator(30, NavigationMode::Wrap);
        let calls = recorded(&mut nav);

        nav.start(1000.0);
        let mut x = 1000.0;
        for _ in 0..steps {
            x -= 55.0;
            nav.move_to(x);
        }
        nav.end();

        let net = 1000.0 - x;
        let expected = (net / 50.0_f32).floor() as usize;
        // 55px samples commit exactly once each
        assert_eq!(calls.lock().unwrap().len(), expected);
        assert_eq!(steps, expected);
        assert_eq!(nav.index(), steps);
    }
}

#[test]
fn sub_threshold_drag_never_commits() {
    let mut nav = navigator(5, NavigationMode::Wrap);
    nav.start(300.0);
    for x in [280.0, 260.0, 251.0, 300.0, 349.0, 250.0] {
        assert_eq!(nav.move_to(x), None);
    }
    assert_eq!(nav.index(), 0);
}

#[test]
fn move_before_start_is_ignored() {
    let mut nav = navigator(5, NavigationMode::Wrap);
    let calls = recorded(&mut nav);

    assert_eq!(nav.move_to(-500.0), None);
    assert_eq!(nav.index(), 0);
    assert!(!nav.is_dragging());
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn direct_selection_waits_for_drag_to_end() {
    let mut nav = navigator(17, NavigationMode::Clamp);

    nav.start(400.0);
    assert_eq!(nav.select_direct(10), None);
    assert_eq!(nav.index(), 0);

    nav.end();
    let change = nav.select_direct(10).unwrap();
    assert_eq!(change.current, 10);
    assert_eq!(change.cause, ChangeCause::DirectSelect);
}

#[test]
fn timeline_drag_from_wide_pointer_positions() {
    let config = SiteConfig::default();
    assert_eq!(config.content.timeline.len(), 17);

    let mut timeline =
        ActivismTimeline::mount(config.content.timeline.clone(), ThresholdConfig::default(), 0)
            .unwrap();

    timeline.pointer_down(500.0);
    assert_eq!(timeline.pointer_move(440.0).map(|c| c.current), Some(1));
    assert_eq!(timeline.pointer_move(390.0), None);
    assert_eq!(timeline.index(), 1);

    // Hover is ignored until the pointer is released
    assert_eq!(timeline.hover_entry(12), None);
    timeline.pointer_up();
    assert_eq!(timeline.hover_entry(12).map(|c| c.current), Some(12));
}

#[test]
fn gallery_swipe_wraps_from_last_photo() {
    let config = SiteConfig::default();
    assert_eq!(config.content.gallery.len(), 30);

    let mut gallery =
        PhotoGallery::mount(config.content.gallery.clone(), ThresholdConfig::default()).unwrap();
    for _ in 0..29 {
        gallery.next();
    }
    assert_eq!(gallery.index(), 29);

    gallery.touch_end();
    gallery.touch_start(&GestureSample::new(100.0, InputSource::Touch));
    let change = gallery
        .touch_move(&GestureSample::new(40.0, InputSource::Touch))
        .unwrap();
    assert_eq!((change.previous, change.current), (29, 0));
}

// Integration tests driving full gesture scenarios through the public
// Calendar surface: drag, resize, validation revert, read-only refusal

mod fixtures;

use booking_grid::services::validation;
use booking_grid::utils::date::day_at_hour;
use booking_grid::{
    Calendar, CalendarConfig, CalendarEvent, CalendarView, GestureEnd, GestureStart,
    GestureUpdate, NavigationState, PointerPoint,
};
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::rc::Rc;

use fixtures::{business_hours_config, dates, event_on, full_grid_viewport};

type Committed = Rc<RefCell<Vec<CalendarEvent>>>;

fn calendar_with(config: CalendarConfig, events: Vec<CalendarEvent>) -> (Calendar, Committed) {
    let committed: Committed = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&committed);
    let mut calendar = Calendar::new(
        config,
        NavigationState::new(dates::monday(), CalendarView::Week),
        move |event| sink.borrow_mut().push(event),
    )
    .expect("Failed to build calendar");
    calendar.set_viewport(full_grid_viewport());
    calendar.set_events(events);
    (calendar, committed)
}

#[test]
fn test_drag_lands_on_the_hour_under_the_cursor() {
    let event = event_on(dates::monday(), 9, 10);
    let id = event.id;
    let (mut calendar, committed) = calendar_with(business_hours_config(), vec![event]);

    // Grab the event at its top edge (top = 2 cells below 07:00) and drop
    // it at 21:30 on Monday; the grid snaps to the 21:00 cell.
    assert_eq!(
        calendar.begin_gesture(id, PointerPoint::new(10.0, 96.0)),
        GestureStart::Started
    );
    let drop = PointerPoint::new(10.0, 14.5 * 48.0);
    calendar.on_gesture_move(drop);
    let end = calendar.on_gesture_end(drop);

    assert!(matches!(end, GestureEnd::Committed(_)));
    let committed = committed.borrow();
    assert_eq!(committed.len(), 1);
    assert_eq!(committed[0].from, day_at_hour(dates::monday(), 21));
    assert_eq!(committed[0].to, day_at_hour(dates::monday(), 22));
}

#[test]
fn test_drag_clamps_start_so_the_end_stays_inside_the_day() {
    // Two-hour event dragged to 21:00: a 21:00 start would end at 23:00,
    // so the start is pulled back to 20:00.
    let event = event_on(dates::monday(), 9, 11);
    let id = event.id;
    let (mut calendar, committed) = calendar_with(business_hours_config(), vec![event]);

    calendar.begin_gesture(id, PointerPoint::new(10.0, 96.0));
    let drop = PointerPoint::new(10.0, 14.0 * 48.0);
    calendar.on_gesture_move(drop);
    calendar.on_gesture_end(drop);

    let committed = committed.borrow();
    assert_eq!(committed[0].from, day_at_hour(dates::monday(), 20));
    assert_eq!(committed[0].to, day_at_hour(dates::monday(), 22));
}

#[test]
fn test_resize_snaps_up_to_whole_cells() {
    let event = event_on(dates::monday(), 9, 10);
    let id = event.id;
    let (mut calendar, committed) = calendar_with(business_hours_config(), vec![event]);

    // Bottom edge sits at 144px; pull it 100px down. 100px snaps up to
    // three cells (144px), so the hour-long event becomes four hours.
    assert_eq!(
        calendar.begin_resize(id, PointerPoint::new(10.0, 144.0)),
        GestureStart::Started
    );
    let update = calendar.on_resize_move(PointerPoint::new(10.0, 244.0));
    assert_eq!(update, GestureUpdate::Resized { height_delta: 144.0 });
    assert_eq!(calendar.projected_events()[0].height, 192.0);

    let end = calendar.on_resize_end(PointerPoint::new(10.0, 244.0));
    assert!(matches!(end, GestureEnd::Committed(_)));
    let committed = committed.borrow();
    assert_eq!(committed[0].from, day_at_hour(dates::monday(), 9));
    assert_eq!(committed[0].to, day_at_hour(dates::monday(), 13));
}

#[test]
fn test_rejected_drag_reverts_the_projection_exactly() {
    let config = CalendarConfig::builder()
        .time_range(7, 22)
        .validator(|candidate, ctx| validation::no_overlap()(candidate, ctx))
        .build()
        .unwrap();
    let moving = event_on(dates::monday(), 9, 10);
    let blocking = event_on(dates::monday(), 13, 14);
    let id = moving.id;
    let (mut calendar, committed) = calendar_with(config, vec![moving, blocking]);

    let before: Vec<_> = calendar.projected_events().to_vec();

    calendar.begin_gesture(id, PointerPoint::new(10.0, 96.0));
    // Drop onto the blocking event's cell
    calendar.on_gesture_move(PointerPoint::new(10.0, 300.0));
    let end = calendar.on_gesture_end(PointerPoint::new(10.0, 300.0));

    assert_eq!(end, GestureEnd::Rejected);
    assert!(committed.borrow().is_empty());
    assert_eq!(calendar.projected_events(), &before[..]);
}

#[test]
fn test_read_only_events_refuse_both_gestures() {
    let config = CalendarConfig::builder()
        .time_range(7, 22)
        .read_only(|event, _| event.owner_id == "locked")
        .build()
        .unwrap();
    let mut locked = event_on(dates::monday(), 9, 10);
    locked.owner_id = "locked".to_string();
    let id = locked.id;
    let (mut calendar, committed) = calendar_with(config, vec![locked]);
    let before: Vec<_> = calendar.projected_events().to_vec();

    assert_eq!(
        calendar.begin_gesture(id, PointerPoint::new(10.0, 96.0)),
        GestureStart::RefusedReadOnly
    );
    assert_eq!(
        calendar.begin_resize(id, PointerPoint::new(10.0, 144.0)),
        GestureStart::RefusedReadOnly
    );
    assert_eq!(
        calendar.on_gesture_move(PointerPoint::new(10.0, 300.0)),
        GestureUpdate::Ignored
    );
    assert_eq!(
        calendar.on_gesture_end(PointerPoint::new(10.0, 300.0)),
        GestureEnd::Ignored
    );

    assert!(committed.borrow().is_empty());
    assert_eq!(calendar.projected_events(), &before[..]);
}

#[test]
fn test_event_deleted_mid_gesture_aborts_cleanly() {
    let event = event_on(dates::monday(), 9, 10);
    let id = event.id;
    let (mut calendar, committed) = calendar_with(business_hours_config(), vec![event]);

    calendar.begin_gesture(id, PointerPoint::new(10.0, 96.0));
    calendar.set_events(Vec::new());

    assert_eq!(
        calendar.on_gesture_move(PointerPoint::new(10.0, 150.0)),
        GestureUpdate::Aborted(id)
    );
    // The machine is back in idle; the trailing pointer-up is stale.
    assert_eq!(
        calendar.on_gesture_end(PointerPoint::new(10.0, 150.0)),
        GestureEnd::Ignored
    );
    assert!(committed.borrow().is_empty());
}

#[test]
fn test_second_gesture_while_active_drops_both() {
    let first = event_on(dates::monday(), 9, 10);
    let second = event_on(dates::wednesday(), 11, 12);
    let first_id = first.id;
    let second_id = second.id;
    let (mut calendar, committed) =
        calendar_with(business_hours_config(), vec![first, second]);
    let before: Vec<_> = calendar.projected_events().to_vec();

    assert_eq!(
        calendar.begin_gesture(first_id, PointerPoint::new(10.0, 96.0)),
        GestureStart::Started
    );
    assert_eq!(
        calendar.begin_gesture(second_id, PointerPoint::new(210.0, 192.0)),
        GestureStart::Busy
    );
    assert_eq!(
        calendar.on_gesture_move(PointerPoint::new(10.0, 300.0)),
        GestureUpdate::Ignored
    );
    assert_eq!(
        calendar.on_gesture_end(PointerPoint::new(10.0, 300.0)),
        GestureEnd::Ignored
    );

    assert!(committed.borrow().is_empty());
    assert_eq!(calendar.projected_events(), &before[..]);
}

#[test]
fn test_week_navigation_round_trip_restores_the_view() {
    use booking_grid::NavigationAction;

    let event = event_on(dates::wednesday(), 9, 10);
    let (mut calendar, _) = calendar_with(business_hours_config(), vec![event]);
    let before: Vec<_> = calendar.projected_events().to_vec();

    calendar.dispatch(NavigationAction::Next).unwrap();
    assert!(calendar.projected_events().is_empty());
    calendar.dispatch(NavigationAction::Prev).unwrap();

    assert_eq!(calendar.projected_events(), &before[..]);
}

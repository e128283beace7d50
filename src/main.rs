// Booking Grid demo
// Headless walkthrough of the engine: seeds a week of events, then drives
// a drag and a resize through the public API

use anyhow::Result;
use chrono::Local;

use booking_grid::services::validation;
use booking_grid::utils::date::{day_at_hour, week_start};
use booking_grid::{
    Calendar, CalendarConfig, CalendarEvent, CalendarView, NavigationState, PointerPoint,
    ViewportRect,
};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Booking Grid demo");

    let config = CalendarConfig::builder()
        .time_range(7, 22)
        .cell_height(48.0)
        .validator(|candidate, ctx| validation::no_overlap()(candidate, ctx))
        .build()
        .map_err(anyhow::Error::msg)?;

    let today = Local::now().date_naive();
    let monday = week_start(today);
    let events = vec![
        CalendarEvent::new(
            "alice",
            "Team breakfast",
            day_at_hour(monday, 9),
            day_at_hour(monday, 10),
        )
        .map_err(anyhow::Error::msg)?,
        CalendarEvent::new(
            "bob",
            "Design review",
            day_at_hour(monday, 13),
            day_at_hour(monday, 15),
        )
        .map_err(anyhow::Error::msg)?,
        CalendarEvent::new(
            "alice",
            "One-on-one",
            day_at_hour(monday + chrono::Duration::days(2), 11),
            day_at_hour(monday + chrono::Duration::days(2), 12),
        )
        .map_err(anyhow::Error::msg)?,
    ];
    let dragged_id = events[0].id;

    let mut calendar = Calendar::new(
        config,
        NavigationState::new(today, CalendarView::Week),
        |event| println!("committed: {} now runs {} - {}", event.name, event.from, event.to),
    )?;
    calendar.set_viewport(ViewportRect::new(0.0, 0.0, 700.0, 720.0, 0.0));
    calendar.set_events(events.clone());

    println!("projected week:");
    for vm in calendar.projected_events() {
        println!(
            "  {:<16} left={:>5.1} top={:>5.1} h={:>5.1}",
            vm.name, vm.left, vm.top, vm.height
        );
    }

    // Drag the breakfast two columns right and two cells down
    println!("\ndragging '{}'...", events[0].name);
    let start = calendar.begin_gesture(dragged_id, PointerPoint::new(10.0, 96.0));
    log::info!("gesture start: {start:?}");
    calendar.on_gesture_move(PointerPoint::new(210.0, 240.0));
    let end = calendar.on_gesture_end(PointerPoint::new(210.0, 240.0));
    println!("drag result: {end:?}");

    // Resize the design review an hour longer
    println!("\nresizing '{}'...", events[1].name);
    calendar.begin_resize(events[1].id, PointerPoint::new(110.0, 384.0));
    calendar.on_resize_move(PointerPoint::new(110.0, 430.0));
    let end = calendar.on_resize_end(PointerPoint::new(110.0, 430.0));
    println!("resize result: {end:?}");

    Ok(())
}

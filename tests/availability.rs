use availability_calendar::{
    Booking, BookingSet, CalendarDate, CalendarNavigator, DayStatus, MonthKey, NavigatorConfig, WeekStart, sample,
};

fn date(s: &str) -> CalendarDate {
    s.parse().unwrap()
}

fn month(s: &str) -> MonthKey {
    s.parse().unwrap()
}

#[test]
fn checkout_day_is_free_and_already_past() {
    let today = "2026-03-15";
    let bookings = BookingSet::new([Booking::new("booking-3", date("2026-03-07"), date("2026-03-14"))]);

    assert!(!bookings.is_booked(date("2026-03-14")));
    assert!(bookings.is_booked(date("2026-03-13")));
    assert!(CalendarNavigator::is_past("2026-03-14", today));
    assert!(!CalendarNavigator::is_today("2026-03-14", today));
}

#[test]
fn booking_split_over_may_and_june() {
    let bookings = BookingSet::new([Booking::new("booking-9", date("2026-05-28"), date("2026-06-02"))]);

    let may: Vec<String> = bookings.booked_dates_in_month(2026, 4).into_iter().collect();
    let june: Vec<String> = bookings.booked_dates_in_month(2026, 5).into_iter().collect();

    assert_eq!(may, ["2026-05-28", "2026-05-29", "2026-05-30", "2026-05-31"]);
    assert_eq!(june, ["2026-06-01"]);
}

#[test]
fn browsing_a_session_from_today_to_the_horizon_and_back() {
    let bookings = sample::booking_set().unwrap();
    let mut nav = CalendarNavigator::new(date("2026-03-15"), NavigatorConfig::default());

    assert!(!nav.can_retreat());
    let opening = nav.render(&bookings);
    assert_eq!(opening.len(), 2);

    let march = &opening[0];
    assert_eq!(march.month(), month("2026-03"));
    let status_of = |day: &str| {
        march
            .days()
            .find(|cell| cell.date() == Some(date(day)))
            .and_then(|cell| cell.status())
    };
    assert_eq!(status_of("2026-03-10"), Some(DayStatus::Past));
    assert_eq!(status_of("2026-03-14"), Some(DayStatus::Past));
    assert_eq!(status_of("2026-03-15"), Some(DayStatus::Available));
    assert_eq!(status_of("2026-03-22"), Some(DayStatus::Booked));
    assert_eq!(status_of("2026-03-28"), Some(DayStatus::Available));
    assert_eq!(march.days().filter(|cell| cell.is_today()).count(), 1);

    let mut forward = 0;
    while nav.advance() {
        forward += 1;
    }
    assert_eq!(forward, 11);
    assert_eq!(nav.visible_months(), vec![month("2027-02"), month("2027-03")]);

    let mut back = 0;
    while nav.retreat() {
        back += 1;
    }
    assert_eq!(back, 11);
    assert_eq!(nav.first_month(), month("2026-03"));
}

#[test]
fn window_touching_horizon_after_one_step() {
    // Horizon for 2026-10-19 is 2027-10; a window ending one month short
    // (2027-08..2027-09) may move once more and no further.
    let mut nav = CalendarNavigator::new(date("2026-10-19"), NavigatorConfig::default());
    assert_eq!(nav.horizon(), Some(month("2027-10")));
    assert!(nav.jump_to(month("2027-08")));

    assert!(nav.advance());
    assert_eq!(nav.visible_months(), vec![month("2027-09"), month("2027-10")]);
    assert!(!nav.advance());
    assert_eq!(nav.first_month(), month("2027-09"));
}

#[test]
fn monday_first_grid_from_toml_config() {
    let config = NavigatorConfig::from_toml_str("week_start = \"monday\"\nwindow_size = 1\n").unwrap();
    assert_eq!(config.week_start, WeekStart::Monday);

    let nav = CalendarNavigator::new(date("2026-06-10"), config);
    let grids = nav.render(&BookingSet::default());
    assert_eq!(grids.len(), 1);

    // June 2026 opens on a Monday.
    assert_eq!(grids[0].leading_blanks(), 0);
    assert_eq!(grids[0].cells().len(), 30);
}

#[test]
fn replaced_feed_is_a_new_set() {
    let before = sample::booking_set().unwrap();
    let after = BookingSet::from_json_str(
        r#"[{"id": "late-add", "start": "2026-09-01", "end": "2026-09-05", "summary": "Reserved"}]"#,
    )
    .unwrap();

    assert!(before.is_booked(date("2026-08-20")));
    assert!(!after.is_booked(date("2026-08-20")));
    assert!(after.is_booked(date("2026-09-04")));
}

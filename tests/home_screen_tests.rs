mod common;
use chrono::{FixedOffset, Local, NaiveDate, Utc};
use common::{ReadOnlyStore, at, espresso, latte};
use rcoffeelog::cli::commands::status::render;
use rcoffeelog::core::coffee_log::CoffeeLogStore;
use rcoffeelog::core::home::HomeScreen;
use rcoffeelog::core::settings::{SettingsLogic, StoredHours};
use rcoffeelog::db::MemoryStore;
use rcoffeelog::db::store::{KeyValueStore, keys};
use rcoffeelog::errors::AppError;
use rcoffeelog::models::log_entry::CoffeeLogEntry;

fn screen_with(store: MemoryStore) -> HomeScreen<MemoryStore> {
    let mut screen = HomeScreen::new(store, 4.0);
    screen.refresh().unwrap();
    screen
}

#[test]
fn test_empty_log_has_no_reminder() {
    let screen = screen_with(MemoryStore::new());
    let now = at(2025, 3, 10, 9, 0);

    let state = screen.derived_state(now);
    assert_eq!(state.last_coffee_time, None);
    assert_eq!(state.next_reminder_time, None);
    assert!(!state.is_reminder_due);
    assert!(screen.last_entry().is_none());
    assert_eq!(screen.reminder_hours(), 4.0);
}

#[test]
fn test_empty_log_renders_placeholder() {
    let screen = screen_with(MemoryStore::new());
    let text = render(&screen, Local::now(), true, "-").join("\n");

    assert!(text.contains("Next Coffee"));
    assert!(text.contains("--:--"));
    assert!(!text.contains("Time for Coffee"));
    assert!(!text.contains("Last Coffee"));
    assert!(!text.contains("Today's Coffee"));
}

#[test]
fn test_drink_without_selection_is_rejected() {
    let mut screen = screen_with(MemoryStore::new());

    let err = screen.drink_coffee(at(2025, 3, 10, 9, 0)).unwrap_err();
    assert!(matches!(err, AppError::NoCoffeeSelected));
    assert_eq!(err.to_string(), "Please select a coffee type before logging!");

    assert!(screen.coffee_log().is_empty());
    assert_eq!(screen.last_coffee_time(), None);
    let store = screen.into_storage();
    assert_eq!(store.get(keys::COFFEE_LOG).unwrap(), None);
}

#[test]
fn test_drink_at_nine_with_four_hours() {
    let mut screen = screen_with(MemoryStore::new());
    screen.select(latte());

    let outcome = screen.drink_coffee(at(2025, 3, 10, 9, 0)).unwrap();
    assert_eq!(outcome.entry.coffee_type, latte());
    assert_eq!(outcome.next_reminder_time, Some(at(2025, 3, 10, 13, 0)));
    assert!(outcome.message().contains("Enjoyed your Latte!"));
    assert!(outcome.message().contains("Next reminder in 4 hours"));

    assert_eq!(screen.last_coffee_time(), Some(at(2025, 3, 10, 9, 0)));
    assert!(!screen.is_reminder_due(at(2025, 3, 10, 12, 59)));
    assert!(screen.is_reminder_due(at(2025, 3, 10, 13, 0)));
    assert!(screen.is_reminder_due(at(2025, 3, 10, 18, 0)));

    // selection survives for the next coffee
    assert_eq!(screen.selected(), Some(&latte()));
}

#[test]
fn test_drink_prepends_and_persists() {
    let mut screen = screen_with(MemoryStore::new());
    screen.select(latte());
    screen.drink_coffee(at(2025, 3, 10, 9, 0)).unwrap();
    screen.select(espresso());
    screen.drink_coffee(at(2025, 3, 10, 14, 0)).unwrap();

    assert_eq!(screen.coffee_log().len(), 2);
    assert_eq!(screen.last_entry().unwrap().coffee_type, espresso());

    let stored = CoffeeLogStore::new(screen.into_storage()).load().unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].coffee_type, espresso());
    assert_eq!(stored[1].coffee_type, latte());
}

#[test]
fn test_failed_persist_leaves_state_unchanged() {
    let mut screen = HomeScreen::new(ReadOnlyStore::default(), 4.0);
    screen.refresh().unwrap();
    screen.select(latte());

    let res = screen.drink_coffee(at(2025, 3, 10, 9, 0));
    assert!(matches!(res, Err(AppError::Io(_))));
    assert!(screen.coffee_log().is_empty());
    assert_eq!(screen.last_coffee_time(), None);
    assert_eq!(screen.next_reminder_time(), None);
}

#[test]
fn test_refresh_loads_last_coffee_from_first_entry() {
    let mut log = CoffeeLogStore::new(MemoryStore::new());
    log.append(CoffeeLogEntry::new(latte(), at(2025, 3, 10, 8, 0)))
        .unwrap();
    log.append(CoffeeLogEntry::new(espresso(), at(2025, 3, 10, 10, 30)))
        .unwrap();

    let screen = screen_with(log.into_inner());
    assert_eq!(screen.last_coffee_time(), Some(at(2025, 3, 10, 10, 30)));
    assert_eq!(screen.next_reminder_time(), Some(at(2025, 3, 10, 14, 30)));
}

#[test]
fn test_refresh_picks_up_changes_made_elsewhere() {
    let mut mem = MemoryStore::new();

    {
        let mut screen = HomeScreen::new(&mut mem, 4.0);
        screen.refresh().unwrap();
        screen.select(latte());
        screen.drink_coffee(at(2025, 3, 10, 9, 0)).unwrap();
        assert_eq!(screen.next_reminder_time(), Some(at(2025, 3, 10, 13, 0)));
    }

    // settings screen
    SettingsLogic::set_reminder_hours(&mut mem, "2").unwrap();
    SettingsLogic::set_profile_name(&mut mem, "Ada").unwrap();

    let mut screen = HomeScreen::new(&mut mem, 4.0);
    screen.refresh().unwrap();
    assert_eq!(screen.reminder_hours(), 2.0);
    assert_eq!(screen.user_name(), Some("Ada"));
    assert_eq!(screen.next_reminder_time(), Some(at(2025, 3, 10, 11, 0)));
}

#[test]
fn test_invalid_stored_hours_fall_back_to_default() {
    for raw in ["abc", "0", "-2", "", "1e-9", "0.001"] {
        let store = MemoryStore::new().with_value(keys::REMINDER_HOURS, raw);
        assert!(matches!(
            SettingsLogic::read_reminder_hours(&store).unwrap(),
            StoredHours::Invalid(_)
        ));

        let mut screen = HomeScreen::new(store, 3.0);
        screen.refresh().unwrap();
        assert_eq!(screen.reminder_hours(), 3.0, "raw value {:?}", raw);
    }
}

#[test]
fn test_invalid_default_hours_use_builtin_default() {
    let mut screen = HomeScreen::new(MemoryStore::new(), -1.0);
    screen.refresh().unwrap();
    assert_eq!(screen.reminder_hours(), 4.0);
}

#[test]
fn test_stored_hours_parsed() {
    let store = MemoryStore::new().with_value(keys::REMINDER_HOURS, "2.5");
    assert_eq!(
        SettingsLogic::read_reminder_hours(&store).unwrap(),
        StoredHours::Valid(2.5)
    );
    assert_eq!(
        SettingsLogic::read_reminder_hours(&MemoryStore::new()).unwrap(),
        StoredHours::Unset
    );
}

#[test]
fn test_set_reminder_hours_rejects_invalid_values() {
    let mut store = MemoryStore::new();
    assert!(matches!(
        SettingsLogic::set_reminder_hours(&mut store, "zero"),
        Err(AppError::InvalidReminderHours(_))
    ));
    assert!(store.is_empty());

    assert_eq!(SettingsLogic::set_reminder_hours(&mut store, "1.5").unwrap(), 1.5);
    assert_eq!(store.get(keys::REMINDER_HOURS).unwrap().as_deref(), Some("1.5"));
}

#[test]
fn test_apply_reminder_hours_recomputes() {
    let mut screen = screen_with(MemoryStore::new());
    screen.select(latte());
    screen.drink_coffee(at(2025, 3, 10, 9, 0)).unwrap();

    screen.apply_reminder_hours(1.0).unwrap();
    assert_eq!(screen.next_reminder_time(), Some(at(2025, 3, 10, 10, 0)));

    assert!(screen.apply_reminder_hours(0.0).is_err());
    assert_eq!(screen.reminder_hours(), 1.0);
}

#[test]
fn test_profile_name_blank_is_unset() {
    let screen = screen_with(MemoryStore::new().with_value(keys::PROFILE_NAME, "   "));
    assert_eq!(screen.user_name(), None);

    let screen = screen_with(MemoryStore::new().with_value(keys::PROFILE_NAME, " Ada "));
    assert_eq!(screen.user_name(), Some("Ada"));
}

#[test]
fn test_same_day_count() {
    let mut log = CoffeeLogStore::new(MemoryStore::new());
    for t in [
        at(2025, 3, 9, 20, 0),
        at(2025, 3, 10, 8, 0),
        at(2025, 3, 10, 12, 0),
        at(2025, 3, 10, 16, 0),
    ] {
        log.append(CoffeeLogEntry::new(latte(), t)).unwrap();
    }
    let screen = screen_with(log.into_inner());
    let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

    assert_eq!(screen.count_on_day(today, &Utc), 3);
    assert_eq!(screen.count_on_day(today.pred_opt().unwrap(), &Utc), 1);

    // In UTC+5 the "yesterday" entry falls on 2025-03-10 01:00.
    let plus5 = FixedOffset::east_opt(5 * 3600).unwrap();
    assert_eq!(screen.count_on_day(today, &plus5), 4);
}

#[test]
fn test_render_after_drink_shows_cards() {
    let mut screen = screen_with(MemoryStore::new().with_value(keys::PROFILE_NAME, "Ada"));
    screen.select(latte());
    let now = Utc::now();
    screen.drink_coffee(now).unwrap();

    let text = render(&screen, now.with_timezone(&Local), true, "=").join("\n");
    assert!(text.contains("Ada"));
    assert!(text.contains("Next Coffee"));
    assert!(text.contains("Last Coffee"));
    assert!(text.contains("Latte"));
    assert!(text.contains("1 Cup"));
    assert!(!text.contains("--:--"));
}

#[test]
fn test_render_rounds_last_minute_up() {
    let mut screen = screen_with(MemoryStore::new());
    screen.select(latte());
    let now = Utc::now();
    screen
        .drink_coffee(now - chrono::Duration::hours(4) + chrono::Duration::seconds(30))
        .unwrap();

    let text = render(&screen, now.with_timezone(&Local), false, "-").join("\n");
    assert!(text.contains("Next Coffee"));
    assert!(text.contains("(in 00h 01m)"));
    assert!(!text.contains("00h 00m"));
}

#[test]
fn test_render_shows_due_reminder() {
    let mut screen = screen_with(MemoryStore::new());
    screen.select(espresso());
    let drunk = Utc::now() - chrono::Duration::hours(5);
    screen.drink_coffee(drunk).unwrap();

    let text = render(&screen, Local::now(), false, "-").join("\n");
    assert!(text.contains("Time for Coffee!"));
    assert!(!text.contains("Good "));
}

use std::fs;
use std::sync::Arc;

use chrono::{Local, TimeZone};
use crmd::error::CrmdError;
use crmd::reminder::{
    create_reminder_controller, list_reminders_controller, resolve_reminder_controller,
};
use crmd_domain::Recurrence;
use crmd_infra::{Config, Context, ISys};
use tempfile::TempDir;

struct StaticSys(i64);
impl ISys for StaticSys {
    fn get_timestamp(&self) -> i64 {
        self.0
    }
}

fn setup(now: i64) -> (TempDir, Context) {
    let dir = tempfile::tempdir().unwrap();
    let mut ctx = Context::create(Config::with_storage_dir(dir.path()));
    ctx.sys = Arc::new(StaticSys(now));
    (dir, ctx)
}

fn ts(year: i32, month: u32, day: u32) -> i64 {
    Local
        .with_ymd_and_hms(year, month, day, 0, 0, 0)
        .unwrap()
        .timestamp()
}

#[test]
fn full_reminder_lifecycle_against_the_file_store() {
    let now = ts(2024, 1, 10);
    let (_dir, ctx) = setup(now);

    let msg = create_reminder_controller(
        &ctx,
        "water plants".into(),
        ts(2024, 1, 1),
        Some(Recurrence::Weekly),
    )
    .unwrap();
    assert_eq!(msg, "Created reminder 1.");

    let msg =
        create_reminder_controller(&ctx, "renew passport".into(), ts(2024, 6, 1), None).unwrap();
    assert_eq!(msg, "Created reminder 2.");

    // only the overdue weekly reminder is due
    let due = list_reminders_controller(&ctx, false).unwrap();
    assert_eq!(
        due,
        "Reminder! #1 - 1 Jan 2024: water plants - recurs weekly"
    );

    // completing it advances to the next 7-day boundary after "now"
    let msg = resolve_reminder_controller(&ctx, 1, true).unwrap();
    assert!(msg.starts_with("Resolved reminder 1. Next occurrence:"), "{}", msg);

    let due = list_reminders_controller(&ctx, false).unwrap();
    assert!(due.is_empty());

    let all = list_reminders_controller(&ctx, true).unwrap();
    assert_eq!(
        all,
        "Reminder! #1 - 15 Jan 2024: water plants - recurs weekly\n\
         Reminder! #2 - 1 Jun 2024: renew passport"
    );
}

#[test]
fn deleted_ids_are_reused_for_new_reminders() {
    let (_dir, ctx) = setup(ts(2024, 1, 1));

    create_reminder_controller(&ctx, "first".into(), ts(2024, 2, 1), None).unwrap();
    create_reminder_controller(&ctx, "second".into(), ts(2024, 3, 1), None).unwrap();

    let msg = resolve_reminder_controller(&ctx, 1, false).unwrap();
    assert_eq!(msg, "Deleted reminder 1.");

    let msg = create_reminder_controller(&ctx, "third".into(), ts(2024, 4, 1), None).unwrap();
    assert_eq!(msg, "Created reminder 1.");
}

#[test]
fn completing_a_one_shot_reminder_removes_it_from_the_file() {
    let (dir, ctx) = setup(ts(2024, 1, 10));

    create_reminder_controller(&ctx, "one shot".into(), ts(2024, 1, 1), None).unwrap();
    let msg = resolve_reminder_controller(&ctx, 1, true).unwrap();
    assert_eq!(msg, "Resolved reminder 1.");

    let contents = fs::read_to_string(dir.path().join("reminders.json")).unwrap();
    assert_eq!(contents, "[]");

    let all = list_reminders_controller(&ctx, true).unwrap();
    assert_eq!(all, "no reminders exist");
}

#[test]
fn resolving_an_unknown_id_reports_not_found_and_leaves_the_file_alone() {
    let (dir, ctx) = setup(ts(2024, 1, 10));

    create_reminder_controller(&ctx, "keep me".into(), ts(2024, 1, 1), None).unwrap();
    let before = fs::read(dir.path().join("reminders.json")).unwrap();

    let err = resolve_reminder_controller(&ctx, 42, true).unwrap_err();
    assert_eq!(err, CrmdError::NotFound(42));
    assert_eq!(err.to_string(), "reminder 42 not found");

    let after = fs::read(dir.path().join("reminders.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn the_file_stays_sorted_by_timestamp() {
    let (dir, ctx) = setup(ts(2024, 1, 1));

    create_reminder_controller(&ctx, "later".into(), ts(2024, 9, 1), None).unwrap();
    create_reminder_controller(&ctx, "sooner".into(), ts(2024, 2, 1), None).unwrap();
    create_reminder_controller(&ctx, "middle".into(), ts(2024, 5, 1), None).unwrap();

    let contents = fs::read_to_string(dir.path().join("reminders.json")).unwrap();
    let sooner = contents.find("sooner").unwrap();
    let middle = contents.find("middle").unwrap();
    let later = contents.find("later").unwrap();
    assert!(sooner < middle && middle < later);
}

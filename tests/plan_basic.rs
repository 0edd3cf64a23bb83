#![forbid(unsafe_code)]
use chrono::NaiveDate;
use rota::{
    calendar,
    model::{DayKind, StaffId},
    planner::{PlanError, PlanRequest, Planner, ResolveOptions},
};
use std::collections::BTreeSet;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn staff(ids: &[&str]) -> Vec<StaffId> {
    ids.iter().map(StaffId::new).collect()
}

fn request(year: i32, ids: &[&str], holidays: &[NaiveDate]) -> PlanRequest {
    PlanRequest {
        year,
        staff: staff(ids),
        holidays: holidays.iter().copied().collect(),
        options: ResolveOptions::new(100),
    }
}

#[test]
fn classify_year_covers_every_date() {
    let days = calendar::build_year(2022, &BTreeSet::new()).unwrap();
    assert_eq!(days.len(), 365);
    assert_eq!(days.first().unwrap().date, date(2022, 1, 1));
    assert_eq!(days.last().unwrap().date, date(2022, 12, 31));

    let leap = calendar::build_year(2024, &BTreeSet::new()).unwrap();
    assert_eq!(leap.len(), 366);
}

#[test]
fn classification_partitions_days() {
    let holidays = [date(2022, 1, 1), date(2022, 7, 8), date(2022, 12, 26)];
    let days = calendar::build_year(2022, &holidays.into_iter().collect()).unwrap();
    for day in &days {
        let flags = u8::from(day.is_holiday())
            + u8::from(day.is_weekend())
            + u8::from(day.is_friday())
            + u8::from(day.is_workday());
        assert_eq!(flags, 1, "partition broken on {}", day.date);
    }
}

#[test]
fn saturday_holiday_extends_to_sunday() {
    let days = calendar::build_year(2022, &[date(2022, 1, 1)].into_iter().collect()).unwrap();
    // 2022-01-01 est un samedi férié : le dimanche 01-02 est absorbé.
    assert_eq!(days[0].kind, DayKind::Holiday);
    assert_eq!(days[1].kind, DayKind::Holiday);
    assert_eq!(days[2].kind, DayKind::Workday); // lundi 01-03
    assert_eq!(days[6].kind, DayKind::Friday); // vendredi 01-07
    assert_eq!(days[7].kind, DayKind::Weekend); // samedi 01-08
}

#[test]
fn sunday_holiday_extends_to_saturday() {
    let days = calendar::build_year(2022, &[date(2022, 5, 1)].into_iter().collect()).unwrap();
    let sat = days.iter().find(|d| d.date == date(2022, 4, 30)).unwrap();
    let sun = days.iter().find(|d| d.date == date(2022, 5, 1)).unwrap();
    assert_eq!(sat.kind, DayKind::Holiday);
    assert_eq!(sun.kind, DayKind::Holiday);
}

#[test]
fn holiday_on_year_bounds_does_not_expand_out_of_range() {
    // Samedi 31 décembre : pas de dimanche suivant dans l'année.
    let days = calendar::build_year(2022, &[date(2022, 12, 31)].into_iter().collect()).unwrap();
    assert_eq!(days.last().unwrap().kind, DayKind::Holiday);
    assert_eq!(days[days.len() - 2].kind, DayKind::Friday); // vendredi 12-30

    // Dimanche 1er janvier : pas de samedi précédent dans l'année.
    let days = calendar::build_year(2023, &[date(2023, 1, 1)].into_iter().collect()).unwrap();
    assert_eq!(days[0].kind, DayKind::Holiday);
}

#[test]
fn holiday_outside_year_is_rejected() {
    let err = calendar::build_year(2022, &[date(2021, 12, 31)].into_iter().collect()).unwrap_err();
    assert!(matches!(err, PlanError::HolidayOutsideYear { .. }));
}

#[test]
fn empty_staff_is_rejected() {
    let err = Planner::build(&request(2022, &[], &[])).unwrap_err();
    assert!(matches!(err, PlanError::NoStaff));
}

#[test]
fn duplicate_staff_is_rejected() {
    let err = Planner::build(&request(2022, &["alice", "bob", "alice"], &[])).unwrap_err();
    assert!(matches!(err, PlanError::DuplicateStaff(id) if id == "alice"));
}

#[test]
fn every_date_is_assigned_exactly_once() {
    let planner = Planner::build(&request(2022, &["alice", "bob", "carol"], &[])).unwrap();
    let plan = planner.plan();
    assert_eq!(plan.days.len(), 365);
    assert!(plan.days.iter().all(|d| d.on_call.is_some()));
}

#[test]
fn category_assignment_is_round_robin_in_input_order() {
    // Deux fériés en pleine semaine : premier passage, ordre d'entrée.
    let holidays = [date(2022, 1, 5), date(2022, 1, 12)];
    let planner = Planner::build(&request(2022, &["alice", "bob", "carol"], &holidays)).unwrap();
    let plan = planner.plan();

    assert_eq!(
        plan.day(date(2022, 1, 5)).unwrap().on_call,
        Some(StaffId::new("alice"))
    );
    assert_eq!(
        plan.day(date(2022, 1, 12)).unwrap().on_call,
        Some(StaffId::new("bob"))
    );

    // Passe week-end suivante : carol (total 0) passe devant alice et bob.
    assert_eq!(
        plan.day(date(2022, 1, 1)).unwrap().on_call,
        Some(StaffId::new("carol"))
    );
    assert_eq!(
        plan.day(date(2022, 1, 2)).unwrap().on_call,
        Some(StaffId::new("alice"))
    );
}

#[test]
fn per_category_counts_differ_by_at_most_one() {
    let holidays = [
        date(2022, 1, 1),
        date(2022, 5, 2),
        date(2022, 7, 8),
        date(2022, 12, 26),
    ];
    let ids = ["alice", "bob", "carol", "dave", "erin"];
    let planner = Planner::build(&request(2022, &ids, &holidays)).unwrap();
    let tracker = planner.tracker();

    for kind in DayKind::PRIORITY {
        let counts: Vec<u32> = ids
            .iter()
            .map(|id| tracker.kind_total(&StaffId::new(id), kind))
            .collect();
        let max = counts.iter().max().unwrap();
        let min = counts.iter().min().unwrap();
        assert!(max - min <= 1, "{kind:?} unbalanced: {counts:?}");
    }
}

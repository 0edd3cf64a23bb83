#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

const STAFF: &str = "alfred,bob,charles,david,edward,frank,george,henry,ida,john,king,lincoln,mary,nancy,oscar,peter";

fn cli() -> Command {
    Command::cargo_bin("rota-cli").unwrap()
}

#[test]
fn generate_then_summary_and_export() {
    let dir = tempfile::tempdir().unwrap();
    let plan = dir.path().join("plan.json");
    let plan = plan.to_str().unwrap();

    // 0 si le plan est propre, 2 s'il reste des violations : les deux sont
    // des issues valides de la génération.
    let assert = cli()
        .args([
            "--plan",
            plan,
            "generate",
            "--year",
            "2022",
            "--staff",
            STAFF,
            "--max-iterations",
            "300",
        ])
        .assert()
        .stdout(contains("iterations:"));
    let code = assert.get_output().status.code().unwrap();
    assert!(code == 0 || code == 2, "unexpected exit code {code}");

    cli()
        .args(["--plan", plan, "summary"])
        .assert()
        .success()
        .stdout(contains("staff | hol").and(contains("alfred")));

    let out_csv = dir.path().join("days.csv");
    cli()
        .args([
            "--plan",
            plan,
            "export",
            "--out-csv",
            out_csv.to_str().unwrap(),
        ])
        .assert()
        .success();
    let table = std::fs::read_to_string(out_csv).unwrap();
    assert!(table.starts_with("date,weekday,workday,friday,weekend,holiday,on_call"));
    assert_eq!(table.lines().count(), 1 + 365);
}

#[test]
fn generate_from_demo_csv_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let plan = dir.path().join("plan.json");
    let plan = plan.to_str().unwrap();

    let assert = cli()
        .args([
            "--plan",
            plan,
            "generate",
            "--year",
            "2022",
            "--staff-csv",
            "demos/staff.csv",
            "--holidays",
            "demos/holidays-2022.csv",
            "--max-iterations",
            "300",
        ])
        .assert()
        .stdout(contains("iterations:").and(contains("alfred")));
    let code = assert.get_output().status.code().unwrap();
    assert!(code == 0 || code == 2, "unexpected exit code {code}");

    // Le plan sauvegardé se relit avec le seuil qu'il embarque.
    let check = cli().args(["--plan", plan, "check"]).assert();
    let code = check.get_output().status.code().unwrap();
    assert!(code == 0 || code == 2, "unexpected exit code {code}");
}

#[test]
fn malformed_holiday_csv_fails_generation() {
    let dir = tempfile::tempdir().unwrap();
    let holidays = dir.path().join("holidays.csv");
    std::fs::write(&holidays, "date\nnot-a-date\n").unwrap();
    let plan = dir.path().join("plan.json");

    cli()
        .args([
            "--plan",
            plan.to_str().unwrap(),
            "generate",
            "--year",
            "2022",
            "--staff",
            STAFF,
            "--holidays",
            holidays.to_str().unwrap(),
            "--max-iterations",
            "10",
        ])
        .assert()
        .failure()
        .stderr(contains("invalid holiday date"));
}

#[test]
fn generate_requires_max_iterations() {
    cli()
        .args(["generate", "--year", "2022", "--staff", STAFF])
        .assert()
        .failure()
        .stderr(contains("max-iterations"));
}

#[test]
fn generate_rejects_empty_staff() {
    let dir = tempfile::tempdir().unwrap();
    let plan = dir.path().join("plan.json");
    cli()
        .args([
            "--plan",
            plan.to_str().unwrap(),
            "generate",
            "--year",
            "2022",
            "--staff",
            ",",
            "--max-iterations",
            "10",
        ])
        .assert()
        .failure()
        .stderr(contains("staff"));
}

use crate::model::{Plan, StaffId};
use crate::report::RotaReport;
use anyhow::{bail, Context};
use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Import des membres depuis CSV : header `id`.
pub fn import_staff_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<StaffId>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let id = rec.get(0).context("missing id")?.trim();
        if id.is_empty() {
            bail!("invalid staff row (empty id)");
        }
        out.push(StaffId::new(id));
    }
    Ok(out)
}

/// Import des fériés depuis CSV : header `date`, format `YYYY-MM-DD`.
pub fn import_holidays_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<BTreeSet<NaiveDate>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = BTreeSet::new();
    for rec in rdr.records() {
        let rec = rec?;
        let raw = rec.get(0).context("missing date")?.trim();
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("invalid holiday date: {raw}"))?;
        out.insert(date);
    }
    Ok(out)
}

/// Export CSV du calendrier assigné, une ligne par date.
///
/// Colonnes `yes`/`no` par catégorie, la forme de table du tableur
/// d'origine du service.
pub fn export_days_csv<P: AsRef<Path>>(path: P, plan: &Plan) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record([
        "date", "weekday", "workday", "friday", "weekend", "holiday", "on_call",
    ])?;
    for day in &plan.days {
        let on_call = day.on_call.as_ref().map(StaffId::as_str).unwrap_or("");
        w.write_record([
            day.date.to_string().as_str(),
            day.weekday_name().as_str(),
            yes_no(day.is_workday()),
            yes_no(day.is_friday()),
            yes_no(day.is_weekend()),
            yes_no(day.is_holiday()),
            on_call,
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Export CSV de la synthèse par membre.
pub fn export_summary_csv<P: AsRef<Path>>(path: P, report: &RotaReport) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record([
        "staff",
        "holiday",
        "weekend",
        "friday",
        "workday",
        "weekends_and_holidays",
        "weekdays_and_fridays",
        "total",
        "short_gaps",
    ])?;
    for row in &report.rows {
        w.write_record([
            row.staff.as_str().to_string(),
            row.holiday.to_string(),
            row.weekend.to_string(),
            row.friday.to_string(),
            row.workday.to_string(),
            row.weekends_and_holidays.to_string(),
            row.weekdays_and_fridays.to_string(),
            row.total.to_string(),
            row.short_gaps.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Export JSON du plan (jolie mise en forme).
pub fn export_plan_json<P: AsRef<Path>>(path: P, plan: &Plan) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(plan)?;
    fs::write(path, s)?;
    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

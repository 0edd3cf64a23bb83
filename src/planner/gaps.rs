use crate::model::{CalendarDay, StaffId};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Une assignation d'un membre, avec l'écart en jours depuis sa précédente.
///
/// `gap_days` vaut `None` pour la première assignation du membre : elle n'a
/// pas de précédente et n'est jamais candidate à une violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapRecord {
    pub date: NaiveDate,
    pub gap_days: Option<i64>,
}

/// Calcule les écarts de chaque membre à partir du plan courant.
///
/// Fonction pure : les enregistrements sont dérivés, jamais stockés, et
/// recalculés à chaque besoin. La clé `BTreeMap` fixe un ordre d'itération
/// déterministe par identifiant.
pub fn gap_records(days: &[CalendarDay]) -> BTreeMap<StaffId, Vec<GapRecord>> {
    let mut out: BTreeMap<StaffId, Vec<GapRecord>> = BTreeMap::new();

    // `days` est chronologique : les dates de chaque membre le sont aussi.
    for day in days {
        let Some(staff) = &day.on_call else {
            continue;
        };
        let records = out.entry(staff.clone()).or_default();
        let gap_days = records
            .last()
            .map(|prev| day.date.signed_duration_since(prev.date).num_days());
        records.push(GapRecord {
            date: day.date,
            gap_days,
        });
    }

    out
}

/// Écart minimal observé sur tout le plan, toutes personnes confondues.
pub fn min_observed_gap(days: &[CalendarDay]) -> Option<i64> {
    gap_records(days)
        .values()
        .flatten()
        .filter_map(|r| r.gap_days)
        .min()
}

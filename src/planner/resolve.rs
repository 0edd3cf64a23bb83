use super::gaps;
use super::types::{ResolveOptions, Violation};
use crate::model::{CalendarDay, StaffId};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Bilan d'une résolution : itérations consommées, swaps effectués et
/// violations restantes (vide en cas de résolution complète).
#[derive(Debug, Clone)]
pub struct ResolveOutcome {
    pub iterations: u32,
    pub swaps: u32,
    pub violations: Vec<Violation>,
}

impl ResolveOutcome {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Répare les écarts trop courts par échanges au sein d'une même catégorie.
///
/// Boucle bornée par `opts.max_iterations`, un swap au plus par itération :
/// 1. recalcul des écarts ; plus de violation → terminé ;
/// 2. membres violants classés par nombre de violations décroissant,
///    égalité départagée par identifiant croissant ;
/// 3. pour le premier membre classé dont le pool n'est pas vide : sa
///    violation d'écart minimal (égalité : date la plus ancienne), pool =
///    dates de même catégorie assignées à d'autres membres, candidat
///    maximisant l'écart minimal résultant du membre (égalité : date
///    candidate la plus ancienne), puis échange des deux assignations.
///
/// Un passage où aucun membre classé n'a de pool ne produit aucun swap et
/// termine la boucle. Les swaps ne touchent que `on_call` : catégories et
/// totaux par catégorie sont conservés par construction. Un rapport final
/// non vide est un état terminal valide du glouton, pas une erreur.
pub(super) fn resolve(days: &mut [CalendarDay], opts: ResolveOptions) -> ResolveOutcome {
    let mut iterations = 0u32;
    let mut swaps = 0u32;

    while iterations < opts.max_iterations {
        iterations += 1;

        let violations = collect_violations(days, opts.min_gap);
        if violations.is_empty() {
            break;
        }

        let mut swapped = false;
        for staff in ranked_staff(&violations) {
            let Some(target) = worst_violation(&violations, &staff) else {
                continue;
            };
            let Some(candidate) = best_candidate(days, &staff, target.date) else {
                // Pool vide pour cette catégorie : membre suivant.
                continue;
            };

            swap_on_call(days, target.date, candidate);
            swaps += 1;
            swapped = true;

            #[cfg(feature = "logging")]
            tracing::debug!(
                staff = %staff,
                violation = %target.date,
                swapped_with = %candidate,
                gap_days = target.gap_days,
                "gap swap"
            );
            break;
        }

        if !swapped {
            break;
        }
    }

    let violations = collect_violations(days, opts.min_gap);

    #[cfg(feature = "logging")]
    tracing::debug!(
        iterations,
        swaps,
        remaining = violations.len(),
        "resolution finished"
    );

    ResolveOutcome {
        iterations,
        swaps,
        violations,
    }
}

/// Toutes les violations courantes, ordonnées par (membre, date).
pub(super) fn collect_violations(days: &[CalendarDay], min_gap: u32) -> Vec<Violation> {
    let mut out = Vec::new();
    for (staff, records) in gaps::gap_records(days) {
        for record in records {
            if let Some(gap_days) = record.gap_days {
                if gap_days < i64::from(min_gap) {
                    out.push(Violation {
                        staff: staff.clone(),
                        date: record.date,
                        gap_days,
                    });
                }
            }
        }
    }
    out
}

/// Membres violants, du plus chargé au moins chargé ; égalités par
/// identifiant croissant (le comptage vient d'une BTreeMap et le tri est
/// stable).
fn ranked_staff(violations: &[Violation]) -> Vec<StaffId> {
    let mut counts: BTreeMap<&StaffId, usize> = BTreeMap::new();
    for v in violations {
        *counts.entry(&v.staff).or_default() += 1;
    }
    let mut ranked: Vec<(&StaffId, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.into_iter().map(|(id, _)| id.clone()).collect()
}

/// La violation la plus sévère d'un membre : écart minimal, puis date la
/// plus ancienne. `violations` est trié par date pour un membre donné, la
/// comparaison stricte suffit.
fn worst_violation<'a>(violations: &'a [Violation], staff: &StaffId) -> Option<&'a Violation> {
    violations
        .iter()
        .filter(|v| &v.staff == staff)
        .reduce(|best, v| if v.gap_days < best.gap_days { v } else { best })
}

/// Choisit dans le pool de même catégorie la date candidate dont l'échange
/// maximise l'écart minimal résultant du membre violant ; égalités
/// départagées par la date candidate la plus ancienne. `None` si le pool
/// est vide.
fn best_candidate(days: &[CalendarDay], staff: &StaffId, violating: NaiveDate) -> Option<NaiveDate> {
    let kind = days[day_index(days, violating)].kind;
    let own_dates: Vec<NaiveDate> = days
        .iter()
        .filter(|d| d.on_call.as_ref() == Some(staff))
        .map(|d| d.date)
        .collect();

    let mut best: Option<(NaiveDate, i64)> = None;
    for day in days {
        if day.kind != kind {
            continue;
        }
        match &day.on_call {
            Some(other) if other != staff => {}
            _ => continue,
        }
        let resulting = simulated_min_gap(&own_dates, violating, day.date);
        // Itération chronologique : seul un strict mieux remplace.
        if best.map_or(true, |(_, g)| resulting > g) {
            best = Some((day.date, resulting));
        }
    }
    best.map(|(date, _)| date)
}

/// Écart minimal du membre si sa date `remove` était remplacée par `add`.
fn simulated_min_gap(own_dates: &[NaiveDate], remove: NaiveDate, add: NaiveDate) -> i64 {
    let mut dates: Vec<NaiveDate> = own_dates
        .iter()
        .copied()
        .filter(|d| *d != remove)
        .collect();
    dates.push(add);
    dates.sort_unstable();
    dates
        .windows(2)
        .map(|w| w[1].signed_duration_since(w[0]).num_days())
        .min()
        .unwrap_or(i64::MAX)
}

/// Échange uniquement les `on_call` des deux dates.
fn swap_on_call(days: &mut [CalendarDay], a: NaiveDate, b: NaiveDate) {
    let ia = day_index(days, a);
    let ib = day_index(days, b);
    let tmp = days[ia].on_call.take();
    days[ia].on_call = days[ib].on_call.take();
    days[ib].on_call = tmp;
}

/// Index d'une date dans le calendrier dense.
fn day_index(days: &[CalendarDay], date: NaiveDate) -> usize {
    date.signed_duration_since(days[0].date).num_days() as usize
}

use crate::model::{Plan, StaffId};
use crate::planner::{min_observed_gap, KindCounts, RosterTracker, Violation};

/// Ligne de synthèse par membre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffSummary {
    pub staff: StaffId,
    pub holiday: u32,
    pub weekend: u32,
    pub friday: u32,
    pub workday: u32,
    pub weekends_and_holidays: u32,
    pub weekdays_and_fridays: u32,
    pub total: u32,
    /// Nombre d'écarts encore sous le seuil pour ce membre.
    pub short_gaps: u32,
}

/// Synthèse finale : une ligne par membre, écart minimal observé et
/// violations restantes.
#[derive(Debug, Clone)]
pub struct RotaReport {
    pub rows: Vec<StaffSummary>,
    pub min_gap_observed: Option<i64>,
    pub violations: Vec<Violation>,
}

impl RotaReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Agrège les totaux finaux du tracker et le rapport de violations.
///
/// Pure sommation et tri d'affichage : les lignes suivent l'ordre des
/// identifiants. Les totaux par catégorie viennent du tracker, que les
/// swaps du résolveur ont conservés exactement.
pub fn build_report(plan: &Plan, tracker: &RosterTracker, violations: Vec<Violation>) -> RotaReport {
    let mut staff: Vec<StaffId> = plan.staff.clone();
    staff.sort();

    let rows = staff
        .into_iter()
        .map(|id| {
            let KindCounts {
                holiday,
                weekend,
                friday,
                workday,
            } = tracker.counts(&id);
            let short_gaps = violations.iter().filter(|v| v.staff == id).count() as u32;
            StaffSummary {
                staff: id,
                holiday,
                weekend,
                friday,
                workday,
                weekends_and_holidays: holiday + weekend,
                weekdays_and_fridays: workday + friday,
                total: holiday + weekend + friday + workday,
                short_gaps,
            }
        })
        .collect();

    RotaReport {
        rows,
        min_gap_observed: min_observed_gap(&plan.days),
        violations,
    }
}

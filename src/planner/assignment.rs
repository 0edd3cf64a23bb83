use super::tracker::RosterTracker;
use crate::model::{CalendarDay, DayKind};

/// Assigne chaque jour du calendrier, catégorie par catégorie.
///
/// Les catégories sont traitées dans l'ordre fixe Holiday → Weekend →
/// Friday → Workday. Pour chaque catégorie, les jours sont pris en ordre
/// chronologique et distribués en round-robin strict sur l'ordre d'équité
/// courant : le i-ème jour va à `order[i % n]`. L'ordre est re-dérivé des
/// totaux entre deux catégories, jamais au milieu d'une passe.
///
/// L'appelant garantit une liste de membres non vide.
pub(super) fn assign_categories(days: &mut [CalendarDay], tracker: &mut RosterTracker) {
    for kind in DayKind::PRIORITY {
        let order = tracker.fairness_order();
        let n = order.len();

        for (i, day) in days.iter_mut().filter(|d| d.kind == kind).enumerate() {
            let staff = &order[i % n];
            day.on_call = Some(staff.clone());
            tracker.record(staff, kind);
        }
    }
}

use crate::model::{DayKind, Plan, StaffId};
use std::collections::BTreeMap;

/// Compteurs d'assignation par membre et par catégorie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindCounts {
    pub holiday: u32,
    pub weekend: u32,
    pub friday: u32,
    pub workday: u32,
}

impl KindCounts {
    pub fn get(&self, kind: DayKind) -> u32 {
        match kind {
            DayKind::Holiday => self.holiday,
            DayKind::Weekend => self.weekend,
            DayKind::Friday => self.friday,
            DayKind::Workday => self.workday,
        }
    }

    fn bump(&mut self, kind: DayKind) {
        match kind {
            DayKind::Holiday => self.holiday += 1,
            DayKind::Weekend => self.weekend += 1,
            DayKind::Friday => self.friday += 1,
            DayKind::Workday => self.workday += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.holiday + self.weekend + self.friday + self.workday
    }
}

/// Suit les totaux cumulés et fournit l'ordre d'équité des passes
/// round-robin.
///
/// L'ordre est re-trié (tri stable) par total croissant à chaque appel de
/// [`fairness_order`](RosterTracker::fairness_order) ; les égalités
/// conservent l'ordre de l'appel précédent, initialement l'ordre d'entrée.
/// C'est ce re-semis entre catégories qui compense les déséquilibres des
/// passes précédentes.
#[derive(Debug, Clone)]
pub struct RosterTracker {
    order: Vec<StaffId>,
    counts: BTreeMap<StaffId, KindCounts>,
}

impl RosterTracker {
    pub fn new(staff: &[StaffId]) -> Self {
        Self {
            order: staff.to_vec(),
            counts: staff
                .iter()
                .map(|s| (s.clone(), KindCounts::default()))
                .collect(),
        }
    }

    /// Reconstruit les totaux en recomptant un plan existant.
    ///
    /// Les swaps du résolveur conservant les totaux, ce recomptage redonne
    /// exactement l'état du tracker en fin d'assignation.
    pub fn from_plan(plan: &Plan) -> Self {
        let mut tracker = Self::new(&plan.staff);
        for day in &plan.days {
            if let Some(staff) = &day.on_call {
                tracker.record(staff, day.kind);
            }
        }
        tracker
    }

    /// Ordre d'équité courant : total croissant, tri stable.
    pub fn fairness_order(&mut self) -> Vec<StaffId> {
        let counts = &self.counts;
        let mut order = std::mem::take(&mut self.order);
        order.sort_by_key(|id| counts.get(id).map_or(0, KindCounts::total));
        self.order = order;
        self.order.clone()
    }

    pub fn record(&mut self, staff: &StaffId, kind: DayKind) {
        self.counts.entry(staff.clone()).or_default().bump(kind);
    }

    pub fn total(&self, staff: &StaffId) -> u32 {
        self.counts.get(staff).map_or(0, KindCounts::total)
    }

    pub fn kind_total(&self, staff: &StaffId, kind: DayKind) -> u32 {
        self.counts.get(staff).map_or(0, |c| c.get(kind))
    }

    pub fn counts(&self, staff: &StaffId) -> KindCounts {
        self.counts.get(staff).copied().unwrap_or_default()
    }
}

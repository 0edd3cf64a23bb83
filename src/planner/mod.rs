mod assignment;
mod gaps;
mod resolve;
mod tracker;
mod types;

pub use gaps::{gap_records, min_observed_gap, GapRecord};
pub use resolve::ResolveOutcome;
pub use tracker::{KindCounts, RosterTracker};
pub use types::{PlanError, ResolveOptions, Violation, DEFAULT_MIN_GAP};

use crate::calendar;
use crate::model::{Plan, StaffId};
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

/// Configuration explicite d'une génération de plan.
///
/// L'ordre de `staff` ne sert que de départage initial, avant le premier
/// ordre d'équité. `options.max_iterations` est obligatoire (voir
/// [`ResolveOptions`]).
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub year: i32,
    pub staff: Vec<StaffId>,
    pub holidays: BTreeSet<NaiveDate>,
    pub options: ResolveOptions,
}

/// Planner : encapsule un plan en cours de construction.
///
/// Calcul batch mono-thread et déterministe : mêmes entrées, plan et
/// rapport bit-à-bit identiques. Toute sélection itère des conteneurs
/// ordonnés, jamais de table de hachage.
#[derive(Debug)]
pub struct Planner {
    plan: Plan,
    tracker: RosterTracker,
    options: ResolveOptions,
}

impl Planner {
    /// Valide la configuration, classifie l'année et assigne chaque jour.
    ///
    /// Échoue sans produire de plan partiel : liste de membres vide,
    /// identifiant dupliqué ou férié hors de l'année cible.
    pub fn build(req: &PlanRequest) -> Result<Self, PlanError> {
        if req.staff.is_empty() {
            return Err(PlanError::NoStaff);
        }
        let mut seen = BTreeSet::new();
        for staff in &req.staff {
            if !seen.insert(staff) {
                return Err(PlanError::DuplicateStaff(staff.as_str().to_owned()));
            }
        }

        let mut days = calendar::build_year(req.year, &req.holidays)?;
        let mut tracker = RosterTracker::new(&req.staff);
        assignment::assign_categories(&mut days, &mut tracker);

        let plan = Plan::new(req.year, req.staff.clone(), req.options.min_gap, days);
        Ok(Self {
            plan,
            tracker,
            options: req.options,
        })
    }

    /// Reprend un plan déjà généré (tracker recompté depuis le plan).
    pub fn from_plan(plan: Plan, options: ResolveOptions) -> Self {
        let tracker = RosterTracker::from_plan(&plan);
        Self {
            plan,
            tracker,
            options,
        }
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn into_plan(self) -> Plan {
        self.plan
    }

    pub fn tracker(&self) -> &RosterTracker {
        &self.tracker
    }

    pub fn options(&self) -> ResolveOptions {
        self.options
    }

    /// Écarts courants par membre (recalculés, jamais mis en cache).
    pub fn gap_records(&self) -> BTreeMap<StaffId, Vec<GapRecord>> {
        gaps::gap_records(&self.plan.days)
    }

    /// Violations courantes sans rien réparer.
    pub fn violations(&self) -> Vec<Violation> {
        resolve::collect_violations(&self.plan.days, self.options.min_gap)
    }

    /// Boucle de réparation par swaps (voir `resolve`).
    pub fn resolve(&mut self) -> ResolveOutcome {
        resolve::resolve(&mut self.plan.days, self.options)
    }
}

/// Violations d'un plan rechargé, sans passer par un `Planner`.
pub fn violations_of(plan: &Plan, min_gap: u32) -> Vec<Violation> {
    resolve::collect_violations(&plan.days, min_gap)
}

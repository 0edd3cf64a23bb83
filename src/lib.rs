#![forbid(unsafe_code)]
//! Rota — génération locale d'un planning annuel d'astreinte (sans BD).
//!
//! - Classification du calendrier en catégories exclusives
//!   (férié / week-end / vendredi / jour ouvré).
//! - Assignation round-robin équitable par catégorie.
//! - Réparation gloutonne et bornée des écarts trop courts, par échanges
//!   au sein d'une même catégorie.
//! - Déterministe de bout en bout ; export JSON/CSV en dehors du cœur.

pub mod calendar;
pub mod io;
pub mod model;
pub mod planner;
pub mod report;
pub mod storage;

pub use model::{CalendarDay, DayKind, Plan, PlanId, StaffId};
pub use planner::{
    gap_records, min_observed_gap, violations_of, GapRecord, PlanError, PlanRequest, Planner,
    ResolveOptions, ResolveOutcome, RosterTracker, Violation, DEFAULT_MIN_GAP,
};
pub use report::{build_report, RotaReport, StaffSummary};
pub use storage::{JsonStorage, Storage};

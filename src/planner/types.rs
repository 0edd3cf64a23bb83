use crate::model::StaffId;
use chrono::NaiveDate;
use thiserror::Error;

/// Écart minimal par défaut entre deux astreintes d'une même personne.
pub const DEFAULT_MIN_GAP: u32 = 5;

/// Options de résolution des écarts.
///
/// `max_iterations` borne la boucle de réparation et doit être fourni
/// explicitement : la convergence du glouton n'est pas garantie, aucune
/// valeur par défaut n'est sûre.
#[derive(Debug, Clone, Copy)]
pub struct ResolveOptions {
    pub min_gap: u32,
    pub max_iterations: u32,
}

impl ResolveOptions {
    pub fn new(max_iterations: u32) -> Self {
        Self {
            min_gap: DEFAULT_MIN_GAP,
            max_iterations,
        }
    }

    pub fn with_min_gap(mut self, min_gap: u32) -> Self {
        self.min_gap = min_gap;
        self
    }
}

/// Assignation dont l'écart avec la précédente du même membre est trop court.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub staff: StaffId,
    pub date: NaiveDate,
    pub gap_days: i64,
}

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("staff list is empty")]
    NoStaff,
    #[error("duplicate staff id: {0}")]
    DuplicateStaff(String),
    #[error("holiday {date} is outside year {year}")]
    HolidayOutsideYear { date: NaiveDate, year: i32 },
    #[error("invalid year: {0}")]
    InvalidYear(i32),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

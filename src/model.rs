use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifiant fort pour un membre de l'équipe d'astreinte.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StaffId(String);

impl StaffId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().trim().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StaffId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifiant fort pour un plan généré.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanId(String);

impl PlanId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Catégorie exclusive d'un jour calendaire.
///
/// Un samedi ou dimanche absorbé par un férié est `Holiday`, pas `Weekend` ;
/// un vendredi férié est `Holiday`, pas `Friday`. Un jour porte exactement
/// une catégorie, figée à la classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayKind {
    Holiday,
    Weekend,
    Friday,
    Workday,
}

impl DayKind {
    /// Ordre de priorité des passes d'assignation round-robin.
    pub const PRIORITY: [DayKind; 4] = [
        DayKind::Holiday,
        DayKind::Weekend,
        DayKind::Friday,
        DayKind::Workday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DayKind::Holiday => "holiday",
            DayKind::Weekend => "weekend",
            DayKind::Friday => "friday",
            DayKind::Workday => "workday",
        }
    }
}

/// Jour calendaire classifié.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub kind: DayKind,
    pub on_call: Option<StaffId>,
}

impl CalendarDay {
    pub fn new(date: NaiveDate, kind: DayKind) -> Self {
        Self {
            date,
            kind,
            on_call: None,
        }
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Nom complet du jour ("Monday", …), pour les tables exportées.
    pub fn weekday_name(&self) -> String {
        self.date.format("%A").to_string()
    }

    pub fn is_holiday(&self) -> bool {
        self.kind == DayKind::Holiday
    }
    pub fn is_weekend(&self) -> bool {
        self.kind == DayKind::Weekend
    }
    pub fn is_friday(&self) -> bool {
        self.kind == DayKind::Friday
    }
    pub fn is_workday(&self) -> bool {
        self.kind == DayKind::Workday
    }
}

/// Plan annuel complet : calendrier classifié + assignations.
///
/// `days` est chronologique et couvre chaque date de l'année exactement une
/// fois. Après la phase d'assignation, chaque jour porte un `on_call`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub id: PlanId,
    pub year: i32,
    pub staff: Vec<StaffId>,
    pub min_gap: u32,
    pub days: Vec<CalendarDay>,
}

impl Plan {
    pub fn new(year: i32, staff: Vec<StaffId>, min_gap: u32, days: Vec<CalendarDay>) -> Self {
        Self {
            id: PlanId::random(),
            year,
            staff,
            min_gap,
            days,
        }
    }

    /// Index d'une date dans `days` (O(1), le calendrier étant dense).
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        let first = self.days.first()?.date;
        let offset = date.signed_duration_since(first).num_days();
        if offset < 0 {
            return None;
        }
        let idx = offset as usize;
        (idx < self.days.len()).then_some(idx)
    }

    pub fn day(&self, date: NaiveDate) -> Option<&CalendarDay> {
        self.index_of(date).map(|i| &self.days[i])
    }

    /// Dates assignées à `staff`, ordre chronologique.
    pub fn dates_of(&self, staff: &StaffId) -> Vec<NaiveDate> {
        self.days
            .iter()
            .filter(|d| d.on_call.as_ref() == Some(staff))
            .map(|d| d.date)
            .collect()
    }
}

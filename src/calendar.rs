use crate::model::{CalendarDay, DayKind};
use crate::planner::PlanError;
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeSet;

/// Construit le calendrier classifié d'une année complète.
///
/// Classification en passes ordonnées :
/// 1. marquage des fériés fournis ;
/// 2. extension d'un férié tombant un samedi au dimanche suivant, et d'un
///    férié tombant un dimanche au samedi précédent (le balayage consomme
///    l'état courant, déjà étendu ; un voisin hors de l'année est ignoré) ;
/// 3. samedi/dimanche non férié → `Weekend` ;
/// 4. vendredi non férié → `Friday` ;
/// 5. le reste → `Workday`.
///
/// Refuse toute date fériée hors de l'année cible.
pub fn build_year(
    year: i32,
    holidays: &BTreeSet<NaiveDate>,
) -> Result<Vec<CalendarDay>, PlanError> {
    let first =
        NaiveDate::from_ymd_opt(year, 1, 1).ok_or(PlanError::InvalidYear(year))?;

    for h in holidays {
        if h.year() != year {
            return Err(PlanError::HolidayOutsideYear { date: *h, year });
        }
    }

    let mut dates = Vec::with_capacity(366);
    let mut current = first;
    while current.year() == year {
        dates.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }

    let mut holiday: Vec<bool> = dates.iter().map(|d| holidays.contains(d)).collect();

    // Extension week-end/férié sur l'état courant du tableau.
    for i in 0..dates.len() {
        if !holiday[i] {
            continue;
        }
        match dates[i].weekday() {
            Weekday::Sat => {
                if i + 1 < dates.len() {
                    holiday[i + 1] = true;
                }
            }
            Weekday::Sun => {
                if i > 0 {
                    holiday[i - 1] = true;
                }
            }
            _ => {}
        }
    }

    let days = dates
        .iter()
        .zip(&holiday)
        .map(|(date, &is_holiday)| {
            let kind = if is_holiday {
                DayKind::Holiday
            } else {
                match date.weekday() {
                    Weekday::Sat | Weekday::Sun => DayKind::Weekend,
                    Weekday::Fri => DayKind::Friday,
                    _ => DayKind::Workday,
                }
            };
            CalendarDay::new(*date, kind)
        })
        .collect();

    Ok(days)
}

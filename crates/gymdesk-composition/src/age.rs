use jiff::civil::Date;
use jiff::tz::TimeZone;
use jiff::Timestamp;

use crate::error::CompositionError;

/// Completed years between `birth_date` and `on`.
///
/// The calendar-year difference, less one when the birthday has not yet come
/// round in `on`'s year. A 29 February birthday is reached on 1 March in
/// common years.
pub fn completed_years(birth_date: Date, on: Date) -> Result<u32, CompositionError> {
    if birth_date > on {
        return Err(CompositionError::BirthDateAfterAssessment {
            birth_date,
            assessed_on: on,
        });
    }

    let mut years = i32::from(on.year()) - i32::from(birth_date.year());
    if (on.month(), on.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }

    Ok(u32::try_from(years).unwrap_or_default())
}

/// The civil date an instant falls on in the studio's time zone.
pub fn assessment_date(at: Timestamp, tz: &TimeZone) -> Date {
    at.to_zoned(tz.clone()).date()
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn birthday_already_passed() {
        assert_eq!(completed_years(date(1990, 3, 10), date(2024, 6, 1)).unwrap(), 34);
    }

    #[test]
    fn birthday_not_yet_reached() {
        assert_eq!(completed_years(date(1990, 9, 10), date(2024, 6, 1)).unwrap(), 33);
        assert_eq!(completed_years(date(1990, 6, 2), date(2024, 6, 1)).unwrap(), 33);
    }

    #[test]
    fn on_the_birthday() {
        assert_eq!(completed_years(date(1990, 6, 1), date(2024, 6, 1)).unwrap(), 34);
    }

    #[test]
    fn leap_day_birthday() {
        assert_eq!(completed_years(date(2000, 2, 29), date(2023, 2, 28)).unwrap(), 22);
        assert_eq!(completed_years(date(2000, 2, 29), date(2023, 3, 1)).unwrap(), 23);
        assert_eq!(completed_years(date(2000, 2, 29), date(2024, 2, 29)).unwrap(), 24);
    }

    #[test]
    fn same_day_is_zero() {
        assert_eq!(completed_years(date(2024, 6, 1), date(2024, 6, 1)).unwrap(), 0);
    }

    #[test]
    fn future_birth_date_is_rejected() {
        let err = completed_years(date(2025, 1, 1), date(2024, 6, 1)).unwrap_err();
        assert!(matches!(err, CompositionError::BirthDateAfterAssessment { .. }));
    }

    #[test]
    fn date_follows_studio_time_zone() {
        // 02:30 UTC is still the previous evening in São Paulo (UTC-3).
        let at: Timestamp = "2024-06-02T02:30:00Z".parse().unwrap();
        let sao_paulo = TimeZone::get("America/Sao_Paulo").unwrap();
        assert_eq!(assessment_date(at, &sao_paulo), date(2024, 6, 1));
        assert_eq!(assessment_date(at, &TimeZone::UTC), date(2024, 6, 2));
    }
}

use chrono::{DateTime, NaiveDate};

/// Reformat an API date (`YYYY-MM-DD…`) as `MM/DD/YYYY`.
///
/// Full timestamps keep their own offset, so the calendar day shown is the
/// one in the string. Anything too short to slice is returned verbatim.
pub fn format_birthday(date: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(date) {
        return parsed.format("%m/%d/%Y").to_string();
    }

    if let Some(day) = date.get(0..10)
        && let Ok(parsed) = NaiveDate::parse_from_str(day, "%Y-%m-%d")
    {
        return parsed.format("%m/%d/%Y").to_string();
    }

    match (date.get(0..4), date.get(5..7), date.get(8..10)) {
        (Some(year), Some(month), Some(day)) => format!("{}/{}/{}", month, day, year),
        _ => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_timestamp() {
        assert_eq!(format_birthday("1993-07-21T05:19:41.530Z"), "07/21/1993");
    }

    #[test]
    fn test_offset_does_not_shift_the_day() {
        assert_eq!(format_birthday("1993-07-21T23:30:00-05:00"), "07/21/1993");
    }

    #[test]
    fn test_date_only() {
        assert_eq!(format_birthday("1962-01-05"), "01/05/1962");
    }

    #[test]
    fn test_unparseable_but_long_enough_is_sliced() {
        assert_eq!(format_birthday("1962-13-45 sometime"), "13/45/1962");
    }

    #[test]
    fn test_short_value_is_verbatim() {
        assert_eq!(format_birthday("1962-01"), "1962-01");
        assert_eq!(format_birthday(""), "");
    }
}

use chrono::NaiveDateTime;

/// Server timestamp for table cells.
pub fn format_datetime(value: &NaiveDateTime) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

/// Date-only variant.
pub fn format_date(value: &NaiveDateTime) -> String {
    value.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_server_timestamps() {
        let dt = NaiveDateTime::parse_from_str("2024-01-15T10:30:00", "%Y-%m-%dT%H:%M:%S").unwrap();
        assert_eq!(format_datetime(&dt), "2024-01-15 10:30");
        assert_eq!(format_date(&dt), "2024-01-15");
    }
}

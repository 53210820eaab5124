#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use shiftclock::libs::shift::{EmployeeId, ShiftRecord, Slot};
    use shiftclock::libs::summary::ShiftSummary;
    use shiftclock::libs::time::Stamp;

    fn record(day: u32, first: (&str, &str), second: (&str, &str)) -> ShiftRecord {
        let date = NaiveDate::from_ymd_opt(2025, 3, day).unwrap();
        let at = |hm: &str| {
            if hm.is_empty() {
                Stamp::Unset
            } else {
                Stamp::parse(&format!("2025-03-{:02} {}:00", day, hm))
            }
        };
        ShiftRecord::with_slots(
            EmployeeId::new("e-1"),
            date,
            Slot::new(at(first.0), at(first.1)),
            Slot::new(at(second.0), at(second.1)),
        )
    }

    #[test]
    fn test_summary_sums_days() {
        let records = vec![
            record(11, ("15:00", "19:00"), ("", "")),
            record(10, ("08:00", "12:00"), ("13:00", "17:00")),
        ];
        let summary = ShiftSummary::from_records(&records);

        assert_eq!(summary.total_minutes, 720);
        assert_eq!(summary.total(), "12:00");
        assert_eq!(summary.incomplete_days, 0);

        assert_eq!(summary.rows.len(), 2);
        assert_eq!(summary.rows[0].date, "2025-03-10");
        assert_eq!(summary.rows[0].worked, "08:00");
        assert_eq!(summary.rows[1].date, "2025-03-11");
        assert_eq!(summary.rows[1].morning_start, "-");
        assert_eq!(summary.rows[1].afternoon_start, "15:00");
        assert_eq!(summary.rows[1].afternoon_end, "19:00");
    }

    #[test]
    fn test_incomplete_day_shows_placeholder_and_adds_nothing() {
        let records = vec![
            record(10, ("08:00", "12:00"), ("", "")),
            record(11, ("08:00", ""), ("", "")),
        ];
        let summary = ShiftSummary::from_records(&records);

        assert_eq!(summary.total_minutes, 240);
        assert_eq!(summary.incomplete_days, 1);
        assert!(summary.rows[1].incomplete);
        assert_eq!(summary.rows[1].worked, "--:--");
        assert_eq!(summary.rows[1].morning_end, "-");
    }

    #[test]
    fn test_nothing_completed_totals_zero() {
        let records = vec![record(10, ("08:00", ""), ("", "")), record(11, ("", ""), ("", ""))];
        let summary = ShiftSummary::from_records(&records);

        assert_eq!(summary.total_minutes, 0);
        assert_eq!(summary.total(), "00:00");
        assert!(summary.rows.iter().all(|row| row.worked == "--:--"));
    }

    #[test]
    fn test_empty_summary() {
        let summary = ShiftSummary::from_records(&[]);
        assert!(summary.rows.is_empty());
        assert_eq!(summary.total_minutes, 0);
        assert_eq!(summary.incomplete_days, 0);
    }

    #[test]
    fn test_rows_follow_display_routing() {
        let summary = ShiftSummary::from_records(&[record(12, ("15:00", "18:00"), ("07:00", "11:00"))]);
        let row = &summary.rows[0];
        assert_eq!(row.morning_start, "07:00");
        assert_eq!(row.morning_end, "11:00");
        assert_eq!(row.afternoon_start, "15:00");
        assert_eq!(row.afternoon_end, "18:00");
        assert_eq!(row.worked, "07:00");
    }

    #[test]
    fn test_rows_serialize_to_json() {
        let summary = ShiftSummary::from_records(&[record(10, ("08:00", "12:00"), ("", ""))]);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["total_minutes"], 240);
        assert_eq!(json["rows"][0]["employee"], "e-1");
        assert_eq!(json["rows"][0]["worked"], "04:00");
    }
}

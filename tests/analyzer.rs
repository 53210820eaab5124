#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use shiftclock::libs::analyzer::{format_total_worked, is_incomplete, total_worked_minutes, ShiftAnalysis};
    use shiftclock::libs::classifier::display_view;
    use shiftclock::libs::shift::{EmployeeId, ShiftRecord, Slot};
    use shiftclock::libs::time::Stamp;

    fn at(hm: &str) -> Stamp {
        if hm.is_empty() {
            return Stamp::Unset;
        }
        Stamp::parse(&format!("2025-03-10 {}:00", hm))
    }

    fn record(first: (&str, &str), second: (&str, &str)) -> ShiftRecord {
        ShiftRecord::with_slots(
            EmployeeId::new("e-1"),
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            Slot::new(at(first.0), at(first.1)),
            Slot::new(at(second.0), at(second.1)),
        )
    }

    #[test]
    fn test_full_day() {
        let record = record(("08:00", "12:00"), ("13:00", "17:00"));
        assert_eq!(total_worked_minutes(&record), 480);
        assert!(!is_incomplete(&record));
        assert_eq!(format_total_worked(&record), "08:00");
    }

    #[test]
    fn test_single_afternoon_slot() {
        let record = record(("15:00", "19:00"), ("", ""));
        assert_eq!(total_worked_minutes(&record), 240);
        assert!(!is_incomplete(&record));
    }

    #[test]
    fn test_two_afternoon_slots_are_both_counted() {
        let record = record(("15:00", "19:00"), ("16:00", "20:00"));
        assert_eq!(total_worked_minutes(&record), 480);
    }

    #[test]
    fn test_open_morning_slot_is_incomplete() {
        let record = record(("08:00", ""), ("", ""));
        assert!(is_incomplete(&record));
        assert_eq!(total_worked_minutes(&record), 0);
        assert_eq!(format_total_worked(&record), "--:--");
    }

    #[test]
    fn test_open_slot_in_second_position_is_found_after_classification() {
        // Raw first is empty; the open slot sits in raw second but displays as morning.
        let record = record(("", ""), ("09:00", ""));
        assert!(is_incomplete(&record));
        assert!(display_view(&record).display_first.is_open());
    }

    #[test]
    fn test_closed_morning_and_open_afternoon() {
        let record = record(("08:00", "12:00"), ("15:00", ""));
        assert!(is_incomplete(&record));
        assert_eq!(total_worked_minutes(&record), 240);
    }

    #[test]
    fn test_both_slots_open_is_incomplete() {
        let record = record(("08:00", ""), ("15:00", ""));
        assert!(is_incomplete(&record));
        assert_eq!(total_worked_minutes(&record), 0);
    }

    #[test]
    fn test_empty_record() {
        let record = record(("", ""), ("", ""));
        assert!(!is_incomplete(&record));
        assert_eq!(total_worked_minutes(&record), 0);
        assert_eq!(format_total_worked(&record), "--:--");
    }

    #[test]
    fn test_end_without_start_counts_nothing() {
        let record = record(("", "12:00"), ("", ""));
        assert!(!is_incomplete(&record));
        assert_eq!(total_worked_minutes(&record), 0);
    }

    #[test]
    fn test_duration_follows_display_routing() {
        // Afternoon in raw first, morning in raw second: each column uses its own pair.
        let record = record(("15:00", "18:30"), ("07:00", "11:00"));
        let analysis = ShiftAnalysis::of(&record);
        assert_eq!(analysis.first_minutes, 240);
        assert_eq!(analysis.second_minutes, 210);
        assert_eq!(analysis.total_minutes, 450);
        assert_eq!(total_worked_minutes(&record), 450);
    }

    #[test]
    fn test_reversed_pair_counts_zero() {
        let record = record(("12:00", "08:00"), ("", ""));
        assert_eq!(total_worked_minutes(&record), 0);
        assert!(!is_incomplete(&record));
    }

    #[test]
    fn test_ambiguous_morning_pairs_are_both_counted() {
        let record = record(("08:00", "10:00"), ("10:30", "12:00"));
        assert_eq!(total_worked_minutes(&record), 210);
    }

    #[test]
    fn test_corrupt_fields_do_not_break_analysis() {
        let mut record = record(("08:00", "12:00"), ("13:00", "17:00"));
        record.second_slot.end = Stamp::parse("17:00 o'clock");
        assert_eq!(total_worked_minutes(&record), 240);
        assert!(is_incomplete(&record));
    }

    #[test]
    fn test_analysis_matches_free_functions() {
        let samples = [
            record(("08:00", "12:00"), ("13:00", "17:00")),
            record(("15:00", "19:00"), ("", "")),
            record(("08:00", ""), ("", "")),
            record(("", ""), ("", "")),
        ];
        for record in &samples {
            let analysis = ShiftAnalysis::of(record);
            assert_eq!(analysis.total_minutes, total_worked_minutes(record));
            assert_eq!(analysis.incomplete, is_incomplete(record));
            assert!(analysis.total_minutes >= 0);
        }
    }
}

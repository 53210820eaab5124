#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use shiftclock::libs::classifier::{classify, display_view, is_afternoon, SlotView};
    use shiftclock::libs::shift::{EmployeeId, ShiftRecord, Slot, SlotId};
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

    fn view(start: &str, end: &str, source: SlotId) -> SlotView {
        SlotView {
            start: at(start),
            end: at(end),
            source: Some(source),
        }
    }

    #[test]
    fn test_afternoon_boundary() {
        assert!(!is_afternoon(at("08:00")));
        assert!(!is_afternoon(at("14:00")));
        assert!(!is_afternoon(at("14:29")));
        assert!(is_afternoon(at("14:30")));
        assert!(is_afternoon(at("14:31")));
        assert!(is_afternoon(at("15:00")));
        assert!(is_afternoon(at("23:59")));
        assert!(!is_afternoon(Stamp::Unset));
    }

    #[test]
    fn test_morning_and_afternoon_stay_in_place() {
        let record = record(("08:00", "12:00"), ("13:00", "17:00"));
        let shift = classify(&record).unwrap();
        assert_eq!(shift.display_first, view("08:00", "12:00", SlotId::First));
        assert_eq!(shift.display_second, view("13:00", "17:00", SlotId::Second));
    }

    #[test]
    fn test_swapped_slots_are_routed_by_time() {
        let record = record(("15:00", "19:00"), ("08:00", "12:00"));
        let shift = classify(&record).unwrap();
        assert_eq!(shift.display_first, view("08:00", "12:00", SlotId::Second));
        assert_eq!(shift.display_second, view("15:00", "19:00", SlotId::First));
    }

    #[test]
    fn test_single_afternoon_slot_goes_right() {
        let record = record(("15:00", "19:00"), ("", ""));
        let shift = classify(&record).unwrap();
        assert_eq!(shift.display_first, SlotView::default());
        assert_eq!(shift.display_second, view("15:00", "19:00", SlotId::First));
    }

    #[test]
    fn test_single_morning_slot_in_second_position_goes_left() {
        let record = record(("", ""), ("07:30", "11:00"));
        let shift = classify(&record).unwrap();
        assert_eq!(shift.display_first, view("07:30", "11:00", SlotId::Second));
        assert_eq!(shift.display_second, SlotView::default());
    }

    #[test]
    fn test_two_afternoon_slots_keep_positions() {
        let record = record(("15:00", "19:00"), ("16:00", "20:00"));
        let shift = classify(&record).unwrap();
        assert_eq!(shift.display_first, view("15:00", "19:00", SlotId::First));
        assert_eq!(shift.display_second, view("16:00", "20:00", SlotId::Second));
    }

    #[test]
    fn test_end_without_start_is_never_displayed() {
        let record = record(("", "12:00"), ("", "18:00"));
        let shift = classify(&record).unwrap();
        assert_eq!(shift.display_first, SlotView::default());
        assert_eq!(shift.display_second, SlotView::default());
    }

    #[test]
    fn test_two_morning_slots_are_ambiguous() {
        let record = record(("10:30", "12:00"), ("08:00", "10:00"));
        let ambiguous = classify(&record).unwrap_err();
        assert_eq!(ambiguous.first_start, at("10:30"));
        assert_eq!(ambiguous.second_start, at("08:00"));
        assert_eq!(ambiguous.fallback.display_first, view("08:00", "10:00", SlotId::Second));
        assert_eq!(ambiguous.fallback.display_second, view("10:30", "12:00", SlotId::First));
        assert!(ambiguous.to_string().contains("before 14:30"));
    }

    #[test]
    fn test_display_view_keeps_both_ambiguous_pairs() {
        let record = record(("08:00", "10:00"), ("10:30", "12:00"));
        let shift = display_view(&record);
        assert_eq!(shift.display_first, view("08:00", "10:00", SlotId::First));
        assert_eq!(shift.display_second, view("10:30", "12:00", SlotId::Second));
    }

    #[test]
    fn test_open_slot_is_classified_by_start() {
        let record = record(("", ""), ("15:10", ""));
        let shift = display_view(&record);
        assert_eq!(shift.display_first, SlotView::default());
        assert_eq!(shift.display_second, view("15:10", "", SlotId::Second));
        assert!(shift.display_second.is_open());
    }

    #[test]
    fn test_malformed_start_is_not_displayed() {
        let mut record = record(("", "12:00"), ("13:00", "17:00"));
        record.first_slot.start = Stamp::parse("garbage");
        let shift = display_view(&record);
        // 13:00 is before the boundary, so the lone valid slot is morning work.
        assert_eq!(shift.display_first, view("13:00", "17:00", SlotId::Second));
        assert_eq!(shift.display_second, SlotView::default());
    }

    #[test]
    fn test_classification_is_idempotent() {
        let samples = [
            record(("08:00", "12:00"), ("13:00", "17:00")),
            record(("15:00", "19:00"), ("", "")),
            record(("15:00", "19:00"), ("16:00", "20:00")),
            record(("08:00", ""), ("", "")),
            record(("09:00", "10:00"), ("10:30", "11:00")),
        ];
        for record in &samples {
            assert_eq!(display_view(record), display_view(record));
            assert_eq!(classify(record), classify(record));
        }
    }

    #[test]
    fn test_routing_follows_edited_start() {
        let mut record = record(("14:00", "18:00"), ("", ""));
        assert_eq!(display_view(&record).display_first.source, Some(SlotId::First));

        record.first_slot.start = at("14:45");
        let shift = display_view(&record);
        assert_eq!(shift.display_first, SlotView::default());
        assert_eq!(shift.display_second.source, Some(SlotId::First));
    }
}

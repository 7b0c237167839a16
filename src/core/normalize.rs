//! Turn a partially-filled production entry into a canonical record.

use crate::core::shift::{classify, shift_for};
use crate::errors::{AppError, AppResult};
use crate::models::{ProductionInput, ProductionRecord, Shift};
use crate::utils::time::truncate_to_seconds;
use chrono::NaiveDateTime;

/// Normalize `input` against the wall-clock instant `now`.
///
/// Missing date/time are taken from `now` (second precision); a missing
/// shift is derived from the time. An explicit shift is kept even when it
/// disagrees with the time window.
pub fn normalize(input: ProductionInput, now: NaiveDateTime) -> AppResult<ProductionRecord> {
    let count = piece_count("count", input.count, AppError::InvalidCount)?;
    let defects = match input.defects {
        Some(d) => piece_count("defects", d, AppError::InvalidDefects)?,
        None => 0,
    };

    let date = input.date.unwrap_or_else(|| now.date());
    let time = input
        .time
        .unwrap_or_else(|| truncate_to_seconds(now.time()));

    let shift = match input.shift.as_deref() {
        None => classify(time)?,
        Some(code) => {
            let explicit = Shift::from_code(code).ok_or_else(|| AppError::InvalidShift(code.into()))?;
            let expected = shift_for(time);
            if expected != Some(explicit) {
                tracing::debug!(
                    %time,
                    explicit = %explicit,
                    expected = ?expected,
                    "explicit shift differs from time window; keeping explicit value"
                );
            }
            explicit
        }
    };

    Ok(ProductionRecord {
        date,
        time: Some(time),
        shift,
        line: input.line,
        product: input.product,
        operator: input.operator,
        count,
        defects,
        notes: input.notes,
    })
}

fn piece_count(field: &'static str, v: i64, negative: fn(i64) -> AppError) -> AppResult<u32> {
    if v < 0 {
        return Err(negative(v));
    }
    u32::try_from(v).map_err(|_| AppError::ValueTooLarge { field, value: v })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 12)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn input(count: i64) -> ProductionInput {
        ProductionInput {
            count,
            ..Default::default()
        }
    }

    #[test]
    fn shift_derived_from_supplied_time() {
        let mut i = input(10);
        i.time = NaiveTime::from_hms_opt(8, 0, 0);

        let rec = normalize(i, at(20, 0, 0)).unwrap();
        assert_eq!(rec.shift, Shift::A);
        assert_eq!(rec.count, 10);
        assert_eq!(rec.defects, 0);
        assert_eq!(rec.time, NaiveTime::from_hms_opt(8, 0, 0));
    }

    #[test]
    fn oversized_counts_are_not_reported_as_negative() {
        let mut i = input(5_000_000_000);
        i.time = NaiveTime::from_hms_opt(8, 0, 0);
        let err = normalize(i, at(9, 0, 0)).unwrap_err();
        assert!(matches!(
            err,
            AppError::ValueTooLarge {
                field: "count",
                value: 5_000_000_000
            }
        ));
        assert!(err.to_string().contains("too large"));

        let mut i = input(1);
        i.time = NaiveTime::from_hms_opt(8, 0, 0);
        i.defects = Some(i64::from(u32::MAX) + 1);
        let err = normalize(i, at(9, 0, 0)).unwrap_err();
        assert!(matches!(err, AppError::ValueTooLarge { field: "defects", .. }));
    }

    #[test]
    fn fractional_seconds_are_classified_as_given() {
        let mut i = input(3);
        i.time = NaiveTime::from_hms_milli_opt(15, 29, 59, 500);
        let rec = normalize(i, at(9, 0, 0)).unwrap();
        assert_eq!(rec.shift, Shift::A);
        assert_eq!(rec.time, NaiveTime::from_hms_milli_opt(15, 29, 59, 500));
    }

    #[test]
    fn explicit_shift_wins_over_time_window() {
        let mut i = input(5);
        i.time = NaiveTime::from_hms_opt(16, 0, 0);
        i.shift = Some("A".into());

        let rec = normalize(i, at(9, 0, 0)).unwrap();
        assert_eq!(rec.shift, Shift::A);
    }

    #[test]
    fn explicit_shift_accepted_before_first_window() {
        let mut i = input(1);
        i.time = NaiveTime::from_hms_opt(5, 0, 0);
        i.shift = Some("B".into());

        assert_eq!(normalize(i, at(9, 0, 0)).unwrap().shift, Shift::B);
    }

    #[test]
    fn missing_fields_come_from_clock() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 12)
            .unwrap()
            .and_hms_milli_opt(16, 45, 12, 345)
            .unwrap();

        let rec = normalize(input(3), now).unwrap();
        assert_eq!(rec.date, now.date());
        assert_eq!(rec.time, NaiveTime::from_hms_opt(16, 45, 12));
        assert_eq!(rec.shift, Shift::B);
    }

    #[test]
    fn early_clock_without_shift_is_rejected() {
        let err = normalize(input(3), at(6, 59, 59)).unwrap_err();
        assert!(matches!(err, AppError::InvalidTimeWindow(_)));
    }

    #[test]
    fn unknown_shift_is_rejected() {
        for bad in ["C", "a", "", "AB"] {
            let mut i = input(1);
            i.shift = Some(bad.into());
            let err = normalize(i, at(9, 0, 0)).unwrap_err();
            assert!(matches!(err, AppError::InvalidShift(_)), "{bad:?}");
        }
    }

    #[test]
    fn negative_counts_are_rejected() {
        assert!(matches!(
            normalize(input(-1), at(9, 0, 0)),
            Err(AppError::InvalidCount(-1))
        ));

        let mut i = input(4);
        i.defects = Some(-2);
        assert!(matches!(
            normalize(i, at(9, 0, 0)),
            Err(AppError::InvalidDefects(-2))
        ));
    }

    #[test]
    fn normalizing_a_canonical_record_is_identity() {
        let rec = ProductionRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            time: NaiveTime::from_hms_opt(15, 30, 0),
            shift: Shift::B,
            line: Some("L2".into()),
            product: Some("P-100".into()),
            operator: Some("op7".into()),
            count: 120,
            defects: 3,
            notes: Some("changeover".into()),
        };

        let again = normalize(rec.to_input(), at(7, 0, 0)).unwrap();
        assert_eq!(again, rec);
    }
}

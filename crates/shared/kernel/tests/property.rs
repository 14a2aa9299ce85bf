use pmt_kernel::format::{
    days_difference, format_description, format_duration, format_percentage, format_project_name,
    format_username, mask_email,
};
use pmt_kernel::validate::{has_valid_length, is_valid_username};
use proptest::prelude::*;

proptest! {
    #[test]
    fn collapsed_names_are_fixed_points(name in ".{0,80}") {
        let once = format_project_name(&name);
        prop_assert_eq!(format_project_name(&once), once);
    }

    #[test]
    fn capitalization_is_idempotent_on_ascii(name in "[a-zA-Z0-9_]{0,30}") {
        let once = format_username(&name);
        prop_assert_eq!(format_username(&once), once);
    }

    #[test]
    fn masking_never_touches_the_domain(local in "[a-z0-9.]{1,20}", domain in "[a-z0-9.]{1,20}") {
        let masked = mask_email(&format!("{local}@{domain}"));
        let domain_suffix = format!("@{domain}");
        prop_assert!(masked.ends_with(&domain_suffix));
        // Masking preserves overall length.
        prop_assert_eq!(masked.chars().count(), local.chars().count() + 1 + domain.chars().count());
    }

    #[test]
    fn previews_are_bounded(text in ".{0,300}", max in 1usize..150) {
        let preview = format_description(&text, max);
        prop_assert!(preview.chars().count() <= max + 3);
    }

    #[test]
    fn day_difference_is_symmetric_and_non_negative(a in 0i64..40_000, b in 0i64..40_000) {
        // UTC instants keep the arithmetic independent of the host timezone.
        let base = chrono::NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let da = format!("{}T00:00:00Z", base + chrono::Duration::days(a));
        let db = format!("{}T00:00:00Z", base + chrono::Duration::days(b));
        let diff = days_difference(da.as_str(), db.as_str());
        prop_assert!(diff >= 0);
        prop_assert_eq!(diff, days_difference(db.as_str(), da.as_str()));
        prop_assert_eq!(diff, (a - b).abs());
    }

    #[test]
    fn durations_decompose_into_sixties(minutes in 1u32..100_000) {
        let rendered = format_duration(f64::from(minutes));
        let hours = minutes / 60;
        let mins = minutes % 60;
        match (hours, mins) {
            (0, m) => prop_assert_eq!(rendered, format!("{m}m")),
            (h, 0) => prop_assert_eq!(rendered, format!("{h}h")),
            (h, m) => prop_assert_eq!(rendered, format!("{h}h {m}m")),
        }
    }

    #[test]
    fn percentages_always_render_a_percent_sign(value in -1_000.0f64..1_000.0, total in -1_000.0f64..1_000.0) {
        let rendered = format_percentage(value, total);
        prop_assert!(rendered.ends_with('%'));
    }

    #[test]
    fn length_check_matches_char_count(text in ".{0,40}") {
        let len = text.chars().count();
        prop_assert!(has_valid_length(&text, len, len));
        prop_assert_eq!(has_valid_length(&text, len + 1, len + 10), false);
    }

    #[test]
    fn valid_usernames_round_trip_their_own_shape(name in "[a-zA-Z0-9_]{3,20}") {
        prop_assert!(is_valid_username(&name));
    }
}

use super::*;

// =============================================================
// initials
// =============================================================

#[test]
fn initials_uppercase_the_first_letter_of_each_name() {
    assert_eq!(initials("ada", "lovelace"), "AL");
    assert_eq!(initials("Alan", "Turing"), "AT");
}

#[test]
fn initials_handle_missing_name_parts() {
    assert_eq!(initials("", "turing"), "T");
    assert_eq!(initials("alan", ""), "A");
    assert_eq!(initials("", ""), "");
}

#[test]
fn initials_uppercase_non_ascii_letters() {
    assert_eq!(initials("émile", "zola"), "ÉZ");
}

// =============================================================
// short_time
// =============================================================

#[test]
fn short_time_midnight_is_twelve_am() {
    assert_eq!(short_time(0, 5), "12:05 am");
}

#[test]
fn short_time_noon_is_twelve_pm() {
    assert_eq!(short_time(12, 0), "12:00 pm");
}

#[test]
fn short_time_afternoon_wraps_to_twelve_hour_clock() {
    assert_eq!(short_time(15, 7), "3:07 pm");
}

#[test]
fn short_time_morning_keeps_single_digit_hour() {
    assert_eq!(short_time(9, 30), "9:30 am");
}

#[test]
fn short_time_end_of_day() {
    assert_eq!(short_time(23, 59), "11:59 pm");
}

use crate::i18n::Language;
use chrono::{Datelike, NaiveDate};

// Jalaali leap-cycle break years.
const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

/// Day of March (Gregorian year `jy + 621`) on which Farvardin 1 of Jalaali
/// year `jy` falls. `None` outside the supported break table.
fn farvardin_first_in_march(jy: i32) -> Option<u32> {
    if jy < BREAKS[0] || jy >= BREAKS[BREAKS.len() - 1] {
        return None;
    }

    let gy = jy + 621;
    let mut leap_j = -14;
    let mut jp = BREAKS[0];
    let mut jump = 0;

    for &jm in &BREAKS[1..] {
        jump = jm - jp;
        if jy < jm {
            break;
        }
        leap_j += jump / 33 * 8 + (jump % 33) / 4;
        jp = jm;
    }

    let n = jy - jp;
    leap_j += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_j += 1;
    }

    let leap_g = gy / 4 - (gy / 100 + 1) * 3 / 4 - 150;
    u32::try_from(20 + leap_j - leap_g).ok()
}

pub fn jalaali_year(date: NaiveDate) -> Option<i32> {
    let jy = date.year() - 621;
    let nowruz_day = farvardin_first_in_march(jy)?;

    if (date.month(), date.day()) < (3, nowruz_day) {
        Some(jy - 1)
    } else {
        Some(jy)
    }
}

pub fn copyright_year(language: Language, today: NaiveDate) -> i32 {
    match language {
        Language::En => today.year(),
        Language::Fa => jalaali_year(today).unwrap_or(today.year() - 621),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn nowruz_boundary_moves_between_twentieth_and_twenty_first() {
        assert_eq!(jalaali_year(date(2024, 3, 19)), Some(1402));
        assert_eq!(jalaali_year(date(2024, 3, 20)), Some(1403));

        assert_eq!(jalaali_year(date(2025, 3, 20)), Some(1403));
        assert_eq!(jalaali_year(date(2025, 3, 21)), Some(1404));
    }

    #[test]
    fn footer_year_depends_on_language() {
        let today = date(2026, 10, 19);

        assert_eq!(copyright_year(Language::En, today), 2026);
        assert_eq!(copyright_year(Language::Fa, today), 1405);
        assert_eq!(copyright_year(Language::Fa, date(2026, 1, 5)), 1404);
    }
}

//! Lenient integer scanning for the date and time fields.
//!
//! A field that cannot be read is zero, as is every field after it. Nothing
//! here returns an error.

/// Reads up to `N` separator-delimited integers from the start of `input`.
///
/// Each field may be preceded by spaces or tabs and may carry a sign.
/// Anything after the last field read is ignored.
pub fn scan_integers<const N: usize>(input: &str, separator: char) -> [i64; N] {
    let mut fields = [0; N];
    let mut rest = input;

    for (index, slot) in fields.iter_mut().enumerate() {
        if index > 0 {
            match rest.strip_prefix(separator) {
                Some(tail) => rest = tail,
                None => break,
            }
        }

        match scan_integer(rest) {
            Some((value, tail)) => {
                *slot = value;
                rest = tail;
            }
            None => break,
        }
    }

    fields
}

/// Day of month from a `YYYY-MM-DD` string, or 0 when it cannot be read.
pub fn purchase_day(date: &str) -> i64 {
    let [_year, _month, day] = scan_integers::<3>(date, '-');
    day
}

/// Hour from an `HH:MM` string, or 0 when it cannot be read.
pub fn purchase_hour(time: &str) -> i64 {
    let [hour, _minute] = scan_integers::<2>(time, ':');
    hour
}

fn scan_integer(input: &str) -> Option<(i64, &str)> {
    let input = input.trim_start_matches([' ', '\t']);
    let (negative, unsigned) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    let digits = unsigned
        .bytes()
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }

    let magnitude: i64 = unsigned[..digits].parse().ok()?;
    let value = if negative { -magnitude } else { magnitude };
    Some((value, &unsigned[digits..]))
}

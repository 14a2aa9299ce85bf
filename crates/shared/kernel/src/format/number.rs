/// Narrow no-break space, the French digit group separator.
const GROUP_SEPARATOR: char = '\u{202f}';

/// Unit ladder for [`format_file_size`], factor 1024 between rungs.
const SIZE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

const KILO: f64 = 1024.0;

/// Renders a number with French digit grouping and a decimal comma, keeping at
/// most three fraction digits. Non-finite input yields `""`, zero yields `"0"`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    if !value.is_finite() {
        return String::new();
    }

    let abs = value.abs();
    let formatted = format!("{abs:.3}");
    let (int_digits, frac_digits) = formatted.split_once('.').unwrap_or((formatted.as_str(), ""));

    let mut out = String::new();
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&group_digits(int_digits));

    let frac = frac_digits.trim_end_matches('0');
    if !frac.is_empty() {
        out.push(',');
        out.push_str(frac);
    }
    out
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}

/// `value` as a share of `total`, rounded to the nearest whole percent.
/// A zero total or a `NaN` operand yields `"0%"`.
#[must_use]
pub fn format_percentage(value: f64, total: f64) -> String {
    if total == 0.0 || value.is_nan() || total.is_nan() {
        return "0%".to_owned();
    }

    let rounded = (value / total * 100.0).round();
    if rounded == 0.0 {
        return "0%".to_owned();
    }
    format!("{rounded}%")
}

/// Decomposes minutes into `{h}h {m}m`, omitting a zero component
/// (`"45m"`, `"1h"`, `"1h 30m"`). Non-positive or `NaN` input yields `"0h 0m"`.
/// Fractional minutes are floored.
#[must_use]
pub fn format_duration(minutes: f64) -> String {
    if !minutes.is_finite() || minutes <= 0.0 {
        return "0h 0m".to_owned();
    }

    let total = minutes.floor() as i64;
    let hours = total / 60;
    let mins = total % 60;

    if hours == 0 {
        return format!("{mins}m");
    }
    if mins == 0 {
        return format!("{hours}h");
    }
    format!("{hours}h {mins}m")
}

/// Renders a byte count with the largest fitting unit of
/// {B, KB, MB, GB}, one decimal at most (a trailing `.0` is dropped).
/// Zero yields `"0 B"`; `NaN` or negative input yields `""`.
#[must_use]
pub fn format_file_size(bytes: f64) -> String {
    if bytes == 0.0 {
        return "0 B".to_owned();
    }
    if !bytes.is_finite() || bytes < 0.0 {
        return String::new();
    }

    let exponent = (bytes.ln() / KILO.ln()).floor();
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let exponent = exponent.clamp(0.0, (SIZE_UNITS.len() - 1) as f64) as usize;

    let scaled = bytes / KILO.powi(exponent as i32);
    let rounded = (scaled * 10.0).round() / 10.0;

    let rendered = if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded:.1}")
    };
    format!("{rendered} {}", SIZE_UNITS[exponent])
}

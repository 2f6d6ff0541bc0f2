//! Number formatting for console output.

/// Formats a value with thousands separators at the given precision.
pub fn grouped(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(formatted.len() + whole.len() / 3);
    out.push_str(sign);
    let digits = whole.as_bytes();
    for (i, &digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(char::from(digit));
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// `$1,234.57` money format. The sign sits after the dollar mark.
pub fn money(value: f64) -> String {
    format!("${}", grouped(value, 2))
}

/// `1,234` integer format.
pub fn count(value: i64) -> String {
    grouped(value as f64, 0)
}

/// `+5.00%` signed percentage.
pub fn signed_percent(value: f64) -> String {
    format!("{value:+.2}%")
}

/// `×1.796` growth multiplier.
pub fn multiplier(value: f64) -> String {
    format!("×{}", grouped(value, 3))
}

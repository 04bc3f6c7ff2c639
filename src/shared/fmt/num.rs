//! Number formatting for dashboard figures (prices, TVL, volumes).

/// Adds thousands separators to a plain formatted number and trims trailing
/// fractional zeros.
pub fn group_thousands(formatted: &str) -> String {
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted
    };

    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Format with explicit decimal places and thousands separators.
pub fn with_decimals(amount: f64, decimals: usize) -> String {
    group_thousands(&format!("{:.1$}", amount, decimals))
}

/// Short form with a magnitude suffix: `1.2B`, `3.4M`, `5.6K`, or the plain
/// number below one thousand.
pub fn compact(amount: f64) -> String {
    let abs = amount.abs();
    if abs >= 1e9 {
        format!("{:.1}B", amount / 1e9)
    } else if abs >= 1e6 {
        format!("{:.1}M", amount / 1e6)
    } else if abs >= 1e3 {
        format!("{:.1}K", amount / 1e3)
    } else {
        with_decimals(amount, 2)
    }
}

/// Dollar amount with two decimals, e.g. `$2,712.45`.
pub fn usd(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${}", with_decimals(-amount, 2))
    } else {
        format!("${}", with_decimals(amount, 2))
    }
}

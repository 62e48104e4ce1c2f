use axum::http::{header::InvalidHeaderValue, HeaderValue};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build a session-style cookie header. `Secure` is optional so local
/// deployments without TLS keep working.
pub fn cookie(name: &str, value: &str, secure: bool) -> Result<HeaderValue, InvalidHeaderValue> {
    let secure_attr = if secure { " Secure;" } else { "" };
    format!("{name}={value}; HttpOnly; Max-Age=31536000;{secure_attr} Path=/; SameSite=Strict")
        .parse()
}

/// German-locale number formatting for preview labels: dot-grouped
/// thousands, comma decimal separator, at most three fraction digits.
pub fn format_de(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let negative = rounded < 0.0;
    let magnitude = rounded.abs();

    let whole = magnitude.trunc();
    let digits = format!("{whole:.0}");
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);

    let fraction = format!("{magnitude:.3}");
    if let Some(fraction_digits) = fraction.split('.').nth(1) {
        let fraction_digits = fraction_digits.trim_end_matches('0');
        if !fraction_digits.is_empty() {
            out.push(',');
            out.push_str(fraction_digits);
        }
    }
    out
}

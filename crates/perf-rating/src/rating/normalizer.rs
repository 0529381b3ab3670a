/// Reads a weight the way the form field is interpreted: leading whitespace is skipped and the
/// longest numeric prefix wins, so `"20"`, `" 20"` and `"20%"` are all 20. Empty, non-numeric
/// and non-finite values (including literals that overflow, such as `"1e400"`) are 0.
pub fn parse_weight(raw: &str) -> f64 {
    let prefix = numeric_prefix(raw.trim_start());
    if prefix.is_empty() {
        return 0.0;
    }

    prefix
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Longest leading `[+-]digits[.digits][(e|E)[+-]digits]` slice; the mantissa needs at least one
/// digit and a dangling exponent marker is left out.
fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes
            .get(start..)
            .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integer = digits_from(end);
    end += integer;

    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits_from(end + 1);
        if integer + fraction > 0 {
            end += 1 + fraction;
        }
    }
    if integer + fraction == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let count = digits_from(exponent);
        if count > 0 {
            end = exponent + count;
        }
    }

    &text[..end]
}

//! Field cleaning primitives for the BRASINDICE feed.

/// Parse a Brazilian-formatted number (decimal comma), e.g. "10,50".
///
/// Every comma becomes a dot before the float parse, so thousand-separated
/// values like "1.234,56" fail and yield `None`. The feed never carries
/// thousand separators; this matches its published numeric convention.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.replace(',', ".").parse::<f64>().ok()
}

/// Trim a raw field and strip one surrounding quote pair.
///
/// Returns `None` for blank input or when nothing is left after cleaning.
pub fn clean_string(raw: &str) -> Option<String> {
    let mut s = raw.trim();
    if s.is_empty() {
        return None;
    }
    s = s.strip_prefix('"').unwrap_or(s);
    s = s.strip_suffix('"').unwrap_or(s);
    if s.is_empty() { None } else { Some(s.to_string()) }
}

/// Clean an EAN barcode field.
///
/// On top of [`clean_string`]: internal whitespace and `-` are removed, and
/// a value carrying an `E`/`e` is treated as a scientific-notation artifact
/// (spreadsheet round-trips corrupt long digit strings this way) and
/// rendered back to plain digits when it parses as a float. A failed repair
/// parse keeps the string as is.
pub fn clean_ean(raw: &str) -> Option<String> {
    let base = clean_string(raw)?;
    let mut cleaned: String = base
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    if cleaned.contains(['E', 'e']) {
        if let Ok(value) = cleaned.parse::<f64>() {
            cleaned = format!("{:.0}", value.round());
        }
    }

    if cleaned.is_empty() || cleaned == "-" {
        None
    } else {
        Some(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_number_decimal_comma() {
        assert_eq!(parse_number("1,5"), Some(1.5));
        assert_eq!(parse_number(" 10,50 "), Some(10.5));
        assert_eq!(parse_number("30"), Some(30.0));
    }

    #[test]
    fn test_parse_number_rejects() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("abc"), None);
        // Thousand separators are not handled: all commas become dots.
        assert_eq!(parse_number("1.234,56"), None);
    }

    #[test]
    fn test_clean_string_strips_one_quote_pair() {
        assert_eq!(clean_string("\"EMS\""), Some("EMS".to_string()));
        assert_eq!(clean_string("  plain  "), Some("plain".to_string()));
        assert_eq!(clean_string("\"\"a\"\""), Some("\"a\"".to_string()));
    }

    #[test]
    fn test_clean_string_empty() {
        assert_eq!(clean_string(""), None);
        assert_eq!(clean_string("   "), None);
        assert_eq!(clean_string("\"\""), None);
    }

    #[test]
    fn test_clean_ean_strips_separators() {
        assert_eq!(
            clean_ean("789-1234 567-890"),
            Some("7891234567890".to_string())
        );
    }

    #[test]
    fn test_clean_ean_repairs_scientific_notation() {
        assert_eq!(clean_ean("7.89123E+12"), Some("7891230000000".to_string()));
        assert_eq!(clean_ean("7.89123e12"), Some("7891230000000".to_string()));
    }

    #[test]
    fn test_clean_ean_keeps_unparseable_scientific_artifact() {
        assert_eq!(clean_ean("E123X"), Some("E123X".to_string()));
    }

    #[test]
    fn test_clean_ean_dash_only_is_absent() {
        assert_eq!(clean_ean("-"), None);
        assert_eq!(clean_ean(""), None);
    }
}

//! Concentration extraction from free-text presentation strings.

use super::patterns::{
    ADDITIVE_COMPACT, ADDITIVE_COMPOUND, ADDITIVE_REPEATED_UNIT, BARE_PERCENT, LEADING_SIMPLE,
    PAREN_COMBINATION, RATIO, SUSPENSION_FALLBACK,
};

/// Derive a normalized drug-strength token from a presentation description.
///
/// The rules are tried in strict order and the first match wins: earlier
/// rules are more structured and must pre-empt looser ones. Rules 1-6 are
/// anchored at the start of the presentation; the percentage and suspension
/// fallbacks scan the whole text. Values keep their decimal-comma
/// formatting; only whitespace is stripped and units are uppercased.
pub fn extract_concentration(presentation: &str) -> Option<String> {
    // Rule 1: "(0,15 + 0,03) mg" -> "(0,15+0,03)MG"
    if let Some(caps) = PAREN_COMBINATION.captures(presentation) {
        let values: String = caps[1].split_whitespace().collect();
        return Some(format!("({}){}", values, caps[2].to_uppercase()));
    }

    // Rule 2: "5 mg/ml + 2 mg/ml" -> "5MG/ML+2MG/ML"
    if let Some(caps) = ADDITIVE_COMPOUND.captures(presentation) {
        return Some(format!(
            "{}{}+{}{}",
            &caps[1],
            caps[2].to_uppercase(),
            &caps[3],
            caps[4].to_uppercase()
        ));
    }

    // Rule 3: "100 mg + 20 mg" -> "100MG+20MG"
    if let Some(caps) = ADDITIVE_REPEATED_UNIT.captures(presentation) {
        return Some(format!(
            "{}{}+{}{}",
            &caps[1],
            caps[2].to_uppercase(),
            &caps[3],
            caps[4].to_uppercase()
        ));
    }

    // Rule 4: "80 + 12,5 mg" -> "80+12,5MG"
    if let Some(caps) = ADDITIVE_COMPACT.captures(presentation) {
        return Some(format!(
            "{}+{}{}",
            &caps[1],
            &caps[2],
            caps[3].to_uppercase()
        ));
    }

    // Rule 5: "6 / 200 mcg" -> "6/200MCG", "250 mg/5 ml" -> "250MG/5ML"
    if let Some(caps) = RATIO.captures(presentation) {
        let left_unit = caps
            .get(2)
            .map(|m| m.as_str().to_uppercase())
            .unwrap_or_default();
        return Some(format!(
            "{}{}/{}{}",
            &caps[1],
            left_unit,
            &caps[3],
            caps[4].to_uppercase()
        ));
    }

    // Rule 6: "50 mg" -> "50MG", "10%" -> "10%"
    if let Some(caps) = LEADING_SIMPLE.captures(presentation) {
        return Some(format!("{}{}", &caps[1], caps[2].to_uppercase()));
    }

    // Rule 7: first "N%" anywhere, e.g. "sol topica 5%"
    if let Some(caps) = BARE_PERCENT.captures(presentation) {
        return Some(format!("{}%", &caps[1]));
    }

    // Rule 8: suspension concentration mid-sentence, e.g. "Fr. 100 ml susp 250 mg/5 ml"
    if let Some(caps) = SUSPENSION_FALLBACK.captures(presentation) {
        return Some(format!(
            "{}{}/{}ML",
            &caps[1],
            caps[2].to_uppercase(),
            &caps[3]
        ));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn conc(s: &str) -> Option<String> {
        extract_concentration(s)
    }

    #[test]
    fn test_simple_leading() {
        assert_eq!(conc("50 mg"), Some("50MG".to_string()));
        assert_eq!(conc("50mg com 30 cpr"), Some("50MG".to_string()));
        assert_eq!(conc("2,5 g po liof"), Some("2,5G".to_string()));
        assert_eq!(conc("5000 ui"), Some("5000UI".to_string()));
    }

    #[test]
    fn test_compound_unit_beats_simple() {
        assert_eq!(conc("10 mg/ml"), Some("10MG/ML".to_string()));
        assert_eq!(conc("40 mcg/dose spray"), Some("40MCG/DOSE".to_string()));
        assert_eq!(conc("20 mcg/g pomada"), Some("20MCG/G".to_string()));
    }

    #[test]
    fn test_parenthesized_combination() {
        assert_eq!(conc("(0,15 + 0,03) mg"), Some("(0,15+0,03)MG".to_string()));
        assert_eq!(
            conc("(120 + 60 + 30) mg gran"),
            Some("(120+60+30)MG".to_string())
        );
    }

    #[test]
    fn test_additive_repeated_unit() {
        assert_eq!(conc("100 mg + 20 mg"), Some("100MG+20MG".to_string()));
        assert_eq!(
            conc("5 mg/ml + 2 mg/ml sol inj"),
            Some("5MG/ML+2MG/ML".to_string())
        );
    }

    #[test]
    fn test_additive_compact() {
        assert_eq!(conc("80 + 12,5 mg"), Some("80+12,5MG".to_string()));
        // Compound unit stays whole after the plus.
        assert_eq!(conc("5 + 2 mg/ml"), Some("5+2MG/ML".to_string()));
    }

    #[test]
    fn test_ratio() {
        assert_eq!(conc("6 / 200 mcg"), Some("6/200MCG".to_string()));
        assert_eq!(conc("250 mg/5 ml susp"), Some("250MG/5ML".to_string()));
    }

    #[test]
    fn test_percentage() {
        assert_eq!(conc("10%"), Some("10%".to_string()));
        assert_eq!(conc("sol topica 0,5%"), Some("0,5%".to_string()));
    }

    #[test]
    fn test_suspension_fallback_mid_sentence() {
        assert_eq!(
            conc("Fr. 100 ml — susp 250 mg/5 ml"),
            Some("250MG/5ML".to_string())
        );
    }

    #[test]
    fn test_no_numeric_pattern() {
        assert_eq!(conc("frasco ampola"), None);
        assert_eq!(conc(""), None);
    }

    #[test]
    fn test_unit_needs_word_boundary() {
        // "gotas" must not read as the unit "g".
        assert_eq!(conc("50 gotas"), None);
    }
}

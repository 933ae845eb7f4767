/// Clause reported for rules missing from [`WCAG_CLAUSES`].
pub const FALLBACK_CLAUSE: &str = "Multiple criteria";

pub const WCAG_CLAUSES: &[(&str, &str)] = &[
    ("label", "1.3.1 - Info and Relationships"),
    ("color-contrast", "1.4.3 - Contrast (Minimum)"),
    ("button-name", "4.1.2 - Name, Role, Value"),
    ("aria-describedby-refer", "4.1.2 - Name, Role, Value"),
];

/// WCAG 2.1 success criterion for a rule identifier.
pub fn wcag_clause(rule: &str) -> &'static str {
    WCAG_CLAUSES
        .iter()
        .find(|(id, _)| *id == rule)
        .map_or(FALLBACK_CLAUSE, |&(_, clause)| clause)
}

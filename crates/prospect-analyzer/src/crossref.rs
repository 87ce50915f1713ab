//! Attaching potential-customer lines to personas
//!
//! Matching is a plain lowercase substring test of the persona name against
//! each line. Personas whose names overlap (e.g. "Manager" and "IT Manager")
//! will both claim a line mentioning the longer name.

use crate::parser::strip_list_marker;
use prospect_domain::CustomerPersona;
use tracing::debug;

/// Customer labels from `fragment` whose line mentions `persona_name`
///
/// The label is the text before the first `-` on the line, after any
/// leading list marker. Line order and duplicates are kept; empty labels
/// are skipped.
pub fn customers_for(persona_name: &str, fragment: &str) -> Vec<String> {
    let needle = persona_name.to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    fragment
        .lines()
        .filter(|line| line.to_lowercase().contains(&needle))
        .filter_map(|line| {
            let label = strip_list_marker(line)
                .split('-')
                .next()
                .unwrap_or_default()
                .trim();
            (!label.is_empty()).then(|| label.to_string())
        })
        .collect()
}

/// Give each persona the customers that mention it
///
/// Personas are matched independently; a persona with no matching lines
/// gets an empty list.
pub fn cross_reference(personas: Vec<CustomerPersona>, fragment: &str) -> Vec<CustomerPersona> {
    personas
        .into_iter()
        .map(|persona| {
            let customers = customers_for(persona.name(), fragment);
            debug!(persona = persona.name(), matched = customers.len(), "Cross-referenced customers");
            persona.with_potential_customers(customers)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persona(name: &str) -> CustomerPersona {
        CustomerPersona::new(name, "desc", "cost", "branding").unwrap()
    }

    #[test]
    fn test_only_matching_line_attaches() {
        let fragment = "VP of Sales at Acme - fits well\nRandom line";
        let personas = cross_reference(vec![persona("VP of Sales"), persona("IT Manager")], fragment);
        assert_eq!(personas[0].potential_customers(), ["VP of Sales at Acme"]);
        assert!(personas[1].potential_customers().is_empty());
    }

    #[test]
    fn test_case_insensitive_match() {
        let customers = customers_for("IT Manager", "Director of IT at Globex - it manager: owns the budget");
        assert_eq!(customers, vec!["Director of IT at Globex"]);
    }

    #[test]
    fn test_line_without_separator_uses_whole_line() {
        let customers = customers_for("CTO", "  CTO at Initech  ");
        assert_eq!(customers, vec!["CTO at Initech"]);
    }

    #[test]
    fn test_list_markers_are_not_separators() {
        let fragment = "- Acme Corp - CTO: modernizing\n2. Globex - CTO: cloud migration";
        assert_eq!(customers_for("CTO", fragment), vec!["Acme Corp", "Globex"]);
    }

    #[test]
    fn test_decimal_prefix_is_not_a_list_marker() {
        let fragment = "3.5M-user platform Initech - CTO\n2. 4.2B Holdings - CTO";
        assert_eq!(customers_for("CTO", fragment), vec!["3.5M", "4.2B Holdings"]);
    }

    #[test]
    fn test_empty_label_is_excluded() {
        assert!(customers_for("CTO", "- - CTO: no company given").is_empty());
    }

    #[test]
    fn test_duplicates_and_order_preserved() {
        let fragment = "Globex - CTO\nAcme - CTO\nGlobex - CTO";
        assert_eq!(customers_for("CTO", fragment), vec!["Globex", "Acme", "Globex"]);
    }

    #[test]
    fn test_overlapping_names_both_match() {
        let fragment = "Acme - IT Manager: rollout";
        let personas = cross_reference(vec![persona("Manager"), persona("IT Manager")], fragment);
        assert_eq!(personas[0].potential_customers(), ["Acme"]);
        assert_eq!(personas[1].potential_customers(), ["Acme"]);
    }

    #[test]
    fn test_empty_fragment() {
        let personas = cross_reference(vec![persona("CTO")], "");
        assert!(personas[0].potential_customers().is_empty());
    }
}

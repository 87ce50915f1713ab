//! Entity builders: field mappings → validated entities
//!
//! Each entity kind declares its label table and a validating constructor.
//! A mapping that lacks any required field produces no entity.

use crate::parser::{parse_records, FieldMap, LabelTable};
use prospect_domain::{Application, Competitor, CustomerPersona, MissingField};
use tracing::debug;

/// Fields of a competitor record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompetitorField {
    /// Company name
    Name,
    /// What the company does
    Description,
    /// Headquarters location
    Headquarters,
    /// Revenue text
    Revenue,
}

/// Fields of a product application record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationField {
    /// Application name
    Name,
    /// What the application is
    Description,
    /// Market size text
    MarketSize,
    /// Growth rate text
    GrowthRate,
}

/// Fields of a customer persona record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonaField {
    /// Persona name
    Name,
    /// Who the persona is
    Description,
    /// Top priorities
    CaresMostAbout,
    /// Lowest priorities
    CaresLeastAbout,
}

/// An entity kind that can be extracted from a report section
pub trait RecordKind: Sized {
    /// Field enum for this kind
    type Field: Copy + PartialEq + 'static;

    /// Kind name for logs
    const KIND: &'static str;

    /// Accepted labels, lowercase
    const LABELS: LabelTable<Self::Field>;

    /// Build an entity, failing on the first missing required field
    fn from_fields(fields: &FieldMap<Self::Field>) -> Result<Self, MissingField>;
}

impl RecordKind for Competitor {
    type Field = CompetitorField;

    const KIND: &'static str = Competitor::KIND;

    const LABELS: LabelTable<CompetitorField> = LabelTable::new(&[
        ("name", CompetitorField::Name),
        ("company", CompetitorField::Name),
        ("company name", CompetitorField::Name),
        ("description", CompetitorField::Description),
        ("headquarters", CompetitorField::Headquarters),
        ("hq", CompetitorField::Headquarters),
        ("revenue", CompetitorField::Revenue),
        ("annual revenue", CompetitorField::Revenue),
    ]);

    fn from_fields(fields: &FieldMap<CompetitorField>) -> Result<Self, MissingField> {
        Competitor::new(
            fields.get(CompetitorField::Name).unwrap_or_default(),
            fields.get(CompetitorField::Description).unwrap_or_default(),
            fields.get(CompetitorField::Headquarters).unwrap_or_default(),
            fields.get(CompetitorField::Revenue).unwrap_or_default(),
        )
    }
}

impl RecordKind for Application {
    type Field = ApplicationField;

    const KIND: &'static str = Application::KIND;

    const LABELS: LabelTable<ApplicationField> = LabelTable::new(&[
        ("name", ApplicationField::Name),
        ("application", ApplicationField::Name),
        ("description", ApplicationField::Description),
        ("market size", ApplicationField::MarketSize),
        ("growth rate", ApplicationField::GrowthRate),
    ]);

    fn from_fields(fields: &FieldMap<ApplicationField>) -> Result<Self, MissingField> {
        Application::new(
            fields.get(ApplicationField::Name).unwrap_or_default(),
            fields.get(ApplicationField::Description).unwrap_or_default(),
            fields.get(ApplicationField::MarketSize).unwrap_or_default(),
            fields.get(ApplicationField::GrowthRate).unwrap_or_default(),
        )
    }
}

impl RecordKind for CustomerPersona {
    type Field = PersonaField;

    const KIND: &'static str = CustomerPersona::KIND;

    const LABELS: LabelTable<PersonaField> = LabelTable::new(&[
        ("name", PersonaField::Name),
        ("persona", PersonaField::Name),
        ("description", PersonaField::Description),
        ("cares most about", PersonaField::CaresMostAbout),
        ("what they care most about", PersonaField::CaresMostAbout),
        ("cares least about", PersonaField::CaresLeastAbout),
        ("what they care least about", PersonaField::CaresLeastAbout),
    ]);

    fn from_fields(fields: &FieldMap<PersonaField>) -> Result<Self, MissingField> {
        CustomerPersona::new(
            fields.get(PersonaField::Name).unwrap_or_default(),
            fields.get(PersonaField::Description).unwrap_or_default(),
            fields.get(PersonaField::CaresMostAbout).unwrap_or_default(),
            fields.get(PersonaField::CaresLeastAbout).unwrap_or_default(),
        )
    }
}

/// Keep the complete mappings and build one entity from each, in order
pub fn build_entities<K: RecordKind>(mappings: &[FieldMap<K::Field>]) -> Vec<K> {
    let entities: Vec<K> = mappings
        .iter()
        .enumerate()
        .filter_map(|(idx, fields)| match K::from_fields(fields) {
            Ok(entity) => Some(entity),
            Err(e) => {
                // Headings and preambles parse to empty mappings; not worth reporting
                if !fields.is_empty() {
                    debug!(kind = K::KIND, record = idx, "Dropping record: {}", e);
                }
                None
            }
        })
        .collect();

    debug!(
        kind = K::KIND,
        records = mappings.len(),
        built = entities.len(),
        "Built entities"
    );
    entities
}

/// Parse a section fragment and build its entities
pub fn extract<K: RecordKind>(fragment: &str) -> Vec<K> {
    let mappings = parse_records(fragment, &K::LABELS);
    build_entities::<K>(&mappings)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn record(i: usize, fields: &[Option<String>; 4]) -> String {
        let labels = ["Name", "Description", "Headquarters", "Revenue"];
        let mut out = format!("{}. Notes: generated\n", i + 1);
        for (label, value) in labels.iter().zip(fields) {
            if let Some(v) = value {
                out.push_str(&format!("{}: {}\n", label, v));
            }
        }
        out
    }

    proptest! {
        /// Property: never more entities than sub-records, and no blank fields
        #[test]
        fn test_built_entities_are_complete(
            records in prop::collection::vec(
                prop::array::uniform4(prop::option::of("[A-Za-z$%][A-Za-z0-9 $%.]{0,12}")),
                0..6,
            )
        ) {
            let fragment: String = records
                .iter()
                .enumerate()
                .map(|(i, fields)| record(i, fields))
                .collect();
            let competitors: Vec<Competitor> = extract(&fragment);

            let complete = records.iter().filter(|r| r.iter().all(Option::is_some)).count();
            prop_assert!(competitors.len() <= records.len());
            prop_assert_eq!(competitors.len(), complete);
            for c in &competitors {
                prop_assert!(!c.name().is_empty());
                prop_assert!(!c.description().is_empty());
                prop_assert!(!c.headquarters().is_empty());
                prop_assert!(!c.revenue().is_empty());
            }
        }
    }
}

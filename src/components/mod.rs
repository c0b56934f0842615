//! Component labels and the labeled-token to record mapper.
//!
//! # Responsibilities
//! - Define the closed set of semantic component labels
//! - Map the parser's ordered `(label, value)` output onto the fixed-shape
//!   `ComponentRecord`
//!
//! # Design Decisions
//! - Labels are a closed enum with a lookup table, not string comparisons
//!   scattered through the mapper
//! - Duplicate labels: last occurrence wins. This loses multi-valued output
//!   (e.g. two `unit` components) relative to the parser's ordered list;
//!   callers that need every occurrence must consume the engine directly
//! - Unknown labels are logged and skipped, never fatal

use serde::{Deserialize, Serialize};

use crate::engine::LabeledComponent;

/// Semantic role of a token span within a parsed address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentLabel {
    House,
    Category,
    Near,
    HouseNumber,
    Road,
    Unit,
    Level,
    Staircase,
    Entrance,
    PoBox,
    Postcode,
    Suburb,
    CityDistrict,
    City,
    Island,
    StateDistrict,
    State,
    CountryRegion,
    Country,
    WorldRegion,
}

/// Wire name ↔ label lookup table, in the parser's documented label order.
const LABELS: &[(&str, ComponentLabel)] = &[
    ("house", ComponentLabel::House),
    ("category", ComponentLabel::Category),
    ("near", ComponentLabel::Near),
    ("house_number", ComponentLabel::HouseNumber),
    ("road", ComponentLabel::Road),
    ("unit", ComponentLabel::Unit),
    ("level", ComponentLabel::Level),
    ("staircase", ComponentLabel::Staircase),
    ("entrance", ComponentLabel::Entrance),
    ("po_box", ComponentLabel::PoBox),
    ("postcode", ComponentLabel::Postcode),
    ("suburb", ComponentLabel::Suburb),
    ("city_district", ComponentLabel::CityDistrict),
    ("city", ComponentLabel::City),
    ("island", ComponentLabel::Island),
    ("state_district", ComponentLabel::StateDistrict),
    ("state", ComponentLabel::State),
    ("country_region", ComponentLabel::CountryRegion),
    ("country", ComponentLabel::Country),
    ("world_region", ComponentLabel::WorldRegion),
];

impl ComponentLabel {
    /// Look up a label by its wire name. Returns `None` for labels outside
    /// the closed set.
    pub fn from_name(name: &str) -> Option<Self> {
        LABELS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, label)| *label)
    }

    /// The wire name of this label.
    pub fn name(self) -> &'static str {
        LABELS
            .iter()
            .find(|(_, l)| *l == self)
            .map(|(n, _)| *n)
            .unwrap_or("unknown")
    }
}

/// Fixed-shape decomposition of one address.
///
/// Each field holds the value of the matching label if the parser emitted it.
/// Unset fields are omitted from the JSON representation entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ComponentRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub near: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub road: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staircase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entrance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub po_box: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suburb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub island: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub world_region: Option<String>,
}

impl ComponentRecord {
    /// The record field backing `label`.
    fn field_mut(&mut self, label: ComponentLabel) -> &mut Option<String> {
        match label {
            ComponentLabel::House => &mut self.house,
            ComponentLabel::Category => &mut self.category,
            ComponentLabel::Near => &mut self.near,
            ComponentLabel::HouseNumber => &mut self.house_number,
            ComponentLabel::Road => &mut self.road,
            ComponentLabel::Unit => &mut self.unit,
            ComponentLabel::Level => &mut self.level,
            ComponentLabel::Staircase => &mut self.staircase,
            ComponentLabel::Entrance => &mut self.entrance,
            ComponentLabel::PoBox => &mut self.po_box,
            ComponentLabel::Postcode => &mut self.postcode,
            ComponentLabel::Suburb => &mut self.suburb,
            ComponentLabel::CityDistrict => &mut self.city_district,
            ComponentLabel::City => &mut self.city,
            ComponentLabel::Island => &mut self.island,
            ComponentLabel::StateDistrict => &mut self.state_district,
            ComponentLabel::State => &mut self.state,
            ComponentLabel::CountryRegion => &mut self.country_region,
            ComponentLabel::Country => &mut self.country,
            ComponentLabel::WorldRegion => &mut self.world_region,
        }
    }
}

/// Fold the parser's ordered output into a [`ComponentRecord`].
///
/// Assignment follows output order, so a repeated label keeps its last value.
/// An empty-string value is still assigned; the field ends up present and
/// empty, which is distinct from absent.
pub fn map_components(labeled: &[LabeledComponent]) -> ComponentRecord {
    let mut record = ComponentRecord::default();

    for component in labeled {
        match ComponentLabel::from_name(&component.label) {
            Some(label) => {
                *record.field_mut(label) = Some(component.value.clone());
            }
            None => {
                tracing::warn!(
                    label = %component.label,
                    value = %component.value,
                    "unrecognized component label, skipping"
                );
            }
        }
    }

    record
}

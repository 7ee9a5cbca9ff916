//! Properties (parks) and their lots/spots

use crate::core::FieldValue;
use crate::view::{PaginationPolicy, ViewSpec};
use crate::{impl_record, impl_wire_enum};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    RvPark,
    MhCommunity,
    Mixed,
}

impl_wire_enum!(PropertyType {
    RvPark => "RV_PARK",
    MhCommunity => "MH_COMMUNITY",
    Mixed => "MIXED",
});

/// An RV park or manufactured-home community
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    pub property_type: PropertyType,
    #[serde(default)]
    pub total_lots: u32,
}

impl_record!(Property, "property", "properties");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpotStatus {
    Available,
    Occupied,
    Reserved,
    Maintenance,
}

impl_wire_enum!(SpotStatus {
    Available => "AVAILABLE",
    Occupied => "OCCUPIED",
    Reserved => "RESERVED",
    Maintenance => "MAINTENANCE",
});

/// A lot/spot inside a property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spot {
    #[serde(default)]
    pub id: String,
    pub property_id: String,
    pub spot_number: String,
    pub status: SpotStatus,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub monthly_rent: Option<f64>,
    #[serde(default)]
    pub tenant_id: Option<String>,
}

impl_record!(Spot, "spot", "spots");

/// Property id to display name, for group labels
#[derive(Debug, Clone, Default)]
pub struct PropertyDirectory {
    names: HashMap<String, String>,
}

impl PropertyDirectory {
    pub fn new(properties: &[Property]) -> Self {
        Self {
            names: properties
                .iter()
                .map(|p| (p.id.clone(), p.name.clone()))
                .collect(),
        }
    }

    /// Display name of a property; unknown ids are shown as-is
    pub fn label(&self, property_id: &str) -> String {
        self.names
            .get(property_id)
            .cloned()
            .unwrap_or_else(|| property_id.to_string())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Natural ordering key for spot numbers: "A2" sorts before "A10"
fn spot_number_key(number: &str) -> FieldValue {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    let prefix: String = number.chars().filter(|c| !c.is_ascii_digit()).collect();
    match digits.parse::<i64>() {
        Ok(n) if prefix.trim().is_empty() => FieldValue::Integer(n),
        Ok(n) => FieldValue::String(format!("{}{:010}", prefix.to_lowercase(), n)),
        Err(_) => FieldValue::String(number.to_string()),
    }
}

/// Lots table of the admin back office
pub fn spot_view_spec(directory: &PropertyDirectory) -> ViewSpec<Spot> {
    let directory = directory.clone();
    ViewSpec::new("spots")
        .search(|s: &Spot| FieldValue::from(s.spot_number.as_str()))
        .search(|s: &Spot| FieldValue::from(s.size.clone()))
        .filter("status", |s: &Spot| FieldValue::from(s.status))
        .filter("propertyId", |s: &Spot| FieldValue::from(s.property_id.as_str()))
        .sort_key("spotNumber", |s: &Spot| spot_number_key(&s.spot_number))
        .sort_key("monthlyRent", |s: &Spot| FieldValue::from(s.monthly_rent))
        .sort_key("status", |s: &Spot| FieldValue::from(s.status))
        .grouping(
            "property",
            |s: &Spot| Some(s.property_id.clone()),
            move |id| directory.label(id),
        )
        .pagination(PaginationPolicy::Global)
}

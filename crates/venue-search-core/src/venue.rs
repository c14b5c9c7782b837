//! Venue records as supplied by the catalog
//!
//! The index only reads these records. Every field besides `id` and `name`
//! is optional and simply contributes no keys when absent.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Venue identity
///
/// Catalogs use either string ids or numeric ids; both deserialize into the
/// same textual form so `1` and `"1"` name the same venue.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawVenueId", into = "String")]
pub struct VenueId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawVenueId {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawVenueId> for VenueId {
    fn from(raw: RawVenueId) -> Self {
        match raw {
            RawVenueId::Text(s) => VenueId(s),
            RawVenueId::Number(n) => VenueId(n.to_string()),
        }
    }
}

impl From<VenueId> for String {
    fn from(id: VenueId) -> String {
        id.0
    }
}

impl VenueId {
    pub fn new(id: impl Into<String>) -> Self {
        VenueId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this id can identify a venue (blank ids cannot)
    pub fn is_valid(&self) -> bool {
        !self.0.trim().is_empty()
    }
}

impl fmt::Display for VenueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VenueId {
    fn from(s: &str) -> Self {
        VenueId(s.to_string())
    }
}

impl From<u64> for VenueId {
    fn from(n: u64) -> Self {
        VenueId(n.to_string())
    }
}

/// Where a venue is
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
}

/// Reference to a service definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A service offered by a venue
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceEntry {
    #[serde(
        rename = "serviceId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub service_id: Option<ServiceRef>,
}

impl ServiceEntry {
    pub fn named(name: impl Into<String>) -> Self {
        ServiceEntry {
            service_id: Some(ServiceRef {
                name: Some(name.into()),
            }),
        }
    }

    /// The service name, if present and non-empty
    pub fn name(&self) -> Option<&str> {
        self.service_id
            .as_ref()
            .and_then(|s| s.name.as_deref())
            .filter(|name| !name.is_empty())
    }
}

/// A venue record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    /// Legacy single-category field, consulted only when `categories` is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub services: Vec<ServiceEntry>,
}

/// Treat an explicit `null` list like a missing one
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Venue {
    pub fn new(id: impl Into<VenueId>, name: impl Into<String>) -> Self {
        Venue {
            id: id.into(),
            name: name.into(),
            location: None,
            categories: None,
            category: None,
            services: Vec::new(),
        }
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.location.get_or_insert_with(Location::default).city = Some(city.into());
        self
    }

    pub fn with_province(mut self, province: impl Into<String>) -> Self {
        self.location.get_or_insert_with(Location::default).province = Some(province.into());
        self
    }

    pub fn with_categories<S: Into<String>>(mut self, categories: Vec<S>) -> Self {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_services<S: Into<String>>(mut self, names: Vec<S>) -> Self {
        self.services = names.into_iter().map(ServiceEntry::named).collect();
        self
    }

    pub fn city(&self) -> Option<&str> {
        self.location.as_ref().and_then(|l| l.city.as_deref())
    }

    pub fn province(&self) -> Option<&str> {
        self.location.as_ref().and_then(|l| l.province.as_deref())
    }

    /// Category labels: the `categories` list, or the legacy `category` when
    /// the list is absent
    pub fn category_labels(&self) -> Vec<&str> {
        match &self.categories {
            Some(categories) => categories.iter().map(String::as_str).collect(),
            None => self.category.as_deref().into_iter().collect(),
        }
    }

    /// Names of services that carry a non-empty name
    pub fn service_names(&self) -> impl Iterator<Item = &str> {
        self.services.iter().filter_map(ServiceEntry::name)
    }
}

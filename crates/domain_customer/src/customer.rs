//! Customer transfer objects
//!
//! Field names follow the backend's camelCase JSON exactly.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{CityId, CountryId, CustomerId, OccupationId, StateId};

/// Gender as the backend encodes it
///
/// Written as "M", "F" or "Other". Read back in any case, short or long form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "Other")]
    Other,
}

impl Gender {
    /// All values, in the order a selection input lists them
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// Returns the wire code ("M", "F", "Other")
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Other => "Other",
        }
    }

    /// Returns the label shown to users
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "male" => Ok(Gender::Male),
            "f" | "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            other => Err(format!("expected M, F or Other, got {:?}", other)),
        }
    }
}

impl<'de> Deserialize<'de> for Gender {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A customer as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub customer_id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub dob: NaiveDate,
    pub mobile_number: String,
    pub city_id: CityId,
    /// Only list responses carry the resolved city name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
    pub state_id: StateId,
    pub country_id: CountryId,
    pub occupation_id: OccupationId,
}

impl Customer {
    /// Returns "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Payload for creating a customer; the backend assigns the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub dob: NaiveDate,
    pub mobile_number: String,
    pub city_id: CityId,
    pub state_id: StateId,
    pub country_id: CountryId,
    pub occupation_id: OccupationId,
}

impl NewCustomer {
    /// Attaches a server-assigned id, producing the full record
    pub fn with_id(self, customer_id: CustomerId) -> Customer {
        Customer {
            customer_id,
            first_name: self.first_name,
            last_name: self.last_name,
            gender: self.gender,
            dob: self.dob,
            mobile_number: self.mobile_number,
            city_id: self.city_id,
            city_name: None,
            state_id: self.state_id,
            country_id: self.country_id,
            occupation_id: self.occupation_id,
        }
    }
}

/// A city, fetched from the backend to populate the city selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub city_id: CityId,
    pub city_name: String,
}

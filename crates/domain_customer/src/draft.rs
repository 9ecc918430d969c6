//! Customer form draft
//!
//! A draft mirrors the editable inputs of the customer forms as raw text.
//! Validation is presence-only: every field must be non-empty before the
//! draft is converted to a typed payload and sent.

use chrono::NaiveDate;
use validator::Validate;

use core_kernel::{CityId, CountryId, CustomerId, OccupationId, StateId};

use crate::customer::{Customer, Gender, NewCustomer};
use crate::error::CustomerError;

/// Wire names of the editable fields, in form order
pub const CUSTOMER_FIELDS: [&str; 9] = [
    "firstName",
    "lastName",
    "gender",
    "dob",
    "mobileNumber",
    "cityId",
    "stateId",
    "countryId",
    "occupationId",
];

/// Editable customer fields as entered
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct CustomerDraft {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(length(min = 1))]
    pub gender: String,
    #[validate(length(min = 1))]
    pub dob: String,
    #[validate(length(min = 1))]
    pub mobile_number: String,
    #[validate(length(min = 1))]
    pub city_id: String,
    #[validate(length(min = 1))]
    pub state_id: String,
    #[validate(length(min = 1))]
    pub country_id: String,
    #[validate(length(min = 1))]
    pub occupation_id: String,
}

impl CustomerDraft {
    /// Prefills a draft from an existing record for editing
    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
            gender: customer.gender.code().to_string(),
            dob: customer.dob.format("%Y-%m-%d").to_string(),
            mobile_number: customer.mobile_number.clone(),
            city_id: customer.city_id.to_string(),
            state_id: customer.state_id.to_string(),
            country_id: customer.country_id.to_string(),
            occupation_id: customer.occupation_id.to_string(),
        }
    }

    /// Sets a field by its wire name
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> Result<(), CustomerError> {
        let slot = match field {
            "firstName" => &mut self.first_name,
            "lastName" => &mut self.last_name,
            "gender" => &mut self.gender,
            "dob" => &mut self.dob,
            "mobileNumber" => &mut self.mobile_number,
            "cityId" => &mut self.city_id,
            "stateId" => &mut self.state_id,
            "countryId" => &mut self.country_id,
            "occupationId" => &mut self.occupation_id,
            other => return Err(CustomerError::UnknownField(other.to_string())),
        };
        *slot = value.into();
        Ok(())
    }

    /// Reads a field by its wire name
    pub fn get(&self, field: &str) -> Option<&str> {
        let value = match field {
            "firstName" => &self.first_name,
            "lastName" => &self.last_name,
            "gender" => &self.gender,
            "dob" => &self.dob,
            "mobileNumber" => &self.mobile_number,
            "cityId" => &self.city_id,
            "stateId" => &self.state_id,
            "countryId" => &self.country_id,
            "occupationId" => &self.occupation_id,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Checks that every field is filled in
    pub fn check_required(&self) -> Result<(), CustomerError> {
        self.validate().map_err(|errors| {
            let mut missing: Vec<String> = errors
                .field_errors()
                .keys()
                .map(|k| k.to_string())
                .collect();
            missing.sort();
            CustomerError::MissingFields(missing)
        })
    }

    /// Converts the draft into a create payload
    pub fn to_new_customer(&self) -> Result<NewCustomer, CustomerError> {
        self.check_required()?;

        Ok(NewCustomer {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            gender: self
                .gender
                .parse::<Gender>()
                .map_err(|e| CustomerError::invalid("gender", e))?,
            dob: NaiveDate::parse_from_str(self.dob.trim(), "%Y-%m-%d")
                .map_err(|_| CustomerError::invalid("dob", "expected YYYY-MM-DD"))?,
            mobile_number: self.mobile_number.trim().to_string(),
            city_id: parse_id::<CityId>("cityId", &self.city_id)?,
            state_id: parse_id::<StateId>("stateId", &self.state_id)?,
            country_id: parse_id::<CountryId>("countryId", &self.country_id)?,
            occupation_id: parse_id::<OccupationId>("occupationId", &self.occupation_id)?,
        })
    }

    /// Converts the draft into a full replacement record for `id`
    pub fn to_customer(&self, id: CustomerId) -> Result<Customer, CustomerError> {
        self.to_new_customer().map(|new| new.with_id(id))
    }
}

fn parse_id<T>(field: &'static str, raw: &str) -> Result<T, CustomerError>
where
    T: std::str::FromStr<Err = core_kernel::IdParseError>,
{
    raw.parse::<T>().map_err(|e| CustomerError::invalid(field, e.to_string()))
}

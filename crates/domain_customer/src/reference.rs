//! Static reference lists
//!
//! States, countries and occupations are not served by the backend; the
//! selectors use these fixed lists.

use core_kernel::{CountryId, OccupationId, StateId};

/// One entry of a selection list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceOption<Id> {
    pub id: Id,
    pub name: &'static str,
}

impl<Id: PartialEq + Copy> ReferenceOption<Id> {
    /// Looks up the display name for an id in a list
    pub fn name_of(options: &[ReferenceOption<Id>], id: Id) -> Option<&'static str> {
        options.iter().find(|o| o.id == id).map(|o| o.name)
    }
}

const fn state(id: i64, name: &'static str) -> ReferenceOption<StateId> {
    ReferenceOption { id: StateId::new(id), name }
}

const fn country(id: i64, name: &'static str) -> ReferenceOption<CountryId> {
    ReferenceOption { id: CountryId::new(id), name }
}

const fn occupation(id: i64, name: &'static str) -> ReferenceOption<OccupationId> {
    ReferenceOption { id: OccupationId::new(id), name }
}

pub const STATES: [ReferenceOption<StateId>; 8] = [
    state(1, "Tamil Nadu"),
    state(2, "California"),
    state(3, "England"),
    state(4, "Ontario"),
    state(5, "New South Wales"),
    state(6, "Bavaria"),
    state(7, "Tokyo"),
    state(8, "Île-de-France"),
];

pub const COUNTRIES: [ReferenceOption<CountryId>; 8] = [
    country(1, "India"),
    country(2, "USA"),
    country(3, "UK"),
    country(4, "Canada"),
    country(5, "Australia"),
    country(6, "Germany"),
    country(7, "Japan"),
    country(8, "France"),
];

pub const OCCUPATIONS: [ReferenceOption<OccupationId>; 6] = [
    occupation(1, "Engineer"),
    occupation(2, "Doctor"),
    occupation(3, "Teacher"),
    occupation(4, "Business"),
    occupation(5, "Student"),
    occupation(6, "Retired"),
];

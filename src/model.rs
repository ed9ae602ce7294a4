//! Domain types for generated user profiles and the country grouping pass.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

/// A user's name as delivered by the generator API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Name {
    pub first: String,
    pub last: String,
}

/// Gender of a generated user.
///
/// The API only ever produces these two values; anything else fails decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Wire spelling, used on user cards.
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// Where a generated user lives.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub country: String,
}

/// Registration metadata. Only the date matters here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Registered {
    pub date: DateTime<Utc>,
}

/// One generated user record. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub name: Name,
    pub gender: Gender,
    pub location: Location,
    pub registered: Registered,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
    }
}

/// All users sharing one `location.country` value.
///
/// Created once per distinct country during grouping, never mutated
/// afterwards. The user count is always derived from the member list.
#[derive(Debug, Clone, PartialEq)]
pub struct Country {
    pub name: String,
    pub users: Vec<User>,
}

impl Country {
    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

/// Partition users by exact `location.country` equality and order the result
/// by user count, descending.
///
/// Grouping is case-sensitive, no normalization. Members keep source order
/// within their country. The sort is stable, so countries with equal counts
/// keep the order in which they were first seen.
pub fn group_by_country(users: Vec<User>) -> Vec<Country> {
    let mut countries: Vec<Country> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for user in users {
        match slots.get(user.location.country.as_str()) {
            Some(&slot) => countries[slot].users.push(user),
            None => {
                slots.insert(user.location.country.clone(), countries.len());
                let name = user.location.country.clone();
                countries.push(Country {
                    name,
                    users: vec![user],
                });
            }
        }
    }

    countries.sort_by(|a, b| b.user_count().cmp(&a.user_count()));
    countries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_generator_record() {
        let raw = r#"{
            "gender": "female",
            "name": { "title": "Ms", "first": "Leah", "last": "Mendoza" },
            "location": {
                "street": { "number": 55, "name": "High St" },
                "city": "Cork",
                "state": "Munster",
                "country": "Ireland",
                "postcode": "T12"
            },
            "registered": { "date": "2015-09-06T10:22:36.353Z", "age": 10 }
        }"#;

        let user: User = serde_json::from_str(raw).expect("record should decode");
        assert_eq!(user.full_name(), "Leah Mendoza");
        assert_eq!(user.gender, Gender::Female);
        assert_eq!(user.location.country, "Ireland");
        assert_eq!(user.registered.date.timestamp_subsec_millis(), 353);
    }

    #[test]
    fn unknown_gender_fails_to_decode() {
        let raw = r#""other""#;
        assert!(serde_json::from_str::<Gender>(raw).is_err());
    }
}

//! Shared test utilities.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use userscope::model::{Gender, Location, Name, Registered, User};

/// Build a user record with the fields the browser cares about.
///
/// `registered` is an RFC 3339 timestamp such as `2020-06-01T12:00:00Z`.
pub fn user(first: &str, country: &str, gender: Gender, registered: &str) -> User {
    let date = registered
        .parse::<DateTime<Utc>>()
        .unwrap_or_else(|_| panic!("bad test timestamp: {registered}"));
    User {
        gender,
        name: Name {
            first: first.to_string(),
            last: "Tester".to_string(),
        },
        location: Location {
            city: format!("{first}ville"),
            state: "Testland".to_string(),
            country: country.to_string(),
        },
        registered: Registered { date },
    }
}

/// Shorthand for a male user.
pub fn male(first: &str, country: &str, registered: &str) -> User {
    user(first, country, Gender::Male, registered)
}

/// Shorthand for a female user.
pub fn female(first: &str, country: &str, registered: &str) -> User {
    user(first, country, Gender::Female, registered)
}

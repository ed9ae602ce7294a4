//! Unit tests for grouping fetched users into countries.

mod common;

use common::{female, male, user};
use userscope::model::{group_by_country, Gender, User};

// -- Partitioning -------------------------------------------------------------

/// Test that grouping partitions the input: every user lands in exactly one
/// country, and that country's name matches the user's.
#[test]
fn every_user_lands_in_its_own_country() {
    let users = vec![
        male("Ed", "Brazil", "2020-01-01T00:00:00Z"),
        female("Ana", "Norway", "2020-02-01T00:00:00Z"),
        male("Luc", "Brazil", "2020-03-01T00:00:00Z"),
        female("Mia", "Japan", "2020-04-01T00:00:00Z"),
    ];
    let total = users.len();

    let countries = group_by_country(users);

    let grouped: usize = countries.iter().map(|c| c.user_count()).sum();
    assert_eq!(grouped, total);
    for country in &countries {
        for member in &country.users {
            assert_eq!(member.location.country, country.name);
        }
    }
}

/// Test that country names differing only in case stay separate groups.
#[test]
fn grouping_is_case_sensitive() {
    let users = vec![
        male("Ed", "ireland", "2020-01-01T00:00:00Z"),
        male("Ian", "Ireland", "2020-02-01T00:00:00Z"),
    ];

    let countries = group_by_country(users);

    assert_eq!(countries.len(), 2);
}

/// Test that members keep the order they arrived in within their group.
#[test]
fn members_keep_arrival_order() {
    let users = vec![
        male("First", "Chile", "2022-01-01T00:00:00Z"),
        male("Second", "Chile", "2019-01-01T00:00:00Z"),
        male("Third", "Chile", "2021-01-01T00:00:00Z"),
    ];

    let countries = group_by_country(users);

    let names: Vec<&str> = countries[0].users.iter().map(|u| u.name.first.as_str()).collect();
    assert_eq!(names, ["First", "Second", "Third"]);
}

// -- Ordering -----------------------------------------------------------------

/// Test that countries come out sorted by member count, largest first.
#[test]
fn countries_sort_by_size_descending() {
    let mut users = vec![female("Solo", "Iceland", "2020-01-01T00:00:00Z")];
    for i in 0..3 {
        users.push(user(
            &format!("K{i}"),
            "Kenya",
            Gender::Male,
            "2020-01-01T00:00:00Z",
        ));
    }
    for i in 0..2 {
        users.push(user(
            &format!("P{i}"),
            "Peru",
            Gender::Female,
            "2020-01-01T00:00:00Z",
        ));
    }

    let counts: Vec<usize> = group_by_country(users)
        .iter()
        .map(|c| c.user_count())
        .collect();

    assert_eq!(counts, [3, 2, 1]);
}

/// Test that countries with equal counts keep first-seen order.
#[test]
fn equal_counts_keep_first_seen_order() {
    let users = vec![
        male("A", "Chile", "2020-01-01T00:00:00Z"),
        male("B", "Kenya", "2020-01-02T00:00:00Z"),
        male("C", "Japan", "2020-01-03T00:00:00Z"),
    ];

    let names: Vec<String> = group_by_country(users).into_iter().map(|c| c.name).collect();

    assert_eq!(names, ["Chile", "Kenya", "Japan"]);
}

// -- Edge cases ---------------------------------------------------------------

/// Test that an empty batch produces no countries.
#[test]
fn empty_input_yields_no_countries() {
    let countries = group_by_country(Vec::<User>::new());

    assert!(countries.is_empty());
}

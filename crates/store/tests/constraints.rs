//! Write-time constraint enforcement: name uniqueness, plot geometry, and
//! cascade deletion.

use std::path::PathBuf;

use rusqlite::Connection;
use store::{Actor, NewPlot, SqliteStore, StoreError};

fn temp_db(test_name: &str) -> PathBuf {
    let base = std::env::temp_dir();
    let pid = std::process::id();
    let nonce = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    base.join(format!("plotmap_{test_name}_{pid}_{nonce}.db"))
}

fn steward() -> Actor {
    Actor::authenticated("steward")
}

#[test]
fn duplicate_person_name_is_rejected() {
    let mut store = SqliteStore::open(temp_db("duplicate_person_name")).expect("open store");
    let actor = steward();

    store.create_person(&actor, "Ann").expect("first insert");
    let err = store
        .create_person(&actor, "Ann")
        .expect_err("expected duplicate name to fail");
    match err {
        StoreError::NameTaken { name } => assert_eq!(name, "Ann"),
        other => panic!("expected NameTaken, got {other:?}"),
    }

    // The first row survives untouched.
    let people = store.list_people().expect("list people");
    assert_eq!(people.len(), 1);
    assert_eq!(people[0].name, "Ann");
}

#[test]
fn rename_to_taken_name_is_rejected() {
    let mut store = SqliteStore::open(temp_db("rename_to_taken_name")).expect("open store");
    let actor = steward();

    store.create_person(&actor, "Ann").expect("insert ann");
    let bart = store.create_person(&actor, "Bart").expect("insert bart");

    let err = store
        .rename_person(&actor, bart.id, "Ann")
        .expect_err("expected rename collision to fail");
    assert!(matches!(err, StoreError::NameTaken { .. }));

    let err = store
        .rename_person(&actor, 9999, "Cora")
        .expect_err("expected unknown id to fail");
    assert!(matches!(err, StoreError::UnknownPerson));
}

#[test]
fn blank_person_name_is_rejected() {
    let mut store = SqliteStore::open(temp_db("blank_person_name")).expect("open store");
    let err = store
        .create_person(&steward(), "   ")
        .expect_err("expected blank name to fail");
    assert!(matches!(err, StoreError::InvalidInput(_)));
}

#[test]
fn invalid_plot_geometry_is_rejected() {
    let mut store = SqliteStore::open(temp_db("invalid_plot_geometry")).expect("open store");
    let actor = steward();
    let ann = store.create_person(&actor, "Ann").expect("insert ann");

    let cases = [
        (-1, 0, 10, 10),
        (0, -1, 10, 10),
        (0, 0, 0, 10),
        (0, 0, 10, 0),
        (0, 0, -5, 10),
    ];
    for (x, y, width, height) in cases {
        let err = store
            .create_plot(
                &actor,
                NewPlot {
                    person_id: Some(ann.id),
                    x,
                    y,
                    width,
                    height,
                },
            )
            .expect_err("expected invalid geometry to fail");
        assert!(
            matches!(err, StoreError::InvalidGeometry(_)),
            "({x},{y},{width},{height}) should be InvalidGeometry, got {err:?}"
        );
    }

    assert!(store.list_plots().expect("list plots").is_empty());
}

#[test]
fn schema_checks_backstop_raw_inserts() {
    let path = temp_db("schema_checks_backstop");
    let _store = SqliteStore::open(&path).expect("open store");

    // Bypass the Rust validation entirely; the CHECK constraints must still
    // reject the row.
    let conn = Connection::open(&path).expect("raw connection");
    let result = conn.execute(
        "INSERT INTO land_plots(person_id, x, y, width, height, created_at_ms) \
         VALUES (NULL, -3, 0, 10, 10, 0)",
        [],
    );
    assert!(result.is_err(), "negative x must violate the x >= 0 CHECK");

    let result = conn.execute(
        "INSERT INTO land_plots(person_id, x, y, width, height, created_at_ms) \
         VALUES (NULL, 0, 0, 0, 10, 0)",
        [],
    );
    assert!(result.is_err(), "zero width must violate the width > 0 CHECK");
}

#[test]
fn plot_for_unknown_person_is_rejected() {
    let mut store = SqliteStore::open(temp_db("plot_for_unknown_person")).expect("open store");
    let err = store
        .create_plot(
            &steward(),
            NewPlot {
                person_id: Some(777),
                x: 0,
                y: 0,
                width: 10,
                height: 10,
            },
        )
        .expect_err("expected dangling person_id to fail");
    assert!(matches!(err, StoreError::UnknownPerson));
}

#[test]
fn deleting_person_cascades_to_their_plots_only() {
    let mut store = SqliteStore::open(temp_db("delete_cascade")).expect("open store");
    let actor = steward();

    let ann = store.create_person(&actor, "Ann").expect("insert ann");
    let bart = store.create_person(&actor, "Bart").expect("insert bart");

    for owner in [ann.id, ann.id, bart.id] {
        store
            .create_plot(
                &actor,
                NewPlot {
                    person_id: Some(owner),
                    x: 0,
                    y: 0,
                    width: 20,
                    height: 20,
                },
            )
            .expect("insert plot");
    }

    store.delete_person(&actor, ann.id).expect("delete ann");

    let plots = store.list_plots().expect("list plots");
    assert_eq!(plots.len(), 1);
    assert_eq!(plots[0].owner_id, Some(bart.id));

    let people = store.list_people().expect("list people");
    assert_eq!(people.len(), 1);
    assert_eq!(people[0].name, "Bart");
}

#[test]
fn overlapping_and_ownerless_plots_are_allowed() {
    let mut store = SqliteStore::open(temp_db("overlap_allowed")).expect("open store");
    let actor = steward();

    // No exclusivity constraint: identical rectangles coexist, and a plot
    // may have no owner at all.
    for person_id in [None, None] {
        store
            .create_plot(
                &actor,
                NewPlot {
                    person_id,
                    x: 100,
                    y: 100,
                    width: 50,
                    height: 50,
                },
            )
            .expect("insert overlapping plot");
    }

    let plots = store.list_plots().expect("list plots");
    assert_eq!(plots.len(), 2);
    assert!(plots.iter().all(|p| p.owner_id.is_none()));
}

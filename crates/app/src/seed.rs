//! Demo village data, inserted when the database is empty and
//! `PLOTMAP_SEED` is set. Hand-placed parcels inside the 1000x700 land
//! area; the last one is deliberately ownerless (a disputed parcel).

use store::{Actor, NewPlot, SqliteStore, StoreError};

type Parcel = (i64, i64, i64, i64);

const VILLAGE: &[(&str, &[Parcel])] = &[
    ("Ann Marsh", &[(50, 50, 120, 90), (200, 60, 80, 140)]),
    ("Anna Reed", &[(340, 80, 150, 100)]),
    ("Bartholomew Kettle", &[(120, 260, 200, 120), (520, 300, 90, 90)]),
    ("Cora Fenn", &[(600, 120, 140, 180)]),
    ("Dov Lindt", &[(420, 450, 160, 110)]),
    ("Edda Vance", &[(700, 400, 180, 140), (60, 500, 130, 100)]),
];

pub fn seed_village(store: &mut SqliteStore) -> Result<(), StoreError> {
    let actor = Actor::authenticated("steward");

    for (name, parcels) in VILLAGE {
        let person = store.create_person(&actor, name)?;
        for &(x, y, width, height) in *parcels {
            store.create_plot(
                &actor,
                NewPlot {
                    person_id: Some(person.id),
                    x,
                    y,
                    width,
                    height,
                },
            )?;
        }
    }

    // Disputed parcel: no registered owner.
    store.create_plot(
        &actor,
        NewPlot {
            person_id: None,
            x: 300,
            y: 320,
            width: 100,
            height: 80,
        },
    )?;

    Ok(())
}

//! Plotmap: a map of who owns which plot of village land.
//!
//! Opens the SQLite registry, performs the one-time startup fetch (owners
//! by name, plots by creation time), and hands the lists to the viewer as
//! resources. The viewer never writes back — all mutation goes through the
//! store API and its access policy.
//!
//! Environment:
//! - `PLOTMAP_DB`   — database path (default `plotmap.db`)
//! - `PLOTMAP_SEED` — seed demo village data into an empty database
//! - `PLOTMAP_DUMP` — print the dataset as JSON and exit

use bevy::prelude::*;
use bevy::window::PresentMode;

use registry::config::{CANVAS_HEIGHT, CANVAS_WIDTH};
use registry::owner::{Owner, OwnerDirectory};
use registry::plot::{Plot, PlotLedger};
use store::{SqliteStore, StoreError};

mod seed;

fn main() {
    let db_path = std::env::var("PLOTMAP_DB").unwrap_or_else(|_| "plotmap.db".to_string());
    let (owners, plots) = load_registry(&db_path);

    if std::env::var("PLOTMAP_DUMP").is_ok() {
        match dump_json(&owners, &plots) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("plotmap: dump failed: {err}"),
        }
        return;
    }

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Plotmap".to_string(),
                resolution: (CANVAS_WIDTH, CANVAS_HEIGHT).into(),
                resizable: false,
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        .add_plugins((
            registry::RegistryPlugin,
            rendering::RenderingPlugin,
            ui::UiPlugin,
        ))
        .insert_resource(OwnerDirectory(owners))
        .insert_resource(PlotLedger(plots))
        .run();
}

/// One-time startup fetch. Failures are absorbed — the map simply starts
/// empty, indistinguishable from a registry with no rows.
fn load_registry(db_path: &str) -> (Vec<Owner>, Vec<Plot>) {
    match try_load(db_path) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("plotmap: could not load registry from {db_path}: {err}");
            (Vec::new(), Vec::new())
        }
    }
}

fn try_load(db_path: &str) -> Result<(Vec<Owner>, Vec<Plot>), StoreError> {
    let mut store = SqliteStore::open(db_path)?;
    if std::env::var("PLOTMAP_SEED").is_ok() && store.is_empty()? {
        seed::seed_village(&mut store)?;
    }
    Ok((store.list_people()?, store.list_plots()?))
}

#[derive(serde::Serialize)]
struct RegistryDump<'a> {
    owners: &'a [Owner],
    plots: &'a [Plot],
}

fn dump_json(owners: &[Owner], plots: &[Plot]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&RegistryDump { owners, plots })
}

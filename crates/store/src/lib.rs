//! SQLite-backed land registry store.
//!
//! Two tables — `people` and `land_plots` — related by a foreign key with
//! cascading delete. Name uniqueness and plot geometry are enforced both by
//! Rust-side validation and by UNIQUE/CHECK constraints in the schema, so a
//! violating write is rejected atomically with no partial row. Reads are
//! public; every mutation takes an [`Actor`] and fails with
//! [`StoreError::PolicyDenied`] unless it is authenticated.

mod actor;
mod error;

pub use actor::Actor;
pub use error::StoreError;

use std::path::Path;
use std::time::Duration;

use registry::owner::{Owner, OwnerId};
use registry::plot::{Plot, PlotId, PlotRect};
use rusqlite::{params, Connection, ErrorCode};

/// Geometry and ownership for a plot insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewPlot {
    pub person_id: Option<OwnerId>,
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the registry database at `path` and install the
    /// schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        install_schema(&conn)?;
        Ok(Self { conn })
    }

    // ---- people -----------------------------------------------------------

    pub fn create_person(&mut self, actor: &Actor, name: &str) -> Result<Owner, StoreError> {
        actor.require_write()?;
        let name = valid_name(name)?;
        let created_at_ms = now_ms();

        let insert = self.conn.execute(
            "INSERT INTO people(name, created_at_ms) VALUES (?1, ?2)",
            params![name, created_at_ms],
        );
        if let Err(err) = insert {
            return Err(map_person_conflict(err, name));
        }

        Ok(Owner {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
            created_at_ms,
        })
    }

    pub fn rename_person(
        &mut self,
        actor: &Actor,
        id: OwnerId,
        new_name: &str,
    ) -> Result<(), StoreError> {
        actor.require_write()?;
        let new_name = valid_name(new_name)?;

        let updated = self
            .conn
            .execute(
                "UPDATE people SET name=?1 WHERE id=?2",
                params![new_name, id],
            )
            .map_err(|err| map_person_conflict(err, new_name))?;
        if updated == 0 {
            return Err(StoreError::UnknownPerson);
        }
        Ok(())
    }

    /// Delete a person; their plots go with them (`ON DELETE CASCADE`).
    pub fn delete_person(&mut self, actor: &Actor, id: OwnerId) -> Result<(), StoreError> {
        actor.require_write()?;
        let deleted = self
            .conn
            .execute("DELETE FROM people WHERE id=?1", params![id])?;
        if deleted == 0 {
            return Err(StoreError::UnknownPerson);
        }
        Ok(())
    }

    /// All people, ordered by name.
    pub fn list_people(&self) -> Result<Vec<Owner>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, created_at_ms FROM people ORDER BY name ASC")?;
        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(Owner {
                id: row.get(0)?,
                name: row.get(1)?,
                created_at_ms: row.get(2)?,
            });
        }
        Ok(out)
    }

    // ---- plots ------------------------------------------------------------

    pub fn create_plot(&mut self, actor: &Actor, new_plot: NewPlot) -> Result<Plot, StoreError> {
        actor.require_write()?;
        // Validate before SQL so callers get a typed geometry error; the
        // schema CHECKs remain the backstop.
        let rect = PlotRect::new(new_plot.x, new_plot.y, new_plot.width, new_plot.height)?;
        let created_at_ms = now_ms();

        let insert = self.conn.execute(
            "INSERT INTO land_plots(person_id, x, y, width, height, created_at_ms) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                new_plot.person_id,
                rect.x(),
                rect.y(),
                rect.width(),
                rect.height(),
                created_at_ms,
            ],
        );
        if let Err(err) = insert {
            return Err(map_plot_conflict(err));
        }

        let id = self.conn.last_insert_rowid();
        self.fetch_plot(id)?.ok_or(StoreError::UnknownPlot)
    }

    pub fn update_plot_geometry(
        &mut self,
        actor: &Actor,
        id: PlotId,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> Result<(), StoreError> {
        actor.require_write()?;
        let rect = PlotRect::new(x, y, width, height)?;

        let updated = self
            .conn
            .execute(
                "UPDATE land_plots SET x=?1, y=?2, width=?3, height=?4 WHERE id=?5",
                params![rect.x(), rect.y(), rect.width(), rect.height(), id],
            )
            .map_err(map_plot_conflict)?;
        if updated == 0 {
            return Err(StoreError::UnknownPlot);
        }
        Ok(())
    }

    pub fn delete_plot(&mut self, actor: &Actor, id: PlotId) -> Result<(), StoreError> {
        actor.require_write()?;
        let deleted = self
            .conn
            .execute("DELETE FROM land_plots WHERE id=?1", params![id])?;
        if deleted == 0 {
            return Err(StoreError::UnknownPlot);
        }
        Ok(())
    }

    /// All plots joined with their owner's name, ordered by creation time
    /// (ties broken by id).
    pub fn list_plots(&self) -> Result<Vec<Plot>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT p.id, p.person_id, o.name, p.x, p.y, p.width, p.height, p.created_at_ms \
             FROM land_plots p LEFT JOIN people o ON o.id = p.person_id \
             ORDER BY p.created_at_ms ASC, p.id ASC",
        )?;
        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(plot_from_row(row)?);
        }
        Ok(out)
    }

    fn fetch_plot(&self, id: PlotId) -> Result<Option<Plot>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT p.id, p.person_id, o.name, p.x, p.y, p.width, p.height, p.created_at_ms \
             FROM land_plots p LEFT JOIN people o ON o.id = p.person_id \
             WHERE p.id=?1",
        )?;
        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(row) => Ok(Some(plot_from_row(row)?)),
            None => Ok(None),
        }
    }

    /// True when both tables are empty; gates demo seeding.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        let people: i64 = self
            .conn
            .query_row("SELECT COUNT(1) FROM people", [], |row| row.get(0))?;
        let plots: i64 = self
            .conn
            .query_row("SELECT COUNT(1) FROM land_plots", [], |row| row.get(0))?;
        Ok(people == 0 && plots == 0)
    }
}

fn plot_from_row(row: &rusqlite::Row<'_>) -> Result<Plot, StoreError> {
    let rect = PlotRect::new(row.get(3)?, row.get(4)?, row.get(5)?, row.get(6)?)
        .map_err(|_| StoreError::InvalidInput("invalid plot row"))?;
    Ok(Plot {
        id: row.get(0)?,
        owner_id: row.get(1)?,
        owner_name: row.get(2)?,
        rect,
        created_at_ms: row.get(7)?,
    })
}

fn install_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS people (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          name TEXT NOT NULL UNIQUE,
          created_at_ms INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS land_plots (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          person_id INTEGER REFERENCES people(id) ON DELETE CASCADE,
          x INTEGER NOT NULL CHECK(x >= 0),
          y INTEGER NOT NULL CHECK(y >= 0),
          width INTEGER NOT NULL CHECK(width > 0),
          height INTEGER NOT NULL CHECK(height > 0),
          created_at_ms INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_land_plots_person
          ON land_plots(person_id);
        "#,
    )?;
    Ok(())
}

fn valid_name(name: &str) -> Result<&str, StoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(StoreError::InvalidInput("person name must not be blank"));
    }
    Ok(trimmed)
}

fn map_person_conflict(err: rusqlite::Error, name: &str) -> StoreError {
    if constraint_message(&err).is_some_and(|m| m.contains("UNIQUE")) {
        return StoreError::NameTaken {
            name: name.to_string(),
        };
    }
    StoreError::Sql(err)
}

fn map_plot_conflict(err: rusqlite::Error) -> StoreError {
    match constraint_message(&err) {
        Some(m) if m.contains("FOREIGN KEY") => StoreError::UnknownPerson,
        Some(m) if m.contains("CHECK") => {
            StoreError::InvalidInput("plot geometry rejected by schema")
        }
        _ => StoreError::Sql(err),
    }
}

fn constraint_message(err: &rusqlite::Error) -> Option<&str> {
    match err {
        rusqlite::Error::SqliteFailure(code, message)
            if code.code == ErrorCode::ConstraintViolation =>
        {
            Some(message.as_deref().unwrap_or(""))
        }
        _ => None,
    }
}

fn now_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

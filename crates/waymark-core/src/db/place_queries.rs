//! Favorite place CRUD operations and queries.

use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{Coordinate, FavoritePlace, NewPlace},
};

const INSERT_PLACE_SQL: &str =
    "INSERT INTO favorites (name, latitude, longitude, isAlert) VALUES (?1, ?2, ?3, ?4)";
const SELECT_PLACE_SQL: &str =
    "SELECT id, name, latitude, longitude, isAlert FROM favorites WHERE id = ?1";
const SELECT_ALL_PLACES_SQL: &str =
    "SELECT id, name, latitude, longitude, isAlert FROM favorites ORDER BY id ASC";
const DELETE_PLACE_SQL: &str = "DELETE FROM favorites WHERE id = ?1";

impl super::Database {
    /// Inserts a place inside a transaction and returns the stored record.
    pub fn insert_place(&mut self, place: &NewPlace) -> Result<FavoritePlace> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_PLACE_SQL,
            params![
                place.name,
                place.coordinate.latitude(),
                place.coordinate.longitude(),
                place.is_alert
            ],
        )
        .db_context("Failed to insert place")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(FavoritePlace {
            id,
            name: place.name.clone(),
            coordinate: place.coordinate,
            is_alert: place.is_alert,
        })
    }

    /// Retrieves a place by its ID.
    pub fn get_place(&self, id: u64) -> Result<Option<FavoritePlace>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PLACE_SQL)
            .db_context("Failed to prepare query")?;

        let place = stmt
            .query_row(params![id as i64], place_from_row)
            .optional()
            .db_context("Failed to query place")?;

        Ok(place)
    }

    /// Lists every place ordered by id ascending.
    pub fn list_places(&self) -> Result<Vec<FavoritePlace>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ALL_PLACES_SQL)
            .db_context("Failed to prepare query")?;

        let places = stmt
            .query_map([], place_from_row)
            .db_context("Failed to query places")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch places")?;

        Ok(places)
    }

    /// Deletes a place. Returns `false` when no row had that id.
    pub fn delete_place(&mut self, id: u64) -> Result<bool> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let affected = tx
            .execute(DELETE_PLACE_SQL, params![id as i64])
            .db_context("Failed to delete place")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(affected > 0)
    }
}

fn place_from_row(row: &Row<'_>) -> rusqlite::Result<FavoritePlace> {
    let latitude: f64 = row.get(2)?;
    let longitude: f64 = row.get(3)?;
    let coordinate = Coordinate::new(latitude, longitude)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Real, Box::new(e)))?;

    Ok(FavoritePlace {
        id: row.get::<_, i64>(0)? as u64,
        name: row.get(1)?,
        coordinate,
        is_alert: row.get(4)?,
    })
}

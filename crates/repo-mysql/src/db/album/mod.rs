// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use diesel::{dsl::sql, sql_types::BigInt};

use crate::prelude::*;

pub(crate) mod models;
pub(crate) mod schema;

use self::{
    models::{InsertableRecord, QueryableRecord},
    schema::album,
};

/// Backend-specific retrieval of the row id that the database
/// assigned to a newly inserted row.
pub(crate) trait InsertReturningRowId {
    fn insert_album_returning_row_id(
        &mut self,
        insertable: &InsertableRecord<'_>,
    ) -> QueryResult<RowId>;
}

impl InsertReturningRowId for DbConnection {
    fn insert_album_returning_row_id(
        &mut self,
        insertable: &InsertableRecord<'_>,
    ) -> QueryResult<RowId> {
        let rows_affected = diesel::insert_into(album::table)
            .values(insertable)
            .execute(self)?;
        debug_assert_eq!(1, rows_affected);
        // LAST_INSERT_ID() is maintained per connection and returns
        // an unsigned value.
        diesel::select(sql::<BigInt>("CAST(LAST_INSERT_ID() AS SIGNED)")).get_result(self)
    }
}

#[cfg(test)]
impl InsertReturningRowId for diesel::SqliteConnection {
    fn insert_album_returning_row_id(
        &mut self,
        insertable: &InsertableRecord<'_>,
    ) -> QueryResult<RowId> {
        diesel::insert_into(album::table)
            .values(insertable)
            .returning(album::id)
            .get_result(self)
    }
}

/// Check that all columns of the `album` table exist.
pub(crate) trait VerifyAlbumColumns {
    fn verify_album_columns(&mut self) -> QueryResult<()>;
}

macro_rules! impl_verify_album_columns {
    ($connection_type:ty) => {
        impl VerifyAlbumColumns for $connection_type {
            fn verify_album_columns(&mut self) -> QueryResult<()> {
                // Selects all columns by name without fetching any rows.
                album::table
                    .limit(0)
                    .load::<QueryableRecord>(self)
                    .map(drop)
            }
        }
    };
}

impl_verify_album_columns!(DbConnection);

#[cfg(test)]
impl_verify_album_columns!(diesel::SqliteConnection);

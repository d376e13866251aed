// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use albumdb_core::album::{Album, AlbumId, Price};

use super::{schema::*, *};

#[derive(Debug, Queryable)]
pub(crate) struct QueryableRecord {
    pub(crate) id: RowId,
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) price: Price,
}

impl From<QueryableRecord> for Album {
    fn from(from: QueryableRecord) -> Self {
        let QueryableRecord {
            id,
            title,
            artist,
            price,
        } = from;
        Self {
            id: Some(AlbumId::new(id)),
            title,
            artist,
            price,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = album)]
pub(crate) struct InsertableRecord<'a> {
    pub(crate) title: &'a str,
    pub(crate) artist: &'a str,
    pub(crate) price: Price,
}

impl<'a> InsertableRecord<'a> {
    pub(crate) fn bind(album: &'a Album) -> Self {
        let Album {
            id,
            title,
            artist,
            price,
        } = album;
        // The id is assigned by the database
        debug_assert!(id.is_none());
        Self {
            title,
            artist,
            price: *price,
        }
    }
}

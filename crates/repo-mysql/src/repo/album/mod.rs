// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use albumdb_core::album::{Album, AlbumId};
use albumdb_repo::album::EntityRepo;

use crate::{
    db::album::{InsertReturningRowId as _, models::*, schema::*},
    prelude::*,
};

// The implementation is shared by all supported connection types.
// Only the retrieval of generated row ids differs between backends,
// see `InsertReturningRowId`.
macro_rules! impl_entity_repo {
    ($connection_type:ty) => {
        impl EntityRepo for crate::Connection<'_, $connection_type> {
            fn insert_album(&mut self, album: &mut Album) -> RepoResult<AlbumId> {
                if let Some(id) = album.id {
                    log::warn!("Refusing to insert album that has already been stored as {id}");
                    return Err(RepoError::Conflict);
                }
                let insertable = InsertableRecord::bind(album);
                let row_id = self
                    .as_mut()
                    .insert_album_returning_row_id(&insertable)
                    .map_err(repo_error)?;
                let id = AlbumId::new(row_id);
                log::debug!("Inserted album {id}");
                album.id = Some(id);
                Ok(id)
            }

            fn load_albums_by_artist(&mut self, artist: &str) -> RepoResult<Vec<Album>> {
                let records = album::table
                    .filter(album::artist.eq(artist))
                    .order_by(album::id)
                    .load::<QueryableRecord>(self.as_mut())
                    .map_err(repo_error)?;
                log::debug!(
                    "Loaded {count} album(s) of artist {artist:?}",
                    count = records.len()
                );
                Ok(records.into_iter().map(Into::into).collect())
            }

            fn load_album(&mut self, id: AlbumId) -> RepoResult<Album> {
                album::table
                    .find(RowId::from(id))
                    .first::<QueryableRecord>(self.as_mut())
                    .map_err(repo_error)
                    .map(Into::into)
            }
        }
    };
}

impl_entity_repo!(DbConnection);

#[cfg(test)]
impl_entity_repo!(diesel::SqliteConnection);

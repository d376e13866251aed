// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use albumdb_core::album::{Album, AlbumId};

use crate::RepoResult;

pub trait EntityRepo {
    /// Store a new album.
    ///
    /// The identifier assigned by the store is written back into
    /// `album.id` and also returned. Albums that already carry an
    /// identifier are rejected with [`crate::RepoError::Conflict`].
    fn insert_album(&mut self, album: &mut Album) -> RepoResult<AlbumId>;

    /// All albums of the given artist, ordered by identifier.
    fn load_albums_by_artist(&mut self, artist: &str) -> RepoResult<Vec<Album>>;

    /// Fails with [`crate::RepoError::NotFound`] if no album
    /// with this identifier exists.
    fn load_album(&mut self, id: AlbumId) -> RepoResult<Album>;
}

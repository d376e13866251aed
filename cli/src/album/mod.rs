// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use anyhow::Context as _;

use albumdb::{
    core::album::{Album, AlbumId},
    repo::album::EntityRepo,
};

pub(crate) fn add_album(repo: &mut impl EntityRepo, album: &mut Album) -> anyhow::Result<AlbumId> {
    repo.insert_album(album).context("add album")
}

pub(crate) fn albums_by_artist(
    repo: &mut impl EntityRepo,
    artist: &str,
) -> anyhow::Result<Vec<Album>> {
    repo.load_albums_by_artist(artist)
        .with_context(|| format!("albums by artist {artist:?}"))
}

/// The error of an unknown `id` is distinguishable from other errors
/// by downcasting to [`albumdb::repo::RepoError::NotFound`].
pub(crate) fn album_by_id(repo: &mut impl EntityRepo, id: AlbumId) -> anyhow::Result<Album> {
    repo.load_album(id).map_err(|err| {
        let context = if err.is_not_found() {
            format!("album by id {id}: no such album")
        } else {
            format!("album by id {id}")
        };
        anyhow::Error::from(err).context(context)
    })
}

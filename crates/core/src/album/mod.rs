// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

///////////////////////////////////////////////////////////////////////
// AlbumId
///////////////////////////////////////////////////////////////////////

pub type AlbumIdValue = i64;

/// Identifier of a stored album.
///
/// Assigned by the store when the album is created and never
/// changed afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[repr(transparent)]
pub struct AlbumId(AlbumIdValue);

impl AlbumId {
    #[must_use]
    pub const fn new(value: AlbumIdValue) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> AlbumIdValue {
        let Self(value) = self;
        value
    }
}

impl From<AlbumIdValue> for AlbumId {
    fn from(from: AlbumIdValue) -> Self {
        Self::new(from)
    }
}

impl From<AlbumId> for AlbumIdValue {
    fn from(from: AlbumId) -> Self {
        from.value()
    }
}

///////////////////////////////////////////////////////////////////////
// Album
///////////////////////////////////////////////////////////////////////

pub type Price = f32;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Album {
    /// `None` until the album has been stored.
    pub id: Option<AlbumId>,

    pub title: String,

    pub artist: String,

    pub price: Price,
}

impl Album {
    /// A new, not yet stored album.
    #[must_use]
    pub fn new(title: impl Into<String>, artist: impl Into<String>, price: Price) -> Self {
        Self {
            id: None,
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }
}

impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            id,
            title,
            artist,
            price,
        } = self;
        if let Some(id) = id {
            write!(f, "#{id} ")?;
        }
        write!(f, "{title:?} by {artist:?} ({price:.2})")
    }
}

#[cfg(test)]
mod tests;

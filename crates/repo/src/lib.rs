// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

#![warn(rust_2018_idioms)]
#![warn(missing_debug_implementations)]
#![warn(unreachable_pub)]
#![warn(unsafe_code)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use thiserror::Error;

pub mod album;

pub type RecordId = albumdb_core::album::AlbumIdValue;

#[derive(Error, Debug)]
pub enum RepoError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RepoError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

pub type RepoResult<T> = Result<T, RepoError>;

pub trait OptionalRepoResult<T> {
    fn optional(self) -> RepoResult<Option<T>>;
}

impl<T> OptionalRepoResult<T> for RepoResult<T> {
    fn optional(self) -> RepoResult<Option<T>> {
        self.map_or_else(
            |err| {
                if matches!(err, RepoError::NotFound) {
                    Ok(None)
                } else {
                    Err(err)
                }
            },
            |val| Ok(Some(val)),
        )
    }
}

pub mod prelude {
    pub use crate::{OptionalRepoResult, RecordId, RepoError, RepoResult};
}

#[cfg(test)]
mod tests;

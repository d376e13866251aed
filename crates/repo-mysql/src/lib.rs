// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

#![warn(rust_2018_idioms)]
#![warn(missing_debug_implementations)]
#![warn(unreachable_pub)]
#![warn(unsafe_code)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(clippy::pedantic)]
// Repetitions of module/type names occur frequently when using many
// modules for keeping the size of the source files handy. Often
// types have the same name as their parent module.
#![allow(clippy::module_name_repetitions)]
// Using wildcard imports consciously is acceptable.
#![allow(clippy::wildcard_imports)]
#![allow(clippy::missing_errors_doc)]

use diesel::{
    backend::Backend,
    migration::{MigrationVersion, Result as MigrationResult},
};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use crate::db::album::VerifyAlbumColumns;

pub type DbBackend = diesel::mysql::Mysql;
pub type DbConnection = diesel::mysql::MysqlConnection;

pub mod prelude {
    pub(crate) use albumdb_repo::prelude::*;
    pub(crate) use diesel::{prelude::*, result::Error as DieselError};

    pub use crate::DbConnection;

    /// Repository view of a borrowed database connection.
    #[allow(missing_debug_implementations)]
    pub struct Connection<'db, C = DbConnection>(&'db mut C);

    impl<'db, C> Connection<'db, C> {
        pub fn new(inner: &'db mut C) -> Self {
            Self(inner)
        }
    }

    impl<C> AsMut<C> for Connection<'_, C> {
        fn as_mut(&mut self) -> &mut C {
            self.0
        }
    }

    pub(crate) fn repo_error(err: DieselError) -> RepoError {
        match err {
            DieselError::NotFound => RepoError::NotFound,
            err => anyhow::Error::from(err).into(),
        }
    }

    pub(crate) type RowId = albumdb_repo::RecordId;
}

pub use prelude::Connection;

pub mod repo;

mod db;

const EMBEDDED_MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations/mysql");

/// Create the database schema.
///
/// Only pending migrations are applied, i.e. running this function
/// repeatedly is safe. Afterwards all columns of the `album` table
/// must exist, otherwise an error is returned. This also applies to
/// a pre-existing table that has not been created by the migrations.
///
/// Returns the versions of the migrations that have been applied
/// by this invocation.
pub fn run_migrations(
    connection: &mut DbConnection,
) -> MigrationResult<Vec<MigrationVersion<'static>>> {
    run_embedded_migrations::<_, DbBackend>(connection, EMBEDDED_MIGRATIONS)
}

fn run_embedded_migrations<C, DB>(
    connection: &mut C,
    migrations: EmbeddedMigrations,
) -> MigrationResult<Vec<MigrationVersion<'static>>>
where
    DB: Backend,
    C: MigrationHarness<DB> + VerifyAlbumColumns,
{
    let applied = connection
        .run_pending_migrations(migrations)?
        .iter()
        .map(MigrationVersion::as_owned)
        .collect();
    connection.verify_album_columns().map_err(|err| {
        anyhow::Error::from(err).context("table album does not match the database schema")
    })?;
    Ok(applied)
}

// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::process::ExitCode;

use anyhow::Context as _;
use itertools::Itertools as _;

use albumdb::{core::album::Album, repo_mysql, storage_mysql::connection::establish_connection};

mod album;
mod env;

const NEW_ALBUM_TITLE: &str = "The Modern Sound of Betty Carter";
const NEW_ALBUM_ARTIST: &str = "Betty Carter";
const NEW_ALBUM_PRICE: f32 = 49.99;

fn main() -> ExitCode {
    // Load the .env file first, it might contain RUST_LOG.
    let dotenv_result = env::load_dotenv_file();

    env::init_logging();

    match dotenv_result {
        Ok(path) => {
            log::info!("Loaded environment from dotenv file {}", path.display());
        }
        Err(err) => {
            log::error!("Failed to load environment from .env file: {err}");
            return ExitCode::FAILURE;
        }
    }

    if let Err(err) = run() {
        log::error!("{err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run() -> anyhow::Result<()> {
    let config = env::parse_database_config().context("Failed to load database configuration")?;
    log::debug!("Database configuration: {config:?}");

    let mut connection =
        establish_connection(&config).context("Failed to connect to the database")?;
    println!("Connected!");

    let applied_migrations = repo_mysql::run_migrations(&mut connection)
        .map_err(|err| anyhow::anyhow!(err))
        .context("Failed to migrate database schema")?;
    if applied_migrations.is_empty() {
        log::info!("Database schema is up to date");
    }
    for version in applied_migrations {
        log::info!("Applied database migration {version}");
    }

    let mut repo = repo_mysql::Connection::new(&mut connection);

    let mut new_album = Album::new(NEW_ALBUM_TITLE, NEW_ALBUM_ARTIST, NEW_ALBUM_PRICE);
    let id = album::add_album(&mut repo, &mut new_album).context("Failed to add album")?;
    println!("New album added with ID: {id}");

    let albums = album::albums_by_artist(&mut repo, NEW_ALBUM_ARTIST)
        .context("Failed to fetch albums")?;
    println!("Albums found: [{}]", albums.iter().join(", "));

    let album = album::album_by_id(&mut repo, id).context("Failed to fetch album by ID")?;
    println!("Album found: {album}");

    Ok(())
}

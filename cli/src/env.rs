// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{env, path::PathBuf};

use anyhow::{Context as _, bail};
use log::LevelFilter;

use albumdb::storage_mysql::connection::{Config as DatabaseConfig, DEFAULT_PORT};

/// Default log level for debug builds.
#[cfg(debug_assertions)]
const DEFAULT_LOG_FILTER_LEVEL: LevelFilter = LevelFilter::Info;

/// Reduce log verbosity for release builds.
#[cfg(not(debug_assertions))]
const DEFAULT_LOG_FILTER_LEVEL: LevelFilter = LevelFilter::Warn;

/// Load variables from the `.env` file into the process environment.
///
/// Variables that are already set are not overwritten.
pub(crate) fn load_dotenv_file() -> dotenvy::Result<PathBuf> {
    dotenvy::dotenv()
}

pub(crate) fn init_logging() {
    env_logger::Builder::new()
        .filter_level(DEFAULT_LOG_FILTER_LEVEL)
        // Parse environment variables after configuring all default option(s).
        .parse_default_env()
        .init();
}

const DB_USER_ENV: &str = "DB_USER";
const DB_PASS_ENV: &str = "DB_PASS";
const DB_HOST_ENV: &str = "DB_HOST";
const DB_PORT_ENV: &str = "DB_PORT";
const DB_NAME_ENV: &str = "DB_NAME";

pub(crate) fn parse_database_config() -> anyhow::Result<DatabaseConfig> {
    parse_database_config_from(|key| env::var(key).ok())
}

fn parse_database_config_from(
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<DatabaseConfig> {
    let user = required_var(&lookup, DB_USER_ENV)?;
    let password = lookup(DB_PASS_ENV).unwrap_or_default();
    if password.is_empty() {
        log::debug!("{DB_PASS_ENV} is empty");
    }
    let host = required_var(&lookup, DB_HOST_ENV)?;
    let port = parse_port(lookup(DB_PORT_ENV).as_deref())?;
    let database = required_var(&lookup, DB_NAME_ENV)?;
    Ok(DatabaseConfig {
        user,
        password,
        host,
        port,
        database,
    })
}

fn required_var(lookup: impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<String> {
    let Some(var) = lookup(key) else {
        bail!("missing environment variable {key}");
    };
    let var = var.trim();
    if var.is_empty() {
        bail!("empty environment variable {key}");
    }
    log::debug!("{key} = {var}");
    Ok(var.to_owned())
}

fn parse_port(var: Option<&str>) -> anyhow::Result<u16> {
    let Some(var) = var.map(str::trim).filter(|var| !var.is_empty()) else {
        log::debug!("{DB_PORT_ENV} = {DEFAULT_PORT} (default)");
        return Ok(DEFAULT_PORT);
    };
    log::debug!("{DB_PORT_ENV} = {var}");
    let port = var
        .parse::<u16>()
        .with_context(|| format!("invalid {DB_PORT_ENV} = {var:?}"))?;
    if port == 0 {
        bail!("invalid {DB_PORT_ENV} = {var:?}");
    }
    Ok(port)
}

// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

use diesel::{Connection as _, MysqlConnection};
use url::Url;

use crate::Result;

pub const URL_SCHEME: &str = "mysql";

pub const DEFAULT_PORT: u16 = 3306;

const REDACTED_PASSWORD: &str = "***";

/// Settings for connecting to a MySQL-compatible server.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub user: String,

    /// Might be empty.
    pub password: String,

    pub host: String,

    pub port: u16,

    /// Name of the database (schema) on the server.
    pub database: String,
}

impl Config {
    /// Build the connection URL as expected by diesel.
    ///
    /// User and password are percent-encoded. An empty password
    /// is omitted.
    pub fn database_url(&self) -> Result<Url> {
        let Self {
            user,
            password,
            host,
            port,
            database,
        } = self;
        let mut url = Url::parse(&format!("{URL_SCHEME}://{host}", host = url_host(host)))?;
        url.set_port(Some(*port))
            .map_err(|()| anyhow::anyhow!("cannot set port {port} on {url}"))?;
        url.set_username(user)
            .map_err(|()| anyhow::anyhow!("cannot set user on {url}"))?;
        if !password.is_empty() {
            url.set_password(Some(password))
                .map_err(|()| anyhow::anyhow!("cannot set password on {url}"))?;
        }
        url.set_path(&format!("/{database}"));
        Ok(url)
    }

    /// The connection URL with the password masked, for log output.
    pub fn redacted_url(&self) -> Result<Url> {
        let mut url = self.database_url()?;
        if url.password().is_some() {
            url.set_password(Some(REDACTED_PASSWORD))
                .map_err(|()| anyhow::anyhow!("cannot redact password"))?;
        }
        Ok(url)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            user,
            password,
            host,
            port,
            database,
        } = self;
        f.debug_struct("Config")
            .field("user", user)
            .field(
                "password",
                &if password.is_empty() {
                    ""
                } else {
                    REDACTED_PASSWORD
                },
            )
            .field("host", host)
            .field("port", port)
            .field("database", database)
            .finish()
    }
}

// IPv6 addresses must be enclosed in brackets.
fn url_host(host: &str) -> std::borrow::Cow<'_, str> {
    if host.contains(':') && !host.starts_with('[') {
        format!("[{host}]").into()
    } else {
        host.into()
    }
}

/// Open a single connection.
///
/// Fails immediately if the server is unreachable or rejects the
/// credentials. No retries.
pub fn establish_connection(config: &Config) -> Result<MysqlConnection> {
    let database_url = config.database_url()?;
    log::info!(
        "Connecting to database: {redacted_url}",
        redacted_url = config.redacted_url()?
    );
    let connection = MysqlConnection::establish(database_url.as_str())?;
    Ok(connection)
}

#[cfg(test)]
mod tests;

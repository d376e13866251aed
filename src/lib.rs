// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Album records in a MySQL database.
//!
//! Re-exports the workspace crates according to the enabled features.

pub use albumdb_core as core;

#[cfg(feature = "repo")]
pub use albumdb_repo as repo;

#[cfg(feature = "mysql")]
pub use albumdb_repo_mysql as repo_mysql;

#[cfg(feature = "mysql")]
pub use albumdb_storage_mysql as storage_mysql;

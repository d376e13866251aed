// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn optional_maps_not_found_to_none() {
    let result: RepoResult<i32> = Err(RepoError::NotFound);
    assert!(matches!(result.optional(), Ok(None)));
}

#[test]
fn optional_keeps_values() {
    let result: RepoResult<i32> = Ok(1);
    assert!(matches!(result.optional(), Ok(Some(1))));
}

#[test]
fn optional_keeps_other_errors() {
    let result: RepoResult<i32> = Err(RepoError::Conflict);
    assert!(matches!(result.optional(), Err(RepoError::Conflict)));
    let result: RepoResult<i32> = Err(anyhow::anyhow!("broken").into());
    assert!(matches!(result.optional(), Err(RepoError::Other(_))));
}

#[test]
fn not_found_is_distinct_from_other_errors() {
    assert!(RepoError::NotFound.is_not_found());
    assert!(!RepoError::Conflict.is_not_found());
    assert!(!RepoError::from(anyhow::anyhow!("not found")).is_not_found());
    assert_eq!("not found", RepoError::NotFound.to_string());
}

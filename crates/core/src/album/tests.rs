// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn new_album_is_not_stored() {
    let album = Album::new("X", "Y", 9.99);
    assert_eq!(None, album.id);
    assert_eq!("X", album.title);
    assert_eq!("Y", album.artist);
}

#[test]
fn display() {
    let mut album = Album::new("The Modern Sound of Betty Carter", "Betty Carter", 49.99);
    assert_eq!(
        r#""The Modern Sound of Betty Carter" by "Betty Carter" (49.99)"#,
        album.to_string()
    );
    album.id = Some(AlbumId::new(7));
    assert_eq!(
        r#"#7 "The Modern Sound of Betty Carter" by "Betty Carter" (49.99)"#,
        album.to_string()
    );
}

#[test]
fn id_value_conversion() {
    let id = AlbumId::from(42);
    assert_eq!(42, AlbumIdValue::from(id));
    assert_eq!("42", id.to_string());
}

// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

diesel::table! {
    album (id) {
        id -> BigInt,
        title -> Text,
        artist -> Text,
        price -> Float,
    }
}

/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use num_enum::TryFromPrimitive;
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TryFromPrimitive, IntoStaticStr)]
#[repr(u8)]
pub enum Sex {
    Unknown = 0,
    Female = 1,
    Male = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TryFromPrimitive, IntoStaticStr)]
#[repr(u8)]
pub enum Relation {
    NotSpecified = 0,
    Single = 1,
    InRelationship = 2,
    Engaged = 3,
    Married = 4,
    Complicated = 5,
    ActivelySearching = 6,
    InLove = 7,
    CivilUnion = 8,
}

/// Optional profile fields requested from `users.get`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum UserField {
    City,
    Country,
    Counters,
    Bdate,
    LastSeen,
    HomeTown,
    Sex,
    Relation,
    CanSeeAudio,
    Occupation,
}

impl UserField {
    /// Comma separated list of every field, as sent in the `fields` parameter
    pub fn all() -> String {
        UserField::iter()
            .map(|field| field.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v5::{Relation, Sex};
use serde::Deserialize;

// Parses sex, values the library doesn't know become Unknown
pub fn from_sex<'de, D>(deserializer: D) -> Result<Option<Sex>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v: Option<u8> = Deserialize::deserialize(deserializer)?;
    Ok(v.map(|v| Sex::try_from(v).unwrap_or(Sex::Unknown)))
}

// Parses relationship status
pub fn from_relation<'de, D>(deserializer: D) -> Result<Option<Relation>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v: Option<u8> = Deserialize::deserialize(deserializer)?;
    Ok(v.map(|v| Relation::try_from(v).unwrap_or(Relation::NotSpecified)))
}

// Parses 0/1 flags
pub fn from_int_to_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v: Option<i64> = Deserialize::deserialize(deserializer)?;
    Ok(v.is_some_and(|v| v != 0))
}

// Parses strings that may be "" or null and sets to None
pub fn from_empty_str_to_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.is_empty()))
}

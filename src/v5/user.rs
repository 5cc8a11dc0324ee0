/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v5::errors::VkError;
use crate::v5::execute::execute_ordered;
use crate::v5::parsers::{from_empty_str_to_none, from_int_to_bool, from_relation, from_sex};
use crate::v5::{
    ApiMethod, BatchKey, BatchScript, Client, Collect, MAX_EXECUTE_BATCH_SIZE, Relation, Sex,
    Transport, UserField,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Holds information returned from the `users.get` method.
///
/// See [VK API Docs](https://dev.vk.com/reference/objects/user) for more
/// details on the individual fields.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    // "deleted" or "banned" when the page is gone
    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub deactivated: Option<String>,

    #[serde(default)]
    pub city: Option<City>,

    #[serde(default)]
    pub country: Option<Country>,

    #[serde(default)]
    pub counters: Option<Counters>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub bdate: Option<String>,

    #[serde(default)]
    pub last_seen: Option<LastSeen>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub home_town: Option<String>,

    #[serde(default, deserialize_with = "from_sex")]
    pub sex: Option<Sex>,

    #[serde(default, deserialize_with = "from_relation")]
    pub relation: Option<Relation>,

    #[serde(default, deserialize_with = "from_int_to_bool")]
    pub can_see_audio: bool,

    #[serde(default)]
    pub occupation: Option<Occupation>,
}

impl User {
    pub fn is_deleted(&self) -> bool {
        self.deactivated.as_deref() == Some("deleted")
    }

    pub fn is_banned(&self) -> bool {
        self.deactivated.as_deref() == Some("banned")
    }

    pub fn is_unavailable(&self) -> bool {
        self.is_deleted() || self.is_banned()
    }

    /// Little endian encoding of the id, handy as a compact storage key
    pub fn id_bytes(&self) -> [u8; 8] {
        self.id.to_le_bytes()
    }
}

impl BatchKey for User {
    fn batch_key(&self) -> i64 {
        self.id
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}, id: {}", self.first_name, self.last_name, self.id)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub id: i64,
    pub title: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub id: i64,
    pub title: String,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Counters {
    #[serde(default)]
    pub audios: u64,

    #[serde(default)]
    pub videos: u64,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LastSeen {
    #[serde(with = "chrono::serde::ts_seconds")]
    pub time: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Occupation {
    #[serde(rename = "type")]
    pub occupation_type: String,

    #[serde(default)]
    pub name: String,
}

/// Accessor for the users methods, see [`Client::users`]
#[derive(Debug)]
pub struct UsersApi<'a, T> {
    client: &'a Client<T>,
}

impl<T> Clone for UsersApi<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for UsersApi<'_, T> {}

impl<'a, T: Transport> UsersApi<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Returns information for the specified user id, `None` if the service has no such user
    pub async fn get(&self, id: i64) -> Result<Option<User>, VkError> {
        let user_ids = id.to_string();
        let fields = UserField::all();
        let params = [("user_ids", user_ids.as_str()), ("fields", fields.as_str())];

        let users = self
            .client
            .call::<Vec<User>>(ApiMethod::UsersGet, &params)
            .await?;
        Ok(users.into_iter().next())
    }

    /// Script looking up each id with its own `users.get` call
    pub fn batch_script(ids: &[i64]) -> Result<BatchScript, VkError> {
        Ok(
            BatchScript::new(ApiMethod::UsersGet, "user_ids", ids, Collect::First)?
                .param("fields", UserField::all().as_str()),
        )
    }

    /// Looks up to [`MAX_EXECUTE_BATCH_SIZE`] users in one round trip.
    ///
    /// Slot `i` of the result answers `ids[i]`, `None` where the user doesn't exist.
    pub async fn get_batch(&self, ids: &[i64]) -> Result<Vec<Option<User>>, VkError> {
        let script = Self::batch_script(ids)?;
        execute_ordered(self.client, &script).await
    }

    /// Same as [`UsersApi::get_batch`] for every id in `from..=to`
    pub async fn get_range(&self, from: i64, to: i64) -> Result<Vec<Option<User>>, VkError> {
        if from > to {
            return Err(VkError::InvalidRange { from, to });
        }

        let size = usize::try_from(to.abs_diff(from))
            .unwrap_or(usize::MAX)
            .saturating_add(1);
        if size > MAX_EXECUTE_BATCH_SIZE {
            return Err(VkError::BatchTooLarge {
                size,
                max: MAX_EXECUTE_BATCH_SIZE,
            });
        }

        let ids: Vec<i64> = (from..=to).collect();
        self.get_batch(&ids).await
    }
}

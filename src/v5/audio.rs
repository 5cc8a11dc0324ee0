/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v5::errors::VkError;
use crate::v5::execute::execute_grouped;
use crate::v5::pager::{fetch_all, owner_page, paginate};
use crate::v5::{ApiMethod, BatchKey, BatchScript, Client, Collect, Transport};
use futures::Stream;
use serde::Deserialize;
use std::collections::HashMap;

/// Largest `count` accepted by `audio.get`
pub const MAX_AUDIO_PER_REQUEST: u32 = 5000;

/// Holds information returned from the `audio.get` method.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Audio {
    #[serde(default)]
    pub id: i64,

    pub owner_id: i64,

    #[serde(default)]
    pub artist: String,

    #[serde(default)]
    pub title: String,

    // Seconds
    #[serde(default)]
    pub duration: u32,
}

impl BatchKey for Audio {
    fn batch_key(&self) -> i64 {
        self.owner_id
    }
}

/// Accessor for the audio methods, see [`Client::audio`]
#[derive(Debug)]
pub struct AudioApi<'a, T> {
    client: &'a Client<T>,
}

impl<T> Clone for AudioApi<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for AudioApi<'_, T> {}

impl<'a, T: Transport> AudioApi<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Returns one page of the owner's audio, `count` must be in `1..=MAX_AUDIO_PER_REQUEST`
    pub async fn get(&self, owner_id: i64, offset: u32, count: u32) -> Result<Vec<Audio>, VkError> {
        owner_page(
            self.client,
            ApiMethod::AudioGet,
            MAX_AUDIO_PER_REQUEST,
            owner_id,
            offset,
            count,
        )
        .await
    }

    /// Pages through all of the owner's audio and returns them as a stream
    pub fn stream_all(self, owner_id: i64) -> impl Stream<Item = Result<Audio, VkError>> {
        let client = self.client;
        paginate(MAX_AUDIO_PER_REQUEST, move |offset, count| {
            owner_page(
                client,
                ApiMethod::AudioGet,
                MAX_AUDIO_PER_REQUEST,
                owner_id,
                offset,
                count,
            )
        })
    }

    /// Retrieves every audio of the owner
    pub async fn get_all(&self, owner_id: i64) -> Result<Vec<Audio>, VkError> {
        let client = self.client;
        fetch_all(MAX_AUDIO_PER_REQUEST, move |offset, count| {
            owner_page(
                client,
                ApiMethod::AudioGet,
                MAX_AUDIO_PER_REQUEST,
                owner_id,
                offset,
                count,
            )
        })
        .await
    }

    /// Script fetching the first page of audio of each owner
    pub fn batch_script(owner_ids: &[i64]) -> Result<BatchScript, VkError> {
        Ok(
            BatchScript::new(ApiMethod::AudioGet, "owner_id", owner_ids, Collect::Items)?
                .param("count", MAX_AUDIO_PER_REQUEST)
                .param("need_user", 0i64),
        )
    }

    /// Retrieves audio for several owners in one round trip, keyed by owner id.
    ///
    /// Each owner contributes at most [`MAX_AUDIO_PER_REQUEST`] items.
    pub async fn get_batch(&self, owner_ids: &[i64]) -> Result<HashMap<i64, Vec<Audio>>, VkError> {
        let script = Self::batch_script(owner_ids)?;
        execute_grouped(self.client, &script).await
    }
}

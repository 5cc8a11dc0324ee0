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

/// Largest `count` accepted by `video.get`
pub const MAX_VIDEO_PER_REQUEST: u32 = 200;

/// Holds information returned from the `video.get` method.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Video {
    #[serde(default)]
    pub id: i64,

    pub owner_id: i64,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub duration: u32,
}

impl BatchKey for Video {
    fn batch_key(&self) -> i64 {
        self.owner_id
    }
}

/// Accessor for the video methods, see [`Client::video`]
#[derive(Debug)]
pub struct VideoApi<'a, T> {
    client: &'a Client<T>,
}

impl<T> Clone for VideoApi<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for VideoApi<'_, T> {}

impl<'a, T: Transport> VideoApi<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Returns one page of the owner's videos, `count` must be in `1..=MAX_VIDEO_PER_REQUEST`
    pub async fn get(&self, owner_id: i64, offset: u32, count: u32) -> Result<Vec<Video>, VkError> {
        owner_page(
            self.client,
            ApiMethod::VideoGet,
            MAX_VIDEO_PER_REQUEST,
            owner_id,
            offset,
            count,
        )
        .await
    }

    pub fn stream_all(self, owner_id: i64) -> impl Stream<Item = Result<Video, VkError>> {
        let client = self.client;
        paginate(MAX_VIDEO_PER_REQUEST, move |offset, count| {
            owner_page(
                client,
                ApiMethod::VideoGet,
                MAX_VIDEO_PER_REQUEST,
                owner_id,
                offset,
                count,
            )
        })
    }

    pub async fn get_all(&self, owner_id: i64) -> Result<Vec<Video>, VkError> {
        let client = self.client;
        fetch_all(MAX_VIDEO_PER_REQUEST, move |offset, count| {
            owner_page(
                client,
                ApiMethod::VideoGet,
                MAX_VIDEO_PER_REQUEST,
                owner_id,
                offset,
                count,
            )
        })
        .await
    }

    /// Script fetching the first page of videos of each owner
    pub fn batch_script(owner_ids: &[i64]) -> Result<BatchScript, VkError> {
        Ok(
            BatchScript::new(ApiMethod::VideoGet, "owner_id", owner_ids, Collect::Items)?
                .param("count", MAX_VIDEO_PER_REQUEST),
        )
    }

    /// Up to [`MAX_VIDEO_PER_REQUEST`] videos per owner, in one round trip
    pub async fn get_batch(&self, owner_ids: &[i64]) -> Result<HashMap<i64, Vec<Video>>, VkError> {
        let script = Self::batch_script(owner_ids)?;
        execute_grouped(self.client, &script).await
    }
}

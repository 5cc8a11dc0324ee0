/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v5::errors::VkError;
use crate::v5::{ApiMethod, Client, Transport};
use async_stream::try_stream;
use futures::{Stream, TryStreamExt};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::future::Future;

/// Pages through `page(offset, count)` with `count == cap` and yields the items.
///
/// A page shorter than `cap` is taken to be the last one. When the final page happens
/// to hold exactly `cap` items one more (empty) page is requested.
pub fn paginate<T, F, Fut>(cap: u32, mut page: F) -> impl Stream<Item = Result<T, VkError>>
where
    F: FnMut(u32, u32) -> Fut,
    Fut: Future<Output = Result<Vec<T>, VkError>>,
{
    try_stream! {
        if cap == 0 {
            Err::<(), _>(VkError::CountOutOfRange { count: cap, max: cap })?;
        }

        let mut offset = 0;
        loop {
            let items = page(offset, cap).await?;
            let is_done = items.len() < cap as usize;

            for item in items {
                yield item
            }

            if is_done {
                break;
            }
            offset += cap;
        }
    }
}

/// Collects every page. Any failing page discards what was already fetched.
pub async fn fetch_all<T, F, Fut>(cap: u32, page: F) -> Result<Vec<T>, VkError>
where
    F: FnMut(u32, u32) -> Fut,
    Fut: Future<Output = Result<Vec<T>, VkError>>,
{
    paginate(cap, page).try_collect().await
}

// Expected response of the owner scoped `*.get` methods
#[derive(Deserialize, Debug)]
struct ItemsResponse<I> {
    items: Vec<I>,
}

/// Single capped `<resource>.get` call for one owner
pub(crate) async fn owner_page<T, I>(
    client: &Client<T>,
    method: ApiMethod,
    cap: u32,
    owner_id: i64,
    offset: u32,
    count: u32,
) -> Result<Vec<I>, VkError>
where
    T: Transport,
    I: DeserializeOwned,
{
    if count == 0 || count > cap {
        return Err(VkError::CountOutOfRange { count, max: cap });
    }

    let owner_id = owner_id.to_string();
    let offset = offset.to_string();
    let count = count.to_string();
    let params = [
        ("owner_id", owner_id.as_str()),
        ("offset", offset.as_str()),
        ("count", count.as_str()),
    ];

    Ok(client
        .call::<ItemsResponse<I>>(method, &params)
        .await?
        .items)
}

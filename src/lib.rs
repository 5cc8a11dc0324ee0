/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # vkc
//!
//! This library was created for working with the VK API v5 interface.
//!
//! For further details on the API refer to the [VK API Docs](https://dev.vk.com/reference)
//!
//! ## Features
//!
//! - User information (Read only)
//!     - Single user, batches of up to 25 users, contiguous id ranges
//! - Audio and Video listings
//!     - One page, every page (as a `Vec` or a stream), first page of many owners at once
//! - Batching of lookups into a single `execute` call
//! - Typed errors, including a captcha challenge carrying what is needed to replay the call
//! - Lower level interface for handling the raw communication
//!
//! *Getting the access token is left up to the consumer of this library. Nothing is
//! retried or cached, [`v5::ApiError::is_retryable`] tells the caller what may be
//! worth another attempt*
//!
//! *If you want to use this library for more that is currently implemented,
//! [`v5::Client::call`] is a way to make request/responses in a more direct way*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! vkc = "0.1.0"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use vkc::v5::{ApiError, Client, Config, VkError};
//! use futures::{pin_mut, StreamExt};
//!
//!async fn friends_music(access_token: &str, owner_ids: &[i64]) -> anyhow::Result<()> {
//!    let client = Client::from_config(Config::new(access_token));
//!
//!    // One round trip for all owners, grouped back by owner id
//!    match client.audio().get_batch(owner_ids).await {
//!        Ok(by_owner) => {
//!            for (owner_id, songs) in by_owner {
//!                println!("{owner_id}: {} songs", songs.len());
//!            }
//!        }
//!        Err(VkError::Api(ApiError::ChallengeRequired { captcha_img, .. })) => {
//!            println!("Solve {captcha_img} and try again");
//!        }
//!        Err(err) => return Err(err.into()),
//!    }
//!
//!    // Page through every video of the first owner
//!    let videos = client.video().stream_all(owner_ids[0]);
//!    pin_mut!(videos);
//!    while let Some(video) = videos.next().await {
//!        println!("{}", video?.title);
//!    }
//!    Ok(())
//!}
//! ```
//!
pub mod v5;

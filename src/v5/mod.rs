/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod api;
pub mod audio;
pub mod client;
pub mod config;
pub mod errors;
pub mod execute;
pub mod pager;
mod parsers;
pub mod properties;
pub mod user;
pub mod video;

pub use api::*;
pub use audio::*;
pub use client::*;
pub use config::*;
pub use errors::*;
pub use execute::*;
pub use pager::*;
pub use properties::*;
pub use user::*;
pub use video::*;

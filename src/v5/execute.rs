/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Generates VKScript programs for the `execute` method.
//!
//! Every script has the same shape: loop over a literal id list, call one remote
//! method per id and collect the results into a single returned array. That trades
//! up to [`MAX_EXECUTE_BATCH_SIZE`] calls for one round trip.

use crate::v5::errors::VkError;
use crate::v5::{ApiMethod, Client, Transport};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fmt;

/// Most calls the service allows inside a single `execute`
pub const MAX_EXECUTE_BATCH_SIZE: usize = 25;

/// Literal argument passed to the per-id call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptValue {
    Int(i64),
    Str(String),
}

impl From<i64> for ScriptValue {
    fn from(v: i64) -> Self {
        ScriptValue::Int(v)
    }
}

impl From<u32> for ScriptValue {
    fn from(v: u32) -> Self {
        ScriptValue::Int(v.into())
    }
}

impl From<&str> for ScriptValue {
    fn from(v: &str) -> Self {
        ScriptValue::Str(v.into())
    }
}

impl fmt::Display for ScriptValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptValue::Int(v) => write!(f, "{v}"),
            // JSON string literals are valid VKScript string literals
            ScriptValue::Str(v) => f.write_str(&quote(v)?),
        }
    }
}

fn quote(s: &str) -> Result<String, fmt::Error> {
    serde_json::to_string(s).map_err(|_| fmt::Error)
}

/// How each per-id response lands in the returned array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collect {
    /// Exactly one slot per id holding `response[0]`, `null` when nothing came back
    First,
    /// The `items` of every non-empty response, concatenated
    Items,
}

/// Typed builder for a batch `execute` program.
///
/// ```rust
/// use vkc::v5::{ApiMethod, BatchScript, Collect};
///
/// let script = BatchScript::new(ApiMethod::AudioGet, "owner_id", &[1, 2], Collect::Items)
///     .unwrap()
///     .param("need_user", 0i64);
/// assert!(script.to_string().contains("API.audio.get({\"owner_id\": ids[i], \"need_user\": 0})"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BatchScript {
    method: ApiMethod,
    id_param: &'static str,
    params: Vec<(&'static str, ScriptValue)>,
    ids: Vec<i64>,
    collect: Collect,
}

impl BatchScript {
    /// Fails with [`VkError::BatchTooLarge`] for more than [`MAX_EXECUTE_BATCH_SIZE`] ids
    pub fn new(
        method: ApiMethod,
        id_param: &'static str,
        ids: &[i64],
        collect: Collect,
    ) -> Result<Self, VkError> {
        if ids.len() > MAX_EXECUTE_BATCH_SIZE {
            return Err(VkError::BatchTooLarge {
                size: ids.len(),
                max: MAX_EXECUTE_BATCH_SIZE,
            });
        }

        Ok(Self {
            method,
            id_param,
            params: Vec::new(),
            ids: ids.to_vec(),
            collect,
        })
    }

    /// Adds a fixed argument to every per-id call
    pub fn param(mut self, key: &'static str, value: impl Into<ScriptValue>) -> Self {
        self.params.push((key, value.into()));
        self
    }

    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl fmt::Display for BatchScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids = self
            .ids
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        let mut args = vec![format!("{}: ids[i]", quote(self.id_param)?)];
        for (key, value) in &self.params {
            args.push(format!("{}: {value}", quote(key)?));
        }

        writeln!(f, "var ids = [{ids}];")?;
        writeln!(f, "var data = [];")?;
        writeln!(f, "var i = 0;")?;
        writeln!(f, "while (i < ids.length) {{")?;
        writeln!(
            f,
            "    var response = API.{}({{{}}});",
            self.method.as_str(),
            args.join(", ")
        )?;
        match self.collect {
            Collect::First => writeln!(f, "    data.push(response[0]);")?,
            Collect::Items => {
                writeln!(f, "    if (response) {{")?;
                writeln!(f, "        data = data + response.items;")?;
                writeln!(f, "    }}")?;
            }
        }
        writeln!(f, "    i = i + 1;")?;
        writeln!(f, "}}")?;
        write!(f, "return data;")
    }
}

/// Field read back out of a batch result to attach it to the id it answers
pub trait BatchKey {
    fn batch_key(&self) -> i64;
}

/// Lines results up with `ids` by key, so slot `i` answers `ids[i]` whatever order
/// the reply arrived in.
pub fn order_by_key<I>(ids: &[i64], items: Vec<Option<I>>) -> Vec<Option<I>>
where
    I: BatchKey + Clone,
{
    let by_key: HashMap<i64, I> = items
        .into_iter()
        .flatten()
        .map(|item| (item.batch_key(), item))
        .collect();

    ids.iter().map(|id| by_key.get(id).cloned()).collect()
}

/// Groups a flattened reply by key. Every id in `ids` gets an entry, empty when
/// nothing came back for it.
pub fn group_by_key<I: BatchKey>(ids: &[i64], items: Vec<I>) -> HashMap<i64, Vec<I>> {
    let mut groups: HashMap<i64, Vec<I>> = ids.iter().map(|id| (*id, Vec::new())).collect();
    for item in items {
        groups.entry(item.batch_key()).or_default().push(item);
    }
    groups
}

/// Runs a [`Collect::First`] script and returns one slot per requested id
pub(crate) async fn execute_ordered<T, I>(
    client: &Client<T>,
    script: &BatchScript,
) -> Result<Vec<Option<I>>, VkError>
where
    T: Transport,
    I: DeserializeOwned + BatchKey + Clone,
{
    if script.is_empty() {
        return Ok(Vec::new());
    }
    let items = client.execute::<Vec<Option<I>>>(script).await?;
    Ok(order_by_key(script.ids(), items))
}

/// Runs a [`Collect::Items`] script and groups the items per requested id
pub(crate) async fn execute_grouped<T, I>(
    client: &Client<T>,
    script: &BatchScript,
) -> Result<HashMap<i64, Vec<I>>, VkError>
where
    T: Transport,
    I: DeserializeOwned + BatchKey,
{
    if script.is_empty() {
        return Ok(HashMap::new());
    }
    let items = client.execute::<Vec<I>>(script).await?;
    Ok(group_by_key(script.ids(), items))
}

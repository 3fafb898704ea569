//! Per-resource response envelope contracts.
//!
//! The remote API wraps payloads in `{status, data}`, but some resources nest
//! a second `data` level. Each service declares its shape here instead of
//! guessing at call sites.

use crate::domain::response::{Paginated, Pagination};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::errors::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nesting {
    /// `{status, data: T}`
    Single,
    /// `{status, data: {data: T, ...}}`
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvelopeContract {
    pub list: Nesting,
    pub item: Nesting,
    pub mutation: Nesting,
}

pub const ACCOUNTS: EnvelopeContract = EnvelopeContract {
    list: Nesting::Double,
    item: Nesting::Single,
    mutation: Nesting::Single,
};

pub const NEWS: EnvelopeContract = EnvelopeContract {
    list: Nesting::Double,
    item: Nesting::Double,
    mutation: Nesting::Single,
};

pub const PRAYER_ROOMS: EnvelopeContract = EnvelopeContract {
    list: Nesting::Double,
    item: Nesting::Single,
    mutation: Nesting::Single,
};

pub const ACTIVITIES: EnvelopeContract = EnvelopeContract {
    list: Nesting::Single,
    item: Nesting::Single,
    mutation: Nesting::Single,
};

pub const SYSTEM_LOGS: EnvelopeContract = EnvelopeContract {
    list: Nesting::Double,
    item: Nesting::Single,
    mutation: Nesting::Single,
};

pub const DASHBOARD: EnvelopeContract = EnvelopeContract {
    list: Nesting::Single,
    item: Nesting::Single,
    mutation: Nesting::Single,
};

pub const AUTH: EnvelopeContract = EnvelopeContract {
    list: Nesting::Single,
    item: Nesting::Single,
    mutation: Nesting::Single,
};

fn take_data(mut value: Value, level: &str) -> Result<Value, ClientError> {
    match value.get_mut("data") {
        Some(data) => Ok(data.take()),
        None => Err(ClientError::decode(format!("missing `data` at {level} level"))),
    }
}

fn take_pagination(container: &mut Value) -> Result<Option<Pagination>, ClientError> {
    let raw = ["pagination", "meta"]
        .iter()
        .find_map(|key| container.get_mut(*key).map(Value::take))
        .filter(|v| !v.is_null());

    raw.map(|v| {
        serde_json::from_value(v).map_err(|e| ClientError::decode(format!("invalid pagination: {e}")))
    })
    .transpose()
}

pub fn unwrap_envelope<T: DeserializeOwned>(body: Value, nesting: Nesting) -> Result<T, ClientError> {
    let outer = take_data(body, "outer")?;
    let payload = match nesting {
        Nesting::Single => outer,
        Nesting::Double => take_data(outer, "inner")?,
    };

    serde_json::from_value(payload).map_err(|e| ClientError::decode(e.to_string()))
}

pub fn unwrap_page<T: DeserializeOwned>(
    mut body: Value,
    nesting: Nesting,
) -> Result<Paginated<T>, ClientError> {
    let (items, pagination) = match nesting {
        Nesting::Single => {
            let pagination = take_pagination(&mut body)?;
            (take_data(body, "outer")?, pagination)
        }
        Nesting::Double => {
            let mut inner = take_data(body, "outer")?;
            let pagination = take_pagination(&mut inner)?;
            (take_data(inner, "inner")?, pagination)
        }
    };

    let data = serde_json::from_value(items).map_err(|e| ClientError::decode(e.to_string()))?;

    Ok(Paginated { data, pagination })
}

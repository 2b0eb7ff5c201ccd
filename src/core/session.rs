use std::collections::HashMap;

use serde_json::Value;

use crate::common::{debug, ErrorKind, Result};
use crate::core::UserId;

/// Session key holding the identifier of the logged-in user.
pub const USER_ID_KEY: &str = "user_id";

/// Session data attached to one request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    values: HashMap<String, Value>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a session from a json object such as `{"user_id": "u1"}`.
    pub fn from_json(s: &str) -> crate::Result<Self> {
        Session::parse_json(s).map_err(Into::into)
    }

    fn parse_json(s: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(s)? {
            Value::Object(map) => Ok(Self {
                values: map.into_iter().collect(),
            }),
            other => Err(ErrorKind::InvalidSession {
                description: format!("expect json object, got {}", other),
            }
            .into()),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    /// Identifier stored under [`USER_ID_KEY`].
    ///
    /// Strings are used verbatim and integers in decimal form. Null and any
    /// other json type cannot name a user and yield `None`.
    pub fn user_id(&self) -> Option<UserId> {
        match self.get(USER_ID_KEY)? {
            Value::String(id) => Some(UserId::new(id.as_str())),
            Value::Number(n) if n.is_i64() || n.is_u64() => Some(UserId::new(n.to_string())),
            Value::Null => None,
            other => {
                debug!(value=%other, "Ignore unusable user id in session");
                None
            }
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Session {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

use serde::Deserialize;

use crate::core::{LookupFailure, User, UserId};

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub users: Vec<UserEntry>,
    #[serde(default)]
    pub on_lookup_error: LookupFailure,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UserEntry {
    pub id: UserId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub admin: bool,
}

impl From<UserEntry> for User {
    fn from(entry: UserEntry) -> Self {
        let user = User::new(entry.id).with_admin(entry.admin);
        match entry.name {
            Some(name) => user.with_name(name),
            None => user,
        }
    }
}

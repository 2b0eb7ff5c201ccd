use serde::Deserialize;

use crate::core;

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub identity: core::Config,
}

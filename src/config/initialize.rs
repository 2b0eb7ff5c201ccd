use std::path::Path;
use std::sync::Arc;

use tokio::fs;

use crate::common::{debug, Result};
use crate::config::Config;
use crate::core::{IdentityResolver, MemoryStore};

#[derive(Debug)]
pub struct Initializer {
    pub config: Config,
}

impl Initializer {
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    pub async fn load_config_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        Initializer::load(path.as_ref()).await.map_err(Into::into)
    }

    async fn load(path: &Path) -> Result<Self> {
        debug!("Load config file {}", path.display());
        let f = fs::File::open(path).await?;
        let config = serde_yaml::from_reader::<_, Config>(f.into_std().await)?;

        Ok(Self { config })
    }

    pub fn build_resolver(self) -> IdentityResolver<Arc<MemoryStore>> {
        let identity = self.config.identity;
        let store = Arc::new(MemoryStore::from_entries(identity.users));

        IdentityResolver::new(store).with_lookup_failure(identity.on_lookup_error)
    }
}

//! Seam between the interactive flows and the network.

use profilegen_lookup::Lookup;
use profilegen_shared::{Result, ToolCatalog};

/// The two remote calls the shell makes.
pub(crate) trait RemoteLookup {
    async fn user_exists(&self, username: &str) -> Result<bool>;
    async fn fetch_catalog(&self) -> Result<ToolCatalog>;
}

impl RemoteLookup for Lookup {
    async fn user_exists(&self, username: &str) -> Result<bool> {
        Lookup::user_exists(self, username).await
    }

    async fn fetch_catalog(&self) -> Result<ToolCatalog> {
        Lookup::fetch_catalog(self).await
    }
}

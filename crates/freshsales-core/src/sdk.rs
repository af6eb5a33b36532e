//! Single entry point bundling the four resource façades

use std::sync::Arc;
use crate::clients::{HttpTransport, Transport};
use crate::config::FreshsalesConfig;
use crate::error::Result;
use crate::resources::{Accounts, Contacts, Deals, Leads};

/// Read access to one Freshsales account
#[derive(Clone)]
pub struct FreshsalesSdk {
    pub contacts: Contacts,
    pub accounts: Accounts,
    pub deals: Deals,
    pub leads: Leads,
}

impl FreshsalesSdk {
    /// Client for `https://{domain}.freshsales.io`
    pub fn new(domain: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(&FreshsalesConfig::new(domain, api_key))
    }

    pub fn from_config(config: &FreshsalesConfig) -> Result<Self> {
        let transport = HttpTransport::new(config)?;
        log::debug!("Freshsales client ready for {}", transport.base_url());
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Client configured from `FRESHSALES_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_config(&FreshsalesConfig::from_env()?)
    }

    /// Build the façades over any transport (mainly for testing)
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            contacts: Contacts::new(Arc::clone(&transport)),
            accounts: Accounts::new(Arc::clone(&transport)),
            deals: Deals::new(Arc::clone(&transport)),
            leads: Leads::new(transport),
        }
    }
}

//! Freshsales Core Library
//!
//! Read-only client for the Freshsales CRM API: paginated view listings,
//! single-record lookups and views for contacts, accounts, deals and leads,
//! with referenced objects (owners, stages, statuses, appointments) folded
//! into each record.

pub mod config;
pub mod clients;
pub mod resources;
pub mod sdk;
pub mod error;

// Re-export main types for easy access
pub use config::FreshsalesConfig;
pub use error::{FreshsalesError, Result};
pub use sdk::FreshsalesSdk;

pub use clients::{HttpTransport, QueryParams, Transport};

pub use resources::{
    Accounts,
    Contacts,
    Deals,
    Leads,
    Resource,
    ResourceKind,
    ResourceSpec,
};

pub use freshsales_types::{PageMeta, Record, View};

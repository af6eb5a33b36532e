//! Accounts, deals and leads façades
//!
//! These only differ from [`Resource`] by their fixed kind.

use std::ops::Deref;
use std::sync::Arc;
use crate::clients::Transport;
use super::{Resource, ResourceKind};

#[derive(Clone)]
pub struct Accounts {
    resource: Resource,
}

impl Accounts {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            resource: Resource::new(ResourceKind::Accounts, transport),
        }
    }
}

impl Deref for Accounts {
    type Target = Resource;

    fn deref(&self) -> &Resource {
        &self.resource
    }
}

#[derive(Clone)]
pub struct Deals {
    resource: Resource,
}

impl Deals {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            resource: Resource::new(ResourceKind::Deals, transport),
        }
    }
}

impl Deref for Deals {
    type Target = Resource;

    fn deref(&self) -> &Resource {
        &self.resource
    }
}

#[derive(Clone)]
pub struct Leads {
    resource: Resource,
}

impl Leads {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            resource: Resource::new(ResourceKind::Leads, transport),
        }
    }
}

impl Deref for Leads {
    type Target = Resource;

    fn deref(&self) -> &Resource {
        &self.resource
    }
}

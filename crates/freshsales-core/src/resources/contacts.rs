//! Contacts façade

use serde_json::Value;
use std::fmt::Display;
use std::ops::Deref;
use std::sync::Arc;
use crate::clients::{QueryParams, Transport};
use crate::error::Result;
use super::{take_array, Resource, ResourceKind};

/// Contacts, with the contact-only activity and appointment endpoints
#[derive(Clone)]
pub struct Contacts {
    resource: Resource,
}

impl Contacts {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            resource: Resource::new(ResourceKind::Contacts, transport),
        }
    }

    /// Activity timeline of a contact, as returned by the API
    pub async fn get_activities(&self, id: impl Display) -> Result<Vec<Value>> {
        self.get_sub_list(id, "activities").await
    }

    /// Appointments of a contact, as returned by the API
    pub async fn get_appointments(&self, id: impl Display) -> Result<Vec<Value>> {
        self.get_sub_list(id, "appointments").await
    }

    async fn get_sub_list(&self, id: impl Display, key: &str) -> Result<Vec<Value>> {
        let path = format!("/{}/{}/{}", self.spec().resource_type, id, key);
        let mut response = self.resource.get(&path, &QueryParams::new()).await?;
        take_array(&mut response, key)
    }
}

impl Deref for Contacts {
    type Target = Resource;

    fn deref(&self) -> &Resource {
        &self.resource
    }
}

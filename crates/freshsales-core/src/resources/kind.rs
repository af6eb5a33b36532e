//! Static per-resource configuration
//!
//! Everything that differs between contacts, accounts, deals and leads lives
//! in one `ResourceSpec` table entry: endpoint names, default query params and
//! the foreign-key links the normalizer resolves.

use std::fmt;
use crate::clients::QueryParams;

/// A foreign-key field resolved against a sibling array of the same response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    /// Field on the record holding the referenced id (`owner_id`)
    pub foreign_key: &'static str,
    /// Top-level array in the response holding the referenced objects (`users`)
    pub sibling: &'static str,
    /// Field the resolved object is stored under (`owner`)
    pub attach_as: &'static str,
}

impl Link {
    pub const fn new(foreign_key: &'static str, sibling: &'static str, attach_as: &'static str) -> Self {
        Self { foreign_key, sibling, attach_as }
    }
}

/// An id-list field whose resolved objects carry a link of their own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLink {
    pub ids_field: &'static str,
    pub sibling: &'static str,
    pub attach_as: &'static str,
    pub nested: Link,
}

#[derive(Debug)]
pub struct ResourceSpec {
    /// Plural endpoint name, also the key of the item array in page responses
    pub resource_type: &'static str,
    /// Key of the record in single-record responses, when it is not simply
    /// the plural minus its last character
    pub singular_override: Option<&'static str>,
    pub default_params: &'static [(&'static str, &'static str)],
    pub links: &'static [Link],
    /// Copy the response's `notes` array to `notes_history`
    pub notes_history: bool,
    pub list_links: &'static [ListLink],
}

impl ResourceSpec {
    pub fn singular(&self) -> &'static str {
        if let Some(singular) = self.singular_override {
            return singular;
        }
        let mut chars = self.resource_type.chars();
        chars.next_back();
        chars.as_str()
    }

    pub fn default_query(&self) -> QueryParams {
        self.default_params.iter().copied().collect()
    }
}

const OWNER: Link = Link::new("owner_id", "users", "owner");

const SORT_BY_UPDATED: [(&str, &str); 2] = [("sort", "updated_at"), ("sort_type", "desc")];

static CONTACTS: ResourceSpec = ResourceSpec {
    resource_type: "contacts",
    singular_override: None,
    default_params: &[
        ("include", "sales_accounts,owner,contact_status,notes"),
        SORT_BY_UPDATED[0],
        SORT_BY_UPDATED[1],
    ],
    links: &[OWNER, Link::new("contact_status_id", "contact_status", "contact_status")],
    notes_history: true,
    list_links: &[ListLink {
        ids_field: "appointment_ids",
        sibling: "appointments",
        attach_as: "appointments",
        nested: Link::new("outcome_id", "outcomes", "outcome"),
    }],
};

static ACCOUNTS: ResourceSpec = ResourceSpec {
    resource_type: "sales_accounts",
    singular_override: None,
    default_params: &[
        ("include", "appointments,owner,industry_type,notes"),
        SORT_BY_UPDATED[0],
        SORT_BY_UPDATED[1],
    ],
    links: &[OWNER, Link::new("industry_type_id", "industry_types", "industry_type")],
    notes_history: true,
    list_links: &[],
};

static DEALS: ResourceSpec = ResourceSpec {
    resource_type: "deals",
    singular_override: None,
    default_params: &[
        ("include", "sales_account,appointments,owner,deal_stage,notes"),
        SORT_BY_UPDATED[0],
        SORT_BY_UPDATED[1],
    ],
    links: &[
        OWNER,
        Link::new("sales_account_id", "sales_accounts", "sales_account"),
        Link::new("deal_stage_id", "deal_stages", "deal_stage"),
    ],
    notes_history: true,
    list_links: &[],
};

static LEADS: ResourceSpec = ResourceSpec {
    resource_type: "leads",
    singular_override: None,
    default_params: &[
        ("include", "sales_account,appointments,owner,lead_stage,notes"),
        SORT_BY_UPDATED[0],
        SORT_BY_UPDATED[1],
    ],
    links: &[OWNER, Link::new("lead_stage_id", "lead_stages", "lead_stage")],
    notes_history: true,
    list_links: &[],
};

/// The four resource kinds the API exposes for reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Contacts,
    Accounts,
    Deals,
    Leads,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Contacts,
        ResourceKind::Accounts,
        ResourceKind::Deals,
        ResourceKind::Leads,
    ];

    pub fn spec(self) -> &'static ResourceSpec {
        match self {
            ResourceKind::Contacts => &CONTACTS,
            ResourceKind::Accounts => &ACCOUNTS,
            ResourceKind::Deals => &DEALS,
            ResourceKind::Leads => &LEADS,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec().resource_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_singular_drops_last_character() {
        assert_eq!(ResourceKind::Contacts.spec().singular(), "contact");
        assert_eq!(ResourceKind::Accounts.spec().singular(), "sales_account");
        assert_eq!(ResourceKind::Deals.spec().singular(), "deal");
        assert_eq!(ResourceKind::Leads.spec().singular(), "lead");
    }

    #[test]
    fn test_singular_override_wins() {
        let spec = ResourceSpec {
            resource_type: "activities",
            singular_override: Some("activity"),
            default_params: &[],
            links: &[],
            notes_history: false,
            list_links: &[],
        };
        assert_eq!(spec.singular(), "activity");
    }

    #[test]
    fn test_every_kind_sorts_by_last_update() {
        for kind in ResourceKind::ALL {
            let query = kind.spec().default_query();
            assert_eq!(query.get("sort"), Some(&json!("updated_at")), "{}", kind);
            assert_eq!(query.get("sort_type"), Some(&json!("desc")), "{}", kind);
            assert!(query.get("include").is_some(), "{}", kind);
        }
    }

    #[test]
    fn test_every_kind_resolves_owner() {
        for kind in ResourceKind::ALL {
            assert!(kind.spec().links.contains(&OWNER), "{}", kind);
        }
    }
}

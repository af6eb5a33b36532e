//! Page-local denormalization of records
//!
//! List and single-record responses carry referenced objects (users, stages,
//! statuses, appointments) as top-level sibling arrays next to the records.
//! `normalize` copies the referenced objects onto each record so callers do
//! not have to join them back themselves. Lookups never leave the response:
//! an id that is not in the sibling array simply resolves to nothing.

use serde_json::{Map, Value};
use freshsales_types::Record;
use super::kind::{Link, ListLink, ResourceSpec};

/// First element of `objs` whose `id` equals `id`
pub fn find_by_id<'a>(objs: &'a [Value], id: &Value) -> Option<&'a Value> {
    objs.iter().find(|obj| obj.get("id") == Some(id))
}

fn sibling<'a>(container: &'a Value, key: &str) -> Option<&'a [Value]> {
    container.get(key)?.as_array().map(Vec::as_slice)
}

fn resolve(link: &Link, fields: &Map<String, Value>, container: &Value) -> Option<Value> {
    let id = fields.get(link.foreign_key).filter(|id| !id.is_null())?;
    let objs = sibling(container, link.sibling)?;
    find_by_id(objs, id).cloned()
}

fn resolve_list(link: &ListLink, record: &Record, container: &Value) -> Option<Vec<Value>> {
    let ids = record.get(link.ids_field)?.as_array()?;
    let objs = sibling(container, link.sibling)?;

    let mut resolved = Vec::with_capacity(ids.len());
    for id in ids {
        let Some(found) = find_by_id(objs, id) else {
            log::warn!(
                "{} {} of record {} not present in response, skipping",
                link.sibling,
                id,
                record.get("id").unwrap_or(&Value::Null)
            );
            continue;
        };

        let mut obj = found.clone();
        if let Some(fields) = obj.as_object_mut() {
            if let Some(nested) = resolve(&link.nested, fields, container) {
                fields.insert(link.nested.attach_as.to_string(), nested);
            }
        }
        resolved.push(obj);
    }

    Some(resolved)
}

/// Attach every object `spec` links to, in place.
///
/// Each link is independent: a missing id field, a missing sibling array or an
/// unknown id only skips that one attachment.
pub fn normalize(spec: &ResourceSpec, record: &mut Record, container: &Value) {
    if spec.notes_history {
        if let Some(notes) = container.get("notes") {
            record.insert("notes_history".to_string(), notes.clone());
        }
    }

    for link in spec.links {
        if let Some(obj) = resolve(link, record, container) {
            record.insert(link.attach_as.to_string(), obj);
        }
    }

    for link in spec.list_links {
        if let Some(objs) = resolve_list(link, record, container) {
            record.insert(link.attach_as.to_string(), Value::Array(objs));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::ResourceKind;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("fixture is not an object: {}", other),
        }
    }

    #[test]
    fn test_find_by_id_returns_first_match() {
        let objs = vec![json!({"id": 1, "n": "a"}), json!({"id": 2}), json!({"id": 1, "n": "b"})];
        assert_eq!(find_by_id(&objs, &json!(1)), Some(&json!({"id": 1, "n": "a"})));
        assert_eq!(find_by_id(&objs, &json!(3)), None);
        assert_eq!(find_by_id(&objs, &json!("1")), None);
    }

    #[test]
    fn test_contact_with_unknown_owner_gets_no_owner() {
        let mut contact = record(json!({"id": 10, "owner_id": 99}));
        let container = json!({"users": [{"id": 1, "display_name": "Ann"}]});

        normalize(ResourceKind::Contacts.spec(), &mut contact, &container);

        assert!(contact.get("owner").is_none());
        assert_eq!(contact["owner_id"], json!(99));
    }

    #[test]
    fn test_contact_full_normalization() {
        let mut contact = record(json!({
            "id": 10,
            "owner_id": 1,
            "contact_status_id": 5,
            "appointment_ids": [100, 101]
        }));
        let container = json!({
            "users": [{"id": 1, "display_name": "Ann"}],
            "contact_status": [{"id": 5, "name": "Qualified"}],
            "notes": [{"id": 7, "description": "called"}],
            "appointments": [
                {"id": 100, "title": "Demo", "outcome_id": 3},
                {"id": 101, "title": "Kickoff", "outcome_id": 4}
            ],
            "outcomes": [{"id": 3, "name": "Interested"}]
        });

        normalize(ResourceKind::Contacts.spec(), &mut contact, &container);

        assert_eq!(contact["owner"], json!({"id": 1, "display_name": "Ann"}));
        assert_eq!(contact["contact_status"], json!({"id": 5, "name": "Qualified"}));
        assert_eq!(contact["notes_history"], json!([{"id": 7, "description": "called"}]));
        assert_eq!(
            contact["appointments"],
            json!([
                {"id": 100, "title": "Demo", "outcome_id": 3, "outcome": {"id": 3, "name": "Interested"}},
                {"id": 101, "title": "Kickoff", "outcome_id": 4}
            ])
        );
    }

    #[test]
    fn test_missing_appointment_is_skipped() {
        let mut contact = record(json!({"id": 10, "appointment_ids": [100, 404]}));
        let container = json!({
            "appointments": [{"id": 100, "outcome_id": null}],
            "outcomes": [{"id": 3}]
        });

        normalize(ResourceKind::Contacts.spec(), &mut contact, &container);

        assert_eq!(contact["appointments"], json!([{"id": 100, "outcome_id": null}]));
    }

    #[test]
    fn test_appointments_left_alone_without_sibling_array() {
        let mut contact = record(json!({"id": 10, "appointment_ids": [100]}));

        normalize(ResourceKind::Contacts.spec(), &mut contact, &json!({}));

        assert!(contact.get("appointments").is_none());
        assert!(contact.get("notes_history").is_none());
    }

    #[test]
    fn test_deal_links_resolve_independently() {
        let spec = ResourceKind::Deals.spec();
        let container = json!({
            "users": [{"id": 1}],
            "sales_accounts": [{"id": 2, "name": "Acme"}],
            "deal_stages": [{"id": 3, "name": "Won"}]
        });

        let mut full = record(json!({"id": 9, "owner_id": 1, "sales_account_id": 2, "deal_stage_id": 3}));
        normalize(spec, &mut full, &container);
        assert_eq!(full["owner"], json!({"id": 1}));
        assert_eq!(full["sales_account"], json!({"id": 2, "name": "Acme"}));
        assert_eq!(full["deal_stage"], json!({"id": 3, "name": "Won"}));

        let mut partial = record(json!({"id": 9, "owner_id": 1, "deal_stage_id": 3}));
        let no_stages = json!({"users": [{"id": 1}], "sales_accounts": [{"id": 2}]});
        normalize(spec, &mut partial, &no_stages);
        assert!(partial.contains_key("owner"));
        assert!(!partial.contains_key("sales_account"));
        assert!(!partial.contains_key("deal_stage"));
    }

    #[test]
    fn test_account_industry_type() {
        let mut account = record(json!({"id": 4, "industry_type_id": 8, "owner_id": null}));
        let container = json!({
            "industry_types": [{"id": 8, "name": "Retail"}],
            "users": [{"id": 1}],
            "notes": []
        });

        normalize(ResourceKind::Accounts.spec(), &mut account, &container);

        assert_eq!(account["industry_type"], json!({"id": 8, "name": "Retail"}));
        assert_eq!(account["notes_history"], json!([]));
        assert!(!account.contains_key("owner"));
    }

    #[test]
    fn test_lead_stage() {
        let mut lead = record(json!({"id": 6, "lead_stage_id": 2}));
        let container = json!({"lead_stages": [{"id": 1}, {"id": 2, "name": "New"}]});

        normalize(ResourceKind::Leads.spec(), &mut lead, &container);

        assert_eq!(lead["lead_stage"], json!({"id": 2, "name": "New"}));
    }
}

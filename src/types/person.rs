// src/types/person.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Normalized employee record returned by a company lookup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    pub profile_url: String,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub company: String,
}

impl PersonRecord {
    /// Map a raw provider record. Missing or non-string fields become empty;
    /// an empty organization name falls back to `requested_company`.
    pub fn from_raw(raw: &Value, requested_company: &str) -> Self {
        let company = string_field(raw, "organization_name");

        Self {
            profile_url: string_field(raw, "linkedin_url"),
            first_name: string_field(raw, "first_name"),
            last_name: string_field(raw, "last_name"),
            title: string_field(raw, "title"),
            company: if company.is_empty() {
                requested_company.to_string()
            } else {
                company
            },
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Organization picked by the company search; lives for one lookup only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCompany {
    pub id: String,
    pub name: String,
    pub domain: String,
}

impl ResolvedCompany {
    /// `None` when the candidate carries no usable identifier
    pub fn from_raw(raw: &Value) -> Option<Self> {
        let id = match raw.get("id")? {
            Value::String(id) if !id.is_empty() => id.clone(),
            Value::Number(id) => id.to_string(),
            _ => return None,
        };

        Some(Self {
            id,
            name: string_field(raw, "name"),
            domain: string_field(raw, "domain"),
        })
    }
}

pub(crate) fn string_field(raw: &Value, key: &str) -> String {
    raw.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_raw_all_fields() {
        let raw = json!({
            "linkedin_url": "http://www.linkedin.com/in/satya",
            "first_name": "Satya",
            "last_name": "Nadella",
            "title": "CEO",
            "organization_name": "Microsoft Corporation"
        });

        let person = PersonRecord::from_raw(&raw, "microsoft");
        assert_eq!(person.profile_url, "http://www.linkedin.com/in/satya");
        assert_eq!(person.first_name, "Satya");
        assert_eq!(person.last_name, "Nadella");
        assert_eq!(person.title, "CEO");
        assert_eq!(person.company, "Microsoft Corporation");
        assert_eq!(person.full_name(), "Satya Nadella");
    }

    #[test]
    fn test_from_raw_missing_fields() {
        let raw = json!({ "first_name": "Amy", "title": null, "last_name": 42 });

        let person = PersonRecord::from_raw(&raw, "Microsoft");
        assert_eq!(person.profile_url, "");
        assert_eq!(person.first_name, "Amy");
        assert_eq!(person.last_name, "");
        assert_eq!(person.title, "");
        assert_eq!(person.company, "Microsoft");
    }

    #[test]
    fn test_from_raw_empty_organization_uses_requested() {
        let raw = json!({ "organization_name": "" });
        assert_eq!(PersonRecord::from_raw(&raw, "Acme").company, "Acme");
    }

    #[test]
    fn test_serializes_camel_case() {
        let person = PersonRecord {
            profile_url: "u".to_string(),
            first_name: "f".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(json["profileUrl"], "u");
        assert_eq!(json["firstName"], "f");
        assert_eq!(json["lastName"], "");
    }

    #[test]
    fn test_resolved_company_from_raw() {
        let company = ResolvedCompany::from_raw(
            &json!({ "id": "123", "name": "Microsoft", "domain": "microsoft.com" }),
        )
        .unwrap();
        assert_eq!(company.id, "123");
        assert_eq!(company.name, "Microsoft");
        assert_eq!(company.domain, "microsoft.com");

        assert!(ResolvedCompany::from_raw(&json!({ "name": "No Id" })).is_none());
        assert_eq!(ResolvedCompany::from_raw(&json!({ "id": 7 })).unwrap().id, "7");
    }
}

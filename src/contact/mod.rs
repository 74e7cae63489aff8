mod api;

pub use api::{ContactApi, HttpContactApi, CONTACTS_PATH};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ContactsError;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Inactive,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ContactsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Status::Active),
            "inactive" => Ok(Status::Inactive),
            _ => Err(ContactsError::InvalidStatus(s.to_string())),
        }
    }
}

/// A contact as stored by the server. `id` is assigned by the backend and
/// travels as `_id` on the wire. Missing name parts decode as empty and a
/// missing status as active; a status outside active/inactive is rejected.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub status: Status,
}

impl Contact {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn fields(&self) -> ContactFields {
        ContactFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            status: self.status,
        }
    }
}

/// Request body for create and full-replace update.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContactFields {
    pub first_name: String,
    pub last_name: String,
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_uses_wire_field_names() {
        let json = r#"{"_id":"1","firstName":"X","lastName":"Y","status":"inactive","__v":0}"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.id, "1");
        assert_eq!(contact.first_name, "X");
        assert_eq!(contact.last_name, "Y");
        assert_eq!(contact.status, Status::Inactive);
        assert_eq!(contact.display_name(), "X Y");
    }

    #[test]
    fn test_contact_missing_fields_default() {
        let json = r#"[{"_id":"1","firstName":"Cher"},{"_id":"2","lastName":"Solo","status":"inactive"}]"#;
        let contacts: Vec<Contact> = serde_json::from_str(json).unwrap();
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].last_name, "");
        assert_eq!(contacts[0].status, Status::Active);
        assert_eq!(contacts[1].first_name, "");
        assert_eq!(contacts[1].status, Status::Inactive);
    }

    #[test]
    fn test_contact_unknown_status_rejected() {
        let json = r#"[{"_id":"1","firstName":"A","lastName":"B","status":"archived"}]"#;
        assert!(serde_json::from_str::<Vec<Contact>>(json).is_err());

        // id is the one field that must always be present
        assert!(serde_json::from_str::<Contact>(r#"{"firstName":"A"}"#).is_err());
    }

    #[test]
    fn test_fields_body_shape() {
        let fields = ContactFields {
            first_name: "A".into(),
            last_name: "B".into(),
            status: Status::Active,
        };
        let value = serde_json::to_value(&fields).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"firstName": "A", "lastName": "B", "status": "active"})
        );
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("active".parse::<Status>().unwrap(), Status::Active);
        assert_eq!(" Inactive ".parse::<Status>().unwrap(), Status::Inactive);
        assert!(matches!(
            "archived".parse::<Status>(),
            Err(ContactsError::InvalidStatus(s)) if s == "archived"
        ));
        assert_eq!(Status::default(), Status::Active);
    }
}

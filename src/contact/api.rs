use std::time::Duration;

use tracing::debug;
use ureq::Agent;
use url::Url;

use super::{Contact, ContactFields};
use crate::error::{ContactsError, Result};

/// Collection path relative to the API base URL
pub const CONTACTS_PATH: &str = "/api/contacts";

/// The remote contacts API. One method per endpoint.
///
/// `create` and `update` hand back the server's copy of the contact when the
/// response body parses as one; callers that only re-fetch can ignore it.
pub trait ContactApi {
    fn list(&self) -> Result<Vec<Contact>>;
    fn create(&self, fields: &ContactFields) -> Result<Option<Contact>>;
    fn update(&self, id: &str, fields: &ContactFields) -> Result<Option<Contact>>;
    fn delete(&self, id: &str) -> Result<()>;
}

/// Blocking JSON client for the contacts API
pub struct HttpContactApi {
    agent: Agent,
    base_url: String,
}

impl HttpContactApi {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, CONTACTS_PATH)
    }

    /// Item URL with `id` encoded as a single path segment
    fn contact_url(&self, id: &str) -> Result<String> {
        if id.is_empty() {
            return Err(ContactsError::EmptyContactId);
        }

        let collection = self.collection_url();
        let invalid = |reason: String| ContactsError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        };
        let mut url = Url::parse(&collection).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("cannot have path segments".to_string()))?
            .push(id);

        Ok(url.into())
    }

    fn send_json(&self, method: WriteMethod, url: String, fields: &ContactFields) -> Result<String> {
        let payload = serde_json::to_string(fields).map_err(ContactsError::Encode)?;
        let method_name = method.as_str();
        debug!(method = method_name, %url, %payload, "sending request");

        let request = match method {
            WriteMethod::Post => self.agent.post(&url),
            WriteMethod::Put => self.agent.put(&url),
        };

        request
            .header("Content-Type", "application/json")
            .send(payload)
            .and_then(|mut response| response.body_mut().read_to_string())
            .map_err(|source| ContactsError::Network {
                method: method_name,
                url,
                source,
            })
    }
}

#[derive(Debug, Clone, Copy)]
enum WriteMethod {
    Post,
    Put,
}

impl WriteMethod {
    fn as_str(self) -> &'static str {
        match self {
            WriteMethod::Post => "POST",
            WriteMethod::Put => "PUT",
        }
    }
}

fn parse_returned_contact(body: &str) -> Option<Contact> {
    match serde_json::from_str(body) {
        Ok(contact) => Some(contact),
        Err(e) => {
            debug!(error = %e, "response body is not a contact");
            None
        }
    }
}

impl ContactApi for HttpContactApi {
    fn list(&self) -> Result<Vec<Contact>> {
        let url = self.collection_url();
        debug!(%url, "fetching contacts");

        let body = self
            .agent
            .get(&url)
            .call()
            .and_then(|mut response| response.body_mut().read_to_string())
            .map_err(|source| ContactsError::Network {
                method: "GET",
                url: url.clone(),
                source,
            })?;

        serde_json::from_str(&body).map_err(|source| ContactsError::Decode { url, source })
    }

    fn create(&self, fields: &ContactFields) -> Result<Option<Contact>> {
        let body = self.send_json(WriteMethod::Post, self.collection_url(), fields)?;
        Ok(parse_returned_contact(&body))
    }

    fn update(&self, id: &str, fields: &ContactFields) -> Result<Option<Contact>> {
        let body = self.send_json(WriteMethod::Put, self.contact_url(id)?, fields)?;
        Ok(parse_returned_contact(&body))
    }

    fn delete(&self, id: &str) -> Result<()> {
        let url = self.contact_url(id)?;
        debug!(%url, "deleting contact");

        // Response body is ignored
        self.agent
            .delete(&url)
            .call()
            .map_err(|source| ContactsError::Network {
                method: "DELETE",
                url,
                source,
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_strip_trailing_slash() {
        let api = HttpContactApi::new("http://localhost:5000/", Duration::from_secs(1));
        assert_eq!(api.base_url(), "http://localhost:5000");
        assert_eq!(api.collection_url(), "http://localhost:5000/api/contacts");
        assert_eq!(
            api.contact_url("42").unwrap(),
            "http://localhost:5000/api/contacts/42"
        );
    }

    #[test]
    fn test_contact_url_encodes_id_as_one_segment() {
        let api = HttpContactApi::new("http://localhost:5000", Duration::from_secs(1));
        assert_eq!(
            api.contact_url("a/b?c").unwrap(),
            "http://localhost:5000/api/contacts/a%2Fb%3Fc"
        );
        assert_eq!(
            api.contact_url("1?all=true").unwrap(),
            "http://localhost:5000/api/contacts/1%3Fall=true"
        );
    }

    #[test]
    fn test_contact_url_rejects_empty_id() {
        let api = HttpContactApi::new("http://localhost:5000", Duration::from_secs(1));
        assert!(matches!(
            api.contact_url(""),
            Err(ContactsError::EmptyContactId)
        ));
    }

    #[test]
    fn test_contact_url_reports_bad_base_url() {
        let api = HttpContactApi::new("not a url", Duration::from_secs(1));
        let err = api.contact_url("1").unwrap_err();
        assert!(matches!(err, ContactsError::InvalidBaseUrl { .. }));
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn test_parse_returned_contact_is_lenient() {
        assert!(parse_returned_contact("").is_none());
        assert!(parse_returned_contact(r#"{"message":"ok"}"#).is_none());

        let contact = parse_returned_contact(
            r#"{"_id":"7","firstName":"A","lastName":"B","status":"active"}"#,
        )
        .unwrap();
        assert_eq!(contact.id, "7");
    }
}

use tabled::{settings::Style, Table, Tabled};

use crate::contact::{Contact, Status};
use crate::form::{ContactForm, Modal};

pub const EMPTY_PLACEHOLDER: &str = "No Contacts Found.";

/// One contact as shown in the list
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct ContactCard {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "NAME")]
    pub name: String,
    #[tabled(rename = "STATUS")]
    pub status: Status,
}

impl From<&Contact> for ContactCard {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id.clone(),
            name: contact.display_name(),
            status: contact.status,
        }
    }
}

pub fn cards(contacts: &[Contact]) -> Vec<ContactCard> {
    contacts.iter().map(ContactCard::from).collect()
}

/// Render the list as a table, or the placeholder when there is nothing to show
pub fn render_contacts(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }
    Table::new(cards(contacts)).with(Style::rounded()).to_string()
}

pub fn render_card(contact: &Contact) -> String {
    Table::new([ContactCard::from(contact)])
        .with(Style::rounded())
        .to_string()
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "FIELD")]
    field: &'static str,
    #[tabled(rename = "VALUE")]
    value: String,
}

/// Modal title, current field values and the submit label
pub fn render_form(form: &ContactForm, modal: &Modal) -> String {
    let rows = [
        FieldRow {
            field: "First Name",
            value: form.first_name.clone(),
        },
        FieldRow {
            field: "Last Name",
            value: form.last_name.clone(),
        },
        FieldRow {
            field: "Status",
            value: form.status.to_string(),
        },
    ];
    let table = Table::new(rows).with(Style::rounded()).to_string();
    format!("{}\n{}\n[{}] [Cancel]", modal.title(), table, modal.submit_label())
}

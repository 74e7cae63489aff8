use crate::contact::{Contact, ContactFields, Status};

/// Transient input fields of the create/edit modal
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub status: Status,
}

impl ContactForm {
    /// Back to `{"", "", active}`
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn prefill(&mut self, contact: &Contact) {
        self.first_name = contact.first_name.clone();
        self.last_name = contact.last_name.clone();
        self.status = contact.status;
    }

    pub fn fields(&self) -> ContactFields {
        ContactFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            status: self.status,
        }
    }
}

/// Modal visibility. `Edit` carries the contact being edited.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Closed,
    Create,
    Edit(Contact),
}

impl Modal {
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::Closed)
    }

    pub fn editing(&self) -> Option<&Contact> {
        match self {
            Modal::Edit(contact) => Some(contact),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Modal::Edit(_) => "Edit Contact",
            _ => "Create Contact",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Modal::Edit(_) => "Update",
            _ => "Save",
        }
    }
}

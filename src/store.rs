//! Shared contact collection.
//!
//! The store mirrors server state. Writes go through [`ContactStore::replace`]
//! or [`ContactStore::apply`]; everything else is a read-only view. Listeners
//! registered with [`ContactStore::subscribe`] see the collection after every
//! write.

use crate::contact::Contact;

/// A locally applied mutation result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Created(Contact),
    Updated(Contact),
    Deleted(String),
}

type Listener = Box<dyn FnMut(&[Contact])>;

#[derive(Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
    revision: u64,
    listeners: Vec<Listener>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// Number of writes so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&[Contact]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Replace the whole collection with what the server returned
    pub fn replace(&mut self, contacts: Vec<Contact>) {
        self.contacts = contacts;
        self.publish();
    }

    pub fn apply(&mut self, mutation: Mutation) {
        match mutation {
            Mutation::Created(contact) => {
                // Ids are unique; a duplicate create result overwrites.
                match self.contacts.iter_mut().find(|c| c.id == contact.id) {
                    Some(existing) => *existing = contact,
                    None => self.contacts.push(contact),
                }
            }
            Mutation::Updated(contact) => {
                if let Some(existing) = self.contacts.iter_mut().find(|c| c.id == contact.id) {
                    *existing = contact;
                }
            }
            Mutation::Deleted(id) => self.contacts.retain(|c| c.id != id),
        }
        self.publish();
    }

    fn publish(&mut self) {
        self.revision += 1;
        for listener in &mut self.listeners {
            listener(&self.contacts);
        }
    }
}

impl std::fmt::Debug for ContactStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactStore")
            .field("contacts", &self.contacts)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

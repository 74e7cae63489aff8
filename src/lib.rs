pub mod config;
pub mod contact;
pub mod controller;
pub mod error;
pub mod form;
pub mod render;
pub mod store;

pub use config::{Config, SyncStrategy};
pub use contact::{Contact, ContactApi, ContactFields, HttpContactApi, Status};
pub use controller::ContactController;
pub use error::{ContactsError, Result};
pub use form::{ContactForm, Modal};
pub use store::{ContactStore, Mutation};

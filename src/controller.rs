//! Create/edit/delete workflow for the contact list.
//!
//! [`ContactController`] owns the form and modal state and is the only writer
//! of the injected [`ContactStore`]. Every operation logs a failed request and
//! returns it to the caller, with form, modal and store left as they were.

use tracing::{debug, error, info};

use crate::config::SyncStrategy;
use crate::contact::{Contact, ContactApi, Status};
use crate::error::Result;
use crate::form::{ContactForm, Modal};
use crate::store::{ContactStore, Mutation};

pub struct ContactController<A> {
    api: A,
    store: ContactStore,
    form: ContactForm,
    modal: Modal,
    sync: SyncStrategy,
}

impl<A: ContactApi> ContactController<A> {
    pub fn new(api: A, store: ContactStore) -> Self {
        Self {
            api,
            store,
            form: ContactForm::default(),
            modal: Modal::Closed,
            sync: SyncStrategy::default(),
        }
    }

    pub fn with_sync(mut self, sync: SyncStrategy) -> Self {
        self.sync = sync;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn contacts(&self) -> &[Contact] {
        self.store.contacts()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn editing_contact(&self) -> Option<&Contact> {
        self.modal.editing()
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.form.first_name = value.into();
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.form.last_name = value.into();
    }

    pub fn set_status(&mut self, status: Status) {
        self.form.status = status;
    }

    /// Load the collection from the server into the store.
    /// On failure the store keeps its previous contents.
    pub fn fetch_contacts(&mut self) -> Result<()> {
        match self.api.list() {
            Ok(contacts) => {
                debug!(count = contacts.len(), "fetched contacts");
                self.store.replace(contacts);
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "error fetching contacts");
                Err(e)
            }
        }
    }

    pub fn open_create(&mut self) {
        self.modal = Modal::Create;
    }

    /// Open the modal in edit mode with the form prefilled from `contact`
    pub fn edit_contact(&mut self, contact: &Contact) {
        self.form.prefill(contact);
        self.modal = Modal::Edit(contact.clone());
    }

    /// Close the modal and drop any pending input. No network traffic.
    pub fn cancel(&mut self) {
        self.modal = Modal::Closed;
        self.form.reset();
    }

    /// Primary modal action: update in edit mode, create otherwise.
    /// Returns `Ok(false)` when the modal is closed and nothing was sent.
    pub fn submit(&mut self) -> Result<bool> {
        match self.modal {
            Modal::Closed => Ok(false),
            Modal::Create => self.create_contact().map(|_| true),
            Modal::Edit(_) => self.update_contact(),
        }
    }

    /// POST the form. A failed request keeps the form and the modal as they
    /// are. Once the write succeeds the form is reset and the modal closed
    /// before resyncing, so a failed refresh is returned with that state.
    pub fn create_contact(&mut self) -> Result<()> {
        let fields = self.form.fields();
        let created = self
            .api
            .create(&fields)
            .inspect_err(|e| error!(error = %e, "error creating contact"))?;

        info!(
            first_name = %fields.first_name,
            last_name = %fields.last_name,
            "contact created"
        );
        self.form.reset();
        self.modal = Modal::Closed;
        self.resync(created.map(Mutation::Created))
    }

    /// PUT the form over the contact being edited.
    /// Returns `Ok(false)` without a request when nothing is being edited.
    pub fn update_contact(&mut self) -> Result<bool> {
        let Some(target) = self.modal.editing() else {
            debug!("update requested with no contact being edited");
            return Ok(false);
        };

        let id = target.id.clone();
        let fields = self.form.fields();
        self.api
            .update(&id, &fields)
            .inspect_err(|e| error!(error = %e, %id, "error updating contact"))?;

        info!(%id, "contact updated");
        self.form.reset();
        self.modal = Modal::Closed;

        // PUT replaces every editable field, so what was sent is the new state.
        let updated = Contact {
            id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            status: fields.status,
        };
        self.resync(Some(Mutation::Updated(updated)))?;
        Ok(true)
    }

    /// DELETE by id. Modal and form state are left alone.
    pub fn delete_contact(&mut self, id: &str) -> Result<()> {
        debug!(%id, "deleting contact");
        self.api
            .delete(id)
            .inspect_err(|e| error!(error = %e, %id, "error deleting contact"))?;

        info!(%id, "contact deleted");
        self.resync(Some(Mutation::Deleted(id.to_string())))
    }

    fn resync(&mut self, mutation: Option<Mutation>) -> Result<()> {
        match (self.sync, mutation) {
            (SyncStrategy::ApplyResult, Some(mutation)) => {
                self.store.apply(mutation);
                Ok(())
            }
            _ => self.fetch_contacts(),
        }
    }
}

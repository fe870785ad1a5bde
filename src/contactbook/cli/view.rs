use super::print::{format_message, render_details, render_table};
use contactbook::api::{CmdMessage, ContactApi};
use contactbook::error::{ContactError, Result};
use contactbook::store::DataStore;
use std::io::Write;

/// Fields to change on update. `None` keeps the current value.
#[derive(Debug, Default, Clone)]
pub struct ContactEdits {
    pub new_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

/// The presentation object: forwards intents to the API and redraws the
/// contact table from `list_contacts()` after every change.
pub struct ContactView<S: DataStore, W: Write> {
    api: ContactApi<S>,
    placeholder: String,
    out: W,
}

impl<S: DataStore, W: Write> ContactView<S, W> {
    pub fn new(api: ContactApi<S>, placeholder: impl Into<String>, out: W) -> Self {
        Self {
            api,
            placeholder: placeholder.into(),
            out,
        }
    }

    pub fn api(&self) -> &ContactApi<S> {
        &self.api
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    /// Warns when the contacts file had to be discarded on load.
    pub fn report_load_status(&mut self) -> Result<()> {
        let status = self.api.load_status();
        if status.is_recovered() {
            let message = CmdMessage::warning(format!("Warning: {}", status));
            self.print_messages(&[message])?;
        }
        Ok(())
    }

    pub fn refresh(&mut self) -> Result<()> {
        let result = self.api.list_contacts()?;
        if result.listed_contacts.is_empty() {
            return self.print_messages(&result.messages);
        }
        let table = render_table(&result.listed_contacts, &self.placeholder);
        write!(self.out, "{}", table)?;
        Ok(())
    }

    pub fn add(&mut self, name: &str, phone: &str, email: &str, address: &str) -> Result<()> {
        let result = self.api.add_contact(name, phone, email, address)?;
        self.print_messages(&result.messages)?;
        self.refresh()
    }

    /// Shows the contact, or a notice when there is no exact match.
    pub fn search(&mut self, name: &str) -> Result<()> {
        match self.api.find_contact(name) {
            Ok(result) => {
                for contact in &result.listed_contacts {
                    let details = render_details(contact, &self.placeholder);
                    write!(self.out, "{}", details)?;
                }
                Ok(())
            }
            Err(e @ ContactError::NotFound(_)) => {
                self.print_messages(&[CmdMessage::info(e.to_string())])
            }
            Err(e) => Err(e),
        }
    }

    /// Pre-fills omitted fields from the stored contact, then replaces it.
    pub fn update(&mut self, name: &str, edits: ContactEdits) -> Result<()> {
        let current = self
            .api
            .find_contact(name)?
            .listed_contacts
            .into_iter()
            .next()
            .ok_or_else(|| ContactError::NotFound(name.to_string()))?;

        let new_name = edits.new_name.unwrap_or(current.name);
        let phone = edits.phone.unwrap_or(current.details.phone);
        let email = edits.email.unwrap_or(current.details.email);
        let address = edits.address.unwrap_or(current.details.address);

        let result = self
            .api
            .update_contact(name, &new_name, &phone, &email, &address)?;
        self.print_messages(&result.messages)?;
        self.refresh()
    }

    pub fn delete(&mut self, name: &str) -> Result<()> {
        let result = self.api.delete_contact(name)?;
        self.print_messages(&result.messages)?;
        self.refresh()
    }

    pub fn print_messages(&mut self, messages: &[CmdMessage]) -> Result<()> {
        for message in messages {
            writeln!(self.out, "{}", format_message(message))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contactbook::api::ContactPaths;
    use contactbook::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn view(store: InMemoryStore) -> ContactView<InMemoryStore, Vec<u8>> {
        colored::control::set_override(false);
        let paths = ContactPaths {
            project: None,
            global: PathBuf::from("/nonexistent"),
        };
        ContactView::new(ContactApi::open(store, paths), "N/A", Vec::new())
    }

    fn output(view: ContactView<InMemoryStore, Vec<u8>>) -> String {
        String::from_utf8(view.into_output()).unwrap()
    }

    #[test]
    fn add_redraws_table() {
        let mut v = view(InMemoryStore::new());
        v.add("Bob", "1", "b@x.com", "").unwrap();

        let out = output(v);
        assert!(out.contains("Contact 'Bob' added successfully!"));
        assert!(out.contains("Name"));
        assert!(out.lines().any(|l| l.starts_with("Bob") && l.ends_with("N/A")));
    }

    #[test]
    fn delete_last_contact_shows_empty_notice() {
        let mut v = view(InMemoryStore::new());
        v.add("Bob", "1", "", "").unwrap();
        v.delete("Bob").unwrap();

        let out = output(v);
        assert!(out.contains("Contact 'Bob' deleted successfully!"));
        assert!(out.trim_end().ends_with("No contacts yet."));
    }

    #[test]
    fn update_keeps_omitted_fields() {
        let mut v = view(InMemoryStore::new());
        v.add("Bob", "1", "b@x.com", "addr").unwrap();
        v.update(
            "Bob",
            ContactEdits {
                phone: Some("2".into()),
                ..ContactEdits::default()
            },
        )
        .unwrap();

        let bob = &v.api().find_contact("Bob").unwrap().listed_contacts[0];
        assert_eq!(bob.details.phone, "2");
        assert_eq!(bob.details.email, "b@x.com");
        assert_eq!(bob.details.address, "addr");
    }

    #[test]
    fn update_unknown_contact_fails() {
        let mut v = view(InMemoryStore::new());
        let err = v.update("Ghost", ContactEdits::default()).unwrap_err();
        assert!(matches!(err, ContactError::NotFound(_)));
    }

    #[test]
    fn search_miss_is_a_notice() {
        let mut v = view(InMemoryStore::new());
        v.search("Ghost").unwrap();
        assert!(output(v).contains("No contact found with name 'Ghost'"));
    }

    #[test]
    fn recovered_load_is_reported() {
        let mut v = view(InMemoryStore::corrupt("expected value"));
        v.report_load_status().unwrap();
        assert!(output(v).contains("Warning: contacts file was unreadable"));
    }
}

use crate::book::ContactStore;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Contact;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &ContactStore<S>) -> Result<CmdResult> {
    let listed: Vec<Contact> = store
        .list()
        .into_iter()
        .map(|(name, details)| Contact::new(name, details))
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No contacts yet."));
    }
    Ok(result.with_listed_contacts(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_contacts_by_name() {
        let store = ContactStore::open(
            StoreFixture::new()
                .with_contact("Zed", "", "", "")
                .with_contact("Amy", "", "", "")
                .store,
        );

        let names: Vec<_> = run(&store)
            .unwrap()
            .listed_contacts
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Amy", "Zed"]);
    }

    #[test]
    fn empty_store_says_so() {
        let store = ContactStore::open(InMemoryStore::new());
        let result = run(&store).unwrap();
        assert!(result.listed_contacts.is_empty());
        assert_eq!(result.messages[0].content, "No contacts yet.");
    }
}

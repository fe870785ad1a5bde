use crate::book::ContactStore;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut ContactStore<S>, name: &str) -> Result<CmdResult> {
    let contact = store.delete(name)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact '{}' deleted successfully!",
        contact.name
    )));
    Ok(result.with_affected_contacts(vec![contact]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{list, search};
    use crate::error::ContactError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_contact() {
        let mut store = ContactStore::open(StoreFixture::new().with_contacts(2).store);
        run(&mut store, "Contact 1").unwrap();

        assert!(matches!(
            search::run(&store, "Contact 1"),
            Err(ContactError::NotFound(_))
        ));
        assert_eq!(list::run(&store).unwrap().listed_contacts.len(), 1);
        assert_eq!(store.backend().save_count(), 1);
    }

    #[test]
    fn missing_contact_is_an_error() {
        let mut store = ContactStore::open(StoreFixture::new().with_contacts(1).store);
        let err = run(&mut store, "Contact 9").unwrap_err();

        assert!(matches!(err, ContactError::NotFound(_)));
        assert_eq!(store.len(), 1);
    }
}

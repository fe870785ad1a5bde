use crate::book::ContactStore;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ContactDetails;
use crate::store::DataStore;

pub fn run<S: DataStore>(
    store: &mut ContactStore<S>,
    name: &str,
    phone: &str,
    email: &str,
    address: &str,
) -> Result<CmdResult> {
    let contact = store.add(name, ContactDetails::new(phone, email, address))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact '{}' added successfully!",
        contact.name
    )));
    Ok(result.with_affected_contacts(vec![contact]))
}

use crate::book::ContactStore;
use crate::commands::{CmdMessage, CmdResult, ContactUpdate};
use crate::error::Result;
use crate::model::ContactDetails;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut ContactStore<S>, update: &ContactUpdate) -> Result<CmdResult> {
    let details = ContactDetails::new(&update.phone, &update.email, &update.address);
    let outcome = store.update(&update.name, &update.new_name, details)?;

    let mut result = CmdResult::default();
    if outcome.overwrote.is_some() {
        result.add_message(CmdMessage::warning(format!(
            "Existing contact '{}' was replaced.",
            outcome.contact.name
        )));
    }
    if outcome.renamed {
        result.add_message(CmdMessage::success(format!(
            "Contact '{}' renamed to '{}' and updated successfully!",
            update.name, outcome.contact.name
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Contact '{}' updated successfully!",
            outcome.contact.name
        )));
    }
    Ok(result.with_affected_contacts(vec![outcome.contact]))
}

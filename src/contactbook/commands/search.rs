use crate::book::ContactStore;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &ContactStore<S>, name: &str) -> Result<CmdResult> {
    let contact = store.search(name)?;
    Ok(CmdResult::default().with_listed_contacts(vec![contact]))
}

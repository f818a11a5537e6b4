use crate::commands::CmdResult;
use crate::error::Result;
use crate::search;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &S, fragment: &str) -> Result<CmdResult> {
    let stored = store.load()?;
    let listed = search::filter(&stored.records, fragment);
    Ok(CmdResult::default().with_listed(listed))
}

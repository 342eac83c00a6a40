use crate::collection::CountableStore;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(store: &CountableStore) -> Result<CmdResult> {
    let rows = store.display();
    let mut result = CmdResult::default();
    if rows.is_empty() {
        result.add_message(CmdMessage::info("Pretty empty in here"));
    }
    Ok(result.with_listed(rows))
}

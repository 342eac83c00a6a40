use crate::collection::CountableStore;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Removing something that is not there is not an error.
pub fn run(store: &mut CountableStore, name: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.remove(name) {
        Some(removed) => {
            result.add_message(CmdMessage::success(format!(
                "Removed: {} ({})",
                removed.name, removed.count
            )));
            Ok(result.with_affected(removed))
        }
        None => {
            result.add_message(CmdMessage::info(format!("Nothing named \"{}\"", name)));
            Ok(result)
        }
    }
}

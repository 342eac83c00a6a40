use crate::collection::CountableStore;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(store: &mut CountableStore, old_name: &str, new_name: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.try_rename(old_name, new_name) {
        Ok(renamed) => {
            let renamed = renamed.clone();
            result.add_message(CmdMessage::success(format!(
                "Renamed: {} -> {}",
                old_name, renamed.name
            )));
            Ok(result.with_affected(renamed))
        }
        Err(failure) => {
            result.add_message(CmdMessage::error(failure.to_string()));
            Ok(result)
        }
    }
}

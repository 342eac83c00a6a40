use crate::collection::CountableStore;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(store: &mut CountableStore, raw_name: &str) -> Result<CmdResult> {
    match store.try_add(raw_name) {
        Ok(added) => {
            let added = added.clone();
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success(format!("Added: {}", added.name)));
            Ok(result.with_affected(added))
        }
        Err(failure) => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::error(failure.to_string()));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::fixtures::ready_store;
    use crate::commands::MessageLevel;
    use crate::model::Countable;

    #[test]
    fn adds_new_countable() {
        let mut store = ready_store(&[]);
        let result = run(&mut store, "Crow").unwrap();

        assert!(result.mutated);
        assert!(!result.has_errors());
        assert_eq!(result.affected, vec![Countable::new("Crow")]);
        assert_eq!(result.messages[0].content, "Added: Crow");
    }

    #[test]
    fn empty_name_message() {
        let mut store = ready_store(&[]);
        let result = run(&mut store, "   ").unwrap();

        assert!(!result.mutated);
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert_eq!(result.messages[0].content, "Name cannot be empty");
        assert!(store.is_empty());
    }

    #[test]
    fn duplicate_name_message() {
        let mut store = ready_store(&[("Crow", 2)]);
        let result = run(&mut store, "crow").unwrap();

        assert!(!result.mutated);
        assert!(result.has_errors());
        assert_eq!(
            result.messages[0].content,
            "A countable named \"Crow\" already exists"
        );
        assert_eq!(store.len(), 1);
    }
}

use crate::collection::CountableStore;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ValidationFailure};

/// Apply `delta` to the countable at canonical position `index`.
pub fn run(store: &mut CountableStore, delta: i64, index: usize) -> Result<CmdResult> {
    let updated = store.change_count(delta, index)?;
    let entry = store.entries()[index].clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("{}: {}", entry.name, updated)));
    result.count = Some(updated);
    Ok(result.with_affected(entry))
}

/// Resolve `name` to its canonical index, then apply `delta`.
pub fn by_name(store: &mut CountableStore, name: &str, delta: i64) -> Result<CmdResult> {
    let index = store
        .index_of(name)
        .ok_or_else(|| ValidationFailure::NotFound(name.to_string()))?;
    run(store, delta, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::fixtures::ready_store;
    use crate::error::CountablesError;

    #[test]
    fn increments_then_decrements() {
        let mut store = ready_store(&[("Crow", 0)]);

        let up = run(&mut store, 1, 0).unwrap();
        assert_eq!(up.count, Some(1));
        assert!(up.mutated);

        let down = run(&mut store, -1, 0).unwrap();
        assert_eq!(down.count, Some(0));
        assert_eq!(down.messages[0].content, "Crow: 0");
    }

    #[test]
    fn invalid_index_is_an_error() {
        let mut store = ready_store(&[("Crow", 0)]);
        let err = run(&mut store, 1, 5).unwrap_err();
        assert!(matches!(err, CountablesError::InvalidIndex { index: 5, len: 1 }));
    }

    #[test]
    fn below_zero_is_an_error() {
        let mut store = ready_store(&[("Crow", 0)]);
        assert!(matches!(
            run(&mut store, -1, 0).unwrap_err(),
            CountablesError::NegativeCount { .. }
        ));
        assert_eq!(store.get("Crow").unwrap().count, 0);
    }

    #[test]
    fn by_name_uses_canonical_index() {
        let mut store = ready_store(&[("A", 2), ("B", 2), ("C", 5)]);
        let result = by_name(&mut store, "B", 4).unwrap();
        assert_eq!(result.count, Some(6));
        assert_eq!(store.entries()[1].count, 6);
    }

    #[test]
    fn by_name_unknown() {
        let mut store = ready_store(&[("A", 2)]);
        let err = by_name(&mut store, "Z", 1).unwrap_err();
        assert!(matches!(
            err,
            CountablesError::Validation(ValidationFailure::NotFound(_))
        ));
    }
}

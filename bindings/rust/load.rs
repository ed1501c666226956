//! Validation of the language handle returned by the generated accessor.

use thiserror::Error;
use tree_sitter::ffi::TSLanguage;
use tree_sitter::{Language, LanguageError, Parser};

/// Why the generated binding could not produce a usable [`Language`].
#[derive(Debug, Error)]
pub enum LoadError {
    /// The accessor returned a null handle.
    #[error("Error loading grammar")]
    HandleMissing,

    /// The runtime refused the handle, usually because of an ABI version mismatch.
    #[error("Error loading grammar: {0}")]
    Incompatible(#[from] LanguageError),
}

/// Calls `accessor` once and checks the handle it returns.
///
/// A null handle fails with [`LoadError::HandleMissing`]. A non-null handle must also be
/// accepted by a fresh [`Parser`] before it is returned.
///
/// # Safety
///
/// A non-null pointer returned by `accessor` must point to a `TSLanguage` that stays valid
/// for the rest of the program, as the static tables of a generated parser do.
pub(crate) unsafe fn load<F>(accessor: F) -> Result<Language, LoadError>
where
    F: FnOnce() -> *const TSLanguage,
{
    let raw = accessor();
    if raw.is_null() {
        tracing::warn!("grammar accessor returned a null language");
        return Err(LoadError::HandleMissing);
    }

    let language = unsafe { Language::from_raw(raw) };
    let mut parser = Parser::new();
    if let Err(err) = parser.set_language(&language) {
        tracing::warn!(version = language.version(), %err, "runtime rejected grammar");
        return Err(err.into());
    }

    tracing::debug!(version = language.version(), "loaded firestore_rules grammar");
    Ok(language)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::ptr;

    #[test]
    fn null_handle_is_missing() {
        let err = unsafe { load(ptr::null::<TSLanguage>) }.unwrap_err();
        assert!(matches!(err, LoadError::HandleMissing));
        assert_eq!(err.to_string(), "Error loading grammar");
    }

    // Large enough to cover every field of `TSLanguage`; only `version` is set.
    #[allow(dead_code)]
    #[repr(C, align(8))]
    struct FakeLanguage {
        version: u32,
        rest: [u8; 508],
    }

    static FUTURE_ABI: FakeLanguage = FakeLanguage {
        version: 99,
        rest: [0; 508],
    };

    #[test]
    fn unsupported_abi_is_incompatible() {
        let raw = &FUTURE_ABI as *const FakeLanguage as *const TSLanguage;
        let err = unsafe { load(|| raw) }.unwrap_err();
        assert!(matches!(err, LoadError::Incompatible(_)));
        assert!(
            err.to_string().starts_with("Error loading grammar: "),
            "unexpected message: {err}"
        );
    }

    #[test]
    fn accessor_runs_once() {
        let calls = Cell::new(0);
        let _ = unsafe {
            load(|| {
                calls.set(calls.get() + 1);
                ptr::null()
            })
        };
        assert_eq!(calls.get(), 1);
    }
}

//! Driver error-message classification.
//!
//! The desktop driver family reports a missing table or worksheet with plain
//! prose; nothing in the error is structured. Two message shapes are known:
//!
//! - `... could not find the object 'Orders' ...` — a database table or a
//!   worksheet reference the engine could not resolve.
//! - `'Orders$' is not a valid name. ...` — a worksheet reference rejected
//!   by the driver's name validation.
//!
//! Both substrings and the extraction regexes are a contract with the
//! external driver and are version-fragile: if the driver's wording changes,
//! classification silently stops matching and errors propagate verbatim.
//! That risk is confined to this module on purpose; nothing else in the
//! crate inspects driver text.
//!
//! Classification is a pure function of the message text, so synchronous
//! and asynchronous call paths share the exact same behavior.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::SqlError;

const OBJECT_NOT_FOUND: &str = "could not find the object";
const INVALID_NAME: &str = "is not a valid name";

fn object_not_found_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"could not find the object '([^']+)'")
            .expect("invalid built-in driver-message regex")
    })
}

fn invalid_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"'([^']+)' is not a valid name")
            .expect("invalid built-in driver-message regex")
    })
}

/// Classify a low-level driver error message.
///
/// Returns [`SqlError::TableNotFound`] when the message matches a known
/// missing-table shape, with the offending name extracted and the original
/// message preserved; any other message becomes a verbatim
/// [`SqlError::Driver`] passthrough.
pub fn classify_driver_error(message: &str, source_path: &str) -> SqlError {
    if message.contains(OBJECT_NOT_FOUND) {
        if let Some(caps) = object_not_found_re().captures(message) {
            return table_not_found(&caps[1], source_path, message);
        }
    }
    if message.contains(INVALID_NAME) {
        if let Some(caps) = invalid_name_re().captures(message) {
            // The driver reports the mangled sheet reference; strip the
            // trailing marker so the error names the logical sheet.
            let name = caps[1].trim_end_matches('$');
            return table_not_found(name, source_path, message);
        }
    }
    SqlError::Driver(message.to_string())
}

fn table_not_found(name: &str, source_path: &str, message: &str) -> SqlError {
    tracing::debug!(name, source_path, "reclassified driver error as missing table");
    SqlError::TableNotFound {
        name: name.to_string(),
        source_path: source_path.to_string(),
        driver_message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_object_is_reclassified() {
        let msg = "The database engine could not find the object 'Orders'. \
                   Make sure the object exists and that you spell its name correctly.";
        match classify_driver_error(msg, "C:\\data\\crm.mdb") {
            SqlError::TableNotFound {
                name,
                source_path,
                driver_message,
            } => {
                assert_eq!(name, "Orders");
                assert_eq!(source_path, "C:\\data\\crm.mdb");
                assert_eq!(driver_message, msg);
            }
            other => panic!("expected TableNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_sheet_name_is_reclassified() {
        let msg = "'Summary$' is not a valid name. Make sure that it does not \
                   include invalid characters or punctuation.";
        match classify_driver_error(msg, "report.xlsx") {
            SqlError::TableNotFound { name, .. } => assert_eq!(name, "Summary"),
            other => panic!("expected TableNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_message_passes_through() {
        let msg = "Disk I/O error reading page 42.";
        match classify_driver_error(msg, "crm.mdb") {
            SqlError::Driver(text) => assert_eq!(text, msg),
            other => panic!("expected Driver passthrough, got {:?}", other),
        }
    }

    #[test]
    fn test_known_substring_without_quoted_name_passes_through() {
        // Shape matches the substring but carries no quoted name; the
        // extraction regex must not force a bogus classification.
        let msg = "could not find the object requested";
        assert!(matches!(
            classify_driver_error(msg, "crm.mdb"),
            SqlError::Driver(_)
        ));
    }
}

use ahash::AHashSet;
use lazy_static::lazy_static;
use parking_lot::Mutex;

/// Obligation of an attribute whose violation was tolerated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Obligation {
    /// The attribute was missing.
    Mandatory,
    /// The attribute was present.
    Forbidden,
}

/// Whether a tolerated violation was already reported.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WarningLevel {
    /// First occurrence in the process.
    First,
    /// Same target, message and obligation as a previous warning.
    Repeated,
}

lazy_static! {
    static ref REPORTED: Mutex<AHashSet<(&'static str, String, Obligation)>> =
        Mutex::new(AHashSet::new());
}

/// Records a tolerated violation and tells whether it is reported for the first time.
pub fn record(target: &'static str, message: &str, obligation: Obligation) -> WarningLevel {
    let inserted = REPORTED
        .lock()
        .insert((target, message.to_string(), obligation));
    if inserted {
        WarningLevel::First
    } else {
        WarningLevel::Repeated
    }
}

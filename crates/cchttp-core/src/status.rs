//! Monitoring exit-code enumeration (OK/WARNING/CRITICAL/UNKNOWN).

/// Service state consumed by monitoring orchestrators. WARNING is reserved:
/// the current check logic never produces it, but the code stays allocated so
/// the interface is stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    Ok,
    Warning,
    Critical,
    /// Used for argument errors, outside the {OK, CRITICAL} set the check
    /// logic emits.
    Unknown,
}

impl ServiceState {
    pub fn exit_code(self) -> i32 {
        match self {
            ServiceState::Ok => 0,
            ServiceState::Warning => 1,
            ServiceState::Critical => 2,
            ServiceState::Unknown => 3,
        }
    }
}

//! Vocabulary of the transient notifications.

/// How long a notification stays on screen.
pub const AUTO_HIDE_MS: u32 = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Default,
    Error,
    Success,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Default => "default",
            Severity::Error => "error",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    /// Background colour of the toast.
    pub fn background(&self) -> &'static str {
        match self {
            Severity::Default => "#313131",
            Severity::Error => "#d32f2f",
            Severity::Success => "#43a047",
            Severity::Warning => "#ff9800",
            Severity::Info => "#2196f3",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_severity_has_its_own_palette() {
        let all = [
            Severity::Default,
            Severity::Error,
            Severity::Success,
            Severity::Warning,
            Severity::Info,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.background(), b.background());
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }
}

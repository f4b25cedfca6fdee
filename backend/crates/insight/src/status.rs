//! Case-status vocabulary: the fixed token sets the KPI summary sums over.
//!
//! Classification order:
//!   1. `PENDING_APPROVAL_STATUSES` (also open)
//!   2. `OPEN_STATUSES`
//!   3. Anything else → terminal
//!
//! Membership is exact, case-sensitive string equality. Extend the slices
//! below when the backend workflow gains a new non-terminal stage.

/// Statuses counted as **open** subcases.
pub const OPEN_STATUSES: &[&str] = &[
    "SUBMITTED",
    "PENDING_REVIEW",
    "SECTION_ACCEPTED_PENDING_DEPT",
    "DEPT_ACCEPTED_PENDING_ADMIN",
];

/// Open statuses that are waiting on an approval step.
pub const PENDING_APPROVAL_STATUSES: &[&str] =
    &["SECTION_ACCEPTED_PENDING_DEPT", "DEPT_ACCEPTED_PENDING_ADMIN"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    PendingApproval,
    Open,
    Terminal,
}

impl StatusClass {
    /// Pending-approval statuses are a subset of open ones.
    pub fn is_open(self) -> bool {
        matches!(self, StatusClass::PendingApproval | StatusClass::Open)
    }
}

pub fn is_open_status(status: &str) -> bool {
    OPEN_STATUSES.contains(&status)
}

pub fn is_pending_approval_status(status: &str) -> bool {
    PENDING_APPROVAL_STATUSES.contains(&status)
}

pub fn classify_status(status: &str) -> StatusClass {
    if is_pending_approval_status(status) {
        StatusClass::PendingApproval
    } else if is_open_status(status) {
        StatusClass::Open
    } else {
        StatusClass::Terminal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Terminal tokens the backend is known to emit.
    const TERMINAL_STATUSES: &[&str] = &[
        "ADMIN_APPROVED",
        "SECTION_DENIED",
        "DEPT_DENIED",
        "ADMIN_DENIED",
        "FORCE_CLOSED",
        "WITHDRAWN",
    ];

    #[test]
    fn open_statuses_contains_all_workflow_stages() {
        assert!(OPEN_STATUSES.contains(&"SUBMITTED"));
        assert!(OPEN_STATUSES.contains(&"PENDING_REVIEW"));
        assert!(OPEN_STATUSES.contains(&"SECTION_ACCEPTED_PENDING_DEPT"));
        assert!(OPEN_STATUSES.contains(&"DEPT_ACCEPTED_PENDING_ADMIN"));
        assert_eq!(OPEN_STATUSES.len(), 4);
    }

    #[test]
    fn pending_approval_is_subset_of_open() {
        for s in PENDING_APPROVAL_STATUSES {
            assert!(
                OPEN_STATUSES.contains(s),
                "{s} is pending approval but not open"
            );
        }
    }

    #[test]
    fn no_overlap_between_open_and_terminal() {
        for t in TERMINAL_STATUSES {
            assert!(!OPEN_STATUSES.contains(t), "{t} appears in open and terminal");
        }
    }

    #[test]
    fn membership_is_case_sensitive() {
        assert!(is_open_status("SUBMITTED"));
        assert!(!is_open_status("submitted"));
        assert!(!is_open_status(" SUBMITTED"));
        assert!(!is_pending_approval_status("dept_accepted_pending_admin"));
    }

    #[test]
    fn classify_pending_approval() {
        let class = classify_status("SECTION_ACCEPTED_PENDING_DEPT");
        assert_eq!(class, StatusClass::PendingApproval);
        assert!(class.is_open());
    }

    #[test]
    fn classify_plain_open() {
        assert_eq!(classify_status("PENDING_REVIEW"), StatusClass::Open);
        assert_eq!(classify_status("SUBMITTED"), StatusClass::Open);
    }

    #[test]
    fn known_terminal_statuses_classify_as_terminal() {
        for t in TERMINAL_STATUSES {
            assert_eq!(classify_status(t), StatusClass::Terminal);
            assert!(!classify_status(t).is_open());
        }
    }

    /// Tokens the vocabulary has never seen fall through to terminal.
    #[test]
    fn unknown_status_is_terminal() {
        assert_eq!(classify_status("ARCHIVED"), StatusClass::Terminal);
        assert_eq!(classify_status(""), StatusClass::Terminal);
        assert!(!classify_status("ARCHIVED").is_open());
    }
}

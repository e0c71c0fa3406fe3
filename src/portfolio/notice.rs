use super::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// Short user-facing message about a finished store operation.
///
/// Messages are fixed per operation; the underlying error only goes to the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: &'static str,
    pub body: &'static str,
}

impl Notice {
    const fn success(title: &'static str, body: &'static str) -> Self {
        Self {
            kind: NoticeKind::Success,
            title,
            body,
        }
    }

    const fn failure(body: &'static str) -> Self {
        Self {
            kind: NoticeKind::Failure,
            title: "Error",
            body,
        }
    }

    pub fn created(result: &Result<(), StoreError>) -> Self {
        match result {
            Ok(()) => Self::success("Done!", "The work was added to the portfolio"),
            Err(StoreError::Validation(_)) => {
                Self::failure("Enter a title and upload an image")
            }
            Err(_) => Self::failure("Could not upload the work"),
        }
    }

    pub fn deleted(result: &Result<(), StoreError>) -> Self {
        match result {
            Ok(()) => Self::success("Deleted", "The work was removed from the portfolio"),
            Err(_) => Self::failure("Could not delete the work"),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.kind == NoticeKind::Failure
    }
}

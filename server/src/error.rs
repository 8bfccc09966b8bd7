use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_stack::{AttachmentKind, FrameKind, Report};
use kernel::KernelError;
use std::process::{ExitCode, Termination};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

// Contexts and printable attachments, root cause first.
fn detail(report: &Report<KernelError>) -> String {
    let mut lines = report
        .frames()
        .filter_map(|frame| match frame.kind() {
            FrameKind::Context(context) => Some(context.to_string()),
            FrameKind::Attachment(AttachmentKind::Printable(attachment)) => {
                Some(attachment.to_string())
            }
            _ => None,
        })
        .collect::<Vec<_>>();
    lines.reverse();
    lines.join("\n")
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        match self.0.current_context() {
            KernelError::Validation => {
                tracing::debug!("Rejected request: {:?}", self.0);
                StatusCode::BAD_REQUEST.into_response()
            }
            KernelError::NotFound => {
                tracing::debug!("Not found: {:?}", self.0);
                StatusCode::NOT_FOUND.into_response()
            }
            KernelError::Internal => {
                tracing::error!("{:?}", self.0);
                (StatusCode::INTERNAL_SERVER_ERROR, detail(&self.0)).into_response()
            }
        }
    }
}

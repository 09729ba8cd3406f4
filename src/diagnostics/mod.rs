use crate::span::Span;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslateError {
    /// The mapping oracle or binding resolver broke an invariant the pass
    /// depends on (a mapping target remapping to a different type). This is
    /// never a user-input error; it aborts the translation run.
    #[error("internal error: {msg}")]
    Internal { msg: String, span: Span },
}

impl TranslateError {
    pub fn internal(msg: impl Into<String>, span: Span) -> Self {
        Self::Internal { msg: msg.into(), span }
    }
}

/// Render a TranslateError with ariadne for nice terminal output.
pub fn render_error(source: &str, _filename: &str, err: &TranslateError) {
    use ariadne::{Label, Report, ReportKind, Source};

    match err {
        TranslateError::Internal { msg, span } => {
            Report::build(ReportKind::Error, (), span.start)
                .with_message("internal error")
                .with_label(
                    Label::new(span.start..span.end)
                        .with_message(msg),
                )
                .finish()
                .eprint(Source::from(source))
                .unwrap();
        }
    }
}

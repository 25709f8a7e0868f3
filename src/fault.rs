//! Runtime fault normalization.
//!
//! Recoverable runtime faults (warnings, notices) are converted into
//! ordinary errors that propagate through `Result` chains; fatal categories
//! are left alone and reported by the terminal hook after the request
//! handler has returned. The "last recorded error" that classic platforms
//! keep as ambient global state lives here as an explicit [`FaultContext`]
//! owned by the request scope.

use std::fmt;

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::emitter::Emitter;

/// Fault severities, with the classic engine's numeric codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Parse,
    Notice,
    CoreError,
    CoreWarning,
    CompileError,
    CompileWarning,
    UserError,
    UserWarning,
    UserNotice,
    RecoverableError,
    Deprecated,
    UserDeprecated,
}

impl Severity {
    pub fn code(&self) -> u32 {
        match self {
            Severity::Error => 1,
            Severity::Warning => 2,
            Severity::Parse => 4,
            Severity::Notice => 8,
            Severity::CoreError => 16,
            Severity::CoreWarning => 32,
            Severity::CompileError => 64,
            Severity::CompileWarning => 128,
            Severity::UserError => 256,
            Severity::UserWarning => 512,
            Severity::UserNotice => 1024,
            Severity::RecoverableError => 4096,
            Severity::Deprecated => 8192,
            Severity::UserDeprecated => 16384,
        }
    }

    /// Categories that normal handling cannot recover from. These bypass
    /// conversion and are reported, if at all, by the terminal hook.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Severity::Error
                | Severity::Parse
                | Severity::UserError
                | Severity::CoreError
                | Severity::CoreWarning
                | Severity::CompileError
                | Severity::CompileWarning
        )
    }
}

/// One observed fault: severity plus message and source location.
#[derive(Debug, Clone)]
pub struct Fault {
    pub severity: Severity,
    pub message: String,
    pub file: String,
    pub line: u32,
}

impl Fault {
    pub fn new(
        severity: Severity,
        message: impl Into<String>,
        file: impl Into<String>,
        line: u32,
    ) -> Self {
        Self {
            severity,
            message: message.into(),
            file: file.into(),
            line,
        }
    }
}

/// Request-scoped slot for the last observed fault.
///
/// Every fault that reaches the handler is recorded here, handled or not;
/// the terminal hook reads the slot once the request is over.
#[derive(Debug, Default)]
pub struct FaultContext {
    last: Option<Fault>,
}

impl FaultContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, fault: Fault) {
        self.last = Some(fault);
    }

    pub fn last(&self) -> Option<&Fault> {
        self.last.as_ref()
    }
}

/// A recoverable fault converted into a throwable error.
#[derive(Debug)]
pub struct RaisedFault {
    message: String,
}

impl RaisedFault {
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for RaisedFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for RaisedFault {}

/// Whether fault reporting is currently active. `Suppressed` mirrors a
/// reporting mask of zero: everything is treated as handled and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reporting {
    Enabled,
    Suppressed,
}

/// Normalizes faults into one of three outcomes: handled (`Ok(true)`),
/// left for the fatal path (`Ok(false)`), or raised (`Err`).
#[derive(Debug)]
pub struct FaultHandler {
    reporting: Reporting,
}

impl FaultHandler {
    pub fn new() -> Self {
        Self {
            reporting: Reporting::Enabled,
        }
    }

    pub fn suppressed() -> Self {
        Self {
            reporting: Reporting::Suppressed,
        }
    }

    /// Dispatches one fault.
    ///
    /// The fault is recorded in the context first, whatever the outcome.
    /// Suppressed reporting and deprecations are handled silently; the two
    /// hard engine categories are passed through untouched; everything else
    /// is raised with the severity code, message, file and line embedded.
    pub fn handle(&self, ctx: &mut FaultContext, fault: Fault) -> Result<bool, RaisedFault> {
        ctx.record(fault.clone());

        if self.reporting == Reporting::Suppressed {
            return Ok(true);
        }

        match fault.severity {
            Severity::Deprecated => {
                tracing::debug!(message = %fault.message, "Ignoring deprecation");
                Ok(true)
            }
            Severity::CoreError | Severity::Error => Ok(false),
            _ => Err(RaisedFault {
                message: format!(
                    "Error: [{}] {} in file {} on line {}",
                    fault.severity.code(),
                    fault.message,
                    fault.file,
                    fault.line
                ),
            }),
        }
    }
}

impl Default for FaultHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixed 500 page, diagnostic inlined verbatim.
pub fn fatal_page(fault: &Fault) -> String {
    let msg = format!(
        "Fatal error: {} in {} on line {}",
        fault.message, fault.file, fault.line
    );

    format!(
        "<html><body><h1>500 Internal Server Error</h1><hr/>\
         <pre style=\"color:red;\">{msg}</pre></body></html>"
    )
}

/// Terminal hook: best-effort 500 report for a fatal fault, run after the
/// request handler has returned.
///
/// Does nothing when no fault was recorded, when the fault is not in the
/// fatal set, or when headers already hit the wire (a new status line can
/// no longer be emitted safely). Otherwise the pending response is simply
/// abandoned and the fixed page goes out under a fresh 500 status line.
pub async fn shutdown_hook<W>(
    ctx: &FaultContext,
    emitter: &Emitter,
    stream: &mut W,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let Some(fault) = ctx.last() else {
        return Ok(());
    };

    if !fault.severity.is_fatal() {
        return Ok(());
    }

    if emitter.headers_sent() {
        return Ok(());
    }

    stream
        .write_all(b"HTTP/1.0 500 Internal Server Error\r\n\r\n")
        .await?;
    stream.write_all(fatal_page(fault).as_bytes()).await?;
    stream.flush().await?;

    Ok(())
}

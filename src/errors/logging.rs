use tracing::error;

use super::CodedError;
use crate::config::LoggingConfig;

/// `[error_code=<code>] [error_id=<id>] <stack trace>`
pub fn to_log_format<E: CodedError + ?Sized>(err: &E) -> String {
    format!(
        "[error_code={}] [error_id={}] {}",
        err.error_code().code,
        err.id(),
        err.stack_trace()
    )
}

/// Same prefix as [`to_log_format`], followed by the short form only.
pub fn to_log_format_without_stack_trace<E: CodedError + ?Sized>(err: &E) -> String {
    format!(
        "[error_code={}] [error_id={}] {}",
        err.error_code().code,
        err.id(),
        err
    )
}

/// Emit the error through `tracing` at error level.
pub fn log_error<E: CodedError + ?Sized>(err: &E, config: &LoggingConfig) {
    let line = if config.include_stack_trace {
        to_log_format(err)
    } else {
        to_log_format_without_stack_trace(err)
    };

    error!(
        error_code = %err.error_code().code,
        error_id = %err.id(),
        "{}",
        line
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ErrCodeError, ErrorCode, RemoteErrCodeError, RemoteMultiCauseError};
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture_log_error<E: CodedError + ?Sized>(err: &E, config: &LoggingConfig) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || log_error(err, config));
        logs.contents()
    }

    fn multi_cause_error() -> RemoteMultiCauseError {
        let cause = RemoteErrCodeError::new(
            "c1",
            ErrorCode::new("E1", "child"),
            "child detail",
            None,
            None,
            None,
        );
        RemoteMultiCauseError::new(
            "main",
            ErrorCode::new("TOP", "Top"),
            "parent detail",
            None,
            Some(400),
            None,
            vec![cause],
        )
    }

    #[test]
    fn test_log_format_with_stack_trace() {
        let err = ErrCodeError::new(
            ErrorCode::new("TEST-1001", "Test 1001"),
            "test 1001 detail",
            None,
        );
        let line = to_log_format(&err);
        assert_eq!(
            line,
            format!(
                "[error_code={}] [error_id={}] {}",
                err.error_code().code,
                err.id(),
                err.stack_trace()
            )
        );
    }

    #[test]
    fn test_log_format_without_stack_trace() {
        let err = ErrCodeError::new(
            ErrorCode::new("TEST-1001", "Test 1001"),
            "test 1001 detail",
            None,
        );
        let line = to_log_format_without_stack_trace(&err);
        assert_eq!(
            line,
            format!(
                "[error_code={}] [error_id={}] {}",
                err.error_code().code,
                err.id(),
                err
            )
        );
    }

    #[test]
    fn test_log_formats_differ_for_multi_cause() {
        let err = multi_cause_error();

        assert_eq!(
            to_log_format(&err),
            "[error_code=TOP] [error_id=main] parent detail\nCaused by (1/1): child detail"
        );
        assert_eq!(
            to_log_format_without_stack_trace(&err),
            "[error_code=TOP] [error_id=main] Top: parent detail"
        );
    }

    #[test]
    fn test_log_format_through_trait_object() {
        let err: Box<dyn CodedError> =
            Box::new(ErrCodeError::new(ErrorCode::new("E", "e"), "d", None).with_id("x"));
        assert_eq!(to_log_format(err.as_ref()), "[error_code=E] [error_id=x] d");
    }

    #[test]
    fn test_log_error_emits_stack_trace_and_fields() {
        let logs = capture_log_error(&multi_cause_error(), &LoggingConfig::default());

        let line = "[error_code=TOP] [error_id=main] parent detail\nCaused by (1/1): child detail";
        assert!(logs.contains("ERROR"));
        assert!(logs.contains(line));
        // structured fields follow the message
        assert!(logs.contains("child detail error_code=TOP error_id=main"));
    }

    #[test]
    fn test_log_error_emits_short_form_when_configured() {
        let config = LoggingConfig {
            include_stack_trace: false,
            ..LoggingConfig::default()
        };
        let logs = capture_log_error(&multi_cause_error(), &config);

        assert!(logs.contains("[error_code=TOP] [error_id=main] Top: parent detail"));
        assert!(!logs.contains("Caused by"));
        assert!(logs.contains("Top: parent detail error_code=TOP error_id=main"));
    }
}

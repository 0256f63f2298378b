//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use emotiles::PuzzleError;
    use emotiles::io::error::{WithPath, background_task_error, invalid_layout};
    use std::error::Error;
    use std::path::{Path, PathBuf};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = PuzzleError::FileSystem {
            path: "/tmp/board.toml".into(),
            operation: "read layout",
            source: io_error,
        };

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("read layout"));
        assert!(message.contains("/tmp/board.toml"));
    }

    // Tests only bookkeeping failures count as invariant violations
    // Verified by classifying InvalidLayout as an invariant violation
    #[test]
    fn test_invariant_violation_classification() {
        assert!(PuzzleError::CardNotFound { id: 3 }.is_invariant_violation());
        assert!(PuzzleError::PermutationExhausted { generated: 6 }.is_invariant_violation());
        assert!(PuzzleError::GeneratorMissing.is_invariant_violation());
        assert!(PuzzleError::CentersExhausted { tried: 9 }.is_invariant_violation());
        assert!(!invalid_layout(&"bad").is_invariant_violation());
        assert!(!background_task_error(&"panicked").is_invariant_violation());
    }

    // Tests messages name the offending values
    // Verified by omitting the id from the message
    #[test]
    fn test_error_messages() {
        let not_found = PuzzleError::CardNotFound { id: 17 };
        assert!(not_found.to_string().contains("17"));

        let exhausted = PuzzleError::PermutationExhausted { generated: 40_320 };
        assert!(exhausted.to_string().contains("40320"));

        let no_centers = PuzzleError::CentersExhausted { tried: 9 };
        assert!(no_centers.to_string().contains("after 9 center choices"));

        let layout = invalid_layout(&"expected 9 cards").to_string();
        assert!(layout.contains("expected 9 cards"));
        assert!(PuzzleError::GeneratorMissing.source().is_none());
    }

    // Tests with_path attaches the path and operation to I/O failures
    // Verified by dropping the operation in the conversion
    #[test]
    fn test_with_path_context() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::other("disk full"));
        let error = result.with_path(Path::new("out.toml"), "write layout");

        let context = match error {
            Err(PuzzleError::FileSystem {
                path,
                operation,
                ..
            }) => Some((path, operation)),
            _ => None,
        };
        assert_eq!(context, Some((PathBuf::from("out.toml"), "write layout")));
    }
}

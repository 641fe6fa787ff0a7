//! Context types for rule execution.

use std::path::Path;

/// Context provided to rules for the file being checked.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Path of the file, as reported in diagnostics.
    pub path: &'a Path,
    /// Raw source text, when the loader supplied it.
    pub source: Option<&'a str>,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, source: Option<&'a str>) -> Self {
        Self { path, source }
    }

    /// Calculates the byte offset for a 1-indexed line and column, or 0 when
    /// no source text is available or the position is out of bounds.
    ///
    /// Offsets are computed from the raw text, so multi-byte line terminators
    /// (`\r\n`) are counted exactly.
    #[must_use]
    pub fn offset_for(&self, line: usize, column: usize) -> usize {
        let Some(source) = self.source else {
            return 0;
        };
        if line == 0 {
            return 0;
        }

        let mut current = 1;
        let mut line_start = 0;
        if line > 1 {
            for (i, byte) in source.bytes().enumerate() {
                if byte == b'\n' {
                    current += 1;
                    if current == line {
                        line_start = i + 1;
                        break;
                    }
                }
            }
            if current < line {
                return 0;
            }
        }

        line_start + column.saturating_sub(1)
    }
}

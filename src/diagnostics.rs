/*
 * ==========================================================================
 * PAWSCAL - Pascal with Paws!
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawscal-lang.com
 * Website:  https://www.pawscal-lang.com
 * Github:   https://github.com/samwilcox/pawscal
 *
 * License:
 * This file is part of the PAWSCAL programming language project.
 *
 * PAWSCAL is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 * Full license text available at:
 *    https://license.pawscal-lang.com
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use crate::error::PawscalError;
use crate::span::Span;

/// Renders human-friendly, compiler-style diagnostics for PAWSCAL errors.
///
/// Output format (inspired by `rustc`, simplified and colorless):
///
/// ```text
/// error[E_NAME]: undeclared variable 'y'
///   --> demo.paw:3:10
///    |
///  3 | x := y + 1
///    |      ^
/// help: declare 'y' in the VAR section before using it
/// ```
pub struct DiagnosticPrinter {
    /// Full source code of the file being run, kept whole so the
    /// offending line can be extracted.
    source: String,

    /// Name of the source file, used only for display.
    file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Formats a diagnostic as a string.
    pub fn render(&self, error: &PawscalError) -> String {
        let Span { line, column } = error.span;

        let lines: Vec<&str> = self.source.lines().collect();
        // Lines are 1-indexed in diagnostics; saturate so line 0 can't underflow.
        let src_line = lines.get(line.saturating_sub(1)).unwrap_or(&"");

        let mut out = format!(
            "error[{}]: {}\n  --> {}:{}:{}\n",
            error.code,
            error.message,
            self.file_name,
            line,
            column + 1
        );

        out.push_str("   |\n");
        out.push_str(&format!("{:>3} | {}\n", line, src_line));

        let mut underline = String::new();
        for _ in 0..column {
            underline.push(' ');
        }
        underline.push('^');
        out.push_str(&format!("   | {}\n", underline));

        if let Some(help) = &error.help {
            out.push_str(&format!("\nhelp: {}\n", help));
        }

        out
    }

    /// Prints a formatted diagnostic to stderr.
    pub fn print(&self, error: &PawscalError) {
        eprint!("{}", self.render(error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_points_at_the_offending_column() {
        let source = "x := y + 1";
        let error = PawscalError::name_error("undeclared variable 'y'", Span::new(1, 5))
            .with_help("declare 'y' before using it");

        let printer = DiagnosticPrinter::new("demo.paw", source);
        let rendered = printer.render(&error);

        assert!(rendered.contains("error[E_NAME]: undeclared variable 'y'"));
        assert!(rendered.contains("--> demo.paw:1:6"));
        assert!(rendered.contains("  1 | x := y + 1"));
        assert!(rendered.contains("   |      ^"));
        assert!(rendered.contains("help: declare 'y' before using it"));
    }
}

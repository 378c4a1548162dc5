/*
 * ==========================================================================
 * PAWSCAL - Pascal with Paws!
 * ==========================================================================
 *
 * Command-Line Entry Point
 *
 * Reads a source file, drives the pipeline stage by stage, and writes the
 * result report to the chosen sink. The sink is opened exactly once,
 * flushed explicitly, and closed on every exit path; errors render as
 * compiler-style diagnostics on stderr and exit non-zero.
 *
 * --------------------------------------------------------------------------
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

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use pawscal::diagnostics::DiagnosticPrinter;
use pawscal::interpreter::display::{environment_report, environment_to_json, symbol_report};
use pawscal::{interpreter, parser, resolver, Dialect};

/// PAWSCAL runs programs in a small Pascal-flavored language and reports
/// the final variable bindings as `name = value` lines.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The source file to run.
    file: PathBuf,

    /// Parse the declaration-free dialect (variables come into existence
    /// at first assignment; no PROGRAM header).
    #[arg(long)]
    untyped: bool,

    /// Write the result report to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit the final bindings as a JSON object instead of text lines.
    #[arg(long)]
    json: bool,

    /// Also report the resolved symbol table, before the bindings.
    #[arg(long)]
    dump_symbols: bool,
}

fn main() {
    let args = Args::parse();

    let source = fs::read_to_string(&args.file).unwrap_or_else(|_| {
        eprintln!(
            "Failed to read the input file '{}'. Perhaps this file does not exist?",
            args.file.display()
        );
        process::exit(1);
    });

    // Open the sink up front so a bad output path fails before any work.
    let mut sink: Box<dyn Write> = match &args.output {
        Some(path) => match File::create(path) {
            Ok(file) => Box::new(BufWriter::new(file)),
            Err(e) => {
                eprintln!("Failed to open output file '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => Box::new(io::stdout()),
    };

    let dialect = if args.untyped {
        Dialect::Untyped
    } else {
        Dialect::Typed
    };

    let file_name = args.file.display().to_string();

    if let Err(error) = run(&source, dialect, &args, &mut sink) {
        DiagnosticPrinter::new(file_name, source).print(&error);
        process::exit(1);
    }
}

/// Drives the pipeline stage by stage and writes the report.
///
/// Staged (rather than going through `pawscal::execute`) so the resolver's
/// table is still around for `--dump-symbols`.
fn run(
    source: &str,
    dialect: Dialect,
    args: &Args,
    sink: &mut Box<dyn Write>,
) -> Result<(), pawscal::PawscalError> {
    let program = parser::parse(source, dialect)?;
    let table = resolver::resolve(&program, dialect)?;
    let env = interpreter::run(&program)?;

    let mut write_line = |line: &str| {
        if writeln!(sink, "{}", line).is_err() {
            eprintln!("Failed to write to the output sink");
            process::exit(1);
        }
    };

    if args.dump_symbols {
        for line in symbol_report(&table) {
            write_line(&line);
        }
    }

    if args.json {
        let json = environment_to_json(&env);
        let pretty = serde_json::to_string_pretty(&json).unwrap_or_else(|_| "{}".to_string());
        write_line(&pretty);
    } else {
        for line in environment_report(&env) {
            write_line(&line);
        }
    }

    if sink.flush().is_err() {
        eprintln!("Failed to flush the output sink");
        process::exit(1);
    }

    Ok(())
}

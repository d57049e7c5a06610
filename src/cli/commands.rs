//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use sascheck_core::lang::categories::{self, CategoryScope};
use sascheck_syntax::{Report, ScanConfig, decode, scan_with_config};

use super::{CheckArgs, CliError, CliResult, ExitCode};
use crate::render::{self, OutputFormat, json::JsonEntry};

/// Maximum source size (100 MiB)
///
/// Larger inputs are rejected before they are read.
pub const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Display name used for standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// Message printed for inputs that contain only whitespace.
pub const BLANK_MESSAGE: &str = "no SAS code to check";

// ============================================================================
// Inputs
// ============================================================================

/// One input named on the command line, after directory expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    pub fn display_name(&self) -> String {
        match self {
            Input::Stdin => STDIN_NAME.to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }
}

/// What checking one input produced.
#[derive(Debug)]
pub enum Outcome {
    /// The input was scanned; `source` is kept for source-annotated rendering.
    Scanned { source: String, report: Report },
    /// The input was empty or whitespace-only and was not scanned.
    Blank,
}

impl Outcome {
    fn findings(&self) -> usize {
        match self {
            Outcome::Scanned { report, .. } => report.total(),
            Outcome::Blank => 0,
        }
    }
}

/// Expand command-line paths into inputs.
///
/// - `-` is standard input
/// - directories are walked for `.sas` files
/// - anything else is taken as a file, so unreadable paths are reported when read
pub fn collect_inputs(paths: &[PathBuf]) -> CliResult<Vec<Input>> {
    let mut inputs = Vec::new();

    for path in paths {
        if path.as_os_str() == "-" {
            inputs.push(Input::Stdin);
        } else if path.is_dir() {
            let files = collect_sas_files(path);
            if files.is_empty() {
                tracing::warn!("No .sas files found under {}", path.display());
            }
            inputs.extend(files.into_iter().map(Input::File));
        } else {
            inputs.push(Input::File(path.clone()));
        }
    }

    if inputs.is_empty() {
        return Err(CliError::failure("No .sas files found"));
    }
    Ok(inputs)
}

/// Recursively collect `.sas` files, skipping hidden directories. Results are sorted.
///
/// Symlinked directories are not followed, so link cycles cannot make the walk revisit files.
pub fn collect_sas_files(path: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if path.is_file() {
        if is_sas_file(path) {
            files.push(path.to_path_buf());
        }
    } else if path.is_dir() {
        if let Ok(entries) = fs::read_dir(path) {
            for entry in entries.flatten() {
                let entry_path = entry.path();
                if entry_path.is_dir() {
                    let is_link = entry.file_type().is_ok_and(|t| t.is_symlink());
                    let name = entry_path.file_name().and_then(|n| n.to_str()).unwrap_or("");
                    if is_link {
                        tracing::debug!("Skipping symlinked directory {}", entry_path.display());
                    } else if !name.starts_with('.') {
                        files.extend(collect_sas_files(&entry_path));
                    }
                } else if is_sas_file(&entry_path) {
                    files.push(entry_path);
                }
            }
        }
    }

    files.sort();
    files
}

fn is_sas_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("sas"))
}

// ============================================================================
// Reading
// ============================================================================

/// Read a source file.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MiB)
pub fn read_source(file_path: &Path) -> CliResult<Vec<u8>> {
    // Check file size before reading
    let metadata = fs::metadata(file_path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path.display(), e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path.display(),
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path.display(), e)))
}

/// Read at most `limit` bytes from `reader`, failing if there is more.
pub fn read_limited(reader: impl Read, name: &str, limit: u64) -> CliResult<Vec<u8>> {
    let mut bytes = Vec::new();
    reader
        .take(limit.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(|e| CliError::failure(format!("Error reading {name}: {e}")))?;

    if bytes.len() as u64 > limit {
        return Err(CliError::failure(format!(
            "Input {name} is too large (more than {limit} bytes)"
        )));
    }
    Ok(bytes)
}

fn read_input(input: &Input) -> CliResult<Vec<u8>> {
    match input {
        Input::Stdin => read_limited(io::stdin().lock(), STDIN_NAME, MAX_SOURCE_SIZE),
        Input::File(path) => read_source(path),
    }
}

// ============================================================================
// Checking
// ============================================================================

/// Decode and scan raw input. Blank input is not scanned.
pub fn check_bytes(name: &str, bytes: &[u8], config: &ScanConfig) -> CliResult<Outcome> {
    let source = decode(bytes).map_err(|e| CliError::failure(format!("Error scanning {name}: {e}")))?;

    if source.trim().is_empty() {
        tracing::debug!(input = name, "blank input, skipping scan");
        return Ok(Outcome::Blank);
    }

    let report = scan_with_config(source, config);
    Ok(Outcome::Scanned {
        source: source.to_string(),
        report,
    })
}

/// Check every path and print the reports to stdout.
pub fn check_paths(args: &CheckArgs) -> CliResult<ExitCode> {
    let inputs = collect_inputs(&args.paths)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    check_inputs(&mut out, &inputs, args)
}

/// Check `inputs` in order, writing rendered reports to `out`.
///
/// A failing input is reported on stderr and does not stop the others. The exit code is
/// [`ExitCode::FAILURE`] if any input failed, else [`ExitCode::ISSUES_FOUND`] if any finding was reported.
pub fn check_inputs(out: &mut impl Write, inputs: &[Input], args: &CheckArgs) -> CliResult<ExitCode> {
    let config = args.scan_config();
    let multiple = inputs.len() > 1;

    let mut failures = 0usize;
    let mut findings = 0usize;
    let mut printed = false;
    let mut checked: Vec<(String, Outcome)> = Vec::new();

    for input in inputs {
        let name = input.display_name();
        let outcome = match read_input(input).and_then(|bytes| check_bytes(&name, &bytes, &config)) {
            Ok(outcome) => outcome,
            Err(e) => {
                eprintln!("{}", e.message);
                failures += 1;
                continue;
            }
        };
        findings += outcome.findings();

        if args.format == OutputFormat::Json {
            checked.push((name, outcome));
            continue;
        }

        let mut section = String::new();
        if multiple {
            if printed {
                section.push('\n');
            }
            section.push_str(&format!("==> {name} <==\n"));
        }
        section.push_str(&render_outcome(args.format, &name, &outcome)?);
        write_output(out, &section)?;
        printed = true;
    }

    if args.format == OutputFormat::Json {
        let entries: Vec<JsonEntry<'_>> = checked
            .iter()
            .map(|(name, outcome)| JsonEntry {
                file: name,
                issues: match outcome {
                    Outcome::Scanned { report, .. } => Some(report),
                    Outcome::Blank => None,
                },
            })
            .collect();
        let json = render::json::render_entries(&entries).map_err(render_error)?;
        write_output(out, &format!("{json}\n"))?;
    }

    tracing::debug!(inputs = inputs.len(), findings, failures, "check complete");

    if failures > 0 {
        Ok(ExitCode::FAILURE)
    } else if findings > 0 {
        Ok(ExitCode::ISSUES_FOUND)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Render one checked input in a non-JSON format.
pub fn render_outcome(format: OutputFormat, name: &str, outcome: &Outcome) -> CliResult<String> {
    match outcome {
        Outcome::Blank => Ok(format!("{name}: {BLANK_MESSAGE}\n")),
        Outcome::Scanned { source, report } => render::render(format, report, name, source).map_err(render_error),
    }
}

fn render_error(e: render::RenderError) -> CliError {
    CliError::failure(format!("Error rendering report: {e}"))
}

fn write_output(out: &mut impl Write, text: &str) -> CliResult<()> {
    out.write_all(text.as_bytes())
        .map_err(|e| CliError::failure(format!("Error writing output: {e}")))
}

// ============================================================================
// Categories
// ============================================================================

/// Print the category registry.
pub fn list_categories() -> CliResult<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_output(&mut out, &categories_table())?;
    Ok(ExitCode::SUCCESS)
}

/// One row per category: identifier, heading, scope.
pub fn categories_table() -> String {
    categories::CATEGORIES
        .iter()
        .map(|info| {
            let scope = match info.scope {
                CategoryScope::PerLine => "per-line",
                CategoryScope::WholeFile => "whole-file",
            };
            format!("{:<22} {:<22} {}\n", info.canonical, info.heading, scope)
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sascheck_syntax::CategoryId;

    fn fixture(rel: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(rel)
    }

    fn text_args() -> CheckArgs {
        CheckArgs {
            paths: Vec::new(),
            format: OutputFormat::Text,
            max_line_length: 80,
        }
    }

    #[test]
    fn test_blank_input_is_not_scanned() {
        let inputs: [&[u8]; 3] = [b"", b"   ", b"\n\t\n"];
        for bytes in inputs {
            let outcome = check_bytes("x.sas", bytes, &ScanConfig::default()).unwrap();
            assert!(matches!(outcome, Outcome::Blank));
        }
    }

    #[test]
    fn test_invalid_utf8_is_a_failure() {
        let err = check_bytes("bad.sas", b"data a;\n\xff", &ScanConfig::default()).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("bad.sas"));
        assert!(err.message.contains("line 2"));
    }

    #[test]
    fn test_check_bytes_uses_config() {
        let config = ScanConfig::new().with_max_line_length(5);
        let Outcome::Scanned { report, .. } = check_bytes("a.sas", b"x = 12345;", &config).unwrap() else {
            panic!("expected a scan");
        };
        assert_eq!(report.get(CategoryId::LongLines).len(), 1);
    }

    #[test]
    fn test_read_limited_rejects_oversized_input() {
        assert_eq!(read_limited(&b"abc"[..], "t", 3).unwrap(), b"abc");
        let err = read_limited(&b"abcd"[..], "t", 3).unwrap_err();
        assert!(err.message.contains("too large"));
    }

    #[test]
    fn test_collect_inputs_expands_directories() {
        let inputs = collect_inputs(&[fixture("clean"), PathBuf::from("-")]).unwrap();
        assert_eq!(inputs.last(), Some(&Input::Stdin));
        assert!(inputs.len() > 1);
        for input in &inputs[..inputs.len() - 1] {
            let Input::File(path) = input else { panic!("expected a file") };
            assert!(is_sas_file(path));
        }
    }

    /// Fresh scratch directory under the system temp dir.
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("sascheck_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_walk_only_skips_hidden_directories() {
        let dir = scratch_dir("walk");
        for sub in ["target", "node_modules", ".git"] {
            fs::create_dir_all(dir.join(sub)).unwrap();
            fs::write(dir.join(sub).join("a.sas"), "x = 1;").unwrap();
        }

        let files = collect_sas_files(&dir);
        assert_eq!(files, vec![dir.join("node_modules/a.sas"), dir.join("target/a.sas")]);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_does_not_follow_directory_symlinks() {
        let dir = scratch_dir("symlink");
        fs::write(dir.join("a.sas"), "x = 1;").unwrap();
        fs::create_dir_all(dir.join("sub")).unwrap();
        std::os::unix::fs::symlink(&dir, dir.join("sub/loop")).unwrap();

        let files = collect_sas_files(&dir);
        assert_eq!(files, vec![dir.join("a.sas")]);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_sas_extension_is_case_insensitive() {
        assert!(is_sas_file(Path::new("a.sas")));
        assert!(is_sas_file(Path::new("B.SAS")));
        assert!(!is_sas_file(Path::new("notes.txt")));
        assert!(!is_sas_file(Path::new("sas")));
    }

    #[test]
    fn test_missing_file_fails_without_stopping_others() {
        let inputs = [
            Input::File(fixture("does-not-exist.sas")),
            Input::File(fixture("clean/report.sas")),
        ];
        let mut out = Vec::new();
        let code = check_inputs(&mut out, &inputs, &text_args()).unwrap();
        assert_eq!(code, ExitCode::FAILURE);
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("report.sas <=="));
        assert!(!out.contains("does-not-exist"));
    }

    #[test]
    fn test_exit_codes_follow_findings() {
        let mut out = Vec::new();
        let clean = [Input::File(fixture("clean/report.sas"))];
        assert_eq!(check_inputs(&mut out, &clean, &text_args()).unwrap(), ExitCode::SUCCESS);

        let defective = [Input::File(fixture("defective/missing_run.sas"))];
        assert_eq!(
            check_inputs(&mut out, &defective, &text_args()).unwrap(),
            ExitCode::ISSUES_FOUND
        );
    }

    #[test]
    fn test_json_output_is_one_document() {
        let inputs = [
            Input::File(fixture("clean/report.sas")),
            Input::File(fixture("defective/missing_run.sas")),
        ];
        let args = CheckArgs {
            format: OutputFormat::Json,
            ..text_args()
        };
        let mut out = Vec::new();
        check_inputs(&mut out, &inputs, &args).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_categories_table_lists_all() {
        let table = categories_table();
        assert_eq!(table.lines().count(), CategoryId::COUNT);
        assert!(table.starts_with("missing_semicolons"));
        assert!(table.contains("Missing Run Quit"));
        assert!(table.lines().last().unwrap().ends_with("per-line"));
    }
}

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use mediatab::{AnnotationPolicy, DeclarationStyle, TableCompiler, BUILTIN_TABLE};

const DEFAULT_LOG_FILTER: &str = "mediatab=warn";
const VERBOSE_LOG_FILTER: &str = "mediatab=debug";

pub fn main() -> ExitCode {
    let args = Cli::parse();

    let default_filter = if args.verbose { VERBOSE_LOG_FILTER } else { DEFAULT_LOG_FILTER };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(args, io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Cli, out: impl Write) -> mediatab::Result<()> {
    let style = match args.name {
        Some(name) => DeclarationStyle::named_export(name)?,
        None => DeclarationStyle::default_export(),
    };
    let policy = if args.strip_annotations {
        AnnotationPolicy::Strip
    } else {
        AnnotationPolicy::Keep
    };
    let compiler = TableCompiler::new()
        .with_style(style)
        .with_policy(policy);

    let user_table = match &args.table {
        Some(path) => Some(fs::read_to_string(path)?),
        None => None,
    };
    let table = user_table.as_deref().unwrap_or(BUILTIN_TABLE);

    compiler.write_to(table, out)
}

/// Print the extension-to-media-type table as a TypeScript constant.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Export the table as `export const <name>` instead of a default export
    #[arg(short = 'n', long = "name", value_name = "identifier")]
    name: Option<String>,
    /// Drop the commentary embedded in the media type column
    #[arg(long = "strip-annotations")]
    strip_annotations: bool,
    /// Compile this tab-delimited table instead of the built-in one
    #[arg(short = 't', long = "table", value_name = "file")]
    table: Option<PathBuf>,
    /// Log debug details to stderr (overridden by RUST_LOG)
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::tempdir;
    use mediatab::Error;
    use super::*;

    const EXPECTED_BUILTIN: &str = include_str!("../../tests/data/builtin_declaration.ts");

    fn run_with(args: &[&str]) -> mediatab::Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("mediatab").chain(args.iter().copied()))
            .expect("arguments should parse");
        let mut out = Vec::new();
        run(cli, &mut out)?;
        Ok(String::from_utf8(out).expect("output should be UTF-8"))
    }

    #[test]
    fn no_arguments_prints_builtin_declaration() {
        assert_eq!(run_with(&[]).unwrap(), EXPECTED_BUILTIN);
    }

    #[test]
    fn compiles_table_file_and_skips_malformed_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("types.tsv");
        let table = ".css\tCSS\ttext/css\nbroken row\n.htm, .html\tHTML\ttext/html\n";
        fs::write(&path, table).unwrap();

        let output = run_with(&["--table", path.to_str().unwrap()]).unwrap();
        let expected = concat!(
            "export default = {\n",
            "  \"css\": [\n    \"text/css\"\n  ],\n",
            "  \"htm\": [\n    \"text/html\"\n  ],\n",
            "  \"html\": [\n    \"text/html\"\n  ]\n",
            "} as const;\n",
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn missing_table_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.tsv");
        let result = run_with(&["-t", path.to_str().unwrap()]);
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn invalid_name_is_rejected_before_output() {
        let cli = Cli::try_parse_from(["mediatab", "--name", "media-types"]).unwrap();
        let mut out = Vec::new();
        let result = run(cli, &mut out);
        assert!(matches!(result, Err(Error::InvalidIdentifier(name)) if name == "media-types"));
        assert!(out.is_empty());
    }

    #[test]
    fn name_and_strip_flags_shape_the_declaration() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("types.tsv");
        fs::write(&path, ".gz\tGZip\tapplication/gzip. Note, Windows uses application/x-gzip.\n")
            .unwrap();

        let output = run_with(&[
            "-n", "MEDIA_TYPES",
            "--strip-annotations",
            "-t", path.to_str().unwrap(),
        ]).unwrap();
        assert_eq!(
            output,
            concat!(
                "export const MEDIA_TYPES = {\n",
                "  \"gz\": [\n    \"application/gzip\"\n  ]\n",
                "} as const;\n",
            ),
        );
    }
}

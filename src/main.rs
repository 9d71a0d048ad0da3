use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tripath::{
    find_minimum_path, parse_triangle_with, write_report, MinPath, ReaderConfig, Triangle,
    TriangleReader,
};

#[derive(Parser, Debug)]
#[command(
    name = "tripath",
    about = "Find the minimum-sum path from the apex of a triangle to its base"
)]
struct Cli {
    /// Triangle literal, e.g. "[[2],[3,4],[6,5,7],[4,1,8,3]]".
    #[arg(long, conflicts_with = "file")]
    triangle: Option<String>,

    /// File containing a single triangle literal.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Give up after this many rejected lines in interactive mode.
    #[arg(long)]
    max_attempts: Option<usize>,

    /// Fewest rows accepted from text input.
    #[arg(long, default_value_t = 2)]
    min_rows: usize,

    /// Print only the minimum sum.
    #[arg(long, short)]
    quiet: bool,
}

impl Cli {
    fn reader_config(&self) -> ReaderConfig {
        ReaderConfig::default()
            .with_min_rows(self.min_rows)
            .with_max_attempts(self.max_attempts)
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(cli, stdin.lock(), BufWriter::new(stdout.lock()))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli, input: impl BufRead, mut out: impl Write) -> Result<()> {
    let triangle = load_triangle(&cli, input, &mut out)?;
    let result = find_minimum_path(&triangle);
    print_result(&mut out, &result, cli.quiet).context("failed to write result")?;
    Ok(())
}

fn load_triangle<W: Write>(cli: &Cli, input: impl BufRead, out: &mut W) -> Result<Triangle> {
    let config = cli.reader_config();

    if let Some(text) = &cli.triangle {
        return parse_triangle_with(text, &config).context("invalid --triangle argument");
    }

    if let Some(path) = &cli.file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read triangle from {}", path.display()))?;
        return parse_triangle_with(&text, &config)
            .with_context(|| format!("invalid triangle in {}", path.display()));
    }

    let mut reader = TriangleReader::with_config(input, out, config);
    reader
        .read_triangle()
        .context("failed to read triangle from stdin")
}

fn print_result<W: Write>(out: &mut W, result: &MinPath, quiet: bool) -> io::Result<()> {
    if quiet {
        writeln!(out, "{}", result.minimum_sum())?;
        return out.flush();
    }
    write_report(out, result)
}

//! `bin2c` command line tool.

use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use bin2c::{
    DEFAULT_BUFFER_CAPACITY, Declaration, IoSink, IoSource, LOOKUP_TABLE, Summary, Transcoder,
    TranscoderOptions,
};
use clap::{ArgAction, Parser};
use env_logger::Env;

/// Embed files in C source code.
///
/// Reads data from stdin and writes it to stdout, escaped so it can be pasted
/// into a C string literal. With NAME, writes a complete C file exporting
/// `const char NAME[]` and `const size_t NAME_len` (the length of the input,
/// excluding the terminating NUL).
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Turn debugging information on
    #[arg(short, long, action(ArgAction::Count))]
    verbose: u8,
    /// Only print errors
    #[arg(short, long, action(ArgAction::Count))]
    quiet: u8,
    /// Size in bytes of the input and output buffers
    #[arg(
        long,
        env = "BIN2C_BUFFER_SIZE",
        default_value_t = DEFAULT_BUFFER_CAPACITY
    )]
    buffer_size: usize,
    /// Write the packed 1024 byte lookup table to stdout instead
    #[arg(long, conflicts_with = "name")]
    emit_table: bool,
    /// Symbol name for the generated C declaration
    name: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match (args.quiet, args.verbose) {
        (0, 0) => "warn,bin2c=info",
        (1, 0) => "warn",
        (_, 0) => "error",
        (_, 1) => "info,bin2c=debug",
        (_, 2) => "debug",
        (_, 3) => "debug,bin2c=trace",
        _ => "trace",
    };
    env_logger::init_from_env(Env::default().default_filter_or(log_level));

    let stdout = io::stdout();
    if args.emit_table {
        return emit_table(stdout.lock());
    }

    let declaration = args.name.map(Declaration::new).transpose()?;
    let options = TranscoderOptions::with_buffer_capacity(args.buffer_size);
    let summary = transcode(
        options,
        declaration.as_ref(),
        io::stdin().lock(),
        stdout.lock(),
    )?;
    log::debug!(
        "Encoded {} bytes into {} bytes",
        summary.bytes_in,
        summary.bytes_out
    );

    Ok(())
}

fn emit_table<W: Write>(mut out: W) -> Result<()> {
    log::debug!("Writing packed lookup table");
    out.write_all(&LOOKUP_TABLE.to_packed())
        .and_then(|()| out.flush())
        .context("Failed to write lookup table")
}

fn transcode<R: Read, W: Write>(
    options: TranscoderOptions,
    declaration: Option<&Declaration>,
    input: R,
    output: W,
) -> Result<Summary> {
    let mut transcoder = Transcoder::new(options).context("Invalid --buffer-size")?;
    log::debug!("Using {options:?}");

    let source = IoSource::new(input);
    let mut sink = IoSink::new(output);

    if let Some(decl) = declaration {
        log::debug!("Wrapping output in declaration of {:?}", decl.name());
        transcoder
            .write_raw(&mut sink, decl.prologue().as_bytes())
            .context("Error writing data")?;
    }

    let summary = transcoder.run(source, &mut sink)?;

    if let Some(decl) = declaration {
        transcoder
            .write_raw(&mut sink, decl.epilogue().as_bytes())
            .context("Error writing data")?;
        transcoder.flush(&mut sink).context("Error writing data")?;
    }

    Ok(summary)
}

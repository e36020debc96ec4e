use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use zxing_shim::tools::{format_table, load_surface};
use zxing_shim::{
    BaseLogger, DecoderAsync, FormatMap, RqrrReader, SupportedFormat, ZxingDecoder,
};

#[derive(Parser)]
#[command(name = "shimtool", version, about = "zxing_shim CLI tools")]
struct Cli {
    /// Log decoder diagnostics
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the host format to engine token table
    Formats,
    /// Decode the first symbol in an image file
    Scan {
        #[arg(long)]
        image: PathBuf,
        /// Host format names to enable, e.g. QR_CODE (repeatable, default: all)
        #[arg(long = "format")]
        formats: Vec<SupportedFormat>,
        /// Print every match instead of the first
        #[arg(long)]
        all: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Formats => {
            for (format, token) in format_table() {
                println!(
                    "{:>2}  {:<18} {}",
                    format as u8,
                    format.name(),
                    token.unwrap_or("-")
                );
            }
            let map = FormatMap::new();
            let supported = SupportedFormat::ALL
                .iter()
                .filter(|format| map.supports(**format))
                .count();
            println!("{supported}/{} formats supported", SupportedFormat::ALL.len());
            ExitCode::SUCCESS
        }
        Command::Scan {
            image,
            formats,
            all,
        } => scan(image, formats, all, cli.verbose),
    }
}

fn scan(image: PathBuf, formats: Vec<SupportedFormat>, all: bool, verbose: bool) -> ExitCode {
    let surface = match load_surface(&image) {
        Ok(surface) => surface,
        Err(err) => {
            eprintln!("failed to load {}: {err}", image.display());
            return ExitCode::FAILURE;
        }
    };

    let requested = if formats.is_empty() {
        SupportedFormat::ALL.to_vec()
    } else {
        formats
    };
    let decoder = match ZxingDecoder::new(
        &requested,
        verbose,
        Arc::new(BaseLogger::new(verbose)),
        Arc::new(RqrrReader::new()),
    ) {
        Ok(decoder) => decoder,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread().build() {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("failed to start runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let outcome = runtime.block_on(async {
        if all {
            decoder.decode_all_async(&surface).await
        } else {
            decoder.decode_async(&surface).await.map(|r| vec![r])
        }
    });
    let elapsed = start.elapsed();

    match outcome {
        Ok(results) => {
            for (i, result) in results.iter().enumerate() {
                println!(
                    "[{i}] format={} decoder={} text={}",
                    result.format, result.debug_data.decoder_name, result.text
                );
            }
            println!("{} in {:.2?}", image.display(), elapsed);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}: {err}", image.display());
            ExitCode::FAILURE
        }
    }
}

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use userpass::{
    DEFAULT_INPUT, DEFAULT_LENGTH, DEFAULT_OUTPUT, Error, PasswordGenerator, augment_file,
};

#[derive(Parser, Debug)]
#[command(name = "userpass")]
#[command(about = "Append a random password column to a CSV file of users")]
struct Args {
    /// CSV file to read; the first row is the header
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// CSV file to write (created or overwritten)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Number of characters in each generated password
    #[arg(short, long, default_value_t = DEFAULT_LENGTH)]
    length: usize,

    /// Seed the random generator for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let generator = match args.seed {
        Some(seed) => PasswordGenerator::from_seed(seed),
        None => PasswordGenerator::from_entropy(),
    };
    let mut generator = generator.with_length(args.length);

    let summary = augment_file(&args.input, &args.output, &mut generator)?;

    println!(
        "Wrote {} rows with {} columns to {:?}",
        summary.rows, summary.columns, args.output
    );
    Ok(())
}

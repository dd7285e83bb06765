use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

use cczkit::files::{decode_file, output_path, read_file};
use cczkit::formats::ccz::{DEFAULT_MAX_UNCOMPRESSED_LEN, Decoder};

/// Decompress a CCZ container (e.g. `texture.pvr.ccz`) to disk.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// CCZ file to decode.
    input: PathBuf,

    /// Destination file [default: input with `.ccz` stripped].
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Largest uncompressed length accepted from the header, in bytes.
    #[arg(long, default_value_t = DEFAULT_MAX_UNCOMPRESSED_LEN)]
    max_size: u32,

    /// Print the parsed header and exit without decompressing.
    #[arg(long)]
    info: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let decoder = Decoder::new().max_uncompressed_len(args.max_size);

    if args.info {
        let data = read_file(&args.input)
            .with_context(|| format!("failed to read {}", args.input.display()))?;
        let header = decoder
            .parse_header(&data)
            .with_context(|| format!("invalid CCZ file {}", args.input.display()))?;
        println!("signature:         {}", String::from_utf8_lossy(&header.signature));
        println!("compression type:  {}", header.compression_type);
        println!("version:           {}", header.version);
        println!("reserved:          {:#010x}", header.reserved);
        println!("uncompressed size: {}", header.uncompressed_len);
        println!("file size:         {}", data.len());
        println!("size limit:        {}", decoder.limit());
        return Ok(());
    }

    let output = args.output.unwrap_or_else(|| output_path(&args.input));
    decode_file(&args.input, &output, &decoder)
        .with_context(|| format!("failed to decode {}", args.input.display()))?;

    Ok(())
}

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use log::{error, info};

use cyrcipher::alphabet::{decode_cp1251, try_encode_cp1251};
use cyrcipher::source::{read_bytes, write_bytes};
use cyrcipher::stats::max_entropy;
use cyrcipher::{analyze, analyze_image, CipherError, FrequencyTable, RunConfig};

#[derive(Parser, Debug)]
#[command(name = "cyrcipher", version, about = "Classical Cyrillic ciphers and their statistics")]
struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run every cipher over a text file, one output file per cipher
    Encrypt(EncryptArgs),
    /// Print entropy and frequency statistics of files
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug)]
struct EncryptArgs {
    /// Input text, Windows-1251 unless --utf8 is given
    input: PathBuf,

    /// Directory for the output files
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Undo the ciphers instead of applying them
    #[arg(short, long)]
    decrypt: bool,

    /// Read and write UTF-8 instead of Windows-1251
    #[arg(long)]
    utf8: bool,

    /// Gronsfeld first key
    #[arg(long, value_delimiter = ',')]
    key1: Option<Vec<u32>>,

    /// Gronsfeld second key
    #[arg(long, value_delimiter = ',')]
    key2: Option<Vec<u32>>,

    /// Caesar shift
    #[arg(long)]
    shift: Option<u32>,

    /// Vigenère keyword
    #[arg(long)]
    keyword: Option<String>,

    /// LFSR seed, decimal or 0x-prefixed hex
    #[arg(long, value_parser = parse_seed)]
    seed: Option<u8>,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Files to analyze
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Treat the files as 24-bit BMP images
    #[arg(short, long)]
    bitmap: bool,

    /// Also print the frequency table
    #[arg(short, long)]
    table: bool,
}

fn parse_seed(value: &str) -> Result<u8, String> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => value.parse::<u8>(),
    };
    parsed.map_err(|e| format!("invalid seed {:?}: {}", value, e))
}

impl EncryptArgs {
    fn config(&self) -> RunConfig {
        let mut config = RunConfig::default();
        if let Some(key1) = &self.key1 {
            config.key1 = key1.clone();
        }
        if let Some(key2) = &self.key2 {
            config.key2 = key2.clone();
        }
        if let Some(shift) = self.shift {
            config.shift = shift;
        }
        if let Some(keyword) = &self.keyword {
            config.keyword = keyword.clone();
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config
    }
}

fn output_path(args: &EncryptArgs, cipher_name: &str) -> PathBuf {
    let stem = args
        .input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let suffix = if args.decrypt { "plain" } else { "enc" };
    args.out_dir
        .join(format!("{}.{}.{}.txt", stem, cipher_name, suffix))
}

fn run_encrypt(args: &EncryptArgs) -> Result<(), CipherError> {
    let raw = read_bytes(&args.input)?;
    let text = if args.utf8 {
        try_encode_cp1251(&String::from_utf8_lossy(&raw))?
    } else {
        raw
    };
    info!("loaded {} bytes from {}", text.len(), args.input.display());

    // validate every key before writing anything
    let config = args.config();
    let outputs = config
        .ciphers()
        .iter()
        .map(|cipher| -> Result<_, CipherError> {
            let out = if args.decrypt {
                cipher.decrypt(&text)?
            } else {
                cipher.encrypt(&text)?
            };
            Ok((cipher.kind(), out))
        })
        .collect::<Result<Vec<_>, _>>()?;

    for (kind, out) in outputs {
        let path = output_path(args, kind.name());
        if args.utf8 {
            write_bytes(&path, decode_cp1251(&out).as_bytes())?;
        } else {
            write_bytes(&path, &out)?;
        }
        info!("{} output written to {}", kind, path.display());
        println!("{:<10} entropy {:.4} bits/byte", kind, cyrcipher::entropy(&out));
    }
    Ok(())
}

/// Width of the longest bar in the frequency table.
const BAR_WIDTH: u64 = 40;

fn bar(count: u64, max_count: u64) -> String {
    if max_count == 0 {
        return String::new();
    }
    let len = (count * BAR_WIDTH).div_ceil(max_count);
    "#".repeat(len as usize)
}

fn print_table(table: &FrequencyTable) {
    let max_count = table.max_count();
    println!("{:>8} {:>6} {:>12}  {}", "symbol", "code", "frequency", "share");
    println!("{}", "-".repeat(30 + BAR_WIDTH as usize));
    for (byte, count) in table.ordered() {
        let symbol = match byte {
            0x21..=0x7E | 0x80..=0x97 | 0x99..=0x9F | 0xA1..=0xAC | 0xAE..=0xFF => {
                decode_cp1251(&[byte])
            }
            _ => ".".to_string(),
        };
        println!("{:>8} {:>6} {:>12}  {}", symbol, byte, count, bar(count, max_count));
    }
}

fn analyze_file(path: &Path, args: &AnalyzeArgs) -> Result<(), CipherError> {
    let bytes = read_bytes(path)?;
    if args.bitmap {
        let hist = analyze_image(&bytes)?;
        println!("{}:", path.display());
        for (name, table) in [
            ("combined", &hist.combined),
            ("red", &hist.red),
            ("green", &hist.green),
            ("blue", &hist.blue),
        ] {
            println!(
                "  {:<9} samples {:>10}  entropy {:.4}",
                name,
                table.total(),
                table.entropy()
            );
        }
        if args.table {
            print_table(&hist.combined);
        }
    } else {
        let table = analyze(&bytes);
        println!(
            "{}: {} bytes, {} distinct, entropy {:.4} (max {:.4})",
            path.display(),
            table.total(),
            table.distinct(),
            table.entropy(),
            max_entropy(&table)
        );
        if args.table {
            print_table(&table);
        }
    }
    Ok(())
}

fn run_analyze(args: &AnalyzeArgs) -> Result<(), CipherError> {
    for path in &args.files {
        analyze_file(path, args)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match &cli.command {
        Command::Encrypt(args) => run_encrypt(args),
        Command::Analyze(args) => run_analyze(args),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

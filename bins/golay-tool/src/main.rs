use clap::Parser;

use golay_core::codec_error::CodecErr;
use golay_core::{codec, debug, init_tables};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Golay (24,12) codec tool",
    long_about = "Encodes 12-bit data words and decodes/error-checks 24-bit codewords using the extended Golay (24,12,8) code from IRIG-106 Chapter 7"
)]
struct Args {
    /// Operation to perform
    #[arg(help = "Operation: [ encode | decode | errors ]")]
    operation: String,

    /// Input value
    #[arg(help = "Value, decimal or 0x-prefixed hex (12-bit data word for encode, 24-bit codeword otherwise)")]
    value: String,

    #[arg(short = 'l', long = "logfile", help = "Write a verbose log file")]
    logfile: Option<String>,
}

fn parse_value(input: &str) -> Result<u32, String> {
    let parsed = if let Some(hex) = input.strip_prefix("0x").or_else(|| input.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else {
        input.parse::<u32>()
    };
    parsed.map_err(|e| format!("invalid value '{}': {}", input, e))
}

fn run(operation: &str, value: u32) -> Result<(), CodecErr> {
    match operation {
        "encode" => {
            let data = u16::try_from(value).map_err(|_| CodecErr::DataOutOfRange { value })?;
            let codeword = codec().encode(data)?;
            println!("codeword: {:#08x} ({})", codeword, codeword);
        }
        "decode" => {
            let data = codec().decode(value)?;
            let bit_errors = codec().errors(value)?;
            println!("data word: {:#05x} ({})", data, data);
            if bit_errors < 4 {
                println!("bit errors corrected: {}", bit_errors);
            } else {
                println!("bit errors: >= 4, result unreliable");
            }
        }
        "errors" => {
            let bit_errors = codec().errors(value)?;
            println!("bit errors: {}", bit_errors);
        }
        other => {
            eprintln!("Error: Unsupported operation '{}'. Use: encode, decode, errors", other);
            std::process::exit(1);
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    let _guard = debug::setup_logging_default(args.logfile.clone());

    let value = match parse_value(&args.value) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    tracing::debug!("operation={} value={:#x}", args.operation, value);
    init_tables();

    if let Err(e) = run(args.operation.to_lowercase().as_str(), value) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

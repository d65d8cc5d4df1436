//! UCD query CLI.
//!
//! Commands:
//! - `ucd info <CODEPOINT>...` - Print every property of each code point
//! - `ucd encode <CODEPOINT>...` - Print UTF-8 bytes
//! - `ucd is <CODEPOINT> <CATEGORY>` - Test a general category or major class
//! - `ucd call <METHOD> <ARG>...` - Invoke a native `unicode` module method
//! - `ucd methods` - List native `unicode` module methods

mod codepoint;
mod output;

use std::process;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use ucd_core::Ucd;
use ucd_runtime::{unicode_module, Value};

use codepoint::parse_code_point;
use output::{format_bytes, format_properties};

#[derive(Parser)]
#[command(name = "ucd")]
#[command(about = "Unicode Character Database queries", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print category, bidi class, combining class, mirrored flag, UTF-8 and name
    Info {
        /// Code points (U+XXXX, 0xXXXX, decimal, or a single character)
        #[arg(required = true)]
        code_points: Vec<String>,
    },

    /// Print the UTF-8 encoding of each code point
    Encode {
        #[arg(required = true)]
        code_points: Vec<String>,
    },

    /// Test whether a code point is in a category ("Lu") or major class ("L")
    Is {
        code_point: String,
        category: String,
    },

    /// Call a native unicode module method (e.g. `call iscategory A L`)
    Call {
        method: String,
        args: Vec<String>,
    },

    /// List native unicode module methods
    Methods,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Info { code_points } => cmd_info(&code_points),
        Commands::Encode { code_points } => cmd_encode(&code_points),
        Commands::Is { code_point, category } => cmd_is(&code_point, &category),
        Commands::Call { method, args } => cmd_call(&method, &args),
        Commands::Methods => cmd_methods(),
    };

    if let Err(e) = result {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn cmd_info(code_points: &[String]) -> Result<()> {
    let ucd = Ucd::shared();
    for arg in code_points {
        let cp = parse_code_point(arg)?;
        println!("{}", format_properties(&ucd.properties(cp)?));
    }
    Ok(())
}

fn cmd_encode(code_points: &[String]) -> Result<()> {
    for arg in code_points {
        let cp = parse_code_point(arg)?;
        let encoded = ucd_core::encode(cp)?;
        println!("U+{:04X}\t{}", cp, format_bytes(&encoded));
    }
    Ok(())
}

fn cmd_is(code_point: &str, category: &str) -> Result<()> {
    let cp = parse_code_point(code_point)?;
    println!("{}", Ucd::shared().is_category(cp, category)?);
    Ok(())
}

fn cmd_call(method: &str, args: &[String]) -> Result<()> {
    let name = if method.contains('.') {
        method.to_string()
    } else {
        format!("unicode.{}", method)
    };
    let args: Vec<Value> = args.iter().map(|a| host_value(a)).collect();
    log::debug!("calling {} with {:?}", name, args);

    for ret in unicode_module().call(&name, &args)? {
        println!("{}", ret);
    }
    Ok(())
}

fn cmd_methods() -> Result<()> {
    for name in unicode_module().names() {
        println!("{}", name);
    }
    Ok(())
}

/// Numeric code point spellings become ints; anything else is a string.
fn host_value(arg: &str) -> Value {
    let numeric = arg.starts_with("U+")
        || arg.starts_with("u+")
        || arg.starts_with("0x")
        || arg.starts_with("0X")
        || (!arg.is_empty() && arg.bytes().all(|b| b.is_ascii_digit()));
    match parse_code_point(arg) {
        Ok(cp) if numeric => Value::Int(cp),
        _ => Value::from(arg),
    }
}

use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use dynval::{CodecOptions, DynamicValue};

#[derive(Parser, Debug)]
#[command(
    name = "dynval-cli",
    about = "Inspect and re-encode JSON through dynamic value normalization",
    version
)]
struct Args {
    /// Print a type-annotated tree instead of re-encoded JSON
    #[arg(short, long)]
    types: bool,

    /// Pretty-print JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Indentation width for pretty output
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f = File::open(path)?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    let value = dynval::decode_from_str(&buf)?;

    if args.types {
        let mut out = String::new();
        describe(&value, 0, None, &mut out);
        print!("{}", out);
    } else {
        let mut options = CodecOptions::with_dynamic_converter();
        options.pretty = args.pretty;
        options.indent = args.indent;
        println!("{}", dynval::encode_to_string(&value, &options)?);
    }

    Ok(())
}

fn describe(value: &DynamicValue, depth: usize, label: Option<&str>, out: &mut String) {
    use std::fmt::Write as _;

    for _ in 0..depth {
        out.push_str("  ");
    }
    if let Some(label) = label {
        let _ = write!(out, "{}: ", label);
    }
    match value {
        DynamicValue::Array(items) => {
            let _ = writeln!(out, "array({})", items.len());
            for item in items {
                describe(item, depth + 1, None, out);
            }
        }
        DynamicValue::Map(map) => {
            let _ = writeln!(out, "map({})", map.len());
            for (key, child) in map.iter() {
                describe(child, depth + 1, Some(key.as_str()), out);
            }
        }
        DynamicValue::Null => {
            let _ = writeln!(out, "null");
        }
        scalar => {
            let _ = writeln!(out, "{} {}", scalar.type_name(), scalar);
        }
    }
}

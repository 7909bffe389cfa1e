use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "cvnorm-cli",
    about = "Normalize a tagged Clarity call result (JSON) into plain JSON",
    version
)]
struct Args {
    /// Keep the response flag: output {"success": …, "value": …}
    #[arg(short, long)]
    outcome: bool,

    /// Pretty-print the output
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f =
                File::open(path).with_context(|| format!("opening {}", path.display()))?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    let value = cvnorm::decode::from_json_str(&buf).context("decoding input")?;
    let out = if args.outcome {
        match cvnorm::response_outcome(&value) {
            Some(outcome) => serde_json::to_value(outcome)?,
            None => bail!(
                "--outcome needs a (response …) input, got {}",
                value.kind_name()
            ),
        }
    } else {
        cvnorm::normalize(&value)
    };

    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", serde_json::to_string(&out)?);
    }

    Ok(())
}

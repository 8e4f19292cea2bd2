use std::path::PathBuf;

use clap::Parser;
use erzy_common::Viewport;

/// Erzy: replay overlay interactions headlessly and print the result.
#[derive(Parser, Debug)]
#[command(name = "erzy", version, about)]
pub struct Args {
    /// JSON script of pointer events, tool activations and chat messages.
    #[arg(short = 's', long)]
    pub script: PathBuf,

    /// Storage file override.
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Viewport size as WIDTHxHEIGHT.
    #[arg(long, default_value = "375x667", value_parser = parse_viewport)]
    pub viewport: Viewport,

    /// Gemini API key. Takes precedence over the stored key.
    #[arg(long)]
    pub api_key: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

fn parse_viewport(s: &str) -> Result<Viewport, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let parse = |v: &str| -> Result<f64, String> {
        let n: f64 = v
            .trim()
            .parse()
            .map_err(|_| format!("invalid dimension '{v}'"))?;
        if n.is_finite() && n > 0.0 {
            Ok(n)
        } else {
            Err(format!("dimension must be positive, got '{v}'"))
        }
    };
    Ok(Viewport::new(parse(w)?, parse(h)?))
}

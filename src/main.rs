//! kvscan - dumps the token stream of Valve KeyValues text files such as
//! `appmanifest_<id>.acf` installation manifests.

mod cli;
mod dump;

use clap::Parser;
use kvscan_lexer::Lexer;
use log::info;
use miette::{IntoDiagnostic, WrapErr};
use std::fs::File;
use std::io::{BufReader, Write};

fn main() -> miette::Result<()> {
    let args = cli::Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .init();

    let config = args.lexer_config();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for path in &args.files {
        let file = File::open(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Could not open {}", path.display()))?;
        let mut reader = BufReader::new(file);
        let tokens = Lexer::new(&mut reader, config);
        let prefix = (args.files.len() > 1).then(|| path.display().to_string());
        let count = if args.count {
            let count = dump::count_tokens(tokens)
                .into_diagnostic()
                .wrap_err_with(|| format!("Could not tokenize {}", path.display()))?;
            let written = match &prefix {
                Some(prefix) => writeln!(out, "{prefix}: {count}"),
                None => writeln!(out, "{count}"),
            };
            written
                .into_diagnostic()
                .wrap_err("Could not write token count")?;
            count
        } else {
            match dump::dump_tokens(tokens, prefix.as_deref(), &mut out) {
                Ok(count) => count,
                Err(error) => {
                    let context = error.context(path);
                    return Err(error).into_diagnostic().wrap_err(context);
                }
            }
        };
        info!("{}: {} tokens", path.display(), count);
    }
    Ok(())
}

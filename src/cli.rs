use clap::Parser;
use kvscan_lexer::LexerConfig;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Parser)]
#[command(name = "kvscan", version, about = "Tokenize Valve KeyValues text files")]
pub struct Args {
    /// Files to tokenize
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Characters read from the file per chunk
    #[arg(long, env = "KVSCAN_CHUNK_SIZE", default_value = "1024")]
    pub chunk_size: NonZeroUsize,

    /// Restart column numbers at 1 on every new line
    #[arg(long)]
    pub reset_columns: bool,

    /// Fail on a string literal left open at the end of the file
    #[arg(long)]
    pub strict: bool,

    /// Print only the number of tokens per file
    #[arg(long)]
    pub count: bool,

    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn lexer_config(&self) -> LexerConfig {
        LexerConfig::default()
            .with_chunk_size(self.chunk_size)
            .with_reset_column_on_newline(self.reset_columns)
            .with_reject_unterminated_strings(self.strict)
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

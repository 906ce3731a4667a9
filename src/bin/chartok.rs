use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chartok::config::DEFAULT_CORPUS_PATH;
use chartok::{load_corpus, CharCodec, Corpus, CorpusConfig, CorpusSummary, TokenId};
use clap::{ArgAction, Args, Parser, Subcommand};
use env_logger::Env;
use log::info;
use serde_json::json;

const DEFAULT_SAMPLE: &str = "Hello World!";

#[derive(Parser, Debug)]
#[command(author, version, about = "Character-level vocabulary toolkit", long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (-q, -qq)
    #[arg(short = 'q', long, global = true, action = ArgAction::Count)]
    quiet: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Report corpus statistics and round-trip a sample string
    Demo(DemoArgs),
    /// Encode text into character ids
    Encode(EncodeArgs),
    /// Decode character ids back into text
    Decode(DecodeArgs),
    /// Inspect the vocabulary derived from a corpus
    Info(InfoArgs),
}

#[derive(Args, Debug, Clone)]
struct CorpusArgs {
    /// Plain-text UTF-8 corpus the vocabulary is derived from
    #[arg(short = 'c', long, value_name = "PATH", default_value = DEFAULT_CORPUS_PATH)]
    corpus: PathBuf,

    /// Drop a leading byte order mark before deriving the vocabulary
    #[arg(long)]
    strip_bom: bool,
}

impl Default for CorpusArgs {
    fn default() -> Self {
        Self {
            corpus: PathBuf::from(DEFAULT_CORPUS_PATH),
            strip_bom: false,
        }
    }
}

#[derive(Args, Debug, Default)]
struct DemoArgs {
    #[command(flatten)]
    corpus: CorpusArgs,

    /// Text to encode and decode
    #[arg(short, long, value_name = "TEXT")]
    sample: Option<String>,
}

#[derive(Args, Debug)]
struct EncodeArgs {
    #[command(flatten)]
    corpus: CorpusArgs,

    /// Texts to encode
    #[arg(value_name = "TEXT", required = true)]
    texts: Vec<String>,

    /// Emit JSON lines instead of space separated ids
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct DecodeArgs {
    #[command(flatten)]
    corpus: CorpusArgs,

    /// Path to whitespace separated token ids
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Token ids to decode when --input is omitted
    #[arg(value_name = "ID", required_unless_present = "input", conflicts_with = "input")]
    tokens: Vec<TokenId>,

    /// Output file for decoded text (defaults to stdout)
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct InfoArgs {
    #[command(flatten)]
    corpus: CorpusArgs,

    /// Emit pretty JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Some(Commands::Demo(args)) => run_demo(args),
        Some(Commands::Encode(args)) => run_encode(args),
        Some(Commands::Decode(args)) => run_decode(args),
        Some(Commands::Info(args)) => run_info(args),
        None => run_demo(DemoArgs::default()),
    }
}

fn init_logging(verbose: u8, quiet: u8) {
    use log::LevelFilter;

    let level = if quiet > 0 {
        match quiet {
            1 => LevelFilter::Warn,
            _ => LevelFilter::Error,
        }
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    builder.format_timestamp_millis();
    builder.filter_level(level);
    let _ = builder.try_init();
}

fn load(args: &CorpusArgs) -> Result<(Corpus, CharCodec)> {
    let cfg = CorpusConfig::builder()
        .path(&args.corpus)
        .strip_bom(args.strip_bom)
        .build()?;
    let corpus = load_corpus(&cfg)
        .with_context(|| format!("failed to load corpus from {}", args.corpus.display()))?;
    let codec = CharCodec::from_corpus(corpus.text());
    info!(
        "derived vocabulary of {} characters from {}",
        codec.vocab_size(),
        corpus.path().display()
    );
    Ok((corpus, codec))
}

fn run_demo(args: DemoArgs) -> Result<()> {
    let (corpus, codec) = load(&args.corpus)?;
    let sample = args.sample.as_deref().unwrap_or(DEFAULT_SAMPLE);

    println!("length of dataset in characters:  {}", corpus.char_count());
    println!("total {} characters {}", codec.vocab_size(), codec.vocabulary());
    drop(corpus);

    let encoded = codec.encode(sample)?;
    println!("{encoded:?}");
    println!("{}", codec.decode(&encoded)?);

    Ok(())
}

fn run_encode(args: EncodeArgs) -> Result<()> {
    let (_, codec) = load(&args.corpus)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for text in &args.texts {
        let tokens = codec.encode(text)?;
        if args.json {
            let record = json!({
                "text": text,
                "tokens": tokens
            });
            writeln!(out, "{}", serde_json::to_string(&record)?)?;
        } else {
            write_token_sequence(&mut out, &tokens)?;
        }
    }

    Ok(())
}

fn run_decode(args: DecodeArgs) -> Result<()> {
    let (_, codec) = load(&args.corpus)?;

    let tokens = if let Some(input_path) = &args.input {
        let contents = fs::read_to_string(input_path)
            .with_context(|| format!("failed to read {}", input_path.display()))?;
        parse_token_list(&contents)?
    } else {
        args.tokens
    };

    let text = codec.decode(&tokens)?;

    if let Some(path) = &args.output {
        fs::write(path, &text).with_context(|| format!("failed to write {}", path.display()))?;
        println!("wrote {} characters to {}", tokens.len(), path.display());
    } else {
        println!("{text}");
    }

    Ok(())
}

fn run_info(args: InfoArgs) -> Result<()> {
    let (corpus, codec) = load(&args.corpus)?;
    let summary = CorpusSummary::new(&corpus, &codec);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Corpus       : {}", summary.path);
        println!("Characters   : {}", summary.corpus_chars);
        println!("Bytes        : {}", summary.corpus_bytes);
        println!("Vocab size   : {}", summary.vocab_size);
        println!("Vocabulary   : {:?}", summary.vocabulary);
    }

    Ok(())
}

fn write_token_sequence<W: Write>(writer: &mut W, tokens: &[TokenId]) -> Result<()> {
    for (idx, token) in tokens.iter().enumerate() {
        if idx > 0 {
            writer.write_all(b" ")?;
        }
        write!(writer, "{token}")?;
    }
    writer.write_all(b"\n")?;
    Ok(())
}

fn parse_token_list(text: &str) -> Result<Vec<TokenId>> {
    text.split_whitespace()
        .map(|part| {
            part.parse::<TokenId>()
                .map_err(|err| anyhow!("invalid token id `{part}`: {err}"))
        })
        .collect()
}

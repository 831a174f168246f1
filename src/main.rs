use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use codespan_reporting::diagnostic::{Diagnostic, Label, Severity};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};

use mdblocks::{Config, LexError, render, tokenize};

mod cli;
use cli::{Cli, Commands};

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn start_dir_for(input_path: &Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

fn load_config(explicit: Option<&Path>, file: &Option<PathBuf>) -> io::Result<Config> {
    let start_dir = start_dir_for(file)?;
    let (cfg, cfg_path) = mdblocks::config::load(explicit, &start_dir)?;

    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }
    Ok(cfg)
}

/// Print a tokenizer error against the normalized source and exit.
fn report_lex_error(file: &Option<PathBuf>, input: &str, config: &Config, error: &LexError) -> ! {
    let name = file
        .as_ref()
        .map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string());
    let source = mdblocks::tokenizer::normalize(input, config.tab_width);

    let mut files = SimpleFiles::new();
    let file_id = files.add(name, source);

    let diagnostic = Diagnostic::new(Severity::Error)
        .with_message(error.to_string())
        .with_labels(vec![
            Label::primary(file_id, error.span()).with_message("opened here"),
        ]);

    let writer = StandardStream::stderr(ColorChoice::Auto);
    let config = term::Config::default();
    let _ = term::emit_to_write_style(&mut writer.lock(), &config, &files, &diagnostic);
    process::exit(1);
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Tokens { file } => {
            let cfg = load_config(cli.config.as_deref(), &file)?;
            let input = read_all(file.as_ref())?;
            let tokens = match tokenize(&input, &cfg) {
                Ok(tokens) => tokens,
                Err(e) => report_lex_error(&file, &input, &cfg, &e),
            };
            for token in tokens {
                println!(
                    "{}:{} {:?} {:?}",
                    token.line, token.column, token.kind, token.raw
                );
            }
            Ok(())
        }
        Commands::Parse { file, json } => {
            let cfg = load_config(cli.config.as_deref(), &file)?;
            let input = read_all(file.as_ref())?;
            let doc = match mdblocks::parse(&input, Some(cfg.clone())) {
                Ok(doc) => doc,
                Err(e) => report_lex_error(&file, &input, &cfg, &e),
            };
            if json {
                let out = serde_json::to_string_pretty(&doc).map_err(io::Error::other)?;
                println!("{out}");
            } else {
                print!("{doc}");
            }
            Ok(())
        }
        Commands::Render { file } => {
            let cfg = load_config(cli.config.as_deref(), &file)?;
            let input = read_all(file.as_ref())?;
            let doc = match mdblocks::parse(&input, Some(cfg.clone())) {
                Ok(doc) => doc,
                Err(e) => report_lex_error(&file, &input, &cfg, &e),
            };
            print!("{}", render(&doc));
            Ok(())
        }
    }
}

//! Language preference tool - inspect and change the persisted portal language
//!
//! Usage:
//!   cargo run --bin portal-lang -- show              # Active language and toggle label
//!   cargo run --bin portal-lang -- set hi            # Persist a language (en|hi)
//!   cargo run --bin portal-lang -- toggle            # Switch to the other language
//!   cargo run --bin portal-lang -- t common.loading  # Look up one or more keys
//!   cargo run --bin portal-lang -- check             # Validate the translation catalog
//!
//! Optional:
//! - PREFERENCES_PATH (defaults to data/preferences.json)

use anyhow::{bail, Context, Result};
use citizen_portal::config;
use citizen_portal::i18n::{CatalogValidator, Language, LanguageContext, TranslationStore};
use citizen_portal::storage::FileStore;
use std::sync::Arc;
use tracing::info;

fn print_usage() {
    eprintln!("Usage: portal-lang <show | set <en|hi> | toggle | t <key>... | check>");
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("citizen_portal=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        print_usage();
        bail!("No command given");
    };

    if command == "check" {
        return check();
    }

    let store = FileStore::new(config::preferences_path());
    info!("Using preferences at {}", store.path().display());
    let context = LanguageContext::new(Arc::new(store));

    match command.as_str() {
        "show" => {
            let language = context.language();
            println!(
                "{} ({}) - toggle: {}",
                language.code(),
                language.native_name(),
                language.toggle_label()
            );
        }
        "set" => {
            let code = args.get(1).context("Missing language code (en|hi)")?;
            let language = Language::from_code(code)?;
            context.set_language(language);
            println!("{}", context.t("common.sewabandhu"));
            println!("Language set to {} ({})", language.name(), language.code());
        }
        "toggle" => {
            let language = context.toggle();
            println!("Language set to {} ({})", language.name(), language.code());
        }
        "t" => {
            if args.len() < 2 {
                bail!("Missing translation key");
            }
            for key in &args[1..] {
                println!("{}", context.t(key));
            }

            let report = context.metrics();
            if report.fallbacks > 0 {
                eprintln!("{} key(s) had no translation", report.fallbacks);
            }
        }
        other => {
            print_usage();
            bail!("Unknown command: {}", other);
        }
    }

    Ok(())
}

fn check() -> Result<()> {
    let store = TranslationStore::global();
    let report = CatalogValidator::validate(store);

    for error in &report.errors {
        println!("error: {}", error);
    }
    for warning in &report.warnings {
        println!("warning: {}", warning);
    }

    println!(
        "{} keys, {} errors, {} warnings",
        store.len(),
        report.errors.len(),
        report.warnings.len()
    );

    if report.has_errors() {
        bail!("Translation catalog is invalid");
    }
    Ok(())
}

use anyhow::Context;
use clap::Parser;
use site_search::cli::{Cli, Commands};
use site_search::search::{Glossary, SearchSession, StaticHits, extract_teaser, query_terms};
use site_search::SiteConfig;
use std::io::Read;
use std::path::Path;

fn main() -> site_search::Result<()> {
    let cli = Cli::parse();
    site_search::tracing::init(cli.verbose);

    let config = SiteConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Teaser { terms, file } => {
            let body = read_body(file.as_deref())?;
            let teaser = extract_teaser(&body, &query_terms(&terms));
            println!("{}", teaser);
        }
        Commands::Results {
            query,
            hits,
            glossary,
            html,
        } => {
            let index = StaticHits::load(&hits)?;
            let glossary = match glossary {
                Some(path) => Glossary::load(&path)?,
                None => Glossary::default(),
            };

            let session = SearchSession::new(index, glossary, config);
            let panel = session.run(&query);
            if html {
                println!("{}", panel.to_html());
            } else {
                print!("{}", panel.to_text());
            }
        }
        Commands::Glossary { term, file, html } => {
            let glossary = Glossary::load(&file)?;
            match glossary.lookup(term.trim()) {
                Some(card) if html => println!("{}", card.to_html()),
                Some(card) => println!("{}", card.to_text()),
                None => println!("No glossary entry for '{}'", term.trim()),
            }
        }
    }

    Ok(())
}

/// Document body from a file, or stdin when no file is given.
fn read_body(file: Option<&Path>) -> site_search::Result<String> {
    let mut body = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read document body from {}", path.display()))?,
        None => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("Failed to read document body from stdin")?;
            body
        }
    };

    // Editors and shells append a newline that is not part of the text
    let trimmed = body.trim_end_matches(['\n', '\r']).len();
    body.truncate(trimmed);
    Ok(body)
}

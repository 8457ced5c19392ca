//! headdoc - render HTML pages from a TOML head description
//!
//! Loads a page description, builds a document model from it and prints the
//! assembled page or a single section.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::pedantic))]
#![allow(clippy::needless_pass_by_value)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use headdoc::status::status_line;
use headdoc::{
    render_doctype_as, tables, ConfigError, DocumentModel, ErrorPage, PageConfig, Section,
};
use std::path::{Path, PathBuf};

/// Sections rendered inside `<head>`, in page order
const HEAD_SECTIONS: [Section; 9] = [
    Section::Charset,
    Section::Title,
    Section::Description,
    Section::Keywords,
    Section::Metas,
    Section::Stylesheets,
    Section::CssBlocks,
    Section::Scripts,
    Section::ScriptBlocks,
];

/// Main entry point for the headdoc CLI application
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Run the CLI application
fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            page,
            output,
            doctype,
            section,
            verbose,
        } => {
            handle_render_command(page, output, doctype, section, verbose)?;
        }

        Commands::Doctypes => {
            handle_doctypes_command();
        }

        Commands::Status { code, message } => {
            handle_status_command(code, &message);
        }
    }

    Ok(())
}

/// Handle the render command
fn handle_render_command(
    page: PathBuf,
    output: Option<PathBuf>,
    doctype: Option<String>,
    section: Option<String>,
    verbose: bool,
) -> Result<()> {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let config = PageConfig::load(&page)
        .with_context(|| format!("Failed to load page description {}", page.display()))?;

    let mut doc = match config.build() {
        Ok(doc) => doc,
        Err(err) => {
            if let ConfigError::Validation(ref invalid) = err {
                let fallback = ErrorPage::from(invalid);
                eprintln!("{}", fallback.status_line());
                write_output(output.as_deref(), &fallback.render())?;
            }
            return Err(err)
                .with_context(|| format!("Invalid page description {}", page.display()));
        }
    };

    if let Some(ref id) = doctype {
        if render_doctype_as(&mut doc, id).is_empty() {
            log::warn!("Unknown doctype '{}'; no declaration will be rendered", id);
        }
    }

    let markup = match section {
        Some(name) => doc
            .renderer()
            .render(&name)
            .with_context(|| format!("Unknown section '{}'", name))?,
        None => assemble_page(&doc, config.body.as_deref().unwrap_or_default()),
    };

    write_output(output.as_deref(), &markup)
}

/// Handle the doctypes command
fn handle_doctypes_command() {
    println!("Known doctypes:\n");
    for (id, declaration) in tables::DOCTYPES {
        println!("  {:<14} {}", id, declaration);
    }
}

/// Handle the status command
fn handle_status_command(code: u16, message: &str) {
    let page = ErrorPage::new(code, message);
    println!("{}", status_line(code));
    println!();
    print!("{}", page.render());
}

/// Concatenate every section into a full page
fn assemble_page(doc: &DocumentModel, body: &str) -> String {
    let renderer = doc.renderer();
    let eol = doc.eol();
    let mut output = String::new();

    output.push_str(&renderer.doctype());
    output.push_str(&renderer.html_open());
    output.push_str("<head>");
    output.push_str(eol);
    for section in HEAD_SECTIONS {
        output.push_str(&renderer.section(section));
    }
    output.push_str("</head>");
    output.push_str(eol);

    output.push_str("<body>");
    output.push_str(eol);
    if !body.is_empty() {
        output.push_str(body);
        output.push_str(eol);
    }
    output.push_str(&renderer.script_blocks_bottom());
    output.push_str("</body>");
    output.push_str(eol);
    output.push_str(&renderer.html_close());
    output.push_str(eol);

    output
}

/// Write markup to a file, or to stdout when no path is given
fn write_output(path: Option<&Path>, markup: &str) -> Result<()> {
    let Some(path) = path else {
        print!("{}", markup);
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, markup)
        .with_context(|| format!("Failed to write file {}", path.display()))?;
    log::info!("Wrote {} bytes to {}", markup.len(), path.display());
    Ok(())
}

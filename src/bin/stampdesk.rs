// ABOUTME: Command-line front end for the stampdesk library
// ABOUTME: Catalog browsing, full wizard runs with streamed drafts, and assistant chat

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stampdesk

//! Presentation shell over the library: lists and searches the catalog,
//! runs a complete wizard session with the draft streamed to the terminal,
//! and hosts an interactive assistant chat. All business rules live in the
//! library; this binary only formats and relays.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use stampdesk::llm::LlmProvider;
use stampdesk::wizard::WizardStep;
use stampdesk::{
    catalog, contact, AssistantSession, DocumentKind, DocumentWizard, GeminiProvider,
    ServiceConfig,
};

#[derive(Parser)]
#[command(name = "stampdesk", version, about = "Legal document drafting service")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all document templates with prices
    List,
    /// Show details, requirements, and contact link for one template
    Info {
        /// Document type, e.g. "Gift Deed" (case-insensitive)
        kind: String,
    },
    /// Search templates by title, Marathi label, or description
    Search {
        /// Substring to search for
        query: String,
    },
    /// Run the full generation wizard for one document
    Draft {
        /// Document type, e.g. "Gift Deed" (case-insensitive)
        kind: String,
        /// Field values as id=value pairs, repeatable
        #[arg(short, long = "field", value_name = "ID=VALUE")]
        fields: Vec<String>,
        /// Jurisdiction/region for the draft
        #[arg(short, long)]
        region: Option<String>,
        /// Directory to save the finished draft into
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },
    /// Chat with the legal assistant (reads lines from stdin)
    Chat,
}

#[tokio::main]
async fn main() -> Result<()> {
    stampdesk::logging::init();
    let cli = Cli::parse();

    match cli.command {
        Command::List => {
            list();
            Ok(())
        }
        Command::Info { kind } => info(&kind),
        Command::Search { query } => {
            search(&query);
            Ok(())
        }
        Command::Draft {
            kind,
            fields,
            region,
            output,
        } => draft(&kind, &fields, region, &output).await,
        Command::Chat => chat().await,
    }
}

fn setup() -> Result<(ServiceConfig, Arc<dyn LlmProvider>)> {
    let config = ServiceConfig::from_env()?;
    let api_key = std::env::var("GEMINI_API_KEY")
        .context("set GEMINI_API_KEY to use drafting and chat")?;
    let provider = GeminiProvider::with_timeout(api_key, config.llm_timeout)?
        .with_default_model(config.model.clone());
    Ok((config, Arc::new(provider)))
}

/// Incremental printing: the not-yet-printed tail of `current`, or `None`
/// when `current` no longer extends what was already printed (the text was
/// replaced with a failure message).
fn unprinted_tail<'a>(printed: &str, current: &'a str) -> Option<&'a str> {
    current.strip_prefix(printed)
}

fn list() {
    for template in catalog::all() {
        println!(
            "{:<28} {:<30} ${:.2}",
            template.kind.title(),
            template.marathi_label,
            template.total_price()
        );
    }
}

fn info(kind: &str) -> Result<()> {
    let template =
        catalog::find(kind).with_context(|| format!("unknown document type '{kind}'"))?;
    println!("{} / {}", template.kind.title(), template.marathi_label);
    println!("\n{}", template.description);
    println!("{}", template.marathi_description);
    println!("\n{}", template.info.english_definition);
    println!("{}", template.info.marathi_definition);
    println!("\nRequired paperwork:");
    for requirement in &template.info.requirements {
        println!("  - {requirement}");
    }
    println!("\nInput fields:");
    for field in &template.fields {
        let marker = if field.required { "*" } else { " " };
        println!("  {marker} {} ({})", field.label, field.id);
    }
    println!(
        "\nPrice: ${:.2} + ${:.2} consultation = ${:.2}",
        template.price,
        stampdesk::CONSULTATION_FEE,
        template.total_price()
    );
    println!("WhatsApp: {}", contact::whatsapp_link(template));
    println!("Phone: {} / {}", contact::PRIMARY_PHONE, contact::SECONDARY_PHONE);
    Ok(())
}

fn search(query: &str) {
    let matches = catalog::search(query);
    if matches.is_empty() {
        println!("No templates match '{query}'");
        return;
    }
    for template in matches {
        println!("{:<28} {}", template.kind.title(), template.description);
    }
}

async fn draft(kind: &str, fields: &[String], region: Option<String>, output: &Path) -> Result<()> {
    let kind: DocumentKind = kind.parse()?;
    let template = catalog::template(kind);
    let (config, provider) = setup()?;
    let mut wizard = DocumentWizard::new(template, provider);

    wizard.set_region(region.unwrap_or(config.default_region));
    for pair in fields {
        let (id, value) = pair
            .split_once('=')
            .with_context(|| format!("field '{pair}' is not in ID=VALUE form"))?;
        wizard.set_field(id, value)?;
    }

    eprintln!("Generating {kind} draft...\n");
    wizard.generate_draft().await?;
    let mut printed = String::new();
    loop {
        let more = wizard.pump_draft().await;
        match unprinted_tail(&printed, wizard.draft()) {
            Some(tail) => print!("{tail}"),
            // the draft was replaced with the failure message
            None => print!("\n{}", wizard.draft()),
        }
        printed.clear();
        printed.push_str(wizard.draft());
        std::io::stdout().flush()?;
        if !more {
            break;
        }
    }
    println!();

    if wizard.step() != WizardStep::Preview {
        bail!("wizard left preview unexpectedly");
    }
    if wizard.draft() == stampdesk::wizard::GENERATION_FAILED_MESSAGE {
        bail!("draft generation failed; not proceeding to payment");
    }

    let breakdown = wizard.price_breakdown();
    eprintln!(
        "\nDrafting fee ${:.2} + consultation ${:.2} = ${:.2}",
        breakdown.base_price, breakdown.consultation_fee, breakdown.total
    );
    eprintln!("Processing payment...");

    wizard.proceed_to_payment()?;
    let document = wizard.pay().await?;
    let artifact = wizard.download()?;
    let path = artifact.save_to(output)?;

    eprintln!("Payment complete. '{}' saved to {}", document.title, path.display());
    Ok(())
}

async fn chat() -> Result<()> {
    let (_, provider) = setup()?;
    let mut session = AssistantSession::new(provider);
    println!("{}\n", stampdesk::assistant::GREETING);

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if line.trim() == "/quit" {
            break;
        }

        session.send(&line).await?;
        let mut printed = String::new();
        loop {
            let more = session.pump().await;
            let reply = session.last_reply().unwrap_or("");
            match unprinted_tail(&printed, reply) {
                Some(tail) => print!("{tail}"),
                // the partial reply was replaced with the apology
                None => print!("\n{reply}"),
            }
            printed.clear();
            printed.push_str(reply);
            std::io::stdout().flush()?;
            if !more {
                break;
            }
        }
        println!("\n");
    }
    Ok(())
}

//! Command-line front end for the payload encoders.
//!
//! # Usage
//!
//! ```bash
//! # Wi-Fi credentials
//! cargo run --bin qr-encode -- encode wifi ssid=Cafe password=latte --flag hidden
//!
//! # A link wrapped into the tracking redirect
//! cargo run --bin qr-encode -- encode url url=https://shop.example.com --track --utm-source flyer
//!
//! # Available kinds and their fields
//! cargo run --bin qr-encode -- kinds
//! ```
//!
//! # Environment Variables
//!
//! - `BASE_URL` (optional): origin used for tracking and multi-platform links
//!
//! The payload is written to stdout on its own line so it can be piped into a
//! QR renderer. Notices go to stderr.

use qrlink::application::services::PayloadService;
use qrlink::domain::schema::{FieldType, fields_for};
use qrlink::domain::tracking::UtmParams;
use qrlink::domain::{ContentKind, FieldMap, FieldValue};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

const DEFAULT_ORIGIN: &str = "http://localhost:3000";

/// Encode QR payloads from the command line.
#[derive(Parser)]
#[command(name = "qr-encode")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode fields into a payload
    Encode {
        /// Content kind (e.g. url, wifi, vcard)
        kind: String,

        /// Text fields as key=value pairs
        fields: Vec<String>,

        /// Set a boolean field to true (repeatable)
        #[arg(long = "flag", value_name = "KEY")]
        flags: Vec<String>,

        /// Wrap the payload into a tracking redirect link
        #[arg(long)]
        track: bool,

        #[arg(long, requires = "track")]
        utm_source: Option<String>,

        #[arg(long, requires = "track")]
        utm_medium: Option<String>,

        #[arg(long, requires = "track")]
        utm_campaign: Option<String>,

        /// Service origin (defaults to BASE_URL, then http://localhost:3000)
        #[arg(long)]
        origin: Option<String>,
    },

    /// List content kinds and their fields
    Kinds,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            kind,
            fields,
            flags,
            track,
            utm_source,
            utm_medium,
            utm_campaign,
            origin,
        } => {
            let tracking = track.then_some(UtmParams {
                utm_source,
                utm_medium,
                utm_campaign,
            });
            encode(&kind, &fields, &flags, tracking, origin)?;
        }
        Commands::Kinds => list_kinds(),
    }

    Ok(())
}

/// Encodes one payload and prints it.
fn encode(
    kind: &str,
    pairs: &[String],
    flags: &[String],
    tracking: Option<UtmParams>,
    origin: Option<String>,
) -> Result<()> {
    let kind: ContentKind = kind.parse()?;
    let fields = parse_fields(pairs, flags)?;

    let origin = origin
        .or_else(|| std::env::var("BASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_ORIGIN.to_string());
    let service = PayloadService::new(origin);

    let outcome = service
        .encode(kind, fields, tracking)
        .map_err(|e| anyhow::anyhow!("Failed to encode {}: {}", kind, e))?;

    if !outcome.ready {
        eprintln!(
            "{}",
            "Payload is empty; fill in the fields listed by `qr-encode kinds`".yellow()
        );
    }

    println!("{}", outcome.payload);
    Ok(())
}

/// Builds a [`FieldMap`] from `key=value` arguments and `--flag` keys.
fn parse_fields(pairs: &[String], flags: &[String]) -> Result<FieldMap> {
    let mut fields = FieldMap::new();

    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .with_context(|| format!("Expected key=value, got '{}'", pair))?;
        fields.insert(key, FieldValue::Text(value.to_string()));
    }

    for key in flags {
        fields.insert(key.as_str(), FieldValue::Flag(true));
    }

    Ok(fields)
}

/// Prints every kind with its fields.
///
/// # Output Format
///
/// ```text
/// Content kinds
///
///   url        url
///   wifi       auth ssid password hidden(flag)
/// ```
fn list_kinds() {
    println!("{}", "Content kinds".bright_blue().bold());
    println!();

    for kind in ContentKind::ALL {
        let fields: Vec<String> = fields_for(kind)
            .iter()
            .map(|spec| match spec.field_type {
                FieldType::Text => spec.key.to_string(),
                FieldType::Flag => format!("{}(flag)", spec.key),
            })
            .collect();

        println!("  {:<10} {}", kind.as_str().cyan(), fields.join(" "));
    }

    println!();
}

//! Redatta CLI
//!
//! Command-line front end for the rule-based anonymization pipeline.
//! Recognizer spans are not produced here; the CLI runs the deterministic
//! rule layer only.

use anyhow::{bail, Context};
use clap::Parser;
use redatta_core::{Label, PersonalData};
use redatta_lexicon::Lexicon;
use redatta_rules::{Anonymizer, RuleConfig};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "redatta")]
#[command(about = "Redact personal data from Italian clinical text", long_about = None)]
struct Cli {
    /// Text to anonymize
    #[arg(long, conflicts_with = "input_file")]
    text: Option<String>,

    /// Path to a .txt file, or a .json clinical record with an
    /// "anagrafica" personal-data object and a "testi" list
    #[arg(long)]
    input_file: Option<PathBuf>,

    /// Where to save the anonymized text; prints to stdout if omitted
    #[arg(long)]
    output_file: Option<PathBuf>,

    /// Entity labels to redact (default: every supported label)
    #[arg(long, num_args = 1.., value_name = "LABEL")]
    entities: Option<Vec<String>>,

    /// Directory holding the processed lexicon files
    #[arg(long, env = "REDATTA_LEXICONS", default_value = "dictionaries_processed")]
    lexicons: PathBuf,

    /// Path to a JSON object with known personal data for the patient
    #[arg(long, conflicts_with = "input_file")]
    personal_data: Option<PathBuf>,

    /// Also match ambiguous person/place dictionary entries
    #[arg(long)]
    ambiguous_matching: bool,

    /// Emit the consolidated spans as JSON instead of redacted text
    #[arg(long)]
    spans: bool,
}

/// The clinical record JSON shape: personal data plus one or more texts.
#[derive(Debug, Deserialize)]
struct CaseFile {
    anagrafica: Option<PersonalData>,
    testi: Vec<CaseText>,
}

#[derive(Debug, Deserialize)]
struct CaseText {
    #[allow(dead_code)]
    tipo: Option<String>,
    testo: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let (texts, mut personal) = read_input(&cli)?;
    if let Some(path) = &cli.personal_data {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading personal data from {}", path.display()))?;
        personal = Some(serde_json::from_str(&contents)?);
    }

    let allowed: Option<HashSet<Label>> = cli
        .entities
        .as_ref()
        .map(|labels| labels.iter().map(|l| Label::from(l.clone())).collect());

    let lexicon = Lexicon::load(&cli.lexicons);
    let anonymizer = Anonymizer::new(
        &lexicon,
        RuleConfig {
            ambiguous_matching: cli.ambiguous_matching,
        },
    )?;
    info!(texts = texts.len(), "anonymizing");

    let mut outputs = Vec::with_capacity(texts.len());
    for text in &texts {
        if cli.spans {
            let doc = anonymizer.annotate(text, &[], personal.as_ref())?;
            outputs.push(serde_json::to_string_pretty(&doc)?);
        } else {
            outputs.push(anonymizer.anonymize(text, &[], personal.as_ref(), allowed.as_ref())?);
        }
    }

    write_output(&cli, &outputs)
}

fn read_input(cli: &Cli) -> anyhow::Result<(Vec<String>, Option<PersonalData>)> {
    if let Some(text) = &cli.text {
        return Ok((vec![text.clone()], None));
    }
    if let Some(path) = &cli.input_file {
        return read_file(path);
    }
    // fallback: piped stdin
    if !std::io::stdin().is_terminal() {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        let text = text.trim().to_string();
        if !text.is_empty() {
            return Ok((vec![text], None));
        }
    }
    bail!("no text provided: use --text, --input-file, or pipe text via stdin");
}

fn read_file(path: &Path) -> anyhow::Result<(Vec<String>, Option<PersonalData>)> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading input from {}", path.display()))?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => {
            let case: CaseFile = serde_json::from_str(&contents)
                .with_context(|| format!("parsing clinical record {}", path.display()))?;
            let texts = case.testi.into_iter().map(|t| t.testo).collect();
            Ok((texts, case.anagrafica))
        }
        _ => Ok((vec![contents], None)),
    }
}

fn write_output(cli: &Cli, outputs: &[String]) -> anyhow::Result<()> {
    match &cli.output_file {
        Some(path) => {
            if outputs.len() == 1 {
                fs::write(path, &outputs[0])
                    .with_context(|| format!("writing {}", path.display()))?;
                eprintln!("Anonymized text saved to '{}'.", path.display());
            } else {
                for (i, output) in outputs.iter().enumerate() {
                    let numbered = numbered_path(path, i + 1);
                    fs::write(&numbered, output)
                        .with_context(|| format!("writing {}", numbered.display()))?;
                    eprintln!("Anonymized text saved to '{}'.", numbered.display());
                }
            }
        }
        None => {
            for output in outputs {
                println!("{output}");
            }
        }
    }
    Ok(())
}

fn numbered_path(path: &Path, index: usize) -> PathBuf {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("output");
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("txt");
    path.with_file_name(format!("{stem}_{index}.{ext}"))
}

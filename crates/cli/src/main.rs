use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;

use rubric_core::VariableDeclaration;
use rubric_eval::{
    is_expression_node, is_response_rule_node, is_template_rule_node, map_response,
    map_value_from_lookup_table,
};
use rubric_interchange::{declaration_from_json, value_from_pci, value_to_pci};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// rubric scoring-engine toolchain.
#[derive(Parser)]
#[command(name = "rubric", version, about = "rubric assessment scoring toolchain")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a declaration's current value as a PCI payload
    Encode {
        /// Path to the declaration JSON document
        declaration: PathBuf,
    },

    /// Decode a PCI payload against a declaration
    Decode {
        /// Path to the PCI payload JSON file
        payload: PathBuf,
        /// Path to the declaration JSON document
        #[arg(long)]
        declaration: PathBuf,
    },

    /// Run response mapping on a declaration's current value
    Map {
        /// Path to the declaration JSON document
        declaration: PathBuf,
    },

    /// Map a numeric value through a declaration's lookup table
    Lookup {
        /// Path to the declaration JSON document
        declaration: PathBuf,
        /// The numeric value to look up (omit for a null value)
        #[arg(long)]
        value: Option<String>,
    },

    /// Report which rule grammar a node tag belongs to
    Classify {
        /// The node tag name
        tag: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { declaration } => {
            cmd_encode(&declaration, cli.output);
        }
        Commands::Decode {
            payload,
            declaration,
        } => {
            cmd_decode(&payload, &declaration, cli.output);
        }
        Commands::Map { declaration } => {
            cmd_map(&declaration, cli.output);
        }
        Commands::Lookup { declaration, value } => {
            cmd_lookup(&declaration, value.as_deref(), cli.output);
        }
        Commands::Classify { tag } => {
            cmd_classify(&tag, cli.output);
        }
    }
}

fn cmd_encode(declaration: &Path, output: OutputFormat) {
    let decl = load_declaration(declaration);
    let payload = value_to_pci(&decl.value);
    print_json(&payload, output);
}

fn cmd_decode(payload: &Path, declaration: &Path, output: OutputFormat) {
    let decl = load_declaration(declaration);
    let payload = load_json(payload);
    // Malformed payloads degrade to null by contract; the diagnostic
    // lands on stderr.
    let value = value_from_pci(&payload, &decl);
    print_json(&value_to_pci(&value), output);
}

fn cmd_map(declaration: &Path, output: OutputFormat) {
    let decl = load_declaration(declaration);
    match map_response(&decl) {
        Ok(score) => match output {
            OutputFormat::Text => println!("{}", score),
            OutputFormat::Json => {
                let out = serde_json::json!({
                    "identifier": decl.identifier,
                    "score": score.to_string(),
                });
                println!("{}", out);
            }
        },
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn cmd_lookup(declaration: &Path, value: Option<&str>, output: OutputFormat) {
    let mut decl = load_declaration(declaration);
    let value = value.map(|text| match Decimal::from_str(text) {
        Ok(d) => d,
        Err(_) => {
            eprintln!("error: '{}' is not a decimal value", text);
            process::exit(1);
        }
    });
    let target = map_value_from_lookup_table(&mut decl, value);
    print_json(&value_to_pci(&target), output);
}

fn cmd_classify(tag: &str, output: OutputFormat) {
    let grammar = if is_expression_node(tag) {
        "expression"
    } else if is_response_rule_node(tag) {
        "responseRule"
    } else if is_template_rule_node(tag) {
        "templateRule"
    } else {
        "unknown"
    };

    match output {
        OutputFormat::Text => println!("{}", grammar),
        OutputFormat::Json => {
            let out = serde_json::json!({ "tag": tag, "grammar": grammar });
            println!("{}", out);
        }
    }
}

fn load_declaration(path: &Path) -> VariableDeclaration {
    let doc = load_json(path);
    match declaration_from_json(&doc) {
        Ok(decl) => decl,
        Err(e) => {
            eprintln!("error: {}: {}", path.display(), e);
            process::exit(1);
        }
    }
}

fn load_json(path: &Path) -> serde_json::Value {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: failed to read {}: {}", path.display(), e);
            process::exit(1);
        }
    };
    match serde_json::from_str(&text) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("error: invalid JSON in {}: {}", path.display(), e);
            process::exit(1);
        }
    }
}

fn print_json(value: &serde_json::Value, output: OutputFormat) {
    match output {
        OutputFormat::Text => {
            let pretty = serde_json::to_string_pretty(value)
                .unwrap_or_else(|e| format!("serialization error: {}", e));
            println!("{}", pretty);
        }
        OutputFormat::Json => println!("{}", value),
    }
}

//! MQSC Generator CLI - offline script generation

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use mqscgen_core::application::mqsc::generate;
use mqscgen_core::application::GenerateRequest;
use mqscgen_core::domain::{DomainError, ObjectType, Script};
use std::io::{Read, Write};
use std::path::PathBuf;
use tabled::{Table, Tabled};

#[derive(Parser)]
#[command(name = "mqscgen")]
#[command(about = "Generate MQSC DEFINE scripts for queues and channels", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported object types
    Types,

    /// Validate names and print the DEFINE script
    Generate {
        /// Object type label (e.g. "Local Queue", "Sender Channel")
        #[arg(short = 't', long = "type")]
        object_type: String,

        /// Queue manager name prefixed onto every object
        #[arg(short, long, env = "MQSCGEN_QMGR")]
        qmgr: String,

        /// Read names from a file, one per line ("-" for stdin)
        #[arg(short = 'f', long)]
        names_file: Option<PathBuf>,

        /// Write the script to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Append to the output file instead of overwriting it
        #[arg(long, requires = "output")]
        append: bool,

        /// Object names
        names: Vec<String>,
    },
}

#[derive(Tabled)]
struct TypeRow {
    #[tabled(rename = "Object type")]
    label: &'static str,
    #[tabled(rename = "Max name length")]
    max_name_length: usize,
    #[tabled(rename = "Command")]
    command: String,
}

fn read_names(file: Option<&PathBuf>, inline: Vec<String>) -> Result<Vec<String>> {
    let mut names = inline;

    if let Some(path) = file {
        let text = if path.as_os_str() == "-" {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read names from stdin")?;
            buf
        } else {
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?
        };
        names.extend(text.lines().map(str::to_string));
    }

    Ok(names)
}

fn write_script(script: &Script, output: Option<&PathBuf>, append: bool) -> Result<()> {
    match output {
        None => {
            print!("{}", script.text());
        }
        Some(path) => {
            // Appended blocks are joined the same way the web download joins them
            let existing = append && path.exists();
            let mut file = std::fs::OpenOptions::new()
                .create(true)
                .write(true)
                .append(append)
                .truncate(!append)
                .open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;

            let text = if existing {
                format!("\n{}", script.text())
            } else {
                script.text()
            };
            file.write_all(text.as_bytes())
                .with_context(|| format!("Failed to write {}", path.display()))?;

            eprintln!(
                "{}",
                format!(
                    "✓ {} command(s) written to {}",
                    script.names.len(),
                    path.display()
                )
                .green()
                .bold()
            );
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Types => {
            let rows: Vec<TypeRow> = ObjectType::ALL
                .into_iter()
                .map(|kind| TypeRow {
                    label: kind.label(),
                    max_name_length: kind.max_name_length(),
                    command: kind.render("QMGR.NAME"),
                })
                .collect();

            println!("{}", Table::new(rows));
        }

        Commands::Generate {
            object_type,
            qmgr,
            names_file,
            output,
            append,
            names,
        } => {
            let req = GenerateRequest {
                object_type,
                names: read_names(names_file.as_ref(), names)?,
                qmgr_name: qmgr,
            };

            match generate::execute(&req) {
                Ok(script) => write_script(&script, output.as_ref(), append)?,
                Err(err) => {
                    for message in err.messages() {
                        eprintln!("{} {}", "✗".red().bold(), message.red());
                    }
                    let count = match &err {
                        DomainError::InvalidNames(violations) => violations.len(),
                        _ => 1,
                    };
                    anyhow::bail!("{} error(s), no script generated", count);
                }
            }
        }
    }

    Ok(())
}

use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::sheet::PeakCallSheet;
use crate::core::types::{GroupName, SampleId};
use crate::parsing;
use crate::utils::validation::parse_delimiter;

#[derive(Args)]
pub struct PeakcallsArgs {
    /// Peakcall sample sheet with ChIP, Input and Group columns
    #[arg(required = true)]
    pub peakcall: PathBuf,

    /// Field delimiter: a single character, or tab, comma, space
    #[arg(short, long, default_value = "tab", value_parser = parse_delimiter)]
    pub delimiter: char,
}

/// Execute peakcalls subcommand
///
/// # Errors
///
/// Returns an error if the sample sheet cannot be read or is empty.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: PeakcallsArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let parsed = parsing::peakcall::parse_peakcall_file(&args.peakcall, args.delimiter)?;

    if verbose {
        eprintln!(
            "Parsed {} ChIP samples in {} groups from {} ({} warnings)",
            parsed.value.len(),
            parsed.value.groups.len(),
            args.peakcall.display(),
            parsed.warnings.len(),
        );
    }

    let sheet = parsed.into_inner();

    match format {
        OutputFormat::Text => print_text_sheet(&sheet),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&sheet)?),
        OutputFormat::Tsv => print_tsv_sheet(&sheet),
    }

    Ok(())
}

fn print_text_sheet(sheet: &PeakCallSheet) {
    println!("ChIP-Input Pairs");
    println!("{}", "=".repeat(60));
    for (chip, input) in &sheet.pairs {
        match input {
            Some(input) => println!("  {chip}\t{input}"),
            None => println!("  {chip}\t(ChIP-only)"),
        }
    }

    println!("\nGroups");
    println!("{}", "=".repeat(60));
    for (group, members) in &sheet.groups {
        println!(
            "  {group} ({}): {}",
            members.len(),
            join(members.iter().map(SampleId::as_str))
        );
    }
}

fn print_tsv_sheet(sheet: &PeakCallSheet) {
    println!("chip\tinput\tgroups");
    for (chip, input) in &sheet.pairs {
        let groups = join(sheet.groups_for(chip.as_str()).into_iter().map(GroupName::as_str));
        println!(
            "{chip}\t{}\t{groups}",
            input.as_ref().map_or("", SampleId::as_str)
        );
    }
}

fn join<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(",")
}

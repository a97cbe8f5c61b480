use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::contrast::Contrasts;
use crate::parsing;
use crate::utils::validation::parse_delimiter;

#[derive(Args)]
pub struct ContrastsArgs {
    /// Peakcall sample sheet defining the groups
    #[arg(required = true)]
    pub peakcall: PathBuf,

    /// Contrasts file with two group names per line
    #[arg(required = true)]
    pub contrasts: PathBuf,

    /// Field delimiter for both files: a single character, or tab, comma, space
    #[arg(short, long, default_value = "tab", value_parser = parse_delimiter)]
    pub delimiter: char,
}

/// Execute contrasts subcommand
///
/// # Errors
///
/// Returns an error if either file cannot be read, the sample sheet is empty,
/// or a contrast names a group the sample sheet does not define.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ContrastsArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    // The sample sheet must be complete before contrasts can be validated
    let sheet = parsing::peakcall::parse_peakcall_file(&args.peakcall, args.delimiter)?;

    if verbose {
        eprintln!(
            "Loaded {} groups from {}",
            sheet.value.groups.len(),
            args.peakcall.display()
        );
    }

    let parsed =
        parsing::contrasts::parse_contrasts_file(&args.contrasts, &sheet.value, args.delimiter)?;

    if verbose {
        eprintln!(
            "Parsed {} contrasts from {} ({} warnings)",
            parsed.value.len(),
            args.contrasts.display(),
            parsed.warnings.len(),
        );
    }

    let contrasts = parsed.into_inner();

    match format {
        OutputFormat::Text => print_text_contrasts(&contrasts),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&contrasts)?),
        OutputFormat::Tsv => print_tsv_contrasts(&contrasts),
    }

    Ok(())
}

fn print_text_contrasts(contrasts: &Contrasts) {
    println!("Contrasts");
    println!("{}", "=".repeat(60));
    if contrasts.is_empty() {
        println!("  (none)");
    }
    for pair in contrasts {
        println!("  {pair}");
    }
}

fn print_tsv_contrasts(contrasts: &Contrasts) {
    println!("group1\tgroup2");
    for pair in contrasts {
        println!("{}\t{}", pair.first(), pair.second());
    }
}

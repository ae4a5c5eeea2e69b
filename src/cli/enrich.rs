use std::path::PathBuf;

use clap::Args;

use crate::cli::{ClientArgs, OutputFormat};
use crate::resolve::Resolver;
use crate::tables;

#[derive(Args)]
pub struct EnrichArgs {
    /// Input CSV with a required 'Name' column
    #[arg(default_value = "DILIrank.csv")]
    pub input: PathBuf,

    /// Output CSV for SMILES and metadata (one row per input name)
    #[arg(long, default_value = "chembl_smiles_and_meta.csv")]
    pub meta_out: PathBuf,

    /// Output CSV for targets and mechanisms of action
    #[arg(long, default_value = "chembl_targets_mechanisms.csv")]
    pub targets_out: PathBuf,

    #[command(flatten)]
    pub client: ClientArgs,
}

/// Execute enrich subcommand
///
/// # Errors
///
/// Returns an error if the input CSV is missing the `Name` column, or if an
/// output file cannot be written. Remote failures never abort the run; they
/// degrade into status fields in the metadata table.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: EnrichArgs, _format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    // Fatal before any processing: the rest of the run is best-effort
    let names = tables::load_query_names(&args.input)?;

    if verbose {
        eprintln!("Loaded {} unique names from {}", names.len(), args.input.display());
    }

    let (client, config) = args.client.build()?;
    let resolver = Resolver::with_config(&client, config);

    let report = resolver.run(&names);

    tables::write_metadata(&args.meta_out, &report.resolutions)?;
    tables::write_targets(&args.targets_out, &report.targets)?;

    let ok = report.ok_count();
    let skipped = report.resolutions.len() - ok;
    println!("Done. SMILES found for {ok} small molecules; skipped {skipped} non-small/no-hit entries.");
    println!(
        "Saved metadata: {} ({} rows)",
        args.meta_out.display(),
        report.resolutions.len()
    );
    println!(
        "Saved targets:  {} ({} rows)",
        args.targets_out.display(),
        report.targets.len()
    );

    Ok(())
}

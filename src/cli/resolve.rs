use clap::Args;

use crate::cli::{ClientArgs, OutputFormat};
use crate::core::ResolutionStatus;
use crate::resolve::Resolver;

#[derive(Args)]
pub struct ResolveArgs {
    /// Drug name to resolve
    #[arg(required = true)]
    pub name: String,

    /// Skip the mechanism-of-action fetch
    #[arg(long)]
    pub no_mechanisms: bool,

    #[command(flatten)]
    pub client: ClientArgs,
}

/// Execute resolve subcommand
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed or JSON output
/// cannot be serialized. An unresolvable name is not an error; it prints
/// with its status.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ResolveArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let name = args.name.trim();
    if name.is_empty() {
        anyhow::bail!("name must not be blank");
    }

    let (client, config) = args.client.build()?;
    let resolver = Resolver::with_config(&client, config);

    let resolution = resolver.resolve(name);

    let mechanisms = match (&resolution.chembl_id, resolution.status) {
        (Some(chembl_id), ResolutionStatus::Ok) if !args.no_mechanisms => {
            resolver.mechanisms_for(chembl_id, name)
        }
        _ => Vec::new(),
    };

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "resolution": resolution,
                "mechanisms": mechanisms,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            println!("{name}: {}", resolution.status);
            if let Some(chembl_id) = &resolution.chembl_id {
                println!("   ChEMBL ID: {chembl_id}");
            }
            if let Some(molecule_type) = &resolution.molecule_type {
                println!("   Type: {molecule_type}");
            }
            if let Some(smiles) = &resolution.smiles {
                println!("   SMILES: {smiles}");
            }
            if let Some(inchi_key) = &resolution.inchi_key {
                println!("   InChIKey: {inchi_key}");
            }

            if !mechanisms.is_empty() {
                println!("\n   Mechanisms:");
                for row in &mechanisms {
                    let target = row.target_pref_name.as_deref().unwrap_or("unknown target");
                    let action = row.mechanism_of_action.as_deref().unwrap_or("unrecorded");
                    println!("   - {target}: {action}");
                    if verbose {
                        if let Some(target_id) = &row.target_chembl_id {
                            println!("     Target ID: {target_id}");
                        }
                        if let Some(organism) = &row.target_organism {
                            println!("     Organism: {organism}");
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

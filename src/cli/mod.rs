mod args;
mod value_enum;

pub use args::Args;
pub use value_enum::CliOutputFormat;

use fix_paths_domain::{
    config::{AliasPattern, CandidateFilter, FixConfig},
    options::WriteMode,
};
use fix_paths_shared_kernel::{PresentationError, Result};

fn validate_extension(flag: &str, ext: &str) -> Result<String> {
    let trimmed = ext.trim();
    if trimmed.is_empty() || trimmed == "." {
        return Err(PresentationError::InvalidValue {
            flag: flag.to_string(),
            value: ext.to_string(),
            reason: "must name a file extension such as .js".to_string(),
        }
        .into());
    }
    if trimmed.starts_with('.') {
        Ok(trimmed.to_string())
    } else {
        Ok(format!(".{trimmed}"))
    }
}

/// Convert parsed CLI arguments into a domain configuration.
///
/// # Errors
///
/// Returns `Err` when `--ext` is empty or when the alias pattern built from
/// `--call` and `--alias` is rejected by the domain.
pub fn build_config(args: &Args) -> Result<FixConfig> {
    let ext = validate_extension("--ext", &args.ext)?;

    Ok(FixConfig {
        root: args.root.clone(),
        pattern: AliasPattern::new(&args.call_prefix, &args.alias)?,
        candidates: CandidateFilter::new(ext)?,
        write_mode: if args.atomic { WriteMode::Atomic } else { WriteMode::InPlace },
        dry_run: args.dry_run,
        format: args.format.into(),
    })
}

use super::{load_styles, scan_layouts};
use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use relayout_descriptor::{combine, extract};
use relayout_parser::parse;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Resource directory containing layout variant folders (overrides config)
    pub res_dir: Option<String>,

    /// Style-table JSON file
    #[arg(long)]
    pub styles: Option<String>,
}

/// Parse, extract and merge every logical layout without emitting anything.
pub fn check(args: CheckArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let res_dir = PathBuf::from(cwd).join(args.res_dir.as_ref().unwrap_or(&config.res_dir));
    let styles = load_styles(args.styles.as_deref().or(config.styles.as_deref()))?;

    println!("{}", "Checking layout resources...".bright_blue().bold());

    let layouts = scan_layouts(&res_dir)?;
    let mut error_count = 0;

    for (name, files) in &layouts {
        let result = (|| -> Result<_> {
            let mut parses = Vec::new();
            for file in files {
                let source = fs::read_to_string(&file.path)
                    .with_context(|| format!("Cannot read {}", file.path.display()))?;
                let root =
                    parse(&source).map_err(|e| anyhow!("{}: {}", file.path.display(), e))?;
                parses.push(
                    extract(name, &file.variant, &file.path, &root, &styles)
                        .with_context(|| format!("in {}", file.path.display()))?,
                );
            }
            Ok(combine(parses)?)
        })();

        match result {
            Ok(merged) => {
                let optional = merged.bindings.values().filter(|b| b.optional).count();
                println!(
                    "  {} {} ({} variants, {} bindings, {} optional, {} sublayouts)",
                    "✓".green(),
                    name,
                    merged.variants.len(),
                    merged.bindings.len(),
                    optional,
                    merged.sublayouts.len()
                );
            }
            Err(e) => {
                error_count += 1;
                eprintln!("  {} {} - {:#}", "✗".red(), name, e);
            }
        }
    }

    if error_count == 0 {
        Ok(())
    } else {
        Err(anyhow!("{} layouts failed checks", error_count))
    }
}

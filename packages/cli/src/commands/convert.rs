use super::{load_replacements, load_styles, scan_layouts, VariantFile};
use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use relayout_compiler_web::{compile_document, generate_wrapper, CompileOptions, ElementTypes};
use relayout_descriptor::{combine, extract};
use relayout_parser::{parse, LayoutNode};
use relayout_rules::{Replacements, StyleSheet};
use relayout_translator::{Translator, WebStrategy};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Resource directory containing layout variant folders (overrides config)
    pub res_dir: Option<String>,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Replacement-rule JSON file (defaults to the built-in web rules)
    #[arg(long)]
    pub rules: Option<String>,

    /// Style-table JSON file
    #[arg(long)]
    pub styles: Option<String>,

    /// Print generated sources to stdout instead of writing files
    #[arg(long)]
    pub stdout: bool,
}

pub fn convert(args: ConvertArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let res_dir = PathBuf::from(cwd).join(args.res_dir.as_ref().unwrap_or(&config.res_dir));
    let out_dir = PathBuf::from(cwd).join(args.out_dir.as_ref().unwrap_or(&config.out_dir));

    if !res_dir.exists() {
        return Err(anyhow!(
            "Resource directory does not exist: {}",
            res_dir.display()
        ));
    }

    let replacements = load_replacements(args.rules.as_deref().or(config.rules.as_deref()))?;
    let styles = load_styles(args.styles.as_deref().or(config.styles.as_deref()))?;

    println!("{}", "Converting layout resources...".bright_blue().bold());

    let layouts = scan_layouts(&res_dir)?;
    if layouts.is_empty() {
        println!("{}", "No layout files found".yellow());
        return Ok(());
    }
    println!("Found {} logical layouts", layouts.len());

    if !args.stdout {
        fs::create_dir_all(&out_dir)
            .with_context(|| format!("Cannot create output directory {}", out_dir.display()))?;
    }

    let mut success_count = 0;
    let mut error_count = 0;

    for (name, files) in &layouts {
        match convert_layout(name, files, &replacements, &styles, &out_dir, &args) {
            Ok(outputs) => {
                success_count += 1;
                println!("  {} {} → {}", "✓".green(), name, outputs.join(", "));
            }
            Err(e) => {
                error_count += 1;
                eprintln!("  {} {} - {:#}", "✗".red(), name, e);
            }
        }
    }

    println!();
    if error_count == 0 {
        println!(
            "{} Converted {} layouts successfully",
            "✓".green(),
            success_count
        );
        Ok(())
    } else {
        Err(anyhow!(
            "converted {} layouts, {} failed",
            success_count,
            error_count
        ))
    }
}

/// Full pipeline for one logical layout. A failure anywhere aborts this
/// layout only; nothing partial is written for it.
fn convert_layout(
    name: &str,
    files: &[VariantFile],
    replacements: &Replacements,
    styles: &StyleSheet,
    out_dir: &Path,
    args: &ConvertArgs,
) -> Result<Vec<String>> {
    let mut parses = Vec::new();
    let mut roots: Vec<(&str, LayoutNode)> = Vec::new();

    for file in files {
        let source = fs::read_to_string(&file.path)
            .with_context(|| format!("Cannot read {}", file.path.display()))?;
        let root =
            parse(&source).map_err(|e| anyhow!("{}: {}", file.path.display(), e))?;
        let descriptor = extract(name, &file.variant, &file.path, &root, styles)
            .with_context(|| format!("in {}", file.path.display()))?;
        parses.push(descriptor);
        roots.push((&file.variant, root));
    }

    let merged = combine(parses)?;
    let translator = Translator::new(replacements, styles, &WebStrategy);
    let types = ElementTypes::web();

    let mut outputs = Vec::new();
    let mut emitted: Vec<(String, String)> = Vec::new();

    for (variant, root) in &roots {
        let dest = translator
            .convert_element(root)
            .with_context(|| format!("in variant '{}'", variant))?;
        let html = compile_document(&dest, CompileOptions::default());
        let file_name = if variant.is_empty() {
            format!("{}.html", name)
        } else {
            format!("{}.{}.html", name, variant)
        };
        emitted.push((file_name, html));
    }
    emitted.push((
        format!("{}.ts", name),
        generate_wrapper(&merged, replacements, &types),
    ));

    for (file_name, content) in emitted {
        if args.stdout {
            println!("{}", format!("// {}", file_name).dimmed());
            println!("{}", content);
        } else {
            let path = out_dir.join(&file_name);
            fs::write(&path, content)
                .with_context(|| format!("Cannot write {}", path.display()))?;
        }
        outputs.push(file_name);
    }

    Ok(outputs)
}

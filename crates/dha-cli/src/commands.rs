use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Utc;
use comfy_table::Table;
use tracing::{info, info_span};

use dha_gen::assemble;
use dha_model::{GeneratorConfig, IssueRates, Province};
use dha_report::{write_applications_csv, write_registry_csv, write_summary_json};

use crate::cli::GenerateArgs;
use crate::summary::apply_table_style;
use crate::types::GenerateResult;

pub fn run_branches() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Province", "Branches"]);
    apply_table_style(&mut table);
    for province in Province::ALL {
        table.add_row(vec![
            province.as_str().to_string(),
            province.branches().join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let config = GeneratorConfig {
        population_rows: args.population_rows,
        application_rows: args.application_rows,
        rates: IssueRates {
            duplicate: args.duplicate_rate,
            missing: args.missing_rate,
            invalid: args.invalid_rate,
        },
        seed: args.seed,
        today: Utc::now().date_naive(),
        show_progress: !args.no_progress,
    };

    // =========================================================================
    // Stage 1: Generate - registry first, applications against it
    // =========================================================================
    let generate_start = Instant::now();
    let dataset = assemble(&config).context("generate datasets")?;
    info!(
        registry_rows = dataset.registry.len(),
        application_rows = dataset.applications.len(),
        issues = dataset.summary.total_issues(),
        duration_ms = generate_start.elapsed().as_millis(),
        "generation complete"
    );

    // =========================================================================
    // Stage 2: Export - CSV tables plus optional statistics JSON
    // =========================================================================
    let mut files = Vec::new();
    if args.dry_run {
        info!("dry run, skipping export");
    } else {
        let export_span = info_span!("export", output_dir = %args.output_dir.display());
        let _guard = export_span.enter();
        let export_start = Instant::now();
        files.push(
            write_registry_csv(&args.output_dir, &dataset.registry, args.big_data)
                .context("write registry csv")?,
        );
        files.push(
            write_applications_csv(&args.output_dir, &dataset.applications, args.big_data)
                .context("write applications csv")?,
        );
        if !args.no_stats_json {
            files.push(
                write_summary_json(&args.output_dir, &dataset.summary, args.big_data)
                    .context("write summary json")?,
            );
        }
        info!(
            file_count = files.len(),
            duration_ms = export_start.elapsed().as_millis(),
            "export complete"
        );
    }

    Ok(GenerateResult {
        output_dir: args.output_dir.clone(),
        registry_rows: dataset.registry.len(),
        application_rows: dataset.applications.len(),
        summary: dataset.summary,
        files,
        dry_run: args.dry_run,
    })
}

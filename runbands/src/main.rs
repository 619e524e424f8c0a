use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use runbands::{
    compare_variant, reference_id, render_script, summarize, Cli, Config, ConfigurationId,
    ConfigurationSource, FsSource, PlotBlock, PlotSeries, Reporter, TerminalReporter,
    VariantReport,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config and apply CLI overrides
    let config_path = Path::new(&cli.config);
    let mut config = if config_path.exists() {
        Config::load(config_path)?
    } else {
        Config::default()
    };
    cli.apply_to_config(&mut config);

    if cli.verbose {
        eprintln!("Configuration: {:?}", config);
    }

    let grid = config.windows.grid();
    let layout = config.bands.layout;
    let thresholds = config.comparison.thresholds();

    // 1. Discover configurations
    eprintln!("Scanning {}...", config.experiment.output_dir.display());
    let source = FsSource::new(config.experiment.output_dir.clone());
    let configurations = source
        .configurations()
        .context("Failed to scan experiment tree")?;
    eprintln!("{} configurations found", configurations.len());

    // 2. Summarize every configuration
    for id in &configurations {
        let summarized = summarize(&source, grid, layout, id)
            .with_context(|| format!("Failed to summarize {}", id.rel_dir().display()))?;
        match summarized {
            Some((runs, summary)) => {
                if cli.verbose {
                    eprintln!(
                        "{}: {} runs, {} windows",
                        id.rel_dir().display(),
                        runs,
                        summary.records.len()
                    );
                }
            }
            None => eprintln!("{}: no runs, skipped", id.rel_dir().display()),
        }
    }

    // 3. Compare every variant against its instance's reference
    let mut grouped: BTreeMap<(String, String), Vec<ConfigurationId>> = BTreeMap::new();
    for id in &configurations {
        grouped
            .entry((id.instance.clone(), id.test.clone()))
            .or_default()
            .push(id.clone());
    }

    let mut reports = Vec::new();
    let mut blocks = Vec::new();
    for ((instance, test), variants) in &grouped {
        let reference = reference_id(instance, &config.experiment.reference).with_context(|| {
            format!(
                "Invalid reference {:?}: expected <test>/<value>",
                config.experiment.reference
            )
        })?;

        let mut block_variants = Vec::new();
        for id in variants {
            if *id == reference {
                continue;
            }
            let comparison = compare_variant(&source, layout, thresholds, &reference, id)
                .with_context(|| format!("Failed to compare {}", id.rel_dir().display()))?;
            if comparison.is_none() {
                eprintln!(
                    "{}: summary pair incomplete, comparison skipped",
                    id.rel_dir().display()
                );
            }
            reports.push(VariantReport {
                instance: instance.clone(),
                label: id.label(),
                comparison,
            });
            if source.summary_path(id).is_file() {
                block_variants.push(PlotSeries {
                    label: id.label(),
                    stats_path: source.summary_path(id),
                });
            }
        }

        if !block_variants.is_empty() && source.summary_path(&reference).is_file() {
            blocks.push(PlotBlock {
                title: format!("{}: {}", instance, test),
                reference: PlotSeries {
                    label: reference.test.clone(),
                    stats_path: source.summary_path(&reference),
                },
                variants: block_variants,
            });
        }
    }

    // 4. Write the plot script
    if !cli.no_plot && !blocks.is_empty() {
        let script = render_script(&blocks, layout);
        fs::write(&config.experiment.plot_script, script).with_context(|| {
            format!(
                "Failed to write {}",
                config.experiment.plot_script.display()
            )
        })?;
        eprintln!(
            "Plot script written to {}",
            config.experiment.plot_script.display()
        );
    }

    // 5. Report verdicts
    let reporter = TerminalReporter::new();
    reporter.report(&reports)?;

    Ok(())
}

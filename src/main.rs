use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use log::{info, warn};
use occ_coder::algorithm::occupation::normalize;
use occ_coder::utils::logging::{print_comparison, print_run_summary};
use occ_coder::{Classifier, PipelineConfig, RuleTable, pipeline};

#[derive(Parser)]
#[command(name = "occ-coder")]
#[command(about = "Code free-text parental occupations into ISCED-F fields and survey categories")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Code a survey and write all outputs
    Run(RunArgs),
    /// Show which rules match an occupation text
    Explain {
        /// Occupation texts as typed by respondents
        #[arg(required = true)]
        texts: Vec<String>,
    },
    /// Check the built-in rule table for defects
    CheckRules {
        /// Also list patterns overridden by later rules
        #[arg(long)]
        shadowed: bool,
    },
}

#[derive(clap::Args)]
struct RunArgs {
    /// TOML configuration file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Free-text survey (Parquet or CSV)
    #[arg(short, long)]
    survey: Option<PathBuf>,

    /// Correction workbook, CSV sheet or directory of CSV sheets
    #[arg(short = 'C', long)]
    corrections: Option<PathBuf>,

    /// Predefined-category survey (Parquet or CSV)
    #[arg(short, long)]
    predefined: Option<PathBuf>,

    /// Output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Code entries on the current thread only
    #[arg(long)]
    no_parallel: bool,

    /// Worker threads
    #[arg(short, long)]
    threads: Option<usize>,

    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,

    /// Leave homemaker, unemployed and don't-know out of the comparison
    #[arg(long)]
    exclude_sentinels: bool,

    /// Print the comparison tables after the run
    #[arg(long)]
    show_comparison: bool,
}

impl RunArgs {
    fn into_config(self) -> anyhow::Result<(PipelineConfig, bool)> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::from_toml_file(path)
                .with_context(|| format!("loading configuration {}", path.display()))?,
            None => PipelineConfig::default(),
        };

        if let Some(survey) = self.survey {
            config.survey_path = survey;
        }
        if self.corrections.is_some() {
            config.corrections_path = self.corrections;
        }
        if self.predefined.is_some() {
            config.predefined_path = self.predefined;
        }
        if let Some(output) = self.output {
            config.output_dir = output;
        }
        if self.no_parallel {
            config.parallel = false;
        }
        if self.threads.is_some() {
            config.threads = self.threads;
        }
        if self.no_progress {
            config.show_progress = false;
        }
        if self.exclude_sentinels {
            config.include_sentinels_in_comparison = false;
        }
        Ok((config, self.show_comparison))
    }
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Run(args) => {
            let (config, show_comparison) = args.into_config()?;
            let output = pipeline::run_detailed(&config).context("coding run failed")?;
            print_run_summary(&output.summary);
            if show_comparison {
                match &output.reconciliation {
                    Some(reconciliation) => reconciliation.tables.iter().for_each(print_comparison),
                    None => warn!("No predefined survey configured, nothing to compare"),
                }
            }
        }
        Command::Explain { texts } => {
            let classifier = Classifier::new();
            for text in &texts {
                match normalize(Some(text.as_str())) {
                    Some(normalized) => println!("{}", classifier.explain(&normalized)),
                    None => println!("'{text}': no occupation text"),
                }
            }
        }
        Command::CheckRules { shadowed } => {
            let table = RuleTable::builtin();
            let report = table.validate();
            info!(
                "Rule table: {} rules in {} blocks",
                table.len(),
                table.blocks().len()
            );
            if shadowed {
                for &(earlier, later) in &report.shadowed {
                    let (a, b) = (&table.rules()[earlier], &table.rules()[later]);
                    println!(
                        "'{}' ({}) overridden by '{}' ({})",
                        a.pattern,
                        a.target_code.code(),
                        b.pattern,
                        b.target_code.code()
                    );
                }
            }
            for issue in &report.issues {
                println!("{issue}");
            }
            if !report.is_valid() {
                bail!("rule table has {} defects", report.issues.len());
            }
            println!("Rule table OK");
        }
    }
    Ok(())
}

//! Resume ranker: rank PDF resumes against a job description

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use resume_ranker::cli::{self, Cli, Commands, ConfigAction};
use resume_ranker::config::Config;
use resume_ranker::error::{Result, ResumeRankerError};
use resume_ranker::input::InputManager;
use resume_ranker::output::formatter::{resolve_save_path, save_report_to_file, ReportGenerator};
use resume_ranker::output::RankingReport;
use resume_ranker::processing::document::{Document, RankedResult};
use resume_ranker::processing::entities::HeuristicRecognizer;
use resume_ranker::processing::fields::FieldExtractor;
use resume_ranker::processing::RankingEngine;
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = if cli.command.reads_config() {
        match Config::load(cli.config.as_deref()) {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load configuration: {}", e);
                process::exit(1);
            }
        }
    } else {
        Config::default()
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Rank {
            resumes,
            job,
            query,
            output,
            save,
            top,
            skip_invalid,
        } => {
            if let Some(format) = output {
                config.output.format =
                    cli::parse_output_format(&format).map_err(ResumeRankerError::InvalidInput)?;
            }
            if skip_invalid {
                config.extraction.skip_unparseable = true;
            }

            let input_manager = InputManager::new();
            let job_text = match (job, query) {
                (Some(path), _) => {
                    cli::validate_file_extension(&path, &["txt", "md", "markdown"]).map_err(|e| {
                        ResumeRankerError::InvalidInput(format!("Job description file: {}", e))
                    })?;
                    input_manager.load_job_description(&path).await?
                }
                (None, Some(text)) => text.trim().to_string(),
                (None, None) => {
                    return Err(ResumeRankerError::InvalidInput(
                        "A job description is required (--job or --query)".to_string(),
                    ))
                }
            };
            if job_text.is_empty() {
                log::warn!("Job description is empty; every score will be 0");
            }

            let documents = input_manager.load_documents(&resumes).await?;
            info!("Loaded {} resumes", documents.len());

            let recognizer =
                HeuristicRecognizer::new().with_stopwords(&config.extraction.extra_name_stopwords);
            let engine = RankingEngine::from_config(&config, FieldExtractor::new(&recognizer));
            let result = rank_with_progress(&engine, &job_text, &documents)?;

            let mut report =
                RankingReport::from_result(&result, &job_text, config.output.score_precision);
            if let Some(n) = top {
                report = report.truncated(n);
            }

            let generator = ReportGenerator::with_options(config.output.color_output, true, true);
            let rendered = generator.generate_report(&report, &config.output.format)?;
            println!("{}", rendered);

            if let Some(path) = save {
                let path = resolve_save_path(&path, &config.output.format);
                // Saved console reports never carry color codes.
                let content = ReportGenerator::with_options(false, true, true)
                    .generate_report(&report, &config.output.format)?;
                save_report_to_file(&content, &path)?;
                println!("💾 Report saved to {}", path.display());
            }
        }

        Commands::Extract { resume, show_text } => {
            cli::validate_file_extension(&resume, &["pdf"])
                .map_err(|e| ResumeRankerError::InvalidInput(format!("Resume file: {}", e)))?;

            let document = InputManager::new().load_document(&resume).await?;
            let recognizer =
                HeuristicRecognizer::new().with_stopwords(&config.extraction.extra_name_stopwords);
            let engine = RankingEngine::from_config(&config, FieldExtractor::new(&recognizer));
            let candidate = engine.extract_candidate(&document)?;
            if candidate.fields.is_unknown() {
                log::warn!("No candidate details found in {}", candidate.file_name);
            }

            println!("📄 File:    {}", candidate.file_name);
            println!("👤 Name:    {}", candidate.fields.name);
            println!("📧 Email:   {}", candidate.fields.email);
            println!("📞 Contact: {}", candidate.fields.phone);
            println!("🔤 Text:    {} characters", candidate.text.chars().count());

            if show_text {
                println!("\n{}", candidate.text);
            }
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                println!("{}", config.to_toml()?);
            }
            ConfigAction::Path => {
                println!("{}", config_path.unwrap_or_else(Config::config_path).display());
            }
            ConfigAction::Init { force } => {
                let path = config_path.unwrap_or_else(Config::config_path);
                Config::init_at(&path, force)?;
                println!("✅ Wrote default configuration to {}", path.display());
            }
        },
    }

    Ok(())
}

/// Rank the batch with a progress bar over the extraction step.
fn rank_with_progress(
    engine: &RankingEngine<'_>,
    query: &str,
    documents: &[Document],
) -> Result<RankedResult> {
    let progress = ProgressBar::new(documents.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );

    let result = engine.rank_documents_with(query, documents, |document| {
        progress.set_message(document.name.clone());
        progress.inc(1);
    });
    progress.finish_and_clear();

    result
}

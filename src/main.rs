//! `choice-ranker` binary: load configuration, rank the scenario, print the report.

use std::process::ExitCode;
use std::sync::Arc;

use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

use choice_ranker::adapters::{
    JsonReportRenderer, ReferenceScenario, TextTableRenderer, YamlScenarioSource,
};
use choice_ranker::application::RunAnalysisHandler;
use choice_ranker::config::{AppConfig, LoggingConfig, OutputFormat};
use choice_ranker::domain::analysis::McdaPipeline;
use choice_ranker::ports::{ReportRenderer, ScenarioSource};

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
    if logging.is_json() {
        builder.json().init();
    } else {
        builder.with_target(true).with_level(true).init();
    }
}

fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("choice-ranker: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.logging);

    let source: Arc<dyn ScenarioSource> = match &config.scenario.path {
        Some(path) => Arc::new(YamlScenarioSource::new(path)),
        None => Arc::new(ReferenceScenario),
    };
    let renderer: Arc<dyn ReportRenderer> = match config.scenario.output {
        OutputFormat::Table => Arc::new(TextTableRenderer::new(config.scenario.precision)),
        OutputFormat::Json => Arc::new(JsonReportRenderer::pretty()),
    };

    let handler = RunAnalysisHandler::new(
        source,
        renderer,
        McdaPipeline::new(config.analysis.to_options()),
    );

    match handler.handle() {
        Ok(result) => {
            print!("{}", result.rendered);
            if config.scenario.output == OutputFormat::Json {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(code = %e.code, details = ?e.details, "Analysis failed: {}", e.message);
            ExitCode::FAILURE
        }
    }
}

//! Command handlers

use crate::cli::{Cli, Commands, ProfileArgs, UiAction};
use crate::output::{
    output_contract, output_demo, output_estimate, output_form_state, output_quote,
    output_ui_state,
};
use chrono::Utc;
use cleanquote_app::app::{check_agreement, run_scenarios, EstimateFormController};
use cleanquote_app::config::{Config, EstimateSource};
use cleanquote_app::local_formula::LocalFormulaAdapter;
use cleanquote_app::ports::{open_estimate_port, open_remote_port};
use cleanquote_app::repository::open_ui_store;
use cleanquote_domain::model::{fixture_scenarios, Scenario};
use cleanquote_domain::service::{estimate, validate_inputs, DerivedMetrics, ValidationPolicy};
use cleanquote_infra::load_scenarios;
use cleanquote_types::{OutputFormat, QuoteRequest, Result};
use std::path::PathBuf;

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Estimate { profile, strict } => {
            let policy = if strict {
                ValidationPolicy::Strict
            } else {
                config.validation
            };
            cmd_estimate(&profile, policy, output_format)
        }

        Commands::Quote {
            profile,
            address,
            cleaning_type,
            source,
            api_url,
            timeout,
        } => {
            if let Some(url) = api_url {
                config.api_base_url = url;
            }
            if let Some(secs) = timeout {
                config.set_timeout_secs(secs)?;
            }
            let source = source.unwrap_or(config.estimate_source);
            let mut request = QuoteRequest::new(profile.to_inputs()).with_cleaning_type(cleaning_type);
            request.address = address;
            cmd_quote(&config, source, &request, output_format).await
        }

        Commands::Demo { scenarios } => {
            let scenarios = resolve_scenarios(scenarios)?;
            output_demo(output_format, &run_scenarios(&scenarios))
        }

        Commands::Compare {
            api_url,
            scenarios,
            address,
            tolerance,
        } => {
            if let Some(url) = api_url {
                config.api_base_url = url;
            }
            let tolerance = tolerance.unwrap_or(config.contract_tolerance_pct);
            let scenarios = resolve_scenarios(scenarios)?;
            cmd_compare(&config, &scenarios, &address, tolerance, output_format).await
        }

        Commands::Config {
            show,
            set_source,
            set_api_url,
            set_timeout,
            set_output,
            set_validation,
            set_tolerance,
            set_data_dir,
        } => {
            let mut changed = false;

            if let Some(source) = set_source {
                config.estimate_source = source;
                changed = true;
            }
            if let Some(url) = set_api_url {
                config.api_base_url = url;
                changed = true;
            }
            if let Some(secs) = set_timeout {
                config.set_timeout_secs(secs)?;
                changed = true;
            }
            if let Some(format) = set_output {
                config.output_format = format;
                changed = true;
            }
            if let Some(policy) = set_validation {
                config.validation = policy;
                changed = true;
            }
            if let Some(tolerance) = set_tolerance {
                config.contract_tolerance_pct = tolerance;
                changed = true;
            }
            if let Some(dir) = set_data_dir {
                config.data_dir = Some(dir);
                changed = true;
            }

            if changed {
                config.save()?;
                println!("Configuration saved.");
            }
            if show || !changed {
                print!("{}", config);
            }
            Ok(())
        }

        Commands::Ui { action } => cmd_ui(&config, action, output_format),
    }
}

fn cmd_estimate(
    profile: &ProfileArgs,
    policy: ValidationPolicy,
    output_format: OutputFormat,
) -> Result<()> {
    let inputs = profile.to_inputs();
    validate_inputs(&inputs, policy)?;

    let result = estimate(&inputs);
    let metrics = DerivedMetrics::compute(&inputs, &result);
    output_estimate(output_format, &inputs, &result, &metrics)
}

async fn cmd_quote(
    config: &Config,
    source: EstimateSource,
    request: &QuoteRequest,
    output_format: OutputFormat,
) -> Result<()> {
    let port = open_estimate_port(config, source)?;
    let controller =
        EstimateFormController::new(port, config.timeout()).with_validation(config.validation);

    match controller.submit(request).await {
        Ok(quote) => output_quote(output_format, &quote),
        Err(e) => {
            output_form_state(output_format, &controller.state())?;
            Err(e.into())
        }
    }
}

async fn cmd_compare(
    config: &Config,
    scenarios: &[Scenario],
    address: &str,
    tolerance_pct: f64,
    output_format: OutputFormat,
) -> Result<()> {
    let local = LocalFormulaAdapter::new(config.validation);
    let remote = open_remote_port(config)?;

    let requests: Vec<(String, QuoteRequest)> = scenarios
        .iter()
        .map(|s| {
            (
                s.name.clone(),
                QuoteRequest::new(s.inputs).with_address(address),
            )
        })
        .collect();

    let report = check_agreement(&local, &remote, &requests, tolerance_pct).await;
    output_contract(output_format, &report)
}

fn cmd_ui(config: &Config, action: UiAction, output_format: OutputFormat) -> Result<()> {
    let mut store = open_ui_store(config)?;
    let now = Utc::now();

    match action {
        UiAction::Show => {}
        UiAction::Theme { theme } => store.set_theme(theme)?,
        UiAction::Sidebar { collapsed } => match collapsed {
            Some(value) => store.set_sidebar_collapsed(value)?,
            None => {
                store.toggle_sidebar()?;
            }
        },
        UiAction::TimerStart { job_id } => {
            if !store.start_timer(&job_id, now)? {
                eprintln!("Timer {} is already running", job_id);
            }
        }
        UiAction::TimerStop { job_id } => {
            if !store.stop_timer(&job_id, now)? {
                eprintln!("Timer {} is not running", job_id);
            }
        }
        UiAction::TimerClear { job_id } => {
            if !store.clear_timer(&job_id)? {
                eprintln!("No timer for {}", job_id);
            }
        }
    }

    output_ui_state(output_format, store.state())
}

fn resolve_scenarios(path: Option<PathBuf>) -> Result<Vec<Scenario>> {
    match path {
        Some(path) => load_scenarios(path),
        None => Ok(fixture_scenarios()),
    }
}

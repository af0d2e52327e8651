//! Output formatting module

use chrono::Utc;
use cleanquote_app::app::{ContractReport, FormState, ScenarioReport};
use cleanquote_domain::service::DerivedMetrics;
use cleanquote_store::UiState;
use cleanquote_types::{EstimateInputs, EstimateResult, OutputFormat, Quote, Result};
use serde::Serialize;

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn ratio(value: Option<f64>, unit: &str) -> String {
    value
        .map(|v| format!("${:.2}/{}", v, unit))
        .unwrap_or_else(|| "n/a".to_string())
}

#[derive(Serialize)]
struct EstimateOutput<'a> {
    inputs: &'a EstimateInputs,
    result: &'a EstimateResult,
    metrics: &'a DerivedMetrics,
}

pub fn output_estimate(
    output_format: OutputFormat,
    inputs: &EstimateInputs,
    result: &EstimateResult,
    metrics: &DerivedMetrics,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&EstimateOutput {
            inputs,
            result,
            metrics,
        });
    }

    println!("\nEstimate");
    println!("========");
    println!("Square footage:  {}", inputs.sqft);
    println!(
        "Property:        {}",
        if inputs.type_house != 0.0 { "house" } else { "apartment/condo" }
    );
    println!("Time:            {:.2} h", result.cleaning_time_hours);
    println!("Price:           ${:.0}", result.price_dollars);
    println!("Per hour:        {}", ratio(metrics.price_per_hour, "h"));
    println!("Per sqft:        {}", ratio(metrics.price_per_sqft, "sqft"));
    Ok(())
}

pub fn output_quote(output_format: OutputFormat, quote: &Quote) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(quote);
    }

    println!("\nQuote");
    println!("=====");
    println!("Price:           ${:.2}", quote.price_dollars);
    if let Some(hours) = quote.cleaning_time_hours {
        println!("Time:            {:.2} h", hours);
    }
    println!("Square footage:  {}", quote.square_footage);
    println!("Source:          {}", quote.source);
    Ok(())
}

/// Show the form state after a failed submission
pub fn output_form_state(output_format: OutputFormat, state: &FormState) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(state);
    }

    if let FormState::Error { message, .. } = state {
        println!("{}", message);
    }
    Ok(())
}

pub fn output_demo(output_format: OutputFormat, reports: &[ScenarioReport]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&reports);
    }

    println!("\nEstimate Scenarios");
    println!("==================");
    println!(
        "{:<26} {:>8} {:>8} {:>8} {:>12} {:>12}",
        "Scenario", "Sqft", "Hours", "Price", "$/hour", "$/sqft"
    );
    for report in reports {
        println!(
            "{:<26} {:>8} {:>8.2} {:>8.0} {:>12} {:>12}",
            report.name,
            report.inputs.sqft,
            report.result.cleaning_time_hours,
            report.result.price_dollars,
            report
                .metrics
                .price_per_hour
                .map(|v| format!("{:.2}", v))
                .unwrap_or_else(|| "n/a".to_string()),
            report
                .metrics
                .price_per_sqft
                .map(|v| format!("{:.4}", v))
                .unwrap_or_else(|| "n/a".to_string()),
        );
    }
    Ok(())
}

pub fn output_contract(output_format: OutputFormat, report: &ContractReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(report);
    }

    println!("\nEstimate Path Agreement ({} vs {})", report.baseline, report.candidate);
    println!("=====================================");
    println!(
        "{:<26} {:>10} {:>10} {:>8}  {}",
        "Scenario", report.baseline, report.candidate, "Delta", "Status"
    );
    for row in &report.rows {
        let price = |p: Option<f64>| p.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "-".to_string());
        let delta = row
            .delta_pct
            .map(|d| format!("{:.1}%", d))
            .unwrap_or_else(|| "-".to_string());
        let status = match (&row.error, row.within_tolerance) {
            (Some(e), _) => format!("ERROR {}", e),
            (None, true) => "ok".to_string(),
            (None, false) => "DIVERGES".to_string(),
        };
        println!(
            "{:<26} {:>10} {:>10} {:>8}  {}",
            row.name,
            price(row.baseline_price),
            price(row.candidate_price),
            delta,
            status
        );
    }
    println!();
    println!(
        "{} of {} scenarios outside {:.1}% tolerance",
        report.disagreements(),
        report.rows.len(),
        report.tolerance_pct
    );
    Ok(())
}

pub fn output_ui_state(output_format: OutputFormat, state: &UiState) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(state);
    }

    let now = Utc::now();
    println!("\nUI State");
    println!("========");
    println!("Theme:           {}", state.theme);
    println!("Sidebar:         {}", if state.sidebar_collapsed { "collapsed" } else { "expanded" });
    if state.job_timers.is_empty() {
        println!("Job timers:      (none)");
    } else {
        println!("Job timers:");
        for (job_id, timer) in &state.job_timers {
            let secs = timer.elapsed_secs(now);
            println!(
                "  {:<20} {:>3}h {:02}m {:02}s {}",
                job_id,
                secs / 3600,
                (secs % 3600) / 60,
                secs % 60,
                if timer.is_running() { "(running)" } else { "" }
            );
        }
    }
    Ok(())
}

//! Renders a proposal estimate for the document and display collaborators.

use crate::config::cli::LocalStorage;
use crate::domain::model::ProposalEstimate;
use crate::utils::error::{EstimatorError, Result};

pub fn render_json(estimate: &ProposalEstimate) -> Result<String> {
    Ok(serde_json::to_string_pretty(estimate)?)
}

/// Line-item table followed by a TOTAL row.
pub fn render_csv(estimate: &ProposalEstimate) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record([
        "service_id",
        "trade",
        "job_type",
        "size",
        "price_low",
        "price_high",
        "days_low",
        "days_high",
        "region",
    ])?;

    for item in &estimate.line_items {
        writer.write_record([
            item.service_id.as_str(),
            item.trade_name.as_str(),
            item.job_type_name.as_str(),
            item.size.label(),
            &item.price.low.to_string(),
            &item.price.high.to_string(),
            &item.days.low.to_string(),
            &item.days.high.to_string(),
            item.region.as_ref().map(|r| r.abbreviation.as_str()).unwrap_or(""),
        ])?;
    }

    writer.write_record([
        "TOTAL",
        "",
        estimate.label.as_str(),
        "",
        &estimate.price.low.to_string(),
        &estimate.price.high.to_string(),
        &estimate.days.low.to_string(),
        &estimate.days.high.to_string(),
        estimate.region.as_ref().map(|r| r.abbreviation.as_str()).unwrap_or(""),
    ])?;

    let bytes = writer
        .into_inner()
        .map_err(|e| EstimatorError::StorageError {
            message: format!("CSV buffer flush failed: {}", e),
        })?;
    String::from_utf8(bytes).map_err(|e| EstimatorError::StorageError {
        message: format!("CSV output is not UTF-8: {}", e),
    })
}

fn money(amount: i64) -> String {
    let digits = amount.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

pub fn render_summary(estimate: &ProposalEstimate) -> String {
    let mut lines = vec![format!("📋 {}", estimate.label)];

    for item in &estimate.line_items {
        let mut line = format!(
            "  • {} / {} ({}): {} - {}, {}-{} days",
            item.trade_name,
            item.job_type_name,
            item.size,
            money(item.price.low),
            money(item.price.high),
            item.days.low,
            item.days.high
        );
        if let Some(footage) = item.footage.filter(|f| *f > 0.0) {
            line.push_str(&format!(", {} ft", footage));
        }
        lines.push(line);
    }

    lines.push(format!(
        "  Total: {} - {}, {}-{} days",
        money(estimate.price.low),
        money(estimate.price.high),
        estimate.days.low,
        estimate.days.high
    ));
    if let Some(region) = &estimate.region {
        lines.push(format!(
            "  Region: {} ({}), x{}",
            region.state, region.region, region.multiplier
        ));
    }
    if !estimate.warranty.is_empty() {
        lines.push(format!("  Warranty: {}", estimate.warranty));
    }
    if !estimate.exclusions.is_empty() {
        lines.push(format!("  Excludes: {}", estimate.exclusions.join("; ")));
    }

    lines.join("\n")
}

/// Writes one file per requested format and returns their paths.
pub fn write_reports(
    estimate: &ProposalEstimate,
    storage: &LocalStorage,
    formats: &[String],
) -> Result<Vec<String>> {
    let mut written = Vec::new();

    for format in formats {
        let (file_name, content) = match format.as_str() {
            "json" => ("estimate.json", render_json(estimate)?),
            "csv" => ("estimate.csv", render_csv(estimate)?),
            other => {
                return Err(EstimatorError::InvalidConfigValueError {
                    field: "output.formats".to_string(),
                    value: other.to_string(),
                    reason: "Unsupported format".to_string(),
                })
            }
        };
        tracing::debug!("Writing {} report", format);
        written.push(storage.write_file(file_name, content.as_bytes())?);
    }

    Ok(written)
}

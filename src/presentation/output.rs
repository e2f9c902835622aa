//! Output Rendering
//!
//! Final summaries printed after the event stream: the verdict line of a run,
//! the plan summary, and the inventory listing.

use crate::application::RefreshReport;
use crate::domain::entities::Inventory;
use crate::domain::services::Verdict;

use super::theme::{colors, Icon, Style};

/// Final line(s) of a run: success, or every failure enumerated
pub fn render_verdict(verdict: &Verdict, style: Style) -> String {
    match verdict {
        Verdict::Success => format!(
            "{} {}",
            style.icon(Icon::Success),
            style.paint("All instances up to date", colors::SUCCESS)
        ),
        Verdict::Failure(failures) => {
            let mut out = format!(
                "{} {}",
                style.icon(Icon::Error),
                style.paint(
                    &format!("{} failure(s):", failures.len()),
                    colors::ERROR
                )
            );
            for failure in failures {
                out.push_str(&format!("\n  - {}", failure));
            }
            out
        }
    }
}

/// Summary of a dry run
pub fn render_plan(report: &RefreshReport, style: Style) -> String {
    let redeploys = report.redeploy_count();
    let icon = if redeploys == 0 {
        Icon::Success
    } else {
        Icon::Arrow
    };
    let mut out = format!(
        "{} Plan: {} to redeploy, {} to skip, {} not deployed",
        style.icon(icon),
        redeploys,
        report.skip_count(),
        report.not_deployed.len()
    );
    if !report.region_failures.is_empty() {
        out.push('\n');
        out.push_str(&render_verdict(&report.verdict, style));
    }
    out
}

/// `function: region, region` per line
pub fn render_inventory(inventory: &Inventory, style: Style) -> String {
    if inventory.is_empty() {
        return format!("{} No deployed functions", style.icon(Icon::Pending));
    }

    let width = inventory.functions().map(str::len).max().unwrap_or(0);
    let mut lines: Vec<String> = inventory
        .functions()
        .map(|function| {
            let regions: Vec<&str> = inventory
                .regions_of(function)
                .map(|set| set.iter().map(String::as_str).collect())
                .unwrap_or_default();
            format!("{:<width$}  {}", function, style.dim(&regions.join(", ")))
        })
        .collect();
    lines.push(format!(
        "\n{} {} functions, {} instances",
        style.icon(Icon::Success),
        inventory.function_count(),
        inventory.instance_count()
    ));
    lines.join("\n")
}

/// Verdict as a final NDJSON object
pub fn verdict_json(verdict: &Verdict) -> serde_json::Value {
    let failures: Vec<serde_json::Value> = verdict
        .failures()
        .iter()
        .map(|f| {
            serde_json::json!({
                "instance": f.instance,
                "operation": f.operation,
                "detail": f.detail,
            })
        })
        .collect();
    serde_json::json!({
        "event": "verdict",
        "status": if verdict.is_success() { "success" } else { "failure" },
        "failures": failures,
    })
}

/// Inventory as a JSON object `{ "functions": { name: [regions] } }`
pub fn inventory_json(inventory: &Inventory) -> serde_json::Value {
    let functions: serde_json::Map<String, serde_json::Value> = inventory
        .functions()
        .map(|function| {
            let regions: Vec<&str> = inventory
                .regions_of(function)
                .map(|set| set.iter().map(String::as_str).collect())
                .unwrap_or_default();
            (function.to_string(), serde_json::json!(regions))
        })
        .collect();
    serde_json::json!({
        "event": "inventory",
        "functions": functions,
        "function_count": inventory.function_count(),
        "instance_count": inventory.instance_count(),
    })
}

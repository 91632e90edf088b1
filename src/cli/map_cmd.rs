use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::output::{to_json, OutputFormat, OutputOptions};
use crate::cli::renderer;
use crate::core::input::read_document;
use crate::core::mapper;

/// Print mapped items as text sections or one JSON array.
fn emit<T, F>(items: &[T], kind: &str, opts: &OutputOptions, render: F) -> Result<()>
where
    T: Serialize,
    F: Fn(&T, bool) -> String,
{
    match opts.format {
        OutputFormat::Text => {
            if items.is_empty() {
                eprintln!("No {} found in input.", kind);
                return Ok(());
            }
            let sections: Vec<String> = items.iter().map(|i| render(i, opts.use_color)).collect();
            println!("{}", sections.join("\n\n"));
        }
        OutputFormat::Json => println!("{}", to_json(items, opts)?),
    }
    Ok(())
}

pub fn cost(
    path: &str,
    metric: &str,
    show_daily: bool,
    decimal_places: u32,
    opts: &OutputOptions,
) -> Result<()> {
    let json = read_document(path)?;
    let result = mapper::cost::map_cost_response(&json, metric)
        .with_context(|| format!("Failed to aggregate cost results from {}", path))?;

    match opts.format {
        OutputFormat::Text => println!(
            "{}",
            renderer::render_cost(&result, decimal_places, show_daily, opts.use_color)
        ),
        OutputFormat::Json => println!("{}", to_json(&result, opts)?),
    }
    Ok(())
}

pub fn tasks(path: &str, opts: &OutputOptions) -> Result<()> {
    let json = read_document(path)?;
    let instances = mapper::ecs::map_tasks_response(&json)
        .with_context(|| format!("Failed to map ECS tasks from {}", path))?;
    emit(&instances, "tasks", opts, renderer::render_container)
}

pub fn clusters(path: &str, opts: &OutputOptions) -> Result<()> {
    let json = read_document(path)?;
    let clusters = mapper::ecs::map_clusters_response(&json)
        .with_context(|| format!("Failed to map ECS clusters from {}", path))?;
    emit(&clusters, "clusters", opts, renderer::render_cluster)
}

pub fn vpcs(path: &str, opts: &OutputOptions) -> Result<()> {
    let json = read_document(path)?;
    let vpcs = mapper::ec2::map_vpcs_response(&json)
        .with_context(|| format!("Failed to map VPCs from {}", path))?;
    emit(&vpcs, "VPCs", opts, renderer::render_vpc)
}

pub fn subnets(path: &str, opts: &OutputOptions) -> Result<()> {
    let json = read_document(path)?;
    let subnets = mapper::ec2::map_subnets_response(&json)
        .with_context(|| format!("Failed to map subnets from {}", path))?;
    emit(&subnets, "subnets", opts, renderer::render_subnet)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_opts() -> OutputOptions {
        OutputOptions {
            format: OutputFormat::Text,
            pretty: false,
            use_color: false,
        }
    }

    fn write_fixture(name: &str, content: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("cmap_test_map_cmd_{}", std::process::id()));
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn cost_command_reports_malformed_input() {
        let path = write_fixture(
            "bad_cost.json",
            r#"{ "ResultsByTime": [{ "Groups": [{ "Keys": ["us-east-1", "EC2"], "Metrics": {} }] }] }"#,
        );
        let err = cost(path.to_str().unwrap(), "UnblendedCost", false, 2, &text_opts()).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Failed to aggregate cost results"));
        assert!(message.contains("UnblendedCost"));
    }

    #[test]
    fn cost_command_rejects_numeric_amount() {
        let path = write_fixture(
            "numeric_cost.json",
            r#"{ "ResultsByTime": [{ "Groups": [{ "Keys": ["us-east-1", "EC2"], "Metrics": { "UnblendedCost": { "Amount": 10.5 } } }] }] }"#,
        );
        let err = cost(path.to_str().unwrap(), "UnblendedCost", false, 2, &text_opts()).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to aggregate cost results"));
    }

    #[test]
    fn cost_command_accepts_valid_input() {
        let path = write_fixture(
            "good_cost.json",
            r#"[{ "Groups": [{ "Keys": ["us-east-1", "EC2"], "Metrics": { "UnblendedCost": { "Amount": "1.00", "Unit": "USD" } } }] }]"#,
        );
        assert!(cost(path.to_str().unwrap(), "UnblendedCost", true, 2, &text_opts()).is_ok());
    }

    #[test]
    fn vpcs_command_accepts_empty_envelope() {
        let path = write_fixture("empty_vpcs.json", r#"{ "Vpcs": [] }"#);
        assert!(vpcs(path.to_str().unwrap(), &text_opts()).is_ok());
    }

    #[test]
    fn tasks_command_reports_missing_field() {
        let path = write_fixture("bad_tasks.json", r#"{ "tasks": [{ "containers": [] }] }"#);
        let err = tasks(path.to_str().unwrap(), &text_opts()).unwrap_err();
        assert!(format!("{:#}", err).contains("taskArn"));
    }
}

use colored::{control, ColoredString, Colorize};

use crate::core::formatter::{format_amount, format_period, format_share, format_tags};
use crate::core::models::cluster::{Cluster, ClusterStatus};
use crate::core::models::container::{ContainerInstance, ContainerInstanceStatus};
use crate::core::models::cost::CloudCost;
use crate::core::models::network::{Subnet, Vpc, VpcState};

const RECENT_DAYS: usize = 10;

/// Render an aggregated cost result.
///
/// Layout:
/// ```text
///  Cost (UnblendedCost)
///   Period    2024-03-01 .. 2024-03-03 (end exclusive)
///   Total     15.75 USD
///   Breakdown:
///     us-east-1      EC2                          15.75  100.0%
/// ```
pub fn render_cost(cost: &CloudCost, decimal_places: u32, show_daily: bool, use_color: bool) -> String {
    control::set_override(use_color);

    let mut lines: Vec<String> = Vec::new();
    lines.push(format!(" Cost ({})", cost.metric).bold().to_string());

    if let Some(period) = &cost.period {
        lines.push(format!("  {}    {}", "Period".cyan(), format_period(period)));
    }
    let unit_suffix = cost
        .unit
        .as_deref()
        .map(|u| format!(" {}", u))
        .unwrap_or_default();
    lines.push(format!(
        "  {}     {}{}",
        "Total".cyan(),
        format_amount(cost.total_cost_amount, decimal_places).bold(),
        unit_suffix
    ));

    if cost.is_empty() {
        lines.push(format!("  {}", "No cost groups".dimmed()));
        return lines.join("\n");
    }

    lines.push(format!("  {}:", "Breakdown".cyan()));
    for item in &cost.details {
        lines.push(format!(
            "    {:<14} {:<28} {:>12}  {}",
            item.region,
            item.service,
            format_amount(item.cost_amount, decimal_places),
            format_share(item.cost_amount, cost.total_cost_amount).dimmed()
        ));
    }

    if show_daily && !cost.daily.is_empty() {
        lines.push(format!("  {}:", "Recent Days".cyan()));
        for day in cost.daily.iter().take(RECENT_DAYS) {
            let estimated = if day.estimated { " (estimated)" } else { "" };
            lines.push(format!(
                "    {:<12} {:>12}{}",
                day.date.format("%Y-%m-%d"),
                format_amount(day.amount, decimal_places),
                estimated.yellow()
            ));
        }
    }

    lines.join("\n")
}

pub fn render_container(instance: &ContainerInstance, use_color: bool) -> String {
    control::set_override(use_color);

    let status_text = instance.status.to_string();
    let colored_status: ColoredString = match instance.status {
        ContainerInstanceStatus::Started => status_text.green(),
        ContainerInstanceStatus::Completed => status_text.blue(),
        ContainerInstanceStatus::Failed => status_text.red(),
        ContainerInstanceStatus::Unknown => status_text.dimmed(),
    };

    [
        format!(" {}", instance.instance_id).bold().to_string(),
        format!("  {}    {}", "Status".cyan(), colored_status),
        format!(
            "  {}        {}",
            "IP".cyan(),
            instance.ip_address.as_deref().unwrap_or("-")
        ),
    ]
    .join("\n")
}

pub fn render_cluster(cluster: &Cluster, use_color: bool) -> String {
    control::set_override(use_color);

    let status_text = cluster.status.to_string();
    let colored_status: ColoredString = match cluster.status {
        ClusterStatus::Active => status_text.green(),
        ClusterStatus::Inactive => status_text.yellow(),
        ClusterStatus::Unknown => status_text.dimmed(),
    };

    let mut lines = vec![
        format!(" {}", cluster.cluster_name).bold().to_string(),
        format!("  {}       {}", "ARN".cyan(), cluster.cluster_arn),
        format!("  {}    {}", "Status".cyan(), colored_status),
    ];
    if let (Some(running), Some(pending)) = (cluster.running_tasks, cluster.pending_tasks) {
        lines.push(format!(
            "  {}     {} running, {} pending",
            "Tasks".cyan(),
            running,
            pending
        ));
    }
    lines.push(format!("  {}      {}", "Tags".cyan(), format_tags(&cluster.tags)));
    lines.join("\n")
}

pub fn render_vpc(vpc: &Vpc, use_color: bool) -> String {
    control::set_override(use_color);

    let state_text = vpc.state.to_string();
    let colored_state: ColoredString = match vpc.state {
        VpcState::Available => state_text.green(),
        VpcState::Pending => state_text.yellow(),
        VpcState::Unknown => state_text.dimmed(),
    };

    let mut lines = vec![
        format!(" {}", vpc.vpc_id).bold().to_string(),
        format!("  {}     {}", "State".cyan(), colored_state),
    ];
    if let Some(cidr) = &vpc.cidr_block {
        lines.push(format!("  {}      {}", "CIDR".cyan(), cidr));
    }
    lines.push(format!("  {}      {}", "Tags".cyan(), format_tags(&vpc.tags)));
    lines.join("\n")
}

pub fn render_subnet(subnet: &Subnet, use_color: bool) -> String {
    control::set_override(use_color);

    let mut lines = vec![
        format!(" {}", subnet.subnet_id).bold().to_string(),
        format!("  {}      {}", "Zone".cyan(), subnet.availability_zone),
    ];
    if let Some(vpc_id) = &subnet.vpc_id {
        lines.push(format!("  {}       {}", "VPC".cyan(), vpc_id));
    }
    if let Some(cidr) = &subnet.cidr_block {
        lines.push(format!("  {}      {}", "CIDR".cyan(), cidr));
    }
    lines.push(format!("  {}      {}", "Tags".cyan(), format_tags(&subnet.tags)));
    lines.join("\n")
}

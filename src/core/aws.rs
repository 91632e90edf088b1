//! Raw response shapes as returned by the ECS, EC2 and Cost Explorer APIs.
//!
//! Fields the mappers need are kept optional so a missing field surfaces as
//! a [`MapperError::MissingField`] naming the field, instead of an opaque
//! deserialization error.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::core::error::MapperError;

// ── ECS ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcsTask {
    pub task_arn: Option<String>,
    #[serde(default)]
    pub containers: Vec<EcsContainer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcsContainer {
    pub last_status: Option<String>,
    pub exit_code: Option<i64>,
    #[serde(default)]
    pub network_interfaces: Vec<EcsNetworkInterface>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcsNetworkInterface {
    pub private_ipv4_address: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcsCluster {
    pub cluster_arn: Option<String>,
    pub cluster_name: Option<String>,
    pub status: Option<String>,
    pub running_tasks_count: Option<u64>,
    pub pending_tasks_count: Option<u64>,
    #[serde(default)]
    pub tags: Vec<EcsTag>,
}

/// ECS spells tag fields in lowercase.
#[derive(Debug, Clone, Deserialize)]
pub struct EcsTag {
    pub key: String,
    pub value: String,
}

// ── EC2 ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ec2Vpc {
    pub vpc_id: Option<String>,
    pub state: Option<String>,
    pub cidr_block: Option<String>,
    /// Some VPCs carry no `Tags` key at all.
    #[serde(default)]
    pub tags: Vec<Ec2Tag>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ec2Subnet {
    pub subnet_id: Option<String>,
    pub availability_zone: Option<String>,
    pub vpc_id: Option<String>,
    pub cidr_block: Option<String>,
    #[serde(default)]
    pub tags: Vec<Ec2Tag>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ec2Tag {
    pub key: String,
    pub value: String,
}

// ── Cost Explorer ─────────────────────────────────────────────────────

/// One entry of `ResultsByTime`, usually a single day.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CostResultByTime {
    pub time_period: Option<CostTimePeriod>,
    #[serde(default)]
    pub groups: Vec<CostGroup>,
    #[serde(default)]
    pub estimated: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CostTimePeriod {
    pub start: chrono::NaiveDate,
    pub end: chrono::NaiveDate,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CostGroup {
    pub keys: Option<Vec<String>>,
    pub metrics: Option<HashMap<String, CostMetricValue>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CostMetricValue {
    /// Decimal string, e.g. `"10.50"`. Parsed exactly by the aggregator.
    pub amount: Option<String>,
    pub unit: Option<String>,
}

// ── Response envelopes ────────────────────────────────────────────────

/// A full API response that wraps a list of items.
pub trait Envelope {
    type Item;
    /// Top-level key holding the item list.
    const KEY: &'static str;
    fn into_items(self) -> Vec<Self::Item>;
}

#[derive(Debug, Deserialize)]
pub struct DescribeTasksResponse {
    pub tasks: Vec<EcsTask>,
}

#[derive(Debug, Deserialize)]
pub struct DescribeClustersResponse {
    pub clusters: Vec<EcsCluster>,
}

#[derive(Debug, Deserialize)]
pub struct DescribeVpcsResponse {
    #[serde(rename = "Vpcs")]
    pub vpcs: Vec<Ec2Vpc>,
}

#[derive(Debug, Deserialize)]
pub struct DescribeSubnetsResponse {
    #[serde(rename = "Subnets")]
    pub subnets: Vec<Ec2Subnet>,
}

#[derive(Debug, Deserialize)]
pub struct GetCostAndUsageResponse {
    #[serde(rename = "ResultsByTime")]
    pub results_by_time: Vec<CostResultByTime>,
}

impl Envelope for DescribeTasksResponse {
    type Item = EcsTask;
    const KEY: &'static str = "tasks";
    fn into_items(self) -> Vec<EcsTask> {
        self.tasks
    }
}

impl Envelope for DescribeClustersResponse {
    type Item = EcsCluster;
    const KEY: &'static str = "clusters";
    fn into_items(self) -> Vec<EcsCluster> {
        self.clusters
    }
}

impl Envelope for DescribeVpcsResponse {
    type Item = Ec2Vpc;
    const KEY: &'static str = "Vpcs";
    fn into_items(self) -> Vec<Ec2Vpc> {
        self.vpcs
    }
}

impl Envelope for DescribeSubnetsResponse {
    type Item = Ec2Subnet;
    const KEY: &'static str = "Subnets";
    fn into_items(self) -> Vec<Ec2Subnet> {
        self.subnets
    }
}

impl Envelope for GetCostAndUsageResponse {
    type Item = CostResultByTime;
    const KEY: &'static str = "ResultsByTime";
    fn into_items(self) -> Vec<CostResultByTime> {
        self.results_by_time
    }
}

/// Parse a JSON document that is either the API envelope, a bare array of
/// items, or a single item.
///
/// The shape is decided from the top-level value before deserializing, so an
/// error inside the envelope is reported as is. Item shapes are all-optional
/// and would otherwise accept the envelope object itself.
pub fn parse_items<E>(json: &str) -> Result<Vec<E::Item>, MapperError>
where
    E: Envelope + serde::de::DeserializeOwned,
    E::Item: serde::de::DeserializeOwned,
{
    let value: Value = serde_json::from_str(json)?;
    let is_envelope = value.get(E::KEY).is_some();
    let items = if is_envelope {
        serde_json::from_value::<E>(value)?.into_items()
    } else if value.is_array() {
        serde_json::from_value(value)?
    } else {
        vec![serde_json::from_value(value)?]
    };
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_ecs_task() {
        let json = r#"{
            "taskArn": "arn:aws:ecs:us-west-2:123456789012:task/cluster/abc",
            "lastStatus": "RUNNING",
            "containers": [{
                "name": "worker",
                "lastStatus": "STOPPED",
                "exitCode": 0,
                "networkInterfaces": [{
                    "attachmentId": "att-1",
                    "privateIpv4Address": "10.0.1.15"
                }]
            }]
        }"#;
        let task: EcsTask = serde_json::from_str(json).unwrap();
        assert_eq!(
            task.task_arn.as_deref(),
            Some("arn:aws:ecs:us-west-2:123456789012:task/cluster/abc")
        );
        let container = &task.containers[0];
        assert_eq!(container.last_status.as_deref(), Some("STOPPED"));
        assert_eq!(container.exit_code, Some(0));
        assert_eq!(
            container.network_interfaces[0].private_ipv4_address.as_deref(),
            Some("10.0.1.15")
        );
    }

    #[test]
    fn deserialize_vpc_without_tags() {
        let json = r#"{ "VpcId": "vpc-1", "State": "available", "CidrBlock": "10.0.0.0/16" }"#;
        let vpc: Ec2Vpc = serde_json::from_str(json).unwrap();
        assert_eq!(vpc.vpc_id.as_deref(), Some("vpc-1"));
        assert_eq!(vpc.cidr_block.as_deref(), Some("10.0.0.0/16"));
        assert!(vpc.tags.is_empty());
    }

    #[test]
    fn deserialize_cost_result_by_time() {
        let json = r#"{
            "TimePeriod": { "Start": "2024-03-01", "End": "2024-03-02" },
            "Total": {},
            "Groups": [{
                "Keys": ["us-east-1", "Amazon Elastic Compute Cloud - Compute"],
                "Metrics": { "UnblendedCost": { "Amount": "10.50", "Unit": "USD" } }
            }],
            "Estimated": true
        }"#;
        let record: CostResultByTime = serde_json::from_str(json).unwrap();
        let period = record.time_period.unwrap();
        assert_eq!(period.start.to_string(), "2024-03-01");
        assert!(record.estimated);
        let metric = &record.groups[0].metrics.as_ref().unwrap()["UnblendedCost"];
        assert_eq!(metric.amount.as_deref(), Some("10.50"));
        assert_eq!(metric.unit.as_deref(), Some("USD"));
    }

    #[test]
    fn parse_items_accepts_envelope() {
        let json = r#"{ "Vpcs": [{ "VpcId": "vpc-1" }, { "VpcId": "vpc-2" }] }"#;
        let vpcs = parse_items::<DescribeVpcsResponse>(json).unwrap();
        assert_eq!(vpcs.len(), 2);
        assert_eq!(vpcs[1].vpc_id.as_deref(), Some("vpc-2"));
    }

    #[test]
    fn parse_items_accepts_bare_array() {
        let json = r#"[{ "clusterArn": "arn:1" }]"#;
        let clusters = parse_items::<DescribeClustersResponse>(json).unwrap();
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].cluster_arn.as_deref(), Some("arn:1"));
    }

    #[test]
    fn parse_items_accepts_single_object() {
        let json = r#"{ "SubnetId": "subnet-1", "AvailabilityZone": "us-east-1a" }"#;
        let subnets = parse_items::<DescribeSubnetsResponse>(json).unwrap();
        assert_eq!(subnets.len(), 1);
        assert_eq!(subnets[0].availability_zone.as_deref(), Some("us-east-1a"));
    }

    #[test]
    fn parse_items_reports_nested_error_inside_envelope() {
        let json = r#"{ "Vpcs": [{ "VpcId": "vpc-1", "State": "available", "Tags": [{ "Key": "Name" }] }] }"#;
        let err = parse_items::<DescribeVpcsResponse>(json).unwrap_err();
        assert!(matches!(err, MapperError::Json(_)));
        assert!(err.to_string().contains("Value"), "got: {}", err);
    }

    #[test]
    fn parse_items_rejects_envelope_with_bad_date() {
        let json = r#"{ "ResultsByTime": [{ "TimePeriod": { "Start": "bad", "End": "2024-03-02" }, "Groups": [] }] }"#;
        let err = parse_items::<GetCostAndUsageResponse>(json).unwrap_err();
        assert!(matches!(err, MapperError::Json(_)));
    }

    #[test]
    fn parse_items_rejects_non_list_envelope() {
        let err = parse_items::<DescribeTasksResponse>(r#"{ "tasks": {} }"#).unwrap_err();
        assert!(matches!(err, MapperError::Json(_)));
    }

    #[test]
    fn parse_items_rejects_invalid_json() {
        let err = parse_items::<DescribeTasksResponse>("not json").unwrap_err();
        assert!(matches!(err, MapperError::Json(_)));
    }
}

use crate::core::aws::{parse_items, DescribeClustersResponse, DescribeTasksResponse, EcsCluster, EcsTask};
use crate::core::error::MapperError;
use crate::core::mapper::tags::from_ecs_tags;
use crate::core::models::cluster::{Cluster, ClusterStatus};
use crate::core::models::container::{ContainerInstance, ContainerInstanceStatus};

/// Translate a container's `lastStatus`. A stopped container only counts as
/// completed when it exited with code 0.
pub fn parse_container_status(last_status: &str, exit_code: Option<i64>) -> ContainerInstanceStatus {
    match last_status {
        "RUNNING" => ContainerInstanceStatus::Started,
        "STOPPED" if exit_code == Some(0) => ContainerInstanceStatus::Completed,
        "STOPPED" => ContainerInstanceStatus::Failed,
        other => {
            tracing::debug!(status = other, "Unrecognized container status");
            ContainerInstanceStatus::Unknown
        }
    }
}

pub fn parse_cluster_status(status: &str) -> ClusterStatus {
    match status {
        "ACTIVE" => ClusterStatus::Active,
        "INACTIVE" => ClusterStatus::Inactive,
        other => {
            tracing::debug!(status = other, "Unrecognized cluster status");
            ClusterStatus::Unknown
        }
    }
}

/// Map an ECS task to a container instance, using its first container.
pub fn map_ecs_task(task: &EcsTask) -> Result<ContainerInstance, MapperError> {
    let instance_id = task
        .task_arn
        .clone()
        .ok_or(MapperError::missing("taskArn"))?;
    let container = task
        .containers
        .first()
        .ok_or(MapperError::missing("containers"))?;
    let last_status = container
        .last_status
        .as_deref()
        .ok_or(MapperError::missing("lastStatus"))?;

    let ip_address = container
        .network_interfaces
        .first()
        .and_then(|ni| ni.private_ipv4_address.clone());

    Ok(ContainerInstance {
        instance_id,
        ip_address,
        status: parse_container_status(last_status, container.exit_code),
    })
}

pub fn map_ecs_cluster(cluster: &EcsCluster) -> Result<Cluster, MapperError> {
    let cluster_arn = cluster
        .cluster_arn
        .clone()
        .ok_or(MapperError::missing("clusterArn"))?;
    let cluster_name = cluster
        .cluster_name
        .clone()
        .ok_or(MapperError::missing("clusterName"))?;
    let status = cluster
        .status
        .as_deref()
        .ok_or(MapperError::missing("status"))?;

    Ok(Cluster {
        cluster_arn,
        cluster_name,
        status: parse_cluster_status(status),
        tags: from_ecs_tags(&cluster.tags),
        running_tasks: cluster.running_tasks_count,
        pending_tasks: cluster.pending_tasks_count,
    })
}

/// Map every task in a `DescribeTasks` response body.
pub fn map_tasks_response(json: &str) -> Result<Vec<ContainerInstance>, MapperError> {
    parse_items::<DescribeTasksResponse>(json)?
        .iter()
        .map(map_ecs_task)
        .collect()
}

/// Map every cluster in a `DescribeClusters` response body.
pub fn map_clusters_response(json: &str) -> Result<Vec<Cluster>, MapperError> {
    parse_items::<DescribeClustersResponse>(json)?
        .iter()
        .map(map_ecs_cluster)
        .collect()
}

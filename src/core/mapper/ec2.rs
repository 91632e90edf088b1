use crate::core::aws::{parse_items, DescribeSubnetsResponse, DescribeVpcsResponse, Ec2Subnet, Ec2Vpc};
use crate::core::error::MapperError;
use crate::core::mapper::tags::from_ec2_tags;
use crate::core::models::network::{Subnet, Vpc, VpcState};

pub fn parse_vpc_state(state: &str) -> VpcState {
    match state {
        "pending" => VpcState::Pending,
        "available" => VpcState::Available,
        other => {
            tracing::debug!(state = other, "Unrecognized VPC state");
            VpcState::Unknown
        }
    }
}

pub fn map_ec2_vpc(vpc: &Ec2Vpc) -> Result<Vpc, MapperError> {
    let vpc_id = vpc.vpc_id.clone().ok_or(MapperError::missing("VpcId"))?;
    let state = vpc.state.as_deref().ok_or(MapperError::missing("State"))?;

    Ok(Vpc {
        vpc_id,
        state: parse_vpc_state(state),
        tags: from_ec2_tags(&vpc.tags),
        cidr_block: vpc.cidr_block.clone(),
    })
}

pub fn map_ec2_subnet(subnet: &Ec2Subnet) -> Result<Subnet, MapperError> {
    let subnet_id = subnet
        .subnet_id
        .clone()
        .ok_or(MapperError::missing("SubnetId"))?;
    let availability_zone = subnet
        .availability_zone
        .clone()
        .ok_or(MapperError::missing("AvailabilityZone"))?;

    Ok(Subnet {
        subnet_id,
        availability_zone,
        tags: from_ec2_tags(&subnet.tags),
        vpc_id: subnet.vpc_id.clone(),
        cidr_block: subnet.cidr_block.clone(),
    })
}

pub fn map_vpcs_response(json: &str) -> Result<Vec<Vpc>, MapperError> {
    parse_items::<DescribeVpcsResponse>(json)?
        .iter()
        .map(map_ec2_vpc)
        .collect()
}

pub fn map_subnets_response(json: &str) -> Result<Vec<Subnet>, MapperError> {
    parse_items::<DescribeSubnetsResponse>(json)?
        .iter()
        .map(map_ec2_subnet)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vpc_state_values() {
        assert_eq!(parse_vpc_state("pending"), VpcState::Pending);
        assert_eq!(parse_vpc_state("available"), VpcState::Available);
        assert_eq!(parse_vpc_state("deleting"), VpcState::Unknown);
        assert_eq!(parse_vpc_state("AVAILABLE"), VpcState::Unknown);
    }

    #[test]
    fn vpc_with_tags() {
        let json = r#"{
            "VpcId": "vpc-0abc",
            "State": "available",
            "CidrBlock": "10.0.0.0/16",
            "IsDefault": false,
            "Tags": [{ "Key": "Name", "Value": "pcs-vpc" }, { "Key": "pce:id", "Value": "pce-1" }]
        }"#;
        let raw: Ec2Vpc = serde_json::from_str(json).unwrap();
        let vpc = map_ec2_vpc(&raw).unwrap();
        assert_eq!(vpc.vpc_id, "vpc-0abc");
        assert_eq!(vpc.state, VpcState::Available);
        assert_eq!(vpc.tags["Name"], "pcs-vpc");
        assert_eq!(vpc.tags["pce:id"], "pce-1");
        assert_eq!(vpc.cidr_block.as_deref(), Some("10.0.0.0/16"));
    }

    #[test]
    fn vpc_without_tags_has_empty_map() {
        let raw: Ec2Vpc = serde_json::from_str(r#"{ "VpcId": "vpc-1", "State": "pending" }"#).unwrap();
        let vpc = map_ec2_vpc(&raw).unwrap();
        assert_eq!(vpc.state, VpcState::Pending);
        assert!(vpc.tags.is_empty());
    }

    #[test]
    fn vpc_without_state_is_error() {
        let raw: Ec2Vpc = serde_json::from_str(r#"{ "VpcId": "vpc-1" }"#).unwrap();
        assert!(matches!(
            map_ec2_vpc(&raw).unwrap_err(),
            MapperError::MissingField { field: "State" }
        ));
    }

    #[test]
    fn subnet_maps_fields() {
        let json = r#"{
            "SubnetId": "subnet-1",
            "AvailabilityZone": "us-west-2a",
            "VpcId": "vpc-1",
            "CidrBlock": "10.0.1.0/24",
            "Tags": [{ "Key": "Name", "Value": "private-a" }]
        }"#;
        let raw: Ec2Subnet = serde_json::from_str(json).unwrap();
        let subnet = map_ec2_subnet(&raw).unwrap();
        assert_eq!(subnet.subnet_id, "subnet-1");
        assert_eq!(subnet.availability_zone, "us-west-2a");
        assert_eq!(subnet.vpc_id.as_deref(), Some("vpc-1"));
        assert_eq!(subnet.tags["Name"], "private-a");
    }

    #[test]
    fn subnets_response_maps_all() {
        let json = r#"{ "Subnets": [
            { "SubnetId": "subnet-1", "AvailabilityZone": "us-west-2a" },
            { "SubnetId": "subnet-2", "AvailabilityZone": "us-west-2b" }
        ] }"#;
        let subnets = map_subnets_response(json).unwrap();
        assert_eq!(subnets.len(), 2);
        assert!(subnets[1].tags.is_empty());
    }

    #[test]
    fn vpcs_response_propagates_missing_field() {
        let json = r#"{ "Vpcs": [{ "VpcId": "vpc-1", "State": "available" }, { "State": "available" }] }"#;
        assert!(matches!(
            map_vpcs_response(json).unwrap_err(),
            MapperError::MissingField { field: "VpcId" }
        ));
    }

    #[test]
    fn vpcs_response_reports_malformed_tag() {
        let json = r#"{"Vpcs":[{"VpcId":"vpc-1","State":"available","Tags":[{"Key":"Name"}]}]}"#;
        let err = map_vpcs_response(json).unwrap_err();
        assert!(matches!(err, MapperError::Json(_)), "got: {}", err);
    }
}

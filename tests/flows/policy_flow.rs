#[path = "../common/mod.rs"]
mod common;

use common::{app_state, hosts, ips, FakeAppliance, GROUP, POLICY};
use gatewarden_domain::{
    AddressFamily, BlockRequest, BlockedIpListing, BlockedIpQuery, DomainError, ErrorEntry,
    PolicyBlockRequest, PolicyUnblockRequest, UnblockRequest, VdomSelection,
};
use std::sync::Arc;

fn block(raw: &str, vdom: VdomSelection) -> BlockRequest {
    BlockRequest::Policy(PolicyBlockRequest {
        ips: ips(raw),
        group_name: Arc::from(GROUP),
        policy_name: Arc::from(POLICY),
        family: AddressFamily::IPv4,
        vdom,
        is_new_group: false,
    })
}

fn unblock(raw: &str, vdom: VdomSelection) -> UnblockRequest {
    UnblockRequest::Policy(PolicyUnblockRequest {
        ips: ips(raw),
        group_name: Arc::from(GROUP),
        policy_name: Arc::from(POLICY),
        family: AddressFamily::IPv4,
        vdom,
    })
}

fn block6(raw: &str) -> BlockRequest {
    BlockRequest::Policy(PolicyBlockRequest {
        ips: ips(raw),
        group_name: Arc::from(GROUP),
        policy_name: Arc::from(POLICY),
        family: AddressFamily::IPv6,
        vdom: VdomSelection::Default,
        is_new_group: false,
    })
}

fn unblock6(raw: &str) -> UnblockRequest {
    UnblockRequest::Policy(PolicyUnblockRequest {
        ips: ips(raw),
        group_name: Arc::from(GROUP),
        policy_name: Arc::from(POLICY),
        family: AddressFamily::IPv6,
        vdom: VdomSelection::Default,
    })
}

fn named(vdoms: &[&str]) -> VdomSelection {
    VdomSelection::Named(vdoms.iter().map(|v| v.to_string()).collect())
}

// ============================================================================
// Block / Unblock
// ============================================================================

#[tokio::test]
async fn test_block_then_unblock_round_trip() {
    // Arrange
    let fw = FakeAppliance::start(&["root"]).await.unwrap();
    fw.add_policy("root", POLICY, GROUP, false);
    let state = app_state(&fw, &[], 100);

    // Act
    let blocked = state
        .block_ip
        .execute(&block("10.0.0.1, 10.0.0.2", VdomSelection::Default))
        .await
        .unwrap();

    // Assert
    assert_eq!(blocked.newly_blocked, vec!["10.0.0.1", "10.0.0.2"]);
    assert!(blocked.already_blocked.is_empty());
    assert_eq!(fw.members("root", GROUP), vec!["10.0.0.1", "10.0.0.2"]);
    assert!(fw.has_address("root", "10.0.0.1"));

    // Act
    let unblocked = state
        .unblock_ip
        .execute(&unblock("10.0.0.1", VdomSelection::Default))
        .await
        .unwrap();

    // Assert
    assert_eq!(unblocked.newly_unblocked, vec!["10.0.0.1"]);
    assert!(unblocked.cleanup_failed.is_empty());
    assert_eq!(fw.members("root", GROUP), vec!["10.0.0.2"]);
    assert!(!fw.has_address("root", "10.0.0.1"));
    assert!(fw.has_address("root", "10.0.0.2"));
}

#[tokio::test]
async fn test_repeated_block_is_a_no_op() {
    let fw = FakeAppliance::start(&["root"]).await.unwrap();
    fw.add_policy("root", POLICY, GROUP, false);
    let state = app_state(&fw, &[], 100);
    let request = block("10.0.0.1, 10.0.0.2", VdomSelection::Default);

    state.block_ip.execute(&request).await.unwrap();
    let writes_after_first = fw.writes();
    let second = state.block_ip.execute(&request).await.unwrap();

    assert_eq!(second.already_blocked, vec!["10.0.0.1", "10.0.0.2"]);
    assert!(second.newly_blocked.is_empty());
    assert!(second.error_with_block.is_empty());
    assert_eq!(fw.writes(), writes_after_first);
}

#[tokio::test]
async fn test_overflow_beyond_capacity_is_reported() {
    // Arrange
    let fw = FakeAppliance::start(&["root"]).await.unwrap();
    fw.add_policy("root", POLICY, GROUP, false);
    fw.seed_members("root", GROUP, &hosts(95));
    let state = app_state(&fw, &[], 100);
    let incoming: Vec<String> = (1..=10).map(|i| format!("10.30.0.{}", i)).collect();

    // Act
    let report = state
        .block_ip
        .execute(&block(&incoming.join(","), VdomSelection::Default))
        .await
        .unwrap();

    // Assert
    assert_eq!(report.newly_blocked, incoming[..5].to_vec());
    assert_eq!(
        report.error_with_block,
        incoming[5..]
            .iter()
            .map(|ip| ErrorEntry::Ip(ip.clone()))
            .collect::<Vec<_>>()
    );
    assert_eq!(fw.members("root", GROUP).len(), 100);
}

#[tokio::test]
async fn test_full_group_rejects_new_addresses() {
    let fw = FakeAppliance::start(&["root"]).await.unwrap();
    fw.add_policy("root", POLICY, GROUP, false);
    fw.seed_members("root", GROUP, &hosts(100));
    let state = app_state(&fw, &[], 100);

    let result = state
        .block_ip
        .execute(&block("10.30.0.1", VdomSelection::Default))
        .await;

    assert!(matches!(
        result,
        Err(DomainError::GroupCapacityExceeded { limit: 100, .. })
    ));
    assert_eq!(fw.members("root", GROUP).len(), 100);
}

#[tokio::test]
async fn test_ipv6_block_then_unblock_uses_ipv6_endpoints() {
    // Arrange
    let fw = FakeAppliance::start(&["root"]).await.unwrap();
    fw.add_policy("root", POLICY, GROUP, true);
    let state = app_state(&fw, &[], 100);

    // Act
    let blocked = state
        .block_ip
        .execute(&block6("2001:db8::1, 2001:db8::2"))
        .await
        .unwrap();

    // Assert
    assert_eq!(blocked.newly_blocked, vec!["2001:db8::1", "2001:db8::2"]);
    assert_eq!(fw.members6("root", GROUP), vec!["2001:db8::1", "2001:db8::2"]);
    assert!(fw.members("root", GROUP).is_empty());
    assert!(fw.has_address6("root", "2001:db8::1"));
    assert!(!fw.has_address("root", "2001:db8::1"));

    // Act
    let unblocked = state
        .unblock_ip
        .execute(&unblock6("2001:db8::1"))
        .await
        .unwrap();

    // Assert
    assert_eq!(unblocked.newly_unblocked, vec!["2001:db8::1"]);
    assert!(unblocked.cleanup_failed.is_empty());
    assert_eq!(fw.members6("root", GROUP), vec!["2001:db8::2"]);
    assert!(!fw.has_address6("root", "2001:db8::1"));
    assert!(fw.has_address6("root", "2001:db8::2"));
}

#[tokio::test]
async fn test_unknown_policy_is_rejected() {
    let fw = FakeAppliance::start(&["root"]).await.unwrap();
    let state = app_state(&fw, &[], 100);

    let result = state
        .block_ip
        .execute(&block("10.0.0.1", VdomSelection::Default))
        .await;

    assert!(matches!(result, Err(DomainError::PolicyNotFound(_))));
    assert_eq!(fw.writes(), 0);
}

#[tokio::test]
async fn test_unblock_of_absent_addresses_fails() {
    let fw = FakeAppliance::start(&["root"]).await.unwrap();
    fw.add_policy("root", POLICY, GROUP, false);
    fw.seed_members("root", GROUP, &["10.0.0.9".to_string()]);
    let state = app_state(&fw, &[], 100);

    let result = state
        .unblock_ip
        .execute(&unblock("10.0.0.1", VdomSelection::Default))
        .await;

    assert!(matches!(result, Err(DomainError::NotInGroup { .. })));
    assert_eq!(fw.members("root", GROUP), vec!["10.0.0.9"]);
}

// ============================================================================
// Multiple VDOMs
// ============================================================================

#[tokio::test]
async fn test_each_vdom_is_reconciled_independently() {
    // Arrange
    let fw = FakeAppliance::start(&["root", "branch"]).await.unwrap();
    fw.add_policy("root", POLICY, GROUP, false);
    fw.add_policy("branch", POLICY, GROUP, false);
    fw.seed_members(
        "branch",
        GROUP,
        &["10.9.0.1".to_string(), "10.9.0.2".to_string()],
    );
    let state = app_state(&fw, &[], 3);

    // Act
    let report = state
        .block_ip
        .execute(&block("10.0.0.1, 10.0.0.2", named(&["root", "branch"])))
        .await
        .unwrap();

    // Assert
    assert_eq!(fw.members("root", GROUP), vec!["10.0.0.1", "10.0.0.2"]);
    assert_eq!(fw.members("branch", GROUP).len(), 3);
    assert_eq!(report.newly_blocked, vec!["10.0.0.1", "10.0.0.2"]);
    assert_eq!(
        report.error_with_block,
        vec![ErrorEntry::Partition {
            name: "branch".to_string(),
            ip_addresses: vec!["10.0.0.2".to_string()],
        }]
    );
}

#[tokio::test]
async fn test_full_vdom_does_not_stop_the_others() {
    // Arrange
    let fw = FakeAppliance::start(&["root", "branch"]).await.unwrap();
    fw.add_policy("root", POLICY, GROUP, false);
    fw.add_policy("branch", POLICY, GROUP, false);
    fw.seed_members("branch", GROUP, &hosts(3));
    let state = app_state(&fw, &[], 3);

    // Act
    let report = state
        .block_ip
        .execute(&block("10.0.0.1", named(&["root", "branch"])))
        .await
        .unwrap();

    // Assert
    assert_eq!(report.newly_blocked, vec!["10.0.0.1"]);
    assert_eq!(
        report.error_with_block,
        vec![ErrorEntry::Partition {
            name: "branch".to_string(),
            ip_addresses: vec!["10.0.0.1".to_string()],
        }]
    );
    assert_eq!(fw.members("root", GROUP), vec!["10.0.0.1"]);
    assert_eq!(fw.members("branch", GROUP), hosts(3));
}

#[tokio::test]
async fn test_unknown_vdom_is_reported_not_fatal() {
    let fw = FakeAppliance::start(&["root"]).await.unwrap();
    fw.add_policy("root", POLICY, GROUP, false);
    let state = app_state(&fw, &[], 100);

    let report = state
        .block_ip
        .execute(&block("10.0.0.1", named(&["root", "ghost"])))
        .await
        .unwrap();

    assert_eq!(report.vdom_not_exist, vec!["ghost"]);
    assert_eq!(report.newly_blocked, vec!["10.0.0.1"]);
}

// ============================================================================
// Listing and health
// ============================================================================

#[tokio::test]
async fn test_policy_listing_shows_group_members() {
    // Arrange
    let fw = FakeAppliance::start(&["root"]).await.unwrap();
    fw.add_policy("root", POLICY, GROUP, false);
    fw.seed_members("root", GROUP, &["10.0.0.7".to_string()]);
    let state = app_state(&fw, &["root"], 100);

    // Act
    let listing = state
        .get_blocked_ips
        .execute(&BlockedIpQuery::Policy {
            policy_name: Arc::from(POLICY),
            group_names: vec![Arc::from(GROUP), Arc::from("other")],
            vdom: VdomSelection::Default,
        })
        .await
        .unwrap();

    // Assert
    let BlockedIpListing::Policy(listing) = listing else {
        panic!("expected policy listing");
    };
    let root = &listing.result[0];
    assert_eq!(root.vdom.as_deref(), Some("root"));
    assert_eq!(root.dstaddr, vec![GROUP]);
    assert_eq!(root.addrgrp[0].member, vec!["10.0.0.7"]);
    assert_eq!(root.addrgrp_not_exist, vec!["other"]);
}

#[tokio::test]
async fn test_health_check_against_configured_vdoms() {
    let fw = FakeAppliance::start(&["root"]).await.unwrap();
    fw.add_policy("root", POLICY, GROUP, false);

    let healthy = app_state(&fw, &["root"], 100).check_health.execute().await;
    let missing = app_state(&fw, &["ghost"], 100).check_health.execute().await;

    assert!(matches!(healthy, Ok(true)));
    assert!(matches!(missing, Err(DomainError::PermissionDenied(_))));
}

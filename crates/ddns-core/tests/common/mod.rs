//! Test doubles and common utilities for updater contract tests
//!
//! These doubles record every call so tests can assert on what the
//! updater sent, and answer with canned envelopes.

#![allow(dead_code)]

use ddns_core::error::{Error, Result};
use ddns_core::record::{DnsRecord, ListResponse, RecordUpdate, ResultInfo, UpdateResponse};
use ddns_core::traits::{DnsProvider, IpSource, IpVersion};
use ddns_core::{Credentials, UpdaterConfig};
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// An IpSource that always answers with a fixed address
///
/// Clones share the call counter.
#[derive(Clone)]
pub struct FixedIpSource {
    ip: IpAddr,
    version: Option<IpVersion>,
    call_count: Arc<AtomicUsize>,
}

impl FixedIpSource {
    pub fn new(ip: IpAddr) -> Self {
        Self {
            ip,
            version: None,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Declare the IP version this source reports
    pub fn reporting(mut self, version: IpVersion) -> Self {
        self.version = Some(version);
        self
    }

    /// Get the number of times current() was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl IpSource for FixedIpSource {
    async fn current(&self) -> Result<IpAddr> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.ip)
    }

    fn version(&self) -> Option<IpVersion> {
        self.version
    }

    fn source_name(&self) -> &'static str {
        "fixed"
    }
}

/// An IpSource whose lookup always fails
pub struct FailingIpSource;

#[async_trait::async_trait]
impl IpSource for FailingIpSource {
    async fn current(&self) -> Result<IpAddr> {
        Err(Error::http_status(503, "service unavailable"))
    }

    fn source_name(&self) -> &'static str {
        "failing"
    }
}

/// A recorded list_a_records() call
#[derive(Debug, Clone)]
pub struct ListCall {
    pub auth_header: (&'static str, String),
    pub zone_id: String,
    pub record_name: String,
}

/// A recorded patch_record() call
#[derive(Debug, Clone)]
pub struct PatchCall {
    pub auth_header: (&'static str, String),
    pub zone_id: String,
    pub record_id: String,
    pub update: RecordUpdate,
}

/// A mock DnsProvider that answers with canned envelopes and tracks calls
pub struct MockDnsProvider {
    list_response: ListResponse,
    update_response: UpdateResponse,
    list_calls: Arc<Mutex<Vec<ListCall>>>,
    patch_calls: Arc<Mutex<Vec<PatchCall>>>,
}

impl MockDnsProvider {
    pub fn new(list_response: ListResponse, update_response: UpdateResponse) -> Self {
        Self {
            list_response,
            update_response,
            list_calls: Arc::new(Mutex::new(Vec::new())),
            patch_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a new MockDnsProvider that shares call logs with an existing one
    pub fn sharing_counters_with(other: &Self) -> Self {
        Self {
            list_response: other.list_response.clone(),
            update_response: other.update_response.clone(),
            list_calls: Arc::clone(&other.list_calls),
            patch_calls: Arc::clone(&other.patch_calls),
        }
    }

    pub fn list_calls(&self) -> Vec<ListCall> {
        self.list_calls.lock().unwrap().clone()
    }

    pub fn patch_calls(&self) -> Vec<PatchCall> {
        self.patch_calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl DnsProvider for MockDnsProvider {
    async fn list_a_records(
        &self,
        credentials: &Credentials,
        zone_id: &str,
        record_name: &str,
    ) -> Result<ListResponse> {
        self.list_calls.lock().unwrap().push(ListCall {
            auth_header: credentials.auth_header(),
            zone_id: zone_id.to_string(),
            record_name: record_name.to_string(),
        });
        Ok(self.list_response.clone())
    }

    async fn patch_record(
        &self,
        credentials: &Credentials,
        zone_id: &str,
        record_id: &str,
        update: &RecordUpdate,
    ) -> Result<UpdateResponse> {
        self.patch_calls.lock().unwrap().push(PatchCall {
            auth_header: credentials.auth_header(),
            zone_id: zone_id.to_string(),
            record_id: record_id.to_string(),
            update: update.clone(),
        });
        Ok(self.update_response.clone())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// A provider whose lookup fails at the transport level
pub struct UnreachableProvider;

#[async_trait::async_trait]
impl DnsProvider for UnreachableProvider {
    async fn list_a_records(
        &self,
        _credentials: &Credentials,
        _zone_id: &str,
        _record_name: &str,
    ) -> Result<ListResponse> {
        Err(Error::network("connection refused"))
    }

    async fn patch_record(
        &self,
        _credentials: &Credentials,
        _zone_id: &str,
        _record_id: &str,
        _update: &RecordUpdate,
    ) -> Result<UpdateResponse> {
        Err(Error::network("connection refused"))
    }

    fn provider_name(&self) -> &'static str {
        "unreachable"
    }
}

/// How [`FailingPatchProvider`] fails the PATCH
#[derive(Debug, Clone, Copy)]
pub enum PatchFailure {
    /// Connection dropped before a response arrived
    Network,
    /// Response body was not a Cloudflare envelope
    Decode,
}

/// A provider whose lookup finds `abc` at 1.2.3.4 but whose PATCH fails
pub struct FailingPatchProvider {
    failure: PatchFailure,
    patch_count: Arc<AtomicUsize>,
}

impl FailingPatchProvider {
    pub fn new(failure: PatchFailure) -> Self {
        Self {
            failure,
            patch_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a provider that shares the PATCH counter with an existing one
    pub fn sharing_counters_with(other: &Self) -> Self {
        Self {
            failure: other.failure,
            patch_count: Arc::clone(&other.patch_count),
        }
    }

    pub fn patch_count(&self) -> usize {
        self.patch_count.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl DnsProvider for FailingPatchProvider {
    async fn list_a_records(
        &self,
        _credentials: &Credentials,
        _zone_id: &str,
        _record_name: &str,
    ) -> Result<ListResponse> {
        Ok(listing(vec![a_record("abc", "1.2.3.4")], 1))
    }

    async fn patch_record(
        &self,
        _credentials: &Credentials,
        _zone_id: &str,
        _record_id: &str,
        _update: &RecordUpdate,
    ) -> Result<UpdateResponse> {
        self.patch_count.fetch_add(1, Ordering::SeqCst);
        match self.failure {
            PatchFailure::Network => Err(Error::network("connection reset by peer")),
            PatchFailure::Decode => {
                let source = serde_json::from_str::<UpdateResponse>("<html>bad gateway")
                    .expect_err("not JSON");
                Err(Error::decode("update response", source))
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "failing-patch"
    }
}

/// An A record with the given id and content
pub fn a_record(id: &str, content: &str) -> DnsRecord {
    DnsRecord {
        id: id.to_string(),
        zone_id: "zone-1".to_string(),
        zone_name: "example.com".to_string(),
        name: "home.example.com".to_string(),
        record_type: "A".to_string(),
        content: content.to_string(),
        proxiable: true,
        ttl: 1,
        ..DnsRecord::default()
    }
}

/// A successful listing of `records` whose result_info reports `count`
pub fn listing(records: Vec<DnsRecord>, count: u32) -> ListResponse {
    ListResponse {
        result: records,
        success: true,
        result_info: ResultInfo {
            page: 1,
            per_page: 100,
            count,
            total_count: count,
            total_pages: 1,
        },
        ..ListResponse::default()
    }
}

/// An update envelope with the given success flag
pub fn update_response(success: bool, record: Option<DnsRecord>) -> UpdateResponse {
    UpdateResponse {
        result: record,
        success,
        ..UpdateResponse::default()
    }
}

/// Helper to create a minimal UpdaterConfig for testing
pub fn minimal_config(auth_method: &str) -> UpdaterConfig {
    UpdaterConfig {
        auth_email: "ops@example.com".to_string(),
        auth_method: auth_method.to_string(),
        auth_key: "test-key".to_string(),
        zone_identifier: "zone-1".to_string(),
        record_name: "home.example.com".to_string(),
        ttl: 120,
        proxy: false,
        sitename: "home".to_string(),
        verbose: false,
    }
}

pub fn ip(s: &str) -> IpAddr {
    s.parse().expect("valid test IP")
}

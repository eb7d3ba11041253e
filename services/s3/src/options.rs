// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::time::Duration;

use http::Method;
use presign_core::time::{now, DateTime};

use crate::constants::{DEFAULT_ENDPOINT, DEFAULT_EXPIRES_IN, DEFAULT_REGION};
use crate::SigningKey;

/// PresignRequest describes the object to grant access to and how the grant
/// is scoped.
///
/// Only the bucket and object key are required. Every other field falls back
/// to a default when left unset: method `GET`, region `us-east-1`, endpoint
/// `s3.amazonaws.com`, virtual-hosted addressing, an expiry of 86400 seconds
/// and the current time.
///
/// None of the fields are validated. In particular the expiry is serialized
/// as given; the storage service enforces its own bounds at request time.
#[derive(Clone, Debug)]
pub struct PresignRequest {
    bucket: String,
    key: String,

    method: Option<Method>,
    region: Option<String>,
    endpoint: Option<String>,
    path_style: bool,
    expires_in: Option<Duration>,
    time: Option<DateTime>,
    query_params: Vec<(String, String)>,
    signing_key: Option<SigningKey>,
}

impl PresignRequest {
    /// Create a new request for the given bucket and object key.
    pub fn new(bucket: &str, key: &str) -> Self {
        Self {
            bucket: bucket.to_string(),
            key: key.to_string(),

            method: None,
            region: None,
            endpoint: None,
            path_style: false,
            expires_in: None,
            time: None,
            query_params: Vec::new(),
            signing_key: None,
        }
    }

    /// Specify the HTTP method to presign, typically `GET` or `PUT`.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Specify the region the bucket lives in.
    pub fn with_region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }

    /// Specify the endpoint host of the storage service.
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = Some(endpoint.to_string());
        self
    }

    /// Address the bucket as a path segment on the endpoint instead of as a
    /// subdomain of it.
    pub fn with_path_style(mut self, path_style: bool) -> Self {
        self.path_style = path_style;
        self
    }

    /// Specify how long the presigned URL stays valid.
    pub fn with_expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = Some(expires_in);
        self
    }

    /// Specify the reference time to sign at.
    ///
    /// Defaults to the current time. Set it to pin signatures in tests, or
    /// to share a single timestamp across a batch of URLs.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Append an extra query parameter to sign, e.g. `response-content-type`.
    ///
    /// Values stringify through [`ToString`], so numbers work as-is. Setting
    /// the same key again replaces the earlier value.
    pub fn with_query_param(mut self, key: &str, value: impl ToString) -> Self {
        self.query_params.push((key.to_string(), value.to_string()));
        self
    }

    /// Supply a precomputed signing key, skipping derivation entirely.
    ///
    /// The key is scoped to one (date, region) pair; callers caching one
    /// must derive a fresh key when either changes.
    pub fn with_signing_key(mut self, key: SigningKey) -> Self {
        self.signing_key = Some(key);
        self
    }

    /// Resolve every unset field to its default.
    pub(crate) fn resolve(&self) -> ResolvedRequest {
        // Deduplicate extra params by key, last write wins.
        let mut query_params: Vec<(String, String)> = Vec::with_capacity(self.query_params.len());
        for (k, v) in &self.query_params {
            match query_params.iter_mut().find(|(name, _)| name == k) {
                Some((_, value)) => *value = v.clone(),
                None => query_params.push((k.clone(), v.clone())),
            }
        }

        ResolvedRequest {
            bucket: self.bucket.clone(),
            key: self.key.clone(),
            method: self.method.clone().unwrap_or(Method::GET),
            region: self
                .region
                .clone()
                .unwrap_or_else(|| DEFAULT_REGION.to_string()),
            endpoint: self
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            path_style: self.path_style,
            expires_in: self.expires_in.unwrap_or(DEFAULT_EXPIRES_IN),
            time: self.time.unwrap_or_else(now),
            query_params,
            signing_key: self.signing_key.clone(),
        }
    }
}

/// A request with every optional field resolved to a concrete value.
///
/// Immutable once built; the whole signing pipeline reads from it.
#[derive(Debug)]
pub(crate) struct ResolvedRequest {
    pub bucket: String,
    pub key: String,
    pub method: Method,
    pub region: String,
    pub endpoint: String,
    pub path_style: bool,
    pub expires_in: Duration,
    pub time: DateTime,
    pub query_params: Vec<(String, String)>,
    pub signing_key: Option<SigningKey>,
}

impl ResolvedRequest {
    /// Host the request addresses: the bare endpoint for path-style
    /// requests, `{bucket}.{endpoint}` for virtual-hosted ones.
    pub fn host(&self) -> String {
        if self.path_style {
            self.endpoint.clone()
        } else {
            format!("{}.{}", self.bucket, self.endpoint)
        }
    }

    /// Request path, not yet percent encoded.
    ///
    /// Runs of consecutive slashes collapse to a single slash so that keys
    /// with leading slashes don't produce `//` in the signed path.
    pub fn path(&self) -> String {
        let raw = if self.path_style {
            format!("/{}/{}", self.bucket, self.key)
        } else {
            format!("/{}", self.key)
        };

        let mut path = String::with_capacity(raw.len());
        for c in raw.chars() {
            if c == '/' && path.ends_with('/') {
                continue;
            }
            path.push(c);
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use presign_core::time::parse_rfc3339;

    #[test]
    fn test_resolve_defaults() {
        let opts = PresignRequest::new("examplebucket", "test.txt").resolve();

        assert_eq!(opts.method, Method::GET);
        assert_eq!(opts.region, "us-east-1");
        assert_eq!(opts.endpoint, "s3.amazonaws.com");
        assert!(!opts.path_style);
        assert_eq!(opts.expires_in.as_secs(), 86400);
        assert!(opts.query_params.is_empty());
        assert!(opts.signing_key.is_none());
    }

    #[test]
    fn test_resolve_caller_fields_win() {
        let time = parse_rfc3339("2013-05-24T00:00:00Z").expect("time must parse");
        let opts = PresignRequest::new("examplebucket", "test.txt")
            .with_method(Method::PUT)
            .with_region("eu-west-1")
            .with_endpoint("minio.example.com")
            .with_expires_in(Duration::from_secs(300))
            .with_time(time)
            .resolve();

        assert_eq!(opts.method, Method::PUT);
        assert_eq!(opts.region, "eu-west-1");
        assert_eq!(opts.endpoint, "minio.example.com");
        assert_eq!(opts.expires_in.as_secs(), 300);
        assert_eq!(opts.time, time);
    }

    #[test]
    fn test_resolve_dedupes_query_params() {
        let opts = PresignRequest::new("examplebucket", "test.txt")
            .with_query_param("partNumber", 1)
            .with_query_param("uploadId", "abc")
            .with_query_param("partNumber", 7)
            .resolve();

        assert_eq!(
            opts.query_params,
            vec![
                ("partNumber".to_string(), "7".to_string()),
                ("uploadId".to_string(), "abc".to_string()),
            ]
        );
    }

    #[test]
    fn test_host_virtual_hosted() {
        let opts = PresignRequest::new("examplebucket", "test.txt").resolve();
        assert_eq!(opts.host(), "examplebucket.s3.amazonaws.com");
        assert_eq!(opts.path(), "/test.txt");
    }

    #[test]
    fn test_host_path_style() {
        let opts = PresignRequest::new("examplebucket", "test.txt")
            .with_path_style(true)
            .resolve();
        assert_eq!(opts.host(), "s3.amazonaws.com");
        assert_eq!(opts.path(), "/examplebucket/test.txt");
    }

    #[test]
    fn test_path_collapses_slashes() {
        let opts = PresignRequest::new("examplebucket", "//double//slash.txt").resolve();
        assert_eq!(opts.path(), "/double/slash.txt");

        let opts = PresignRequest::new("", "key.txt").with_path_style(true).resolve();
        assert_eq!(opts.path(), "/key.txt");
    }
}

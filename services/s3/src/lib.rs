//! Presigned URL generation for S3-compatible object storage.
//!
//! A presigned URL embeds a time-limited AWS SigV4 signature in its query
//! string, granting whoever holds the URL access to a single object without
//! any further credential exchange. This crate implements the query-string
//! variant of the signing process: the payload is always signed as
//! `UNSIGNED-PAYLOAD` and `host` is the only signed header.
//!
//! ## Example
//!
//! ```
//! use presign_s3::{presign_url, Credential, PresignRequest};
//!
//! # fn main() -> presign_core::Result<()> {
//! let cred = Credential::new("access_key_id", "secret_access_key");
//! let req = PresignRequest::new("examplebucket", "test.txt");
//!
//! let url = presign_url(&req, &cred)?;
//! assert!(url.starts_with("https://examplebucket.s3.amazonaws.com/test.txt?"));
//! assert!(url.contains("X-Amz-Signature="));
//! # Ok(())
//! # }
//! ```
//!
//! Callers issuing many URLs against the same region on the same day can
//! derive the signing key once and reuse it:
//!
//! ```
//! use presign_core::time::now;
//! use presign_s3::{derive_signing_key, presign_url, Credential, PresignRequest};
//!
//! # fn main() -> presign_core::Result<()> {
//! let cred = Credential::new("access_key_id", "secret_access_key");
//! // Pin one timestamp so the cached key and the signature share a date.
//! let req = PresignRequest::new("examplebucket", "test.txt").with_time(now());
//!
//! let key = derive_signing_key(&req, &cred);
//! let url = presign_url(&req.with_signing_key(key), &cred)?;
//! # let _ = url;
//! # Ok(())
//! # }
//! ```

mod constants;

mod credential;
pub use credential::Credential;

mod options;
pub use options::PresignRequest;

mod presign;
pub use presign::derive_signing_key;
pub use presign::presign_url;
pub use presign::SigningKey;

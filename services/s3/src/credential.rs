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

use std::fmt::{Debug, Formatter};

/// Credential that holds the access_key and secret_key.
#[derive(Default, Clone)]
pub struct Credential {
    /// Access key id for the storage service.
    pub access_key_id: String,
    /// Secret access key for the storage service.
    pub secret_access_key: String,
    /// Session token, set when signing with temporary credentials.
    pub session_token: Option<String>,
}

impl Credential {
    /// Create a new credential from a static access key pair.
    pub fn new(access_key_id: &str, secret_access_key: &str) -> Self {
        Self {
            access_key_id: access_key_id.to_string(),
            secret_access_key: secret_access_key.to_string(),
            session_token: None,
        }
    }

    /// Attach a session token to this credential.
    pub fn with_session_token(mut self, token: &str) -> Self {
        self.session_token = Some(token.to_string());
        self
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key_id", &Redact(&self.access_key_id))
            .field("secret_access_key", &Redact(&self.secret_access_key))
            .field(
                "session_token",
                &Redact(self.session_token.as_deref().unwrap_or_default()),
            )
            .finish()
    }
}

/// Redacts a string by replacing all but the first and last three characters
/// with asterisks. Strings shorter than 12 characters are redacted entirely.
pub(crate) struct Redact<'a>(pub(crate) &'a str);

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let length = self.0.len();
        if length == 0 {
            f.write_str("EMPTY")
        } else if length < 12 {
            f.write_str("***")
        } else {
            f.write_str(&self.0[..3])?;
            f.write_str("***")?;
            f.write_str(&self.0[length - 3..])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secrets() {
        let cred = Credential::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY");

        let output = format!("{cred:?}");
        assert!(!output.contains("wJalrXUtnFEMI"));
        assert!(output.contains("wJa***KEY"));
    }

    #[test]
    fn test_redact() {
        let cases = vec![
            ("Short", "***"),
            ("Hello World!", "Hel***ld!"),
            ("", "EMPTY"),
        ];

        for (input, expected) in cases {
            assert_eq!(format!("{:?}", Redact(input)), expected);
        }
    }
}

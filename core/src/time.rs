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

//! Time related utils.

use chrono::Timelike;
use chrono::Utc;

use crate::Error;
use crate::Result;

/// DateTime in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// Create a new DateTime with the current time, truncated to whole seconds.
///
/// Signing protocols format timestamps without sub-second precision, so we
/// drop it here instead of at every format site.
pub fn now() -> DateTime {
    Utc::now().with_nanosecond(0).expect("zero nanosecond must be valid")
}

/// Format time into date: `20220313`
pub fn format_date(t: DateTime) -> String {
    t.format("%Y%m%d").to_string()
}

/// Format time into ISO8601 basic format: `20220313T072004Z`
pub fn format_iso8601(t: DateTime) -> String {
    t.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Parse time from RFC3339: `2022-03-13T07:20:04Z`
///
/// Input in other timezones is converted to UTC.
pub fn parse_rfc3339(s: &str) -> Result<DateTime> {
    let t = chrono::DateTime::parse_from_rfc3339(s)
        .map_err(|e| Error::config_invalid(format!("parse '{s}' as rfc3339 failed")).with_source(e))?;

    Ok(t.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let t = parse_rfc3339("2022-03-13T07:20:04Z").expect("must parse");
        assert_eq!(format_date(t), "20220313");
    }

    #[test]
    fn test_format_iso8601() {
        let t = parse_rfc3339("2022-03-13T07:20:04Z").expect("must parse");
        assert_eq!(format_iso8601(t), "20220313T072004Z");
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let t = parse_rfc3339("2022-03-13T09:20:04+02:00").expect("must parse");
        assert_eq!(format_iso8601(t), "20220313T072004Z");
    }

    #[test]
    fn test_parse_rfc3339_invalid() {
        assert!(parse_rfc3339("20220313T072004Z").is_err());
    }
}

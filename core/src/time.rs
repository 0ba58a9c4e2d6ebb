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

use crate::Error;
use crate::Result;
use chrono::Utc;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Create a new DateTime from the current wall clock.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into a Unix epoch seconds string: `1636113600`
pub fn format_epoch_seconds(t: DateTime) -> String {
    t.timestamp().to_string()
}

/// Parse time from RFC3339: `2021-11-05T12:00:00Z`
pub fn parse_rfc3339(s: &str) -> Result<DateTime> {
    Ok(chrono::DateTime::parse_from_rfc3339(s)
        .map_err(|e| Error::unexpected(format!("parse '{s}' into rfc3339 failed")).with_source(e))?
        .with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_epoch_seconds() -> Result<()> {
        let t = parse_rfc3339("2021-11-05T12:00:00Z")?;
        assert_eq!(format_epoch_seconds(t), "1636113600");

        let t = parse_rfc3339("1970-01-01T00:00:00+00:00")?;
        assert_eq!(format_epoch_seconds(t), "0");

        Ok(())
    }

    #[test]
    fn test_parse_rfc3339_with_offset() -> Result<()> {
        let t = parse_rfc3339("2021-11-05T14:00:00+02:00")?;
        assert_eq!(format_epoch_seconds(t), "1636113600");

        Ok(())
    }

    #[test]
    fn test_parse_rfc3339_invalid() {
        assert!(parse_rfc3339("yesterday").is_err());
    }
}

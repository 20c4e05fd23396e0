use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Serialize, Serializer};

/// Wall-clock time zone of every report, independent of the host setting
pub const REPORT_TIMEZONE: Tz = chrono_tz::Europe::Paris;

/// Header format, e.g. `2025-11-03 11:30:45`
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Filesystem-safe format, e.g. `2025-11-03_11-30-45`
const FILE_STAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Generation instant of one report run, already converted to Europe/Paris.
///
/// Captured once per run so the header and the file name can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportTimestamp {
    local: DateTime<Tz>,
}

impl ReportTimestamp {
    /// Convert a UTC instant into report local time
    pub fn from_utc(utc_time: DateTime<Utc>) -> Self {
        Self {
            local: utc_time.with_timezone(&REPORT_TIMEZONE),
        }
    }

    pub fn local(&self) -> DateTime<Tz> {
        self.local
    }

    /// Human-readable rendering for the report header
    pub fn display(&self) -> String {
        self.local.format(DISPLAY_FORMAT).to_string()
    }

    /// Rendering used inside the report file name
    pub fn file_stamp(&self) -> String {
        self.local.format(FILE_STAMP_FORMAT).to_string()
    }
}

impl Serialize for ReportTimestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.display())
    }
}

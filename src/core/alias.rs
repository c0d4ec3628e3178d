//! Case-insensitive, priority-ordered column lookup.
//!
//! Input rows come from arbitrary imports, so the same semantic field shows
//! up as `TargetUserName`, `AccountName`, `user`, and so on. Each canonical
//! field declares an [`AliasGroup`]: an ordered candidate list. Resolution
//! walks the candidates in order and takes the first column whose trimmed
//! value is non-empty.
//!
//! A row is lower-cased once into a [`RowIndex`]; every alias group is then
//! resolved against that index.

use std::collections::HashMap;

use crate::core::record::Row;

/// Ordered candidate column names for one canonical field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasGroup {
    /// Display label of the canonical field, e.g. `"Source IP"`.
    pub label: &'static str,
    /// Candidate column names in priority order (matched case-insensitively).
    pub aliases: &'static [&'static str],
}

/// A successful alias resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'r> {
    /// The row column that supplied the value, with its original casing.
    pub key: &'r str,
    /// The column value, trimmed.
    pub value: &'r str,
}

/// Lower-cased view of a row's column names.
///
/// When several columns differ only by case, the first one in row order
/// owns the lower-cased name.
#[derive(Debug)]
pub struct RowIndex<'r> {
    by_lower: HashMap<String, (&'r str, &'r str)>,
}

impl<'r> RowIndex<'r> {
    pub fn new(row: &'r Row) -> Self {
        let mut by_lower = HashMap::with_capacity(row.len());
        for (k, v) in row.iter() {
            by_lower.entry(k.to_lowercase()).or_insert((k, v));
        }
        Self { by_lower }
    }

    fn lookup(&self, alias: &str) -> Option<(&'r str, &'r str)> {
        self.by_lower.get(&alias.to_lowercase()).copied()
    }
}

impl AliasGroup {
    /// Resolve this group against a pre-built row index.
    ///
    /// Each alias is tried in order; a column that exists but holds only
    /// whitespace does not stop the search.
    pub fn resolve<'r>(&self, index: &RowIndex<'r>) -> Option<Resolved<'r>> {
        self.aliases.iter().find_map(|alias| {
            let (key, value) = index.lookup(alias)?;
            let value = value.trim();
            (!value.is_empty()).then_some(Resolved { key, value })
        })
    }

    /// Convenience wrapper that indexes the row first.
    pub fn resolve_in<'r>(&self, row: &'r Row) -> Option<Resolved<'r>> {
        self.resolve(&RowIndex::new(row))
    }
}

// ── Canonical field model ───────────────────────────────────────────────

/// The event identifier, resolved before every other field.
pub const EVENT_ID: AliasGroup = AliasGroup {
    label: "Event ID",
    aliases: &["EventId", "EventID", "Event ID", "Id", "ID"],
};

/// Label of the synthetic description field that carries the catalog label.
pub const DESCRIPTION_LABEL: &str = "Description";

/// Canonical forensic fields, in display order (after Event ID and
/// Description).
pub const CANONICAL_FIELDS: &[AliasGroup] = &[
    AliasGroup {
        label: "Time",
        aliases: &["TimeCreated", "Time", "Timestamp", "Date", "DateTime", "EventTime"],
    },
    AliasGroup {
        label: "Computer",
        aliases: &["Computer", "ComputerName", "MachineName", "Host"],
    },
    AliasGroup {
        label: "Subject Account",
        aliases: &["SubjectUserName", "SubjectAccount"],
    },
    AliasGroup {
        label: "Subject Domain",
        aliases: &["SubjectDomainName", "SubjectDomain"],
    },
    AliasGroup {
        label: "Target Account",
        aliases: &["TargetUserName", "AccountName", "Account", "UserName", "User"],
    },
    AliasGroup {
        label: "Target Domain",
        aliases: &["TargetDomainName", "TargetDomain"],
    },
    AliasGroup {
        label: "Logon Type",
        aliases: &["LogonType", "Logon Type"],
    },
    AliasGroup {
        label: "Logon ID",
        aliases: &["SubjectLogonId", "TargetLogonId", "LogonId"],
    },
    AliasGroup {
        label: "Source IP",
        aliases: &["IpAddress", "SourceAddress", "SourceIP", "ClientAddress"],
    },
    AliasGroup {
        label: "Source Port",
        aliases: &["IpPort", "SourcePort"],
    },
    AliasGroup {
        label: "Workstation",
        aliases: &["WorkstationName", "Workstation"],
    },
    AliasGroup {
        label: "Process",
        aliases: &["ProcessName", "NewProcessName", "Process", "Image"],
    },
    AliasGroup {
        label: "Process ID",
        aliases: &["ProcessId", "NewProcessId"],
    },
    AliasGroup {
        label: "Parent Process",
        aliases: &["ParentProcessName", "ParentImage"],
    },
    AliasGroup {
        label: "Service Name",
        aliases: &["ServiceName", "Service"],
    },
    AliasGroup {
        label: "Task Name",
        aliases: &["TaskName"],
    },
    AliasGroup {
        label: "Status",
        aliases: &["Status"],
    },
    AliasGroup {
        label: "Failure Reason",
        aliases: &["FailureReason", "SubStatus"],
    },
    AliasGroup {
        label: "Logon Process",
        aliases: &["LogonProcessName", "LogonProcess"],
    },
    AliasGroup {
        label: "Auth Package",
        aliases: &["AuthenticationPackageName", "AuthPackage"],
    },
    AliasGroup {
        label: "Share Name",
        aliases: &["ShareName"],
    },
    AliasGroup {
        label: "Share Path",
        aliases: &["ShareLocalPath", "RelativeTargetName"],
    },
];

/// Resolve just the event identifier of a row.
pub fn resolve_event_id(row: &Row) -> Option<&str> {
    EVENT_ID.resolve_in(row).map(|r| r.value)
}

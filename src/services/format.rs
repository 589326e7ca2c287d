//! Record formatting: per-entry field derivation and serialization.
//!
//! [`EntryFormatter`] maps a single image entry plus its resolved parent
//! path into an output line with a fixed, type-dependent field set. Every
//! field is emitted for every entry, with zero placeholders where a field
//! does not apply, so the schema stays fixed across entry kinds.

use crate::models::{EntryRecord, Inode, InodeKind};
use crate::{Error, Result};
use chrono::{DateTime, Utc};

/// Rendering profile for entry timestamps (UTC).
const ENTRY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Rendering profile for the record capture timestamp (UTC, millis).
const CAPTURE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Column names for the delimited shape, in emission order.
pub const COLUMNS: [&str; 12] = [
    "Path",
    "Replication",
    "ModificationTime",
    "AccessTime",
    "PreferredBlockSize",
    "BlocksCount",
    "FileSize",
    "NSQUOTA",
    "DSQUOTA",
    "Permission",
    "UserName",
    "GroupName",
];

/// Output record shape selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputShape {
    /// One line per entry, values joined by a delimiter, after a header row.
    #[default]
    Delimited,
    /// One self-describing JSON object per entry, no header row.
    Json,
}

impl OutputShape {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputShape::Delimited => "delimited",
            OutputShape::Json => "json",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "delimited" => Some(OutputShape::Delimited),
            "json" => Some(OutputShape::Json),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutputShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OutputShape {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        OutputShape::from_label(s).ok_or_else(|| format!("unknown output shape '{s}'"))
    }
}

/// Static provenance tags stamped onto every record.
///
/// These identify the source system and are configuration-time constants,
/// never derived from an entry.
#[derive(Debug, Clone)]
pub struct ProvenanceTags {
    pub area: String,
    pub cluster: String,
    pub namespace: String,
    pub protocol: String,
}

impl Default for ProvenanceTags {
    fn default() -> Self {
        Self {
            area: "default".to_string(),
            cluster: "local".to_string(),
            namespace: "default".to_string(),
            protocol: "hdfs".to_string(),
        }
    }
}

/// Join a resolved parent path and an entry name with a single separator.
///
/// The root entry (empty name, empty parent) renders as "/".
#[must_use]
pub fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() && name.is_empty() {
        return "/".to_string();
    }
    if parent.ends_with('/') {
        format!("{parent}{name}")
    } else {
        format!("{parent}/{name}")
    }
}

fn format_entry_time(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
        .format(ENTRY_TIME_FORMAT)
        .to_string()
}

/// Maps one image entry plus its resolved parent path to an output line.
#[derive(Debug, Clone)]
pub struct EntryFormatter {
    shape: OutputShape,
    delimiter: String,
    tags: ProvenanceTags,
}

impl EntryFormatter {
    #[must_use]
    pub fn new(shape: OutputShape, delimiter: impl Into<String>, tags: ProvenanceTags) -> Self {
        Self {
            shape,
            delimiter: delimiter.into(),
            tags,
        }
    }

    /// Column-header line for the delimited shape, written once before the
    /// first record. `None` for JSON, where records are self-describing.
    #[must_use]
    pub fn header(&self) -> Option<String> {
        match self.shape {
            OutputShape::Delimited => Some(COLUMNS.join(&self.delimiter)),
            OutputShape::Json => None,
        }
    }

    /// Derive and serialize the record for one entry.
    ///
    /// Fails only when the entry carries a variant with no derivation rule;
    /// no record is emitted in that case.
    pub fn format(&self, parent: &str, inode: &Inode) -> Result<String> {
        let record = self.derive(parent, inode)?;
        match self.shape {
            OutputShape::Delimited => Ok(self.delimited_line(&record)),
            OutputShape::Json => {
                serde_json::to_string(&record).map_err(|e| Error::Io(e.into()))
            }
        }
    }

    fn derive(&self, parent: &str, inode: &Inode) -> Result<EntryRecord> {
        let mut record = EntryRecord {
            inode_name: inode.name.clone(),
            path: join_path(parent, &inode.name),
            parent_path: parent.to_string(),
            kind: "",
            replication: 0,
            modification_time: format_entry_time(0),
            access_time: format_entry_time(0),
            preferred_block_size: 0,
            blocks_count: 0,
            file_size: 0,
            ns_quota: 0,
            ds_quota: 0,
            permission: String::new(),
            user_name: String::new(),
            group_name: String::new(),
            area: self.tags.area.clone(),
            cluster_name: self.tags.cluster.clone(),
            name_space: self.tags.namespace.clone(),
            protocol: self.tags.protocol.clone(),
            captured_at: Utc::now().format(CAPTURE_TIME_FORMAT).to_string(),
        };

        let (status, is_dir) = match &inode.kind {
            InodeKind::File(file) => {
                record.kind = "file";
                record.replication = file.replication;
                record.modification_time = format_entry_time(file.modification_time);
                record.access_time = format_entry_time(file.access_time);
                record.preferred_block_size = file.preferred_block_size;
                record.blocks_count = file.blocks_count();
                record.file_size = file.file_size();
                (&file.permission, false)
            }
            InodeKind::Directory(dir) => {
                record.kind = "directory";
                record.modification_time = format_entry_time(dir.modification_time);
                record.ns_quota = dir.ns_quota;
                record.ds_quota = dir.ds_quota;
                (&dir.permission, true)
            }
            InodeKind::Symlink(link) => {
                record.kind = "symlink";
                record.modification_time = format_entry_time(link.modification_time);
                record.access_time = format_entry_time(link.access_time);
                (&link.permission, false)
            }
            InodeKind::Unknown => return Err(Error::UnrecognizedEntry(record.path)),
        };

        let type_flag = if is_dir { 'd' } else { '-' };
        let acl_suffix = if status.has_acl() { "+" } else { "" };
        record.permission = format!("{type_flag}{}{acl_suffix}", status.symbolic());
        record.user_name = status.user.clone();
        record.group_name = status.group.clone();

        Ok(record)
    }

    fn delimited_line(&self, record: &EntryRecord) -> String {
        // Path carries no leading delimiter; every later column does.
        let mut line = String::new();
        line.push_str(&record.path);
        self.append(&mut line, &record.replication.to_string());
        self.append(&mut line, &record.modification_time);
        self.append(&mut line, &record.access_time);
        self.append(&mut line, &record.preferred_block_size.to_string());
        self.append(&mut line, &record.blocks_count.to_string());
        self.append(&mut line, &record.file_size.to_string());
        self.append(&mut line, &record.ns_quota.to_string());
        self.append(&mut line, &record.ds_quota.to_string());
        self.append(&mut line, &record.permission);
        self.append(&mut line, &record.user_name);
        self.append(&mut line, &record.group_name);
        line
    }

    fn append(&self, line: &mut String, field: &str) {
        line.push_str(&self.delimiter);
        line.push_str(field);
    }
}

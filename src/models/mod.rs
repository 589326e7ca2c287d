//! Data models for image entries, permissions, and output records

use serde::{Deserialize, Serialize};

/// One entry in the decoded filesystem image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inode {
    pub id: u64,
    pub name: String,
    #[serde(flatten)]
    pub kind: InodeKind,
}

/// Entry payload selected by the `type` discriminant in the decoded image.
///
/// Unknown discriminants are captured as [`InodeKind::Unknown`] at the
/// decode boundary instead of failing the whole parse; the formatter
/// rejects them with an explicit error so a record with undefined fields
/// is never emitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InodeKind {
    File(FileInode),
    Directory(DirectoryInode),
    Symlink(SymlinkInode),
    #[serde(other)]
    Unknown,
}

/// Regular file payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileInode {
    pub permission: PermissionStatus,
    pub replication: u32,
    pub modification_time: i64,
    pub access_time: i64,
    pub preferred_block_size: u64,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl FileInode {
    /// Total file size: the sum of the block sizes. Never stored directly.
    #[must_use]
    pub fn file_size(&self) -> u64 {
        self.blocks.iter().map(|b| b.num_bytes).sum()
    }

    #[must_use]
    pub fn blocks_count(&self) -> u64 {
        self.blocks.len() as u64
    }
}

/// One block of a file as recorded in the image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub num_bytes: u64,
}

/// Directory payload carrying namespace and storage-space quotas
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryInode {
    pub permission: PermissionStatus,
    pub modification_time: i64,
    #[serde(default)]
    pub ns_quota: i64,
    #[serde(default)]
    pub ds_quota: i64,
}

/// Symlink payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymlinkInode {
    pub permission: PermissionStatus,
    pub modification_time: i64,
    pub access_time: i64,
}

/// Ownership and mode bits attached to an entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionStatus {
    pub user: String,
    pub group: String,
    pub mode: u16,
    #[serde(default)]
    pub acl_entries: u32,
}

impl PermissionStatus {
    /// Symbolic string for the low nine mode bits (e.g. "rwxr-xr-x")
    #[must_use]
    pub fn symbolic(&self) -> String {
        let mut s = String::with_capacity(9);
        for shift in [6, 3, 0] {
            let bits = (self.mode >> shift) & 0o7;
            s.push(if bits & 0o4 != 0 { 'r' } else { '-' });
            s.push(if bits & 0o2 != 0 { 'w' } else { '-' });
            s.push(if bits & 0o1 != 0 { 'x' } else { '-' });
        }
        s
    }

    /// True iff the attached ACL list is non-empty
    #[must_use]
    pub fn has_acl(&self) -> bool {
        self.acl_entries > 0
    }
}

/// Fixed-schema output record, one per entry.
///
/// Field declaration order fixes the JSON key order; the field set is
/// identical across entry kinds, with zero placeholders where a field does
/// not apply.
#[derive(Debug, Clone, Serialize)]
pub struct EntryRecord {
    #[serde(rename = "InodeName")]
    pub inode_name: String,
    #[serde(rename = "Path")]
    pub path: String,
    #[serde(rename = "ParentPath")]
    pub parent_path: String,
    #[serde(rename = "Type")]
    pub kind: &'static str,
    #[serde(rename = "Replication")]
    pub replication: u32,
    #[serde(rename = "ModificationTime")]
    pub modification_time: String,
    #[serde(rename = "AccessTime")]
    pub access_time: String,
    #[serde(rename = "PreferredBlockSize")]
    pub preferred_block_size: u64,
    #[serde(rename = "BlocksCount")]
    pub blocks_count: u64,
    #[serde(rename = "FileSize")]
    pub file_size: u64,
    #[serde(rename = "NSQUOTA")]
    pub ns_quota: i64,
    #[serde(rename = "DSQUOTA")]
    pub ds_quota: i64,
    #[serde(rename = "Permission")]
    pub permission: String,
    #[serde(rename = "UserName")]
    pub user_name: String,
    #[serde(rename = "GroupName")]
    pub group_name: String,
    #[serde(rename = "Area")]
    pub area: String,
    #[serde(rename = "ClusterName")]
    pub cluster_name: String,
    #[serde(rename = "NameSpace")]
    pub name_space: String,
    #[serde(rename = "Protocol")]
    pub protocol: String,
    #[serde(rename = "@timestamp")]
    pub captured_at: String,
}

//! Contract test for the delimited output shape

use crate::fixtures::{ScriptedLoader, directory_inode, file_inode};
use fsdump::services::sink::memory::MemorySink;
use fsdump::{ExportOptions, export};

fn sample_loader() -> ScriptedLoader {
    ScriptedLoader::new(vec![
        (String::new(), directory_inode(1, "", 5, 100)),
        ("/".to_string(), file_inode(2, "a.txt", 3, &[1024])),
    ])
}

#[test]
fn test_exact_tab_delimited_lines() {
    let mut loader = sample_loader();
    let mut sink = MemorySink::new();

    export(&mut loader, &mut sink, &ExportOptions::default()).expect("export");

    let lines = sink.lines();
    assert_eq!(
        lines[0],
        "Path\tReplication\tModificationTime\tAccessTime\tPreferredBlockSize\
         \tBlocksCount\tFileSize\tNSQUOTA\tDSQUOTA\tPermission\tUserName\tGroupName"
    );
    assert_eq!(
        lines[1],
        "/\t0\t2020-09-13 12:26:40\t1970-01-01 00:00:00\t0\t0\t0\t5\t100\
         \tdrwxr-xr-x\thdfs\tsupergroup"
    );
    assert_eq!(
        lines[2],
        "/a.txt\t3\t2020-09-13 12:26:40\t2020-09-14 12:26:40\t134217728\t1\t1024\t0\t0\
         \t-rw-r--r--\talice\tusers"
    );
}

#[test]
fn test_custom_delimiter() {
    let mut loader = sample_loader();
    let mut sink = MemorySink::new();
    let opts = ExportOptions {
        delimiter: "|".to_string(),
        ..ExportOptions::default()
    };

    export(&mut loader, &mut sink, &opts).expect("export");

    let lines = sink.lines();
    assert!(lines[0].starts_with("Path|Replication|"));
    assert!(lines[1].starts_with("/|0|"));
    assert_eq!(lines[1].matches('|').count(), 11);
    assert_eq!(lines[2].matches('|').count(), 11);
}

#[test]
fn test_schema_is_fixed_across_entry_kinds() {
    let mut loader = sample_loader();
    let mut sink = MemorySink::new();

    export(&mut loader, &mut sink, &ExportOptions::default()).expect("export");

    // Every line, header included, has exactly twelve columns.
    for line in sink.lines() {
        assert_eq!(line.split('\t').count(), 12);
    }
}

use bundlescan_walk::{
    AppFile, AppFileType, BundleWalker, InventoryConfig, get_all_app_files, read_header,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn find<'a>(files: &'a [AppFile], rel: &str) -> Option<&'a AppFile> {
    files.iter().find(|f| f.relative_path == Path::new(rel))
}

#[test]
fn test_asar_with_macho_magic_is_app_code() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("archive.asar"), [0xcf, 0xfa, 0xed, 0xfe]).unwrap();

    let files = get_all_app_files(temp.path()).unwrap();
    assert_eq!(files, vec![AppFile::new("archive.asar", AppFileType::AppCode)]);
}

#[test]
fn test_info_plist() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Info.plist"), "<plist version=\"1.0\"/>").unwrap();

    let files = get_all_app_files(temp.path()).unwrap();
    assert_eq!(files, vec![AppFile::new("Info.plist", AppFileType::InfoPlist)]);
}

#[test]
fn test_exact_macho_header() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("helper"), [0xce, 0xfa, 0xed, 0xfe]).unwrap();

    let files = get_all_app_files(temp.path()).unwrap();
    assert_eq!(files[0].file_type, AppFileType::MachO);
}

#[test]
fn test_universal_binary() {
    let temp = TempDir::new().unwrap();
    // fat_header is written big-endian
    fs::write(
        temp.path().join("Demo"),
        [0xca, 0xfe, 0xba, 0xbe, 0x00, 0x00, 0x00, 0x02],
    )
    .unwrap();

    let files = get_all_app_files(temp.path()).unwrap();
    assert_eq!(files[0].file_type, AppFileType::MachO);
}

#[test]
fn test_zero_byte_snapshot() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("thing.bin");
    fs::write(&path, b"").unwrap();

    assert!(read_header(&path).unwrap().len() < 4);

    let files = get_all_app_files(temp.path()).unwrap();
    assert_eq!(files, vec![AppFile::new("thing.bin", AppFileType::Snapshot)]);
}

#[test]
fn test_nested_directories() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("Contents/Frameworks/Demo Helper.app/Contents")).unwrap();
    fs::write(
        root.join("Contents/Frameworks/Demo Helper.app/Contents/Info.plist"),
        "plist",
    )
    .unwrap();
    fs::create_dir(root.join("Contents/Empty")).unwrap();

    let inventory = BundleWalker::new().walk(&InventoryConfig::new(root)).unwrap();

    assert_eq!(inventory.len(), 1);
    assert_eq!(
        inventory.files[0].relative_path,
        Path::new("Contents/Frameworks/Demo Helper.app/Contents/Info.plist")
    );
    assert_eq!(inventory.stats.total_dirs, 6);
    assert_eq!(inventory.stats.count(AppFileType::InfoPlist), 1);
}

#[test]
fn test_nothing_visited_twice() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    for dir in ["a", "b", "c"] {
        fs::create_dir(root.join(dir)).unwrap();
        for name in ["x.bin", "y.asar", "Info.plist"] {
            fs::write(root.join(dir).join(name), b"data").unwrap();
        }
    }

    let files = get_all_app_files(root).unwrap();
    let mut paths: Vec<_> = files.iter().map(|f| f.relative_path.clone()).collect();
    let total = paths.len();
    paths.sort();
    paths.dedup();
    assert_eq!(total, 9);
    assert_eq!(paths.len(), 9);
}

#[cfg(unix)]
mod unix {
    use super::*;
    use std::os::unix::fs::{PermissionsExt, symlink};

    #[test]
    fn test_symlinks_and_cycles() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::write(root.join("real.txt"), "hello").unwrap();
        fs::create_dir(root.join("A")).unwrap();
        fs::create_dir(root.join("B")).unwrap();
        fs::write(root.join("A/inner.bin"), b"").unwrap();

        // Link to a sibling file
        symlink(root.join("real.txt"), root.join("link.txt")).unwrap();
        // Directory cycle A -> B -> A
        symlink(root.join("B"), root.join("A/to_b")).unwrap();
        symlink(root.join("A"), root.join("B/to_a")).unwrap();
        // Link loop that cannot be resolved at all
        symlink(root.join("loop2"), root.join("loop1")).unwrap();
        symlink(root.join("loop1"), root.join("loop2")).unwrap();
        // Dangling link
        symlink(root.join("gone"), root.join("dangling")).unwrap();

        let inventory = BundleWalker::new().walk(&InventoryConfig::new(root)).unwrap();
        let files = &inventory.files;

        assert_eq!(files.len(), 2, "{files:?}");
        assert_eq!(
            find(files, "real.txt").map(|f| f.file_type),
            Some(AppFileType::Plain)
        );
        assert_eq!(
            find(files, "A/inner.bin").map(|f| f.file_type),
            Some(AppFileType::Snapshot)
        );

        for link in ["link.txt", "A/to_b", "B/to_a", "loop1", "loop2", "dangling"] {
            assert!(
                files.iter().all(|f| !f.relative_path.starts_with(link)),
                "record produced under symlink {link}"
            );
        }

        assert_eq!(inventory.stats.symlinks, 6);
    }

    #[test]
    fn test_link_outside_root() {
        let temp = TempDir::new().unwrap();
        let shared = temp.path().join("shared");
        let bundle = temp.path().join("Demo.app");
        fs::create_dir(&shared).unwrap();
        fs::create_dir(&bundle).unwrap();
        fs::write(shared.join("libfoo.dylib"), [0xcf, 0xfa, 0xed, 0xfe]).unwrap();
        symlink(shared.join("libfoo.dylib"), bundle.join("libfoo.dylib")).unwrap();

        let files = get_all_app_files(&bundle).unwrap();
        assert_eq!(
            files,
            vec![AppFile::new("../shared/libfoo.dylib", AppFileType::MachO)]
        );
    }

    #[test]
    fn test_special_files_skipped() {
        use std::os::unix::net::UnixListener;

        let temp = TempDir::new().unwrap();
        let _listener = UnixListener::bind(temp.path().join("agent.sock")).unwrap();
        fs::write(temp.path().join("Info.plist"), "plist").unwrap();

        let inventory = BundleWalker::new()
            .walk(&InventoryConfig::new(temp.path()))
            .unwrap();

        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.stats.other_skipped, 1);
    }

    #[test]
    fn test_unreadable_header_falls_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("locked.bin");
        fs::write(&path, b"cache").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).unwrap();

        let files = get_all_app_files(temp.path()).unwrap();
        assert_eq!(files[0].file_type, AppFileType::Snapshot);

        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();
    }
}

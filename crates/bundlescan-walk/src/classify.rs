//! Classification rules for bundle files.

use std::ffi::OsStr;
use std::path::Path;

use bundlescan_core::AppFileType;
use bundlescan_core::macho::{is_macho, is_universal_macho};
use tracing::trace;

use crate::header::read_header;

const APP_CODE_SUFFIX: &[u8] = b".asar";
const SNAPSHOT_SUFFIX: &[u8] = b".bin";
const INFO_PLIST: &str = "Info.plist";

/// Classify a file from its path and, when available, its header bytes.
///
/// Rules are tried in order and the first match wins:
///
/// 1. path ends with `.asar` → [`AppFileType::AppCode`]
/// 2. header is a thin or universal Mach-O → [`AppFileType::MachO`]
/// 3. path ends with `.bin` → [`AppFileType::Snapshot`]
/// 4. file name is exactly `Info.plist` → [`AppFileType::InfoPlist`]
/// 5. anything else → [`AppFileType::Plain`]
///
/// A missing or short header never matches rule 2.
pub fn classify(path: &Path, header: Option<&[u8]>) -> AppFileType {
    let raw = path.as_os_str().as_encoded_bytes();

    if raw.ends_with(APP_CODE_SUFFIX) {
        AppFileType::AppCode
    } else if header.is_some_and(|h| is_macho(h) || is_universal_macho(h)) {
        AppFileType::MachO
    } else if raw.ends_with(SNAPSHOT_SUFFIX) {
        AppFileType::Snapshot
    } else if path.file_name() == Some(OsStr::new(INFO_PLIST)) {
        AppFileType::InfoPlist
    } else {
        AppFileType::Plain
    }
}

/// Read the header of `path` and classify it.
///
/// Header read failures are absorbed: the file is classified as if it had
/// no recognizable header.
pub fn classify_path(path: &Path) -> AppFileType {
    let header = match read_header(path) {
        Ok(header) => Some(header),
        Err(err) => {
            trace!(path = %path.display(), error = %err, "header unreadable");
            None
        }
    };

    let file_type = classify(path, header.as_deref());
    trace!(path = %path.display(), %file_type, "classified");
    file_type
}

// Classification feed loading: JSON list file or directory scan

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crosstally_recon::Document;
use serde::Deserialize;

#[derive(Deserialize)]
struct DocumentEntry {
    #[serde(default)]
    identifier: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

/// Load a document feed from a JSON file: an array of
/// `{"identifier": ..., "content": ...}` objects, both fields optional.
pub fn load_feed(path: &Path) -> Result<Vec<Document>, String> {
    let file = File::open(path).map_err(|e| e.to_string())?;
    let entries: Vec<DocumentEntry> =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| e.to_string())?;

    Ok(entries
        .into_iter()
        .map(|e| Document { identifier: e.identifier, content: e.content })
        .collect())
}

/// Build a document feed by scanning a directory: each regular file becomes
/// one document (file name as identifier, contents as content). A file
/// whose contents cannot be read as text keeps its name so identifier
/// matching still runs; only a document with nothing readable at all is
/// skipped by the classifier. Entries are sorted by name for deterministic
/// output.
pub fn scan_dir(dir: &Path) -> Result<Vec<Document>, String> {
    let mut paths: Vec<_> = std::fs::read_dir(dir)
        .map_err(|e| format!("cannot read {}: {e}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let identifier = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        // Non-text contents are not an error: the file name alone is
        // still classifiable.
        let content = std::fs::read_to_string(&path).ok();
        documents.push(Document { identifier, content });
    }

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::fs;

    use crosstally_recon::KeywordClassifier;
    use tempfile::tempdir;

    #[test]
    fn load_feed_from_json_list() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("files.json");
        fs::write(
            &path,
            r#"[
                {"identifier": "Nearmiss_01.pdf"},
                {"identifier": "notes.txt", "content": "hazard near dock 4"},
                {}
            ]"#,
        )
        .unwrap();

        let docs = load_feed(&path).unwrap();
        assert_eq!(docs.len(), 3);
        assert_eq!(docs[0].identifier.as_deref(), Some("Nearmiss_01.pdf"));
        assert_eq!(docs[1].content.as_deref(), Some("hazard near dock 4"));
        assert!(docs[2].identifier.is_none() && docs[2].content.is_none());
    }

    #[test]
    fn reject_malformed_feed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("files.json");
        fs::write(&path, "{\"identifier\": \"x\"}").unwrap();
        assert!(load_feed(&path).is_err());
    }

    #[test]
    fn scan_dir_sorted_with_contents() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b_Hazard.txt"), "follow-up pending").unwrap();
        fs::write(dir.path().join("a_report.txt"), "Nearmiss at gate").unwrap();
        fs::create_dir(dir.path().join("subdir")).unwrap();

        let docs = scan_dir(dir.path()).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].identifier.as_deref(), Some("a_report.txt"));
        assert_eq!(docs[0].content.as_deref(), Some("Nearmiss at gate"));
        assert_eq!(docs[1].identifier.as_deref(), Some("b_Hazard.txt"));
    }

    #[test]
    fn scan_dir_keeps_file_name_when_contents_are_not_text() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("Hazard_report.bin"), [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let docs = scan_dir(dir.path()).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].identifier.as_deref(), Some("Hazard_report.bin"));
        assert!(docs[0].content.is_none());

        // File-name tallies must still see the document
        let categories = BTreeMap::from([("hazard".to_string(), "Hazard".to_string())]);
        let tally = KeywordClassifier::new(&categories).tally(&docs);
        assert_eq!(tally.counts[0].count, 1);
        assert_eq!(tally.skipped_documents, 0);
    }

    #[test]
    fn scan_missing_dir_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(scan_dir(&dir.path().join("nope")).is_err());
    }
}

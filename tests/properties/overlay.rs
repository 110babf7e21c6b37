//! Property tests for the in-memory file system overlay.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use proptest::prelude::*;

use bundle_overlay::domain::entities::TranspiledEntry;
use bundle_overlay::infrastructure::DiskFs;
use bundle_overlay::{InMemoryFileSystem, InputFileSystem, TranspiledSourceCache};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: cached paths read as cached text; all others read as on disk.
    #[test]
    fn property_overlay_prefers_cache_over_disk(
        files in proptest::collection::btree_map("[a-z]{1,6}", ("[ -~]{0,40}", proptest::option::of("[ -~]{0,40}")), 1..8),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let mut expected: HashMap<PathBuf, String> = HashMap::new();
        let mut cache = TranspiledSourceCache::new();

        for (name, (raw, transpiled)) in &files {
            let path = dir.path().join(format!("{name}.ts"));
            fs::write(&path, raw).unwrap();
            match transpiled {
                Some(text) => {
                    cache.insert(TranspiledEntry::new(path.clone(), text.clone()));
                    expected.insert(path, text.clone());
                }
                None => {
                    expected.insert(path, raw.clone());
                }
            }
        }

        let overlay = InMemoryFileSystem::new(Arc::new(DiskFs::new()), Arc::new(cache));
        for (path, content) in &expected {
            let bytes = overlay.read_file(path).unwrap();
            prop_assert_eq!(String::from_utf8(bytes).unwrap(), content.clone());
        }

        let missing = dir.path().join("missing.ts");
        prop_assert!(overlay.read_file(&missing).unwrap_err().is_not_found());
    }
}

//! Build Use Case Tests

use super::*;
use crate::config::{BuildContext, BundlerConfig, EntryConfig};
use crate::domain::entities::{CompilationStats, ModuleFileSet, ModuleRecord, TsFile};
use crate::domain::ports::{
    BuildEvent, BuildEventSink, Bundler, BundlerStartError, Compiler, FileKind, FileStat, FsError,
    FsResult, InputFileSystem, ModulePathCache,
};
use crate::domain::value_objects::FileEventKind;
use crate::error::{BuildError, CompileError};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

// Mock implementations for testing

/// Native file system standing in for the disk: `/a.ts` holds raw source
struct RawFs {
    files: HashMap<PathBuf, String>,
}

impl RawFs {
    fn new() -> Self {
        let mut files = HashMap::new();
        files.insert(PathBuf::from("/a.ts"), "raw".to_string());
        files.insert(PathBuf::from("/c.ts"), "untouched".to_string());
        Self { files }
    }
}

impl InputFileSystem for RawFs {
    fn read_file(&self, path: &Path) -> FsResult<Vec<u8>> {
        self.files
            .get(path)
            .map(|c| c.as_bytes().to_vec())
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn stat(&self, path: &Path) -> FsResult<FileStat> {
        self.files
            .get(path)
            .map(|c| FileStat {
                kind: FileKind::File,
                len: c.len() as u64,
                modified: None,
            })
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn read_dir(&self, path: &Path) -> FsResult<Vec<String>> {
        Err(FsError::NotFound(path.to_path_buf()))
    }

    fn read_link(&self, path: &Path) -> FsResult<PathBuf> {
        Err(FsError::Other(format!("not a link: {}", path.display())))
    }
}

/// What the stub compiler saw during its run
#[derive(Default)]
struct Observed {
    configs: Vec<BundlerConfig>,
    reads: Vec<(PathBuf, Result<String, String>)>,
}

#[derive(Clone)]
struct StubBundler {
    modules: Vec<ModuleRecord>,
    reads: Vec<PathBuf>,
    compile_error: Option<String>,
    start_error: bool,
    observed: Arc<Mutex<Observed>>,
}

impl StubBundler {
    fn new(modules: Vec<ModuleRecord>) -> Self {
        Self {
            modules,
            reads: Vec::new(),
            compile_error: None,
            start_error: false,
            observed: Arc::new(Mutex::new(Observed::default())),
        }
    }

    fn reading(mut self, paths: &[&str]) -> Self {
        self.reads = paths.iter().map(PathBuf::from).collect();
        self
    }

    fn failing_with(mut self, message: &str) -> Self {
        self.compile_error = Some(message.to_string());
        self
    }

    fn failing_to_start(mut self) -> Self {
        self.start_error = true;
        self
    }

    fn reads_seen(&self) -> Vec<(PathBuf, Result<String, String>)> {
        self.observed.lock().unwrap().reads.clone()
    }

    fn configs_seen(&self) -> Vec<BundlerConfig> {
        self.observed.lock().unwrap().configs.clone()
    }
}

impl Bundler for StubBundler {
    fn create_compiler(
        &self,
        config: &BundlerConfig,
    ) -> Result<Box<dyn Compiler>, BundlerStartError> {
        self.observed.lock().unwrap().configs.push(config.clone());
        if self.start_error {
            return Err(BundlerStartError::Other("no loaders".to_string()));
        }
        Ok(Box::new(StubCompiler {
            bundler: self.clone(),
            input_fs: Arc::new(RawFs::new()),
        }))
    }
}

struct StubCompiler {
    bundler: StubBundler,
    input_fs: Arc<dyn InputFileSystem>,
}

impl Compiler for StubCompiler {
    fn input_file_system(&self) -> Arc<dyn InputFileSystem> {
        self.input_fs.clone()
    }

    fn set_input_file_system(&mut self, fs: Arc<dyn InputFileSystem>) {
        self.input_fs = fs;
    }

    fn run(self: Box<Self>) -> Result<CompilationStats, CompileError> {
        for path in &self.bundler.reads {
            let result = self
                .input_fs
                .read_file(path)
                .map(|bytes| String::from_utf8(bytes).unwrap())
                .map_err(|e| e.to_string());
            self.bundler
                .observed
                .lock()
                .unwrap()
                .reads
                .push((path.clone(), result));
        }
        match &self.bundler.compile_error {
            Some(message) => Err(CompileError::Bundler(message.clone())),
            None => Ok(CompilationStats::new(self.bundler.modules.clone())),
        }
    }
}

#[derive(Default)]
struct RecordingSink {
    events: Mutex<Vec<BuildEvent>>,
}

impl RecordingSink {
    fn events(&self) -> Vec<BuildEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl BuildEventSink for RecordingSink {
    fn on_event(&self, event: BuildEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[derive(Default)]
struct RecordingCache {
    writes: Mutex<Vec<ModuleFileSet>>,
}

impl RecordingCache {
    fn writes(&self) -> Vec<ModuleFileSet> {
        self.writes.lock().unwrap().clone()
    }
}

impl ModulePathCache for RecordingCache {
    fn set(&self, paths: ModuleFileSet) {
        self.writes.lock().unwrap().push(paths);
    }

    fn get(&self) -> Option<ModuleFileSet> {
        self.writes.lock().unwrap().last().cloned()
    }
}

struct Fixture {
    _dir: tempfile::TempDir,
    context: BuildContext,
    options: BuildOptions,
    sink: Arc<RecordingSink>,
    cache: Arc<RecordingCache>,
}

impl Fixture {
    /// Project with a config file in its root and an empty transpiled cache
    fn new() -> Self {
        let dir = tempdir().unwrap();
        let config = dir.path().join("bundle.toml");
        fs::write(
            &config,
            r#"
entry = "{{SRC}}/app/main.ts"

[output]
path = "{{BUILD}}"
filename = "main.js"
"#,
        )
        .unwrap();

        let cache = Arc::new(RecordingCache::default());
        let context = BuildContext::new(dir.path()).with_module_path_cache(cache.clone());
        let options = BuildOptions::builtin().unwrap().with_config_file(&config);

        Self {
            _dir: dir,
            context,
            options,
            sink: Arc::new(RecordingSink::default()),
            cache,
        }
    }

    fn use_case(&self, bundler: &StubBundler) -> BuildUseCase {
        BuildUseCase::new(Arc::new(bundler.clone())).with_events(self.sink.clone())
    }

    fn dest(&self) -> PathBuf {
        self.context.build_dir.join("main.js")
    }
}

// === Successful builds ===

#[test]
fn build_records_module_paths_and_emits_one_file_change() {
    let mut fx = Fixture::new();
    let bundler = StubBundler::new(vec![
        ModuleRecord::resource("/x.ts"),
        ModuleRecord::context_only("/dir"),
    ]);

    let dest = fx.use_case(&bundler).build(&mut fx.context, &fx.options).unwrap();

    assert_eq!(dest, fx.dest());
    assert_eq!(
        fx.sink.events(),
        vec![BuildEvent::FileChange { path: fx.dest() }]
    );
    let writes = fx.cache.writes();
    assert_eq!(writes.len(), 1);
    assert_eq!(
        writes[0].as_slice(),
        &[PathBuf::from("/x.ts"), PathBuf::from("/dir")]
    );
    assert_eq!(fx.context.module_files, writes[0]);
}

#[test]
fn build_excludes_modules_without_a_path() {
    let mut fx = Fixture::new();
    let bundler = StubBundler::new(vec![
        ModuleRecord {
            resource: None,
            context: None,
        },
        ModuleRecord {
            resource: Some(PathBuf::new()),
            context: Some(PathBuf::new()),
        },
        ModuleRecord::resource("/src/app/main.ts"),
        ModuleRecord::resource("/src/app/main.ts"),
    ]);

    fx.use_case(&bundler).build(&mut fx.context, &fx.options).unwrap();

    assert_eq!(fx.cache.paths(), vec![PathBuf::from("/src/app/main.ts")]);
}

#[test]
fn build_substitutes_path_variables_before_creating_compiler() {
    let mut fx = Fixture::new();
    let bundler = StubBundler::new(vec![]);

    fx.use_case(&bundler).build(&mut fx.context, &fx.options).unwrap();

    let configs = bundler.configs_seen();
    assert_eq!(configs.len(), 1);
    let expected_entry = fx.context.src_dir.join("app/main.ts");
    assert_eq!(
        configs[0].entry,
        EntryConfig::Single(expected_entry.to_string_lossy().into_owned())
    );
    assert_eq!(
        configs[0].output.path,
        fx.context.build_dir.to_string_lossy()
    );
}

#[test]
fn build_uses_context_directories_as_given() {
    let mut fx = Fixture::new();
    let client = fx.context.root_dir.join("client");
    fx.context.src_dir = client.clone();
    let bundler = StubBundler::new(vec![]);

    fx.use_case(&bundler).build(&mut fx.context, &fx.options).unwrap();

    assert_eq!(fx.context.src_dir, client);
    assert_eq!(
        bundler.configs_seen()[0].entry,
        EntryConfig::Single(client.join("app/main.ts").to_string_lossy().into_owned())
    );
}

#[test]
fn build_falls_back_to_defaults_without_user_config() {
    let dir = tempdir().unwrap();
    let mut context = BuildContext::new(dir.path());
    let options = BuildOptions::builtin()
        .unwrap()
        .with_config_file(dir.path().join("absent.config"));
    let sink = Arc::new(RecordingSink::default());
    let bundler = StubBundler::new(vec![ModuleRecord::resource("/a.ts")]);

    let dest = BuildUseCase::new(Arc::new(bundler))
        .with_events(sink.clone())
        .build(&mut context, &options)
        .unwrap();

    assert_eq!(dest, context.build_dir.join("main.js"));
    assert_eq!(sink.events().len(), 1);
}

// === Overlay ===

#[test]
fn compiler_reads_transpiled_sources_through_overlay() {
    let mut fx = Fixture::new();
    fx.context
        .ts_files
        .insert(PathBuf::from("/a.ts"), TsFile::new("compiled"));
    let bundler = StubBundler::new(vec![]).reading(&["/a.ts", "/b.ts", "/c.ts"]);

    fx.use_case(&bundler).build(&mut fx.context, &fx.options).unwrap();

    let reads = bundler.reads_seen();
    assert_eq!(reads[0], (PathBuf::from("/a.ts"), Ok("compiled".to_string())));
    assert_eq!(
        reads[1],
        (
            PathBuf::from("/b.ts"),
            Err(FsError::NotFound(PathBuf::from("/b.ts")).to_string())
        )
    );
    assert_eq!(reads[2], (PathBuf::from("/c.ts"), Ok("untouched".to_string())));
}

#[test]
fn each_build_sees_the_latest_transpiled_sources() {
    let mut fx = Fixture::new();
    let bundler = StubBundler::new(vec![]).reading(&["/a.ts"]);
    let use_case = fx.use_case(&bundler);

    fx.context
        .ts_files
        .insert(PathBuf::from("/a.ts"), TsFile::new("first"));
    use_case.build(&mut fx.context, &fx.options).unwrap();

    fx.context
        .ts_files
        .insert(PathBuf::from("/a.ts"), TsFile::new("second"));
    use_case.build(&mut fx.context, &fx.options).unwrap();

    let contents: Vec<_> = bundler
        .reads_seen()
        .into_iter()
        .map(|(_, result)| result.unwrap())
        .collect();
    assert_eq!(contents, vec!["first".to_string(), "second".to_string()]);
}

// === Failures ===

#[test]
fn compile_error_leaves_caches_untouched_and_emits_nothing() {
    let mut fx = Fixture::new();
    fx.context.module_files = ModuleFileSet::from(vec![PathBuf::from("/old.ts")]);
    let bundler = StubBundler::new(vec![ModuleRecord::resource("/x.ts")])
        .failing_with("Module parse failed: Unexpected token");

    let err = fx
        .use_case(&bundler)
        .build(&mut fx.context, &fx.options)
        .unwrap_err();

    assert!(err.is_compilation());
    assert_eq!(err.to_string(), "Module parse failed: Unexpected token");
    assert!(fx.sink.events().is_empty());
    assert!(fx.cache.writes().is_empty());
    assert_eq!(fx.context.module_files.as_slice(), &[PathBuf::from("/old.ts")]);
}

#[test]
fn compiler_start_failure_is_a_configuration_error() {
    let mut fx = Fixture::new();
    let bundler = StubBundler::new(vec![]).failing_to_start();

    let err = fx
        .use_case(&bundler)
        .build(&mut fx.context, &fx.options)
        .unwrap_err();

    assert!(matches!(err, BuildError::Configuration { .. }));
    assert!(err.to_string().contains("no loaders"));
    assert!(fx.sink.events().is_empty());
    assert!(fx.cache.writes().is_empty());
}

#[test]
fn invalid_config_file_fails_before_compiler_is_created() {
    let mut fx = Fixture::new();
    let broken = fx.context.root_dir.join("broken.toml");
    fs::write(&broken, "entry = [unclosed").unwrap();
    let options = fx.options.clone().with_config_file(&broken);
    let bundler = StubBundler::new(vec![]);

    let err = fx
        .use_case(&bundler)
        .build(&mut fx.context, &options)
        .unwrap_err();

    assert!(matches!(err, BuildError::Configuration { .. }));
    assert!(bundler.configs_seen().is_empty());
    assert!(fx.sink.events().is_empty());
}

#[test]
fn unknown_path_variable_is_a_configuration_error() {
    let mut fx = Fixture::new();
    let config = fx.context.root_dir.join("vars.toml");
    fs::write(
        &config,
        "entry = \"{{NOPE}}/main.ts\"\n[output]\npath = \"{{BUILD}}\"\nfilename = \"main.js\"\n",
    )
    .unwrap();
    let options = fx.options.clone().with_config_file(&config);
    let bundler = StubBundler::new(vec![]);

    let err = fx
        .use_case(&bundler)
        .build(&mut fx.context, &options)
        .unwrap_err();

    assert!(!err.is_compilation());
    assert!(err.to_string().contains("NOPE"));
}

// === Incremental ===

#[test]
fn build_incremental_runs_a_full_rebuild() {
    let mut fx = Fixture::new();
    let bundler = StubBundler::new(vec![
        ModuleRecord::resource("/src/app/main.ts"),
        ModuleRecord::resource("/src/app/util.ts"),
    ]);
    let use_case = fx.use_case(&bundler);

    let dest = use_case
        .build_incremental(
            FileEventKind::Change,
            Path::new("/src/app/util.ts"),
            &mut fx.context,
            &fx.options,
        )
        .unwrap();

    assert_eq!(dest, fx.dest());
    assert_eq!(bundler.configs_seen().len(), 1);
    assert_eq!(fx.cache.paths().len(), 2);
    assert_eq!(fx.sink.events().len(), 1);
}

#[test]
fn build_incremental_propagates_compile_errors() {
    let mut fx = Fixture::new();
    let bundler = StubBundler::new(vec![]).failing_with("boom");

    let err = fx
        .use_case(&bundler)
        .build_incremental(
            FileEventKind::Unlink,
            Path::new("/src/app/gone.ts"),
            &mut fx.context,
            &fx.options,
        )
        .unwrap_err();

    assert!(err.is_compilation());
    assert!(fx.sink.events().is_empty());
}

// === Worker ===

#[test]
fn worker_can_be_driven_without_the_use_case() {
    let mut fx = Fixture::new();
    let bundler = StubBundler::new(vec![ModuleRecord::resource("/x.ts")]);

    let dest = build_worker(
        &mut fx.context,
        &fx.options,
        &bundler,
        fx.sink.as_ref(),
    )
    .unwrap();

    assert_eq!(dest, fx.dest());
    assert_eq!(fx.cache.paths(), vec![PathBuf::from("/x.ts")]);
}

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

use bundle_overlay::application::watch::{WatchEvent, WatchOptions, WatchUseCase};
use bundle_overlay::{BuildUseCase, ConcatBundler};

use super::{event_sink, Project};
use crate::cli::ProjectArgs;

pub fn cmd_watch(args: &ProjectArgs, json: bool) -> Result<()> {
    let mut project = Project::load(args)?;

    let mut options = WatchOptions::new(&project.context.src_dir);
    if let Some(manifest) = &args.transpiled {
        options = options.with_transpiled_manifest(manifest);
    }

    let build = BuildUseCase::new(Arc::new(ConcatBundler::new())).with_events(event_sink(json));
    let use_case = WatchUseCase::new(build, project.options.clone(), options);

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("Error setting Ctrl+C handler")?;

    let result = use_case.start(&mut project.context, running, |event| {
        if json {
            println!("{}", event.to_json());
        } else {
            match event {
                WatchEvent::WatchStarted { watching } => {
                    println!("Watching {} (Ctrl+C to stop)", watching);
                }
                WatchEvent::FileChanged { kind, path } => {
                    println!("{:>9}  {}", kind.as_str(), path)
                }
                WatchEvent::BuildComplete { output } => println!("Bundled into {}", output),
                WatchEvent::Error { message } => eprintln!("Error: {}", message),
                WatchEvent::Shutdown => println!("Shutting down..."),
            }
        }
    });

    project.module_paths.flush();
    result?;
    Ok(())
}

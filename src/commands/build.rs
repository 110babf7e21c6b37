use std::sync::Arc;

use anyhow::Result;

use bundle_overlay::{BuildUseCase, ConcatBundler};

use super::{event_sink, Project};
use crate::cli::ProjectArgs;

pub fn cmd_build(args: &ProjectArgs, json: bool) -> Result<()> {
    let mut project = Project::load(args)?;

    let use_case = BuildUseCase::new(Arc::new(ConcatBundler::new())).with_events(event_sink(json));
    let result = use_case.build(&mut project.context, &project.options);

    // Let the background module path write land before the process exits
    project.module_paths.flush();

    let dest = result?;
    if !json {
        println!("Bundled {} module(s) into {}", project.context.module_files.len(), dest.display());
    }
    Ok(())
}

use std::{env, path::PathBuf};

use anyhow::{Context, Result, bail};

use super::super::args::{MergeArgs, MergeCommand};
use super::{CommandResult, CommandSummary, MergeSummary, TargetSummary};
use crate::{
    config::{CONFIG_FILE_NAME, ConfigLoadResult, load_config},
    core::index_file,
    ts_editor::TsEditor,
};

/// Source and target paths after CLI flags are layered over the config file.
#[derive(Debug, PartialEq, Eq)]
struct MergePlan {
    source: PathBuf,
    targets: Vec<PathBuf>,
}

impl MergePlan {
    fn resolve(args: &MergeArgs, loaded: &ConfigLoadResult) -> Result<Self> {
        let Some(source) = args.source.clone().or_else(|| loaded.source()) else {
            bail!(
                "No source file given. Pass --source or set \"source\" in {}",
                CONFIG_FILE_NAME
            );
        };

        let targets = if args.targets.is_empty() {
            loaded.targets()
        } else {
            args.targets.clone()
        };
        if targets.is_empty() {
            bail!(
                "No target files given. Pass --target or set \"targets\" in {}",
                CONFIG_FILE_NAME
            );
        }

        Ok(Self { source, targets })
    }
}

pub fn merge(cmd: MergeCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let loaded = load_config(&cwd)?;
    let plan = MergePlan::resolve(args, &loaded)?;

    let index = index_file(&plan.source)?;

    // Read every target before writing any, so a bad path aborts cleanly.
    let mut editors = plan
        .targets
        .iter()
        .map(|path| TsEditor::open(path))
        .collect::<Result<Vec<_>>>()?;

    let mut targets = Vec::with_capacity(editors.len());
    for editor in &mut editors {
        let report = editor.merge(&index);
        if !args.dry_run {
            editor.save()?;
        }
        targets.push(TargetSummary {
            path: editor.path().to_path_buf(),
            report,
        });
    }

    Ok(CommandResult {
        summary: CommandSummary::Merge(MergeSummary {
            source: plan.source,
            exact_keys: index.exact.len(),
            relaxed_keys: index.relaxed.len(),
            source_skipped: index.skipped,
            targets,
            is_dry_run: args.dry_run,
        }),
        error_count: 0,
        exit_on_errors: true,
    })
}

use crate::errors::Result;
use crate::git::GitCli;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStatus {
    Merged,
    NotMerged,
}

/// One row of the report, in the order branches were enumerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub branch: String,
    pub status: MergeStatus,
}

/// Decide whether `branch` has been merged into `integration`.
///
/// The tip commit of `branch` is resolved and the integration branch is looked
/// for among the branches containing that commit. The match is on the whole
/// branch name: either exact, or ending at a `/` boundary so that `master`
/// matches `remotes/origin/master`. A branch that merely shares a prefix
/// (`feature` vs `feature-2`) never matches.
pub fn is_merged(git: &dyn GitCli, branch: &str, integration: &str) -> Result<MergeStatus> {
    let commit = git.resolve_commit(branch)?;
    let containing = git.branches_containing(&commit)?;

    let pattern = Regex::new(&format!("^(?:.*/)?{}$", regex::escape(integration)))?;

    let merged = containing.iter().any(|name| pattern.is_match(name));
    log::debug!("{} ({}) merged into {}: {}", branch, commit, integration, merged);

    if merged {
        Ok(MergeStatus::Merged)
    } else {
        Ok(MergeStatus::NotMerged)
    }
}

/// Run the merge check for every branch, preserving enumeration order.
///
/// Any single failure aborts the whole run; no partial results are returned.
pub fn check_branches(
    git: &dyn GitCli,
    branches: &[String],
    integration: &str,
) -> Result<Vec<CheckResult>> {
    branches
        .iter()
        .map(|branch| {
            is_merged(git, branch, integration).map(|status| CheckResult {
                branch: branch.clone(),
                status,
            })
        })
        .collect()
}

use crate::errors::Result;
use crate::git::GitCli;

/// Resolve the set of branches to check.
///
/// An explicit list from the command line wins outright; the remote/local
/// flags are only consulted when no branches were named. With neither flag
/// set the default is everything, remotes first, in enumeration order.
pub fn select_branches(
    git: &dyn GitCli,
    explicit: &[String],
    check_remote: bool,
    check_local: bool,
) -> Result<Vec<String>> {
    if !explicit.is_empty() {
        return Ok(explicit.to_vec());
    }

    let (remote, local) = if !check_remote && !check_local {
        (true, true)
    } else {
        (check_remote, check_local)
    };

    let mut branches = Vec::new();
    if remote {
        branches.extend(git.list_remote_branches()?);
    }
    if local {
        branches.extend(git.list_local_branches()?);
    }
    Ok(branches)
}

/// The integration branch defaults to whatever is currently checked out.
pub fn resolve_integration(git: &dyn GitCli, requested: Option<String>) -> Result<String> {
    match requested {
        Some(branch) => Ok(branch),
        None => git.current_branch(),
    }
}

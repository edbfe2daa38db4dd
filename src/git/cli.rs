use crate::errors::{MergedError, Result};
use std::collections::HashMap;
use std::process::Command;

/// Queries against the local git repository.
///
/// Every method maps to a single git invocation. Implementations other than
/// [`GitCliImpl`] exist so the selection and merge logic can be tested without
/// spawning subprocesses.
pub trait GitCli {
    /// Short hash of the most recent commit reachable from `reference`.
    fn resolve_commit(&self, reference: &str) -> Result<String>;
    /// All branches (local and remote) whose history contains `commit`.
    fn branches_containing(&self, commit: &str) -> Result<Vec<String>>;
    /// Remote branches, without the symbolic `HEAD ->` pointer entry.
    fn list_remote_branches(&self) -> Result<Vec<String>>;
    /// Local branches, with the current-branch marker stripped.
    fn list_local_branches(&self) -> Result<Vec<String>>;
    /// Name of the currently checked-out branch.
    fn current_branch(&self) -> Result<String>;
}

pub struct GitCliImpl;

impl GitCliImpl {
    pub fn new() -> Self {
        Self
    }

    fn run_git(&self, args: &[&str]) -> Result<String> {
        log::debug!("Running: git {}", args.join(" "));

        let output = Command::new("git")
            .args(args)
            .output()
            .map_err(|e| MergedError::GitNotRunnable(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(MergedError::Git(stderr.trim_end().to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

/// Parse `git branch` style output into branch names.
///
/// Strips the `*` current-branch marker and surrounding whitespace, and drops
/// the symbolic `HEAD -> ...` pointer entry that `git branch -r`/`-a` emit.
fn parse_branch_lines(output: &str) -> Vec<String> {
    output
        .lines()
        .map(|line| line.trim_start_matches('*').trim())
        .filter(|line| !line.is_empty() && !line.contains("->"))
        .map(|line| line.to_string())
        .collect()
}

impl GitCli for GitCliImpl {
    fn resolve_commit(&self, reference: &str) -> Result<String> {
        let output = self.run_git(&["log", "-1", "--format=%h", reference])?;
        Ok(output.trim().to_string())
    }

    fn branches_containing(&self, commit: &str) -> Result<Vec<String>> {
        let output = self.run_git(&["branch", "-a", "--contains", commit])?;
        Ok(parse_branch_lines(&output))
    }

    fn list_remote_branches(&self) -> Result<Vec<String>> {
        let output = self.run_git(&["branch", "-r"])?;
        Ok(parse_branch_lines(&output))
    }

    fn list_local_branches(&self) -> Result<Vec<String>> {
        let output = self.run_git(&["branch"])?;
        Ok(parse_branch_lines(&output))
    }

    fn current_branch(&self) -> Result<String> {
        let output = self.run_git(&["rev-parse", "--abbrev-ref", "HEAD"])?;
        Ok(output.trim().to_string())
    }
}

pub struct MockGitCli {
    pub commits: HashMap<String, String>,
    pub containing: HashMap<String, Vec<String>>,
    pub remote_branches: Vec<String>,
    pub local_branches: Vec<String>,
    pub current: String,
}

impl MockGitCli {
    pub fn new() -> Self {
        Self {
            commits: HashMap::new(),
            containing: HashMap::new(),
            remote_branches: Vec::new(),
            local_branches: Vec::new(),
            current: "master".to_string(),
        }
    }

    /// Register a branch whose tip resolves to `commit`, contained in `branches`.
    pub fn with_branch(mut self, name: &str, commit: &str, branches: Vec<&str>) -> Self {
        self.commits.insert(name.to_string(), commit.to_string());
        self.containing.insert(
            commit.to_string(),
            branches.into_iter().map(|b| b.to_string()).collect(),
        );
        self
    }

    pub fn with_remote_branches(mut self, branches: Vec<&str>) -> Self {
        self.remote_branches = branches.into_iter().map(|b| b.to_string()).collect();
        self
    }

    pub fn with_local_branches(mut self, branches: Vec<&str>) -> Self {
        self.local_branches = branches.into_iter().map(|b| b.to_string()).collect();
        self
    }

    pub fn with_current(mut self, branch: &str) -> Self {
        self.current = branch.to_string();
        self
    }
}

impl GitCli for MockGitCli {
    fn resolve_commit(&self, reference: &str) -> Result<String> {
        self.commits
            .get(reference)
            .cloned()
            .ok_or_else(|| MergedError::Git(format!("unknown revision '{}'", reference)))
    }

    fn branches_containing(&self, commit: &str) -> Result<Vec<String>> {
        Ok(self.containing.get(commit).cloned().unwrap_or_default())
    }

    fn list_remote_branches(&self) -> Result<Vec<String>> {
        Ok(self.remote_branches.clone())
    }

    fn list_local_branches(&self) -> Result<Vec<String>> {
        Ok(self.local_branches.clone())
    }

    fn current_branch(&self) -> Result<String> {
        Ok(self.current.clone())
    }
}

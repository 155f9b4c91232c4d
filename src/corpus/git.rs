//! Git vocabulary: subcommands, long flags, and common short flags.

use crate::corpus::ToolCorpus;
use crate::short_flag;

/// Create the git corpus.
#[must_use]
pub fn create_corpora() -> Vec<ToolCorpus> {
    vec![ToolCorpus {
        root: "git",
        subcommands: &[
            "status", "add", "commit", "push", "pull", "clone", "checkout", "switch", "branch",
            "merge", "rebase", "fetch", "log", "diff", "stash", "reset", "restore", "revert",
            "remote", "tag", "init", "show", "blame", "bisect", "cherry-pick", "clean", "config",
            "describe", "grep", "mv", "rm", "reflog", "shortlog", "submodule", "worktree", "am",
            "apply", "archive", "format-patch", "gc", "ls-files", "rev-parse",
        ],
        long_flags: &[
            "all",
            "amend",
            "cached",
            "continue",
            "abort",
            "force",
            "force-with-lease",
            "global",
            "hard",
            "help",
            "interactive",
            "message",
            "no-edit",
            "no-verify",
            "oneline",
            "patch",
            "quiet",
            "rebase",
            "set-upstream",
            "soft",
            "staged",
            "stat",
            "verbose",
            "version",
            "dry-run",
        ],
        short_flags: &[
            short_flag!('a', "--all", "stage all tracked changes"),
            short_flag!('b', "--branch", "show branch information"),
            short_flag!('m', "--message", "use the given commit message"),
            short_flag!('p', "--patch", "interactively select hunks"),
            short_flag!('v', "--verbose", "verbose output"),
            short_flag!('d', "--delete", "delete a branch"),
            short_flag!('f', "--force", "force the operation"),
            short_flag!('u', "--set-upstream", "track the remote branch"),
            short_flag!('s', "--short", "short-format output"),
        ],
    }]
}

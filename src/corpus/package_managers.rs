//! Package-manager vocabulary: npm, cargo, pip.

use crate::corpus::ToolCorpus;
use crate::short_flag;

/// Create the package-manager corpora.
#[must_use]
pub fn create_corpora() -> Vec<ToolCorpus> {
    vec![npm(), cargo(), pip()]
}

fn npm() -> ToolCorpus {
    ToolCorpus {
        root: "npm",
        subcommands: &[
            "install", "uninstall", "run", "start", "stop", "test", "init", "publish", "update",
            "outdated", "audit", "ci", "cache", "config", "dedupe", "doctor", "exec", "fund",
            "link", "list", "login", "logout", "pack", "ping", "prune", "rebuild", "restart",
            "root", "search", "version", "view",
        ],
        long_flags: &[
            "global",
            "save",
            "save-dev",
            "save-exact",
            "legacy-peer-deps",
            "production",
            "workspace",
            "version",
            "help",
            "force",
            "dry-run",
        ],
        short_flags: &[
            short_flag!('g', "--global", "operate in global mode"),
            short_flag!('D', "--save-dev", "save to devDependencies"),
            short_flag!('S', "--save", "save to dependencies"),
            short_flag!('E', "--save-exact", "pin the exact version"),
            short_flag!('y', "--yes", "accept all prompts"),
        ],
    }
}

fn cargo() -> ToolCorpus {
    ToolCorpus {
        root: "cargo",
        subcommands: &[
            "build", "run", "test", "check", "clippy", "fmt", "doc", "new", "init", "add",
            "remove", "update", "bench", "clean", "fetch", "fix", "install", "uninstall",
            "metadata", "publish", "search", "tree", "vendor",
        ],
        long_flags: &[
            "all-features",
            "features",
            "jobs",
            "lib",
            "locked",
            "manifest-path",
            "no-default-features",
            "offline",
            "package",
            "quiet",
            "release",
            "target",
            "verbose",
            "workspace",
            "help",
            "version",
        ],
        short_flags: &[
            short_flag!('p', "--package", "select a workspace package"),
            short_flag!('q', "--quiet", "no output printed to stdout"),
            short_flag!('r', "--release", "build with optimizations"),
            short_flag!('v', "--verbose", "verbose output"),
            short_flag!('F', "--features", "enable named features"),
            short_flag!('j', "--jobs", "number of parallel jobs"),
        ],
    }
}

fn pip() -> ToolCorpus {
    ToolCorpus {
        root: "pip",
        subcommands: &[
            "install", "uninstall", "freeze", "list", "show", "search", "download", "wheel",
            "check", "config", "hash",
        ],
        long_flags: &[
            "editable",
            "index-url",
            "no-cache-dir",
            "no-deps",
            "quiet",
            "requirement",
            "upgrade",
            "user",
            "version",
            "help",
        ],
        short_flags: &[
            short_flag!('e', "--editable", "install in editable mode"),
            short_flag!('r', "--requirement", "install from a requirements file"),
            short_flag!('U', "--upgrade", "upgrade to the newest version"),
            short_flag!('q', "--quiet", "less output"),
            short_flag!('v', "--verbose", "more output"),
        ],
    }
}

//! Docker vocabulary: subcommands, long flags, and run/exec short flags.

use crate::corpus::ToolCorpus;
use crate::short_flag;

/// Create the docker corpus.
#[must_use]
pub fn create_corpora() -> Vec<ToolCorpus> {
    vec![ToolCorpus {
        root: "docker",
        subcommands: &[
            "run", "ps", "build", "pull", "push", "exec", "images", "stop", "start", "restart",
            "rm", "rmi", "logs", "inspect", "compose", "container", "image", "network", "volume",
            "system", "attach", "commit", "cp", "create", "info", "kill", "load", "login",
            "logout", "pause", "unpause", "save", "stats", "tag", "top", "version",
        ],
        long_flags: &[
            "all",
            "build",
            "detach",
            "env",
            "file",
            "follow",
            "force",
            "help",
            "interactive",
            "name",
            "network",
            "no-cache",
            "publish",
            "publish-all",
            "quiet",
            "rm",
            "tag",
            "tty",
            "volume",
            "version",
            "workdir",
        ],
        short_flags: &[
            short_flag!('i', "--interactive", "keep STDIN open"),
            short_flag!('t', "--tty", "allocate a pseudo-TTY"),
            short_flag!('d', "--detach", "run container in background"),
            short_flag!('p', "--publish", "publish a container port"),
            short_flag!('P', "--publish-all", "publish all exposed ports"),
            short_flag!('v', "--volume", "bind mount a volume"),
            short_flag!('e', "--env", "set an environment variable"),
            short_flag!('f', "--force", "force the operation"),
            short_flag!('a', "--all", "include stopped containers"),
            short_flag!('q', "--quiet", "only display IDs"),
            short_flag!('w', "--workdir", "working directory inside the container"),
        ],
    }]
}

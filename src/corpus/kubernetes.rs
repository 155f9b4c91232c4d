//! kubectl vocabulary.

use crate::corpus::ToolCorpus;
use crate::short_flag;

/// Create the kubectl corpus.
#[must_use]
pub fn create_corpora() -> Vec<ToolCorpus> {
    vec![ToolCorpus {
        root: "kubectl",
        subcommands: &[
            "get", "describe", "apply", "delete", "create", "logs", "exec", "run", "expose",
            "scale", "rollout", "port-forward", "proxy", "edit", "label", "annotate", "config",
            "cordon", "uncordon", "drain", "taint", "top", "explain", "diff", "patch", "attach",
            "cp", "autoscale", "set", "wait", "version",
        ],
        long_flags: &[
            "all-namespaces",
            "context",
            "dry-run",
            "field-selector",
            "filename",
            "follow",
            "force",
            "help",
            "kubeconfig",
            "namespace",
            "output",
            "replicas",
            "selector",
            "watch",
        ],
        short_flags: &[
            short_flag!('n', "--namespace", "target namespace"),
            short_flag!('o', "--output", "output format"),
            short_flag!('f', "--filename", "manifest file or directory"),
            short_flag!('l', "--selector", "label selector"),
            short_flag!('w', "--watch", "watch for changes"),
            short_flag!('A', "--all-namespaces", "across all namespaces"),
        ],
    }]
}

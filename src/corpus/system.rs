//! Unix tool vocabulary: tar, grep, curl, ls, rm.
//!
//! These tools have no subcommands; their corpora exist for long-flag typo
//! correction and short-flag cluster decoding.

use crate::corpus::ToolCorpus;
use crate::short_flag;

/// Create the system-tool corpora.
#[must_use]
pub fn create_corpora() -> Vec<ToolCorpus> {
    vec![tar(), grep(), curl(), ls(), rm()]
}

fn tar() -> ToolCorpus {
    ToolCorpus {
        root: "tar",
        subcommands: &[],
        long_flags: &[
            "create",
            "extract",
            "file",
            "gzip",
            "bzip2",
            "list",
            "verbose",
            "directory",
            "exclude",
            "help",
        ],
        short_flags: &[
            short_flag!('c', "--create", "create a new archive"),
            short_flag!('x', "--extract", "extract files from an archive"),
            short_flag!('f', "--file", "archive file name"),
            short_flag!('v', "--verbose", "list files processed"),
            short_flag!('z', "--gzip", "filter through gzip"),
            short_flag!('j', "--bzip2", "filter through bzip2"),
            short_flag!('t', "--list", "list archive contents"),
            short_flag!('C', "--directory", "change to directory first"),
        ],
    }
}

fn grep() -> ToolCorpus {
    ToolCorpus {
        root: "grep",
        subcommands: &[],
        long_flags: &[
            "ignore-case",
            "recursive",
            "line-number",
            "invert-match",
            "files-with-matches",
            "count",
            "extended-regexp",
            "fixed-strings",
            "word-regexp",
            "color",
            "help",
        ],
        short_flags: &[
            short_flag!('i', "--ignore-case", "case-insensitive matching"),
            short_flag!('r', "--recursive", "recurse into directories"),
            short_flag!('n', "--line-number", "prefix matches with line numbers"),
            short_flag!('v', "--invert-match", "select non-matching lines"),
            short_flag!('l', "--files-with-matches", "print only file names"),
            short_flag!('c', "--count", "print match counts"),
            short_flag!('E', "--extended-regexp", "extended regular expressions"),
            short_flag!('F', "--fixed-strings", "match literal strings"),
            short_flag!('w', "--word-regexp", "match whole words"),
        ],
    }
}

fn curl() -> ToolCorpus {
    ToolCorpus {
        root: "curl",
        subcommands: &[],
        long_flags: &[
            "location",
            "output",
            "remote-name",
            "silent",
            "header",
            "request",
            "data",
            "head",
            "insecure",
            "verbose",
            "user",
            "fail",
            "help",
        ],
        short_flags: &[
            short_flag!('L', "--location", "follow redirects"),
            short_flag!('o', "--output", "write to file"),
            short_flag!('O', "--remote-name", "write to remote file name"),
            short_flag!('s', "--silent", "silent mode"),
            short_flag!('H', "--header", "pass a custom header"),
            short_flag!('X', "--request", "request method"),
            short_flag!('d', "--data", "HTTP POST data"),
            short_flag!('I', "--head", "fetch headers only"),
            short_flag!('k', "--insecure", "allow insecure TLS"),
            short_flag!('v', "--verbose", "verbose transfer log"),
            short_flag!('u', "--user", "server credentials"),
            short_flag!('f', "--fail", "fail silently on HTTP errors"),
        ],
    }
}

fn ls() -> ToolCorpus {
    ToolCorpus {
        root: "ls",
        subcommands: &[],
        long_flags: &[
            "all",
            "almost-all",
            "human-readable",
            "recursive",
            "reverse",
            "directory",
            "inode",
            "size",
            "help",
        ],
        short_flags: &[
            short_flag!('a', "--all", "include dotfiles"),
            short_flag!('A', "--almost-all", "include dotfiles except . and .."),
            short_flag!('h', "--human-readable", "sizes in human units"),
            short_flag!('R', "--recursive", "list subdirectories recursively"),
            short_flag!('r', "--reverse", "reverse sort order"),
            short_flag!('d', "--directory", "list directories themselves"),
            short_flag!('i', "--inode", "print inode numbers"),
        ],
    }
}

fn rm() -> ToolCorpus {
    ToolCorpus {
        root: "rm",
        subcommands: &[],
        long_flags: &["recursive", "force", "interactive", "verbose", "dir", "help"],
        short_flags: &[
            short_flag!('r', "--recursive", "remove directories recursively"),
            short_flag!('f', "--force", "never prompt, ignore missing files"),
            short_flag!('i', "--interactive", "prompt before every removal"),
            short_flag!('v', "--verbose", "explain what is being done"),
            short_flag!('d', "--dir", "remove empty directories"),
        ],
    }
}

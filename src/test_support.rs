use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// First version of the Go source committed by the test repos.
pub(crate) const MAIN_GO_V1: &str = "package main

import \"fmt\"

func Foo(x int) int {
\ty := x * 2
\treturn y
}

func Bar() {
\tfmt.Println(\"bar\")
}
";

/// Second version: only the body of `Foo` changes and a call is added.
pub(crate) const MAIN_GO_V2: &str = "package main

import \"fmt\"

func Foo(x int) int {
\ty := x * 3
\tlogValue(y)
\treturn y
}

func Bar() {
\tfmt.Println(\"bar\")
}
";

pub(crate) const ORIGIN_URL: &str = "https://github.com/example/project.git";

/// Repo with two commits on `main`; HEAD edits the body of `Foo` in main.go.
pub(crate) fn create_test_repo() -> TempDir {
    create_repo(CreateRepoOptions {
        add_origin_remote: false,
    })
}

/// Same as [`create_test_repo`] with `origin` pointing at [`ORIGIN_URL`].
pub(crate) fn create_test_repo_with_remote() -> TempDir {
    create_repo(CreateRepoOptions {
        add_origin_remote: true,
    })
}

struct CreateRepoOptions {
    add_origin_remote: bool,
}

fn create_repo(opts: CreateRepoOptions) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    // Deterministic default branch name across environments.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);

    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "commit.gpgsign", "false"]);

    std::fs::write(path.join("main.go"), MAIN_GO_V1).unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);

    std::fs::write(path.join("main.go"), MAIN_GO_V2).unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Change Foo"]);

    if opts.add_origin_remote {
        git(path, &["remote", "add", "origin", ORIGIN_URL]);
    }

    temp_dir
}

pub(crate) fn git(repo_dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }
}

/// Stand-in for universal-ctags in JSON mode: tags every `func Name` line.
#[cfg(unix)]
const FAKE_CTAGS: &str = r##"#!/bin/sh
while [ "$#" -gt 0 ]; do
  case "$1" in
    -) shift; break ;;
    *) shift ;;
  esac
done
for f in "$@"; do
  awk -v f="$f" '/^func [A-Za-z_]/ { name = $2; sub(/\(.*/, "", name); printf "{\"_type\":\"tag\",\"name\":\"%s\",\"path\":\"%s\",\"line\":%d,\"kind\":\"function\"}\n", name, f, NR }' "$f"
done
"##;

/// Write an executable fake ctags into `dir` and return its path.
#[cfg(unix)]
pub(crate) fn install_fake_ctags(dir: &Path) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("fake-ctags");
    std::fs::write(&script, FAKE_CTAGS).unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    script
}

/// Commit a version of main.go with every line pushed down by `lines`.
pub(crate) fn commit_padded_main_go(repo_dir: &Path, lines: usize) {
    let padded = format!("{}{}", "// padding\n".repeat(lines), MAIN_GO_V2);
    std::fs::write(repo_dir.join("main.go"), padded).unwrap();
    git(repo_dir, &["commit", "-am", "Pad main.go"]);
}

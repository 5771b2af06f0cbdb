use crate::common::file::{FileSpec, write_file};
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn workspace_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn file_a() -> String {
    r#"fn main() {
    let s = String::new();
    std::io::stdin().read_line(&mut s).unwrap();
    for i in 0..1000000000 {
        println!("{}",  s);
    }

    println!("Done");
}
"#
    .to_string()
}

#[fixture]
pub fn file_b() -> String {
    r#"fn main() {
    let s = String::new();
    std::io::stdin().read_line(&mut s).unwrap();

    println!("Done");
}
"#
    .to_string()
}

/// `old.rs` holding [`file_a`] and `new.rs` holding [`file_b`].
#[fixture]
pub fn rust_revisions_dir(workspace_dir: TempDir, file_a: String, file_b: String) -> TempDir {
    write_file(FileSpec::new(workspace_dir.path().join("old.rs"), file_a));
    write_file(FileSpec::new(workspace_dir.path().join("new.rs"), file_b));

    workspace_dir
}

pub fn run_sidediff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("sidediff").expect("Failed to find sidediff binary");
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

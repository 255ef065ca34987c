use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile;

type STDRESULT = Result<(), Box<dyn std::error::Error>>;

#[test]
fn round_trip_via_cli() -> STDRESULT {
    let temp_dir = tempfile::tempdir()?;
    let in_path = temp_dir.path().join("sample.txt");
    std::fs::write(&in_path, b"I am Sam. Sam I am. I do not like this Sam I am.\n")?;
    let archive_path = temp_dir.path().join("sample.txt.lzip");
    let out_path = temp_dir.path().join("restored.txt");

    Command::cargo_bin("lzip")?
        .arg("c")
        .arg(&in_path)
        .arg(&archive_path)
        .assert()
        .success();

    Command::cargo_bin("lzip")?
        .arg("d")
        .arg(&archive_path)
        .arg(&out_path)
        .assert()
        .success();

    assert_eq!(std::fs::read(&in_path)?, std::fs::read(&out_path)?);
    Ok(())
}

#[test]
fn default_output_paths_are_derived() -> STDRESULT {
    let temp_dir = tempfile::tempdir()?;
    let in_path = temp_dir.path().join("notes.txt");
    std::fs::write(&in_path, b"AAAB")?;

    Command::cargo_bin("lzip")?
        .current_dir(temp_dir.path())
        .arg("c")
        .arg("notes.txt")
        .assert()
        .success();
    let archive_path = temp_dir.path().join("notes.txt.lzip");
    assert!(archive_path.exists());

    Command::cargo_bin("lzip")?
        .current_dir(temp_dir.path())
        .arg("d")
        .arg("notes.txt.lzip")
        .assert()
        .success();
    assert_eq!(std::fs::read(temp_dir.path().join("notes.txt"))?, b"AAAB");
    Ok(())
}

#[test]
fn overwrite_declined_exits_zero_without_clobbering() -> STDRESULT {
    let temp_dir = tempfile::tempdir()?;
    let in_path = temp_dir.path().join("sample.txt");
    std::fs::write(&in_path, b"hello world")?;
    let archive_path = temp_dir.path().join("sample.txt.lzip");
    std::fs::write(&archive_path, b"not a real archive")?;

    let mut child = Command::cargo_bin("lzip")?
        .arg("c")
        .arg(&in_path)
        .arg(&archive_path)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"n\n")?;
    let status = child.wait()?;
    assert!(status.success());
    assert_eq!(std::fs::read(&archive_path)?, b"not a real archive");
    Ok(())
}

#[test]
fn overwrite_confirmed_replaces_file() -> STDRESULT {
    let temp_dir = tempfile::tempdir()?;
    let in_path = temp_dir.path().join("sample.txt");
    std::fs::write(&in_path, b"hello world")?;
    let archive_path = temp_dir.path().join("sample.txt.lzip");
    std::fs::write(&archive_path, b"stale")?;

    let mut child = Command::cargo_bin("lzip")?
        .arg("c")
        .arg(&in_path)
        .arg(&archive_path)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    child.stdin.as_mut().unwrap().write_all(b"y\n")?;
    let status = child.wait()?;
    assert!(status.success());
    assert_ne!(std::fs::read(&archive_path)?, b"stale");
    Ok(())
}

#[test]
fn corrupt_archive_exits_nonzero() -> STDRESULT {
    let temp_dir = tempfile::tempdir()?;
    let archive_path = temp_dir.path().join("bogus.lzip");
    std::fs::write(&archive_path, b"not an lzip archive at all")?;
    let out_path = temp_dir.path().join("bogus");

    Command::cargo_bin("lzip")?
        .arg("d")
        .arg(&archive_path)
        .arg(&out_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not an lzip archive"));
    Ok(())
}

#[test]
fn version_flag() -> STDRESULT {
    Command::cargo_bin("lzip")?
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains("lzip"));
    Ok(())
}

#[test]
fn help_flag() -> STDRESULT {
    Command::cargo_bin("lzip")?
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("compress"));
    Ok(())
}

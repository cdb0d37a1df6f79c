use assert_cmd::Command;
use predicates::prelude::*;

fn wrapper() -> Command {
    Command::cargo_bin("saps_wrapper").expect("binary not found")
}

#[test]
fn test_too_few_arguments_is_usage_error() {
    wrapper()
        .args(["inst.cnf", "", "5", "1000"])
        .assert()
        .code(255)
        .stdout(predicate::str::contains("is a wrapper for the SAPS algorithm"))
        .stdout(predicate::str::contains("Calling:").not());
}

#[test]
fn test_no_arguments_is_usage_error() {
    wrapper().assert().code(255);
}

#[test]
fn test_help_exits_cleanly() {
    wrapper()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cutoff time"));
}

#[cfg(unix)]
mod unix {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;
    use tempfile::tempdir;

    fn install_fake_solver(dir: &Path, body: &str) {
        let path = dir.join("ubcsat");
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn test_reports_solver_statistics() {
        let solver_dir = tempdir().unwrap();
        let work_dir = tempdir().unwrap();
        install_fake_solver(
            solver_dir.path(),
            "echo \"SuccessfulRuns = 0\"\n\
             echo \"CPUTime_Mean = 4.2\"\n\
             echo \"Steps_Mean = 100\"\n\
             echo \"BestSolution_Mean = 7\"",
        );

        wrapper()
            .current_dir(work_dir.path())
            .env("SAPS_SOLVER_DIR", solver_dir.path())
            .args(["inst.cnf", "", "5", "1000", "42", "-alpha", "1.3"])
            .assert()
            .success()
            .stdout(predicate::str::contains("-alg saps -alpha 1.3 -inst inst.cnf"))
            .stdout(predicate::str::contains(
                "Result of algorithm run: TIMEOUT, 4.2, 100, 7, 42",
            ));

        assert_eq!(fs::read_dir(work_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_wrapper_flags_after_seed_reach_solver() {
        let solver_dir = tempdir().unwrap();
        let work_dir = tempdir().unwrap();
        install_fake_solver(solver_dir.path(), "echo \"SuccessfulRuns = 1\"");

        wrapper()
            .current_dir(work_dir.path())
            .env("SAPS_SOLVER_DIR", solver_dir.path())
            .args(["inst.cnf", "", "5", "1000", "42", "--version", "-alpha", "1.2"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "-alg saps --version -alpha 1.2 -inst inst.cnf",
            ))
            .stdout(predicate::str::contains(
                "Result of algorithm run: SUCCESS, 5.0, 0, 0, 42",
            ))
            .stdout(predicate::str::contains("saps_wrapper 0.1.0").not());
    }

    #[test]
    fn test_target_quality_is_forwarded() {
        let solver_dir = tempdir().unwrap();
        let work_dir = tempdir().unwrap();
        // Arguments go to stderr, only the success label reaches the output file.
        install_fake_solver(
            solver_dir.path(),
            "echo \"args: $*\" >&2\necho \"SuccessfulRuns = 2\"",
        );

        wrapper()
            .current_dir(work_dir.path())
            .env("SAPS_SOLVER_DIR", solver_dir.path())
            .args(["inst.cnf", "3 more", "1.5", "50", "7"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "-cutoff 50 -timeout 1.5 -target 3 -seed 7 -r stats stdout default,best",
            ))
            .stdout(predicate::str::contains(
                "Result of algorithm run: SUCCESS, 1.5, 0, 0, 7",
            ));
    }

    #[test]
    fn test_missing_solver_reports_crash() {
        let solver_dir = tempdir().unwrap();
        let work_dir = tempdir().unwrap();

        wrapper()
            .current_dir(work_dir.path())
            .env("SAPS_SOLVER_DIR", solver_dir.path())
            .args(["inst.cnf", "", "5", "1000", "42"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains(
                "Result of algorithm run: CRASHED, 5.0, 0, 0, 42",
            ))
            .stderr(predicate::str::contains("Failed to launch solver"));

        assert_eq!(fs::read_dir(work_dir.path()).unwrap().count(), 0);
    }
}

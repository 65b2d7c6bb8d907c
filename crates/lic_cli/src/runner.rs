//! Input-record walking and per-record evaluation.
//!
//! The core is invoked as a pure function once per input file. A failed
//! record is reported and counted but does not stop the walk; any failure
//! makes the whole run exit non-zero, and no partial output record is
//! written for a failed input.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use lic_core::{Decision, Launch};

pub fn run(input: &Path, output_dir: Option<&Path>) -> Result<()> {
    if input.is_dir() {
        run_directory(input, output_dir)
    } else {
        let launch = run_one(input, output_dir)?;
        println!("{launch}");
        Ok(())
    }
}

fn run_directory(dir: &Path, output_dir: Option<&Path>) -> Result<()> {
    let mut inputs: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("reading input directory {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    inputs.sort();

    let mut failures = 0usize;
    for path in &inputs {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match run_one(path, output_dir) {
            Ok(launch) => println!("{name} {launch}"),
            Err(err) => {
                eprintln!("{name}: {err:#}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{failures} of {} input record(s) failed", inputs.len());
    }
    Ok(())
}

/// Evaluate one input record, optionally persisting the output record under
/// the input's file name.
fn run_one(path: &Path, output_dir: Option<&Path>) -> Result<Launch> {
    let record = fs::read_to_string(path)
        .with_context(|| format!("reading input record {}", path.display()))?;
    let output = lic_core::decide_json(&record)
        .with_context(|| format!("evaluating {}", path.display()))?;

    if let Some(dir) = output_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
        let target = dir.join(path.file_name().unwrap_or_default());
        fs::write(&target, &output)
            .with_context(|| format!("writing output record {}", target.display()))?;
    }

    let decision: Decision = serde_json::from_str(&output)?;
    Ok(decision.launch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn sample_record(length1: f64) -> String {
        // All connectors NOT-USED (legacy tag "ORR"), nothing enabled:
        // always decides YES when the record validates.
        let row = vec!["ORR"; lic_core::NUM_RULES];
        let lcm: serde_json::Map<String, serde_json::Value> = (0..lic_core::NUM_RULES)
            .map(|i| (i.to_string(), json!(row)))
            .collect();
        json!({
            "NUMPOINTS": 2,
            "POINTS": [[0.0, 0.0], [0.0, 5.0]],
            "LCM": lcm,
            "PUV": vec![false; lic_core::NUM_RULES],
            "PARAMETERS": {
                "LENGTH1": length1,
                "EPSILON": 0.5,
                "Q_PTS": 2,
                "QUADS": 2,
                "K_PTS": 1,
                "A_PTS": 1, "B_PTS": 1, "C_PTS": 1, "D_PTS": 1,
                "E_PTS": 1, "F_PTS": 1
            }
        })
        .to_string()
    }

    #[test]
    fn test_run_single_file_writes_output_record() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input1.json");
        fs::write(&input, sample_record(3.0)).unwrap();
        let out = dir.path().join("out");

        run(&input, Some(&out)).unwrap();

        let written = fs::read_to_string(out.join("input1.json")).unwrap();
        let decision: Decision = serde_json::from_str(&written).unwrap();
        assert_eq!(decision.launch, Launch::Yes);
    }

    #[test]
    fn test_run_directory_walks_json_records() {
        let dir = tempdir().unwrap();
        let inputs = dir.path().join("inputs");
        fs::create_dir(&inputs).unwrap();
        fs::write(inputs.join("input1.json"), sample_record(3.0)).unwrap();
        fs::write(inputs.join("input2.json"), sample_record(10.0)).unwrap();
        fs::write(inputs.join("notes.txt"), "ignored").unwrap();
        let out = dir.path().join("out");

        run(&inputs, Some(&out)).unwrap();

        assert!(out.join("input1.json").exists());
        assert!(out.join("input2.json").exists());
        assert!(!out.join("notes.txt").exists());
    }

    #[test]
    fn test_invalid_record_fails_run_without_output() {
        let dir = tempdir().unwrap();
        let inputs = dir.path().join("inputs");
        fs::create_dir(&inputs).unwrap();
        fs::write(inputs.join("input1.json"), sample_record(3.0)).unwrap();
        // NUMPOINTS outside [2, 100].
        let broken = sample_record(3.0).replace("\"NUMPOINTS\":2", "\"NUMPOINTS\":1");
        fs::write(inputs.join("input2.json"), broken).unwrap();
        let out = dir.path().join("out");

        let err = run(&inputs, Some(&out)).unwrap_err();
        assert!(err.to_string().contains("1 of 2"));
        // The valid record still produced its output; the failed one wrote
        // nothing.
        assert!(out.join("input1.json").exists());
        assert!(!out.join("input2.json").exists());
    }
}

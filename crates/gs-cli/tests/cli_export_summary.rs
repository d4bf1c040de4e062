use std::path::PathBuf;
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_gymstat"))
}

fn tmp_path(filename: &str) -> PathBuf {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    let mut p = std::env::temp_dir();
    p.push(format!("gymstat_cli_export_{}_{}_{}", std::process::id(), nanos, filename));
    p
}

fn run(args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to run {:?} {:?}: {}", bin_path(), args, e))
}

fn write_member_csv() -> PathBuf {
    let csv = "\
Age,BMI,Status,MembershipType,Goal,VisitsPerWeek,ClassesPerMonth,PersonalTrainer
30,22.0,Ativo,Mensal,Hipertrofia,3,4,Sim
40,26.5,Inativo,Anual,Perda de Peso,2,6,Nao
50,24.0,Ativo,Mensal,Saude,4,5,Nao
";
    let path = tmp_path("members.csv");
    std::fs::write(&path, csv).unwrap();
    path
}

#[test]
fn summary_reports_metric_cards() {
    let data = write_member_csv();

    let out = run(&["summary", "-i", data.to_string_lossy().as_ref()]);
    assert!(
        out.status.success(),
        "summary failed, stderr={}",
        String::from_utf8_lossy(&out.stderr)
    );

    let v: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout should be valid JSON");
    assert_eq!(v["schema_version"], "gymstat_metrics_v0");
    assert_eq!(v["total_members"], 3);
    assert_eq!(v["active_members"], 2);
    assert!((v["mean_age"].as_f64().unwrap() - 40.0).abs() < 1e-9);

    let _ = std::fs::remove_file(&data);
}

#[test]
fn charts_emits_counts_and_histograms() {
    let data = write_member_csv();

    let out = run(&["charts", "-i", data.to_string_lossy().as_ref()]);
    assert!(
        out.status.success(),
        "charts failed, stderr={}",
        String::from_utf8_lossy(&out.stderr)
    );

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["membership_counts"]["entries"][0]["label"], "Mensal");
    assert_eq!(v["membership_counts"]["entries"][0]["count"], 2);
    assert_eq!(v["goal_counts"]["entries"].as_array().unwrap().len(), 3);
    assert_eq!(v["visits_histogram"]["counts"].as_array().unwrap().len(), 7);
    assert_eq!(v["classes_histogram"]["counts"].as_array().unwrap().len(), 6);

    let _ = std::fs::remove_file(&data);
}

#[test]
fn export_writes_bom_prefixed_csv() {
    let data = write_member_csv();
    let out_dir = tmp_path("export_dir");

    let out = run(&[
        "export",
        "-i",
        data.to_string_lossy().as_ref(),
        "--out-dir",
        out_dir.to_string_lossy().as_ref(),
    ]);
    assert!(
        out.status.success(),
        "export failed, stderr={}",
        String::from_utf8_lossy(&out.stderr)
    );

    let exported = out_dir.join("gym_dataset_export.csv");
    let bytes = std::fs::read(&exported).expect("exported file should exist");
    assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);

    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Age,BMI,Status,MembershipType,Goal,VisitsPerWeek,ClassesPerMonth,PersonalTrainer"
    );
    assert_eq!(lines.count(), 3);

    let _ = std::fs::remove_file(&data);
    let _ = std::fs::remove_dir_all(&out_dir);
}

#[test]
fn version_prints_tool_version() {
    let out = run(&["version"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("gymstat "), "stdout={}", stdout);
}

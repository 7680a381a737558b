use assert_cmd::Command;
use ferritin_test_data::TestFile;
use serde_json::Value;
use std::fs;

fn read_output(path: &std::path::Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn matrix_shape(document: &Value) -> (usize, usize) {
    let rows = document["matrix"].as_array().unwrap();
    (rows.len(), rows[0].as_array().unwrap().len())
}

#[test]
fn test_cli_contacts() {
    let (trajfile, _tmp) = TestFile::complex_traj_01().create_temp().unwrap();
    let output = tempfile::NamedTempFile::new().unwrap();

    let mut cmd = Command::cargo_bin("ferritin-featurizers").unwrap();
    cmd.arg("contacts")
        .arg("--input")
        .arg(&trajfile)
        .arg("--cutoff")
        .arg("4.0")
        .arg("--output")
        .arg(output.path());
    cmd.assert().success();

    let document = read_output(output.path());
    assert_eq!(matrix_shape(&document), (3, 2));
    let features = document["features"].as_array().unwrap();
    assert_eq!(features.len(), 2);
    assert_eq!(features[0]["resname"], "GLY");
    assert_eq!(features[1]["resname"], "SER");
    assert_eq!(features[0]["kind"], "ligand_contact_distance");
    assert_eq!(features[0]["chain"], "A");
}

#[test]
fn test_cli_binary_contacts() {
    let (trajfile, _tmp) = TestFile::complex_traj_01().create_temp().unwrap();
    let output = tempfile::NamedTempFile::new().unwrap();

    let mut cmd = Command::cargo_bin("ferritin-featurizers").unwrap();
    cmd.arg("contacts")
        .arg("--input")
        .arg(&trajfile)
        .arg("--cutoff")
        .arg("4.0")
        .arg("--binary")
        .arg("--output")
        .arg(output.path());
    cmd.assert().success();

    let document = read_output(output.path());
    assert_eq!(
        document["matrix"],
        serde_json::json!([[true, true], [true, true], [false, false]])
    );
    assert_eq!(document["features"][0]["kind"], "ligand_contact_binary");
}

#[test]
fn test_cli_all_residues_ca_scheme() {
    let (trajfile, _tmp) = TestFile::complex_traj_01().create_temp().unwrap();
    let output = tempfile::NamedTempFile::new().unwrap();

    let mut cmd = Command::cargo_bin("ferritin-featurizers").unwrap();
    cmd.arg("contacts")
        .arg("--input")
        .arg(&trajfile)
        .arg("--all-residues")
        .arg("--scheme")
        .arg("ca")
        .arg("--output")
        .arg(output.path());
    cmd.assert().success();

    let document = read_output(output.path());
    assert_eq!(matrix_shape(&document), (3, 6));
    assert_eq!(document["features"][5]["scheme"], "ca");
}

#[test]
fn test_cli_rmsd() {
    let (trajfile, _tmp) = TestFile::complex_traj_01().create_temp().unwrap();
    let output = tempfile::NamedTempFile::new().unwrap();

    let mut cmd = Command::cargo_bin("ferritin-featurizers").unwrap();
    cmd.arg("rmsd")
        .arg("--input")
        .arg(&trajfile)
        .arg("--output")
        .arg(output.path());
    cmd.assert().success();

    let document = read_output(output.path());
    assert_eq!(matrix_shape(&document), (3, 1));
    assert!(document["matrix"][0][0].as_f64().unwrap().abs() < 1e-6);
    assert!(document["matrix"][2][0].as_f64().unwrap() > 0.1);
    assert_eq!(document["features"][0]["reference_frame"], 0);
}

#[test]
fn test_cli_rmsd_multiple_references() {
    let (trajfile, _tmp) = TestFile::complex_traj_01().create_temp().unwrap();
    let (reffile, _reftmp) = TestFile::complex_traj_01().create_temp().unwrap();
    let output = tempfile::NamedTempFile::new().unwrap();

    let mut cmd = Command::cargo_bin("ferritin-featurizers").unwrap();
    cmd.arg("rmsd")
        .arg("--input")
        .arg(&trajfile)
        .arg("--reference")
        .arg(&reffile)
        .arg("--align-by")
        .arg("custom")
        .arg("--align-indices")
        .arg("1,5,9,13,17,21")
        .arg("--calculate-for")
        .arg("all")
        .arg("--output")
        .arg(output.path());
    cmd.assert().success();

    let document = read_output(output.path());
    assert_eq!(matrix_shape(&document), (3, 3));
    for i in 0..3 {
        assert!(document["matrix"][i][i].as_f64().unwrap().abs() < 1e-6);
    }
}

#[test]
fn test_cli_rejects_bad_selection() {
    let (trajfile, _tmp) = TestFile::complex_traj_01().create_temp().unwrap();
    let output = tempfile::NamedTempFile::new().unwrap();

    let mut cmd = Command::cargo_bin("ferritin-featurizers").unwrap();
    cmd.arg("rmsd")
        .arg("--input")
        .arg(&trajfile)
        .arg("--align-by")
        .arg("custom")
        .arg("--align-indices")
        .arg("0,999")
        .arg("--output")
        .arg(output.path());
    let assert = cmd.assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    assert!(stderr.contains("align_by"), "{stderr}");
    assert!(stderr.contains("out of range"), "{stderr}");

    let mut cmd = Command::cargo_bin("ferritin-featurizers").unwrap();
    cmd.arg("contacts")
        .arg("--input")
        .arg(&trajfile)
        .arg("--protein-chain")
        .arg("0")
        .arg("--ligand-chain")
        .arg("0")
        .arg("--output")
        .arg(output.path());
    let assert = cmd.assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    assert!(stderr.contains("ligand_chain"), "{stderr}");
}

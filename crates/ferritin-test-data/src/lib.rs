//! ferritin-test-data
//!
//! A module to provide test files embedded in the crate for use in testing.
//! Example structure files are included in the crate distribution for reference.
//!
//! The test files are represented as `TestFile` objects which package the raw binary data
//! and create temporary files for programs to operate on.
use std::fs;
use tempfile::{Builder, NamedTempFile};

#[derive(Debug)]
/// Test File
///
/// Example usage:
///
/// ```ignore
/// // returns (filepath, _tempfile_handle).
/// // _handle ensures the tempfile remains in scope
/// use ferritin_test_data::TestFile;
/// let (traj_file, _temp) = TestFile::complex_traj_01().create_temp().unwrap();
/// ```
pub struct TestFile {
    filebinary: &'static [u8],
    suffix: &'static str,
}

impl TestFile {
    /// Three-model protein-ligand trajectory.
    ///
    /// Chain A: six backbone-only residues (ALA GLY SER LEU VAL THR; N/CA/C/O), 24 atoms.
    /// Chain B: one `LIG` residue with 5 heavy atoms that drifts away from GLY/SER
    /// over the three models.
    pub fn complex_traj_01() -> Self {
        Self {
            filebinary: include_bytes!("../data/structures/complex_traj.pdb"),
            suffix: "pdb",
        }
    }

    pub fn create_temp(&self) -> std::io::Result<(String, NamedTempFile)> {
        let temp = Builder::new()
            .suffix(&format!(".{}", self.suffix))
            .tempfile()?;

        fs::write(&temp, self.filebinary)?;
        let path = temp.path().to_string_lossy().into_owned();

        Ok((path, temp))
    }
}

use ferritin_featurizers::{
    resolve_chains, AtomSelection, BinaryLigandContactFeaturizer, BindingPocket, ChainRoles,
    Featurizer, LigandContactFeaturizer, LigandRmsdFeaturizer,
};
use ferritin_test_data::TestFile;
use pdbtbx::{ReadOptions, StrictnessLevel};
use ferritin_trajectory::Trajectory;
use std::sync::Arc;

fn load() -> Trajectory {
    let (trajfile, _tmp) = TestFile::complex_traj_01().create_temp().unwrap();
    let (pdb, _) = ReadOptions::default()
        .set_level(StrictnessLevel::Loose)
        .read(trajfile)
        .unwrap();
    Trajectory::try_from(&pdb).unwrap()
}

#[test]
fn test_chain_roles() {
    let traj = load();
    let roles = resolve_chains(traj.topology(), None, None).unwrap();
    assert_eq!(roles, ChainRoles { protein: 0, ligand: 1 });
}

#[test]
fn test_contact_distances() {
    let traj = load();
    let featurizer = LigandContactFeaturizer::builder()
        .topology(Arc::clone(traj.topology()))
        .reference_frame(traj.frames()[0].clone())
        .binding_pocket(BindingPocket::Within(4.0))
        .build()
        .unwrap();
    assert_eq!(featurizer.pocket().residues(), &[1, 2]);

    let expected = [[2.202, 3.467], [2.792, 3.872], [4.444, 4.159]];
    let features = featurizer.partial_transform(&traj).unwrap();
    assert_eq!(features.dim(), (3, 2));
    for (f, row) in expected.iter().enumerate() {
        for (r, &d) in row.iter().enumerate() {
            assert!((features[(f, r)] - d).abs() < 1e-3, "frame {f} residue {r}");
        }
    }

    let descriptors = featurizer.describe_features();
    let names: Vec<_> = descriptors
        .iter()
        .map(|d| d.resname.clone().unwrap())
        .collect();
    assert_eq!(names, ["GLY", "SER"]);
    assert_eq!(descriptors[0].resseq, Some(2));
}

#[test]
fn test_binary_contacts() {
    let traj = load();
    let featurizer = BinaryLigandContactFeaturizer::builder()
        .topology(Arc::clone(traj.topology()))
        .reference_frame(traj.frames()[0].clone())
        .cutoff(4.0)
        .build()
        .unwrap();
    let features = featurizer.transform(&[traj]).unwrap();
    assert_eq!(
        features[0],
        ndarray::array![[true, true], [true, true], [false, false]]
    );
}

#[test]
fn test_ligand_rmsd() {
    let traj = load();
    let featurizer = LigandRmsdFeaturizer::builder()
        .topology(Arc::clone(traj.topology()))
        .reference_frame(traj.frames()[0].clone())
        .build()
        .unwrap();
    assert_eq!(featurizer.calculate_set().len(), 5);

    let features = featurizer.partial_transform(&traj).unwrap();
    assert_eq!(features.dim(), (3, 1));
    assert!(features[(0, 0)].abs() < 1e-9);
    assert!(features[(1, 0)] > 0.0);
    assert!(features[(2, 0)] > 0.0);

    let whole = LigandRmsdFeaturizer::builder()
        .topology(Arc::clone(traj.topology()))
        .reference_frame(traj.frames()[2].clone())
        .align_by(AtomSelection::All)
        .calculate_for(AtomSelection::All)
        .build()
        .unwrap();
    let features = whole.partial_transform(&traj).unwrap();
    assert!(features[(2, 0)].abs() < 1e-9);
}

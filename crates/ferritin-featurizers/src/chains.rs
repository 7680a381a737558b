//! Protein / ligand chain resolution.
//!
//! When the caller does not name the chains, the protein is taken to be the chain
//! with the most `CA` atoms and the ligand the largest remaining chain that has at
//! most [`MAX_LIGAND_ATOMS`] atoms. Ties go to the lowest chain index.
use crate::error::{FeaturizerError, Result};
use ferritin_trajectory::{Chain, Topology};
use log::debug;

/// Chains larger than this are never picked as the ligand.
pub const MAX_LIGAND_ATOMS: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainRoles {
    pub protein: usize,
    pub ligand: usize,
}

fn check_chain(topology: &Topology, field: &'static str, index: usize) -> Result<usize> {
    if index < topology.n_chains() {
        Ok(index)
    } else {
        Err(FeaturizerError::invalid_selection(
            field,
            format!(
                "chain index {index} is out of range for a topology with {} chains",
                topology.n_chains()
            ),
        ))
    }
}

// `max_by_key` keeps the last maximum, so compare on (key, Reverse(index)) instead.
fn best_chain<'a, K, F>(candidates: impl Iterator<Item = &'a Chain>, key: F) -> Option<usize>
where
    K: Ord,
    F: Fn(&Chain) -> K,
{
    candidates
        .map(|chain| (key(chain), std::cmp::Reverse(chain.index())))
        .max()
        .map(|(_, std::cmp::Reverse(index))| index)
}

fn find_protein(topology: &Topology, exclude: Option<usize>) -> Result<usize> {
    best_chain(
        topology
            .chains()
            .iter()
            .filter(|chain| Some(chain.index()) != exclude)
            .filter(|chain| chain.alpha_carbon_count() > 0),
        Chain::alpha_carbon_count,
    )
    .ok_or(FeaturizerError::NoProteinFound)
}

fn find_ligand(topology: &Topology, protein: usize) -> Result<usize> {
    best_chain(
        topology
            .chains()
            .iter()
            .filter(|chain| chain.index() != protein)
            .filter(|chain| chain.atom_count() <= MAX_LIGAND_ATOMS),
        Chain::atom_count,
    )
    .ok_or(FeaturizerError::NoLigandFound {
        protein_chain: protein,
        max_atoms: MAX_LIGAND_ATOMS,
    })
}

/// Resolve which chain is the protein and which is the ligand.
///
/// Explicit indices are validated and never overridden. If only one role is given the
/// heuristic resolves the other one and never picks the explicitly assigned chain.
pub fn resolve_chains(
    topology: &Topology,
    explicit_protein: Option<usize>,
    explicit_ligand: Option<usize>,
) -> Result<ChainRoles> {
    let explicit_protein = explicit_protein
        .map(|index| check_chain(topology, "protein_chain", index))
        .transpose()?;
    let explicit_ligand = explicit_ligand
        .map(|index| check_chain(topology, "ligand_chain", index))
        .transpose()?;

    let protein = match explicit_protein {
        Some(index) => index,
        None => find_protein(topology, explicit_ligand)?,
    };
    let ligand = match explicit_ligand {
        Some(index) => index,
        None => find_ligand(topology, protein)?,
    };
    if protein == ligand {
        return Err(FeaturizerError::invalid_selection(
            "ligand_chain",
            format!("chain {ligand} is already the protein chain"),
        ));
    }

    debug!(
        "resolved chains: protein={} ({}), ligand={} ({})",
        protein,
        topology.chains()[protein].id(),
        ligand,
        topology.chains()[ligand].id()
    );
    Ok(ChainRoles { protein, ligand })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utilities::protein_ligand_topology;

    /// Each chain holds one residue per CA atom, then one `UNK` residue with `counts.1` atoms.
    fn topology_from_counts(counts: &[(usize, usize)]) -> Topology {
        let mut builder = Topology::builder();
        for (i, &(n_ca, n_other)) in counts.iter().enumerate() {
            builder.chain(format!("{}", (b'A' + i as u8) as char));
            for r in 0..n_ca {
                builder.residue("ALA", r as i32 + 1).atom("CA", "C");
            }
            builder.residue("UNK", 0);
            for _ in 0..n_other {
                builder.atom("C1", "C");
            }
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_default_scenario() {
        let topology = protein_ligand_topology(10, 10);
        let roles = resolve_chains(&topology, None, None).unwrap();
        assert_eq!(roles, ChainRoles { protein: 0, ligand: 1 });
    }

    #[test]
    fn test_protein_tie_breaks_to_lowest_index() {
        let topology = topology_from_counts(&[(5, 0), (5, 0), (0, 3)]);
        let roles = resolve_chains(&topology, None, None).unwrap();
        assert_eq!(roles.protein, 0);
        // chain 1 (5 atoms) beats chain 2 (3 atoms) for the ligand
        assert_eq!(roles.ligand, 1);
    }

    #[test]
    fn test_most_alpha_carbons_wins() {
        let topology = topology_from_counts(&[(0, 12), (3, 0), (7, 0)]);
        let roles = resolve_chains(&topology, None, None).unwrap();
        assert_eq!(roles, ChainRoles { protein: 2, ligand: 0 });
    }

    #[test]
    fn test_ligand_tie_breaks_and_size_limit() {
        let topology = topology_from_counts(&[(4, 0), (0, 250), (0, 20), (0, 20)]);
        let roles = resolve_chains(&topology, None, None).unwrap();
        assert_eq!(roles, ChainRoles { protein: 0, ligand: 2 });

        let topology = topology_from_counts(&[(0, 200), (4, 0)]);
        assert_eq!(resolve_chains(&topology, None, None).unwrap().ligand, 0);
    }

    #[test]
    fn test_heuristic_failures() {
        let topology = topology_from_counts(&[(0, 3), (0, 4)]);
        assert!(matches!(
            resolve_chains(&topology, None, None),
            Err(FeaturizerError::NoProteinFound)
        ));

        let topology = topology_from_counts(&[(2, 0), (0, 201)]);
        assert!(matches!(
            resolve_chains(&topology, None, None),
            Err(FeaturizerError::NoLigandFound { protein_chain: 0, .. })
        ));

        let topology = topology_from_counts(&[(2, 0)]);
        assert!(matches!(
            resolve_chains(&topology, None, None),
            Err(FeaturizerError::NoLigandFound { .. })
        ));
    }

    #[test]
    fn test_explicit_chains() {
        let topology = topology_from_counts(&[(4, 0), (0, 5), (0, 6)]);
        assert_eq!(
            resolve_chains(&topology, Some(0), Some(1)).unwrap(),
            ChainRoles { protein: 0, ligand: 1 }
        );
        // explicit indices are not checked against the heuristics
        assert_eq!(
            resolve_chains(&topology, Some(2), Some(0)).unwrap(),
            ChainRoles { protein: 2, ligand: 0 }
        );
        assert!(matches!(
            resolve_chains(&topology, Some(1), Some(1)),
            Err(FeaturizerError::InvalidSelection { field: "ligand_chain", .. })
        ));
        assert!(matches!(
            resolve_chains(&topology, Some(3), Some(1)),
            Err(FeaturizerError::InvalidSelection { field: "protein_chain", .. })
        ));
        assert!(matches!(
            resolve_chains(&topology, None, Some(9)),
            Err(FeaturizerError::InvalidSelection { field: "ligand_chain", .. })
        ));
    }

    #[test]
    fn test_one_explicit_chain() {
        let topology = topology_from_counts(&[(4, 0), (0, 5), (0, 6)]);
        // the ligand heuristic skips the explicit protein
        assert_eq!(
            resolve_chains(&topology, Some(2), None).unwrap(),
            ChainRoles { protein: 2, ligand: 1 }
        );
        // the protein heuristic skips the explicit ligand
        let topology = topology_from_counts(&[(4, 0), (2, 0)]);
        assert_eq!(
            resolve_chains(&topology, None, Some(0)).unwrap(),
            ChainRoles { protein: 1, ligand: 0 }
        );
    }
}

//! Binary ligand contacts: contact distances thresholded at a cutoff.
use crate::chains::ChainRoles;
use crate::contacts::{
    check_cutoff, BindingPocket, ContactScheme, LigandContactFeaturizer, PocketResidueSet,
    DEFAULT_CUTOFF,
};
use crate::describe::{FeatureDescriptor, FeatureKind};
use crate::error::Result;
use crate::featurizer::Featurizer;
use bon::bon;
use ferritin_trajectory::{Frame, Topology};
use ndarray::Array2;
use std::sync::Arc;

/// Elementwise `distance <= cutoff`, keeping the shape.
pub fn binarize(distances: &Array2<f64>, cutoff: f64) -> Array2<bool> {
    distances.mapv(|d| d <= cutoff)
}

/// One boolean per binding-pocket residue: is the ligand within `cutoff`?
///
/// The pocket threshold and the contact threshold are independent; the pocket
/// defaults to `BindingPocket::Within(cutoff)`.
#[derive(Clone, Debug)]
pub struct BinaryLigandContactFeaturizer {
    contacts: LigandContactFeaturizer,
    cutoff: f64,
}

#[bon]
impl BinaryLigandContactFeaturizer {
    #[builder]
    pub fn new(
        topology: Arc<Topology>,
        reference_frame: Frame,
        protein_chain: Option<usize>,
        ligand_chain: Option<usize>,
        #[builder(default = DEFAULT_CUTOFF)] cutoff: f64,
        binding_pocket: Option<BindingPocket>,
        #[builder(default)] scheme: ContactScheme,
    ) -> Result<Self> {
        let cutoff = check_cutoff("cutoff", cutoff)?;
        let contacts = LigandContactFeaturizer::builder()
            .topology(topology)
            .reference_frame(reference_frame)
            .maybe_protein_chain(protein_chain)
            .maybe_ligand_chain(ligand_chain)
            .binding_pocket(binding_pocket.unwrap_or(BindingPocket::Within(cutoff)))
            .scheme(scheme)
            .build()?;
        Ok(BinaryLigandContactFeaturizer { contacts, cutoff })
    }
}

impl BinaryLigandContactFeaturizer {
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }
    pub fn chain_roles(&self) -> ChainRoles {
        self.contacts.chain_roles()
    }
    pub fn pocket(&self) -> &PocketResidueSet {
        self.contacts.pocket()
    }
    /// The underlying distance featurizer.
    pub fn distances(&self) -> &LigandContactFeaturizer {
        &self.contacts
    }
}

impl Featurizer for BinaryLigandContactFeaturizer {
    type Output = bool;

    fn name(&self) -> &'static str {
        "BinaryLigandContactFeaturizer"
    }
    fn n_features(&self) -> usize {
        self.contacts.n_features()
    }
    fn featurize_frame(&self, frame: &Frame, frame_index: usize) -> Result<Vec<bool>> {
        Ok(self
            .contacts
            .featurize_frame(frame, frame_index)?
            .into_iter()
            .map(|d| d <= self.cutoff)
            .collect())
    }
    fn describe_features(&self) -> Vec<FeatureDescriptor> {
        self.contacts
            .describe_as(self.name(), FeatureKind::LigandContactBinary)
    }
}

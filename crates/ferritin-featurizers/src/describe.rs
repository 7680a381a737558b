//! Per-column feature descriptors.
use crate::contacts::ContactScheme;
use ferritin_trajectory::{Chain, Residue};
use serde::Serialize;
use strum::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    LigandContactDistance,
    LigandContactBinary,
    LigandRmsd,
}

/// Describes one output column of a featurizer.
///
/// Contact features carry the residue identity; RMSD features carry the index of
/// their reference frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FeatureDescriptor {
    pub featurizer: &'static str,
    pub feature_index: usize,
    pub kind: FeatureKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resseq: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resid: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<ContactScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_frame: Option<usize>,
}

impl FeatureDescriptor {
    pub(crate) fn for_residue(
        featurizer: &'static str,
        feature_index: usize,
        kind: FeatureKind,
        chain: &Chain,
        residue: &Residue,
        scheme: ContactScheme,
    ) -> Self {
        FeatureDescriptor {
            featurizer,
            feature_index,
            kind,
            resname: Some(residue.name().to_string()),
            resseq: Some(residue.res_seq()),
            resid: Some(residue.index()),
            chain: Some(chain.id().to_string()),
            scheme: Some(scheme),
            reference_frame: None,
        }
    }

    pub(crate) fn for_reference(
        featurizer: &'static str,
        feature_index: usize,
        kind: FeatureKind,
        reference_frame: usize,
    ) -> Self {
        FeatureDescriptor {
            featurizer,
            feature_index,
            kind,
            resname: None,
            resseq: None,
            resid: None,
            chain: None,
            scheme: None,
            reference_frame: Some(reference_frame),
        }
    }
}

use super::commands;
use super::commands::contacts::ContactsArgs;
use super::commands::rmsd::RmsdArgs;
use clap::{Args, Parser, Subcommand, ValueEnum};
use ferritin_featurizers::{AtomSelection, ContactScheme, DEFAULT_CUTOFF};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Arguments shared by every subcommand.
#[derive(Args, Debug)]
pub struct TrajectoryArgs {
    /// Multi-model PDB or mmCIF file; each model is one frame.
    #[arg(short, long)]
    pub input: String,
    /// Reference structure. Defaults to the first frame of `--input`.
    #[arg(short, long)]
    pub reference: Option<String>,
    /// Protein chain index. Chosen by CA count when omitted.
    #[arg(long)]
    pub protein_chain: Option<usize>,
    /// Ligand chain index. Chosen by size when omitted.
    #[arg(long)]
    pub ligand_chain: Option<usize>,
    /// Output JSON file.
    #[arg(short, long)]
    pub output: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SelectionKind {
    Protein,
    Ligand,
    All,
    Custom,
}

impl SelectionKind {
    /// `indices` is only meaningful, and then required, for `Custom`.
    pub fn into_selection(
        self,
        indices: Vec<usize>,
        flag: &str,
    ) -> anyhow::Result<AtomSelection> {
        match (self, indices.is_empty()) {
            (SelectionKind::Custom, _) => Ok(AtomSelection::Custom(indices)),
            (_, false) => anyhow::bail!("{flag} indices are only allowed with `custom`"),
            (SelectionKind::Protein, true) => Ok(AtomSelection::Protein),
            (SelectionKind::Ligand, true) => Ok(AtomSelection::Ligand),
            (SelectionKind::All, true) => Ok(AtomSelection::All),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Minimum ligand distance (or binary contact) per binding-pocket residue.
    Contacts {
        #[command(flatten)]
        traj: TrajectoryArgs,
        /// Contact cutoff, also the pocket cutoff unless `--pocket-cutoff` is given.
        #[arg(long, default_value_t = DEFAULT_CUTOFF)]
        cutoff: f64,
        #[arg(long, conflicts_with = "all_residues")]
        pocket_cutoff: Option<f64>,
        /// Use every protein residue as the pocket.
        #[arg(long)]
        all_residues: bool,
        #[arg(long, value_enum, default_value_t = ContactScheme::Closest)]
        scheme: ContactScheme,
        /// Emit `distance <= cutoff` instead of distances.
        #[arg(long)]
        binary: bool,
    },
    /// RMSD of one atom set after superposing on another.
    Rmsd {
        #[command(flatten)]
        traj: TrajectoryArgs,
        #[arg(long, value_enum, default_value_t = SelectionKind::Protein)]
        align_by: SelectionKind,
        #[arg(long, value_delimiter = ',')]
        align_indices: Vec<usize>,
        #[arg(long, value_enum, default_value_t = SelectionKind::Ligand)]
        calculate_for: SelectionKind,
        #[arg(long, value_delimiter = ',')]
        calculate_indices: Vec<usize>,
    },
}

impl Cli {
    pub fn execute(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Contacts {
                traj,
                cutoff,
                pocket_cutoff,
                all_residues,
                scheme,
                binary,
            } => commands::contacts::execute(ContactsArgs {
                traj,
                cutoff,
                pocket_cutoff,
                all_residues,
                scheme,
                binary,
            }),
            Commands::Rmsd {
                traj,
                align_by,
                align_indices,
                calculate_for,
                calculate_indices,
            } => commands::rmsd::execute(RmsdArgs {
                traj,
                align_by: align_by.into_selection(align_indices, "--align-indices")?,
                calculate_for: calculate_for
                    .into_selection(calculate_indices, "--calculate-indices")?,
            }),
        }
    }
}

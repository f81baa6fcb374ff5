pub mod chopping;
pub mod crh;
pub mod identifiers;
pub mod residue;
pub mod segment;
pub mod summary;

// re-export for cleaner imports
pub use self::chopping::{Chopping, ResLabelChopping, SeqresChopping};
pub use self::crh::{Gene3DCrh, PredictedCathDomain};
pub use self::identifiers::{ChainId, DomainId};
pub use self::residue::ResidueLabel;
pub use self::segment::{Segment, SegmentBound};
pub use self::summary::{LurSummary, PlddtSummary, SecStrSummary, Status, StatusLog};

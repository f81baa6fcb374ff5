use std::fmt::{self, Display};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::consts::{
    AF_FRAGMENT_MAX_RESIDUES, AF_FRAGMENT_OVERLAP_WINDOW, AF_FRAGMENT_SEARCH_LIMIT,
};
use crate::errors::ModelError;
use crate::models::chopping::SeqresChopping;

static RE_AF_CHAIN_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^AF-(?P<uniprot_acc>[0-9A-Z]+)-F(?P<frag_num>[0-9]+)-model_v(?P<version>[0-9]+)$")
        .unwrap()
});

static RE_AF_DOMAIN_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^AF-(?P<uniprot_acc>[0-9A-Z]+)-F(?P<frag_num>[0-9]+)-model_v(?P<version>[0-9]+)[/\-](?P<chopping>[0-9,\-_]+)$",
    )
    .unwrap()
});

static RE_UNIPROT_DOMAIN_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<uniprot_acc>[0-9A-Z]+)[/\-](?P<chopping>[0-9,\-_]+)$").unwrap()
});

///
/// Identifier of one AlphaFold chain model:
/// `AF-<ACCESSION>-F<fragment>-model_v<version>`.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainId {
    pub uniprot_acc: String,
    pub fragment_number: u32,
    pub version: u32,
}

impl ChainId {
    pub fn new(uniprot_acc: &str, fragment_number: u32, version: u32) -> Self {
        ChainId {
            uniprot_acc: uniprot_acc.to_string(),
            fragment_number,
            version,
        }
    }
}

impl FromStr for ChainId {
    type Err = ModelError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let caps = RE_AF_CHAIN_ID
            .captures(raw)
            .ok_or_else(|| ModelError::ChainIdParse(raw.to_string()))?;
        Ok(ChainId {
            uniprot_acc: caps["uniprot_acc"].to_string(),
            fragment_number: caps["frag_num"]
                .parse()
                .map_err(|_| ModelError::ChainIdParse(raw.to_string()))?,
            version: caps["version"]
                .parse()
                .map_err(|_| ModelError::ChainIdParse(raw.to_string()))?,
        })
    }
}

impl Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AF-{}-F{}-model_v{}",
            self.uniprot_acc, self.fragment_number, self.version
        )
    }
}

///
/// Identifier of one predicted domain within an AlphaFold chain: the chain
/// id plus the chopping, e.g. `AF-P00520-F1-model_v3/12-23_34-45`.
///
/// Identifiers are immutable values; operations that change fields return
/// fresh copies.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainId {
    pub chain_id: ChainId,
    pub chopping: SeqresChopping,
}

impl DomainId {
    pub fn new(chain_id: ChainId, chopping: SeqresChopping) -> Self {
        DomainId { chain_id, chopping }
    }

    /// Filesystem-safe form of the id (`/` replaced by `-`).
    pub fn to_file_stub(&self) -> String {
        self.to_string().replace('/', "-")
    }

    /// Copy of this id with a different chopping (e.g. after tail
    /// trimming).
    pub fn with_chopping(&self, chopping: SeqresChopping) -> DomainId {
        DomainId {
            chain_id: self.chain_id.clone(),
            chopping,
        }
    }

    ///
    /// Parse a UniProt-numbered domain id (`<ACC>/<chopping>`) and resolve
    /// which AlphaFold fragment model the chopping belongs to.
    ///
    /// Long proteins are released as overlapping fragment models: 1-indexed
    /// fragment `k` covers UniProt window `[1+(k-1)*200, (k-1)*200+1400]`,
    /// both edges inclusive. The resolver picks the smallest `k` whose
    /// window contains the chopping's last residue and attaches the
    /// matching offset to the chopping, so fragment-local residue numbers
    /// can be translated back to sequence numbering when matching. A
    /// chopping ending exactly on a window's upper edge belongs to that
    /// window (end 1600 resolves to fragment 2, not 3).
    ///
    /// A caller-supplied `fragment_number` skips the search and leaves the
    /// chopping un-remapped. Either way, using any fragment other than 1
    /// is unusual enough to warrant a warning.
    ///
    pub fn from_uniprot_str(
        raw: &str,
        version: u32,
        fragment_number: Option<u32>,
    ) -> Result<Self, ModelError> {
        let caps = RE_UNIPROT_DOMAIN_ID
            .captures(raw)
            .ok_or_else(|| ModelError::DomainIdParse(raw.to_string()))?;

        let mut chopping: SeqresChopping = caps["chopping"].parse()?;

        let fragment_number = match fragment_number {
            Some(frag_num) => frag_num,
            None => {
                let (frag_num, offset) = resolve_fragment(&chopping)?;
                chopping.fragment_offset = Some(offset);
                frag_num
            }
        };

        if fragment_number > 1 {
            log::warn!(
                "using AF fragment {} for chopping {} (id: {})",
                fragment_number,
                chopping.to_str(),
                raw
            );
        }

        Ok(DomainId {
            chain_id: ChainId::new(&caps["uniprot_acc"], fragment_number, version),
            chopping,
        })
    }
}

/// Find the smallest fragment number whose window contains the chopping's
/// last residue, along with that fragment's offset into the full sequence.
fn resolve_fragment(chopping: &SeqresChopping) -> Result<(u32, i64), ModelError> {
    let last_residue = *chopping.last_residue() as i64;
    for frag_num in 1..=AF_FRAGMENT_SEARCH_LIMIT {
        // fragment 1 starts at offset 0, fragment 2 at 200, ...
        let offset = (frag_num as i64 - 1) * AF_FRAGMENT_OVERLAP_WINDOW as i64;
        let window_start = offset + 1;
        let window_end = offset + AF_FRAGMENT_MAX_RESIDUES as i64;
        if last_residue >= window_start && last_residue <= window_end {
            return Ok((frag_num, offset));
        }
    }
    Err(ModelError::NoMatchingFragment(chopping.to_str()))
}

impl FromStr for DomainId {
    type Err = ModelError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let caps = RE_AF_DOMAIN_ID
            .captures(raw)
            .ok_or_else(|| ModelError::DomainIdParse(raw.to_string()))?;
        let chopping: SeqresChopping = caps["chopping"]
            .parse()
            .map_err(|_| ModelError::DomainIdParse(raw.to_string()))?;
        let chain_id = ChainId {
            uniprot_acc: caps["uniprot_acc"].to_string(),
            fragment_number: caps["frag_num"]
                .parse()
                .map_err(|_| ModelError::DomainIdParse(raw.to_string()))?,
            version: caps["version"]
                .parse()
                .map_err(|_| ModelError::DomainIdParse(raw.to_string()))?,
        };
        Ok(DomainId { chain_id, chopping })
    }
}

impl Display for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.chain_id, self.chopping.to_str())
    }
}

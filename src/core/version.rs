use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::SepaError;

/// Supported ISO 20022 pain schema versions.
///
/// `pain.001.*` are customer credit transfer initiations, `pain.008.*`
/// customer direct debit initiations. The `.003.` variants are the
/// German DK (Deutsche Kreditwirtschaft) flavours of the same messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum PainVersion {
    #[serde(rename = "pain.001.001.02")]
    Pain001_001_02,
    #[serde(rename = "pain.001.003.02")]
    Pain001_003_02,
    #[default]
    #[serde(rename = "pain.001.001.03")]
    Pain001_001_03,
    #[serde(rename = "pain.001.003.03")]
    Pain001_003_03,
    #[serde(rename = "pain.008.001.01")]
    Pain008_001_01,
    #[serde(rename = "pain.008.003.01")]
    Pain008_003_01,
    #[serde(rename = "pain.008.001.02")]
    Pain008_001_02,
    #[serde(rename = "pain.008.003.02")]
    Pain008_003_02,
}

impl PainVersion {
    pub const ALL: [PainVersion; 8] = [
        PainVersion::Pain001_001_02,
        PainVersion::Pain001_003_02,
        PainVersion::Pain001_001_03,
        PainVersion::Pain001_003_03,
        PainVersion::Pain008_001_01,
        PainVersion::Pain008_003_01,
        PainVersion::Pain008_001_02,
        PainVersion::Pain008_003_02,
    ];

    /// Textual form, e.g. "pain.001.001.03".
    pub fn as_str(&self) -> &'static str {
        match self {
            PainVersion::Pain001_001_02 => "pain.001.001.02",
            PainVersion::Pain001_003_02 => "pain.001.003.02",
            PainVersion::Pain001_001_03 => "pain.001.001.03",
            PainVersion::Pain001_003_03 => "pain.001.003.03",
            PainVersion::Pain008_001_01 => "pain.008.001.01",
            PainVersion::Pain008_003_01 => "pain.008.003.01",
            PainVersion::Pain008_001_02 => "pain.008.001.02",
            PainVersion::Pain008_003_02 => "pain.008.003.02",
        }
    }

    /// Message family this version belongs to.
    pub fn family(&self) -> MessageFamily {
        match self {
            PainVersion::Pain001_001_02
            | PainVersion::Pain001_003_02
            | PainVersion::Pain001_001_03
            | PainVersion::Pain001_003_03 => MessageFamily::CreditTransfer,
            PainVersion::Pain008_001_01
            | PainVersion::Pain008_003_01
            | PainVersion::Pain008_001_02
            | PainVersion::Pain008_003_02 => MessageFamily::DirectDebit,
        }
    }
}

impl fmt::Display for PainVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for PainVersion {
    type Error = SepaError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl FromStr for PainVersion {
    type Err = SepaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PainVersion::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| SepaError::Configuration(format!("unsupported pain version '{s}'")))
    }
}

/// Credit transfer (pain.001) or direct debit (pain.008).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageFamily {
    CreditTransfer,
    DirectDebit,
}

impl MessageFamily {
    /// Payment method code (`PmtMtd`).
    pub fn payment_method(&self) -> &'static str {
        match self {
            MessageFamily::CreditTransfer => "TRF",
            MessageFamily::DirectDebit => "DD",
        }
    }

    /// Message root element inside `Document`.
    pub fn root_element(&self) -> &'static str {
        match self {
            MessageFamily::CreditTransfer => "CstmrCdtTrfInitn",
            MessageFamily::DirectDebit => "CstmrDrctDbtInitn",
        }
    }

    /// Per-transaction element inside `PmtInf`.
    pub fn transaction_element(&self) -> &'static str {
        match self {
            MessageFamily::CreditTransfer => "CdtTrfTxInf",
            MessageFamily::DirectDebit => "DrctDbtTxInf",
        }
    }
}

/// A resolved schema selector: family plus aligned revision number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SchemaVersion {
    pub version: PainVersion,
    pub family: MessageFamily,
    /// Trailing two-digit suffix of the version, plus one for pain.008 so
    /// both families share the same revision numbering.
    pub revision: u8,
}

impl SchemaVersion {
    /// Revision 2 carries `BtchBookg` and `Grpg` in the group header.
    pub fn has_group_batch_booking(&self) -> bool {
        self.revision == 2
    }

    /// Revision 3 carries `BtchBookg`, `NbOfTxs` and `CtrlSum` per batch.
    pub fn has_batch_totals(&self) -> bool {
        self.revision == 3
    }
}

/// Resolve a pain version into its message family and revision.
pub fn resolve(version: PainVersion) -> Result<SchemaVersion, SepaError> {
    let literal = version.as_str();
    let suffix = literal
        .get(literal.len() - 2..)
        .ok_or_else(|| SepaError::Configuration(format!("malformed pain version '{literal}'")))?;
    let suffix: u8 = suffix.parse().map_err(|_| {
        SepaError::Configuration(format!("pain version '{literal}' has no numeric suffix"))
    })?;

    let family = version.family();
    let revision = match family {
        MessageFamily::CreditTransfer => suffix,
        MessageFamily::DirectDebit => suffix + 1,
    };

    tracing::debug!(version = literal, ?family, revision, "resolved pain version");

    Ok(SchemaVersion {
        version,
        family,
        revision,
    })
}

/// Resolve a textual schema selector such as "pain.008.003.02".
pub fn resolve_str(selector: &str) -> Result<SchemaVersion, SepaError> {
    resolve(selector.parse()?)
}

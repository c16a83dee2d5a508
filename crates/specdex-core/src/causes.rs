//! Static NAS cause-code tables.
//!
//! Two disjoint tables: EMM causes from TS 24.301 §9.9.3.9 (LTE) and 5GMM
//! causes from TS 24.501 §9.11.3.2 (5G). Both designate cause #111
//! "Protocol error, unspecified" as the fallback entry substituted for
//! undefined codes.

use serde::Serialize;

/// Cause code both tables designate as the fallback for undefined values.
pub const FALLBACK_CODE: u16 = 111;

/// A single cause-table record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CauseEntry {
    pub code: u16,
    pub name: &'static str,
    pub description: &'static str,
}

const fn entry(code: u16, name: &'static str, description: &'static str) -> CauseEntry {
    CauseEntry {
        code,
        name,
        description,
    }
}

/// The shared catch-all record. Present in both tables and returned by
/// [`CauseTable::fallback`].
const PROTOCOL_ERROR: CauseEntry = entry(
    FALLBACK_CODE,
    "Protocol error, unspecified",
    "Unspecified protocol error; the catch-all treatment for cause values with no other mapping",
);

/// EMM cause values (TS 24.301 §9.9.3.9).
static EMM_CAUSES: &[CauseEntry] = &[
    entry(2, "IMSI unknown in HSS", "The IMSI is not known in the HSS"),
    entry(3, "Illegal UE", "The USIM has been invalidated for EPS and non-EPS services"),
    entry(5, "IMEI not accepted", "The network does not accept the IMEI"),
    entry(6, "Illegal ME", "The mobile equipment is not permitted on the network"),
    entry(7, "EPS services not allowed", "EPS services are not permitted for this subscriber"),
    entry(
        8,
        "EPS services and non-EPS services not allowed",
        "Neither EPS nor non-EPS services are permitted",
    ),
    entry(
        9,
        "UE identity cannot be derived by the network",
        "The network cannot derive the UE identity, e.g. an unknown GUTI",
    ),
    entry(10, "Implicitly detached", "The network has implicitly detached the UE"),
    entry(11, "PLMN not allowed", "The PLMN is added to the forbidden PLMN list"),
    entry(12, "Tracking Area not allowed", "The tracking area is not permitted for this UE"),
    entry(
        13,
        "Roaming not allowed in this tracking area",
        "Roaming is not permitted in this tracking area",
    ),
    entry(
        14,
        "EPS services not allowed in this PLMN",
        "EPS services are not permitted in this PLMN",
    ),
    entry(15, "No Suitable Cells In tracking area", "No suitable cells in the tracking area"),
    entry(16, "MSC temporarily not reachable", "The MSC is temporarily not reachable"),
    entry(17, "Network failure", "A failure in the network"),
    entry(18, "CS domain not available", "The CS domain is not available"),
    entry(19, "ESM failure", "The ESM part of the procedure failed"),
    entry(20, "MAC failure", "Authentication failed with a MAC mismatch"),
    entry(21, "Synch failure", "Authentication failed with a synchronisation error"),
    entry(22, "Congestion", "Network congestion; a back-off timer applies"),
    entry(
        23,
        "UE security capabilities mismatch",
        "Replayed UE security capabilities do not match the ones sent",
    ),
    entry(
        24,
        "Security mode rejected, unspecified",
        "The security mode command was rejected",
    ),
    entry(25, "Not authorized for this CSG", "The UE is not authorized for this CSG"),
    entry(
        26,
        "Non-EPS authentication unacceptable",
        "Non-EPS authentication is unacceptable",
    ),
    entry(
        31,
        "Redirection to 5GCN required",
        "The UE must be redirected to the 5G core network",
    ),
    entry(
        35,
        "Requested service option not authorized in this PLMN",
        "The requested service option is not authorized in this PLMN",
    ),
    entry(
        39,
        "CS service temporarily not available",
        "CS fallback service is temporarily not available",
    ),
    entry(40, "No EPS bearer context activated", "No EPS bearer context is activated"),
    entry(42, "Severe network failure", "A severe failure in the network"),
    entry(
        78,
        "PLMN not allowed to operate at the present UE location",
        "The PLMN may not operate at the present UE location (satellite access)",
    ),
    entry(95, "Semantically incorrect message", "The message is semantically incorrect"),
    entry(96, "Invalid mandatory information", "A mandatory information element is invalid"),
    entry(
        97,
        "Message type non-existent or not implemented",
        "The message type does not exist or is not implemented",
    ),
    entry(
        98,
        "Message type not compatible with protocol state",
        "The message type is not compatible with the protocol state",
    ),
    entry(
        99,
        "Information element non-existent or not implemented",
        "The information element does not exist or is not implemented",
    ),
    entry(100, "Conditional IE error", "A conditional information element is in error"),
    entry(
        101,
        "Message not compatible with protocol state",
        "The message is not compatible with the protocol state",
    ),
    PROTOCOL_ERROR,
];

/// 5GMM cause values (TS 24.501 §9.11.3.2).
static FIVEGMM_CAUSES: &[CauseEntry] = &[
    entry(3, "Illegal UE", "The USIM has been invalidated for 5GS services"),
    entry(5, "PEI not accepted", "The network does not accept the PEI"),
    entry(6, "Illegal ME", "The mobile equipment is not permitted on the network"),
    entry(7, "5GS services not allowed", "5GS services are not permitted for this subscriber"),
    entry(
        9,
        "UE identity cannot be derived by the network",
        "The network cannot derive the UE identity, e.g. an unknown 5G-GUTI",
    ),
    entry(10, "Implicitly de-registered", "The network has implicitly de-registered the UE"),
    entry(11, "PLMN not allowed", "The PLMN is added to the forbidden PLMN list"),
    entry(12, "Tracking area not allowed", "The tracking area is not permitted for this UE"),
    entry(
        13,
        "Roaming not allowed in this tracking area",
        "Roaming is not permitted in this tracking area",
    ),
    entry(15, "No suitable cells in tracking area", "No suitable cells in the tracking area"),
    entry(20, "MAC failure", "Authentication failed with a MAC mismatch"),
    entry(21, "Synch failure", "Authentication failed with a synchronisation error"),
    entry(22, "Congestion", "Network congestion; a back-off timer applies"),
    entry(
        23,
        "UE security capabilities mismatch",
        "Replayed UE security capabilities do not match the ones sent",
    ),
    entry(
        24,
        "Security mode rejected, unspecified",
        "The security mode command was rejected",
    ),
    entry(
        26,
        "Non-5G authentication unacceptable",
        "Non-5G authentication is unacceptable",
    ),
    entry(27, "N1 mode not allowed", "N1 mode is not permitted for this UE"),
    entry(28, "Restricted service area", "The UE is in a restricted service area"),
    entry(
        31,
        "Redirection to EPC required",
        "The UE must be redirected to the EPC",
    ),
    entry(62, "No network slices available", "No network slices are available"),
    entry(
        65,
        "Maximum number of PDU sessions reached",
        "The maximum number of PDU sessions has been reached",
    ),
    entry(
        67,
        "Insufficient resources for specific slice and DNN",
        "Insufficient resources for the specific slice and DNN",
    ),
    entry(
        69,
        "Insufficient resources for specific slice",
        "Insufficient resources for the specific slice",
    ),
    entry(71, "ngKSI already in use", "The ngKSI value is already in use"),
    entry(
        72,
        "Non-3GPP access to 5GCN not allowed",
        "Access to the 5G core over non-3GPP access is not permitted",
    ),
    entry(73, "Serving network not authorized", "The serving network is not authorized"),
    entry(
        74,
        "Temporarily not authorized for this SNPN",
        "The UE is temporarily not authorized for this SNPN",
    ),
    entry(
        75,
        "Permanently not authorized for this SNPN",
        "The UE is permanently not authorized for this SNPN",
    ),
    entry(76, "Not authorized for this CAG", "The UE is not authorized for this CAG"),
    entry(90, "Payload was not forwarded", "The payload was not forwarded"),
    entry(
        91,
        "DNN not supported or not subscribed in the slice",
        "The DNN is not supported or not subscribed in the slice",
    ),
    entry(95, "Semantically incorrect message", "The message is semantically incorrect"),
    entry(96, "Invalid mandatory information", "A mandatory information element is invalid"),
    entry(
        97,
        "Message type non-existent or not implemented",
        "The message type does not exist or is not implemented",
    ),
    entry(
        98,
        "Message type not compatible with protocol state",
        "The message type is not compatible with the protocol state",
    ),
    entry(
        99,
        "Information element non-existent or not implemented",
        "The information element does not exist or is not implemented",
    ),
    entry(100, "Conditional IE error", "A conditional information element is in error"),
    entry(
        101,
        "Message not compatible with protocol state",
        "The message is not compatible with the protocol state",
    ),
    PROTOCOL_ERROR,
];

/// Selector for one of the two cause tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CauseTable {
    /// EMM causes, TS 24.301 (LTE). The default table.
    #[default]
    Emm,
    /// 5GMM causes, TS 24.501 (5G).
    FiveGmm,
}

impl CauseTable {
    /// Resolve a caller-supplied table selector.
    ///
    /// "5g" selects the 5GMM table; anything else (including the documented
    /// "lte" and unrecognized values) resolves to the default EMM table —
    /// the selector is advisory, not validated.
    pub fn from_selector(selector: &str) -> Self {
        match selector.trim().to_lowercase().as_str() {
            "5g" => Self::FiveGmm,
            _ => Self::Emm,
        }
    }

    /// All entries of this table, ordered by code.
    pub fn entries(self) -> &'static [CauseEntry] {
        match self {
            Self::Emm => EMM_CAUSES,
            Self::FiveGmm => FIVEGMM_CAUSES,
        }
    }

    /// Look up a code, `None` when the table does not define it.
    pub fn get(self, code: u16) -> Option<&'static CauseEntry> {
        self.entries().iter().find(|e| e.code == code)
    }

    /// The designated fallback entry (cause #111).
    pub fn fallback(self) -> &'static CauseEntry {
        &PROTOCOL_ERROR
    }

    /// Cause family acronym used in rendered output.
    pub fn acronym(self) -> &'static str {
        match self {
            Self::Emm => "EMM",
            Self::FiveGmm => "5GMM",
        }
    }

    /// Specification title defining this table.
    pub fn title(self) -> &'static str {
        match self {
            Self::Emm => "TS 24.301",
            Self::FiveGmm => "TS 24.501",
        }
    }

    /// Corpus source label associated with this table's specification.
    pub fn source_label(self) -> &'static str {
        match self {
            Self::Emm => "ts_124301",
            Self::FiveGmm => "ts_124501",
        }
    }
}

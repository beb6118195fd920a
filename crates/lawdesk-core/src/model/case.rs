use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::document::Document;
use super::hearing::Hearing;
use super::party::Party;

/// Lifecycle status of a case
///
/// Allowed moves: `active → {pending, adjourned, disposed}`,
/// `pending → {active, disposed}`, `adjourned → {active, disposed}`.
/// `disposed` is terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    #[default]
    Active,
    Pending,
    Disposed,
    Adjourned,
}

impl CaseStatus {
    pub const ALL: [CaseStatus; 4] = [
        CaseStatus::Active,
        CaseStatus::Pending,
        CaseStatus::Disposed,
        CaseStatus::Adjourned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Active => "active",
            CaseStatus::Pending => "pending",
            CaseStatus::Disposed => "disposed",
            CaseStatus::Adjourned => "adjourned",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, CaseStatus::Disposed)
    }

    /// Whether a case in `self` may move to `next`
    ///
    /// Staying in the same status is always allowed; nothing leaves a
    /// terminal status.
    pub fn can_transition_to(&self, next: CaseStatus) -> bool {
        use CaseStatus::*;
        if *self == next {
            return true;
        }
        if self.is_terminal() {
            return false;
        }
        matches!(
            (self, next),
            (Active, Pending)
                | (Active, Adjourned)
                | (Active, Disposed)
                | (Pending, Active)
                | (Pending, Disposed)
                | (Adjourned, Active)
                | (Adjourned, Disposed)
        )
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaseStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown case status '{}'", s))
    }
}

/// Forum the case is heard in
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum CourtName {
    #[default]
    #[serde(rename = "Civil Court")]
    CivilCourt,
    #[serde(rename = "Session Court")]
    SessionCourt,
    #[serde(rename = "Family Court")]
    FamilyCourt,
    #[serde(rename = "Magistrate")]
    Magistrate,
    #[serde(rename = "Tehsildar")]
    Tehsildar,
    #[serde(rename = "High Court")]
    HighCourt,
    #[serde(rename = "Supreme Court")]
    SupremeCourt,
    #[serde(rename = "NAB/FIA")]
    NabFia,
    #[serde(rename = "Police Station (FIR stage)")]
    PoliceStation,
}

impl CourtName {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourtName::CivilCourt => "Civil Court",
            CourtName::SessionCourt => "Session Court",
            CourtName::FamilyCourt => "Family Court",
            CourtName::Magistrate => "Magistrate",
            CourtName::Tehsildar => "Tehsildar",
            CourtName::HighCourt => "High Court",
            CourtName::SupremeCourt => "Supreme Court",
            CourtName::NabFia => "NAB/FIA",
            CourtName::PoliceStation => "Police Station (FIR stage)",
        }
    }
}

impl fmt::Display for CourtName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of law a case is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LegalSection {
    #[serde(rename = "PPC")]
    Ppc,
    #[serde(rename = "CrPC")]
    CrPc,
    #[serde(rename = "CPC")]
    Cpc,
    #[serde(rename = "Family Laws")]
    FamilyLaws,
    #[serde(rename = "Rent")]
    Rent,
    #[serde(rename = "NAB")]
    Nab,
    #[serde(rename = "FIA")]
    Fia,
}

/// Both sides of a case
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CaseParties {
    pub plaintiffs: Vec<Party>,
    pub defendants: Vec<Party>,
}

impl CaseParties {
    pub fn iter(&self) -> impl Iterator<Item = &Party> {
        self.plaintiffs.iter().chain(self.defendants.iter())
    }

    pub(crate) fn ensure_ids(&mut self) {
        self.plaintiffs
            .iter_mut()
            .chain(self.defendants.iter_mut())
            .for_each(Party::ensure_id);
    }
}

/// A legal matter with its hearings and documents
///
/// The case exclusively owns `hearings` and `documents`; they are removed
/// with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub id: String,
    pub case_number: String,
    pub court_name: CourtName,
    pub parties: CaseParties,
    #[serde(default)]
    pub opponent_lawyers: Vec<String>,
    #[serde(default)]
    pub legal_sections: BTreeSet<LegalSection>,
    #[serde(default)]
    pub hearings: Vec<Hearing>,
    #[serde(default)]
    pub documents: Vec<Document>,
    pub assigned_lawyer_id: String,
    pub status: CaseStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: String,
    pub team_id: String,
}

impl Case {
    /// Build a case from a draft with the given identity and timestamps
    pub fn from_draft(id: String, draft: CaseDraft, now: DateTime<Utc>) -> Self {
        let mut parties = draft.parties;
        parties.ensure_ids();
        Self {
            id,
            case_number: draft.case_number.trim().to_string(),
            court_name: draft.court_name,
            parties,
            opponent_lawyers: draft.opponent_lawyers,
            legal_sections: draft.legal_sections,
            hearings: Vec::new(),
            documents: Vec::new(),
            assigned_lawyer_id: draft.assigned_lawyer_id,
            status: draft.status,
            created_at: now,
            updated_at: now,
            created_by: draft.created_by,
            team_id: draft.team_id,
        }
    }

    pub fn hearing(&self, hearing_id: &str) -> Option<&Hearing> {
        self.hearings.iter().find(|h| h.id == hearing_id)
    }

    /// Highest hearing number assigned so far (0 when there are none)
    pub fn last_hearing_number(&self) -> u32 {
        self.hearings
            .iter()
            .map(|h| h.hearing_number)
            .max()
            .unwrap_or(0)
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

/// Input for creating a case; identity, timestamps and children are
/// assigned by the repository
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaseDraft {
    pub case_number: String,
    pub court_name: CourtName,
    pub parties: CaseParties,
    pub opponent_lawyers: Vec<String>,
    pub legal_sections: BTreeSet<LegalSection>,
    pub assigned_lawyer_id: String,
    pub status: CaseStatus,
    pub created_by: String,
    pub team_id: String,
}

/// Partial update of a case's own fields
///
/// `None` leaves a field unchanged. Hearings and documents are not
/// reachable through a patch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CasePatch {
    pub case_number: Option<String>,
    pub court_name: Option<CourtName>,
    pub parties: Option<CaseParties>,
    pub opponent_lawyers: Option<Vec<String>>,
    pub legal_sections: Option<BTreeSet<LegalSection>>,
    pub assigned_lawyer_id: Option<String>,
    pub team_id: Option<String>,
    pub status: Option<CaseStatus>,
}

impl CasePatch {
    pub fn status(status: CaseStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_machine() {
        use CaseStatus::*;
        assert!(Active.can_transition_to(Pending));
        assert!(Active.can_transition_to(Adjourned));
        assert!(Active.can_transition_to(Disposed));
        assert!(Pending.can_transition_to(Active));
        assert!(Pending.can_transition_to(Disposed));
        assert!(!Pending.can_transition_to(Adjourned));
        assert!(Adjourned.can_transition_to(Active));
        assert!(!Adjourned.can_transition_to(Pending));
        for next in [Active, Pending, Adjourned] {
            assert!(!Disposed.can_transition_to(next));
        }
        assert!(Disposed.can_transition_to(Disposed));
        assert!(Disposed.is_terminal());
    }

    #[test]
    fn test_status_parse_and_display() {
        assert_eq!("Adjourned".parse::<CaseStatus>(), Ok(CaseStatus::Adjourned));
        assert!("closed".parse::<CaseStatus>().is_err());
        assert_eq!(CaseStatus::Pending.to_string(), "pending");
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(
            serde_json::to_string(&CourtName::PoliceStation).unwrap(),
            "\"Police Station (FIR stage)\""
        );
        assert_eq!(serde_json::to_string(&LegalSection::CrPc).unwrap(), "\"CrPC\"");
        assert_eq!(
            serde_json::from_str::<CourtName>("\"NAB/FIA\"").unwrap(),
            CourtName::NabFia
        );
    }

    #[test]
    fn test_from_draft_assigns_party_ids() {
        let draft = CaseDraft {
            case_number: "  CIV/2024/010 ".to_string(),
            parties: CaseParties {
                plaintiffs: vec![Party::new("Plaintiff")],
                defendants: vec![Party::new("Defendant")],
            },
            ..Default::default()
        };
        let case = Case::from_draft("case-x".to_string(), draft, Utc::now());
        assert_eq!(case.case_number, "CIV/2024/010");
        assert!(case.parties.iter().all(|p| !p.id.is_empty()));
        assert_eq!(case.last_hearing_number(), 0);
        assert_eq!(case.created_at, case.updated_at);
    }
}

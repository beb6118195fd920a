//! Demo dataset installed on first launch
//!
//! Two active cases with one hearing each and a three-person team. The demo
//! users all sign in with [`DEMO_PASSWORD`].

use std::collections::BTreeSet;

use chrono::{DateTime, TimeZone, Utc};

use crate::model::{
    Case, CaseParties, CaseStatus, CourtName, CourtOrderType, Document, DocumentType, Hearing,
    LegalSection, Party, User, UserRole,
};

pub const DEMO_PASSWORD: &str = "password123";
pub const DEMO_TEAM_ID: &str = "team1";

fn day(year: i32, month: u32, date: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, date, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn party(
    id: &str,
    name: &str,
    cnic: Option<&str>,
    mobile: Option<&str>,
    email: Option<&str>,
    address: &str,
) -> Party {
    Party {
        id: id.to_string(),
        name: name.to_string(),
        cnic: cnic.map(str::to_string),
        mobile: mobile.map(str::to_string),
        email: email.map(str::to_string),
        address: Some(address.to_string()),
    }
}

fn user(id: &str, name: &str, email: &str, role: UserRole, joined: DateTime<Utc>) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        cnic: None,
        mobile: None,
        address: None,
        team_id: Some(DEMO_TEAM_ID.to_string()),
        created_at: joined,
        updated_at: joined,
    }
}

pub fn demo_users() -> Vec<User> {
    let mut ali = user(
        "1",
        "Advocate Muhammad Ali Khan",
        "ali.khan@lawfirm.pk",
        UserRole::SeniorLawyer,
        day(2023, 1, 15),
    );
    ali.cnic = Some("42101-1234567-1".to_string());
    ali.mobile = Some("+92-300-1234567".to_string());
    ali.address = Some("Lahore High Court Bar Association, Lahore".to_string());
    ali.updated_at = day(2024, 1, 15);

    let mut sarah = user(
        "2",
        "Advocate Sarah Ahmed",
        "sarah.ahmed@lawfirm.pk",
        UserRole::JuniorLawyer,
        day(2023, 6, 1),
    );
    sarah.cnic = Some("42101-2345678-2".to_string());
    sarah.mobile = Some("+92-301-2345678".to_string());
    sarah.address = Some("Karachi Bar Association, Karachi".to_string());
    sarah.updated_at = day(2024, 1, 10);

    let mut hassan = user(
        "3",
        "Muhammad Hassan",
        "hassan@lawfirm.pk",
        UserRole::Clerk,
        day(2023, 8, 15),
    );
    hassan.cnic = Some("42101-3456789-3".to_string());
    hassan.mobile = Some("+92-302-3456789".to_string());
    hassan.address = Some("Islamabad Bar Association, Islamabad".to_string());
    hassan.updated_at = day(2024, 1, 5);

    vec![ali, sarah, hassan]
}

pub fn demo_cases() -> Vec<Case> {
    let filed_civil = day(2024, 1, 15);
    let filed_criminal = day(2024, 1, 16);

    let civil = Case {
        id: "case1".to_string(),
        case_number: "CIV/2024/001".to_string(),
        court_name: CourtName::HighCourt,
        parties: CaseParties {
            plaintiffs: vec![party(
                "p1",
                "ABC Corporation Ltd.",
                Some("42101-1111111-1"),
                Some("+92-300-1111111"),
                Some("legal@abc.com"),
                "Main Boulevard, Gulberg, Lahore",
            )],
            defendants: vec![party(
                "d1",
                "XYZ Industries",
                Some("42101-2222222-2"),
                Some("+92-301-2222222"),
                Some("info@xyz.com"),
                "Industrial Area, Karachi",
            )],
        },
        opponent_lawyers: vec![
            "Advocate Tariq Mahmood".to_string(),
            "Advocate Fatima Sheikh".to_string(),
        ],
        legal_sections: BTreeSet::from([LegalSection::Cpc, LegalSection::FamilyLaws]),
        hearings: vec![Hearing {
            id: "h1".to_string(),
            hearing_number: 1,
            date: day(2024, 1, 20),
            court_order_type: CourtOrderType::Evidence,
            notes: "First hearing scheduled for evidence presentation".to_string(),
            assigned_lawyer_id: "1".to_string(),
            previous_comments: Some("Case filed successfully".to_string()),
            next_steps: Some("Prepare evidence documents".to_string()),
            case_id: "case1".to_string(),
            created_at: filed_civil,
            updated_at: filed_civil,
        }],
        documents: vec![Document {
            id: "doc1".to_string(),
            name: "Initial Petition.pdf".to_string(),
            doc_type: DocumentType::Petition,
            uri: "file://documents/petition1.pdf".to_string(),
            size: 1_024_000,
            mime_type: "application/pdf".to_string(),
            case_id: "case1".to_string(),
            hearing_id: None,
            uploaded_by: "1".to_string(),
            uploaded_at: filed_civil,
            tags: vec!["petition".to_string(), "initial".to_string()],
        }],
        assigned_lawyer_id: "1".to_string(),
        status: CaseStatus::Active,
        created_at: filed_civil,
        updated_at: filed_civil,
        created_by: "1".to_string(),
        team_id: DEMO_TEAM_ID.to_string(),
    };

    let criminal = Case {
        id: "case2".to_string(),
        case_number: "CRM/2024/002".to_string(),
        court_name: CourtName::SessionCourt,
        parties: CaseParties {
            plaintiffs: vec![party(
                "p2",
                "State vs Accused",
                None,
                None,
                None,
                "Government Prosecutor Office",
            )],
            defendants: vec![party(
                "d2",
                "Ahmad Ali",
                Some("42101-3333333-3"),
                Some("+92-302-3333333"),
                None,
                "Model Town, Lahore",
            )],
        },
        opponent_lawyers: vec!["Public Prosecutor".to_string()],
        legal_sections: BTreeSet::from([LegalSection::Ppc, LegalSection::CrPc]),
        hearings: vec![Hearing {
            id: "h2".to_string(),
            hearing_number: 1,
            date: day(2024, 1, 22),
            court_order_type: CourtOrderType::Arguments,
            notes: "Defense arguments to be presented".to_string(),
            assigned_lawyer_id: "2".to_string(),
            previous_comments: Some("Bail application filed".to_string()),
            next_steps: Some("Prepare defense arguments".to_string()),
            case_id: "case2".to_string(),
            created_at: filed_criminal,
            updated_at: filed_criminal,
        }],
        documents: Vec::new(),
        assigned_lawyer_id: "2".to_string(),
        status: CaseStatus::Active,
        created_at: filed_criminal,
        updated_at: filed_criminal,
        created_by: "2".to_string(),
        team_id: DEMO_TEAM_ID.to_string(),
    };

    vec![civil, criminal]
}

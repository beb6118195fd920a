pub mod case;
pub mod document;
pub mod hearing;
pub mod notification;
pub mod party;
pub mod user;

pub use case::{Case, CaseDraft, CaseParties, CasePatch, CaseStatus, CourtName, LegalSection};
pub use document::{Document, DocumentDraft, DocumentType};
pub use hearing::{CourtOrderType, Hearing, HearingDraft, HearingPatch};
pub use notification::{AppNotification, NotificationDraft, NotificationType};
pub use party::Party;
pub use user::{User, UserRole};

//! Fixed storage keys shared with earlier releases of the app

pub const CASES_DATA: &str = "cases_data";
pub const USER_DATA: &str = "user_data";
pub const AUTH_TOKEN: &str = "auth_token";
pub const APP_NOTIFICATIONS: &str = "app_notifications";

/// Every key the application writes
pub const ALL: [&str; 4] = [CASES_DATA, USER_DATA, AUTH_TOKEN, APP_NOTIFICATIONS];

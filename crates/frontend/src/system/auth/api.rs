use contracts::domain::a001_employee::roster::normalize_email;
use contracts::domain::a001_employee::Employee;
use contracts::system::auth::session::LoginRequest;
use contracts::system::auth::{login, resolve_access, AccessContext, SessionUser};
use contracts::system::config::AppConfig;

use crate::shared::firebase::fetch_collection;

/// Fresh copy of the HR roster.
pub async fn fetch_roster(config: &AppConfig) -> Result<Vec<Employee>, String> {
    let records = fetch_collection(&config.hr_url, config.fetch).await?;
    Ok(records.into_iter().map(Employee::from).collect())
}

/// Login with a work email, checked against the roster
pub async fn sign_in(config: &AppConfig, email: String) -> Result<SessionUser, String> {
    let request = LoginRequest { email };
    let roster = fetch_roster(config).await?;
    login(&request, &roster).map_err(|e| e.message().to_string())
}

/// Access context of the signed-in user against a fresh roster.
/// The administrator never needs the roster.
pub async fn load_access(config: &AppConfig, user: &SessionUser) -> Result<AccessContext, String> {
    let email = user.email();
    let roster = if normalize_email(&config.admin_email) == email {
        Vec::new()
    } else {
        fetch_roster(config).await?
    };
    let access = resolve_access(&email, &roster, &config.admin_email);
    log::debug!("Access for {}: {:?} ({})", email, access.role, access.greeting);
    Ok(access)
}

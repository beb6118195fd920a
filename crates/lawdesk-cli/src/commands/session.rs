//! Login, logout and whoami

use clap::Args;
use lawdesk_core::User;
use lawdesk_core_types::Sensitive;
use lawdesk_engine::{SessionState, Workspace};

use super::output::print_json;

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(long, required_unless_present = "biometric")]
    pub email: Option<String>,

    #[arg(long, env = "LAWDESK_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Authenticate with the device's biometrics instead of a password
    #[arg(long, conflicts_with_all = ["email", "password"])]
    pub biometric: bool,
}

#[derive(Debug, Args)]
pub struct WhoamiArgs {
    #[arg(long)]
    pub json: bool,
}

fn print_user(user: &User) {
    println!("{} <{}>", user.name, user.email);
    println!("  id: {}", user.id);
    println!("  role: {}", user.role);
    if let Some(team) = &user.team_id {
        println!("  team: {}", team);
    }
}

pub fn execute_login(
    workspace: &Workspace,
    args: LoginArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = if args.biometric {
        workspace.sessions.login_with_biometrics()?
    } else {
        let email = args.email.ok_or("--email is required")?;
        let password = args.password.ok_or("--password is required")?;
        workspace
            .sessions
            .login(&email, &Sensitive::new(password))?
    };
    println!("Logged in as {} <{}>", session.user.name, session.user.email);
    Ok(())
}

pub fn execute_logout(workspace: &Workspace) -> Result<(), Box<dyn std::error::Error>> {
    workspace.sessions.logout()?;
    println!("Logged out");
    Ok(())
}

pub fn execute_whoami(
    workspace: &Workspace,
    args: WhoamiArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    match workspace.sessions.restore() {
        SessionState::Authenticated(session) if args.json => print_json(&session.user),
        SessionState::Authenticated(session) => {
            print_user(&session.user);
            Ok(())
        }
        SessionState::Anonymous => Err("Not logged in".into()),
    }
}

//! Page Views
//!
//! One component per site page; the app picks one from the location path.

mod contact;
mod dashboard;
mod home;
mod login;
mod not_found;
mod profile;
mod register;
mod workspace;

pub use contact::ContactPage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use register::RegisterPage;
pub use workspace::WorkspacePage;

mod account_password;
mod creation_date;
mod new_account;
mod user_name;

pub use account_password::AccountPassword;
pub use creation_date::CreationDate;
pub use new_account::{validate, Candidate, NewAccount};
pub use user_name::UserName;

/// The reasons a submission can be turned away. All of these are user-input
/// errors to be shown back to the user, never fatal conditions: `validate`
/// returns one of them for *any* string input and does not panic.
///
/// The `Display` messages are the exact texts the host surfaces in its
/// error dialog, so they live on the enum rather than at the call sites.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    EmptyField,
    #[error("Please enter a valid date in the format dd, mm, yyyy.")]
    BadDateFormat,
    #[error(
        "Password must be at least 8 characters long and include at least \
         one uppercase letter, one lowercase letter, and one digit."
    )]
    WeakPassword,
}

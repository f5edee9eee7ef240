use crate::domain::{AccountPassword, CreationDate, UserName, ValidationError};

/// One submission as it arrives from the host: three raw strings, exactly
/// as the user typed them. Lives for a single `validate` call.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub user_name: String,
    pub password: String,
    pub date_of_create_account: String,
}

/// # Type Driven Development
/// Making an incorrect usage pattern unrepresentable, by construction is known as *type driven
/// development*. It is a powerful approach to encode the constraints of a domain we are trying to
/// model inside the type system, leaning on the compiler to make sure they are enforced.
///
/// A `NewAccount` can only be obtained by running a candidate through
/// `validate`, so `AccountStore::append` never has to re-check its input:
/// the precondition "only validated triples get appended" holds at compile
/// time.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub user_name: UserName,
    pub password: AccountPassword,
    pub date_of_create_account: CreationDate,
}

impl TryFrom<Candidate> for NewAccount {
    type Error = ValidationError;

    fn try_from(candidate: Candidate) -> Result<Self, Self::Error> {
        validate(
            &candidate.user_name,
            &candidate.password,
            &candidate.date_of_create_account,
        )
    }
}

/// Decides whether a submission may become a record, and why not if it
/// cannot. Checks run in a fixed order and the first failure wins:
///
/// 1. all three trimmed fields must be non-empty (`EmptyField`);
/// 2. the date must match one of the accepted formats (`BadDateFormat`);
/// 3. the password must satisfy the strength policy (`WeakPassword`).
///
/// Pure and deterministic: no side effects, no dependence on the current
/// time, and no panic for any input, however long or oddly encoded.
#[tracing::instrument(
    name = "Validating a submission",
    skip(user_name, password, date_of_create_account),
    fields(user_name = %user_name.trim())
)]
pub fn validate(
    user_name: &str,
    password: &str,
    date_of_create_account: &str,
) -> Result<NewAccount, ValidationError> {
    // The blank-field check covers all three fields up front, so an empty
    // date reports `EmptyField` rather than falling through to the format
    // check.
    if [user_name, password, date_of_create_account]
        .iter()
        .any(|field| field.trim().is_empty())
    {
        tracing::info!("Submission rejected: blank field");
        return Err(ValidationError::EmptyField);
    }

    let user_name = UserName::parse(user_name)?;
    let date_of_create_account = CreationDate::parse(date_of_create_account).map_err(|e| {
        tracing::info!("Submission rejected: unparseable date");
        e
    })?;
    let password = AccountPassword::parse(password).map_err(|e| {
        tracing::info!("Submission rejected: weak password");
        e
    })?;

    Ok(NewAccount {
        user_name,
        password,
        date_of_create_account,
    })
}

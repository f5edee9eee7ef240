use once_cell::sync::Lazy;
use user_registry::domain::{validate, ValidationError};
use user_registry::store::AccountStore;
use user_registry::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    // We cannot assign the output of `get_subscriber` to a variable based on the value TEST_LOG because
    // the sink is part of the type returned by `get_subscriber`, therefore they are not the same type.
    // We could work around it, but this is the most straight-forward way of moving forward.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber =
            get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

/// One user session: a fresh store plus the validate-then-append flow a
/// host runs when its save button is pressed.
pub(crate) struct TestApp {
    pub(crate) store: AccountStore,
}

impl TestApp {
    /// Mirrors the host's save path: validate first, append only on
    /// success, and hand the failure reason back for display otherwise.
    pub(crate) fn submit(
        &mut self,
        user_name: &str,
        password: &str,
        date_of_create_account: &str,
    ) -> Result<(), ValidationError> {
        let account = validate(user_name, password, date_of_create_account)?;
        self.store.append(account);
        Ok(())
    }
}

pub(crate) fn spawn_app() -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed. All other invocations
    // will instead skip execution.
    Lazy::force(&TRACING);

    TestApp {
        store: AccountStore::new(),
    }
}

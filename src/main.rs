use std::io::{self, BufRead, Write};
use user_registry::domain::validate;
use user_registry::store::AccountStore;
use user_registry::telemetry::{get_subscriber, init_subscriber};

/// Console stand-in for the form the records feed: prompts for the three
/// fields, runs them through validation, and on success appends to the
/// session's store and re-renders the table. All decision logic lives in
/// the library; this binary only gathers input and prints results.
fn main() -> io::Result<()> {
    // Diagnostics go to stderr so the table on stdout stays clean.
    let subscriber = get_subscriber("user-registry".into(), "info".into(), io::stderr);
    init_subscriber(subscriber);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut store = AccountStore::new();

    loop {
        let Some(user_name) = prompt(&mut lines, "User name")? else {
            break;
        };
        let Some(password) = prompt(&mut lines, "Password")? else {
            break;
        };
        // The four advertised forms are a stable contract with the user.
        let Some(date) = prompt(
            &mut lines,
            "Date of create account (dd, mm, yyyy | dd,mm,yyyy | dd/mm/yyyy | dd-mm-yyyy)",
        )?
        else {
            break;
        };

        match validate(&user_name, &password, &date) {
            Ok(account) => {
                store.append(account);
                println!("Data saved successfully!");
                render_table(&store);
            }
            Err(reason) => println!("Error: {reason}"),
        }
        println!();
    }

    Ok(())
}

/// Reads one line for the given label; `None` means the input ended.
fn prompt<B: BufRead>(
    lines: &mut io::Lines<B>,
    label: &str,
) -> io::Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;
    lines.next().transpose()
}

fn render_table(store: &AccountStore) {
    println!(
        "{:<24} {:<24} {:<24}",
        "User Name", "Password", "Date Of Create Account"
    );
    for record in store.records() {
        println!(
            "{:<24} {:<24} {:<24}",
            record.user_name, record.password, record.date_of_create_account
        );
    }
}

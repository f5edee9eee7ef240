use crate::domain::ValidationError;
use chrono::NaiveDate;

/// The date formats a submission is allowed to use, each paired with its
/// separator, tried in order with the first match winning. These four forms
/// are a stable contract with hosts: any format hint shown to the user must
/// advertise exactly these.
const ACCEPTED_FORMATS: [(&str, &str); 4] = [
    ("%d, %m, %Y", ", "),
    ("%d,%m,%Y", ","),
    ("%d/%m/%Y", "/"),
    ("%d-%m-%Y", "-"),
];

/// An account-creation date that parsed against one of the accepted
/// formats. Keeps the trimmed input text alongside the calendar value: the
/// text is stored verbatim (no reformatting after acceptance), while the
/// `NaiveDate` is there for hosts that need to compute with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationDate {
    raw: String,
    date: NaiveDate,
}

impl CreationDate {
    /// Parses the trimmed input against each accepted format in turn.
    /// `chrono` consumes the whole input and applies real calendar rules,
    /// so partial matches, day 00, day 32 and day 31 in a 30-day month all
    /// fail. Parsing is locale-invariant and independent of wall-clock
    /// time.
    pub fn parse(s: &str) -> Result<CreationDate, ValidationError> {
        let trimmed = s.trim();

        ACCEPTED_FORMATS
            .iter()
            .filter(|(_, separator)| has_exact_shape(trimmed, separator))
            .find_map(|(format, _)| NaiveDate::parse_from_str(trimmed, format).ok())
            .map(|date| Self {
                raw: trimmed.to_owned(),
                date,
            })
            .ok_or(ValidationError::BadDateFormat)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// `chrono` pads numeric fields leniently when parsing: a one-digit day or
/// a two-digit year would slip through `%d`/`%Y`. The contract wants
/// zero-padded two-digit day and month and a four-digit year, so component
/// widths are checked before `chrono` gets a say.
fn has_exact_shape(s: &str, separator: &str) -> bool {
    let mut parts = s.split(separator);
    let (Some(day), Some(month), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    [(day, 2), (month, 2), (year, 4)]
        .iter()
        .all(|(part, width)| {
            part.len() == *width && part.chars().all(|c| c.is_ascii_digit())
        })
}

/// Read-only access to the date exactly as the user typed it (modulo
/// trimming).
impl AsRef<str> for CreationDate {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

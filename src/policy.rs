use std::collections::HashSet;

/// Which identities hold administrator rights.
///
/// The allow-list comes from configuration, comparison is case-insensitive
/// on the email only, and the answer is consulted on every session load
/// rather than stored on the user row.
#[derive(Clone, Debug, Default)]
pub struct AdminPolicy {
    emails: HashSet<String>,
}

impl AdminPolicy {
    pub fn new<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        AdminPolicy {
            emails: emails
                .into_iter()
                .map(|e| e.as_ref().trim().to_lowercase())
                .filter(|e| !e.is_empty())
                .collect(),
        }
    }

    pub fn from_csv(raw: &str) -> Self {
        Self::new(raw.split(','))
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }

    pub fn is_admin(&self, email: &str) -> bool {
        self.emails.contains(&email.to_lowercase())
    }
}

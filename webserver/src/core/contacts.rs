//! Contact directory and search matching

use shared::Contact;

/// Fragment returned for an empty search term
pub const EMPTY_RESULT_ROW: &str = "<tr></tr>";

/// Normalized search term. `None` means "nothing to search for".
pub fn normalize_term(raw: &str) -> Option<String> {
    let term = raw.to_lowercase();
    if term.is_empty() { None } else { Some(term) }
}

/// Contacts whose name or email contains `needle`, in input order.
/// `needle` must already be normalized.
pub fn match_contacts<'a, I>(contacts: I, needle: &str) -> Vec<Contact>
where
    I: IntoIterator<Item = &'a Contact>,
{
    contacts
        .into_iter()
        .filter(|contact| contact.matches(needle))
        .cloned()
        .collect()
}

/// Fixed, read-only contact list used by local search
#[derive(Debug, Clone)]
pub struct ContactDirectory {
    contacts: Vec<Contact>,
}

impl ContactDirectory {
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    /// The five demo contacts
    pub fn builtin() -> Self {
        Self::new(vec![
            Contact::new("John Doe", "john.doe@test.com"),
            Contact::new("Jane Doe", "jane.doe@test.com"),
            Contact::new("Bob Ross", "bobross@test.com"),
            Contact::new("Mike Stan", "mikke@test.com"),
            Contact::new("Jenna Smith", "jennasm@test.com"),
        ])
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn search(&self, needle: &str) -> Vec<Contact> {
        match_contacts(&self.contacts, needle)
    }
}

impl Default for ContactDirectory {
    fn default() -> Self {
        Self::builtin()
    }
}

//! Validation pipeline for the registration form
//!
//! Rules run in a fixed order and the first failure wins. A
//! [`RegistrationInput`] can only be obtained from [`validate_registration`],
//! so nothing partially valid ever reaches the network.

use serde::Serialize;

pub const MIN_NAME_LENGTH: usize = 3;
pub const MAX_NAME_LENGTH: usize = 50;

pub const MIN_ORGANIZATION_LENGTH: usize = 3;
pub const MAX_ORGANIZATION_LENGTH: usize = 100;

/// Organizations shorter than this are treated as not specific enough
pub const MIN_SPECIFIC_ORGANIZATION_LENGTH: usize = 5;

/// Longest allowed run of one repeated character in an organization name
pub const MAX_CHARACTER_RUN: usize = 3;

/// Temporary and placeholder email domains
pub const DISPOSABLE_EMAIL_DOMAINS: &[&str] = &[
    "10minutemail.com",
    "temp-mail.org",
    "guerrillamail.com",
    "mailinator.com",
    "example.com",
];

/// Substrings that mark an organization name as made up
pub const PLACEHOLDER_ORGANIZATION_WORDS: &[&str] = &[
    "test",
    "fake",
    "dummy",
    "example",
    "sample",
    "abc",
    "xyz",
    "random",
    "temp",
    "temporary",
    "demo",
    "trial",
    "mock",
    "placeholder",
    "none",
    "n/a",
    "na",
    "unknown",
    "anonymous",
    "guest",
    "user",
    "admin",
    "root",
    "system",
    "default",
    "null",
    "void",
    "empty",
    "blank",
    "qwerty",
    "asdf",
    "123",
];

/// Organization names that say nothing on their own
pub const GENERIC_ORGANIZATION_NAMES: &[&str] = &[
    "college",
    "university",
    "school",
    "institute",
    "academy",
    "center",
    "group",
    "company",
    "corp",
    "ltd",
    "inc",
];

/// Punctuation allowed in organization names besides letters, digits and whitespace
const ORGANIZATION_PUNCTUATION: &[char] = &['&', '.', ',', '\'', '-'];

/// Punctuation allowed in the local part of an email address
const EMAIL_LOCAL_PUNCTUATION: &[char] = &['.', '_', '%', '+', '-'];

/// Rule violations, in pipeline order. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingFields,
    #[error("Please enter a valid full name (no numbers or special characters).")]
    InvalidName,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please use a valid email address, not a temporary one.")]
    DisposableEmailDomain,
    #[error("Please enter a valid college or organization name.")]
    InvalidOrganization,
    #[error("Please enter a real college or organization name.")]
    PlaceholderOrganization,
    #[error("Please enter a properly formatted organization name.")]
    ImproperCasing,
    #[error("Please enter a valid organization name.")]
    RepeatedCharacters,
    #[error("Please enter a complete and specific organization name.")]
    GenericOrganization,
}

/// A registration that passed every rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationInput {
    #[serde(rename = "fullName")]
    full_name: String,
    email: String,
    #[serde(rename = "collegeOrOrganization")]
    organization: String,
}

impl RegistrationInput {
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }
}

/// Run the whole pipeline over raw field values.
///
/// Fields are trimmed before any rule runs.
pub fn validate_registration(
    full_name: &str,
    email: &str,
    organization: &str,
) -> Result<RegistrationInput, ValidationError> {
    let full_name = full_name.trim();
    let email = email.trim();
    let organization = organization.trim();

    if full_name.is_empty() || email.is_empty() || organization.is_empty() {
        return Err(ValidationError::MissingFields);
    }

    validate_full_name(full_name)?;
    validate_email(email)?;
    validate_organization(organization)?;

    Ok(RegistrationInput {
        full_name: full_name.to_string(),
        email: email.to_string(),
        organization: organization.to_string(),
    })
}

/// Alphabetic words separated by single spaces
pub fn validate_full_name(name: &str) -> Result<(), ValidationError> {
    let length = name.chars().count();
    let well_formed = name
        .split(' ')
        .all(|word| !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()));

    if !well_formed || !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&length) {
        return Err(ValidationError::InvalidName);
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if !is_email_shaped(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if is_disposable_domain(email) {
        return Err(ValidationError::DisposableEmailDomain);
    }
    Ok(())
}

/// `local@domain.tld` with a letters-only TLD of two or more characters
fn is_email_shaped(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || EMAIL_LOCAL_PUNCTUATION.contains(&c));
    if !local_ok {
        return false;
    }

    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    let host_ok = !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
    let tld_ok = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());

    host_ok && tld_ok
}

fn is_disposable_domain(email: &str) -> bool {
    email
        .split_once('@')
        .map(|(_, domain)| domain.to_lowercase())
        .is_some_and(|domain| DISPOSABLE_EMAIL_DOMAINS.contains(&domain.as_str()))
}

pub fn validate_organization(organization: &str) -> Result<(), ValidationError> {
    let length = organization.chars().count();
    let lowered = organization.to_lowercase();

    let charset_ok = organization.chars().all(|c| {
        c.is_ascii_alphanumeric() || c.is_whitespace() || ORGANIZATION_PUNCTUATION.contains(&c)
    });
    if !charset_ok || !(MIN_ORGANIZATION_LENGTH..=MAX_ORGANIZATION_LENGTH).contains(&length) {
        return Err(ValidationError::InvalidOrganization);
    }

    if PLACEHOLDER_ORGANIZATION_WORDS
        .iter()
        .any(|word| lowered.contains(word))
    {
        return Err(ValidationError::PlaceholderOrganization);
    }

    let single_lowercase_word =
        organization == lowered && length > 3 && !organization.contains(' ');
    let shouting = organization == organization.to_uppercase() && length > 3;
    if single_lowercase_word || shouting {
        return Err(ValidationError::ImproperCasing);
    }

    if longest_character_run(organization) > MAX_CHARACTER_RUN {
        return Err(ValidationError::RepeatedCharacters);
    }

    if GENERIC_ORGANIZATION_NAMES.contains(&lowered.as_str())
        || length < MIN_SPECIFIC_ORGANIZATION_LENGTH
    {
        return Err(ValidationError::GenericOrganization);
    }

    Ok(())
}

fn longest_character_run(s: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous = None;

    for c in s.chars() {
        if Some(c) == previous {
            current += 1;
        } else {
            current = 1;
            previous = Some(c);
        }
        longest = longest.max(current);
    }

    longest
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: &str = "John Smith";
    const EMAIL: &str = "john.smith@university.edu";
    const ORG: &str = "Massachusetts Institute of Technology";

    fn org_error(org: &str) -> Option<ValidationError> {
        validate_registration(NAME, EMAIL, org).err()
    }

    #[test]
    fn test_valid_registration() {
        let input = validate_registration(NAME, EMAIL, ORG).unwrap();
        assert_eq!(input.full_name(), "John Smith");
        assert_eq!(input.email(), EMAIL);
        assert_eq!(input.organization(), ORG);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let input = validate_registration("  John Smith ", " john@college.org\t", ORG).unwrap();
        assert_eq!(input.full_name(), "John Smith");
        assert_eq!(input.email(), "john@college.org");
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            validate_registration("", EMAIL, ORG),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            validate_registration(NAME, "   ", ORG),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            validate_registration(NAME, EMAIL, ""),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_missing_fields_checked_before_format() {
        // An invalid name would fail too, but emptiness is reported first
        assert_eq!(
            validate_registration("J0hn", "", ORG),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_full_name_rules() {
        assert!(validate_full_name("John Smith").is_ok());
        assert!(validate_full_name("Ada").is_ok());
        assert!(validate_full_name("Mary Ann Evans").is_ok());

        assert_eq!(validate_full_name("John123"), Err(ValidationError::InvalidName));
        assert_eq!(validate_full_name("J"), Err(ValidationError::InvalidName));
        assert_eq!(validate_full_name("Jo"), Err(ValidationError::InvalidName));
        assert_eq!(validate_full_name("John  Smith"), Err(ValidationError::InvalidName));
        assert_eq!(validate_full_name("O'Brien"), Err(ValidationError::InvalidName));
        assert_eq!(
            validate_full_name(&"a".repeat(51)),
            Err(ValidationError::InvalidName)
        );
        assert!(validate_full_name(&"a".repeat(50)).is_ok());
    }

    #[test]
    fn test_email_format() {
        assert!(validate_email("user@college.edu").is_ok());
        assert!(validate_email("first.last+tag@mail.sub-domain.co").is_ok());

        assert_eq!(validate_email("not-an-email"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("user@host"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("user@host.c"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("user@host.c0m"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("@host.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("a@b@host.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("us er@host.com"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_disposable_domains() {
        assert_eq!(
            validate_email("user@example.com"),
            Err(ValidationError::DisposableEmailDomain)
        );
        assert_eq!(
            validate_email("someone@Mailinator.COM"),
            Err(ValidationError::DisposableEmailDomain)
        );
        // Subdomains are not on the list
        assert!(validate_email("user@mail.example.com").is_ok());
    }

    #[test]
    fn test_format_checked_before_domain() {
        assert_eq!(
            validate_registration(NAME, "not-an-email", ORG),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_organization_charset_and_length() {
        assert_eq!(
            org_error("Stanford University!"),
            Some(ValidationError::InvalidOrganization)
        );
        assert_eq!(org_error("Ox"), Some(ValidationError::InvalidOrganization));
        assert_eq!(
            org_error(&format!("Stanford {}", "b".repeat(100))),
            Some(ValidationError::InvalidOrganization)
        );
        assert_eq!(org_error("Johnson & Johnson, Ltd."), None);
        assert_eq!(org_error("St. Mary's College"), None);
    }

    #[test]
    fn test_placeholder_organizations() {
        assert_eq!(
            org_error("Test Organization"),
            Some(ValidationError::PlaceholderOrganization)
        );
        assert_eq!(
            org_error("My DEMO Labs"),
            Some(ValidationError::PlaceholderOrganization)
        );
        // Substring match, not whole words
        assert_eq!(
            org_error("National Labs"),
            Some(ValidationError::PlaceholderOrganization)
        );
    }

    #[test]
    fn test_improper_casing() {
        assert_eq!(org_error("stanford"), Some(ValidationError::ImproperCasing));
        assert_eq!(org_error("STANFORD"), Some(ValidationError::ImproperCasing));
        assert_eq!(org_error("STANFORD LABS"), Some(ValidationError::ImproperCasing));
        // Lowercase with a space is allowed through this rule
        assert_eq!(org_error("stanford labs"), None);
    }

    #[test]
    fn test_repeated_characters() {
        assert_eq!(
            org_error("aaaaaaa University"),
            Some(ValidationError::RepeatedCharacters)
        );
        assert_eq!(
            org_error("Boooo Works"),
            Some(ValidationError::RepeatedCharacters)
        );
        assert_eq!(org_error("Booo Works"), None);
    }

    #[test]
    fn test_generic_or_short_organization() {
        assert_eq!(org_error("College"), Some(ValidationError::GenericOrganization));
        assert_eq!(org_error("University"), Some(ValidationError::GenericOrganization));
        assert_eq!(org_error("Corp"), Some(ValidationError::GenericOrganization));
        assert_eq!(org_error("Cal Z"), None);
    }

    #[test]
    fn test_short_uppercase_acronym_rejected() {
        // Too short for the casing heuristic, caught by the specificity rule
        assert_eq!(org_error("MIT"), Some(ValidationError::GenericOrganization));
    }

    #[test]
    fn test_longest_character_run() {
        assert_eq!(longest_character_run(""), 0);
        assert_eq!(longest_character_run("abc"), 1);
        assert_eq!(longest_character_run("aabbbc"), 3);
        assert_eq!(longest_character_run("xaaaa"), 4);
    }

    #[test]
    fn test_input_serializes_with_wire_names() {
        let input = validate_registration(NAME, EMAIL, ORG).unwrap();
        let json = serde_json::to_value(&input).unwrap();

        assert_eq!(json["fullName"], "John Smith");
        assert_eq!(json["email"], EMAIL);
        assert_eq!(json["collegeOrOrganization"], ORG);
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_messages_are_distinct() {
        let errors = [
            ValidationError::MissingFields,
            ValidationError::InvalidName,
            ValidationError::InvalidEmail,
            ValidationError::DisposableEmailDomain,
            ValidationError::InvalidOrganization,
            ValidationError::PlaceholderOrganization,
            ValidationError::ImproperCasing,
            ValidationError::RepeatedCharacters,
            ValidationError::GenericOrganization,
        ];
        let messages: std::collections::HashSet<String> =
            errors.iter().map(|e| e.to_string()).collect();
        assert_eq!(messages.len(), errors.len());
    }
}

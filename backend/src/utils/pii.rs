//! Masking helpers for personal data that ends up in log fields.

const MASKED: &str = "***";

/// `asha@example.com` -> `a***@e***.com`
pub fn mask_email(email: &str) -> String {
    let Some((local, domain)) = email.trim().split_once('@') else {
        return MASKED.to_string();
    };
    let local_initial = local.chars().next().unwrap_or('*');
    let (label, tld) = domain.split_once('.').unwrap_or((domain, ""));
    let label_initial = label.chars().next().unwrap_or('*');

    if tld.is_empty() {
        format!("{local_initial}***@{label_initial}***")
    } else {
        format!("{local_initial}***@{label_initial}***.{tld}")
    }
}

/// Keeps the last two digits of a phone number.
pub fn mask_phone(phone: &str) -> String {
    let digits: Vec<char> = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 4 {
        return MASKED.to_string();
    }
    let tail: String = digits[digits.len() - 2..].iter().collect();
    format!("{MASKED}{tail}")
}

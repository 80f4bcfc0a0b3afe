//! Vendor messaging link construction
//!
//! Builds the pre-filled `wa.me` URL from the order message. Escaping
//! lives here, at the presentation boundary; the report formatter never
//! escapes its own output.

/// Percent-encode a string for use as a URL query value
///
/// Everything outside the RFC 3986 unreserved set (ALPHA / DIGIT / `-` /
/// `.` / `_` / `~`) is encoded, including UTF-8 continuation bytes.
pub fn percent_encode(s: &str) -> String {
    let mut encoded = String::with_capacity(s.len());

    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char);
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }

    encoded
}

/// Build the pre-filled WhatsApp link for an order message
///
/// Non-digit characters in the phone number (spaces, `+`, dashes) are
/// stripped; `wa.me` expects digits only.
pub fn whatsapp_link(phone: &str, message: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    format!("https://wa.me/{}?text={}", digits, percent_encode(message))
}

//! Output-name convention for produced documents.
//!
//! The composer never chooses where its output goes; the export collaborator
//! names files `"{invoice number}_{vendor}"` with the vendor sanitized for
//! filesystem use.

/// Build the conventional output file stem for an invoice, without extension.
pub fn output_stem(invoice_number: &str, vendor: &str) -> String {
    format!("{}_{}", invoice_number, safe_component(vendor))
}

/// Sanitize a name for use in a filename: strip everything but word
/// characters, hyphens, and spaces, collapse whitespace runs to a single
/// `_`, and cap the length at 80 characters. An empty result becomes
/// `"invoice"`.
pub fn safe_component(value: &str) -> String {
    let cleaned: String = value
        .trim()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || *c == ' ')
        .collect();

    let joined = cleaned.split_whitespace().collect::<Vec<_>>().join("_");
    let capped: String = joined.chars().take(80).collect();

    if capped.is_empty() {
        "invoice".to_string()
    } else {
        capped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vendor_names_are_sanitized() {
        assert_eq!(safe_component("Jacent"), "Jacent");
        assert_eq!(
            safe_component("Acme Corp. (US)  Ltd"),
            "Acme_Corp_US_Ltd"
        );
        assert_eq!(safe_component("a/b\\c:d"), "abcd");
    }

    #[test]
    fn empty_vendor_falls_back() {
        assert_eq!(safe_component("   "), "invoice");
        assert_eq!(safe_component("!!!"), "invoice");
    }

    #[test]
    fn long_names_are_capped() {
        let long = "x".repeat(200);
        assert_eq!(safe_component(&long).chars().count(), 80);
    }

    #[test]
    fn stem_combines_number_and_vendor() {
        assert_eq!(output_stem("1322", "Jacent"), "1322_Jacent");
    }
}

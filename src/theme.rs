use crate::colour::{colours, Colour};
use crate::units::Pt;

/// Brand palette, type scale, and issuer copy. The template's look lives
/// here; its coordinates live in [`GeometryConfig`](crate::GeometryConfig).
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Brand accent used for header bars, titles, and the bottom stripe.
    pub brand: Colour,
    /// Fill behind the item row.
    pub row_shade: Colour,
    /// Fill behind the totals amount row and breakdown.
    pub totals_shade: Colour,
    /// Primary text colour.
    pub ink: Colour,
    /// De-emphasised text (issuer address, footer contact lines).
    pub muted: Colour,

    pub title_size: Pt,
    pub label_size: Pt,
    pub value_size: Pt,
    pub table_header_size: Pt,
    pub issuer_name_size: Pt,
    pub issuer_address_size: Pt,
    pub totals_value_size: Pt,
    pub payment_title_size: Pt,
    pub payment_body_size: Pt,
    pub footer_title_size: Pt,
    pub footer_body_size: Pt,

    pub issuer_name: String,
    pub issuer_address: Vec<String>,
    pub bank_branch: String,
    pub account_holder: String,
    pub thank_you: String,
    pub contact_lines: Vec<String>,
}

impl Default for Theme {
    fn default() -> Theme {
        Theme {
            brand: Colour::new_rgb_hex(0x00A1E0),
            row_shade: Colour::new_rgb_hex(0xF3F5F7),
            totals_shade: Colour::new_rgb_hex(0xF2F2F2),
            ink: colours::BLACK,
            muted: colours::GREY,

            title_size: Pt(22.0),
            label_size: Pt(9.0),
            value_size: Pt(9.0),
            table_header_size: Pt(10.0),
            issuer_name_size: Pt(10.0),
            issuer_address_size: Pt(9.0),
            totals_value_size: Pt(10.0),
            payment_title_size: Pt(11.0),
            payment_body_size: Pt(10.0),
            footer_title_size: Pt(12.0),
            footer_body_size: Pt(9.0),

            issuer_name: "Peramal Services LLC".to_string(),
            issuer_address: vec![
                "13284 Pond Springs Road".to_string(),
                "Suite 501".to_string(),
                "Austin, TX 78729".to_string(),
            ],
            bank_branch: "VERABANK - (TX 78641)".to_string(),
            account_holder: "Peramal Services LLC".to_string(),
            thank_you: "Thank you for your business!".to_string(),
            contact_lines: vec![
                "If you have any queries regarding this invoice,".to_string(),
                "please reach us at accounts@peramalservices.com".to_string(),
            ],
        }
    }
}

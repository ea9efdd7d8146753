/// One raw cell from the ingestion collaborator. Spreadsheet values arrive
/// either as text or as numbers; numeric identifiers (account numbers,
/// invoice numbers) frequently arrive float-encoded.
#[derive(Clone, PartialEq, Debug)]
pub enum Field {
    Text(String),
    Number(f64),
}

impl Field {
    pub fn text<S: Into<String>>(value: S) -> Field {
        Field::Text(value.into())
    }

    pub fn number(value: f64) -> Field {
        Field::Number(value)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Field::Text(s) => Some(s.as_str()),
            Field::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Field::Text(_) => None,
            Field::Number(n) => Some(*n),
        }
    }

    /// Best-effort string form of the raw value, used as the fallback when a
    /// richer interpretation fails. Whole numbers print without a trailing
    /// fractional part.
    pub fn display(&self) -> String {
        match self {
            Field::Text(s) => s.clone(),
            Field::Number(n) if n.fract() == 0.0 && n.is_finite() => format!("{n:.0}"),
            Field::Number(n) => n.to_string(),
        }
    }
}

impl From<&str> for Field {
    fn from(value: &str) -> Field {
        Field::Text(value.to_string())
    }
}

impl From<String> for Field {
    fn from(value: String) -> Field {
        Field::Text(value)
    }
}

impl From<f64> for Field {
    fn from(value: f64) -> Field {
        Field::Number(value)
    }
}

/// One normalized invoice row, as handed over by the ingestion collaborator.
/// Absent columns are [None], never an error; every consumer degrades to an
/// empty string. A record is formatted and rendered exactly once, and no
/// state survives between records.
#[derive(Clone, Debug, Default)]
pub struct InvoiceRecord {
    pub invoice_number: Option<Field>,
    pub invoice_date: Option<Field>,
    pub month_label: Option<Field>,
    pub vendor_name: Option<Field>,
    pub description: Option<Field>,
    pub bill_to_address: Option<Field>,
    pub amount: Option<Field>,
    pub account_number: Option<Field>,
    pub routing_number: Option<Field>,
}

/// The bill-to panel content: a company name line and the remaining address
/// lines below it.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct BillTo {
    pub company: String,
    pub address_lines: Vec<String>,
}

/// Strategy for splitting a raw multi-line bill-to field into a company name
/// and address lines. The split is heuristic by nature, so it is pluggable
/// rather than baked into the composer.
pub trait AddressSplit {
    fn split(&self, bill_to: &str) -> BillTo;
}

/// Splits the first non-empty line at the first digit: everything before it
/// is the company name, the rest starts the street address.
///
/// This is a documented heuristic, not a parser: a company name that itself
/// contains a digit past position zero (e.g. "Studio 54 Media") will be cut
/// short. A leading digit is treated as no split, so names like
/// "3M Corporation" survive intact.
pub struct FirstDigitSplit;

impl AddressSplit for FirstDigitSplit {
    fn split(&self, bill_to: &str) -> BillTo {
        let mut lines = bill_to
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty());

        let first = match lines.next() {
            Some(first) => first,
            None => return BillTo::default(),
        };
        let rest: Vec<String> = lines.map(str::to_string).collect();

        match first.char_indices().find(|(_, ch)| ch.is_numeric()) {
            Some((idx, _)) if idx > 0 => {
                let company = first[..idx].trim_end().to_string();
                let street = first[idx..].trim().to_string();
                let mut address_lines = vec![street];
                address_lines.extend(rest);
                BillTo {
                    company,
                    address_lines,
                }
            }
            _ => BillTo {
                company: first.to_string(),
                address_lines: rest,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_company_from_inline_street_at_first_digit() {
        let bill_to = FirstDigitSplit.split("Dell Technologies 1 Dell Way\nRound Rock, TX 78682");
        assert_eq!(bill_to.company, "Dell Technologies");
        assert_eq!(
            bill_to.address_lines,
            vec!["1 Dell Way".to_string(), "Round Rock, TX 78682".to_string()]
        );
    }

    #[test]
    fn no_digit_means_whole_line_is_the_company() {
        let bill_to = FirstDigitSplit.split("Dell Technologies\n1 Dell Way\nRound Rock, TX 78682");
        assert_eq!(bill_to.company, "Dell Technologies");
        assert_eq!(
            bill_to.address_lines,
            vec!["1 Dell Way".to_string(), "Round Rock, TX 78682".to_string()]
        );
    }

    #[test]
    fn leading_digit_does_not_split() {
        let bill_to = FirstDigitSplit.split("3M Corporation\nSt. Paul, MN 55144");
        assert_eq!(bill_to.company, "3M Corporation");
        assert_eq!(bill_to.address_lines, vec!["St. Paul, MN 55144".to_string()]);
    }

    #[test]
    fn empty_input_yields_empty_bill_to() {
        let bill_to = FirstDigitSplit.split("  \n \n");
        assert_eq!(bill_to, BillTo::default());
    }

    #[test]
    fn whole_number_fields_display_without_fraction() {
        assert_eq!(Field::number(1044100301.0).display(), "1044100301");
        assert_eq!(Field::number(2.5).display(), "2.5");
        assert_eq!(Field::text("  hi ").display(), "  hi ");
    }
}

//! The invoice composer: turns one [InvoiceRecord] into drawing commands on
//! a [Surface].
//!
//! The template is fixed. Sections draw in a set order (logo, issuer block,
//! title, metadata, bill-to panel, item table, totals, payment, footer,
//! stripe) and every command carries its own style, so a render is a pure
//! function of the record, geometry, and theme. Formatting never fails;
//! missing fields simply leave their slot blank.

use crate::font::Face;
use crate::format::{format_date, format_money, format_numeric_id};
use crate::geometry::{Geometry, GeometryConfig};
use crate::image::Image;
use crate::invoice::{AddressSplit, Field, FirstDigitSplit, InvoiceRecord};
use crate::layout::wrap;
use crate::rect::Rect;
use crate::surface::{Surface, TextStyle};
use crate::theme::Theme;
use crate::units::Pt;
use crate::{colours, PageSize};
use id_arena::Id;

const TITLE: &str = "INVOICE";
const BILL_TO_LABEL: &str = "BILL TO";
const META_LABELS: [&str; 3] = ["INVOICE NO      :", "INVOICE DATE    :", "TOTAL DUE       :"];
const DESC_HEADER: &str = "Item Description";
const AMOUNT_HEADER: &str = "Amount";
const MAX_DESCRIPTION_LINES: usize = 2;

/// A registered logo image plus its intrinsic pixel dimensions, so it can be
/// fitted into the logo box without distortion.
#[derive(Copy, Clone, Debug)]
pub struct Logo {
    pub image: Id<Image>,
    pub width: f32,
    pub height: f32,
}

/// Renders invoice records onto a fixed single-page template.
///
/// A composer is configured once (page size, optional logo, address split
/// strategy) and can then render any number of records; rendering borrows
/// the composer immutably and carries no state from one record to the next.
pub struct InvoiceComposer {
    geometry: Geometry,
    theme: Theme,
    split: Box<dyn AddressSplit>,
    logo: Option<Logo>,
}

impl InvoiceComposer {
    pub fn new(page: PageSize) -> InvoiceComposer {
        InvoiceComposer::with_config(page, GeometryConfig::default(), Theme::default())
    }

    pub fn with_config(page: PageSize, cfg: GeometryConfig, theme: Theme) -> InvoiceComposer {
        InvoiceComposer {
            geometry: Geometry::new(page, cfg),
            theme,
            split: Box::new(FirstDigitSplit),
            logo: None,
        }
    }

    /// Attach a logo to be fitted into the template's logo box, preserving
    /// its aspect ratio. `width` and `height` are the image's intrinsic
    /// dimensions.
    pub fn logo(mut self, image: Id<Image>, width: f32, height: f32) -> InvoiceComposer {
        self.logo = Some(Logo {
            image,
            width,
            height,
        });
        self
    }

    /// Replace the bill-to address split heuristic.
    pub fn address_split(mut self, split: Box<dyn AddressSplit>) -> InvoiceComposer {
        self.split = split;
        self
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Draw one record onto the surface. Infallible: formatting degrades to
    /// blanks and I/O happens later, when the document is written out.
    pub fn render<S: Surface>(&self, record: &InvoiceRecord, surface: &mut S) {
        self.draw_logo(surface);
        self.draw_issuer_block(surface);
        self.draw_title(surface);
        self.draw_metadata(record, surface);
        self.draw_bill_to(record, surface);
        self.draw_item_table(record, surface);
        self.draw_totals(record, surface);
        self.draw_payment(record, surface);
        self.draw_footer(surface);
        self.draw_stripe(surface);
    }

    fn draw_logo<S: Surface>(&self, surface: &mut S) {
        let logo = match self.logo {
            Some(logo) => logo,
            None => return,
        };
        let slot = self.geometry.logo;
        let scale = (slot.width().0 / logo.width).min(slot.height().0 / logo.height);
        let w = Pt(logo.width * scale);
        let h = Pt(logo.height * scale);
        let x = slot.x1 + (slot.width() - w) / 2.0;
        let y = slot.y1 + (slot.height() - h) / 2.0;
        surface.draw_image(Rect::sized(x, y, w, h), logo.image);
    }

    fn draw_issuer_block<S: Surface>(&self, surface: &mut S) {
        let theme = &self.theme;
        let cfg = &self.geometry.cfg;
        let (x, mut y) = self.geometry.address_origin;

        let name = TextStyle::new(Face::Bold, theme.issuer_name_size, theme.brand);
        surface.draw_text(x, y, &name, &theme.issuer_name);
        y = y - cfg.address_name_gap;

        let line = TextStyle::new(Face::Regular, theme.issuer_address_size, theme.muted);
        for addr in &theme.issuer_address {
            surface.draw_text(x, y, &line, addr);
            y = y - cfg.address_line_gap;
        }
    }

    fn draw_title<S: Surface>(&self, surface: &mut S) {
        let style = TextStyle::new(Face::Bold, self.theme.title_size, self.theme.ink);
        let (x, y) = self.geometry.title_origin;
        surface.draw_text(x, y, &style, TITLE);
    }

    fn draw_metadata<S: Surface>(&self, record: &InvoiceRecord, surface: &mut S) {
        let theme = &self.theme;
        let cfg = &self.geometry.cfg;
        let (x, top) = self.geometry.meta_origin;

        let label = TextStyle::new(Face::Regular, theme.label_size, theme.ink);
        let value = TextStyle::new(Face::Bold, theme.value_size, theme.ink);

        let values = [
            format_numeric_id(record.invoice_number.as_ref()),
            format_date(record.invoice_date.as_ref()),
            format_money(record.amount.as_ref()),
        ];

        for (i, (text, val)) in META_LABELS.iter().zip(values.iter()).enumerate() {
            let y = top - cfg.meta_line_gap * i as f32;
            surface.draw_text(x, y, &label, text);
            surface.draw_text(x + cfg.meta_value_offset, y, &value, val);
        }
    }

    fn draw_bill_to<S: Surface>(&self, record: &InvoiceRecord, surface: &mut S) {
        let theme = &self.theme;
        let cfg = &self.geometry.cfg;
        let header = self.geometry.bill_to_header;
        let body = self.geometry.bill_to_body;

        surface.fill_rect(header, theme.brand);
        let header_style = TextStyle::new(Face::Bold, theme.value_size, colours::WHITE);
        surface.draw_text(
            header.x1 + cfg.cell_inset,
            header.y1 + cfg.bar_label_rise,
            &header_style,
            BILL_TO_LABEL,
        );

        let raw = match &record.bill_to_address {
            Some(field) => field.display(),
            None => return,
        };
        let bill_to = self.split.split(&raw);
        if bill_to.company.is_empty() && bill_to.address_lines.is_empty() {
            return;
        }

        let max_width = body.width() - cfg.cell_inset * 2.0;
        let x = body.x1 + cfg.cell_inset;
        let mut y = body.y2 - cfg.panel_first_drop;

        let company = TextStyle::new(Face::Bold, theme.value_size, theme.ink);
        for line in wrap(surface, &bill_to.company, Face::Bold, theme.value_size, max_width) {
            surface.draw_text(x, y, &company, &line);
            y = y - cfg.company_line_gap;
        }

        let address = TextStyle::new(Face::Regular, theme.value_size, theme.ink);
        for addr in &bill_to.address_lines {
            for line in wrap(surface, addr, Face::Regular, theme.value_size, max_width) {
                surface.draw_text(x, y, &address, &line);
                y = y - cfg.panel_line_gap;
            }
        }
    }

    fn draw_item_table<S: Surface>(&self, record: &InvoiceRecord, surface: &mut S) {
        let theme = &self.theme;
        let cfg = &self.geometry.cfg;
        let header = self.geometry.table_header;
        let row = self.geometry.item_row;
        let divider_x = self.geometry.divider_x;

        surface.fill_rect(header, theme.brand);
        let header_style = TextStyle::new(Face::Bold, theme.value_size, colours::WHITE);
        let header_y = header.y1 + cfg.bar_label_rise;
        surface.draw_text(header.x1 + cfg.cell_inset, header_y, &header_style, DESC_HEADER);
        self.draw_text_right(
            surface,
            header.x2 - cfg.cell_inset,
            header_y,
            &header_style,
            AMOUNT_HEADER,
        );

        surface.fill_rect(row, theme.row_shade);
        surface.stroke_rect(row, theme.ink, 1.0);
        surface.stroke_line(
            (divider_x, row.y1),
            (divider_x, row.y2),
            theme.ink,
            1.0,
        );

        let body = TextStyle::new(Face::Regular, theme.value_size, theme.ink);
        if let Some(desc) = &record.description {
            let desc = desc.display();
            let max_width = divider_x - row.x1 - cfg.cell_inset * 2.0;
            let mut y = row.y2 - cfg.desc_first_drop;
            let lines = wrap(surface, desc.trim(), Face::Regular, theme.value_size, max_width);
            for line in lines.iter().take(MAX_DESCRIPTION_LINES) {
                surface.draw_text(row.x1 + cfg.cell_inset, y, &body, line);
                y = y - cfg.desc_line_gap;
            }
        }

        let amount = format_money(record.amount.as_ref());
        let amount_y = row.y1 + row.height() / 2.0 + cfg.value_center_rise;
        self.draw_text_right(surface, row.x2 - cfg.cell_inset, amount_y, &body, &amount);
    }

    fn draw_totals<S: Surface>(&self, record: &InvoiceRecord, surface: &mut S) {
        let theme = &self.theme;
        let cfg = &self.geometry.cfg;
        let total = format_money(record.amount.as_ref());
        let zero = format_money(Some(&Field::number(0.0)));

        surface.stroke_rect(self.geometry.totals_outer, theme.ink, 1.0);

        let header = self.geometry.totals_header;
        surface.fill_rect(header, theme.brand);
        let header_style = TextStyle::new(Face::Bold, theme.table_header_size, colours::WHITE);
        self.draw_text_centered(
            surface,
            header.x1 + header.width() / 2.0,
            header.y1 + cfg.bar_label_rise,
            &header_style,
            AMOUNT_HEADER,
        );

        let row = self.geometry.amount_row;
        surface.fill_rect(row, theme.totals_shade);
        let row_value = TextStyle::new(Face::Regular, theme.totals_value_size, theme.ink);
        let row_y = row.y1 + row.height() / 2.0 + cfg.value_center_rise;
        self.draw_text_right(surface, row.x2 - cfg.amount_row_inset, row_y, &row_value, &total);

        let breakdown = self.geometry.breakdown;
        surface.fill_rect(breakdown, theme.totals_shade);
        let label = TextStyle::new(Face::Bold, theme.value_size, theme.ink);
        let value = TextStyle::new(Face::Regular, theme.value_size, theme.ink);
        let label_x = breakdown.x1 + cfg.totals_inset;
        let value_x = breakdown.x2 - cfg.totals_inset;
        let rows = [
            ("Sub Total", total.as_str()),
            ("Tax", zero.as_str()),
            ("Previous Due", zero.as_str()),
        ];
        for (i, (name, amount)) in rows.iter().enumerate() {
            let y = breakdown.y2 - cfg.breakdown_first_drop - cfg.breakdown_row_gap * i as f32;
            surface.draw_text(label_x, y, &label, name);
            self.draw_text_right(surface, value_x, y, &value, amount);
        }

        let grand = self.geometry.grand_total;
        surface.fill_rect(grand, theme.brand);
        let grand_style = TextStyle::new(Face::Bold, theme.value_size, colours::WHITE);
        let grand_y = grand.y1 + cfg.grand_label_rise;
        surface.draw_text(grand.x1 + cfg.totals_inset, grand_y, &grand_style, "GRAND TOTAL");
        self.draw_text_right(
            surface,
            grand.x2 - cfg.totals_inset,
            grand_y,
            &grand_style,
            &total,
        );
    }

    fn draw_payment<S: Surface>(&self, record: &InvoiceRecord, surface: &mut S) {
        let theme = &self.theme;
        let (x, y) = self.geometry.payment_origin;

        let title = TextStyle::new(Face::Bold, theme.payment_title_size, theme.brand);
        surface.draw_text(x, y, &title, "PAYMENT METHOD");

        let subtitle = TextStyle::new(Face::Bold, theme.payment_body_size, theme.ink);
        surface.draw_text(x, y - Pt(28.0), &subtitle, "By Bank");

        let account = format_numeric_id(record.account_number.as_ref());
        let routing = format_numeric_id(record.routing_number.as_ref());
        let details = [
            (Pt(42.0), format!("Bank Name & Branch : {}", theme.bank_branch)),
            (Pt(58.0), format!("Account Holder Name : {}", theme.account_holder)),
            (Pt(74.0), format!("Account Number : {account}")),
            (Pt(88.0), format!("Routing Number : {routing}")),
        ];
        let body = TextStyle::new(Face::Regular, theme.payment_body_size, theme.ink);
        for (drop, line) in &details {
            surface.draw_text(x, y - *drop, &body, line);
        }
    }

    fn draw_footer<S: Surface>(&self, surface: &mut S) {
        let theme = &self.theme;
        let (x, y) = self.geometry.footer_origin;

        let title = TextStyle::new(Face::Bold, theme.footer_title_size, theme.brand);
        surface.draw_text(x, y, &title, &theme.thank_you);

        let body = TextStyle::new(Face::Regular, theme.footer_body_size, theme.muted);
        for (i, line) in theme.contact_lines.iter().enumerate() {
            surface.draw_text(x, y - Pt(18.0) - Pt(14.0) * i as f32, &body, line);
        }
    }

    fn draw_stripe<S: Surface>(&self, surface: &mut S) {
        surface.fill_rect(self.geometry.stripe, self.theme.brand);
    }

    fn draw_text_right<S: Surface>(&self, surface: &mut S, right: Pt, y: Pt, style: &TextStyle, text: &str) {
        let width = surface.text_width(text, style.face, style.size);
        surface.draw_text(right - width, y, style, text);
    }

    fn draw_text_centered<S: Surface>(&self, surface: &mut S, centre: Pt, y: Pt, style: &TextStyle, text: &str) {
        let width = surface.text_width(text, style.face, style.size);
        surface.draw_text(centre - width / 2.0, y, style, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize::A4;
    use crate::testing::{Command, RecordingSurface};

    fn sample_record() -> InvoiceRecord {
        InvoiceRecord {
            invoice_number: Some(Field::text("1322")),
            invoice_date: Some(Field::text("2025-12-30")),
            month_label: Some(Field::text("Nov 2025")),
            vendor_name: Some(Field::text("Jacent")),
            description: Some(Field::text("Professional Services - Integration Support")),
            bill_to_address: Some(Field::text(
                "Dell Technologies\n1 Dell Way\nRound Rock, TX 78682",
            )),
            amount: Some(Field::number(2500.0)),
            account_number: Some(Field::number(1044100301.0)),
            routing_number: Some(Field::text("111903151")),
        }
    }

    fn drawn_strings(surface: &RecordingSurface) -> Vec<&str> {
        surface
            .commands
            .iter()
            .filter_map(|c| match c {
                Command::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn renders_formatted_fields_verbatim() {
        let composer = InvoiceComposer::new(A4);
        let mut surface = RecordingSurface::new();
        composer.render(&sample_record(), &mut surface);

        let texts = drawn_strings(&surface);
        assert!(texts.contains(&"1322"));
        assert!(texts.contains(&"Dec 30, 2025"));
        assert!(texts.contains(&"Dell Technologies"));
        assert!(texts.contains(&"INVOICE"));
        assert!(texts.contains(&"GRAND TOTAL"));

        // metadata, item row, amount row, subtotal, grand total
        let occurrences = texts.iter().filter(|t| **t == "$2,500.00").count();
        assert!(occurrences >= 4, "expected the total in several slots, got {occurrences}");
        // tax and previous due are always zero
        assert_eq!(texts.iter().filter(|t| **t == "$0.00").count(), 2);
    }

    #[test]
    fn company_line_is_bold_and_addresses_are_not() {
        let composer = InvoiceComposer::new(A4);
        let mut surface = RecordingSurface::new();
        composer.render(&sample_record(), &mut surface);

        let company = surface
            .commands
            .iter()
            .find_map(|c| match c {
                Command::Text { text, style, .. } if text == "Dell Technologies" => Some(*style),
                _ => None,
            })
            .expect("company span");
        assert_eq!(company.face, Face::Bold);

        let street = surface
            .commands
            .iter()
            .find_map(|c| match c {
                Command::Text { text, style, .. } if text == "1 Dell Way" => Some(*style),
                _ => None,
            })
            .expect("street span");
        assert_eq!(street.face, Face::Regular);
    }

    #[test]
    fn rendering_is_deterministic() {
        let composer = InvoiceComposer::new(A4);
        let record = sample_record();

        let mut first = RecordingSurface::new();
        composer.render(&record, &mut first);
        let mut second = RecordingSurface::new();
        composer.render(&record, &mut second);

        assert_eq!(first.commands, second.commands);
        assert!(!first.commands.is_empty());
    }

    #[test]
    fn missing_fields_render_blank_not_panic() {
        let composer = InvoiceComposer::new(A4);
        let mut surface = RecordingSurface::new();
        composer.render(&InvoiceRecord::default(), &mut surface);

        let texts = drawn_strings(&surface);
        assert!(texts.contains(&"INVOICE"));
        assert!(texts.contains(&"BILL TO"));
        assert!(!texts.contains(&""));
    }

    #[test]
    fn logo_is_skipped_when_absent_and_fitted_when_present() {
        let composer = InvoiceComposer::new(A4);
        let mut surface = RecordingSurface::new();
        composer.render(&sample_record(), &mut surface);
        assert!(!surface
            .commands
            .iter()
            .any(|c| matches!(c, Command::Image { .. })));

        let mut images = id_arena::Arena::<Image>::new();
        let id = images.alloc(Image::from_dynamic(image::DynamicImage::ImageRgb8(
            image::RgbImage::new(2, 1),
        )));
        // intrinsically 2:1, so the fitted box must keep that ratio
        let composer = InvoiceComposer::new(A4).logo(id, 200.0, 100.0);
        let mut surface = RecordingSurface::new();
        composer.render(&sample_record(), &mut surface);

        let placed = surface
            .commands
            .iter()
            .find_map(|c| match c {
                Command::Image { position, .. } => Some(*position),
                _ => None,
            })
            .expect("logo placement");
        let slot = composer.geometry().logo;
        assert!((placed.width().0 / placed.height().0 - 2.0).abs() < 1e-4);
        assert!(placed.x1 >= slot.x1 && placed.x2 <= slot.x2);
        assert!(placed.y1 >= slot.y1 && placed.y2 <= slot.y2);
    }

    #[test]
    fn stripe_is_the_final_command() {
        let composer = InvoiceComposer::new(A4);
        let mut surface = RecordingSurface::new();
        composer.render(&sample_record(), &mut surface);

        let last = surface.commands.last().expect("commands recorded");
        match last {
            Command::FillRect { rect, .. } => {
                assert_eq!(*rect, composer.geometry().stripe);
            }
            other => panic!("expected the bottom stripe last, got {other:?}"),
        }
    }

    #[test]
    fn description_is_capped_at_two_lines() {
        let composer = InvoiceComposer::new(A4);
        let mut surface = RecordingSurface::new();
        let mut record = sample_record();
        record.description = Some(Field::text(
            "one two three four five six seven eight nine ten eleven twelve thirteen \
             fourteen fifteen sixteen seventeen eighteen nineteen twenty"
                .repeat(4),
        ));
        composer.render(&record, &mut surface);

        let row = composer.geometry().item_row;
        let in_row = surface
            .commands
            .iter()
            .filter(|c| match c {
                Command::Text { x, y, .. } => {
                    *x >= row.x1 && *x < composer.geometry().divider_x && *y > row.y1 && *y < row.y2
                }
                _ => false,
            })
            .count();
        assert!(in_row <= MAX_DESCRIPTION_LINES);
    }
}

//! The template's box model.
//!
//! Every visual region of the invoice is computed here, once, from the page
//! size and a single table of offsets. Drawing code never does coordinate
//! arithmetic against the page; it asks [`Geometry`] for the box or anchor
//! it needs. Coordinates are bottom-left origin, matching the PDF content
//! stream they end up in.

use crate::rect::Rect;
use crate::units::{In, Pt};
use crate::PageSize;

/// The offsets and dimensions that define the template, independent of page
/// size. The defaults reproduce the production letterhead; custom configs
/// exist mostly so tests can exercise the derivations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryConfig {
    /// Uniform page margin.
    pub margin: Pt,
    /// Side length of the square logo box, flush with the page's top edge.
    pub logo_size: Pt,
    /// Width reserved for the issuer address block in the top-right corner.
    pub address_width: Pt,
    /// Drop from the page's top edge to the issuer name baseline.
    pub address_drop: Pt,
    /// Vertical gap between the issuer name and its first address line.
    pub address_name_gap: Pt,
    /// Vertical step between issuer address lines.
    pub address_line_gap: Pt,
    /// Drop from the top margin to the "INVOICE" title baseline; the bill-to
    /// panel's top edge shares this drop.
    pub title_drop: Pt,
    /// Drop from the top margin to the first metadata row baseline.
    pub meta_drop: Pt,
    /// Horizontal offset from a metadata label to its value column.
    pub meta_value_offset: Pt,
    /// Vertical step between metadata rows.
    pub meta_line_gap: Pt,
    /// Width of the bill-to panel, anchored to the right margin.
    pub panel_width: Pt,
    /// Height of the bill-to panel's header bar.
    pub panel_header_height: Pt,
    /// Height of the bill-to panel's body.
    pub panel_body_height: Pt,
    /// Drop from the panel body's top edge to the first company baseline.
    pub panel_first_drop: Pt,
    /// Vertical step between wrapped company-name lines.
    pub company_line_gap: Pt,
    /// Vertical step between wrapped address lines in the panel.
    pub panel_line_gap: Pt,
    /// Drop from the top margin to the item table's top edge.
    pub table_drop: Pt,
    /// Height of the table header bar; the item row is twice this.
    pub table_row_height: Pt,
    /// Drop from the item row's top edge to the first description baseline.
    pub desc_first_drop: Pt,
    /// Vertical step between wrapped description lines.
    pub desc_line_gap: Pt,
    /// Width of the totals box, anchored to the right margin.
    pub totals_width: Pt,
    /// Height of the totals breakdown section.
    pub breakdown_height: Pt,
    /// Drop from the breakdown's top edge to the first row baseline.
    pub breakdown_first_drop: Pt,
    /// Vertical step between breakdown rows.
    pub breakdown_row_gap: Pt,
    /// Height of the grand-total bar at the bottom of the totals box.
    pub grand_total_height: Pt,
    /// Baseline rise from the grand-total bar's bottom edge.
    pub grand_label_rise: Pt,
    /// Height of the payment block's title baseline above the bottom edge.
    pub payment_height: Pt,
    /// Drop from the payment title to the footer's thank-you baseline.
    pub footer_drop: Pt,
    /// Height of the full-bleed brand stripe along the bottom edge.
    pub stripe_height: Pt,
    /// Horizontal text inset inside panel and table cells.
    pub cell_inset: Pt,
    /// Horizontal text inset inside the totals breakdown and grand bar.
    pub totals_inset: Pt,
    /// Horizontal text inset for the shaded totals amount row.
    pub amount_row_inset: Pt,
    /// Baseline rise for labels inside header bars.
    pub bar_label_rise: Pt,
    /// Baseline rise above a row's vertical centre for centred values.
    pub value_center_rise: Pt,
}

impl Default for GeometryConfig {
    fn default() -> GeometryConfig {
        GeometryConfig {
            margin: In(0.65).into(),
            logo_size: In(3.0).into(),
            address_width: In(3.0).into(),
            address_drop: In(1.5).into(),
            address_name_gap: Pt(16.0),
            address_line_gap: Pt(14.0),
            title_drop: Pt(170.0),
            meta_drop: Pt(210.0),
            meta_value_offset: Pt(130.0),
            meta_line_gap: Pt(18.0),
            panel_width: In(3.05).into(),
            panel_header_height: In(0.32).into(),
            panel_body_height: In(1.15).into(),
            panel_first_drop: Pt(14.0),
            company_line_gap: Pt(14.0),
            panel_line_gap: Pt(12.0),
            table_drop: Pt(340.0),
            table_row_height: Pt(22.0),
            desc_first_drop: Pt(16.0),
            desc_line_gap: Pt(12.0),
            totals_width: In(2.95).into(),
            breakdown_height: In(0.85).into(),
            breakdown_first_drop: Pt(20.0),
            breakdown_row_gap: Pt(20.0),
            grand_total_height: In(0.52).into(),
            grand_label_rise: In(0.16).into(),
            payment_height: In(4.0).into(),
            footer_drop: Pt(140.0),
            stripe_height: In(0.18).into(),
            cell_inset: Pt(8.0),
            totals_inset: Pt(12.0),
            amount_row_inset: Pt(10.0),
            bar_label_rise: Pt(7.0),
            value_center_rise: Pt(5.0),
        }
    }
}

/// All template boxes and anchors, resolved against a concrete page size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub cfg: GeometryConfig,
    pub page_width: Pt,
    pub page_height: Pt,

    /// Square box the logo is fitted into, top-left corner.
    pub logo: Rect,
    /// First baseline of the issuer name and address block, top-right.
    pub address_origin: (Pt, Pt),
    /// Baseline of the "INVOICE" title at the left margin.
    pub title_origin: (Pt, Pt),
    /// First baseline of the metadata label column at the left margin.
    pub meta_origin: (Pt, Pt),
    /// Brand header bar of the bill-to panel.
    pub bill_to_header: Rect,
    /// Body of the bill-to panel, directly under its header.
    pub bill_to_body: Rect,
    /// Brand header bar of the item table, spanning margin to margin.
    pub table_header: Rect,
    /// The single item row under the table header, two text lines tall.
    pub item_row: Rect,
    /// Vertical divider between description and amount columns. It is also
    /// the left edge of the totals box, so the two stay aligned for any
    /// page size.
    pub divider_x: Pt,
    /// Outline of the whole totals box. Its top coincides with the table
    /// header's top; the box hangs off the right end of the table.
    pub totals_outer: Rect,
    /// Brand "Amount" header bar of the totals box.
    pub totals_header: Rect,
    /// Shaded row carrying the invoice amount, level with the item row.
    pub amount_row: Rect,
    /// Shaded breakdown section (subtotal, tax, previous due).
    pub breakdown: Rect,
    /// Brand grand-total bar at the bottom of the totals box.
    pub grand_total: Rect,
    /// Baseline of the "PAYMENT METHOD" title.
    pub payment_origin: (Pt, Pt),
    /// Baseline of the footer thank-you line.
    pub footer_origin: (Pt, Pt),
    /// Full-bleed brand stripe along the bottom edge.
    pub stripe: Rect,
}

impl Geometry {
    pub fn new(page: PageSize, cfg: GeometryConfig) -> Geometry {
        let (width, height) = page;
        let margin = cfg.margin;
        let right = width - margin;
        let top = height - margin;

        let logo = Rect::sized(margin, height - cfg.logo_size, cfg.logo_size, cfg.logo_size);
        let address_origin = (width - cfg.address_width, height - cfg.address_drop);
        let title_origin = (margin, top - cfg.title_drop);
        let meta_origin = (margin, top - cfg.meta_drop);

        let panel_top = top - cfg.title_drop;
        let bill_to_header = Rect::sized(
            right - cfg.panel_width,
            panel_top - cfg.panel_header_height,
            cfg.panel_width,
            cfg.panel_header_height,
        );
        let bill_to_body = Rect::sized(
            right - cfg.panel_width,
            bill_to_header.y1 - cfg.panel_body_height,
            cfg.panel_width,
            cfg.panel_body_height,
        );

        let table_top = top - cfg.table_drop;
        let row_h = cfg.table_row_height;
        let table_header = Rect::sized(margin, table_top - row_h, width - margin * 2.0, row_h);
        let item_row = Rect::sized(
            margin,
            table_header.y1 - row_h * 2.0,
            width - margin * 2.0,
            row_h * 2.0,
        );
        let divider_x = right - cfg.totals_width;

        // The totals box shares the table's top edge: its header bar is level
        // with the table header and its amount row is level with the item row.
        let totals_header = Rect::sized(divider_x, table_top - row_h, cfg.totals_width, row_h);
        let amount_row = Rect::sized(
            divider_x,
            totals_header.y1 - row_h * 2.0,
            cfg.totals_width,
            row_h * 2.0,
        );
        let breakdown = Rect::sized(
            divider_x,
            amount_row.y1 - cfg.breakdown_height,
            cfg.totals_width,
            cfg.breakdown_height,
        );
        let grand_total = Rect::sized(
            divider_x,
            breakdown.y1 - cfg.grand_total_height,
            cfg.totals_width,
            cfg.grand_total_height,
        );
        let totals_outer = Rect {
            x1: divider_x,
            y1: grand_total.y1,
            x2: right,
            y2: totals_header.y2,
        };

        let payment_origin = (margin, cfg.payment_height);
        let footer_origin = (margin, cfg.payment_height - cfg.footer_drop);
        let stripe = Rect::sized(Pt(0.0), Pt(0.0), width, cfg.stripe_height);

        Geometry {
            cfg,
            page_width: width,
            page_height: height,
            logo,
            address_origin,
            title_origin,
            meta_origin,
            bill_to_header,
            bill_to_body,
            table_header,
            item_row,
            divider_x,
            totals_outer,
            totals_header,
            amount_row,
            breakdown,
            grand_total,
            payment_origin,
            footer_origin,
            stripe,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize::{A4, LETTER};

    #[test]
    fn totals_outline_matches_its_sections() {
        for page in [A4, LETTER] {
            let g = Geometry::new(page, GeometryConfig::default());
            let sections = g.totals_header.height()
                + g.amount_row.height()
                + g.breakdown.height()
                + g.grand_total.height();
            assert!((g.totals_outer.height() - sections).0.abs() < 1e-4);
            assert_eq!(g.totals_outer.y2, g.totals_header.y2);
            assert_eq!(g.totals_outer.y1, g.grand_total.y1);
        }
    }

    #[test]
    fn divider_aligns_with_totals_left_edge() {
        for page in [A4, LETTER] {
            let g = Geometry::new(page, GeometryConfig::default());
            assert_eq!(g.divider_x, g.totals_outer.x1);
            assert_eq!(g.divider_x, g.totals_header.x1);
            assert_eq!(g.divider_x, g.grand_total.x1);
        }
    }

    #[test]
    fn totals_box_is_level_with_the_table() {
        let g = Geometry::new(A4, GeometryConfig::default());
        assert_eq!(g.totals_header.y2, g.table_header.y2);
        assert_eq!(g.totals_header.y1, g.table_header.y1);
        assert_eq!(g.amount_row.y1, g.item_row.y1);
    }

    #[test]
    fn right_anchored_boxes_respect_the_margin() {
        let g = Geometry::new(A4, GeometryConfig::default());
        let right = g.page_width - g.cfg.margin;
        assert!((g.totals_outer.x2 - right).0.abs() < 1e-4);
        assert!((g.table_header.x2 - right).0.abs() < 1e-4);
        assert!((g.bill_to_header.x2 - right).0.abs() < 1e-4);
    }

    #[test]
    fn stripe_spans_the_full_page_width() {
        let g = Geometry::new(LETTER, GeometryConfig::default());
        assert_eq!(g.stripe.x1, Pt(0.0));
        assert_eq!(g.stripe.x2, g.page_width);
        assert_eq!(g.stripe.y1, Pt(0.0));
    }

    #[test]
    fn item_row_is_two_text_lines_tall() {
        let g = Geometry::new(A4, GeometryConfig::default());
        assert_eq!(g.item_row.height(), g.cfg.table_row_height * 2.0);
        assert_eq!(g.item_row.y2, g.table_header.y1);
    }

    #[test]
    fn panel_body_sits_under_its_header() {
        let g = Geometry::new(A4, GeometryConfig::default());
        assert_eq!(g.bill_to_body.y2, g.bill_to_header.y1);
        assert_eq!(g.bill_to_body.x1, g.bill_to_header.x1);
        assert_eq!(g.bill_to_body.width(), g.bill_to_header.width());
        assert_eq!(g.bill_to_header.y2, g.title_origin.1);
    }
}

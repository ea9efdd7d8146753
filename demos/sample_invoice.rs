//! Render one invoice from a hardcoded record.
//!
//! Expects `fonts/Montserrat-Regular.ttf` and `fonts/Montserrat-Bold.ttf`
//! next to the working directory; a logo at `assets/logo.png` is used if
//! present. Writes `<invoice number>_<vendor>.pdf`.

use invoice_gen::*;
use std::path::Path;

fn main() -> Result<(), RenderError> {
    let mut doc = Document::default();
    let fonts = FontRegistry::load_dir(&mut doc, "fonts", "Montserrat")?;

    let mut composer = InvoiceComposer::new(pagesize::A4);
    let logo_path = Path::new("assets/logo.png");
    if logo_path.exists() {
        let logo = Image::from_disk(logo_path)?;
        let (width, height) = (logo.width, logo.height);
        let id = doc.add_image(logo);
        composer = composer.logo(id, width, height);
    }

    let record = InvoiceRecord {
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
    };

    let mut info = Info::new();
    info.title(format!(
        "Invoice {}",
        format_numeric_id(record.invoice_number.as_ref())
    ));
    doc.set_info(info);

    let mut surface = PageSurface::new(&doc, &fonts, Page::new(pagesize::A4));
    composer.render(&record, &mut surface);
    let page = surface.finish();
    doc.add_page(page);

    let vendor = record
        .vendor_name
        .as_ref()
        .and_then(Field::as_text)
        .unwrap_or("");
    let stem = naming::output_stem(&format_numeric_id(record.invoice_number.as_ref()), vendor);
    doc.write(std::fs::File::create(format!("{stem}.pdf"))?)
}

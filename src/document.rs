use crate::{font::Font, image::Image, info::Info, page::Page, refs::*, RenderError};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Pdf, Ref};
use std::io::Write;

/// A document is the main object that stores all the contents of the PDF,
/// then renders it out with a call to [Document::write].
///
/// Fonts and images are stored "globally" within the document: any page can
/// use them by their arena id. An invoice is a single page, but the same
/// document type also backs tests and demos that stack several.
#[derive(Default)]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    pub fonts: Arena<Font>,
    pub images: Arena<Image>,
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its id
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    /// Add a font to the document structure, returning its id
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        self.fonts.alloc(font)
    }

    /// Add an image to the document structure, returning its id
    pub fn add_image(&mut self, image: Image) -> Id<Image> {
        self.images.alloc(image)
    }

    /// Write the entire document to the writer. Note: although this can write to arbitrary
    /// streams, the entire document is "rendered" in memory first.
    ///
    /// Any failure here is fatal for this document only; nothing is left
    /// half-written in the document structures of other invoices in a batch.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), RenderError> {
        let Document {
            info,
            pages,
            page_order,
            fonts,
            images,
        } = self;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        // page refs are keyed by page_order index, not arena index
        let page_refs: Vec<Ref> = page_order
            .iter()
            .enumerate()
            .map(|(i, _id)| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for (id, font) in fonts.iter() {
            font.write(&mut refs, id, &mut writer);
        }

        for (id, image) in images.iter() {
            image.write(&mut refs, id.index(), &mut writer)?;
        }

        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages.get(*id).ok_or(RenderError::MissingPage)?;
            page.write(&mut refs, page_index, &fonts, &images, &mut writer)?;
        }

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Page;
    use crate::pagesize::A4;
    use pdf_writer::Content;

    fn render_once() -> Vec<u8> {
        let mut doc = Document::default();
        let mut info = Info::new();
        info.title("Invoice 1322");
        doc.set_info(info);

        let mut page = Page::new(A4);
        let mut content = Content::new();
        content.set_fill_gray(0.5);
        content.rect(10.0, 10.0, 100.0, 50.0);
        content.fill_nonzero();
        page.add_content(content);
        doc.add_page(page);

        let mut bytes = Vec::new();
        doc.write(&mut bytes).unwrap();
        bytes
    }

    // no timestamps or randomness anywhere in the output path
    #[test]
    fn identical_documents_serialize_identically() {
        let first = render_once();
        let second = render_once();
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }
}

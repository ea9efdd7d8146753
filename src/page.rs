use crate::colour::Colour;
use crate::font::Font;
use crate::image::Image;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use crate::RenderError;
use id_arena::{Arena, Id};
use pdf_writer::{Content, Finish, Name, Pdf};
use std::io::Write;

/// A font selection for a span of text: which registered font, at what size
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<Font>,
    pub size: Pt,
}

/// A single positioned run of text. `coords` is the baseline start.
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

/// A positioned image placement
#[derive(Clone, PartialEq, Debug)]
pub struct ImageLayout {
    pub image: Id<Image>,
    pub position: Rect,
}

/// One entry in a page's ordered content list. Entries are rendered in
/// insertion order; later entries paint over earlier ones.
#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(Vec<SpanLayout>),
    Image(ImageLayout),
    Raw(Vec<u8>),
}

pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// The laid out contents, in paint order
    pub contents: Vec<PageContents>,
}

impl Page {
    pub fn new(size: PageSize) -> Page {
        let (width, height) = size;
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: width,
                y2: height,
            },
            contents: Vec::default(),
        }
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.contents.push(PageContents::Text(vec![span]));
    }

    pub fn add_image(&mut self, image: ImageLayout) {
        self.contents.push(PageContents::Image(image));
    }

    /// Append a raw content stream (vector graphics built with
    /// [pdf_writer::Content]) to the page
    pub fn add_content(&mut self, content: Content) {
        self.contents.push(PageContents::Raw(content.finish()));
    }

    #[allow(clippy::write_with_newline)]
    fn render(&self, fonts: &Arena<Font>) -> Result<Vec<u8>, std::io::Error> {
        if self.contents.is_empty() {
            return Ok(Vec::default());
        }
        let mut content: Vec<u8> = Vec::default();

        for page_content in self.contents.iter() {
            match page_content {
                PageContents::Text(spans) => {
                    render_text_spans(&mut content, spans, fonts)?;
                }
                PageContents::Image(image) => {
                    write!(&mut content, "q\n")?;
                    write!(
                        &mut content,
                        "{} 0 0 {} {} {} cm\n",
                        image.position.width(),
                        image.position.height(),
                        image.position.x1,
                        image.position.y1
                    )?;
                    write!(&mut content, "/I{} Do\n", image.image.index())?;
                    write!(&mut content, "Q\n")?;
                }
                PageContents::Raw(raw) => {
                    write!(&mut content, "q\n")?;
                    content.write_all(raw.as_slice())?;
                    write!(&mut content, "\nQ\n")?;
                }
            }
        }

        Ok(content)
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &Arena<Font>,
        images: &Arena<Image>,
        writer: &mut Pdf,
    ) -> Result<(), RenderError> {
        let id = refs
            .get(RefType::Page(page_index))
            .ok_or(RenderError::MissingPage)?;
        let mut pdf_page = writer.page(id);
        pdf_page.media_box(self.media_box.into());
        pdf_page.parent(refs.get(RefType::PageTree).expect("page tree was written"));

        let mut resources = pdf_page.resources();
        let mut resource_fonts = resources.fonts();
        for (font_id, _) in fonts.iter() {
            resource_fonts.pair(
                Name(format!("F{}", font_id.index()).as_bytes()),
                refs.get(RefType::Font(font_id.index()))
                    .expect("fonts were written before pages"),
            );
        }
        resource_fonts.finish();
        let mut resource_xobjects = resources.x_objects();
        for (image_id, _) in images.iter() {
            resource_xobjects.pair(
                Name(format!("I{}", image_id.index()).as_bytes()),
                refs.get(RefType::Image(image_id.index()))
                    .expect("images were written before pages"),
            );
        }
        resource_xobjects.finish();
        resources.finish();

        let content_id = refs.gen(RefType::ContentForPage(page_index));
        pdf_page.contents(content_id);
        pdf_page.finish();

        let rendered = self.render(fonts)?;
        writer.stream(content_id, rendered.as_slice());

        Ok(())
    }
}

#[allow(clippy::write_with_newline)]
fn render_text_spans(
    content: &mut Vec<u8>,
    spans: &[SpanLayout],
    fonts: &Arena<Font>,
) -> Result<(), std::io::Error> {
    let first = match spans.first() {
        Some(first) => first,
        None => return Ok(()),
    };

    write!(content, "q\n")?;

    let mut current_font: SpanFont = first.font;
    let mut current_colour: Colour = first.colour;

    write!(
        content,
        "/F{} {} Tf\n",
        current_font.id.index(),
        current_font.size
    )?;
    write_colour(content, current_colour)?;

    for span in spans.iter() {
        if span.font != current_font {
            current_font = span.font;
            write!(
                content,
                "/F{} {} Tf\n",
                current_font.id.index(),
                current_font.size
            )?;
        }
        if span.colour != current_colour {
            current_colour = span.colour;
            write_colour(content, current_colour)?;
        }

        write!(content, "BT\n")?;
        write!(content, "{} {} Td\n", span.coords.0, span.coords.1)?;
        write!(content, "<")?;
        for ch in span.text.chars() {
            let font = &fonts[current_font.id];
            let gid = font
                .glyph_id(ch)
                .or_else(|| font.replacement_glyph_id())
                .or_else(|| font.glyph_id('?'))
                .unwrap_or_default();
            write!(content, "{gid:04x}")?;
        }
        write!(content, "> Tj\n")?;
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn write_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} rg\n"),
        Colour::Grey { g } => write!(content, "{g} g\n"),
    }
}

use crate::colour::Colour;
use crate::font::{Face, Font, FontRegistry};
use crate::image::Image;
use crate::page::{ImageLayout, Page, SpanFont, SpanLayout};
use crate::rect::Rect;
use crate::units::Pt;
use crate::Document;
use id_arena::{Arena, Id};
use pdf_writer::Content;

/// The full style of one text command. Every draw call carries its own
/// style; the surface holds no "current font" or "current colour" state, so
/// commands can be reordered or tested in isolation.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct TextStyle {
    pub face: Face,
    pub size: Pt,
    pub colour: Colour,
}

impl TextStyle {
    pub fn new(face: Face, size: Pt, colour: Colour) -> TextStyle {
        TextStyle { face, size, colour }
    }
}

/// The drawing surface the composer issues commands against. The production
/// implementation is [PageSurface]; tests substitute a recording surface
/// with synthetic font metrics.
pub trait Surface {
    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, rect: Rect, colour: Colour);
    /// Stroke the border of an axis-aligned rectangle
    fn stroke_rect(&mut self, rect: Rect, colour: Colour, line_width: f32);
    /// Stroke a straight line segment
    fn stroke_line(&mut self, from: (Pt, Pt), to: (Pt, Pt), colour: Colour, line_width: f32);
    /// Draw a single run of text; `(x, y)` is the baseline start
    fn draw_text(&mut self, x: Pt, y: Pt, style: &TextStyle, text: &str);
    /// Place an image into the given rectangle
    fn draw_image(&mut self, position: Rect, image: Id<Image>);
    /// Measure the advance width of `text` under the given face and size
    fn text_width(&self, text: &str, face: Face, size: Pt) -> Pt;
}

/// A [Surface] that records commands onto a [Page]: text as spans, fills and
/// strokes as raw content streams, images as placements. Text measurement
/// comes from the registered faces' glyph metrics.
pub struct PageSurface<'a> {
    fonts: &'a Arena<Font>,
    registry: &'a FontRegistry,
    page: Page,
}

impl<'a> PageSurface<'a> {
    pub fn new(document: &'a Document, registry: &'a FontRegistry, page: Page) -> PageSurface<'a> {
        PageSurface {
            fonts: &document.fonts,
            registry,
            page,
        }
    }

    /// Finish drawing and hand the completed page back, ready to be added to
    /// the document
    pub fn finish(self) -> Page {
        self.page
    }

    fn font(&self, face: Face) -> &Font {
        &self.fonts[self.registry.id(face)]
    }
}

impl Surface for PageSurface<'_> {
    fn fill_rect(&mut self, rect: Rect, colour: Colour) {
        let mut content = Content::new();
        set_fill(&mut content, colour);
        content.rect(
            rect.x1.into(),
            rect.y1.into(),
            rect.width().into(),
            rect.height().into(),
        );
        content.fill_nonzero();
        self.page.add_content(content);
    }

    fn stroke_rect(&mut self, rect: Rect, colour: Colour, line_width: f32) {
        let mut content = Content::new();
        set_stroke(&mut content, colour);
        content.set_line_width(line_width);
        content.rect(
            rect.x1.into(),
            rect.y1.into(),
            rect.width().into(),
            rect.height().into(),
        );
        content.stroke();
        self.page.add_content(content);
    }

    fn stroke_line(&mut self, from: (Pt, Pt), to: (Pt, Pt), colour: Colour, line_width: f32) {
        let mut content = Content::new();
        set_stroke(&mut content, colour);
        content.set_line_width(line_width);
        content.move_to(from.0.into(), from.1.into());
        content.line_to(to.0.into(), to.1.into());
        content.stroke();
        self.page.add_content(content);
    }

    fn draw_text(&mut self, x: Pt, y: Pt, style: &TextStyle, text: &str) {
        if text.is_empty() {
            return;
        }
        self.page.add_span(SpanLayout {
            text: text.to_string(),
            font: SpanFont {
                id: self.registry.id(style.face),
                size: style.size,
            },
            colour: style.colour,
            coords: (x, y),
        });
    }

    fn draw_image(&mut self, position: Rect, image: Id<Image>) {
        self.page.add_image(ImageLayout { image, position });
    }

    fn text_width(&self, text: &str, face: Face, size: Pt) -> Pt {
        self.font(face).width_of(text, size)
    }
}

fn set_fill(content: &mut Content, colour: Colour) {
    match colour {
        Colour::RGB { r, g, b } => content.set_fill_rgb(r, g, b),
        Colour::Grey { g } => content.set_fill_gray(g),
    };
}

fn set_stroke(content: &mut Content, colour: Colour) {
    match colour {
        Colour::RGB { r, g, b } => content.set_stroke_rgb(r, g, b),
        Colour::Grey { g } => content.set_stroke_gray(g),
    };
}

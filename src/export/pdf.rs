use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

/// Minimal multi-page text report writer on top of `pdf-writer`.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    line_h: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            line_h: 20.0,

            next_id,
            font_id,

            font_size: 12.0,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&to_win_ansi(text)));
        content.end_text();
    }

    /// Rough Helvetica width estimate, good enough for centering a title.
    fn text_width(text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * 0.5
    }

    /// Centered title on the first page, then one line per entry.
    /// Overflowing lines continue on new pages. An empty `lines` slice still
    /// produces a page with the title.
    pub fn write_report(&mut self, title: &str, lines: &[String]) {
        let mut content = self.new_page();

        let title_x = ((self.page_w - Self::text_width(title, self.title_font_size)) / 2.0)
            .max(self.margin);
        let mut y = self.page_h - self.margin;
        self.draw_text(&mut content, title_x, y, self.title_font_size, title);

        // blank line under the title
        y -= self.line_h * 1.5;

        for line in lines {
            if y < self.margin {
                self.finalize_page(content);
                content = self.new_page();
                y = self.page_h - self.margin;
            }
            self.draw_text(&mut content, self.margin, y, self.font_size, line);
            y -= self.line_h;
        }

        self.finalize_page(content);
    }

    /// Assemble catalog and page tree and return the document bytes.
    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);

        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.iter().copied());
        drop(pages);

        self.pdf.finish()
    }
}

/// Encode text for a WinAnsiEncoding core font. Characters with no WinAnsi
/// code point become `?`.
pub(crate) fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match c as u32 {
        0x20..=0x7E | 0xA0..=0xFF => c as u32 as u8,
        _ => match c {
            '€' => 0x80,
            '‚' => 0x82,
            'ƒ' => 0x83,
            '„' => 0x84,
            '…' => 0x85,
            '†' => 0x86,
            '‡' => 0x87,
            'ˆ' => 0x88,
            '‰' => 0x89,
            'Š' => 0x8A,
            '‹' => 0x8B,
            'Œ' => 0x8C,
            'Ž' => 0x8E,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '˜' => 0x98,
            '™' => 0x99,
            'š' => 0x9A,
            '›' => 0x9B,
            'œ' => 0x9C,
            'ž' => 0x9E,
            'Ÿ' => 0x9F,
            _ => b'?',
        },
    }
}

#[cfg(test)]
mod tests {
    use super::to_win_ansi;

    #[test]
    fn test_win_ansi_mapping() {
        assert_eq!(to_win_ansi("Jos\u{e9}"), vec![b'J', b'o', b's', 0xE9]);
        assert_eq!(to_win_ansi("\u{20ac}5"), vec![0x80, b'5']);
        assert_eq!(to_win_ansi("\u{5f20}"), vec![b'?']);
    }
}

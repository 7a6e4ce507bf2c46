use docx_rust::document::{
    BodyContent, ParagraphContent, RunContent, TableCellContent, TableRowContent,
};
use docx_rust::formatting::CharacterProperty;
use docx_rust::Docx;

/// Render a parsed DOCX document body as markdown text.
pub fn docx_to_markdown(docx: &Docx) -> String {
    let mut writer = MarkdownWriter {
        docx,
        output: String::new(),
        list_counters: std::collections::HashMap::new(),
    };

    for content in &docx.document.body.content {
        writer.write_body_content(content);
    }

    writer.output
}

struct MarkdownWriter<'a> {
    docx: &'a Docx<'a>,
    output: String,
    /// (num_id, level) -> current ordinal for numbered lists
    list_counters: std::collections::HashMap<(isize, isize), usize>,
}

impl<'a> MarkdownWriter<'a> {
    fn write_body_content(&mut self, content: &BodyContent) {
        match content {
            BodyContent::Paragraph(para) => self.write_paragraph(para),
            BodyContent::Table(table) => self.write_table(table),
            BodyContent::Sdt(sdt) => {
                if let Some(ref sdt_content) = sdt.content {
                    for item in &sdt_content.content {
                        self.write_body_content(item);
                    }
                }
            }
            _ => {}
        }
    }

    fn write_paragraph(&mut self, para: &docx_rust::document::Paragraph) {
        let mut heading_level: Option<u8> = None;
        let mut numbering: Option<(isize, isize)> = None;

        if let Some(ref prop) = para.property {
            if let Some(ref style_id) = prop.style_id {
                heading_level = heading_level_for_style(style_id.value.as_ref());
            }
            if let Some(ref num_prop) = prop.numbering {
                if let (Some(ref id), Some(ref level)) = (&num_prop.id, &num_prop.level) {
                    numbering = Some((id.value, level.value));
                }
            }
        }

        let inline = self.collect_inline_text(para);

        if inline.trim().is_empty() && heading_level.is_none() && numbering.is_none() {
            self.output.push('\n');
            return;
        }

        if let Some(level) = heading_level {
            self.output.push_str(&"#".repeat(level as usize));
            self.output.push(' ');
            self.output.push_str(inline.trim());
            self.output.push_str("\n\n");
            return;
        }

        if let Some((num_id, level)) = numbering {
            let indent = "  ".repeat(level as usize);
            let bullet = self.list_marker(num_id, level);
            self.output.push_str(&indent);
            self.output.push_str(&bullet);
            self.output.push(' ');
            self.output.push_str(inline.trim());
            self.output.push('\n');
            return;
        }

        self.output.push_str(inline.trim());
        self.output.push_str("\n\n");
    }

    fn collect_inline_text(&mut self, para: &docx_rust::document::Paragraph) -> String {
        let mut result = String::new();

        for pc in &para.content {
            match pc {
                ParagraphContent::Run(run) => {
                    let text = collect_run_text(run);
                    if !text.is_empty() {
                        result.push_str(&format_run_text(&text, &run.property));
                    }
                }
                ParagraphContent::Link(link) => {
                    let display = link
                        .content
                        .as_ref()
                        .map(collect_run_text)
                        .unwrap_or_default();
                    match self.resolve_link_target(link) {
                        Some(url) if !display.is_empty() => {
                            result.push_str(&format!("[{}]({})", display, url));
                        }
                        Some(url) => result.push_str(&url),
                        None => result.push_str(&display),
                    }
                }
                _ => {}
            }
        }

        result
    }

    fn resolve_link_target(&self, link: &docx_rust::document::Hyperlink) -> Option<String> {
        if let Some(ref anchor) = link.anchor {
            return Some(format!("#{}", anchor));
        }
        let id = link.id.as_ref()?;
        let rels = self.docx.document_rels.as_ref()?;
        rels.relationships
            .iter()
            .find(|r| r.id.as_ref() == id.as_ref())
            .map(|r| r.target.to_string())
    }

    /// Markdown marker for a list paragraph: "-" for bullets, a running
    /// ordinal for numbered formats.
    fn list_marker(&mut self, num_id: isize, level: isize) -> String {
        let ordered = matches!(
            self.numbering_format(num_id, level),
            Some("decimal" | "upperRoman" | "lowerRoman" | "upperLetter" | "lowerLetter")
        );
        if ordered {
            let counter = self.list_counters.entry((num_id, level)).or_insert(0);
            *counter += 1;
            format!("{}.", counter)
        } else {
            "-".to_string()
        }
    }

    fn numbering_format(&self, num_id: isize, level: isize) -> Option<&str> {
        let numbering = self.docx.numbering.as_ref()?;
        let num = numbering
            .numberings
            .iter()
            .find(|n| n.num_id == Some(num_id))?;
        let abstract_id = num.abstract_num_id.as_ref()?.value;
        let abstract_num = numbering
            .abstract_numberings
            .iter()
            .find(|a| a.abstract_num_id == abstract_id)?;
        let lvl = abstract_num.levels.iter().find(|l| l.i_level == Some(level))?;
        lvl.number_format.as_ref().map(|f| f.value.as_ref())
    }

    fn write_table(&mut self, table: &docx_rust::document::Table) {
        let mut rows: Vec<Vec<String>> = Vec::new();

        for row in &table.rows {
            let mut cells: Vec<String> = Vec::new();
            for cell_content in &row.cells {
                if let TableRowContent::TableCell(cell) = cell_content {
                    cells.push(self.collect_cell_text(cell));
                }
            }
            if !cells.is_empty() {
                rows.push(cells);
            }
        }

        if rows.is_empty() {
            return;
        }

        let col_count = rows.iter().map(|r| r.len()).max().unwrap_or(0);

        for (i, row) in rows.iter().enumerate() {
            self.output.push('|');
            for j in 0..col_count {
                let cell = row.get(j).map(|s| s.as_str()).unwrap_or("");
                self.output.push(' ');
                self.output.push_str(cell);
                self.output.push_str(" |");
            }
            self.output.push('\n');

            if i == 0 {
                self.output.push('|');
                for _ in 0..col_count {
                    self.output.push_str(" --- |");
                }
                self.output.push('\n');
            }
        }
        self.output.push('\n');
    }

    fn collect_cell_text(&mut self, cell: &docx_rust::document::TableCell) -> String {
        let mut parts: Vec<String> = Vec::new();
        for tc in &cell.content {
            let TableCellContent::Paragraph(para) = tc;
            let text = self.collect_inline_text(para);
            let trimmed = text.trim().to_string();
            if !trimmed.is_empty() {
                parts.push(trimmed);
            }
        }
        parts.join("<br>")
    }
}

fn heading_level_for_style(style_id: &str) -> Option<u8> {
    match style_id {
        "Heading1" | "heading1" | "heading 1" | "Title" | "title" => Some(1),
        "Heading2" | "heading2" | "heading 2" | "Subtitle" | "subtitle" => Some(2),
        "Heading3" | "heading3" | "heading 3" => Some(3),
        "Heading4" | "heading4" | "heading 4" => Some(4),
        "Heading5" | "heading5" | "heading 5" => Some(5),
        "Heading6" | "heading6" | "heading 6" => Some(6),
        _ => None,
    }
}

fn collect_run_text(run: &docx_rust::document::Run) -> String {
    let mut text = String::new();
    for rc in &run.content {
        match rc {
            RunContent::Text(t) => text.push_str(&t.text),
            RunContent::Break(_) => text.push('\n'),
            RunContent::Tab(_) => text.push('\t'),
            _ => {}
        }
    }
    text
}

/// Wrap run text in markdown emphasis based on its character properties.
fn format_run_text(text: &str, props: &Option<CharacterProperty>) -> String {
    let Some(props) = props else {
        return text.to_string();
    };

    if text.trim().is_empty() {
        return text.to_string();
    }

    let is_bold = props
        .bold
        .as_ref()
        .map(|b| b.value != Some(false))
        .unwrap_or(false);
    let is_italic = props
        .italics
        .as_ref()
        .map(|i| i.value != Some(false))
        .unwrap_or(false);
    let is_strike = props.strike.is_some() || props.dstrike.is_some();

    let mut result = text.to_string();
    if is_strike {
        result = format!("~~{}~~", result);
    }
    if is_bold && is_italic {
        result = format!("***{}***", result);
    } else if is_bold {
        result = format!("**{}**", result);
    } else if is_italic {
        result = format!("*{}*", result);
    }
    result
}

use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::Extractor;
use crate::ExtractError;

const DOCUMENT_PART: &str = "word/document.xml";

static PARAGRAPH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<w:p(?:\s[^>]*)?/>|<w:p(?:\s[^>]*)?>.*?</w:p>").unwrap());

/// Text boxes nest their own `<w:p>` elements inside a run of the outer
/// paragraph. Their content is dropped so the outer paragraph stays whole.
static TEXT_BOX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<w:txbxContent(?:\s[^>]*)?>.*?</w:txbxContent>").unwrap()
});

static RUN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>|<w:tab\s*/>|<w:br(?:\s[^>]*)?/>").unwrap()
});

static ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(amp|lt|gt|quot|apos|#[0-9]+|#x[0-9a-fA-F]+);").unwrap());

/// Reads paragraph text out of an Office Open XML word-processing file.
///
/// Paragraphs are joined with newlines; tabs and line breaks inside a
/// paragraph are kept.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocxExtractor;

impl Extractor for DocxExtractor {
    fn format(&self) -> &'static str {
        "DOCX"
    }

    fn extract(&self, path: &Path) -> Result<String, ExtractError> {
        let file = std::fs::File::open(path)?;
        let mut archive = zip::ZipArchive::new(file)?;

        let mut xml = String::new();
        match archive.by_name(DOCUMENT_PART) {
            Ok(mut part) => {
                part.read_to_string(&mut xml)?;
            }
            Err(zip::result::ZipError::FileNotFound) => {
                return Err(ExtractError::MissingPart(DOCUMENT_PART));
            }
            Err(e) => return Err(e.into()),
        }

        Ok(paragraphs_text(&xml))
    }
}

/// Collect the text of every body `<w:p>` element, one paragraph per line.
fn paragraphs_text(xml: &str) -> String {
    let xml = TEXT_BOX_RE.replace_all(xml, "");
    PARAGRAPH_RE
        .find_iter(&xml)
        .map(|paragraph| paragraph_text(paragraph.as_str()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn paragraph_text(paragraph: &str) -> String {
    let mut text = String::new();
    for run in RUN_RE.captures_iter(paragraph) {
        match run.get(1) {
            Some(t) => text.push_str(&unescape_xml(t.as_str())),
            None if run[0].starts_with("<w:tab") => text.push('\t'),
            None => text.push('\n'),
        }
    }
    text
}

fn unescape_xml(raw: &str) -> String {
    ENTITY_RE
        .replace_all(raw, |caps: &regex::Captures<'_>| {
            let entity = &caps[1];
            match entity {
                "amp" => "&".to_string(),
                "lt" => "<".to_string(),
                "gt" => ">".to_string(),
                "quot" => "\"".to_string(),
                "apos" => "'".to_string(),
                _ => {
                    let code = match entity.strip_prefix("#x") {
                        Some(hex) => u32::from_str_radix(hex, 16).ok(),
                        None => entity[1..].parse().ok(),
                    };
                    code.and_then(char::from_u32)
                        .map(String::from)
                        .unwrap_or_else(|| caps[0].to_string())
                }
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_docx(path: &Path, document_xml: &str) {
        let file = std::fs::File::create(path).unwrap();
        let mut zip = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("[Content_Types].xml", options).unwrap();
        zip.write_all(b"<?xml version=\"1.0\"?><Types/>").unwrap();
        zip.start_file(DOCUMENT_PART, options).unwrap();
        zip.write_all(document_xml.as_bytes()).unwrap();
        zip.finish().unwrap();
    }

    #[test]
    fn extracts_paragraphs_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memo.docx");
        write_docx(
            &path,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>
<w:p w:rsidR="001"><w:pPr><w:pStyle w:val="Title"/></w:pPr><w:r><w:t>Quarterly</w:t></w:r><w:r><w:t xml:space="preserve"> report</w:t></w:r></w:p>
<w:p/>
<w:p><w:r><w:t>Revenue</w:t><w:tab/><w:t>up</w:t></w:r></w:p>
</w:body></w:document>"#,
        );

        let text = DocxExtractor.extract(&path).unwrap();
        assert_eq!(text, "Quarterly report\n\nRevenue\tup");
    }

    #[test]
    fn missing_document_part_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.docx");
        let file = std::fs::File::create(&path).unwrap();
        let mut zip = zip::ZipWriter::new(file);
        zip.start_file("readme.txt", zip::write::SimpleFileOptions::default())
            .unwrap();
        zip.write_all(b"hi").unwrap();
        zip.finish().unwrap();

        let err = DocxExtractor.extract(&path).unwrap_err();
        assert!(matches!(err, ExtractError::MissingPart(DOCUMENT_PART)));
    }

    #[test]
    fn non_zip_file_is_a_zip_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.docx");
        std::fs::write(&path, "plain text pretending").unwrap();

        let err = DocxExtractor.extract(&path).unwrap_err();
        assert!(matches!(err, ExtractError::Zip(_)));
    }

    #[test]
    fn entities_and_line_breaks() {
        let xml = r#"<w:p><w:r><w:t>Fish &amp; chips &lt;3 &#233;&#x2014;</w:t><w:br/><w:t>next</w:t></w:r></w:p>"#;
        assert_eq!(paragraphs_text(xml), "Fish & chips <3 é—\nnext");
    }

    #[test]
    fn empty_paragraph_with_attributes_does_not_swallow_the_next() {
        let xml = r#"<w:p w:rsidR="00A1"/><w:p><w:r><w:t>after</w:t></w:r></w:p>"#;
        assert_eq!(paragraphs_text(xml), "\nafter");
    }

    #[test]
    fn text_box_content_does_not_split_the_outer_paragraph() {
        let xml = r#"<w:p><w:r><w:t>before</w:t></w:r><w:r><w:drawing><wps:txbx><w:txbxContent><w:p><w:r><w:t>boxed</w:t></w:r></w:p></w:txbxContent></wps:txbx></w:drawing></w:r><w:r><w:t xml:space="preserve"> after</w:t></w:r></w:p><w:p><w:r><w:t>next</w:t></w:r></w:p>"#;
        assert_eq!(paragraphs_text(xml), "before after\nnext");
    }

    #[test]
    fn paragraph_properties_are_not_paragraphs() {
        let xml = r#"<w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/></w:tabs></w:pPr><w:r><w:t>only</w:t></w:r></w:p>"#;
        assert_eq!(paragraphs_text(xml), "only");
    }
}

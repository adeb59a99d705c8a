//! Minimal zipped-XML workbook writer for the tabular projection.
//!
//! Produces a single-sheet workbook named "Clauses" with inline string cells.
//! Embedded newlines are encoded as the spreadsheet line-break entity so
//! multi-paragraph clause text survives the round trip.

use std::io::{Seek, Write};

use zip::ZipWriter;
use zip::write::FileOptions;

use crate::error::{ExtractError, Result};

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
  <Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
  <Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>
</Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

const WORKBOOK_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <sheets>
    <sheet name="Clauses" sheetId="1" r:id="rId1"/>
  </sheets>
</workbook>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
  <fonts count="1"><font><name val="Calibri"/><family val="2"/><sz val="11"/></font></fonts>
  <fills count="1"><fill><patternFill patternType="none"/></fill></fills>
  <borders count="1"><border/></borders>
  <cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs>
  <cellXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0" applyAlignment="1"><alignment wrapText="1"/></xf></cellXfs>
  <cellStyles count="1"><cellStyle name="Normal" xfId="0" builtinId="0"/></cellStyles>
</styleSheet>"#;

/// Writes the tabular rows as a workbook to any seekable writer.
pub fn write_workbook<W: Write + Seek>(rows: &[Vec<String>], writer: W) -> Result<()> {
    let sheet = build_sheet_xml(rows);
    let mut archive = ZipWriter::new(writer);
    let options: FileOptions<()> = FileOptions::default();

    let entries: [(&str, &str); 6] = [
        ("[Content_Types].xml", CONTENT_TYPES),
        ("_rels/.rels", ROOT_RELS),
        ("xl/workbook.xml", WORKBOOK_XML),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS),
        ("xl/worksheets/sheet1.xml", sheet.as_str()),
        ("xl/styles.xml", STYLES_XML),
    ];
    for (name, contents) in entries {
        archive.start_file(name, options).map_err(zip_error)?;
        archive.write_all(contents.as_bytes())?;
    }
    archive.finish().map_err(zip_error)?;
    Ok(())
}

fn zip_error(err: zip::result::ZipError) -> ExtractError {
    ExtractError::Io(std::io::Error::other(err))
}

fn build_sheet_xml(rows: &[Vec<String>]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <worksheet xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\">\n\
         \x20 <sheetData>\n",
    );
    for (row_idx, row) in rows.iter().enumerate() {
        let row_ref = row_idx + 1;
        xml.push_str(&format!("    <row r=\"{row_ref}\">\n"));
        for (col_idx, value) in row.iter().enumerate() {
            let cell_ref = format!("{}{row_ref}", column_letter(col_idx));
            if value.is_empty() {
                xml.push_str(&format!("      <c r=\"{cell_ref}\"/>\n"));
                continue;
            }
            let escaped = html_escape::encode_text(value).replace('\n', "&#10;");
            xml.push_str(&format!(
                "      <c r=\"{cell_ref}\" t=\"inlineStr\"><is><t xml:space=\"preserve\">{escaped}</t></is></c>\n"
            ));
        }
        xml.push_str("    </row>\n");
    }
    xml.push_str("  </sheetData>\n</worksheet>");
    xml
}

/// A1-style column letters: 0 is "A", 25 is "Z", 26 is "AA".
fn column_letter(mut index: usize) -> String {
    let mut letters = String::new();
    loop {
        let remainder = index % 26;
        letters.insert(0, (b'A' + remainder as u8) as char);
        index /= 26;
        if index == 0 {
            break;
        }
        index -= 1;
    }
    letters
}

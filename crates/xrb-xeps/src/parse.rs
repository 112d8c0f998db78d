//! Parser for the published extension index document.

use xrb_core::ports::{XepDocument, XepRevision};

/// Extract the accepted entries from the index XML.
///
/// Entries without the accepted mark or without a numeric identifier are
/// skipped; missing header fields stay empty.
pub fn parse_xeplist(xml: &str) -> Result<Vec<XepDocument>, String> {
    let doc = roxmltree::Document::parse(xml).map_err(|e| e.to_string())?;

    let mut out = Vec::new();
    for node in doc.descendants().filter(|n| n.has_tag_name("xep")) {
        if node.attribute("accepted") != Some("true") {
            continue;
        }

        let text = |tag: &str| -> String {
            node.children()
                .find(|c| c.has_tag_name(tag))
                .and_then(|c| c.text())
                .unwrap_or_default()
                .trim()
                .to_string()
        };

        let Ok(number) = text("number").parse::<u32>() else {
            continue;
        };

        let revision = node
            .children()
            .find(|c| c.has_tag_name("last-revision"))
            .map(|rev| {
                let rev_text = |tag: &str| -> String {
                    rev.children()
                        .find(|c| c.has_tag_name(tag))
                        .and_then(|c| c.text())
                        .unwrap_or_default()
                        .trim()
                        .to_string()
                };
                XepRevision {
                    date: rev_text("date"),
                    version: rev_text("version"),
                    initials: rev_text("initials"),
                    remark: rev_text("remark"),
                }
            })
            .unwrap_or_default();

        out.push(XepDocument {
            number,
            title: text("title"),
            doc_type: text("type"),
            summary: text("abstract"),
            status: text("status"),
            approver: text("approver"),
            shortname: text("shortname"),
            sig: text("sig"),
            lastcall: text("lastcall"),
            revision,
        });
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"<?xml version='1.0' encoding='utf-8'?>
<xeps>
  <xep accepted='true'>
    <number>0045</number>
    <title>Multi-User Chat</title>
    <abstract>Multi-user text conferencing.</abstract>
    <type>Standards Track</type>
    <status>Draft</status>
    <approver>Council</approver>
    <shortname>muc</shortname>
    <last-revision>
      <date>2021-03-04</date>
      <version>1.34.3</version>
      <initials>ssw</initials>
      <remark>Editorial fixes.</remark>
    </last-revision>
  </xep>
  <xep accepted='false'>
    <number>0946</number>
    <title>Rejected Proposal</title>
  </xep>
  <xep accepted='true'>
    <number>not-a-number</number>
    <title>Broken Entry</title>
  </xep>
</xeps>
"#;

    #[test]
    fn keeps_only_accepted_numeric_entries() {
        let docs = parse_xeplist(FIXTURE).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].number, 45);
        assert_eq!(docs[0].title, "Multi-User Chat");
        assert_eq!(docs[0].shortname, "muc");
    }

    #[test]
    fn revision_fields_are_extracted() {
        let docs = parse_xeplist(FIXTURE).unwrap();
        assert_eq!(docs[0].revision.date, "2021-03-04");
        assert_eq!(docs[0].revision.version, "1.34.3");
        assert_eq!(docs[0].revision.initials, "ssw");
    }

    #[test]
    fn missing_fields_stay_empty() {
        let docs = parse_xeplist(FIXTURE).unwrap();
        assert!(docs[0].sig.is_empty());
        assert!(docs[0].lastcall.is_empty());
    }

    #[test]
    fn malformed_xml_is_a_parse_error() {
        assert!(parse_xeplist("<xeps><xep>").is_err());
    }

    #[test]
    fn empty_index_yields_no_documents() {
        assert!(parse_xeplist("<xeps/>").unwrap().is_empty());
    }
}

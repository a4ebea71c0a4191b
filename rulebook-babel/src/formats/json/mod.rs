//! JSON dump of the AST snapshot.

use crate::error::FormatError;
use crate::format::Format;
use rulebook_parser::ast::snapshot_from_document;
use rulebook_parser::Document;

pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "JSON dump of the document tree"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_json::to_string_pretty(&snapshot_from_document(doc))
            .map_err(|err| FormatError::SerializationError(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rulebook_parser::ast::AstSnapshot;
    use rulebook_parser::parse_document;

    #[test]
    fn test_json_round_trips_the_snapshot() {
        let doc = parse_document("ANNEX Spells\nFireball").unwrap();
        let json = JsonFormat.serialize(&doc).unwrap();

        let snapshot: AstSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, snapshot_from_document(&doc));
        assert_eq!(snapshot.children[0].node_type, "Annex");
        assert_eq!(snapshot.children[0].label, "Spells");
    }
}

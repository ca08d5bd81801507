//! Government documents
//!
//! A person is identified by either a CPF or a CNPJ. Only the digits are
//! stored; punctuation is added back when formatting for display.

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use std::str::FromStr;

use crate::checksum::{cnpj, cpf};
use crate::dump::{Dump, DumpMap};
use crate::error::PartyError;

/// Kind of registry number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "CPF")]
    Cpf,
    #[serde(rename = "CNPJ")]
    Cnpj,
}

impl DocumentType {
    /// Legacy numeric code (CPF = 1, CNPJ = 2)
    pub fn code(&self) -> u8 {
        match self {
            DocumentType::Cpf => 1,
            DocumentType::Cnpj => 2,
        }
    }

    /// Looks a type up by its legacy numeric code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(DocumentType::Cpf),
            2 => Some(DocumentType::Cnpj),
            _ => None,
        }
    }

    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Cpf => "CPF",
            DocumentType::Cnpj => "CNPJ",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated document
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "type")]
    pub kind: DocumentType,
    /// Digits only
    pub number: String,
}

impl Document {
    /// Validates `raw` as a CPF, then as a CNPJ
    ///
    /// Any non-digit characters are ignored.
    ///
    /// # Errors
    ///
    /// Returns `PartyError::InvalidDocument` if neither checksum passes
    ///
    /// # Example
    ///
    /// ```rust
    /// use domain_party::document::{Document, DocumentType};
    ///
    /// let doc = Document::parse("529.982.247-25").unwrap();
    /// assert_eq!(doc.kind, DocumentType::Cpf);
    /// assert_eq!(doc.number, "52998224725");
    /// ```
    pub fn parse(raw: &str) -> Result<Self, PartyError> {
        if let Some(number) = cpf::validate(raw) {
            return Ok(Self { kind: DocumentType::Cpf, number });
        }
        if let Some(number) = cnpj::validate(raw) {
            return Ok(Self { kind: DocumentType::Cnpj, number });
        }
        Err(PartyError::InvalidDocument)
    }

    /// Formats the number with its punctuation
    ///
    /// When `prepend` is true the type label is added, e.g. `"CPF: "`.
    pub fn format(&self, prepend: bool) -> String {
        let formatted = match self.kind {
            DocumentType::Cpf => cpf::format(&self.number),
            DocumentType::Cnpj => cnpj::format(&self.number),
        };
        if prepend {
            format!("{}: {}", self.kind.label(), formatted)
        } else {
            formatted
        }
    }
}

impl FromStr for Document {
    type Err = PartyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(false))
    }
}

impl Dump for Document {
    fn dump(&self) -> DumpMap {
        let mut map = DumpMap::new();
        map.insert("type".into(), json!(self.kind.label()));
        map.insert("number".into(), json!(self.number));
        map
    }
}

/// Validates a document as a Brazilian CPF or CNPJ
pub fn validate_document(raw: &str) -> Result<Document, PartyError> {
    Document::parse(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cpf() {
        let doc = Document::parse("111.444.777-35").unwrap();
        assert_eq!(doc.kind, DocumentType::Cpf);
        assert_eq!(doc.number, "11144477735");
    }

    #[test]
    fn test_parse_cnpj() {
        let doc = Document::parse("11.222.333/0001-81").unwrap();
        assert_eq!(doc.kind, DocumentType::Cnpj);
        assert_eq!(doc.number, "11222333000181");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            Document::parse("123.456.789-00"),
            Err(PartyError::InvalidDocument)
        ));
        assert!(matches!(Document::parse(""), Err(PartyError::InvalidDocument)));
    }

    #[test]
    fn test_format_with_label() {
        let cpf = Document::parse("52998224725").unwrap();
        assert_eq!(cpf.format(false), "529.982.247-25");
        assert_eq!(cpf.format(true), "CPF: 529.982.247-25");

        let cnpj = Document::parse("11222333000181").unwrap();
        assert_eq!(cnpj.format(true), "CNPJ: 11.222.333/0001-81");
    }

    #[test]
    fn test_legacy_codes() {
        assert_eq!(DocumentType::Cpf.code(), 1);
        assert_eq!(DocumentType::Cnpj.code(), 2);
        assert_eq!(DocumentType::from_code(2), Some(DocumentType::Cnpj));
        assert_eq!(DocumentType::from_code(3), None);
    }

    #[test]
    fn test_serde_shape() {
        let doc = Document::parse("52998224725").unwrap();
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["type"], "CPF");
        assert_eq!(json["number"], "52998224725");
    }
}

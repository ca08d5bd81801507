//! Person entity
//!
//! A person is someone in the real world: a name, a government document
//! and any number of addresses. Names are kept whole; split or format them
//! before building the person if your application needs to.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::address::Address;
use crate::document::Document;
use crate::dump::{Dump, DumpMap};
use crate::error::PartyError;
use crate::full_address::FullAddress;

/// Either address shape a person can hold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PersonAddress {
    /// Free-form strings only
    Flat(Address),
    /// Resolved from the geography tables plus local details
    Full(FullAddress),
}

impl From<Address> for PersonAddress {
    fn from(address: Address) -> Self {
        PersonAddress::Flat(address)
    }
}

impl From<FullAddress> for PersonAddress {
    fn from(address: FullAddress) -> Self {
        PersonAddress::Full(address)
    }
}

impl Dump for PersonAddress {
    fn dump(&self) -> DumpMap {
        match self {
            PersonAddress::Flat(address) => address.dump(),
            PersonAddress::Full(address) => address.dump(),
        }
    }
}

/// A person identified by a CPF or CNPJ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    /// Digits only; use [`Person::format_document`] for display
    pub document: Document,
    /// A plain list; label them (home, work, ...) in your application
    pub addresses: Vec<PersonAddress>,
}

impl Person {
    /// Creates a person, validating the document
    ///
    /// # Errors
    ///
    /// Returns `PartyError::InvalidDocument` if `document` is neither a
    /// valid CPF nor a valid CNPJ
    ///
    /// # Example
    ///
    /// ```rust
    /// use domain_party::person::Person;
    ///
    /// let person = Person::new("Maria da Silva", "529.982.247-25").unwrap();
    /// assert_eq!(person.format_document(true), "CPF: 529.982.247-25");
    /// ```
    pub fn new(name: impl Into<String>, document: &str) -> Result<Self, PartyError> {
        Ok(Self {
            name: name.into(),
            document: Self::validate_document(document)?,
            addresses: Vec::new(),
        })
    }

    /// Validates a document as Brazilian CPF or CNPJ
    pub fn validate_document(raw: &str) -> Result<Document, PartyError> {
        Document::parse(raw)
    }

    /// Formats the document, optionally prefixed by its type
    pub fn format_document(&self, prepend: bool) -> String {
        self.document.format(prepend)
    }

    pub fn add_address(&mut self, address: impl Into<PersonAddress>) {
        self.addresses.push(address.into());
    }

    pub fn with_address(mut self, address: impl Into<PersonAddress>) -> Self {
        self.add_address(address);
        self
    }
}

impl Dump for Person {
    fn dump(&self) -> DumpMap {
        let mut map = DumpMap::new();
        map.insert("name".into(), json!(self.name));
        map.insert("document".into(), self.document.dump_value());
        map.insert(
            "addresses".into(),
            Value::Array(self.addresses.iter().map(Dump::dump_value).collect()),
        );
        map
    }
}

//! Party & Address Domain
//!
//! Small data-holder objects for real-world entities:
//!
//! - **Person**: a name, a CPF or CNPJ document, and its addresses
//! - **Address**: a postal address made of caller-supplied strings
//! - **FullAddress**: county/state/country resolved from the geography
//!   tables, plus the local details a client supplies
//!
//! Geography rows are read through the [`GeographyPort`] trait; the
//! PostgreSQL adapter lives in `infra_db`, and an in-memory mock is
//! available behind the `mock` feature.
//!
//! # Examples
//!
//! ```rust,ignore
//! use domain_party::{FullAddress, AddressPatch, Person, Dump};
//! use core_kernel::CountyId;
//!
//! let mut address = FullAddress::load(&port, CountyId::new(5)).await?;
//! address.set(AddressPatch::new().zipcode("00000"));
//!
//! let person = Person::new("Maria da Silva", "529.982.247-25")?
//!     .with_address(address);
//!
//! println!("{}", serde_json::Value::Object(person.dump()));
//! ```

pub mod address;
pub mod checksum;
pub mod document;
pub mod dump;
pub mod error;
pub mod full_address;
pub mod geography;
pub mod lookup;
pub mod person;
pub mod ports;

pub use address::Address;
pub use document::{Document, DocumentType, validate_document};
pub use dump::{Dump, DumpMap};
pub use error::PartyError;
pub use full_address::{AddressPatch, FullAddress, LocalDetails};
pub use geography::{AddressLookup, Country, County, CountyRecord, State, StateRecord};
pub use lookup::lookup_address;
pub use person::{Person, PersonAddress};
pub use ports::GeographyPort;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockGeographyPort;

//! Geography reference data
//!
//! Countries, states and counties are read-only rows. The `*Record` types
//! mirror a row including its foreign key; once a lookup has resolved the
//! chain the references are dropped and the plain `State` / `County` values
//! are kept inside an [`AddressLookup`].

use serde::{Deserialize, Serialize};
use serde_json::json;

use core_kernel::{CountryId, CountyId, StateId};

use crate::dump::{Dump, DumpMap};

/// A country row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: CountryId,
    /// ISO 3166-1 alpha-2
    pub code_a2: String,
    /// ISO 3166-1 alpha-3
    pub code_a3: String,
    /// ISO 3166-1 numeric, kept as text for its leading zeros
    pub code_number: String,
    pub name_en: String,
    pub name_local: String,
}

/// A state row, still referencing its country
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateRecord {
    pub id: StateId,
    pub country_id: CountryId,
    pub code: String,
    pub name: String,
}

/// A county row, still referencing its state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountyRecord {
    pub id: CountyId,
    pub state_id: StateId,
    pub name: String,
}

/// A state with its country reference resolved away
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub id: StateId,
    pub code: String,
    pub name: String,
}

/// A county with its state reference resolved away
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct County {
    pub id: CountyId,
    pub name: String,
}

impl From<StateRecord> for State {
    fn from(record: StateRecord) -> Self {
        Self {
            id: record.id,
            code: record.code,
            name: record.name,
        }
    }
}

impl From<CountyRecord> for County {
    fn from(record: CountyRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
        }
    }
}

/// The resolved county → state → country chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressLookup {
    pub country: Country,
    pub state: State,
    pub county: County,
}

impl AddressLookup {
    /// One-line description, e.g. `"Springfield, IL, United States"`
    pub fn describe(&self) -> String {
        format!("{}, {}, {}", self.county.name, self.state.code, self.country.name_en)
    }
}

impl Dump for Country {
    fn dump(&self) -> DumpMap {
        let mut map = DumpMap::new();
        map.insert("id".into(), json!(self.id.value()));
        map.insert("code_a2".into(), json!(self.code_a2));
        map.insert("code_a3".into(), json!(self.code_a3));
        map.insert("code_number".into(), json!(self.code_number));
        map.insert("name_en".into(), json!(self.name_en));
        map.insert("name_local".into(), json!(self.name_local));
        map
    }
}

impl Dump for State {
    fn dump(&self) -> DumpMap {
        let mut map = DumpMap::new();
        map.insert("id".into(), json!(self.id.value()));
        map.insert("code".into(), json!(self.code));
        map.insert("name".into(), json!(self.name));
        map
    }
}

impl Dump for County {
    fn dump(&self) -> DumpMap {
        let mut map = DumpMap::new();
        map.insert("id".into(), json!(self.id.value()));
        map.insert("name".into(), json!(self.name));
        map
    }
}

impl Dump for AddressLookup {
    fn dump(&self) -> DumpMap {
        let mut map = DumpMap::new();
        map.insert("country".into(), self.country.dump_value());
        map.insert("state".into(), self.state.dump_value());
        map.insert("county".into(), self.county.dump_value());
        map
    }
}

//! Pre-built Test Fixtures
//!
//! Provides ready-to-use geography rows and documents. The ids are fixed so
//! tests can refer to them directly.

use core_kernel::{CountryId, CountyId, StateId};
use domain_party::{Country, CountyRecord, MockGeographyPort, StateRecord};

/// Fixture for geography rows
pub struct GeographyFixtures;

impl GeographyFixtures {
    /// Country 1
    pub const UNITED_STATES: CountryId = CountryId::new(1);
    /// Country 76
    pub const BRAZIL: CountryId = CountryId::new(76);
    /// State 2, in the United States
    pub const ILLINOIS: StateId = StateId::new(2);
    /// State 35, in Brazil
    pub const SAO_PAULO: StateId = StateId::new(35);
    /// County 5, in Illinois
    pub const SPRINGFIELD: CountyId = CountyId::new(5);
    /// County 3550308, in São Paulo
    pub const SAO_PAULO_CITY: CountyId = CountyId::new(3_550_308);
    /// County whose state row is missing
    pub const DANGLING_STATE: CountyId = CountyId::new(900);
    /// County whose state references a missing country
    pub const DANGLING_COUNTRY: CountyId = CountyId::new(901);
    /// No county row has this id
    pub const MISSING: CountyId = CountyId::new(999);

    /// Missing state referenced by `DANGLING_STATE`
    pub const ORPHAN_STATE: StateId = StateId::new(98);
    /// State whose country row is missing
    pub const STATE_WITHOUT_COUNTRY: StateId = StateId::new(99);
    /// Missing country referenced by `STATE_WITHOUT_COUNTRY`
    pub const ORPHAN_COUNTRY: CountryId = CountryId::new(998);

    pub fn united_states() -> Country {
        Country {
            id: Self::UNITED_STATES,
            code_a2: "US".to_string(),
            code_a3: "USA".to_string(),
            code_number: "840".to_string(),
            name_en: "United States".to_string(),
            name_local: "United States".to_string(),
        }
    }

    pub fn brazil() -> Country {
        Country {
            id: Self::BRAZIL,
            code_a2: "BR".to_string(),
            code_a3: "BRA".to_string(),
            code_number: "076".to_string(),
            name_en: "Brazil".to_string(),
            name_local: "Brasil".to_string(),
        }
    }

    pub fn illinois() -> StateRecord {
        StateRecord {
            id: Self::ILLINOIS,
            country_id: Self::UNITED_STATES,
            code: "IL".to_string(),
            name: "Illinois".to_string(),
        }
    }

    pub fn sao_paulo() -> StateRecord {
        StateRecord {
            id: Self::SAO_PAULO,
            country_id: Self::BRAZIL,
            code: "SP".to_string(),
            name: "São Paulo".to_string(),
        }
    }

    pub fn springfield() -> CountyRecord {
        CountyRecord {
            id: Self::SPRINGFIELD,
            state_id: Self::ILLINOIS,
            name: "Springfield".to_string(),
        }
    }

    pub fn sao_paulo_city() -> CountyRecord {
        CountyRecord {
            id: Self::SAO_PAULO_CITY,
            state_id: Self::SAO_PAULO,
            name: "São Paulo".to_string(),
        }
    }

    /// All consistent rows
    pub fn countries() -> Vec<Country> {
        vec![Self::united_states(), Self::brazil()]
    }

    pub fn states() -> Vec<StateRecord> {
        vec![
            Self::illinois(),
            Self::sao_paulo(),
            StateRecord {
                id: Self::STATE_WITHOUT_COUNTRY,
                country_id: Self::ORPHAN_COUNTRY,
                code: "XX".to_string(),
                name: "Nowhere".to_string(),
            },
        ]
    }

    pub fn counties() -> Vec<CountyRecord> {
        vec![
            Self::springfield(),
            Self::sao_paulo_city(),
            CountyRecord {
                id: Self::DANGLING_STATE,
                state_id: Self::ORPHAN_STATE,
                name: "Lost County".to_string(),
            },
            CountyRecord {
                id: Self::DANGLING_COUNTRY,
                state_id: Self::STATE_WITHOUT_COUNTRY,
                name: "Stateless County".to_string(),
            },
        ]
    }
}

/// Returns a mock port holding every `GeographyFixtures` row
///
/// The dangling counties let tests reach the state and country
/// not-found branches of the lookup.
pub async fn seeded_port() -> MockGeographyPort {
    MockGeographyPort::with_records(
        GeographyFixtures::countries(),
        GeographyFixtures::states(),
        GeographyFixtures::counties(),
    )
    .await
}

/// Fixture for document test data
pub struct DocumentFixtures;

impl DocumentFixtures {
    /// Valid CPF, digits only
    pub const CPF: &'static str = "52998224725";
    /// The same CPF in display form
    pub const CPF_FORMATTED: &'static str = "529.982.247-25";
    /// Valid CNPJ, digits only
    pub const CNPJ: &'static str = "11222333000181";
    /// The same CNPJ in display form
    pub const CNPJ_FORMATTED: &'static str = "11.222.333/0001-81";
    /// Eleven digits with a wrong second check digit
    pub const CPF_BAD_CHECK: &'static str = "52998224726";
    /// Passes the mod-11 arithmetic but is a repeated sequence
    pub const REPEATED: &'static str = "11111111111";

    /// More valid CPFs
    pub fn cpfs() -> Vec<&'static str> {
        vec![Self::CPF, "11144477735", "12345678909"]
    }

    /// More valid CNPJs
    pub fn cnpjs() -> Vec<&'static str> {
        vec![Self::CNPJ, "04252011000110", "33000167000101"]
    }
}

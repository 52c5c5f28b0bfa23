//! Records the mock API starts with.
//!
//! Owners line up with the mock identity directory in `mapventures-auth`:
//! company `1` belongs to identity `2`, company `2` to identity `3`, and both
//! events to the organizer, identity `4`.

use chrono::NaiveDate;
use mapventures_core::{Company, Event};

/// The two seeded companies.
pub fn companies() -> Vec<Company> {
    vec![
        Company {
            id: "1".to_string(),
            name: "TechJoinville Solutions".to_string(),
            description: "Desenvolvimento de software e sistemas web".to_string(),
            category: "Tecnologia".to_string(),
            phone: "(47) 3422-1234".to_string(),
            website: "www.techjoinville.com.br".to_string(),
            address: "Rua das Palmeiras, 123 - Centro, Joinville - SC".to_string(),
            employees: "50-100".to_string(),
            founded: 2015,
            lat: -26.3044,
            lng: -48.8487,
            owner_id: "2".to_string(),
        },
        Company {
            id: "2".to_string(),
            name: "Metalúrgica Norte SC".to_string(),
            description: "Fundição e usinagem de peças industriais".to_string(),
            category: "Metalurgia".to_string(),
            phone: "(47) 3435-5678".to_string(),
            website: "www.metalurgicnorte.com.br".to_string(),
            address: "Av. Industrial, 456 - Distrito Industrial, Joinville - SC".to_string(),
            employees: "100-200".to_string(),
            founded: 2010,
            lat: -26.2946,
            lng: -48.8397,
            owner_id: "3".to_string(),
        },
    ]
}

/// The two seeded events.
pub fn events() -> Vec<Event> {
    vec![
        Event {
            id: "1".to_string(),
            name: "Festival de Dança de Joinville".to_string(),
            description: "O maior festival de dança do mundo".to_string(),
            date: date(2024, 7, 15),
            location: "Centreventos Cau Hansen".to_string(),
            lat: -26.2985,
            lng: -48.8456,
            owner_id: "4".to_string(),
        },
        Event {
            id: "2".to_string(),
            name: "Feira do Empreendedor".to_string(),
            description: "Networking e oportunidades de negócio".to_string(),
            date: date(2024, 8, 20),
            location: "Expoville".to_string(),
            lat: -26.2757,
            lng: -48.8234,
            owner_id: "4".to_string(),
        },
    ]
}

// Literal dates above are all valid; MIN keeps this total anyway.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

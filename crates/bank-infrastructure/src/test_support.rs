//! Client fixtures for adapter tests

use bank_core::domain::{
    Address, Client, ClientType, ContactDetails, DocumentType, PersonalInformation,
};
use chrono::NaiveDate;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;

pub fn client() -> Client {
    let email = format!("client{}@example.com", (1000..99999).fake::<u32>());
    let first: String = FirstName().fake();
    let last: String = LastName().fake();

    Client::new(
        PersonalInformation::new(
            first,
            last,
            "X1234567L",
            DocumentType::ResidenceCard,
            NaiveDate::from_ymd_opt(1990, 1, 31).unwrap(),
        )
        .unwrap(),
        Address::new("Rua Augusta 5", "Lisbon", "Lisbon", "Portugal", "1100-048").unwrap(),
        ContactDetails::new(email, "351912345678", Some(String::new())).unwrap(),
        ClientType::Individual,
    )
    .unwrap()
}

//! Test doubles for the search layer's collaborators.

mod mock_contacts_service;
mod mock_engine;
mod mock_phone_number_service;

#[allow(unused_imports)]
pub use mock_contacts_service::MockContactsService;
#[allow(unused_imports)]
pub use mock_engine::{MockTransaction, ScriptedMatch};
#[allow(unused_imports)]
pub use mock_phone_number_service::FailingPhoneNumberService;

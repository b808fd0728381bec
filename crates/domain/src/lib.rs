mod contact;
mod error;
mod event;
mod navigator;
mod site;

pub use contact::{
    ContactDetails, ContactField, ContactForm, SubmissionReceipt, CONTACT_CATEGORIES,
    DEFAULT_CONFIRMATION_MS,
};
pub use error::DomainError;
pub use event::{EventCatalog, EventDetail, EventRecord};
pub use navigator::{DetailView, GalleryNavigator, NavigatorState, Transition};
pub use site::{MenuState, SiteSection};

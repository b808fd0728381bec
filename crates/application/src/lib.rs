mod error;
mod ports;
mod service;
mod use_cases;

pub use error::ApplicationError;
pub use ports::{CatalogSource, Clock};
pub use service::ApplicationService;
pub use use_cases::{
    BootstrapCatalogCommand, CloseEventCommand, ListEventsQuery, NavigateSectionCommand,
    NextEventCommand, OpenEventCommand, PollContactQuery, PreviousEventCommand, ShowDetailQuery,
    SubmitContactCommand, ToggleMenuCommand, UpdateContactFieldCommand,
};

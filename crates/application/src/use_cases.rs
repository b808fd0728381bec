use fcc_gallery_domain::{ContactField, SiteSection, DEFAULT_CONFIRMATION_MS};

#[derive(Debug, Clone, Copy)]
pub struct BootstrapCatalogCommand {
    pub confirmation_ms: u64,
}

impl Default for BootstrapCatalogCommand {
    fn default() -> Self {
        Self {
            confirmation_ms: DEFAULT_CONFIRMATION_MS,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListEventsQuery;

#[derive(Debug, Clone, Copy)]
pub struct OpenEventCommand {
    pub index: usize,
}

#[derive(Debug, Clone, Default)]
pub struct NextEventCommand;

#[derive(Debug, Clone, Default)]
pub struct PreviousEventCommand;

#[derive(Debug, Clone, Default)]
pub struct CloseEventCommand;

#[derive(Debug, Clone, Default)]
pub struct ShowDetailQuery;

#[derive(Debug, Clone)]
pub struct UpdateContactFieldCommand {
    pub field: ContactField,
    pub value: String,
}

#[derive(Debug, Clone, Default)]
pub struct SubmitContactCommand;

#[derive(Debug, Clone, Default)]
pub struct PollContactQuery;

#[derive(Debug, Clone, Default)]
pub struct ToggleMenuCommand;

#[derive(Debug, Clone, Copy)]
pub struct NavigateSectionCommand {
    pub section: SiteSection,
}

use fcc_gallery_domain::{
    ContactForm, DetailView, EventCatalog, GalleryNavigator, MenuState, NavigatorState,
    SiteSection, SubmissionReceipt, Transition,
};

use crate::{
    ApplicationError, BootstrapCatalogCommand, CatalogSource, Clock, CloseEventCommand,
    ListEventsQuery, NavigateSectionCommand, NextEventCommand, OpenEventCommand,
    PollContactQuery, PreviousEventCommand, ShowDetailQuery, SubmitContactCommand,
    ToggleMenuCommand, UpdateContactFieldCommand,
};

/// Per-session state behind one display surface: the read-only catalog, the
/// gallery navigator, the contact form and the navigation menu.
pub struct ApplicationService {
    catalog: EventCatalog,
    navigator: GalleryNavigator,
    contact: ContactForm,
    menu: MenuState,
    clock: Box<dyn Clock>,
}

impl ApplicationService {
    pub fn new(catalog: EventCatalog, clock: Box<dyn Clock>, confirmation_ms: u64) -> Self {
        Self {
            navigator: GalleryNavigator::for_catalog(&catalog),
            catalog,
            contact: ContactForm::new(confirmation_ms),
            menu: MenuState::default(),
            clock,
        }
    }

    pub fn bootstrap_catalog(
        command: BootstrapCatalogCommand,
        source: &dyn CatalogSource,
        clock: Box<dyn Clock>,
    ) -> Result<Self, ApplicationError> {
        let events = source.load_events()?;
        let catalog = EventCatalog::new(events)?;
        tracing::info!(
            source = %source.describe(),
            events = catalog.len(),
            "event catalog loaded"
        );
        Ok(Self::new(catalog, clock, command.confirmation_ms))
    }

    pub fn list_events(&self, _query: ListEventsQuery) -> &EventCatalog {
        &self.catalog
    }

    pub fn navigator_state(&self) -> NavigatorState {
        self.navigator.state()
    }

    pub fn open_event(
        &mut self,
        command: OpenEventCommand,
    ) -> Result<Transition, ApplicationError> {
        match self.navigator.open(command.index) {
            Ok(transition) => {
                log_transition("open", transition);
                Ok(transition)
            }
            Err(error) => {
                tracing::warn!(index = command.index, %error, "rejected event selection");
                Err(error.into())
            }
        }
    }

    pub fn next_event(&mut self, _command: NextEventCommand) -> Transition {
        let transition = self.navigator.next();
        log_transition("next", transition);
        transition
    }

    pub fn previous_event(&mut self, _command: PreviousEventCommand) -> Transition {
        let transition = self.navigator.previous();
        log_transition("previous", transition);
        transition
    }

    pub fn close_event(&mut self, _command: CloseEventCommand) -> Transition {
        let transition = self.navigator.close();
        log_transition("close", transition);
        transition
    }

    pub fn show_detail(&self, _query: ShowDetailQuery) -> Option<DetailView<'_>> {
        self.navigator.detail(&self.catalog)
    }

    pub fn contact_form(&self) -> &ContactForm {
        &self.contact
    }

    pub fn update_contact_field(&mut self, command: UpdateContactFieldCommand) {
        self.contact.set(command.field, command.value);
    }

    pub fn submit_contact(&mut self, _command: SubmitContactCommand) -> SubmissionReceipt {
        let receipt = self.contact.submit(self.clock.now_millis());
        tracing::info!(
            details = ?receipt.details,
            confirmed_until_ms = receipt.confirmed_until_ms,
            "contact form submitted"
        );
        receipt
    }

    pub fn poll_contact(&mut self, _query: PollContactQuery) -> bool {
        let reset = self.contact.poll(self.clock.now_millis());
        if reset {
            tracing::debug!("contact form confirmation expired, fields cleared");
        }
        reset
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn toggle_menu(&mut self, _command: ToggleMenuCommand) -> bool {
        self.menu.toggle()
    }

    pub fn navigate_section(&mut self, command: NavigateSectionCommand) -> SiteSection {
        self.menu.navigate(command.section);
        tracing::debug!(anchor = command.section.anchor(), "section selected");
        command.section
    }
}

fn log_transition(operation: &'static str, transition: Transition) {
    match transition {
        Transition::NoOp => tracing::debug!(operation, "gallery navigation had no effect"),
        other => tracing::debug!(operation, transition = ?other, "gallery navigation"),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use fcc_gallery_domain::{ContactField, DomainError, EventDetail, EventRecord};

    use super::*;

    struct FakeSource {
        titles: Vec<&'static str>,
    }

    impl CatalogSource for FakeSource {
        fn describe(&self) -> String {
            "fake".to_string()
        }

        fn load_events(&self) -> Result<Vec<EventRecord>, ApplicationError> {
            Ok(self
                .titles
                .iter()
                .map(|title| EventRecord {
                    title: title.to_string(),
                    image: format!("https://img.example/{title}.jpg"),
                    details: vec![EventDetail::new("Rules", "Full lockout at top")],
                    note: String::new(),
                })
                .collect())
        }
    }

    struct FailingSource;

    impl CatalogSource for FailingSource {
        fn describe(&self) -> String {
            "failing".to_string()
        }

        fn load_events(&self) -> Result<Vec<EventRecord>, ApplicationError> {
            Err(ApplicationError::Io("events.json: not found".to_string()))
        }
    }

    #[derive(Clone, Default)]
    struct FakeClock {
        now: Rc<Cell<u64>>,
    }

    impl Clock for FakeClock {
        fn now_millis(&self) -> u64 {
            self.now.get()
        }
    }

    fn five_event_service() -> (ApplicationService, FakeClock) {
        let clock = FakeClock::default();
        let service = ApplicationService::bootstrap_catalog(
            BootstrapCatalogCommand::default(),
            &FakeSource {
                titles: vec![
                    "Deadlift for Reps",
                    "Farmer's Walk",
                    "Sand Bag / Stone Loading",
                    "Tire Flip",
                    "Barbell Standing Military Press",
                ],
            },
            Box::new(clock.clone()),
        )
        .expect("bootstrap should work");
        (service, clock)
    }

    #[test]
    fn bootstrap_keeps_catalog_order() {
        let (service, _) = five_event_service();
        let catalog = service.list_events(ListEventsQuery);
        assert_eq!(catalog.len(), 5);
        assert_eq!(
            catalog.get(0).expect("first event").title,
            "Deadlift for Reps"
        );
        assert_eq!(service.navigator_state(), NavigatorState::Closed);
    }

    #[test]
    fn bootstrap_surfaces_source_and_catalog_errors() {
        let result = ApplicationService::bootstrap_catalog(
            BootstrapCatalogCommand::default(),
            &FailingSource,
            Box::new(FakeClock::default()),
        );
        assert!(matches!(result, Err(ApplicationError::Io(_))));

        let result = ApplicationService::bootstrap_catalog(
            BootstrapCatalogCommand::default(),
            &FakeSource {
                titles: vec!["Tire Flip", "Tire Flip"],
            },
            Box::new(FakeClock::default()),
        );
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::DuplicateTitle(_)))
        ));
    }

    #[test]
    fn detail_view_tracks_navigation() {
        let (mut service, _) = five_event_service();
        assert!(service.show_detail(ShowDetailQuery).is_none());

        service
            .open_event(OpenEventCommand { index: 2 })
            .expect("open should work");
        let view = service.show_detail(ShowDetailQuery).expect("open detail");
        assert_eq!(view.record.title, "Sand Bag / Stone Loading");
        assert!(view.can_go_previous && view.can_go_next);

        assert_eq!(
            service.next_event(NextEventCommand),
            Transition::Moved { from: 2, to: 3 }
        );
        service.next_event(NextEventCommand);
        assert_eq!(service.next_event(NextEventCommand), Transition::NoOp);
        let view = service.show_detail(ShowDetailQuery).expect("open detail");
        assert_eq!(view.index, 4);
        assert!(!view.can_go_next);

        assert_eq!(
            service.close_event(CloseEventCommand),
            Transition::Closed { from: 4 }
        );
        assert_eq!(service.close_event(CloseEventCommand), Transition::NoOp);
        assert_eq!(service.previous_event(PreviousEventCommand), Transition::NoOp);
    }

    #[test]
    fn invalid_open_is_reported_and_state_kept() {
        let (mut service, _) = five_event_service();
        service
            .open_event(OpenEventCommand { index: 1 })
            .expect("open should work");

        let result = service.open_event(OpenEventCommand { index: 5 });
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::InvalidIndex {
                index: 5,
                len: 5
            }))
        ));
        assert_eq!(service.navigator_state(), NavigatorState::Open(1));
    }

    #[test]
    fn contact_submission_resets_after_confirmation_window() {
        let (mut service, clock) = five_event_service();
        service.update_contact_field(UpdateContactFieldCommand {
            field: ContactField::Institution,
            value: "Pune University".to_string(),
        });

        clock.now.set(10_000);
        let receipt = service.submit_contact(SubmitContactCommand);
        assert_eq!(receipt.details.institution, "Pune University");
        assert!(service.contact_form().is_submitted());

        clock.now.set(12_999);
        assert!(!service.poll_contact(PollContactQuery));

        clock.now.set(13_000);
        assert!(service.poll_contact(PollContactQuery));
        assert_eq!(service.contact_form().value(ContactField::Institution), "");
    }

    #[test]
    fn menu_closes_when_a_section_is_chosen() {
        let (mut service, _) = five_event_service();
        assert!(service.toggle_menu(ToggleMenuCommand));
        service.navigate_section(NavigateSectionCommand {
            section: SiteSection::Athletes,
        });
        assert!(!service.menu().is_open());
        assert_eq!(service.menu().active(), SiteSection::Athletes);
    }
}

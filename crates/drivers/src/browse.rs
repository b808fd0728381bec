use std::io::{BufRead, Write};

use fcc_gallery_adapters::{present_detail, present_event_row};
use fcc_gallery_application::{
    ApplicationError, ApplicationService, CloseEventCommand, ListEventsQuery, NextEventCommand,
    OpenEventCommand, PreviousEventCommand, ShowDetailQuery,
};
use fcc_gallery_domain::Transition;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseInput {
    Next,
    Previous,
    Close,
    Open(usize),
    List,
    Quit,
    Unknown(String),
}

pub fn parse_browse_input(line: &str) -> BrowseInput {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return BrowseInput::Unknown(String::new());
    };

    match (word, parts.next()) {
        ("n" | "next", None) => BrowseInput::Next,
        ("p" | "prev" | "previous", None) => BrowseInput::Previous,
        ("c" | "close", None) => BrowseInput::Close,
        ("l" | "list", None) => BrowseInput::List,
        ("q" | "quit", None) => BrowseInput::Quit,
        ("o" | "open", Some(number)) => match number.parse::<usize>() {
            Ok(number) => BrowseInput::Open(number),
            Err(_) => BrowseInput::Unknown(line.trim().to_string()),
        },
        _ => BrowseInput::Unknown(line.trim().to_string()),
    }
}

/// Line-driven display surface: one command per line, the detail view is
/// printed after every move. Event numbers are 1-based, as `list` prints them.
pub fn run_browse(
    service: &mut ApplicationService,
    start: Option<usize>,
    input: impl BufRead,
    output: &mut impl Write,
) -> std::io::Result<()> {
    if let Some(number) = start {
        open_number(service, number, output)?;
    } else {
        print_catalog(service, output)?;
    }
    writeln!(output, "commands: n, p, o <number>, c, l, q")?;

    for line in input.lines() {
        let line = line?;
        match parse_browse_input(&line) {
            BrowseInput::Next => {
                let transition = service.next_event(NextEventCommand);
                print_after(service, transition, output)?;
            }
            BrowseInput::Previous => {
                let transition = service.previous_event(PreviousEventCommand);
                print_after(service, transition, output)?;
            }
            BrowseInput::Close => {
                let transition = service.close_event(CloseEventCommand);
                print_after(service, transition, output)?;
            }
            BrowseInput::Open(number) => open_number(service, number, output)?,
            BrowseInput::List => print_catalog(service, output)?,
            BrowseInput::Quit => break,
            BrowseInput::Unknown(text) if text.is_empty() => {}
            BrowseInput::Unknown(text) => writeln!(output, "unknown command: {text}")?,
        }
    }

    Ok(())
}

pub fn event_index(number: usize) -> Option<usize> {
    number.checked_sub(1)
}

fn open_number(
    service: &mut ApplicationService,
    number: usize,
    output: &mut impl Write,
) -> std::io::Result<()> {
    let result = match event_index(number) {
        Some(index) => service.open_event(OpenEventCommand { index }),
        None => {
            writeln!(output, "event numbers start at 1")?;
            return Ok(());
        }
    };

    match result {
        Ok(Transition::NoOp) => match service.show_detail(ShowDetailQuery) {
            Some(view) => writeln!(output, "{}", present_detail(&view)),
            None => writeln!(output, "gallery is closed"),
        },
        Ok(transition) => print_after(service, transition, output),
        Err(ApplicationError::Domain(_)) => {
            let len = service.list_events(ListEventsQuery).len();
            writeln!(output, "no event {number}; choose 1 to {len}")
        }
        Err(error) => writeln!(output, "{error}"),
    }
}

fn print_after(
    service: &ApplicationService,
    transition: Transition,
    output: &mut impl Write,
) -> std::io::Result<()> {
    match (transition, service.show_detail(ShowDetailQuery)) {
        (Transition::NoOp, Some(_)) => writeln!(output, "no further event in that direction"),
        (Transition::NoOp, None) => writeln!(output, "gallery is closed"),
        (_, Some(view)) => writeln!(output, "{}", present_detail(&view)),
        (_, None) => writeln!(output, "gallery closed"),
    }
}

fn print_catalog(service: &ApplicationService, output: &mut impl Write) -> std::io::Result<()> {
    let catalog = service.list_events(ListEventsQuery);
    if catalog.is_empty() {
        return writeln!(output, "no events in catalog");
    }
    for (index, event) in catalog.iter().enumerate() {
        writeln!(output, "{}", present_event_row(index, event))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use fcc_gallery_adapters::{EmbeddedCatalogSource, SystemClock};
    use fcc_gallery_application::BootstrapCatalogCommand;
    use fcc_gallery_domain::NavigatorState;

    use super::*;

    fn service() -> ApplicationService {
        ApplicationService::bootstrap_catalog(
            BootstrapCatalogCommand::default(),
            &EmbeddedCatalogSource,
            Box::new(SystemClock),
        )
        .expect("built-in catalog should load")
    }

    fn browse(service: &mut ApplicationService, start: Option<usize>, script: &str) -> String {
        let mut output = Vec::new();
        run_browse(service, start, Cursor::new(script), &mut output).expect("browse should run");
        String::from_utf8(output).expect("output is utf-8")
    }

    #[test]
    fn parses_commands_and_numbers() {
        assert_eq!(parse_browse_input("n"), BrowseInput::Next);
        assert_eq!(parse_browse_input(" previous "), BrowseInput::Previous);
        assert_eq!(parse_browse_input("o 3"), BrowseInput::Open(3));
        assert_eq!(
            parse_browse_input("o three"),
            BrowseInput::Unknown("o three".to_string())
        );
        assert_eq!(
            parse_browse_input("n 2"),
            BrowseInput::Unknown("n 2".to_string())
        );
    }

    #[test]
    fn walking_past_the_last_event_stays_put() {
        let mut service = service();
        let output = browse(&mut service, Some(4), "n\nn\n");

        assert!(output.contains("Event 5 of 5"));
        assert!(output.contains("no further event in that direction"));
        assert_eq!(service.navigator_state(), NavigatorState::Open(4));
    }

    #[test]
    fn out_of_range_number_keeps_current_event() {
        let mut service = service();
        let output = browse(&mut service, None, "o 2\no 9\no 0\nq\nn\n");

        assert!(output.contains("Event 2 of 5"));
        assert!(output.contains("no event 9; choose 1 to 5"));
        assert!(output.contains("event numbers start at 1"));
        assert_eq!(service.navigator_state(), NavigatorState::Open(1));
    }

    #[test]
    fn reopening_the_current_event_reprints_it() {
        let mut service = service();
        let output = browse(&mut service, None, "o 3\no 3\n");

        assert_eq!(output.matches("Event 3 of 5").count(), 2);
        assert!(!output.contains("no further event in that direction"));
        assert_eq!(service.navigator_state(), NavigatorState::Open(2));
    }

    #[test]
    fn close_twice_reports_closed_state() {
        let mut service = service();
        let output = browse(&mut service, Some(1), "c\nc\n");

        assert!(output.contains("gallery closed"));
        assert!(output.contains("gallery is closed"));
        assert_eq!(service.navigator_state(), NavigatorState::Closed);
    }
}

use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::display_notes;
use crate::session::Session;
use crate::store::NoteBackend;

/// Lists the notes matching `query` that carry every tag in `tags`.
pub fn run<B: NoteBackend, S: AsRef<str>>(
    session: &mut Session<B>,
    query: &str,
    tags: &[S],
) -> Result<CmdResult> {
    session.set_search(query);
    session.reset_tags();
    for tag in tags {
        if !session.active_tags().contains(&tag.as_ref().trim().to_lowercase()) {
            session.toggle_tag(tag.as_ref());
        }
    }

    let listed = display_notes(session.notes(), session.view().visible.iter());
    let mut result = CmdResult::default().with_listed_notes(listed);
    result.empty_state = session.empty_state();
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NotePayload;
    use crate::session::EmptyState;
    use crate::store::memory::MemBackend;

    fn session() -> Session<MemBackend> {
        let mut session = Session::open(MemBackend::new()).unwrap();
        session
            .create(NotePayload::new("Trip", "").with_tags(["travel"]))
            .unwrap();
        session
            .create(NotePayload::new("Groceries", "").with_tags(["home"]))
            .unwrap();
        session
    }

    fn titles(result: &CmdResult) -> Vec<&str> {
        result
            .listed_notes
            .iter()
            .map(|d| d.note.title.as_str())
            .collect()
    }

    #[test]
    fn lists_everything_without_filters() {
        let mut session = session();
        let result = run::<_, &str>(&mut session, "", &[]).unwrap();
        assert_eq!(titles(&result), vec!["Trip", "Groceries"]);
        assert_eq!(result.empty_state, None);
    }

    #[test]
    fn query_filters_and_keeps_positions() {
        let mut session = session();
        let result = run::<_, &str>(&mut session, "GROC", &[]).unwrap();
        assert_eq!(titles(&result), vec!["Groceries"]);
        assert_eq!(result.listed_notes[0].position, 2);
    }

    #[test]
    fn query_and_tag_are_combined() {
        let mut session = session();
        let result = run(&mut session, "o", &["home"]).unwrap();
        assert_eq!(titles(&result), vec!["Groceries"]);
    }

    #[test]
    fn repeated_tag_arguments_do_not_cancel_out() {
        let mut session = session();
        let result = run(&mut session, "", &["home", "HOME"]).unwrap();
        assert_eq!(titles(&result), vec!["Groceries"]);
    }

    #[test]
    fn reports_why_nothing_matched() {
        let mut session = session();
        let result = run(&mut session, "", &["work"]).unwrap();
        assert!(result.listed_notes.is_empty());
        assert_eq!(result.empty_state, Some(EmptyState::NoMatches));

        let mut empty = Session::open(MemBackend::new()).unwrap();
        let result = run::<_, &str>(&mut empty, "", &[]).unwrap();
        assert_eq!(result.empty_state, Some(EmptyState::NoNotes));
    }
}

use crate::registry::{AppLauncher, AppRegistry, InstalledApp};
use crate::ui::Theme;
use log::*;

use super::navigation::Screen;

/// Houses data representative of application state.
///
/// The search screen's query and app snapshot live here for exactly as long
/// as the search screen is active; leaving the screen discards both, and
/// re-entering takes a fresh registry snapshot.
pub struct State {
    registry: Box<dyn AppRegistry>,
    launcher: Box<dyn AppLauncher>,
    current_screen: Screen,
    query: String,
    apps: Vec<InstalledApp>,
    theme: Theme,
}

impl State {
    /// Return new state over the given host capabilities, starting on the
    /// landing screen.
    ///
    pub fn new(
        registry: Box<dyn AppRegistry>,
        launcher: Box<dyn AppLauncher>,
        theme: Theme,
    ) -> State {
        State {
            registry,
            launcher,
            current_screen: Screen::Landing,
            query: String::new(),
            apps: vec![],
            theme,
        }
    }

    pub fn current_screen(&self) -> Screen {
        self.current_screen
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn installed_apps(&self) -> &[InstalledApp] {
        &self.apps
    }

    /// Move to the search screen with a fresh empty query and a fresh
    /// registry snapshot.
    ///
    pub fn enter_search(&mut self) {
        self.apps = self.registry.list();
        debug!("Entering search with {} installed applications", self.apps.len());
        self.query.clear();
        self.current_screen = Screen::Search;
    }

    /// Return to the landing screen, discarding the search screen instance.
    ///
    pub fn leave_search(&mut self) {
        self.query.clear();
        self.apps.clear();
        self.current_screen = Screen::Landing;
    }

    pub fn add_query_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn remove_query_char(&mut self) {
        self.query.pop();
    }

    /// Return the single surfaced result: the first app whose name contains
    /// the query case-insensitively, or None when the query is empty or
    /// nothing matches.
    ///
    pub fn first_match(&self) -> Option<&InstalledApp> {
        first_match(&self.query, &self.apps)
    }

    /// Ask the host to launch the surfaced result. A launch that cannot be
    /// resolved is a silent no-op; nothing about the screen changes either
    /// way.
    ///
    pub fn launch_first_match(&self) {
        let app = match self.first_match() {
            Some(app) => app,
            None => return,
        };
        if self.launcher.launch(&app.identifier) {
            info!("Launched '{}' ({})", app.name, app.identifier);
        } else {
            debug!("Launch request for '{}' was not resolvable", app.identifier);
        }
    }
}

/// Return the first element of `apps`, in list order, whose name contains
/// `query` as a case-insensitive substring. An empty query never matches.
///
fn first_match<'a>(query: &str, apps: &'a [InstalledApp]) -> Option<&'a InstalledApp> {
    if query.is_empty() {
        return None;
    }
    let needle = query.to_lowercase();
    apps.iter().find(|app| app.name.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct FakeRegistry {
        apps: Vec<InstalledApp>,
        calls: Rc<RefCell<usize>>,
    }

    impl AppRegistry for FakeRegistry {
        fn list(&self) -> Vec<InstalledApp> {
            *self.calls.borrow_mut() += 1;
            self.apps.clone()
        }
    }

    struct FakeLauncher {
        resolvable: bool,
        launched: Rc<RefCell<Vec<String>>>,
    }

    impl AppLauncher for FakeLauncher {
        fn launch(&self, identifier: &str) -> bool {
            if !self.resolvable {
                return false;
            }
            self.launched.borrow_mut().push(identifier.to_string());
            true
        }
    }

    fn app(name: &str, identifier: &str) -> InstalledApp {
        InstalledApp {
            name: name.to_string(),
            identifier: identifier.to_string(),
        }
    }

    fn sample_apps() -> Vec<InstalledApp> {
        vec![app("Calculator", "com.x.calc"), app("Camera", "com.x.cam")]
    }

    struct Harness {
        state: State,
        launched: Rc<RefCell<Vec<String>>>,
        registry_calls: Rc<RefCell<usize>>,
    }

    fn harness(apps: Vec<InstalledApp>, resolvable: bool) -> Harness {
        let launched = Rc::new(RefCell::new(vec![]));
        let registry_calls = Rc::new(RefCell::new(0));
        let state = State::new(
            Box::new(FakeRegistry {
                apps,
                calls: Rc::clone(&registry_calls),
            }),
            Box::new(FakeLauncher {
                resolvable,
                launched: Rc::clone(&launched),
            }),
            Theme::default(),
        );
        Harness {
            state,
            launched,
            registry_calls,
        }
    }

    #[test]
    fn test_initial_screen_is_landing() {
        let harness = harness(sample_apps(), true);
        assert_eq!(harness.state.current_screen(), Screen::Landing);
        assert_eq!(harness.state.query(), "");
        assert!(harness.state.installed_apps().is_empty());
    }

    #[test]
    fn test_enter_search_fetches_snapshot() {
        let mut harness = harness(sample_apps(), true);
        harness.state.enter_search();
        assert_eq!(harness.state.current_screen(), Screen::Search);
        assert_eq!(harness.state.installed_apps(), sample_apps().as_slice());
        assert_eq!(*harness.registry_calls.borrow(), 1);
    }

    #[test]
    fn test_first_match_takes_first_in_list_order() {
        let apps = vec![app("Camera", "com.x.cam"), app("Camcorder", "com.x.rec")];
        assert_eq!(first_match("cam", &apps).unwrap().identifier, "com.x.cam");
    }

    #[test]
    fn test_first_match_is_case_insensitive() {
        let apps = sample_apps();
        assert_eq!(first_match("CALC", &apps).unwrap().name, "Calculator");
        assert_eq!(first_match("ErA", &apps).unwrap().name, "Camera");
    }

    #[test]
    fn test_empty_query_never_matches() {
        assert!(first_match("", &sample_apps()).is_none());
    }

    #[test]
    fn test_result_shown_and_launch_triggered() {
        // Scenario A: query "cam" surfaces Camera and launches com.x.cam.
        let mut harness = harness(sample_apps(), true);
        harness.state.enter_search();
        for c in "cam".chars() {
            harness.state.add_query_char(c);
        }
        assert_eq!(harness.state.first_match().unwrap().name, "Camera");
        harness.state.launch_first_match();
        assert_eq!(*harness.launched.borrow(), vec!["com.x.cam".to_string()]);
    }

    #[test]
    fn test_no_result_for_unmatched_query() {
        // Scenario B: query "zz" surfaces nothing.
        let mut harness = harness(sample_apps(), true);
        harness.state.enter_search();
        harness.state.add_query_char('z');
        harness.state.add_query_char('z');
        assert!(harness.state.first_match().is_none());
        harness.state.launch_first_match();
        assert!(harness.launched.borrow().is_empty());
    }

    #[test]
    fn test_no_result_when_registry_is_empty() {
        // Scenario C: an unavailable registry reads as zero installed apps.
        let mut harness = harness(vec![], true);
        harness.state.enter_search();
        harness.state.add_query_char('a');
        assert!(harness.state.first_match().is_none());
    }

    #[test]
    fn test_reentry_resets_query_and_refetches() {
        // Scenario D: back and forth yields a fresh instance.
        let mut harness = harness(sample_apps(), true);
        harness.state.enter_search();
        for c in "cam".chars() {
            harness.state.add_query_char(c);
        }
        harness.state.leave_search();
        assert_eq!(harness.state.current_screen(), Screen::Landing);
        harness.state.enter_search();
        assert_eq!(harness.state.query(), "");
        assert_eq!(*harness.registry_calls.borrow(), 2);
    }

    #[test]
    fn test_unresolvable_launch_is_a_noop() {
        let mut harness = harness(sample_apps(), false);
        harness.state.enter_search();
        for c in "cam".chars() {
            harness.state.add_query_char(c);
        }
        harness.state.launch_first_match();
        assert!(harness.launched.borrow().is_empty());
        // Screen state is unchanged by the failed launch.
        assert_eq!(harness.state.current_screen(), Screen::Search);
        assert_eq!(harness.state.query(), "cam");
    }

    #[test]
    fn test_backspace_edits_query() {
        let mut harness = harness(sample_apps(), true);
        harness.state.enter_search();
        harness.state.add_query_char('c');
        harness.state.add_query_char('x');
        harness.state.remove_query_char();
        assert_eq!(harness.state.query(), "c");
        // Removing past the start stays empty.
        harness.state.remove_query_char();
        harness.state.remove_query_char();
        assert_eq!(harness.state.query(), "");
    }
}

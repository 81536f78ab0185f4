//! Host view
//!
//! Owns the tab session for one application instance and routes tab bar
//! and page interactions to it. Renderers read `tab_bar()` and `content()`
//! or subscribe to the session for change notifications.

use std::sync::Arc;

use jelajah_session::{SessionSnapshot, SessionStore};
use jelajah_tabs::{parse_page_ref, PageKind, TabId};

use crate::config::Config;
use crate::pages::{PageDescriptor, PageRegistry};
use crate::sound::{SoundCue, SoundManager, SoundSink};
use crate::view::{ContentView, TabBarView};
use crate::Result;

pub struct Browser {
    /// Configuration
    config: Config,
    /// Tab session, shared with subscribers
    session: SessionStore,
    /// Page kind to descriptor lookup
    registry: Arc<PageRegistry>,
    /// Interaction sounds
    sound: Arc<SoundManager>,
}

impl Browser {
    pub fn new(config: Config, sink: Arc<dyn SoundSink>) -> Result<Self> {
        config.validate()?;

        let session = SessionStore::new(config.home_title.clone());
        let sound = SoundManager::from_config(sink, &config);

        Ok(Self {
            config,
            session,
            registry: Arc::new(PageRegistry::jakarta()),
            sound: Arc::new(sound),
        })
    }

    /// Seed the session with the home tab. Safe to call repeatedly; returns
    /// whether this call did the seeding.
    pub fn start(&self) -> bool {
        let seeded = self.session.initialize();
        if seeded {
            tracing::info!(site = %self.config.site_title, "Browser started");
        }
        seeded
    }

    // === Tab operations ===

    /// "Explore" affordance on a page: open `kind` in a new foreground tab
    pub fn open_page(&self, kind: PageKind) -> TabId {
        self.sound.play(SoundCue::Click);
        self.open(kind)
    }

    pub fn open_page_by_name(&self, name: &str) -> Result<TabId> {
        let kind: PageKind = name.parse()?;
        Ok(self.open_page(kind))
    }

    /// Open a tab with an explicit title and icon, all given by identifier.
    /// Nothing changes unless both identifiers parse.
    pub fn open_tab_by_names(&self, page: &str, title: &str, icon: &str) -> Result<TabId> {
        let (kind, icon) = parse_page_ref(page, icon)?;
        self.sound.play(SoundCue::Click);
        Ok(self.session.add_new_tab(kind, title, icon))
    }

    /// Tab bar "+" button
    pub fn new_tab(&self) -> TabId {
        self.sound.play(SoundCue::Swoosh);
        self.open(self.config.new_tab_page)
    }

    pub fn select_tab(&self, tab_id: &TabId) {
        self.sound.play(SoundCue::TabSwitch);
        self.session.switch_tab(tab_id);
    }

    pub fn close_tab(&self, tab_id: &TabId) {
        self.sound.play(SoundCue::Click);
        self.session.close_tab(tab_id);
    }

    pub fn hover_card(&self) {
        self.sound.play(SoundCue::CardHover);
    }

    fn open(&self, kind: PageKind) -> TabId {
        let page = self.page(kind);
        self.session.add_new_tab(kind, page.title, page.icon)
    }

    fn page(&self, kind: PageKind) -> PageDescriptor {
        self.registry
            .get(kind)
            .cloned()
            .unwrap_or_else(|| PageDescriptor::bare(kind))
    }

    // === Views ===

    pub fn tab_bar(&self) -> TabBarView {
        TabBarView::from_snapshot(&self.config.site_title, &self.session.snapshot())
    }

    pub fn content(&self) -> ContentView {
        ContentView::from_snapshot(
            &self.config.site_title,
            &self.config.home_title,
            &self.session.snapshot(),
            &self.registry,
        )
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    pub fn sound(&self) -> &SoundManager {
        &self.sound
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Clone for Browser {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            session: self.session.clone(),
            registry: Arc::clone(&self.registry),
            sound: Arc::clone(&self.sound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::sound::{NullSink, RecordingSink};
    use jelajah_tabs::{Icon, TabError};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn browser() -> (Browser, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::new());
        let browser = Browser::new(Config::default(), sink.clone()).unwrap();
        browser.start();
        (browser, sink)
    }

    #[test]
    fn test_start_seeds_home_tab() {
        let (browser, _) = browser();
        assert!(!browser.start());

        let snapshot = browser.snapshot();
        assert_eq!(snapshot.tabs.len(), 1);
        assert_eq!(snapshot.tabs[0].page, PageKind::Home);
        assert_eq!(snapshot.tabs[0].title, "Beranda");
    }

    #[test]
    fn test_open_page_uses_registry() {
        let (browser, sink) = browser();

        let id = browser.open_page(PageKind::Food);

        let tab = browser.snapshot().active_tab().cloned().unwrap();
        assert_eq!(tab.id, id);
        assert_eq!(tab.title, "Kuliner");
        assert_eq!(tab.icon, Icon::Utensils);
        assert_eq!(sink.played(), vec![SoundCue::Click]);
    }

    #[test]
    fn test_open_page_by_name() {
        let (browser, _) = browser();

        browser.open_page_by_name("transport").unwrap();
        assert_eq!(browser.content().page.kind, PageKind::Transport);

        let err = browser.open_page_by_name("nightlife").unwrap_err();
        assert!(matches!(err, CoreError::Tab(TabError::UnknownPage(_))));
        assert_eq!(browser.snapshot().tabs.len(), 2);
    }

    #[test]
    fn test_first_start_reports_seeding() {
        let browser = Browser::new(Config::default(), Arc::new(NullSink)).unwrap();
        assert!(browser.start());
        assert!(!browser.start());
        assert_eq!(browser.snapshot().tabs.len(), 1);
    }

    #[test]
    fn test_open_tab_by_names() {
        let (browser, sink) = browser();

        let id = browser
            .open_tab_by_names("tourism", "Monas", "landmark")
            .unwrap();

        let tab = browser.snapshot().active_tab().cloned().unwrap();
        assert_eq!(tab.id, id);
        assert_eq!(tab.page, PageKind::Tourism);
        assert_eq!(tab.title, "Monas");
        assert_eq!(tab.icon, Icon::Landmark);
        assert_eq!(sink.played(), vec![SoundCue::Click]);
    }

    #[test]
    fn test_open_tab_by_names_rejects_unknown_icon() {
        let (browser, sink) = browser();

        let err = browser
            .open_tab_by_names("gallery", "Galeri", "compass")
            .unwrap_err();
        assert!(matches!(err, CoreError::Tab(TabError::UnknownIcon(_))));
        assert_eq!(browser.snapshot().tabs.len(), 1);
        assert!(sink.played().is_empty());
    }

    #[test]
    fn test_new_tab_opens_gallery() {
        let (browser, sink) = browser();

        browser.new_tab();

        let bar = browser.tab_bar();
        assert_eq!(bar.site_title, "Jelajah Jakarta");
        assert_eq!(bar.active().unwrap().title, "Galeri");
        assert_eq!(bar.active().unwrap().icon, Icon::Images);
        assert_eq!(sink.played(), vec![SoundCue::Swoosh]);
    }

    #[test]
    fn test_new_tab_page_is_configurable() {
        let config = Config {
            new_tab_page: PageKind::Tourism,
            ..Config::default()
        };
        let browser = Browser::new(config, Arc::new(NullSink)).unwrap();
        browser.start();

        browser.new_tab();
        assert_eq!(browser.content().page.title, "Wisata");
    }

    #[test]
    fn test_select_and_close_play_cues() {
        let (browser, sink) = browser();
        let home = browser.snapshot().tabs[0].id.clone();
        let gallery = browser.new_tab();
        sink.clear();

        browser.select_tab(&home);
        assert_eq!(browser.content().tab_id, Some(home.clone()));

        browser.close_tab(&gallery);
        assert_eq!(browser.snapshot().tabs.len(), 1);
        assert_eq!(sink.played(), vec![SoundCue::TabSwitch, SoundCue::Click]);
    }

    #[test]
    fn test_close_last_tab_is_protected() {
        let (browser, _) = browser();
        let home = browser.snapshot().tabs[0].id.clone();

        browser.close_tab(&home);
        assert_eq!(browser.snapshot().tabs.len(), 1);
        assert_eq!(browser.content().tab_id, Some(home));
    }

    #[test]
    fn test_muted_browser_still_changes_tabs() {
        let sink = Arc::new(RecordingSink::new());
        let config = Config {
            sound_enabled: false,
            ..Config::default()
        };
        let browser = Browser::new(config, sink.clone()).unwrap();
        browser.start();

        browser.hover_card();
        browser.open_page(PageKind::History);
        assert!(sink.played().is_empty());
        assert_eq!(browser.content().breadcrumb[1], "Sejarah");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = Config {
            sound_volume: -0.5,
            ..Config::default()
        };
        assert!(Browser::new(config, Arc::new(NullSink)).is_err());
    }

    #[test]
    fn test_subscribers_see_host_operations() {
        let (browser, _) = browser();
        let changes = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&changes);
        browser.session().subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        browser.open_page(PageKind::Gallery);
        browser.select_tab(&TabId::from("nonexistent"));
        assert_eq!(changes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let (browser, _) = browser();
        let t1 = browser.snapshot().tabs[0].id.clone();

        let t2 = browser.new_tab();
        let ids: Vec<TabId> = browser.tab_bar().items.into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![t1.clone(), t2.clone()]);
        assert_eq!(browser.snapshot().active_tab_id, Some(t2.clone()));

        browser.select_tab(&t1);
        assert_eq!(browser.snapshot().active_tab_id, Some(t1.clone()));

        browser.close_tab(&t2);
        assert_eq!(browser.snapshot().tabs.len(), 1);
        assert_eq!(browser.snapshot().active_tab_id, Some(t1.clone()));

        browser.close_tab(&t1);
        assert_eq!(browser.snapshot().tabs.len(), 1);
        assert_eq!(browser.snapshot().active_tab_id, Some(t1));
    }
}

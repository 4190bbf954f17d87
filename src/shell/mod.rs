// Navigation shell
//
// Owns the active route, the shared search term, and the mounted feed page.
// A feed page lives exactly as long as its route is active: navigating away
// unmounts it (disposing its scroll subscription) and navigating to a feed
// route mounts a fresh one. Every fetch ticket handed out passes through
// here, which is where the progress signal is started and completed.

pub mod route;

pub use route::{Route, RouteError};

use crate::feed::{
    FeedContext, FeedController, FeedFilter, FetchTicket, ProgressTracker, ScrollPosition,
    ScrollRegistry, ScrollSubscription, Settled,
};
use crate::news::{Category, FeedResponse, FetchError};

/// A mounted feed route
pub struct FeedPage {
    pub controller: FeedController,
    subscription: ScrollSubscription,
}

impl FeedPage {
    fn mount(ctx: FeedContext, filter: FeedFilter, registry: &ScrollRegistry) -> Self {
        Self {
            controller: FeedController::new(ctx, filter),
            subscription: registry.subscribe(),
        }
    }

    fn unmount(mut self) {
        self.subscription.dispose();
    }

    pub fn is_listening(&self) -> bool {
        self.subscription.is_active()
    }
}

pub struct Shell {
    ctx: FeedContext,
    route: Route,
    search_term: String,
    page: Option<FeedPage>,
    registry: ScrollRegistry,
    progress: ProgressTracker,
}

impl Shell {
    pub fn new(ctx: FeedContext) -> Self {
        Self {
            ctx,
            route: Route::Home,
            search_term: String::new(),
            page: None,
            registry: ScrollRegistry::new(),
            progress: ProgressTracker::new(),
        }
    }

    /// Mount the initial route. Call once after construction.
    pub fn start(&mut self, route: Route) -> Option<FetchTicket> {
        self.route = route;
        self.remount()
    }

    /// Switch routes. Re-selecting the active route does nothing.
    pub fn navigate(&mut self, route: Route) -> Option<FetchTicket> {
        if route == self.route && (self.page.is_some() || route.category().is_none()) {
            return None;
        }
        tracing::info!(from = %self.route, to = %route, "navigate");
        self.route = route;
        self.remount()
    }

    /// Update the shared search term and refilter the active feed
    pub fn set_search(&mut self, term: &str) -> Option<FetchTicket> {
        self.search_term = term.trim().to_string();
        let filter = self.filter_for(self.route.category()?);
        let ticket = self.page.as_mut()?.controller.set_filter(filter);
        if ticket.is_some() {
            tracing::info!(search = %self.search_term, "search term changed");
        }
        self.track(ticket)
    }

    /// Scroll moved; fetch the next page when near the bottom
    pub fn on_scroll(&mut self, position: ScrollPosition) -> Option<FetchTicket> {
        let threshold = self.ctx.defaults.scroll_threshold;
        let page = self.page.as_mut()?;
        if !page.is_listening() || !position.is_near_bottom(threshold) {
            return None;
        }
        let ticket = page.controller.on_near_bottom();
        self.track(ticket)
    }

    /// Deliver a settled fetch. Tickets from unmounted pages are dropped.
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        result: Result<FeedResponse, FetchError>,
    ) -> Settled {
        self.progress.complete();
        match self.page.as_mut() {
            Some(page) => page.controller.complete(ticket, result),
            None => {
                tracing::debug!("feed response arrived with no feed mounted");
                Settled::Stale
            }
        }
    }

    fn remount(&mut self) -> Option<FetchTicket> {
        if let Some(old) = self.page.take() {
            old.unmount();
        }
        let category = self.route.category()?;
        let mut page = FeedPage::mount(
            self.ctx.clone(),
            self.filter_for(category),
            &self.registry,
        );
        let ticket = page.controller.mount();
        self.page = Some(page);
        self.track(ticket)
    }

    fn filter_for(&self, category: Category) -> FeedFilter {
        FeedFilter::new(category, Some(&self.search_term))
    }

    fn track(&mut self, ticket: Option<FetchTicket>) -> Option<FetchTicket> {
        if ticket.is_some() {
            self.progress.start();
        }
        ticket
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn page(&self) -> Option<&FeedPage> {
        self.page.as_ref()
    }

    pub fn controller(&self) -> Option<&FeedController> {
        self.page.as_ref().map(|p| &p.controller)
    }

    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    pub fn scroll_registry(&self) -> &ScrollRegistry {
        &self.registry
    }

    pub fn context(&self) -> &FeedContext {
        &self.ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news::query::Endpoint;
    use crate::news::Article;

    fn response(range: std::ops::Range<usize>, total: usize) -> FeedResponse {
        FeedResponse {
            status: Some("ok".to_string()),
            total_results: total,
            articles: range.map(Article::sample).collect(),
        }
    }

    fn bottom() -> ScrollPosition {
        ScrollPosition {
            offset: 10,
            viewport: 5,
            total: 15,
        }
    }

    fn top() -> ScrollPosition {
        ScrollPosition {
            offset: 0,
            viewport: 5,
            total: 15,
        }
    }

    #[test]
    fn start_mounts_feed_with_one_listener() {
        let mut shell = Shell::new(FeedContext::for_tests());
        let ticket = shell.start(Route::Business).unwrap();
        assert_eq!(ticket.query.category, Category::Business);
        assert_eq!(shell.scroll_registry().active(), 1);
        assert_eq!(shell.progress().outstanding(), 1);
    }

    #[test]
    fn about_route_has_no_feed() {
        let mut shell = Shell::new(FeedContext::for_tests());
        assert!(shell.start(Route::About).is_none());
        assert!(shell.controller().is_none());
        assert_eq!(shell.scroll_registry().active(), 0);
        assert!(shell.on_scroll(bottom()).is_none());
    }

    #[test]
    fn navigation_disposes_old_listener_once() {
        let mut shell = Shell::new(FeedContext::for_tests());
        shell.start(Route::Home);
        for route in [Route::Sports, Route::Health, Route::About, Route::Science] {
            shell.navigate(route);
            let expected = usize::from(route.category().is_some());
            assert_eq!(shell.scroll_registry().active(), expected, "{route}");
        }
    }

    #[test]
    fn reselecting_route_is_noop() {
        let mut shell = Shell::new(FeedContext::for_tests());
        shell.start(Route::Sports);
        assert!(shell.navigate(Route::Sports).is_none());
        assert_eq!(shell.progress().outstanding(), 1);
    }

    #[test]
    fn categories_do_not_share_articles() {
        let mut shell = Shell::new(FeedContext::for_tests());
        let t = shell.start(Route::Business).unwrap();
        shell.complete(&t, Ok(response(0..6, 20)));
        assert_eq!(shell.controller().unwrap().articles().len(), 6);

        let t = shell.navigate(Route::Technology).unwrap();
        assert!(shell.controller().unwrap().articles().is_empty());
        assert_eq!(t.query.category, Category::Technology);
        assert_eq!(t.query.page, 1);

        let back = shell.navigate(Route::Business).unwrap();
        assert!(shell.controller().unwrap().articles().is_empty());
        assert_eq!(back.query.page, 1);
    }

    #[test]
    fn response_for_unmounted_page_is_ignored() {
        let mut shell = Shell::new(FeedContext::for_tests());
        let old = shell.start(Route::Business).unwrap();
        let new = shell.navigate(Route::Sports).unwrap();
        assert_eq!(shell.progress().outstanding(), 2);

        assert_eq!(shell.complete(&old, Ok(response(0..6, 20))), Settled::Stale);
        assert!(shell.controller().unwrap().articles().is_empty());
        assert!(shell.controller().unwrap().is_loading());

        shell.complete(&new, Ok(response(0..6, 20)));
        assert_eq!(shell.controller().unwrap().articles().len(), 6);
        assert_eq!(shell.progress().outstanding(), 0);
    }

    #[test]
    fn search_while_on_business_switches_endpoint() {
        let mut shell = Shell::new(FeedContext::for_tests());
        let t = shell.start(Route::Business).unwrap();
        shell.complete(&t, Ok(response(0..6, 20)));

        let t = shell.set_search("election").unwrap();
        assert!(shell.controller().unwrap().articles().is_empty());
        assert_eq!(t.query.endpoint(), Endpoint::Everything);
        assert_eq!(t.url.path(), "/v2/everything");

        shell.complete(&t, Ok(response(50..56, 40)));
        let titles: Vec<_> = shell
            .controller()
            .unwrap()
            .articles()
            .iter()
            .map(|a| a.title.clone())
            .collect();
        assert_eq!(titles.first().map(String::as_str), Some("Headline 50"));
        assert_eq!(titles.len(), 6);
    }

    #[test]
    fn search_term_follows_route_changes() {
        let mut shell = Shell::new(FeedContext::for_tests());
        shell.start(Route::About);
        assert!(shell.set_search("climate").is_none());
        assert_eq!(shell.search_term(), "climate");

        let t = shell.navigate(Route::Science).unwrap();
        assert_eq!(t.query.search_term.as_deref(), Some("climate"));
        assert_eq!(t.query.endpoint(), Endpoint::Everything);
    }

    #[test]
    fn clearing_search_returns_to_headlines() {
        let mut shell = Shell::new(FeedContext::for_tests());
        shell.start(Route::Health);
        let t = shell.set_search("vaccine").unwrap();
        shell.complete(&t, Ok(response(0..6, 6)));

        let t = shell.set_search("").unwrap();
        assert_eq!(t.query.endpoint(), Endpoint::TopHeadlines);
        assert_eq!(t.query.category, Category::Health);
    }

    #[test]
    fn scroll_near_bottom_fetches_exactly_one_page() {
        let mut shell = Shell::new(FeedContext::for_tests());
        let t = shell.start(Route::Business).unwrap();
        assert!(shell.on_scroll(bottom()).is_none(), "loading");
        shell.complete(&t, Ok(response(0..6, 20)));

        assert!(shell.on_scroll(top()).is_none(), "not near bottom");
        let next = shell.on_scroll(bottom()).unwrap();
        assert_eq!(next.query.page, 2);
        assert!(shell.on_scroll(bottom()).is_none());
        assert_eq!(shell.controller().unwrap().page(), 2);
    }

    #[test]
    fn progress_pairs_across_failures() {
        let mut shell = Shell::new(FeedContext::for_tests());
        let t = shell.start(Route::Home).unwrap();
        shell.complete(&t, Err(FetchError::Malformed("eof".into())));
        assert!(!shell.progress().is_active());
        assert_eq!(shell.progress().started(), shell.progress().completed());
    }
}

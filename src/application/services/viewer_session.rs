//! Viewer session state machine.
//!
//! A session covers one full-screen launch of a server, from the moment the
//! page starts loading until the user exits. It tracks two independent
//! things: the connection state of the embedded content, and whether the
//! overlay chrome is visible. Chrome hides after a period without activity;
//! each activity re-arms the single pending deadline.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::domain::connection::{ConnectionState, LoadOutcome};
use crate::domain::entities::{SandboxCapabilities, ServerRecord};

pub const DEFAULT_CHROME_TIMEOUT: Duration = Duration::from_secs(3);

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies a session so late signals from a previous launch can be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

impl SessionId {
    fn next() -> Self {
        Self(NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Session tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerOptions {
    pub chrome_timeout: Duration,
    /// Enter `Failed` instead of `Connected` when the content fails to load.
    pub distinguish_load_failure: bool,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            chrome_timeout: DEFAULT_CHROME_TIMEOUT,
            distinguish_load_failure: false,
        }
    }
}

/// Signals a session reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerEvent {
    /// Pointer movement or key press.
    Activity,
    /// Explicit exit action or escape key.
    Cancel,
    /// The embedded content settled.
    Load(LoadOutcome),
    /// Time passed; hides the chrome once the deadline is reached.
    Tick,
}

/// What the shell should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionControl {
    Continue,
    Exit,
}

#[derive(Debug, Clone)]
struct ChromeVisibility {
    visible: bool,
    hide_at: Option<Instant>,
    timeout: Duration,
}

impl ChromeVisibility {
    fn new(now: Instant, timeout: Duration) -> Self {
        Self {
            visible: true,
            hide_at: Some(now + timeout),
            timeout,
        }
    }

    fn touch(&mut self, now: Instant) {
        self.visible = true;
        self.hide_at = Some(now + self.timeout);
    }

    fn tick(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(deadline) if now >= deadline => {
                self.visible = false;
                self.hide_at = None;
                true
            }
            _ => false,
        }
    }
}

/// One active launch of a server.
#[derive(Debug, Clone)]
pub struct ViewerSession {
    id: SessionId,
    target: ServerRecord,
    started_at: Instant,
    state: ConnectionState,
    outcome: Option<LoadOutcome>,
    chrome: ChromeVisibility,
    options: ViewerOptions,
}

impl ViewerSession {
    /// The capability set every session's content runs with.
    pub const SANDBOX: SandboxCapabilities = SandboxCapabilities::VIEWER;

    /// Starts a session in `Connecting` with visible chrome.
    #[must_use]
    pub fn start(target: ServerRecord, options: ViewerOptions, now: Instant) -> Self {
        let id = SessionId::next();
        info!(session = %id, server = %target.name(), url = %target.url(), "Viewer session started");

        Self {
            id,
            target,
            started_at: now,
            state: ConnectionState::Connecting,
            outcome: None,
            chrome: ChromeVisibility::new(now, options.chrome_timeout),
            options,
        }
    }

    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub const fn target(&self) -> &ServerRecord {
        &self.target
    }

    #[must_use]
    pub const fn started_at(&self) -> Instant {
        self.started_at
    }

    #[must_use]
    pub const fn state(&self) -> ConnectionState {
        self.state
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// The settled load outcome, if any.
    #[must_use]
    pub const fn outcome(&self) -> Option<&LoadOutcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub const fn chrome_visible(&self) -> bool {
        self.chrome.visible
    }

    /// The pending chrome hide deadline.
    #[must_use]
    pub const fn next_deadline(&self) -> Option<Instant> {
        self.chrome.hide_at
    }

    /// Text for the loading indicator while connecting.
    #[must_use]
    pub fn loading_message(&self) -> Option<String> {
        self.is_loading()
            .then(|| format!("Connecting to {}...", self.target.name()))
    }

    /// Applies `event` observed at `now`.
    pub fn handle(&mut self, event: ViewerEvent, now: Instant) -> SessionControl {
        match event {
            ViewerEvent::Cancel => {
                info!(session = %self.id, state = ?self.state, "Viewer session cancelled");
                return SessionControl::Exit;
            }
            ViewerEvent::Activity => self.chrome.touch(now),
            ViewerEvent::Tick => {
                if self.chrome.tick(now) {
                    debug!(session = %self.id, "Viewer chrome hidden");
                }
            }
            ViewerEvent::Load(outcome) => self.settle(outcome),
        }
        SessionControl::Continue
    }

    fn settle(&mut self, outcome: LoadOutcome) {
        if self.state != ConnectionState::Connecting {
            debug!(session = %self.id, "Ignoring repeated load signal");
            return;
        }

        self.state = if outcome.is_failure() && self.options.distinguish_load_failure {
            ConnectionState::Failed
        } else {
            ConnectionState::Connected
        };
        info!(session = %self.id, state = ?self.state, outcome = ?outcome, "Viewer content settled");
        self.outcome = Some(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> ServerRecord {
        ServerRecord::from_parts("1", "Living Room", "https://192.168.1.50:3000", true)
    }

    fn start(now: Instant) -> ViewerSession {
        ViewerSession::start(target(), ViewerOptions::default(), now)
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_starts_connecting_with_chrome() {
        let now = Instant::now();
        let session = start(now);

        assert_eq!(session.state(), ConnectionState::Connecting);
        assert!(session.chrome_visible());
        assert_eq!(session.next_deadline(), Some(now + ms(3000)));
        assert_eq!(
            session.loading_message().as_deref(),
            Some("Connecting to Living Room...")
        );
    }

    #[test]
    fn test_load_success_connects() {
        let now = Instant::now();
        let mut session = start(now);

        let loaded = LoadOutcome::Loaded {
            status: 200,
            title: None,
        };
        session.handle(ViewerEvent::Load(loaded), now);

        assert_eq!(session.state(), ConnectionState::Connected);
        assert!(session.loading_message().is_none());
    }

    #[test]
    fn test_load_failure_looks_like_success() {
        let now = Instant::now();
        let mut session = start(now);

        session.handle(ViewerEvent::Load(LoadOutcome::failed("refused")), now);

        assert_eq!(session.state(), ConnectionState::Connected);
        assert!(!session.is_loading());
        assert!(session.outcome().is_some_and(LoadOutcome::is_failure));
    }

    #[test]
    fn test_load_failure_distinguished_when_enabled() {
        let now = Instant::now();
        let options = ViewerOptions {
            distinguish_load_failure: true,
            ..ViewerOptions::default()
        };
        let mut session = ViewerSession::start(target(), options, now);

        session.handle(ViewerEvent::Load(LoadOutcome::failed("refused")), now);

        assert_eq!(session.state(), ConnectionState::Failed);
        assert!(!session.is_loading());
    }

    #[test]
    fn test_later_load_signals_ignored() {
        let now = Instant::now();
        let options = ViewerOptions {
            distinguish_load_failure: true,
            ..ViewerOptions::default()
        };
        let mut session = ViewerSession::start(target(), options, now);

        session.handle(
            ViewerEvent::Load(LoadOutcome::Loaded {
                status: 200,
                title: None,
            }),
            now,
        );
        session.handle(ViewerEvent::Load(LoadOutcome::failed("late")), now);

        assert_eq!(session.state(), ConnectionState::Connected);
    }

    #[test]
    fn test_chrome_hides_after_timeout() {
        let now = Instant::now();
        let mut session = start(now);

        session.handle(ViewerEvent::Tick, now + ms(2999));
        assert!(session.chrome_visible());

        session.handle(ViewerEvent::Tick, now + ms(3000));
        assert!(!session.chrome_visible());
        assert!(session.next_deadline().is_none());
    }

    #[test]
    fn test_activity_rearms_countdown() {
        let now = Instant::now();
        let mut session = start(now);

        session.handle(ViewerEvent::Activity, now + ms(2900));
        session.handle(ViewerEvent::Tick, now + ms(3500));
        assert!(session.chrome_visible());

        session.handle(ViewerEvent::Tick, now + ms(5900));
        assert!(!session.chrome_visible());
    }

    #[test]
    fn test_activity_shows_hidden_chrome() {
        let now = Instant::now();
        let mut session = start(now);
        session.handle(ViewerEvent::Tick, now + ms(4000));
        assert!(!session.chrome_visible());

        session.handle(ViewerEvent::Activity, now + ms(5000));

        assert!(session.chrome_visible());
        assert_eq!(session.next_deadline(), Some(now + ms(8000)));
    }

    #[test]
    fn test_chrome_does_not_touch_connection() {
        let now = Instant::now();
        let mut session = start(now);

        session.handle(ViewerEvent::Tick, now + ms(4000));
        session.handle(ViewerEvent::Activity, now + ms(4100));

        assert_eq!(session.state(), ConnectionState::Connecting);
    }

    #[test]
    fn test_cancel_exits_in_any_state() {
        let now = Instant::now();
        let mut connecting = start(now);
        assert_eq!(
            connecting.handle(ViewerEvent::Cancel, now),
            SessionControl::Exit
        );

        let mut connected = start(now);
        connected.handle(ViewerEvent::Load(LoadOutcome::failed("x")), now);
        assert_eq!(connected.handle(ViewerEvent::Cancel, now), SessionControl::Exit);
    }

    #[test]
    fn test_sessions_get_distinct_ids() {
        let now = Instant::now();
        assert_ne!(start(now).id(), start(now).id());
    }

    #[test]
    fn test_custom_timeout() {
        let now = Instant::now();
        let options = ViewerOptions {
            chrome_timeout: ms(500),
            ..ViewerOptions::default()
        };
        let mut session = ViewerSession::start(target(), options, now);

        session.handle(ViewerEvent::Tick, now + ms(500));

        assert!(!session.chrome_visible());
    }
}

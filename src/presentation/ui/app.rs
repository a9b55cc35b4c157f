//! Main application orchestrator.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use futures_util::future::Either;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{debug, error, info, warn};

use crate::application::dto::ServerDraft;
use crate::application::services::{
    ServerRegistry, SessionControl, SessionId, ViewerEvent, ViewerOptions, ViewerSession,
};
use crate::application::use_cases::{SaveOutcome, SaveServerUseCase};
use crate::domain::entities::ServerId;
use crate::domain::keybinding::{Action as KeyAction, Keybind, resolve, viewer_keybinds};
use crate::domain::ports::{BrowserPort, ContentHostPort};
use crate::domain::{LoadOutcome, Notification, NotificationLevel};
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::ui::{
    ConfirmAction, ConfirmDialog, ConfirmDialogView, FormAction, HomeAction, HomeScreen,
    HomeView, NotificationPopup, ServerForm, ServerFormView, ViewerView,
};
use crate::presentation::widgets::Banner;

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(100);

#[derive(Debug)]
enum Action {
    ContentSettled {
        session: SessionId,
        outcome: LoadOutcome,
    },
}

enum Screen {
    Home,
    Viewer(Box<ViewerSession>),
}

enum Modal {
    Closed,
    ServerForm(ServerForm),
    ConfirmDelete(ConfirmDialog),
}

pub struct App {
    registry: ServerRegistry,
    content_host: Arc<dyn ContentHostPort>,
    browser: Arc<dyn BrowserPort>,
    viewer_options: ViewerOptions,
    theme: Theme,
    banner: Banner,
    home: HomeScreen,
    screen: Screen,
    modal: Modal,
    viewer_keybinds: Vec<Keybind>,
    load_task: Option<JoinHandle<()>>,
    notification: Option<Notification>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    running: bool,
}

impl App {
    #[must_use]
    pub fn new(
        registry: ServerRegistry,
        content_host: Arc<dyn ContentHostPort>,
        browser: Arc<dyn BrowserPort>,
        viewer_options: ViewerOptions,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let home = HomeScreen::new(registry.servers());

        Self {
            registry,
            content_host,
            browser,
            viewer_options,
            theme: Theme::default(),
            banner: Banner::Title,
            home,
            screen: Screen::Home,
            modal: Modal::Closed,
            viewer_keybinds: viewer_keybinds(),
            load_task: None,
            notification: None,
            action_tx,
            action_rx,
            running: true,
        }
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_banner(mut self, banner: Banner) -> Self {
        self.banner = banner;
        self
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(
        mut self,
        terminal: &mut DefaultTerminal,
        launch_default: bool,
    ) -> color_eyre::Result<()> {
        if launch_default {
            match self.registry.default_server().map(|s| s.id().clone()) {
                Some(id) => self.launch(&id, Instant::now()),
                None => info!("No default server to launch"),
            }
        }

        self.run_event_loop(terminal).await?;

        self.end_session();
        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.running {
            let chrome_deadline = match self.session().and_then(ViewerSession::next_deadline) {
                Some(deadline) => Either::Left(tokio::time::sleep_until(deadline.into())),
                None => Either::Right(std::future::pending::<()>()),
            };
            let animating = self.needs_animation();
            let terminal_event = terminal_events.next();

            tokio::select! {
                biased;

                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action, Instant::now());
                }

                () = chrome_deadline => {
                    self.tick(Instant::now());
                }

                Some(Ok(event)) = terminal_event => {
                    if self.handle_event(&event, Instant::now()) == EventResult::Exit {
                        self.running = false;
                    }
                }

                _ = animation_interval.tick(), if animating => {
                    self.expire_notification(Instant::now());
                }
            }

            terminal.draw(|frame| self.render(frame))?;
        }

        Ok(())
    }

    fn session(&self) -> Option<&ViewerSession> {
        match &self.screen {
            Screen::Viewer(session) => Some(session.as_ref()),
            Screen::Home => None,
        }
    }

    fn needs_animation(&self) -> bool {
        self.notification.is_some() || self.session().is_some_and(ViewerSession::is_loading)
    }

    fn expire_notification(&mut self, now: Instant) {
        if self
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired_at(now))
        {
            self.notification = None;
        }
    }

    fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let now = Instant::now();

        match &self.screen {
            Screen::Home => {
                let view = HomeView::new(self.registry.servers(), &self.theme, &self.banner);
                let view = if matches!(self.modal, Modal::Closed) {
                    view
                } else {
                    view.without_footer()
                };
                frame.render_stateful_widget(view, area, &mut self.home);
            }
            Screen::Viewer(session) => {
                let elapsed = now.saturating_duration_since(session.started_at());
                frame.render_widget(ViewerView::new(session, &self.theme).elapsed(elapsed), area);
            }
        }

        match &self.modal {
            Modal::Closed => {}
            Modal::ServerForm(form) => {
                frame.render_widget(ServerFormView::new(form, &self.theme), area);
            }
            Modal::ConfirmDelete(dialog) => {
                frame.render_widget(ConfirmDialogView::new(dialog, &self.theme), area);
            }
        }

        if let Some(notification) = &mut self.notification {
            notification.mark_displayed(now);
            frame.render_widget(NotificationPopup::new(notification, &self.theme), area);
        }
    }

    fn handle_event(&mut self, event: &Event, now: Instant) -> EventResult {
        let key = EventHandler::key_press(event);
        if key.as_ref().is_some_and(EventHandler::is_quit_event) {
            return EventResult::Exit;
        }

        if matches!(self.screen, Screen::Viewer(_)) {
            self.handle_viewer_event(event, key, now);
            return EventResult::Continue;
        }

        match key {
            Some(key) => self.handle_home_key(key, now),
            None => EventResult::Continue,
        }
    }

    fn handle_viewer_event(&mut self, event: &Event, key: Option<KeyEvent>, now: Instant) {
        let action = key.and_then(|key| resolve(&self.viewer_keybinds, &key));
        let Screen::Viewer(session) = &mut self.screen else {
            return;
        };

        match action {
            Some(KeyAction::ExitViewer) => {
                if session.handle(ViewerEvent::Cancel, now) == SessionControl::Exit {
                    self.end_session();
                }
            }
            Some(KeyAction::OpenExternal) => {
                session.handle(ViewerEvent::Activity, now);
                let url = session.target().url().to_string();
                self.open_external(&url);
            }
            _ if EventHandler::is_activity_event(event) => {
                session.handle(ViewerEvent::Activity, now);
            }
            _ => {}
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent, now: Instant) -> EventResult {
        match &mut self.modal {
            Modal::ServerForm(form) => {
                match form.handle_key(key) {
                    FormAction::Submit(draft) => self.submit_form(draft),
                    FormAction::Cancel => self.modal = Modal::Closed,
                    FormAction::None => {}
                }
                return EventResult::Continue;
            }
            Modal::ConfirmDelete(dialog) => {
                match dialog.handle_key(key) {
                    ConfirmAction::Confirm => {
                        let id = dialog.target().clone();
                        self.modal = Modal::Closed;
                        self.delete(&id);
                    }
                    ConfirmAction::Cancel => self.modal = Modal::Closed,
                    ConfirmAction::None => {}
                }
                return EventResult::Continue;
            }
            Modal::Closed => {}
        }

        match self.home.handle_key(key, self.registry.servers()) {
            HomeAction::None => {}
            HomeAction::Quit => return EventResult::Exit,
            HomeAction::Add => self.modal = Modal::ServerForm(ServerForm::add(&self.theme)),
            HomeAction::Edit(id) => {
                if let Some(record) = self.registry.get(&id) {
                    self.modal = Modal::ServerForm(ServerForm::edit(record, &self.theme));
                }
            }
            HomeAction::RequestDelete(id) => {
                if let Some(record) = self.registry.get(&id) {
                    self.modal = Modal::ConfirmDelete(ConfirmDialog::delete(record));
                }
            }
            HomeAction::SetDefault(id) => {
                self.registry.set_default(&id);
            }
            HomeAction::Launch(id) => self.launch(&id, now),
            HomeAction::OpenExternal(id) => {
                if let Some(url) = self.registry.get(&id).map(|s| s.url().to_string()) {
                    self.open_external(&url);
                }
            }
        }
        EventResult::Continue
    }

    fn submit_form(&mut self, draft: ServerDraft) {
        match SaveServerUseCase::execute(&mut self.registry, draft) {
            Ok(SaveOutcome::Added(record)) => {
                self.modal = Modal::Closed;
                self.home.focus_server(self.registry.servers(), record.id());
                self.notify(Notification::info(
                    "Server Added",
                    format!("{} saved", record.name()),
                ));
            }
            Ok(SaveOutcome::Updated(id)) => {
                self.modal = Modal::Closed;
                self.home.focus_server(self.registry.servers(), &id);
            }
            Ok(SaveOutcome::Missing(id)) => {
                warn!(id = %id, "Edited server no longer exists");
                self.modal = Modal::Closed;
                self.notify(Notification::new(
                    NotificationLevel::Warn,
                    "Edit Server",
                    "That server was removed before the edit was saved",
                ));
                self.home.sync(self.registry.servers());
            }
            Err(e) => {
                debug!(error = %e, "Form rejected");
                if let Modal::ServerForm(form) = &mut self.modal {
                    form.set_error(e.to_string());
                }
            }
        }
    }

    fn delete(&mut self, id: &ServerId) {
        if self.registry.remove(id) {
            self.home.sync(self.registry.servers());
        }
    }

    fn open_external(&mut self, url: &str) {
        if let Err(e) = self.browser.open(url) {
            error!(error = %e, "Failed to open external browser");
            self.notify(Notification::error("Open in Browser", e.to_string()));
        }
    }

    fn launch(&mut self, id: &ServerId, now: Instant) {
        let Some(target) = self.registry.get(id).cloned() else {
            return;
        };
        self.end_session();

        let session = ViewerSession::start(target, self.viewer_options, now);
        let session_id = session.id();
        let url = session.target().url().to_string();
        let host = Arc::clone(&self.content_host);
        let tx = self.action_tx.clone();

        self.load_task = Some(tokio::spawn(async move {
            let outcome = host.load(&url, ViewerSession::SANDBOX).await;
            if tx
                .send(Action::ContentSettled {
                    session: session_id,
                    outcome,
                })
                .is_err()
            {
                debug!(session = %session_id, "Shell gone before content settled");
            }
        }));
        self.screen = Screen::Viewer(Box::new(session));
    }

    fn end_session(&mut self) {
        if let Some(task) = self.load_task.take() {
            task.abort();
        }
        if let Screen::Viewer(session) = std::mem::replace(&mut self.screen, Screen::Home) {
            info!(session = %session.id(), "Viewer session ended");
            self.home.focus_server(self.registry.servers(), session.target().id());
        }
    }

    fn tick(&mut self, now: Instant) {
        if let Screen::Viewer(session) = &mut self.screen {
            session.handle(ViewerEvent::Tick, now);
        }
    }

    fn handle_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::ContentSettled { session, outcome } => match &mut self.screen {
                Screen::Viewer(current) if current.id() == session => {
                    self.load_task = None;
                    current.handle(ViewerEvent::Load(outcome), now);
                }
                _ => debug!(session = %session, "Dropping load result for ended session"),
            },
        }
    }
}

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use ratatui::widgets::ListState;
use throbber_widgets_tui::ThrobberState;

use crate::backend::SuggestService;
use crate::form::{FieldPatch, JobForm};
use crate::input::TitleInput;
use crate::settings::ResolvedConfig;
use crate::submit::{self, SubmitCommand, SubmitResult};
use crate::theme::Theme;

impl Drop for App<'_> {
    fn drop(&mut self) {
        let _ = self.submit_tx.send(SubmitCommand::Shutdown);
    }
}

pub(crate) struct App<'a> {
    pub(crate) form: JobForm,
    pub(crate) title_input: TitleInput<'a>,
    pub(crate) queries: Vec<String>,
    pub(crate) related_titles: Vec<String>,
    pub(crate) loading: bool,
    pub(crate) error: Option<String>,
    pub(crate) status: Option<String>,
    pub(crate) list_state: ListState,
    pub(crate) theme: Theme,
    pub(crate) throbber_state: ThrobberState,
    submit_tx: Sender<SubmitCommand>,
    submit_rx: Receiver<SubmitResult>,
    submit_latest_id: Arc<AtomicU64>,
    next_submit_id: u64,
    latest_submit_id: Option<u64>,
}

impl<'a> App<'a> {
    pub(crate) fn new(settings: &ResolvedConfig, service: Box<dyn SuggestService + Send>) -> Self {
        let (submit_tx, submit_rx, submit_latest_id) = submit::spawn(service);

        let mut form = JobForm::default();
        if let Some(title) = &settings.initial_title {
            form.apply(FieldPatch::JobTitle(title.clone()));
        }
        let mut title_input = TitleInput::new(form.job_title().to_string());
        title_input.set_style(settings.theme.input);

        Self {
            form,
            title_input,
            queries: Vec::new(),
            related_titles: Vec::new(),
            loading: false,
            error: None,
            status: None,
            list_state: ListState::default(),
            theme: settings.theme,
            throbber_state: ThrobberState::default(),
            submit_tx,
            submit_rx,
            submit_latest_id,
            next_submit_id: 0,
            latest_submit_id: None,
        }
    }

    /// Field change handler: merge the edited title into the form, leaving
    /// every other field untouched.
    pub(crate) fn sync_title(&mut self) {
        let value = self.title_input.text().to_string();
        self.form.apply(FieldPatch::JobTitle(value));
    }

    /// Issue a submission tagged with the next sequence id. Whatever fields
    /// the form currently carries are sent verbatim.
    pub(crate) fn submit(&mut self) {
        self.next_submit_id = self.next_submit_id.saturating_add(1);
        let id = self.next_submit_id;
        self.latest_submit_id = Some(id);
        self.loading = true;
        self.error = None;
        self.status = None;
        self.submit_latest_id.store(id, AtomicOrdering::Release);
        let _ = self.submit_tx.send(SubmitCommand::Submit {
            id,
            form: self.form.clone(),
        });
    }

    pub(crate) fn pump_submit_results(&mut self) {
        loop {
            match self.submit_rx.try_recv() {
                Ok(result) => self.handle_submit_result(result),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    fn handle_submit_result(&mut self, result: SubmitResult) {
        if Some(result.id) != self.latest_submit_id {
            return;
        }

        self.loading = false;
        match result.outcome {
            Ok(suggestions) => {
                self.queries = suggestions.data;
                self.related_titles = suggestions.additional_job_titles;
                self.ensure_selection();
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
    }

    pub(crate) fn ensure_selection(&mut self) {
        if self.queries.is_empty() {
            self.list_state.select(None);
        } else if self.list_state.selected().is_none() {
            self.list_state.select(Some(0));
        } else if let Some(selected) = self.list_state.selected() {
            let len = self.queries.len();
            if selected >= len {
                self.list_state.select(Some(len.saturating_sub(1)));
            }
        }
    }

    /// The query the row actions operate on. None while loading, since the
    /// result list is not on screen.
    pub(crate) fn selected_query(&self) -> Option<&str> {
        if self.loading {
            return None;
        }
        let selected = self.list_state.selected()?;
        self.queries.get(selected).map(String::as_str)
    }

    pub(crate) fn move_selection_up(&mut self) {
        if let Some(selected) = self.list_state.selected()
            && selected > 0
        {
            self.list_state.select(Some(selected - 1));
        }
    }

    pub(crate) fn move_selection_down(&mut self) {
        if let Some(selected) = self.list_state.selected()
            && selected + 1 < self.queries.len()
        {
            self.list_state.select(Some(selected + 1));
        }
    }
}

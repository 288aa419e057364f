//! Application shell wiring the form, the request controller and the
//! output presenter together.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::client::RefinementService;
use crate::clipboard::ClipboardWriter;
use crate::config::Config;
use crate::ui::form::PromptForm;
use crate::ui::generator::{GeneratorState, PendingGeneration, RequestController, SubmitError};
use crate::ui::output::{OutputPresenter, OutputView};

pub struct App {
    form: PromptForm,
    controller: RequestController,
    presenter: OutputPresenter,
    updates: watch::Receiver<GeneratorState>,
}

impl App {
    pub fn new(
        config: &Config,
        service: Arc<dyn RefinementService>,
        clipboard: Box<dyn ClipboardWriter>,
    ) -> Self {
        let controller = RequestController::new(service);
        let updates = controller.subscribe();
        let presenter = OutputPresenter::new(
            clipboard,
            Duration::from_millis(config.output.copy_reset_ms),
        );

        Self {
            form: PromptForm::new(config.defaults.intent),
            controller,
            presenter,
            updates,
        }
    }

    pub fn form(&self) -> &PromptForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut PromptForm {
        &mut self.form
    }

    pub fn state(&self) -> GeneratorState {
        self.controller.state()
    }

    /// Whether the submit trigger is enabled.
    pub fn can_submit(&self) -> bool {
        self.controller.can_submit(&self.form.base_prompt)
    }

    pub fn submit(&mut self) -> Result<PendingGeneration, SubmitError> {
        let result = self.controller.submit(&self.form.base_prompt, self.form.intent);
        self.refresh();
        result
    }

    /// Reset everything: generator state, typed prompt, output panel.
    pub fn clear(&mut self) {
        self.controller.clear();
        self.form.reset();
        self.refresh();
    }

    /// Apply the latest generator state to the output panel.
    pub fn refresh(&mut self) {
        let state = self.updates.borrow_and_update().clone();
        self.presenter.sync(&state.request);
    }

    /// Wait for the next state change and apply it.
    pub async fn next_update(&mut self) -> bool {
        if self.updates.changed().await.is_err() {
            return false;
        }
        self.refresh();
        true
    }

    /// Wait for a submitted generation to settle and apply its outcome.
    pub async fn complete(&mut self, pending: PendingGeneration) {
        pending.finished().await;
        self.refresh();
    }

    pub fn copy(&mut self) -> bool {
        self.presenter.copy()
    }

    pub fn error_message(&self) -> Option<String> {
        self.controller.state().error_message()
    }

    pub fn output(&self) -> Option<OutputView<'_>> {
        self.presenter.view()
    }

    pub fn presenter(&self) -> &OutputPresenter {
        &self.presenter
    }
}

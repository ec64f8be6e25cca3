use anyhow::Result;
use simpleos_core::document;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;

#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

pub struct ActionsService {}

impl ActionsService {
    pub async fn handle(action: Action, event_tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
        match action {
            Action::OpenFile { window_id, path } => match document::read_text(&path).await {
                Ok(text) => {
                    event_tx.send(Event::FileOpened {
                        window_id,
                        path,
                        text,
                    })?;
                }
                Err(err) => {
                    event_tx.send(Event::FileError(window_id, err.to_string()))?;
                }
            },
            Action::SaveFile {
                window_id,
                path,
                text,
            } => match document::write_text(&path, &text).await {
                Ok(path) => {
                    event_tx.send(Event::FileSaved { window_id, path })?;
                }
                Err(err) => {
                    event_tx.send(Event::FileError(window_id, err.to_string()))?;
                }
            },
        }

        return Ok(());
    }

    pub async fn start(
        event_tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        while let Some(action) = rx.recv().await {
            tracing::debug!(action = ?action, "action");
            ActionsService::handle(action, &event_tx).await?;
        }

        return Ok(());
    }
}

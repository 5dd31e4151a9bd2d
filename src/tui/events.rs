use tokio::sync::mpsc;

use super::actions::*;
use super::*;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tracing::warn;

impl App {
    /// Forward terminal events to the action channel until the app is
    /// cancelled. A `None` action only triggers a redraw.
    pub fn handle_events(
        &self,
        tx: mpsc::UnboundedSender<Option<Action>>,
    ) -> tokio::task::JoinHandle<()> {
        let token = self.token.child_token();
        tokio::spawn(async move {
            let mut reader = EventStream::new();
            loop {
                let event = tokio::select! {
                    biased;
                    _ = token.cancelled() => break,
                    event = reader.next() => event,
                };
                let action = match event {
                    Some(Ok(Event::Key(key))) => Some(Action::Key(key)),
                    Some(Ok(Event::Resize(_, _))) => None,
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => {
                        warn!(error = %e, "could not read terminal event");
                        Some(Action::Exit)
                    }
                    None => Some(Action::Exit),
                };
                let stop = action == Some(Action::Exit);
                if tx.send(action).is_err() || stop {
                    break;
                }
            }
        })
    }
}

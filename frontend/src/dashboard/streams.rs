use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{EventSource, MessageEvent};
use yew::prelude::*;

/// A live server-pushed channel that can be shut down. `close` must be
/// idempotent.
pub trait StreamHandle {
    fn close(&mut self);
}

/// Owns one `EventSource` together with its message callback. Dropping the
/// handle closes the source, so a handle that falls out of the manager can
/// never keep delivering events.
pub struct SseHandle {
    source: EventSource,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
}

impl StreamHandle for SseHandle {
    fn close(&mut self) {
        self.source.close();
    }
}

impl Drop for SseHandle {
    fn drop(&mut self) {
        self.source.close();
    }
}

/// Open an event stream and forward each data payload as a plain string.
/// Returns `None` when the browser refuses the connection attempt.
pub fn connect(url: &str, on_message: Callback<String>) -> Option<SseHandle> {
    let source = match EventSource::new(url) {
        Ok(source) => source,
        Err(err) => {
            log::warn!("event stream unavailable for {}: {:?}", url, err);
            return None;
        }
    };

    let on_message = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
        if let Some(data) = event.data().as_string() {
            on_message.emit(data);
        }
    });
    source.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

    Some(SseHandle {
        source,
        _on_message: on_message,
    })
}

/// One optional handle per channel kind. Attaching a new handle always
/// closes the previous occupant of that slot first, so at most one log
/// stream and one progress stream are ever live.
pub struct StreamManager<H: StreamHandle> {
    log: Option<H>,
    progress: Option<H>,
}

impl<H: StreamHandle> StreamManager<H> {
    pub fn new() -> Self {
        Self {
            log: None,
            progress: None,
        }
    }

    pub fn attach_log(&mut self, handle: H) {
        self.close_log();
        self.log = Some(handle);
    }

    pub fn attach_progress(&mut self, handle: H) {
        self.close_progress();
        self.progress = Some(handle);
    }

    pub fn close_log(&mut self) {
        if let Some(mut handle) = self.log.take() {
            handle.close();
        }
    }

    pub fn close_progress(&mut self) {
        if let Some(mut handle) = self.progress.take() {
            handle.close();
        }
    }

    pub fn close_all(&mut self) {
        self.close_log();
        self.close_progress();
    }

    pub fn has_log(&self) -> bool {
        self.log.is_some()
    }

    pub fn has_progress(&self) -> bool {
        self.progress.is_some()
    }
}

/// The visible log buffer fed by whichever log stream is attached. Lines
/// are kept whole; nothing is truncated or rate-limited client-side.
#[derive(Default, PartialEq)]
pub struct LogBuffer {
    pub lines: Vec<String>,
}

pub enum LogAction {
    Append(String),
    Clear,
}

impl Reducible for LogBuffer {
    type Action = LogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            LogAction::Append(line) => {
                let mut lines = self.lines.clone();
                lines.push(line);
                Rc::new(Self { lines })
            }
            LogAction::Clear => Rc::new(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct RecordingHandle {
        closed: Rc<Cell<u32>>,
    }

    impl RecordingHandle {
        fn new() -> (Self, Rc<Cell<u32>>) {
            let closed = Rc::new(Cell::new(0));
            (
                Self {
                    closed: closed.clone(),
                },
                closed,
            )
        }
    }

    impl StreamHandle for RecordingHandle {
        fn close(&mut self) {
            self.closed.set(self.closed.get() + 1);
        }
    }

    #[test]
    fn attaching_log_closes_previous_log() {
        let mut manager = StreamManager::new();
        let (first, first_closed) = RecordingHandle::new();
        let (second, second_closed) = RecordingHandle::new();

        manager.attach_log(first);
        assert!(manager.has_log());
        assert_eq!(first_closed.get(), 0);

        manager.attach_log(second);
        assert_eq!(first_closed.get(), 1);
        assert_eq!(second_closed.get(), 0);
        assert!(manager.has_log());
    }

    #[test]
    fn channels_are_independent() {
        let mut manager = StreamManager::new();
        let (log, log_closed) = RecordingHandle::new();
        let (progress, progress_closed) = RecordingHandle::new();

        manager.attach_log(log);
        manager.attach_progress(progress);

        manager.close_progress();
        assert_eq!(progress_closed.get(), 1);
        assert_eq!(log_closed.get(), 0);
        assert!(manager.has_log());
        assert!(!manager.has_progress());
    }

    #[test]
    fn close_is_idempotent() {
        let mut manager = StreamManager::new();
        let (log, log_closed) = RecordingHandle::new();

        manager.attach_log(log);
        manager.close_log();
        manager.close_log();
        manager.close_all();

        assert_eq!(log_closed.get(), 1);
        assert!(!manager.has_log());
    }

    #[test]
    fn log_buffer_appends_and_clears() {
        let buffer = Rc::new(LogBuffer::default());
        let buffer = buffer.reduce(LogAction::Append("spider opened".to_string()));
        let buffer = buffer.reduce(LogAction::Append("scraped item 1".to_string()));
        assert_eq!(buffer.lines.len(), 2);
        assert_eq!(buffer.lines[0], "spider opened");

        let buffer = buffer.reduce(LogAction::Clear);
        assert!(buffer.lines.is_empty());
    }

    #[test]
    fn close_all_empties_both_slots() {
        let mut manager = StreamManager::new();
        let (log, log_closed) = RecordingHandle::new();
        let (progress, progress_closed) = RecordingHandle::new();

        manager.attach_log(log);
        manager.attach_progress(progress);
        manager.close_all();

        assert_eq!(log_closed.get(), 1);
        assert_eq!(progress_closed.get(), 1);
        assert!(!manager.has_log());
        assert!(!manager.has_progress());
    }
}

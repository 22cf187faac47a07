use gloo_timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;

/// Notices disappear on their own after this many milliseconds.
pub const DISMISS_AFTER_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
    Warning,
}

impl NoticeKind {
    fn banner_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "bg-green-100 border border-green-400 text-green-700",
            NoticeKind::Error => "bg-red-100 border border-red-400 text-red-700",
            NoticeKind::Info => "bg-blue-100 border border-blue-400 text-blue-700",
            NoticeKind::Warning => "bg-yellow-100 border border-yellow-400 text-yellow-700",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// The transient notice queue. A reducer keeps push/dismiss correct even
/// when the dismiss fires from a timer long after the push.
#[derive(Default, PartialEq)]
pub struct NoticeQueue {
    pub items: Vec<Notice>,
    next_id: u64,
}

pub enum NoticeAction {
    Push(NoticeKind, String),
    Dismiss(u64),
}

impl Reducible for NoticeQueue {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            NoticeAction::Push(kind, message) => {
                let id = self.next_id;
                let mut items = self.items.clone();
                items.push(Notice { id, kind, message });
                Rc::new(Self {
                    items,
                    next_id: id + 1,
                })
            }
            NoticeAction::Dismiss(id) => {
                let items = self
                    .items
                    .iter()
                    .filter(|notice| notice.id != id)
                    .cloned()
                    .collect();
                Rc::new(Self {
                    items,
                    next_id: self.next_id,
                })
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub notice: Notice,
    pub on_dismiss: Callback<u64>,
}

/// One banner. Schedules its own dismissal; unmounting early (manual
/// dismiss, page teardown) cancels the pending timeout.
#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.notice.id;
        use_effect_with((), move |_| {
            let timeout = Timeout::new(DISMISS_AFTER_MS, move || on_dismiss.emit(id));
            move || drop(timeout)
        });
    }

    let id = props.notice.id;
    let on_dismiss = props.on_dismiss.clone();
    html! {
        <div class={format!("px-4 py-3 rounded shadow flex items-center gap-3 {}", props.notice.kind.banner_class())}>
            <span class="flex-1 text-sm font-medium">{ &props.notice.message }</span>
            <button
                onclick={Callback::from(move |_| on_dismiss.emit(id))}
                class="font-bold opacity-60 hover:opacity-100"
            >
                {"×"}
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationHostProps {
    pub notices: Vec<Notice>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(NotificationHost)]
pub fn notification_host(props: &NotificationHostProps) -> Html {
    html! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 max-w-md">
            {
                props.notices.iter().map(|notice| {
                    html! {
                        <NoticeBanner
                            key={notice.id.to_string()}
                            notice={notice.clone()}
                            on_dismiss={props.on_dismiss.clone()}
                        />
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids() {
        let queue = Rc::new(NoticeQueue::default());
        let queue = queue.reduce(NoticeAction::Push(NoticeKind::Info, "one".into()));
        let queue = queue.reduce(NoticeAction::Push(NoticeKind::Error, "two".into()));
        assert_eq!(queue.items.len(), 2);
        assert!(queue.items[0].id < queue.items[1].id);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let queue = Rc::new(NoticeQueue::default());
        let queue = queue.reduce(NoticeAction::Push(NoticeKind::Info, "one".into()));
        let queue = queue.reduce(NoticeAction::Push(NoticeKind::Info, "two".into()));
        let keep = queue.items[1].id;
        let drop_id = queue.items[0].id;
        let queue = queue.reduce(NoticeAction::Dismiss(drop_id));
        assert_eq!(queue.items.len(), 1);
        assert_eq!(queue.items[0].id, keep);

        // Dismissing an unknown id is a no-op.
        let queue = queue.reduce(NoticeAction::Dismiss(9999));
        assert_eq!(queue.items.len(), 1);
    }
}

pub mod api;
pub mod components;
pub mod notifications;
pub mod progress;
pub mod sort_options;
pub mod streams;

use crate::dashboard::components::{
    LogPanel, ProgressModal, RunsPanel, StatsGrid, StatusBar, TokenDialog, VideoList,
};
use crate::dashboard::notifications::{NoticeAction, NoticeKind, NoticeQueue, NotificationHost};
use crate::dashboard::progress::{
    completion_notice, is_terminal, progress_view, status_detail, ProgressView,
};
use crate::dashboard::sort_options::{
    event_value, sort_key_from_value, sort_key_value, sort_videos, SortKey,
};
use crate::dashboard::streams::{LogAction, LogBuffer, SseHandle, StreamManager};
use crate::models::{ProgressSnapshot, RunInfo, StatsSummary, Video};
use crate::token_utils;
use gloo_timers::callback::{Interval, Timeout};
use web_sys::Event;
use yew::prelude::*;

const STATUS_POLL_MS: u32 = 3_000;
const PROGRESS_POLL_MS: u32 = 1_000;
const STOP_RELOAD_DELAY_MS: u32 = 1_000;
const WAIT_TIMEOUT_SECS: u32 = 600;
// Over-fetch so re-sorting and limit changes stay client-side.
const TOP_FETCH_COUNT: usize = 100;
const DEFAULT_LIMIT: usize = 20;
// Video list refresh cadence while a run is active, independent of the
// poll interval so a faster poll does not hammer the backend.
const DATA_REFRESH_MIN_MS: f64 = 10_000.0;

async fn load_stats_into(
    stats: UseStateHandle<Option<StatsSummary>>,
    error: UseStateHandle<Option<String>>,
) {
    match api::fetch_stats().await {
        Ok(summary) => {
            error.set(None);
            stats.set(Some(summary));
        }
        Err(err) => {
            log::error!("stats load failed: {}", err);
            error.set(Some(format!("Failed to load statistics: {}", err)));
        }
    }
}

async fn load_videos_into(
    videos: UseStateHandle<Vec<Video>>,
    error: UseStateHandle<Option<String>>,
) {
    match api::fetch_top_videos(TOP_FETCH_COUNT).await {
        Ok(list) => {
            error.set(None);
            videos.set(list);
        }
        Err(err) => {
            log::error!("video load failed: {}", err);
            error.set(Some(format!("Failed to load videos: {}", err)));
        }
    }
}

async fn load_runs_into(runs: UseStateHandle<Vec<RunInfo>>) {
    match api::fetch_runs().await {
        Ok(list) => runs.set(list),
        Err(err) => log::warn!("run list load failed: {}", err),
    }
}

fn confirm_stop() -> bool {
    web_sys::window()
        .map(|w| {
            w.confirm_with_message("Stop the scraping run in progress?")
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

fn scroll_log_to_bottom() {
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("log-scroll"))
    {
        element.set_scroll_top(element.scroll_height());
    }
}

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {}

#[function_component(DashboardPage)]
pub fn dashboard_page(_props: &DashboardPageProps) -> Html {
    let stats = use_state(|| None::<StatsSummary>);
    let stats_error = use_state(|| None::<String>);
    let videos = use_state(Vec::<Video>::new);
    let videos_error = use_state(|| None::<String>);
    let runs = use_state(Vec::<RunInfo>::new);
    let limit = use_state(|| DEFAULT_LIMIT);
    let sort_key = use_state(|| SortKey::Score);

    let scrape_active = use_state(|| false);
    let start_busy = use_state(|| false);
    let stop_busy = use_state(|| false);
    let wait_busy = use_state(|| false);
    let status_title = use_state(String::new);
    let status_detail_text = use_state(String::new);
    let status_view = use_state(ProgressView::default);
    let degraded = use_state(|| false);

    let modal_open = use_state(|| false);
    let modal_view = use_state(ProgressView::default);
    let log_visible = use_state(|| false);
    let token_dialog_open = use_state(|| false);

    let notices = use_reducer(NoticeQueue::default);
    let log = use_reducer(LogBuffer::default);

    // Session-owned handles: one status poll, one modal poll, one stream
    // manager. Replacing or taking any of them tears the predecessor down.
    let status_poll = use_mut_ref(|| None::<Interval>);
    let modal_poll = use_mut_ref(|| None::<Interval>);
    let stream_manager = use_mut_ref(StreamManager::<SseHandle>::new);
    let last_refresh = use_mut_ref(|| 0.0f64);

    let on_log_line = {
        let log = log.clone();
        Callback::from(move |line: String| log.dispatch(LogAction::Append(line)))
    };

    let close_modal = {
        let modal_poll = modal_poll.clone();
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| {
            modal_poll.borrow_mut().take();
            modal_open.set(false);
        })
    };

    let open_progress_modal = {
        let modal_poll = modal_poll.clone();
        let modal_open = modal_open.clone();
        let modal_view = modal_view.clone();
        let close_modal = close_modal.clone();
        Callback::from(move |_: ()| {
            modal_view.set(ProgressView::default());
            modal_open.set(true);

            let tick = {
                let modal_view = modal_view.clone();
                let close_modal = close_modal.clone();
                move || {
                    let modal_view = modal_view.clone();
                    let close_modal = close_modal.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        match api::fetch_progress().await {
                            Ok(snapshot) => {
                                modal_view.set(progress_view(&snapshot));
                                if is_terminal(&snapshot) {
                                    close_modal.emit(());
                                }
                            }
                            Err(err) => log::debug!("progress poll failed: {}", err),
                        }
                    });
                }
            };
            *modal_poll.borrow_mut() = Some(Interval::new(PROGRESS_POLL_MS, tick));
        })
    };

    let start_status_polling = {
        let status_poll = status_poll.clone();
        let last_refresh = last_refresh.clone();
        let scrape_active = scrape_active.clone();
        let start_busy = start_busy.clone();
        let stop_busy = stop_busy.clone();
        let status_title = status_title.clone();
        let status_detail_text = status_detail_text.clone();
        let status_view = status_view.clone();
        let degraded = degraded.clone();
        let stats = stats.clone();
        let stats_error = stats_error.clone();
        let videos = videos.clone();
        let videos_error = videos_error.clone();
        let notices = notices.clone();
        Callback::from(move |_: ()| {
            *last_refresh.borrow_mut() = 0.0;

            let tick = {
                let status_poll = status_poll.clone();
                let last_refresh = last_refresh.clone();
                let scrape_active = scrape_active.clone();
                let start_busy = start_busy.clone();
                let stop_busy = stop_busy.clone();
                let status_title = status_title.clone();
                let status_detail_text = status_detail_text.clone();
                let status_view = status_view.clone();
                let degraded = degraded.clone();
                let stats = stats.clone();
                let stats_error = stats_error.clone();
                let videos = videos.clone();
                let videos_error = videos_error.clone();
                let notices = notices.clone();
                move || {
                    let status_poll = status_poll.clone();
                    let last_refresh = last_refresh.clone();
                    let scrape_active = scrape_active.clone();
                    let start_busy = start_busy.clone();
                    let stop_busy = stop_busy.clone();
                    let status_title = status_title.clone();
                    let status_detail_text = status_detail_text.clone();
                    let status_view = status_view.clone();
                    let degraded = degraded.clone();
                    let stats = stats.clone();
                    let stats_error = stats_error.clone();
                    let videos = videos.clone();
                    let videos_error = videos_error.clone();
                    let notices = notices.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        match api::fetch_scrape_status().await {
                            Ok(status) => {
                                degraded.set(false);
                                if status.scraping {
                                    scrape_active.set(true);
                                    status_title.set("Analysis in progress...".to_string());
                                    status_detail_text.set(status_detail(&status.progress));
                                    status_view.set(progress_view(&status.progress));

                                    let now = js_sys::Date::now();
                                    let refresh_due =
                                        now - *last_refresh.borrow() > DATA_REFRESH_MIN_MS;
                                    if refresh_due {
                                        *last_refresh.borrow_mut() = now;
                                        load_videos_into(videos.clone(), videos_error.clone())
                                            .await;
                                    }
                                } else {
                                    // Run over: this tick owns the teardown.
                                    status_poll.borrow_mut().take();
                                    if let Some(message) = completion_notice(&status) {
                                        notices
                                            .dispatch(NoticeAction::Push(NoticeKind::Success, message));
                                    }
                                    load_videos_into(videos.clone(), videos_error.clone()).await;
                                    load_stats_into(stats.clone(), stats_error.clone()).await;
                                    scrape_active.set(false);
                                    start_busy.set(false);
                                    stop_busy.set(false);
                                }
                            }
                            Err(err) => {
                                log::warn!("status poll failed: {}", err);
                                degraded.set(true);
                            }
                        }
                    });
                }
            };
            *status_poll.borrow_mut() = Some(Interval::new(STATUS_POLL_MS, tick));
        })
    };

    let on_start = {
        let start_busy = start_busy.clone();
        let scrape_active = scrape_active.clone();
        let status_title = status_title.clone();
        let status_detail_text = status_detail_text.clone();
        let status_view = status_view.clone();
        let notices = notices.clone();
        let start_status_polling = start_status_polling.clone();
        Callback::from(move |_| {
            start_busy.set(true);
            let start_busy = start_busy.clone();
            let scrape_active = scrape_active.clone();
            let status_title = status_title.clone();
            let status_detail_text = status_detail_text.clone();
            let status_view = status_view.clone();
            let notices = notices.clone();
            let start_status_polling = start_status_polling.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::start_scrape().await {
                    Ok(response) if response.status == "started" => {
                        notices.dispatch(NoticeAction::Push(
                            NoticeKind::Success,
                            "Scraping started".to_string(),
                        ));
                        status_title.set("Scraping in progress...".to_string());
                        status_detail_text.set("Collecting video data".to_string());
                        status_view.set(ProgressView::default());
                        scrape_active.set(true);
                        start_status_polling.emit(());
                    }
                    Ok(response) => {
                        let message = response
                            .message
                            .unwrap_or_else(|| "scrape request refused".to_string());
                        notices.dispatch(NoticeAction::Push(
                            NoticeKind::Error,
                            format!("Error: {}", message),
                        ));
                        start_busy.set(false);
                    }
                    Err(err) => {
                        log::error!("scrape start failed: {}", err);
                        notices.dispatch(NoticeAction::Push(
                            NoticeKind::Error,
                            "Failed to start scraping".to_string(),
                        ));
                        start_busy.set(false);
                    }
                }
            });
        })
    };

    let on_stop = {
        let stop_busy = stop_busy.clone();
        let start_busy = start_busy.clone();
        let scrape_active = scrape_active.clone();
        let status_poll = status_poll.clone();
        let stats = stats.clone();
        let stats_error = stats_error.clone();
        let videos = videos.clone();
        let videos_error = videos_error.clone();
        let notices = notices.clone();
        Callback::from(move |_| {
            if !confirm_stop() {
                return;
            }
            stop_busy.set(true);
            let stop_busy = stop_busy.clone();
            let start_busy = start_busy.clone();
            let scrape_active = scrape_active.clone();
            let status_poll = status_poll.clone();
            let stats = stats.clone();
            let stats_error = stats_error.clone();
            let videos = videos.clone();
            let videos_error = videos_error.clone();
            let notices = notices.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::stop_scrape().await {
                    Ok(response) if response.status == "stopped" => {
                        status_poll.borrow_mut().take();
                        scrape_active.set(false);
                        start_busy.set(false);
                        stop_busy.set(false);

                        // Give the backend a moment to flush before reloading.
                        Timeout::new(STOP_RELOAD_DELAY_MS, move || {
                            wasm_bindgen_futures::spawn_local(async move {
                                load_videos_into(videos.clone(), videos_error.clone()).await;
                                load_stats_into(stats.clone(), stats_error.clone()).await;
                                notices.dispatch(NoticeAction::Push(
                                    NoticeKind::Info,
                                    "Scraping stopped. Data reloaded.".to_string(),
                                ));
                            });
                        })
                        .forget();
                    }
                    Ok(response) => {
                        let message = response
                            .message
                            .unwrap_or_else(|| "Unable to stop".to_string());
                        notices.dispatch(NoticeAction::Push(
                            NoticeKind::Error,
                            format!("Error: {}", message),
                        ));
                        stop_busy.set(false);
                    }
                    Err(err) => {
                        log::error!("scrape stop failed: {}", err);
                        notices.dispatch(NoticeAction::Push(
                            NoticeKind::Error,
                            "Failed to stop scraping".to_string(),
                        ));
                        stop_busy.set(false);
                    }
                }
            });
        })
    };

    let on_start_and_wait = {
        let wait_busy = wait_busy.clone();
        let open_progress_modal = open_progress_modal.clone();
        let close_modal = close_modal.clone();
        let log = log.clone();
        let log_visible = log_visible.clone();
        let stream_manager = stream_manager.clone();
        let on_log_line = on_log_line.clone();
        let stats = stats.clone();
        let stats_error = stats_error.clone();
        let videos = videos.clone();
        let videos_error = videos_error.clone();
        let notices = notices.clone();
        Callback::from(move |_| {
            wait_busy.set(true);
            open_progress_modal.emit(());
            log.dispatch(LogAction::Clear);
            log_visible.set(true);
            if let Some(handle) = streams::connect(&api::scrape_logs_url(), on_log_line.clone()) {
                stream_manager.borrow_mut().attach_log(handle);
            }

            let wait_busy = wait_busy.clone();
            let close_modal = close_modal.clone();
            let log_visible = log_visible.clone();
            let stream_manager = stream_manager.clone();
            let stats = stats.clone();
            let stats_error = stats_error.clone();
            let videos = videos.clone();
            let videos_error = videos_error.clone();
            let notices = notices.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let token = token_utils::get_stored_scrape_token();
                let outcome = api::wait_for_scrape(WAIT_TIMEOUT_SECS, token).await;

                close_modal.emit(());
                stream_manager.borrow_mut().close_log();
                log_visible.set(false);

                load_videos_into(videos.clone(), videos_error.clone()).await;
                load_stats_into(stats.clone(), stats_error.clone()).await;

                match outcome {
                    Ok(response) if response.finished => {
                        notices.dispatch(NoticeAction::Push(
                            NoticeKind::Success,
                            format!(
                                "Scraping finished: {} videos loaded",
                                response.videos_count.unwrap_or(0)
                            ),
                        ));
                    }
                    Ok(_) => {
                        notices.dispatch(NoticeAction::Push(
                            NoticeKind::Warning,
                            "Timeout reached; the scrape is still running in the background"
                                .to_string(),
                        ));
                    }
                    Err(err) => {
                        log::error!("wait for scrape failed: {}", err);
                        notices.dispatch(NoticeAction::Push(
                            NoticeKind::Error,
                            "Failed to run the scrape".to_string(),
                        ));
                    }
                }
                wait_busy.set(false);
            });
        })
    };

    let on_view_run = {
        let log = log.clone();
        let log_visible = log_visible.clone();
        let stream_manager = stream_manager.clone();
        let on_log_line = on_log_line.clone();
        let modal_open = modal_open.clone();
        let modal_view = modal_view.clone();
        let close_modal = close_modal.clone();
        Callback::from(move |run_id: String| {
            log.dispatch(LogAction::Clear);
            log_visible.set(true);
            if let Some(handle) = streams::connect(&api::run_logs_url(&run_id), on_log_line.clone())
            {
                stream_manager.borrow_mut().attach_log(handle);
            }

            // Push-driven progress for this run feeds the same modal view.
            modal_view.set(ProgressView::default());
            modal_open.set(true);
            let on_progress = {
                let modal_view = modal_view.clone();
                let close_modal = close_modal.clone();
                Callback::from(move |payload: String| {
                    match serde_json::from_str::<ProgressSnapshot>(&payload) {
                        Ok(snapshot) => {
                            modal_view.set(progress_view(&snapshot));
                            if is_terminal(&snapshot) {
                                close_modal.emit(());
                            }
                        }
                        Err(_) => {
                            // Malformed progress payloads are dropped.
                        }
                    }
                })
            };
            if let Some(handle) = streams::connect(&api::run_progress_url(&run_id), on_progress) {
                stream_manager.borrow_mut().attach_progress(handle);
            }
        })
    };

    let on_refresh_data = {
        let stats = stats.clone();
        let stats_error = stats_error.clone();
        let videos = videos.clone();
        let videos_error = videos_error.clone();
        let runs = runs.clone();
        Callback::from(move |_| {
            let stats = stats.clone();
            let stats_error = stats_error.clone();
            let videos = videos.clone();
            let videos_error = videos_error.clone();
            let runs = runs.clone();
            wasm_bindgen_futures::spawn_local(async move {
                load_stats_into(stats, stats_error).await;
                load_videos_into(videos, videos_error).await;
                load_runs_into(runs).await;
            });
        })
    };

    let on_refresh_runs = {
        let runs = runs.clone();
        Callback::from(move |_: ()| {
            let runs = runs.clone();
            wasm_bindgen_futures::spawn_local(async move {
                load_runs_into(runs).await;
            });
        })
    };

    let on_toggle_logs = {
        let log_visible = log_visible.clone();
        Callback::from(move |_| log_visible.set(!*log_visible))
    };

    let on_sort_change = {
        let sort_key = sort_key.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = event_value(&e) {
                if let Some(key) = sort_key_from_value(&value) {
                    sort_key.set(key);
                }
            }
        })
    };

    let on_limit_change = {
        let limit = limit.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = event_value(&e) {
                limit.set(value.parse().unwrap_or(DEFAULT_LIMIT));
            }
        })
    };

    let on_open_token_dialog = {
        let token_dialog_open = token_dialog_open.clone();
        Callback::from(move |_| token_dialog_open.set(true))
    };

    let on_close_token_dialog = {
        let token_dialog_open = token_dialog_open.clone();
        Callback::from(move |_: ()| token_dialog_open.set(false))
    };

    let on_save_token = {
        let token_dialog_open = token_dialog_open.clone();
        let notices = notices.clone();
        Callback::from(move |token: String| {
            if token.is_empty() {
                notices.dispatch(NoticeAction::Push(
                    NoticeKind::Warning,
                    "Enter a token before saving".to_string(),
                ));
                return;
            }
            match token_utils::store_scrape_token(&token) {
                Ok(()) => {
                    notices.dispatch(NoticeAction::Push(
                        NoticeKind::Success,
                        "Token stored locally".to_string(),
                    ));
                    token_dialog_open.set(false);
                }
                Err(err) => {
                    notices.dispatch(NoticeAction::Push(NoticeKind::Error, err));
                }
            }
        })
    };

    let on_clear_token = {
        let notices = notices.clone();
        Callback::from(move |_: ()| match token_utils::remove_scrape_token() {
            Ok(()) => {
                notices.dispatch(NoticeAction::Push(
                    NoticeKind::Info,
                    "Token removed".to_string(),
                ));
            }
            Err(err) => {
                notices.dispatch(NoticeAction::Push(NoticeKind::Error, err));
            }
        })
    };

    let on_dismiss_notice = {
        let notices = notices.clone();
        Callback::from(move |id: u64| notices.dispatch(NoticeAction::Dismiss(id)))
    };

    // Initial load on mount, full teardown on unmount: no timer or stream
    // survives this page.
    {
        let stats = stats.clone();
        let stats_error = stats_error.clone();
        let videos = videos.clone();
        let videos_error = videos_error.clone();
        let runs = runs.clone();
        let status_poll = status_poll.clone();
        let modal_poll = modal_poll.clone();
        let stream_manager = stream_manager.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                load_stats_into(stats, stats_error).await;
                load_videos_into(videos, videos_error).await;
                load_runs_into(runs).await;
            });
            move || {
                status_poll.borrow_mut().take();
                modal_poll.borrow_mut().take();
                stream_manager.borrow_mut().close_all();
            }
        });
    }

    // Keep the newest log line in view.
    {
        let line_count = log.lines.len();
        use_effect_with(line_count, move |_| {
            scroll_log_to_bottom();
            || ()
        });
    }

    let visible_videos = {
        let mut sorted = sort_videos(&videos, *sort_key);
        sorted.truncate(*limit);
        sorted
    };

    let start_label = if *scrape_active {
        "Analysis running"
    } else if *start_busy {
        "Starting..."
    } else {
        "Start analysis"
    };
    let controls_locked = *start_busy || *wait_busy || *scrape_active;

    html! {
        <div class="min-h-screen bg-gray-700 p-4">
            <div class="max-w-6xl mx-auto">
                <NotificationHost notices={notices.items.clone()} on_dismiss={on_dismiss_notice} />

                <div class="bg-white rounded-lg shadow-lg p-8 mb-6">
                    <div class="flex flex-wrap justify-between items-center gap-4">
                        <h1 class="text-3xl font-bold text-gray-800">
                            {"YouTube Trend Psychology"}
                        </h1>
                        <div class="flex flex-wrap gap-3">
                            <button
                                onclick={on_start}
                                disabled={controls_locked}
                                class="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700 disabled:opacity-50"
                            >
                                { start_label }
                            </button>
                            <button
                                onclick={on_start_and_wait}
                                disabled={controls_locked}
                                class="px-4 py-2 bg-indigo-600 text-white rounded hover:bg-indigo-700 disabled:opacity-50"
                            >
                                { if *wait_busy { "Waiting for completion..." } else { "Start and watch" } }
                            </button>
                            {
                                if *scrape_active {
                                    html! {
                                        <button
                                            onclick={on_stop}
                                            disabled={*stop_busy}
                                            class="px-4 py-2 bg-red-600 text-white rounded hover:bg-red-700 disabled:opacity-50"
                                        >
                                            { if *stop_busy { "Stopping..." } else { "Stop analysis" } }
                                        </button>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                            <button
                                onclick={on_refresh_data}
                                class="px-4 py-2 bg-gray-200 text-gray-800 rounded hover:bg-gray-300"
                            >
                                {"Refresh data"}
                            </button>
                            <button
                                onclick={on_toggle_logs}
                                class="px-4 py-2 bg-gray-200 text-gray-800 rounded hover:bg-gray-300"
                            >
                                { if *log_visible { "Hide logs" } else { "Show logs" } }
                            </button>
                            <button
                                onclick={on_open_token_dialog}
                                class="px-4 py-2 bg-gray-200 text-gray-800 rounded hover:bg-gray-300"
                            >
                                {"Token"}
                            </button>
                        </div>
                    </div>
                </div>

                {
                    if *scrape_active {
                        html! {
                            <StatusBar
                                title={(*status_title).clone()}
                                detail={(*status_detail_text).clone()}
                                view={(*status_view).clone()}
                                degraded={*degraded}
                            />
                        }
                    } else {
                        html! {}
                    }
                }

                <div class="bg-white rounded-lg shadow-lg p-8 mb-6">
                    <h2 class="text-xl font-bold text-gray-800 mb-4">{"Statistics"}</h2>
                    {
                        if let Some(message) = &*stats_error {
                            html! { <div class="text-red-600">{ message }</div> }
                        } else if let Some(summary) = &*stats {
                            if summary.total == 0 {
                                html! {
                                    <div class="text-gray-500">
                                        {"No data available yet. Start a scraping run to collect some."}
                                    </div>
                                }
                            } else {
                                html! { <StatsGrid stats={summary.clone()} /> }
                            }
                        } else {
                            html! { <div class="text-gray-500">{"Loading statistics..."}</div> }
                        }
                    }
                </div>

                {
                    if *log_visible {
                        html! {
                            <LogPanel
                                lines={log.lines.clone()}
                                download_url={api::logs_download_url()}
                            />
                        }
                    } else {
                        html! {}
                    }
                }

                <RunsPanel runs={(*runs).clone()} on_view={on_view_run} on_refresh={on_refresh_runs} />

                <div class="bg-white rounded-lg shadow-lg p-8">
                    <div class="flex flex-wrap justify-between items-center mb-4 gap-4">
                        <h2 class="text-xl font-bold text-gray-800">{"Top videos"}</h2>
                        <div class="flex gap-4">
                            <label class="text-sm text-gray-600">
                                {"Sort by "}
                                <select onchange={on_sort_change} class="border rounded px-2 py-1">
                                    {
                                        for SortKey::all_variants().into_iter().map(|key| {
                                            let value = sort_key_value(&key).to_string();
                                            html! {
                                                <option value={value} selected={key == *sort_key}>
                                                    { key.display_name() }
                                                </option>
                                            }
                                        })
                                    }
                                </select>
                            </label>
                            <label class="text-sm text-gray-600">
                                {"Show "}
                                <select onchange={on_limit_change} class="border rounded px-2 py-1">
                                    {
                                        for [10usize, 20, 50, 100].into_iter().map(|n| {
                                            html! {
                                                <option value={n.to_string()} selected={n == *limit}>
                                                    { n.to_string() }
                                                </option>
                                            }
                                        })
                                    }
                                </select>
                            </label>
                        </div>
                    </div>
                    {
                        if let Some(message) = &*videos_error {
                            html! { <div class="text-red-600 mb-4">{ message }</div> }
                        } else {
                            html! {}
                        }
                    }
                    <VideoList videos={visible_videos} />
                </div>
            </div>

            {
                if *modal_open {
                    html! { <ProgressModal view={(*modal_view).clone()} on_close={close_modal.clone()} /> }
                } else {
                    html! {}
                }
            }
            {
                if *token_dialog_open {
                    html! {
                        <TokenDialog
                            on_save={on_save_token}
                            on_clear={on_clear_token}
                            on_close={on_close_token_dialog}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
